use crate::{ACCENT, GraphicError, GraphicResult, Layer};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage};
use imageproc::{
    drawing::draw_hollow_rect_mut,
    rect::Rect,
};

/// Inclusive bounding box `(x0, y0)..=(x1, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Bounds {
    fn inset(&self, by: i32) -> Option<Rect> {
        let width = self.x1 - self.x0 + 1 - 2 * by;
        let height = self.y1 - self.y0 + 1 - 2 * by;

        (width > 0 && height > 0)
            .then(|| Rect::at(self.x0 + by, self.y0 + by).of_size(width as u32, height as u32))
    }
}

/// Decorative outlines: a square top-right, a circle bottom-left and a
/// tall rectangle on the left edge.
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct OutlineShapesConfig {
    #[derivative(Default(value = "ACCENT"))]
    pub color: Rgb<u8>,

    #[derivative(Default(value = "2"))]
    pub stroke: u32,
}

impl OutlineShapesConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn square(&self, width: u32, _height: u32) -> Bounds {
        let w = width as i32;
        Bounds {
            x0: w - 150,
            y0: 50,
            x1: w - 50,
            y1: 150,
        }
    }

    pub fn circle(&self, _width: u32, height: u32) -> Bounds {
        let h = height as i32;
        Bounds {
            x0: 50,
            y0: h - 150,
            x1: 150,
            y1: h - 50,
        }
    }

    pub fn side_rect(&self, _width: u32, _height: u32) -> Bounds {
        Bounds {
            x0: 30,
            y0: 200,
            x1: 80,
            y1: 300,
        }
    }
}

impl Layer for OutlineShapesConfig {
    fn draw(&self, canvas: &mut RgbImage) -> GraphicResult<()> {
        if self.stroke == 0 {
            return Err(GraphicError::InvalidParameter(
                "outline stroke must be at least one pixel".to_string(),
            ));
        }

        let (width, height) = canvas.dimensions();

        // Strokes grow inward from the bounding box
        for i in 0..self.stroke as i32 {
            for bounds in [self.square(width, height), self.side_rect(width, height)] {
                if let Some(rect) = bounds.inset(i) {
                    draw_hollow_rect_mut(canvas, rect, self.color);
                }
            }
        }

        self.draw_ring(canvas, self.circle(width, height));
        Ok(())
    }
}

impl OutlineShapesConfig {
    /// Whether `(x, y)` lies on the stroke of the circle inscribed in `bounds`:
    /// its distance from the center is in `[r - stroke + 0.5, r + 0.5)`.
    pub fn on_ring(&self, bounds: Bounds, x: i32, y: i32) -> bool {
        // Doubled coordinates keep the half-pixel limits in integers
        let (cx2, cy2) = (bounds.x0 + bounds.x1, bounds.y0 + bounds.y1);
        let r2 = bounds.x1 - bounds.x0;
        let (dx, dy) = ((2 * x - cx2) as i64, (2 * y - cy2) as i64);
        let dist = dx * dx + dy * dy;

        let outer = (r2 + 1) as i64;
        let inner = (r2 - 2 * self.stroke as i32 + 1).max(0) as i64;

        dist >= inner * inner && dist < outer * outer
    }

    fn draw_ring(&self, canvas: &mut RgbImage, bounds: Bounds) {
        let (width, height) = (canvas.width() as i32, canvas.height() as i32);

        for y in bounds.y0.max(0)..=bounds.y1.min(height - 1) {
            for x in bounds.x0.max(0)..=bounds.x1.min(width - 1) {
                if self.on_ring(bounds, x, y) {
                    canvas.put_pixel(x as u32, y as u32, self.color);
                }
            }
        }
    }
}
