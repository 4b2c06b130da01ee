use crate::{ACCENT, GraphicError, GraphicResult, Layer};
use derivative::Derivative;
use derive_setters::Setters;
use image::{DynamicImage, Rgb, RgbImage, Rgba, RgbaImage, imageops};
use imageproc::{drawing::draw_polygon_mut, point::Point};

/// Semi-transparent diagonal stripes, slanted by the canvas height
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct StripeConfig {
    /// Horizontal distance between the starts of two stripes
    #[derivative(Default(value = "100"))]
    pub spacing: u32,

    #[derivative(Default(value = "50"))]
    pub stripe_width: u32,

    #[derivative(Default(value = "ACCENT"))]
    pub color: Rgb<u8>,

    #[derivative(Default(value = "20"))]
    pub alpha: u8,
}

impl StripeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parallelograms covering the canvas: each starts above the first row
    /// at `x` and ends on the last row shifted right by `height`.
    pub fn stripe_polygons(&self, width: u32, height: u32) -> GraphicResult<Vec<[Point<i32>; 4]>> {
        if self.spacing == 0 {
            return Err(GraphicError::InvalidParameter(
                "stripe spacing must be positive".to_string(),
            ));
        }

        let (w, h, sw) = (width as i32, height as i32, self.stripe_width as i32);

        Ok((-h..w + h)
            .step_by(self.spacing as usize)
            .map(|x| {
                [
                    Point::new(x, 0),
                    Point::new(x + sw, 0),
                    Point::new(x + h + sw, h),
                    Point::new(x + h, h),
                ]
            })
            .collect())
    }

    /// Transparent buffer holding only the tinted stripes.
    pub fn render_overlay(&self, width: u32, height: u32) -> GraphicResult<RgbaImage> {
        let mut overlay = RgbaImage::new(width, height);
        let Rgb([r, g, b]) = self.color;
        let tint = Rgba([r, g, b, self.alpha]);

        for polygon in self.stripe_polygons(width, height)? {
            draw_polygon_mut(&mut overlay, &polygon, tint);
        }

        Ok(overlay)
    }
}

impl Layer for StripeConfig {
    fn draw(&self, canvas: &mut RgbImage) -> GraphicResult<()> {
        let (width, height) = canvas.dimensions();
        let overlay = self.render_overlay(width, height)?;

        let mut composed = DynamicImage::ImageRgb8(std::mem::take(canvas)).into_rgba8();
        imageops::overlay(&mut composed, &overlay, 0, 0);
        *canvas = DynamicImage::ImageRgba8(composed).into_rgb8();

        log::debug!("composited stripe overlay onto {width}x{height} canvas");
        Ok(())
    }
}
