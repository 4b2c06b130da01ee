use crate::{ACCENT, GraphicError, GraphicResult, Layer};
use derivative::Derivative;
use derive_setters::Setters;
use image::{Rgb, RgbImage};
use imageproc::{drawing::draw_filled_rect_mut, rect::Rect};

/// Vertical grey gradient, darkest at the top row
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct GradientConfig {
    #[derivative(Default(value = "26"))]
    pub start: u8,

    /// Intensity gained between the first row and the (virtual) row `height`
    #[derivative(Default(value = "20"))]
    pub span: u8,
}

impl GradientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grey level of row `y`: `start + floor(y / height * span)`.
    pub fn intensity(&self, y: u32, height: u32) -> u8 {
        if height == 0 {
            return self.start;
        }

        let step = u64::from(y) * u64::from(self.span) / u64::from(height);
        (u64::from(self.start) + step).min(255) as u8
    }
}

impl Layer for GradientConfig {
    fn draw(&self, canvas: &mut RgbImage) -> GraphicResult<()> {
        let height = canvas.height();

        for (y, row) in canvas.enumerate_rows_mut() {
            let value = self.intensity(y, height);
            for (_, _, pixel) in row {
                *pixel = Rgb([value, value, value]);
            }
        }

        Ok(())
    }
}

/// Solid bars along the top and bottom edges
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct AccentBarsConfig {
    #[derivative(Default(value = "4"))]
    pub thickness: u32,

    #[derivative(Default(value = "ACCENT"))]
    pub color: Rgb<u8>,
}

impl AccentBarsConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Layer for AccentBarsConfig {
    fn draw(&self, canvas: &mut RgbImage) -> GraphicResult<()> {
        let (width, height) = canvas.dimensions();

        if self.thickness == 0 || self.thickness > height {
            return Err(GraphicError::InvalidParameter(format!(
                "accent bar thickness {} does not fit a canvas of height {height}",
                self.thickness
            )));
        }

        let top = Rect::at(0, 0).of_size(width, self.thickness);
        let bottom = Rect::at(0, (height - self.thickness) as i32).of_size(width, self.thickness);

        draw_filled_rect_mut(canvas, top, self.color);
        draw_filled_rect_mut(canvas, bottom, self.color);

        Ok(())
    }
}
