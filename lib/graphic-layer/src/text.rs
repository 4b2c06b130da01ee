use crate::{GraphicResult, Layer, font::Typeface};
use image::{Rgb, RgbImage};

/// A horizontally centered line drawn over an offset black shadow.
#[derive(Debug)]
pub struct ShadowedText<'a> {
    pub text: &'a str,
    pub typeface: &'a Typeface,
    pub top: i32,
    pub fill: Rgb<u8>,
    pub shadow: Rgb<u8>,
    pub shadow_offset: i32,
}

impl<'a> ShadowedText<'a> {
    pub fn new(text: &'a str, typeface: &'a Typeface, top: i32, fill: Rgb<u8>) -> Self {
        Self {
            text,
            typeface,
            top,
            fill,
            shadow: Rgb([0, 0, 0]),
            shadow_offset: 2,
        }
    }

    pub fn width(&self) -> u32 {
        self.typeface.measure(self.text).0
    }

    /// Left edge that centers the measured text; negative when it overflows.
    pub fn centered_x(&self, canvas_width: u32) -> i32 {
        (canvas_width as i32 - self.width() as i32).div_euclid(2)
    }

    /// Top-left corner the text is drawn at on a canvas `canvas_width` wide.
    pub fn origin(&self, canvas_width: u32) -> (i32, i32) {
        (self.centered_x(canvas_width), self.top)
    }
}

impl Layer for ShadowedText<'_> {
    fn draw(&self, canvas: &mut RgbImage) -> GraphicResult<()> {
        let (x, y) = self.origin(canvas.width());
        let offset = self.shadow_offset;

        self.typeface
            .draw(canvas, self.text, x + offset, y + offset, self.shadow);
        self.typeface.draw(canvas, self.text, x, y, self.fill);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ACCENT, WIDTH};

    #[test]
    fn test_centered_x() {
        let face = Typeface::builtin(48.0);
        let text = ShadowedText::new("Your Fitness Journey Starts Here", &face, 150, Rgb([255, 255, 255]));

        assert_eq!(text.width(), 32 * 24);
        assert_eq!(text.centered_x(WIDTH), (WIDTH as i32 - 768) / 2);
        assert_eq!(text.origin(WIDTH), (128, 150));
    }

    #[test]
    fn test_centered_x_odd_remainder_floors() {
        let face = Typeface::builtin(8.0);
        let text = ShadowedText::new("abc", &face, 0, ACCENT);

        assert_eq!(text.centered_x(25), 0);
        // Overflowing text starts left of the canvas
        assert_eq!(text.centered_x(23), -1);
    }

    #[test]
    fn test_shadow_under_fill() {
        let face = Typeface::builtin(16.0);
        let white = Rgb([255, 255, 255]);
        let mut canvas = RgbImage::from_pixel(40, 20, Rgb([40, 40, 40]));

        ShadowedText::new("I", &face, 4, white).draw(&mut canvas).unwrap();

        let lit: Vec<_> = canvas
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == white)
            .map(|(x, y, _)| (x, y))
            .collect();
        assert!(!lit.is_empty());

        // The shadow shows wherever the offset glyph is not covered by the fill
        let shadowed = canvas.pixels().filter(|p| **p == Rgb([0, 0, 0])).count();
        assert!(shadowed > 0);

        for (x, y) in lit {
            assert!((16..24).contains(&x) && (4..12).contains(&y), "({x}, {y})");
        }
    }
}
