use crate::GraphicResult;
use derivative::Derivative;
use derive_setters::Setters;
use image::{DynamicImage, ImageReader, RgbImage, imageops};
use std::path::Path;

/// Placement rules for the optional logo and the text block beneath it
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct LogoConfig {
    /// Largest width or height the logo may occupy
    #[derivative(Default(value = "200"))]
    pub max_side: u32,

    #[derivative(Default(value = "100"))]
    pub top: u32,

    /// Gap between the logo's bottom edge and the title
    #[derivative(Default(value = "40"))]
    pub text_gap: u32,

    /// Title top when there is no logo
    #[derivative(Default(value = "150"))]
    pub fallback_text_top: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogoPlacement {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl LogoPlacement {
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Shrink `(width, height)` to fit a `max_side` square, keeping the aspect
/// ratio. Images that already fit are never enlarged.
pub fn fit_within(width: u32, height: u32, max_side: u32) -> (u32, u32) {
    if width <= max_side && height <= max_side {
        return (width, height);
    }

    let ratio = (max_side as f64 / width as f64).min(max_side as f64 / height as f64);
    let scaled = |side: u32| ((side as f64 * ratio).round() as u32).clamp(1, max_side);

    (scaled(width), scaled(height))
}

/// Decode the logo at `path`. A missing file is not an error.
pub fn load(path: &Path) -> GraphicResult<Option<DynamicImage>> {
    if !path.exists() {
        log::debug!("no logo at {}", path.display());
        return Ok(None);
    }

    let logo = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    log::debug!("loaded logo {} ({}x{})", path.display(), logo.width(), logo.height());

    Ok(Some(logo))
}

impl LogoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale the logo down, center it horizontally at `top` and paste it.
    /// The logo's own alpha channel is the paste mask when it has one.
    pub fn place(&self, canvas: &mut RgbImage, logo: &DynamicImage) -> LogoPlacement {
        let (width, height) = fit_within(logo.width(), logo.height(), self.max_side);
        let logo = if (width, height) == (logo.width(), logo.height()) {
            logo.clone()
        } else {
            logo.resize_exact(width, height, imageops::FilterType::Lanczos3)
        };

        let placement = LogoPlacement {
            x: canvas.width().saturating_sub(width) / 2,
            y: self.top,
            width,
            height,
        };

        if logo.color().has_alpha() {
            paste_masked(canvas, &logo, placement.x, placement.y);
        } else {
            imageops::replace(canvas, &logo.to_rgb8(), placement.x as i64, placement.y as i64);
        }

        placement
    }

    pub fn text_top(&self, placement: Option<&LogoPlacement>) -> u32 {
        match placement {
            Some(placement) => placement.bottom() + self.text_gap,
            None => self.fallback_text_top,
        }
    }
}

fn paste_masked(canvas: &mut RgbImage, logo: &DynamicImage, x: u32, y: u32) {
    let logo = logo.to_rgba8();

    for (lx, ly, pixel) in logo.enumerate_pixels() {
        let (cx, cy) = (x + lx, y + ly);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }

        let alpha = pixel[3] as u32;
        let target = canvas.get_pixel_mut(cx, cy);
        for i in 0..3 {
            let mixed = pixel[i] as u32 * alpha + target[i] as u32 * (255 - alpha);
            target[i] = ((mixed + 127) / 255) as u8;
        }
    }
}
