//! The full feature graphic: background, stripes, optional logo, shadowed
//! title and subtitle, outline shapes, written out as a PNG.

use crate::{
    ACCENT, GraphicLayer, GraphicResult, HEIGHT, Layer, WIDTH,
    font::{self, FontSource},
    logo::{self, LogoConfig, LogoPlacement},
    shape::OutlineShapesConfig,
    text::ShadowedText,
};
use derivative::Derivative;
use derive_setters::Setters;
use image::{
    ExtendedColorType, ImageEncoder, Rgb, RgbImage,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};
use std::{
    fs::File,
    io::BufWriter,
    path::{Path, PathBuf},
};

pub const TITLE: &str = "Your Fitness Journey Starts Here";
pub const SUBTITLE: &str = "Personal Training \u{2022} Group Classes \u{2022} Nutrition";

pub const TITLE_SIZE: f32 = 48.0;
pub const SUBTITLE_SIZE: f32 = 28.0;

/// Distance from the title's top to the subtitle's top
pub const SUBTITLE_OFFSET: i32 = 60;

const TITLE_FILL: Rgb<u8> = Rgb([255, 255, 255]);

/// Filesystem inputs and output of a run
#[derive(Debug, Clone, Derivative, Setters)]
#[derivative(Default)]
#[setters(prefix = "with_")]
#[non_exhaustive]
pub struct FeatureGraphicConfig {
    #[derivative(Default(value = "font::default_font_candidates()"))]
    pub font_candidates: Vec<PathBuf>,

    #[derivative(Default(value = "PathBuf::from(\"public/logo-dark.png\")"))]
    pub logo_path: PathBuf,

    #[derivative(Default(value = "PathBuf::from(\"feature-graphic.png\")"))]
    pub output_path: PathBuf,
}

impl FeatureGraphicConfig {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Where everything ended up on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub title: (i32, i32),
    pub title_width: u32,
    pub subtitle: (i32, i32),
    pub subtitle_width: u32,
    pub logo: Option<LogoPlacement>,
    pub font_source: FontSource,
}

#[derive(Debug, Clone)]
pub struct Composition {
    pub canvas: RgbImage,
    pub layout: Layout,
}

#[derive(Debug, Clone, Default)]
pub struct FeatureGraphic {
    config: FeatureGraphicConfig,
}

impl FeatureGraphic {
    pub fn new(config: FeatureGraphicConfig) -> Self {
        Self { config }
    }

    pub fn output_path(&self) -> &Path {
        &self.config.output_path
    }

    /// Paint every step onto a fresh canvas.
    pub fn compose(&self) -> GraphicResult<Composition> {
        let mut canvas = RgbImage::new(WIDTH, HEIGHT);

        for layer in GraphicLayer::background() {
            layer.draw(&mut canvas)?;
        }

        let fonts = font::resolve_fonts(&self.config.font_candidates, TITLE_SIZE, SUBTITLE_SIZE);

        let logo_config = LogoConfig::new();
        let placement = logo::load(&self.config.logo_path)?
            .map(|logo| logo_config.place(&mut canvas, &logo));
        let text_top = logo_config.text_top(placement.as_ref()) as i32;

        let title = ShadowedText::new(TITLE, &fonts.title, text_top, TITLE_FILL);
        let subtitle = ShadowedText::new(
            SUBTITLE,
            &fonts.subtitle,
            text_top + SUBTITLE_OFFSET,
            ACCENT,
        );
        title.draw(&mut canvas)?;
        subtitle.draw(&mut canvas)?;

        GraphicLayer::Shapes(OutlineShapesConfig::new()).draw(&mut canvas)?;

        let layout = Layout {
            title: title.origin(WIDTH),
            title_width: title.width(),
            subtitle: subtitle.origin(WIDTH),
            subtitle_width: subtitle.width(),
            logo: placement,
            font_source: fonts.source,
        };
        log::debug!("{layout:?}");

        Ok(Composition { canvas, layout })
    }

    /// Encode the canvas as an RGB PNG at the configured output path.
    pub fn save(&self, composition: &Composition) -> GraphicResult<()> {
        let canvas = &composition.canvas;
        let writer = BufWriter::new(File::create(&self.config.output_path)?);

        // PNG is lossless; best compression stands in for the quality setting
        PngEncoder::new_with_quality(writer, CompressionType::Best, FilterType::Adaptive).write_image(
            canvas.as_raw(),
            canvas.width(),
            canvas.height(),
            ExtendedColorType::Rgb8,
        )?;

        log::info!("saved {}", self.config.output_path.display());
        Ok(())
    }

    pub fn generate(&self) -> GraphicResult<Composition> {
        let composition = self.compose()?;
        self.save(&composition)?;
        Ok(composition)
    }
}
