pub mod background;
pub mod font;
pub mod graphic;
pub mod logo;
pub mod shape;
pub mod stripes;
pub mod text;

pub use graphic::{Composition, FeatureGraphic, FeatureGraphicConfig, Layout};

use image::{Rgb, RgbImage};

/// Canvas width of a Play Store feature graphic.
pub const WIDTH: u32 = 1024;

/// Canvas height of a Play Store feature graphic.
pub const HEIGHT: u32 = 500;

pub const ACCENT: Rgb<u8> = Rgb([239, 68, 68]);

pub type GraphicResult<T> = Result<T, GraphicError>;

#[derive(thiserror::Error, Debug)]
pub enum GraphicError {
    #[error("Font error: {0}")]
    Font(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// A single drawing step applied in place to the canvas.
pub trait Layer {
    fn draw(&self, canvas: &mut RgbImage) -> GraphicResult<()>;
}

/// The fixed-geometry steps of the composition, in the order they are painted.
#[derive(Debug, Clone)]
pub enum GraphicLayer {
    Gradient(background::GradientConfig),
    AccentBars(background::AccentBarsConfig),
    Stripes(stripes::StripeConfig),
    Shapes(shape::OutlineShapesConfig),
}

impl GraphicLayer {
    pub fn background() -> [GraphicLayer; 3] {
        [
            GraphicLayer::Gradient(background::GradientConfig::new()),
            GraphicLayer::AccentBars(background::AccentBarsConfig::new()),
            GraphicLayer::Stripes(stripes::StripeConfig::new()),
        ]
    }
}

impl Layer for GraphicLayer {
    fn draw(&self, canvas: &mut RgbImage) -> GraphicResult<()> {
        match self {
            GraphicLayer::Gradient(config) => config.draw(canvas),
            GraphicLayer::AccentBars(config) => config.draw(canvas),
            GraphicLayer::Stripes(config) => config.draw(canvas),
            GraphicLayer::Shapes(config) => config.draw(canvas),
        }
    }
}
