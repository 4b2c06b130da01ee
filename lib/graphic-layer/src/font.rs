//! Typeface resolution for the title and subtitle.
//!
//! Candidates are tried in order; the first file that parses at both sizes
//! wins. Missing or unreadable candidates are skipped without surfacing an
//! error, and an exhausted list falls back to the built-in 8x8 bitmap face.

use crate::{GraphicError, GraphicResult};
use ab_glyph::{FontVec, PxScale};
use font8x8::{BASIC_FONTS, LATIN_FONTS, UnicodeFonts};
use image::{Rgb, RgbImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_text_mut, text_size},
    rect::Rect,
};
use std::{
    fmt, fs,
    path::{Path, PathBuf},
};

/// Well-known bold sans faces on macOS, Linux and Windows, in priority order.
pub const DEFAULT_FONT_CANDIDATES: &[&str] = &[
    "/System/Library/Fonts/Helvetica.ttc",
    "/System/Library/Fonts/Avenir.ttc",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Side length of a built-in glyph cell before scaling.
const BUILTIN_CELL: u32 = 8;

pub fn default_font_candidates() -> Vec<PathBuf> {
    DEFAULT_FONT_CANDIDATES.iter().map(PathBuf::from).collect()
}

/// A face bound to the pixel size it renders at.
pub enum Typeface {
    TrueType { font: FontVec, scale: PxScale },
    Builtin { scale: u32 },
}

impl fmt::Debug for Typeface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Typeface::TrueType { scale, .. } => f
                .debug_struct("TrueType")
                .field("scale", &(scale.x, scale.y))
                .finish(),
            Typeface::Builtin { scale } => f.debug_struct("Builtin").field("scale", scale).finish(),
        }
    }
}

impl Typeface {
    pub fn from_bytes(data: Vec<u8>, size: f32) -> GraphicResult<Self> {
        // Index 0 also selects the first face of a .ttc collection
        let font = FontVec::try_from_vec_and_index(data, 0)
            .map_err(|e| GraphicError::Font(e.to_string()))?;

        Ok(Typeface::TrueType {
            font,
            scale: PxScale::from(size),
        })
    }

    /// Built-in face sized so that a cell is roughly `size / 2` pixels tall.
    pub fn builtin(size: f32) -> Self {
        Typeface::Builtin {
            scale: (size / 16.0).round().max(1.0) as u32,
        }
    }

    pub fn is_builtin(&self) -> bool {
        matches!(self, Typeface::Builtin { .. })
    }

    /// Width and height of `text` as laid out by this face.
    pub fn measure(&self, text: &str) -> (u32, u32) {
        match self {
            Typeface::TrueType { font, scale } => text_size(*scale, font, text),
            Typeface::Builtin { scale } => {
                let cell = BUILTIN_CELL * scale;
                (text.chars().count() as u32 * cell, cell)
            }
        }
    }

    pub fn draw(&self, canvas: &mut RgbImage, text: &str, x: i32, y: i32, color: Rgb<u8>) {
        match self {
            Typeface::TrueType { font, scale } => {
                draw_text_mut(canvas, color, x, y, *scale, font, text);
            }
            Typeface::Builtin { scale } => {
                let scale = *scale;
                let advance = (BUILTIN_CELL * scale) as i32;

                for (index, c) in text.chars().enumerate() {
                    let origin_x = x + index as i32 * advance;

                    for (row, bits) in builtin_glyph(c).iter().enumerate() {
                        for col in 0..BUILTIN_CELL {
                            // Least significant bit is the leftmost pixel
                            if bits & (1 << col) == 0 {
                                continue;
                            }

                            let px = origin_x + (col * scale) as i32;
                            let py = y + (row as u32 * scale) as i32;
                            draw_filled_rect_mut(canvas, Rect::at(px, py).of_size(scale, scale), color);
                        }
                    }
                }
            }
        }
    }
}

fn builtin_glyph(c: char) -> [u8; 8] {
    BASIC_FONTS
        .get(c)
        .or_else(|| LATIN_FONTS.get(c))
        .or_else(|| match c {
            '\u{2022}' => LATIN_FONTS.get('\u{b7}'),
            _ => None,
        })
        .or_else(|| BASIC_FONTS.get('?'))
        .unwrap_or([0; 8])
}

/// Where the resolved faces came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FontSource {
    File(PathBuf),
    Builtin,
}

#[derive(Debug)]
pub struct FontPair {
    pub title: Typeface,
    pub subtitle: Typeface,
    pub source: FontSource,
}

impl FontPair {
    pub fn builtin(title_size: f32, subtitle_size: f32) -> Self {
        Self {
            title: Typeface::builtin(title_size),
            subtitle: Typeface::builtin(subtitle_size),
            source: FontSource::Builtin,
        }
    }
}

/// Pick the first candidate that loads at both sizes, or the built-in face.
pub fn resolve_fonts(candidates: &[PathBuf], title_size: f32, subtitle_size: f32) -> FontPair {
    for path in candidates {
        if !path.exists() {
            log::debug!("font candidate {} not found", path.display());
            continue;
        }

        match load_pair(path, title_size, subtitle_size) {
            Ok((title, subtitle)) => {
                log::debug!("using font {}", path.display());
                return FontPair {
                    title,
                    subtitle,
                    source: FontSource::File(path.clone()),
                };
            }
            Err(e) => log::debug!("skip font candidate {}: {e}", path.display()),
        }
    }

    log::debug!("no font candidate loaded, using built-in face");
    FontPair::builtin(title_size, subtitle_size)
}

fn load_pair(path: &Path, title_size: f32, subtitle_size: f32) -> GraphicResult<(Typeface, Typeface)> {
    let data = fs::read(path)?;
    let title = Typeface::from_bytes(data.clone(), title_size)?;
    let subtitle = Typeface::from_bytes(data, subtitle_size)?;
    Ok((title, subtitle))
}
