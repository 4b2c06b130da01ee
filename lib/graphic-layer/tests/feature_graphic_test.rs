// cargo test -p graphic-layer --test feature_graphic_test

use graphic_layer::{
    ACCENT, FeatureGraphic, FeatureGraphicConfig, HEIGHT, WIDTH, font::FontSource,
};
use anyhow::Result;
use image::{ImageReader, Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

fn font_fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/data/DejaVuSans-Bold.ttf")
}

fn hermetic(dir: &Path) -> FeatureGraphic {
    FeatureGraphic::new(
        FeatureGraphicConfig::new()
            .with_font_candidates(vec![dir.join("no-such-font.ttf")])
            .with_logo_path(dir.join("public").join("logo-dark.png"))
            .with_output_path(dir.join("feature-graphic.png")),
    )
}

fn close_to(pixel: &Rgb<u8>, expected: &Rgb<u8>, tolerance: u8) -> bool {
    pixel
        .0
        .iter()
        .zip(expected.0.iter())
        .all(|(a, b)| a.abs_diff(*b) <= tolerance)
}

fn decode(path: &Path) -> Result<RgbImage> {
    Ok(ImageReader::open(path)?.decode()?.to_rgb8())
}

#[test]
fn test_generate_without_logo_or_fonts() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let graphic = hermetic(dir.path());

    let composition = graphic.generate()?;
    assert_eq!(composition.layout.font_source, FontSource::Builtin);
    assert_eq!(composition.layout.logo, None);

    let output = dir.path().join("feature-graphic.png");
    assert!(output.exists());

    let image = decode(&output)?;
    assert_eq!(image.dimensions(), (WIDTH, HEIGHT));
    assert_eq!(image, composition.canvas);

    // Accent bars survive the stripe overlay within blending error
    for y in (0..4).chain(HEIGHT - 4..HEIGHT) {
        for x in [0, 300, WIDTH / 2, WIDTH - 1] {
            assert!(close_to(image.get_pixel(x, y), &ACCENT, 2), "({x}, {y})");
        }
    }

    // Square, circle and side rectangle outlines
    for (x, y) in [(874, 100), (974, 100), (100, 350), (50, 400), (30, 250), (80, 250)] {
        assert_eq!(image.get_pixel(x, y), &ACCENT, "({x}, {y})");
    }

    Ok(())
}

#[test]
fn test_text_is_centered() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let layout = hermetic(dir.path()).compose()?.layout;

    assert_eq!(layout.title, ((WIDTH as i32 - layout.title_width as i32) / 2, 150));
    assert_eq!(
        layout.subtitle,
        ((WIDTH as i32 - layout.subtitle_width as i32) / 2, 210)
    );

    Ok(())
}

#[test]
fn test_truetype_font_is_used_and_centered() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let fixture = font_fixture();
    let graphic = FeatureGraphic::new(
        FeatureGraphicConfig::new()
            .with_font_candidates(vec![dir.path().join("no-such-font.ttf"), fixture.clone()])
            .with_logo_path(dir.path().join("logo-dark.png"))
            .with_output_path(dir.path().join("feature-graphic.png")),
    );

    let composition = graphic.compose()?;
    let layout = &composition.layout;

    assert_eq!(layout.font_source, FontSource::File(fixture));
    assert!(layout.title_width > 0 && layout.title_width < WIDTH);
    assert!(layout.subtitle_width > 0 && layout.subtitle_width < WIDTH);
    assert_eq!(
        layout.title,
        ((WIDTH as i32 - layout.title_width as i32).div_euclid(2), 150)
    );
    assert_eq!(
        layout.subtitle,
        ((WIDTH as i32 - layout.subtitle_width as i32).div_euclid(2), 210)
    );

    let white = Rgb([255, 255, 255]);
    let lit = (150..210)
        .flat_map(|y| (0..WIDTH).map(move |x| (x, y)))
        .filter(|&(x, y)| composition.canvas.get_pixel(x, y) == &white)
        .count();
    assert!(lit > 0);

    Ok(())
}

#[test]
fn test_logo_shifts_text() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let public = dir.path().join("public");
    std::fs::create_dir_all(&public)?;

    let mut logo = RgbaImage::from_pixel(400, 100, Rgba([255, 255, 255, 255]));
    for x in 0..40 {
        logo.put_pixel(x, 0, Rgba([0, 0, 0, 0]));
    }
    logo.save(public.join("logo-dark.png"))?;

    let composition = hermetic(dir.path()).compose()?;
    let placement = composition.layout.logo.expect("logo placed");

    assert_eq!((placement.width, placement.height), (200, 50));
    assert_eq!((placement.x, placement.y), (412, 100));
    assert_eq!(composition.layout.title.1, 100 + 50 + 40);
    assert_eq!(composition.layout.subtitle.1, 190 + 60);
    assert_eq!(composition.canvas.get_pixel(512, 125), &Rgb([255, 255, 255]));

    Ok(())
}

#[test]
fn test_corrupt_logo_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let public = dir.path().join("public");
    std::fs::create_dir_all(&public)?;
    std::fs::write(public.join("logo-dark.png"), b"broken")?;

    assert!(hermetic(dir.path()).generate().is_err());
    Ok(())
}

#[test]
fn test_unwritable_output_fails() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let graphic = FeatureGraphic::new(
        FeatureGraphicConfig::new()
            .with_font_candidates(vec![])
            .with_logo_path(dir.path().join("logo-dark.png"))
            .with_output_path(dir.path().join("missing-dir").join("feature-graphic.png")),
    );

    assert!(graphic.generate().is_err());
    Ok(())
}

#[test]
fn test_generation_is_deterministic() -> Result<()> {
    let first = tempfile::tempdir()?;
    let second = tempfile::tempdir()?;

    hermetic(first.path()).generate()?;
    hermetic(second.path()).generate()?;

    let a = std::fs::read(first.path().join("feature-graphic.png"))?;
    let b = std::fs::read(second.path().join("feature-graphic.png"))?;
    assert_eq!(a, b);
    Ok(())
}
