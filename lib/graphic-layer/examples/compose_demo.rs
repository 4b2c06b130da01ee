/// Compose the feature graphic into tmp/ without touching the working tree
use anyhow::Result;
use graphic_layer::{FeatureGraphic, FeatureGraphicConfig};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let graphic = FeatureGraphic::new(
        FeatureGraphicConfig::new().with_output_path(output_dir.join("feature-graphic.png")),
    );
    let composition = graphic.generate()?;

    println!("✓ Generated {}", graphic.output_path().display());
    println!("  Title at {:?}", composition.layout.title);
    println!("  Subtitle at {:?}", composition.layout.subtitle);
    println!("  Fonts: {:?}", composition.layout.font_source);

    Ok(())
}
