//! Generates the 1024x500 Google Play feature graphic into the current
//! directory, picking up `public/logo-dark.png` when it exists.

use anyhow::{Context, Result};
use graphic_layer::{FeatureGraphic, FeatureGraphicConfig, HEIGHT, WIDTH};

/// Sets up a logger that prints timestamp, level, file name, line number
/// and message. Filtering follows `RUST_LOG`.
fn init_logger() {
    use std::io::Write;

    env_logger::builder()
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

fn main() -> Result<()> {
    init_logger();
    log::debug!("start...");

    let graphic = FeatureGraphic::new(FeatureGraphicConfig::default());
    graphic
        .generate()
        .with_context(|| format!("failed to generate {}", graphic.output_path().display()))?;

    println!("Feature graphic saved as {}", graphic.output_path().display());
    println!("Dimensions: {WIDTH}x{HEIGHT} pixels");
    println!("Ready for Google Play Console upload!");

    log::debug!("exit...");
    Ok(())
}
