use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use anyhow::{Context, Result};
use image::{ImageFormat, RgbaImage};

/// Loads an image from disk and normalizes it to RGBA, whatever the
/// source channel layout was.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let img =
        image::open(path).with_context(|| format!("Failed to open icon: {}", path.display()))?;
    Ok(img.to_rgba8())
}

/// Writes an RGBA image to disk as PNG, overwriting any existing file.
pub fn save_png(img: &RgbaImage, path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    img.write_to(&mut BufWriter::new(file), ImageFormat::Png)
        .with_context(|| format!("Failed to encode {}", path.display()))?;
    Ok(())
}
