//! Multi-size icon generation: a 1024px master PNG, the ten standard
//! macOS iconset entries, and a multi-frame Windows ICO. The iconset
//! directory is laid out so `iconutil -c icns` can consume it directly.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::codecs::ico::{IcoEncoder, IcoFrame};
use image::imageops::FilterType;
use image::{ExtendedColorType, RgbaImage};

use crate::icon;

/// Edge length of the master `icon.png`.
pub const MASTER_SIZE: u32 = 1024;

/// Base iconset sizes; each is emitted at 1x and 2x.
pub const ICONSET_SIZES: [u32; 5] = [16, 32, 128, 256, 512];

/// ICO frame sizes, largest first. ICO caps frame dimensions at 256.
pub const ICO_SIZES: [u32; 6] = [256, 128, 64, 48, 32, 16];

fn resized(img: &RgbaImage, size: u32) -> RgbaImage {
    image::imageops::resize(img, size, size, FilterType::Lanczos3)
}

/// Writes the full icon set under `out_dir`, creating directories as
/// needed. Returns the paths written, in order.
pub fn write_icon_set(img: &RgbaImage, out_dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    let mut written = Vec::new();

    let master = out_dir.join("icon.png");
    icon::save_png(&resized(img, MASTER_SIZE), &master)?;
    written.push(master);

    let iconset_dir = out_dir.join("icon.iconset");
    fs::create_dir_all(&iconset_dir)
        .with_context(|| format!("Failed to create {}", iconset_dir.display()))?;

    for size in ICONSET_SIZES {
        for scale in [1u32, 2] {
            let name = if scale == 1 {
                format!("icon_{size}x{size}.png")
            } else {
                format!("icon_{size}x{size}@2x.png")
            };
            let path = iconset_dir.join(name);
            icon::save_png(&resized(img, size * scale), &path)?;
            written.push(path);
        }
    }

    let ico = out_dir.join("icon.ico");
    write_ico(img, &ico)?;
    written.push(ico);

    Ok(written)
}

/// Encodes `img` as a multi-frame ICO with PNG-compressed frames.
pub fn write_ico(img: &RgbaImage, path: &Path) -> Result<()> {
    let resizes: Vec<(u32, RgbaImage)> =
        ICO_SIZES.iter().map(|&size| (size, resized(img, size))).collect();

    let mut frames = Vec::with_capacity(resizes.len());
    for (size, frame) in &resizes {
        frames.push(
            IcoFrame::as_png(frame.as_raw(), *size, *size, ExtendedColorType::Rgba8)
                .with_context(|| format!("Failed to build {size}x{size} ICO frame"))?,
        );
    }

    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    IcoEncoder::new(BufWriter::new(file))
        .encode_images(&frames)
        .with_context(|| format!("Failed to encode {}", path.display()))?;
    Ok(())
}
