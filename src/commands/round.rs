use std::path::{Path, PathBuf};

use anyhow::Result;
use colored::Colorize;

use crate::icon;
use crate::rounding;

pub fn run(input: &Path, output: Option<&Path>, in_place: bool) -> Result<()> {
    let img = icon::load_rgba(input)?;
    let (width, height) = img.dimensions();
    let radius = rounding::corner_radius(width, height);

    let rounded = rounding::round_corners(&img);

    let dest = if in_place {
        input.to_path_buf()
    } else {
        output.map(Path::to_path_buf).unwrap_or_else(|| default_output(input))
    };
    icon::save_png(&rounded, &dest)?;

    println!(
        "{} Rounded {}x{} icon (radius {}px) -> {}",
        "✓".green(),
        width,
        height,
        radius,
        dest.display()
    );

    Ok(())
}

/// `<stem>_rounded.png` next to the input.
pub fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "icon".into());
    input.with_file_name(format!("{stem}_rounded.png"))
}
