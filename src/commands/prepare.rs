use std::path::Path;

use anyhow::Result;
use colored::Colorize;

use crate::icon;
use crate::iconset;
use crate::rounding;

pub fn run(input: &Path, out_dir: &Path, round: bool) -> Result<()> {
    let mut img = icon::load_rgba(input)?;

    if round {
        img = rounding::round_corners(&img);
        println!("{} Applied rounded corners", "✓".green());
    }

    let written = iconset::write_icon_set(&img, out_dir)?;
    for path in &written {
        println!("{} Wrote {}", "✓".green(), path.display());
    }

    println!(
        "\n{} {} files under {}",
        "✓".green(),
        written.len(),
        out_dir.display()
    );
    println!(
        "{} Assemble an ICNS with: iconutil -c icns {}",
        "ℹ".blue(),
        out_dir.join("icon.iconset").display()
    );

    Ok(())
}
