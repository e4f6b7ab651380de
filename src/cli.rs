use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "icontool",
    about = "Round icon corners and prepare multi-size platform icon sets"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Apply a rounded-rectangle alpha mask to an icon's corners
    Round {
        /// Source image (any decodable raster format)
        input: PathBuf,

        /// Destination PNG (default: <stem>_rounded.png next to the input)
        #[arg(short, long, conflicts_with = "in_place")]
        output: Option<PathBuf>,

        /// Overwrite the source file instead of writing a new one
        #[arg(long, conflicts_with = "output")]
        in_place: bool,
    },

    /// Generate a master PNG, a macOS iconset directory, and a Windows ICO
    Prepare {
        /// Source image (any decodable raster format)
        input: PathBuf,

        /// Output directory (created if missing)
        #[arg(long, default_value = "build")]
        out_dir: PathBuf,

        /// Round the icon's corners before resizing
        #[arg(long)]
        round: bool,
    },
}
