use anyhow::Result;
use clap::Parser;
use icontool::cli::{Cli, Commands};
use icontool::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Round {
            input,
            output,
            in_place,
        } => commands::round::run(input, output.as_deref(), *in_place),
        Commands::Prepare {
            input,
            out_dir,
            round,
        } => commands::prepare::run(input, out_dir, *round),
    }
}
