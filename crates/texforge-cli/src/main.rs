//! texforge - batch image-to-DDS texture conversion.
//!
//! This binary converts raster images into block-compressed DDS texture
//! sets: a base color map plus optional normal and roughness/specular
//! maps.

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::process::ExitCode;

use texforge_cli::commands;

/// texforge - image to DDS texture set converter
#[derive(Parser)]
#[command(name = "texforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert images to DDS texture sets (base color + optional maps)
    Convert(commands::convert::ConvertArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Convert(args) => commands::convert::run(&args),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::from(1)
        }
    }
}
