//! CLI frontend for the Taleweaver adventure engine.

mod commands;
mod display;
mod prompt;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "tale",
    about = "Taleweaver — a choose-your-own-adventure story engine",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a story interactively (accepts a story or bookmark file)
    Play {
        /// Story or bookmark file
        file: PathBuf,

        /// RNG seed for weighted transitions
        #[arg(short, long, default_value = "6")]
        seed: u64,
    },

    /// Parse a story or bookmark file and report diagnostics
    Check {
        /// Story or bookmark file
        file: PathBuf,
    },

    /// List the rooms of a story
    Rooms {
        /// Story or bookmark file
        file: PathBuf,
    },

    /// Export the story graph as JSON
    Export {
        /// Story or bookmark file
        file: PathBuf,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { file, seed } => commands::play::run(&file, seed),
        Commands::Check { file } => commands::check::run(&file),
        Commands::Rooms { file } => commands::rooms::run(&file),
        Commands::Export { file, output } => commands::export::run(&file, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
