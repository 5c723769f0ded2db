//! Cardsort CLI
//!
//! Sorts game character-card images by the vendor markers embedded in
//! their bytes: `sort` routes a whole directory into per-product,
//! per-category folders, `inspect` classifies a single file.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

mod cli;

#[derive(Parser, Debug)]
#[command(
    name = "cardsort",
    about = "Sort game character cards by their embedded vendor markers"
)]
struct Cli {
    /// Enable verbose logging (debug to stderr)
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify cards in a directory and move them into per-category folders
    Sort {
        /// The directory to search for cards
        target_dir: PathBuf,

        /// The directory where sorted cards are placed
        output_dir: PathBuf,

        /// Search subdirectories for cards as well
        #[arg(short, long)]
        recurse: bool,

        /// Report what would be moved without moving anything
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify a single card and print its product/category
    Inspect {
        /// Card file to inspect
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = cardsort::logging::init_logging(cli.verbose) {
        eprintln!("Failed to initialize logging: {}", err);
        return ExitCode::FAILURE;
    }

    let result = match cli.command {
        Commands::Sort {
            target_dir,
            output_dir,
            recurse,
            dry_run,
            json,
        } => cli::sort::run(cli::sort::SortArgs {
            target_dir,
            output_dir,
            recurse,
            dry_run,
            json,
        }),
        Commands::Inspect { file, json } => {
            cli::inspect::run(cli::inspect::InspectArgs { file, json })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}
