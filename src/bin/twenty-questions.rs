//! twenty-questions CLI - Animal guessing game that learns from its mistakes
//!
//! This CLI provides:
//! - Interactive rounds against a persistent question tree
//! - Tools to create, validate and print tree files
//! - Score history per player

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "twenty-questions")]
#[command(version, about = "Think of an animal and let the game guess it", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play guessing rounds
    Play(twenty_questions::cli::commands::play::PlayArgs),

    /// Write the starter animal tree
    Init(twenty_questions::cli::commands::init::InitArgs),

    /// Check that a tree file can be loaded
    Validate(twenty_questions::cli::commands::validate::ValidateArgs),

    /// Print a tree file as an outline
    Show(twenty_questions::cli::commands::show::ShowArgs),

    /// Show a player's score history
    Scores(twenty_questions::cli::commands::scores::ScoresArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    match cli.command {
        Commands::Play(args) => twenty_questions::cli::commands::play::execute(args),
        Commands::Init(args) => twenty_questions::cli::commands::init::execute(args),
        Commands::Validate(args) => twenty_questions::cli::commands::validate::execute(args),
        Commands::Show(args) => twenty_questions::cli::commands::show::execute(args),
        Commands::Scores(args) => twenty_questions::cli::commands::scores::execute(args),
    }
}
