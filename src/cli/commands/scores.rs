//! Scores command - Print a player's score history

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::CsvScoreRepository,
    app::DEFAULT_SCORES_PATH,
    cli::output::{format_points, print_kv, print_subsection},
    ports::ScoreRepository,
};

#[derive(Parser, Debug)]
#[command(about = "Show a player's score history")]
pub struct ScoresArgs {
    /// Player name
    pub username: String,

    /// Score history file
    #[arg(long, default_value = DEFAULT_SCORES_PATH)]
    pub scores: PathBuf,
}

pub fn execute(args: ScoresArgs) -> Result<()> {
    let repository = CsvScoreRepository::new(&args.scores)?;
    let history = repository.history(&args.username)?;

    print_subsection(&format!("Scores for {}", args.username));
    if history.is_empty() {
        println!("  No games recorded yet.");
    }
    for (game, record) in history.iter().enumerate() {
        println!(
            "  #{:<4} {:>8} {:>10}",
            game + 1,
            format_points(record.last_score),
            format_points(record.score_total)
        );
    }
    print_kv("Total score", &format_points(repository.user_score(&args.username)?));
    Ok(())
}
