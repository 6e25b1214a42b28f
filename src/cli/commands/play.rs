//! Play command - Interactive guessing rounds on the console

use std::{io, path::PathBuf, sync::Arc};

use anyhow::Result;
use clap::Parser;

use crate::{
    adapters::ConsolePrompter,
    app::{App, DEFAULT_SCORES_PATH, GameConfig},
    cli::output::{create_spinner, format_points, print_kv, print_section},
    ports::{AnimalInfo, AnimalInfoSource, Prompter},
    round::{RoundOutcome, play_round},
};

#[derive(Parser, Debug)]
#[command(about = "Play the guessing game")]
pub struct PlayArgs {
    /// Path to the question tree file
    pub tree: PathBuf,

    /// Player name used for the score history
    pub username: String,

    /// Score history file
    #[arg(long, default_value = DEFAULT_SCORES_PATH)]
    pub scores: PathBuf,

    /// Skip Wikipedia lookups after a correct guess
    #[arg(long)]
    pub offline: bool,

    /// Wikipedia language edition
    #[arg(long, default_value = "en")]
    pub language: String,

    /// Do not warn when the tree file cannot be loaded
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

impl PlayArgs {
    fn config(&self) -> GameConfig {
        let config = GameConfig::new(&self.tree, &self.username)
            .with_scores_path(&self.scores)
            .with_language(&self.language)
            .with_verbose(!self.quiet);
        if self.offline { config.offline() } else { config }
    }
}

/// Shows a spinner while the wrapped source is working.
struct SpinnerInfo {
    inner: Arc<dyn AnimalInfoSource + Send + Sync>,
}

impl AnimalInfoSource for SpinnerInfo {
    fn describe(&self, animal: &str) -> AnimalInfo {
        let spinner = create_spinner(&format!("Looking up {animal}..."));
        let info = self.inner.describe(animal);
        spinner.finish_and_clear();
        info
    }
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let config = args.config();
    let app = App::new();

    let mut session = app.open_session(&config)?;
    let mut player = app.create_player(&config)?;
    let info = SpinnerInfo {
        inner: app.info_source(&config)?,
    };
    let mut prompter = ConsolePrompter::stdio();
    let mut stdout = io::stdout();

    print_section("Welcome to the 20 Questions Game!");
    println!("Try to think of an animal, and I'll guess it.\n");

    let mut rounds = 0;
    let mut points = 0;
    loop {
        player.score.start_round();
        let summary = play_round(
            &mut session,
            &mut prompter,
            &mut player.score,
            &info,
            &mut stdout,
        )?;

        rounds += 1;
        match (summary.outcome, player.score.banked()) {
            (RoundOutcome::Won { .. }, Some(banked)) => {
                points += banked;
                println!("\n✅ Victory! You earned {banked} points!");
            }
            (RoundOutcome::Learned { .. }, Some(banked)) => {
                points += banked;
                println!("\n❌ Game Over! You lost {} points!", -banked);
            }
            (_, None) => println!("\n⚠️  This round's points could not be saved."),
        }

        if !prompter.ask_bool("\nPlay again?")? {
            break;
        }
        println!();
    }

    print_section(&format!("Game Over, {}!", player.username));
    print_kv("Rounds played", &rounds.to_string());
    print_kv("Your score", &format_points(points));
    print_kv("Total score", &format_points(player.score.total()?));

    Ok(())
}
