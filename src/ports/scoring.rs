//! Scoring ports: score storage and the per-round scoreboard.

use serde::{Deserialize, Serialize};

use crate::Result;

/// One saved game in a player's score history
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub username: String,
    /// Points won or lost in the game
    pub last_score: i64,
    /// Running total after the game
    pub score_total: i64,
}

/// Storage backend for player scores.
pub trait ScoreRepository {
    fn user_exists(&self, username: &str) -> Result<bool>;

    /// Register a player with a zero total.
    fn create_user(&self, username: &str) -> Result<()>;

    /// Current total for a player, 0 if the player has no saved games.
    fn user_score(&self, username: &str) -> Result<i64>;

    /// Append a game to the player's history.
    fn save_score(&self, username: &str, last_score: i64, score_total: i64) -> Result<()>;

    /// Every saved row for a player, oldest first.
    fn history(&self, username: &str) -> Result<Vec<ScoreRecord>>;
}

/// Receives the events a round produces.
///
/// The game core only reports which event happened; the user-facing layer
/// forwards them here.
pub trait Scoreboard {
    /// A question was asked and answered.
    fn record_question_asked(&mut self);

    /// The guess was right.
    fn record_victory(&mut self) -> Result<()>;

    /// The guess was wrong and the game had to learn.
    fn record_loss(&mut self) -> Result<()>;
}
