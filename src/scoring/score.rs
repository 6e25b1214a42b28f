//! Per-round score bookkeeping

use std::sync::Arc;

use crate::{
    Result,
    ports::{ScoreRepository, Scoreboard},
};

/// Points earned for each question answered
pub const POINTS_PER_QUESTION: i64 = 5;

/// Tracks the points of the current round and banks them when it ends.
///
/// A victory adds the round's points to the stored total; a loss subtracts
/// them.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use twenty_questions::{adapters::InMemoryScoreRepository, ports::Scoreboard, scoring::Score};
///
/// let mut score = Score::new("alice", Arc::new(InMemoryScoreRepository::new()))?;
/// score.record_question_asked();
/// score.record_question_asked();
/// score.record_victory()?;
/// assert_eq!(score.total()?, 10);
/// # Ok::<(), twenty_questions::Error>(())
/// ```
#[derive(Clone)]
pub struct Score {
    username: String,
    repository: Arc<dyn ScoreRepository + Send + Sync>,
    round: i64,
    banked: Option<i64>,
}

impl Score {
    /// Bind to `username`, registering the player if unknown.
    pub fn new(
        username: impl Into<String>,
        repository: Arc<dyn ScoreRepository + Send + Sync>,
    ) -> Result<Self> {
        let username = username.into();
        if !repository.user_exists(&username)? {
            repository.create_user(&username)?;
        }
        Ok(Self {
            username,
            repository,
            round: 0,
            banked: None,
        })
    }

    /// Points earned so far in the current round
    pub fn round(&self) -> i64 {
        self.round
    }

    /// Stored total
    pub fn total(&self) -> Result<i64> {
        self.repository.user_score(&self.username)
    }

    /// Points saved when the last round ended, negative for a loss.
    ///
    /// `None` until a round has been banked successfully.
    pub fn banked(&self) -> Option<i64> {
        self.banked
    }

    /// Forget the current round's points without banking them.
    pub fn start_round(&mut self) {
        self.round = 0;
        self.banked = None;
    }

    fn bank(&mut self, delta: i64) -> Result<()> {
        let total = self.total()? + delta;
        self.repository.save_score(&self.username, delta, total)?;
        self.round = 0;
        self.banked = Some(delta);
        Ok(())
    }
}

impl Scoreboard for Score {
    fn record_question_asked(&mut self) {
        self.round += POINTS_PER_QUESTION;
    }

    fn record_victory(&mut self) -> Result<()> {
        self.bank(self.round)
    }

    fn record_loss(&mut self) -> Result<()> {
        self.bank(-self.round)
    }
}
