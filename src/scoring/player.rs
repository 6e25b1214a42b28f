//! A named player and their score

use std::sync::Arc;

use super::score::Score;
use crate::{Result, ports::ScoreRepository};

#[derive(Clone)]
pub struct Player {
    pub username: String,
    pub score: Score,
}

impl Player {
    /// Load or register `username` in `repository`.
    pub fn new(
        username: impl Into<String>,
        repository: Arc<dyn ScoreRepository + Send + Sync>,
    ) -> Result<Self> {
        let username = username.into();
        let score = Score::new(username.clone(), repository)?;
        Ok(Self { username, score })
    }
}
