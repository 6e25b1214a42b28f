//! In-memory score repository for testing.

use std::sync::{Arc, Mutex};

use crate::{
    Result,
    ports::{ScoreRecord, ScoreRepository},
};

/// Score rows kept in memory. All clones share the same rows.
#[derive(Clone, Default)]
pub struct InMemoryScoreRepository {
    rows: Arc<Mutex<Vec<ScoreRecord>>>,
}

impl InMemoryScoreRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored row, oldest first.
    pub fn rows(&self) -> Vec<ScoreRecord> {
        self.rows.lock().unwrap().clone()
    }
}

impl ScoreRepository for InMemoryScoreRepository {
    fn user_exists(&self, username: &str) -> Result<bool> {
        Ok(self.rows.lock().unwrap().iter().any(|r| r.username == username))
    }

    fn create_user(&self, username: &str) -> Result<()> {
        self.save_score(username, 0, 0)
    }

    fn user_score(&self, username: &str) -> Result<i64> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .rev()
            .find(|r| r.username == username)
            .map_or(0, |r| r.score_total))
    }

    fn save_score(&self, username: &str, last_score: i64, score_total: i64) -> Result<()> {
        self.rows.lock().unwrap().push(ScoreRecord {
            username: username.to_string(),
            last_score,
            score_total,
        });
        Ok(())
    }

    fn history(&self, username: &str) -> Result<Vec<ScoreRecord>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.username == username)
            .cloned()
            .collect())
    }
}
