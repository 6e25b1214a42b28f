//! CSV implementation of the score repository.
//!
//! Every saved game appends one `username,last_score,score_total` row; a
//! player's current total is the `score_total` of their most recent row.

use std::{
    fs::OpenOptions,
    path::{Path, PathBuf},
};

use crate::{
    Result,
    error::Error,
    ports::{ScoreRecord, ScoreRepository},
};

const HEADER: [&str; 3] = ["username", "last_score", "score_total"];

/// Score history stored in a CSV file.
///
/// # Examples
///
/// ```no_run
/// use twenty_questions::adapters::CsvScoreRepository;
/// use twenty_questions::ports::ScoreRepository;
///
/// let repo = CsvScoreRepository::new("./scoring.csv")?;
/// repo.save_score("alice", 15, 15)?;
/// assert_eq!(repo.user_score("alice")?, 15);
/// # Ok::<(), twenty_questions::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct CsvScoreRepository {
    path: PathBuf,
}

impl CsvScoreRepository {
    /// Open the score file at `path`, creating it with a header if missing.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let repo = Self { path: path.into() };
        if !repo.path.exists() {
            repo.create_file()?;
        }
        Ok(repo)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn create_file(&self) -> Result<()> {
        let mut writer = csv::Writer::from_path(&self.path)?;
        writer.write_record(HEADER)?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("create score file {:?}", self.path),
            source,
        })?;
        Ok(())
    }

    fn records(&self) -> Result<Vec<ScoreRecord>> {
        let mut reader = csv::Reader::from_path(&self.path)?;
        let records = reader
            .deserialize()
            .collect::<std::result::Result<Vec<ScoreRecord>, csv::Error>>()?;
        Ok(records)
    }

    fn append(&self, record: &ScoreRecord) -> Result<()> {
        let file = OpenOptions::new()
            .append(true)
            .open(&self.path)
            .map_err(|source| Error::Io {
                operation: format!("open score file {:?}", self.path),
                source,
            })?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.serialize(record)?;
        writer.flush().map_err(|source| Error::Io {
            operation: format!("append to score file {:?}", self.path),
            source,
        })?;
        Ok(())
    }
}

impl ScoreRepository for CsvScoreRepository {
    fn user_exists(&self, username: &str) -> Result<bool> {
        Ok(self.records()?.iter().any(|r| r.username == username))
    }

    fn create_user(&self, username: &str) -> Result<()> {
        self.append(&ScoreRecord {
            username: username.to_string(),
            last_score: 0,
            score_total: 0,
        })
    }

    fn user_score(&self, username: &str) -> Result<i64> {
        Ok(self
            .records()?
            .iter()
            .rev()
            .find(|r| r.username == username)
            .map_or(0, |r| r.score_total))
    }

    fn save_score(&self, username: &str, last_score: i64, score_total: i64) -> Result<()> {
        self.append(&ScoreRecord {
            username: username.to_string(),
            last_score,
            score_total,
        })
    }

    fn history(&self, username: &str) -> Result<Vec<ScoreRecord>> {
        Ok(self
            .records()?
            .into_iter()
            .filter(|r| r.username == username)
            .collect())
    }
}
