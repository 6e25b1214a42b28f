//! Configuration types for game sessions.

use std::path::PathBuf;

use crate::{Error, Result};

/// Default location of the score history
pub const DEFAULT_SCORES_PATH: &str = "./scoring.csv";

/// Configuration for one player's game.
///
/// # Examples
///
/// ```
/// use twenty_questions::app::GameConfig;
///
/// let config = GameConfig::new("data/animals_tree.json", "player1")
///     .with_scores_path("scores.csv")
///     .offline();
/// assert!(config.offline);
/// ```
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Where the question tree is stored
    pub tree_path: PathBuf,
    /// Player name used for scores
    pub username: String,
    /// Where score history is stored
    pub scores_path: PathBuf,
    /// Warn when the stored tree cannot be loaded
    pub verbose: bool,
    /// Skip Wikipedia lookups
    pub offline: bool,
    /// Wikipedia language edition
    pub language: String,
}

impl GameConfig {
    /// Create a configuration with default scores path, verbose loading,
    /// online lookups and English Wikipedia.
    pub fn new(tree_path: impl Into<PathBuf>, username: impl Into<String>) -> Self {
        Self {
            tree_path: tree_path.into(),
            username: username.into(),
            scores_path: PathBuf::from(DEFAULT_SCORES_PATH),
            verbose: true,
            offline: false,
            language: "en".to_string(),
        }
    }

    pub fn with_scores_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.scores_path = path.into();
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Check that the configuration can be used.
    pub fn validate(&self) -> Result<()> {
        if self.username.trim().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "username must not be empty".to_string(),
            });
        }
        if self.tree_path.as_os_str().is_empty() {
            return Err(Error::InvalidConfiguration {
                message: "tree path must not be empty".to_string(),
            });
        }
        let language_ok = !self.language.is_empty()
            && self.language.chars().all(|c| c.is_ascii_lowercase() || c == '-');
        if !language_ok {
            return Err(Error::InvalidConfiguration {
                message: format!("invalid Wikipedia language '{}'", self.language),
            });
        }
        Ok(())
    }
}
