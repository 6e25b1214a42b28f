//! Dependency injection container for the game application.
//!
//! The container owns infrastructure dependencies and wires them into
//! sessions, players and enrichment sources.

use std::{path::Path, sync::Arc};

use super::config::GameConfig;
use crate::{
    Result,
    adapters::{CsvScoreRepository, JsonFileRepository, NoInfo, WikipediaClient},
    ports::{AnimalInfoSource, ScoreRepository, TreeRepository},
    scoring::Player,
    session::GameSession,
    store::TreeStore,
    tree::{TreeCodec, bootstrap},
};

/// Application with dependency injection.
///
/// # Examples
///
/// ## Production usage
///
/// ```no_run
/// use twenty_questions::app::{App, GameConfig};
///
/// let app = App::new();
/// let config = GameConfig::new("animals_tree.json", "player1");
/// let session = app.open_session(&config)?;
/// # Ok::<(), twenty_questions::Error>(())
/// ```
///
/// ## Testing with dependency injection
///
/// ```
/// use twenty_questions::app::App;
/// use twenty_questions::adapters::{InMemoryRepository, InMemoryScoreRepository, NoInfo};
///
/// let app = App::for_testing()
///     .with_tree_repository(InMemoryRepository::new())
///     .with_score_repository(InMemoryScoreRepository::new())
///     .with_info_source(NoInfo)
///     .build();
/// ```
pub struct App {
    /// Repository for tree persistence
    tree_repository: Arc<dyn TreeRepository + Send + Sync>,
    /// Score storage; `None` means a CSV file at the configured path
    score_repository: Option<Arc<dyn ScoreRepository + Send + Sync>>,
    /// Enrichment; `None` means Wikipedia unless the config is offline
    info_source: Option<Arc<dyn AnimalInfoSource + Send + Sync>>,
}

impl App {
    /// Create a new app with production defaults.
    ///
    /// Uses:
    /// - `JsonFileRepository` for the tree
    /// - `CsvScoreRepository` at the configured scores path
    /// - `WikipediaClient`, or `NoInfo` when offline
    pub fn new() -> Self {
        Self {
            tree_repository: Arc::new(JsonFileRepository::new()),
            score_repository: None,
            info_source: None,
        }
    }

    /// Create a builder for constructing app with custom dependencies.
    pub fn for_testing() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn tree_repository(&self) -> Arc<dyn TreeRepository + Send + Sync> {
        Arc::clone(&self.tree_repository)
    }

    /// Codec bound to the tree at `path`.
    pub fn codec(&self, path: &Path) -> TreeCodec {
        TreeCodec::new(self.tree_repository(), path)
    }

    /// Load the configured tree into a fresh session.
    ///
    /// Falls back to the built-in starter tree when the stored tree is
    /// missing or invalid.
    pub fn open_session(&self, config: &GameConfig) -> Result<GameSession> {
        config.validate()?;
        let store = TreeStore::open(
            self.codec(&config.tree_path),
            Some(bootstrap::animals()),
            config.verbose,
        );
        GameSession::new(store)
    }

    /// Score storage for the configured scores path.
    pub fn score_repository(
        &self,
        config: &GameConfig,
    ) -> Result<Arc<dyn ScoreRepository + Send + Sync>> {
        match &self.score_repository {
            Some(repository) => Ok(Arc::clone(repository)),
            None => Ok(Arc::new(CsvScoreRepository::new(&config.scores_path)?)),
        }
    }

    /// Load or register the configured player.
    pub fn create_player(&self, config: &GameConfig) -> Result<Player> {
        config.validate()?;
        Player::new(config.username.trim(), self.score_repository(config)?)
    }

    /// Enrichment source for the configuration.
    pub fn info_source(
        &self,
        config: &GameConfig,
    ) -> Result<Arc<dyn AnimalInfoSource + Send + Sync>> {
        if let Some(source) = &self.info_source {
            return Ok(Arc::clone(source));
        }
        if config.offline {
            return Ok(Arc::new(NoInfo));
        }
        Ok(Arc::new(WikipediaClient::new(&config.language)?))
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for constructing app with custom dependencies.
///
/// Primarily used for testing to inject in-memory repositories and an
/// offline enrichment source.
pub struct AppBuilder {
    tree_repository: Option<Arc<dyn TreeRepository + Send + Sync>>,
    score_repository: Option<Arc<dyn ScoreRepository + Send + Sync>>,
    info_source: Option<Arc<dyn AnimalInfoSource + Send + Sync>>,
}

impl AppBuilder {
    /// Create a new app builder.
    pub fn new() -> Self {
        Self {
            tree_repository: None,
            score_repository: None,
            info_source: None,
        }
    }

    pub fn with_tree_repository<R: TreeRepository + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.tree_repository = Some(Arc::new(repo));
        self
    }

    pub fn with_score_repository<R: ScoreRepository + Send + Sync + 'static>(
        mut self,
        repo: R,
    ) -> Self {
        self.score_repository = Some(Arc::new(repo));
        self
    }

    pub fn with_info_source<S: AnimalInfoSource + Send + Sync + 'static>(
        mut self,
        source: S,
    ) -> Self {
        self.info_source = Some(Arc::new(source));
        self
    }

    /// Build the app with the configured dependencies.
    ///
    /// If no tree repository was specified, uses `JsonFileRepository`.
    pub fn build(self) -> App {
        App {
            tree_repository: self
                .tree_repository
                .unwrap_or_else(|| Arc::new(JsonFileRepository::new())),
            score_repository: self.score_repository,
            info_source: self.info_source,
        }
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::{InMemoryRepository, InMemoryScoreRepository};

    #[test]
    fn test_open_session_falls_back_to_bootstrap() {
        let app = App::for_testing()
            .with_tree_repository(InMemoryRepository::new())
            .build();
        let config = GameConfig::new("missing.json", "alice").with_verbose(false);

        let session = app.open_session(&config).unwrap();
        assert_eq!(
            session.store().root().unwrap().value,
            "Does it live mostly on land?"
        );
    }

    #[test]
    fn test_offline_config_uses_no_info() {
        let app = App::for_testing().build();
        let config = GameConfig::new("tree.json", "alice").offline();

        let source = app.info_source(&config).unwrap();
        assert!(source.describe("Dog").is_empty());
    }

    #[test]
    fn test_injected_score_repository_is_shared() {
        let scores = InMemoryScoreRepository::new();
        let app = App::for_testing()
            .with_score_repository(scores.clone())
            .build();

        app.create_player(&GameConfig::new("tree.json", "alice"))
            .unwrap();
        assert_eq!(scores.rows().len(), 1);
    }
}
