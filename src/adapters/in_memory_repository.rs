//! In-memory tree repository for testing.
//!
//! This adapter provides a pure in-memory implementation of TreeRepository,
//! enabling fast tests without any file system I/O. Documents are kept as
//! raw text, so tests can also seed malformed content.

use std::{
    collections::HashMap,
    path::Path,
    sync::{Arc, Mutex},
};

use crate::{
    Result,
    error::Error,
    ports::TreeRepository,
    tree::{Node, from_json, to_json},
};

/// In-memory repository for testing.
///
/// Stores documents in a shared HashMap keyed by path.
///
/// # Examples
///
/// ```
/// use twenty_questions::adapters::InMemoryRepository;
/// use twenty_questions::ports::TreeRepository;
/// use twenty_questions::tree::Node;
/// use std::path::Path;
///
/// let repo = InMemoryRepository::new();
/// repo.save(&Node::new("Dog"), Path::new("tree.json"))?;
///
/// let loaded = repo.load(Path::new("tree.json"))?;
/// assert_eq!(loaded.value, "Dog");
/// # Ok::<(), twenty_questions::Error>(())
/// ```
///
/// # Thread Safety
///
/// All clones share the same underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    storage: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryRepository {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store raw text at `path`, bypassing serialization.
    pub fn insert_raw(&self, path: &Path, text: impl Into<String>) {
        self.storage.lock().unwrap().insert(key(path), text.into());
    }

    /// Raw text stored at `path`, if any.
    pub fn raw(&self, path: &Path) -> Option<String> {
        self.storage.lock().unwrap().get(&key(path)).cloned()
    }

    /// Get the number of documents currently stored.
    pub fn count(&self) -> usize {
        self.storage.lock().unwrap().len()
    }

    /// Check if a document exists at the given path.
    pub fn contains(&self, path: &Path) -> bool {
        self.storage.lock().unwrap().contains_key(&key(path))
    }
}

fn key(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

impl TreeRepository for InMemoryRepository {
    fn save(&self, root: &Node, path: &Path) -> Result<()> {
        let document = to_json(root)?;
        self.storage.lock().unwrap().insert(key(path), document);
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Node> {
        let text = self.raw(path).ok_or_else(|| Error::Io {
            operation: format!("load tree from in-memory storage at {path:?}"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "key not found in memory"),
        })?;

        from_json(&text)
    }
}
