//! JSON file implementation of tree repository.
//!
//! This adapter implements the TreeRepository port with pretty-printed JSON
//! documents on the local file system. Saves are atomic: the new document is
//! written to a temporary file next to the target and renamed over it. A
//! replaced file keeps its permissions.

use std::{fs, io::Write, path::Path};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{
    Result,
    error::Error,
    ports::TreeRepository,
    tree::{Node, from_json, to_json},
};

/// File-based tree repository.
///
/// # Examples
///
/// ```no_run
/// use twenty_questions::adapters::JsonFileRepository;
/// use twenty_questions::ports::TreeRepository;
/// use twenty_questions::tree::bootstrap;
/// use std::path::Path;
///
/// let repo = JsonFileRepository;
/// repo.save(&bootstrap::animals(), Path::new("animals_tree.json"))?;
///
/// let loaded = repo.load(Path::new("animals_tree.json"))?;
/// # Ok::<(), twenty_questions::Error>(())
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFileRepository;

impl JsonFileRepository {
    /// Create a new JSON file repository.
    pub fn new() -> Self {
        Self
    }
}

impl TreeRepository for JsonFileRepository {
    fn save(&self, root: &Node, path: &Path) -> Result<()> {
        let document = to_json(root)?;

        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut staged = NamedTempFile::new_in(dir).map_err(|source| Error::Io {
            operation: format!("create temporary file in {dir:?}"),
            source,
        })?;

        staged
            .write_all(document.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|source| Error::Io {
                operation: format!("write tree for {path:?}"),
                source,
            })?;

        // The staged file starts private; an existing tree keeps its mode.
        if let Ok(existing) = fs::metadata(path) {
            staged
                .as_file()
                .set_permissions(existing.permissions())
                .map_err(|source| Error::Io {
                    operation: format!("copy permissions of {path:?}"),
                    source,
                })?;
        }

        staged.persist(path).map_err(|e| Error::Io {
            operation: format!("replace {path:?}"),
            source: e.error,
        })?;

        debug!(path = %path.display(), bytes = document.len(), "tree saved");
        Ok(())
    }

    fn load(&self, path: &Path) -> Result<Node> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            operation: format!("read file {path:?}"),
            source,
        })?;

        from_json(&text)
    }
}
