//! Ownership of the in-memory tree and its storage location.

use std::path::Path;

use tracing::info;

use crate::{
    Error, Result,
    tree::{Node, TreeCodec},
};

/// Holds the loaded tree for one session and writes it back on demand.
///
/// The tree is loaded exactly once, when the store is opened. There is no
/// polling and no automatic reload; each active session owns its own store.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use twenty_questions::{adapters::InMemoryRepository, store::TreeStore, tree::{Node, TreeCodec}};
///
/// let codec = TreeCodec::new(Arc::new(InMemoryRepository::new()), "tree.json");
/// let store = TreeStore::open(codec, Some(Node::new("Dog")), false);
/// assert_eq!(store.root().unwrap().value, "Dog");
/// ```
pub struct TreeStore {
    codec: TreeCodec,
    root: Option<Node>,
}

impl TreeStore {
    /// Load the tree through `codec`, using `default` if loading fails.
    pub fn open(codec: TreeCodec, default: Option<Node>, verbose: bool) -> Self {
        let root = codec.load(default, verbose);
        Self { codec, root }
    }

    /// Wrap an already built tree without reading storage.
    pub fn with_root(codec: TreeCodec, root: Node) -> Self {
        Self {
            codec,
            root: Some(root),
        }
    }

    /// Current tree, or `None` if loading failed without a default
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn root_mut(&mut self) -> Option<&mut Node> {
        self.root.as_mut()
    }

    pub fn location(&self) -> &Path {
        self.codec.location()
    }

    /// Write the whole current tree to storage.
    ///
    /// # Errors
    ///
    /// - `Error::EmptyTree` if there is no tree
    /// - any error from the underlying repository
    pub fn persist(&self) -> Result<()> {
        let root = self.root.as_ref().ok_or(Error::EmptyTree)?;
        self.codec.save(root)?;
        info!(
            location = %self.codec.location().display(),
            animals = root.animal_count(),
            "tree persisted"
        );
        Ok(())
    }
}
