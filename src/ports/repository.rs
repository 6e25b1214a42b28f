//! Repository port for tree persistence.
//!
//! This module defines the trait boundary between the game core and the
//! storage holding the question tree.

use std::path::Path;

use crate::{Result, tree::Node};

/// Port for persisting and loading question trees.
///
/// Implementations report every failure. The "fall back to a default"
/// policy lives in [`TreeCodec::load`](crate::tree::TreeCodec::load), not here.
///
/// # Examples
///
/// ```no_run
/// use twenty_questions::ports::TreeRepository;
/// use twenty_questions::tree::Node;
/// use std::path::Path;
///
/// fn save_tree<R: TreeRepository>(repo: &R, root: &Node, path: &Path) -> twenty_questions::Result<()> {
///     repo.save(root, path)
/// }
/// ```
pub trait TreeRepository {
    /// Replace the tree stored at `path` with `root`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Serialization fails
    /// - The location cannot be written
    ///
    /// A failed save must leave the previous document intact.
    fn save(&self, root: &Node, path: &Path) -> Result<()>;

    /// Load the tree stored at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The location does not exist or cannot be read
    /// - The content is not JSON
    /// - The JSON does not match the tree grammar
    fn load(&self, path: &Path) -> Result<Node>;
}
