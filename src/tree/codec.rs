//! Conversion between stored text and trees, plus the load/save contract.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

use super::{document::NodeDoc, node::Node};
use crate::{Error, Result, ports::TreeRepository};

/// Serialize a tree to pretty-printed JSON (2-space indentation).
pub fn to_json(root: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(&root.encode())?)
}

/// Parse, validate and decode a tree document.
///
/// Nesting depth is not limited: every saved tree can be read back.
///
/// # Errors
///
/// - `Error::Serialization` if `text` is not JSON
/// - `Error::Schema` if the JSON does not match the tree grammar
/// - `Error::EmptyTree` if the document is a bare `null`
pub fn from_json(text: &str) -> Result<Node> {
    let mut deserializer = serde_json::Deserializer::from_str(text);
    deserializer.disable_recursion_limit();
    let value = Value::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;

    let doc = NodeDoc::validate(&value)?;
    Node::decode(&doc).ok_or(Error::EmptyTree)
}

/// Reads and writes one tree at one storage location.
///
/// Loading and saving deliberately fail in different ways: [`TreeCodec::load`]
/// folds every failure into the caller's default, while [`TreeCodec::save`]
/// returns its error so a lost lesson is never silent.
#[derive(Clone)]
pub struct TreeCodec {
    repository: Arc<dyn TreeRepository + Send + Sync>,
    location: PathBuf,
}

impl TreeCodec {
    pub fn new(
        repository: Arc<dyn TreeRepository + Send + Sync>,
        location: impl Into<PathBuf>,
    ) -> Self {
        Self {
            repository,
            location: location.into(),
        }
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Replace the stored document with `root`.
    pub fn save(&self, root: &Node) -> Result<()> {
        self.repository.save(root, &self.location)
    }

    /// Load the stored tree, surfacing the reason on failure.
    pub fn try_load(&self) -> Result<Node> {
        self.repository.load(&self.location)
    }

    /// Load the stored tree, falling back to `default` on any failure.
    ///
    /// Never fails. When `verbose` is set, each fallback emits one warning.
    pub fn load(&self, default: Option<Node>, verbose: bool) -> Option<Node> {
        match self.try_load() {
            Ok(root) => Some(root),
            Err(error) => {
                if verbose {
                    warn!(
                        location = %self.location.display(),
                        %error,
                        "unable to load/parse tree, using default"
                    );
                }
                default
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryRepository;

    #[test]
    fn test_to_json_uses_two_space_indent() {
        let json = to_json(&Node::new("Root")).unwrap();
        assert_eq!(
            json,
            "{\n  \"value\": \"Root\",\n  \"yes\": null,\n  \"no\": null\n}"
        );
    }

    #[test]
    fn test_from_json_accepts_bare_string_root() {
        let root = from_json("\"Dog\"").unwrap();
        assert_eq!(root, Node::new("Dog"));
    }

    #[test]
    fn test_from_json_rejects_null_root() {
        assert!(matches!(from_json("null"), Err(Error::EmptyTree)));
    }

    #[test]
    fn test_from_json_reports_schema_error() {
        let err = from_json(r#"{"value": "Q", "yes": []}"#).unwrap_err();
        match err {
            Error::Schema(schema) => assert_eq!(schema.path(), "root.yes"),
            other => panic!("expected schema error, got {other:?}"),
        }
    }

    #[test]
    fn test_load_falls_back_on_missing_location() {
        let codec = TreeCodec::new(Arc::new(InMemoryRepository::new()), "missing.json");
        let default = Node::new("Default");
        assert_eq!(codec.load(Some(default.clone()), false), Some(default));
        assert_eq!(codec.load(None, true), None);
    }

    #[test]
    fn test_save_then_load() {
        let codec = TreeCodec::new(Arc::new(InMemoryRepository::new()), "tree.json");
        let root = Node::question("Does it bark?", Node::new("Dog"), Node::new("Cat"));
        codec.save(&root).unwrap();
        assert_eq!(codec.load(None, false), Some(root));
    }
}
