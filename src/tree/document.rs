//! Storage documents and structural validation
//!
//! A tree document follows the grammar
//!
//! ```text
//! Node ::= null | string | { "value": string, "yes": Node, "no": Node }
//! ```
//!
//! where `yes`/`no` may also be omitted entirely. Validation walks an
//! arbitrary JSON value and either produces a [`NodeDoc`] or reports the
//! first offending position as a dotted path such as `root.yes.no`.

use serde::Serialize;
use serde_json::{Map, Value};
use thiserror::Error;

use super::{branch::Branch, with_stack};

/// A document that matches the tree grammar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NodeDoc {
    /// Absent child
    Null,
    /// Bare-string shorthand for a leaf
    Leaf(String),
    /// Full object form
    Branch {
        value: String,
        yes: Box<NodeDoc>,
        no: Box<NodeDoc>,
    },
}

/// Structural problem found while validating a tree document
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SchemaError {
    #[error("expected object, string or null at {path}, got {found}")]
    UnexpectedType { path: String, found: &'static str },

    #[error("missing 'value' key at {path}")]
    MissingValue { path: String },

    #[error("'value' must be a string at {path}, got {found}")]
    NonStringValue { path: String, found: &'static str },
}

impl SchemaError {
    /// Dotted path of the offending position
    pub fn path(&self) -> &str {
        match self {
            SchemaError::UnexpectedType { path, .. }
            | SchemaError::MissingValue { path }
            | SchemaError::NonStringValue { path, .. } => path,
        }
    }
}

impl NodeDoc {
    /// Validate a parsed JSON value against the tree grammar.
    ///
    /// Stops at the first failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use serde_json::json;
    /// use twenty_questions::tree::NodeDoc;
    ///
    /// let bad = json!({"value": "Q", "yes": {"value": "Dog", "no": 42}});
    /// let err = NodeDoc::validate(&bad).unwrap_err();
    /// assert_eq!(err.path(), "root.yes.no");
    /// ```
    pub fn validate(value: &Value) -> Result<NodeDoc, SchemaError> {
        Self::validate_at(value, "root")
    }

    fn validate_at(value: &Value, path: &str) -> Result<NodeDoc, SchemaError> {
        with_stack(|| match value {
            Value::Null => Ok(NodeDoc::Null),
            Value::String(leaf) => Ok(NodeDoc::Leaf(leaf.clone())),
            Value::Object(map) => Self::validate_object(map, path),
            other => Err(SchemaError::UnexpectedType {
                path: path.to_string(),
                found: json_type(other),
            }),
        })
    }

    fn validate_object(map: &Map<String, Value>, path: &str) -> Result<NodeDoc, SchemaError> {
        let value = match map.get("value") {
            Some(Value::String(value)) => value.clone(),
            Some(other) => {
                return Err(SchemaError::NonStringValue {
                    path: path.to_string(),
                    found: json_type(other),
                });
            }
            None => {
                return Err(SchemaError::MissingValue {
                    path: path.to_string(),
                });
            }
        };

        let yes = Self::validate_branch(map, path, Branch::Yes)?;
        let no = Self::validate_branch(map, path, Branch::No)?;

        Ok(NodeDoc::Branch {
            value,
            yes: Box::new(yes),
            no: Box::new(no),
        })
    }

    fn validate_branch(
        map: &Map<String, Value>,
        path: &str,
        branch: Branch,
    ) -> Result<NodeDoc, SchemaError> {
        match map.get(branch.as_str()) {
            Some(child) => Self::validate_at(child, &format!("{path}.{branch}")),
            None => Ok(NodeDoc::Null),
        }
    }
}

impl TryFrom<&Value> for NodeDoc {
    type Error = SchemaError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        NodeDoc::validate(value)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
