//! Error types for the twenty-questions crate

use thiserror::Error;

use crate::tree::SchemaError;

/// Main error type for the twenty-questions crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("invalid tree document: {0}")]
    Schema(#[from] SchemaError),

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("cannot {action} while the session is {state}")]
    InvalidTransition { action: String, state: String },

    #[error("no tree is loaded and no default was supplied")]
    EmptyTree,

    #[error("question '{question}' has no '{branch}' branch")]
    DeadBranch { question: String, branch: String },

    #[error("{field} must not be empty")]
    EmptyAnswer { field: String },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
