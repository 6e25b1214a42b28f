//! Twenty questions: an animal guessing game that learns
//!
//! This crate provides:
//! - A binary question tree with a validated JSON storage format
//! - A store that loads the tree once and persists it atomically
//! - A session state machine that walks the tree and learns from wrong guesses
//! - Scoring, Wikipedia enrichment and console adapters behind small traits

pub mod adapters;
pub mod app;
pub mod cli;
pub mod error;
pub mod ports;
pub mod round;
pub mod scoring;
pub mod session;
pub mod store;
pub mod tree;

pub use error::{Error, Result};
pub use session::{GameEvent, GameSession, Prompt, SessionState};
pub use store::TreeStore;
pub use tree::{Branch, Lesson, Node, NodeDoc, SchemaError, TreeCodec};
