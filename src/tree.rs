//! Decision tree model
//!
//! This module provides the binary question tree, its JSON document form,
//! structural validation, and the learning mutation that grafts a new
//! question into a wrongly guessed leaf.

pub mod bootstrap;
pub mod branch;
pub mod codec;
pub mod document;
pub mod mutation;
pub mod node;

pub use branch::{Branch, render_path};
pub use codec::{TreeCodec, from_json, to_json};
pub use document::{NodeDoc, SchemaError};
pub use mutation::{Lesson, graft};
pub use node::Node;

/// Stack left before a recursive walk switches to a new segment
const STACK_RED_ZONE: usize = 64 * 1024;
/// Size of each new stack segment
const STACK_GROWTH: usize = 1024 * 1024;

/// Run one level of a recursive tree walk, moving to a fresh stack segment
/// when the current one runs low. Lessons can chain questions arbitrarily
/// deep along one branch.
pub(crate) fn with_stack<R>(walk: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(STACK_RED_ZONE, STACK_GROWTH, walk)
}
