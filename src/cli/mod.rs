//! CLI infrastructure for the guessing game
//!
//! This module provides the command-line interface for playing rounds,
//! preparing and inspecting tree files, and reading score history.

pub mod commands;
pub mod output;
