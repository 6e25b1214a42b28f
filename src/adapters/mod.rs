//! Adapters implementing domain ports.
//!
//! This module contains infrastructure implementations of the traits defined
//! in the ports module. Following hexagonal architecture, adapters depend on
//! domain ports, not the other way around.

pub mod console_prompter;
pub mod csv_score_repository;
pub mod in_memory_repository;
pub mod in_memory_score_repository;
pub mod json_file_repository;
pub mod wikipedia;

pub use console_prompter::{ConsolePrompter, ScriptedPrompter};
pub use csv_score_repository::CsvScoreRepository;
pub use in_memory_repository::InMemoryRepository;
pub use in_memory_score_repository::InMemoryScoreRepository;
pub use json_file_repository::JsonFileRepository;
pub use wikipedia::{NoInfo, WikipediaClient};
