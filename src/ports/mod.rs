//! Ports (trait boundaries) for external collaborators.
//!
//! This module defines the interfaces between the game core and its
//! surroundings. Following hexagonal architecture, these traits are owned by
//! the domain and implemented by adapters in the infrastructure layer.

pub mod enrichment;
pub mod prompter;
pub mod repository;
pub mod scoring;

pub use enrichment::{AnimalInfo, AnimalInfoSource};
pub use prompter::Prompter;
pub use repository::TreeRepository;
pub use scoring::{ScoreRecord, ScoreRepository, Scoreboard};
