//! Application layer with dependency injection container.
//!
//! The container owns infrastructure dependencies (tree repository, score
//! repository, enrichment source) and hands out sessions and players wired
//! to them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           Application Layer (app)           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │       App (DI Container)             │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ owns                      │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Infrastructure (adapters)           │   │
//! │  │  - JsonFileRepository                │   │
//! │  │  - CsvScoreRepository                │   │
//! │  │  - WikipediaClient / NoInfo          │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ implements                │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Ports                               │   │
//! │  │  - TreeRepository, ScoreRepository   │   │
//! │  │  - AnimalInfoSource, Prompter        │   │
//! │  └──────────────┬───────────────────────┘   │
//! │                 │ used by                   │
//! │                 ▼                           │
//! │  ┌──────────────────────────────────────┐   │
//! │  │  Core                                │   │
//! │  │  - TreeStore, GameSession            │   │
//! │  │  - Node, TreeCodec, graft            │   │
//! │  └──────────────────────────────────────┘   │
//! └─────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod container;

pub use config::{DEFAULT_SCORES_PATH, GameConfig};
pub use container::{App, AppBuilder};
