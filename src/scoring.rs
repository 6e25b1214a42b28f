//! Player scores
//!
//! Points accumulate while questions are asked and are banked into the
//! player's stored total when the round ends.

pub mod player;
pub mod score;

pub use player::Player;
pub use score::{POINTS_PER_QUESTION, Score};
