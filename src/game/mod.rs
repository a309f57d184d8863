//! Game sessions
//!
//! Owns the per-game state that the core types are folded into.

mod session;
mod stats;

pub use session::{EMPTY_CELL, GameError, GameSession, GameStatus, TOTAL_GUESSES};
pub use stats::Statistics;
