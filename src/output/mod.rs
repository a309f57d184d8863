//! Terminal output formatting
//!
//! Coloured rendering of the grid and keyboard for line mode.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_error, print_evaluation, print_game_over};
