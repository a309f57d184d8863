//! Wordle CLI
//!
//! A terminal Wordle: guess the hidden five-letter word in six tries, with
//! per-letter feedback and a keyboard showing the best-known state of every
//! letter.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_cli::core::{KeyboardState, Letter, LetterStatus, Word, evaluate};
//!
//! let answer = Word::new("crane").unwrap();
//! let guess = Word::new("eerie").unwrap();
//!
//! let result = evaluate(&answer, &guess);
//! assert_eq!(result.to_emoji(), "🟨🟨🟨⬜🟩");
//!
//! let mut keyboard = KeyboardState::new();
//! keyboard.merge(&result);
//! assert_eq!(keyboard.status_of(Letter::new('e').unwrap()), LetterStatus::Correct);
//! ```

// Core domain types
pub mod core;

// Game sessions and statistics
pub mod game;

// Word lists and answer selection
pub mod wordlists;

// Resolved command-line configuration
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
