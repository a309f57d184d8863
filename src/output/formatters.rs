//! Formatting utilities for terminal output

use crate::core::{GuessResult, KeyboardState, Letter, LetterStatus, WORD_LENGTH};
use crate::game::{EMPTY_CELL, GameSession, GameStatus, TOTAL_GUESSES};
use colored::{Color, ColoredString, Colorize};

/// Terminal colour for a status
#[must_use]
pub const fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::Green,
        LetterStatus::Present => Color::Yellow,
        LetterStatus::Absent => Color::BrightBlack,
        LetterStatus::Unseen => Color::White,
    }
}

/// One grid cell like " A ", or the empty placeholder
#[must_use]
pub fn render_cell(letter: Option<Letter>, status: LetterStatus) -> ColoredString {
    let ch = letter.map_or(EMPTY_CELL, Letter::to_uppercase);
    format!(" {ch} ").color(status_color(status))
}

/// A guessed row, or a row of placeholders
#[must_use]
pub fn render_row(row: Option<&GuessResult>) -> String {
    match row {
        Some(result) => result
            .iter()
            .map(|cell| render_cell(Some(cell.letter), cell.status).to_string())
            .collect(),
        None => (0..WORD_LENGTH)
            .map(|_| render_cell(None, LetterStatus::Unseen).to_string())
            .collect(),
    }
}

/// All grid rows, one per line
#[must_use]
pub fn render_grid(session: &GameSession) -> String {
    session
        .grid()
        .map(|row| format!("   {}", render_row(row)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Keyboard as two lines, `A..=M` then `N..=Z`
#[must_use]
pub fn render_keyboard(keyboard: &KeyboardState) -> String {
    keyboard
        .rows()
        .iter()
        .map(|row| {
            let keys: String = row
                .iter()
                .map(|&(letter, status)| {
                    letter
                        .to_uppercase()
                        .to_string()
                        .color(status_color(status))
                        .to_string()
                })
                .collect();
            format!("     {keys}")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Spoiler-free result grid, e.g. "Wordle 3/6" followed by emoji rows
#[must_use]
pub fn share_text(session: &GameSession) -> String {
    let score = match session.status() {
        GameStatus::Won { guesses } => guesses.to_string(),
        GameStatus::Lost | GameStatus::InProgress { .. } => "X".to_string(),
    };

    let mut lines = vec![format!("Wordle {score}/{TOTAL_GUESSES}")];
    lines.extend(session.history().iter().map(GuessResult::to_emoji));
    lines.join("\n")
}
