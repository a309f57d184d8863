//! Display functions for line-mode play

use super::formatters::{render_grid, render_keyboard, render_row, share_text};
use crate::core::GuessResult;
use crate::game::{GameSession, GameStatus};
use colored::Colorize;
use std::io::{self, Write};

/// Print the grid followed by the keyboard
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_board<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out, "{}", render_grid(session))?;
    writeln!(out)?;
    writeln!(out, "{}", render_keyboard(session.keyboard()))
}

/// Print the final grid, the closing line and the share grid
///
/// A win is printed in green; on a loss only the revealed answer is.
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_game_over<W: Write>(out: &mut W, session: &GameSession) -> io::Result<()> {
    writeln!(out, "\n{}", "      Game Over".bold())?;
    writeln!(out, "{}", render_grid(session))?;
    writeln!(out)?;

    let status = session.status();
    let line = match status {
        GameStatus::Won { .. } => status
            .summary(session.answer())
            .map(|summary| summary.green().bold().to_string()),
        GameStatus::Lost | GameStatus::InProgress { .. } => {
            status.summary_with(session.answer(), |answer| answer.green().to_string())
        }
    };
    if let Some(line) = line {
        writeln!(out, "{line}")?;
    }

    writeln!(out, "\n{}", share_text(session))
}

/// Print a validation error in red
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_error<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", format!("\n  {message}").red())
}

/// Print a single evaluated guess with its emoji row
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_evaluation<W: Write>(out: &mut W, result: &GuessResult) -> io::Result<()> {
    writeln!(out, "{}  {}", render_row(Some(result)), result.to_emoji())
}
