//! Simple line-based game mode
//!
//! Plays Wordle over plain stdin/stdout without the TUI.

use crate::core::Scoring;
use crate::game::{GameSession, Statistics};
use crate::output::{print_board, print_error, print_game_over};
use crate::wordlists::{AnswerProvider, Dictionary};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{BufRead, Write};

/// Run games until the player declines to play again or input ends
///
/// Each round gets a fresh `GameSession`. Invalid guesses are reported and
/// re-prompted without using up a turn.
///
/// # Errors
///
/// Returns an error on I/O failure or if the answer provider runs dry.
pub fn run_simple<R: BufRead, W: Write>(
    dictionary: &Dictionary,
    answers: &mut dyn AnswerProvider,
    scoring: Scoring,
    input: &mut R,
    out: &mut W,
) -> Result<Statistics> {
    let mut stats = Statistics::default();

    loop {
        let answer = answers
            .next_answer()
            .context("no answers available to draw from")?;
        let mut session = GameSession::new(answer, scoring);

        writeln!(out, "\n{}", "  Welcome to Wordle".bright_cyan().bold())?;

        while !session.is_over() {
            print_board(out, &session)?;

            let Some(line) = prompt(input, out, "\n  Guess?>")? else {
                return Ok(stats);
            };

            match dictionary.validate_guess(&line) {
                Ok(guess) => {
                    session.submit(&guess)?;
                }
                Err(e) => {
                    tracing::debug!(input = line.as_str(), error = %e, "guess rejected");
                    print_error(out, &e.to_string())?;
                }
            }
        }

        print_game_over(out, &session)?;
        stats.record(session.status());

        let again = prompt(input, out, "\n  Play again? (y/n)")?;
        if !matches!(again.as_deref(), Some("y" | "yes")) {
            return Ok(stats);
        }
    }
}

/// Print a prompt and read one trimmed, lowercased line
///
/// Blank lines are re-prompted; `None` means the input is exhausted.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, label: &str) -> Result<Option<String>> {
    loop {
        write!(out, "{label} ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let line = line.trim().to_lowercase();
        if !line.is_empty() {
            return Ok(Some(line));
        }
    }
}
