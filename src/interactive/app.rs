//! TUI application state and logic

use crate::core::{Scoring, WORD_LENGTH};
use crate::game::{GameSession, GameStatus, Statistics};
use crate::wordlists::{AnswerProvider, Dictionary};
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use super::log_target::ScreenClaim;
use std::io;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    answers: Box<dyn AnswerProvider + 'a>,
    pub scoring: Scoring,
    pub session: GameSession,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    /// Create the app and draw the first answer
    ///
    /// # Errors
    ///
    /// Returns an error if the answer provider has nothing to draw.
    pub fn new(
        dictionary: &'a Dictionary,
        mut answers: Box<dyn AnswerProvider + 'a>,
        scoring: Scoring,
    ) -> Result<Self> {
        let answer = answers
            .next_answer()
            .context("no answers available to draw from")?;

        Ok(Self {
            dictionary,
            answers,
            scoring,
            session: GameSession::new(answer, scoring),
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Welcome to Wordle! Type a 5-letter word and press Enter.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Typing,
        })
    }

    /// Start a fresh session with a new answer
    ///
    /// # Errors
    ///
    /// Returns an error if the answer provider has nothing to draw.
    pub fn new_game(&mut self) -> Result<()> {
        let answer = self
            .answers
            .next_answer()
            .context("no answers available to draw from")?;

        self.session = GameSession::new(answer, self.scoring);
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Typing;
        self.add_message("New game started!", MessageStyle::Info);
        Ok(())
    }

    /// Validate and submit whatever is in the input buffer
    pub fn submit_guess(&mut self) {
        let guess = match self.dictionary.validate_guess(&self.input_buffer) {
            Ok(guess) => guess,
            Err(e) => {
                self.add_message(&capitalize(&e.to_string()), MessageStyle::Error);
                return;
            }
        };

        match self.session.submit(&guess) {
            Ok(GameStatus::InProgress { remaining }) => {
                let noun = if remaining == 1 { "guess" } else { "guesses" };
                self.add_message(&format!("{remaining} {noun} left"), MessageStyle::Info);
            }
            Ok(status) => {
                self.stats.record(status);
                self.input_mode = InputMode::GameOver;

                let style = if matches!(status, GameStatus::Won { .. }) {
                    MessageStyle::Success
                } else {
                    MessageStyle::Error
                };
                if let Some(summary) = self.session.summary() {
                    self.add_message(&summary, style);
                }
                self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
            }
            Err(e) => self.add_message(&capitalize(&e.to_string()), MessageStyle::Error),
        }

        self.input_buffer.clear();
    }

    /// Apply one key press
    ///
    /// # Errors
    ///
    /// Returns an error if starting a new game fails.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return Ok(());
            }
            KeyCode::Esc => {
                self.should_quit = true;
                return Ok(());
            }
            _ => {}
        }

        match self.input_mode {
            InputMode::GameOver => match key.code {
                KeyCode::Char('q') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            },
            InputMode::Typing => match key.code {
                KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                    if self.input_buffer.len() < WORD_LENGTH {
                        self.input_buffer.push(c.to_ascii_lowercase());
                    }
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }

        Ok(())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    let claim = ScreenClaim::acquire();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    drop(claim);

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key)?;
        }
    }

    tracing::info!(
        games = app.stats.total_games,
        won = app.stats.games_won,
        "tui session ended"
    );
    Ok(())
}
