//! TUI rendering with ratatui
//!
//! Board, keyboard and message panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{KeyboardState, LetterStatus, WORD_LENGTH};
use crate::game::{EMPTY_CELL, GameSession, TOTAL_GUESSES};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(14),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Board
            Constraint::Percentage(45), // Info panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

/// Cell colours for a status
fn status_style(status: LetterStatus) -> Style {
    match status {
        LetterStatus::Correct => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Present => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        LetterStatus::Absent => Style::default().fg(Color::White).bg(Color::DarkGray),
        LetterStatus::Unseen => Style::default().fg(Color::White),
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("WORDLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Grid rows; the row being typed shows the input buffer
fn grid_lines(session: &GameSession, input: &str) -> Vec<Line<'static>> {
    let typing_row = session.guesses_used();
    let mut lines = Vec::with_capacity(TOTAL_GUESSES * 2);

    for (row, result) in session.grid().enumerate() {
        let cells: Vec<Span> = match result {
            Some(result) => result
                .iter()
                .map(|cell| {
                    Span::styled(
                        format!(" {} ", cell.letter.to_uppercase()),
                        status_style(cell.status),
                    )
                })
                .collect(),
            None if row == typing_row && !session.is_over() => {
                let typed: Vec<char> = input.chars().map(|c| c.to_ascii_uppercase()).collect();
                (0..WORD_LENGTH)
                    .map(|i| {
                        let ch = typed.get(i).copied().unwrap_or(EMPTY_CELL);
                        Span::styled(
                            format!(" {ch} "),
                            Style::default()
                                .fg(Color::Yellow)
                                .add_modifier(Modifier::BOLD),
                        )
                    })
                    .collect()
            }
            None => (0..WORD_LENGTH)
                .map(|_| {
                    Span::styled(
                        format!(" {EMPTY_CELL} "),
                        Style::default().fg(Color::DarkGray),
                    )
                })
                .collect(),
        };

        lines.push(Line::from(interleave(cells)));
        lines.push(Line::from(""));
    }

    lines
}

/// Put a one-column gap between cells
fn interleave(cells: Vec<Span<'_>>) -> Vec<Span<'_>> {
    let mut spans = Vec::with_capacity(cells.len() * 2);
    for (i, cell) in cells.into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(cell);
    }
    spans
}

fn keyboard_lines(keyboard: &KeyboardState) -> Vec<Line<'static>> {
    keyboard
        .rows()
        .iter()
        .map(|row| {
            let keys: Vec<Span> = row
                .iter()
                .map(|&(letter, status)| {
                    Span::styled(format!(" {} ", letter.to_uppercase()), status_style(status))
                })
                .collect();
            Line::from(keys)
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(TOTAL_GUESSES as u16 * 2 + 2), // Grid
            Constraint::Length(4),                          // Keyboard
        ])
        .split(area);

    let grid = Paragraph::new(grid_lines(&app.session, &app.input_buffer))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(format!(
                    " Guess {}/{TOTAL_GUESSES} ",
                    (app.session.guesses_used() + 1).min(TOTAL_GUESSES)
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(grid, chunks[0]);

    let keyboard = Paragraph::new(keyboard_lines(app.session.keyboard()))
        .alignment(Alignment::Center)
        .block(Block::default().title(" Keyboard ").borders(Borders::ALL));
    f.render_widget(keyboard, chunks[1]);
}

fn render_info_panel(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(50), // Messages
            Constraint::Percentage(50), // Statistics
        ])
        .split(area);

    render_messages(f, app, chunks[0]);
    render_statistics(f, app, chunks[1]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics(f: &mut Frame, app: &App, area: Rect) {
    let stats = &app.stats;
    let most = stats.guess_distribution.iter().copied().max().unwrap_or(0).max(1);

    let mut lines = vec![Line::from(format!(
        "Played: {}  Won: {}  Win rate: {:.0}%",
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    ))];

    for (guesses, &count) in stats.guess_distribution.iter().enumerate().skip(1) {
        let bar_width = count * 20 / most;
        lines.push(Line::from(vec![
            Span::raw(format!("{guesses}: ")),
            Span::styled("█".repeat(bar_width), Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game Over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Typing => (
            " Your guess (Enter to submit, Backspace to delete) ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content.to_uppercase())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        InputMode::Typing => "Esc/Ctrl-C: Quit | Enter: Submit",
    };

    let status = Line::from(vec![
        Span::raw(format!(" Scoring: {} ", app.session.scoring().name())),
        Span::styled(format!("| {help_text}"), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(status), area);
}
