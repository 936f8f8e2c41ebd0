//! Hangman renderer - pure projection of the controller, no game logic
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::game::HangmanGame;
use super::presenter::{KeyState, LetterControl};
use super::round::Status;

pub fn render(frame: &mut Frame, game: &HangmanGame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(9),    // Gallows + word
            Constraint::Length(4), // Letters
            Constraint::Length(4), // Status + message
            Constraint::Length(1), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(15), Constraint::Min(0)])
        .split(chunks[1]);
    render_gallows(frame, game, middle[0]);
    render_word(frame, game, middle[1]);

    render_letters(frame, game, chunks[2]);
    render_status(frame, game, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(frame: &mut Frame, game: &HangmanGame, area: Rect) {
    let header = Paragraph::new(format!("HANGMAN  |  {}", game.policy().label()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_gallows(frame: &mut Frame, game: &HangmanGame, area: Rect) {
    let lines: Vec<Line> = game
        .presenter()
        .illustration()
        .lines()
        .into_iter()
        .map(Line::from)
        .collect();
    let title = format!(" Tries: {} ", game.round().remaining_failures());
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title(title).borders(Borders::ALL)),
        area,
    );
}

fn render_word(frame: &mut Frame, game: &HangmanGame, area: Rect) {
    let round = game.round();
    let spaced: String = round
        .display_mask()
        .chars()
        .map(|c| format!("{c} "))
        .collect();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            spaced.trim_end().to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    if let Some(hint) = game.hint() {
        lines.push(Line::from(Span::styled(
            hint.to_string(),
            Style::default().fg(Color::Yellow),
        )));
    }

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title(" Word ").borders(Borders::ALL)),
        area,
    );
}

fn letter_style(control: LetterControl) -> Style {
    let style = match control.state {
        KeyState::Available => Style::default().fg(Color::White),
        KeyState::Correct => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        KeyState::Incorrect => Style::default().fg(Color::Red),
    };
    if control.disabled && control.state == KeyState::Available {
        style.fg(Color::DarkGray)
    } else if control.disabled {
        style.add_modifier(Modifier::DIM)
    } else {
        style
    }
}

fn render_letters(frame: &mut Frame, game: &HangmanGame, area: Rect) {
    let controls: Vec<_> = game.presenter().controls().collect();
    let lines: Vec<Line> = controls
        .chunks(13)
        .map(|row| {
            Line::from(
                row.iter()
                    .map(|&(letter, control)| Span::styled(format!(" {letter} "), letter_style(control)))
                    .collect::<Vec<_>>(),
            )
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().title(" Letters ").borders(Borders::ALL)),
        area,
    );
}

fn render_status(frame: &mut Frame, game: &HangmanGame, area: Rect) {
    let round = game.round();
    let color = match round.status() {
        Status::InProgress => Color::White,
        Status::Won => Color::Green,
        Status::Lost => Color::Red,
    };
    let lines = vec![
        Line::from(Span::styled(
            round.status_text(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(game.message().to_string()),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL)),
        area,
    );
}

fn render_controls(frame: &mut Frame, area: Rect) {
    frame.render_widget(
        Paragraph::new("[A-Z] Guess  [Enter] New word  [Tab] Hint  [Space] Pronounce  [Esc] Quit")
            .style(Style::default().fg(Color::Gray))
            .alignment(Alignment::Center),
        area,
    );
}
