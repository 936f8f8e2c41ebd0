use ratatui::{
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    layout::{Alignment, Layout, Constraint, Direction},
    style::{Style, Color, Modifier},
    text::Line,
    Frame,
};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use std::time::Duration;
use anyhow::Result;

use crate::games::GameInfo;

pub enum MenuResult {
    Play(String), // Game ID
    Quit,
}

pub struct Menu {
    pub selected_game_index: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self { selected_game_index: 0 }
    }

    pub fn run(&mut self, terminal: &mut ratatui::DefaultTerminal, games: &[GameInfo]) -> Result<MenuResult> {
        if games.is_empty() {
            return Ok(MenuResult::Quit);
        }
        loop {
            terminal.draw(|f| self.render(f, games))?;

            if event::poll(Duration::from_millis(16))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(result) = self.handle_key(key.code, games) {
                        return Ok(result);
                    }
                }
            }
        }
    }

    fn handle_key(&mut self, code: KeyCode, games: &[GameInfo]) -> Option<MenuResult> {
        match code {
            KeyCode::Enter | KeyCode::Char('p') => {
                let id = games[self.selected_game_index].id;
                Some(MenuResult::Play(id.to_string()))
            }
            KeyCode::Up => {
                self.selected_game_index = self.selected_game_index.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                self.selected_game_index = (self.selected_game_index + 1).min(games.len() - 1);
                None
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(MenuResult::Quit),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, games: &[GameInfo]) {
        let selected = &games[self.selected_game_index];

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());

        f.render_widget(
            Paragraph::new(format!("HANGTERM  ·  {} mode", selected.name))
                .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            rows[0],
        );

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(rows[1]);

        let items: Vec<ListItem> = games.iter().enumerate().map(|(i, g)| {
            let (marker, style) = if i == self.selected_game_index {
                ("▶", Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            } else {
                (" ", Style::default())
            };
            ListItem::new(format!(" {marker} {}", g.name)).style(style)
        }).collect();
        f.render_widget(
            List::new(items).block(Block::default().title(" MODES ").borders(Borders::ALL)),
            columns[0],
        );

        let mut rules = vec![Line::from(selected.description), Line::from("")];
        rules.extend(selected.policy.rules().iter().map(|r| Line::from(format!("• {r}"))));
        f.render_widget(
            Paragraph::new(rules)
                .wrap(Wrap { trim: true })
                .block(Block::default().title(" RULES ").borders(Borders::ALL)),
            columns[1],
        );

        f.render_widget(
            Paragraph::new("[↑/↓] Choose mode  [Enter] Play  [Q] Quit")
                .style(Style::default().fg(Color::Gray))
                .alignment(Alignment::Center),
            rows[2],
        );
    }
}
