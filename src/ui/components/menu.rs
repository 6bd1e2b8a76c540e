//! Full-screen navigation overlay.
//!
//! The terminal analog of a mobile menu: while open it captures every key
//! event (nothing reaches the widgets underneath) and Escape closes it.
//! Capture is installed and removed strictly with the open flag, so
//! repeated open/close cycles leave no residual state.

use crate::config::NavEntry;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

pub struct MenuComponent {
    entries: Vec<NavEntry>,
    open: bool,
    list_state: ListState,
    selected_index: usize,
}

impl MenuComponent {
    pub fn new(entries: Vec<NavEntry>) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            entries,
            open: false,
            list_state,
            selected_index: 0,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    fn next(&mut self) {
        if !self.entries.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.entries.len();
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn previous(&mut self) {
        if !self.entries.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.entries.len() - 1
            } else {
                self.selected_index - 1
            };
            self.list_state.select(Some(self.selected_index));
        }
    }
}

impl Component for MenuComponent {
    /// Only routed to while open; every key is consumed
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc => Action::CloseMenu,
            KeyCode::Char('j') | KeyCode::Down => {
                self.next();
                Action::None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.previous();
                Action::None
            }
            KeyCode::Enter => match self.entries.get(self.selected_index) {
                Some(entry) => Action::Navigate(entry.destination.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::OpenMenu => {
                self.open = true;
                self.selected_index = 0;
                self.list_state.select(Some(0));
                Action::None
            }
            Action::CloseMenu => {
                self.open = false;
                Action::None
            }
            Action::Navigate(destination) => {
                // Standard link activation: the overlay closes itself
                self.open = false;
                Action::Navigate(destination)
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        if !self.open {
            return;
        }

        f.render_widget(Clear, rect);
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Black)),
            rect,
        );

        let rows = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(rect);

        let close_hint = Paragraph::new(Line::from(Span::styled(
            "✕ Esc",
            Style::default().fg(Color::Gray),
        )))
        .alignment(Alignment::Right);
        f.render_widget(close_hint, rows[0]);

        let centered = Layout::horizontal([
            Constraint::Percentage(30),
            Constraint::Min(20),
            Constraint::Percentage(30),
        ])
        .split(rows[1])[1];

        let items: Vec<ListItem> = self
            .entries
            .iter()
            .map(|entry| {
                ListItem::new(Line::from(Span::styled(
                    entry.label.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )))
            })
            .collect();

        let list = List::new(items)
            .highlight_style(Style::default().fg(Color::Yellow))
            .highlight_symbol("› ");
        f.render_stateful_widget(list, centered, &mut self.list_state);
    }
}
