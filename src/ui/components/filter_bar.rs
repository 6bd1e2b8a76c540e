//! Filter panel: search input, district selector, and the "show all" shortcut.
//!
//! The panel never filters anything itself; every edit is dispatched as an
//! action and applied to the directory state machine by the application
//! component. Typing updates the search text only — filtering waits for an
//! explicit submit, while changing the district takes effect immediately.

use crate::constants::DISTRICTS;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph},
    Frame,
};

pub struct FilterBarComponent {
    search_text: String,
    district: String,
    filtered_count: usize,
    /// Whether keystrokes currently edit the search input
    editing: bool,
}

impl Default for FilterBarComponent {
    fn default() -> Self {
        Self::new()
    }
}

impl FilterBarComponent {
    pub fn new() -> Self {
        Self {
            search_text: String::new(),
            district: String::new(),
            filtered_count: 0,
            editing: false,
        }
    }

    /// Mirror the directory state after every dispatch
    pub fn update_data(&mut self, search_text: String, district: String, filtered_count: usize) {
        self.search_text = search_text;
        self.district = district;
        self.filtered_count = filtered_count;
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Cycle the district selector: none → 1 → 2 → 4 → 5 → none
    fn cycle_district(&self, forward: bool) -> String {
        let mut options: Vec<&str> = vec![""];
        options.extend_from_slice(DISTRICTS);

        let current = options
            .iter()
            .position(|&code| code == self.district)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % options.len()
        } else {
            (current + options.len() - 1) % options.len()
        };
        options[next].to_string()
    }

    fn handle_editing_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter => {
                self.editing = false;
                Action::SubmitSearch
            }
            KeyCode::Esc => {
                self.editing = false;
                Action::None
            }
            KeyCode::Backspace => {
                let mut text = self.search_text.clone();
                text.pop();
                Action::SetSearchText(text)
            }
            KeyCode::Char(c) => {
                let mut text = self.search_text.clone();
                text.push(c);
                Action::SetSearchText(text)
            }
            _ => Action::None,
        }
    }
}

impl Component for FilterBarComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.editing {
            return self.handle_editing_key(key);
        }

        match key.code {
            KeyCode::Char('/') => {
                self.editing = true;
                Action::None
            }
            KeyCode::Char('b') => Action::SubmitSearch,
            KeyCode::Char('d') => Action::SelectDistrict(self.cycle_district(true)),
            KeyCode::Char('D') => Action::SelectDistrict(self.cycle_district(false)),
            KeyCode::Char('a') if !self.district.is_empty() => {
                // "Todos": show every group of the selected district
                Action::SelectGroup(String::new())
            }
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let columns = Layout::horizontal([
            Constraint::Percentage(45),
            Constraint::Percentage(30),
            Constraint::Percentage(25),
        ])
        .split(rect);

        let search_style = if self.editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let mut search_line = vec![Span::raw(self.search_text.clone())];
        if self.editing {
            search_line.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        } else if self.search_text.is_empty() {
            search_line.push(Span::styled(
                "Nombre del grupo...",
                Style::default().fg(Color::DarkGray),
            ));
        }
        let search = Paragraph::new(Line::from(search_line)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Búsqueda (/)")
                .border_style(search_style),
        );
        f.render_widget(search, columns[0]);

        let district_label = if self.district.is_empty() {
            "Selecciona un Distrito".to_string()
        } else {
            format!("Distrito {}", self.district)
        };
        let district = Paragraph::new(Line::from(Span::styled(
            district_label,
            Style::default().add_modifier(Modifier::BOLD),
        )))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Distrito (d)")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(district, columns[1]);

        let group_hint = if self.district.is_empty() {
            format!("{} grupos", self.filtered_count)
        } else {
            format!("{} grupos • a: todos", self.filtered_count)
        };
        let groups = Paragraph::new(Line::from(Span::raw(group_hint))).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Grupo")
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        f.render_widget(groups, columns[2]);
    }
}
