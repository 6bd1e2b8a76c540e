//! Group cards: the search results list, or the single selected group.

use crate::groups::Group;
use crate::ui::core::{actions::Action, Component};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{block::BorderType, Block, Borders, List, ListItem, ListState},
    Frame,
};

pub struct ResultsListComponent {
    groups: Vec<Group>,
    search_mode: bool,
    show_schedules: bool,
    show_references: bool,
    list_state: ListState,
    selected_index: usize,
}

impl ResultsListComponent {
    pub fn new(show_schedules: bool, show_references: bool) -> Self {
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            groups: Vec::new(),
            search_mode: false,
            show_schedules,
            show_references,
            list_state,
            selected_index: 0,
        }
    }

    /// Replace the card list with the directory's currently visible groups
    pub fn update_data(&mut self, groups: Vec<Group>, search_mode: bool) {
        self.groups = groups;
        self.search_mode = search_mode;
        if self.selected_index >= self.groups.len() {
            self.selected_index = 0;
        }
        self.list_state.select(Some(self.selected_index));
    }

    pub fn highlighted_group(&self) -> Option<&Group> {
        self.groups.get(self.selected_index)
    }

    fn next(&mut self) {
        if !self.groups.is_empty() {
            self.selected_index = (self.selected_index + 1) % self.groups.len();
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn previous(&mut self) {
        if !self.groups.is_empty() {
            self.selected_index = if self.selected_index == 0 {
                self.groups.len() - 1
            } else {
                self.selected_index - 1
            };
            self.list_state.select(Some(self.selected_index));
        }
    }

    fn card(&self, group: &Group) -> Text<'static> {
        let mut lines = vec![
            Line::from(Span::styled(
                group.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::raw(group.address.line1.clone())),
            Line::from(Span::raw(format!(
                "{}, {}",
                group.address.neighborhood, group.address.city
            ))),
        ];
        if self.show_references && !group.address.reference_notes.is_empty() {
            lines.push(Line::from(Span::styled(
                format!("Referencias: {}", group.address.reference_notes),
                Style::default().fg(Color::Gray),
            )));
        }
        if self.show_schedules {
            for entry in &group.schedule {
                lines.push(Line::from(Span::styled(
                    format!("{}: {} - {}", entry.days, entry.start_time, entry.end_time),
                    Style::default().fg(Color::Gray),
                )));
            }
        }
        lines.push(Line::from(""));
        Text::from(lines)
    }
}

impl Component for ResultsListComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => Action::NextGroup,
            KeyCode::Char('k') | KeyCode::Up => Action::PreviousGroup,
            KeyCode::Enter => match self.highlighted_group() {
                Some(group) => Action::SelectGroup(group.id.clone()),
                None => Action::None,
            },
            KeyCode::Char('m') => match self.highlighted_group() {
                Some(group) => Action::ShowMap(group.id.clone()),
                None => Action::None,
            },
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::NextGroup => {
                self.next();
                Action::None
            }
            Action::PreviousGroup => {
                self.previous();
                Action::None
            }
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let title = if self.search_mode {
            format!("Resultados ({})", self.groups.len())
        } else if self.groups.is_empty() {
            "Grupos".to_string()
        } else {
            "Grupo seleccionado".to_string()
        };

        let items: Vec<ListItem> = self
            .groups
            .iter()
            .map(|group| ListItem::new(self.card(group)))
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(title)
                    .border_style(Style::default().fg(Color::DarkGray)),
            )
            .highlight_style(Style::default().bg(Color::DarkGray));

        f.render_stateful_widget(list, rect, &mut self.list_state);
    }
}
