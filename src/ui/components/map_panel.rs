//! Map panel for the selected group.
//!
//! The terminal cannot embed the map itself, so the panel shows the address
//! summary and the external map link built from the record's map query. The
//! panel is revealed by `ShowMap` and brought into focus shortly afterwards
//! by the deferred `FocusMap` action, once it has been rendered at least
//! once.

use crate::groups::Group;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Paragraph, Wrap},
    Frame,
};

#[derive(Default)]
pub struct MapPanelComponent {
    group: Option<Group>,
    visible: bool,
    focused: bool,
}

impl MapPanelComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, group: Option<Group>, visible: bool, focused: bool) {
        self.group = group;
        self.visible = visible;
        self.focused = focused;
    }

    pub fn is_visible(&self) -> bool {
        self.visible && self.group.is_some()
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(group) = &self.group else {
            return;
        };

        let border_color = if self.focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let address = format!(
            "{}, {}, {}. {}",
            group.address.line1,
            group.address.neighborhood,
            group.address.city,
            group.address.reference_notes
        );

        let content = Paragraph::new(vec![
            Line::from(Span::raw(address)),
            Line::from(""),
            Line::from(Span::styled(
                group.map_url(),
                Style::default()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED),
            )),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(format!("Mapa del grupo {}", group.name))
                .border_style(Style::default().fg(border_color)),
        );

        f.render_widget(content, rect);
    }
}
