//! Floating notification banner.
//!
//! Pure rendering of the directory's current notification; nothing is drawn
//! when there is none. Dismissal (manual close and the identifier-guarded
//! auto-expiry) lives in the state machine, not here.

use crate::directory::{Notification, NotificationKind};
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{block::BorderType, Block, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Default)]
pub struct NotificationComponent {
    notification: Option<Notification>,
}

impl NotificationComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_data(&mut self, notification: Option<Notification>) {
        self.notification = notification;
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect) {
        let Some(notification) = &self.notification else {
            return;
        };

        let (icon, color) = match notification.kind {
            NotificationKind::Error => ("⚠️", Color::Red),
            NotificationKind::Warning => ("🔮", Color::Yellow),
        };

        // Banner floats over the top of the screen, centered
        let banner_area = {
            let rows = Layout::vertical([Constraint::Length(3), Constraint::Min(0)]).split(rect);
            Layout::horizontal([
                Constraint::Percentage(15),
                Constraint::Min(40),
                Constraint::Percentage(15),
            ])
            .split(rows[0])[1]
        };

        let banner = Paragraph::new(Line::from(vec![
            Span::raw(format!("{} ", icon)),
            Span::raw(notification.message.clone()),
            Span::styled("  (x cierra)", Style::default().fg(Color::DarkGray)),
        ]))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
        .style(Style::default().fg(color));

        f.render_widget(Clear, banner_area);
        f.render_widget(banner, banner_area);
    }
}
