//! Status bar component

use crate::directory::{Directory, NotificationKind};
use ratatui::{
    layout::Alignment,
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: ratatui::layout::Rect, directory: &Directory) {
        let status_text = if directory.map_visible() {
            "Esc: cerrar mapa • j/k: navegar • n: menú • q: salir".to_string()
        } else {
            "/: buscar • b: buscar ya • d: distrito • j/k: navegar • Enter: elegir • m: mapa • n: menú • q: salir"
                .to_string()
        };

        let status_color = match directory.notification().map(|n| n.kind) {
            Some(NotificationKind::Error) => Color::Red,
            Some(NotificationKind::Warning) => Color::Yellow,
            None => Color::Gray,
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
