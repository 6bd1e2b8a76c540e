use crate::config::Config;
use crate::constants::{MAP_FOCUS_DELAY_MS, NOTIFICATION_TIMEOUT_SECS};
use crate::directory::Directory;
use crate::groups::{Group, GroupStore};
use crate::logger::Logger;
use crate::ui::components::{
    FilterBarComponent, MapPanelComponent, MenuComponent, NotificationComponent,
    ResultsListComponent, StatusBar,
};
use crate::ui::core::{actions::Action, event_handler::EventType, Component, Scheduler};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEventKind};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    Frame,
};
use tokio::sync::mpsc;
use tokio::time::Duration;

pub struct AppComponent {
    // Application state
    directory: Directory,

    // Component composition
    filter_bar: FilterBarComponent,
    results: ResultsListComponent,
    map_panel: MapPanelComponent,
    notification: NotificationComponent,
    menu: MenuComponent,

    // Delayed effects
    scheduler: Scheduler,
    background_action_rx: mpsc::UnboundedReceiver<Action>,

    logger: Logger,
    logging_enabled: bool,

    // Simple UI state
    map_height: u16,
    map_focused: bool,
    show_logs: bool,
    should_quit: bool,
}

impl AppComponent {
    pub fn new(config: &Config, store: GroupStore) -> Self {
        let (scheduler, background_action_rx) = Scheduler::new();

        let mut app = Self {
            directory: Directory::new(store),
            filter_bar: FilterBarComponent::new(),
            results: ResultsListComponent::new(
                config.display.show_schedules,
                config.display.show_references,
            ),
            map_panel: MapPanelComponent::new(),
            notification: NotificationComponent::new(),
            menu: MenuComponent::new(config.navigation.entries.clone()),
            scheduler,
            background_action_rx,
            logger: Logger::new(),
            logging_enabled: config.logging.enabled,
            map_height: config.ui.map_height,
            map_focused: false,
            show_logs: false,
            should_quit: false,
        };
        app.sync_component_data();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn directory(&self) -> &Directory {
        &self.directory
    }

    fn log(&self, message: String) {
        if self.logging_enabled {
            self.logger.log(message);
        }
    }

    /// Update all components with current directory state
    fn sync_component_data(&mut self) {
        self.filter_bar.update_data(
            self.directory.search_text().to_string(),
            self.directory.district().to_string(),
            self.directory.district_filtered().len(),
        );

        let visible: Vec<Group> = self.directory.visible().into_iter().cloned().collect();
        self.results
            .update_data(visible, self.directory.search_mode());

        self.map_panel.update_data(
            self.directory.selected_group().cloned(),
            self.directory.map_visible(),
            self.map_focused,
        );

        self.notification
            .update_data(self.directory.notification().cloned());
    }

    /// Route a key event through the component hierarchy.
    ///
    /// The menu overlay captures everything while open; the search input
    /// captures everything while editing. Otherwise the filter bar gets the
    /// first chance, then the results list, then the global keys.
    fn route_key(&mut self, key: KeyEvent) -> Action {
        if self.menu.is_open() {
            return self.menu.handle_key_events(key);
        }

        if self.show_logs {
            return match key.code {
                KeyCode::Esc | KeyCode::Char('G') => Action::ShowLogs(false),
                _ => Action::None,
            };
        }

        if self.filter_bar.is_editing() {
            return self.filter_bar.handle_key_events(key);
        }

        let filter_action = self.filter_bar.handle_key_events(key);
        if !matches!(filter_action, Action::None) {
            return filter_action;
        }

        let results_action = self.results.handle_key_events(key);
        if !matches!(results_action, Action::None) {
            return results_action;
        }

        self.handle_global_key(key)
    }

    /// Handle global keyboard shortcuts that aren't component-specific
    fn handle_global_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') => Action::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Action::Quit,
            KeyCode::Char('n') => Action::OpenMenu,
            KeyCode::Char('x') => Action::CloseNotification,
            KeyCode::Char('G') if self.logging_enabled => Action::ShowLogs(true),
            KeyCode::Esc => {
                if self.directory.map_visible() {
                    Action::CloseMap
                } else {
                    Action::Quit
                }
            }
            _ => Action::None,
        }
    }

    /// Process an event through the component hierarchy
    pub fn handle_event(&mut self, event: EventType) {
        let action = match event {
            EventType::Key(key) => self.route_key(key),
            EventType::Mouse(mouse) => {
                if self.menu.is_open() {
                    Action::None
                } else {
                    match mouse.kind {
                        MouseEventKind::ScrollDown => Action::NextGroup,
                        MouseEventKind::ScrollUp => Action::PreviousGroup,
                        _ => Action::None,
                    }
                }
            }
            _ => Action::None,
        };

        self.dispatch(action);
    }

    /// Apply an action: components first, then the directory state machine
    pub fn dispatch(&mut self, action: Action) {
        let action = self.menu.update(action);
        let action = self.results.update(action);

        match action {
            Action::SetSearchText(text) => {
                self.directory.set_search_text(text);
            }
            Action::SubmitSearch => {
                self.log(format!(
                    "Search: submitted text '{}' district '{}'",
                    self.directory.search_text(),
                    self.directory.district()
                ));
                if let Some(id) = self.directory.submit_search() {
                    self.scheduler.schedule(
                        Duration::from_secs(NOTIFICATION_TIMEOUT_SECS),
                        Action::ExpireNotification(id),
                    );
                }
                self.map_focused = false;
            }
            Action::SelectDistrict(code) => {
                self.log(format!("Filter: district changed to '{}'", code));
                self.directory.select_district(&code);
                self.map_focused = false;
            }
            Action::SelectGroup(id) => {
                self.log(format!("Filter: group selected '{}'", id));
                self.directory.select_group(&id);
                self.map_focused = false;
            }
            Action::ShowMap(id) => {
                if self.directory.show_map(&id) {
                    self.log(format!("Map: showing group '{}'", id));
                    self.scheduler
                        .schedule(Duration::from_millis(MAP_FOCUS_DELAY_MS), Action::FocusMap);
                }
            }
            Action::FocusMap => {
                // Ignored when the map was hidden again before the delay ran out
                if self.directory.map_visible() {
                    self.map_focused = true;
                }
            }
            Action::CloseMap => {
                self.directory.hide_map();
                self.map_focused = false;
            }
            Action::CloseNotification => {
                self.directory.close_notification();
            }
            Action::ExpireNotification(id) => {
                self.directory.expire_notification(id);
            }
            Action::Navigate(destination) => {
                self.log(format!("Menu: navigating to '{}'", destination));
            }
            Action::ShowLogs(show) => {
                self.show_logs = show;
            }
            Action::Quit => {
                self.should_quit = true;
            }
            _ => {}
        }

        self.sync_component_data();
    }

    /// Drain delayed actions delivered by the scheduler
    pub fn process_background_actions(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        while let Ok(action) = self.background_action_rx.try_recv() {
            actions.push(action);
        }
        actions
    }

    /// Render the recent activity log over the main view
    fn render_logs(&self, f: &mut Frame, rect: Rect) {
        use ratatui::{
            style::{Color, Style},
            text::Line,
            widgets::{block::BorderType, Block, Borders, Clear, Paragraph},
        };

        let popup_area = {
            let rows = Layout::vertical([
                Constraint::Percentage(15),
                Constraint::Min(10),
                Constraint::Percentage(15),
            ])
            .split(rect);
            Layout::horizontal([
                Constraint::Percentage(10),
                Constraint::Min(40),
                Constraint::Percentage(10),
            ])
            .split(rows[1])[1]
        };

        let lines: Vec<Line> = self
            .logger
            .get_logs()
            .into_iter()
            .take(popup_area.height.saturating_sub(2) as usize)
            .map(Line::from)
            .collect();

        let logs = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title("Registro (Esc cierra)")
                .border_style(Style::default().fg(Color::DarkGray)),
        );

        f.render_widget(Clear, popup_area);
        f.render_widget(logs, popup_area);
    }
}

impl Component for AppComponent {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.route_key(key)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        let map_visible = self.map_panel.is_visible();

        let mut constraints = vec![Constraint::Length(3), Constraint::Min(0)];
        if map_visible {
            constraints.push(Constraint::Length(self.map_height));
        }
        constraints.push(Constraint::Length(1));
        let chunks = Layout::vertical(constraints).split(rect);

        self.filter_bar.render(f, chunks[0]);
        self.results.render(f, chunks[1]);
        if map_visible {
            self.map_panel.render(f, chunks[2]);
        }
        StatusBar::render(f, chunks[chunks.len() - 1], &self.directory);

        // Overlays, bottom to top
        self.notification.render(f, rect);
        if self.show_logs {
            self.render_logs(f, rect);
        }
        if self.menu.is_open() {
            self.menu.render(f, rect);
        }
    }
}
