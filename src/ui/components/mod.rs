//! Reusable UI components

pub mod filter_bar;
pub mod map_panel;
pub mod menu;
pub mod notification;
pub mod results_list;
pub mod status_bar;

// Component exports
pub use filter_bar::FilterBarComponent;
pub use map_panel::MapPanelComponent;
pub use menu::MenuComponent;
pub use notification::NotificationComponent;
pub use results_list::ResultsListComponent;
pub use status_bar::StatusBar;
