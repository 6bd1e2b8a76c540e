//! Directorio - A terminal directory of local groups
//!
//! This library implements a small finder for a fixed, bundled list of
//! group records: filter by free-text name and/or district code, select a
//! group, and open its location through an external map link. All data is
//! in-memory for the lifetime of the process; the filter/selection logic
//! is a pure state machine decoupled from the Ratatui rendering layer.
//!
//! # Modules
//!
//! * [`config`] - Application configuration management
//! * [`directory`] - The filter/selection state machine
//! * [`groups`] - Group records and the read-only store
//! * [`ui`] - Terminal user interface components
//! * [`utils`] - Date handling and other helpers

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Filter/selection state machine over the group dataset
pub mod directory;

/// Group data model and loading
pub mod groups;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date handling and other helpers
pub mod utils;

// Re-export the data model for convenient access
pub use directory::{Directory, Notification, NotificationKind};
pub use groups::{Address, Group, GroupStore, ScheduleEntry};
