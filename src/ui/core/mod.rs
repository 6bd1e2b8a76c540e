//! Core UI functionality for the Directorio application.
//!
//! This module contains the fundamental building blocks for the user
//! interface: the component abstraction, action definitions, event
//! processing, and the delayed-action scheduler.
//!
//! # Architecture
//!
//! 1. **Components** implement the [`Component`] trait for consistent rendering
//! 2. **Actions** define state transitions and user interactions
//! 3. **Events** are processed through the [`EventHandler`] system
//! 4. **Delayed effects** are delivered via the [`Scheduler`] channel

pub mod actions;
pub mod component;
pub mod event_handler;
pub mod scheduler;

// Re-export core types for easier access from other modules
pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
pub use scheduler::Scheduler;
