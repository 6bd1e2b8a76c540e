//! Utility modules for the Directorio application.
//!
//! Cross-cutting helpers used throughout the application. Everything here is
//! a pure function with no side effects, so it stays trivially testable.
//!
//! # Available Utilities
//!
//! - [`date`] - Date normalization and locale-aware formatting

pub mod date;
