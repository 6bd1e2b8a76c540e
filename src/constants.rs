//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

/// The closed set of district codes groups can belong to
pub const DISTRICTS: &[&str] = &["1", "2", "4", "5"];

// Notification messages (wording matches the published site)
pub const NOTIF_NO_FILTERS: &str = "Por favor, ingresa un nombre de grupo o selecciona un distrito";
pub const NOTIF_NAME_ONLY: &str = "¿Quieres filtrar también por distrito para resultados más precisos?";
pub const NOTIF_DISTRICT_ONLY: &str = "Se mostrarán todos los grupos del distrito seleccionado";
pub const NOTIF_NO_RESULTS: &str = "No se encontraron grupos con los criterios seleccionados";

/// Seconds a notification stays on screen before the auto-dismiss fires
pub const NOTIFICATION_TIMEOUT_SECS: u64 = 5;

/// Delay before the map panel is brought into focus, so it renders first
pub const MAP_FOCUS_DELAY_MS: u64 = 100;

/// Base URL the map-query string is encoded into
pub const MAP_EMBED_BASE: &str = "https://maps.google.com/maps";

/// Locale used when none is configured
pub const DEFAULT_LOCALE: &str = "es-ES";

// Map panel height bounds for the `ui.map_height` setting
pub const MAP_HEIGHT_DEFAULT: u16 = 12;
pub const MAP_HEIGHT_MIN: u16 = 6;
pub const MAP_HEIGHT_MAX: u16 = 30;

// Status / CLI Messages
pub const CONFIG_GENERATED: &str = "✅ Configuration file generated";
pub const ERROR_NO_GROUPS: &str = "❌ Error: no group records loaded";
