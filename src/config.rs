//! Configuration management for Directorio
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, MAP_HEIGHT_DEFAULT, MAP_HEIGHT_MAX, MAP_HEIGHT_MIN};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
    pub data: DataConfig,
    pub navigation: NavigationConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Height of the map panel in rows
    pub map_height: u16,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show schedule lines on group cards
    pub show_schedules: bool,
    /// Show the free-text reference notes on group cards
    pub show_references: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Enable the in-memory activity log (toggled with 'G' in the UI)
    pub enabled: bool,
}

/// Data source configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DataConfig {
    /// Optional path to a JSON file of group records, overriding the
    /// records bundled into the binary
    pub groups_file: Option<PathBuf>,
}

/// Navigation overlay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    pub entries: Vec<NavEntry>,
}

/// One entry of the navigation overlay
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavEntry {
    pub label: String,
    pub destination: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            mouse_enabled: true,
            map_height: MAP_HEIGHT_DEFAULT,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            show_schedules: true,
            show_references: true,
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            entries: vec![
                NavEntry {
                    label: "Inicio".to_string(),
                    destination: "/".to_string(),
                },
                NavEntry {
                    label: "Directorio".to_string(),
                    destination: "/directorio".to_string(),
                },
                NavEntry {
                    label: "Blog".to_string(),
                    destination: "/blog".to_string(),
                },
                NavEntry {
                    label: "Contacto".to_string(),
                    destination: "/contacto".to_string(),
                },
            ],
        }
    }
}

impl Config {
    /// Load configuration from file or return defaults
    pub fn load() -> Result<Self> {
        let config_path = Self::find_config_file()?;

        if let Some(path) = config_path {
            Self::load_from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in order of precedence
    fn find_config_file() -> Result<Option<PathBuf>> {
        // 1. Check current directory
        let current_dir_config = PathBuf::from("directorio.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("directorio").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.ui.map_height < MAP_HEIGHT_MIN || self.ui.map_height > MAP_HEIGHT_MAX {
            anyhow::bail!(
                "map_height must be between {} and {} rows, got {}",
                MAP_HEIGHT_MIN,
                MAP_HEIGHT_MAX,
                self.ui.map_height
            );
        }

        for entry in &self.navigation.entries {
            if entry.label.is_empty() {
                anyhow::bail!("Navigation entries must have a non-empty label");
            }
            if entry.destination.is_empty() {
                anyhow::bail!(
                    "Navigation entry '{}' must have a destination",
                    entry.label
                );
            }
        }

        if let Some(path) = &self.data.groups_file {
            if !path.exists() {
                anyhow::bail!("groups_file does not exist: {}", path.display());
            }
        }

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content =
            toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# Directorio Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format("%Y-%m-%d")
        );

        let full_content = header + &toml_content;

        // Ensure the parent directory exists
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
        }

        std::fs::write(&path, full_content)
            .with_context(|| format!("Failed to write config file: {}", path.as_ref().display()))?;

        println!("{}: {}", CONFIG_GENERATED, path.as_ref().display());
        Ok(())
    }

    /// Get the XDG config directory path
    pub fn get_xdg_config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
            .map(|dir| dir.join("directorio"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
