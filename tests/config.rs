use directorio::config::{Config, NavEntry};
use directorio::constants::MAP_HEIGHT_DEFAULT;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.map_height, MAP_HEIGHT_DEFAULT);
    assert!(config.display.show_schedules);
    assert!(config.display.show_references);
    assert!(!config.logging.enabled);
    assert!(config.data.groups_file.is_none());
    assert_eq!(config.navigation.entries.len(), 4);
    assert_eq!(config.navigation.entries[0].label, "Inicio");
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    // Map panel too small should fail
    config.ui.map_height = 2;
    assert!(config.validate().is_err());

    // Map panel too tall should fail
    config.ui.map_height = 100;
    assert!(config.validate().is_err());

    // Reset and test a navigation entry without a label
    config.ui.map_height = MAP_HEIGHT_DEFAULT;
    config.navigation.entries.push(NavEntry {
        label: String::new(),
        destination: "/somewhere".to_string(),
    });
    assert!(config.validate().is_err());
}

#[test]
fn test_missing_groups_file_fails_validation() {
    let mut config = Config::default();
    config.data.groups_file = Some("/nonexistent/groups.json".into());
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("mouse_enabled = true"));
    assert!(toml_str.contains(&format!("map_height = {}", MAP_HEIGHT_DEFAULT)));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
map_height = 8

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.ui.map_height, 8);
    assert!(config.logging.enabled);

    // Unspecified values use defaults
    assert!(config.ui.mouse_enabled);
    assert!(config.display.show_schedules);
    assert_eq!(config.navigation.entries.len(), 4);
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.mouse_enabled, default_config.ui.mouse_enabled);
    assert_eq!(config.ui.map_height, default_config.ui.map_height);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
}

#[test]
fn test_load_from_file_rejects_invalid_values() {
    use std::fs;

    let path = std::env::temp_dir().join("directorio_test_invalid.toml");
    fs::write(&path, "[ui]\nmap_height = 1\n").unwrap();

    let result = Config::load_from_file(&path);
    assert!(result.is_err());

    let _ = fs::remove_file(&path);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("directorio_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());
    assert!(config_path.exists());

    // The generated file must round-trip through the loader
    let loaded = Config::load_from_file(&config_path);
    assert!(loaded.is_ok());

    let _ = fs::remove_dir_all(&temp_dir);
}
