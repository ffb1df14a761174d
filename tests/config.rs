use innerbloom::config::Config;
use innerbloom::icons::IconTheme;
use innerbloom::ui::core::Tab;
use innerbloom::utils::datetime;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.ui.default_tab, "home");
    assert_eq!(config.ui.calendar_window_days, 30);
    assert!(config.ui.mouse_enabled);
    assert_eq!(config.sheet.expanded_fraction, 0.3);
    assert_eq!(config.sheet.snap_threshold, 50.0);
    assert!(!config.display.filter_tasks_by_day);
    assert_eq!(config.display.icon_theme, IconTheme::Unicode);
    assert!(!config.logging.enabled);
    assert_eq!(config.ui.startup_tab(), Tab::Home);
}

#[test]
fn test_config_validation() {
    let mut config = Config::default();

    // Valid config should pass
    assert!(config.validate().is_ok());

    config.ui.default_tab = "inbox".to_string();
    assert!(config.validate().is_err());
    config.ui.default_tab = "Progress".to_string();
    assert!(config.validate().is_ok());

    config.ui.calendar_window_days = 0;
    assert!(config.validate().is_err());
    config.ui.calendar_window_days = 367;
    assert!(config.validate().is_err());
    config.ui.calendar_window_days = 30;

    config.sheet.expanded_fraction = 1.0;
    assert!(config.validate().is_err());
    config.sheet.expanded_fraction = 0.3;

    config.sheet.snap_threshold = 0.0;
    assert!(config.validate().is_err());
    config.sheet.snap_threshold = 50.0;

    config.sheet.points_per_row = -1.0;
    assert!(config.validate().is_err());
    config.sheet.points_per_row = 16.0;

    config.sheet.animation_ms = 10_000;
    assert!(config.validate().is_err());
    config.sheet.animation_ms = 0;
    assert!(config.validate().is_ok());
}

#[test]
fn test_invalid_formats_rejected() {
    let mut config = Config::default();
    config.display.month_format = "%Q".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.logging.level = "loud".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_formats_needing_time_fields() {
    // Month and weekday labels render plain dates, so time and zone fields fail
    let mut config = Config::default();
    config.display.month_format = "%B %Y %Z".to_string();
    assert!(config.validate().is_err());

    let mut config = Config::default();
    config.display.weekday_format = "%a %H:%M".to_string();
    assert!(config.validate().is_err());

    // Dialog titles render entry timestamps, which carry a time
    let mut config = Config::default();
    config.display.date_format = "%Y-%m-%d %H:%M".to_string();
    assert!(config.validate().is_ok());

    config.display.date_format = "%Y-%m-%d %Q".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_config_serialization() {
    let config = Config::default();
    let toml_str = toml::to_string_pretty(&config).unwrap();
    assert!(toml_str.contains("default_tab = \"home\""));
    assert!(toml_str.contains("calendar_window_days = 30"));
    assert!(toml_str.contains("icon_theme = \"unicode\""));
}

#[test]
fn test_partial_config_deserialization() {
    // Partial TOML configs merge with defaults
    let partial_toml = r#"
[ui]
default_tab = "ponders"

[display]
icon_theme = "ascii"

[logging]
enabled = true
"#;

    let config: Config = toml::from_str(partial_toml).unwrap();

    assert_eq!(config.ui.startup_tab(), Tab::Ponders);
    assert_eq!(config.display.icon_theme, IconTheme::Ascii);
    assert!(config.logging.enabled);

    assert!(config.ui.mouse_enabled);
    assert_eq!(config.ui.user_name, "Friend");
    assert_eq!(config.sheet.bottom_inset_rows, 1);
    assert_eq!(config.display.date_format, datetime::DEFAULT_DATE_FORMAT);
    assert_eq!(config.logging.level, "info");
}

#[test]
fn test_empty_config_deserialization() {
    let config: Config = toml::from_str("").unwrap();
    let default_config = Config::default();

    assert_eq!(config.ui.default_tab, default_config.ui.default_tab);
    assert_eq!(config.sheet.points_per_row, default_config.sheet.points_per_row);
    assert_eq!(config.logging.enabled, default_config.logging.enabled);
    assert_eq!(config.display.month_format, default_config.display.month_format);
}

#[test]
fn test_load_from_file_validates() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("innerbloom_test_load");
    let _ = fs::remove_dir_all(&temp_dir);
    fs::create_dir_all(&temp_dir).unwrap();

    let good = temp_dir.join("good.toml");
    fs::write(&good, "[sheet]\nsnap_threshold = 80.0\n").unwrap();
    let config = Config::load_from_file(&good).unwrap();
    assert_eq!(config.sheet.snap_threshold, 80.0);

    let bad = temp_dir.join("bad.toml");
    fs::write(&bad, "[sheet]\nexpanded_fraction = 2.0\n").unwrap();
    assert!(Config::load_from_file(&bad).is_err());

    let _ = fs::remove_dir_all(&temp_dir);
}

#[test]
fn test_generate_config_creates_directory() {
    use std::fs;

    let temp_dir = std::env::temp_dir().join("innerbloom_test_config");
    let config_path = temp_dir.join("nested").join("config.toml");

    if temp_dir.exists() {
        let _ = fs::remove_dir_all(&temp_dir);
    }
    assert!(!temp_dir.exists());

    let result = Config::generate_default_config(&config_path);
    assert!(result.is_ok());

    assert!(config_path.parent().unwrap().exists());
    assert!(config_path.exists());

    let content = fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("# InnerBloom Configuration File"));
    assert!(content.contains("default_tab = \"home\""));

    // The generated file loads back cleanly
    assert!(Config::load_from_file(&config_path).is_ok());

    let _ = fs::remove_dir_all(&temp_dir);
}
