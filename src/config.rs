//! Configuration management for InnerBloom
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::CONFIG_GENERATED;
use crate::icons::IconTheme;
use crate::ui::core::drag_sheet::{DEFAULT_EXPANDED_FRACTION, DEFAULT_SNAP_THRESHOLD};
use crate::ui::core::day_selector::DEFAULT_WINDOW_DAYS;
use crate::ui::core::Tab;
use crate::utils::datetime;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Upper bound for the calendar window, one leap year
pub const MAX_WINDOW_DAYS: usize = 366;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub ui: UiConfig,
    pub sheet: SheetConfig,
    pub display: DisplayConfig,
    pub logging: LoggingConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Tab to open on startup
    /// Options: "home", "ponders", "progress", "resources"
    pub default_tab: String,
    /// Enable mouse support (required for dragging the sheet)
    pub mouse_enabled: bool,
    /// Number of days shown in the day strip, starting today
    pub calendar_window_days: usize,
    /// Name used in the Home tab greeting
    pub user_name: String,
}

/// Bottom sheet configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    /// Expanded resting offset as a fraction of the container height
    pub expanded_fraction: f32,
    /// Release translation (in points) beyond which the sheet snaps
    pub snap_threshold: f32,
    /// Rows kept clear below the collapsed sheet
    pub bottom_inset_rows: u16,
    /// Points represented by one terminal row
    pub points_per_row: f32,
    /// Duration of the eased snap animation
    pub animation_ms: u64,
}

/// Display configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Date format used in lists and dialogs
    pub date_format: String,
    /// Month header format above the day strip
    pub month_format: String,
    /// Weekday label format in the day strip
    pub weekday_format: String,
    /// Also filter goals by the selected day (journals always are)
    pub filter_tasks_by_day: bool,
    /// Icon theme on startup
    pub icon_theme: IconTheme,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write logs to a file in the data directory
    pub enabled: bool,
    /// Minimum level: "error", "warn", "info", "debug" or "trace"
    pub level: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_tab: "home".to_string(),
            mouse_enabled: true,
            calendar_window_days: DEFAULT_WINDOW_DAYS,
            user_name: "Friend".to_string(),
        }
    }
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            expanded_fraction: DEFAULT_EXPANDED_FRACTION,
            snap_threshold: DEFAULT_SNAP_THRESHOLD,
            bottom_inset_rows: 1,
            points_per_row: 16.0,
            animation_ms: 300,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            date_format: datetime::DEFAULT_DATE_FORMAT.to_string(),
            month_format: "%B %Y".to_string(),
            weekday_format: "%a".to_string(),
            filter_tasks_by_day: false,
            icon_theme: IconTheme::Unicode,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: "info".to_string(),
        }
    }
}

impl UiConfig {
    /// Startup tab, falling back to Home for unknown names
    pub fn startup_tab(&self) -> Tab {
        Tab::from_name(&self.default_tab).unwrap_or_default()
    }
}

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse::<log::LevelFilter>()
            .map_err(|_| anyhow::anyhow!("Invalid logging level '{}'", self.level))
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
        let current_dir_config = PathBuf::from("innerbloom.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("innerbloom").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if Tab::from_name(&self.ui.default_tab).is_none() {
            anyhow::bail!(
                "default_tab must be one of home, ponders, progress, resources, got '{}'",
                self.ui.default_tab
            );
        }

        if self.ui.calendar_window_days == 0 || self.ui.calendar_window_days > MAX_WINDOW_DAYS {
            anyhow::bail!(
                "calendar_window_days must be between 1 and {}, got {}",
                MAX_WINDOW_DAYS,
                self.ui.calendar_window_days
            );
        }

        let fraction = self.sheet.expanded_fraction;
        if !(fraction > 0.0 && fraction < 1.0) {
            anyhow::bail!("expanded_fraction must be strictly between 0 and 1, got {}", fraction);
        }

        if !(self.sheet.snap_threshold > 0.0) {
            anyhow::bail!("snap_threshold must be positive, got {}", self.sheet.snap_threshold);
        }

        if !(self.sheet.points_per_row > 0.0) {
            anyhow::bail!("points_per_row must be positive, got {}", self.sheet.points_per_row);
        }

        if self.sheet.animation_ms > 5000 {
            anyhow::bail!("animation_ms cannot exceed 5000");
        }

        // Validate formats by rendering them against the values they are used with
        let sample = chrono::NaiveDate::from_ymd_opt(2025, 1, 1)
            .ok_or_else(|| anyhow::anyhow!("Invalid sample date"))?;
        if datetime::format_timestamp(&datetime::start_of_day(sample), &self.display.date_format).is_none() {
            anyhow::bail!("Invalid date_format '{}'", self.display.date_format);
        }
        for (name, format) in [
            ("month_format", &self.display.month_format),
            ("weekday_format", &self.display.weekday_format),
        ] {
            if datetime::format_date(sample, format).is_none() {
                anyhow::bail!("Invalid {} '{}'", name, format);
            }
        }

        self.logging.level_filter()?;

        Ok(())
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# InnerBloom Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(datetime::DEFAULT_DATE_FORMAT)
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
            .map(|dir| dir.join("innerbloom"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
