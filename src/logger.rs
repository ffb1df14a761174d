//! Application logging
//!
//! Records go through the `log` facade. [`Logger::init`] installs a `fern`
//! dispatch that copies every record into the in-memory buffer shown by the
//! logs dialog (`G`) and, when `[logging] enabled = true`, into a log file
//! under the data directory.

use crate::config::LoggingConfig;
use anyhow::{Context, Result};
use chrono::Local;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Oldest records are dropped past this many entries
pub const MAX_BUFFERED_LOGS: usize = 1000;

const TIMESTAMP_FORMAT: &str = "%H:%M:%S%.3f";

/// Shared logger that can be used across the application
#[derive(Clone, Default)]
pub struct Logger {
    logs: Arc<Mutex<Vec<String>>>,
    file_writer: Option<Arc<Mutex<BufWriter<File>>>>,
}

impl Logger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a logger, opening the log file when logging is enabled
    pub fn from_config(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::new());
        }
        Self::with_log_file(&Self::get_log_file_path()?)
    }

    /// Create a logger that also appends every record to `path`
    pub fn with_log_file(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .with_context(|| format!("Failed to open log file: {}", path.display()))?;

        Ok(Self {
            logs: Arc::new(Mutex::new(Vec::new())),
            file_writer: Some(Arc::new(Mutex::new(BufWriter::new(file)))),
        })
    }

    /// Dispatch that formats records and feeds them into this logger
    pub fn dispatch(&self, config: &LoggingConfig) -> Result<fern::Dispatch> {
        let sink = self.clone();

        Ok(fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format(TIMESTAMP_FORMAT),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(config.level_filter()?)
            // Keep dependency noise out of the buffer
            .level_for("crossterm", log::LevelFilter::Warn)
            .chain(fern::Output::call(move |record| sink.push(record.args().to_string()))))
    }

    /// Build the logger from config and install it as the global `log` backend
    pub fn init(config: &LoggingConfig) -> Result<Self> {
        let logger = Self::from_config(config.enabled)?;
        logger.dispatch(config)?.apply().context("Failed to install logger")?;
        Ok(logger)
    }

    pub fn is_enabled(&self) -> bool {
        self.file_writer.is_some()
    }

    /// `$XDG_DATA_HOME/innerbloom/innerbloom.log`
    pub fn get_log_file_path() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join("innerbloom").join("innerbloom.log"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
    }

    fn push(&self, formatted_message: String) {
        if let Some(writer) = &self.file_writer {
            if let Ok(mut writer) = writer.lock() {
                let _ = writeln!(writer, "{}", formatted_message);
                let _ = writer.flush();
            }
        }

        if let Ok(mut logs) = self.logs.lock() {
            logs.push(formatted_message);
            if logs.len() > MAX_BUFFERED_LOGS {
                let overflow = logs.len() - MAX_BUFFERED_LOGS;
                logs.drain(..overflow);
            }
        }
    }

    /// Get all logs sorted by date (newest first)
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }
}
