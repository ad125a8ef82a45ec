//! Application logging.
//!
//! [`Logger`] keeps a bounded in-memory buffer that backs the log viewer
//! dialog. Every entry is also forwarded to the `log` facade, which writes to
//! a file through `fern` when file logging is enabled in the config.

use crate::config::Config;
use crate::constants::LOG_BUFFER_CAPACITY;
use crate::utils::datetime::LOG_TIMESTAMP_FORMAT;
use anyhow::{Context, Result};
use chrono::Local;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Shared logger that can be used across the application
#[derive(Clone)]
pub struct Logger {
    logs: Arc<Mutex<VecDeque<String>>>,
    log_file: Option<PathBuf>,
}

impl Logger {
    /// In-memory only logger
    pub fn new() -> Self {
        Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            log_file: None,
        }
    }

    /// Create a logger, installing the file sink when `enabled` is set
    pub fn from_config(enabled: bool) -> Result<Self> {
        if !enabled {
            return Ok(Self::new());
        }
        Self::with_log_file(Self::get_log_file_path()?)
    }

    /// Create a logger that also writes `log` records to `path`
    pub fn with_log_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let file = fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?;
        let dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{} {} {}] {}",
                    Local::now().format(LOG_TIMESTAMP_FORMAT),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(log::LevelFilter::Info)
            .chain(file);

        // A global logger can only be installed once per process.
        if let Err(e) = dispatch.apply() {
            log::warn!("File logging already initialized: {}", e);
        }

        Ok(Self {
            logs: Arc::new(Mutex::new(VecDeque::new())),
            log_file: Some(path),
        })
    }

    /// Add a log entry
    pub fn log(&self, message: String) {
        log::info!("{}", message);

        let timestamp = Local::now().format(LOG_TIMESTAMP_FORMAT).to_string();
        let formatted_message = format!("[{}] {}", timestamp, message);

        if let Ok(mut logs) = self.logs.lock() {
            if logs.len() >= LOG_BUFFER_CAPACITY {
                logs.pop_front();
            }
            logs.push_back(formatted_message);
        }
    }

    /// Get all logs, newest first
    pub fn get_logs(&self) -> Vec<String> {
        if let Ok(logs) = self.logs.lock() {
            logs.iter().rev().cloned().collect()
        } else {
            Vec::new()
        }
    }

    /// Clear all logs
    pub fn clear(&self) {
        if let Ok(mut logs) = self.logs.lock() {
            logs.clear();
        }
    }

    pub fn has_file_writer(&self) -> bool {
        self.log_file.is_some()
    }

    pub fn log_file(&self) -> Option<&Path> {
        self.log_file.as_deref()
    }

    /// Default log file location
    pub fn get_log_file_path() -> Result<PathBuf> {
        Ok(Config::get_data_dir()?.join("craftui.log"))
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
