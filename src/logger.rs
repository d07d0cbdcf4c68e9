//! Logging setup
//!
//! Library code logs through the `log` macros. When logging is enabled in the
//! config the host installs a `fern` dispatcher that writes every record to a
//! file, so a running TUI is never disturbed by output on the terminal.

use crate::config::LoggingConfig;
use anyhow::Context;
use chrono::Utc;
use std::path::PathBuf;

/// Handle on the installed file logger
#[derive(Debug, Clone, Default)]
pub struct Logger {
    log_file: Option<PathBuf>,
}

impl Logger {
    /// Create a logger and, if enabled, route `log` records to a file
    pub fn from_config(config: &LoggingConfig) -> anyhow::Result<Self> {
        let mut logger = Self::default();
        if !config.enabled {
            return Ok(logger);
        }

        let path = Self::get_log_file_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
        }

        let dispatch = fern::Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "[{}] {:<5} {}: {}",
                    Utc::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                    record.level(),
                    record.target(),
                    message
                ))
            })
            .level(config.level_filter()?)
            .chain(fern::log_file(&path).with_context(|| format!("Failed to open log file: {}", path.display()))?);

        // A global logger may already be installed, e.g. by a previous instance in tests
        if dispatch.apply().is_err() {
            log::debug!("Global logger already installed, keeping it");
        }

        logger.log_file = Some(path);
        Ok(logger)
    }

    pub fn is_enabled(&self) -> bool {
        self.log_file.is_some()
    }

    /// File records are written to, when file logging is enabled
    pub fn log_file(&self) -> Option<&PathBuf> {
        self.log_file.as_ref()
    }

    /// Default log file location under the platform data directory
    pub fn get_log_file_path() -> anyhow::Result<PathBuf> {
        let base = dirs::data_local_dir()
            .or_else(dirs::cache_dir)
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        Ok(base.join("datetime-selector").join("datetime-selector.log"))
    }
}
