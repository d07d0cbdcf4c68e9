//! Configuration management for the picker
//!
//! This module handles loading, parsing, and validation of configuration files.

use crate::constants::{CONFIG_GENERATED, DEFAULT_DATE_FORMAT, DEFAULT_PLACEHOLDER, DEFAULT_TIME_FORMAT};
use crate::picker::{DisableRules, Mode, PickerProps, PickerValue, WeekStart};
use crate::ui::theme::ClassStyle;
use crate::utils::datetime::{ChronoAdapter, DateAdapter};
use crate::utils::pattern::Pattern;
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub picker: PickerConfig,
    pub theme: ThemeConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

/// A configured value: one string, or a `[start, end]` pair for ranges
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    One(String),
    Pair(Vec<String>),
}

/// Picker behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PickerConfig {
    /// Options: "single", "datetime", "time", "range"
    pub mode: Mode,
    /// Initial value; a two-element array in range mode
    pub value: Option<ConfigValue>,
    /// Date pattern, moment-style ("YYYY-MM-DD") or strftime ("%Y-%m-%d")
    pub format: String,
    /// Time pattern, moment-style ("HH:mm") or strftime ("%H:%M")
    pub time_format: String,
    pub placeholder: String,
    pub disable_future: bool,
    pub disable_present: bool,
    /// Dates that cannot be picked, written with `format` or as ISO dates
    pub disabled_dates: Vec<String>,
    /// Zero-padded "HH:mm" slots that cannot be picked
    pub disabled_times: Vec<String>,
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    /// Show preset buttons (range mode only)
    pub show_quick_select: bool,
    /// Options: "sunday", "monday"
    pub week_start: WeekStart,
}

/// Theme configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Filled, colored palette instead of the plain one
    pub use_bootstrap: bool,
    /// Class from `classes` layered over the input field
    pub custom_class_name: String,
    pub classes: HashMap<String, ClassStyle>,
}

/// Host UI configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Enable mouse support
    pub mouse_enabled: bool,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Write log records to a file
    pub enabled: bool,
    /// Options: "error", "warn", "info", "debug", "trace"
    pub level: String,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Single,
            value: None,
            format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            disable_future: false,
            disable_present: false,
            disabled_dates: Vec::new(),
            disabled_times: Vec::new(),
            min_date: None,
            max_date: None,
            show_quick_select: false,
            week_start: WeekStart::Sunday,
        }
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            use_bootstrap: true,
            custom_class_name: String::new(),
            classes: HashMap::new(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { mouse_enabled: true }
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

impl LoggingConfig {
    pub fn level_filter(&self) -> Result<log::LevelFilter> {
        self.level
            .parse()
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
        let current_dir_config = PathBuf::from("datetime-selector.toml");
        if current_dir_config.exists() {
            return Ok(Some(current_dir_config));
        }

        // 2. Check XDG config directory
        if let Some(config_dir) = dirs::config_dir() {
            let xdg_config = config_dir.join("datetime-selector").join("config.toml");
            if xdg_config.exists() {
                return Ok(Some(xdg_config));
            }
        }

        Ok(None)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        // Resolving the props checks patterns, dates and the value shape
        let props = self.picker_props()?;

        DisableRules::from_props(&props)
            .validate()
            .context("Invalid picker constraints")?;

        for (name, class) in &self.theme.classes {
            let invalid = class.invalid_colors();
            if !invalid.is_empty() {
                anyhow::bail!("Theme class '{}' has invalid colors: {}", name, invalid.join(", "));
            }
        }

        self.logging.level_filter()?;
        Ok(())
    }

    /// Turn the `[picker]` and `[theme]` sections into picker props
    pub fn picker_props(&self) -> Result<PickerProps> {
        let picker = &self.picker;
        let date_pattern = Pattern::new(&picker.format).context("Invalid format")?;
        Pattern::new(&picker.time_format).context("Invalid time_format")?;

        // Only parsing is needed here, so the clock is irrelevant
        let dates = ChronoAdapter::default();
        let parse = |field: &str, text: &str| -> Result<NaiveDate> {
            dates
                .parse_date(text, &date_pattern)
                .with_context(|| format!("Invalid date in {}", field))
        };

        let disabled_dates = picker
            .disabled_dates
            .iter()
            .map(|d| parse("disabled_dates", d))
            .collect::<Result<Vec<_>>>()?;

        let mut props = PickerProps::new(picker.mode)
            .format(picker.format.clone())
            .time_format(picker.time_format.clone())
            .placeholder(picker.placeholder.clone())
            .disable_future(picker.disable_future)
            .disable_present(picker.disable_present)
            .disabled_dates(disabled_dates)
            .disabled_times(picker.disabled_times.iter().cloned())
            .show_quick_select(picker.show_quick_select)
            .use_bootstrap(self.theme.use_bootstrap)
            .custom_class_name(self.theme.custom_class_name.clone())
            .week_start(picker.week_start);

        if let Some(min) = &picker.min_date {
            props = props.min_date(parse("min_date", min)?);
        }
        if let Some(max) = &picker.max_date {
            props = props.max_date(parse("max_date", max)?);
        }
        if let Some(value) = &picker.value {
            props = props.value(Self::picker_value(picker.mode, value)?);
        }

        Ok(props)
    }

    fn picker_value(mode: Mode, value: &ConfigValue) -> Result<PickerValue> {
        match (mode, value) {
            (Mode::Range, ConfigValue::Pair(pair)) if pair.len() <= 2 => Ok(PickerValue::Range(
                pair.first().cloned(),
                pair.get(1).cloned(),
            )),
            (Mode::Single, ConfigValue::One(s)) => Ok(PickerValue::Date(s.clone())),
            (Mode::DateTime, ConfigValue::One(s)) => Ok(PickerValue::DateTime(s.clone())),
            (Mode::Time, ConfigValue::One(s)) => Ok(PickerValue::Time(s.clone())),
            (mode, value) => anyhow::bail!("value {:?} does not fit picker mode '{}'", value, mode),
        }
    }

    /// Generate default configuration file
    pub fn generate_default_config<P: AsRef<Path>>(path: P) -> Result<()> {
        let config = Self::default();
        let toml_content = toml::to_string_pretty(&config).context("Failed to serialize default config")?;

        // Add header comment
        let header = format!(
            "# datetime-selector Configuration File\n# Generated on {}\n\n",
            chrono::Local::now().format(crate::utils::datetime::ISO_DATE_FORMAT)
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
            .map(|dir| dir.join("datetime-selector"))
    }

    /// Get the default config file path
    pub fn get_default_config_path() -> Result<PathBuf> {
        Ok(Self::get_xdg_config_dir()?.join("config.toml"))
    }
}
