//! Picker modes and the values that flow in and out of a picker

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interaction behavior of a picker, fixed for its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Single,
    DateTime,
    Time,
    Range,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Single => "single",
            Mode::DateTime => "datetime",
            Mode::Time => "time",
            Mode::Range => "range",
        }
    }

    /// Modes that show the calendar grid
    pub fn has_calendar(&self) -> bool {
        !matches!(self, Mode::Time)
    }

    /// Modes that show the hour/minute pickers and a confirm button
    pub fn has_time(&self) -> bool {
        matches!(self, Mode::DateTime | Mode::Time)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Externally supplied value, shaped by the picker mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerValue {
    Date(String),
    DateTime(String),
    Time(String),
    Range(Option<String>, Option<String>),
}

impl PickerValue {
    /// True for a blank single value. A range pair is never empty: missing
    /// or blank bounds clear the corresponding side.
    pub fn is_empty(&self) -> bool {
        match self {
            PickerValue::Date(s) | PickerValue::DateTime(s) | PickerValue::Time(s) => s.trim().is_empty(),
            PickerValue::Range(_, _) => false,
        }
    }
}

impl fmt::Display for PickerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PickerValue::Date(s) | PickerValue::DateTime(s) | PickerValue::Time(s) => f.write_str(s),
            PickerValue::Range(start, end) => write!(
                f,
                "[{}, {}]",
                start.as_deref().unwrap_or(""),
                end.as_deref().unwrap_or("")
            ),
        }
    }
}

/// Formatted value emitted when a selection completes
///
/// Serializes to a JSON string, or to a two-element array for ranges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChangeEvent {
    Single(String),
    Range([String; 2]),
}

impl ChangeEvent {
    pub fn range(start: String, end: String) -> Self {
        ChangeEvent::Range([start, end])
    }

    /// Feed an emitted value back in as a picker value for `mode`
    pub fn into_value(self, mode: Mode) -> PickerValue {
        match (self, mode) {
            (ChangeEvent::Range([start, end]), _) => PickerValue::Range(Some(start), Some(end)),
            (ChangeEvent::Single(s), Mode::DateTime) => PickerValue::DateTime(s),
            (ChangeEvent::Single(s), Mode::Time) => PickerValue::Time(s),
            (ChangeEvent::Single(s), _) => PickerValue::Date(s),
        }
    }
}

impl fmt::Display for ChangeEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChangeEvent::Single(s) => f.write_str(s),
            ChangeEvent::Range([start, end]) => write!(f, "{}{}{}", start, crate::constants::RANGE_SEPARATOR, end),
        }
    }
}
