//! Picker configuration
//!
//! `PickerProps` is the full set of inputs a picker is built from. None of it
//! is mutated by the picker itself; the value is resynchronized through
//! `Picker::set_value`.

use super::mode::{Mode, PickerValue};
use crate::constants::{DEFAULT_DATE_FORMAT, DEFAULT_PLACEHOLDER, DEFAULT_TIME_FORMAT};
use chrono::{NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// First day of the calendar week
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    #[default]
    Sunday,
    Monday,
}

impl From<WeekStart> for Weekday {
    fn from(start: WeekStart) -> Self {
        match start {
            WeekStart::Sunday => Weekday::Sun,
            WeekStart::Monday => Weekday::Mon,
        }
    }
}

/// Inputs a picker is built from
#[derive(Debug, Clone, PartialEq)]
pub struct PickerProps {
    pub mode: Mode,
    pub value: Option<PickerValue>,
    /// Date pattern, moment-style (`YYYY-MM-DD`) or strftime
    pub format: String,
    /// Time pattern, moment-style (`HH:mm`) or strftime
    pub time_format: String,
    pub disable_future: bool,
    pub disable_present: bool,
    pub disabled_dates: Vec<NaiveDate>,
    /// Zero-padded `HH:mm` slots that cannot be picked
    pub disabled_times: Vec<String>,
    /// Only honored in range mode
    pub show_quick_select: bool,
    pub use_bootstrap: bool,
    pub custom_class_name: String,
    pub placeholder: String,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub week_start: WeekStart,
}

impl Default for PickerProps {
    fn default() -> Self {
        Self {
            mode: Mode::Single,
            value: None,
            format: DEFAULT_DATE_FORMAT.to_string(),
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            disable_future: false,
            disable_present: false,
            disabled_dates: Vec::new(),
            disabled_times: Vec::new(),
            show_quick_select: false,
            use_bootstrap: true,
            custom_class_name: String::new(),
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
            min_date: None,
            max_date: None,
            week_start: WeekStart::Sunday,
        }
    }
}

impl PickerProps {
    pub fn new(mode: Mode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn value(mut self, value: PickerValue) -> Self {
        self.value = Some(value);
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn time_format(mut self, time_format: impl Into<String>) -> Self {
        self.time_format = time_format.into();
        self
    }

    #[must_use]
    pub fn disable_future(mut self, disable: bool) -> Self {
        self.disable_future = disable;
        self
    }

    #[must_use]
    pub fn disable_present(mut self, disable: bool) -> Self {
        self.disable_present = disable;
        self
    }

    #[must_use]
    pub fn disabled_dates(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.disabled_dates = dates.into_iter().collect();
        self
    }

    #[must_use]
    pub fn disabled_times<S: Into<String>>(mut self, times: impl IntoIterator<Item = S>) -> Self {
        self.disabled_times = times.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn show_quick_select(mut self, show: bool) -> Self {
        self.show_quick_select = show;
        self
    }

    #[must_use]
    pub fn use_bootstrap(mut self, use_bootstrap: bool) -> Self {
        self.use_bootstrap = use_bootstrap;
        self
    }

    #[must_use]
    pub fn custom_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.custom_class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    #[must_use]
    pub fn max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    #[must_use]
    pub fn week_start(mut self, week_start: WeekStart) -> Self {
        self.week_start = week_start;
        self
    }

    /// Whether the quick-select bar is shown for this configuration
    pub fn quick_select_visible(&self) -> bool {
        self.show_quick_select && self.mode == Mode::Range
    }
}
