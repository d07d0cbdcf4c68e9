//! Formatting of selections for the input field and for change events

use super::error::PickerError;
use super::mode::Mode;
use super::props::PickerProps;
use super::state::{SelectionState, Slot};
use crate::constants::{INVALID_DATE, MONTH_HEADER_FORMAT, RANGE_SEPARATOR};
use crate::utils::datetime::DateAdapter;
use crate::utils::pattern::Pattern;
use chrono::{NaiveDate, NaiveTime};

/// Patterns compiled once per picker
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formats {
    pub date: Pattern,
    pub time: Pattern,
    /// `date` and `time` joined by a space
    pub datetime: Pattern,
    pub month_header: Pattern,
}

impl Formats {
    pub fn from_props(props: &PickerProps) -> Result<Self, PickerError> {
        let date = Pattern::new(&props.format)?;
        let time = Pattern::new(&props.time_format)?;
        let datetime = date.join(" ", &time);
        Ok(Self {
            date,
            time,
            datetime,
            month_header: Pattern::new(MONTH_HEADER_FORMAT)?,
        })
    }
}

/// Text for the input field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    pub text: String,
    pub is_placeholder: bool,
}

impl DisplayText {
    fn value(text: String) -> Self {
        Self {
            text,
            is_placeholder: false,
        }
    }

    fn placeholder(placeholder: &str) -> Self {
        Self {
            text: placeholder.to_string(),
            is_placeholder: true,
        }
    }
}

/// Render the current selection the way the input field shows it
pub fn display_text(
    dates: &dyn DateAdapter,
    formats: &Formats,
    state: &SelectionState,
    placeholder: &str,
) -> DisplayText {
    let date_text = |slot: Slot<NaiveDate>| match slot {
        Slot::Valid(date) => dates.format_date(date, &formats.date),
        Slot::Invalid => INVALID_DATE.to_string(),
    };

    match state.mode {
        Mode::Range => match (state.range_start, state.range_end) {
            (Some(start), Some(end)) => {
                DisplayText::value(format!("{}{}{}", date_text(start), RANGE_SEPARATOR, date_text(end)))
            }
            _ => DisplayText::placeholder(placeholder),
        },
        Mode::DateTime => match (state.selected_date, state.selected_time) {
            (Some(Slot::Valid(date)), Slot::Valid(time)) => {
                DisplayText::value(dates.format_datetime(date.and_time(time), &formats.datetime))
            }
            (Some(Slot::Valid(date)), Slot::Invalid) => {
                DisplayText::value(dates.format_datetime(date.and_time(NaiveTime::default()), &formats.datetime))
            }
            (Some(Slot::Invalid), _) => DisplayText::value(INVALID_DATE.to_string()),
            (None, _) => DisplayText::placeholder(placeholder),
        },
        Mode::Time => DisplayText::value(match state.selected_time {
            Slot::Valid(time) => dates.format_time(time, &formats.time),
            Slot::Invalid => INVALID_DATE.to_string(),
        }),
        Mode::Single => match state.selected_date {
            Some(slot) => DisplayText::value(date_text(slot)),
            None => DisplayText::placeholder(placeholder),
        },
    }
}
