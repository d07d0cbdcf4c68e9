//! Disablement rules for dates and time slots

use super::error::PickerError;
use super::props::PickerProps;
use crate::constants::TIME_SLOT_FORMAT;
use chrono::{NaiveDate, NaiveTime};
use std::collections::{BTreeSet, HashSet};

/// Decides whether a date or time slot may be selected
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisableRules {
    pub disable_future: bool,
    pub disable_present: bool,
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub disabled_dates: BTreeSet<NaiveDate>,
    pub disabled_times: HashSet<String>,
}

impl DisableRules {
    pub fn from_props(props: &PickerProps) -> Self {
        Self {
            disable_future: props.disable_future,
            disable_present: props.disable_present,
            min_date: props.min_date,
            max_date: props.max_date,
            disabled_dates: props.disabled_dates.iter().copied().collect(),
            disabled_times: props.disabled_times.iter().map(|t| t.trim().to_string()).collect(),
        }
    }

    /// Check a date against every rule, with `today` supplied by the caller
    pub fn is_date_disabled(&self, date: NaiveDate, today: NaiveDate) -> bool {
        if self.disable_future && date > today {
            return true;
        }
        if self.disable_present && date == today {
            return true;
        }
        if self.min_date.is_some_and(|min| date < min) {
            return true;
        }
        if self.max_date.is_some_and(|max| date > max) {
            return true;
        }
        self.disabled_dates.contains(&date)
    }

    pub fn is_time_disabled(&self, hour: u32, minute: u32) -> bool {
        self.disabled_times.contains(&time_slot(hour, minute))
    }

    pub fn is_naive_time_disabled(&self, time: NaiveTime) -> bool {
        self.disabled_times
            .contains(&time.format(TIME_SLOT_FORMAT).to_string())
    }

    /// Reject time slots that are not zero-padded `HH:mm`
    pub fn validate(&self) -> Result<(), PickerError> {
        for slot in &self.disabled_times {
            let parsed = NaiveTime::parse_from_str(slot, TIME_SLOT_FORMAT)
                .map_err(|_| PickerError::InvalidTimeSlot(slot.clone()))?;
            if parsed.format(TIME_SLOT_FORMAT).to_string() != *slot {
                return Err(PickerError::InvalidTimeSlot(slot.clone()));
            }
        }
        if let (Some(min), Some(max)) = (self.min_date, self.max_date) {
            if min > max {
                return Err(PickerError::InvertedBounds {
                    min: min.to_string(),
                    max: max.to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Zero-padded `HH:mm` key for a time slot
pub fn time_slot(hour: u32, minute: u32) -> String {
    format!("{:02}:{:02}", hour, minute)
}
