//! Date and time arithmetic
//!
//! All date math in the picker goes through [`DateAdapter`], so "today", the
//! first day of the week and the parsing rules are injected per picker
//! instead of living in a process-wide default.

use crate::constants::INVALID_DATE;
use crate::picker::PickerError;
use crate::utils::pattern::Pattern;
use chrono::{Datelike, Days, Local, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use std::cmp::Ordering;
use std::fmt::Write;

/// ISO date format accepted as a fallback for every date value
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// ISO date-time formats accepted as a fallback for date-time values
const ISO_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"];

/// Calendar units understood by [`DateAdapter`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Day,
    Week,
    Month,
    Year,
}

/// Source of the current wall-clock time
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Clock backed by the local system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Clock frozen at a given instant, used for deterministic rendering and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl FixedClock {
    /// Freeze the clock at noon on the given date
    pub fn on(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Date arithmetic capability used by the picker
pub trait DateAdapter {
    /// Current wall-clock time
    fn now(&self) -> NaiveDateTime;

    /// First day of the week for week-based operations
    fn week_start(&self) -> Weekday;

    fn today(&self) -> NaiveDate {
        self.now().date()
    }

    fn parse_date(&self, input: &str, pattern: &Pattern) -> Result<NaiveDate, PickerError>;
    fn parse_datetime(&self, input: &str, pattern: &Pattern) -> Result<NaiveDateTime, PickerError>;
    fn parse_time(&self, input: &str, pattern: &Pattern) -> Result<NaiveTime, PickerError>;

    fn format_datetime(&self, value: NaiveDateTime, pattern: &Pattern) -> String;

    fn format_date(&self, date: NaiveDate, pattern: &Pattern) -> String {
        self.format_datetime(date.and_time(NaiveTime::default()), pattern)
    }

    fn format_time(&self, time: NaiveTime, pattern: &Pattern) -> String {
        self.format_datetime(self.today().and_time(time), pattern)
    }

    /// Add `amount` units to `date`; negative amounts move backwards
    fn add(&self, date: NaiveDate, amount: i64, unit: Unit) -> NaiveDate;

    fn subtract(&self, date: NaiveDate, amount: i64, unit: Unit) -> NaiveDate {
        self.add(date, -amount, unit)
    }

    fn start_of(&self, date: NaiveDate, unit: Unit) -> NaiveDate;
    fn end_of(&self, date: NaiveDate, unit: Unit) -> NaiveDate;

    /// Compare two dates at the granularity of `unit`
    fn compare(&self, a: NaiveDate, b: NaiveDate, unit: Unit) -> Ordering {
        self.start_of(a, unit).cmp(&self.start_of(b, unit))
    }

    fn is_same(&self, a: NaiveDate, b: NaiveDate, unit: Unit) -> bool {
        self.compare(a, b, unit) == Ordering::Equal
    }
}

/// [`DateAdapter`] implemented with chrono
pub struct ChronoAdapter {
    clock: Box<dyn Clock>,
    week_start: Weekday,
}

impl Default for ChronoAdapter {
    fn default() -> Self {
        Self::new(Box::new(SystemClock), Weekday::Sun)
    }
}

impl ChronoAdapter {
    pub fn new(clock: Box<dyn Clock>, week_start: Weekday) -> Self {
        Self { clock, week_start }
    }

    /// Adapter with a frozen "today", mostly for tests
    pub fn fixed(today: NaiveDate, week_start: Weekday) -> Self {
        Self::new(Box::new(FixedClock::on(today)), week_start)
    }

    fn days_into_week(&self, date: NaiveDate) -> u64 {
        let day = date.weekday().num_days_from_monday();
        let start = self.week_start.num_days_from_monday();
        u64::from((day + 7 - start) % 7)
    }
}

impl DateAdapter for ChronoAdapter {
    fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    fn week_start(&self) -> Weekday {
        self.week_start
    }

    fn parse_date(&self, input: &str, pattern: &Pattern) -> Result<NaiveDate, PickerError> {
        let input = input.trim();
        NaiveDate::parse_from_str(input, pattern.strftime())
            .or_else(|_| NaiveDate::parse_from_str(input, ISO_DATE_FORMAT))
            .or_else(|_| self.parse_datetime(input, pattern).map(|dt| dt.date()))
            .map_err(|_| PickerError::InvalidValue {
                value: input.to_string(),
                pattern: pattern.source().to_string(),
            })
    }

    fn parse_datetime(&self, input: &str, pattern: &Pattern) -> Result<NaiveDateTime, PickerError> {
        let input = input.trim();
        if let Ok(value) = NaiveDateTime::parse_from_str(input, pattern.strftime()) {
            return Ok(value);
        }
        if let Ok(value) = chrono::DateTime::parse_from_rfc3339(input) {
            return Ok(value.naive_local());
        }
        ISO_DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(input, format).ok())
            .ok_or_else(|| PickerError::InvalidValue {
                value: input.to_string(),
                pattern: pattern.source().to_string(),
            })
    }

    fn parse_time(&self, input: &str, pattern: &Pattern) -> Result<NaiveTime, PickerError> {
        let input = input.trim();
        NaiveTime::parse_from_str(input, pattern.strftime())
            .or_else(|_| NaiveTime::parse_from_str(input, "%H:%M"))
            .map_err(|_| PickerError::InvalidValue {
                value: input.to_string(),
                pattern: pattern.source().to_string(),
            })
    }

    fn format_datetime(&self, value: NaiveDateTime, pattern: &Pattern) -> String {
        let mut out = String::new();
        match write!(out, "{}", value.format(pattern.strftime())) {
            Ok(()) => out,
            Err(_) => INVALID_DATE.to_string(),
        }
    }

    fn add(&self, date: NaiveDate, amount: i64, unit: Unit) -> NaiveDate {
        let magnitude = amount.unsigned_abs();
        let forward = amount >= 0;
        let moved = match unit {
            Unit::Day | Unit::Week => {
                let days = if unit == Unit::Week { magnitude.saturating_mul(7) } else { magnitude };
                if forward {
                    date.checked_add_days(Days::new(days))
                } else {
                    date.checked_sub_days(Days::new(days))
                }
            }
            Unit::Month | Unit::Year => {
                let months = if unit == Unit::Year { magnitude.saturating_mul(12) } else { magnitude };
                let months = Months::new(u32::try_from(months).unwrap_or(u32::MAX));
                if forward {
                    date.checked_add_months(months)
                } else {
                    date.checked_sub_months(months)
                }
            }
        };
        moved.unwrap_or(date)
    }

    fn start_of(&self, date: NaiveDate, unit: Unit) -> NaiveDate {
        match unit {
            Unit::Day => date,
            Unit::Week => date
                .checked_sub_days(Days::new(self.days_into_week(date)))
                .unwrap_or(date),
            Unit::Month => date.with_day(1).unwrap_or(date),
            Unit::Year => date.with_ordinal(1).unwrap_or(date),
        }
    }

    fn end_of(&self, date: NaiveDate, unit: Unit) -> NaiveDate {
        match unit {
            Unit::Day => date,
            Unit::Week => self
                .start_of(date, Unit::Week)
                .checked_add_days(Days::new(6))
                .unwrap_or(date),
            Unit::Month | Unit::Year => {
                let start = self.start_of(date, unit);
                let next = self.add(start, 1, unit);
                if next == start {
                    return date;
                }
                next.pred_opt().unwrap_or(date)
            }
        }
    }
}
