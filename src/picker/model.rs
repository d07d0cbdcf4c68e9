//! The picker model: selection state plus every operation a user can perform
//!
//! `Picker` knows nothing about terminals. Each mutation that completes a
//! selection returns the formatted [`ChangeEvent`] and closes the popover;
//! everything else returns `None` or `false`.

use super::disable::DisableRules;
use super::display::{display_text, DisplayText, Formats};
use super::error::PickerError;
use super::grid::CalendarGrid;
use super::mode::{ChangeEvent, Mode, PickerValue};
use super::props::PickerProps;
use super::quick_range::QuickRange;
use super::state::{SelectionState, Slot};
use crate::utils::datetime::{ChronoAdapter, DateAdapter, SystemClock, Unit};
use chrono::{NaiveDate, NaiveTime, Timelike};

pub struct Picker {
    props: PickerProps,
    dates: Box<dyn DateAdapter>,
    rules: DisableRules,
    formats: Formats,
    state: SelectionState,
}

impl std::fmt::Debug for Picker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Picker")
            .field("props", &self.props)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl Picker {
    /// Build a picker that reads "today" from the system clock
    pub fn new(props: PickerProps) -> Result<Self, PickerError> {
        let dates = ChronoAdapter::new(Box::new(SystemClock), props.week_start.into());
        Self::with_adapter(props, Box::new(dates))
    }

    /// Build a picker on top of a caller-supplied date adapter
    pub fn with_adapter(props: PickerProps, dates: Box<dyn DateAdapter>) -> Result<Self, PickerError> {
        let formats = Formats::from_props(&props)?;
        let rules = DisableRules::from_props(&props);
        if let Err(e) = rules.validate() {
            log::warn!("Picker constraints look wrong: {}", e);
        }

        let now = dates.now();
        let working_time = now
            .time()
            .with_second(0)
            .and_then(|t| t.with_nanosecond(0))
            .unwrap_or_default();
        let state = SelectionState::new(props.mode, dates.start_of(now.date(), Unit::Month), working_time);

        let mut picker = Self {
            props,
            dates,
            rules,
            formats,
            state,
        };

        if let Some(value) = picker.props.value.clone() {
            if let Err(e) = picker.set_value(&value) {
                log::warn!("Ignoring initial value: {}", e);
            }
        }

        Ok(picker)
    }

    pub fn props(&self) -> &PickerProps {
        &self.props
    }

    pub fn mode(&self) -> Mode {
        self.props.mode
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn dates(&self) -> &dyn DateAdapter {
        self.dates.as_ref()
    }

    pub fn rules(&self) -> &DisableRules {
        &self.rules
    }

    pub fn formats(&self) -> &Formats {
        &self.formats
    }

    pub fn today(&self) -> NaiveDate {
        self.dates.today()
    }

    /// Resynchronize from an external value.
    ///
    /// A blank single value leaves the state alone; a range pair is always
    /// applied, so missing bounds clear it. Values that fail to parse are
    /// kept as invalid slots and logged.
    pub fn set_value(&mut self, value: &PickerValue) -> Result<(), PickerError> {
        if value.is_empty() {
            return Ok(());
        }

        match (self.props.mode, value) {
            (Mode::Range, PickerValue::Range(start, end)) => {
                self.state.range_start = start.as_deref().filter(|s| !s.trim().is_empty()).map(|s| self.parse_date(s));
                self.state.range_end = end.as_deref().filter(|s| !s.trim().is_empty()).map(|s| self.parse_date(s));
            }
            (Mode::Time, PickerValue::Time(text)) => {
                self.state.selected_time = self.warn_invalid(self.dates.parse_time(text, &self.formats.time));
            }
            (Mode::DateTime, PickerValue::DateTime(text)) => {
                match self.dates.parse_datetime(text, &self.formats.datetime) {
                    Ok(value) => {
                        self.state.selected_date = Some(Slot::Valid(value.date()));
                        self.state.selected_time = Slot::Valid(value.time());
                    }
                    Err(_) => self.state.selected_date = Some(self.parse_date(text)),
                }
            }
            (Mode::Single | Mode::DateTime, PickerValue::Date(text)) => {
                self.state.selected_date = Some(self.parse_date(text));
            }
            (mode, value) => {
                return Err(PickerError::ValueShape {
                    mode: mode.to_string(),
                    value: value.to_string(),
                })
            }
        }

        log::debug!("Picker value synchronized from {}", value);
        Ok(())
    }

    fn parse_date(&self, text: &str) -> Slot<NaiveDate> {
        self.warn_invalid(self.dates.parse_date(text, &self.formats.date))
    }

    fn warn_invalid<T>(&self, result: Result<T, PickerError>) -> Slot<T> {
        if let Err(e) = &result {
            log::warn!("{}", e);
        }
        result.into()
    }

    // Popover visibility

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn open(&mut self) {
        self.state.is_open = true;
    }

    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    pub fn toggle_open(&mut self) {
        self.state.is_open = !self.state.is_open;
    }

    // Month navigation

    pub fn current_month(&self) -> NaiveDate {
        self.state.current_month
    }

    pub fn previous_month(&mut self) {
        self.state.current_month = self.dates.subtract(self.state.current_month, 1, Unit::Month);
    }

    pub fn next_month(&mut self) {
        self.state.current_month = self.dates.add(self.state.current_month, 1, Unit::Month);
    }

    /// Point the month cursor at the month containing `date`
    pub fn show_month_of(&mut self, date: NaiveDate) {
        self.state.current_month = self.dates.start_of(date, Unit::Month);
    }

    pub fn month_title(&self) -> String {
        self.dates.format_date(self.state.current_month, &self.formats.month_header)
    }

    /// Short weekday names in grid column order
    pub fn weekday_labels(&self) -> Vec<String> {
        let first = self.dates.start_of(self.state.current_month, Unit::Week);
        first.iter_days().take(7).map(|day| day.format("%a").to_string()).collect()
    }

    pub fn grid(&self, focused: Option<NaiveDate>) -> CalendarGrid {
        CalendarGrid::build(self.dates.as_ref(), &self.state, &self.rules, focused)
    }

    // Disablement

    pub fn is_date_disabled(&self, date: NaiveDate) -> bool {
        self.rules.is_date_disabled(date, self.dates.today())
    }

    pub fn is_time_disabled(&self, hour: u32, minute: u32) -> bool {
        self.rules.is_time_disabled(hour, minute)
    }

    // Selection

    /// Handle a click on a day cell
    pub fn click_date(&mut self, date: NaiveDate) -> Option<ChangeEvent> {
        if self.is_date_disabled(date) {
            log::debug!("Ignoring click on disabled date {}", date);
            return None;
        }

        match self.props.mode {
            Mode::Range => {
                let (start, end) = self.state.click_range(date)?;
                self.state.is_open = false;
                Some(ChangeEvent::range(self.format_date(start), self.format_date(end)))
            }
            Mode::Single => {
                self.state.selected_date = Some(Slot::Valid(date));
                self.state.is_open = false;
                Some(ChangeEvent::Single(self.format_date(date)))
            }
            Mode::DateTime | Mode::Time => {
                self.state.selected_date = Some(Slot::Valid(date));
                None
            }
        }
    }

    /// Apply a quick-select preset; always completes and closes
    pub fn apply_preset(&mut self, preset: QuickRange) -> ChangeEvent {
        let (start, end) = preset.resolve(self.dates.as_ref());
        log::debug!("Applying preset {} -> {}..{}", preset.key(), start, end);
        self.state.is_open = false;

        if self.props.mode == Mode::Range {
            self.state.range_start = Some(Slot::Valid(start));
            self.state.range_end = Some(Slot::Valid(end));
            ChangeEvent::range(self.format_date(start), self.format_date(end))
        } else {
            self.state.selected_date = Some(Slot::Valid(start));
            ChangeEvent::Single(self.format_date(start))
        }
    }

    /// The working time, if it parsed
    pub fn working_time(&self) -> Option<NaiveTime> {
        self.state.selected_time.valid()
    }

    /// Set the working hour; the minute column is left alone.
    ///
    /// Returns false only for an hour outside `0..24`. Disabled slots are
    /// reachable here and rejected by [`Picker::confirm`].
    pub fn set_hour(&mut self, hour: u32) -> bool {
        let base = self.working_time().unwrap_or_default();
        self.set_working_time(base.with_hour(hour))
    }

    /// Set the working minute; returns false only for a minute outside `0..60`
    pub fn set_minute(&mut self, minute: u32) -> bool {
        let base = self.working_time().unwrap_or_default();
        self.set_working_time(base.with_minute(minute))
    }

    fn set_working_time(&mut self, time: Option<NaiveTime>) -> bool {
        match time {
            Some(time) => {
                self.state.selected_time = Slot::Valid(time);
                true
            }
            None => false,
        }
    }

    /// True when the working time is a disabled slot and cannot be confirmed
    pub fn is_working_time_disabled(&self) -> bool {
        self.working_time()
            .is_some_and(|time| self.rules.is_naive_time_disabled(time))
    }

    /// Confirm the working date/time in datetime and time modes
    pub fn confirm(&mut self) -> Option<ChangeEvent> {
        let time = self.working_time()?;
        if self.is_working_time_disabled() {
            log::debug!("Not confirming disabled time slot {}", time);
            return None;
        }

        let text = match self.props.mode {
            Mode::DateTime => {
                let date = self.state.selected_date()?;
                self.dates.format_datetime(date.and_time(time), &self.formats.datetime)
            }
            Mode::Time => self.dates.format_time(time, &self.formats.time),
            Mode::Single | Mode::Range => return None,
        };

        self.state.is_open = false;
        Some(ChangeEvent::Single(text))
    }

    // Display

    pub fn display(&self) -> DisplayText {
        display_text(self.dates.as_ref(), &self.formats, &self.state, &self.props.placeholder)
    }

    pub fn format_date(&self, date: NaiveDate) -> String {
        self.dates.format_date(date, &self.formats.date)
    }
}
