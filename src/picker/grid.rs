//! Calendar grid construction
//!
//! The grid for a month runs from the start of the week holding the 1st to
//! the end of the week holding the last day, so it is always made of whole
//! weeks and may include days from the neighbouring months.

use super::disable::DisableRules;
use super::mode::Mode;
use super::state::SelectionState;
use crate::utils::datetime::{DateAdapter, Unit};
use chrono::{Datelike, NaiveDate};

/// One day in the grid with everything the renderer needs to style it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_disabled: bool,
    pub is_selected: bool,
    pub is_in_range: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
    pub is_today: bool,
    pub is_focused: bool,
}

impl DayCell {
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// Whole-week grid for one month
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    /// First day of the displayed month
    pub month: NaiveDate,
    pub cells: Vec<DayCell>,
}

impl CalendarGrid {
    /// Build the grid for the month containing `state.current_month`
    pub fn build(
        dates: &dyn DateAdapter,
        state: &SelectionState,
        rules: &DisableRules,
        focused: Option<NaiveDate>,
    ) -> Self {
        let month = dates.start_of(state.current_month, Unit::Month);
        let first = dates.start_of(month, Unit::Week);
        let last = dates.end_of(dates.end_of(month, Unit::Month), Unit::Week);
        let today = dates.today();
        let is_range = state.mode == Mode::Range;

        let selected = state.selected_date();
        let start = state.range_start();
        let end = state.range_end();

        let cells = first
            .iter_days()
            .take_while(|day| *day <= last)
            .map(|date| DayCell {
                date,
                in_current_month: date.year() == month.year() && date.month() == month.month(),
                is_disabled: rules.is_date_disabled(date, today),
                is_selected: selected == Some(date),
                is_in_range: is_range && state.is_in_range(date),
                is_range_start: is_range && start == Some(date),
                is_range_end: is_range && end == Some(date),
                is_today: date == today,
                is_focused: focused == Some(date),
            })
            .collect();

        Self { month, cells }
    }

    /// Cells split into rows of seven
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> {
        self.cells.chunks(7)
    }

    pub fn week_count(&self) -> usize {
        self.cells.len() / 7
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().find(|cell| cell.date == date)
    }
}
