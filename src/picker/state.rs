//! Selection state and the range selection state machine

use super::mode::Mode;
use chrono::{NaiveDate, NaiveTime};

/// A value synchronized from outside that may have failed to parse
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot<T> {
    Valid(T),
    Invalid,
}

impl<T: Copy> Slot<T> {
    pub fn valid(&self) -> Option<T> {
        match self {
            Slot::Valid(value) => Some(*value),
            Slot::Invalid => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Slot::Valid(_))
    }
}

impl<T, E> From<Result<T, E>> for Slot<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Slot::Valid(value),
            Err(_) => Slot::Invalid,
        }
    }
}

/// Where the range state machine currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangePhase {
    Empty,
    StartOnly,
    Complete,
}

/// Mutable state owned by one picker instance
#[derive(Debug, Clone, PartialEq)]
pub struct SelectionState {
    pub mode: Mode,
    pub selected_date: Option<Slot<NaiveDate>>,
    pub selected_time: Slot<NaiveTime>,
    pub range_start: Option<Slot<NaiveDate>>,
    pub range_end: Option<Slot<NaiveDate>>,
    /// First day of the month shown in the grid
    pub current_month: NaiveDate,
    pub is_open: bool,
}

impl SelectionState {
    pub fn new(mode: Mode, current_month: NaiveDate, now: NaiveTime) -> Self {
        Self {
            mode,
            selected_date: None,
            selected_time: Slot::Valid(now),
            range_start: None,
            range_end: None,
            current_month,
            is_open: false,
        }
    }

    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selected_date.and_then(|slot| slot.valid())
    }

    pub fn range_start(&self) -> Option<NaiveDate> {
        self.range_start.and_then(|slot| slot.valid())
    }

    pub fn range_end(&self) -> Option<NaiveDate> {
        self.range_end.and_then(|slot| slot.valid())
    }

    /// Range phase, counting only successfully parsed bounds
    pub fn range_phase(&self) -> RangePhase {
        match (self.range_start(), self.range_end()) {
            (Some(_), Some(_)) => RangePhase::Complete,
            (Some(_), None) => RangePhase::StartOnly,
            _ => RangePhase::Empty,
        }
    }

    /// Feed a date click into the range state machine.
    ///
    /// Returns the completed `(start, end)` pair when the click finishes a
    /// range. A click that lands before the start swaps the bounds so that
    /// `start <= end` holds.
    pub fn click_range(&mut self, date: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        match (self.range_phase(), self.range_start()) {
            (RangePhase::StartOnly, Some(start)) => {
                let (start, end) = if date < start { (date, start) } else { (start, date) };
                self.range_start = Some(Slot::Valid(start));
                self.range_end = Some(Slot::Valid(end));
                Some((start, end))
            }
            _ => {
                self.range_start = Some(Slot::Valid(date));
                self.range_end = None;
                None
            }
        }
    }

    pub fn is_in_range(&self, date: NaiveDate) -> bool {
        match (self.range_start(), self.range_end()) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }
}
