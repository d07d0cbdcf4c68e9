//! Named quick-select presets

use crate::utils::datetime::{DateAdapter, Unit};
use chrono::NaiveDate;

/// A shortcut that resolves to a concrete range relative to today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickRange {
    Today,
    Last7Days,
    Last30Days,
    ThisWeek,
    ThisMonth,
}

impl QuickRange {
    /// Presets in the order they are offered
    pub const ALL: [QuickRange; 5] = [
        QuickRange::Today,
        QuickRange::Last7Days,
        QuickRange::Last30Days,
        QuickRange::ThisWeek,
        QuickRange::ThisMonth,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            QuickRange::Today => "Today",
            QuickRange::Last7Days => "Last 7 Days",
            QuickRange::Last30Days => "Last 30 Days",
            QuickRange::ThisWeek => "This Week",
            QuickRange::ThisMonth => "This Month",
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            QuickRange::Today => "today",
            QuickRange::Last7Days => "last7days",
            QuickRange::Last30Days => "last30days",
            QuickRange::ThisWeek => "thisWeek",
            QuickRange::ThisMonth => "thisMonth",
        }
    }

    /// Resolve to `(start, end)`; `start <= end` always holds
    pub fn resolve(&self, dates: &dyn DateAdapter) -> (NaiveDate, NaiveDate) {
        let today = dates.today();
        match self {
            QuickRange::Today => (today, today),
            QuickRange::Last7Days => (dates.subtract(today, 7, Unit::Day), today),
            QuickRange::Last30Days => (dates.subtract(today, 30, Unit::Day), today),
            QuickRange::ThisWeek => (dates.start_of(today, Unit::Week), dates.end_of(today, Unit::Week)),
            QuickRange::ThisMonth => (dates.start_of(today, Unit::Month), dates.end_of(today, Unit::Month)),
        }
    }
}
