use crate::picker::{ChangeEvent, QuickRange};
use chrono::NaiveDate;

/// Section of an open popover that receives keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusSection {
    QuickSelect,
    #[default]
    Calendar,
    Hours,
    Minutes,
    Confirm,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Popover
    Open,
    Close,
    ToggleOpen,

    // Navigation
    PreviousMonth,
    NextMonth,
    MoveFocus(i64), // Days to move the focused day by
    FocusToday,
    FocusSection(FocusSection),
    NextSection,
    PreviousSection,
    ScrollHours(i32),
    ScrollMinutes(i32),
    PreviousPreset,
    NextPreset,

    // Selection
    SelectDate(NaiveDate),
    SelectFocusedDate,
    ApplyPreset(QuickRange),
    ApplyFocusedPreset,
    SetHour(u32),
    SetMinute(u32),
    Confirm,

    // Emitted when a selection completes
    ValueChanged(ChangeEvent),

    // App control
    Quit,
    None,
}
