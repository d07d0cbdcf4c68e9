//! Constants used throughout the application
//!
//! This module centralizes magic strings, UI text, and other constant values
//! to improve maintainability and consistency.

// Defaults
pub const DEFAULT_DATE_FORMAT: &str = "YYYY-MM-DD";
pub const DEFAULT_TIME_FORMAT: &str = "HH:mm";
pub const DEFAULT_PLACEHOLDER: &str = "Select date";
/// Text shown for a value that could not be parsed
pub const INVALID_DATE: &str = "Invalid date";
/// Pattern for the popover header
pub const MONTH_HEADER_FORMAT: &str = "MMMM YYYY";
/// Pattern used to compare time slots against the disabled list
pub const TIME_SLOT_FORMAT: &str = "%H:%M";

// UI Labels
pub const LABEL_HOUR: &str = "Hour";
pub const LABEL_MINUTE: &str = "Minute";
pub const LABEL_CONFIRM: &str = "Confirm";
pub const NAV_PREVIOUS: &str = "‹";
pub const NAV_NEXT: &str = "›";
pub const RANGE_SEPARATOR: &str = " - ";

// UI Messages
pub const CONFIG_GENERATED: &str = "✅ Generated default configuration file";

// UI Layout Constants
/// Width of one day cell in columns
pub const DAY_CELL_WIDTH: u16 = 4;
/// Width of the popover in columns (7 day cells plus borders)
pub const POPOVER_WIDTH: u16 = DAY_CELL_WIDTH * 7 + 2;
/// Height of the input field including borders
pub const INPUT_HEIGHT: u16 = 3;
/// Visible rows in the hour and minute lists
pub const TIME_LIST_ROWS: u16 = 6;
