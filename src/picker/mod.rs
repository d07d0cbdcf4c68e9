//! Framework-independent picker model.
//!
//! This module holds everything about the picker that does not depend on how
//! it is drawn: the selection state and range state machine, the calendar
//! grid, the disablement rules, the quick-select presets and the display
//! formatter. The terminal component in [`crate::ui`] drives a [`Picker`] and
//! renders what it exposes.
//!
//! # Module Components
//!
//! - [`model`] - The [`Picker`] and its user-facing operations
//! - [`state`] - Selection state and the range state machine
//! - [`grid`] - Whole-week calendar grid for a month
//! - [`disable`] - Date and time slot disablement rules
//! - [`quick_range`] - Named presets such as "last 7 days"
//! - [`display`] - Input field text and compiled patterns
//! - [`mode`] - Modes, input values and change events

pub mod disable;
pub mod display;
pub mod error;
pub mod grid;
pub mod mode;
pub mod model;
pub mod props;
pub mod quick_range;
pub mod state;

pub use disable::DisableRules;
pub use display::{DisplayText, Formats};
pub use error::PickerError;
pub use grid::{CalendarGrid, DayCell};
pub use mode::{ChangeEvent, Mode, PickerValue};
pub use model::Picker;
pub use props::{PickerProps, WeekStart};
pub use quick_range::QuickRange;
pub use state::{RangePhase, SelectionState, Slot};
