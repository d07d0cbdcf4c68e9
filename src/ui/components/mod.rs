//! Reusable UI components

pub mod calendar_view;
pub mod common;
pub mod date_time_selector;
pub mod hit_map;
pub mod quick_select_bar;
pub mod status_bar;
pub mod time_picker;

// Component exports
pub use calendar_view::CalendarView;
pub use date_time_selector::DateTimeSelector;
pub use hit_map::{HitMap, HitTarget};
pub use quick_select_bar::QuickSelectBar;
pub use status_bar::StatusBar;
pub use time_picker::TimePicker;
