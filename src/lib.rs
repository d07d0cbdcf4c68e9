//! Datetime Selector - a date/time picker widget for terminal user interfaces
//!
//! This library provides a single component that renders an input field plus a
//! popover calendar and time picker, built with Ratatui. It supports four
//! selection modes: a single date, a date with a time of day, a time of day
//! only, and a date range.
//!
//! # Modules
//!
//! The library is organized into several key modules:
//!
//! * [`config`] - Picker configuration loaded from TOML files
//! * [`picker`] - Selection state, calendar grid, disablement rules and presets
//! * [`ui`] - Terminal components, rendering and the demo host loop
//! * [`utils`] - Date arithmetic and format pattern handling

/// Configuration module for loading picker settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Logging utilities for debugging and error tracking
pub mod logger;

/// Framework-independent picker model
pub mod picker;

/// Terminal user interface components and rendering
pub mod ui;

/// Utility functions for date/time handling
pub mod utils;

pub use picker::{ChangeEvent, Mode, PickerError, PickerProps, PickerValue};
pub use ui::components::DateTimeSelector;
