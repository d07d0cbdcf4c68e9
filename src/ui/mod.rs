//! UI module for the picker
//!
//! This module holds the terminal component, its rendering helpers and the
//! small host used by the demo binary.

pub mod app;
pub mod components;
pub mod core;
pub mod layout;
pub mod terminal;
pub mod theme;

pub use app::{run_app, App};
pub use layout::LayoutManager;
pub use theme::{ClassStyle, Theme};
