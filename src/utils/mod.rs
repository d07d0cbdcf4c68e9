//! Utility modules for the picker.
//!
//! # Available Utilities
//!
//! - [`datetime`] - The injectable date arithmetic capability and its chrono implementation
//! - [`pattern`] - Moment-style format patterns translated to strftime

pub mod datetime;
pub mod pattern;
