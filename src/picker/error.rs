//! Error types for the picker model

use thiserror::Error;

/// Problems with picker configuration or externally supplied values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickerError {
    #[error("Invalid format pattern '{pattern}': {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Cannot parse '{value}' with pattern '{pattern}'")]
    InvalidValue { value: String, pattern: String },

    #[error("Invalid disabled time '{0}': expected zero-padded HH:mm")]
    InvalidTimeSlot(String),

    #[error("Value shape '{value}' does not match picker mode '{mode}'")]
    ValueShape { mode: String, value: String },

    #[error("min_date {min} is after max_date {max}")]
    InvertedBounds { min: String, max: String },
}
