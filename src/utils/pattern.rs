//! Format pattern handling
//!
//! Pickers are configured with moment-style patterns such as `YYYY-MM-DD` or
//! `hh:mm A`. Chrono speaks strftime, so every pattern is translated once when
//! the picker is built. A pattern that already contains `%` is taken to be a
//! strftime pattern and is used as-is.

use crate::picker::PickerError;
use chrono::format::{Fixed, Item, StrftimeItems};

/// Moment tokens and their strftime equivalents, longest first so that `MMMM`
/// wins over `MM` and `M`.
const TOKENS: &[(&str, &str)] = &[
    ("YYYY", "%Y"),
    ("MMMM", "%B"),
    ("dddd", "%A"),
    ("MMM", "%b"),
    ("ddd", "%a"),
    ("YY", "%y"),
    ("MM", "%m"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("M", "%-m"),
    ("D", "%-d"),
    ("H", "%-H"),
    ("h", "%-I"),
    ("m", "%-M"),
    ("s", "%-S"),
    ("A", "%p"),
    ("a", "%P"),
];

/// A validated format pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    source: String,
    strftime: String,
}

impl Pattern {
    /// Translate and validate a pattern
    pub fn new(source: &str) -> Result<Self, PickerError> {
        if source.trim().is_empty() {
            return Err(PickerError::InvalidPattern {
                pattern: source.to_string(),
                reason: "pattern is empty".to_string(),
            });
        }

        let strftime = if source.contains('%') {
            source.to_string()
        } else {
            translate(source)?
        };

        if StrftimeItems::new(&strftime).any(|item| matches!(item, Item::Error)) {
            return Err(PickerError::InvalidPattern {
                pattern: source.to_string(),
                reason: format!("'{}' is not a valid strftime pattern", strftime),
            });
        }

        // Picker values carry no timezone, so offset items can never format
        if StrftimeItems::new(&strftime).any(|item| needs_offset(&item)) {
            return Err(PickerError::InvalidPattern {
                pattern: source.to_string(),
                reason: "timezone and offset fields are not supported".to_string(),
            });
        }

        Ok(Self {
            source: source.to_string(),
            strftime,
        })
    }

    /// Join two patterns with a literal separator, e.g. a date and a time pattern
    pub fn join(&self, separator: &str, other: &Pattern) -> Self {
        Self {
            source: format!("{}{}{}", self.source, separator, other.source),
            strftime: format!("{}{}{}", self.strftime, escape(separator), other.strftime),
        }
    }

    /// The pattern as it was configured
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The chrono strftime equivalent
    pub fn strftime(&self) -> &str {
        &self.strftime
    }
}

fn translate(source: &str) -> Result<String, PickerError> {
    let mut out = String::with_capacity(source.len() * 2);
    let mut rest = source;

    'outer: while let Some(c) = rest.chars().next() {
        if c == '[' {
            let Some(close) = rest.find(']') else {
                return Err(PickerError::InvalidPattern {
                    pattern: source.to_string(),
                    reason: "unterminated '[' literal".to_string(),
                });
            };
            out.push_str(&escape(&rest[1..close]));
            rest = &rest[close + 1..];
            continue;
        }

        for (token, replacement) in TOKENS {
            if let Some(stripped) = rest.strip_prefix(token) {
                out.push_str(replacement);
                rest = stripped;
                continue 'outer;
            }
        }

        out.push_str(&escape(&c.to_string()));
        rest = &rest[c.len_utf8()..];
    }

    Ok(out)
}

fn needs_offset(item: &Item<'_>) -> bool {
    matches!(
        item,
        Item::Fixed(
            Fixed::TimezoneName
                | Fixed::TimezoneOffset
                | Fixed::TimezoneOffsetZ
                | Fixed::TimezoneOffsetColon
                | Fixed::TimezoneOffsetColonZ
                | Fixed::TimezoneOffsetDoubleColon
                | Fixed::TimezoneOffsetTripleColon
                | Fixed::RFC2822
                | Fixed::RFC3339
        )
    )
}

fn escape(literal: &str) -> String {
    literal.replace('%', "%%")
}
