//! Visual themes for the picker
//!
//! `use_bootstrap` picks between a filled, colored palette and a plain one
//! that only uses text modifiers. A named class can override the input field
//! colors.

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::BorderType,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::str::FromStr;

/// Color overrides registered under a class name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassStyle {
    /// Foreground color, by name ("cyan") or hex ("#00ffff")
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
}

impl ClassStyle {
    pub fn to_style(&self) -> Style {
        let mut style = Style::default();
        if let Some(fg) = self.fg.as_deref().and_then(|c| Color::from_str(c).ok()) {
            style = style.fg(fg);
        }
        if let Some(bg) = self.bg.as_deref().and_then(|c| Color::from_str(c).ok()) {
            style = style.bg(bg);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }

    /// Names of colors that do not parse
    pub fn invalid_colors(&self) -> Vec<String> {
        [&self.fg, &self.bg]
            .into_iter()
            .flatten()
            .filter(|c| Color::from_str(c).is_err())
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub border_type: BorderType,
    pub input: Style,
    pub input_border: Style,
    pub placeholder: Style,
    pub popover_border: Style,
    pub header: Style,
    pub weekday: Style,
    pub day: Style,
    pub day_other_month: Style,
    pub day_disabled: Style,
    pub day_selected: Style,
    pub day_in_range: Style,
    pub day_range_edge: Style,
    pub day_today: Style,
    pub focused: Style,
    pub time_label: Style,
    pub time_item: Style,
    pub time_selected: Style,
    pub time_disabled: Style,
    pub button: Style,
    pub primary_button: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::bootstrap()
    }
}

impl Theme {
    /// Filled selection, tinted ranges and rounded borders
    pub fn bootstrap() -> Self {
        Self {
            border_type: BorderType::Rounded,
            input: Style::default().fg(Color::White),
            input_border: Style::default().fg(Color::Gray),
            placeholder: Style::default().fg(Color::DarkGray),
            popover_border: Style::default().fg(Color::Blue),
            header: Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            weekday: Style::default().fg(Color::Gray),
            day: Style::default().fg(Color::White),
            day_other_month: Style::default().fg(Color::DarkGray),
            day_disabled: Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            day_selected: Style::default().fg(Color::White).bg(Color::Blue),
            day_in_range: Style::default().fg(Color::White).bg(Color::Indexed(17)),
            day_range_edge: Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
            day_today: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            focused: Style::default().add_modifier(Modifier::UNDERLINED),
            time_label: Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
            time_item: Style::default().fg(Color::White),
            time_selected: Style::default().fg(Color::White).bg(Color::Blue),
            time_disabled: Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT),
            button: Style::default().fg(Color::Blue),
            primary_button: Style::default().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD),
        }
    }

    /// Monochrome palette that relies on modifiers only
    pub fn plain() -> Self {
        Self {
            border_type: BorderType::Plain,
            input: Style::default(),
            input_border: Style::default(),
            placeholder: Style::default().add_modifier(Modifier::DIM),
            popover_border: Style::default(),
            header: Style::default().add_modifier(Modifier::BOLD),
            weekday: Style::default().add_modifier(Modifier::DIM),
            day: Style::default(),
            day_other_month: Style::default().add_modifier(Modifier::DIM),
            day_disabled: Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
            day_selected: Style::default().add_modifier(Modifier::REVERSED),
            day_in_range: Style::default().add_modifier(Modifier::UNDERLINED),
            day_range_edge: Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            day_today: Style::default().add_modifier(Modifier::BOLD),
            focused: Style::default().add_modifier(Modifier::UNDERLINED),
            time_label: Style::default().add_modifier(Modifier::BOLD),
            time_item: Style::default(),
            time_selected: Style::default().add_modifier(Modifier::REVERSED),
            time_disabled: Style::default().add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
            button: Style::default(),
            primary_button: Style::default().add_modifier(Modifier::REVERSED),
        }
    }

    pub fn for_bootstrap(use_bootstrap: bool) -> Self {
        if use_bootstrap {
            Self::bootstrap()
        } else {
            Self::plain()
        }
    }

    /// Layer the named class over the input field styles, if it is registered
    #[must_use]
    pub fn with_class(mut self, class_name: &str, classes: &HashMap<String, ClassStyle>) -> Self {
        if let Some(class) = classes.get(class_name) {
            let style = class.to_style();
            self.input = self.input.patch(style);
            self.input_border = self.input_border.patch(style);
        } else if !class_name.is_empty() {
            log::debug!("No style registered for class '{}'", class_name);
        }
        self
    }
}
