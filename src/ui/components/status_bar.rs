//! Status bar for the demo host

use super::common::{create_instructions_paragraph, shortcuts};
use crate::picker::ChangeEvent;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the last emitted value above the shortcut hints
    pub fn render(f: &mut Frame, area: Rect, last_change: Option<&ChangeEvent>) {
        let [value_area, help_area] = Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

        let (status_text, status_color) = match last_change {
            Some(event) => (format!("Selected: {}", event), Color::Green),
            None => ("Nothing selected yet".to_string(), Color::Gray),
        };
        let status = Paragraph::new(status_text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));
        f.render_widget(status, value_area);

        let help = create_instructions_paragraph(&[
            shortcuts::ENTER_OPEN,
            shortcuts::SEPARATOR,
            shortcuts::TAB_SECTION,
            shortcuts::SEPARATOR,
            shortcuts::ARROWS_MOVE,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CLOSE,
            shortcuts::SEPARATOR,
            shortcuts::Q_QUIT,
        ]);
        f.render_widget(help, help_area);
    }
}
