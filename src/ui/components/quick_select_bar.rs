//! Quick-select preset buttons

use super::hit_map::HitMap;
use crate::picker::QuickRange;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::Line,
    widgets::Paragraph,
    Frame,
};

pub struct QuickSelectBar;

impl QuickSelectBar {
    /// Flow the preset buttons into rows of at most `width` columns.
    ///
    /// Positions are relative to the bar's top-left corner.
    pub fn layout(width: u16) -> Vec<(Rect, QuickRange)> {
        let mut buttons = Vec::with_capacity(QuickRange::ALL.len());
        let (mut x, mut y) = (0u16, 0u16);

        for preset in QuickRange::ALL {
            let button_width = (preset.label().len() as u16 + 2).min(width.max(1));
            if x > 0 && x + button_width > width {
                x = 0;
                y += 1;
            }
            buttons.push((Rect::new(x, y, button_width, 1), preset));
            x += button_width + 1;
        }

        buttons
    }

    /// Rows needed to show every preset at the given width
    pub fn height(width: u16) -> u16 {
        Self::layout(width).last().map_or(0, |(area, _)| area.y + 1)
    }

    /// Draw the bar into `area`; returns the rows used
    pub fn render(f: &mut Frame, area: Rect, theme: &Theme, focused: Option<usize>, hits: &mut HitMap) -> u16 {
        for (index, (relative, preset)) in Self::layout(area.width).into_iter().enumerate() {
            let button = Rect::new(area.x + relative.x, area.y + relative.y, relative.width, 1).intersection(area);
            if button.is_empty() {
                continue;
            }

            let mut style = theme.button;
            if focused == Some(index) {
                style = theme.primary_button.add_modifier(Modifier::UNDERLINED);
            }

            f.render_widget(Paragraph::new(Line::styled(format!(" {} ", preset.label()), style)), button);
            hits.presets.push((button, preset));
        }

        Self::height(area.width)
    }
}
