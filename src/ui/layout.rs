//! Layout management and calculations

use crate::constants::POPOVER_WIDTH;
use ratatui::layout::{Constraint, Layout, Rect};

/// Manages layout calculations for the demo host
pub struct LayoutManager;

impl LayoutManager {
    /// Split the screen into a title line, the picker area and a two-line status bar
    #[must_use]
    pub fn main_layout(area: Rect) -> [Rect; 3] {
        Layout::vertical([Constraint::Length(1), Constraint::Min(0), Constraint::Length(2)]).areas(area)
    }

    /// Column for the picker, horizontally centered, one row below the top
    #[must_use]
    pub fn picker_area(area: Rect) -> Rect {
        let width = POPOVER_WIDTH.min(area.width);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + 1.min(area.height);
        Rect::new(x, y, width, area.bottom().saturating_sub(y))
    }
}
