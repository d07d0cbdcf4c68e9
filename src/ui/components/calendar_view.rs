//! Month header, weekday row and day grid

use super::hit_map::HitMap;
use crate::constants::{DAY_CELL_WIDTH, NAV_NEXT, NAV_PREVIOUS};
use crate::picker::{CalendarGrid, DayCell, Picker};
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

pub struct CalendarView;

impl CalendarView {
    /// Rows needed for the header, the weekday row and every week
    pub fn height(grid: &CalendarGrid) -> u16 {
        2 + grid.week_count() as u16
    }

    /// Draw the calendar into `area`; returns the rows used
    pub fn render(f: &mut Frame, area: Rect, picker: &Picker, grid: &CalendarGrid, theme: &Theme, hits: &mut HitMap) -> u16 {
        let mut y = area.y;

        // Header: ‹  March 2024  ›
        if y < area.bottom() {
            let header = Rect::new(area.x, y, area.width, 1);
            f.render_widget(
                Paragraph::new(Line::styled(picker.month_title(), theme.header)).alignment(Alignment::Center),
                header,
            );

            let previous = Rect::new(area.x, y, 2.min(area.width), 1);
            let next = Rect::new(area.right().saturating_sub(2), y, 2.min(area.width), 1);
            f.render_widget(Paragraph::new(Line::styled(format!(" {}", NAV_PREVIOUS), theme.button)), previous);
            f.render_widget(Paragraph::new(Line::styled(format!("{} ", NAV_NEXT), theme.button)), next);
            hits.previous_month = previous;
            hits.next_month = next;
            y += 1;
        }

        // Weekday names
        if y < area.bottom() {
            let labels: Vec<Span> = picker
                .weekday_labels()
                .into_iter()
                .map(|label| Span::styled(format!("{:^width$}", label, width = DAY_CELL_WIDTH as usize), theme.weekday))
                .collect();
            f.render_widget(Paragraph::new(Line::from(labels)), Rect::new(area.x, y, area.width, 1));
            y += 1;
        }

        for week in grid.weeks() {
            if y >= area.bottom() {
                break;
            }
            for (column, cell) in week.iter().enumerate() {
                let cell_area = Rect::new(area.x + column as u16 * DAY_CELL_WIDTH, y, DAY_CELL_WIDTH, 1).intersection(area);
                if cell_area.is_empty() {
                    continue;
                }
                let text = format!("{:>3} ", cell.day());
                f.render_widget(Paragraph::new(Line::styled(text, Self::day_style(cell, theme))), cell_area);
                hits.days.push((cell_area, cell.date));
            }
            y += 1;
        }

        y - area.y
    }

    /// Layer the cell flags over the base day style
    pub fn day_style(cell: &DayCell, theme: &Theme) -> Style {
        let mut style = if cell.in_current_month { theme.day } else { theme.day_other_month };
        if cell.is_today {
            style = style.patch(theme.day_today);
        }
        if cell.is_in_range {
            style = style.patch(theme.day_in_range);
        }
        if cell.is_selected {
            style = style.patch(theme.day_selected);
        }
        if cell.is_range_start || cell.is_range_end {
            style = style.patch(theme.day_range_edge);
        }
        if cell.is_disabled {
            style = style.patch(theme.day_disabled);
        }
        if cell.is_focused {
            style = style.patch(theme.focused);
        }
        style
    }
}
