//! Hour and minute columns plus the confirm button

use super::hit_map::HitMap;
use crate::constants::{LABEL_CONFIRM, LABEL_HOUR, LABEL_MINUTE, TIME_LIST_ROWS};
use crate::picker::Picker;
use crate::ui::core::FocusSection;
use crate::ui::theme::Theme;
use chrono::Timelike;
use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::Paragraph,
    Frame,
};

#[derive(Clone, Copy)]
enum Column {
    Hours,
    Minutes,
}

impl Column {
    fn len(self) -> u32 {
        match self {
            Column::Hours => 24,
            Column::Minutes => 60,
        }
    }
}

pub struct TimePicker;

impl TimePicker {
    /// Label row, the list rows and the confirm row
    pub fn height() -> u16 {
        TIME_LIST_ROWS + 2
    }

    /// First visible entry of a list so that `selected` stays roughly centered
    pub fn list_offset(selected: Option<u32>, len: u32, rows: u16) -> u32 {
        let rows = u32::from(rows);
        match selected {
            Some(selected) if len > rows => selected.saturating_sub(rows / 2).min(len - rows),
            _ => 0,
        }
    }

    /// Draw the time picker into `area`; returns the rows used
    pub fn render(
        f: &mut Frame,
        area: Rect,
        picker: &Picker,
        theme: &Theme,
        focus: Option<FocusSection>,
        hits: &mut HitMap,
    ) -> u16 {
        let [hour_area, minute_area] = Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)]).areas(area);

        let lists_height = TIME_LIST_ROWS.min(area.height.saturating_sub(1));
        hits.hour_list = Rect::new(hour_area.x, hour_area.y + 1, hour_area.width, lists_height).intersection(area);
        hits.minute_list = Rect::new(minute_area.x, minute_area.y + 1, minute_area.width, lists_height).intersection(area);

        Self::render_column(f, hour_area, Column::Hours, picker, theme, focus == Some(FocusSection::Hours), hits);
        Self::render_column(f, minute_area, Column::Minutes, picker, theme, focus == Some(FocusSection::Minutes), hits);

        let confirm_y = area.y + TIME_LIST_ROWS + 1;
        if confirm_y < area.bottom() {
            let label = format!(" {} ", LABEL_CONFIRM);
            let width = (label.len() as u16).min(area.width);
            let confirm = Rect::new(area.x + (area.width - width) / 2, confirm_y, width, 1);
            let mut style = theme.primary_button;
            if picker.is_working_time_disabled() {
                style = style.patch(theme.time_disabled);
            }
            if focus == Some(FocusSection::Confirm) {
                style = style.patch(theme.focused);
            }
            f.render_widget(Paragraph::new(Line::styled(label, style)), confirm);
            hits.confirm = confirm;
        }

        Self::height().min(area.height)
    }

    fn render_column(
        f: &mut Frame,
        area: Rect,
        column: Column,
        picker: &Picker,
        theme: &Theme,
        focused: bool,
        hits: &mut HitMap,
    ) {
        if area.height == 0 {
            return;
        }

        let label = match column {
            Column::Hours => LABEL_HOUR,
            Column::Minutes => LABEL_MINUTE,
        };
        f.render_widget(
            Paragraph::new(Line::styled(label, theme.time_label)).alignment(Alignment::Center),
            Rect::new(area.x, area.y, area.width, 1),
        );

        let working = picker.working_time();
        let selected = working.map(|t| match column {
            Column::Hours => t.hour(),
            Column::Minutes => t.minute(),
        });
        let offset = Self::list_offset(selected, column.len(), TIME_LIST_ROWS);

        for row in 0..TIME_LIST_ROWS {
            let value = offset + u32::from(row);
            let y = area.y + 1 + row;
            if value >= column.len() || y >= area.bottom() {
                break;
            }

            let (hour, minute) = match (column, working) {
                (Column::Hours, Some(t)) => (value, t.minute()),
                (Column::Minutes, Some(t)) => (t.hour(), value),
                (Column::Hours, None) => (value, 0),
                (Column::Minutes, None) => (0, value),
            };

            let mut style: Style = theme.time_item;
            if picker.is_time_disabled(hour, minute) {
                style = style.patch(theme.time_disabled);
            }
            if selected == Some(value) {
                style = style.patch(theme.time_selected);
                if focused {
                    style = style.patch(theme.focused);
                }
            }

            let item = Rect::new(area.x, y, area.width, 1);
            f.render_widget(
                Paragraph::new(Line::styled(format!("{:02}", value), style)).alignment(Alignment::Center),
                item,
            );
            match column {
                Column::Hours => hits.hours.push((item, value)),
                Column::Minutes => hits.minutes.push((item, value)),
            }
        }
    }
}
