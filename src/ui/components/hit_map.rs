//! Screen areas drawn in the last frame, used to route mouse clicks

use crate::picker::QuickRange;
use chrono::NaiveDate;
use ratatui::layout::{Position, Rect};

/// What a pointer position lands on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Input,
    Preset(QuickRange),
    PreviousMonth,
    NextMonth,
    Day(NaiveDate),
    Hour(u32),
    Minute(u32),
    HourList,
    MinuteList,
    Confirm,
    /// Inside the popover but on nothing interactive
    Popover,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct HitMap {
    pub input: Rect,
    pub popover: Rect,
    pub presets: Vec<(Rect, QuickRange)>,
    pub previous_month: Rect,
    pub next_month: Rect,
    pub days: Vec<(Rect, NaiveDate)>,
    pub hour_list: Rect,
    pub minute_list: Rect,
    pub hours: Vec<(Rect, u32)>,
    pub minutes: Vec<(Rect, u32)>,
    pub confirm: Rect,
}

impl HitMap {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Areas that belong to the component this frame
    pub fn boundary(&self) -> [Rect; 2] {
        [self.input, self.popover]
    }

    pub fn day_area(&self, date: NaiveDate) -> Option<Rect> {
        self.days.iter().find(|(_, d)| *d == date).map(|(area, _)| *area)
    }

    pub fn target(&self, column: u16, row: u16) -> Option<HitTarget> {
        let position = Position::new(column, row);
        if self.input.contains(position) {
            return Some(HitTarget::Input);
        }
        if !self.popover.contains(position) {
            return None;
        }
        if let Some((_, preset)) = self.presets.iter().find(|(area, _)| area.contains(position)) {
            return Some(HitTarget::Preset(*preset));
        }
        if self.previous_month.contains(position) {
            return Some(HitTarget::PreviousMonth);
        }
        if self.next_month.contains(position) {
            return Some(HitTarget::NextMonth);
        }
        if let Some((_, date)) = self.days.iter().find(|(area, _)| area.contains(position)) {
            return Some(HitTarget::Day(*date));
        }
        if let Some((_, hour)) = self.hours.iter().find(|(area, _)| area.contains(position)) {
            return Some(HitTarget::Hour(*hour));
        }
        if let Some((_, minute)) = self.minutes.iter().find(|(area, _)| area.contains(position)) {
            return Some(HitTarget::Minute(*minute));
        }
        if self.confirm.contains(position) {
            return Some(HitTarget::Confirm);
        }
        if self.hour_list.contains(position) {
            return Some(HitTarget::HourList);
        }
        if self.minute_list.contains(position) {
            return Some(HitTarget::MinuteList);
        }
        Some(HitTarget::Popover)
    }
}
