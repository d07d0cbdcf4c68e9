//! Date/time selector component.
//!
//! Renders a read-only input field showing the current selection and, while
//! open, a popover below it with quick-select presets, a month calendar and an
//! hour/minute picker depending on the mode. Keyboard and mouse input are
//! translated into [`Action`]s; [`Component::update`] applies them to the
//! underlying [`Picker`] and returns [`Action::ValueChanged`] whenever a
//! selection completes.

use super::calendar_view::CalendarView;
use super::hit_map::{HitMap, HitTarget};
use super::quick_select_bar::QuickSelectBar;
use super::time_picker::TimePicker;
use crate::constants::{INPUT_HEIGHT, POPOVER_WIDTH};
use crate::picker::{ChangeEvent, Picker, PickerError, PickerProps, PickerValue, QuickRange};
use crate::ui::core::{Action, Component, FocusSection, OutsideClickListener};
use crate::ui::theme::Theme;
use crate::utils::datetime::{DateAdapter, Unit};
use chrono::{NaiveDate, Timelike};
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

type ChangeCallback = Box<dyn FnMut(&ChangeEvent)>;

/// Input field plus popover picker.
///
/// Features:
/// - Single date, date-time, time-only and date range modes
/// - Keyboard navigation (arrows, Tab between sections, Enter to pick)
/// - Mouse support (click to pick, wheel to scroll months and time lists)
/// - Closes when the pointer is pressed outside while mounted
pub struct DateTimeSelector {
    picker: Picker,
    theme: Theme,
    on_change: Option<ChangeCallback>,
    focus: FocusSection,
    focused_day: NaiveDate,
    preset_index: usize,
    outside_click: OutsideClickListener,
    hits: HitMap,
}

impl std::fmt::Debug for DateTimeSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DateTimeSelector")
            .field("picker", &self.picker)
            .field("focus", &self.focus)
            .field("focused_day", &self.focused_day)
            .finish_non_exhaustive()
    }
}

impl DateTimeSelector {
    pub fn new(props: PickerProps) -> Result<Self, PickerError> {
        Ok(Self::from_picker(Picker::new(props)?))
    }

    /// Build on a caller-supplied date adapter, e.g. one with a fixed clock
    pub fn with_adapter(props: PickerProps, dates: Box<dyn DateAdapter>) -> Result<Self, PickerError> {
        Ok(Self::from_picker(Picker::with_adapter(props, dates)?))
    }

    fn from_picker(picker: Picker) -> Self {
        let theme = Theme::for_bootstrap(picker.props().use_bootstrap);
        let focused_day = picker.today();
        Self {
            picker,
            theme,
            on_change: None,
            focus: FocusSection::default(),
            focused_day,
            preset_index: 0,
            outside_click: OutsideClickListener::new(),
            hits: HitMap::default(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Register the callback invoked with every completed selection
    #[must_use]
    pub fn on_change(mut self, callback: impl FnMut(&ChangeEvent) + 'static) -> Self {
        self.on_change = Some(Box::new(callback));
        self
    }

    /// Resynchronize from a new external value
    pub fn set_value(&mut self, value: &PickerValue) -> Result<(), PickerError> {
        self.picker.set_value(value)
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    pub fn is_open(&self) -> bool {
        self.picker.is_open()
    }

    pub fn focus(&self) -> FocusSection {
        self.focus
    }

    pub fn focused_day(&self) -> NaiveDate {
        self.focused_day
    }

    pub fn hit_map(&self) -> &HitMap {
        &self.hits
    }

    pub fn is_mounted(&self) -> bool {
        self.outside_click.is_attached()
    }

    /// Sections present in the popover, in Tab order
    pub fn sections(&self) -> Vec<FocusSection> {
        let mode = self.picker.mode();
        let mut sections = Vec::new();
        if self.picker.props().quick_select_visible() {
            sections.push(FocusSection::QuickSelect);
        }
        if mode.has_calendar() {
            sections.push(FocusSection::Calendar);
        }
        if mode.has_time() {
            sections.extend([FocusSection::Hours, FocusSection::Minutes, FocusSection::Confirm]);
        }
        sections
    }

    fn open(&mut self) {
        self.picker.open();
        self.focus = if self.picker.mode().has_calendar() {
            FocusSection::Calendar
        } else {
            FocusSection::Hours
        };

        // Start keyboard focus on the selection when it is on screen
        let state = self.picker.state();
        let month = self.picker.current_month();
        let dates = self.picker.dates();
        let anchor = state.selected_date().or(state.range_start());
        self.focused_day = match anchor {
            Some(date) if dates.is_same(date, month, Unit::Month) => date,
            _ if dates.is_same(self.picker.today(), month, Unit::Month) => self.picker.today(),
            _ => month,
        };
    }

    fn cycle_section(&mut self, step: isize) {
        let sections = self.sections();
        if sections.is_empty() {
            return;
        }
        let current = sections.iter().position(|s| *s == self.focus).unwrap_or(0) as isize;
        let next = (current + step).rem_euclid(sections.len() as isize) as usize;
        self.focus = sections[next];
    }

    fn move_focus(&mut self, days: i64) {
        self.focused_day = self.picker.dates().add(self.focused_day, days, Unit::Day);
        if !self.picker.dates().is_same(self.focused_day, self.picker.current_month(), Unit::Month) {
            self.picker.show_month_of(self.focused_day);
        }
    }

    fn scroll_time(&mut self, column: FocusSection, step: i32) {
        let working = self.picker.working_time().unwrap_or_default();
        match column {
            FocusSection::Hours => {
                let hour = (working.hour() as i32 + step).rem_euclid(24) as u32;
                self.picker.set_hour(hour);
            }
            _ => {
                let minute = (working.minute() as i32 + step).rem_euclid(60) as u32;
                self.picker.set_minute(minute);
            }
        }
    }

    fn emit(&mut self, event: ChangeEvent) -> Action {
        log::info!("Picker value changed: {}", event);
        if let Some(callback) = self.on_change.as_mut() {
            callback(&event);
        }
        Action::ValueChanged(event)
    }

    fn popover_height(&self, width: u16) -> u16 {
        let inner_width = width.saturating_sub(2);
        let mode = self.picker.mode();
        let mut height = 2;
        if self.picker.props().quick_select_visible() {
            height += QuickSelectBar::height(inner_width);
        }
        if mode.has_calendar() {
            height += CalendarView::height(&self.picker.grid(None));
        }
        if mode.has_time() {
            height += TimePicker::height();
        }
        height
    }

    fn render_popover(&mut self, f: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(self.theme.border_type)
            .border_style(self.theme.popover_border);
        let inner = block.inner(area);
        f.render_widget(Clear, area);
        f.render_widget(block, area);
        self.hits.popover = area;

        let mut y = inner.y;
        let remaining = |y: u16| Rect::new(inner.x, y, inner.width, inner.bottom().saturating_sub(y));

        if self.picker.props().quick_select_visible() {
            let focused = (self.focus == FocusSection::QuickSelect).then_some(self.preset_index);
            y += QuickSelectBar::render(f, remaining(y), &self.theme, focused, &mut self.hits);
        }

        if self.picker.mode().has_calendar() {
            let focused = (self.focus == FocusSection::Calendar).then_some(self.focused_day);
            let grid = self.picker.grid(focused);
            y += CalendarView::render(f, remaining(y), &self.picker, &grid, &self.theme, &mut self.hits);
        }

        if self.picker.mode().has_time() && y < inner.bottom() {
            TimePicker::render(f, remaining(y), &self.picker, &self.theme, Some(self.focus), &mut self.hits);
        }
    }

    fn target_action(&self, target: HitTarget) -> Action {
        match target {
            HitTarget::Input => Action::ToggleOpen,
            HitTarget::Preset(preset) => Action::ApplyPreset(preset),
            HitTarget::PreviousMonth => Action::PreviousMonth,
            HitTarget::NextMonth => Action::NextMonth,
            HitTarget::Day(date) => Action::SelectDate(date),
            HitTarget::Hour(hour) => Action::SetHour(hour),
            HitTarget::Minute(minute) => Action::SetMinute(minute),
            HitTarget::Confirm => Action::Confirm,
            HitTarget::HourList | HitTarget::MinuteList | HitTarget::Popover => Action::None,
        }
    }
}

impl Component for DateTimeSelector {
    /// Mounting attaches the outside-click listener
    fn init(&mut self) -> anyhow::Result<()> {
        self.outside_click.attach();
        Ok(())
    }

    fn unmount(&mut self) {
        self.outside_click.detach();
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if !self.is_open() {
            return match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Action::Open,
                _ => Action::None,
            };
        }

        match key.code {
            KeyCode::Esc => return Action::Close,
            KeyCode::Tab => return Action::NextSection,
            KeyCode::BackTab => return Action::PreviousSection,
            KeyCode::Char(c @ '1'..='5') if self.picker.props().quick_select_visible() => {
                let index = c as usize - '1' as usize;
                return Action::ApplyPreset(QuickRange::ALL[index]);
            }
            _ => {}
        }

        match self.focus {
            FocusSection::Calendar => match key.code {
                KeyCode::Left | KeyCode::Char('h') => Action::MoveFocus(-1),
                KeyCode::Right | KeyCode::Char('l') => Action::MoveFocus(1),
                KeyCode::Up | KeyCode::Char('k') => Action::MoveFocus(-7),
                KeyCode::Down | KeyCode::Char('j') => Action::MoveFocus(7),
                KeyCode::PageUp | KeyCode::Char('<') => Action::PreviousMonth,
                KeyCode::PageDown | KeyCode::Char('>') => Action::NextMonth,
                KeyCode::Char('t') => Action::FocusToday,
                KeyCode::Enter | KeyCode::Char(' ') => Action::SelectFocusedDate,
                _ => Action::None,
            },
            FocusSection::Hours => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Action::ScrollHours(-1),
                KeyCode::Down | KeyCode::Char('j') => Action::ScrollHours(1),
                KeyCode::Right => Action::FocusSection(FocusSection::Minutes),
                KeyCode::Enter => Action::Confirm,
                _ => Action::None,
            },
            FocusSection::Minutes => match key.code {
                KeyCode::Up | KeyCode::Char('k') => Action::ScrollMinutes(-1),
                KeyCode::Down | KeyCode::Char('j') => Action::ScrollMinutes(1),
                KeyCode::Left => Action::FocusSection(FocusSection::Hours),
                KeyCode::Enter => Action::Confirm,
                _ => Action::None,
            },
            FocusSection::Confirm => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => Action::Confirm,
                _ => Action::None,
            },
            FocusSection::QuickSelect => match key.code {
                KeyCode::Left | KeyCode::Char('h') => Action::PreviousPreset,
                KeyCode::Right | KeyCode::Char('l') => Action::NextPreset,
                KeyCode::Enter | KeyCode::Char(' ') => Action::ApplyFocusedPreset,
                _ => Action::None,
            },
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let target = self.hits.target(mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.is_open() && self.outside_click.is_outside(mouse.column, mouse.row) {
                    return Action::Close;
                }
                target.map_or(Action::None, |t| self.target_action(t))
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown if self.is_open() => {
                let step = if mouse.kind == MouseEventKind::ScrollUp { -1 } else { 1 };
                match target {
                    Some(HitTarget::Hour(_) | HitTarget::HourList) => Action::ScrollHours(step),
                    Some(HitTarget::Minute(_) | HitTarget::MinuteList) => Action::ScrollMinutes(step),
                    Some(HitTarget::Day(_) | HitTarget::PreviousMonth | HitTarget::NextMonth) if step < 0 => {
                        Action::PreviousMonth
                    }
                    Some(HitTarget::Day(_) | HitTarget::PreviousMonth | HitTarget::NextMonth) => Action::NextMonth,
                    _ => Action::None,
                }
            }
            _ => Action::None,
        }
    }

    fn update(&mut self, action: Action) -> Action {
        match action {
            Action::Open => {
                self.open();
                Action::None
            }
            Action::Close => {
                self.picker.close();
                Action::None
            }
            Action::ToggleOpen => {
                if self.is_open() {
                    self.picker.close();
                } else {
                    self.open();
                }
                Action::None
            }
            Action::PreviousMonth => {
                self.picker.previous_month();
                self.focused_day = self.picker.dates().subtract(self.focused_day, 1, Unit::Month);
                Action::None
            }
            Action::NextMonth => {
                self.picker.next_month();
                self.focused_day = self.picker.dates().add(self.focused_day, 1, Unit::Month);
                Action::None
            }
            Action::MoveFocus(days) => {
                self.move_focus(days);
                Action::None
            }
            Action::FocusToday => {
                self.focused_day = self.picker.today();
                self.picker.show_month_of(self.focused_day);
                Action::None
            }
            Action::FocusSection(section) => {
                if self.sections().contains(&section) {
                    self.focus = section;
                }
                Action::None
            }
            Action::NextSection => {
                self.cycle_section(1);
                Action::None
            }
            Action::PreviousSection => {
                self.cycle_section(-1);
                Action::None
            }
            Action::ScrollHours(step) => {
                self.focus = FocusSection::Hours;
                self.scroll_time(FocusSection::Hours, step);
                Action::None
            }
            Action::ScrollMinutes(step) => {
                self.focus = FocusSection::Minutes;
                self.scroll_time(FocusSection::Minutes, step);
                Action::None
            }
            Action::PreviousPreset => {
                self.preset_index = (self.preset_index + QuickRange::ALL.len() - 1) % QuickRange::ALL.len();
                Action::None
            }
            Action::NextPreset => {
                self.preset_index = (self.preset_index + 1) % QuickRange::ALL.len();
                Action::None
            }
            Action::SelectDate(date) => {
                self.focused_day = date;
                match self.picker.click_date(date) {
                    Some(event) => self.emit(event),
                    None => Action::None,
                }
            }
            Action::SelectFocusedDate => self.update(Action::SelectDate(self.focused_day)),
            Action::ApplyPreset(preset) => {
                let event = self.picker.apply_preset(preset);
                self.emit(event)
            }
            Action::ApplyFocusedPreset => self.update(Action::ApplyPreset(QuickRange::ALL[self.preset_index])),
            Action::SetHour(hour) => {
                self.focus = FocusSection::Hours;
                self.picker.set_hour(hour);
                Action::None
            }
            Action::SetMinute(minute) => {
                self.focus = FocusSection::Minutes;
                self.picker.set_minute(minute);
                Action::None
            }
            Action::Confirm => match self.picker.confirm() {
                Some(event) => self.emit(event),
                None => Action::None,
            },
            // Pass through
            other => other,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect) {
        self.hits.clear();

        let width = rect.width.min(POPOVER_WIDTH);
        let input_area = Rect::new(rect.x, rect.y, width, INPUT_HEIGHT.min(rect.height));

        let display = self.picker.display();
        let text_style = if display.is_placeholder { self.theme.placeholder } else { self.theme.input };
        let border_style = if self.is_open() {
            self.theme.input_border.patch(self.theme.popover_border)
        } else {
            self.theme.input_border
        };
        let input = Paragraph::new(display.text).style(text_style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(self.theme.border_type)
                .border_style(border_style),
        );
        f.render_widget(input, input_area);
        self.hits.input = input_area;

        if self.is_open() {
            let popover = Rect::new(rect.x, input_area.bottom(), width, self.popover_height(width)).intersection(f.area());
            if !popover.is_empty() {
                self.render_popover(f, popover);
            }
        }

        self.outside_click.set_boundary(self.hits.boundary());
    }
}
