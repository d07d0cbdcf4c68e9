use crate::common::{selector_on, ymd};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use datetime_selector::picker::{ChangeEvent, Mode, PickerProps, PickerValue, QuickRange};
use datetime_selector::ui::core::{Action, Component, FocusSection};
use datetime_selector::DateTimeSelector;
use ratatui::{backend::TestBackend, layout::Rect, style::Modifier, Terminal};
use std::cell::RefCell;
use std::rc::Rc;

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(40, 24)).unwrap()
}

fn draw(terminal: &mut Terminal<TestBackend>, selector: &mut DateTimeSelector) {
    terminal
        .draw(|f| {
            let area = f.area();
            selector.render(f, area);
        })
        .unwrap();
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    let symbols: Vec<&str> = buffer.content().iter().map(|cell| cell.symbol()).collect();
    symbols
        .chunks(width)
        .map(|row| row.concat())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn click_at(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

fn click(area: Rect) -> MouseEvent {
    click_at(area.x + area.width / 2, area.y)
}

/// Feed a key through the component the way a host does
fn key(selector: &mut DateTimeSelector, code: KeyCode) -> Action {
    let action = selector.handle_key_events(press(code));
    selector.update(action)
}

fn mouse(selector: &mut DateTimeSelector, event: MouseEvent) -> Action {
    let action = selector.handle_mouse_events(event);
    selector.update(action)
}

fn recorder() -> (Rc<RefCell<Vec<ChangeEvent>>>, impl FnMut(&ChangeEvent) + 'static) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&events);
    (events, move |event: &ChangeEvent| sink.borrow_mut().push(event.clone()))
}

#[test]
fn test_closed_selector_shows_placeholder() {
    let mut selector = selector_on(ymd(2024, 3, 15), PickerProps::new(Mode::Single).placeholder("Pick a day"));
    let mut terminal = terminal();
    draw(&mut terminal, &mut selector);

    let text = screen(&terminal);
    assert!(text.contains("Pick a day"));
    assert!(!text.contains("March 2024"));
    assert!(selector.hit_map().popover.is_empty());
}

#[test]
fn test_mouse_click_selects_single_date() {
    let (events, callback) = recorder();
    let mut selector = selector_on(ymd(2024, 3, 1), PickerProps::new(Mode::Single)).on_change(callback);
    selector.init().unwrap();
    let mut terminal = terminal();
    draw(&mut terminal, &mut selector);

    let target = selector.hit_map().input;
    mouse(&mut selector, click(target));
    assert!(selector.is_open());
    draw(&mut terminal, &mut selector);
    assert!(screen(&terminal).contains("March 2024"));

    let day = selector.hit_map().day_area(ymd(2024, 3, 15)).unwrap();
    let action = mouse(&mut selector, click(day));

    assert_eq!(action, Action::ValueChanged(ChangeEvent::Single("2024-03-15".to_string())));
    assert_eq!(*events.borrow(), vec![ChangeEvent::Single("2024-03-15".to_string())]);
    assert!(!selector.is_open());

    draw(&mut terminal, &mut selector);
    assert!(screen(&terminal).contains("2024-03-15"));
}

#[test]
fn test_range_by_mouse_emits_once() {
    let (events, callback) = recorder();
    let mut selector = selector_on(ymd(2024, 1, 1), PickerProps::new(Mode::Range)).on_change(callback);
    let mut terminal = terminal();
    selector.update(Action::Open);
    draw(&mut terminal, &mut selector);

    let first = selector.hit_map().day_area(ymd(2024, 1, 10)).unwrap();
    assert_eq!(mouse(&mut selector, click(first)), Action::None);
    assert!(selector.is_open());
    assert!(events.borrow().is_empty());

    draw(&mut terminal, &mut selector);
    let second = selector.hit_map().day_area(ymd(2024, 1, 5)).unwrap();
    mouse(&mut selector, click(second));

    assert_eq!(
        *events.borrow(),
        vec![ChangeEvent::range("2024-01-05".to_string(), "2024-01-10".to_string())]
    );
    assert!(!selector.is_open());
}

#[test]
fn test_outside_click_closes_only_while_mounted() {
    let mut selector = selector_on(ymd(2024, 3, 1), PickerProps::new(Mode::Single));
    let mut terminal = terminal();

    // Not mounted yet: outside presses are ignored
    selector.update(Action::Open);
    draw(&mut terminal, &mut selector);
    assert_eq!(mouse(&mut selector, click_at(39, 23)), Action::None);
    assert!(selector.is_open());

    selector.init().unwrap();
    assert!(selector.is_mounted());
    draw(&mut terminal, &mut selector);

    // Inside the popover, on nothing interactive
    let popover = selector.hit_map().popover;
    mouse(&mut selector, click_at(popover.x, popover.y));
    assert!(selector.is_open());

    mouse(&mut selector, click_at(39, 23));
    assert!(!selector.is_open());

    selector.unmount();
    assert!(!selector.is_mounted());
    selector.update(Action::Open);
    draw(&mut terminal, &mut selector);
    mouse(&mut selector, click_at(39, 23));
    assert!(selector.is_open());
}

#[test]
fn test_month_navigation_by_mouse_and_wheel() {
    let mut selector = selector_on(ymd(2024, 3, 15), PickerProps::new(Mode::Single));
    let mut terminal = terminal();
    selector.update(Action::Open);
    draw(&mut terminal, &mut selector);

    let target = selector.hit_map().next_month;
    mouse(&mut selector, click(target));
    assert_eq!(selector.picker().current_month(), ymd(2024, 4, 1));

    draw(&mut terminal, &mut selector);
    assert!(screen(&terminal).contains("April 2024"));
    let target = selector.hit_map().previous_month;
    mouse(&mut selector, click(target));
    let target = selector.hit_map().previous_month;
    mouse(&mut selector, click(target));
    assert_eq!(selector.picker().current_month(), ymd(2024, 2, 1));

    draw(&mut terminal, &mut selector);
    let day = selector.hit_map().day_area(ymd(2024, 2, 14)).unwrap();
    let wheel = MouseEvent {
        kind: MouseEventKind::ScrollDown,
        ..click(day)
    };
    mouse(&mut selector, wheel);
    assert_eq!(selector.picker().current_month(), ymd(2024, 3, 1));
    assert!(selector.picker().state().selected_date.is_none());
}

#[test]
fn test_keyboard_focus_crosses_months() {
    let (events, callback) = recorder();
    let mut selector = selector_on(ymd(2024, 3, 15), PickerProps::new(Mode::Single)).on_change(callback);

    assert_eq!(selector.handle_key_events(press(KeyCode::Enter)), Action::Open);
    key(&mut selector, KeyCode::Enter);
    assert!(selector.is_open());
    assert_eq!(selector.focus(), FocusSection::Calendar);
    assert_eq!(selector.focused_day(), ymd(2024, 3, 15));

    for _ in 0..3 {
        key(&mut selector, KeyCode::Down);
    }
    assert_eq!(selector.focused_day(), ymd(2024, 4, 5));
    assert_eq!(selector.picker().current_month(), ymd(2024, 4, 1));

    key(&mut selector, KeyCode::Left);
    key(&mut selector, KeyCode::Char('t'));
    assert_eq!(selector.focused_day(), ymd(2024, 3, 15));
    assert_eq!(selector.picker().current_month(), ymd(2024, 3, 1));

    key(&mut selector, KeyCode::Right);
    key(&mut selector, KeyCode::Enter);
    assert_eq!(*events.borrow(), vec![ChangeEvent::Single("2024-03-16".to_string())]);
    assert!(!selector.is_open());
}

#[test]
fn test_escape_closes_without_emitting() {
    let (events, callback) = recorder();
    let mut selector = selector_on(ymd(2024, 3, 15), PickerProps::new(Mode::Single)).on_change(callback);
    key(&mut selector, KeyCode::Enter);
    key(&mut selector, KeyCode::Right);
    key(&mut selector, KeyCode::Esc);

    assert!(!selector.is_open());
    assert!(events.borrow().is_empty());
}

#[test]
fn test_tab_cycles_datetime_sections() {
    let mut selector = selector_on(ymd(2024, 3, 15), PickerProps::new(Mode::DateTime));
    key(&mut selector, KeyCode::Enter);
    assert_eq!(
        selector.sections(),
        vec![FocusSection::Calendar, FocusSection::Hours, FocusSection::Minutes, FocusSection::Confirm]
    );

    let mut seen = Vec::new();
    for _ in 0..4 {
        key(&mut selector, KeyCode::Tab);
        seen.push(selector.focus());
    }
    assert_eq!(
        seen,
        vec![FocusSection::Hours, FocusSection::Minutes, FocusSection::Confirm, FocusSection::Calendar]
    );

    key(&mut selector, KeyCode::BackTab);
    assert_eq!(selector.focus(), FocusSection::Confirm);
}

#[test]
fn test_datetime_keyboard_flow() {
    let (events, callback) = recorder();
    let props = PickerProps::new(Mode::DateTime).value(PickerValue::DateTime("2024-03-10 09:00".to_string()));
    let mut selector = selector_on(ymd(2024, 3, 15), props).on_change(callback);

    key(&mut selector, KeyCode::Enter);
    assert_eq!(selector.focused_day(), ymd(2024, 3, 10));

    // Picking a day does not complete a datetime selection
    key(&mut selector, KeyCode::Right);
    key(&mut selector, KeyCode::Enter);
    assert!(selector.is_open());
    assert!(events.borrow().is_empty());

    key(&mut selector, KeyCode::Tab);
    key(&mut selector, KeyCode::Down);
    key(&mut selector, KeyCode::Right);
    key(&mut selector, KeyCode::Up);
    key(&mut selector, KeyCode::Enter);

    assert_eq!(*events.borrow(), vec![ChangeEvent::Single("2024-03-11 10:59".to_string())]);
    assert!(!selector.is_open());
}

#[test]
fn test_time_scroll_lands_on_disabled_slot_without_confirming() {
    let (events, callback) = recorder();
    let props = PickerProps::new(Mode::Time)
        .value(PickerValue::Time("09:15".to_string()))
        .disabled_times(["10:15"]);
    let mut selector = selector_on(ymd(2024, 3, 15), props).on_change(callback);

    key(&mut selector, KeyCode::Enter);
    assert_eq!(selector.focus(), FocusSection::Hours);
    key(&mut selector, KeyCode::Down);
    assert_eq!(selector.picker().working_time(), chrono::NaiveTime::from_hms_opt(10, 15, 0));
    assert!(selector.picker().is_working_time_disabled());

    key(&mut selector, KeyCode::Enter);
    assert!(events.borrow().is_empty());
    assert!(selector.is_open());

    key(&mut selector, KeyCode::Right);
    key(&mut selector, KeyCode::Down);
    key(&mut selector, KeyCode::Enter);
    assert_eq!(*events.borrow(), vec![ChangeEvent::Single("10:16".to_string())]);
}

#[test]
fn test_time_scroll_wraps_around() {
    let props = PickerProps::new(Mode::Time).value(PickerValue::Time("00:59".to_string()));
    let mut selector = selector_on(ymd(2024, 3, 15), props);

    key(&mut selector, KeyCode::Enter);
    key(&mut selector, KeyCode::Up);
    assert_eq!(selector.picker().working_time(), chrono::NaiveTime::from_hms_opt(23, 59, 0));

    key(&mut selector, KeyCode::Right);
    key(&mut selector, KeyCode::Down);
    assert_eq!(selector.picker().working_time(), chrono::NaiveTime::from_hms_opt(23, 0, 0));
}

#[test]
fn test_confirm_button_dims_on_disabled_slot() {
    let props = PickerProps::new(Mode::Time)
        .value(PickerValue::Time("09:15".to_string()))
        .disabled_times(["10:15"]);
    let mut selector = selector_on(ymd(2024, 3, 15), props);
    let mut terminal = terminal();
    key(&mut selector, KeyCode::Enter);

    let crossed_out = |terminal: &Terminal<TestBackend>, area: Rect| {
        let cell = terminal.backend().buffer().cell((area.x, area.y)).unwrap();
        cell.modifier.contains(Modifier::CROSSED_OUT)
    };

    draw(&mut terminal, &mut selector);
    assert!(!crossed_out(&terminal, selector.hit_map().confirm));

    key(&mut selector, KeyCode::Down);
    draw(&mut terminal, &mut selector);
    assert!(crossed_out(&terminal, selector.hit_map().confirm));
}

#[test]
fn test_time_list_click_sets_hour() {
    let props = PickerProps::new(Mode::Time).value(PickerValue::Time("09:15".to_string()));
    let mut selector = selector_on(ymd(2024, 3, 15), props);
    let mut terminal = terminal();
    selector.update(Action::Open);
    draw(&mut terminal, &mut selector);

    let (area, _) = *selector
        .hit_map()
        .hours
        .iter()
        .find(|(_, hour)| *hour == 11)
        .unwrap();
    mouse(&mut selector, click(area));
    assert_eq!(selector.picker().working_time(), chrono::NaiveTime::from_hms_opt(11, 15, 0));

    draw(&mut terminal, &mut selector);
    let target = selector.hit_map().confirm;
    let action = mouse(&mut selector, click(target));
    assert_eq!(action, Action::ValueChanged(ChangeEvent::Single("11:15".to_string())));
}

#[test]
fn test_digit_keys_apply_presets() {
    let (events, callback) = recorder();
    let props = PickerProps::new(Mode::Range).show_quick_select(true);
    let mut selector = selector_on(ymd(2024, 3, 15), props).on_change(callback);

    key(&mut selector, KeyCode::Enter);
    assert_eq!(selector.sections().first(), Some(&FocusSection::QuickSelect));
    key(&mut selector, KeyCode::Char('2'));

    assert_eq!(
        *events.borrow(),
        vec![ChangeEvent::range("2024-03-08".to_string(), "2024-03-15".to_string())]
    );
    assert!(!selector.is_open());
}

#[test]
fn test_preset_buttons_render_and_click() {
    let props = PickerProps::new(Mode::Range).show_quick_select(true);
    let mut selector = selector_on(ymd(2024, 3, 15), props);
    let mut terminal = terminal();
    selector.update(Action::Open);
    draw(&mut terminal, &mut selector);

    assert!(screen(&terminal).contains("Today"));
    let (area, _) = *selector
        .hit_map()
        .presets
        .iter()
        .find(|(_, preset)| *preset == QuickRange::ThisMonth)
        .unwrap();
    let action = mouse(&mut selector, click(area));
    assert_eq!(
        action,
        Action::ValueChanged(ChangeEvent::range("2024-03-01".to_string(), "2024-03-31".to_string()))
    );
}

#[test]
fn test_quick_select_hidden_outside_range_mode() {
    let props = PickerProps::new(Mode::Single).show_quick_select(true);
    let mut selector = selector_on(ymd(2024, 3, 15), props);
    key(&mut selector, KeyCode::Enter);

    assert_eq!(selector.sections(), vec![FocusSection::Calendar]);
    assert_eq!(selector.handle_key_events(press(KeyCode::Char('2'))), Action::None);
}

#[test]
fn test_invalid_value_renders_invalid_date() {
    let props = PickerProps::new(Mode::Single).value(PickerValue::Date("2024-13-45".to_string()));
    let mut selector = selector_on(ymd(2024, 3, 15), props);
    let mut terminal = terminal();
    draw(&mut terminal, &mut selector);

    assert!(screen(&terminal).contains("Invalid date"));

    selector.set_value(&PickerValue::Date("2024-03-02".to_string())).unwrap();
    draw(&mut terminal, &mut selector);
    assert!(screen(&terminal).contains("2024-03-02"));
}

#[test]
fn test_popover_is_clipped_to_small_terminal() {
    let mut selector = selector_on(ymd(2024, 3, 15), PickerProps::new(Mode::DateTime));
    let mut terminal = Terminal::new(TestBackend::new(20, 8)).unwrap();
    selector.update(Action::Open);
    draw(&mut terminal, &mut selector);

    let popover = selector.hit_map().popover;
    assert!(popover.bottom() <= 8);
    assert!(popover.right() <= 20);
}
