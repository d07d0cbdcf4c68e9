use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use datetime_selector::ui::core::{EventHandler, EventType, FRAME_INTERVAL};
use std::time::Duration;

#[test]
fn test_classify_keeps_key_presses_only() {
    let press = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert!(matches!(EventHandler::classify(Event::Key(press)), EventType::Key(k) if k.code == KeyCode::Enter));

    let release = KeyEvent::new_with_kind(KeyCode::Enter, KeyModifiers::NONE, KeyEventKind::Release);
    assert!(matches!(EventHandler::classify(Event::Key(release)), EventType::Other));
}

#[test]
fn test_classify_mouse_and_resize() {
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 3,
        row: 4,
        modifiers: KeyModifiers::NONE,
    };
    assert!(matches!(EventHandler::classify(Event::Mouse(mouse)), EventType::Mouse(m) if m.column == 3 && m.row == 4));
    assert!(matches!(EventHandler::classify(Event::Resize(80, 24)), EventType::Resize(80, 24)));
    assert!(matches!(EventHandler::classify(Event::FocusGained), EventType::Other));
}

#[tokio::test]
async fn test_should_render_after_frame_interval() {
    let mut handler = EventHandler::new();
    handler.mark_rendered();
    assert!(!handler.should_render());

    tokio::time::sleep(Duration::from_millis(17)).await;
    assert!(handler.should_render());
    assert!(handler.time_since_last_render() >= Duration::from_millis(16));
}

#[test]
fn test_first_frame_is_not_throttled() {
    let handler = EventHandler::new();
    assert!(handler.should_render());
    assert!(handler.time_since_last_render() >= FRAME_INTERVAL);
}
