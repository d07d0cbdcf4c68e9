use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use datetime_selector::config::Config;
use datetime_selector::ui::core::{Action, EventType};
use datetime_selector::ui::App;
use ratatui::{backend::TestBackend, Terminal};

fn key(code: KeyCode) -> EventType {
    EventType::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

#[test]
fn test_q_quits_only_while_closed() {
    let mut app = App::new(&Config::default()).unwrap();

    app.handle_event(key(KeyCode::Enter));
    assert!(app.selector.is_open());
    assert_eq!(app.handle_event(key(KeyCode::Char('q'))), Action::None);
    assert!(!app.should_quit);

    app.handle_event(key(KeyCode::Esc));
    assert!(!app.selector.is_open());
    assert_eq!(app.handle_event(key(KeyCode::Char('q'))), Action::Quit);
    assert!(app.should_quit);
}

#[test]
fn test_ctrl_c_always_quits() {
    let mut app = App::new(&Config::default()).unwrap();
    app.handle_event(key(KeyCode::Enter));

    let ctrl_c = EventType::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert_eq!(app.handle_event(ctrl_c), Action::Quit);
    assert!(app.should_quit);
}

#[test]
fn test_changes_are_recorded() {
    let mut app = App::new(&Config::default()).unwrap();
    assert!(app.selector.is_mounted());

    app.handle_event(key(KeyCode::Enter));
    let action = app.handle_event(key(KeyCode::Enter));
    assert!(matches!(action, Action::ValueChanged(_)));
    assert_eq!(app.changes.len(), 1);

    let changes = app.finish();
    assert_eq!(changes.len(), 1);
}

#[test]
fn test_render_shows_title_and_status() {
    let mut app = App::new(&Config::default()).unwrap();
    let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
    terminal
        .draw(|f| {
            let area = f.area();
            app.render(f, area);
        })
        .unwrap();

    let text: String = terminal
        .backend()
        .buffer()
        .content()
        .iter()
        .map(|cell| cell.symbol())
        .collect();
    assert!(text.contains("single mode"));
    assert!(text.contains("Nothing selected yet"));
    assert!(text.contains("Select date"));
}
