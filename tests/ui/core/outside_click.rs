use datetime_selector::ui::core::OutsideClickListener;
use ratatui::layout::Rect;

#[test]
fn test_detached_listener_never_fires() {
    let mut listener = OutsideClickListener::new();
    listener.set_boundary([Rect::new(0, 0, 10, 3)]);
    assert!(!listener.is_attached());
    assert!(!listener.is_outside(50, 50));
}

#[test]
fn test_attached_listener_checks_every_area() {
    let mut listener = OutsideClickListener::new();
    listener.attach();
    listener.set_boundary([Rect::new(0, 0, 10, 3), Rect::new(0, 3, 30, 9)]);

    assert!(!listener.is_outside(5, 1));
    assert!(!listener.is_outside(25, 10));
    assert!(listener.is_outside(25, 1));
    assert!(listener.is_outside(0, 12));
}

#[test]
fn test_empty_areas_are_ignored() {
    let mut listener = OutsideClickListener::new();
    listener.attach();
    listener.set_boundary([Rect::new(0, 0, 10, 3), Rect::default()]);
    assert!(listener.is_outside(0, 5));
}

#[test]
fn test_detach_clears_boundary() {
    let mut listener = OutsideClickListener::new();
    listener.attach();
    listener.set_boundary([Rect::new(0, 0, 10, 3)]);
    listener.detach();
    listener.attach();

    // No boundary left, so every press is outside
    assert!(listener.is_outside(1, 1));
}
