use super::*;

#[test]
fn character_helpers() {
    let event = Event::character('k');
    assert!(event.is_character());
    assert!(event.is_char('k'));
    assert!(!event.is_char('j'));
    assert_eq!(event.as_character(), Some("k"));
    assert!(!event.is_mouse());
}

#[test]
fn special_and_mouse_helpers() {
    assert!(Event::Special(Key::ArrowUp).is_key(Key::ArrowUp));
    assert!(!Event::Special(Key::ArrowUp).is_key(Key::ArrowDown));

    let event = Event::mouse(MouseButton::Left, Motion::Pressed, 3, 4);
    let mouse = event.as_mouse().unwrap();
    assert!(mouse.is_primary_press());
    assert_eq!((mouse.x, mouse.y), (3, 4));
    assert!(!Mouse::new(MouseButton::Left, Motion::Released, 0, 0).is_primary_press());
}

#[test]
fn bytes_split_into_one_event_per_glyph() {
    let events = events_from_bytes("ae\u{0301}日".as_bytes());
    assert_eq!(
        events,
        vec![
            Event::character('a'),
            Event::Character("e\u{0301}".to_string()),
            Event::character('日'),
        ]
    );
}

#[test]
fn control_bytes_map_to_special_keys() {
    let events = events_from_bytes(b"\t\r\n\x7f\x1b\x03\x00");
    assert_eq!(
        events,
        vec![
            Event::Special(Key::Tab),
            Event::Special(Key::Return),
            Event::Special(Key::Return),
            Event::Special(Key::Backspace),
            Event::Special(Key::Escape),
            Event::Special(Key::Ctrl('c')),
        ]
    );
}

#[test]
fn malformed_bytes_become_replacement_characters() {
    let events = events_from_bytes(&[b'x', 0xFF, b'y']);
    assert_eq!(
        events,
        vec![
            Event::character('x'),
            Event::character(char::REPLACEMENT_CHARACTER),
            Event::character('y'),
        ]
    );
}
