use crate::core::event::{Event, Key, Motion, Mouse, MouseButton};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Converts a crossterm event. Key releases and keys with no counterpart
/// yield `None`.
pub fn into_event(event: crossterm::event::Event) -> Option<Event> {
    match event {
        crossterm::event::Event::Key(key) => into_key_event(key),
        crossterm::event::Event::Mouse(mouse) => Some(Event::Mouse(into_mouse(mouse))),
        crossterm::event::Event::Resize(width, height) => Some(Event::Resize { width, height }),
        crossterm::event::Event::FocusGained => Some(Event::FocusGained),
        crossterm::event::Event::FocusLost => Some(Event::FocusLost),
        crossterm::event::Event::Paste(text) if text.is_empty() => None,
        crossterm::event::Event::Paste(text) => Some(Event::Character(text)),
    }
}

pub fn into_key_event(event: KeyEvent) -> Option<Event> {
    if event.kind == KeyEventKind::Release {
        return None;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let key = match event.code {
        KeyCode::Char(ch) if ctrl => Key::Ctrl(ch.to_ascii_lowercase()),
        KeyCode::Char(ch) => return Some(Event::character(ch)),
        KeyCode::Enter => Key::Return,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::TabReverse,
        KeyCode::Esc => Key::Escape,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up if ctrl => Key::ArrowUpCtrl,
        KeyCode::Down if ctrl => Key::ArrowDownCtrl,
        KeyCode::Left if ctrl => Key::ArrowLeftCtrl,
        KeyCode::Right if ctrl => Key::ArrowRightCtrl,
        KeyCode::Up => Key::ArrowUp,
        KeyCode::Down => Key::ArrowDown,
        KeyCode::Left => Key::ArrowLeft,
        KeyCode::Right => Key::ArrowRight,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::F(n) => Key::F(n),
        KeyCode::Null => Key::Ctrl(' '),
        _ => return None,
    };
    Some(Event::Special(key))
}

pub fn into_mouse(event: crossterm::event::MouseEvent) -> Mouse {
    use crossterm::event::MouseEventKind as Kind;

    let (button, motion) = match event.kind {
        Kind::Down(button) => (into_mouse_button(button), Motion::Pressed),
        Kind::Up(button) => (into_mouse_button(button), Motion::Released),
        Kind::Drag(button) => (into_mouse_button(button), Motion::Moved),
        Kind::Moved => (MouseButton::None, Motion::Moved),
        Kind::ScrollUp => (MouseButton::WheelUp, Motion::Pressed),
        Kind::ScrollDown => (MouseButton::WheelDown, Motion::Pressed),
        Kind::ScrollLeft => (MouseButton::WheelLeft, Motion::Pressed),
        Kind::ScrollRight => (MouseButton::WheelRight, Motion::Pressed),
    };
    let mods = event.modifiers;
    Mouse {
        button,
        motion,
        x: i32::from(event.column),
        y: i32::from(event.row),
        shift: mods.contains(KeyModifiers::SHIFT),
        meta: mods.contains(KeyModifiers::ALT),
        control: mods.contains(KeyModifiers::CONTROL),
    }
}

fn into_mouse_button(button: crossterm::event::MouseButton) -> MouseButton {
    match button {
        crossterm::event::MouseButton::Left => MouseButton::Left,
        crossterm::event::MouseButton::Right => MouseButton::Right,
        crossterm::event::MouseButton::Middle => MouseButton::Middle,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/crossterm.rs"]
mod tests;
