//! Canonical input events consumed by the component tree.
//!
//! Terminal libraries are kept out of this module; `crate::tui::crossterm`
//! converts from crossterm and `events_from_bytes` from raw text input.

use crate::text::{glyphs, GlyphKind};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Decoded text for one glyph (or a pasted run of text).
    Character(String),
    Special(Key),
    Mouse(Mouse),
    CursorReport { x: i32, y: i32 },
    Resize { width: u16, height: u16 },
    FocusGained,
    FocusLost,
    /// Wakes the loop without carrying input.
    Custom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    ArrowLeftCtrl,
    ArrowRightCtrl,
    ArrowUpCtrl,
    ArrowDownCtrl,
    Backspace,
    Delete,
    Return,
    Escape,
    Tab,
    TabReverse,
    Home,
    End,
    PageUp,
    PageDown,
    F(u8),
    /// Control + a letter, lowercase.
    Ctrl(char),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    None,
    WheelUp,
    WheelDown,
    WheelLeft,
    WheelRight,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Motion {
    Pressed,
    Released,
    Moved,
}

/// A mouse report in grid cells, 0-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mouse {
    pub button: MouseButton,
    pub motion: Motion,
    pub x: i32,
    pub y: i32,
    pub shift: bool,
    pub meta: bool,
    pub control: bool,
}

impl Mouse {
    pub fn new(button: MouseButton, motion: Motion, x: i32, y: i32) -> Self {
        Self {
            button,
            motion,
            x,
            y,
            shift: false,
            meta: false,
            control: false,
        }
    }

    pub fn is_primary_press(&self) -> bool {
        self.button == MouseButton::Left && self.motion == Motion::Pressed
    }
}

impl Event {
    pub fn character(ch: char) -> Self {
        Event::Character(ch.to_string())
    }

    pub fn mouse(button: MouseButton, motion: Motion, x: i32, y: i32) -> Self {
        Event::Mouse(Mouse::new(button, motion, x, y))
    }

    pub fn is_character(&self) -> bool {
        matches!(self, Event::Character(_))
    }

    pub fn as_character(&self) -> Option<&str> {
        match self {
            Event::Character(s) => Some(s),
            _ => None,
        }
    }

    /// True for a `Character` event carrying exactly `ch`.
    pub fn is_char(&self, ch: char) -> bool {
        let mut buf = [0u8; 4];
        self.as_character() == Some(ch.encode_utf8(&mut buf))
    }

    pub fn is_key(&self, key: Key) -> bool {
        matches!(self, Event::Special(k) if *k == key)
    }

    pub fn is_mouse(&self) -> bool {
        matches!(self, Event::Mouse(_))
    }

    pub fn as_mouse(&self) -> Option<&Mouse> {
        match self {
            Event::Mouse(m) => Some(m),
            _ => None,
        }
    }
}

fn control_key(cp: u32) -> Option<Key> {
    match cp {
        0x09 => Some(Key::Tab),
        0x0A | 0x0D => Some(Key::Return),
        0x08 | 0x7F => Some(Key::Backspace),
        0x1B => Some(Key::Escape),
        0x01..=0x1A => char::from_u32(cp - 1 + 'a' as u32).map(Key::Ctrl),
        _ => None,
    }
}

/// Splits raw text input into one event per glyph. Control bytes map to their
/// special keys where one exists and are dropped otherwise; malformed bytes
/// arrive as U+FFFD characters.
pub fn events_from_bytes(input: &[u8]) -> Vec<Event> {
    let mut out = Vec::new();
    for glyph in glyphs(input) {
        match (glyph.kind, glyph.base) {
            (GlyphKind::Malformed, _) => out.push(Event::character(char::REPLACEMENT_CHARACTER)),
            // Line feed is not a control glyph but still means Return here.
            (_, Some(cp)) if glyph.kind == GlyphKind::Control || cp == 0x0A => {
                if let Some(key) = control_key(cp) {
                    out.push(Event::Special(key));
                }
            }
            _ => {
                let text = String::from_utf8_lossy(&input[glyph.span]).into_owned();
                out.push(Event::Character(text));
            }
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/core/event.rs"]
mod tests;
