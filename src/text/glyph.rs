//! Glyph segmentation over UTF-8 byte strings.
//!
//! A glyph is one base unit followed by every combining code point after it.
//! The base unit is a decoded code point, or a single byte that failed to
//! decode. All functions here are total: malformed bytes become zero-width
//! `Malformed` glyphs instead of errors.

use std::ops::Range;

use super::classify::{codepoint_width, is_combining, is_control};
use super::decode::{decode_utf8, eat_utf8};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlyphKind {
    Normal,
    Control,
    Malformed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Byte span `[start, end)` in the input.
    pub span: Range<usize>,
    /// Display width in columns: 0, 1 or 2.
    pub width: u8,
    pub kind: GlyphKind,
    /// The base code point, `None` for malformed bytes.
    pub base: Option<u32>,
}

impl Glyph {
    pub fn is_full_width(&self) -> bool {
        self.width == 2
    }
}

/// Start offset of the code unit that ends at `offset`, or that contains it
/// when `offset` points inside a multi-byte sequence.
fn unit_start_before(input: &[u8], offset: usize) -> usize {
    for back in 1..=4 {
        let Some(p) = offset.checked_sub(back) else {
            break;
        };
        if input[p] & 0xC0 == 0x80 {
            continue;
        }
        return match decode_utf8(input, p) {
            Ok((_, end)) if end >= offset => p,
            _ => offset - 1,
        };
    }
    offset - 1
}

/// Offset of the first glyph boundary strictly after `offset`: skips the base
/// unit at `offset` and every combining mark attached to it.
pub fn glyph_boundary_after<S: AsRef<[u8]> + ?Sized>(input: &S, offset: usize) -> usize {
    let input = input.as_ref();
    if offset >= input.len() {
        return input.len();
    }
    let (_, mut next) = eat_utf8(input, offset);
    while next < input.len() {
        match eat_utf8(input, next) {
            (Some(cp), end) if is_combining(cp) => next = end,
            _ => break,
        }
    }
    next
}

/// Offset of the nearest glyph boundary strictly before `offset`, absorbing
/// combining marks onto their base.
pub fn glyph_boundary_before<S: AsRef<[u8]> + ?Sized>(input: &S, offset: usize) -> usize {
    let input = input.as_ref();
    let offset = offset.min(input.len());
    if offset == 0 {
        return 0;
    }
    let mut pos = unit_start_before(input, offset);
    while pos > 0 {
        match eat_utf8(input, pos) {
            (Some(cp), _) if is_combining(cp) => pos = unit_start_before(input, pos),
            _ => break,
        }
    }
    pos
}

/// Walks `glyph_offset` glyphs from `start` (backward when negative) and
/// returns the resulting byte offset. Cost is linear in `glyph_offset`, so
/// callers doing repeated nearby lookups should resume from a previous result.
pub fn glyph_at_index<S: AsRef<[u8]> + ?Sized>(
    input: &S,
    glyph_offset: isize,
    start: usize,
) -> usize {
    let input = input.as_ref();
    let mut pos = start.min(input.len());
    if glyph_offset >= 0 {
        for _ in 0..glyph_offset {
            if pos >= input.len() {
                break;
            }
            pos = glyph_boundary_after(input, pos);
        }
    } else {
        for _ in 0..glyph_offset.unsigned_abs() {
            if pos == 0 {
                break;
            }
            pos = glyph_boundary_before(input, pos);
        }
    }
    pos
}

pub fn glyph_count<S: AsRef<[u8]> + ?Sized>(input: &S) -> usize {
    let input = input.as_ref();
    let mut count = 0;
    let mut pos = 0;
    while pos < input.len() {
        pos = glyph_boundary_after(input, pos);
        count += 1;
    }
    count
}

/// Iterator over the glyphs of a byte string.
#[derive(Clone, Debug)]
pub struct Glyphs<'a> {
    input: &'a [u8],
    pos: usize,
}

impl Iterator for Glyphs<'_> {
    type Item = Glyph;

    fn next(&mut self) -> Option<Glyph> {
        if self.pos >= self.input.len() {
            return None;
        }
        let start = self.pos;
        let end = glyph_boundary_after(self.input, start);
        self.pos = end;

        let (base, _) = eat_utf8(self.input, start);
        let (kind, width) = match base {
            None => (GlyphKind::Malformed, 0),
            Some(cp) if is_control(cp) => (GlyphKind::Control, 0),
            Some(cp) => (GlyphKind::Normal, codepoint_width(cp)),
        };
        Some(Glyph {
            span: start..end,
            width,
            kind,
            base,
        })
    }
}

pub fn glyphs<S: AsRef<[u8]> + ?Sized>(input: &S) -> Glyphs<'_> {
    Glyphs {
        input: input.as_ref(),
        pos: 0,
    }
}

const LINE_FEED: u32 = 0x0A;

/// One entry per terminal column. A full-width glyph is followed by an empty
/// placeholder entry, control glyphs are dropped and malformed bytes show up as
/// a one-column U+FFFD.
pub fn cells<S: AsRef<[u8]> + ?Sized>(input: &S) -> Vec<String> {
    let bytes = input.as_ref();
    let mut out = Vec::with_capacity(bytes.len());
    for glyph in glyphs(bytes) {
        match glyph.kind {
            GlyphKind::Control => {}
            GlyphKind::Malformed => out.push(char::REPLACEMENT_CHARACTER.to_string()),
            GlyphKind::Normal if glyph.base == Some(LINE_FEED) => out.push(" ".to_string()),
            GlyphKind::Normal => {
                if glyph.width == 0 {
                    continue;
                }
                out.push(String::from_utf8_lossy(&bytes[glyph.span.clone()]).into_owned());
                if glyph.is_full_width() {
                    out.push(String::new());
                }
            }
        }
    }
    out
}

/// For every column drawn by `input`, the index (in `glyphs()` order) of the
/// glyph covering it.
pub fn cell_to_glyph_index<S: AsRef<[u8]> + ?Sized>(input: &S) -> Vec<usize> {
    let mut out = Vec::new();
    for (index, glyph) in glyphs(input).enumerate() {
        let columns = match glyph.kind {
            GlyphKind::Control => 0,
            GlyphKind::Malformed => 1,
            GlyphKind::Normal if glyph.base == Some(LINE_FEED) => 1,
            GlyphKind::Normal => glyph.width as usize,
        };
        out.extend(std::iter::repeat(index).take(columns));
    }
    out
}

/// Number of columns `input` occupies once drawn.
pub fn string_width<S: AsRef<[u8]> + ?Sized>(input: &S) -> usize {
    cell_to_glyph_index(input).len()
}

#[cfg(test)]
#[path = "../../tests/unit/text/glyph.rs"]
mod tests;
