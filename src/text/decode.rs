//! Strict code point decoders.
//!
//! Every decoder reads at most the units it needs starting at `offset` and
//! never past the end of the input. A failure always reports where it happened;
//! callers that must stay total (glyph iteration, layout) treat the failing unit
//! as a single malformed unit and resume right after it.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DecodeErrorKind {
    /// The sequence announced more units than the input holds.
    Truncated,
    /// The value was encoded with more units than necessary.
    Overlong,
    /// The first unit cannot start a sequence.
    InvalidLead,
    /// A unit inside the sequence is not a continuation unit.
    InvalidContinuation,
    /// The value lies in the UTF-16 surrogate range.
    Surrogate,
    /// The value exceeds U+10FFFF.
    OutOfRange,
    /// `offset` is at or past the end of the input.
    EndOfInput,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeError {
    pub offset: usize,
    pub kind: DecodeErrorKind,
}

impl DecodeError {
    fn new(offset: usize, kind: DecodeErrorKind) -> Self {
        Self { offset, kind }
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            DecodeErrorKind::Truncated => "truncated sequence",
            DecodeErrorKind::Overlong => "overlong encoding",
            DecodeErrorKind::InvalidLead => "invalid lead unit",
            DecodeErrorKind::InvalidContinuation => "invalid continuation unit",
            DecodeErrorKind::Surrogate => "surrogate code point",
            DecodeErrorKind::OutOfRange => "code point above U+10FFFF",
            DecodeErrorKind::EndOfInput => "end of input",
        };
        write!(f, "{} at offset {}", what, self.offset)
    }
}

impl std::error::Error for DecodeError {}

pub const REPLACEMENT: u32 = 0xFFFD;

fn is_surrogate(cp: u32) -> bool {
    (0xD800..=0xDFFF).contains(&cp)
}

/// Decodes one UTF-8 code point at `offset`. Returns the code point and the
/// offset of the next unit.
pub fn decode_utf8(input: &[u8], offset: usize) -> Result<(u32, usize), DecodeError> {
    let Some(&lead) = input.get(offset) else {
        return Err(DecodeError::new(offset, DecodeErrorKind::EndOfInput));
    };

    let (len, init, min) = match lead {
        0x00..=0x7F => return Ok((lead as u32, offset + 1)),
        0xC0..=0xDF => (2, (lead & 0x1F) as u32, 0x80),
        0xE0..=0xEF => (3, (lead & 0x0F) as u32, 0x800),
        0xF0..=0xF7 => (4, (lead & 0x07) as u32, 0x1_0000),
        _ => return Err(DecodeError::new(offset, DecodeErrorKind::InvalidLead)),
    };

    let mut cp = init;
    for i in 1..len {
        let Some(&b) = input.get(offset + i) else {
            return Err(DecodeError::new(offset, DecodeErrorKind::Truncated));
        };
        if b & 0xC0 != 0x80 {
            return Err(DecodeError::new(
                offset,
                DecodeErrorKind::InvalidContinuation,
            ));
        }
        cp = (cp << 6) | (b & 0x3F) as u32;
    }

    if cp < min {
        return Err(DecodeError::new(offset, DecodeErrorKind::Overlong));
    }
    if is_surrogate(cp) {
        return Err(DecodeError::new(offset, DecodeErrorKind::Surrogate));
    }
    if cp > 0x10FFFF {
        return Err(DecodeError::new(offset, DecodeErrorKind::OutOfRange));
    }
    Ok((cp, offset + len))
}

/// Decodes one UTF-16 code point at `offset`, combining surrogate pairs.
pub fn decode_utf16(input: &[u16], offset: usize) -> Result<(u32, usize), DecodeError> {
    let Some(&hi) = input.get(offset) else {
        return Err(DecodeError::new(offset, DecodeErrorKind::EndOfInput));
    };
    let hi = hi as u32;
    if !is_surrogate(hi) {
        return Ok((hi, offset + 1));
    }
    if hi >= 0xDC00 {
        // Lone low surrogate.
        return Err(DecodeError::new(offset, DecodeErrorKind::Surrogate));
    }
    let Some(&lo) = input.get(offset + 1) else {
        return Err(DecodeError::new(offset, DecodeErrorKind::Truncated));
    };
    let lo = lo as u32;
    if !(0xDC00..=0xDFFF).contains(&lo) {
        return Err(DecodeError::new(
            offset,
            DecodeErrorKind::InvalidContinuation,
        ));
    }
    let cp = 0x1_0000 + ((hi - 0xD800) << 10) + (lo - 0xDC00);
    Ok((cp, offset + 2))
}

/// Decodes one UTF-32 unit at `offset`.
pub fn decode_utf32(input: &[u32], offset: usize) -> Result<(u32, usize), DecodeError> {
    let Some(&cp) = input.get(offset) else {
        return Err(DecodeError::new(offset, DecodeErrorKind::EndOfInput));
    };
    if is_surrogate(cp) {
        return Err(DecodeError::new(offset, DecodeErrorKind::Surrogate));
    }
    if cp > 0x10FFFF {
        return Err(DecodeError::new(offset, DecodeErrorKind::OutOfRange));
    }
    Ok((cp, offset + 1))
}

/// Lossy UTF-8 decode step used by the glyph layer: a malformed unit decodes
/// as `None` and advances by exactly one byte.
pub(crate) fn eat_utf8(input: &[u8], offset: usize) -> (Option<u32>, usize) {
    match decode_utf8(input, offset) {
        Ok((cp, next)) => (Some(cp), next),
        Err(_) => (None, offset + 1),
    }
}

/// Converts UTF-16 units to a `String`, replacing malformed units with U+FFFD.
pub fn to_utf8(input: &[u16]) -> String {
    let mut out = String::with_capacity(input.len());
    let mut offset = 0;
    while offset < input.len() {
        match decode_utf16(input, offset) {
            Ok((cp, next)) => {
                out.push(char::from_u32(cp).unwrap_or(char::REPLACEMENT_CHARACTER));
                offset = next;
            }
            Err(_) => {
                out.push(char::REPLACEMENT_CHARACTER);
                offset += 1;
            }
        }
    }
    out
}

/// Converts a string to UTF-16 units.
pub fn to_wide(input: &str) -> Vec<u16> {
    input.encode_utf16().collect()
}

#[cfg(test)]
#[path = "../../tests/unit/text/decode.rs"]
mod tests;
