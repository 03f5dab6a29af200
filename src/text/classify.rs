use super::tables::{in_ranges, COMBINING, FULL_WIDTH};

/// Display properties of a single code point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CodePointClass {
    pub is_combining: bool,
    pub is_full_width: bool,
    pub is_control: bool,
}

pub fn classify(cp: u32) -> CodePointClass {
    CodePointClass {
        is_combining: is_combining(cp),
        is_full_width: is_full_width(cp),
        is_control: is_control(cp),
    }
}

pub fn is_combining(cp: u32) -> bool {
    // Fast path for ASCII and Latin-1.
    if cp < 0x0300 {
        return false;
    }
    in_ranges(COMBINING, cp)
}

pub fn is_full_width(cp: u32) -> bool {
    if cp < 0x1100 {
        return false;
    }
    in_ranges(FULL_WIDTH, cp)
}

/// C0 controls (except line feed, which layout treats as a line break), DEL
/// and C1 controls.
pub fn is_control(cp: u32) -> bool {
    if cp == 0 {
        return true;
    }
    if cp < 0x20 {
        return cp != 0x0A;
    }
    (0x7F..0xA0).contains(&cp)
}

/// Column width of a code point drawn on its own. Combining marks and controls
/// take no column; combining wins over full-width for marks living inside
/// wide blocks (e.g. U+3099).
pub fn codepoint_width(cp: u32) -> u8 {
    if is_control(cp) || is_combining(cp) {
        0
    } else if is_full_width(cp) {
        2
    } else {
        1
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/classify.rs"]
mod tests;
