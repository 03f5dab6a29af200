//! Word boundaries over glyphs, following the UAX #29 pair rules.
//!
//! Combining marks are already folded into their base glyph, so each glyph is
//! classified by its base code point. Extend/Format/ZWJ glyphs that survive
//! (e.g. at the start of the input) are transparent to the pair rules.

use std::ops::Range;

use super::glyph::{glyphs, GlyphKind};
use super::tables::lookup_word_break;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WordBreakClass {
    ALetter,
    Cr,
    DoubleQuote,
    Extend,
    ExtendNumLet,
    Format,
    HebrewLetter,
    Katakana,
    Lf,
    MidLetter,
    MidNum,
    MidNumLet,
    Newline,
    Numeric,
    RegionalIndicator,
    SingleQuote,
    WSegSpace,
    Zwj,
    Other,
}

use WordBreakClass::*;

pub fn word_break_class(cp: u32) -> WordBreakClass {
    lookup_word_break(cp).unwrap_or(Other)
}

/// Letters and digits: the code points a word is made of.
pub fn is_word_character(cp: u32) -> bool {
    matches!(
        word_break_class(cp),
        ALetter | HebrewLetter | Katakana | Numeric
    )
}

/// One class per glyph, in glyph order. Recomputed on every call.
pub fn word_break_classes<S: AsRef<[u8]> + ?Sized>(input: &S) -> Vec<WordBreakClass> {
    glyphs(input)
        .map(|g| g.base.map(word_break_class).unwrap_or(Other))
        .collect()
}

/// Whether a word boundary sits right before glyph `glyph_index`. The start
/// and end of the input are always boundaries.
pub fn is_word_break_boundary<S: AsRef<[u8]> + ?Sized>(input: &S, glyph_index: usize) -> bool {
    let classes = word_break_classes(input);
    boundary_before(&classes, glyph_index)
}

fn is_ignorable(c: WordBreakClass) -> bool {
    matches!(c, Extend | Format | Zwj)
}

fn is_ahletter(c: WordBreakClass) -> bool {
    matches!(c, ALetter | HebrewLetter)
}

fn is_midnumletq(c: WordBreakClass) -> bool {
    matches!(c, MidNumLet | SingleQuote)
}

fn is_line_break(c: WordBreakClass) -> bool {
    matches!(c, Newline | Cr | Lf)
}

/// Index of the closest non-ignorable glyph before `i`, falling back to
/// `i - 1` when only ignorables precede.
fn left_of(classes: &[WordBreakClass], i: usize) -> Option<usize> {
    if i == 0 {
        return None;
    }
    let mut j = i - 1;
    loop {
        if !is_ignorable(classes[j]) {
            return Some(j);
        }
        if j == 0 {
            return Some(i - 1);
        }
        j -= 1;
    }
}

fn significant_before(classes: &[WordBreakClass], i: usize) -> Option<WordBreakClass> {
    (0..i)
        .rev()
        .map(|j| classes[j])
        .find(|c| !is_ignorable(*c))
}

fn significant_after(classes: &[WordBreakClass], i: usize) -> Option<WordBreakClass> {
    classes
        .iter()
        .skip(i + 1)
        .copied()
        .find(|c| !is_ignorable(*c))
}

pub(crate) fn boundary_before(classes: &[WordBreakClass], i: usize) -> bool {
    // WB1, WB2
    if i == 0 || i >= classes.len() {
        return true;
    }
    let prev = classes[i - 1];
    let cur = classes[i];

    // WB3
    if prev == Cr && cur == Lf {
        return false;
    }
    // WB3a, WB3b
    if is_line_break(prev) || is_line_break(cur) {
        return true;
    }
    // WB3d
    if prev == WSegSpace && cur == WSegSpace {
        return false;
    }
    // WB4
    if is_ignorable(cur) {
        return false;
    }

    let Some(l) = left_of(classes, i) else {
        return true;
    };
    let left = classes[l];
    let before_left = significant_before(classes, l);
    let after_cur = significant_after(classes, i);

    // WB5
    if is_ahletter(left) && is_ahletter(cur) {
        return false;
    }
    // WB6
    if is_ahletter(left)
        && (cur == MidLetter || is_midnumletq(cur))
        && after_cur.is_some_and(is_ahletter)
    {
        return false;
    }
    // WB7
    if (left == MidLetter || is_midnumletq(left))
        && is_ahletter(cur)
        && before_left.is_some_and(is_ahletter)
    {
        return false;
    }
    // WB7a
    if left == HebrewLetter && cur == SingleQuote {
        return false;
    }
    // WB7b
    if left == HebrewLetter && cur == DoubleQuote && after_cur == Some(HebrewLetter) {
        return false;
    }
    // WB7c
    if left == DoubleQuote && cur == HebrewLetter && before_left == Some(HebrewLetter) {
        return false;
    }
    // WB8, WB9, WB10
    if (left == Numeric || is_ahletter(left)) && (cur == Numeric || is_ahletter(cur)) {
        return false;
    }
    // WB11
    if (left == MidNum || is_midnumletq(left)) && cur == Numeric && before_left == Some(Numeric) {
        return false;
    }
    // WB12
    if left == Numeric && (cur == MidNum || is_midnumletq(cur)) && after_cur == Some(Numeric) {
        return false;
    }
    // WB13
    if left == Katakana && cur == Katakana {
        return false;
    }
    // WB13a
    if (is_ahletter(left) || matches!(left, Numeric | Katakana | ExtendNumLet))
        && cur == ExtendNumLet
    {
        return false;
    }
    // WB13b
    if left == ExtendNumLet && (is_ahletter(cur) || matches!(cur, Numeric | Katakana)) {
        return false;
    }
    // WB15, WB16: regional indicators pair up.
    if left == RegionalIndicator && cur == RegionalIndicator {
        let run = classes[..=l]
            .iter()
            .rev()
            .filter(|c| !is_ignorable(**c))
            .take_while(|c| **c == RegionalIndicator)
            .count();
        return run % 2 == 0;
    }
    // WB999
    true
}

/// Byte spans of the segments delimited by word boundaries.
pub fn word_segments(input: &str) -> Vec<Range<usize>> {
    let classes = word_break_classes(input);
    let mut out = Vec::new();
    let mut seg_start = 0;
    for (i, glyph) in glyphs(input).enumerate() {
        if i > 0 && boundary_before(&classes, i) {
            out.push(seg_start..glyph.span.start);
            seg_start = glyph.span.start;
        }
    }
    if seg_start < input.len() {
        out.push(seg_start..input.len());
    }
    out
}

/// Splits `input` into whitespace-separated words. Adjacent non-blank segments
/// (e.g. `word` and `,`) are kept together.
pub fn split_words(input: &str) -> Vec<&str> {
    let mut words = Vec::new();
    let mut current: Option<Range<usize>> = None;
    for seg in word_segments(input) {
        let text = &input[seg.clone()];
        let blank = glyphs(text).all(|g| {
            g.kind == GlyphKind::Control
                || g.base
                    .map(word_break_class)
                    .is_some_and(|c| matches!(c, WSegSpace | Newline | Cr | Lf))
        });
        if blank {
            if let Some(r) = current.take() {
                words.push(&input[r]);
            }
            continue;
        }
        current = Some(match current {
            Some(r) => r.start..seg.end,
            None => seg,
        });
    }
    if let Some(r) = current {
        words.push(&input[r]);
    }
    words
}

#[cfg(test)]
#[path = "../../tests/unit/text/word_break.rs"]
mod tests;
