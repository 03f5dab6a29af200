use super::*;
use crate::text::tables::{COMBINING, FULL_WIDTH, WORD_BREAK};
use unicode_width::UnicodeWidthChar;

fn assert_sorted(ranges: &[(u32, u32)]) {
    for pair in ranges.windows(2) {
        assert!(pair[0].0 <= pair[0].1, "bad range {:x?}", pair[0]);
        assert!(pair[0].1 < pair[1].0, "overlap {:x?} {:x?}", pair[0], pair[1]);
    }
}

#[test]
fn tables_are_sorted_and_disjoint() {
    assert_sorted(COMBINING);
    assert_sorted(FULL_WIDTH);
    let wb: Vec<(u32, u32)> = WORD_BREAK.iter().map(|&(lo, hi, _)| (lo, hi)).collect();
    assert_sorted(&wb);
}

#[test]
fn combining_marks_are_detected() {
    assert!(is_combining(0x0301));
    assert!(is_combining(0x20D7));
    assert!(is_combining(0xFE0F));
    assert!(!is_combining('a' as u32));
    assert!(!is_combining('字' as u32));
}

#[test]
fn control_excludes_line_feed() {
    assert!(is_control(0));
    assert!(is_control(0x07));
    assert!(is_control(0x7F));
    assert!(is_control(0x9B));
    assert!(!is_control(0x0A));
    assert!(!is_control(' ' as u32));
    assert!(!is_control(0xA0));
}

#[test]
fn classify_reports_all_flags() {
    let c = classify('測' as u32);
    assert!(c.is_full_width);
    assert!(!c.is_combining);
    assert!(!c.is_control);

    let c = classify(0x3099);
    assert!(c.is_combining);
    assert_eq!(codepoint_width(0x3099), 0);
}

#[test]
fn widths_agree_with_unicode_width_on_common_scripts() {
    let samples = "aZ9 ~éßΩжא日本語한국어カタカナＡＢ😀🚀";
    for ch in samples.chars() {
        let expected = UnicodeWidthChar::width(ch).unwrap_or(0) as u8;
        assert_eq!(codepoint_width(ch as u32), expected, "width of {ch:?}");
    }
}
