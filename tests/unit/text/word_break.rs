use super::*;
use unicode_segmentation::UnicodeSegmentation;

fn boundaries(input: &str) -> Vec<bool> {
    (0..=glyph_count_of(input))
        .map(|i| is_word_break_boundary(input, i))
        .collect()
}

fn glyph_count_of(input: &str) -> usize {
    crate::text::glyph::glyph_count(input)
}

#[test]
fn classes_follow_the_table() {
    assert_eq!(word_break_class('a' as u32), WordBreakClass::ALetter);
    assert_eq!(word_break_class('7' as u32), WordBreakClass::Numeric);
    assert_eq!(word_break_class('\r' as u32), WordBreakClass::Cr);
    assert_eq!(word_break_class(0x200D), WordBreakClass::Zwj);
    assert_eq!(word_break_class('א' as u32), WordBreakClass::HebrewLetter);
    assert_eq!(word_break_class('カ' as u32), WordBreakClass::Katakana);
    assert_eq!(word_break_class('(' as u32), WordBreakClass::Other);
    assert_eq!(word_break_class('日' as u32), WordBreakClass::Other);
}

#[test]
fn one_class_per_glyph() {
    let classes = word_break_classes("e\u{0301}1 ");
    assert_eq!(
        classes,
        vec![
            WordBreakClass::ALetter,
            WordBreakClass::Numeric,
            WordBreakClass::WSegSpace
        ]
    );
}

#[test]
fn spaces_separate_letters() {
    assert_eq!(
        boundaries("ab cd"),
        vec![true, false, true, true, false, true]
    );
}

#[test]
fn apostrophes_and_decimals_stay_inside_words() {
    assert!(!is_word_break_boundary("can't", 3));
    assert!(!is_word_break_boundary("can't", 4));
    assert!(!is_word_break_boundary("3.14", 1));
    assert!(!is_word_break_boundary("3.14", 2));
    // A trailing separator does break.
    assert!(is_word_break_boundary("end.", 3));
}

#[test]
fn crlf_is_never_split() {
    assert!(!is_word_break_boundary("\r\n", 1));
    assert!(is_word_break_boundary("a\n", 1));
}

#[test]
fn katakana_and_connectors_join() {
    assert!(!is_word_break_boundary("カタカナ", 2));
    assert!(!is_word_break_boundary("snake_case", 5));
    assert!(!is_word_break_boundary("snake_case", 6));
}

#[test]
fn hebrew_quote_rules() {
    assert!(!is_word_break_boundary("א'", 1));
    assert!(!is_word_break_boundary("א\"ב", 1));
    assert!(!is_word_break_boundary("א\"ב", 2));
}

#[test]
fn regional_indicators_pair_up() {
    let flags = "\u{1F1EB}\u{1F1F7}\u{1F1E9}\u{1F1EA}";
    assert_eq!(boundaries(flags), vec![true, false, true, false, true]);
}

#[test]
fn format_characters_are_transparent() {
    // Soft hyphen between letters does not split the word.
    let input = "ab\u{00AD}cd";
    assert!(!is_word_break_boundary(input, 2));
    assert!(!is_word_break_boundary(input, 3));
}

#[test]
fn ascii_segments_match_unicode_segmentation() {
    let input = "The quick (\"brown\") fox can't jump 32.3 feet, right?";
    let ours: Vec<&str> = word_segments(input)
        .into_iter()
        .map(|r| &input[r])
        .collect();
    let theirs: Vec<&str> = input.split_word_bounds().collect();
    assert_eq!(ours, theirs);
}

#[test]
fn letters_outside_latin_1_are_aletter() {
    assert_eq!(
        word_break_classes("Việt"),
        vec![WordBreakClass::ALetter; 4]
    );
    for word in ["বাংলা", "ქართული", "ሰላም", "ᏣᎳᎩ", "नमस्ते"] {
        let classes = word_break_classes(word);
        assert_eq!(classes[0], WordBreakClass::ALetter, "{word}");
        assert!(!classes.contains(&WordBreakClass::Other), "{word}");
    }
}

#[test]
fn other_scripts_segment_like_unicode_segmentation() {
    for input in [
        "Tiếng Việt có dấu, đúng không?",
        "আমি বাংলায় গান গাই ১২৩",
        "ქართული ენა (kartuli)",
        "ሰላም ለዓለም፡ 2024",
        "ᏣᎳᎩ ᎦᏬᏂᎯᏍᏗ",
        "नमस्ते दुनिया, ४२.५",
        "Ἀθῆναι καὶ Σπάρτη",
    ] {
        let ours: Vec<&str> = word_segments(input)
            .into_iter()
            .map(|r| &input[r])
            .collect();
        let theirs: Vec<&str> = input.split_word_bounds().collect();
        assert_eq!(ours, theirs, "{input}");
    }
}

#[test]
fn split_words_drops_blank_segments() {
    assert_eq!(
        split_words("  hello, world!  \tfoo"),
        vec!["hello,", "world!", "foo"]
    );
    assert_eq!(split_words("line\nbreak"), vec!["line", "break"]);
    assert!(split_words("   ").is_empty());
    assert!(split_words("").is_empty());
}

#[test]
fn word_characters_are_letters_and_digits() {
    assert!(is_word_character('x' as u32));
    assert!(is_word_character('5' as u32));
    assert!(is_word_character('ア' as u32));
    assert!(!is_word_character('_' as u32));
    assert!(!is_word_character(' ' as u32));
    assert!(!is_word_character('-' as u32));
}
