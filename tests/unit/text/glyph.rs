use super::*;
use unicode_segmentation::UnicodeSegmentation;

fn spans(input: &str) -> Vec<Range<usize>> {
    glyphs(input).map(|g| g.span).collect()
}

#[test]
fn combining_acute_stays_on_its_base() {
    let input = "a\u{0301}b";
    assert_eq!(glyph_count(input), 2);
    assert_eq!(spans(input), vec![0..3, 3..4]);
}

#[test]
fn boundary_walk_matches_glyph_count_and_round_trips() {
    for input in [
        "",
        "hello",
        "e\u{0301}\u{0302}x",
        "日本語 text",
        "\u{0301}leading mark",
        "tab\there\nnew",
        "👍🏽 ok",
    ] {
        let mut boundaries = 0;
        let mut pos = 0;
        let mut rebuilt = String::new();
        while pos < input.len() {
            let next = glyph_boundary_after(input, pos);
            assert!(next > pos);
            rebuilt.push_str(&input[pos..next]);
            pos = next;
            boundaries += 1;
        }
        assert_eq!(boundaries, glyph_count(input), "count for {input:?}");
        assert_eq!(rebuilt, input);
    }
}

#[test]
fn glyphs_match_extended_graphemes_for_simple_text() {
    let input = "cafe\u{0301} 日本";
    let ours: Vec<&str> = glyphs(input).map(|g| &input[g.span]).collect();
    let theirs: Vec<&str> = input.graphemes(true).collect();
    assert_eq!(ours, theirs);
}

#[test]
fn boundary_before_absorbs_combining_marks() {
    let input = "xa\u{0301}\u{0302}";
    assert_eq!(glyph_boundary_before(input, input.len()), 1);
    assert_eq!(glyph_boundary_before(input, 1), 0);
    assert_eq!(glyph_boundary_before(input, 0), 0);
}

#[test]
fn boundary_before_walks_back_over_multibyte() {
    let input = "a日b";
    assert_eq!(glyph_boundary_before(input, 4), 1);
    assert_eq!(glyph_boundary_before(input, 5), 4);
}

#[test]
fn boundary_before_from_inside_a_code_point_lands_on_its_start() {
    let input = "日本";
    assert_eq!(glyph_boundary_before(input, 5), 3);
    assert_eq!(glyph_boundary_before(input, 4), 3);
    assert_eq!(glyph_boundary_before("日", 2), 0);
    assert_eq!(glyph_boundary_before("日", 1), 0);
    assert_eq!(glyph_at_index(input, -1, 5), 3);
    assert_eq!(glyph_at_index(input, -2, 5), 0);
}

#[test]
fn glyph_at_index_walks_both_directions() {
    let input = "a\u{0301}b日c";
    assert_eq!(glyph_at_index(input, 0, 0), 0);
    assert_eq!(glyph_at_index(input, 1, 0), 3);
    assert_eq!(glyph_at_index(input, 2, 0), 4);
    assert_eq!(glyph_at_index(input, 3, 0), 7);
    assert_eq!(glyph_at_index(input, 99, 0), input.len());
    // Resume from a previous result.
    assert_eq!(glyph_at_index(input, 1, 3), 4);
    assert_eq!(glyph_at_index(input, -2, 7), 3);
    assert_eq!(glyph_at_index(input, -99, 7), 0);
}

#[test]
fn malformed_bytes_become_zero_width_glyphs() {
    let input: &[u8] = &[b'a', 0xFF, 0xC3, b'b'];
    let all: Vec<Glyph> = glyphs(input).collect();
    assert_eq!(all.len(), 4);
    assert_eq!(all[1].kind, GlyphKind::Malformed);
    assert_eq!(all[1].width, 0);
    assert_eq!(all[1].span, 1..2);
    assert_eq!(all[2].kind, GlyphKind::Malformed);
    assert_eq!(all[3].span, 3..4);
}

#[test]
fn malformed_bytes_render_as_visible_placeholder() {
    let input: &[u8] = &[b'a', 0xFF, b'b'];
    assert_eq!(cells(input), vec!["a", "\u{FFFD}", "b"]);
    assert_eq!(string_width(input), 3);
}

#[test]
fn full_width_glyph_is_followed_by_placeholder() {
    let input = "a日b";
    assert_eq!(cells(input), vec!["a", "日", "", "b"]);
    assert_eq!(cell_to_glyph_index(input), vec![0, 1, 1, 2]);
}

#[test]
fn cell_widths_sum_to_column_count() {
    for input in ["abc", "日本語", "e\u{0301}x", "\u{1b}[0m plain", "👍🏽!"] {
        let total: usize = glyphs(input).map(|g| g.width as usize).sum();
        assert_eq!(total, string_width(input), "{input:?}");
        assert_eq!(cells(input).len(), string_width(input));
    }
}

#[test]
fn control_characters_take_no_cell() {
    let input = "a\u{7}b";
    assert_eq!(glyph_count(input), 3);
    assert_eq!(cells(input), vec!["a", "b"]);
    assert_eq!(cell_to_glyph_index(input), vec![0, 2]);
}

#[test]
fn line_feed_occupies_a_blank_cell() {
    assert_eq!(cells("a\nb"), vec!["a", " ", "b"]);
}
