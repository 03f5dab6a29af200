//! Unicode text handling: decoding, code point classes, glyph segmentation and
//! word boundaries.

pub mod classify;
pub mod decode;
pub mod glyph;
mod tables;
pub mod word_break;

pub use classify::{classify, codepoint_width, is_combining, is_control, is_full_width, CodePointClass};
pub use decode::{
    decode_utf16, decode_utf32, decode_utf8, to_utf8, to_wide, DecodeError, DecodeErrorKind,
};
pub use glyph::{
    cell_to_glyph_index, cells, glyph_at_index, glyph_boundary_after, glyph_boundary_before,
    glyph_count, glyphs, string_width, Glyph, GlyphKind, Glyphs,
};
pub use word_break::{
    is_word_break_boundary, is_word_character, split_words, word_break_class,
    word_break_classes, word_segments, WordBreakClass,
};
