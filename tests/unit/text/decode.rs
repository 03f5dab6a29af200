use super::*;

#[test]
fn utf8_decodes_every_sequence_length() {
    let s = "aé€😀";
    let bytes = s.as_bytes();
    assert_eq!(decode_utf8(bytes, 0), Ok(('a' as u32, 1)));
    assert_eq!(decode_utf8(bytes, 1), Ok(('é' as u32, 3)));
    assert_eq!(decode_utf8(bytes, 3), Ok(('€' as u32, 6)));
    assert_eq!(decode_utf8(bytes, 6), Ok(('😀' as u32, 10)));
}

#[test]
fn utf8_rejects_truncated_sequence_without_reading_past_end() {
    let bytes = [0xE2, 0x82];
    let err = decode_utf8(&bytes, 0).unwrap_err();
    assert_eq!(err.kind, DecodeErrorKind::Truncated);
    assert_eq!(err.offset, 0);
}

#[test]
fn utf8_rejects_overlong_forms() {
    // '/' encoded on two bytes.
    assert_eq!(
        decode_utf8(&[0xC0, 0xAF], 0).unwrap_err().kind,
        DecodeErrorKind::Overlong
    );
    // U+0000 encoded on three bytes.
    assert_eq!(
        decode_utf8(&[0xE0, 0x80, 0x80], 0).unwrap_err().kind,
        DecodeErrorKind::Overlong
    );
}

#[test]
fn utf8_rejects_surrogates_and_out_of_range() {
    assert_eq!(
        decode_utf8(&[0xED, 0xA0, 0x80], 0).unwrap_err().kind,
        DecodeErrorKind::Surrogate
    );
    assert_eq!(
        decode_utf8(&[0xF4, 0x90, 0x80, 0x80], 0).unwrap_err().kind,
        DecodeErrorKind::OutOfRange
    );
}

#[test]
fn utf8_rejects_bad_lead_and_continuation() {
    assert_eq!(
        decode_utf8(&[0x80], 0).unwrap_err().kind,
        DecodeErrorKind::InvalidLead
    );
    assert_eq!(
        decode_utf8(&[0xC3, 0x41], 0).unwrap_err().kind,
        DecodeErrorKind::InvalidContinuation
    );
    assert_eq!(
        decode_utf8(&[0x41], 1).unwrap_err().kind,
        DecodeErrorKind::EndOfInput
    );
}

#[test]
fn utf16_combines_surrogate_pairs() {
    let wide = to_wide("a😀");
    assert_eq!(decode_utf16(&wide, 0), Ok(('a' as u32, 1)));
    assert_eq!(decode_utf16(&wide, 1), Ok(('😀' as u32, 3)));
}

#[test]
fn utf16_rejects_lone_surrogates() {
    assert_eq!(
        decode_utf16(&[0xDC00], 0).unwrap_err().kind,
        DecodeErrorKind::Surrogate
    );
    assert_eq!(
        decode_utf16(&[0xD800], 0).unwrap_err().kind,
        DecodeErrorKind::Truncated
    );
    assert_eq!(
        decode_utf16(&[0xD800, 0x0041], 0).unwrap_err().kind,
        DecodeErrorKind::InvalidContinuation
    );
}

#[test]
fn utf32_validates_scalar_values() {
    assert_eq!(decode_utf32(&[0x1F600], 0), Ok((0x1F600, 1)));
    assert!(decode_utf32(&[0xD800], 0).is_err());
    assert!(decode_utf32(&[0x110000], 0).is_err());
}

#[test]
fn to_utf8_replaces_malformed_units() {
    assert_eq!(to_utf8(&[0x0068, 0xDC00, 0x0069]), "h\u{FFFD}i");
    assert_eq!(to_utf8(&to_wide("日本")), "日本");
}

#[test]
fn error_display_mentions_offset() {
    let err = decode_utf8(&[0x41, 0xFF], 1).unwrap_err();
    assert_eq!(err.to_string(), "invalid lead unit at offset 1");
}
