//! Character-set / ECI behavior exercised at the public API boundary.

use barqode_rs::character_set::{
    charset_from_eci, charset_from_name, decode_to_utf8, eci_from_charset, encode_from_utf8, guess_encoding,
    CharacterSet, Eci,
};

#[test]
fn eci_unknown_has_no_value() {
    assert_eq!(Eci::Unknown.value(), None);
    assert_eq!(Eci::BINARY.value(), Some(899));
}

#[test]
fn unrecognized_eci_value_is_unknown_charset() {
    assert_eq!(charset_from_eci(12345), CharacterSet::Unknown);
}

#[test]
fn shift_jis_eci_roundtrips_through_the_name_table() {
    let eci = eci_from_charset(CharacterSet::Shift_JIS).unwrap();
    assert_eq!(charset_from_eci(eci), CharacterSet::Shift_JIS);
    assert_eq!(charset_from_name("sjis"), CharacterSet::Shift_JIS);
}

#[test]
fn unclassifiable_high_bytes_fall_back_to_the_hinted_charset() {
    // 0xFF is not a valid lead byte for either the Shift_JIS or GBK
    // double-byte ranges, so neither heuristic can claim it; with no ECI
    // seen yet the hinted charset from the QR/symbol-level ECI wins.
    let bytes = [b'A', 0xFF, b'C'];
    let guessed = guess_encoding(&bytes, CharacterSet::ISO8859_11);
    assert_eq!(guessed, CharacterSet::ISO8859_11);
}

#[test]
fn thai_bytes_under_iso8859_11_roundtrip_through_the_public_api() {
    let bytes = [b'A', 0xA1, b'C']; // 'ก' = U+0E01 at 0xA1
    let text = decode_to_utf8(CharacterSet::ISO8859_11, &bytes);
    assert_eq!(text, "A\u{0E01}C");
    assert_eq!(encode_from_utf8(CharacterSet::ISO8859_11, &text).unwrap(), bytes);
}

#[test]
fn gb18030_multibyte_roundtrip() {
    let text = "A\u{4E2D}B"; // "中"
    let bytes = encode_from_utf8(CharacterSet::GB18030, text).unwrap();
    assert_eq!(decode_to_utf8(CharacterSet::GB18030, &bytes), text);
}

#[test]
fn binary_eci_passes_bytes_through_as_latin1() {
    let bytes = [0x00u8, 0x7F, 0xFF];
    let text = decode_to_utf8(CharacterSet::Binary, &bytes);
    assert_eq!(text.chars().count(), 3);
}

#[test]
fn cp1252_euro_sign_roundtrip() {
    let text = "\u{20AC}100";
    let bytes = encode_from_utf8(CharacterSet::Cp1252, text).unwrap();
    assert_eq!(decode_to_utf8(CharacterSet::Cp1252, &bytes), text);
}

#[test]
fn shift_jis_05c_decodes_as_yen_not_backslash() {
    let bytes = [b'A', 0x5C, b'B'];
    let text = decode_to_utf8(CharacterSet::Shift_JIS, &bytes);
    assert_eq!(text, "A\u{00A5}B");
    assert_eq!(encode_from_utf8(CharacterSet::Shift_JIS, &text).unwrap(), bytes);
}

#[test]
fn shift_jis_double_byte_kanji_untouched_by_the_05c_override() {
    let text = "\u{4E2D}"; // "中", Shift_JIS 0x92 0x86 (neither byte is 0x5C/0x7E)
    let bytes = encode_from_utf8(CharacterSet::Shift_JIS, text).unwrap();
    assert_eq!(bytes, [0x92, 0x86]);
    assert_eq!(decode_to_utf8(CharacterSet::Shift_JIS, &bytes), text);
}
