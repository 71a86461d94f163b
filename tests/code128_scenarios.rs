//! Code 128 end-to-end scenarios exercised at the codeword-stream decoder
//! boundary.

use barqode_rs::character_set::CharacterSet;
use barqode_rs::code128::decoder::{decode, CODE_START_A, CODE_STOP};
use barqode_rs::content::SegmentType;
use barqode_rs::text::{render, TextMode};

/// Scenario: a binary payload embedding a NUL byte between printable digits,
/// rendered as plain text and as HRI (non-GS1 content falls back to the
/// escaped rendering).
#[test]
fn scenario_embedded_nul_renders_plain_and_escaped() {
    // Set A: '1'=cw17, '2'=cw18, NUL=cw64, '3'=cw19, '4'=cw20.
    let codewords = [17, 18, 64, 19, 20, CODE_STOP];
    let result = decode(&codewords, CODE_START_A, CharacterSet::Unknown).unwrap();

    assert_eq!(result.content.raw_bytes(), &[0x31, 0x32, 0x00, 0x33, 0x34]);
    assert_eq!(result.content.symbology.to_string(), "]C0");
    assert!(result.content.type_byte_ranges().iter().all(|(_, _, kind)| *kind == SegmentType::Binary));

    assert_eq!(render(&result.content, TextMode::Plain), "12\u{0000}34");
    assert_eq!(render(&result.content, TextMode::Hri), "12<NUL>34");
}
