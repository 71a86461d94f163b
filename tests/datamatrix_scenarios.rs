//! Data Matrix end-to-end scenarios exercised at the codeword-stream
//! decoder boundary.

use barqode_rs::character_set::CharacterSet;
use barqode_rs::content::SegmentType;
use barqode_rs::datamatrix::decoder::decode;

/// Scenario: FNC1 in the very first codeword position (GS1 mode), carrying
/// AI 01 (GTIN-14) + AI 3103 (net weight, kg, 3 decimal places).
#[test]
fn scenario_gs1_gtin_and_weight_round_trips_as_hri() {
    let payload = "01".to_string() + "12345678901231" + "3103" + "000100";
    let mut codewords = vec![232]; // FNC1 as the first codeword -> GS1
    codewords.extend(payload.bytes().map(|b| b + 1));

    let result = decode(&codewords, CharacterSet::Unknown).unwrap();

    assert_eq!(result.content.symbology.to_string(), "]d2");
    assert!(result.content.gs1);
    assert_eq!(result.content.text(), payload);

    let hri = barqode_rs::text::render(&result.content, barqode_rs::text::TextMode::Hri);
    assert_eq!(hri, "(01)12345678901231(3103)000100");
}

#[test]
fn fnc1_not_in_first_position_is_aim_not_gs1() {
    // Ascii digit '1' (codeword 50) first, then FNC1.
    let codewords = vec![50, 232, 50];
    let result = decode(&codewords, CharacterSet::Unknown).unwrap();

    assert_eq!(result.ai_flag, barqode_rs::symbology_identifier::AiFlag::Aim);
    assert_eq!(result.content.symbology.to_string(), "]d3");
    assert!(!result.content.gs1); // AIM-position FNC1 is not a GS1 message
}

#[test]
fn base256_segment_is_reported_as_binary() {
    // 231 latches Base256; the length byte and each data byte are
    // de-randomized with `(149*(pos+1)) % 255 + 1` keyed on the byte's
    // 0-based position in the codeword stream (pos=1 for the length byte
    // right after the 231 latch, pos=2/3 for the two data bytes).
    let codewords = [231, 46, 2, 153]; // length=2, payload de-randomizes to b"AB"

    let result = decode(&codewords, CharacterSet::Unknown).unwrap();
    assert_eq!(result.content.raw_bytes(), &[0x41, 0x42]);
    let ranges = result.content.type_byte_ranges();
    assert!(ranges.iter().any(|(_, _, kind)| *kind == SegmentType::Binary));
}
