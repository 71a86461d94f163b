//! Aztec end-to-end scenarios exercised at the bit-stream decoder boundary.

use barqode_rs::aztec::decoder::decode;
use barqode_rs::character_set::CharacterSet;

fn bits_to_bytes(bits: &str) -> Vec<u8> {
    let mut bytes = Vec::new();
    let mut chunk = String::new();
    for c in bits.chars() {
        chunk.push(c);
        if chunk.len() == 8 {
            bytes.push(u8::from_str_radix(&chunk, 2).unwrap());
            chunk.clear();
        }
    }
    if !chunk.is_empty() {
        while chunk.len() < 8 {
            chunk.push('0');
        }
        bytes.push(u8::from_str_radix(&chunk, 2).unwrap());
    }
    bytes
}

/// Scenario: digit run "88888" followed by 30 upper-case "T"s, crossing a
/// Digit -> Upper latch.
#[test]
fn scenario_aztec_digits_then_upper_run() {
    let mut bits = String::new();
    bits.push_str(&format!("{:05b}", 30)); // Upper CTRL_DL -> Digit
    for _ in 0..5 {
        bits.push_str(&format!("{:04b}", 10)); // Digit '8'
    }
    bits.push_str(&format!("{:04b}", 14)); // Digit CTRL_UL -> Upper
    for _ in 0..30 {
        bits.push_str(&format!("{:05b}", 21)); // Upper 'T'
    }
    let data = bits_to_bytes(&bits);

    let result = decode(&data, CharacterSet::Unknown).unwrap();

    assert_eq!(result.content.text(), "88888TTTTTTTTTTTTTTTTTTTTTTTTTTTTTT");
    assert_eq!(result.content.symbology.to_string(), "]z0");
}
