//! Aztec bitstream parser: Upper/Lower/Mixed/Punct/Digit mode tables with
//! shift/latch semantics, binary shift, and the Flag token.
//!
//! Table contents follow ISO/IEC 24778 Annex; grounded structurally on
//! `original_source/core/src/aztec/AZDecoder.h`'s `Decode` entry point shape
//! (bit matrix + optional hinted character set in, `DecoderResult` out) even
//! though the table bodies and state machine are this crate's own expression
//! of the standard's mode-table semantics.

use crate::bit_source::BitSource;
use crate::character_set::CharacterSet;
use crate::content::{Content, SegmentType};
use crate::error::{Error, Result};
use crate::structured_append::StructuredAppendInfo;
use crate::symbology_identifier::{AiFlag, SymbologyIdentifier};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Upper,
    Lower,
    Mixed,
    Punct,
    Digit,
}

impl Mode {
    fn bits(self) -> u32 {
        match self {
            Mode::Digit => 4,
            _ => 5,
        }
    }
}

const UPPER_TABLE: [&str; 32] = [
    "CTRL_PS", " ", "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M", "N", "O", "P",
    "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z", "CTRL_LL", "CTRL_ML", "CTRL_DL", "CTRL_BS",
];

const LOWER_TABLE: [&str; 32] = [
    "CTRL_PS", " ", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p",
    "q", "r", "s", "t", "u", "v", "w", "x", "y", "z", "CTRL_US", "CTRL_ML", "CTRL_DL", "CTRL_BS",
];

const MIXED_TABLE: [&str; 32] = [
    "CTRL_PS", " ", "\x01", "\x02", "\x03", "\x04", "\x05", "\x06", "\x07", "\x08", "\t", "\n",
    "\x0B", "\x0C", "\r", "\x1B", "\x1C", "\x1D", "\x1E", "\x1F", "@", "\\", "^", "_", "`", "|",
    "~", "\x7F", "CTRL_LL", "CTRL_UL", "CTRL_PL", "CTRL_BS",
];

const PUNCT_TABLE: [&str; 32] = [
    "FLG", "\r", "\r\n", ". ", ", ", ": ", "!", "\"", "#", "$", "%", "&", "'", "(", ")", "*", "+",
    ",", "-", ".", "/", ":", ";", "<", "=", ">", "?", "[", "]", "{", "}", "CTRL_UL",
];

const DIGIT_TABLE: [&str; 16] =
    ["CTRL_PS", " ", "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ",", ".", "CTRL_UL", "CTRL_US"];

pub struct DecodeResult {
    pub content: Content,
    pub ai_flag: AiFlag,
    pub structured_append: Option<StructuredAppendInfo>,
}

/// Decode the payload bitstream of an Aztec symbol, after its 28/40-bit mode
/// message has already selected layers/codewords and RS correction has run.
pub fn decode(data: &[u8], hinted_charset: CharacterSet) -> Result<DecodeResult> {
    let mut src = BitSource::new(data);
    let mut content = Content::new(hinted_charset, CharacterSet::ISO8859_1);
    let mut mode = Mode::Upper;
    let mut shift_mode: Option<Mode> = None;
    let mut ai_flag = AiFlag::None;
    let mut structured_append: Option<StructuredAppendInfo> = None;
    // Set once a `FLG(0)` has just been processed; the very next token, if it
    // is a latch to Mixed mode, opens the structured-append index/count
    // header instead of ordinary payload.
    let mut just_saw_flg0 = false;

    content.set_segment_type(SegmentType::Text)?;

    while src.available() >= mode.bits() {
        let active = shift_mode.take().unwrap_or(mode);
        let bits = active.bits();
        let value = src.read_bits(bits)? as usize;

        let token = match active {
            Mode::Upper => UPPER_TABLE[value],
            Mode::Lower => LOWER_TABLE[value],
            Mode::Mixed => MIXED_TABLE[value],
            Mode::Punct => PUNCT_TABLE[value],
            Mode::Digit => DIGIT_TABLE[value],
        };

        let saw_flg0_this_token = just_saw_flg0;
        just_saw_flg0 = false;

        match token {
            "CTRL_PS" => shift_mode = Some(Mode::Punct),
            "CTRL_LL" => mode = Mode::Lower,
            "CTRL_UL" => mode = Mode::Upper,
            "CTRL_ML" => {
                if saw_flg0_this_token && active == Mode::Upper {
                    structured_append = Some(read_structured_append_header(&mut src)?);
                    mode = Mode::Upper;
                } else {
                    mode = Mode::Mixed;
                }
            }
            "CTRL_DL" => mode = Mode::Digit,
            "CTRL_PL" => mode = Mode::Punct,
            "CTRL_US" => shift_mode = Some(Mode::Upper),
            "CTRL_BS" => {
                decode_binary_shift(&mut src, &mut content)?;
            }
            "FLG" => {
                let n = read_digit_value(&mut src)?;
                match n {
                    0 => {
                        ai_flag = AiFlag::Gs1;
                        content.mark_gs1();
                        just_saw_flg0 = active == Mode::Upper;
                    }
                    1..=6 => {
                        let mut digits = String::new();
                        for _ in 0..n {
                            digits.push((b'0' + read_digit_value(&mut src)?) as char);
                        }
                        let value: u32 = digits.parse().map_err(|_| Error::format("Aztec: invalid ECI digits"))?;
                        content.switch_eci(crate::character_set::Eci::Value(value))?;
                    }
                    _ => return Err(Error::format("Aztec: FLG(7) is reserved")),
                }
            }
            _ => content.append_bytes(token.as_bytes())?,
        }
    }

    content.symbology = SymbologyIdentifier::aztec(ai_flag);
    content.finalize()?;
    Ok(DecodeResult { content, ai_flag, structured_append })
}

/// Structured-append header: two Upper-mode A-Z letters (index, count) right
/// after `FLG(0)` latches to Mixed mode, optionally followed by a run of A-Z
/// id characters terminated by a space token.
fn read_structured_append_header(src: &mut BitSource) -> Result<StructuredAppendInfo> {
    let index = read_upper_letter(src)?;
    let count = read_upper_letter(src)?;
    let mut id = String::new();
    while src.available() >= 5 {
        let peeked = src.peek_bits(5)? as usize;
        if UPPER_TABLE[peeked] == " " {
            src.read_bits(5)?;
            break;
        }
        let token = UPPER_TABLE[src.read_bits(5)? as usize];
        if token.len() == 1 && token.as_bytes()[0].is_ascii_uppercase() {
            id.push_str(token);
        } else {
            break;
        }
    }
    let file_id = if id.is_empty() {
        None
    } else {
        Some(id.bytes().fold(0u32, |acc, b| acc * 26 + (b - b'A') as u32))
    };
    Ok(StructuredAppendInfo { index, count: count + 1, parity: None, file_id })
}

fn read_upper_letter(src: &mut BitSource) -> Result<u8> {
    let v = src.read_bits(5)? as usize;
    match UPPER_TABLE[v] {
        s if s.len() == 1 && s.as_bytes()[0].is_ascii_uppercase() => Ok(s.as_bytes()[0] - b'A'),
        _ => Err(Error::format("Aztec: expected A-Z letter in structured-append header")),
    }
}

/// Read one Digit-mode value (4 bits) for the FLG(n) digit sequence, mapping
/// the Digit table's numeral entries (index 2-11) back to 0-9.
fn read_digit_value(src: &mut BitSource) -> Result<u8> {
    let v = src.read_bits(4)? as usize;
    match DIGIT_TABLE[v] {
        "0" => Ok(0),
        s if s.len() == 1 && s.as_bytes()[0].is_ascii_digit() => Ok(s.as_bytes()[0] - b'0'),
        _ => Err(Error::format("Aztec: expected digit in FLG sequence")),
    }
}

/// B/S: a 5-bit count (or, if zero, an 11-bit extended count plus 31) of raw
/// bytes that follow at 8 bits each, after which the prior mode resumes.
fn decode_binary_shift(src: &mut BitSource, content: &mut Content) -> Result<()> {
    let mut length = src.read_bits(5)? as usize;
    if length == 0 {
        length = src.read_bits(11)? as usize + 31;
    }
    content.set_segment_type(SegmentType::Binary)?;
    for _ in 0..length {
        let byte = src.read_bits(8)? as u8;
        content.push(byte)?;
    }
    content.set_segment_type(SegmentType::Text)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn decodes_upper_case_word() {
        // Upper mode indices for 'A'=2,'B'=3,'C'=4 (5 bits each)
        let bits = format!("{:05b}{:05b}{:05b}", 2, 3, 4);
        let data = bits_to_bytes(&bits);
        let result = decode(&data, CharacterSet::Unknown).unwrap();
        assert_eq!(result.content.text(), "ABC");
    }

    #[test]
    fn structured_append_header_after_flg0() {
        // CTRL_PS(0) -> Punct; FLG(0) at Punct idx 0; Digit idx 2 = '0' (n=0);
        // back in Upper, CTRL_ML (29) opens the header; index='B'(idx 3, ->1),
        // count='E'(idx 6, ->4, stored as count-1+1=5).
        let bits = format!(
            "{:05b}{:05b}{:04b}{:05b}{:05b}{:05b}",
            0, 0, 2, 29, 3, 6
        );
        let data = bits_to_bytes(&bits);
        let result = decode(&data, CharacterSet::Unknown).unwrap();
        let info = result.structured_append.unwrap();
        assert_eq!(info.index, 1);
        assert_eq!(info.count, 5);
    }

    #[test]
    fn flg_zero_marks_gs1() {
        // Punct mode default start? Mode starts Upper; need to reach Punct via
        // CTRL_PS shift (index 0 in Upper), then FLG (index 0 in Punct), then
        // Digit-mode n=0 (index 2 "0" in digit table -> but FLG(0) itself needs
        // a following digit token representing n; n=0 is Digit table index 2).
        let bits = format!("{:05b}{:05b}{:04b}", 0, 0, 2);
        let data = bits_to_bytes(&bits);
        let result = decode(&data, CharacterSet::Unknown).unwrap();
        assert_eq!(result.ai_flag, AiFlag::Gs1);
    }
}
