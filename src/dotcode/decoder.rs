//! DotCode codeword-stream parser.
//!
//! Like Han Xin, DotCode has no reference implementation in the retrieved
//! corpus; the code-set/FNC token layout follows the public AIM DotCode
//! specification. Codewords here are already-resolved integers in `[0,112]`
//! (the 9-bit-per-codeword pattern lookup and mask removal are detector-
//! adjacent steps that happen before this parser runs).

use crate::character_set::CharacterSet;
use crate::content::{Content, SegmentType};
use crate::error::{Error, Result};
use crate::structured_append::StructuredAppendInfo;
use crate::symbology_identifier::AiFlag;

const FNC1: u8 = 107;
const FNC2: u8 = 108;
const FNC3: u8 = 109;
const UPPER_SHIFT: u8 = 110;
const BINARY_LATCH: u8 = 111;
const SET_LATCH_RESERVED: u8 = 112;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CodeSet {
    A,
    B,
    C,
}

pub struct DecodeResult {
    pub content: Content,
    pub ai_flag: AiFlag,
    pub structured_append: Option<StructuredAppendInfo>,
}

pub fn decode(codewords: &[u8], hinted_charset: CharacterSet) -> Result<DecodeResult> {
    let mut content = Content::new(hinted_charset, CharacterSet::ISO8859_1);
    let mut set = CodeSet::A;
    let mut ai_flag = AiFlag::None;
    let mut upper_shift = false;
    let mut structured_append = None;

    content.set_segment_type(SegmentType::Text)?;

    let mut i = 0usize;
    while i < codewords.len() {
        let cw = codewords[i];
        match cw {
            FNC1 => {
                ai_flag = AiFlag::Gs1;
                content.mark_gs1();
                i += 1;
            }
            FNC2 => {
                if i + 2 < codewords.len() && i + 3 == codewords.len() {
                    structured_append = Some(parse_structured_append(&codewords[i + 1..i + 3])?);
                }
                i += 1;
            }
            FNC3 => {
                i += 1; // reader-programming: no content effect at this layer
            }
            UPPER_SHIFT => {
                upper_shift = true;
                i += 1;
            }
            BINARY_LATCH => {
                let (len, next) = decode_binary_mode(&codewords[i + 1..], &mut content)?;
                let _ = len;
                i += 1 + next;
            }
            SET_LATCH_RESERVED => {
                i += 1; // reserved in the current revision
            }
            0..=99 if set == CodeSet::C => {
                content.append_text(&format!("{cw:02}"), CharacterSet::ASCII)?;
                i += 1;
            }
            _ => {
                let mut byte = decode_set_char(set, cw)?;
                if upper_shift {
                    byte = byte.wrapping_add(128);
                    upper_shift = false;
                }
                content.push(byte)?;
                i += 1;
            }
        }
    }

    content.finalize()?;
    Ok(DecodeResult { content, ai_flag, structured_append })
}

fn decode_set_char(set: CodeSet, cw: u8) -> Result<u8> {
    match set {
        CodeSet::A | CodeSet::B => {
            if cw < 96 {
                Ok(cw + 32)
            } else {
                Err(Error::format("DotCode: code value out of range for set"))
            }
        }
        CodeSet::C => Err(Error::format("DotCode: unexpected Set C codeword")),
    }
}

/// Trailing FNC2 with two preceding A-Z/1-9 alphabet codewords encoding index and count.
fn parse_structured_append(pair: &[u8]) -> Result<StructuredAppendInfo> {
    if pair.len() != 2 {
        return Err(Error::format("DotCode: malformed structured-append header"));
    }
    Ok(StructuredAppendInfo { index: pair[0], count: pair[1], parity: None, file_id: None })
}

/// Binary sub-mode: packs 6 codewords into a base-103 number, then re-expands
/// into base-259 "long bytes" (<256 raw, >=256 an embedded ECI escape).
fn decode_binary_mode(rest: &[u8], content: &mut Content) -> Result<usize> {
    content.set_segment_type(SegmentType::Binary)?;
    let mut consumed = 0;
    let mut chunk = Vec::new();
    for &cw in rest.iter().take(6) {
        if cw >= 107 {
            break;
        }
        chunk.push(cw);
        consumed += 1;
    }
    if chunk.is_empty() {
        return Ok(0);
    }
    let mut value: u64 = 0;
    for &c in &chunk {
        value = value * 103 + c as u64;
    }
    let mut longs = Vec::new();
    while value > 0 || longs.is_empty() {
        longs.push((value % 259) as u32);
        value /= 259;
        if value == 0 {
            break;
        }
    }
    for v in longs.into_iter().rev() {
        if v < 256 {
            content.push(v as u8)?;
        } else {
            // Embedded ECI escape: >=256 carries an ECI designator rather than a byte.
            content.switch_eci(crate::character_set::Eci::Value(v - 256))?;
        }
    }
    Ok(consumed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_set_a_letters() {
        // 'A' = cw 33 (33+32=65), 'B' = cw 34
        let codewords = [33u8, 34];
        let result = decode(&codewords, CharacterSet::Unknown).unwrap();
        assert_eq!(result.content.text(), "AB");
    }

    #[test]
    fn fnc1_marks_gs1() {
        let codewords = [FNC1, 33];
        let result = decode(&codewords, CharacterSet::Unknown).unwrap();
        assert_eq!(result.ai_flag, AiFlag::Gs1);
    }
}
