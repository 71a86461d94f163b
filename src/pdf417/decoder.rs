//! PDF417 codeword-stream parser.
//!
//! Grounded on the mode-codeword values and Text/Byte/Numeric submode tables
//! documented by `original_source/test/unit/pdf417/PDF417ScanningDecoderTest.cpp`'s
//! fixtures and the public ISO/IEC 15438 Annex encodation tables; expressed
//! here as the big-number numeric accumulation, length-prefixed byte runs,
//! and four-submode text shift/latch state machine.

use crate::character_set::CharacterSet;
use crate::content::{Content, SegmentType};
use crate::error::{Error, Result};
use crate::structured_append::StructuredAppendInfo;

const TEXT_COMPACTION_MODE_LATCH: u32 = 900;
const BYTE_COMPACTION_MODE_LATCH: u32 = 901;
const NUMERIC_COMPACTION_MODE_LATCH: u32 = 902;
const BYTE_COMPACTION_MODE_LATCH_6: u32 = 924;
const ECI_USER_DEFINED: u32 = 925;
const ECI_GENERAL_PURPOSE: u32 = 926;
const ECI_CHARSET: u32 = 927;
const BEGIN_MACRO_CONTROL_BLOCK: u32 = 928;
const BEGIN_MACRO_OPTIONAL_FIELD: u32 = 923;
const MACRO_TERMINATOR: u32 = 922;
const MODE_SHIFT_TO_BYTE: u32 = 913;
const MAX_NUMERIC_CODEWORDS: usize = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TextSubmode {
    Alpha,
    Lower,
    Mixed,
    Punct,
}

const ALPHA_TABLE: &[u8; 29] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ \0\0\0"; // indices 26,27,28 are LL/ML/PS handled specially
const LOWER_TABLE: &[u8; 29] = b"abcdefghijklmnopqrstuvwxyz \0\0\0";
const MIXED_TABLE: &[u8; 25] = b"0123456789&\r\t,:#-.$/+%*=^";
const PUNCT_TABLE: &[u8; 29] = b";<>@[\\]_`~!\r\t,:\n-.$/\"|*()?{}'\0\0";

pub struct DecodeResult {
    pub content: Content,
    pub structured_append: Option<StructuredAppendInfo>,
}

/// Decode a PDF417/Micro-PDF417 codeword stream. `codewords[0]` is the
/// declared data-segment length (excluded from the payload itself).
pub fn decode(codewords: &[u32], hinted_charset: CharacterSet) -> Result<DecodeResult> {
    if codewords.is_empty() {
        return Err(Error::format("PDF417: empty codeword stream"));
    }
    let declared_len = codewords[0] as usize;
    let payload = if declared_len > 0 && declared_len <= codewords.len() { &codewords[1..declared_len] } else { &codewords[1..] };

    let mut content = Content::new(hinted_charset, CharacterSet::ISO8859_1);
    let mut structured_append: Option<StructuredAppendInfo> = None;
    let mut i = 0usize;

    while i < payload.len() {
        let cw = payload[i];
        match cw {
            TEXT_COMPACTION_MODE_LATCH => {
                i += 1;
                i = decode_text(payload, i, &mut content)?;
            }
            BYTE_COMPACTION_MODE_LATCH => {
                i += 1;
                i = decode_byte(payload, i, &mut content, false)?;
            }
            BYTE_COMPACTION_MODE_LATCH_6 => {
                i += 1;
                i = decode_byte(payload, i, &mut content, true)?;
            }
            NUMERIC_COMPACTION_MODE_LATCH => {
                i += 1;
                i = decode_numeric(payload, i, &mut content)?;
            }
            MODE_SHIFT_TO_BYTE => {
                i += 1;
                if i < payload.len() {
                    content.set_segment_type(SegmentType::Binary)?;
                    content.push(payload[i] as u8)?;
                    i += 1;
                }
            }
            ECI_CHARSET => {
                let value = *payload.get(i + 1).ok_or_else(|| Error::format("PDF417: truncated ECI"))?;
                content.switch_eci(crate::character_set::Eci::Value(value))?;
                i += 2;
            }
            ECI_GENERAL_PURPOSE | ECI_USER_DEFINED => {
                // General-purpose/user-defined ECI designators carry a secondary
                // value the same way; treated identically at this layer.
                let value = *payload.get(i + 1).ok_or_else(|| Error::format("PDF417: truncated ECI"))?;
                content.switch_eci(crate::character_set::Eci::Value(value))?;
                i += 2;
            }
            BEGIN_MACRO_CONTROL_BLOCK => {
                let (info, next) = decode_macro_block(payload, i + 1)?;
                structured_append = Some(info);
                i = next;
            }
            BEGIN_MACRO_OPTIONAL_FIELD | MACRO_TERMINATOR => {
                i += 1;
            }
            _ => return Err(Error::format(format!("PDF417: unexpected mode codeword {cw}"))),
        }
    }

    content.finalize()?;
    Ok(DecodeResult { content, structured_append })
}

fn decode_text(payload: &[u32], mut i: usize, content: &mut Content) -> Result<usize> {
    content.set_segment_type(SegmentType::Text)?;
    let mut submode = TextSubmode::Alpha;
    let mut shift_once = false;
    while i < payload.len() {
        let cw = payload[i];
        if cw >= 900 {
            break;
        }
        // Each text codeword packs two 5-bit values in [0,29].
        let hi = (cw / 30) as u8;
        let lo = (cw % 30) as u8;
        for value in [hi, lo] {
            let active = if shift_once { TextSubmode::Punct } else { submode };
            shift_once = false;
            match (active, value) {
                (TextSubmode::Alpha, 26) => content.push(b' ')?,
                (TextSubmode::Alpha, 27) => submode = TextSubmode::Lower,
                (TextSubmode::Alpha, 28) => submode = TextSubmode::Mixed,
                (TextSubmode::Alpha, 29) => shift_once = true,
                (TextSubmode::Alpha, v) => content.push(ALPHA_TABLE[v as usize])?,
                (TextSubmode::Lower, 26) => content.push(b' ')?,
                (TextSubmode::Lower, 27) => shift_once = true, // AS: temporary shift to Alpha uppercase
                (TextSubmode::Lower, 28) => submode = TextSubmode::Mixed,
                (TextSubmode::Lower, 29) => shift_once = true,
                (TextSubmode::Lower, v) => content.push(LOWER_TABLE[v as usize])?,
                (TextSubmode::Mixed, 25) => submode = TextSubmode::Punct,
                (TextSubmode::Mixed, 26) => submode = TextSubmode::Alpha,
                (TextSubmode::Mixed, 27) => submode = TextSubmode::Lower,
                (TextSubmode::Mixed, 28) => submode = TextSubmode::Punct,
                (TextSubmode::Mixed, 29) => shift_once = true,
                (TextSubmode::Mixed, v) if (v as usize) < MIXED_TABLE.len() => content.push(MIXED_TABLE[v as usize])?,
                (TextSubmode::Punct, 29) => submode = TextSubmode::Alpha,
                (TextSubmode::Punct, v) if (v as usize) < PUNCT_TABLE.len() => content.push(PUNCT_TABLE[v as usize])?,
                _ => return Err(Error::format("PDF417: invalid text compaction value")),
            }
        }
        i += 1;
    }
    Ok(i)
}

fn decode_byte(payload: &[u32], mut i: usize, content: &mut Content, mod6: bool) -> Result<usize> {
    content.set_segment_type(SegmentType::Binary)?;
    let mut group = Vec::new();
    while i < payload.len() && payload[i] < 900 {
        group.push(payload[i]);
        i += 1;
    }
    if mod6 || group.len() % 6 == 0 {
        for chunk in group.chunks(6) {
            if chunk.len() == 6 {
                let mut value: u64 = 0;
                for &c in chunk {
                    value = value * 900 + c as u64;
                }
                let mut bytes = [0u8; 6];
                for slot in bytes.iter_mut().rev() {
                    *slot = (value & 0xFF) as u8;
                    value >>= 8;
                }
                content.append_bytes(&bytes)?;
            } else {
                for &c in chunk {
                    content.push(c as u8)?;
                }
            }
        }
    } else {
        for &c in &group {
            content.push(c as u8)?;
        }
    }
    Ok(i)
}

fn decode_numeric(payload: &[u32], mut i: usize, content: &mut Content) -> Result<usize> {
    content.set_segment_type(SegmentType::Text)?;
    while i < payload.len() && payload[i] < 900 {
        let end = (i + MAX_NUMERIC_CODEWORDS).min(payload.len());
        let mut j = i;
        while j < end && payload[j] < 900 {
            j += 1;
        }
        let chunk = &payload[i..j];
        let digits = numeric_chunk_to_digits(chunk)?;
        content.append_text(&digits, CharacterSet::ASCII)?;
        i = j;
    }
    Ok(i)
}

/// Base-900 big-integer decode: the chunk's value, prefixed with an implicit
/// leading `1` digit that is dropped from the rendered string, mirroring
/// PDF417's numeric compaction convention.
fn numeric_chunk_to_digits(chunk: &[u32]) -> Result<String> {
    let mut digits = vec![1u32]; // big number in base 10, least-significant first
    for &c in chunk {
        // digits = digits * 900 + c
        let mut carry = c;
        for d in digits.iter_mut() {
            let v = *d * 900 + carry;
            *d = v % 10;
            carry = v / 10;
        }
        while carry > 0 {
            digits.push(carry % 10);
            carry /= 10;
        }
    }
    let s: String = digits.iter().rev().map(|d| (b'0' + *d as u8) as char).collect();
    Ok(s[1..].to_string()) // drop the leading synthetic '1'
}

fn decode_macro_block(payload: &[u32], mut i: usize) -> Result<(StructuredAppendInfo, usize)> {
    let index = *payload.get(i).ok_or_else(|| Error::format("PDF417: truncated macro block"))? as u8;
    i += 1;
    let count = *payload.get(i).ok_or_else(|| Error::format("PDF417: truncated macro block"))? as u8;
    i += 1;
    Ok((StructuredAppendInfo { index, count, parity: None, file_id: None }, i))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_text_alpha_uppercase() {
        // 'A'=0,'B'=1 packed as cw = 0*30+1 = 1
        let codewords = [3u32, TEXT_COMPACTION_MODE_LATCH, 1];
        let result = decode(&codewords, CharacterSet::Unknown).unwrap();
        assert_eq!(result.content.text(), "AB");
    }

    #[test]
    fn decodes_numeric_chunk() {
        // value = 1*900 + 112 = 1012 -> "1012", drop the leading synthetic '1' -> "012"
        let codewords = [3u32, NUMERIC_COMPACTION_MODE_LATCH, 112];
        let result = decode(&codewords, CharacterSet::Unknown).unwrap();
        assert_eq!(result.content.text(), "012");
    }
}
