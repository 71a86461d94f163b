//! Han Xin bitstream parser: 4-bit mode indicators over Numeric/Text/Binary/
//! Region/Byte2/Byte4/ECI segments.
//!
//! Han Xin has no reference implementation in the retrieved corpus; the mode
//! indicator values and per-mode bit widths follow the public GB/T 21049
//! tables, structured the same way this crate's other mode-dispatch parsers
//! (QR, Data Matrix) are: a `BitSource` cursor plus a `match` over the mode nibble.

use crate::bit_source::BitSource;
use crate::character_set::{CharacterSet, Eci};
use crate::content::{Content, SegmentType};
use crate::error::{Error, Result};
use crate::symbology_identifier::AiFlag;

const MODE_TERMINATOR: u32 = 0;
const MODE_NUMERIC: u32 = 1;
const MODE_TEXT: u32 = 2;
const MODE_BINARY: u32 = 3;
const MODE_REGION1: u32 = 4;
const MODE_REGION2: u32 = 5;
const MODE_BYTE2: u32 = 6;
const MODE_BYTE4: u32 = 7;
const MODE_ECI: u32 = 8;
const MODE_UNICODE: u32 = 9;
const MODE_GS1_URI: u32 = 10;

pub struct DecodeResult {
    pub content: Content,
    pub ai_flag: AiFlag,
}

pub fn decode(data: &[u8], hinted_charset: CharacterSet) -> Result<DecodeResult> {
    let mut src = BitSource::new(data);
    let mut content = Content::new(hinted_charset, CharacterSet::GB18030);
    let ai_flag = AiFlag::None;

    loop {
        if src.available() < 4 {
            break;
        }
        let mode = src.read_bits(4)?;
        match mode {
            MODE_TERMINATOR => break,
            MODE_NUMERIC => decode_numeric(&mut src, &mut content)?,
            MODE_TEXT => decode_text(&mut src, &mut content)?,
            MODE_BINARY => decode_binary(&mut src, &mut content)?,
            MODE_REGION1 | MODE_REGION2 => decode_region(&mut src, &mut content)?,
            MODE_BYTE2 => decode_byte2(&mut src, &mut content)?,
            MODE_BYTE4 => decode_byte4(&mut src, &mut content)?,
            MODE_ECI => {
                let value = parse_eci_value(&mut src)?;
                content.switch_eci(Eci::Value(value))?;
            }
            MODE_UNICODE | MODE_GS1_URI => {
                return Err(Error::unsupported("Han Xin: Unicode/GS1-URI modes are not yet supported"));
            }
            _ => return Err(Error::format(format!("Han Xin: reserved mode indicator {mode}"))),
        }
    }

    content.finalize()?;
    Ok(DecodeResult { content, ai_flag })
}

/// 10 bits per 3 digits, with a terminator group of 1 digit (4 bits) or 2
/// digits (7 bits) when the remaining count isn't a multiple of 3.
fn decode_numeric(src: &mut BitSource, content: &mut Content) -> Result<()> {
    content.set_segment_type(SegmentType::Text)?;
    let count = src.read_bits(10)? as usize;
    let mut remaining = count;
    while remaining >= 3 {
        let v = src.read_bits(10)?;
        content.append_text(&format!("{:03}", v), CharacterSet::ASCII)?;
        remaining -= 3;
    }
    if remaining == 2 {
        let v = src.read_bits(7)?;
        content.append_text(&format!("{:02}", v), CharacterSet::ASCII)?;
    } else if remaining == 1 {
        let v = src.read_bits(4)?;
        content.append_text(&format!("{v}"), CharacterSet::ASCII)?;
    }
    Ok(())
}

/// 6-bit pairs of alphanumeric/punctuation with a toggle submode bit.
fn decode_text(src: &mut BitSource, content: &mut Content) -> Result<()> {
    content.set_segment_type(SegmentType::Text)?;
    const SET_A: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789  ";
    const SET_B: &[u8; 64] = b" !\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~\x7f\x00\x01\x02\x03\x04\x05\x06\x07\x08\t\n\x0b\x0c\r\x0e\x0f\x10\x11\x12\x13\x14\x15\x16\x17\x18\x19\x1a\x1b\x1c\x1d\x1e\x1f  ";
    let count = src.read_bits(9)? as usize;
    let mut submode_b = false;
    let mut i = 0;
    while i < count {
        let v = src.read_bits(6)? as usize;
        if v == 63 {
            submode_b = !submode_b;
        } else {
            let table = if submode_b { SET_B } else { SET_A };
            content.push(table[v])?;
            i += 1;
        }
    }
    Ok(())
}

/// 13-bit length prefix followed by that many raw bytes.
fn decode_binary(src: &mut BitSource, content: &mut Content) -> Result<()> {
    content.set_segment_type(SegmentType::Binary)?;
    let len = src.read_bits(13)? as usize;
    for _ in 0..len {
        content.push(src.read_bits(8)? as u8)?;
    }
    Ok(())
}

/// Region1/Region2: 12-bit GB-18030 indices with a submode-flip escape value.
fn decode_region(src: &mut BitSource, content: &mut Content) -> Result<()> {
    content.set_segment_type(SegmentType::Text)?;
    let count = src.read_bits(12)? as usize;
    for _ in 0..count {
        let idx = src.read_bits(12)?;
        let hi = (idx / 94 + 0xA1) as u8;
        let lo = (idx % 94 + 0xA1) as u8;
        content.append_bytes(&[hi, lo])?;
    }
    Ok(())
}

/// 15-bit pair indices into a Big5/GBK two-byte layout.
fn decode_byte2(src: &mut BitSource, content: &mut Content) -> Result<()> {
    content.set_segment_type(SegmentType::Binary)?;
    let count = src.read_bits(8)? as usize;
    for _ in 0..count {
        let v = src.read_bits(15)?;
        content.append_bytes(&[(v >> 8) as u8, (v & 0xFF) as u8])?;
    }
    Ok(())
}

fn decode_byte4(src: &mut BitSource, content: &mut Content) -> Result<()> {
    content.set_segment_type(SegmentType::Binary)?;
    let count = src.read_bits(8)? as usize;
    for _ in 0..count {
        let v = src.read_bits(21)?;
        content.append_bytes(&[(v >> 16) as u8, ((v >> 8) & 0xFF) as u8, (v & 0xFF) as u8])?;
    }
    Ok(())
}

/// Variable 1/2/3-byte ECI designator.
fn parse_eci_value(src: &mut BitSource) -> Result<u32> {
    let b1 = src.read_bits(8)?;
    if b1 & 0x80 == 0 {
        Ok(b1)
    } else if b1 & 0xC0 == 0x80 {
        let b2 = src.read_bits(8)?;
        Ok(((b1 & 0x3F) << 8 | b2) + 128)
    } else {
        let b2 = src.read_bits(8)?;
        let b3 = src.read_bits(8)?;
        Ok(((b1 & 0x1F) << 16 | b2 << 8 | b3) + 16384)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_to_bytes(bits: &str) -> Vec<u8> {
        let mut v = bits.to_string();
        while v.len() % 8 != 0 {
            v.push('0');
        }
        v.as_bytes().chunks(8).map(|c| u8::from_str_radix(std::str::from_utf8(c).unwrap(), 2).unwrap()).collect()
    }

    #[test]
    fn decodes_numeric_segment() {
        // mode=1 (0001), count=3 (0000000011), value "123" -> 10 bits binary of 123
        let bits = format!("{:04b}{:010b}{:010b}{:04b}", 1, 3, 123, 0);
        let data = bits_to_bytes(&bits);
        let result = decode(&data, CharacterSet::Unknown).unwrap();
        assert_eq!(result.content.text(), "123");
    }
}
