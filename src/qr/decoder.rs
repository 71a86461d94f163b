//! QR / Micro-QR / rMQR bit-stream parser.
//!
//! Grounded closely on `original_source/core/src/qrcode/QRDecoder.cpp`'s
//! `DecodeBitStream`: mode-indicator dispatch loop, `ToAlphaNumericChar`
//! table usage (here `version::ALPHANUMERIC_CHARS`), Kanji 13-bit
//! reassembly via the 0x8140/0xC140 offset split, Hanzi GB2312 subset check,
//! the `[0..99]`/`[165..190]∪[197..222]` application-indicator decode, and
//! the FNC1-first/-second + structured-append + ECI branches of the main
//! loop.

use crate::bit_matrix::BitMatrix;
use crate::bit_source::BitSource;
use crate::character_set::{CharacterSet, Eci};
use crate::content::{Content, SegmentType};
use crate::error::{Error, Result};
use crate::structured_append::StructuredAppendInfo;
use crate::symbology_identifier::{AiFlag, SymbologyIdentifier};

use super::version::{EcLevel, Version};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Terminator,
    Numeric,
    Alphanumeric,
    Byte,
    Kanji,
    Hanzi,
    Eci,
    Fnc1First,
    Fnc1Second,
    StructuredAppend,
}

/// Mode-indicator width in bits. Full QR always uses 4 regardless of
/// version; Micro-QR shrinks the field with the symbol (ISO/IEC 18004 Table
/// 2) since smaller symbols can't afford 4 bits just to name the mode.
fn mode_indicator_bits(version: &Version) -> u32 {
    if version.is_micro {
        match version.number {
            1 => 0,
            2 => 1,
            3 => 2,
            _ => 3,
        }
    } else {
        4
    }
}

fn mode_from_bits(version: &Version, bits: u32) -> Option<Mode> {
    if version.is_micro {
        return micro_mode_from_bits(version.number, bits);
    }
    match bits {
        0x0 => Some(Mode::Terminator),
        0x1 => Some(Mode::Numeric),
        0x2 => Some(Mode::Alphanumeric),
        0x3 => Some(Mode::StructuredAppend),
        0x4 => Some(Mode::Byte),
        0x5 => Some(Mode::Fnc1First),
        0x7 => Some(Mode::Eci),
        0x8 => Some(Mode::Kanji),
        0x9 => Some(Mode::Fnc1Second),
        0xD => Some(Mode::Hanzi),
        _ => None,
    }
}

/// Micro-QR's mode-indicator bit patterns are unrelated to full QR's (the
/// field is too narrow to reuse the same codes) and every smaller version
/// drops the modes it has no room to justify: M1 is numeric-only with no
/// indicator at all, M2 adds alphanumeric, M3/M4 add byte and Kanji. None of
/// ECI, FNC1, or structured-append are representable in the narrowed field.
fn micro_mode_from_bits(version_number: u32, bits: u32) -> Option<Mode> {
    match version_number {
        1 => Some(Mode::Numeric),
        2 => match bits {
            0b0 => Some(Mode::Numeric),
            0b1 => Some(Mode::Alphanumeric),
            _ => None,
        },
        3 => match bits {
            0b00 => Some(Mode::Numeric),
            0b01 => Some(Mode::Alphanumeric),
            0b10 => Some(Mode::Byte),
            0b11 => Some(Mode::Kanji),
            _ => None,
        },
        _ => match bits {
            0b000 => Some(Mode::Numeric),
            0b001 => Some(Mode::Alphanumeric),
            0b010 => Some(Mode::Byte),
            0b011 => Some(Mode::Kanji),
            _ => None,
        },
    }
}

/// Character-count indicator width in bits, version-tiered per ISO/IEC 18004
/// Table 3 (full QR) / Table 4 (Micro-QR, indexed directly by M-version).
fn char_count_bits(version: &Version, mode: Mode) -> u32 {
    if version.is_micro {
        let idx = version.number as usize - 1;
        return match mode {
            Mode::Numeric => [3, 4, 5, 6][idx],
            Mode::Alphanumeric => [0, 3, 4, 5][idx],
            Mode::Byte => [0, 0, 4, 5][idx],
            Mode::Kanji => [0, 0, 3, 4][idx],
            _ => 0,
        };
    }
    let tier = if version.number <= 9 { 0 } else if version.number <= 26 { 1 } else { 2 };
    match mode {
        Mode::Numeric => [10, 12, 14][tier],
        Mode::Alphanumeric => [9, 11, 13][tier],
        Mode::Byte => [8, 16, 16][tier],
        Mode::Kanji | Mode::Hanzi => [8, 10, 12][tier],
        _ => 0,
    }
}

pub struct DecodedBitStream {
    pub content: Content,
    pub structured_append: Option<StructuredAppendInfo>,
    pub ai_flag: AiFlag,
}

pub fn decode_bitstream(
    data_codewords: &[u8],
    version: &Version,
    ec_level: EcLevel,
    hinted_charset: CharacterSet,
) -> Result<DecodedBitStream> {
    let mut bits = BitSource::new(data_codewords);
    let mut content = Content::new(hinted_charset, CharacterSet::ISO8859_1);
    let mut structured_append = None;
    let mut ai_flag = AiFlag::None;
    let mut pending_app_indicator: Option<String> = None;

    loop {
        let indicator_bits = mode_indicator_bits(version);
        if bits.available() < indicator_bits.max(1) {
            break;
        }
        let mode_bits = if indicator_bits == 0 { 0 } else { bits.read_bits(indicator_bits)? };
        let mode = match mode_from_bits(version, mode_bits) {
            Some(Mode::Terminator) => break,
            Some(m) => m,
            None => return Err(Error::format(format!("QR: reserved mode indicator {mode_bits:#x}"))),
        };

        match mode {
            Mode::Terminator => unreachable!(),
            Mode::Numeric => decode_numeric_segment(&mut bits, &mut content, version)?,
            Mode::Alphanumeric => decode_alphanumeric_segment(&mut bits, &mut content, version, ai_flag)?,
            Mode::Byte => decode_byte_segment(&mut bits, &mut content, version)?,
            Mode::Kanji => decode_kanji_segment(&mut bits, &mut content, version)?,
            Mode::Hanzi => decode_hanzi_segment(&mut bits, &mut content, version)?,
            Mode::Eci => {
                let value = parse_eci_value(&mut bits)?;
                content.switch_eci(Eci::Value(value))?;
            }
            Mode::Fnc1First => {
                ai_flag = AiFlag::Gs1;
                content.mark_gs1();
            }
            Mode::Fnc1Second => {
                ai_flag = AiFlag::Aim;
                let value = bits.read_bits(8)?;
                pending_app_indicator = Some(decode_application_indicator(value)?);
            }
            Mode::StructuredAppend => {
                let index = bits.read_bits(4)? as u8;
                let count = bits.read_bits(4)? as u8 + 1;
                let parity = bits.read_bits(8)? as u8;
                structured_append =
                    Some(StructuredAppendInfo { index, count, parity: Some(parity), file_id: None });
            }
        }
    }

    if let Some(prefix) = pending_app_indicator {
        content.set_application_indicator(prefix);
    }

    content.symbology = SymbologyIdentifier::qr(ai_flag);
    content.finalize()?;

    Ok(DecodedBitStream { content, structured_append, ai_flag })
}

fn decode_numeric_segment(bits: &mut BitSource, content: &mut Content, version: &Version) -> Result<()> {
    let count_bits = char_count_bits(version, Mode::Numeric);
    let mut remaining = bits.read_bits(count_bits)? as usize;
    let mut digits = String::with_capacity(remaining);
    while remaining >= 3 {
        let v = bits.read_bits(10)?;
        if v >= 1000 {
            return Err(Error::format("QR: numeric group out of range"));
        }
        digits.push_str(&format!("{v:03}"));
        remaining -= 3;
    }
    if remaining == 2 {
        let v = bits.read_bits(7)?;
        if v >= 100 {
            return Err(Error::format("QR: numeric group out of range"));
        }
        digits.push_str(&format!("{v:02}"));
    } else if remaining == 1 {
        let v = bits.read_bits(4)?;
        if v >= 10 {
            return Err(Error::format("QR: numeric group out of range"));
        }
        digits.push_str(&format!("{v}"));
    }
    content.set_segment_type(SegmentType::Text)?;
    content.append_text(&digits, CharacterSet::ASCII)?;
    Ok(())
}

fn decode_alphanumeric_segment(
    bits: &mut BitSource,
    content: &mut Content,
    version: &Version,
    ai_flag: AiFlag,
) -> Result<()> {
    let count_bits = char_count_bits(version, Mode::Alphanumeric);
    let mut remaining = bits.read_bits(count_bits)? as usize;
    let table = super::version::ALPHANUMERIC_CHARS;
    let mut out = String::with_capacity(remaining);
    while remaining >= 2 {
        let v = bits.read_bits(11)?;
        let a = v / 45;
        let b = v % 45;
        if a as usize >= table.len() || b as usize >= table.len() {
            return Err(Error::format("QR: alphanumeric value out of range"));
        }
        out.push(table[a as usize] as char);
        out.push(table[b as usize] as char);
        remaining -= 2;
    }
    if remaining == 1 {
        let v = bits.read_bits(6)?;
        if v as usize >= table.len() {
            return Err(Error::format("QR: alphanumeric value out of range"));
        }
        out.push(table[v as usize] as char);
    }
    if ai_flag == AiFlag::Gs1 {
        // '%' means <GS> unless doubled (literal '%').
        let mut unescaped = String::with_capacity(out.len());
        let mut chars = out.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '%' {
                if chars.peek() == Some(&'%') {
                    chars.next();
                    unescaped.push('%');
                } else {
                    unescaped.push('\u{1d}');
                }
            } else {
                unescaped.push(c);
            }
        }
        out = unescaped;
    }
    content.set_segment_type(SegmentType::Text)?;
    content.append_text(&out, CharacterSet::ASCII)?;
    Ok(())
}

fn decode_byte_segment(bits: &mut BitSource, content: &mut Content, version: &Version) -> Result<()> {
    let count_bits = char_count_bits(version, Mode::Byte);
    let count = bits.read_bits(count_bits)? as usize;
    let mut buf = Vec::with_capacity(count);
    for _ in 0..count {
        buf.push(bits.read_bits(8)? as u8);
    }
    content.set_segment_type(SegmentType::Binary)?;
    content.append_bytes(&buf)?;
    Ok(())
}

fn decode_kanji_segment(bits: &mut BitSource, content: &mut Content, version: &Version) -> Result<()> {
    let count_bits = char_count_bits(version, Mode::Kanji);
    let count = bits.read_bits(count_bits)? as usize;
    let mut buf = Vec::with_capacity(count * 2);
    for _ in 0..count {
        let v = bits.read_bits(13)?;
        let hi = v / 0xC0;
        let lo = v % 0xC0;
        let combined = (hi << 8) | lo;
        let sjis = if hi < 0x1F { combined + 0x8140 } else { combined + 0xC140 };
        buf.push((sjis >> 8) as u8);
        buf.push((sjis & 0xFF) as u8);
    }
    content.set_segment_type(SegmentType::Text)?;
    let text = crate::character_set::decode_to_utf8(CharacterSet::Shift_JIS, &buf);
    content.append_text(&text, CharacterSet::Shift_JIS)?;
    Ok(())
}

fn decode_hanzi_segment(bits: &mut BitSource, content: &mut Content, version: &Version) -> Result<()> {
    let subset = bits.read_bits(4)?;
    if subset != 1 {
        // Open Question 2: treat subset != 1 as a format error
        // rather than the source's silent empty-output behavior.
        return Err(Error::format(format!("QR: unsupported Hanzi subset {subset}")));
    }
    let count_bits = char_count_bits(version, Mode::Hanzi);
    let count = bits.read_bits(count_bits)? as usize;
    let mut buf = Vec::with_capacity(count * 2);
    for _ in 0..count {
        let v = bits.read_bits(13)?;
        let hi = v / 0x060;
        let lo = v % 0x060;
        let combined = (hi << 8) + lo;
        let gb = if combined < 0x03AF { combined + 0xA1A1 } else { combined + 0xA6A1 };
        buf.push((gb >> 8) as u8);
        buf.push((gb & 0xFF) as u8);
    }
    content.set_segment_type(SegmentType::Text)?;
    let text = crate::character_set::decode_to_utf8(CharacterSet::GB2312, &buf);
    content.append_text(&text, CharacterSet::GB2312)?;
    Ok(())
}

/// Variable-width ECI value, ISO-prefix coded.
fn parse_eci_value(bits: &mut BitSource) -> Result<u32> {
    let first = bits.read_bits(8)?;
    if first & 0x80 == 0 {
        Ok(first)
    } else if first & 0xC0 == 0x80 {
        let second = bits.read_bits(8)?;
        Ok(((first & 0x3F) << 8) | second)
    } else if first & 0xE0 == 0xC0 {
        let rest = bits.read_bits(16)?;
        Ok(((first & 0x1F) << 16) | rest)
    } else {
        Err(Error::format("QR: invalid ECI designator"))
    }
}

fn decode_application_indicator(value: u32) -> Result<String> {
    if value <= 99 {
        Ok(format!("{value:02}"))
    } else if (165..=190).contains(&value) || (197..=222).contains(&value) {
        Ok(((value - 100) as u8 as char).to_string())
    } else {
        Err(Error::format(format!("QR: invalid application indicator {value}")))
    }
}

/// Mirror-retry entry point. Tries `matrix` straight; on
/// failure retries the L-transpose view and reports `is_mirrored` on success.
pub fn decode_with_mirror_retry<F, T>(matrix: &BitMatrix, mut decode_once: F) -> Result<(T, bool)>
where
    F: FnMut(&BitMatrix) -> Result<T>,
{
    match decode_once(matrix) {
        Ok(result) => Ok((result, false)),
        Err(_straight_err) => {
            let mirrored = matrix.mirrored();
            let mut materialized = BitMatrix::new(mirrored.width(), mirrored.height());
            for y in 0..mirrored.height() {
                for x in 0..mirrored.width() {
                    materialized.set(x, y, mirrored.get(x, y));
                }
            }
            let result = decode_once(&materialized)?;
            Ok((result, true))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bits_to_bytes(bit_string: &str) -> Vec<u8> {
        let mut bytes = Vec::new();
        let mut acc = 0u8;
        let mut n = 0u8;
        for c in bit_string.chars().filter(|c| !c.is_whitespace()) {
            acc = (acc << 1) | if c == '1' { 1 } else { 0 };
            n += 1;
            if n == 8 {
                bytes.push(acc);
                acc = 0;
                n = 0;
            }
        }
        if n > 0 {
            acc <<= 8 - n;
            bytes.push(acc);
        }
        bytes
    }

    #[test]
    fn decodes_byte_segment_abcdef() {
        // Mode=Byte(0100), count=6(00000110), 6 ASCII bytes, terminator(0000), pad.
        let mut bitstring = String::from("0100");
        bitstring.push_str("00000110");
        for c in b"ABCDEF" {
            bitstring.push_str(&format!("{c:08b}"));
        }
        bitstring.push_str("0000");
        let bytes = bits_to_bytes(&bitstring);
        let version = Version::from_dimension(21, 21).unwrap();
        let result = decode_bitstream(&bytes, &version, EcLevel::H, CharacterSet::Unknown).unwrap();
        assert_eq!(result.content.text(), "ABCDEF");
    }

    #[test]
    fn decodes_alphanumeric_with_gs1_percent_escape() {
        // FNC1-first (0101), then Alphanumeric(0010) count=2(000000010), "A%" -> 'A' + <GS>
        let mut bitstring = String::from("0101");
        bitstring.push_str("0010");
        bitstring.push_str("000000010");
        // encode "A%" as base-45 pair: A=10, %=42 -> value = 10*45+42 = 492
        let value = 10u32 * 45 + 42;
        bitstring.push_str(&format!("{value:011b}"));
        bitstring.push_str("0000");
        let bytes = bits_to_bytes(&bitstring);
        let version = Version::from_dimension(21, 21).unwrap();
        let result = decode_bitstream(&bytes, &version, EcLevel::H, CharacterSet::Unknown).unwrap();
        assert!(result.content.gs1);
        assert_eq!(result.content.raw_bytes(), &[b'A', 0x1D]);
    }
}
