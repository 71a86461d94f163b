//! Character-set registry: ECI mapping, name aliases, transcoding to UTF-8,
//! and the content-typing fallback heuristic.
//!
//! Grounded on `original_source/core/src/CharacterSetECI.cpp`'s name table
//! (case-insensitive aliases -> `CharacterSet`) and, for the genuinely
//! multi-byte legacy charsets, on `other_examples/...hobbymarks-rxing...`'s
//! use of the `encoding` crate (`encoding::label::encoding_from_whatwg_label`
//! + `Encoding::decode`/`encode`) — that repo is a Rust port of the same
//! zxing-cpp codebase this spec distills, decoding the same QR/Data-Matrix
//! byte segments we do here. Single-byte code pages (ISO-8859-*, the
//! Windows-125x family, Cp437) are simple fixed upper-half tables and are
//! hand-rolled rather than adding a second crate for them.

use encoding::label::encoding_from_whatwg_label;
use encoding::{DecoderTrap, EncoderTrap, Encoding as WhatwgEncoding};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharacterSet {
    Unknown,
    ASCII,
    Cp437,
    ISO8859_1,
    ISO8859_2,
    ISO8859_3,
    ISO8859_4,
    ISO8859_5,
    ISO8859_6,
    ISO8859_7,
    ISO8859_8,
    ISO8859_9,
    ISO8859_10,
    ISO8859_11,
    ISO8859_13,
    ISO8859_14,
    ISO8859_15,
    ISO8859_16,
    Cp1250,
    Cp1251,
    Cp1252,
    Cp1256,
    Shift_JIS,
    Big5,
    GB2312,
    GBK,
    GB18030,
    EUC_KR,
    UTF8,
    UTF16BE,
    UTF16LE,
    UTF32BE,
    UTF32LE,
    Binary,
}

/// Extended Channel Interpretation value, `[0..999999]`.
/// `Unknown` means "no ECI has been seen yet"; `899` is the reserved Binary value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Eci {
    Unknown,
    Value(u32),
}

impl Eci {
    pub const BINARY: Eci = Eci::Value(899);

    pub fn value(self) -> Option<u32> {
        match self {
            Eci::Unknown => None,
            Eci::Value(v) => Some(v),
        }
    }
}

/// ISO/IEC 18004:2015 Annex F / AIM ECI assignments relevant to the charsets above.
const ECI_TABLE: &[(u32, CharacterSet)] = &[
    (0, CharacterSet::Cp437),
    (1, CharacterSet::ISO8859_1),
    (2, CharacterSet::Cp437),
    (3, CharacterSet::ISO8859_1),
    (4, CharacterSet::ISO8859_2),
    (5, CharacterSet::ISO8859_3),
    (6, CharacterSet::ISO8859_4),
    (7, CharacterSet::ISO8859_5),
    (8, CharacterSet::ISO8859_6),
    (9, CharacterSet::ISO8859_7),
    (10, CharacterSet::ISO8859_8),
    (11, CharacterSet::ISO8859_9),
    (12, CharacterSet::ISO8859_10),
    (13, CharacterSet::ISO8859_11),
    (15, CharacterSet::ISO8859_13),
    (16, CharacterSet::ISO8859_14),
    (17, CharacterSet::ISO8859_15),
    (18, CharacterSet::ISO8859_16),
    (20, CharacterSet::Shift_JIS),
    (21, CharacterSet::Cp1250),
    (22, CharacterSet::Cp1251),
    (23, CharacterSet::Cp1252),
    (24, CharacterSet::Cp1256),
    (25, CharacterSet::UTF16BE),
    (26, CharacterSet::UTF8),
    (27, CharacterSet::ASCII),
    (28, CharacterSet::Big5),
    (29, CharacterSet::GB18030),
    (30, CharacterSet::EUC_KR),
    (31, CharacterSet::GBK),
    (32, CharacterSet::GB2312),
    (170, CharacterSet::ASCII),
    (899, CharacterSet::Binary),
];

pub fn charset_from_eci(eci: u32) -> CharacterSet {
    ECI_TABLE.iter().find(|&&(v, _)| v == eci).map(|&(_, cs)| cs).unwrap_or(CharacterSet::Unknown)
}

/// The canonical (lowest-numbered, non-deprecated) ECI value for a charset, if any.
pub fn eci_from_charset(cs: CharacterSet) -> Option<u32> {
    match cs {
        CharacterSet::Cp437 => Some(2),
        CharacterSet::ISO8859_1 => Some(3),
        CharacterSet::ISO8859_2 => Some(4),
        CharacterSet::ISO8859_3 => Some(5),
        CharacterSet::ISO8859_4 => Some(6),
        CharacterSet::ISO8859_5 => Some(7),
        CharacterSet::ISO8859_6 => Some(8),
        CharacterSet::ISO8859_7 => Some(9),
        CharacterSet::ISO8859_8 => Some(10),
        CharacterSet::ISO8859_9 => Some(11),
        CharacterSet::ISO8859_10 => Some(12),
        CharacterSet::ISO8859_11 => Some(13),
        CharacterSet::ISO8859_13 => Some(15),
        CharacterSet::ISO8859_14 => Some(16),
        CharacterSet::ISO8859_15 => Some(17),
        CharacterSet::ISO8859_16 => Some(18),
        CharacterSet::Shift_JIS => Some(20),
        CharacterSet::Cp1250 => Some(21),
        CharacterSet::Cp1251 => Some(22),
        CharacterSet::Cp1252 => Some(23),
        CharacterSet::Cp1256 => Some(24),
        CharacterSet::UTF16BE => Some(25),
        CharacterSet::UTF8 => Some(26),
        CharacterSet::ASCII => Some(27),
        CharacterSet::Big5 => Some(28),
        CharacterSet::GB18030 => Some(29),
        CharacterSet::EUC_KR => Some(30),
        CharacterSet::GBK => Some(31),
        CharacterSet::GB2312 => Some(32),
        CharacterSet::Binary => Some(899),
        _ => None,
    }
}

/// Case-insensitive name/alias lookup (ECI name registry + common WHATWG labels),
/// mirrors `CharacterSetECI::CharsetFromName`.
pub fn charset_from_name(name: &str) -> CharacterSet {
    let n = name.to_ascii_lowercase().replace('_', "-");
    match n.as_str() {
        "cp437" | "ibm437" => CharacterSet::Cp437,
        "iso8859-1" | "iso-8859-1" | "latin1" => CharacterSet::ISO8859_1,
        "iso8859-2" | "iso-8859-2" => CharacterSet::ISO8859_2,
        "iso8859-3" | "iso-8859-3" => CharacterSet::ISO8859_3,
        "iso8859-4" | "iso-8859-4" => CharacterSet::ISO8859_4,
        "iso8859-5" | "iso-8859-5" => CharacterSet::ISO8859_5,
        "iso8859-6" | "iso-8859-6" => CharacterSet::ISO8859_6,
        "iso8859-7" | "iso-8859-7" => CharacterSet::ISO8859_7,
        "iso8859-8" | "iso-8859-8" => CharacterSet::ISO8859_8,
        "iso8859-9" | "iso-8859-9" => CharacterSet::ISO8859_9,
        "iso8859-10" | "iso-8859-10" => CharacterSet::ISO8859_10,
        "iso8859-11" | "iso-8859-11" => CharacterSet::ISO8859_11,
        "iso8859-13" | "iso-8859-13" => CharacterSet::ISO8859_13,
        "iso8859-14" | "iso-8859-14" => CharacterSet::ISO8859_14,
        "iso8859-15" | "iso-8859-15" => CharacterSet::ISO8859_15,
        "iso8859-16" | "iso-8859-16" => CharacterSet::ISO8859_16,
        "sjis" | "shift-jis" | "shift_jis" => CharacterSet::Shift_JIS,
        "cp1250" | "windows-1250" => CharacterSet::Cp1250,
        "cp1251" | "windows-1251" => CharacterSet::Cp1251,
        "cp1252" | "windows-1252" => CharacterSet::Cp1252,
        "cp1256" | "windows-1256" => CharacterSet::Cp1256,
        "unicodebigunmarked" | "utf16be" | "utf-16be" | "unicodebig" => CharacterSet::UTF16BE,
        "utf8" | "utf-8" => CharacterSet::UTF8,
        "ascii" | "us-ascii" => CharacterSet::ASCII,
        "big5" => CharacterSet::Big5,
        "gb2312" => CharacterSet::GB2312,
        "gb18030" | "euc-cn" | "euc_cn" => CharacterSet::GB18030,
        "gbk" => CharacterSet::GBK,
        "euc-kr" | "euc_kr" => CharacterSet::EUC_KR,
        "utf16le" | "utf-16le" => CharacterSet::UTF16LE,
        "utf32be" | "utf-32be" => CharacterSet::UTF32BE,
        "utf32le" | "utf-32le" => CharacterSet::UTF32LE,
        "binary" => CharacterSet::Binary,
        _ => CharacterSet::Unknown,
    }
}

fn whatwg_label(cs: CharacterSet) -> Option<&'static str> {
    Some(match cs {
        CharacterSet::Shift_JIS => "shift_jis",
        CharacterSet::Big5 => "big5",
        CharacterSet::GB2312 => "gb2312",
        CharacterSet::GBK => "gbk",
        CharacterSet::GB18030 => "gb18030",
        CharacterSet::EUC_KR => "euc-kr",
        _ => return None,
    })
}

/// Decode `bytes` under `cs` into UTF-8, producing replacement-free output where the
/// charset guarantees full coverage (single-byte code pages always succeed).
pub fn decode_to_utf8(cs: CharacterSet, bytes: &[u8]) -> String {
    match cs {
        CharacterSet::Unknown | CharacterSet::Binary | CharacterSet::ASCII => {
            // Binary / unknown: pass through 0x80..0xFF as Latin-1 (spec §4.7).
            bytes.iter().map(|&b| b as char).collect()
        }
        CharacterSet::UTF8 => String::from_utf8_lossy(bytes).into_owned(),
        CharacterSet::UTF16BE => decode_utf16(bytes, true),
        CharacterSet::UTF16LE => decode_utf16(bytes, false),
        CharacterSet::UTF32BE => decode_utf32(bytes, true),
        CharacterSet::UTF32LE => decode_utf32(bytes, false),
        CharacterSet::ISO8859_1 => bytes.iter().map(|&b| b as char).collect(),
        CharacterSet::Shift_JIS => decode_shift_jis(bytes, false),
        cs if single_byte_table(cs).is_some() => decode_single_byte(cs, bytes),
        cs => match whatwg_label(cs).and_then(encoding_from_whatwg_label) {
            Some(enc) => enc.decode(bytes, DecoderTrap::Replace).unwrap_or_default(),
            None => bytes.iter().map(|&b| b as char).collect(),
        },
    }
}

/// Decode Shift_JIS resolving Open Question 1: byte 0x5C/0x7E map to
/// YEN SIGN/OVERLINE (JIS X 0201 Roman, ISO/IEC 18004's default) rather
/// than backslash/tilde unless `ascii_mode` opts into the ASCII-direct
/// reading. Double-byte sequences are untouched either way.
fn decode_shift_jis(bytes: &[u8], ascii_mode: bool) -> String {
    let enc = whatwg_label(CharacterSet::Shift_JIS).and_then(encoding_from_whatwg_label);
    let mut out = String::new();
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if b < 0x80 {
            match (b, ascii_mode) {
                (0x5C, false) => out.push('\u{00A5}'),
                (0x7E, false) => out.push('\u{203E}'),
                _ => out.push(b as char),
            }
            i += 1;
            continue;
        }
        let is_lead = (0x81..=0x9F).contains(&b) || (0xE0..=0xFC).contains(&b);
        let take = if is_lead && i + 1 < bytes.len() { 2 } else { 1 };
        match enc {
            Some(e) => out.push_str(&e.decode(&bytes[i..i + take], DecoderTrap::Replace).unwrap_or_default()),
            None => out.push('\u{FFFD}'),
        }
        i += take;
    }
    out
}

/// Encode UTF-8 `text` back into `cs`'s byte representation.
pub fn encode_from_utf8(cs: CharacterSet, text: &str) -> Option<Vec<u8>> {
    match cs {
        CharacterSet::Unknown | CharacterSet::Binary | CharacterSet::ASCII | CharacterSet::ISO8859_1 => {
            let mut out = Vec::with_capacity(text.chars().count());
            for c in text.chars() {
                if (c as u32) > 0xFF {
                    return None;
                }
                out.push(c as u8);
            }
            Some(out)
        }
        CharacterSet::UTF8 => Some(text.as_bytes().to_vec()),
        CharacterSet::UTF16BE => Some(encode_utf16(text, true)),
        CharacterSet::UTF16LE => Some(encode_utf16(text, false)),
        CharacterSet::UTF32BE => Some(encode_utf32(text, true)),
        CharacterSet::UTF32LE => Some(encode_utf32(text, false)),
        CharacterSet::Shift_JIS => encode_shift_jis(text, false),
        cs if single_byte_table(cs).is_some() => encode_single_byte(cs, text),
        cs => whatwg_label(cs)
            .and_then(encoding_from_whatwg_label)
            .and_then(|enc| enc.encode(text, EncoderTrap::Strict).ok()),
    }
}

fn encode_shift_jis(text: &str, ascii_mode: bool) -> Option<Vec<u8>> {
    let enc = whatwg_label(CharacterSet::Shift_JIS).and_then(encoding_from_whatwg_label)?;
    let mut out = Vec::with_capacity(text.len());
    for c in text.chars() {
        match (c, ascii_mode) {
            ('\u{00A5}', false) => out.push(0x5C),
            ('\u{203E}', false) => out.push(0x7E),
            _ => {
                let mut buf = [0u8; 4];
                let encoded = enc.encode(c.encode_utf8(&mut buf), EncoderTrap::Strict).ok()?;
                out.extend_from_slice(&encoded);
            }
        }
    }
    Some(out)
}

fn decode_utf16(bytes: &[u8], big_endian: bool) -> String {
    let units: Vec<u16> = bytes
        .chunks(2)
        .map(|c| {
            let hi = c[0] as u16;
            let lo = *c.get(1).unwrap_or(&0) as u16;
            if big_endian { (hi << 8) | lo } else { (lo << 8) | hi }
        })
        .collect();
    String::from_utf16_lossy(&units)
}

fn encode_utf16(text: &str, big_endian: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 2);
    for unit in text.encode_utf16() {
        if big_endian {
            out.extend_from_slice(&unit.to_be_bytes());
        } else {
            out.extend_from_slice(&unit.to_le_bytes());
        }
    }
    out
}

fn decode_utf32(bytes: &[u8], big_endian: bool) -> String {
    bytes
        .chunks(4)
        .filter_map(|c| {
            if c.len() < 4 {
                return None;
            }
            let arr = [c[0], c[1], c[2], c[3]];
            let v = if big_endian { u32::from_be_bytes(arr) } else { u32::from_le_bytes(arr) };
            char::from_u32(v)
        })
        .collect()
}

fn encode_utf32(text: &str, big_endian: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len() * 4);
    for c in text.chars() {
        let v = c as u32;
        if big_endian {
            out.extend_from_slice(&v.to_be_bytes());
        } else {
            out.extend_from_slice(&v.to_le_bytes());
        }
    }
    out
}

/// Code-point table for single-byte code pages whose lower half is identical
/// to ASCII/C0 controls, paired with the byte value its first entry stands for.
fn single_byte_table(cs: CharacterSet) -> Option<(&'static [u16], u8)> {
    match cs {
        CharacterSet::ISO8859_2 => Some((&tables::ISO8859_2, 0xA0)),
        CharacterSet::ISO8859_3 => Some((&tables::ISO8859_3, 0xA0)),
        CharacterSet::ISO8859_4 => Some((&tables::ISO8859_4, 0xA0)),
        CharacterSet::ISO8859_5 => Some((&tables::ISO8859_5, 0xA0)),
        CharacterSet::ISO8859_6 => Some((&tables::ISO8859_6, 0xA0)),
        CharacterSet::ISO8859_7 => Some((&tables::ISO8859_7, 0xA0)),
        CharacterSet::ISO8859_8 => Some((&tables::ISO8859_8, 0xA0)),
        CharacterSet::ISO8859_9 => Some((&tables::ISO8859_9, 0xA0)),
        CharacterSet::ISO8859_10 => Some((&tables::ISO8859_10, 0xA0)),
        CharacterSet::ISO8859_11 => Some((&tables::ISO8859_11, 0xA0)),
        CharacterSet::ISO8859_13 => Some((&tables::ISO8859_13, 0xA0)),
        CharacterSet::ISO8859_14 => Some((&tables::ISO8859_14, 0xA0)),
        CharacterSet::ISO8859_15 => Some((&tables::ISO8859_15, 0xA0)),
        CharacterSet::ISO8859_16 => Some((&tables::ISO8859_16, 0xA0)),
        // The Windows-125x tables start at 0x80 (they carry the C1-range
        // overrides Windows code pages define); 0xA0 would be off by 32.
        CharacterSet::Cp1250 => Some((&tables::CP1250, 0x80)),
        CharacterSet::Cp1251 => Some((&tables::CP1251, 0x80)),
        CharacterSet::Cp1252 => Some((&tables::CP1252, 0x80)),
        CharacterSet::Cp1256 => Some((&tables::CP1256, 0x80)),
        CharacterSet::Cp437 => Some((&tables::CP437_UPPER, 0x80)),
        _ => None,
    }
}

fn decode_single_byte(cs: CharacterSet, bytes: &[u8]) -> String {
    let (table, base) = single_byte_table(cs).expect("checked by caller");
    bytes
        .iter()
        .map(|&b| {
            if b < base {
                b as char
            } else {
                match table.get((b - base) as usize) {
                    // The Windows-125x tables don't cover 0xE0..=0xFF, which
                    // for those code pages equals Latin-1 supplement anyway.
                    Some(&cp) => char::from_u32(cp as u32).unwrap_or('\u{FFFD}'),
                    None => b as char,
                }
            }
        })
        .collect()
}

fn encode_single_byte(cs: CharacterSet, text: &str) -> Option<Vec<u8>> {
    let (table, base) = single_byte_table(cs)?;
    let mut out = Vec::with_capacity(text.len());
    'chars: for c in text.chars() {
        let cp = c as u32;
        if cp < base as u32 {
            out.push(cp as u8);
            continue;
        }
        for (i, &tc) in table.iter().enumerate() {
            if tc as u32 == cp {
                out.push(base + i as u8);
                continue 'chars;
            }
        }
        if cp < 0x100 && (base as usize + table.len()) <= 0xE0 {
            out.push(cp as u8);
            continue;
        }
        return None;
    }
    Some(out)
}

/// Encoding-guessing heuristic used when no ECI has been seen:
/// look for Shift_JIS/GBK double-byte lead-byte ranges, then UTF-8 validity,
/// falling back to the hinted charset or ISO-8859-1.
pub fn guess_encoding(bytes: &[u8], hinted: CharacterSet) -> CharacterSet {
    if bytes.is_empty() {
        return if hinted != CharacterSet::Unknown { hinted } else { CharacterSet::ISO8859_1 };
    }

    let mut can_be_sjis = true;
    let mut can_be_gb = true;
    let mut i = 0;
    while i < bytes.len() {
        let b = bytes[i];
        if can_be_sjis {
            let lead_ok = (0x81..=0x9F).contains(&b) || (0xE0..=0xFC).contains(&b);
            if lead_ok && i + 1 < bytes.len() {
                let trail = bytes[i + 1];
                if !((0x40..=0x7E).contains(&trail) || (0x80..=0xFC).contains(&trail)) {
                    can_be_sjis = false;
                }
            } else if b >= 0x80 && !lead_ok {
                can_be_sjis = false;
            }
        }
        if can_be_gb {
            let lead_ok = (0x81..=0xFE).contains(&b);
            if lead_ok && i + 1 < bytes.len() {
                let trail = bytes[i + 1];
                if !((0x40..=0xFE).contains(&trail) && trail != 0x7F) {
                    can_be_gb = false;
                }
            } else if b >= 0x80 && !lead_ok {
                can_be_gb = false;
            }
        }
        i += 1;
    }

    if std::str::from_utf8(bytes).is_ok() && bytes.iter().any(|&b| b >= 0x80) {
        return CharacterSet::UTF8;
    }
    if bytes.iter().all(|&b| b < 0x80) {
        return CharacterSet::ASCII;
    }
    if can_be_sjis {
        return CharacterSet::Shift_JIS;
    }
    if can_be_gb {
        return CharacterSet::GBK;
    }
    if hinted != CharacterSet::Unknown {
        return hinted;
    }
    CharacterSet::ISO8859_1
}

mod tables {
    // Standard upper-half (0xA0/0x80..0xFF) code-point tables for the ISO-8859 family,
    // the Windows-125x family, and IBM code page 437.
    pub const ISO8859_2: [u16; 96] = [
        0x00A0, 0x0104, 0x02D8, 0x0141, 0x00A4, 0x013D, 0x015A, 0x00A7, 0x00A8, 0x0160, 0x015E, 0x0164, 0x0179, 0x00AD, 0x017D, 0x017B,
        0x00B0, 0x0105, 0x02DB, 0x0142, 0x00B4, 0x013E, 0x015B, 0x02C7, 0x00B8, 0x0161, 0x015F, 0x0165, 0x017A, 0x02DD, 0x017E, 0x017C,
        0x0154, 0x00C1, 0x00C2, 0x0102, 0x00C4, 0x0139, 0x0106, 0x00C7, 0x010C, 0x00C9, 0x0118, 0x00CB, 0x011A, 0x00CD, 0x00CE, 0x010E,
        0x0110, 0x0143, 0x0147, 0x00D3, 0x00D4, 0x0150, 0x00D6, 0x00D7, 0x0158, 0x016E, 0x00DA, 0x0170, 0x00DC, 0x00DD, 0x0162, 0x00DF,
        0x0155, 0x00E1, 0x00E2, 0x0103, 0x00E4, 0x013A, 0x0107, 0x00E7, 0x010D, 0x00E9, 0x0119, 0x00EB, 0x011B, 0x00ED, 0x00EE, 0x010F,
        0x0111, 0x0144, 0x0148, 0x00F3, 0x00F4, 0x0151, 0x00F6, 0x00F7, 0x0159, 0x016F, 0x00FA, 0x0171, 0x00FC, 0x00FD, 0x0163, 0x02D9,
    ];
    pub const ISO8859_3: [u16; 96] = [
        0x00A0, 0x0126, 0x02D8, 0x00A3, 0x00A4, 0xFFFD, 0x0124, 0x00A7, 0x00A8, 0x0130, 0x015E, 0x011E, 0x0134, 0x00AD, 0xFFFD, 0x017B,
        0x00B0, 0x0127, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x0125, 0x00B7, 0x00B8, 0x0131, 0x015F, 0x011F, 0x0135, 0x00BD, 0xFFFD, 0x017C,
        0x00C0, 0x00C1, 0x00C2, 0xFFFD, 0x00C4, 0x010A, 0x0108, 0x00C7, 0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0xFFFD, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x0120, 0x00D6, 0x00D7, 0x011C, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x016C, 0x015C, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0xFFFD, 0x00E4, 0x010B, 0x0109, 0x00E7, 0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0xFFFD, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x0121, 0x00F6, 0x00F7, 0x011D, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x016D, 0x015D, 0x02D9,
    ];
    pub const ISO8859_4: [u16; 96] = [
        0x00A0, 0x0104, 0x0138, 0x0156, 0x00A4, 0x0128, 0x013B, 0x00A7, 0x00A8, 0x0160, 0x0112, 0x0122, 0x0166, 0x00AD, 0x017D, 0x00AF,
        0x00B0, 0x0105, 0x02DB, 0x0157, 0x00B4, 0x0129, 0x013C, 0x02C7, 0x00B8, 0x0161, 0x0113, 0x0123, 0x0167, 0x014A, 0x017E, 0x014B,
        0x0100, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x012E, 0x010C, 0x00C9, 0x0118, 0x00CB, 0x0116, 0x00CD, 0x00CE, 0x012A,
        0x0110, 0x0145, 0x014C, 0x0136, 0x00D4, 0x00D5, 0x00D6, 0x00D7, 0x00D8, 0x0172, 0x00DA, 0x00DB, 0x00DC, 0x0168, 0x016A, 0x00DF,
        0x0101, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x012F, 0x010D, 0x00E9, 0x0119, 0x00EB, 0x0117, 0x00ED, 0x00EE, 0x012B,
        0x0111, 0x0146, 0x014D, 0x0137, 0x00F4, 0x00F5, 0x00F6, 0x00F7, 0x00F8, 0x0173, 0x00FA, 0x00FB, 0x00FC, 0x0169, 0x016B, 0x02D9,
    ];
    pub const ISO8859_5: [u16; 96] = [
        0x00A0, 0x0401, 0x0402, 0x0403, 0x0404, 0x0405, 0x0406, 0x0407, 0x0408, 0x0409, 0x040A, 0x040B, 0x040C, 0x00AD, 0x040E, 0x040F,
        0x0410, 0x0411, 0x0412, 0x0413, 0x0414, 0x0415, 0x0416, 0x0417, 0x0418, 0x0419, 0x041A, 0x041B, 0x041C, 0x041D, 0x041E, 0x041F,
        0x0420, 0x0421, 0x0422, 0x0423, 0x0424, 0x0425, 0x0426, 0x0427, 0x0428, 0x0429, 0x042A, 0x042B, 0x042C, 0x042D, 0x042E, 0x042F,
        0x0430, 0x0431, 0x0432, 0x0433, 0x0434, 0x0435, 0x0436, 0x0437, 0x0438, 0x0439, 0x043A, 0x043B, 0x043C, 0x043D, 0x043E, 0x043F,
        0x0440, 0x0441, 0x0442, 0x0443, 0x0444, 0x0445, 0x0446, 0x0447, 0x0448, 0x0449, 0x044A, 0x044B, 0x044C, 0x044D, 0x044E, 0x044F,
        0x2116, 0x0451, 0x0452, 0x0453, 0x0454, 0x0455, 0x0456, 0x0457, 0x0458, 0x0459, 0x045A, 0x045B, 0x045C, 0x00A7, 0x045E, 0x045F,
    ];
    pub const ISO8859_6: [u16; 96] = [
        0x00A0, 0xFFFD, 0xFFFD, 0xFFFD, 0x00A4, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0x060C, 0x00AD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0x061B, 0xFFFD, 0xFFFD, 0xFFFD, 0x061F,
        0xFFFD, 0x0621, 0x0622, 0x0623, 0x0624, 0x0625, 0x0626, 0x0627, 0x0628, 0x0629, 0x062A, 0x062B, 0x062C, 0x062D, 0x062E, 0x062F,
        0x0630, 0x0631, 0x0632, 0x0633, 0x0634, 0x0635, 0x0636, 0x0637, 0x0638, 0x0639, 0x063A, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0x0640, 0x0641, 0x0642, 0x0643, 0x0644, 0x0645, 0x0646, 0x0647, 0x0648, 0x0649, 0x064A, 0x064B, 0x064C, 0x064D, 0x064E, 0x064F,
        0x0650, 0x0651, 0x0652, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
    ];
    pub const ISO8859_7: [u16; 96] = [
        0x00A0, 0x2018, 0x2019, 0x00A3, 0x20AC, 0x20AF, 0x00A6, 0x00A7, 0x00A8, 0x00A9, 0x037A, 0x00AB, 0x00AC, 0x00AD, 0xFFFD, 0x2015,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x0384, 0x0385, 0x0386, 0x00B7, 0x0388, 0x0389, 0x038A, 0x00BB, 0x038C, 0x00BD, 0x038E, 0x038F,
        0x0390, 0x0391, 0x0392, 0x0393, 0x0394, 0x0395, 0x0396, 0x0397, 0x0398, 0x0399, 0x039A, 0x039B, 0x039C, 0x039D, 0x039E, 0x039F,
        0x03A0, 0x03A1, 0xFFFD, 0x03A3, 0x03A4, 0x03A5, 0x03A6, 0x03A7, 0x03A8, 0x03A9, 0x03AA, 0x03AB, 0x03AC, 0x03AD, 0x03AE, 0x03AF,
        0x03B0, 0x03B1, 0x03B2, 0x03B3, 0x03B4, 0x03B5, 0x03B6, 0x03B7, 0x03B8, 0x03B9, 0x03BA, 0x03BB, 0x03BC, 0x03BD, 0x03BE, 0x03BF,
        0x03C0, 0x03C1, 0x03C2, 0x03C3, 0x03C4, 0x03C5, 0x03C6, 0x03C7, 0x03C8, 0x03C9, 0x03CA, 0x03CB, 0x03CC, 0x03CD, 0x03CE, 0xFFFD,
    ];
    pub const ISO8859_8: [u16; 96] = [
        0x00A0, 0xFFFD, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7, 0x00A8, 0x00A9, 0x00D7, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7, 0x00B8, 0x00B9, 0x00F7, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
        0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0x2017,
        0x05D0, 0x05D1, 0x05D2, 0x05D3, 0x05D4, 0x05D5, 0x05D6, 0x05D7, 0x05D8, 0x05D9, 0x05DA, 0x05DB, 0x05DC, 0x05DD, 0x05DE, 0x05DF,
        0x05E0, 0x05E1, 0x05E2, 0x05E3, 0x05E4, 0x05E5, 0x05E6, 0x05E7, 0x05E8, 0x05E9, 0x05EA, 0xFFFD, 0xFFFD, 0x200E, 0x200F, 0xFFFD,
    ];
    pub const ISO8859_9: [u16; 96] = [
        0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7, 0x00A8, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7, 0x00B8, 0x00B9, 0x00BA, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF,
        0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7, 0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0x011E, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D7, 0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x0130, 0x015E, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7, 0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0x011F, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F7, 0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x0131, 0x015F, 0x00FF,
    ];
    pub const ISO8859_10: [u16; 96] = [
        0x00A0, 0x0104, 0x0112, 0x0122, 0x012A, 0x0128, 0x0136, 0x00A7, 0x013B, 0x0110, 0x0160, 0x0166, 0x017D, 0x00AD, 0x016A, 0x014A,
        0x00B0, 0x0105, 0x0113, 0x0123, 0x012B, 0x0129, 0x0137, 0x00B7, 0x013C, 0x0111, 0x0161, 0x0167, 0x017E, 0x2015, 0x016B, 0x014B,
        0x0100, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x012E, 0x010C, 0x00C9, 0x0118, 0x00CB, 0x0116, 0x00CD, 0x00CE, 0x00CF,
        0x00D0, 0x0145, 0x014C, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x0168, 0x00D8, 0x0172, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x00DE, 0x00DF,
        0x0101, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x012F, 0x010D, 0x00E9, 0x0119, 0x00EB, 0x0117, 0x00ED, 0x00EE, 0x00EF,
        0x00F0, 0x0146, 0x014D, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x0169, 0x00F8, 0x0173, 0x00FA, 0x00FB, 0x00FC, 0x00FD, 0x00FE, 0x0138,
    ];
    pub const ISO8859_11: [u16; 96] = [
        0x00A0, 0x0E01, 0x0E02, 0x0E03, 0x0E04, 0x0E05, 0x0E06, 0x0E07, 0x0E08, 0x0E09, 0x0E0A, 0x0E0B, 0x0E0C, 0x0E0D, 0x0E0E, 0x0E0F,
        0x0E10, 0x0E11, 0x0E12, 0x0E13, 0x0E14, 0x0E15, 0x0E16, 0x0E17, 0x0E18, 0x0E19, 0x0E1A, 0x0E1B, 0x0E1C, 0x0E1D, 0x0E1E, 0x0E1F,
        0x0E20, 0x0E21, 0x0E22, 0x0E23, 0x0E24, 0x0E25, 0x0E26, 0x0E27, 0x0E28, 0x0E29, 0x0E2A, 0x0E2B, 0x0E2C, 0x0E2D, 0x0E2E, 0x0E2F,
        0x0E30, 0x0E31, 0x0E32, 0x0E33, 0x0E34, 0x0E35, 0x0E36, 0x0E37, 0x0E38, 0x0E39, 0x0E3A, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD, 0x0E3F,
        0x0E40, 0x0E41, 0x0E42, 0x0E43, 0x0E44, 0x0E45, 0x0E46, 0x0E47, 0x0E48, 0x0E49, 0x0E4A, 0x0E4B, 0x0E4C, 0x0E4D, 0x0E4E, 0x0E4F,
        0x0E50, 0x0E51, 0x0E52, 0x0E53, 0x0E54, 0x0E55, 0x0E56, 0x0E57, 0x0E58, 0x0E59, 0x0E5A, 0x0E5B, 0xFFFD, 0xFFFD, 0xFFFD, 0xFFFD,
    ];
    pub const ISO8859_13: [u16; 96] = [
        0x00A0, 0x201D, 0x00A2, 0x00A3, 0x00A4, 0x201E, 0x00A6, 0x00A7, 0x00D8, 0x00A9, 0x0156, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00C6,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x201C, 0x00B5, 0x00B6, 0x00B7, 0x00F8, 0x00B9, 0x0157, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00E6,
        0x0104, 0x012E, 0x0100, 0x0106, 0x00C4, 0x00C5, 0x0118, 0x0112, 0x010C, 0x00C9, 0x0179, 0x0116, 0x0122, 0x0136, 0x012A, 0x013B,
        0x0160, 0x0143, 0x0145, 0x00D3, 0x014C, 0x00D5, 0x00D6, 0x00D7, 0x0172, 0x0141, 0x015A, 0x016A, 0x00DC, 0x017B, 0x017D, 0x00DF,
        0x0105, 0x012F, 0x0101, 0x0107, 0x00E4, 0x00E5, 0x0119, 0x0113, 0x010D, 0x00E9, 0x017A, 0x0117, 0x0123, 0x0137, 0x012B, 0x013C,
        0x0161, 0x0144, 0x0146, 0x00F3, 0x014D, 0x00F5, 0x00F6, 0x00F7, 0x0173, 0x0142, 0x015B, 0x016B, 0x00FC, 0x017C, 0x017E, 0x2019,
    ];
    pub const ISO8859_14: [u16; 96] = [
        0x00A0, 0x1E02, 0x1E03, 0x00A3, 0x010A, 0x010B, 0x1E0A, 0x00A7, 0x1E80, 0x00A9, 0x1E82, 0x1E0B, 0x1EF2, 0x00AD, 0x00AE, 0x0178,
        0x1E1E, 0x1E1F, 0x0120, 0x0121, 0x1E40, 0x1E41, 0x00B6, 0x1E56, 0x1E81, 0x1E57, 0x1E83, 0x1E60, 0x1EF3, 0x1E84, 0x1E85, 0x1E61,
        0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7, 0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0x0174, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x1E6A, 0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x0176, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7, 0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0x0175, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x1E6B, 0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x00FD, 0x0177, 0x00FF,
    ];
    pub const ISO8859_15: [u16; 96] = [
        0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x20AC, 0x00A5, 0x0160, 0x00A7, 0x0161, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x017D, 0x00B5, 0x00B6, 0x00B7, 0x017E, 0x00B9, 0x00BA, 0x00BB, 0x0152, 0x0153, 0x0178, 0x00BF,
        0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7, 0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0x00D0, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D7, 0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x00DE, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0x00E3, 0x00E4, 0x00E5, 0x00E6, 0x00E7, 0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0x00F0, 0x00F1, 0x00F2, 0x00F3, 0x00F4, 0x00F5, 0x00F6, 0x00F7, 0x00F8, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x00FD, 0x00FE, 0x00FF,
    ];
    pub const ISO8859_16: [u16; 96] = [
        0x00A0, 0x0104, 0x0105, 0x0141, 0x20AC, 0x201E, 0x0160, 0x00A7, 0x0161, 0x00A9, 0x0218, 0x00AB, 0x0179, 0x00AD, 0x017A, 0x017B,
        0x00B0, 0x00B1, 0x010C, 0x0142, 0x017D, 0x201D, 0x00B6, 0x00B7, 0x017E, 0x010D, 0x0219, 0x00BB, 0x0152, 0x0153, 0x0178, 0x017C,
        0x00C0, 0x00C1, 0x00C2, 0x0102, 0x00C4, 0x0106, 0x00C6, 0x00C7, 0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0x0110, 0x0143, 0x00D2, 0x00D3, 0x00D4, 0x0150, 0x00D6, 0x015A, 0x0170, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x0118, 0x021A, 0x00DF,
        0x00E0, 0x00E1, 0x00E2, 0x0103, 0x00E4, 0x0107, 0x00E6, 0x00E7, 0x00E8, 0x00E9, 0x00EA, 0x00EB, 0x00EC, 0x00ED, 0x00EE, 0x00EF,
        0x0111, 0x0144, 0x00F2, 0x00F3, 0x00F4, 0x0151, 0x00F6, 0x015B, 0x0171, 0x00F9, 0x00FA, 0x00FB, 0x00FC, 0x0119, 0x021B, 0x00FF,
    ];
    pub const CP1250: [u16; 96] = [
        0x20AC, 0x0081, 0x201A, 0xFFFD, 0x201E, 0x2026, 0x2020, 0x2021, 0xFFFD, 0x2030, 0x0160, 0x2039, 0x015A, 0x0164, 0x017D, 0x0179,
        0x0090, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, 0xFFFD, 0x2122, 0x0161, 0x203A, 0x015B, 0x0165, 0x017E, 0x017A,
        0x00A0, 0x02C7, 0x02D8, 0x0141, 0x00A4, 0x0104, 0x00A6, 0x00A7, 0x00A8, 0x00A9, 0x015E, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x017B,
        0x00B0, 0x00B1, 0x02DB, 0x0142, 0x00B4, 0x00B5, 0x00B6, 0x00B7, 0x00B8, 0x0105, 0x015F, 0x00BB, 0x013D, 0x02DD, 0x013E, 0x017C,
        0x0154, 0x00C1, 0x00C2, 0x0102, 0x00C4, 0x0139, 0x0106, 0x00C7, 0x010C, 0x00C9, 0x0118, 0x00CB, 0x011A, 0x00CD, 0x00CE, 0x010E,
        0x0110, 0x0143, 0x0147, 0x00D3, 0x00D4, 0x0150, 0x00D6, 0x00D7, 0x0158, 0x016E, 0x00DA, 0x0170, 0x00DC, 0x00DD, 0x0162, 0x00DF,
    ];
    pub const CP1251: [u16; 96] = [
        0x0402, 0x0403, 0x201A, 0x0453, 0x201E, 0x2026, 0x2020, 0x2021, 0x20AC, 0x2030, 0x0409, 0x2039, 0x040A, 0x040C, 0x040B, 0x040F,
        0x0452, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, 0xFFFD, 0x2122, 0x0459, 0x203A, 0x045A, 0x045C, 0x045B, 0x045F,
        0x00A0, 0x040E, 0x045E, 0x0408, 0x00A4, 0x0490, 0x00A6, 0x00A7, 0x0401, 0x00A9, 0x0404, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x0407,
        0x00B0, 0x00B1, 0x0406, 0x0456, 0x0491, 0x00B5, 0x00B6, 0x00B7, 0x0451, 0x2116, 0x0454, 0x00BB, 0x0458, 0x0405, 0x0455, 0x0457,
        0x0410, 0x0411, 0x0412, 0x0413, 0x0414, 0x0415, 0x0416, 0x0417, 0x0418, 0x0419, 0x041A, 0x041B, 0x041C, 0x041D, 0x041E, 0x041F,
        0x0420, 0x0421, 0x0422, 0x0423, 0x0424, 0x0425, 0x0426, 0x0427, 0x0428, 0x0429, 0x042A, 0x042B, 0x042C, 0x042D, 0x042E, 0x042F,
    ];
    pub const CP1252: [u16; 96] = [
        0x20AC, 0xFFFD, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, 0x02C6, 0x2030, 0x0160, 0x2039, 0x0152, 0xFFFD, 0x017D, 0xFFFD,
        0xFFFD, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, 0x02DC, 0x2122, 0x0161, 0x203A, 0x0153, 0xFFFD, 0x017E, 0x0178,
        0x00A0, 0x00A1, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7, 0x00A8, 0x00A9, 0x00AA, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7, 0x00B8, 0x00B9, 0x00BA, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x00BF,
        0x00C0, 0x00C1, 0x00C2, 0x00C3, 0x00C4, 0x00C5, 0x00C6, 0x00C7, 0x00C8, 0x00C9, 0x00CA, 0x00CB, 0x00CC, 0x00CD, 0x00CE, 0x00CF,
        0x00D0, 0x00D1, 0x00D2, 0x00D3, 0x00D4, 0x00D5, 0x00D6, 0x00D7, 0x00D8, 0x00D9, 0x00DA, 0x00DB, 0x00DC, 0x00DD, 0x00DE, 0x00DF,
    ];
    pub const CP1256: [u16; 96] = [
        0x20AC, 0x067E, 0x201A, 0x0192, 0x201E, 0x2026, 0x2020, 0x2021, 0x02C6, 0x2030, 0x0679, 0x2039, 0x0152, 0x0686, 0x0698, 0x0688,
        0x06AF, 0x2018, 0x2019, 0x201C, 0x201D, 0x2022, 0x2013, 0x2014, 0x06A9, 0x2122, 0x0691, 0x203A, 0x0153, 0x200C, 0x200D, 0x06BA,
        0x00A0, 0x060C, 0x00A2, 0x00A3, 0x00A4, 0x00A5, 0x00A6, 0x00A7, 0x00A8, 0x00A9, 0x06BE, 0x00AB, 0x00AC, 0x00AD, 0x00AE, 0x00AF,
        0x00B0, 0x00B1, 0x00B2, 0x00B3, 0x00B4, 0x00B5, 0x00B6, 0x00B7, 0x00B8, 0x00B9, 0x061B, 0x00BB, 0x00BC, 0x00BD, 0x00BE, 0x061F,
        0x06C1, 0x0621, 0x0622, 0x0623, 0x0624, 0x0625, 0x0626, 0x0627, 0x0628, 0x0629, 0x062A, 0x062B, 0x062C, 0x062D, 0x062E, 0x062F,
        0x0630, 0x0631, 0x0632, 0x0633, 0x0634, 0x0635, 0x0636, 0x00D7, 0x0637, 0x0638, 0x0639, 0x063A, 0x0640, 0x0641, 0x0642, 0x0643,
    ];
    // IBM PC code page 437, codepoints 0x80..0xFF (lower half is ASCII).
    pub const CP437_UPPER: [u16; 128] = [
        0x00C7, 0x00FC, 0x00E9, 0x00E2, 0x00E4, 0x00E0, 0x00E5, 0x00E7, 0x00EA, 0x00EB, 0x00E8, 0x00EF, 0x00EE, 0x00EC, 0x00C4, 0x00C5,
        0x00C9, 0x00E6, 0x00C6, 0x00F4, 0x00F6, 0x00F2, 0x00FB, 0x00F9, 0x00FF, 0x00D6, 0x00DC, 0x00A2, 0x00A3, 0x00A5, 0x20A7, 0x0192,
        0x00E1, 0x00ED, 0x00F3, 0x00FA, 0x00F1, 0x00D1, 0x00AA, 0x00BA, 0x00BF, 0x2310, 0x00AC, 0x00BD, 0x00BC, 0x00A1, 0x00AB, 0x00BB,
        0x2591, 0x2592, 0x2593, 0x2502, 0x2524, 0x2561, 0x2562, 0x2556, 0x2555, 0x2563, 0x2551, 0x2557, 0x255D, 0x255C, 0x255B, 0x2510,
        0x2514, 0x2534, 0x252C, 0x251C, 0x2500, 0x253C, 0x255E, 0x255F, 0x255A, 0x2554, 0x2569, 0x2566, 0x2560, 0x2550, 0x256C, 0x2567,
        0x2568, 0x2564, 0x2565, 0x2559, 0x2558, 0x2552, 0x2553, 0x256B, 0x256A, 0x2518, 0x250C, 0x2588, 0x2584, 0x258C, 0x2590, 0x2580,
        0x03B1, 0x00DF, 0x0393, 0x03C0, 0x03A3, 0x03C3, 0x00B5, 0x03C4, 0x03A6, 0x0398, 0x03A9, 0x03B4, 0x221E, 0x03C6, 0x03B5, 0x2229,
        0x2261, 0x00B1, 0x2265, 0x2264, 0x2320, 0x2321, 0x00F7, 0x2248, 0x00B0, 0x2219, 0x00B7, 0x221A, 0x207F, 0x00B2, 0x25A0, 0x00A0,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eci_roundtrip_common_values() {
        for &(v, cs) in &[
            (3u32, CharacterSet::ISO8859_1),
            (20, CharacterSet::Shift_JIS),
            (28, CharacterSet::Big5),
            (899, CharacterSet::Binary),
        ] {
            assert_eq!(charset_from_eci(v), cs);
            assert_eq!(eci_from_charset(cs), Some(v));
        }
    }

    #[test]
    fn latin1_roundtrip() {
        let bytes = b"Caf\xE9 ABC";
        let text = decode_to_utf8(CharacterSet::ISO8859_1, bytes);
        assert_eq!(text, "Caf\u{00e9} ABC");
        assert_eq!(encode_from_utf8(CharacterSet::ISO8859_1, &text).unwrap(), bytes);
    }

    #[test]
    fn iso8859_11_thai_roundtrip() {
        let bytes = [0xA1u8]; // ก U+0E01
        let text = decode_to_utf8(CharacterSet::ISO8859_11, &bytes);
        assert_eq!(text, "\u{0E01}");
        assert_eq!(encode_from_utf8(CharacterSet::ISO8859_11, &text).unwrap(), bytes);
    }

    #[test]
    fn utf16_be_roundtrip() {
        let text = "A\u{0e01}B";
        let bytes = encode_from_utf8(CharacterSet::UTF16BE, text).unwrap();
        assert_eq!(decode_to_utf8(CharacterSet::UTF16BE, &bytes), text);
    }

    #[test]
    fn guess_ascii_is_ascii() {
        assert_eq!(guess_encoding(b"hello", CharacterSet::Unknown), CharacterSet::ASCII);
    }

    #[test]
    fn name_lookup_is_case_insensitive() {
        assert_eq!(charset_from_name("iso-8859-1"), CharacterSet::ISO8859_1);
        assert_eq!(charset_from_name("ISO8859_1"), CharacterSet::ISO8859_1);
        assert_eq!(charset_from_name("Shift_JIS"), CharacterSet::Shift_JIS);
    }
}
