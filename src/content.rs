//! `Content`: the typed byte accumulator that decoders append to as they walk
//! a bitstream, tracking which ECI/segment-type applied to each run of bytes
//! so the final text can be rendered with the right charset per run.
//!
//! Grounded on `original_source/core/src/Content.h` (the modern API this
//! mirrors: a flat `Vec<u8>` plus a list of `(Eci, position)` switch points)
//! rather than `Content.cpp`'s older position-shifting `Append`/`Prepend`
//! pair — the header's own comments call that code "horrendous"; we keep the
//! single-pass append model it evolved into.

use crate::character_set::{decode_to_utf8, guess_encoding, CharacterSet, Eci};
use crate::error::{Error, Result};
use crate::symbology_identifier::SymbologyIdentifier;

/// What kind of data a byte run represents, beyond its character encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentType {
    Text,
    Binary,
    Gs1,
    /// AIM/URI escape content.
    Uri,
}

#[derive(Debug, Clone, Copy)]
struct EciRun {
    eci: Eci,
    position: usize,
}

#[derive(Debug, Clone, Copy)]
struct TypeRun {
    kind: SegmentType,
    position: usize,
}

/// Accumulates decoded bytes plus the ECI/segment-type switch points needed
/// to render them back into text.
#[derive(Debug, Clone)]
pub struct Content {
    bytes: Vec<u8>,
    eci_runs: Vec<EciRun>,
    type_runs: Vec<TypeRun>,
    hinted_charset: CharacterSet,
    default_charset: CharacterSet,
    pub symbology: SymbologyIdentifier,
    pub gs1: bool,
    pub application_indicator: Option<String>,
    finalized: bool,
}

impl Content {
    pub fn new(hinted_charset: CharacterSet, default_charset: CharacterSet) -> Self {
        Self {
            bytes: Vec::new(),
            eci_runs: vec![EciRun { eci: Eci::Unknown, position: 0 }],
            type_runs: vec![TypeRun { kind: SegmentType::Text, position: 0 }],
            hinted_charset,
            default_charset,
            symbology: SymbologyIdentifier::default(),
            gs1: false,
            application_indicator: None,
            finalized: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn raw_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Switch the ECI that subsequently appended bytes are interpreted under.
    /// A no-op if it matches the currently active ECI (avoids a spurious empty run).
    pub fn switch_eci(&mut self, eci: Eci) -> Result<()> {
        if self.finalized {
            return Err(Error::format("Content already finalized"));
        }
        if self.eci_runs.last().map(|r| r.eci) == Some(eci) {
            return Ok(());
        }
        self.eci_runs.push(EciRun { eci, position: self.bytes.len() });
        Ok(())
    }

    pub fn set_segment_type(&mut self, kind: SegmentType) -> Result<()> {
        if self.finalized {
            return Err(Error::format("Content already finalized"));
        }
        if self.type_runs.last().map(|r| r.kind) == Some(kind) {
            return Ok(());
        }
        self.type_runs.push(TypeRun { kind, position: self.bytes.len() });
        Ok(())
    }

    pub fn append_bytes(&mut self, data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::format("Content already finalized"));
        }
        self.bytes.extend_from_slice(data);
        Ok(())
    }

    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.append_bytes(&[byte])
    }

    /// Append text encoded under `cs` (used by alphanumeric/numeric segment decoders
    /// that produce characters directly rather than raw transport bytes).
    pub fn append_text(&mut self, text: &str, cs: CharacterSet) -> Result<()> {
        let bytes = crate::character_set::encode_from_utf8(cs, text)
            .ok_or_else(|| Error::format("text not representable in target charset"))?;
        self.append_bytes(&bytes)
    }

    pub fn mark_gs1(&mut self) {
        self.gs1 = true;
    }

    pub fn set_application_indicator(&mut self, indicator: impl Into<String>) {
        self.application_indicator = Some(indicator.into());
    }

    /// Lock the content against further mutation. Idempotent-unsafe by design: a
    /// second call is a programmer error (mirrors `Content.cpp`'s single-shot `Finalize`).
    pub fn finalize(&mut self) -> Result<()> {
        if self.finalized {
            return Err(Error::format("Content already finalized"));
        }
        self.finalized = true;
        Ok(())
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    /// Render the accumulated bytes to UTF-8 text, resolving each run's charset from
    /// its active ECI (falling back to `guess_encoding` for runs with no ECI seen).
    pub fn text(&self) -> String {
        let mut out = String::with_capacity(self.bytes.len());
        for (_, text) in self.eci_text_runs() {
            out.push_str(&text);
        }
        out
    }

    /// Per-run `(eci, decoded_text)` pairs in source order, used both by
    /// `text()` and by the ECI-escape text renderer, which needs to know
    /// where each encoding transition falls.
    pub fn eci_text_runs(&self) -> Vec<(Eci, String)> {
        self.eci_byte_ranges()
            .into_iter()
            .map(|(start, end, eci)| {
                let slice = &self.bytes[start..end];
                let cs = match eci {
                    Eci::Unknown => guess_encoding(slice, self.hinted_charset_or_default()),
                    Eci::Value(v) => {
                        let cs = crate::character_set::charset_from_eci(v);
                        if cs == CharacterSet::Unknown { self.hinted_charset_or_default() } else { cs }
                    }
                };
                (eci, decode_to_utf8(cs, slice))
            })
            .collect()
    }

    fn hinted_charset_or_default(&self) -> CharacterSet {
        if self.hinted_charset != CharacterSet::Unknown { self.hinted_charset } else { self.default_charset }
    }

    fn eci_byte_ranges(&self) -> Vec<(usize, usize, Eci)> {
        let mut ranges = Vec::with_capacity(self.eci_runs.len());
        for (i, run) in self.eci_runs.iter().enumerate() {
            let end = self.eci_runs.get(i + 1).map(|r| r.position).unwrap_or(self.bytes.len());
            if end > run.position {
                ranges.push((run.position, end, run.eci));
            }
        }
        ranges
    }

    /// Segment-type ranges, analogous to `eci_byte_ranges` (used by GS1 HRI rendering).
    pub fn type_byte_ranges(&self) -> Vec<(usize, usize, SegmentType)> {
        let mut ranges = Vec::with_capacity(self.type_runs.len());
        for (i, run) in self.type_runs.iter().enumerate() {
            let end = self.type_runs.get(i + 1).map(|r| r.position).unwrap_or(self.bytes.len());
            if end > run.position {
                ranges.push((run.position, end, run.kind));
            }
        }
        ranges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_eci_renders_as_that_charset() {
        let mut c = Content::new(CharacterSet::Unknown, CharacterSet::ISO8859_1);
        c.switch_eci(Eci::Value(20)).unwrap(); // Shift_JIS
        c.append_bytes(&[0x41, 0x42]).unwrap();
        assert_eq!(c.text(), "AB");
    }

    #[test]
    fn eci_switch_mid_stream_splits_rendering() {
        let mut c = Content::new(CharacterSet::Unknown, CharacterSet::ASCII);
        c.append_bytes(b"AB").unwrap();
        c.switch_eci(Eci::Value(3)).unwrap(); // ISO-8859-1
        c.append_bytes(&[0xE9]).unwrap(); // é
        assert_eq!(c.text(), "AB\u{00e9}");
    }

    #[test]
    fn finalize_then_mutate_is_rejected() {
        let mut c = Content::new(CharacterSet::Unknown, CharacterSet::ASCII);
        c.append_bytes(b"x").unwrap();
        c.finalize().unwrap();
        assert!(c.append_bytes(b"y").is_err());
        assert!(c.finalize().is_err());
    }

    #[test]
    fn redundant_eci_switch_is_noop() {
        let mut c = Content::new(CharacterSet::Unknown, CharacterSet::ASCII);
        c.switch_eci(Eci::Value(3)).unwrap();
        c.switch_eci(Eci::Value(3)).unwrap();
        assert_eq!(c.eci_byte_ranges().len(), 0); // no bytes appended yet
    }
}
