//! MaxiCode 6-bit free-message stream parser.
//!
//! Modes 2-6 share a primary message block: a postal code, country code,
//! and service class encoded specially, injected ahead of the free message
//! (spliced in at offset 9 when the free message opens with the ISO-15434
//! transport envelope `"[)>\x1E01\x1D"`). The free message itself is a
//! Sets-0..4 6-bit character stream; SHI0-4 are one-character shifts back to
//! Set A automatically, LOCK (58) promotes whatever set is currently active
//! via a shift into a persistent latch (mirroring the Code 128/Data Matrix
//! latch-vs-shift idiom used throughout this crate). The literal Set 1-4
//! character tables themselves aren't reproduced here (see `decode_set_value`).

use crate::character_set::CharacterSet;
use crate::content::{Content, SegmentType};
use crate::error::{Error, Result};

const SET_ASCII: usize = 0;
const SET_SYMBOL: usize = 1;
const SET_SHIFT_B: usize = 2;
const SET_SYMBOL2: usize = 3;
const SET_SYMBOL3: usize = 4;

const SHI0: u8 = 59;
const SHI1: u8 = 60;
const SHI2: u8 = 61;
const SHI3: u8 = 62;
const SHI4: u8 = 63;
const TWO_SHIFT_BYTE: u8 = 56;
const THREE_SHIFT_BYTE: u8 = 57;
const LATCH_BYTE: u8 = 58;
const LOCK: u8 = 58; // within a non-ASCII set, value 58 is the Lock-to-set token
const FS: u8 = 29;
const GS: u8 = 30;
const RS: u8 = 31;

#[derive(Debug, Clone)]
pub struct PrimaryMessage {
    pub postal_code: String,
    pub country_code: u16,
    pub service_class: u16,
}

pub struct DecodeResult {
    pub content: Content,
    pub mode: u8,
    pub primary: Option<PrimaryMessage>,
}

const ISO15434_ENVELOPE: &[u8] = b"[)>\x1E01\x1D";
const PRIMARY_SPLICE_OFFSET: usize = 9;

/// Decode a MaxiCode symbol's primary (modes 2/3 only) plus secondary message.
pub fn decode(mode: u8, primary_codewords: &[u8], secondary_codewords: &[u8], hinted_charset: CharacterSet) -> Result<DecodeResult> {
    let primary = match mode {
        2 => Some(decode_primary_numeric(primary_codewords)?),
        3 => Some(decode_primary_alpha(primary_codewords)?),
        4..=6 => None,
        _ => return Err(Error::format(format!("MaxiCode: unsupported mode {mode}"))),
    };

    let free_message = decode_free_message_bytes(secondary_codewords)?;
    let bytes = match &primary {
        Some(p) => splice_primary(p, &free_message),
        None => free_message,
    };

    let mut content = Content::new(hinted_charset, CharacterSet::ISO8859_1);
    content.set_segment_type(SegmentType::Text)?;
    content.append_bytes(&bytes)?;
    content.finalize()?;
    Ok(DecodeResult { content, mode, primary })
}

/// Assemble the primary message's postal/country/service prefix and place it
/// ahead of the free message, or spliced at byte offset 9 when the free
/// message already opens with the ISO-15434 transport envelope.
fn splice_primary(primary: &PrimaryMessage, free_message: &[u8]) -> Vec<u8> {
    let prefix = format!("{}{:03}{:03}", primary.postal_code, primary.country_code, primary.service_class);
    let prefix = prefix.into_bytes();
    if free_message.starts_with(ISO15434_ENVELOPE) && free_message.len() >= PRIMARY_SPLICE_OFFSET {
        let mut out = Vec::with_capacity(free_message.len() + prefix.len());
        out.extend_from_slice(&free_message[..PRIMARY_SPLICE_OFFSET]);
        out.extend_from_slice(&prefix);
        out.extend_from_slice(&free_message[PRIMARY_SPLICE_OFFSET..]);
        out
    } else {
        let mut out = Vec::with_capacity(free_message.len() + prefix.len());
        out.extend_from_slice(&prefix);
        out.extend_from_slice(free_message);
        out
    }
}

fn decode_primary_numeric(cw: &[u8]) -> Result<PrimaryMessage> {
    if cw.len() < 10 {
        return Err(Error::format("MaxiCode: primary message truncated"));
    }
    let postal_value: u64 = cw[..9].iter().fold(0u64, |acc, &b| acc * 6 + b as u64 % 6);
    Ok(PrimaryMessage {
        postal_code: format!("{:05}", postal_value % 100000),
        country_code: (cw[9] as u16) % 1000,
        service_class: cw.get(10).copied().unwrap_or(0) as u16,
    })
}

fn decode_primary_alpha(cw: &[u8]) -> Result<PrimaryMessage> {
    if cw.len() < 11 {
        return Err(Error::format("MaxiCode: primary message truncated"));
    }
    let postal_code: String = cw[..9].iter().map(|&b| (b'A' + (b % 26)) as char).collect();
    Ok(PrimaryMessage {
        postal_code,
        country_code: cw[9] as u16,
        service_class: cw[10] as u16,
    })
}

/// Decode the 6-bit free message into raw bytes. SHI0-4 are one-shot shifts
/// (active for exactly the next codeword, then `set` reverts); `LOCK` (58),
/// seen while a shift is active, promotes that shift into a persistent latch
/// instead of letting it expire. 2-Shift/3-Shift extend a Set-B shift across
/// the next 2 or 3 codewords instead of just one.
fn decode_free_message_bytes(codewords: &[u8]) -> Result<Vec<u8>> {
    let mut bytes = Vec::with_capacity(codewords.len());
    let mut set = SET_ASCII;
    let mut shift_once: Option<(usize, u32)> = None; // (target set, codewords remaining)
    let mut i = 0usize;

    while i < codewords.len() {
        let cw = codewords[i];
        match cw {
            SHI0 | SHI1 | SHI2 | SHI3 | SHI4 => {
                let target = match cw {
                    SHI0 => SET_ASCII,
                    SHI1 => SET_SYMBOL,
                    SHI2 => SET_SHIFT_B,
                    SHI3 => SET_SYMBOL2,
                    _ => SET_SYMBOL3,
                };
                shift_once = Some((target, 1));
                i += 1;
            }
            TWO_SHIFT_BYTE if set == SET_ASCII => {
                shift_once = Some((SET_SHIFT_B, 2));
                i += 1;
            }
            THREE_SHIFT_BYTE if set == SET_ASCII => {
                shift_once = Some((SET_SHIFT_B, 3));
                i += 1;
            }
            LATCH_BYTE if shift_once.is_some() => {
                // LOCK: the active shifted-to set becomes the new permanent base.
                set = shift_once.take().unwrap().0;
                i += 1;
            }
            _ => {
                let active = match &mut shift_once {
                    Some((target, remaining)) => {
                        let t = *target;
                        *remaining -= 1;
                        if *remaining == 0 {
                            shift_once = None;
                        }
                        t
                    }
                    None => set,
                };
                bytes.push(decode_set_value(active, cw)?);
                i += 1;
            }
        }
    }

    Ok(bytes)
}

fn decode_set_value(set: usize, cw: u8) -> Result<u8> {
    match set {
        SET_ASCII => {
            let _ = (FS, GS, RS);
            if cw < 64 {
                Ok(cw)
            } else {
                Err(Error::format("MaxiCode: ASCII set value out of range"))
            }
        }
        _ => Err(Error::unsupported(format!("MaxiCode: Set {set} character table is not yet supported"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode4_has_no_primary() {
        let result = decode(4, &[], &[0, 1, 2], CharacterSet::Unknown).unwrap();
        assert!(result.primary.is_none());
    }
}
