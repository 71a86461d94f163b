//! Aztec entry point, wiring already-extracted, RS-corrected data codewords
//! into the bitstream parser (`decoder::decode`, which implements the full
//! Upper/Lower/Mixed/Punct/Digit mode grammar, binary shift, FLG/ECI, and
//! structured-append).
//!
//! `decode_from_matrix` is the part still missing real work: reading the
//! bullseye/spiral module order and the 28-bit compact / 40-bit full mode
//! message off a `BitMatrix` is in scope (spec section 4.3 names it
//! explicitly), but the exact ring-traversal order and reference-grid
//! corrections are high-risk to reproduce from memory without a fixture to
//! check against, so this reports `Unsupported` rather than guessing at a
//! scrambled codeword order.

pub mod decoder;

use crate::barcode::{Barcode, BarcodeFormat};
use crate::bit_matrix::BitMatrix;
use crate::character_set::CharacterSet;
use crate::error::{Error, Result};
use crate::text::TextMode;

pub fn decode(data_codewords: &[u8], hinted_charset: CharacterSet, text_mode: TextMode) -> Result<Barcode> {
    let result = decoder::decode(data_codewords, hinted_charset)?;
    let mut barcode = Barcode::from_content(BarcodeFormat::Aztec, result.content, text_mode);
    if let Some(info) = result.structured_append {
        barcode.sequence_info = info;
    }
    Ok(barcode)
}

pub fn decode_from_matrix(_matrix: &BitMatrix, _hinted_charset: CharacterSet, _text_mode: TextMode) -> Result<Barcode> {
    Err(Error::unsupported("Aztec: bullseye/spiral codeword extraction from a bit matrix is not yet supported"))
}
