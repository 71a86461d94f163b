//! PDF417 and Micro-PDF417 entry points.

pub mod decoder;
pub mod micro;

use crate::barcode::{Barcode, BarcodeFormat};
use crate::character_set::CharacterSet;
use crate::error::Result;
use crate::text::TextMode;

/// Decode a full-size PDF417 symbol from its already row-assembled, cluster-
/// validated codeword stream.
pub fn decode(codewords: &[u32], hinted_charset: CharacterSet, text_mode: TextMode) -> Result<Barcode> {
    let result = decoder::decode(codewords, hinted_charset)?;
    let mut barcode = Barcode::from_content(BarcodeFormat::Pdf417, result.content, text_mode);
    if let Some(info) = result.structured_append {
        barcode.sequence_info = info;
    }
    Ok(barcode)
}
