//! Micro-PDF417: same codeword-stream grammar as PDF417 (`decoder::decode`),
//! over the 8-bit/9-cluster codeword space instead of PDF417's 11-bit/6-cluster
//! one. Cluster validation against the row's expected `{0,3,6}` cycle happens
//! during codeword extraction, outside this module.

use super::decoder;
use crate::barcode::{Barcode, BarcodeFormat};
use crate::character_set::CharacterSet;
use crate::error::Result;
use crate::text::TextMode;

pub fn decode(codewords: &[u32], hinted_charset: CharacterSet, text_mode: TextMode) -> Result<Barcode> {
    let result = decoder::decode(codewords, hinted_charset)?;
    let mut barcode = Barcode::from_content(BarcodeFormat::MicroPdf417, result.content, text_mode);
    if let Some(info) = result.structured_append {
        barcode.sequence_info = info;
    }
    Ok(barcode)
}
