//! Han Xin entry point. The 28-bit function-information
//! block (mask, version, GF(16) RS(4 EC) protected) is detector/format-reader
//! territory; this wires already-corrected data codewords into the parser.

pub mod decoder;

use crate::barcode::{Barcode, BarcodeFormat};
use crate::character_set::CharacterSet;
use crate::error::Result;
use crate::text::TextMode;

pub fn decode(data_codewords: &[u8], hinted_charset: CharacterSet, text_mode: TextMode) -> Result<Barcode> {
    let result = decoder::decode(data_codewords, hinted_charset)?;
    Ok(Barcode::from_content(BarcodeFormat::HanXin, result.content, text_mode))
}
