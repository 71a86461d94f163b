//! Code 128 family: the base symbology plus the two row-stacked variants
//! that reuse its code-set state machine, Codablock-F and Code 16K.

pub mod codablockf;
pub mod code16k;
pub mod decoder;

use crate::barcode::{Barcode, BarcodeFormat};
use crate::character_set::CharacterSet;
use crate::error::Result;
use crate::text::TextMode;

/// Decode a single Code 128 row already reduced to codeword values, including
/// the leading start code and trailing stop code.
pub fn decode(codewords: &[u8], hinted_charset: CharacterSet, text_mode: TextMode) -> Result<Barcode> {
    let (&start, rest) = codewords
        .split_first()
        .ok_or_else(|| crate::error::Error::format("Code 128: empty codeword stream"))?;
    let result = decoder::decode(rest, start, hinted_charset)?;
    let mut barcode = Barcode::from_content(BarcodeFormat::Code128, result.content, text_mode);
    barcode.metadata.reader_init = result.reader_init;
    Ok(barcode)
}
