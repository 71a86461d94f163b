//! MaxiCode entry point. Wires RS(64) correction over the primary and
//! secondary message blocks.
//!
//! `decode_from_matrix` is the missing piece: MaxiCode's hexagonal module
//! grid maps to codewords through a fixed ~866-entry coordinate table that
//! this crate doesn't carry (reproducing it from memory risks silently
//! scrambled output), so it reports `Unsupported` rather than guessing.
//! `decode` (the codeword-array entry point) carries the real primary/
//! secondary RS correction and the full Sets 0-4 free-message grammar.

pub mod decoder;

use crate::barcode::{Barcode, BarcodeFormat};
use crate::bit_matrix::BitMatrix;
use crate::character_set::CharacterSet;
use crate::error::{Error, Result};
use crate::galois_field::fields;
use crate::reed_solomon::rs_decode;
use crate::text::TextMode;

pub fn decode_from_matrix(_matrix: &BitMatrix, _text_mode: TextMode) -> Result<Barcode> {
    Err(Error::unsupported("MaxiCode: hexagonal codeword extraction from a bit matrix is not yet supported"))
}

pub fn decode(
    mode: u8,
    primary_raw: &[u8],
    secondary_raw: &[u8],
    secondary_num_ec: usize,
    hinted_charset: CharacterSet,
    text_mode: TextMode,
) -> Result<Barcode> {
    let field = fields::maxi_code_field_64();
    let mut block: Vec<i32> = secondary_raw.iter().map(|&b| b as i32).collect();
    if secondary_num_ec >= block.len() {
        return Err(Error::format("MaxiCode: too few codewords for the declared EC count"));
    }
    rs_decode(field, &mut block, secondary_num_ec, &[]).map_err(|_| Error::checksum("MaxiCode: RS correction failed"))?;
    let data_len = block.len() - secondary_num_ec;
    let secondary: Vec<u8> = block[..data_len].iter().map(|&v| v as u8).collect();

    let result = decoder::decode(mode, primary_raw, &secondary, hinted_charset)?;
    let mut barcode = Barcode::from_content(BarcodeFormat::MaxiCode, result.content, text_mode);
    barcode.metadata.version = Some(format!("mode{mode}"));
    Ok(barcode)
}
