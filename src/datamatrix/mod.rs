//! Data Matrix entry point: wires the L-shape codeword extractor, RS(256)
//! correction, and the codeword-stream parser together.

pub mod bit_layout;
pub mod decoder;
pub mod version;

use crate::barcode::{Barcode, BarcodeFormat};
use crate::bit_matrix::BitMatrix;
use crate::character_set::CharacterSet;
use crate::error::{Error, Result};
use crate::galois_field::fields;
use crate::reed_solomon::rs_decode;
use crate::text::TextMode;

pub fn decode(matrix: &BitMatrix, hinted_charset: CharacterSet, text_mode: TextMode) -> Result<Barcode> {
    let size = version::size_for_dimensions(matrix.height(), matrix.width())?;
    let raw = bit_layout::read_codewords(matrix);
    if raw.len() < size.total_codewords {
        return Err(Error::format("Data Matrix: insufficient codewords read from matrix"));
    }

    let field = fields::data_matrix_field_256();
    let mut block: Vec<i32> = raw[..size.block_total].iter().map(|&b| b as i32).collect();
    rs_decode(field, &mut block, size.block_total - size.block_data, &[])
        .map_err(|_| Error::checksum("Data Matrix: RS correction failed"))?;
    let data_codewords: Vec<u8> = block[..size.block_data].iter().map(|&v| v as u8).collect();

    let result = decoder::decode(&data_codewords, hinted_charset)?;
    let mut barcode = Barcode::from_content(BarcodeFormat::DataMatrix, result.content, text_mode);
    barcode.metadata.version = Some(format!("{}x{}", size.rows, size.cols));
    if let Some(info) = result.structured_append {
        barcode.sequence_info = info;
    }
    Ok(barcode)
}
