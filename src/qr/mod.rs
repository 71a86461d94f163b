//! QR Code family entry point, wiring format/version reading, codeword
//! extraction, RS correction, and bit-stream parsing together.

pub mod bit_matrix_parser;
pub mod decoder;
pub mod version;

use crate::barcode::{Barcode, BarcodeFormat};
use crate::bit_matrix::BitMatrix;
use crate::character_set::CharacterSet;
use crate::data_block::deinterleave_and_correct;
use crate::error::{Error, Result};
use crate::galois_field::fields;
use crate::text::TextMode;

use self::decoder::decode_with_mirror_retry;
use self::version::Version;

pub fn decode(matrix: &BitMatrix, hinted_charset: CharacterSet, text_mode: TextMode) -> Result<Barcode> {
    let (decoded, mirrored) = decode_with_mirror_retry(matrix, |m| decode_once(m, hinted_charset))?;

    let format = if decoded.is_micro { BarcodeFormat::MicroQRCode } else { BarcodeFormat::QRCode };
    let mut barcode = Barcode::from_content(format, decoded.stream.content, text_mode);
    barcode.is_mirrored = mirrored;
    barcode.metadata.ec_level = Some(decoded.ec_level.as_str().to_string());
    barcode.metadata.version = Some(decoded.version_number.to_string());
    if let Some(sai) = decoded.stream.structured_append {
        barcode.sequence_info = sai;
    }
    Ok(barcode)
}

struct DecodeOnceResult {
    stream: decoder::DecodedBitStream,
    is_micro: bool,
    version_number: u32,
    ec_level: version::EcLevel,
}

fn decode_once(matrix: &BitMatrix, hinted_charset: CharacterSet) -> Result<DecodeOnceResult> {
    let version =
        Version::from_dimension(matrix.width(), matrix.height()).map_err(|_| Error::NotFound)?;
    let format_info = if version.is_micro {
        bit_matrix_parser::read_micro_format_info(matrix)?
    } else {
        bit_matrix_parser::read_format_info(matrix)?
    };
    let raw_codewords = bit_matrix_parser::read_codewords(matrix, &version, format_info.mask)?;

    let groups = version.ec_blocks(format_info.ec_level)?;
    let group_spec: Vec<(usize, usize, usize)> = groups
        .iter()
        .map(|g| (g.num_blocks, g.block_total_codewords, g.block_data_codewords))
        .collect();

    let field = fields::qr_code_field_256();
    let data_codewords = deinterleave_and_correct(&raw_codewords, &group_spec, |cw, num_ec| {
        crate::reed_solomon::rs_decode(field, cw, num_ec, &[]).map_err(|_| Error::checksum("QR: RS correction failed"))
    })?;

    let stream = decoder::decode_bitstream(&data_codewords, &version, format_info.ec_level, hinted_charset)?;
    Ok(DecodeOnceResult {
        stream,
        is_micro: version.is_micro,
        version_number: version.number,
        ec_level: format_info.ec_level,
    })
}
