//! Top-level decode entry point: dispatches a rectified bit matrix, tagged
//! with its claimed format, to the matching per-symbology reader, the way a
//! single `decode()` front door sits in front of per-codec state machines.

use crate::barcode::{Barcode, BarcodeFormat, ReaderOptions};
use crate::bit_matrix::BitMatrix;
use crate::error::{Error, Result};

/// Decode a single rectified bit matrix against one claimed format.
///
/// `crate::qr::decode` determines the real version (full QR vs. Micro-QR)
/// from the matrix's own module dimensions rather than trusting `format`, and
/// reports rectangular (rMQR) matrices as `Unsupported` rather than
/// misreading them against the square full-QR formula (rMQR's version table
/// is its own ISO/IEC 23941 annex this crate doesn't carry yet). Aztec,
/// MaxiCode, PDF417/Micro-PDF417, Han Xin, DotCode, and the Code 128 family
/// go through their own codeword-extractor entry points below.
pub fn decode_barcode(matrix: &BitMatrix, format: BarcodeFormat, options: &ReaderOptions) -> Result<Barcode> {
    let hinted = options.character_set.unwrap_or(crate::character_set::CharacterSet::Unknown);
    match format {
        BarcodeFormat::QRCode | BarcodeFormat::MicroQRCode | BarcodeFormat::RMQRCode => {
            crate::qr::decode(matrix, hinted, options.text_mode)
        }
        BarcodeFormat::DataMatrix => crate::datamatrix::decode(matrix, hinted, options.text_mode),
        BarcodeFormat::Aztec => crate::aztec::decode_from_matrix(matrix, hinted, options.text_mode),
        BarcodeFormat::MaxiCode => crate::maxicode::decode_from_matrix(matrix, options.text_mode),
        BarcodeFormat::DotCode => crate::dotcode::decode_from_matrix(matrix, hinted, options.text_mode),
        _ => Err(Error::unsupported(format!("{format:?}: decode from a bit matrix is not wired through decode_barcode"))),
    }
}

/// Try every format in `options.formats` (or all formats if unset) against
/// `matrix`, returning the first successful decode.
pub fn decode_barcode_any(matrix: &BitMatrix, options: &ReaderOptions) -> Result<Barcode> {
    let formats = if options.formats.0.is_empty() {
        crate::barcode::ALL_FORMATS.to_vec()
    } else {
        options.formats.0.clone()
    };
    let mut last_err = Error::NotFound;
    for format in formats {
        match decode_barcode(matrix, format, options) {
            Ok(barcode) => return Ok(barcode),
            Err(e) => last_err = e,
        }
    }
    Err(last_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::barcode::ReaderOptions;

    #[test]
    fn unsupported_format_reports_unsupported() {
        let matrix = BitMatrix::new(21, 21);
        let err = decode_barcode(&matrix, BarcodeFormat::Aztec, &ReaderOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Unsupported(_)));
    }
}
