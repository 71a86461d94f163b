//! DotCode entry point. Removes the byte-0 additive mask, splits the
//! remaining codewords into round-robin RS blocks, corrects each, and wires
//! the reassembled data into the bitstream parser.
//!
//! The dot-grid module geometry itself (odd/even row dot positions -> raw
//! codeword values) is not modeled here: reproducing the AIM DotCode 9-bit
//! pattern lookup from memory risks silently wrong bit extraction, so
//! `decode_from_matrix` reports `Unsupported` rather than guessing at it.
//! `decode` (the codeword-array entry point) carries the real mask-removal
//! and deinterleave fix.

pub mod decoder;

use crate::barcode::{Barcode, BarcodeFormat};
use crate::bit_matrix::BitMatrix;
use crate::character_set::CharacterSet;
use crate::data_block::deinterleave_and_correct;
use crate::error::{Error, Result};
use crate::galois_field::fields;
use crate::reed_solomon::rs_decode;
use crate::text::TextMode;

/// One of 3 additive weight schemes (factors 3, 7, 17) selected by the
/// mask codeword (byte 0), applied modulo 113 to the rest of the stream.
const MASK_WEIGHTS: [u32; 3] = [3, 7, 17];

/// Decode a DotCode symbol from its raw codeword stream (mask codeword
/// included at index 0).
pub fn decode(raw_codewords: &[u8], num_ec: usize, hinted_charset: CharacterSet, text_mode: TextMode) -> Result<Barcode> {
    let unmasked = remove_mask(raw_codewords)?;
    if unmasked.len() <= num_ec {
        return Err(Error::format("DotCode: too few codewords for the declared EC count"));
    }
    let step = (unmasked.len() + 1).div_ceil(112); // GF(113) - 1 = 112
    let groups = even_groups(step, unmasked.len(), num_ec)?;

    let field = fields::dot_code_field_113();
    // Open question resolved: any RS correction failure in DotCode's binary-
    // compatible path is surfaced uniformly as Checksum, not Format.
    let data = deinterleave_and_correct(&unmasked, &groups, |cw, ec| {
        rs_decode(field, cw, ec, &[]).map_err(|_| Error::checksum("DotCode: RS correction failed"))
    })?;

    let result = decoder::decode(&data, hinted_charset)?;
    let mut barcode = Barcode::from_content(BarcodeFormat::DotCode, result.content, text_mode);
    if let Some(info) = result.structured_append {
        barcode.sequence_info = info;
    }
    Ok(barcode)
}

pub fn decode_from_matrix(_matrix: &BitMatrix, _hinted_charset: CharacterSet, _text_mode: TextMode) -> Result<Barcode> {
    Err(Error::unsupported("DotCode: dot-grid codeword extraction from a bit matrix is not yet supported"))
}

/// Undo the byte-0 additive mask: codeword `i` (1-based within the masked
/// remainder) had `(weight * i) mod 113` added; strip it back off.
fn remove_mask(raw: &[u8]) -> Result<Vec<u8>> {
    let mask_cw = *raw.first().ok_or_else(|| Error::format("DotCode: empty codeword stream"))?;
    let weight = MASK_WEIGHTS[mask_cw as usize % MASK_WEIGHTS.len()];
    Ok(raw[1..]
        .iter()
        .enumerate()
        .map(|(i, &cw)| {
            let w = (weight * (i as u32 + 1)) % 113;
            ((cw as u32 + 113 - w) % 113) as u8
        })
        .collect())
}

/// Split `total_codewords` into `step` round-robin RS blocks with a uniform
/// per-block EC length and short blocks first, mirroring QR/Data Matrix's
/// block-group convention (spec section 4.4).
fn even_groups(step: usize, total_codewords: usize, total_ec: usize) -> Result<Vec<(usize, usize, usize)>> {
    if step == 0 || total_ec % step != 0 {
        return Err(Error::format("DotCode: EC codewords do not split evenly across blocks"));
    }
    let ec_per_block = total_ec / step;
    let total_data = total_codewords - total_ec;
    let base_data = total_data / step;
    let extra = total_data % step;
    let mut groups = Vec::new();
    let short_blocks = step - extra;
    if short_blocks > 0 {
        groups.push((short_blocks, base_data + ec_per_block, base_data));
    }
    if extra > 0 {
        groups.push((extra, base_data + 1 + ec_per_block, base_data + 1));
    }
    Ok(groups)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_zero_is_identity_weight_scheme() {
        // weight=3 (mask_cw%3==0); codeword at i=1 gets +3 mod 113.
        let masked = [0u8, (65 + 3) % 113];
        let unmasked = remove_mask(&masked).unwrap();
        assert_eq!(unmasked, vec![65]);
    }

    #[test]
    fn even_groups_splits_remainder_into_larger_blocks() {
        let groups = even_groups(3, 10, 3).unwrap();
        let total_blocks: usize = groups.iter().map(|g| g.0).sum();
        assert_eq!(total_blocks, 3);
        let total_cw: usize = groups.iter().map(|g| g.0 * g.1).sum();
        assert_eq!(total_cw, 10);
    }
}
