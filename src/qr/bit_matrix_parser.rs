//! QR format-info reading and zigzag codeword extraction with data-mask
//! application. Grounded on the matrix-walking algorithm
//! described in ISO/IEC 18004 §7.7.3 (the same traversal zxing-cpp's
//! `BitMatrixParser::ReadCodewords` performs): function-pattern modules
//! (finders, separators, timing strips, alignment patterns, format-info
//! strips, the fixed dark module) are skipped; the rest are read bottom-up
//! in two-column zigzag strips, right to left, ignoring the vertical timing
//! column.

use crate::bit_matrix::BitMatrix;
use crate::error::{Error, Result};

use super::version::{EcLevel, Version};

/// Centers of alignment-pattern modules per version (versions 2-6; this
/// table mirrors ISO/IEC 18004 Table E.1 for the supported version range).
fn alignment_centers(version: u32) -> &'static [u32] {
    match version {
        1 => &[],
        2 => &[6, 18],
        3 => &[6, 22],
        4 => &[6, 26],
        5 => &[6, 30],
        6 => &[6, 34],
        _ => &[],
    }
}

fn is_function_module(version: &Version, x: u32, y: u32) -> bool {
    if version.is_micro {
        return is_micro_function_module(x, y);
    }
    let n = version.modules_per_side;
    // Finder patterns + separators (8x8 at each of three corners).
    let in_corner = |x: u32, y: u32| x < 8 && y < 8;
    if in_corner(x, y) || in_corner(n - 1 - x, y) || in_corner(x, n - 1 - y) {
        return true;
    }
    // Timing patterns.
    if x == 6 || y == 6 {
        return true;
    }
    // Dark module, fixed at (8, 4*version+9).
    if x == 8 && y == 4 * version.number + 9 {
        return true;
    }
    // Format info strips around the top-left finder plus the split strips
    // near the bottom-left / top-right finders.
    if (x == 8 && (y < 9 || y > n - 8)) || (y == 8 && (x < 9 || x > n - 8)) {
        return true;
    }
    // Alignment patterns: 5x5 blocks centered at each (cx, cy) combination,
    // excluding ones that overlap a finder pattern corner.
    let centers = alignment_centers(version.number);
    for &cy in centers {
        for &cx in centers {
            if (cx == 6 && cy == 6) || (cx == 6 && cy == n - 7) || (cx == n - 7 && cy == 6) {
                continue;
            }
            if x.abs_diff(cx) <= 2 && y.abs_diff(cy) <= 2 {
                return true;
            }
        }
    }
    false
}

/// Micro-QR has a single finder pattern (the top-left 8x8 corner, separator
/// included) and no alignment patterns; the timing pattern and the 15-bit
/// format-info strip both run along row 8 and column 8 since there's no room
/// for a separate reference column like full QR's fixed column/row 6.
fn is_micro_function_module(x: u32, y: u32) -> bool {
    (x < 8 && y < 8) || x == 8 || y == 8
}

/// The data-mask predicate for mask patterns 0-7 (ISO/IEC 18004 Table 10).
fn mask_bit(mask: u8, x: u32, y: u32) -> bool {
    let (i, j) = (y as i64, x as i64);
    match mask {
        0 => (i + j) % 2 == 0,
        1 => i % 2 == 0,
        2 => j % 3 == 0,
        3 => (i + j) % 3 == 0,
        4 => (i / 2 + j / 3) % 2 == 0,
        5 => (i * j) % 2 + (i * j) % 3 == 0,
        6 => ((i * j) % 2 + (i * j) % 3) % 2 == 0,
        7 => ((i + j) % 2 + (i * j) % 3) % 2 == 0,
        _ => false,
    }
}

/// The 32 valid 15-bit format-info codewords (BCH(15,5), generator 0x537),
/// indexed `[ec_level_index][mask]`, values as they appear in the matrix
/// (the 0x5412 XOR mask from ISO/IEC 18004 §8.9 is already folded in).
const FORMAT_INFO_TABLE: [[u32; 8]; 4] = [
    // M = 0b00
    [0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0],
    // L = 0b01
    [0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976],
    // H = 0b10
    [0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B],
    // Q = 0b11
    [0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED],
];

/// Micro-QR's 4 data masks reuse full QR's mask functions 1, 4, 6 and 7
/// (ISO/IEC 18004 Table 13's "data mask pattern reference" column), applied
/// over the whole symbol the same way.
fn micro_mask_bit(mask_ref: u8, x: u32, y: u32) -> bool {
    const FULL_MASK_FOR_REF: [u8; 4] = [1, 4, 6, 7];
    mask_bit(FULL_MASK_FOR_REF[mask_ref as usize & 0x3], x, y)
}

fn hamming_distance(a: u32, b: u32) -> u32 {
    (a ^ b).count_ones()
}

/// BCH(15,5) remainder for `data` (5 bits) against generator polynomial
/// 0x537 (degree 10) — the same code ISO/IEC 18004 uses for both full QR's
/// and Micro-QR's format info, differing only in the final XOR mask.
fn bch15_5_remainder(data: u32) -> u32 {
    let mut value = data << 10;
    for i in (10..15).rev() {
        if value & (1 << i) != 0 {
            value ^= 0x537 << (i - 10);
        }
    }
    value
}

fn bch15_5_codeword(data: u32, xor_mask: u32) -> u32 {
    ((data << 10) | bch15_5_remainder(data)) ^ xor_mask
}

/// Micro-QR "symbol number" (ISO/IEC 18004 Table 12): the 3-bit field folded
/// into format info that names both the version and its EC level, since
/// Micro-QR has no separate 2-bit EC-level field the way full QR does.
const MICRO_SYMBOL_NUMBERS: [(u32, EcLevel); 8] = [
    (1, EcLevel::L), // M1: carries no real EC level; L is a placeholder, `ec_blocks` rejects M1 regardless
    (2, EcLevel::L),
    (2, EcLevel::M),
    (3, EcLevel::L),
    (3, EcLevel::M),
    (4, EcLevel::L),
    (4, EcLevel::M),
    (4, EcLevel::Q),
];

const MICRO_FORMAT_INFO_XOR_MASK: u32 = 0x4445;

pub struct FormatInfo {
    pub ec_level: EcLevel,
    pub mask: u8,
}

/// Read both format-info copies, correcting up to 3 bit errors by nearest
/// match against `FORMAT_INFO_TABLE` (mirrors zxing-cpp's dual-copy + best-match strategy).
pub fn read_format_info(matrix: &BitMatrix) -> Result<FormatInfo> {
    let n = matrix.width();
    let mut bits_a = 0u32;
    for x in 0..=5 {
        bits_a = (bits_a << 1) | matrix.get(x, 8) as u32;
    }
    bits_a = (bits_a << 1) | matrix.get(7, 8) as u32;
    bits_a = (bits_a << 1) | matrix.get(8, 8) as u32;
    bits_a = (bits_a << 1) | matrix.get(8, 7) as u32;
    for y in (0..=5).rev() {
        bits_a = (bits_a << 1) | matrix.get(8, y) as u32;
    }

    let mut bits_b = 0u32;
    for y in (n - 7..n).rev() {
        bits_b = (bits_b << 1) | matrix.get(8, y) as u32;
    }
    for x in (n - 8..n).rev() {
        bits_b = (bits_b << 1) | matrix.get(x, 8) as u32;
    }

    let mut best: Option<(u32, EcLevel, u8)> = None;
    for (ec_idx, row) in FORMAT_INFO_TABLE.iter().enumerate() {
        for (mask, &expected) in row.iter().enumerate() {
            let d_a = hamming_distance(bits_a, expected);
            let d_b = hamming_distance(bits_b, expected);
            let d = d_a.min(d_b);
            let ec_level = match ec_idx as u32 {
                0 => EcLevel::M,
                1 => EcLevel::L,
                2 => EcLevel::H,
                3 => EcLevel::Q,
                _ => unreachable!(),
            };
            if best.map(|(bd, _, _)| d < bd).unwrap_or(true) {
                best = Some((d, ec_level, mask as u8));
            }
        }
    }
    match best {
        Some((d, ec_level, mask)) if d <= 3 => Ok(FormatInfo { ec_level, mask }),
        _ => Err(Error::format("QR: could not recover format info")),
    }
}

/// Read Micro-QR's single 15-bit format-info copy (column 8 rows 1-8, then
/// row 8 columns 1-8) and recover `(ec_level, mask)` by nearest match against
/// every symbol-number codeword; `decode_once` independently derives the
/// version from the symbol's module dimension, so only `ec_level` and `mask`
/// from this search are used.
pub fn read_micro_format_info(matrix: &BitMatrix) -> Result<FormatInfo> {
    let mut raw = 0u32;
    for y in (1..=8).rev() {
        raw = (raw << 1) | matrix.get(8, y) as u32;
    }
    for x in 1..=8 {
        raw = (raw << 1) | matrix.get(x, 8) as u32;
    }

    let mut best: Option<(u32, EcLevel, u8)> = None;
    for (symbol_number, (_version_number, ec_level)) in MICRO_SYMBOL_NUMBERS.iter().enumerate() {
        for mask in 0u8..4 {
            let data5 = ((symbol_number as u32) << 2) | mask as u32;
            let expected = bch15_5_codeword(data5, MICRO_FORMAT_INFO_XOR_MASK);
            let d = hamming_distance(raw, expected);
            if best.map(|(bd, _, _)| d < bd).unwrap_or(true) {
                best = Some((d, *ec_level, mask));
            }
        }
    }
    match best {
        Some((d, ec_level, mask)) if d <= 3 => Ok(FormatInfo { ec_level, mask }),
        _ => Err(Error::format("QR: could not recover Micro-QR format info")),
    }
}

/// Extract masked-and-unXORed codewords in standard zigzag reading order.
pub fn read_codewords(matrix: &BitMatrix, version: &Version, mask: u8) -> Result<Vec<u8>> {
    let n = version.modules_per_side;
    let timing_col = if version.is_micro { 8 } else { 6 };
    let mut bits: Vec<bool> = Vec::with_capacity(version.total_codewords * 8);
    let mut x = n - 1;
    let mut upward = true;
    loop {
        if x == timing_col {
            x -= 1; // skip the vertical timing column
        }
        for row_step in 0..n {
            let y = if upward { n - 1 - row_step } else { row_step };
            for dx in 0..2 {
                let cx = x - dx;
                if is_function_module(version, cx, y) {
                    continue;
                }
                let value = if version.is_micro {
                    matrix.get(cx, y) ^ micro_mask_bit(mask, cx, y)
                } else {
                    matrix.get(cx, y) ^ mask_bit(mask, cx, y)
                };
                bits.push(value);
            }
        }
        upward = !upward;
        if x < 2 {
            break;
        }
        x -= 2;
    }

    let mut bytes = Vec::with_capacity(version.total_codewords);
    for chunk in bits.chunks(8) {
        if chunk.len() < 8 {
            break;
        }
        let mut b = 0u8;
        for &bit in chunk {
            b = (b << 1) | bit as u8;
        }
        bytes.push(b);
    }
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_0_checkerboard() {
        assert!(mask_bit(0, 0, 0));
        assert!(!mask_bit(0, 1, 0));
    }

    #[test]
    fn alignment_centers_version_2() {
        assert_eq!(alignment_centers(2), &[6, 18]);
    }

    #[test]
    fn bch15_5_reproduces_full_qr_format_info_table() {
        // ec_idx ordering here matches FORMAT_INFO_TABLE's (M, L, H, Q) rows.
        for (ec_idx, row) in FORMAT_INFO_TABLE.iter().enumerate() {
            for (mask, &expected) in row.iter().enumerate() {
                let data5 = ((ec_idx as u32) << 3) | mask as u32;
                assert_eq!(bch15_5_codeword(data5, 0x5412), expected, "ec_idx={ec_idx} mask={mask}");
            }
        }
    }

    #[test]
    fn micro_mask_ref_maps_to_full_mask_functions() {
        assert_eq!(micro_mask_bit(0, 3, 0), mask_bit(1, 3, 0));
        assert_eq!(micro_mask_bit(3, 5, 2), mask_bit(7, 5, 2));
    }
}
