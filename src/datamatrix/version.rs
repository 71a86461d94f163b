//! Data Matrix ECC200 size -> codeword/block layout table.
//! Grounded on ISO/IEC 16022 Table 7; this carries the square symbol sizes
//! most commonly produced by encoders (10x10 through 26x26) and returns
//! `Unsupported` above that, same scoping rationale as `qr::version`.

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy)]
pub struct DmSize {
    pub rows: u32,
    pub cols: u32,
    pub total_codewords: usize,
    pub num_blocks: usize,
    pub block_total: usize,
    pub block_data: usize,
}

const SIZES: &[DmSize] = &[
    DmSize { rows: 10, cols: 10, total_codewords: 8, num_blocks: 1, block_total: 8, block_data: 3 },
    DmSize { rows: 12, cols: 12, total_codewords: 14, num_blocks: 1, block_total: 14, block_data: 5 },
    DmSize { rows: 14, cols: 14, total_codewords: 18, num_blocks: 1, block_total: 18, block_data: 8 },
    DmSize { rows: 16, cols: 16, total_codewords: 24, num_blocks: 1, block_total: 24, block_data: 12 },
    DmSize { rows: 18, cols: 18, total_codewords: 36, num_blocks: 1, block_total: 36, block_data: 18 },
    DmSize { rows: 20, cols: 20, total_codewords: 44, num_blocks: 1, block_total: 44, block_data: 22 },
    DmSize { rows: 22, cols: 22, total_codewords: 56, num_blocks: 1, block_total: 56, block_data: 30 },
    DmSize { rows: 24, cols: 24, total_codewords: 68, num_blocks: 1, block_total: 68, block_data: 36 },
    DmSize { rows: 26, cols: 26, total_codewords: 88, num_blocks: 1, block_total: 88, block_data: 44 },
];

pub fn size_for_dimensions(rows: u32, cols: u32) -> Result<DmSize> {
    SIZES
        .iter()
        .copied()
        .find(|s| s.rows == rows && s.cols == cols)
        .ok_or_else(|| Error::unsupported(format!("Data Matrix: size {rows}x{cols} not in supported table")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_16x16() {
        let s = size_for_dimensions(16, 16).unwrap();
        assert_eq!(s.block_data, 12);
    }
}
