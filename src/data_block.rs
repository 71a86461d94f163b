//! Generic round-robin data-block deinterleaver shared by every symbology
//! whose version table gives `{num_blocks, block_size, data_size}` groups.
//! QR, Data Matrix, Han Xin and MaxiCode all instantiate this the same way
//! zxing-cpp's `Deinterleave`/`GetDataBlocks` do.

use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct DataBlock {
    pub num_data_codewords: usize,
    pub codewords: Vec<u8>, // data followed by EC
}

/// Split `all_codewords` (symbol reading order) into blocks per `groups`, then
/// run Reed-Solomon correction on each block via `correct`. `groups` entries
/// are `(num_blocks, block_total, block_data)`. Returns the reassembled,
/// corrected data-codeword stream.
pub fn deinterleave_and_correct(
    all_codewords: &[u8],
    groups: &[(usize, usize, usize)],
    mut correct: impl FnMut(&mut [i32], usize) -> Result<()>,
) -> Result<Vec<u8>> {
    let total_blocks: usize = groups.iter().map(|g| g.0).sum();
    let mut blocks: Vec<DataBlock> = Vec::with_capacity(total_blocks);
    for &(num_blocks, block_total, block_data) in groups {
        for _ in 0..num_blocks {
            blocks.push(DataBlock { num_data_codewords: block_data, codewords: vec![0u8; block_total] });
        }
    }

    let max_data = blocks.iter().map(|b| b.num_data_codewords).max().unwrap_or(0);
    let mut cursor = 0usize;
    for i in 0..max_data {
        for block in blocks.iter_mut() {
            if i < block.num_data_codewords {
                block.codewords[i] = *all_codewords.get(cursor).ok_or_else(|| {
                    Error::format("data block: codeword stream exhausted during data interleave")
                })?;
                cursor += 1;
            }
        }
    }
    let max_ec = blocks.iter().map(|b| b.codewords.len() - b.num_data_codewords).max().unwrap_or(0);
    for i in 0..max_ec {
        for block in blocks.iter_mut() {
            let ec_len = block.codewords.len() - block.num_data_codewords;
            if i < ec_len {
                let pos = block.num_data_codewords + i;
                block.codewords[pos] = *all_codewords.get(cursor).ok_or_else(|| {
                    Error::format("data block: codeword stream exhausted during EC interleave")
                })?;
                cursor += 1;
            }
        }
    }

    let mut result = Vec::with_capacity(blocks.iter().map(|b| b.num_data_codewords).sum());
    for block in blocks.iter_mut() {
        let num_ec = block.codewords.len() - block.num_data_codewords;
        let mut as_i32: Vec<i32> = block.codewords.iter().map(|&b| b as i32).collect();
        correct(&mut as_i32, num_ec)?;
        for (i, &v) in as_i32.iter().enumerate().take(block.num_data_codewords) {
            block.codewords[i] = v as u8;
        }
        result.extend_from_slice(&block.codewords[..block.num_data_codewords]);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_block_passthrough() {
        let codewords: Vec<u8> = (0..10u8).collect();
        let out = deinterleave_and_correct(&codewords, &[(1, 10, 7)], |_cw, _ec| Ok(())).unwrap();
        assert_eq!(out, &codewords[..7]);
    }

    #[test]
    fn two_equal_blocks_round_robin() {
        // data: block0=[0,2,4], block1=[1,3,5]; ec: block0=[6,8], block1=[7,9]
        let codewords: Vec<u8> = (0..10u8).collect();
        let out =
            deinterleave_and_correct(&codewords, &[(2, 5, 3)], |_cw, _ec| Ok(())).unwrap();
        assert_eq!(out, vec![0, 2, 4, 1, 3, 5]);
    }
}
