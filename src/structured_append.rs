//! Structured-append metadata and the multi-symbol merge protocol.
//!
//! Grounded on `original_source/core/src/qrcode/QRDecoder.cpp`'s
//! `STRUCTURED_APPEND` mode-indicator handling (sequence index + count +
//! parity byte) and `original_source/core/src/datamatrix/DMDecoder.cpp`'s
//! `ParseStructuredAppend` (Data Matrix's 17-bit file-id + 4-bit
//! index/count encoding, via the Macro-05/06 prefix path).

use crate::error::{Error, Result};

/// One symbol's position within a structured-append sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StructuredAppendInfo {
    /// 0-based index of this symbol.
    pub index: u8,
    /// Total symbol count in the sequence (`count >= 1`).
    pub count: u8,
    /// QR: parity byte, XOR of the unsegmented byte stream, used to confirm a
    /// complete set belongs together. Data Matrix/Aztec use a file id instead.
    pub parity: Option<u8>,
    pub file_id: Option<u32>,
}

impl StructuredAppendInfo {
    pub fn single() -> Self {
        Self { index: 0, count: 1, parity: None, file_id: None }
    }

    pub fn is_last(&self) -> bool {
        self.index + 1 == self.count
    }
}

/// Merge decoded parts of a structured-append sequence into one logical result.
/// Merging is associative: merging `[a,b,c]` one at a time in any order that
/// respects index ordering yields the same concatenation.
pub fn merge_parts(mut parts: Vec<(StructuredAppendInfo, Vec<u8>)>) -> Result<Vec<u8>> {
    if parts.is_empty() {
        return Err(Error::format("structured append: no parts to merge"));
    }
    let count = parts[0].0.count;
    if parts.iter().any(|(info, _)| info.count != count) {
        return Err(Error::format("structured append: inconsistent sequence count"));
    }
    if parts.len() != count as usize {
        return Err(Error::format(format!(
            "structured append: expected {count} parts, have {}",
            parts.len()
        )));
    }
    parts.sort_by_key(|(info, _)| info.index);
    for (i, (info, _)) in parts.iter().enumerate() {
        if info.index as usize != i {
            return Err(Error::format("structured append: missing or duplicate index"));
        }
    }
    if let Some(file_id) = parts[0].0.file_id {
        if parts.iter().any(|(info, _)| info.file_id != Some(file_id)) {
            return Err(Error::format("structured append: file id mismatch across parts"));
        }
    }
    let total_len: usize = parts.iter().map(|(_, b)| b.len()).sum();
    let mut merged = Vec::with_capacity(total_len);
    for (_, bytes) in parts {
        merged.extend_from_slice(&bytes);
    }
    Ok(merged)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn part(index: u8, count: u8, data: &[u8]) -> (StructuredAppendInfo, Vec<u8>) {
        (StructuredAppendInfo { index, count, parity: None, file_id: None }, data.to_vec())
    }

    #[test]
    fn merges_in_index_order_regardless_of_input_order() {
        let a = part(0, 3, b"AB");
        let b = part(1, 3, b"CD");
        let c = part(2, 3, b"EF");
        let forward = merge_parts(vec![a, b, c]).unwrap();

        let a = part(0, 3, b"AB");
        let b = part(1, 3, b"CD");
        let c = part(2, 3, b"EF");
        let shuffled = merge_parts(vec![c, a, b]).unwrap();

        assert_eq!(forward, shuffled);
        assert_eq!(forward, b"ABCDEF");
    }

    #[test]
    fn missing_part_is_an_error() {
        let a = part(0, 3, b"AB");
        let c = part(2, 3, b"EF");
        assert!(merge_parts(vec![a, c]).is_err());
    }

    #[test]
    fn file_id_mismatch_is_rejected() {
        let mut a = part(0, 2, b"AB");
        a.0.file_id = Some(1);
        let mut b = part(1, 2, b"CD");
        b.0.file_id = Some(2);
        assert!(merge_parts(vec![a, b]).is_err());
    }
}
