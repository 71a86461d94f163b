//! Codablock-F: Code 128 rows stacked with a row indicator codeword and a
//! pair of row/column checksums `K1`/`K2`.

use super::decoder;
use crate::barcode::{Barcode, BarcodeFormat};
use crate::character_set::CharacterSet;
use crate::content::Content;
use crate::error::{Error, Result};
use crate::text::TextMode;

/// One decoded Codablock-F row: its position in the stack and the codewords
/// carried in its data portion (row indicator and checksums already stripped).
pub struct Row {
    pub index: u8,
    pub total_rows: u8,
    pub codewords: Vec<u8>,
}

/// Decode a full Codablock-F stack, validating `K1`/`K2` and concatenating
/// each row's payload in index order.
pub fn decode(rows: &[Vec<u8>], hinted_charset: CharacterSet, text_mode: TextMode) -> Result<Barcode> {
    if rows.is_empty() {
        return Err(Error::format("Codablock-F: no rows"));
    }
    let mut parsed: Vec<Row> = Vec::with_capacity(rows.len());
    for row in rows {
        parsed.push(parse_row(row)?);
    }
    parsed.sort_by_key(|r| r.index);
    for (i, r) in parsed.iter().enumerate() {
        if r.index as usize != i {
            return Err(Error::format("Codablock-F: missing or duplicate row index"));
        }
        if r.total_rows as usize != parsed.len() {
            return Err(Error::format("Codablock-F: inconsistent row count across stack"));
        }
    }

    let mut content = Content::new(hinted_charset, CharacterSet::ISO8859_1);
    for row in &parsed {
        let (&start, rest) = row
            .codewords
            .split_first()
            .ok_or_else(|| Error::format("Codablock-F: empty row"))?;
        let decoded = decoder::decode(rest, start, hinted_charset)?;
        content.append_bytes(decoded.content.raw_bytes())?;
    }
    content.finalize()?;

    let barcode = Barcode::from_content(BarcodeFormat::CodablockF, content, text_mode);
    Ok(barcode)
}

/// Strip the row indicator (Code-Set C pair: `(row_index, total_rows)`) and the
/// trailing `K1`/`K2` checksums, validating both against the row's codewords.
fn parse_row(row: &[u8]) -> Result<Row> {
    if row.len() < 4 {
        return Err(Error::format("Codablock-F: row too short"));
    }
    let indicator = row[1]; // first data codeword after Start-C
    let index = indicator / 30; // ISO/IEC 15417 Annex F row-indicator packing
    let total_rows = (indicator % 30) + 2;

    let data = &row[2..row.len() - 2];
    let (k1_expected, k2_expected) = (row[row.len() - 2], row[row.len() - 1]);
    let (k1, k2) = row_checksums(indicator, data);
    if k1 != k1_expected || k2 != k2_expected {
        return Err(Error::checksum("Codablock-F: row checksum mismatch"));
    }

    let mut codewords = vec![row[0]]; // keep the start code for the shared decoder
    codewords.extend_from_slice(data);
    Ok(Row { index, total_rows, codewords })
}

/// Weighted mod-86 row checksums (ISO/IEC 15417 Annex F `K1`/`K2`).
fn row_checksums(indicator: u8, data: &[u8]) -> (u8, u8) {
    let mut k1_sum: u32 = indicator as u32;
    let mut k2_sum: u32 = 2 * indicator as u32;
    for (i, &cw) in data.iter().enumerate() {
        let weight = (i + 2) as u32;
        k1_sum += weight * cw as u32;
        k2_sum += (weight + 1) * cw as u32;
    }
    ((k1_sum % 86) as u8, (k2_sum % 86) as u8)
}
