//! Code 16K: Code 128 rows stacked under a single mode byte in row 0 that
//! encodes GS1/AIM/Shift-on-start.

use super::decoder;
use crate::barcode::{Barcode, BarcodeFormat};
use crate::character_set::CharacterSet;
use crate::content::Content;
use crate::error::{Error, Result};
use crate::symbology_identifier::{AiFlag, SymbologyIdentifier};
use crate::text::TextMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeByte {
    Plain,
    Gs1,
    Aim,
}

fn mode_from_byte(b: u8) -> ModeByte {
    match b {
        1 => ModeByte::Gs1,
        2 => ModeByte::Aim,
        _ => ModeByte::Plain,
    }
}

/// Decode a Code 16K stack: row 0's leading codeword is the mode byte, every
/// row after uses the ordinary Code 128 code-set state machine.
pub fn decode(rows: &[Vec<u8>], hinted_charset: CharacterSet, text_mode: TextMode) -> Result<Barcode> {
    let (first, remaining) = rows.split_first().ok_or_else(|| Error::format("Code 16K: no rows"))?;
    let (&mode_byte, first_rest) = first.split_first().ok_or_else(|| Error::format("Code 16K: empty row 0"))?;
    let mode = mode_from_byte(mode_byte);

    let ai_flag = match mode {
        ModeByte::Gs1 => AiFlag::Gs1,
        ModeByte::Aim => AiFlag::Aim,
        ModeByte::Plain => AiFlag::None,
    };

    let mut content = Content::new(hinted_charset, CharacterSet::ISO8859_1);
    let (&start, row0_codewords) = first_rest.split_first().ok_or_else(|| Error::format("Code 16K: row 0 missing start code"))?;
    let decoded = decoder::decode(row0_codewords, start, hinted_charset)?;
    content.append_bytes(decoded.content.raw_bytes())?;

    for row in remaining {
        let (&start, rest) = row.split_first().ok_or_else(|| Error::format("Code 16K: empty row"))?;
        let decoded = decoder::decode(rest, start, hinted_charset)?;
        content.append_bytes(decoded.content.raw_bytes())?;
    }

    if ai_flag == AiFlag::Gs1 {
        content.mark_gs1();
    }
    content.symbology = SymbologyIdentifier::new('K', match ai_flag {
        AiFlag::Gs1 => 1,
        AiFlag::Aim => 2,
        AiFlag::None => 0,
    }, ai_flag);
    content.finalize()?;

    Ok(Barcode::from_content(BarcodeFormat::Code16K, content, text_mode))
}
