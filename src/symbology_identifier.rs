//! AIM symbology identifiers, `]cN`.
//!
//! Grounded on `original_source/core/src/oned/ODCode128Reader.cpp`'s
//! `fnc1()` modifier logic (GS1 -> modifier `1`, AIM -> modifier `2`, plain
//! -> modifier `0`) and extended with the per-format code letters listed in
//! AIM ITS `]`-prefix table.

use std::fmt;

/// Which application-indicator convention produced the FNC1/GS marker, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AiFlag {
    #[default]
    None,
    Gs1,
    Aim,
}

/// `]cM` where `c` is the per-format code character and `M` is the modifier digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SymbologyIdentifier {
    pub code_letter: char,
    pub modifier: u8,
    pub ai_flag: AiFlag,
}

impl Default for SymbologyIdentifier {
    fn default() -> Self {
        Self { code_letter: '\0', modifier: 0, ai_flag: AiFlag::None }
    }
}

impl SymbologyIdentifier {
    pub fn new(code_letter: char, modifier: u8, ai_flag: AiFlag) -> Self {
        Self { code_letter, modifier, ai_flag }
    }

    /// Code 128 modifier rule: plain=0, GS1(FNC1 first)=1, AIM(FNC1 elsewhere)=2.
    /// Mirrors `Code128Decoder::fnc1` (`ODCode128Reader.cpp`).
    pub fn code128(ai_flag: AiFlag) -> Self {
        let modifier = match ai_flag {
            AiFlag::None => 0,
            AiFlag::Gs1 => 1,
            AiFlag::Aim => 2,
        };
        Self::new('C', modifier, ai_flag)
    }

    /// QR modifier rule: plain (model 2, no FNC1)=1, GS1 (FNC1 first)=3,
    /// AIM (FNC1 second)=5.
    pub fn qr(ai_flag: AiFlag) -> Self {
        let modifier = match ai_flag {
            AiFlag::None => 1,
            AiFlag::Gs1 => 3,
            AiFlag::Aim => 5,
        };
        Self::new('Q', modifier, ai_flag)
    }

    /// Data Matrix modifier rule: plain=0, GS1 (first codeword FNC1)=2, AIM
    /// (FNC1 in second position)=3.
    pub fn data_matrix(ai_flag: AiFlag) -> Self {
        let modifier = match ai_flag {
            AiFlag::None => 0,
            AiFlag::Gs1 => 2,
            AiFlag::Aim => 3,
        };
        Self::new('d', modifier, ai_flag)
    }

    pub fn aztec(ai_flag: AiFlag) -> Self {
        Self::new('z', if ai_flag == AiFlag::Gs1 { 1 } else { 0 }, ai_flag)
    }

    pub fn is_set(&self) -> bool {
        self.code_letter != '\0'
    }
}

impl fmt::Display for SymbologyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_set() {
            return Ok(());
        }
        write!(f, "]{}{}", self.code_letter, self.modifier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code128_modifiers_match_aim_table() {
        assert_eq!(SymbologyIdentifier::code128(AiFlag::None).to_string(), "]C0");
        assert_eq!(SymbologyIdentifier::code128(AiFlag::Gs1).to_string(), "]C1");
        assert_eq!(SymbologyIdentifier::code128(AiFlag::Aim).to_string(), "]C2");
    }

    #[test]
    fn unset_identifier_renders_empty() {
        assert_eq!(SymbologyIdentifier::default().to_string(), "");
    }

    #[test]
    fn qr_aim_modifier_is_five() {
        assert_eq!(SymbologyIdentifier::qr(AiFlag::None).to_string(), "]Q1");
        assert_eq!(SymbologyIdentifier::qr(AiFlag::Gs1).to_string(), "]Q3");
        assert_eq!(SymbologyIdentifier::qr(AiFlag::Aim).to_string(), "]Q5");
    }

    #[test]
    fn data_matrix_aim_modifier_is_three() {
        assert_eq!(SymbologyIdentifier::data_matrix(AiFlag::None).to_string(), "]d0");
        assert_eq!(SymbologyIdentifier::data_matrix(AiFlag::Gs1).to_string(), "]d2");
        assert_eq!(SymbologyIdentifier::data_matrix(AiFlag::Aim).to_string(), "]d3");
    }
}
