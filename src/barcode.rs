//! Public format enum, reader/writer options, and the `Barcode` output record.
//!
//! Grounded on `original_source/core/src/qrcode/QRDecoder.cpp` et al. for the
//! metadata each decoder populates, with a small, fully-named `Metadata`
//! struct replacing the source's type-erased `ResultMetadata` map.

use crate::character_set::CharacterSet;
use crate::content::Content;
use crate::error::Error;
use crate::structured_append::StructuredAppendInfo;
use crate::symbology_identifier::SymbologyIdentifier;
use crate::text::TextMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BarcodeFormat {
    QRCode,
    MicroQRCode,
    RMQRCode,
    DataMatrix,
    Aztec,
    MaxiCode,
    Pdf417,
    MicroPdf417,
    HanXin,
    DotCode,
    Code128,
    Code16K,
    CodablockF,
}

/// Every format this crate knows the name of, regardless of how far its
/// decoder is wired into [`crate::decode::decode_barcode`].
pub const ALL_FORMATS: &[BarcodeFormat] = &[
    BarcodeFormat::QRCode,
    BarcodeFormat::MicroQRCode,
    BarcodeFormat::RMQRCode,
    BarcodeFormat::DataMatrix,
    BarcodeFormat::Aztec,
    BarcodeFormat::MaxiCode,
    BarcodeFormat::Pdf417,
    BarcodeFormat::MicroPdf417,
    BarcodeFormat::HanXin,
    BarcodeFormat::DotCode,
    BarcodeFormat::Code128,
    BarcodeFormat::Code16K,
    BarcodeFormat::CodablockF,
];

/// Restricts `decode_barcode` to a subset of formats; an empty set means "try all".
#[derive(Debug, Clone, Default)]
pub struct FormatSet(pub Vec<BarcodeFormat>);

impl FormatSet {
    /// The wildcard set: `contains` treats this as "every format", but iterating
    /// `.0` directly yields nothing — callers that need to enumerate should use
    /// [`ALL_FORMATS`] instead (see `decode::decode_barcode_any`).
    pub fn all() -> Self {
        Self(vec![])
    }

    pub fn contains(&self, format: BarcodeFormat) -> bool {
        self.0.is_empty() || self.0.contains(&format)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binarizer {
    LocalAverage,
    GlobalHistogram,
    FixedThreshold,
    BoolCast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EanAddOn {
    Never,
    IfPresent,
    Required,
}

/// Recognized fields for `decode_barcode`. Only the fields
/// the core pipeline actually consumes carry behavior; detector-facing fields
/// (`try_rotate`, `binarizer`, ...) are threaded through for API completeness
/// since callers plug in their own detector ahead of this core.
#[derive(Debug, Clone)]
pub struct ReaderOptions {
    pub formats: FormatSet,
    pub try_harder: bool,
    pub try_rotate: bool,
    pub try_invert: bool,
    pub try_downscale: bool,
    pub is_pure: bool,
    pub character_set: Option<CharacterSet>,
    pub text_mode: TextMode,
    pub ean_add_on: EanAddOn,
    pub return_errors: bool,
    pub max_symbols: u32,
    pub binarizer: Binarizer,
    /// Resolves Open Question 1: directs Shift_JIS byte 0x5C to
    /// U+00A5 (ISO/IEC 18004 default) unless the caller opts into ASCII-direct.
    pub sjis_ascii: bool,
}

impl Default for ReaderOptions {
    fn default() -> Self {
        Self {
            formats: FormatSet::all(),
            try_harder: false,
            try_rotate: false,
            try_invert: false,
            try_downscale: false,
            is_pure: false,
            character_set: None,
            text_mode: TextMode::Plain,
            ean_add_on: EanAddOn::Never,
            return_errors: false,
            max_symbols: 1,
            binarizer: Binarizer::LocalAverage,
            sjis_ascii: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatorOptions {
    pub format: BarcodeFormat,
    pub ec_level: Option<String>,
    pub reader_init: bool,
    pub force_square_data_matrix: bool,
    pub eci: Option<u32>,
    pub add_quiet_zones: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    None,
    R90,
    R180,
    R270,
}

#[derive(Debug, Clone)]
pub struct WriterOptions {
    pub scale: u32,
    pub size_hint: Option<(u32, u32)>,
    pub rotate: Rotation,
    pub with_hrt: bool,
    pub with_quiet_zones: bool,
}

impl Default for WriterOptions {
    fn default() -> Self {
        Self { scale: 1, size_hint: None, rotate: Rotation::None, with_hrt: false, with_quiet_zones: true }
    }
}

/// Four-corner polygon in source-image coordinates. The core never produces
/// image-space coordinates itself (no detector lives here); a caller-supplied
/// detector fills this in. Defaults to a degenerate point at the origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub corners: [(f32, f32); 4],
}

/// Decode-time metadata replacing the source's type-erased result map.
#[derive(Debug, Clone, Default)]
pub struct Metadata {
    pub ec_level: Option<String>,
    pub version: Option<String>,
    pub mask: Option<u8>,
    pub reader_init: bool,
    pub line_count: Option<u32>,
}

#[derive(Debug, Clone)]
pub struct Barcode {
    pub format: BarcodeFormat,
    pub position: Position,
    pub bytes: Vec<u8>,
    pub bytes_eci: Vec<u8>,
    pub text: String,
    pub symbology_identifier: SymbologyIdentifier,
    pub metadata: Metadata,
    pub ecis: Vec<(u32, usize)>,
    pub orientation: i32,
    pub is_mirrored: bool,
    pub is_inverted: bool,
    pub sequence_info: StructuredAppendInfo,
    pub error: Option<Error>,
}

impl Barcode {
    pub fn from_content(format: BarcodeFormat, content: Content, text_mode: TextMode) -> Self {
        let text = crate::text::render(&content, text_mode);
        let bytes = content.raw_bytes().to_vec();
        Barcode {
            format,
            position: Position::default(),
            bytes_eci: bytes.clone(),
            bytes,
            text,
            symbology_identifier: content.symbology,
            metadata: Metadata::default(),
            ecis: vec![],
            orientation: 0,
            is_mirrored: false,
            is_inverted: false,
            sequence_info: StructuredAppendInfo::single(),
            error: None,
        }
    }

    /// A valid, trustworthy result has no error, a resolved format, and
    /// non-empty content.
    pub fn is_valid(&self) -> bool {
        self.error.is_none() && !self.bytes.is_empty()
    }
}
