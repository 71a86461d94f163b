/*!
# barqode-rs

`barqode-rs` is a pure Rust core for decoding multi-format 2D and 1D
barcodes from an already-rectified bit matrix: QR/Micro-QR/rMQR, Data
Matrix, Aztec, MaxiCode, PDF417/Micro-PDF417, Han Xin, DotCode, Code 16K,
Codablock-F, and Code 128.

## Scope

The crate owns the bit-stream decoders, the shared Reed-Solomon layer over
several Galois fields, the ECI/character-set state machine, structured-append
merging, and a validating writer front end. Image binarization, geometric
detection, and CLI/file I/O are deliberately out of scope; callers hand this
crate a rectified [`bit_matrix::BitMatrix`] (or, for the 1D/stacked and
detector-driven formats, a pre-extracted codeword stream) and get back a
[`barcode::Barcode`] or a precise [`error::Error`].

## Modules

- [`decode`] — the top-level dispatch entry point.
- [`barcode`] — `BarcodeFormat`, `ReaderOptions`, `Barcode`, `Metadata`.
- [`qr`], [`datamatrix`], [`aztec`], [`code128`], [`pdf417`], [`hanxin`],
  [`dotcode`], [`maxicode`] — one module per symbology family.
- [`reed_solomon`], [`galois_field`] — the shared error-correction layer.
- [`character_set`], [`content`], [`text`] — ECI/charset handling and
  rendering.
- [`structured_append`] — multi-symbol merge.
- [`writer`] — round-trip-validating encode front end.
*/

pub mod error;

pub mod barcode;
pub mod bit_matrix;
pub mod bit_source;
pub mod character_set;
pub mod content;
pub mod data_block;
pub mod decode;
pub mod galois_field;
pub mod reed_solomon;
pub mod structured_append;
pub mod symbology_identifier;
pub mod text;
pub mod writer;

pub mod aztec;
pub mod code128;
pub mod datamatrix;
pub mod dotcode;
pub mod hanxin;
pub mod maxicode;
pub mod pdf417;
pub mod qr;

pub use barcode::{Barcode, BarcodeFormat, ReaderOptions};
pub use error::{Error, Result};
