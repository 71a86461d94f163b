//! Error taxonomy for the decoding core.
//!
//! Four variants: `NotFound` / `Format` / `Checksum` / `Unsupported`.
//! No OS/IO error variant lives here — the core never performs IO; the CLI
//! binary maps its own `std::io::Error`s separately.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The detector/format reader could not locate the symbol or its version/format metadata.
    #[error("not found")]
    NotFound,

    /// A grammar violation: unexpected codeword, truncated stream, reserved mode, etc.
    #[error("format error: {0}")]
    Format(String),

    /// Reed-Solomon (or equivalent) error correction failed.
    #[error("checksum error: {0}")]
    Checksum(String),

    /// A known-but-unimplemented submode or feature.
    #[error("unsupported: {0}")]
    Unsupported(String),
}

impl Error {
    pub fn format(msg: impl Into<String>) -> Self {
        Error::Format(msg.into())
    }

    pub fn checksum(msg: impl Into<String>) -> Self {
        Error::Checksum(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Error::Unsupported(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
