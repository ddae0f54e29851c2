//! Error types for QR code encoding and rendering

use thiserror::Error;

use crate::models::{ECLevel, Mode};

/// QR encoder error types
#[derive(Debug, Error)]
pub enum QrError {
    /// No input text (or no non-empty segment) was given.
    #[error("No input text")]
    EmptyInput,
    /// Requested version is outside 1-40.
    #[error("Invalid QR Code version: {0}")]
    InvalidVersion(u8),
    /// Error correction level name could not be parsed.
    #[error("Unknown error correction level: {0}")]
    InvalidErrorCorrectionLevel(String),
    /// Mask pattern index is outside 0-7.
    #[error("Invalid mask pattern: {0}")]
    InvalidMaskPattern(u8),
    /// Mode name could not be parsed.
    #[error("Unknown mode: {0}")]
    InvalidMode(String),
    /// A forced segment mode cannot represent the segment data.
    #[error("\"{data}\" cannot be encoded with mode {mode}. Suggested mode is: {suggested}")]
    IncompatibleMode {
        /// Offending segment data.
        data: String,
        /// Mode requested by the caller.
        mode: Mode,
        /// Most compact mode able to hold the data.
        suggested: Mode,
    },
    /// A character has no Shift-JIS value in the Kanji mode ranges.
    #[error("Invalid SJIS character: {0}")]
    InvalidKanji(char),
    /// Data does not fit in a version 40 symbol at the given level.
    #[error("The amount of data is too big to be stored in a QR Code (level {ec_level:?}, needs version > 40)")]
    CapacityExceeded {
        /// Requested error correction level.
        ec_level: ECLevel,
    },
    /// Caller forced a version smaller than the data requires.
    #[error(
        "The chosen QR Code version ({requested}) cannot contain this amount of data. Minimum version required to store current data is: {minimum}"
    )]
    VersionTooSmall {
        /// Version requested by the caller.
        requested: u8,
        /// Smallest version that can hold the data.
        minimum: u8,
    },
    /// Colour string is not a valid hex colour.
    #[error("Invalid hex color: {0}")]
    InvalidColor(String),
    /// Render options give an unusable or oversized image.
    #[error("Invalid image size: {0}")]
    InvalidImageSize(String),
    /// PNG encoding failed.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    /// Internal invariant was violated.
    #[error("Internal error: {0}")]
    Internal(&'static str),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, QrError>;
