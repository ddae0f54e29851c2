//! RustQR Encoder - QR code symbol generation in pure Rust
//!
//! Encodes text into ISO/IEC 18004 Model 2 QR code symbols (versions 1-40,
//! levels L/M/Q/H) with bit-minimal mode segmentation and automatic
//! version and mask selection. Symbols can be rendered as RGBA pixels, PNG,
//! SVG or terminal text.
//!
//! ```no_run
//! use rust_qr_encoder::{encode, EncodeOptions, ECLevel};
//! use rust_qr_encoder::renderer::{to_utf8, RenderOptions};
//!
//! let opts = EncodeOptions::new().with_error_correction_level(ECLevel::Q);
//! let qr = encode("HELLO WORLD", &opts).unwrap();
//! println!("{}", to_utf8(&qr, &RenderOptions::default()));
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding modules (segmentation, codewords, matrix, masking)
pub mod encoder;
/// Error type and result alias
pub mod error;
/// Core data structures (QRCode, BitMatrix, Segment, etc.)
pub mod models;
/// Symbol renderers (pixels, PNG, SVG, UTF-8)
pub mod renderer;

pub use encoder::{EncodeOptions, KanjiMode};
pub use error::{QrError, Result};
pub use models::{BitMatrix, ECLevel, MaskPattern, Mode, QRCode, Segment, SegmentHint, Version};

use encoder::{EncodeInput, QrEncoder};
use rayon::prelude::*;

/// Encode text into a QR code symbol
///
/// # Arguments
/// * `text` - Input text; must not be empty
/// * `options` - Version, error correction level, mask and Kanji settings
///
/// # Returns
/// The smallest symbol able to hold `text`, or the requested version
pub fn encode(text: &str, options: &EncodeOptions) -> Result<QRCode> {
    QrEncoder::encode(EncodeInput::Text(text), options)
}

/// Encode caller-provided segments, honouring any forced modes
pub fn encode_segments(segments: &[SegmentHint], options: &EncodeOptions) -> Result<QRCode> {
    QrEncoder::encode(EncodeInput::Segments(segments), options)
}

/// Encode many independent inputs in parallel
///
/// Results are returned in input order.
pub fn encode_batch<S>(texts: &[S], options: &EncodeOptions) -> Vec<Result<QRCode>>
where
    S: AsRef<str> + Sync,
{
    texts
        .par_iter()
        .map(|text| encode(text.as_ref(), options))
        .collect()
}
