//! QR code encoding pipeline
//!
//! Text is segmented into modes, packed into data codewords, extended with
//! Reed-Solomon error correction and laid out in the module matrix.

/// Bit buffer for the data codeword stream
pub mod bitstream;
/// Interleaving of data and EC codewords
pub mod codewords;
/// Encode options and Kanji configuration
pub mod config;
/// Format information BCH code
pub mod format;
/// Finder, timing, alignment, format and version patterns
pub mod function_patterns;
/// Mask application and penalty scoring
pub mod mask;
/// Per-mode payload writers
pub mod modes;
/// Zig-zag data placement
pub mod placement;
/// Top-level encoder
pub mod qr_encoder;
/// GF(256) arithmetic and Reed-Solomon EC
pub mod reed_solomon;
/// Character classification and optimal segmentation
pub mod segments;
/// Dijkstra shortest path used by segmentation
pub mod shortest_path;
/// Codeword and block tables
pub mod tables;
/// Capacity and version selection
pub mod version;

pub use config::{EncodeOptions, KanjiMode};
pub use qr_encoder::{EncodeInput, QrEncoder};
