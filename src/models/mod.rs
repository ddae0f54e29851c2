pub mod matrix;
pub mod qr_code;
pub mod segment;

pub use matrix::BitMatrix;
pub use qr_code::{ECLevel, MaskPattern, QRCode, Version};
pub use segment::{Mode, Segment, SegmentHint};
