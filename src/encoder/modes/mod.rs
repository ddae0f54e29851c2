//! QR code data mode encoders
//!
//! This module contains encoders for the different QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits, and symbols
//! - Byte: 8-bit data (UTF-8)
//! - Kanji: Shift-JIS double-byte characters

pub mod alphanumeric;
pub mod byte;
pub mod kanji;
pub mod numeric;

use crate::encoder::bitstream::BitBuffer;
use crate::encoder::config::KanjiMode;
use crate::encoder::segments::best_mode_for_data;
use crate::error::{QrError, Result};
use crate::models::{Mode, Segment, Version};

use alphanumeric::AlphanumericEncoder;
use byte::ByteEncoder;
use kanji::KanjiEncoder;
use numeric::NumericEncoder;

/// Error for `data` that `mode` cannot represent
pub(crate) fn incompatible(data: &str, mode: Mode) -> QrError {
    QrError::IncompatibleMode {
        data: data.to_string(),
        mode,
        suggested: best_mode_for_data(data, false),
    }
}

/// Write header and payload of `segment` for a symbol of `version`
pub fn write_segment(
    segment: &Segment,
    version: Version,
    kanji: KanjiMode,
    buffer: &mut BitBuffer,
) -> Result<()> {
    buffer.put(segment.mode.indicator(), 4);
    buffer.put(
        segment.char_count() as u32,
        segment.mode.char_count_bits(version),
    );
    match segment.mode {
        Mode::Numeric => NumericEncoder::write(&segment.data, buffer)?,
        Mode::Alphanumeric => AlphanumericEncoder::write(&segment.data, buffer)?,
        Mode::Byte => ByteEncoder::write(&segment.data, buffer),
        Mode::Kanji => match kanji {
            KanjiMode::Enabled(to_sjis) => KanjiEncoder::write(&segment.data, to_sjis, buffer)?,
            KanjiMode::Disabled => {
                return Err(QrError::Internal("Kanji segment without a Shift-JIS converter"));
            }
        },
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_numeric_segment_header() {
        let mut buf = BitBuffer::new();
        let seg = Segment::new(Mode::Numeric, "01234567");
        write_segment(&seg, Version::new(1).unwrap(), KanjiMode::Disabled, &mut buf).unwrap();
        assert_eq!(buf.len_in_bits(), 4 + 10 + 27);
        assert_eq!(&buf.as_bytes()[..5], &[0x10, 0x20, 0x0C, 0x56, 0x61]);
    }

    #[test]
    fn test_write_segment_rejects_data_outside_mode() {
        let v1 = Version::new(1).unwrap();
        let mut buf = BitBuffer::new();
        let seg = Segment::new(Mode::Numeric, "abc");
        let err = write_segment(&seg, v1, KanjiMode::Disabled, &mut buf).unwrap_err();
        assert!(matches!(err, QrError::IncompatibleMode { mode: Mode::Numeric, .. }));

        let seg = Segment::new(Mode::Alphanumeric, "hello");
        let err = write_segment(&seg, v1, KanjiMode::Disabled, &mut buf).unwrap_err();
        assert!(matches!(err, QrError::IncompatibleMode { mode: Mode::Alphanumeric, .. }));
    }
}
