use std::fmt;
use std::str::FromStr;

use super::Version;
use crate::error::{QrError, Result};

/// Data encoding mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Digits 0-9 (Mode 0001)
    Numeric,
    /// 0-9, A-Z, space and $%*+-./: (Mode 0010)
    Alphanumeric,
    /// 8-bit bytes (Mode 0100)
    Byte,
    /// Shift-JIS double-byte characters (Mode 1000)
    Kanji,
}

impl Mode {
    /// Four-bit mode indicator
    pub fn indicator(&self) -> u32 {
        match self {
            Mode::Numeric => 0b0001,
            Mode::Alphanumeric => 0b0010,
            Mode::Byte => 0b0100,
            Mode::Kanji => 0b1000,
        }
    }

    /// Width of the character count indicator for `version`
    pub fn char_count_bits(&self, version: Version) -> usize {
        let widths: [usize; 3] = match self {
            Mode::Numeric => [10, 12, 14],
            Mode::Alphanumeric => [9, 11, 13],
            Mode::Byte => [8, 16, 16],
            Mode::Kanji => [8, 10, 12],
        };
        widths[version.band()]
    }

    /// Payload length in bits for `count` characters (bytes for Byte mode)
    pub fn bits_for(&self, count: usize) -> usize {
        match self {
            Mode::Numeric => {
                let rest = count % 3;
                10 * (count / 3) + if rest > 0 { rest * 3 + 1 } else { 0 }
            }
            Mode::Alphanumeric => 11 * (count / 2) + 6 * (count % 2),
            Mode::Byte => 8 * count,
            Mode::Kanji => 13 * count,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Numeric => "Numeric",
            Mode::Alphanumeric => "Alphanumeric",
            Mode::Byte => "Byte",
            Mode::Kanji => "Kanji",
        };
        f.write_str(name)
    }
}

impl FromStr for Mode {
    type Err = QrError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(Mode::Numeric),
            "alphanumeric" => Ok(Mode::Alphanumeric),
            "byte" => Ok(Mode::Byte),
            "kanji" => Ok(Mode::Kanji),
            _ => Err(QrError::InvalidMode(s.to_string())),
        }
    }
}

/// A run of input encoded in a single mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Encoding mode
    pub mode: Mode,
    /// Original text of the run
    pub data: String,
}

impl Segment {
    /// Create a segment
    pub fn new(mode: Mode, data: impl Into<String>) -> Self {
        Self {
            mode,
            data: data.into(),
        }
    }

    /// Value written into the character count indicator
    pub fn char_count(&self) -> usize {
        match self.mode {
            Mode::Byte => self.data.len(),
            _ => self.data.chars().count(),
        }
    }

    /// Payload length in bits, excluding the segment header
    pub fn bit_length(&self) -> usize {
        self.mode.bits_for(self.char_count())
    }

    /// Header (mode indicator + character count) plus payload bits
    pub fn total_bits(&self, version: Version) -> usize {
        4 + self.mode.char_count_bits(version) + self.bit_length()
    }
}

/// Caller-supplied segment with an optional forced mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentHint {
    /// Segment text
    pub data: String,
    /// Forced mode; `None` picks the most compact mode for `data`
    pub mode: Option<Mode>,
}

impl SegmentHint {
    /// Hint that lets the encoder pick the mode
    pub fn auto(data: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            mode: None,
        }
    }

    /// Hint with a forced mode
    pub fn with_mode(data: impl Into<String>, mode: Mode) -> Self {
        Self {
            data: data.into(),
            mode: Some(mode),
        }
    }
}
