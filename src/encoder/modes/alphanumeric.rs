/// Alphanumeric mode encoder (Mode 0010)
/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
use crate::encoder::bitstream::BitBuffer;
use crate::encoder::modes::incompatible;
use crate::error::Result;
use crate::models::Mode;

const ALPHANUMERIC_TABLE: [char; 45] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I',
    'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', ' ', '$',
    '%', '*', '+', '-', '.', '/', ':',
];

/// Encode alphanumeric data
/// Pairs = 11 bits, single = 6 bits
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    pub fn index_of(c: char) -> Option<u32> {
        ALPHANUMERIC_TABLE
            .iter()
            .position(|&t| t == c)
            .map(|i| i as u32)
    }

    pub fn is_alphanumeric(c: char) -> bool {
        Self::index_of(c).is_some()
    }

    /// Append `data` to `buffer`.
    ///
    /// Nothing is written if any char is outside the alphanumeric set.
    pub fn write(data: &str, buffer: &mut BitBuffer) -> Result<()> {
        let values = data
            .chars()
            .map(Self::index_of)
            .collect::<Option<Vec<u32>>>()
            .ok_or_else(|| incompatible(data, Mode::Alphanumeric))?;
        for pair in values.chunks(2) {
            match pair {
                [first, second] => buffer.put(first * 45 + second, 11),
                [single] => buffer.put(*single, 6),
                _ => {}
            }
        }
        Ok(())
    }
}
