/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bitstream::BitBuffer;
use crate::encoder::modes::incompatible;
use crate::error::Result;
use crate::models::Mode;

pub struct NumericEncoder;

impl NumericEncoder {
    /// Append the digits of `data` to `buffer`.
    ///
    /// Nothing is written if `data` holds anything but ASCII digits.
    pub fn write(data: &str, buffer: &mut BitBuffer) -> Result<()> {
        if !data.chars().all(Self::is_numeric) {
            return Err(incompatible(data, Mode::Numeric));
        }
        for group in data.as_bytes().chunks(3) {
            let value = group
                .iter()
                .fold(0u32, |acc, &d| acc * 10 + u32::from(d - b'0'));
            let bits_needed = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            buffer.put(value, bits_needed);
        }
        Ok(())
    }

    pub fn is_numeric(c: char) -> bool {
        c.is_ascii_digit()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::QrError;

    #[test]
    fn test_numeric_encode() {
        // "01234567" -> 0000001100 0101011001 1000011
        let mut buf = BitBuffer::new();
        NumericEncoder::write("01234567", &mut buf).unwrap();
        assert_eq!(buf.len_in_bits(), 27);
        let bits: String = (0..27).map(|i| if buf.get(i) { '1' } else { '0' }).collect();
        assert_eq!(bits, "000000110001010110011000011");
    }

    #[test]
    fn test_numeric_remainders() {
        let mut buf = BitBuffer::new();
        NumericEncoder::write("9", &mut buf).unwrap();
        assert_eq!(buf.len_in_bits(), 4);
        assert_eq!(buf.as_bytes(), &[0x90]);

        let mut buf = BitBuffer::new();
        NumericEncoder::write("1017", &mut buf).unwrap();
        assert_eq!(buf.len_in_bits(), 14);
    }

    #[test]
    fn test_numeric_rejects_non_digits() {
        let mut buf = BitBuffer::new();
        let err = NumericEncoder::write("12a4", &mut buf).unwrap_err();
        assert!(matches!(
            err,
            QrError::IncompatibleMode {
                mode: Mode::Numeric,
                suggested: Mode::Byte,
                ..
            }
        ));
        assert!(buf.is_empty());

        let err = NumericEncoder::write("12:4", &mut buf).unwrap_err();
        assert!(matches!(
            err,
            QrError::IncompatibleMode {
                suggested: Mode::Alphanumeric,
                ..
            }
        ));
        assert!(buf.is_empty());
    }
}
