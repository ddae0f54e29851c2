/// Kanji mode encoder (Mode 1000)
/// Each Shift-JIS double-byte character is packed into 13 bits
use crate::encoder::bitstream::BitBuffer;
use crate::error::{QrError, Result};

/// Converts a Unicode character to its Shift-JIS code
pub type ShiftJisFn = fn(char) -> Option<u16>;

pub struct KanjiEncoder;

impl KanjiEncoder {
    /// Characters eligible for Kanji mode segmentation
    pub fn is_kanji(c: char) -> bool {
        matches!(c,
            '\u{3000}'..='\u{303F}'
            | '\u{3040}'..='\u{309F}'
            | '\u{30A0}'..='\u{30FF}'
            | '\u{FF00}'..='\u{FFEF}'
            | '\u{4E00}'..='\u{9FAF}'
            | '\u{2605}'..='\u{2606}'
            | '\u{2190}'..='\u{2195}'
            | '\u{203B}'
            | '\u{2010}' | '\u{2015}' | '\u{2018}' | '\u{2019}' | '\u{2025}' | '\u{2026}'
            | '\u{201C}' | '\u{201D}' | '\u{2225}' | '\u{2260}'
            | '\u{0391}'..='\u{0451}'
            | '\u{00A7}' | '\u{00A8}' | '\u{00B1}' | '\u{00B4}' | '\u{00D7}' | '\u{00F7}')
    }

    /// Pack one Shift-JIS code into its 13-bit Kanji mode value
    pub fn pack(c: char, sjis: Option<u16>) -> Result<u32> {
        let value = match sjis {
            Some(v @ 0x8140..=0x9FFC) => (v - 0x8140) as u32,
            Some(v @ 0xE040..=0xEBBF) => (v - 0xC140) as u32,
            _ => return Err(QrError::InvalidKanji(c)),
        };
        Ok(((value >> 8) & 0xFF) * 0xC0 + (value & 0xFF))
    }

    pub fn write(data: &str, to_sjis: ShiftJisFn, buffer: &mut BitBuffer) -> Result<()> {
        for c in data.chars() {
            buffer.put(Self::pack(c, to_sjis(c))?, 13);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_sjis(c: char) -> Option<u16> {
        match c {
            '点' => Some(0x935F),
            '茗' => Some(0xE4AA),
            _ => None,
        }
    }

    #[test]
    fn test_kanji_encode() {
        let mut buf = BitBuffer::new();
        KanjiEncoder::write("点茗", sample_sjis, &mut buf).unwrap();
        assert_eq!(buf.len_in_bits(), 26);
        let bits: String = (0..26).map(|i| if buf.get(i) { '1' } else { '0' }).collect();
        assert_eq!(bits, "01101100111111101010101010");
    }

    #[test]
    fn test_kanji_rejects_unmapped() {
        let mut buf = BitBuffer::new();
        assert!(matches!(
            KanjiEncoder::write("点x", sample_sjis, &mut buf),
            Err(QrError::InvalidKanji('x'))
        ));
        assert!(KanjiEncoder::pack('?', Some(0xA000)).is_err());
    }

    #[test]
    fn test_kanji_ranges() {
        assert!(KanjiEncoder::is_kanji('点'));
        assert!(KanjiEncoder::is_kanji('あ'));
        assert!(KanjiEncoder::is_kanji('§'));
        assert!(!KanjiEncoder::is_kanji('A'));
        assert!(!KanjiEncoder::is_kanji('é'));
    }
}
