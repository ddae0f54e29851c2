/// Format information: EC level + mask pattern protected by BCH(15,5)
use crate::encoder::version::bch_digit;
use crate::models::{ECLevel, MaskPattern};

// BCH(15,5) generator polynomial: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const G15: u32 = 0x537;
// Keeps the encoded word from being all zeros
const G15_MASK: u32 = 0x5412;

/// 15-bit format information word, already XORed with the fixed mask
pub fn encoded_format_bits(ec_level: ECLevel, mask: MaskPattern) -> u16 {
    let data = ((ec_level.format_bits() as u32) << 3) | mask.index() as u32;
    let mut d = data << 10;
    while bch_digit(d) >= bch_digit(G15) {
        d ^= G15 << (bch_digit(d) - bch_digit(G15));
    }
    (((data << 10) | d) ^ G15_MASK) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bits_mask0() {
        assert_eq!(encoded_format_bits(ECLevel::L, MaskPattern::Pattern0), 0b111011111000100);
        assert_eq!(encoded_format_bits(ECLevel::M, MaskPattern::Pattern0), 0b101010000010010);
        assert_eq!(encoded_format_bits(ECLevel::Q, MaskPattern::Pattern0), 0b011010101011111);
        assert_eq!(encoded_format_bits(ECLevel::H, MaskPattern::Pattern0), 0b001011010001001);
    }

    #[test]
    fn test_format_bits_distinct() {
        let mut seen = std::collections::HashSet::new();
        for level in ECLevel::ALL {
            for mask in MaskPattern::ALL {
                assert!(seen.insert(encoded_format_bits(level, mask)));
            }
        }
        assert_eq!(seen.len(), 32);
    }
}
