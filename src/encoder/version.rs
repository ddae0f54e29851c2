/// Capacity lookup, version selection and version information (versions 7-40)
use crate::encoder::tables::data_codewords;
use crate::models::{ECLevel, Mode, Segment, Version};

// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const G18: u32 = 0x1F25;

pub(crate) fn bch_digit(data: u32) -> u32 {
    32 - data.leading_zeros()
}

/// Data bits available for segments (all data codewords)
pub fn mixed_capacity_bits(version: Version, ec_level: ECLevel) -> usize {
    data_codewords(version, ec_level) * 8
}

/// Characters (bytes for Byte mode) a single-segment symbol can hold
pub fn capacity(version: Version, ec_level: ECLevel, mode: Mode) -> usize {
    let reserved = 4 + mode.char_count_bits(version);
    let usable = mixed_capacity_bits(version, ec_level).saturating_sub(reserved);
    match mode {
        Mode::Numeric => usable * 3 / 10,
        Mode::Alphanumeric => usable * 2 / 11,
        Mode::Kanji => usable / 13,
        Mode::Byte => usable / 8,
    }
}

/// Smallest version able to hold `segments`, or `None` past version 40
pub fn best_version(segments: &[Segment], ec_level: ECLevel) -> Option<Version> {
    match segments {
        [] => Some(Version::MIN),
        [single] => {
            let length = single.char_count();
            Version::all().find(|&v| length <= capacity(v, ec_level, single.mode))
        }
        _ => Version::all().find(|&v| {
            let needed: usize = segments.iter().map(|s| s.total_bits(v)).sum();
            needed <= mixed_capacity_bits(v, ec_level)
        }),
    }
}

/// 18-bit version information block: 6 version bits + 12 BCH bits
pub fn encoded_version_bits(version: Version) -> u32 {
    let data = (version.number() as u32) << 12;
    let mut d = data;
    while bch_digit(d) >= bch_digit(G18) {
        d ^= G18 << (bch_digit(d) - bch_digit(G18));
    }
    data | d
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_known_capacities() {
        assert_eq!(capacity(v(1), ECLevel::M, Mode::Alphanumeric), 20);
        assert_eq!(capacity(v(1), ECLevel::H, Mode::Numeric), 17);
        assert_eq!(capacity(v(1), ECLevel::L, Mode::Byte), 17);
        assert_eq!(capacity(v(40), ECLevel::L, Mode::Numeric), 7089);
        assert_eq!(capacity(v(40), ECLevel::L, Mode::Alphanumeric), 4296);
        assert_eq!(capacity(v(40), ECLevel::L, Mode::Byte), 2953);
        assert_eq!(capacity(v(40), ECLevel::L, Mode::Kanji), 1817);
    }

    #[test]
    fn test_capacity_monotonic() {
        for level in ECLevel::ALL {
            for mode in [Mode::Numeric, Mode::Alphanumeric, Mode::Byte, Mode::Kanji] {
                let caps: Vec<usize> = Version::all().map(|ver| capacity(ver, level, mode)).collect();
                assert!(caps.windows(2).all(|w| w[0] <= w[1]), "{:?} {:?}", level, mode);
            }
        }
    }

    #[test]
    fn test_best_version_single_segment() {
        let seg = [Segment::new(Mode::Alphanumeric, "HELLO WORLD")];
        assert_eq!(best_version(&seg, ECLevel::M), Some(v(1)));
        assert_eq!(best_version(&seg, ECLevel::H), Some(v(2)));
        let too_long = [Segment::new(Mode::Byte, "a".repeat(3000))];
        assert_eq!(best_version(&too_long, ECLevel::L), None);
        assert_eq!(best_version(&[], ECLevel::L), Some(v(1)));
    }

    #[test]
    fn test_best_version_mixed_segments() {
        let segs = [
            Segment::new(Mode::Byte, "abc"),
            Segment::new(Mode::Numeric, "0123456789"),
        ];
        // 4+8+24 + 4+10+34 = 84 bits <= 128 bits of 1-M
        assert_eq!(best_version(&segs, ECLevel::M), Some(v(1)));
    }

    #[test]
    fn test_version_info_bits() {
        assert_eq!(encoded_version_bits(v(7)), 0x07C94);
        assert_eq!(encoded_version_bits(v(40)), 0x28C69);
    }
}
