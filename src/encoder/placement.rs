use crate::encoder::function_patterns::FunctionPatterns;
use crate::encoder::mask::DataMatrix;

impl FunctionPatterns {
    /// Place `codewords` in the zig-zag order, consuming the function matrix.
    ///
    /// Column pairs are walked right to left, skipping the vertical timing
    /// column, alternating upward and downward. Reserved modules are
    /// skipped. Modules left after the last codeword bit (remainder bits)
    /// stay light.
    pub fn place_data(self, codewords: &[u8]) -> DataMatrix {
        let FunctionPatterns { mut matrix, ec_level } = self;
        let size = matrix.size() as isize;

        let mut upward = true;
        let mut row = size - 1;
        let mut bit_index = 7i32;
        let mut byte_index = 0usize;

        let mut col = size - 1;
        while col > 0 {
            if col == 6 {
                col -= 1;
            }
            loop {
                for c in 0..2 {
                    let (r, cc) = (row as usize, (col - c) as usize);
                    if matrix.is_reserved(r, cc) {
                        continue;
                    }
                    let dark = match codewords.get(byte_index) {
                        Some(byte) => (byte >> bit_index) & 1 == 1,
                        None => false,
                    };
                    matrix.set(r, cc, dark, false);
                    bit_index -= 1;
                    if bit_index < 0 {
                        byte_index += 1;
                        bit_index = 7;
                    }
                }

                let next = if upward { row - 1 } else { row + 1 };
                if next < 0 || next >= size {
                    upward = !upward;
                    break;
                }
                row = next;
            }
            col -= 2;
        }

        DataMatrix::new(matrix, ec_level)
    }
}

#[cfg(test)]
mod tests {
    use crate::models::{ECLevel, Version};

    use super::*;

    #[test]
    fn test_first_codeword_bottom_right() {
        let fp = FunctionPatterns::new(Version::new(1).unwrap(), ECLevel::M);
        // 0b1010_0000: bits go (20,20), (20,19), (19,20), (19,19), ...
        let placed = fp.place_data(&[0b1010_0000]);
        let m = placed.matrix();
        assert!(m.get(20, 20));
        assert!(!m.get(20, 19));
        assert!(m.get(19, 20));
        assert!(!m.get(19, 19));
        assert!(!m.get(18, 20));
    }

    #[test]
    fn test_reserved_modules_untouched() {
        let fp = FunctionPatterns::new(Version::new(7).unwrap(), ECLevel::Q);
        let before = fp.matrix().clone();
        let placed = fp.place_data(&[0xFF; 196]);
        let after = placed.matrix();
        for r in 0..before.size() {
            for c in 0..before.size() {
                if before.is_reserved(r, c) {
                    assert_eq!(before.get(r, c), after.get(r, c), "({r}, {c})");
                } else {
                    assert!(after.get(r, c), "({r}, {c})");
                }
            }
        }
    }

    #[test]
    fn test_remainder_bits_light() {
        // Version 2 has 7 remainder bits beyond its 44 codewords
        let fp = FunctionPatterns::new(Version::new(2).unwrap(), ECLevel::L);
        let placed = fp.place_data(&[0xFF; 44]);
        let m = placed.matrix();
        let light_data = (0..m.size())
            .flat_map(|r| (0..m.size()).map(move |c| (r, c)))
            .filter(|&(r, c)| !m.is_reserved(r, c) && !m.get(r, c))
            .count();
        assert_eq!(light_data, 7);
    }
}
