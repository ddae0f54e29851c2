//! Data masking and mask selection.
//!
//! Each candidate pattern is scored with the four penalty rules
//! (N1 runs, N2 blocks, N3 finder-like sequences, N4 dark balance) and the
//! lowest total wins; ties keep the lower pattern index.

use tracing::trace;

use crate::encoder::function_patterns::write_format_info;
use crate::models::{BitMatrix, ECLevel, MaskPattern};

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// Matrix holding function patterns and data, not yet masked
pub struct DataMatrix {
    matrix: BitMatrix,
    ec_level: ECLevel,
}

impl DataMatrix {
    pub(crate) fn new(matrix: BitMatrix, ec_level: ECLevel) -> Self {
        Self { matrix, ec_level }
    }

    pub fn matrix(&self) -> &BitMatrix {
        &self.matrix
    }

    /// Total penalty of the symbol as it would look with `mask` applied
    pub fn penalty_for(&mut self, mask: MaskPattern) -> u32 {
        write_format_info(&mut self.matrix, self.ec_level, mask);
        apply_mask(&mut self.matrix, mask);
        let score = penalty_score(&self.matrix);
        // XOR is its own inverse
        apply_mask(&mut self.matrix, mask);
        score
    }

    /// Pattern with the lowest penalty, lowest index on ties
    pub fn best_mask(&mut self) -> MaskPattern {
        let mut best = MaskPattern::Pattern0;
        let mut best_score = u32::MAX;
        for mask in MaskPattern::ALL {
            let score = self.penalty_for(mask);
            trace!(mask = mask.index(), score, "mask penalty");
            if score < best_score {
                best = mask;
                best_score = score;
            }
        }
        best
    }

    /// Apply `mask` and write the matching format information
    pub fn finish(mut self, mask: MaskPattern) -> BitMatrix {
        apply_mask(&mut self.matrix, mask);
        write_format_info(&mut self.matrix, self.ec_level, mask);
        self.matrix
    }
}

/// XOR every non-reserved module selected by `mask`
pub fn apply_mask(matrix: &mut BitMatrix, mask: MaskPattern) {
    let size = matrix.size();
    for row in 0..size {
        for col in 0..size {
            if !matrix.is_reserved(row, col) {
                matrix.xor(row, col, mask.is_masked(row, col));
            }
        }
    }
}

/// N1: runs of five or more same-coloured modules in a row or column
pub fn penalty_n1(matrix: &BitMatrix) -> u32 {
    let size = matrix.size();
    let mut points = 0;

    for row in 0..size {
        let mut same_row = 0u32;
        let mut same_col = 0u32;
        let mut last_row: Option<bool> = None;
        let mut last_col: Option<bool> = None;

        for col in 0..size {
            let module = matrix.get(row, col);
            if last_row == Some(module) {
                same_row += 1;
            } else {
                if same_row >= 5 {
                    points += PENALTY_N1 + (same_row - 5);
                }
                last_row = Some(module);
                same_row = 1;
            }

            let module = matrix.get(col, row);
            if last_col == Some(module) {
                same_col += 1;
            } else {
                if same_col >= 5 {
                    points += PENALTY_N1 + (same_col - 5);
                }
                last_col = Some(module);
                same_col = 1;
            }
        }

        if same_row >= 5 {
            points += PENALTY_N1 + (same_row - 5);
        }
        if same_col >= 5 {
            points += PENALTY_N1 + (same_col - 5);
        }
    }

    points
}

/// N2: every 2x2 block of one colour
pub fn penalty_n2(matrix: &BitMatrix) -> u32 {
    let size = matrix.size();
    let mut points = 0;
    for row in 0..size.saturating_sub(1) {
        for col in 0..size - 1 {
            let last = matrix.get(row, col) as u8
                + matrix.get(row, col + 1) as u8
                + matrix.get(row + 1, col) as u8
                + matrix.get(row + 1, col + 1) as u8;
            if last == 4 || last == 0 {
                points += PENALTY_N2;
            }
        }
    }
    points
}

/// N3: 1:1:3:1:1 finder-like sequences with four light modules on one side
pub fn penalty_n3(matrix: &BitMatrix) -> u32 {
    const PATTERN_A: u16 = 0b101_1101_0000;
    const PATTERN_B: u16 = 0b000_0101_1101;

    let size = matrix.size();
    let mut points = 0;
    for row in 0..size {
        let mut bits_row = 0u16;
        let mut bits_col = 0u16;
        for col in 0..size {
            bits_row = ((bits_row << 1) & 0x7FF) | matrix.get(row, col) as u16;
            if col >= 10 && (bits_row == PATTERN_A || bits_row == PATTERN_B) {
                points += 1;
            }

            bits_col = ((bits_col << 1) & 0x7FF) | matrix.get(col, row) as u16;
            if col >= 10 && (bits_col == PATTERN_A || bits_col == PATTERN_B) {
                points += 1;
            }
        }
    }
    points * PENALTY_N3
}

/// N4: deviation of the dark proportion from 50%, in 5% steps
pub fn penalty_n4(matrix: &BitMatrix) -> u32 {
    let total = matrix.size() * matrix.size();
    if total == 0 {
        return 0;
    }
    let dark = matrix.dark_count();
    let k = (dark * 20).div_ceil(total) as i64;
    (k - 10).unsigned_abs() as u32 * PENALTY_N4
}

/// Sum of all four penalty rules
pub fn penalty_score(matrix: &BitMatrix) -> u32 {
    penalty_n1(matrix) + penalty_n2(matrix) + penalty_n3(matrix) + penalty_n4(matrix)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::function_patterns::FunctionPatterns;
    use crate::models::Version;

    fn from_rows(rows: &[&str]) -> BitMatrix {
        let mut m = BitMatrix::new(rows.len());
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                m.set(r, c, ch == '#', false);
            }
        }
        m
    }

    #[test]
    fn test_n1_runs() {
        let mut m = BitMatrix::new(7);
        // Row 0 all dark: one run of 7 in the row -> 3 + 2
        for c in 0..7 {
            m.set(0, c, true, false);
        }
        // Each remaining row is all light (7 each): 6 rows * 5
        // Columns: dark 1 then light 6 -> 3 + 1 each, 7 columns
        assert_eq!(penalty_n1(&m), 5 + 6 * 5 + 7 * 4);
    }

    #[test]
    fn test_n2_blocks() {
        let m = from_rows(&["##.", "##.", "..."]);
        assert_eq!(penalty_n2(&m), 3);

        let m = from_rows(&["##..", "##..", "....", "...."]);
        // One dark block, five light ones
        assert_eq!(penalty_n2(&m), 18);
    }

    #[test]
    fn test_n3_finder_like() {
        let mut m = BitMatrix::new(11);
        // Row 0: #.###.#....
        for (c, dark) in [true, false, true, true, true, false, true].into_iter().enumerate() {
            m.set(0, c, dark, false);
        }
        assert_eq!(penalty_n3(&m), 40);
    }

    #[test]
    fn test_n4_balance() {
        let mut m = BitMatrix::new(10);
        assert_eq!(penalty_n4(&m), 100);
        for i in 0..50 {
            m.set(i / 10, i % 10, true, false);
        }
        assert_eq!(penalty_n4(&m), 0);
        m.set(5, 0, true, false);
        // 51% rounds up to the 55% step
        assert_eq!(penalty_n4(&m), 10);
    }

    #[test]
    fn test_apply_mask_skips_reserved() {
        let fp = FunctionPatterns::new(Version::new(3).unwrap(), ECLevel::H);
        let before = fp.matrix().clone();
        let mut m = before.clone();
        apply_mask(&mut m, MaskPattern::Pattern1);
        let size = m.size();
        for r in 0..size {
            for c in 0..size {
                if before.is_reserved(r, c) {
                    assert_eq!(m.get(r, c), before.get(r, c));
                } else {
                    assert_eq!(m.get(r, c), r % 2 == 0);
                }
            }
        }
    }

    #[test]
    fn test_penalty_for_restores_data() {
        let fp = FunctionPatterns::new(Version::new(2).unwrap(), ECLevel::M);
        let mut data = fp.place_data(&[0x5A; 44]);
        let snapshot: Vec<(usize, usize, bool)> = (0..25)
            .flat_map(|r| (0..25).map(move |c| (r, c)))
            .filter(|&(r, c)| !data.matrix().is_reserved(r, c))
            .map(|(r, c)| (r, c, data.matrix().get(r, c)))
            .collect();
        for mask in MaskPattern::ALL {
            data.penalty_for(mask);
        }
        for (r, c, v) in snapshot {
            assert_eq!(data.matrix().get(r, c), v);
        }
    }

    #[test]
    fn test_best_mask_is_minimum() {
        let fp = FunctionPatterns::new(Version::new(1).unwrap(), ECLevel::L);
        let mut data = fp.place_data(&[0u8; 26]);
        let scores: Vec<u32> = MaskPattern::ALL.iter().map(|&m| data.penalty_for(m)).collect();
        let best = data.best_mask();
        let min = *scores.iter().min().unwrap();
        let first_min = scores.iter().position(|&s| s == min).unwrap();
        assert_eq!(best.index() as usize, first_min);
    }

    #[test]
    fn test_finish_writes_format_for_mask() {
        let fp = FunctionPatterns::new(Version::new(1).unwrap(), ECLevel::Q);
        let data = fp.place_data(&[0u8; 26]);
        let m = data.finish(MaskPattern::Pattern5);
        let bits = crate::encoder::format::encoded_format_bits(ECLevel::Q, MaskPattern::Pattern5);
        for i in 0..6 {
            assert_eq!(m.get(i, 8), (bits >> i) & 1 == 1);
        }
    }
}
