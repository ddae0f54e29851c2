use crate::encoder::format::encoded_format_bits;
use crate::encoder::version::encoded_version_bits;
use crate::models::{BitMatrix, ECLevel, MaskPattern, Version};

/// Matrix with every function pattern placed and reserved.
///
/// This is the only way to obtain a matrix ready for data placement, so
/// reserved modules are always fixed before any mask is applied.
pub struct FunctionPatterns {
    pub(crate) matrix: BitMatrix,
    pub(crate) ec_level: ECLevel,
}

impl FunctionPatterns {
    pub fn new(version: Version, ec_level: ECLevel) -> Self {
        let mut matrix = BitMatrix::new(version.size());

        place_finder_patterns(&mut matrix);
        place_timing_patterns(&mut matrix);
        place_alignment_patterns(&mut matrix, version);
        // Placeholder so the format areas are reserved before masking
        write_format_info(&mut matrix, ec_level, MaskPattern::Pattern0);
        if version.number() >= 7 {
            write_version_info(&mut matrix, version);
        }

        Self { matrix, ec_level }
    }

    pub fn matrix(&self) -> &BitMatrix {
        &self.matrix
    }
}

/// Top-left corners of the three finder patterns
fn finder_positions(size: usize) -> [(usize, usize); 3] {
    [(0, 0), (size - 7, 0), (0, size - 7)]
}

/// 7x7 finder patterns plus their light separators (clipped to bounds)
fn place_finder_patterns(matrix: &mut BitMatrix) {
    let size = matrix.size() as isize;
    for (row, col) in finder_positions(matrix.size()) {
        let (row, col) = (row as isize, col as isize);
        for r in -1..=7isize {
            if row + r < 0 || row + r >= size {
                continue;
            }
            for c in -1..=7isize {
                if col + c < 0 || col + c >= size {
                    continue;
                }
                let dark = ((0..=6).contains(&r) && (c == 0 || c == 6))
                    || ((0..=6).contains(&c) && (r == 0 || r == 6))
                    || ((2..=4).contains(&r) && (2..=4).contains(&c));
                matrix.set((row + r) as usize, (col + c) as usize, dark, true);
            }
        }
    }
}

/// Alternating modules along row 6 and column 6 between the finders
fn place_timing_patterns(matrix: &mut BitMatrix) {
    let size = matrix.size();
    for i in 8..size - 8 {
        let dark = i % 2 == 0;
        matrix.set(i, 6, dark, true);
        matrix.set(6, i, dark, true);
    }
}

/// Alignment pattern center coordinates (rows and columns) for a version
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let v = version.number() as usize;
    if v == 1 {
        return Vec::new();
    }
    let num_align = v / 7 + 2;
    let size = version.size();
    let step = if size == 145 {
        26
    } else {
        (size - 13).div_ceil(2 * num_align - 2) * 2
    };

    let mut positions = vec![0usize; num_align];
    positions[0] = 6;
    let mut pos = size - 7;
    for i in (1..num_align).rev() {
        positions[i] = pos;
        pos = pos.saturating_sub(step);
    }
    positions
}

/// 5x5 alignment patterns, skipping the three finder corners
fn place_alignment_patterns(matrix: &mut BitMatrix, version: Version) {
    let coords = alignment_pattern_positions(version);
    let last = coords.len().saturating_sub(1);
    for (i, &row) in coords.iter().enumerate() {
        for (j, &col) in coords.iter().enumerate() {
            if (i == 0 && j == 0) || (i == 0 && j == last) || (i == last && j == 0) {
                continue;
            }
            for r in -2..=2isize {
                for c in -2..=2isize {
                    let dark = r.abs() == 2 || c.abs() == 2 || (r == 0 && c == 0);
                    matrix.set(
                        (row as isize + r) as usize,
                        (col as isize + c) as usize,
                        dark,
                        true,
                    );
                }
            }
        }
    }
}

/// Write both copies of the format information and the dark module
pub fn write_format_info(matrix: &mut BitMatrix, ec_level: ECLevel, mask: MaskPattern) {
    let size = matrix.size();
    let bits = encoded_format_bits(ec_level, mask);

    for i in 0..15 {
        let dark = (bits >> i) & 1 == 1;

        // Vertical strip: column 8
        if i < 6 {
            matrix.set(i, 8, dark, true);
        } else if i < 8 {
            matrix.set(i + 1, 8, dark, true);
        } else {
            matrix.set(size - 15 + i, 8, dark, true);
        }

        // Horizontal strip: row 8
        if i < 8 {
            matrix.set(8, size - i - 1, dark, true);
        } else if i < 9 {
            matrix.set(8, 15 - i, dark, true);
        } else {
            matrix.set(8, 15 - i - 1, dark, true);
        }
    }

    // Always-dark module
    matrix.set(size - 8, 8, true, true);
}

/// Two 6x3 version information blocks (versions 7+)
fn write_version_info(matrix: &mut BitMatrix, version: Version) {
    let size = matrix.size();
    let bits = encoded_version_bits(version);
    for i in 0..18 {
        let row = i / 3;
        let col = i % 3 + size - 11;
        let dark = (bits >> i) & 1 == 1;
        matrix.set(row, col, dark, true);
        matrix.set(col, row, dark, true);
    }
}
