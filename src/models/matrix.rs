/// Square module matrix with a parallel "reserved" plane.
///
/// Both planes are packed eight modules per byte, row-major. Reserved
/// modules belong to function patterns and are never touched by masking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    size: usize,
    data: Vec<u8>,
    reserved: Vec<u8>,
}

impl BitMatrix {
    /// Create an all-light, unreserved matrix of `size` x `size` modules
    pub fn new(size: usize) -> Self {
        let bytes_needed = (size * size).div_ceil(8);
        Self {
            size,
            data: vec![0; bytes_needed],
            reserved: vec![0; bytes_needed],
        }
    }

    /// Side length in modules
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn locate(&self, row: usize, col: usize) -> Option<(usize, u8)> {
        if row >= self.size || col >= self.size {
            return None;
        }
        let index = row * self.size + col;
        Some((index / 8, 1 << (index % 8)))
    }

    /// Get module at (row, col); out of range reads as light
    pub fn get(&self, row: usize, col: usize) -> bool {
        match self.locate(row, col) {
            Some((byte, bit)) => self.data[byte] & bit != 0,
            None => false,
        }
    }

    /// Set module at (row, col) and optionally mark it reserved
    pub fn set(&mut self, row: usize, col: usize, value: bool, reserved: bool) {
        let Some((byte, bit)) = self.locate(row, col) else {
            return;
        };
        if value {
            self.data[byte] |= bit;
        } else {
            self.data[byte] &= !bit;
        }
        if reserved {
            self.reserved[byte] |= bit;
        }
    }

    /// XOR module at (row, col) with `value`
    pub fn xor(&mut self, row: usize, col: usize, value: bool) {
        if !value {
            return;
        }
        if let Some((byte, bit)) = self.locate(row, col) {
            self.data[byte] ^= bit;
        }
    }

    /// Check whether (row, col) belongs to a function pattern
    pub fn is_reserved(&self, row: usize, col: usize) -> bool {
        match self.locate(row, col) {
            Some((byte, bit)) => self.reserved[byte] & bit != 0,
            None => false,
        }
    }

    /// Number of dark modules
    pub fn dark_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Number of modules not reserved for function patterns
    pub fn data_module_count(&self) -> usize {
        self.size * self.size - self.reserved.iter().map(|b| b.count_ones() as usize).sum::<usize>()
    }

    /// Flat row-major module colours (true = dark)
    pub fn to_bools(&self) -> Vec<bool> {
        let mut out = Vec::with_capacity(self.size * self.size);
        for row in 0..self.size {
            for col in 0..self.size {
                out.push(self.get(row, col));
            }
        }
        out
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0)
    }
}
