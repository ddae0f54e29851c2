/// Append-only bit buffer used to build the data codeword stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BitBuffer {
    buffer: Vec<u8>,
    length: usize,
}

impl BitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity_bits(bits: usize) -> Self {
        Self {
            buffer: Vec::with_capacity(bits.div_ceil(8)),
            length: 0,
        }
    }

    /// Read bit at `index` (MSB-first within each byte)
    pub fn get(&self, index: usize) -> bool {
        if index >= self.length {
            return false;
        }
        (self.buffer[index / 8] >> (7 - index % 8)) & 1 == 1
    }

    /// Append the low `bit_count` bits of `value`, most significant first
    pub fn put(&mut self, value: u32, bit_count: usize) {
        debug_assert!(bit_count <= 32);
        for i in (0..bit_count).rev() {
            self.put_bit((value >> i) & 1 == 1);
        }
    }

    pub fn put_bit(&mut self, bit: bool) {
        let byte_index = self.length / 8;
        if self.buffer.len() <= byte_index {
            self.buffer.push(0);
        }
        if bit {
            self.buffer[byte_index] |= 0x80 >> (self.length % 8);
        }
        self.length += 1;
    }

    pub fn len_in_bits(&self) -> usize {
        self.length
    }

    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_msb_first() {
        let mut buf = BitBuffer::new();
        buf.put(0b0001, 4);
        buf.put(8, 10);
        assert_eq!(buf.len_in_bits(), 14);
        // 0001 0000001000 -> 00010000 001000xx
        assert_eq!(buf.as_bytes(), &[0x10, 0x20]);
        assert!(buf.get(3));
        assert!(!buf.get(4));
        assert!(!buf.get(100));
    }

    #[test]
    fn test_put_bit_grows() {
        let mut buf = BitBuffer::with_capacity_bits(16);
        assert!(buf.is_empty());
        for i in 0..9 {
            buf.put_bit(i % 2 == 0);
        }
        assert_eq!(buf.len_in_bits(), 9);
        assert_eq!(buf.into_bytes(), vec![0b1010_1010, 0b1000_0000]);
    }
}
