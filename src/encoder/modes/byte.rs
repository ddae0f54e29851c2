/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bitstream::BitBuffer;

/// Encode byte mode data (8 bits per UTF-8 byte)
pub struct ByteEncoder;

impl ByteEncoder {
    pub fn write(data: &str, buffer: &mut BitBuffer) {
        for &byte in data.as_bytes() {
            buffer.put(byte as u32, 8);
        }
    }
}
