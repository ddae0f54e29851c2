use crate::encoder::bitstream::BitBuffer;
use crate::encoder::config::KanjiMode;
use crate::encoder::modes::write_segment;
use crate::encoder::reed_solomon::ReedSolomonEncoder;
use crate::encoder::tables::{data_codewords, total_codewords, BlockLayout};
use crate::error::{QrError, Result};
use crate::models::{ECLevel, Segment, Version};

const PAD_BYTES: [u8; 2] = [0xEC, 0x11];

/// Data codeword sequence: segments, terminator, byte alignment, padding
pub fn create_data(
    version: Version,
    ec_level: ECLevel,
    segments: &[Segment],
    kanji: KanjiMode,
) -> Result<Vec<u8>> {
    let capacity_bits = data_codewords(version, ec_level) * 8;
    let mut buffer = BitBuffer::with_capacity_bits(capacity_bits);

    for segment in segments {
        write_segment(segment, version, kanji, &mut buffer)?;
    }

    // Terminator, shortened when the symbol is nearly full
    let remaining = capacity_bits.saturating_sub(buffer.len_in_bits());
    buffer.put(0, remaining.min(4));

    while buffer.len_in_bits() % 8 != 0 {
        buffer.put_bit(false);
    }

    let mut data = buffer.into_bytes();
    let data_len = capacity_bits / 8;
    let mut pad = PAD_BYTES.iter().cycle();
    while data.len() < data_len {
        if let Some(&byte) = pad.next() {
            data.push(byte);
        }
    }
    Ok(data)
}

/// Split data into blocks, append Reed-Solomon EC and interleave
pub fn create_codewords(data: &[u8], version: Version, ec_level: ECLevel) -> Result<Vec<u8>> {
    if data.len() != data_codewords(version, ec_level) {
        return Err(QrError::Internal("data codeword count does not match the symbol"));
    }
    let layout = BlockLayout::new(version, ec_level);
    let encoder = ReedSolomonEncoder::new(layout.ecc_per_block)?;

    let mut data_blocks: Vec<&[u8]> = Vec::with_capacity(layout.num_blocks());
    let mut ec_blocks: Vec<Vec<u8>> = Vec::with_capacity(layout.num_blocks());
    let mut offset = 0;
    for b in 0..layout.num_blocks() {
        let len = layout.data_len(b);
        let block = &data[offset..offset + len];
        ec_blocks.push(encoder.encode(block));
        data_blocks.push(block);
        offset += len;
    }

    let mut out = Vec::with_capacity(total_codewords(version));
    let max_data = data_blocks.iter().map(|b| b.len()).max().unwrap_or(0);
    for i in 0..max_data {
        for block in &data_blocks {
            if let Some(&byte) = block.get(i) {
                out.push(byte);
            }
        }
    }
    for i in 0..layout.ecc_per_block {
        for block in &ec_blocks {
            out.push(block[i]);
        }
    }
    Ok(out)
}
