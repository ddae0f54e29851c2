use crate::models::QRCode;
use crate::renderer::options::RenderOptions;

/// Half-block glyphs indexed by (top dark, bottom dark)
struct Blocks {
    ww: char,
    wb: char,
    bb: char,
    bw: char,
}

const BLOCKS: Blocks = Blocks {
    ww: ' ',
    wb: '▄',
    bb: '█',
    bw: '▀',
};

const INVERTED_BLOCKS: Blocks = Blocks {
    bb: ' ',
    bw: '▄',
    ww: '█',
    wb: '▀',
};

impl Blocks {
    fn glyph(&self, top: bool, bottom: bool) -> char {
        match (top, bottom) {
            (true, true) => self.bb,
            (true, false) => self.bw,
            (false, true) => self.wb,
            (false, false) => self.ww,
        }
    }
}

/// Terminal rendering, two module rows per text line
pub fn to_utf8(qr: &QRCode, opts: &RenderOptions) -> String {
    let blocks = if opts.dark.hex() == "#ffffff" || opts.light.hex() == "#000000" {
        &INVERTED_BLOCKS
    } else {
        &BLOCKS
    };

    let size = qr.size();
    let margin = opts.margin as usize;
    let blank_line: String = std::iter::repeat_n(blocks.ww, size + margin * 2).collect();
    let side: String = std::iter::repeat_n(blocks.ww, margin).collect();

    let mut out = String::new();
    for _ in 0..margin / 2 {
        out.push_str(&blank_line);
        out.push('\n');
    }
    for row in (0..size).step_by(2) {
        out.push_str(&side);
        for col in 0..size {
            out.push(blocks.glyph(qr.get(row, col), qr.get(row + 1, col)));
        }
        out.push_str(&side);
        out.push('\n');
    }
    for i in 0..margin / 2 {
        out.push_str(&blank_line);
        if i + 1 < margin / 2 {
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{EncodeInput, EncodeOptions, QrEncoder};

    fn hello() -> QRCode {
        QrEncoder::encode(EncodeInput::Text("HELLO WORLD"), &EncodeOptions::new()).unwrap()
    }

    #[test]
    fn test_utf8_shape() {
        let out = to_utf8(&hello(), &RenderOptions::new());
        let lines: Vec<&str> = out.split('\n').collect();
        // 2 top margin lines, 11 symbol lines, 2 bottom margin lines
        assert_eq!(lines.len(), 15);
        assert!(lines.iter().all(|l| l.chars().count() == 29));
        assert!(!out.ends_with('\n'));
        // First symbol line: margin, then finder top (rows 0 and 1)
        let first: Vec<char> = lines[2].chars().collect();
        assert_eq!(first[4], '█');
        assert_eq!(first[5], '▀');
    }

    #[test]
    fn test_utf8_inverted_colors() {
        let opts = RenderOptions::new().with_colors("#fff", "#000").unwrap();
        let out = to_utf8(&hello(), &opts);
        assert!(out.starts_with('█'));
    }

    #[test]
    fn test_utf8_last_row_half_block() {
        let out = to_utf8(&hello(), &RenderOptions::new().with_margin(0));
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 11);
        // Row 20 pairs with an implicit light row below
        assert_eq!(lines[10].chars().next(), Some('▀'));
    }
}
