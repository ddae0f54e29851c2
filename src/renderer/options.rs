use crate::error::{QrError, Result};

/// RGBA colour parsed from a hex string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);
    pub const WHITE: Rgba = Rgba::new(255, 255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#rgb`, `#rgba`, `#rrggbb` or `#rrggbbaa` (leading `#` optional)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let invalid = || QrError::InvalidColor(hex.to_string());
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let expanded: String = match digits.len() {
            3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 | 8 => digits.to_string(),
            _ => return Err(invalid()),
        };

        let channel = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).map_err(|_| invalid());
        let a = if expanded.len() == 8 { channel(6)? } else { 255 };
        Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, a))
    }

    /// Lower-case `#rrggbb`, alpha excluded
    pub fn hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Options shared by all renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Quiet zone width in modules
    pub margin: u32,
    /// Pixels per module; ignored when `width` is set
    pub scale: f64,
    /// Requested output width in pixels; values below 21 are ignored
    pub width: Option<u32>,
    /// Dark module colour
    pub dark: Rgba,
    /// Light module and quiet zone colour
    pub light: Rgba,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            margin: 4,
            scale: 4.0,
            width: None,
            dark: Rgba::BLACK,
            light: Rgba::WHITE,
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_margin(mut self, margin: u32) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_colors(mut self, dark: &str, light: &str) -> Result<Self> {
        self.dark = Rgba::from_hex(dark)?;
        self.light = Rgba::from_hex(light)?;
        Ok(self)
    }

    /// Requested width, if large enough to be honoured
    pub fn effective_width(&self) -> Option<u32> {
        self.width.filter(|&w| w >= 21)
    }

    /// Pixels per module for a symbol of `size` modules
    pub fn scale_for(&self, size: usize) -> f64 {
        let total = (size + self.margin as usize * 2) as f64;
        match self.effective_width() {
            Some(width) if width as f64 >= total => width as f64 / total,
            Some(_) | None => self.scale,
        }
    }

    /// Output image side in pixels for a symbol of `size` modules
    pub fn image_width(&self, size: usize) -> usize {
        let total = (size + self.margin as usize * 2) as f64;
        (total * self.scale_for(size)).floor() as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_forms() {
        assert_eq!(Rgba::from_hex("#000").unwrap(), Rgba::BLACK);
        assert_eq!(Rgba::from_hex("#fff8").unwrap(), Rgba::new(255, 255, 255, 0x88));
        assert_eq!(Rgba::from_hex("336699").unwrap(), Rgba::new(0x33, 0x66, 0x99, 255));
        assert_eq!(Rgba::from_hex("#FF000080").unwrap(), Rgba::new(255, 0, 0, 0x80));
        assert_eq!(Rgba::from_hex("#ABCDEF").unwrap().hex(), "#abcdef");
    }

    #[test]
    fn test_hex_rejects_bad_input() {
        for bad in ["", "#12", "#12345", "#123456789", "#ggg", "#12 456"] {
            assert!(matches!(Rgba::from_hex(bad), Err(QrError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn test_scale_from_width() {
        // 21 modules + 2*4 margin = 29
        let opts = RenderOptions::new().with_width(290);
        assert_eq!(opts.scale_for(21), 10.0);
        assert_eq!(opts.image_width(21), 290);

        // Too narrow for the symbol: the configured scale applies
        let opts = RenderOptions::new().with_width(25).with_scale(8.0);
        assert_eq!(opts.scale_for(21), 8.0);
        assert_eq!(opts.image_width(21), 29 * 8);

        // Below 21 the width is ignored and scale applies
        let opts = RenderOptions::new().with_width(20).with_scale(8.0);
        assert_eq!(opts.effective_width(), None);
        assert_eq!(opts.image_width(21), 232);
    }
}
