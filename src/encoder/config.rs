use std::sync::OnceLock;

use crate::encoder::modes::kanji::ShiftJisFn;
use crate::models::ECLevel;

fn parse_env_ec_level(name: &str, default: ECLevel) -> ECLevel {
    std::env::var(name)
        .ok()
        .and_then(|v| v.parse::<ECLevel>().ok())
        .unwrap_or(default)
}

static DEFAULT_EC_LEVEL: OnceLock<ECLevel> = OnceLock::new();

/// Level used when options do not name one (`QR_DEFAULT_EC_LEVEL`, else M)
pub(crate) fn default_ec_level() -> ECLevel {
    *DEFAULT_EC_LEVEL.get_or_init(|| parse_env_ec_level("QR_DEFAULT_EC_LEVEL", ECLevel::M))
}

/// Whether Kanji mode may be used, and how characters map to Shift-JIS
#[derive(Debug, Clone, Copy, Default)]
pub enum KanjiMode {
    /// Kanji-eligible text is encoded in Byte mode
    #[default]
    Disabled,
    /// Kanji-eligible text may use Kanji mode via this converter
    Enabled(ShiftJisFn),
}

impl KanjiMode {
    pub fn is_enabled(&self) -> bool {
        matches!(self, KanjiMode::Enabled(_))
    }
}

/// Options for a single encode call
#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions {
    /// Symbol version (1-40); `None` picks the smallest that fits
    pub version: Option<u8>,
    /// Error correction level
    pub error_correction_level: ECLevel,
    /// Mask pattern (0-7); `None` picks the lowest-penalty pattern
    pub mask_pattern: Option<u8>,
    /// Kanji mode configuration
    pub kanji: KanjiMode,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            version: None,
            error_correction_level: default_ec_level(),
            mask_pattern: None,
            kanji: KanjiMode::Disabled,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_version(mut self, version: u8) -> Self {
        self.version = Some(version);
        self
    }

    pub fn with_error_correction_level(mut self, level: ECLevel) -> Self {
        self.error_correction_level = level;
        self
    }

    pub fn with_mask_pattern(mut self, mask: u8) -> Self {
        self.mask_pattern = Some(mask);
        self
    }

    pub fn with_kanji(mut self, to_sjis: ShiftJisFn) -> Self {
        self.kanji = KanjiMode::Enabled(to_sjis);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        fn no_sjis(_: char) -> Option<u16> {
            None
        }
        let opts = EncodeOptions::new()
            .with_version(5)
            .with_error_correction_level(ECLevel::H)
            .with_mask_pattern(3)
            .with_kanji(no_sjis);
        assert_eq!(opts.version, Some(5));
        assert_eq!(opts.error_correction_level, ECLevel::H);
        assert_eq!(opts.mask_pattern, Some(3));
        assert!(opts.kanji.is_enabled());
        assert!(!KanjiMode::default().is_enabled());
    }

    #[test]
    fn test_env_parse_fallback() {
        assert_eq!(
            parse_env_ec_level("QR_TEST_UNSET_VARIABLE_FOR_EC", ECLevel::Q),
            ECLevel::Q
        );
    }
}
