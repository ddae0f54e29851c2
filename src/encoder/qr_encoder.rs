use tracing::debug;

use crate::encoder::codewords::{create_codewords, create_data};
use crate::encoder::config::EncodeOptions;
use crate::encoder::function_patterns::FunctionPatterns;
use crate::encoder::segments::{from_hints, optimize, raw_split};
use crate::encoder::version::best_version;
use crate::error::{QrError, Result};
use crate::models::{ECLevel, MaskPattern, QRCode, Segment, SegmentHint, Version};

/// Encoder input: free text, or caller-provided segments
#[derive(Debug, Clone, Copy)]
pub enum EncodeInput<'a> {
    /// Text segmented automatically
    Text(&'a str),
    /// Segments with optional forced modes
    Segments(&'a [SegmentHint]),
}

/// Main QR encoder
pub struct QrEncoder;

impl QrEncoder {
    /// Encode `input` into a complete symbol
    pub fn encode(input: EncodeInput<'_>, options: &EncodeOptions) -> Result<QRCode> {
        let ec_level = options.error_correction_level;
        let requested = options.version.map(Version::new).transpose()?;
        let mask = options.mask_pattern.map(MaskPattern::from_index).transpose()?;
        let kanji_enabled = options.kanji.is_enabled();

        let segments = match input {
            EncodeInput::Text(text) => {
                if text.is_empty() {
                    return Err(QrError::EmptyInput);
                }
                let estimate = requested
                    .or_else(|| best_version(&raw_split(text, kanji_enabled), ec_level))
                    .unwrap_or(Version::MAX);
                optimize(text, estimate, kanji_enabled)?
            }
            EncodeInput::Segments(hints) => {
                let segments = from_hints(hints, kanji_enabled)?;
                if segments.is_empty() {
                    return Err(QrError::EmptyInput);
                }
                segments
            }
        };

        let minimum =
            best_version(&segments, ec_level).ok_or(QrError::CapacityExceeded { ec_level })?;
        let version = match requested {
            Some(v) if v.number() < minimum.number() => {
                return Err(QrError::VersionTooSmall {
                    requested: v.number(),
                    minimum: minimum.number(),
                });
            }
            Some(v) => v,
            None => minimum,
        };

        debug!(
            version = version.number(),
            ec_level = ?ec_level,
            segments = segments.len(),
            "selected symbol version"
        );

        Self::build(segments, version, ec_level, mask, options)
    }

    fn build(
        segments: Vec<Segment>,
        version: Version,
        ec_level: ECLevel,
        mask: Option<MaskPattern>,
        options: &EncodeOptions,
    ) -> Result<QRCode> {
        let data = create_data(version, ec_level, &segments, options.kanji)?;
        let codewords = create_codewords(&data, version, ec_level)?;

        let mut placed = FunctionPatterns::new(version, ec_level).place_data(&codewords);
        let mask = match mask {
            Some(mask) => mask,
            None => placed.best_mask(),
        };
        debug!(mask = mask.index(), "applying mask");
        let modules = placed.finish(mask);

        Ok(QRCode {
            modules,
            version,
            error_correction: ec_level,
            mask_pattern: mask,
            segments,
        })
    }
}
