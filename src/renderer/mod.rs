//! Output renderers: RGBA pixels, PNG, data URLs, SVG and terminal text

/// RGBA pixel buffer, PNG and data URL output
pub mod image_data;
/// Colour parsing and render options
pub mod options;
/// SVG document output
pub mod svg;
/// Half-block terminal output
pub mod utf8;

pub use image_data::{to_data_url, to_image, to_image_data, to_png};
pub use options::{RenderOptions, Rgba};
pub use svg::to_svg;
pub use utf8::to_utf8;
