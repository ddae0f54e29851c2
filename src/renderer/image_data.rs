use base64::{Engine, engine::general_purpose::STANDARD};
use image::codecs::png::PngEncoder;
use image::{ColorType, ImageEncoder, RgbaImage};

use crate::error::{QrError, Result};
use crate::models::QRCode;
use crate::renderer::options::RenderOptions;

/// Largest image side accepted, in pixels
pub const MAX_IMAGE_WIDTH: usize = 16_384;

/// Side length in pixels, checked against [`MAX_IMAGE_WIDTH`]
fn checked_width(size: usize, opts: &RenderOptions) -> Result<usize> {
    let scale = opts.scale_for(size);
    if !scale.is_finite() || scale <= 0.0 {
        return Err(QrError::InvalidImageSize(format!("scale {scale}")));
    }
    let total = (size + opts.margin as usize * 2) as f64;
    let width = (total * scale).floor();
    if !(1.0..=MAX_IMAGE_WIDTH as f64).contains(&width) {
        return Err(QrError::InvalidImageSize(format!(
            "{width} pixels wide (limit {MAX_IMAGE_WIDTH})"
        )));
    }
    Ok(width as usize)
}

/// Row-major RGBA pixels of the symbol with its quiet zone.
///
/// Returns the pixel buffer and the side length in pixels.
pub fn to_image_data(qr: &QRCode, opts: &RenderOptions) -> Result<(Vec<u8>, usize)> {
    let size = qr.size();
    let scale = opts.scale_for(size);
    let width = checked_width(size, opts)?;
    let margin = opts.margin as f64 * scale;
    let light = opts.light.to_array();
    let dark = opts.dark.to_array();

    let len = width
        .checked_mul(width)
        .and_then(|n| n.checked_mul(4))
        .ok_or(QrError::Internal("pixel buffer size overflows"))?;
    let mut pixels = Vec::with_capacity(len);
    for i in 0..width {
        for j in 0..width {
            let (y, x) = (i as f64, j as f64);
            let inside = y >= margin
                && x >= margin
                && y < width as f64 - margin
                && x < width as f64 - margin;
            let color = if inside {
                let row = (((y - margin) / scale).floor() as usize).min(size - 1);
                let col = (((x - margin) / scale).floor() as usize).min(size - 1);
                if qr.get(row, col) { dark } else { light }
            } else {
                light
            };
            pixels.extend_from_slice(&color);
        }
    }
    Ok((pixels, width))
}

/// Symbol as an `image` RGBA buffer
pub fn to_image(qr: &QRCode, opts: &RenderOptions) -> Result<RgbaImage> {
    let (pixels, width) = to_image_data(qr, opts)?;
    let side = u32::try_from(width).map_err(|_| QrError::Internal("image width exceeds u32"))?;
    RgbaImage::from_raw(side, side, pixels)
        .ok_or(QrError::Internal("pixel buffer does not match image size"))
}

/// PNG-encoded symbol
pub fn to_png(qr: &QRCode, opts: &RenderOptions) -> Result<Vec<u8>> {
    let image = to_image(qr, opts)?;
    let mut png = Vec::new();
    PngEncoder::new(&mut png).write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ColorType::Rgba8,
    )?;
    Ok(png)
}

/// `data:image/png;base64,...` URL of the PNG rendering
pub fn to_data_url(qr: &QRCode, opts: &RenderOptions) -> Result<String> {
    let png = to_png(qr, opts)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::{EncodeInput, EncodeOptions, QrEncoder};
    use crate::renderer::options::Rgba;

    fn hello() -> QRCode {
        QrEncoder::encode(EncodeInput::Text("HELLO WORLD"), &EncodeOptions::new()).unwrap()
    }

    #[test]
    fn test_image_data_layout() {
        let qr = hello();
        let opts = RenderOptions::new().with_scale(2.0);
        let (pixels, width) = to_image_data(&qr, &opts).unwrap();
        assert_eq!(width, (21 + 8) * 2);
        assert_eq!(pixels.len(), width * width * 4);
        // Quiet zone is light, top-left finder corner is dark
        assert_eq!(&pixels[..4], &Rgba::WHITE.to_array());
        let at = |x: usize, y: usize| &pixels[(y * width + x) * 4..(y * width + x) * 4 + 4];
        assert_eq!(at(8, 8), &Rgba::BLACK.to_array());
        assert_eq!(at(9, 9), &Rgba::BLACK.to_array());
        // Module (1, 1) is light
        assert_eq!(at(10, 10), &Rgba::WHITE.to_array());
    }

    #[test]
    fn test_png_signature_and_data_url() {
        let qr = hello();
        let opts = RenderOptions::new();
        let png = to_png(&qr, &opts).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);

        let url = to_data_url(&qr, &opts).unwrap();
        assert!(url.starts_with("data:image/png;base64,iVBORw0KGgo"));
    }

    #[test]
    fn test_to_image_dimensions() {
        let qr = hello();
        let image = to_image(&qr, &RenderOptions::new().with_width(290)).unwrap();
        assert_eq!(image.width(), 290);
        assert_eq!(image.height(), 290);

        let image = to_image(&qr, &RenderOptions::new().with_margin(0).with_scale(1.0)).unwrap();
        assert_eq!(image.width(), 21);
    }

    #[test]
    fn test_narrow_width_uses_configured_scale() {
        let qr = hello();
        let opts = RenderOptions::new().with_width(25).with_scale(8.0);
        let image = to_image(&qr, &opts).unwrap();
        assert_eq!(image.width(), 29 * 8);
        assert_eq!(image.height(), 29 * 8);
    }

    #[test]
    fn test_oversized_or_degenerate_images_are_rejected() {
        let qr = hello();
        let too_wide = RenderOptions::new().with_width(u32::MAX);
        assert!(matches!(to_image_data(&qr, &too_wide), Err(QrError::InvalidImageSize(_))));
        assert!(matches!(to_png(&qr, &too_wide), Err(QrError::InvalidImageSize(_))));

        for scale in [f64::NAN, f64::INFINITY, 0.0, -2.0, 1e12] {
            let opts = RenderOptions::new().with_scale(scale);
            assert!(
                matches!(to_image(&qr, &opts), Err(QrError::InvalidImageSize(_))),
                "scale {scale}"
            );
        }

        // Exactly at the limit is still accepted
        let edge = RenderOptions::new().with_width(MAX_IMAGE_WIDTH as u32);
        let (_, width) = to_image_data(&qr, &edge).unwrap();
        assert!(width > MAX_IMAGE_WIDTH - 2 && width <= MAX_IMAGE_WIDTH);
    }
}
