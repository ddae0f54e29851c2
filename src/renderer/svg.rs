use std::fmt::Write;

use crate::models::QRCode;
use crate::renderer::options::{RenderOptions, Rgba};

fn color_attribute(color: &Rgba, attribute: &str) -> String {
    let mut out = format!("{attribute}=\"{}\"", color.hex());
    if color.a < 255 {
        let opacity = format!("{:.2}", color.a as f64 / 255.0);
        let opacity = opacity.strip_prefix('0').unwrap_or(&opacity);
        let _ = write!(out, " {attribute}-opacity=\"{opacity}\"");
    }
    out
}

/// Path data drawing each horizontal run of dark modules as one stroke
fn module_path(qr: &QRCode, margin: usize) -> String {
    let size = qr.size();
    let mut path = String::new();
    let mut move_by = 0usize;
    let mut new_row = false;
    let mut line_length = 0usize;

    for row in 0..size {
        for col in 0..size {
            if col == 0 && !new_row {
                new_row = true;
            }
            if !qr.get(row, col) {
                move_by += 1;
                continue;
            }

            line_length += 1;
            if col == 0 || !qr.get(row, col - 1) {
                if new_row {
                    let _ = write!(path, "M{} {}", col + margin, 0.5 + (row + margin) as f64);
                } else {
                    let _ = write!(path, "m{move_by} 0");
                }
                move_by = 0;
                new_row = false;
            }
            if col + 1 >= size || !qr.get(row, col + 1) {
                let _ = write!(path, "h{line_length}");
                line_length = 0;
            }
        }
    }
    path
}

/// Standalone SVG document for the symbol
pub fn to_svg(qr: &QRCode, opts: &RenderOptions) -> String {
    let margin = opts.margin as usize;
    let total = qr.size() + margin * 2;

    let mut svg = String::from("<svg xmlns=\"http://www.w3.org/2000/svg\" ");
    if let Some(width) = opts.effective_width() {
        let _ = write!(svg, "width=\"{width}\" height=\"{width}\" ");
    }
    let _ = write!(
        svg,
        "viewBox=\"0 0 {total} {total}\" shape-rendering=\"crispEdges\">"
    );
    if opts.light.a != 0 {
        let _ = write!(
            svg,
            "<path {} d=\"M0 0h{total}v{total}H0z\"/>",
            color_attribute(&opts.light, "fill")
        );
    }
    let _ = write!(
        svg,
        "<path {} d=\"{}\"/></svg>",
        color_attribute(&opts.dark, "stroke"),
        module_path(qr, margin)
    );
    svg.push('\n');
    svg
}
