use crate::{
    assets::decode::{PreparedImage, parse_svg},
    foundation::{
        color::Color,
        core::Affine,
        error::{ShalomError, ShalomResult},
    },
    scene::node::IconGlyph,
};

const CAMERA: &str = r#"<path stroke-linecap="round" stroke-linejoin="round" d="M6.827 6.175A2.31 2.31 0 015.186 7.23c-.38.054-.757.112-1.134.175C2.999 7.58 2.25 8.507 2.25 9.574V18a2.25 2.25 0 002.25 2.25h15A2.25 2.25 0 0021.75 18V9.574c0-1.067-.75-1.994-1.802-2.169a47.865 47.865 0 00-1.134-.175 2.31 2.31 0 01-1.64-1.055l-.822-1.316a2.192 2.192 0 00-1.736-1.039 48.774 48.774 0 00-5.232 0 2.192 2.192 0 00-1.736 1.039l-.821 1.316z"/><path stroke-linecap="round" stroke-linejoin="round" d="M16.5 12.75a4.5 4.5 0 11-9 0 4.5 4.5 0 019 0z"/>"#;

const LOCATION: &str = r#"<path d="M3 21l18 0"/><path d="M10 21v-4a2 2 0 0 1 4 0v4"/><path d="M10 5l4 0"/><path d="M12 3l0 5"/><path d="M6 21v-7m-2 2l8 -8l8 8m-2 -2v7"/>"#;

const MOVE: &str = r#"<path stroke-linecap="round" stroke-linejoin="round" d="M12 3v18M3 12h18M9 6l3-3 3 3M9 18l3 3 3-3M6 9l-3 3 3 3M18 9l3 3-3 3"/>"#;

/// Side of the icons' square view box.
pub(crate) const ICON_VIEWBOX: f64 = 24.0;

/// Standalone outline SVG for `glyph`, stroked in `color`.
pub fn icon_svg(glyph: IconGlyph, color: Color) -> String {
    let (body, width) = match glyph {
        IconGlyph::Camera => (CAMERA, 1.5),
        IconGlyph::Location => (LOCATION, 1.5),
        IconGlyph::Move => (MOVE, 2.0),
    };
    let rgb = format!("#{:02x}{:02x}{:02x}", color.r, color.g, color.b);
    let opacity = f32::from(color.a) / 255.0;
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="24" height="24" viewBox="0 0 24 24" fill="none" stroke="{rgb}" stroke-opacity="{opacity}" stroke-width="{width}" stroke-linecap="round" stroke-linejoin="round">{body}</svg>"#
    )
}

/// Pixel size for rasterizing an SVG drawn with `transform`, plus the transform to draw the
/// resulting pixmap with.
///
/// Rasterizing at the device scale keeps icons crisp at the export supersampling factor.
pub(crate) fn svg_raster_params(
    tree: &usvg::Tree,
    transform: Affine,
) -> ShalomResult<(u32, u32, Affine)> {
    fn to_px(v: f32) -> ShalomResult<u32> {
        if !v.is_finite() || v <= 0.0 {
            return Err(ShalomError::evaluation("svg has invalid width/height"));
        }
        Ok((v.ceil() as u32).max(1))
    }

    let size = tree.size();
    let base_w = to_px(size.width())?;
    let base_h = to_px(size.height())?;

    let [a, b, c, d, _e, _f] = transform.as_coeffs();
    let sx = (a * a + b * b).sqrt().max(1e-6);
    let sy = (c * c + d * d).sqrt().max(1e-6);

    let w = ((base_w as f64) * sx).ceil().max(1.0) as u32;
    let h = ((base_h as f64) * sy).ceil().max(1.0) as u32;

    const MAX_DIM: u32 = 4_096;
    if w > MAX_DIM || h > MAX_DIM {
        return Err(ShalomError::evaluation(format!(
            "svg raster size too large: {w}x{h} (max {MAX_DIM}x{MAX_DIM})"
        )));
    }

    let inv = Affine::scale_non_uniform(1.0 / sx, 1.0 / sy);
    Ok((w, h, transform * inv))
}

/// Render `tree` into a `width` x `height` premultiplied RGBA8 image.
pub(crate) fn rasterize_svg(tree: &usvg::Tree, width: u32, height: u32) -> ShalomResult<PreparedImage> {
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| ShalomError::evaluation("failed to allocate svg pixmap"))?;

    let sx = (width as f32) / tree.size().width();
    let sy = (height as f32) / tree.size().height();
    let xform = resvg::tiny_skia::Transform::from_scale(sx, sy);

    resvg::render(tree, xform, &mut pixmap.as_mut());
    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: std::sync::Arc::new(pixmap.data().to_vec()),
    })
}

/// Rasterize `glyph` for drawing with `transform` (icon view-box space to device pixels).
///
/// Returns the image and the transform to draw it with.
pub(crate) fn rasterize_icon(
    glyph: IconGlyph,
    color: Color,
    transform: Affine,
) -> ShalomResult<(PreparedImage, Affine)> {
    let tree = parse_svg(icon_svg(glyph, color).as_bytes())?;
    let (w, h, adjust) = svg_raster_params(&tree, transform)?;
    let image = rasterize_svg(&tree, w, h)?;
    Ok((image, adjust))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/icons.rs"]
mod tests;
