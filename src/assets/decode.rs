use std::sync::Arc;

use anyhow::Context;

use crate::foundation::{error::ShalomResult, math::premultiply_rgba8_in_place};

/// Decoded raster image in premultiplied RGBA8 form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PreparedImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 bytes.
    pub rgba8_premul: Arc<Vec<u8>>,
}

/// Decode a shipped image or a photo upload into premultiplied RGBA8.
///
/// The whole file is decoded, so truncated or corrupt data fails here rather than at paint time.
pub fn decode_image(bytes: &[u8]) -> ShalomResult<PreparedImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(PreparedImage {
        width,
        height,
        rgba8_premul: Arc::new(rgba8_premul),
    })
}

/// Parse an SVG document.
pub fn parse_svg(bytes: &[u8]) -> ShalomResult<usvg::Tree> {
    let opts = usvg::Options::default();
    let tree = usvg::Tree::from_data(bytes, &opts).context("parse svg tree")?;
    Ok(tree)
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
