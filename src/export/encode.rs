use std::{
    io::Cursor,
    time::{SystemTime, UNIX_EPOCH},
};

use anyhow::Context;

use crate::{
    content::model::Mode,
    export::raster::RasterImage,
    foundation::{
        error::{ShalomError, ShalomResult},
        math::unpremultiply_rgba8_in_place,
    },
};

/// One finished export, ready for delivery.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportArtifact {
    /// Download file name, `<prefix>-shalom-<unix-millis>.png`.
    pub file_name: String,
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Encoded PNG bytes.
    pub png: Vec<u8>,
}

/// File name prefix for exports of `mode`.
pub fn file_prefix(mode: Mode) -> &'static str {
    match mode {
        Mode::Card => "feliz-cumpleaños",
        Mode::Flyer => "flyer-evento",
    }
}

/// Download file name for an export of `mode` taken at `at`.
pub fn file_name_for(mode: Mode, at: SystemTime) -> String {
    let millis = at
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    format!("{}-shalom-{millis}.png", file_prefix(mode))
}

/// Lossless PNG of a premultiplied raster.
pub fn encode_png(img: &RasterImage) -> ShalomResult<Vec<u8>> {
    let mut straight = img.rgba8_premul.clone();
    unpremultiply_rgba8_in_place(&mut straight);
    let buf = image::RgbaImage::from_raw(img.width, img.height, straight)
        .ok_or_else(|| ShalomError::render("raster byte len does not match its dimensions"))?;

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(buf)
        .write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(png)
}
