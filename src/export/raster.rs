use std::{collections::HashMap, sync::Arc};

use kurbo::Shape as _;

use crate::{
    assets::{
        decode::PreparedImage,
        fonts::TextLayoutEngine,
        icons::{ICON_VIEWBOX, rasterize_icon},
        store::AssetStore,
    },
    export::fonts::FontsReady,
    foundation::{
        color::Color,
        core::{Affine, BezPath, Rect, Size},
        error::{ShalomError, ShalomResult},
    },
    scene::{
        node::{IconGlyph, ImageFit, ImageSource, Node, NodeKind},
        style::{BoxShape, BoxStyle, TextAlign, TextStyle, WhiteSpace, normalize_whitespace},
    },
};

const MAX_IMAGE_DIM: u32 = 8_192;

/// Rasterization parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RasterOptions {
    /// Device pixels per canvas pixel.
    pub scale: f32,
    /// Backdrop under the canvas; `None` keeps it transparent.
    pub background: Option<Color>,
}

/// Rasterized canvas in premultiplied RGBA8.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Row-major premultiplied RGBA8 bytes.
    pub rgba8_premul: Vec<u8>,
}

impl RasterImage {
    /// Premultiplied pixel at `(x, y)`.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = ((y as usize) * (self.width as usize) + (x as usize)) * 4;
        let px = self.rgba8_premul.get(i..i + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }
}

/// Device size of a canvas of `size` at `scale`, checked against the pixmap limits.
pub fn device_size(size: Size, scale: f32) -> ShalomResult<(u16, u16)> {
    let to_px = |v: f64| -> ShalomResult<u16> {
        let px = (v * f64::from(scale)).round();
        if !px.is_finite() || px < 1.0 || px > f64::from(u16::MAX) {
            return Err(ShalomError::validation(format!(
                "scaled canvas dimension {px} is outside 1..={}",
                u16::MAX
            )));
        }
        Ok(px as u16)
    };
    Ok((to_px(size.width)?, to_px(size.height)?))
}

/// Paint the export form of a canvas.
///
/// `root` must already be in capture form: a live text control is an evaluation error.
/// Static images missing from `assets` are skipped; text is skipped when no font is loaded.
#[tracing::instrument(skip_all, fields(scale = opts.scale))]
pub fn rasterize(
    root: &Node,
    assets: &AssetStore,
    fonts: &FontsReady,
    opts: &RasterOptions,
) -> ShalomResult<RasterImage> {
    let (width, height) = device_size(root.frame.size(), opts.scale)?;
    let mut ctx = vello_cpu::RenderContext::new(width, height);
    ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);

    if let Some(bg) = opts.background.filter(|c| !c.is_transparent()) {
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint(cpu_color(bg));
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            0.0,
            0.0,
            f64::from(width),
            f64::from(height),
        ));
    }

    let mut painter = Painter {
        assets,
        fonts,
        text: TextLayoutEngine::new(assets.fonts()),
        font_cache: HashMap::new(),
        skipped_text: 0,
    };
    let base = Affine::scale(f64::from(opts.scale)) * Affine::translate(-root.frame.origin().to_vec2());
    painter.paint(&mut ctx, root, base * root.local_transform())?;
    if painter.skipped_text > 0 {
        tracing::warn!(nodes = painter.skipped_text, "text skipped, no font available");
    }

    ctx.flush();
    let mut pixmap = vello_cpu::Pixmap::new(width, height);
    ctx.render_to_pixmap(&mut pixmap);

    tracing::debug!(width, height, "canvas rasterized");
    Ok(RasterImage {
        width: u32::from(width),
        height: u32::from(height),
        rgba8_premul: pixmap.data_as_u8_slice().to_vec(),
    })
}

struct Painter<'a> {
    assets: &'a AssetStore,
    fonts: &'a FontsReady,
    text: TextLayoutEngine,
    font_cache: HashMap<(u64, u32), vello_cpu::peniko::FontData>,
    skipped_text: usize,
}

impl Painter<'_> {
    fn paint(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        node: &Node,
        xf: Affine,
    ) -> ShalomResult<()> {
        if node.style.is_hidden() {
            return Ok(());
        }
        let size = node.frame.size();
        let layered = node.style.opacity < 1.0;
        if layered {
            ctx.push_opacity_layer(node.style.opacity.clamp(0.0, 1.0));
        }

        if let Some(bg) = node.style.background.filter(|c| !c.is_transparent()) {
            ctx.set_transform(affine_to_cpu(xf));
            ctx.set_paint(cpu_color(bg));
            ctx.fill_path(&bezpath_to_cpu(&outline(size, &node.style, 0.0)));
        }

        match &node.kind {
            NodeKind::Container | NodeKind::Canvas(_) => {}
            NodeKind::Text(t) => self.paint_text(ctx, &t.text, &t.style, size, xf)?,
            NodeKind::TextField(field) => {
                return Err(ShalomError::evaluation(format!(
                    "live text control '{}' cannot be painted; capture the tree first",
                    field.field.as_str()
                )));
            }
            NodeKind::Image { source, fit } => {
                self.paint_image(ctx, source, *fit, size, &node.style, xf)?
            }
            NodeKind::Icon { glyph, color } => paint_icon(ctx, *glyph, *color, size, xf)?,
            NodeKind::Shape { path, fill } => {
                ctx.set_transform(affine_to_cpu(xf));
                ctx.set_paint(cpu_color(*fill));
                ctx.fill_path(&bezpath_to_cpu(path));
            }
        }

        for child in &node.children {
            self.paint(ctx, child, xf * child.local_transform())?;
        }

        // Children fill the whole border box, so the border goes on top of them.
        if let Some(border) = node.style.border
            && border.width > 0.0
        {
            ctx.set_transform(affine_to_cpu(xf));
            ctx.set_stroke(vello_cpu::kurbo::Stroke::new(border.width));
            ctx.set_paint(cpu_color(border.color));
            ctx.stroke_path(&bezpath_to_cpu(&outline(size, &node.style, border.width / 2.0)));
        }

        if layered {
            ctx.pop_layer();
        }
        Ok(())
    }

    fn paint_text(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        text: &str,
        style: &TextStyle,
        size: Size,
        xf: Affine,
    ) -> ShalomResult<()> {
        let text = normalize_whitespace(text, style.white_space);
        if text.trim().is_empty() {
            return Ok(());
        }
        let Some(family) = self.fonts.family_for(&style.font_family) else {
            self.skipped_text += 1;
            return Ok(());
        };

        let border_box = style.margin.deflate(Rect::from_origin_size((0.0, 0.0), size));
        let content = style.padding.deflate(border_box);
        let max_width = match style.white_space {
            WhiteSpace::NoWrap => None,
            WhiteSpace::Normal | WhiteSpace::PreWrap => Some(content.width().max(1.0) as f32),
        };
        let layout = self.text.layout(&text, family, style, max_width)?;
        let line_h = style.font_size * style.line_height;

        ctx.set_transform(affine_to_cpu(xf));
        for (i, line) in layout.lines().enumerate() {
            let m = line.metrics();
            let top = content.y0 as f32 + i as f32 * line_h;
            let baseline = top + (line_h - (m.ascent + m.descent)) / 2.0 + m.ascent;
            let slack = content.width() as f32 - m.advance;
            let dx = content.x0 as f32
                + match style.align {
                    TextAlign::Left => 0.0,
                    TextAlign::Center => slack / 2.0,
                    TextAlign::Right => slack,
                };

            for item in line.items() {
                let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                    continue;
                };
                let font = run.run().font();
                let cpu_font = self
                    .font_cache
                    .entry((font.data.id(), font.index))
                    .or_insert_with(|| {
                        vello_cpu::peniko::FontData::new(
                            vello_cpu::peniko::Blob::from(font.data.data().to_vec()),
                            font.index,
                        )
                    })
                    .clone();
                let font_size = run.run().font_size();
                let glyphs: Vec<vello_cpu::Glyph> = run
                    .positioned_glyphs()
                    .map(|g| vello_cpu::Glyph {
                        id: g.id,
                        x: dx + g.x,
                        y: baseline + (g.y - m.baseline),
                    })
                    .collect();

                if let Some(shadow) = style.text_shadow {
                    let (sx, sy) = (shadow.dx as f32, shadow.dy as f32);
                    ctx.set_paint(cpu_color(shadow.color));
                    ctx.glyph_run(&cpu_font)
                        .font_size(font_size)
                        .fill_glyphs(glyphs.iter().map(|g| vello_cpu::Glyph {
                            id: g.id,
                            x: g.x + sx,
                            y: g.y + sy,
                        }));
                }
                let brush = run.style().brush;
                ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(
                    brush.r, brush.g, brush.b, brush.a,
                ));
                ctx.glyph_run(&cpu_font)
                    .font_size(font_size)
                    .fill_glyphs(glyphs.into_iter());
            }
        }
        Ok(())
    }

    fn paint_image(
        &mut self,
        ctx: &mut vello_cpu::RenderContext,
        source: &ImageSource,
        fit: ImageFit,
        size: Size,
        style: &BoxStyle,
        xf: Affine,
    ) -> ShalomResult<()> {
        let prepared = match source {
            ImageSource::Static(asset) => match self.assets.image(*asset) {
                Some(img) => img.clone(),
                None => {
                    tracing::debug!(asset = asset.file_name(), "image unavailable, skipped");
                    return Ok(());
                }
            },
            ImageSource::Photo(photo) => photo.image().clone(),
        };

        let (sx, sy) = axis_scales(xf);
        let dw = device_extent(size.width * sx)?;
        let dh = device_extent(size.height * sy)?;
        let mut fitted = fit_image(&prepared, dw, dh, fit)?;
        apply_shape_mask(&mut fitted, style.shape, style.corner_radius * sx.min(sy));

        let pixmap = pixmap_from_premul_bytes(fitted.as_raw(), dw, dh)?;
        let to_frame = Affine::scale_non_uniform(size.width / f64::from(dw), size.height / f64::from(dh));
        ctx.set_transform(affine_to_cpu(xf * to_frame));
        ctx.set_paint(vello_cpu::Image {
            image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
            sampler: vello_cpu::peniko::ImageSampler::default(),
        });
        ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, f64::from(dw), f64::from(dh)));
        Ok(())
    }
}

fn paint_icon(
    ctx: &mut vello_cpu::RenderContext,
    glyph: IconGlyph,
    color: Color,
    size: Size,
    xf: Affine,
) -> ShalomResult<()> {
    let to_frame = Affine::scale_non_uniform(size.width / ICON_VIEWBOX, size.height / ICON_VIEWBOX);
    let (img, adjust) = rasterize_icon(glyph, color, xf * to_frame)?;
    let pixmap = pixmap_from_premul_bytes(&img.rgba8_premul, img.width, img.height)?;
    ctx.set_transform(affine_to_cpu(adjust));
    ctx.set_paint(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    });
    ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
        0.0,
        0.0,
        f64::from(img.width),
        f64::from(img.height),
    ));
    Ok(())
}

/// Box outline of `size`, shrunk by `inset` on every side.
fn outline(size: Size, style: &BoxStyle, inset: f64) -> BezPath {
    let rect = Rect::new(
        inset,
        inset,
        (size.width - inset).max(inset),
        (size.height - inset).max(inset),
    );
    match style.shape {
        BoxShape::Ellipse => kurbo::Ellipse::from_rect(rect).to_path(0.1),
        BoxShape::Rect if style.corner_radius > 0.0 => {
            kurbo::RoundedRect::from_rect(rect, (style.corner_radius - inset).max(0.0)).to_path(0.1)
        }
        BoxShape::Rect => rect.to_path(0.1),
    }
}

fn axis_scales(xf: Affine) -> (f64, f64) {
    let [a, b, c, d, _, _] = xf.as_coeffs();
    ((a * a + b * b).sqrt().max(1e-6), (c * c + d * d).sqrt().max(1e-6))
}

fn device_extent(v: f64) -> ShalomResult<u32> {
    let px = v.round();
    if !px.is_finite() || px > f64::from(MAX_IMAGE_DIM) {
        return Err(ShalomError::render(format!(
            "image raster size {px} exceeds {MAX_IMAGE_DIM}"
        )));
    }
    Ok((px as u32).max(1))
}

/// Scale `src` into a `dw` x `dh` premultiplied buffer: cropped to fill for `Cover`, letterboxed
/// on transparency for `Contain`.
pub(crate) fn fit_image(
    src: &PreparedImage,
    dw: u32,
    dh: u32,
    fit: ImageFit,
) -> ShalomResult<image::RgbaImage> {
    use image::imageops::{self, FilterType};

    let buf = image::RgbaImage::from_raw(src.width, src.height, src.rgba8_premul.as_ref().clone())
        .ok_or_else(|| ShalomError::render("image buffer size does not match its dimensions"))?;
    let (iw, ih) = (f64::from(src.width), f64::from(src.height));
    let (fw, fh) = (f64::from(dw), f64::from(dh));

    match fit {
        ImageFit::Cover => {
            let scale = (fw / iw).max(fh / ih);
            let cw = ((fw / scale).round() as u32).clamp(1, src.width);
            let ch = ((fh / scale).round() as u32).clamp(1, src.height);
            let x = (src.width - cw) / 2;
            let y = (src.height - ch) / 2;
            let cropped = imageops::crop_imm(&buf, x, y, cw, ch).to_image();
            Ok(imageops::resize(&cropped, dw, dh, FilterType::Triangle))
        }
        ImageFit::Contain => {
            let scale = (fw / iw).min(fh / ih);
            let tw = ((iw * scale).round() as u32).clamp(1, dw);
            let th = ((ih * scale).round() as u32).clamp(1, dh);
            let resized = imageops::resize(&buf, tw, th, FilterType::Triangle);
            let mut out = image::RgbaImage::new(dw, dh);
            imageops::replace(
                &mut out,
                &resized,
                i64::from((dw - tw) / 2),
                i64::from((dh - th) / 2),
            );
            Ok(out)
        }
    }
}

/// Multiply premultiplied pixels by the coverage of the box shape, antialiased over one pixel.
pub(crate) fn apply_shape_mask(img: &mut image::RgbaImage, shape: BoxShape, radius_px: f64) {
    let (w, h) = (f64::from(img.width()), f64::from(img.height()));
    let (cx, cy) = (w / 2.0, h / 2.0);
    let coverage: Box<dyn Fn(f64, f64) -> f64> = match shape {
        BoxShape::Rect if radius_px <= 0.0 => return,
        BoxShape::Rect => {
            let r = radius_px.min(cx).min(cy);
            Box::new(move |x, y| {
                let qx = (x - cx).abs() - (cx - r);
                let qy = (y - cy).abs() - (cy - r);
                let outside = qx.max(0.0).hypot(qy.max(0.0));
                let inside = qx.max(qy).min(0.0);
                outside + inside - r
            })
        }
        BoxShape::Ellipse => {
            let rmin = cx.min(cy);
            Box::new(move |x, y| {
                let k = ((x - cx) / cx).hypot((y - cy) / cy);
                (k - 1.0) * rmin
            })
        }
    };

    for (x, y, px) in img.enumerate_pixels_mut() {
        let d = coverage(f64::from(x) + 0.5, f64::from(y) + 0.5);
        let a = (0.5 - d).clamp(0.0, 1.0);
        if a >= 1.0 {
            continue;
        }
        for c in px.0.iter_mut() {
            *c = (f64::from(*c) * a).round() as u8;
        }
    }
}

fn cpu_color(c: Color) -> vello_cpu::peniko::Color {
    vello_cpu::peniko::Color::from_rgba8(c.r, c.g, c.b, c.a)
}

fn affine_to_cpu(a: Affine) -> vello_cpu::kurbo::Affine {
    vello_cpu::kurbo::Affine::new(a.as_coeffs())
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(bytes: &[u8], width: u32, height: u32) -> ShalomResult<vello_cpu::Pixmap> {
    let w: u16 = width
        .try_into()
        .map_err(|_| ShalomError::render("pixmap width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| ShalomError::render("pixmap height exceeds u16"))?;
    if bytes.len() != (width as usize).saturating_mul(height as usize).saturating_mul(4) {
        return Err(ShalomError::render("pixmap byte len mismatch"));
    }
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, true))
}

#[cfg(test)]
#[path = "../../tests/unit/export/raster.rs"]
mod tests;
