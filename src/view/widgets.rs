use crate::{
    content::{model::FieldId, photo::Photo},
    foundation::{color::Color, core::Rect},
    scene::{
        node::{Affordance, IconGlyph, ImageFit, ImageSource, Node, NodeKind, StaticAsset, TextField},
        style::{BoxStyle, SANS_FAMILY, SERIF_FAMILY, TextStyle, WhiteSpace},
    },
};

/// Outline shared by a photo, its placeholder and its overlay.
#[derive(Clone, Copy, Debug)]
pub(crate) enum PhotoShape {
    Rounded(f64),
    Oval,
}

impl PhotoShape {
    fn apply(self, style: BoxStyle) -> BoxStyle {
        match self {
            PhotoShape::Rounded(r) => style.radius(r),
            PhotoShape::Oval => style.ellipse(),
        }
    }
}

/// Editable text control bound to `field`.
pub(crate) fn text_field(
    class: &str,
    frame: Rect,
    field: FieldId,
    value: &str,
    placeholder: &str,
    style: TextStyle,
    font_override: Option<&str>,
) -> Node {
    let multiline = field.is_multiline();
    let white_space = if multiline {
        WhiteSpace::PreWrap
    } else {
        WhiteSpace::NoWrap
    };
    Node::new(
        class,
        frame,
        NodeKind::TextField(TextField {
            field,
            value: value.to_string(),
            placeholder: placeholder.to_string(),
            multiline,
            style: style.white_space(white_space),
            font_override: font_override.map(str::to_string),
        }),
    )
}

/// Photo click target content: the photo with its upload hint, or the "Subir foto" placeholder.
pub(crate) fn photo_frame(
    class: &str,
    frame: Rect,
    photo: Option<&Photo>,
    shape: PhotoShape,
    border: Option<(f64, Color)>,
) -> Node {
    let local = Rect::from_origin_size((0.0, 0.0), frame.size());
    let mut outer = BoxStyle::default();
    if let Some((width, color)) = border {
        outer = outer.border(width, color);
    }
    let mut node = Node::container(format!("photo-frame-wrapper {class}"), frame)
        .with_style(shape.apply(outer));

    match photo {
        Some(photo) => {
            node.children.push(
                Node::image("photo", local, ImageSource::Photo(photo.clone()))
                    .with_style(shape.apply(BoxStyle::default())),
            );
            node.children.push(
                Node::container("photo-overlay", local)
                    .with_style(shape.apply(BoxStyle::default().background(Color::rgba(0, 0, 0, 90))))
                    .with_role(Affordance::UploadHint)
                    .child(Node::icon(
                        "photo-overlay-icon",
                        centered(local, 40.0, 40.0),
                        IconGlyph::Camera,
                        Color::WHITE,
                    )),
            );
        }
        None => {
            let ink = Color::rgb(0x8a, 0x80, 0x78);
            let icon = centered(local, 48.0, 48.0) + kurbo::Vec2::new(0.0, -14.0);
            let label = Rect::new(0.0, icon.y1 + 6.0, local.x1, icon.y1 + 30.0);
            node.children.push(
                Node::container("photo-placeholder", local)
                    .with_style(shape.apply(
                        BoxStyle::default()
                            .background(Color::rgba(240, 236, 230, 230))
                            .border(2.0, Color::rgba(0x8a, 0x80, 0x78, 120)),
                    ))
                    .child(Node::icon("photo-placeholder-icon", icon, IconGlyph::Camera, ink))
                    .child(Node::text(
                        "photo-placeholder-label",
                        label,
                        "Subir foto",
                        TextStyle::new(SANS_FAMILY, 15.0, ink).weight(500.0),
                    )),
            );
        }
    }
    node
}

/// Shipped image scaled to fit inside `frame`.
pub(crate) fn static_image(class: &str, frame: Rect, asset: StaticAsset, fit: ImageFit) -> Node {
    Node::new(
        class,
        frame,
        NodeKind::Image {
            source: ImageSource::Static(asset),
            fit,
        },
    )
}

/// Ornament glyph in each corner of `bounds`.
pub(crate) fn corners(class: &str, bounds: Rect, glyph: &str, size: f32, color: Color) -> Vec<Node> {
    let side = f64::from(size) * 1.4;
    let inset = 10.0;
    let (x0, y0) = (bounds.x0 + inset, bounds.y0 + inset);
    let (x1, y1) = (bounds.x1 - inset - side, bounds.y1 - inset - side);
    [("tl", x0, y0), ("tr", x1, y0), ("bl", x0, y1), ("br", x1, y1)]
        .into_iter()
        .map(|(corner, x, y)| {
            Node::text(
                format!("{class} corner-{corner}"),
                Rect::new(x, y, x + side, y + side),
                glyph,
                TextStyle::new(SERIF_FAMILY, size, color).line_height(1.0),
            )
        })
        .collect()
}

/// Rect of `width` x `height` centred in `outer`.
pub(crate) fn centered(outer: Rect, width: f64, height: f64) -> Rect {
    let c = outer.center();
    Rect::new(
        c.x - width / 2.0,
        c.y - height / 2.0,
        c.x + width / 2.0,
        c.y + height / 2.0,
    )
}
