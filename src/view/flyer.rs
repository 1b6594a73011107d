use crate::{
    content::model::{
        DEFAULT_FLYER_DATE, DEFAULT_FLYER_LOCATION, DEFAULT_FLYER_QUOTE, DEFAULT_FLYER_TIME,
        FieldId, FlyerContent, Mode,
    },
    foundation::{
        color::Color,
        core::{BezPath, Canvas, Edges, Rect},
    },
    layout::{model::BlockId, surface::wrap_block},
    scene::{
        node::{IconGlyph, ImageFit, Node, NodeKind, StaticAsset},
        style::{BoxStyle, SANS_FAMILY, SERIF_FAMILY, TextAlign, TextStyle},
    },
    templates::catalog::FlyerTemplate,
    view::widgets::{static_image, text_field},
};

/// Colours of one flyer skin.
struct Palette {
    background: Color,
    accent: Color,
    text: Color,
}

fn palette(template: FlyerTemplate) -> Palette {
    match template {
        FlyerTemplate::Divine => Palette {
            background: Color::rgb(0x1b, 0x2a, 0x4a),
            accent: Color::rgb(0xc8, 0xa6, 0x63),
            text: Color::WHITE,
        },
        FlyerTemplate::Hope => Palette {
            background: Color::rgb(0x0f, 0x5e, 0x6e),
            accent: Color::rgb(0xf4, 0xd3, 0x5e),
            text: Color::WHITE,
        },
        FlyerTemplate::Fire => Palette {
            background: Color::rgb(0x3b, 0x0a, 0x0a),
            accent: Color::rgb(0xff, 0x9f, 0x1c),
            text: Color::rgb(0xff, 0xf3, 0xe0),
        },
    }
}

/// Build the flyer canvas: template backdrop, then the five blocks at their layout positions.
pub(crate) fn build(flyer: &FlyerContent) -> Node {
    let id = flyer.template();
    let skin = FlyerTemplate::resolve(id);
    if FlyerTemplate::from_id(id).is_none() {
        tracing::debug!(template = id, "unknown flyer template, using {}", skin.id());
    }
    let colors = palette(skin);

    let mut root = Node::new(
        format!("flyer-canvas template-{id}"),
        Canvas::FLYER.rect(),
        NodeKind::Canvas(Mode::Flyer),
    )
    .with_style(BoxStyle::default().background(colors.background).radius(12.0));

    root.children.extend(decorations(skin));
    for block in BlockId::ALL {
        let size = flyer.layout().get_rect(id, block).size();
        let content = block_content(flyer, block, size.width, size.height, &colors);
        root.children.push(wrap_block(flyer.layout(), id, block, content));
    }
    root
}

fn block_content(flyer: &FlyerContent, block: BlockId, w: f64, h: f64, colors: &Palette) -> Node {
    let full = Rect::new(0.0, 0.0, w, h);
    match block {
        BlockId::Header => Node::container("flyer-header", full)
            .child(Node::text(
                "flyer-title-main",
                Rect::new(0.0, 0.0, w, h * 0.6),
                "ENCUENTRO",
                TextStyle::new(SERIF_FAMILY, 64.0, colors.accent)
                    .weight(700.0)
                    .line_height(1.0),
            ))
            .child(Node::text(
                "flyer-title-sub",
                Rect::new(0.0, h * 0.6, w, h),
                "JUVENIL",
                TextStyle::new(SANS_FAMILY, 36.0, colors.text)
                    .weight(600.0)
                    .line_height(1.0),
            )),
        BlockId::Logo => static_image("flyer-logo", full, StaticAsset::Logo, ImageFit::Contain),
        BlockId::Quote => text_field(
            "flyer-text-input quote-text",
            full,
            FieldId::Quote,
            flyer.quote(),
            DEFAULT_FLYER_QUOTE,
            TextStyle::new(SERIF_FAMILY, 24.0, colors.text)
                .line_height(1.4)
                .padding(Edges::all(8.0)),
            None,
        ),
        BlockId::DateTime => Node::container("flyer-datetime-block", full)
            .child(text_field(
                "flyer-text-input date-text",
                Rect::new(0.0, 0.0, w, h * 0.55),
                FieldId::Date,
                flyer.date(),
                DEFAULT_FLYER_DATE,
                TextStyle::new(SANS_FAMILY, 32.0, colors.accent)
                    .weight(700.0)
                    .line_height(1.2)
                    .align(TextAlign::Left),
                None,
            ))
            .child(text_field(
                "flyer-text-input time-text",
                Rect::new(0.0, h * 0.55, w, h),
                FieldId::Time,
                flyer.time(),
                DEFAULT_FLYER_TIME,
                TextStyle::new(SANS_FAMILY, 26.0, colors.text)
                    .line_height(1.2)
                    .align(TextAlign::Left),
                None,
            )),
        BlockId::Location => {
            let icon = 32.0;
            let icon_y = ((h - icon) / 2.0).max(0.0);
            Node::container("flyer-location-area", full)
                .child(Node::icon(
                    "location-icon",
                    Rect::new(0.0, icon_y, icon, icon_y + icon),
                    IconGlyph::Location,
                    colors.accent,
                ))
                .child(text_field(
                    "flyer-text-input location-text",
                    Rect::new(icon + 10.0, 0.0, w.max(icon + 10.0), h),
                    FieldId::Location,
                    flyer.location(),
                    DEFAULT_FLYER_LOCATION,
                    TextStyle::new(SANS_FAMILY, 18.0, colors.text)
                        .line_height(1.35)
                        .align(TextAlign::Left),
                    None,
                ))
        }
    }
}

fn decorations(skin: FlyerTemplate) -> Vec<Node> {
    match skin {
        FlyerTemplate::Divine => {
            let gold = Color::rgb(0xc8, 0xa6, 0x63);
            vec![
                Node::container("flyer-circle-bg", Rect::new(90.0, 200.0, 510.0, 620.0)).with_style(
                    BoxStyle::default()
                        .background(gold.with_alpha(30))
                        .border(2.0, gold.with_alpha(70))
                        .ellipse(),
                ),
                Node::new(
                    "flyer-cross",
                    Rect::new(200.0, 210.0, 400.0, 410.0),
                    NodeKind::Shape {
                        path: cross_path(),
                        fill: gold,
                    },
                )
                .with_style(BoxStyle::default().opacity(0.35)),
            ]
        }
        FlyerTemplate::Hope => vec![Node::new(
            "flyer-wave-bg",
            Rect::new(0.0, 560.0, 600.0, 850.0),
            NodeKind::Shape {
                path: wave_path(600.0, 290.0),
                fill: Color::rgba(255, 255, 255, 36),
            },
        )],
        FlyerTemplate::Fire => vec![
            Node::new(
                "flyer-fire-bg-1",
                Rect::new(0.0, 560.0, 260.0, 850.0),
                NodeKind::Shape {
                    path: flame_path(260.0, 290.0),
                    fill: Color::rgba(0xff, 0x6a, 0x00, 90),
                },
            ),
            Node::new(
                "flyer-fire-bg-2",
                Rect::new(380.0, 620.0, 600.0, 850.0),
                NodeKind::Shape {
                    path: flame_path(220.0, 230.0),
                    fill: Color::rgba(0xff, 0xb3, 0x00, 80),
                },
            ),
        ],
    }
}

/// Latin cross in a 200 x 200 box.
pub(crate) fn cross_path() -> BezPath {
    let pts = [
        (92.0, 15.0),
        (108.0, 15.0),
        (108.0, 65.0),
        (155.0, 65.0),
        (155.0, 81.0),
        (108.0, 81.0),
        (108.0, 195.0),
        (92.0, 195.0),
        (92.0, 81.0),
        (45.0, 81.0),
        (45.0, 65.0),
        (92.0, 65.0),
    ];
    let mut path = BezPath::new();
    path.move_to(pts[0]);
    for p in &pts[1..] {
        path.line_to(*p);
    }
    path.close_path();
    path
}

fn wave_path(w: f64, h: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((0.0, h * 0.35));
    path.curve_to((w * 0.25, h * 0.05), (w * 0.5, h * 0.6), (w * 0.75, h * 0.3));
    path.quad_to((w * 0.9, h * 0.15), (w, h * 0.25));
    path.line_to((w, h));
    path.line_to((0.0, h));
    path.close_path();
    path
}

fn flame_path(w: f64, h: f64) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((w * 0.5, 0.0));
    path.curve_to((w * 0.65, h * 0.25), (w, h * 0.4), (w * 0.9, h * 0.75));
    path.curve_to((w * 0.82, h * 0.95), (w * 0.6, h), (w * 0.5, h));
    path.curve_to((w * 0.4, h), (w * 0.18, h * 0.95), (w * 0.1, h * 0.75));
    path.curve_to((0.0, h * 0.45), (w * 0.4, h * 0.3), (w * 0.5, 0.0));
    path.close_path();
    path
}
