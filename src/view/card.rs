use crate::{
    content::model::{CardContent, FieldId, Mode},
    foundation::{
        color::Color,
        core::{Canvas, Rect},
    },
    scene::{
        node::{ImageFit, Node, NodeKind, Region, StaticAsset},
        style::{BoxStyle, SCRIPT_FAMILY, SERIF_FAMILY, TextStyle},
    },
    templates::catalog::CardTemplate,
    view::widgets::{PhotoShape, corners, photo_frame, static_image, text_field},
};

const TITLE_PLACEHOLDER: &str = "Feliz cumpleaños";
const MESSAGE_PLACEHOLDER: &str = "Escribe tu mensaje...";
const CANVAS_RADIUS: f64 = 16.0;

/// Build the card canvas. Unknown template ids get the minimal frame.
pub(crate) fn build(card: &CardContent) -> Node {
    match CardTemplate::from_id(card.template()) {
        Some(CardTemplate::Classic) => classic(card),
        Some(CardTemplate::Modern) => modern(card),
        Some(CardTemplate::Elegant) => elegant(card),
        None => {
            tracing::debug!(template = card.template(), "unknown card template, minimal layout");
            minimal(card)
        }
    }
}

fn root(class: &str, background: Color) -> Node {
    Node::new(
        format!("birthday-canvas {class}"),
        Canvas::CARD.rect(),
        NodeKind::Canvas(Mode::Card),
    )
    .with_style(BoxStyle::default().background(background).radius(CANVAS_RADIUS))
}

fn title(card: &CardContent, frame: Rect, ink: Color, size: f32) -> Node {
    text_field(
        "title-text",
        frame,
        FieldId::Title,
        card.title(),
        TITLE_PLACEHOLDER,
        TextStyle::new(SERIF_FAMILY, size, ink)
            .weight(700.0)
            .line_height(1.1),
        Some(SCRIPT_FAMILY),
    )
    .with_region(Region::Title)
}

fn message(card: &CardContent, frame: Rect, ink: Color) -> Node {
    text_field(
        "message-text",
        frame,
        FieldId::Message,
        card.message(),
        MESSAGE_PLACEHOLDER,
        TextStyle::new(SERIF_FAMILY, 22.0, ink).line_height(1.4),
        Some(SCRIPT_FAMILY),
    )
    .with_region(Region::Message)
}

fn ornament(class: &str, frame: Rect, glyphs: &str, color: Color) -> Node {
    Node::text(
        class,
        frame,
        glyphs,
        TextStyle::new(SERIF_FAMILY, 16.0, color).line_height(1.0),
    )
}

fn classic(card: &CardContent) -> Node {
    let paper = Color::rgb(0xf7, 0xef, 0xe2);
    let ink = Color::rgb(0x5a, 0x3e, 0x1b);
    let accent = Color::rgb(0x8b, 0x6b, 0x3d);
    let canvas = Canvas::CARD.rect();

    let polaroid = Node::container("polaroid-frame", Rect::new(122.0, 236.0, 362.0, 516.0))
        .with_style(
            BoxStyle::default()
                .background(Color::WHITE)
                .border(1.0, Color::rgb(0xe0, 0xd6, 0xc4)),
        )
        .with_region(Region::Photo)
        .child(photo_frame(
            "polaroid-photo",
            Rect::new(12.0, 12.0, 228.0, 228.0),
            card.photo(),
            PhotoShape::Rounded(0.0),
            None,
        ))
        .child(Node::text(
            "polaroid-caption",
            Rect::new(0.0, 236.0, 240.0, 272.0),
            "Con cariño",
            TextStyle::new(SCRIPT_FAMILY, 20.0, Color::rgb(0x6b, 0x5a, 0x45)),
        ));

    let frame = Node::container("classic-frame", Rect::new(28.0, 28.0, 512.0, 732.0))
        .with_style(BoxStyle::default().border(2.0, Color::rgb(0xb8, 0x9b, 0x6a)).radius(6.0))
        .child(
            Node::container("classic-header", Rect::new(0.0, 14.0, 484.0, 84.0)).child(
                static_image(
                    "classic-logo",
                    Rect::new(207.0, 0.0, 277.0, 70.0),
                    StaticAsset::Logo,
                    ImageFit::Contain,
                ),
            ),
        )
        .child(ornament(
            "classic-ornament",
            Rect::new(0.0, 90.0, 484.0, 114.0),
            "✿ ✿ ✿",
            accent,
        ))
        .child(title(card, Rect::new(30.0, 114.0, 454.0, 224.0), ink, 44.0))
        .child(polaroid)
        .child(message(card, Rect::new(40.0, 530.0, 444.0, 650.0), ink))
        .child(ornament(
            "classic-ornament",
            Rect::new(0.0, 664.0, 484.0, 688.0),
            "✿ ✿ ✿",
            accent,
        ));

    root("template-classic", paper)
        .with_children(corners("classic-corner", canvas, "❦", 26.0, accent))
        .child(frame)
}

fn modern(card: &CardContent) -> Node {
    let blush = Color::rgb(0xff, 0xf4, 0xf6);
    let rose = Color::rgb(0xb0, 0x3a, 0x64);
    let petal = Color::rgb(0xd4, 0x6a, 0x8c);
    let canvas = Canvas::CARD.rect();

    let frame = Node::container("roses-frame", Rect::new(30.0, 30.0, 510.0, 730.0))
        .with_style(
            BoxStyle::default()
                .background(Color::rgba(255, 255, 255, 184))
                .radius(18.0),
        )
        .child(static_image(
            "roses-logo",
            Rect::new(205.0, 16.0, 275.0, 86.0),
            StaticAsset::Logo,
            ImageFit::Contain,
        ))
        .child(ornament(
            "roses-divider",
            Rect::new(0.0, 92.0, 480.0, 116.0),
            "✿ ❀ ✿",
            petal,
        ))
        .child(title(card, Rect::new(30.0, 118.0, 450.0, 228.0), rose, 46.0))
        .child(
            photo_frame(
                "roses-photo",
                Rect::new(110.0, 240.0, 370.0, 500.0),
                card.photo(),
                PhotoShape::Rounded(20.0),
                Some((4.0, Color::WHITE)),
            )
            .with_region(Region::Photo),
        )
        .child(message(card, Rect::new(40.0, 515.0, 440.0, 635.0), rose))
        .child(ornament(
            "roses-divider",
            Rect::new(0.0, 648.0, 480.0, 672.0),
            "✿ ❀ ✿",
            petal,
        ));

    root("template-modern", blush)
        .child(
            static_image("roses-bg", canvas, StaticAsset::Roses, ImageFit::Cover)
                .with_style(BoxStyle::default().opacity(0.35).radius(CANVAS_RADIUS)),
        )
        .with_children(corners("roses-corner", canvas, "❀", 26.0, petal))
        .child(frame)
}

fn elegant(card: &CardContent) -> Node {
    let night = Color::rgb(0x1d, 0x1b, 0x2f);
    let gold = Color::rgb(0xd4, 0xaf, 0x37);
    let ivory = Color::rgb(0xf5, 0xef, 0xe0);
    let canvas = Canvas::CARD.rect();

    let frame = Node::container("elegant-frame", Rect::new(26.0, 26.0, 514.0, 734.0))
        .with_style(BoxStyle::default().border(1.0, gold))
        .child(ornament(
            "elegant-divider",
            Rect::new(0.0, 24.0, 488.0, 48.0),
            "— ✦ —",
            gold,
        ))
        .child(title(card, Rect::new(30.0, 50.0, 458.0, 160.0), ivory, 46.0))
        .child(ornament(
            "elegant-divider",
            Rect::new(0.0, 162.0, 488.0, 186.0),
            "— ✦ —",
            gold,
        ))
        .child(
            photo_frame(
                "elegant-photo",
                Rect::new(134.0, 200.0, 354.0, 480.0),
                card.photo(),
                PhotoShape::Oval,
                Some((3.0, gold)),
            )
            .with_region(Region::Photo),
        )
        .child(message(card, Rect::new(40.0, 500.0, 448.0, 620.0), ivory))
        .child(static_image(
            "elegant-logo",
            Rect::new(214.0, 630.0, 274.0, 690.0),
            StaticAsset::Logo,
            ImageFit::Contain,
        ));

    root("template-elegant", night)
        .with_children(corners("elegant-corner", canvas, "✿", 24.0, gold))
        .child(frame)
}

fn minimal(card: &CardContent) -> Node {
    let ink = Color::rgb(0x33, 0x33, 0x33);
    root("template-classic", Color::WHITE).child(
        Node::container("classic-frame", Canvas::CARD.rect())
            .child(title(card, Rect::new(40.0, 40.0, 500.0, 170.0), ink, 44.0))
            .child(
                photo_frame(
                    "default-photo",
                    Rect::new(150.0, 190.0, 390.0, 430.0),
                    card.photo(),
                    PhotoShape::Rounded(8.0),
                    None,
                )
                .with_region(Region::Photo),
            )
            .child(message(card, Rect::new(40.0, 460.0, 500.0, 600.0), ink)),
    )
}
