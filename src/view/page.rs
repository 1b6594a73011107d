use crate::{
    content::model::Mode,
    editor::state::Editor,
    foundation::{color::Color, core::Rect},
    scene::{
        node::Node,
        style::{BoxStyle, SANS_FAMILY, SERIF_FAMILY, TextStyle},
    },
    templates::catalog::{CardTemplate, FlyerTemplate},
    view::{RenderMode, render_canvas, widgets::centered},
};

const MARGIN: f64 = 40.0;
const HEADER_H: f64 = 90.0;
const NAV_H: f64 = 70.0;
const TOOLBAR_H: f64 = 110.0;

/// Full editor page: header, template navigator, live canvas and download toolbar.
///
/// Only the canvas subtree is ever exported; the rest is page chrome.
pub fn render_page(editor: &Editor) -> Node {
    let canvas = render_canvas(editor, RenderMode::Edit);
    let size = canvas.frame.size();
    let width = size.width + MARGIN * 2.0;
    let canvas_top = HEADER_H + NAV_H;
    let height = canvas_top + size.height + TOOLBAR_H;
    let ink = Color::rgb(0x2d, 0x2a, 0x32);

    let heading = match editor.mode() {
        Mode::Card => "✨ Tarjetas de Cumpleaños",
        Mode::Flyer => "✨ Flyers de Eventos",
    };
    let header = Node::container("app-header", Rect::new(0.0, 0.0, width, HEADER_H))
        .child(Node::text(
            "app-title",
            Rect::new(0.0, 16.0, width, 56.0),
            heading,
            TextStyle::new(SERIF_FAMILY, 30.0, ink).weight(700.0),
        ))
        .child(Node::text(
            "app-subtitle",
            Rect::new(0.0, 58.0, width, 80.0),
            "Haz clic en cualquier texto para editarlo",
            TextStyle::new(SANS_FAMILY, 15.0, ink.with_alpha(170)),
        ));

    let wrapper = Node::container(
        "canvas-wrapper",
        Rect::new(MARGIN, canvas_top, MARGIN + size.width, canvas_top + size.height),
    )
    .child(canvas);

    Node::container("page", Rect::new(0.0, 0.0, width, height))
        .with_style(BoxStyle::default().background(Color::rgb(0xfa, 0xf7, 0xf2)))
        .child(header)
        .child(navigator(editor, width, ink))
        .child(wrapper)
        .child(toolbar(editor, width, canvas_top + size.height))
}

fn navigator(editor: &Editor, width: f64, ink: Color) -> Node {
    let (ids, label): (Vec<&str>, String) = match editor.mode() {
        Mode::Card => {
            let id = editor.card().template();
            let label = CardTemplate::from_id(id)
                .map(|t| format!("{} {}", t.preview(), t.name()))
                .unwrap_or_else(|| id.to_string());
            (CardTemplate::ALL.map(CardTemplate::id).to_vec(), label)
        }
        Mode::Flyer => {
            let id = editor.flyer().template();
            let label = FlyerTemplate::from_id(id)
                .map(|t| format!("{} {}", t.preview(), t.name()))
                .unwrap_or_else(|| id.to_string());
            (FlyerTemplate::ALL.map(FlyerTemplate::id).to_vec(), label)
        }
    };
    let active = editor.template();

    let mut nav = Node::container("template-nav", Rect::new(0.0, HEADER_H, width, HEADER_H + NAV_H))
        .child(Node::text(
            "nav-arrow nav-prev",
            Rect::new(MARGIN, 10.0, MARGIN + 40.0, 50.0),
            "‹",
            TextStyle::new(SANS_FAMILY, 30.0, ink),
        ))
        .child(Node::text(
            "template-current-name",
            Rect::new(MARGIN + 40.0, 8.0, width - MARGIN - 40.0, 36.0),
            label,
            TextStyle::new(SANS_FAMILY, 18.0, ink).weight(600.0),
        ))
        .child(Node::text(
            "nav-arrow nav-next",
            Rect::new(width - MARGIN - 40.0, 10.0, width - MARGIN, 50.0),
            "›",
            TextStyle::new(SANS_FAMILY, 30.0, ink),
        ));

    let dot = 8.0;
    let gap = 8.0;
    let row = ids.len() as f64 * (dot + gap) - gap;
    let x0 = (width - row) / 2.0;
    for (i, id) in ids.iter().enumerate() {
        let x = x0 + i as f64 * (dot + gap);
        let color = if *id == active {
            ink
        } else {
            ink.with_alpha(60)
        };
        nav.children.push(
            Node::container(
                if *id == active { "dot active" } else { "dot" },
                Rect::new(x, 44.0, x + dot, 44.0 + dot),
            )
            .with_style(BoxStyle::default().background(color).ellipse()),
        );
    }
    nav
}

fn toolbar(editor: &Editor, width: f64, top: f64) -> Node {
    let busy = editor.is_exporting();
    let area = Rect::new(0.0, top, width, top + TOOLBAR_H);
    let button = centered(Rect::new(0.0, 0.0, width, 70.0), 200.0, 48.0);
    let label = if busy { "Generando..." } else { "Descargar" };

    Node::container("floating-toolbar", area)
        .child(
            Node::container("toolbar-btn primary", button)
                .with_style(
                    BoxStyle::default()
                        .background(Color::rgb(0x7c, 0x3a, 0xed))
                        .radius(24.0)
                        .opacity(if busy { 0.6 } else { 1.0 }),
                )
                .child(Node::text(
                    "toolbar-btn-label",
                    Rect::new(0.0, 12.0, button.width(), 36.0),
                    label,
                    TextStyle::new(SANS_FAMILY, 17.0, Color::WHITE).weight(600.0),
                )),
        )
        .child(Node::text(
            "hint-text",
            Rect::new(0.0, 76.0, width, 100.0),
            "💡 Tip: Haz clic directamente en los textos de la tarjeta para editarlos",
            TextStyle::new(SANS_FAMILY, 13.0, Color::rgb(0x6b, 0x66, 0x70)),
        ))
}
