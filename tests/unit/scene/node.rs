use super::*;
use crate::scene::style::{SANS_FAMILY, SCRIPT_FAMILY};

fn field(field: FieldId, family_override: Option<&str>) -> Node {
    Node::new(
        "field",
        Rect::new(0.0, 0.0, 100.0, 40.0),
        NodeKind::TextField(TextField {
            field,
            value: "hola".to_string(),
            placeholder: String::new(),
            multiline: true,
            style: TextStyle::new(SANS_FAMILY, 16.0, Color::BLACK),
            font_override: family_override.map(str::to_string),
        }),
    )
}

fn sample() -> Node {
    Node::container("page", Rect::new(0.0, 0.0, 800.0, 900.0)).child(
        Node::new(
            "canvas",
            Rect::new(10.0, 10.0, 550.0, 770.0),
            NodeKind::Canvas(Mode::Card),
        )
        .child(field(FieldId::Title, Some(SCRIPT_FAMILY)).with_region(Region::Title))
        .child(
            Node::icon(
                "hint",
                Rect::new(0.0, 0.0, 10.0, 10.0),
                IconGlyph::Camera,
                Color::WHITE,
            )
            .with_role(Affordance::UploadHint),
        )
        .child(field(FieldId::Message, None).with_region(Region::Message)),
    )
}

#[test]
fn capture_root_is_found_below_page() {
    let tree = sample();
    let root = tree.capture_root().expect("canvas");
    assert_eq!(root.class, "canvas");
    assert!(matches!(root.kind, NodeKind::Canvas(Mode::Card)));
}

#[test]
fn capture_root_absent_in_plain_tree() {
    let tree = Node::container("page", Rect::new(0.0, 0.0, 1.0, 1.0));
    assert!(tree.capture_root().is_none());
}

#[test]
fn regions_are_listed_in_paint_order() {
    assert_eq!(sample().regions(), vec![Region::Title, Region::Message]);
}

#[test]
fn computed_style_applies_family_override() {
    let tree = sample();
    let fields = tree.text_fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].computed_style().font_family, SCRIPT_FAMILY);
    assert_eq!(fields[1].computed_style().font_family, SANS_FAMILY);
}

#[test]
fn font_families_are_deduplicated_and_skip_hidden() {
    let mut tree = sample();
    assert_eq!(tree.font_families(), vec![SCRIPT_FAMILY, SANS_FAMILY]);

    tree.walk_mut(&mut |n| {
        if n.region == Some(Region::Message) {
            n.hide();
        }
    });
    assert_eq!(tree.font_families(), vec![SCRIPT_FAMILY]);
}

#[test]
fn local_transform_translates_then_applies_extra() {
    let node = Node::container("n", Rect::new(5.0, 7.0, 15.0, 17.0))
        .with_transform(Affine::scale(2.0));
    let p = node.local_transform() * kurbo::Point::new(1.0, 1.0);
    assert_eq!((p.x, p.y), (7.0, 9.0));
}

#[test]
fn affordances_are_collected() {
    let tree = sample();
    let chrome = tree.affordances();
    assert_eq!(chrome.len(), 1);
    assert_eq!(chrome[0].role, Some(Affordance::UploadHint));
}
