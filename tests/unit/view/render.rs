use std::collections::BTreeSet;

use super::*;
use crate::{
    content::model::FieldId,
    layout::model::BlockId,
    scene::node::{NodeKind, Region},
    templates::catalog::{CardTemplate, FlyerTemplate},
    view::page::render_page,
};

fn region_set(node: &Node) -> BTreeSet<Region> {
    node.regions().into_iter().collect()
}

fn label_of<'a>(tree: &'a Node, class: &str) -> &'a str {
    match tree.find(|n| n.class == class).map(|n| &n.kind) {
        Some(NodeKind::Text(t)) => &t.text,
        other => panic!("no text node '{class}': {other:?}"),
    }
}

#[test]
fn every_card_template_has_exactly_three_regions() {
    let want: BTreeSet<_> = [Region::Title, Region::Photo, Region::Message].into();
    let ids = CardTemplate::ALL.map(CardTemplate::id);
    for id in ids.iter().copied().chain(["retro-unknown"]) {
        let mut card = CardContent::default();
        card.set_template(id);
        for mode in [RenderMode::Edit, RenderMode::Export] {
            let tree = render_card(&card, mode);
            assert_eq!(region_set(&tree), want, "{id}");
            assert_eq!(tree.regions().len(), 3, "{id}");
        }
    }
}

#[test]
fn unknown_card_template_renders_minimal_layout() {
    let mut card = CardContent::default();
    card.set_template("retro-unknown");
    let tree = render_card(&card, RenderMode::Edit);
    assert!(tree.find(|n| n.class.contains("corner")).is_none());
    assert!(tree.find(|n| n.class == "default-photo").is_some());
}

#[test]
fn every_flyer_template_has_exactly_five_block_regions() {
    let want: BTreeSet<_> = BlockId::ALL.map(Region::Block).into();
    let ids = FlyerTemplate::ALL.map(FlyerTemplate::id);
    for id in ids.iter().copied().chain(["unknown-skin"]) {
        let mut flyer = FlyerContent::default();
        flyer.set_template(id);
        let tree = render_flyer(&flyer, RenderMode::Edit);
        assert_eq!(region_set(&tree), want, "{id}");
        assert_eq!(tree.regions().len(), 5, "{id}");
    }
}

#[test]
fn unknown_flyer_template_uses_divine_rects_and_decorations() {
    let mut flyer = FlyerContent::default();
    flyer.set_template("unknown-skin");
    let tree = render_flyer(&flyer, RenderMode::Edit);
    assert!(tree.find(|n| n.class == "flyer-cross").is_some());

    let divine = render_flyer(&FlyerContent::default(), RenderMode::Edit);
    for block in BlockId::ALL {
        let a = tree.region(Region::Block(block)).unwrap().frame;
        let b = divine.region(Region::Block(block)).unwrap().frame;
        assert_eq!(a, b, "{}", block.as_str());
    }
}

#[test]
fn flyer_blocks_follow_layout_overrides() {
    let mut flyer = FlyerContent::default();
    flyer.set_template("fire");
    let rect = crate::layout::model::BlockRect::new(50.0, 60.0, 300.0, 120.0).unwrap();
    flyer.layout_mut().set_rect("fire", BlockId::Quote, rect);

    let tree = render_flyer(&flyer, RenderMode::Edit);
    assert_eq!(tree.region(Region::Block(BlockId::Quote)).unwrap().frame, rect.to_rect());
}

#[test]
fn placeholders_exist_only_in_edit_mode() {
    let mut card = CardContent::default();
    card.set_title("");
    let live = render_card(&card, RenderMode::Edit);
    let title = live
        .text_fields()
        .into_iter()
        .find(|f| f.field == FieldId::Title)
        .unwrap();
    assert_eq!(title.value, "");
    assert_eq!(title.placeholder, "Feliz cumpleaños");

    let exported = render_card(&card, RenderMode::Export);
    assert!(exported.text_fields().is_empty());
    match &exported.region(Region::Title).unwrap().kind {
        NodeKind::Text(t) => assert_eq!(t.text, ""),
        other => panic!("title not static text: {other:?}"),
    }
}

#[test]
fn export_mode_is_the_capture_transform_of_edit_mode() {
    let card = CardContent::default();
    assert_eq!(
        render_card(&card, RenderMode::Export),
        prepare_capture(render_card(&card, RenderMode::Edit))
    );
    let flyer = FlyerContent::default();
    assert_eq!(
        render_flyer(&flyer, RenderMode::Export),
        prepare_capture(render_flyer(&flyer, RenderMode::Edit))
    );
}

#[test]
fn page_wraps_the_live_canvas_and_reflects_the_trigger() {
    let mut ed = Editor::new();
    ed.set_mode(Mode::Flyer);
    let page = render_page(&ed);
    assert_eq!(page.capture_root(), Some(&render_canvas(&ed, RenderMode::Edit)));
    assert_eq!(label_of(&page, "toolbar-btn-label"), "Descargar");
    assert!(label_of(&page, "template-current-name").contains("Divino"));

    let _ticket = ed.begin_export().unwrap();
    assert_eq!(label_of(&render_page(&ed), "toolbar-btn-label"), "Generando...");
}
