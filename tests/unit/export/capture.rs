use super::*;
use crate::{
    content::{
        model::{CardContent, FlyerContent},
        photo::Photo,
    },
    layout::model::BlockId,
    scene::{
        node::{Affordance, Position, Region},
        style::SCRIPT_FAMILY,
    },
    view::{RenderMode, render_card, render_flyer},
};

fn tiny_png() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(2, 2, image::Rgba([200, 10, 10, 255]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

#[test]
fn live_tree_is_not_capture_form() {
    let live = render_card(&CardContent::default(), RenderMode::Edit);
    assert!(!is_capture_form(&live));
    assert!(is_capture_form(&prepare_capture(live)));
}

#[test]
fn outer_radius_is_removed() {
    let live = render_card(&CardContent::default(), RenderMode::Edit);
    assert!(live.style.corner_radius > 0.0);
    let out = prepare_capture(live.clone());
    assert_eq!(out.style.corner_radius, 0.0);
    // The live tree is untouched.
    assert!(live.style.corner_radius > 0.0);
}

#[test]
fn card_fields_become_script_text_with_literal_value() {
    let mut card = CardContent::default();
    card.set_title("Feliz\ncumpleaños");
    card.set_message("");
    let live = render_card(&card, RenderMode::Edit);
    let live_title = live.region(Region::Title).unwrap().clone();

    let out = prepare_capture(live);
    let title = out.region(Region::Title).unwrap();
    let NodeKind::Text(t) = &title.kind else {
        panic!("title should be static text");
    };
    assert_eq!(t.text, "Feliz\ncumpleaños");
    assert_eq!(t.style.font_family, SCRIPT_FAMILY);
    assert_eq!(t.style.white_space, WhiteSpace::PreWrap);
    assert_eq!(title.frame, live_title.frame);
    assert_eq!(title.class, live_title.class);
    assert_eq!(title.transform, live_title.transform);

    // Empty value stays empty: the placeholder never reaches the export.
    let NodeKind::Text(m) = &out.region(Region::Message).unwrap().kind else {
        panic!("message should be static text");
    };
    assert_eq!(m.text, "");
}

#[test]
fn upload_hint_is_hidden_when_photo_present() {
    let mut card = CardContent::default();
    card.set_photo(Some(Photo::from_bytes(tiny_png()).unwrap()));
    let out = prepare_capture(render_card(&card, RenderMode::Edit));
    let hints: Vec<_> = out
        .affordances()
        .into_iter()
        .filter(|n| n.role == Some(Affordance::UploadHint))
        .collect();
    assert_eq!(hints.len(), 1);
    assert!(hints[0].style.is_hidden());
}

#[test]
fn flyer_grips_hidden_and_blocks_keep_position() {
    let mut flyer = FlyerContent::default();
    flyer.set_date("DOMINGO 1");
    let live = render_flyer(&flyer, RenderMode::Edit);
    let out = prepare_capture(live.clone());

    assert!(out.affordances().iter().all(|n| n.style.is_hidden()));
    assert!(out.text_fields().is_empty());
    for block in BlockId::ALL {
        let a = live.region(Region::Block(block)).unwrap();
        let b = out.region(Region::Block(block)).unwrap();
        assert_eq!(a.frame, b.frame);
        assert_eq!(b.position, Position::Absolute);
    }

    let mut dates = Vec::new();
    out.walk(&mut |n| {
        if let NodeKind::Text(t) = &n.kind
            && n.class.contains("date-text")
        {
            dates.push(t.text.clone());
        }
    });
    assert_eq!(dates, vec!["DOMINGO 1".to_string()]);
}
