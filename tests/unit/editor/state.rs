use std::time::Duration;

use super::*;
use crate::{
    export::sink::{EXPORT_ERROR_MESSAGE, InMemorySink, RecordingNotifier},
    scene::node::{NodeKind, Region},
    templates::defaults::default_rect_for_id,
};

fn tiny_jpeg() -> Vec<u8> {
    let img = image::RgbImage::from_pixel(3, 3, image::Rgb([10, 200, 10]));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut std::io::Cursor::new(&mut buf), image::ImageFormat::Jpeg)
        .unwrap();
    buf
}

fn fast() -> ExportSettings {
    ExportSettings {
        scale: 1.0,
        settle: Duration::ZERO,
        background: None,
    }
}

#[test]
fn fields_round_trip_verbatim() {
    let mut ed = Editor::new();
    let tricky = "línea uno\nlínea dos 🎂  \n";
    for field in FieldId::ALL {
        ed.set_field(field, tricky);
        assert_eq!(ed.field(field), tricky);
    }
    ed.set_field(FieldId::Title, "");
    assert_eq!(ed.card().title(), "");
}

#[test]
fn mode_switch_keeps_both_compositions() {
    let mut ed = Editor::new();
    ed.set_field(FieldId::Title, "Hola");
    ed.set_mode(Mode::Flyer);
    ed.set_field(FieldId::Quote, "Paz");
    ed.select_template("fire");
    ed.set_mode(Mode::Card);

    assert_eq!(ed.template(), "classic");
    assert_eq!(ed.field(FieldId::Title), "Hola");
    assert_eq!(ed.field(FieldId::Quote), "Paz");
    assert_eq!(ed.flyer().template(), "fire");
}

#[test]
fn carousel_wraps_in_both_directions() {
    let mut ed = Editor::new();
    assert_eq!(ed.prev_template(), "elegant");
    assert_eq!(ed.next_template(), "classic");
    assert_eq!(ed.next_template(), "modern");

    ed.set_mode(Mode::Flyer);
    assert_eq!(ed.next_template(), "hope");
    assert_eq!(ed.next_template(), "fire");
    assert_eq!(ed.next_template(), "divine");
    assert_eq!(ed.template(), "divine");
}

#[test]
fn photo_upload_is_last_write_wins_and_ignores_garbage() {
    let mut ed = Editor::new();
    assert!(ed.upload_photo(tiny_jpeg()));
    assert_eq!(ed.card().photo().unwrap().mime(), "image/jpeg");

    assert!(!ed.upload_photo(b"not an image".to_vec()));
    assert_eq!(ed.card().photo().unwrap().mime(), "image/jpeg");

    ed.clear_photo();
    assert!(ed.card().photo().is_none());
    assert!(ed.upload_photo_file("/definitely/missing.png").is_err());
}

#[test]
fn corrupt_upload_keeps_the_current_photo_and_exports_cleanly() {
    let mut ed = Editor::new();
    assert!(ed.upload_photo(tiny_jpeg()));

    let mut corrupt = b"\x89PNG\r\n\x1a\n".to_vec();
    corrupt.extend_from_slice(b"garbage after a valid signature");
    assert!(!ed.upload_photo(corrupt));
    assert_eq!(ed.card().photo().unwrap().mime(), "image/jpeg");

    let mut sink = InMemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let out = ed
        .export(&AssetStore::empty(), &fast(), &mut sink, &mut notifier)
        .unwrap();
    assert!(matches!(out, ExportOutcome::Downloaded { .. }));
    assert!(notifier.alerts().is_empty());
}

#[test]
fn layout_gestures_persist_per_template() {
    let mut ed = Editor::new();
    ed.set_mode(Mode::Flyer);
    ed.select_template("fire");
    let moved = ed.layout_surface().drag_to(BlockId::Quote, 50.0, 60.0).unwrap();
    assert_eq!(ed.block_rect(BlockId::Quote), moved);

    ed.select_template("hope");
    assert_eq!(
        ed.block_rect(BlockId::Quote),
        default_rect_for_id("hope", BlockId::Quote)
    );

    ed.select_template("fire");
    assert_eq!(ed.block_rect(BlockId::Quote), moved);

    ed.reset_layout();
    assert_eq!(
        ed.block_rect(BlockId::Quote),
        default_rect_for_id("fire", BlockId::Quote)
    );
}

#[test]
fn render_follows_active_mode() {
    let mut ed = Editor::new();
    assert!(matches!(ed.render(RenderMode::Edit).kind, NodeKind::Canvas(Mode::Card)));
    ed.set_mode(Mode::Flyer);
    let canvas = ed.render(RenderMode::Export);
    assert!(matches!(canvas.kind, NodeKind::Canvas(Mode::Flyer)));
    assert!(canvas.region(Region::Block(BlockId::Quote)).is_some());
}

#[test]
fn ticket_disables_the_trigger_until_dropped() {
    let ed = Editor::new();
    let ticket = ed.begin_export().unwrap();
    assert!(ed.is_exporting());
    assert!(ed.begin_export().is_none());

    let mut sink = InMemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let out = ed
        .export(&AssetStore::empty(), &fast(), &mut sink, &mut notifier)
        .unwrap();
    assert_eq!(out, ExportOutcome::Busy);
    assert!(sink.artifacts().is_empty());

    drop(ticket);
    assert!(!ed.is_exporting());
    assert!(ed.begin_export().is_some());
}

#[test]
fn export_delivers_and_releases_the_trigger() {
    let ed = Editor::new();
    let mut sink = InMemorySink::new();
    let mut notifier = RecordingNotifier::new();

    let out = ed
        .export(&AssetStore::empty(), &fast(), &mut sink, &mut notifier)
        .unwrap();
    assert!(matches!(out, ExportOutcome::Downloaded { .. }));
    assert_eq!(sink.artifacts().len(), 1);
    assert!(!ed.is_exporting());
}

#[test]
fn failed_export_releases_the_trigger_and_alerts() {
    let ed = Editor::new();
    let mut sink = InMemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let bad = ExportSettings {
        scale: -2.0,
        ..fast()
    };

    assert!(ed.export(&AssetStore::empty(), &bad, &mut sink, &mut notifier).is_err());
    assert_eq!(notifier.alerts(), &[EXPORT_ERROR_MESSAGE.to_string()]);
    assert!(!ed.is_exporting());
}
