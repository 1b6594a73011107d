use super::*;
use crate::{
    content::model::{CardContent, FlyerContent},
    export::sink::{InMemorySink, RecordingNotifier},
    foundation::core::Rect,
    view::{RenderMode, render_card, render_flyer},
};

struct FailingSink;

impl DownloadSink for FailingSink {
    fn deliver(&mut self, _artifact: ExportArtifact) -> ShalomResult<()> {
        Err(ShalomError::render("disk full"))
    }
}

fn fast() -> ExportSettings {
    ExportSettings {
        scale: 1.0,
        settle: Duration::ZERO,
        background: None,
    }
}

#[test]
fn defaults_match_the_editor() {
    let s = ExportSettings::default();
    assert_eq!(s.scale, 3.0);
    assert_eq!(s.settle, Duration::from_millis(200));
    assert_eq!(s.background, None);
    s.validate().unwrap();
}

#[test]
fn bad_scales_are_rejected() {
    for scale in [0.0, -1.0, f32::NAN, f32::INFINITY, 100.0] {
        let s = ExportSettings { scale, ..fast() };
        assert!(matches!(s.validate(), Err(ShalomError::Validation(_))), "{scale}");
    }
}

#[test]
fn tree_without_canvas_is_a_silent_no_op() {
    let tree = Node::container("page", Rect::new(0.0, 0.0, 100.0, 100.0));
    let mut sink = InMemorySink::new();
    let mut notifier = RecordingNotifier::new();

    let out = run_export(&tree, &AssetStore::empty(), &fast(), &mut sink, &mut notifier).unwrap();
    assert_eq!(out, ExportOutcome::NothingToExport);
    assert!(sink.artifacts().is_empty());
    assert!(notifier.alerts().is_empty());
}

#[test]
fn live_card_exports_one_png_named_for_cards() {
    let live = render_card(&CardContent::default(), RenderMode::Edit);
    let before = live.clone();
    let mut sink = InMemorySink::new();
    let mut notifier = RecordingNotifier::new();

    let out = run_export(&live, &AssetStore::empty(), &fast(), &mut sink, &mut notifier).unwrap();
    let ExportOutcome::Downloaded { file_name } = out else {
        panic!("expected a download, got {out:?}");
    };
    assert!(file_name.starts_with("feliz-cumpleaños-shalom-"));
    assert!(file_name.ends_with(".png"));
    assert_eq!(live, before);

    assert_eq!(sink.artifacts().len(), 1);
    let art = &sink.artifacts()[0];
    assert_eq!(art.file_name, file_name);
    assert_eq!((art.width, art.height), (540, 760));
    let decoded = image::load_from_memory(&art.png).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (540, 760));
    assert!(notifier.alerts().is_empty());
}

#[test]
fn flyer_export_is_scaled_and_named_for_flyers() {
    let live = render_flyer(&FlyerContent::default(), RenderMode::Edit);
    let mut sink = InMemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let settings = ExportSettings {
        scale: 0.5,
        ..fast()
    };

    let out = run_export(&live, &AssetStore::empty(), &settings, &mut sink, &mut notifier).unwrap();
    assert!(matches!(out, ExportOutcome::Downloaded { ref file_name } if file_name.starts_with("flyer-evento-shalom-")));
    assert_eq!((sink.artifacts()[0].width, sink.artifacts()[0].height), (300, 425));
}

#[test]
fn delivery_failure_alerts_once_and_returns_the_error() {
    let live = render_card(&CardContent::default(), RenderMode::Edit);
    let mut notifier = RecordingNotifier::new();

    let err = run_export(&live, &AssetStore::empty(), &fast(), &mut FailingSink, &mut notifier)
        .unwrap_err();
    assert!(matches!(err, ShalomError::Render(_)));
    assert_eq!(notifier.alerts(), &[EXPORT_ERROR_MESSAGE.to_string()]);
}

#[test]
fn invalid_settings_fail_inside_the_pipeline() {
    let live = render_card(&CardContent::default(), RenderMode::Edit);
    let mut sink = InMemorySink::new();
    let mut notifier = RecordingNotifier::new();
    let settings = ExportSettings {
        scale: 0.0,
        ..fast()
    };

    assert!(run_export(&live, &AssetStore::empty(), &settings, &mut sink, &mut notifier).is_err());
    assert_eq!(notifier.alerts().len(), 1);
}
