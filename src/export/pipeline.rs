use std::time::{Duration, SystemTime};

use crate::{
    assets::store::AssetStore,
    content::model::Mode,
    export::{
        capture::{is_capture_form, prepare_capture},
        encode::{ExportArtifact, encode_png, file_name_for},
        fonts::await_fonts,
        raster::{RasterOptions, device_size, rasterize},
        sink::{DownloadSink, EXPORT_ERROR_MESSAGE, Notifier},
    },
    foundation::{
        color::Color,
        core::Canvas,
        error::{ShalomError, ShalomResult},
    },
    scene::node::{Node, NodeKind},
};

/// Export parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportSettings {
    /// Supersampling factor applied to the canvas size.
    pub scale: f32,
    /// Delay after fonts are resolved and before painting starts.
    pub settle: Duration,
    /// Backdrop colour; `None` exports a transparent background.
    pub background: Option<Color>,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            scale: 3.0,
            settle: Duration::from_millis(200),
            background: None,
        }
    }
}

impl ExportSettings {
    /// Check that the scale is usable for both canvas kinds.
    pub fn validate(&self) -> ShalomResult<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(ShalomError::validation("export scale must be finite and > 0"));
        }
        for canvas in [Canvas::CARD, Canvas::FLYER] {
            device_size(canvas.rect().size(), self.scale)?;
        }
        Ok(())
    }
}

/// How an export request ended when it did not fail.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExportOutcome {
    /// One PNG was delivered.
    Downloaded {
        /// Name of the delivered file.
        file_name: String,
    },
    /// The tree holds no canvas.
    NothingToExport,
    /// Another export is still running.
    Busy,
}

/// Export the canvas found in `tree` as a PNG and deliver it to `sink`.
///
/// `tree` is read only; the capture transform works on a clone. Any failure after the canvas is
/// found raises [`EXPORT_ERROR_MESSAGE`] once on `notifier` and is returned.
#[tracing::instrument(skip_all, fields(scale = settings.scale))]
pub fn run_export(
    tree: &Node,
    assets: &AssetStore,
    settings: &ExportSettings,
    sink: &mut dyn DownloadSink,
    notifier: &mut dyn Notifier,
) -> ShalomResult<ExportOutcome> {
    let Some((live, mode)) = tree.capture_root().and_then(|n| match n.kind {
        NodeKind::Canvas(mode) => Some((n, mode)),
        _ => None,
    }) else {
        tracing::debug!("no canvas mounted, nothing to export");
        return Ok(ExportOutcome::NothingToExport);
    };

    let delivered = capture(live, mode, assets, settings).and_then(|artifact| {
        let file_name = artifact.file_name.clone();
        sink.deliver(artifact)?;
        Ok(file_name)
    });

    match delivered {
        Ok(file_name) => {
            tracing::debug!(file = %file_name, "export delivered");
            Ok(ExportOutcome::Downloaded { file_name })
        }
        Err(e) => {
            tracing::error!(error = %e, "export failed");
            notifier.alert(EXPORT_ERROR_MESSAGE);
            Err(e)
        }
    }
}

fn capture(
    live: &Node,
    mode: Mode,
    assets: &AssetStore,
    settings: &ExportSettings,
) -> ShalomResult<ExportArtifact> {
    settings.validate()?;

    let fonts = await_fonts(live, assets.fonts(), settings.settle);
    let export_form = prepare_capture(live.clone());
    if !is_capture_form(&export_form) {
        return Err(ShalomError::evaluation(
            "capture subtree still holds editing controls",
        ));
    }
    tracing::debug!(mode = mode.as_str(), "capture prepared");

    let raster = rasterize(
        &export_form,
        assets,
        &fonts,
        &RasterOptions {
            scale: settings.scale,
            background: settings.background,
        },
    )?;
    let png = encode_png(&raster)?;

    Ok(ExportArtifact {
        file_name: file_name_for(mode, SystemTime::now()),
        width: raster.width,
        height: raster.height,
        png,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/export/pipeline.rs"]
mod tests;
