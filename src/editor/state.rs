use std::{
    path::Path,
    sync::atomic::{AtomicBool, Ordering},
};

use anyhow::Context;

use crate::{
    assets::store::AssetStore,
    content::{
        model::{CardContent, FieldId, FlyerContent, Mode, field_value, set_field_value},
        photo::Photo,
    },
    export::{
        pipeline::{ExportOutcome, ExportSettings, run_export},
        sink::{DownloadSink, Notifier},
    },
    foundation::error::ShalomResult,
    layout::{
        model::{BlockId, BlockRect},
        surface::LayoutSurface,
    },
    scene::node::Node,
    templates::catalog::{step_card_template, step_flyer_template},
    view::{RenderMode, page::render_page, render_canvas},
};

/// Editing session: both compositions, the active mode and the export trigger.
///
/// Edits take `&mut self`; rendering and export only read. The two compositions are independent,
/// so switching mode never loses the other one's values.
#[derive(Debug, Default)]
pub struct Editor {
    mode: Mode,
    card: CardContent,
    flyer: FlyerContent,
    exporting: AtomicBool,
}

/// Held while an export runs. Dropping it re-enables the export trigger.
#[derive(Debug)]
pub struct ExportTicket<'a> {
    flag: &'a AtomicBool,
}

impl Drop for ExportTicket<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

impl Editor {
    /// Fresh session in card mode with the default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session over existing compositions.
    pub fn from_parts(mode: Mode, card: CardContent, flyer: FlyerContent) -> Self {
        Self {
            mode,
            card,
            flyer,
            exporting: AtomicBool::new(false),
        }
    }

    /// Active composition.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Switch the active composition.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode != mode {
            tracing::debug!(from = self.mode.as_str(), to = mode.as_str(), "mode switched");
        }
        self.mode = mode;
    }

    /// Card values.
    pub fn card(&self) -> &CardContent {
        &self.card
    }

    /// Flyer values and layout.
    pub fn flyer(&self) -> &FlyerContent {
        &self.flyer
    }

    /// Current text of `field`, whichever composition owns it.
    pub fn field(&self, field: FieldId) -> &str {
        field_value(&self.card, &self.flyer, field)
    }

    /// Store `value` in `field` verbatim.
    pub fn set_field(&mut self, field: FieldId, value: impl Into<String>) {
        set_field_value(&mut self.card, &mut self.flyer, field, value);
    }

    /// Template id of the active composition.
    pub fn template(&self) -> &str {
        match self.mode {
            Mode::Card => self.card.template(),
            Mode::Flyer => self.flyer.template(),
        }
    }

    /// Select a template of the active composition. Unknown ids are kept and fall back at render.
    pub fn select_template(&mut self, id: impl Into<String>) {
        let id = id.into();
        tracing::debug!(mode = self.mode.as_str(), template = %id, "template selected");
        match self.mode {
            Mode::Card => self.card.set_template(id),
            Mode::Flyer => self.flyer.set_template(id),
        }
    }

    /// Advance the template carousel, wrapping around, and return the new id.
    pub fn next_template(&mut self) -> &'static str {
        self.step_template(true)
    }

    /// Step the template carousel back, wrapping around, and return the new id.
    pub fn prev_template(&mut self) -> &'static str {
        self.step_template(false)
    }

    fn step_template(&mut self, forward: bool) -> &'static str {
        let id = match self.mode {
            Mode::Card => step_card_template(self.card.template(), forward),
            Mode::Flyer => step_flyer_template(self.flyer.template(), forward),
        };
        self.select_template(id);
        id
    }

    /// Replace the card photo with the image in `bytes`.
    ///
    /// Returns `false` and keeps the current photo when the bytes are not a recognised image.
    pub fn upload_photo(&mut self, bytes: Vec<u8>) -> bool {
        match Photo::from_bytes(bytes) {
            Ok(photo) => {
                tracing::debug!(mime = photo.mime(), bytes = photo.bytes().len(), "photo uploaded");
                self.card.set_photo(Some(photo));
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "photo upload ignored");
                false
            }
        }
    }

    /// [`Editor::upload_photo`] from a file. Only a failed read is an error.
    pub fn upload_photo_file(&mut self, path: impl AsRef<Path>) -> ShalomResult<bool> {
        let path = path.as_ref();
        let bytes =
            std::fs::read(path).with_context(|| format!("read photo '{}'", path.display()))?;
        Ok(self.upload_photo(bytes))
    }

    /// Remove the card photo.
    pub fn clear_photo(&mut self) {
        self.card.set_photo(None);
    }

    /// Gesture surface over the flyer layout, bound to the active flyer template.
    pub fn layout_surface(&mut self) -> LayoutSurface<'_> {
        let template = self.flyer.template().to_string();
        LayoutSurface::new(self.flyer.layout_mut(), template)
    }

    /// Effective rectangle of `block` in the active flyer template.
    pub fn block_rect(&self, block: BlockId) -> BlockRect {
        self.flyer.layout().get_rect(self.flyer.template(), block)
    }

    /// Drop the active flyer template's overrides.
    pub fn reset_layout(&mut self) {
        let template = self.flyer.template().to_string();
        self.flyer.layout_mut().reset(&template);
    }

    /// Canvas of the active composition.
    pub fn render(&self, mode: RenderMode) -> Node {
        render_canvas(self, mode)
    }

    /// Whole editor page around the live canvas.
    pub fn page(&self) -> Node {
        render_page(self)
    }

    /// True while an export holds the trigger.
    pub fn is_exporting(&self) -> bool {
        self.exporting.load(Ordering::Acquire)
    }

    /// Take the export trigger, or `None` when an export is already running.
    pub fn begin_export(&self) -> Option<ExportTicket<'_>> {
        self.exporting
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| ExportTicket {
                flag: &self.exporting,
            })
    }

    /// Export the page's canvas, or report [`ExportOutcome::Busy`] if an export is running.
    #[tracing::instrument(skip_all, fields(mode = self.mode.as_str(), template = self.template()))]
    pub fn export(
        &self,
        assets: &AssetStore,
        settings: &ExportSettings,
        sink: &mut dyn DownloadSink,
        notifier: &mut dyn Notifier,
    ) -> ShalomResult<ExportOutcome> {
        let Some(_ticket) = self.begin_export() else {
            tracing::debug!("export already running");
            return Ok(ExportOutcome::Busy);
        };
        let page = self.page();
        run_export(&page, assets, settings, sink, notifier)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/state.rs"]
mod tests;
