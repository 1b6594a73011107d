//! Shalom composes birthday cards and event flyers from fixed templates and exports them as PNG.
//!
//! The crate owns the export-and-layout side of the editor:
//!
//! - An [`Editor`] holds the card and flyer values and the per-template flyer block layout
//! - [`render_canvas`] projects them into a scene tree of [`Node`]s
//! - [`LayoutSurface`] turns drag and resize gestures into [`LayoutModel`] overrides
//! - [`Editor::export`] captures the canvas, rasterizes it on the CPU and hands a PNG to a
//!   [`DownloadSink`]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod foundation;

pub(crate) mod content;
pub(crate) mod editor;
pub(crate) mod export;
pub(crate) mod layout;
pub(crate) mod scene;
pub(crate) mod templates;
pub(crate) mod view;

pub use crate::foundation::color::Color;
pub use crate::foundation::core::{Affine, BezPath, Canvas, Edges, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{ShalomError, ShalomResult};

pub use crate::assets::decode::{PreparedImage, decode_image};
pub use crate::assets::fonts::{FontLibrary, ResolvedFamily};
pub use crate::assets::icons::icon_svg;
pub use crate::assets::store::AssetStore;
pub use crate::content::model::{
    CardContent, DEFAULT_CARD_MESSAGE, DEFAULT_CARD_TITLE, DEFAULT_FLYER_DATE,
    DEFAULT_FLYER_LOCATION, DEFAULT_FLYER_QUOTE, DEFAULT_FLYER_TIME, FieldId, FlyerContent, Mode,
    field_value, set_field_value,
};
pub use crate::content::photo::Photo;
pub use crate::editor::design::Design;
pub use crate::editor::state::{Editor, ExportTicket};
pub use crate::export::capture::{is_capture_form, prepare_capture};
pub use crate::export::encode::{ExportArtifact, encode_png, file_name_for, file_prefix};
pub use crate::export::fonts::{FontsReady, await_fonts};
pub use crate::export::pipeline::{ExportOutcome, ExportSettings, run_export};
pub use crate::export::raster::{RasterImage, RasterOptions, device_size, rasterize};
pub use crate::export::sink::{
    DirectorySink, DownloadSink, EXPORT_ERROR_MESSAGE, InMemorySink, LogNotifier, Notifier,
    RecordingNotifier,
};
pub use crate::layout::model::{
    BlockCapability, BlockId, BlockKey, BlockRect, LayoutEntry, LayoutModel,
};
pub use crate::layout::surface::{LayoutSurface, ResizeHandle, wrap_block};
pub use crate::scene::node::{
    Affordance, IconGlyph, ImageFit, ImageSource, Node, NodeKind, Position, Region, StaticAsset,
    TextContent, TextField,
};
pub use crate::scene::style::{
    Border, BoxShape, BoxStyle, Display, SANS_FAMILY, SCRIPT_FAMILY, SERIF_FAMILY, TextAlign,
    TextShadow, TextStyle, WhiteSpace, normalize_whitespace,
};
pub use crate::templates::catalog::{
    CardTemplate, FlyerTemplate, step_card_template, step_flyer_template,
};
pub use crate::templates::defaults::{default_rect, default_rect_for_id};
pub use crate::view::page::render_page;
pub use crate::view::{RenderMode, render_canvas, render_card, render_flyer};
