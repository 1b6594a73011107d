//! Template renderer: projects the content and layout models into a scene tree.
//!
//! Rendering is a pure function of the models. [`RenderMode::Export`] returns the same tree
//! passed through the export capture transform, so the exported form can be inspected without
//! rasterizing.

pub(crate) mod card;
pub(crate) mod flyer;
pub(crate) mod page;
pub(crate) mod widgets;

use crate::{
    content::model::{CardContent, FlyerContent, Mode},
    editor::state::Editor,
    export::capture::prepare_capture,
    scene::node::Node,
};

/// Which form of the tree to produce.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Live editing tree: text controls, upload hints, drag and resize grips.
    #[default]
    Edit,
    /// Export form: static text, no editing chrome, square outer corners.
    Export,
}

/// Card canvas for `card`.
pub fn render_card(card: &CardContent, mode: RenderMode) -> Node {
    finish(card::build(card), mode)
}

/// Flyer canvas for `flyer`, with blocks placed by its layout model.
pub fn render_flyer(flyer: &FlyerContent, mode: RenderMode) -> Node {
    finish(flyer::build(flyer), mode)
}

/// Canvas of the editor's active composition.
pub fn render_canvas(editor: &Editor, mode: RenderMode) -> Node {
    match editor.mode() {
        Mode::Card => render_card(editor.card(), mode),
        Mode::Flyer => render_flyer(editor.flyer(), mode),
    }
}

fn finish(root: Node, mode: RenderMode) -> Node {
    match mode {
        RenderMode::Edit => root,
        RenderMode::Export => prepare_capture(root),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/view/render.rs"]
mod tests;
