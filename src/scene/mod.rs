//! Scene tree: the DOM-like projection the template renderer produces and the export pipeline
//! captures.
//!
//! Every node carries an explicit frame in its parent's coordinate space; there is no flow
//! layout pass. The tree is cheap to clone and is rebuilt from the models on every change.

pub(crate) mod node;
pub(crate) mod style;
