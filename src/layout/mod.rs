//! Flyer block layout: the per-template override map and the interactive surface that edits it.

pub(crate) mod model;
pub(crate) mod surface;
