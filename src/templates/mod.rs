//! Compiled-in template descriptors: card skins, flyer skins and flyer default block geometry.

pub(crate) mod catalog;
pub(crate) mod defaults;
