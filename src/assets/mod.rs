//! Static images, fonts and inline icons used when painting the canvas.

pub(crate) mod decode;
pub(crate) mod fonts;
pub(crate) mod icons;
pub(crate) mod store;
