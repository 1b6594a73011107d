//! Export pipeline: fonts, capture transform, CPU rasterization, PNG encoding and delivery.
//!
//! The live tree is never painted directly. [`capture::prepare_capture`] turns a clone into the
//! export form first, and the rasterizer only accepts that form.

pub(crate) mod capture;
pub(crate) mod encode;
pub(crate) mod fonts;
pub(crate) mod pipeline;
pub(crate) mod raster;
pub(crate) mod sink;
