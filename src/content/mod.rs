//! Content model: the editable values of the card and flyer compositions.
//!
//! Pure data. Setters are total: any string is accepted and stored verbatim.

pub(crate) mod model;
pub(crate) mod photo;
