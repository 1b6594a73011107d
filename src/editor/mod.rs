//! Editing session: owns the content and layout models and the export trigger.

pub(crate) mod design;
pub(crate) mod state;
