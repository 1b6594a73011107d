use std::{collections::BTreeMap, time::Duration};

use crate::{assets::fonts::FontLibrary, scene::node::Node};

/// Proof that every font family used by a capture subtree was resolved.
///
/// Only [`await_fonts`] builds one, and the rasterizer requires it, so painting cannot start
/// before fonts are settled.
#[derive(Clone, Debug)]
pub struct FontsReady {
    resolved: BTreeMap<String, String>,
}

impl FontsReady {
    /// Family to shape `requested` with, or `None` when no font is loaded at all.
    pub fn family_for(&self, requested: &str) -> Option<&str> {
        self.resolved.get(requested).map(String::as_str)
    }

    /// Requested families that had to use the fallback, as `(requested, used)`.
    pub fn substitutions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.resolved
            .iter()
            .filter(|(req, used)| req != used)
            .map(|(req, used)| (req.as_str(), used.as_str()))
    }

    /// Number of resolved families.
    pub fn len(&self) -> usize {
        self.resolved.len()
    }

    /// True when nothing could be resolved.
    pub fn is_empty(&self) -> bool {
        self.resolved.is_empty()
    }
}

/// Resolve every family referenced by visible text under `root`, then wait `settle`.
#[tracing::instrument(skip_all, fields(settle_ms = settle.as_millis() as u64))]
pub fn await_fonts(root: &Node, fonts: &FontLibrary, settle: Duration) -> FontsReady {
    let mut resolved = BTreeMap::new();
    for family in root.font_families() {
        match fonts.resolve(&family) {
            Some(r) => {
                if r.substituted {
                    tracing::warn!(requested = %family, using = r.name, "font family not loaded, using fallback");
                }
                resolved.insert(family, r.name.to_string());
            }
            None => {
                tracing::warn!(requested = %family, "no fonts loaded, text will be skipped");
            }
        }
    }
    if !settle.is_zero() {
        std::thread::sleep(settle);
    }
    tracing::debug!(families = resolved.len(), "fonts ready");
    FontsReady { resolved }
}

#[cfg(test)]
#[path = "../../tests/unit/export/fonts.rs"]
mod tests;
