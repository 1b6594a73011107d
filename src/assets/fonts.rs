use std::{path::Path, sync::Arc};

use anyhow::Context;

use crate::{
    foundation::error::{ShalomError, ShalomResult},
    scene::style::TextStyle,
};

/// RGBA8 brush colour carried through Parley layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct TextBrushRgba8 {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
    pub(crate) a: u8,
}

#[derive(Clone, Debug)]
struct FontFile {
    label: String,
    bytes: Arc<Vec<u8>>,
}

/// Outcome of looking up a requested family.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ResolvedFamily<'a> {
    /// Family that will actually be used.
    pub name: &'a str,
    /// True when the requested family is not loaded and the fallback stands in.
    pub substituted: bool,
}

/// Font files available to text layout, indexed by family name.
///
/// The first family loaded is the fallback for any unknown request.
#[derive(Clone, Debug, Default)]
pub struct FontLibrary {
    files: Vec<FontFile>,
    families: Vec<String>,
}

impl FontLibrary {
    /// Library with no fonts. Text is skipped at export.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every `.ttf`, `.otf` and `.ttc` file in `dir`, in file-name order.
    ///
    /// A missing directory yields an empty library. Unreadable font files are skipped.
    pub fn load_dir(dir: &Path) -> Self {
        let mut lib = Self::empty();
        let Ok(rd) = std::fs::read_dir(dir) else {
            tracing::warn!(dir = %dir.display(), "font directory not found");
            return lib;
        };

        let mut paths: Vec<_> = rd
            .flatten()
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter(|path| {
                path.extension()
                    .and_then(|s| s.to_str())
                    .map(|ext| matches!(ext.to_ascii_lowercase().as_str(), "ttf" | "otf" | "ttc"))
                    .unwrap_or(false)
            })
            .collect();
        paths.sort();

        for path in paths {
            let loaded = std::fs::read(&path)
                .with_context(|| format!("read font '{}'", path.display()))
                .map_err(ShalomError::from)
                .and_then(|bytes| lib.register(path.display().to_string(), bytes));
            match loaded {
                Ok(families) => {
                    tracing::debug!(font = %path.display(), ?families, "font loaded")
                }
                Err(e) => tracing::warn!(font = %path.display(), error = %e, "font skipped"),
            }
        }
        lib
    }

    /// Register one font file and return the families it declares.
    pub fn register(&mut self, label: impl Into<String>, bytes: Vec<u8>) -> ShalomResult<Vec<String>> {
        let mut font_ctx = parley::FontContext::default();
        let registered = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(bytes.clone()), None);
        let mut names = Vec::new();
        for (family_id, _) in registered {
            if let Some(name) = font_ctx.collection.family_name(family_id) {
                names.push(name.to_string());
            }
        }
        if names.is_empty() {
            return Err(ShalomError::validation("no font families registered from font bytes"));
        }

        for name in &names {
            if !self.families.iter().any(|f| f.eq_ignore_ascii_case(name)) {
                self.families.push(name.clone());
            }
        }
        self.files.push(FontFile {
            label: label.into(),
            bytes: Arc::new(bytes),
        });
        Ok(names)
    }

    /// Loaded family names, in load order.
    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// True when no font was loaded.
    pub fn is_empty(&self) -> bool {
        self.families.is_empty()
    }

    /// Family used for requests that match nothing.
    pub fn fallback_family(&self) -> Option<&str> {
        self.families.first().map(String::as_str)
    }

    /// Match `family` case-insensitively, falling back to [`FontLibrary::fallback_family`].
    pub fn resolve(&self, family: &str) -> Option<ResolvedFamily<'_>> {
        if let Some(name) = self
            .families
            .iter()
            .find(|f| f.eq_ignore_ascii_case(family.trim()))
        {
            return Some(ResolvedFamily {
                name,
                substituted: false,
            });
        }
        self.fallback_family().map(|name| ResolvedFamily {
            name,
            substituted: true,
        })
    }
}

/// Parley shaping and line breaking over the fonts of a [`FontLibrary`].
pub(crate) struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<TextBrushRgba8>,
}

impl TextLayoutEngine {
    /// Fresh Parley contexts holding every file of `fonts`.
    pub(crate) fn new(fonts: &FontLibrary) -> Self {
        let mut font_ctx = parley::FontContext::default();
        for file in &fonts.files {
            let registered = font_ctx.collection.register_fonts(
                parley::fontique::Blob::from(file.bytes.as_ref().clone()),
                None,
            );
            tracing::trace!(font = %file.label, families = registered.len(), "font registered");
        }
        Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
        }
    }

    /// Shape `text` in `family` with the size, weight and colour of `style`.
    ///
    /// Lines are broken at `max_width_px` when given and are left start-aligned; callers place
    /// each line themselves.
    pub(crate) fn layout(
        &mut self,
        text: &str,
        family: &str,
        style: &TextStyle,
        max_width_px: Option<f32>,
    ) -> ShalomResult<parley::Layout<TextBrushRgba8>> {
        if !style.font_size.is_finite() || style.font_size <= 0.0 {
            return Err(ShalomError::validation(
                "text font_size must be finite and > 0",
            ));
        }

        let brush = TextBrushRgba8 {
            r: style.color.r,
            g: style.color.g,
            b: style.color.b,
            a: style.color.a,
        };
        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(family.to_string())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(style.font_size));
        builder.push_default(parley::style::StyleProperty::FontWeight(
            parley::FontWeight::new(style.font_weight),
        ));
        builder.push_default(parley::style::StyleProperty::Brush(brush));

        let mut layout: parley::Layout<TextBrushRgba8> = builder.build(text);
        layout.break_all_lines(max_width_px);
        layout.align(
            max_width_px,
            parley::Alignment::Start,
            parley::AlignmentOptions::default(),
        );
        Ok(layout)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/fonts.rs"]
mod tests;
