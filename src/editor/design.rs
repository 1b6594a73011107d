use std::{fs::File, io::BufReader, path::Path};

use crate::{
    content::model::{CardContent, FlyerContent, Mode},
    editor::state::Editor,
    foundation::error::{ShalomError, ShalomResult},
};

/// JSON snapshot of an editing session.
///
/// Every field is optional; missing ones take the editor defaults. The photo travels as a data
/// URL and flyer overrides as `[{ "template", "block", "rect" }]`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Design {
    /// Active composition.
    pub mode: Mode,
    /// Card values.
    pub card: CardContent,
    /// Flyer values and block overrides.
    pub flyer: FlyerContent,
}

impl Design {
    /// Parse a design from JSON text.
    pub fn from_json(s: &str) -> ShalomResult<Self> {
        serde_json::from_str(s).map_err(|e| ShalomError::serde(format!("parse design JSON: {e}")))
    }

    /// Parse a design from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> ShalomResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| ShalomError::serde(format!("parse design JSON: {e}")))
    }

    /// Parse a design from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> ShalomResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            ShalomError::validation(format!("open design JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty-printed JSON.
    pub fn to_json_pretty(&self) -> ShalomResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ShalomError::serde(format!("serialize design JSON: {e}")))
    }

    /// Snapshot the values of `editor`.
    pub fn from_editor(editor: &Editor) -> Self {
        Self {
            mode: editor.mode(),
            card: editor.card().clone(),
            flyer: editor.flyer().clone(),
        }
    }

    /// Open an editing session on this design.
    pub fn into_editor(self) -> Editor {
        Editor::from_parts(self.mode, self.card, self.flyer)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/design.rs"]
mod tests;
