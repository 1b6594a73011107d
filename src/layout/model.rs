use std::collections::BTreeMap;

use crate::{
    foundation::core::{Canvas, Rect, Size},
    foundation::error::{ShalomError, ShalomResult},
    templates::defaults::default_rect_for_id,
};

/// Movable flyer blocks.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum BlockId {
    /// Static "ENCUENTRO / JUVENIL" label.
    Header,
    /// Community logo image.
    Logo,
    /// Bible quote text.
    Quote,
    /// Date and time fields.
    #[serde(rename = "datetime")]
    DateTime,
    /// Location icon and text.
    Location,
}

/// What a user gesture may do to a block.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockCapability {
    /// Position only; size is fixed by the template.
    DragOnly,
    /// Position and size.
    DragAndResize,
}

impl BlockId {
    /// Every block, in paint order.
    pub const ALL: [BlockId; 5] = [
        BlockId::Header,
        BlockId::Logo,
        BlockId::Quote,
        BlockId::DateTime,
        BlockId::Location,
    ];

    /// Lowercase identifier.
    pub fn as_str(self) -> &'static str {
        match self {
            BlockId::Header => "header",
            BlockId::Logo => "logo",
            BlockId::Quote => "quote",
            BlockId::DateTime => "datetime",
            BlockId::Location => "location",
        }
    }

    /// Gesture capability, fixed by block kind.
    pub fn capability(self) -> BlockCapability {
        match self {
            BlockId::Header | BlockId::Logo => BlockCapability::DragOnly,
            BlockId::Quote | BlockId::DateTime | BlockId::Location => {
                BlockCapability::DragAndResize
            }
        }
    }

    /// Smallest size the block content still fits in.
    pub fn min_size(self) -> Size {
        match self {
            BlockId::Header => Size::new(200.0, 80.0),
            BlockId::Logo => Size::new(40.0, 40.0),
            BlockId::Quote => Size::new(120.0, 60.0),
            BlockId::DateTime => Size::new(120.0, 60.0),
            BlockId::Location => Size::new(140.0, 40.0),
        }
    }
}

impl std::str::FromStr for BlockId {
    type Err = ShalomError;

    fn from_str(s: &str) -> ShalomResult<Self> {
        BlockId::ALL
            .into_iter()
            .find(|b| b.as_str() == s)
            .ok_or_else(|| ShalomError::validation(format!("unknown block id '{s}'")))
    }
}

/// Position and size of a block in canvas-local pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "RawRect")]
pub struct BlockRect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Width, > 0.
    pub width: f64,
    /// Height, > 0.
    pub height: f64,
}

#[derive(serde::Deserialize)]
struct RawRect {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

impl TryFrom<RawRect> for BlockRect {
    type Error = ShalomError;

    fn try_from(r: RawRect) -> ShalomResult<Self> {
        BlockRect::new(r.x, r.y, r.width, r.height)
    }
}

impl BlockRect {
    /// Validated rectangle: finite, non-negative origin, positive size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> ShalomResult<Self> {
        if ![x, y, width, height].iter().all(|v| v.is_finite()) {
            return Err(ShalomError::validation("block rect must be finite"));
        }
        if x < 0.0 || y < 0.0 {
            return Err(ShalomError::validation(format!(
                "block rect origin must be non-negative, got ({x}, {y})"
            )));
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(ShalomError::validation(format!(
                "block rect size must be > 0, got {width}x{height}"
            )));
        }
        Ok(Self {
            x,
            y,
            width,
            height,
        })
    }

    pub(crate) const fn from_const(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// As a kurbo rectangle.
    pub fn to_rect(self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Size component.
    pub fn size(self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Whether the rectangle lies entirely inside `canvas`.
    pub fn fits(self, canvas: Canvas) -> bool {
        self.x + self.width <= f64::from(canvas.width)
            && self.y + self.height <= f64::from(canvas.height)
    }

    /// Shrink to at most the canvas size, then shift back inside the canvas.
    pub fn fit_within(self, canvas: Canvas) -> BlockRect {
        let cw = f64::from(canvas.width);
        let ch = f64::from(canvas.height);
        let width = self.width.min(cw);
        let height = self.height.min(ch);
        Self {
            x: self.x.min(cw - width),
            y: self.y.min(ch - height),
            width,
            height,
        }
    }
}

/// Composite override key: one template id plus one block.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct BlockKey {
    /// Template id exactly as selected.
    pub template: String,
    /// Block within that template.
    pub block: BlockId,
}

impl BlockKey {
    /// Build a key.
    pub fn new(template: impl Into<String>, block: BlockId) -> Self {
        Self {
            template: template.into(),
            block,
        }
    }
}

/// Session-only block geometry overrides, keyed by `(template, block)`.
///
/// Lookups fall back to the template's compiled-in default rectangle. Overrides for one template
/// never affect another, so switching templates and back restores the earlier arrangement.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "Vec<LayoutEntry>", into = "Vec<LayoutEntry>")]
pub struct LayoutModel {
    overrides: BTreeMap<BlockKey, BlockRect>,
}

/// One serialized override.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LayoutEntry {
    /// Template id.
    pub template: String,
    /// Block id.
    pub block: BlockId,
    /// Overridden rectangle.
    pub rect: BlockRect,
}

impl TryFrom<Vec<LayoutEntry>> for LayoutModel {
    type Error = ShalomError;

    /// Rebuild a model from stored overrides. Every rectangle must lie on the flyer canvas.
    fn try_from(entries: Vec<LayoutEntry>) -> ShalomResult<Self> {
        let mut model = LayoutModel::default();
        for e in entries {
            if !e.rect.fits(Canvas::FLYER) {
                return Err(ShalomError::validation(format!(
                    "override for '{}' {} leaves the {}x{} canvas",
                    e.template,
                    e.block.as_str(),
                    Canvas::FLYER.width,
                    Canvas::FLYER.height
                )));
            }
            model.set_rect(&e.template, e.block, e.rect);
        }
        Ok(model)
    }
}

impl From<LayoutModel> for Vec<LayoutEntry> {
    fn from(model: LayoutModel) -> Self {
        model
            .overrides
            .into_iter()
            .map(|(key, rect)| LayoutEntry {
                template: key.template,
                block: key.block,
                rect,
            })
            .collect()
    }
}

impl LayoutModel {
    /// Current rectangle: the session override if any, else the template default.
    pub fn get_rect(&self, template: &str, block: BlockId) -> BlockRect {
        self.overrides
            .get(&BlockKey::new(template, block))
            .copied()
            .unwrap_or_else(|| default_rect_for_id(template, block))
    }

    /// Store an override. Repeating an identical call leaves the model unchanged.
    pub fn set_rect(&mut self, template: &str, block: BlockId, rect: BlockRect) {
        self.overrides.insert(BlockKey::new(template, block), rect);
    }

    /// Whether `(template, block)` carries a user override.
    pub fn is_overridden(&self, template: &str, block: BlockId) -> bool {
        self.overrides.contains_key(&BlockKey::new(template, block))
    }

    /// Drop every override of one template, restoring its defaults.
    pub fn reset(&mut self, template: &str) {
        self.overrides.retain(|key, _| key.template != template);
    }

    /// Number of stored overrides.
    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    /// True when no block was ever moved or resized.
    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/model.rs"]
mod tests;
