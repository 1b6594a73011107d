pub use kurbo::{Affine, BezPath, Point, Rect, Size, Vec2};

/// Canvas dimensions in canvas-local pixels (before export supersampling).
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Canvas {
    /// Card canvas: portrait 540 x 760.
    pub const CARD: Canvas = Canvas {
        width: 540,
        height: 760,
    };

    /// Flyer canvas: portrait 600 x 850.
    pub const FLYER: Canvas = Canvas {
        width: 600,
        height: 850,
    };

    /// Canvas bounds as a rectangle anchored at the origin.
    pub fn rect(self) -> Rect {
        Rect::new(0.0, 0.0, f64::from(self.width), f64::from(self.height))
    }
}

/// Box edge sizes, used for padding and margin.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Edges {
    /// Left edge.
    #[serde(default)]
    pub left: f64,
    /// Right edge.
    #[serde(default)]
    pub right: f64,
    /// Top edge.
    #[serde(default)]
    pub top: f64,
    /// Bottom edge.
    #[serde(default)]
    pub bottom: f64,
}

impl Edges {
    /// Same size on all four edges.
    pub const fn all(v: f64) -> Self {
        Self {
            left: v,
            right: v,
            top: v,
            bottom: v,
        }
    }

    /// Vertical and horizontal sizes, CSS shorthand order.
    pub const fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }

    /// Shrink `rect` by these edges, never producing a negative size.
    pub fn deflate(self, rect: Rect) -> Rect {
        let x0 = rect.x0 + self.left;
        let y0 = rect.y0 + self.top;
        let x1 = (rect.x1 - self.right).max(x0);
        let y1 = (rect.y1 - self.bottom).max(y0);
        Rect::new(x0, y0, x1, y1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
