use crate::{
    foundation::{
        color::Color,
        core::{Canvas, Rect},
        error::{ShalomError, ShalomResult},
    },
    layout::model::{BlockCapability, BlockId, BlockRect, LayoutModel},
    scene::{
        node::{Affordance, IconGlyph, Node, Position, Region},
        style::BoxStyle,
    },
};

const HANDLE_SIZE: f64 = 10.0;
const GRIP_SIZE: f64 = 24.0;

/// Grip of a resizable block. Edges move one side, corners move two.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandle {
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top-left corner.
    TopLeft,
    /// Top-right corner.
    TopRight,
    /// Bottom-left corner.
    BottomLeft,
    /// Bottom-right corner.
    BottomRight,
}

impl ResizeHandle {
    /// Corner grips, the ones drawn on resizable blocks.
    pub const CORNERS: [ResizeHandle; 4] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::BottomRight,
    ];

    fn moves_left(self) -> bool {
        matches!(
            self,
            ResizeHandle::Left | ResizeHandle::TopLeft | ResizeHandle::BottomLeft
        )
    }

    fn moves_right(self) -> bool {
        matches!(
            self,
            ResizeHandle::Right | ResizeHandle::TopRight | ResizeHandle::BottomRight
        )
    }

    fn moves_top(self) -> bool {
        matches!(
            self,
            ResizeHandle::Top | ResizeHandle::TopLeft | ResizeHandle::TopRight
        )
    }

    fn moves_bottom(self) -> bool {
        matches!(
            self,
            ResizeHandle::Bottom | ResizeHandle::BottomLeft | ResizeHandle::BottomRight
        )
    }

    /// Grip centre on a block of `width` x `height`, block-local.
    fn anchor(self, width: f64, height: f64) -> (f64, f64) {
        let x = if self.moves_left() {
            0.0
        } else if self.moves_right() {
            width
        } else {
            width / 2.0
        };
        let y = if self.moves_top() {
            0.0
        } else if self.moves_bottom() {
            height
        } else {
            height / 2.0
        };
        (x, y)
    }
}

/// Gesture front-end over a [`LayoutModel`], bound to the active flyer template.
///
/// Every gesture validates its input, clamps the result to the canvas and writes the final
/// rectangle through [`LayoutModel::set_rect`].
#[derive(Debug)]
pub struct LayoutSurface<'a> {
    model: &'a mut LayoutModel,
    template: String,
    canvas: Canvas,
}

impl<'a> LayoutSurface<'a> {
    /// Bind `model` to `template` on the flyer canvas.
    pub fn new(model: &'a mut LayoutModel, template: impl Into<String>) -> Self {
        Self {
            model,
            template: template.into(),
            canvas: Canvas::FLYER,
        }
    }

    /// Active template id.
    pub fn template(&self) -> &str {
        &self.template
    }

    /// Current rectangle of `block`.
    pub fn rect(&self, block: BlockId) -> BlockRect {
        self.model.get_rect(&self.template, block)
    }

    /// Move `block` so its top-left corner lands at `(x, y)`, keeping its size.
    #[tracing::instrument(skip(self), fields(template = %self.template))]
    pub fn drag_to(&mut self, block: BlockId, x: f64, y: f64) -> ShalomResult<BlockRect> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ShalomError::validation("drag target must be finite"));
        }
        let cur = self.rect(block).fit_within(self.canvas);
        let max_x = (f64::from(self.canvas.width) - cur.width).max(0.0);
        let max_y = (f64::from(self.canvas.height) - cur.height).max(0.0);
        let next = BlockRect::new(
            x.clamp(0.0, max_x),
            y.clamp(0.0, max_y),
            cur.width,
            cur.height,
        )?;
        self.commit(block, next)
    }

    /// Move `block` by `(dx, dy)`, keeping its size.
    pub fn drag_by(&mut self, block: BlockId, dx: f64, dy: f64) -> ShalomResult<BlockRect> {
        let cur = self.rect(block);
        self.drag_to(block, cur.x + dx, cur.y + dy)
    }

    /// Drag `handle` of a resizable block by `(dx, dy)`.
    ///
    /// The moving sides stop at the block's minimum content size and at the canvas edges; the
    /// opposite sides stay put.
    #[tracing::instrument(skip(self), fields(template = %self.template))]
    pub fn resize_by(
        &mut self,
        block: BlockId,
        handle: ResizeHandle,
        dx: f64,
        dy: f64,
    ) -> ShalomResult<BlockRect> {
        if block.capability() != BlockCapability::DragAndResize {
            return Err(ShalomError::validation(format!(
                "block '{}' cannot be resized",
                block.as_str()
            )));
        }
        if !dx.is_finite() || !dy.is_finite() {
            return Err(ShalomError::validation("resize delta must be finite"));
        }

        // Off-canvas overrides are pulled back inside before any side moves.
        let cur = self.rect(block).fit_within(self.canvas).to_rect();
        let min = block.min_size();
        let cw = f64::from(self.canvas.width);
        let ch = f64::from(self.canvas.height);
        let (mut x0, mut y0, mut x1, mut y1) = (cur.x0, cur.y0, cur.x1, cur.y1);

        if handle.moves_left() {
            x0 = (x0 + dx).min(x1 - min.width).max(0.0);
        }
        if handle.moves_right() {
            x1 = (x1 + dx).max(x0 + min.width).min(cw);
        }
        if handle.moves_top() {
            y0 = (y0 + dy).min(y1 - min.height).max(0.0);
        }
        if handle.moves_bottom() {
            y1 = (y1 + dy).max(y0 + min.height).min(ch);
        }

        let next = BlockRect::new(x0, y0, x1 - x0, y1 - y0)?;
        self.commit(block, next)
    }

    fn commit(&mut self, block: BlockId, rect: BlockRect) -> ShalomResult<BlockRect> {
        self.model.set_rect(&self.template, block, rect);
        tracing::debug!(
            block = block.as_str(),
            x = rect.x,
            y = rect.y,
            w = rect.width,
            h = rect.height,
            "block moved"
        );
        Ok(rect)
    }

    /// Absolutely positioned wrapper placing `content` at the block's current rectangle.
    pub fn wrap(&self, block: BlockId, content: Node) -> Node {
        wrap_block(self.model, &self.template, block, content)
    }
}

/// Wrapper node placing `content` at the current rectangle of `block` in `template`.
///
/// `content` is expected in block-local coordinates. The quote block gets a separate move grip
/// so its text stays editable; resizable blocks get corner grips.
pub fn wrap_block(model: &LayoutModel, template: &str, block: BlockId, content: Node) -> Node {
    let rect = model.get_rect(template, block);
    let mut wrapper = Node::container(format!("block block-{}", block.as_str()), rect.to_rect())
        .with_region(Region::Block(block))
        .with_position(Position::Absolute)
        .child(content);

    if block == BlockId::Quote {
        let x = (rect.width - GRIP_SIZE) / 2.0;
        wrapper.children.push(
            Node::icon(
                "drag-handle",
                Rect::new(x, -GRIP_SIZE - 4.0, x + GRIP_SIZE, -4.0),
                IconGlyph::Move,
                Color::WHITE,
            )
            .with_style(
                BoxStyle::default()
                    .background(Color::rgba(0, 0, 0, 140))
                    .radius(GRIP_SIZE / 2.0),
            )
            .with_role(Affordance::DragHandle),
        );
    }

    if block.capability() == BlockCapability::DragAndResize {
        let half = HANDLE_SIZE / 2.0;
        for handle in ResizeHandle::CORNERS {
            let (cx, cy) = handle.anchor(rect.width, rect.height);
            wrapper.children.push(
                Node::container(
                    "resize-handle",
                    Rect::new(cx - half, cy - half, cx + half, cy + half),
                )
                .with_style(
                    BoxStyle::default()
                        .background(Color::WHITE)
                        .border(1.0, Color::rgb(0x33, 0x33, 0x33)),
                )
                .with_role(Affordance::ResizeHandle(handle)),
            );
        }
    }

    wrapper
}

#[cfg(test)]
#[path = "../../tests/unit/layout/surface.rs"]
mod tests;
