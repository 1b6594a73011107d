use crate::{
    content::{
        model::{FieldId, Mode},
        photo::Photo,
    },
    foundation::{
        color::Color,
        core::{Affine, BezPath, Rect},
    },
    layout::{model::BlockId, surface::ResizeHandle},
    scene::style::{BoxStyle, Display, TextStyle},
};

/// Interactive region of a composition. Card: title, photo, message. Flyer: one per block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Region {
    /// Card title field.
    Title,
    /// Card photo click target.
    Photo,
    /// Card message field.
    Message,
    /// Flyer block wrapper.
    Block(BlockId),
}

impl Region {
    /// Stable identifier, matching the block id for flyer regions.
    pub fn as_str(self) -> &'static str {
        match self {
            Region::Title => "title",
            Region::Photo => "photo",
            Region::Message => "message",
            Region::Block(block) => block.as_str(),
        }
    }
}

/// Editing chrome that never belongs in an exported image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Affordance {
    /// Hover overlay over an uploaded photo.
    UploadHint,
    /// Grip used to move a block whose body is a text control.
    DragHandle,
    /// Corner or edge grip of a resizable block.
    ResizeHandle(ResizeHandle),
}

/// How a node's frame relates to its parent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Position {
    /// Part of the template's fixed arrangement.
    #[default]
    Static,
    /// Placed freely by the layout model.
    Absolute,
}

/// Static image files shipped with the application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StaticAsset {
    /// Community logo.
    Logo,
    /// Rose artwork behind the modern card.
    Roses,
}

impl StaticAsset {
    /// Every shipped image.
    pub const ALL: [StaticAsset; 2] = [StaticAsset::Logo, StaticAsset::Roses];

    /// File name under the asset root.
    pub fn file_name(self) -> &'static str {
        match self {
            StaticAsset::Logo => "shalom-logo.png",
            StaticAsset::Roses => "flores.jpg",
        }
    }
}

/// Image payload of an image node.
#[derive(Clone, Debug, PartialEq)]
pub enum ImageSource {
    /// Shipped file, resolved through the asset store.
    Static(StaticAsset),
    /// User photo bytes.
    Photo(Photo),
}

/// Image scaling inside the frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ImageFit {
    /// Fill the frame, cropping the overflow.
    #[default]
    Cover,
    /// Fit inside the frame, keeping the whole image.
    Contain,
}

/// Inline vector icons.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconGlyph {
    /// Camera outline of the photo placeholder.
    Camera,
    /// Map pin next to the flyer location.
    Location,
    /// Four-way arrow on drag handles.
    Move,
}

/// Literal text with a computed style.
#[derive(Clone, Debug, PartialEq)]
pub struct TextContent {
    /// Text as painted.
    pub text: String,
    /// Computed style.
    pub style: TextStyle,
}

/// Live editable text control bound to a content field.
#[derive(Clone, Debug, PartialEq)]
pub struct TextField {
    /// Bound field.
    pub field: FieldId,
    /// Current value.
    pub value: String,
    /// Hint text, shown only in edit mode while the value is empty.
    pub placeholder: String,
    /// Multi-line text area versus single-line input.
    pub multiline: bool,
    /// Style inherited from the template.
    pub style: TextStyle,
    /// Family forced by the control itself, winning over the template style.
    pub font_override: Option<String>,
}

impl TextField {
    /// Style actually in effect: the template style with the control's family override applied.
    pub fn computed_style(&self) -> TextStyle {
        let mut style = self.style.clone();
        if let Some(family) = &self.font_override {
            style.font_family = family.clone();
        }
        style
    }
}

/// What a node paints besides its box.
#[derive(Clone, Debug, PartialEq)]
pub enum NodeKind {
    /// Plain box.
    Container,
    /// Capture root of a composition: the subtree that gets exported.
    Canvas(Mode),
    /// Static text.
    Text(TextContent),
    /// Editable text control.
    TextField(TextField),
    /// Raster image.
    Image {
        /// Pixels to paint.
        source: ImageSource,
        /// Scaling rule.
        fit: ImageFit,
    },
    /// Vector icon filling the frame.
    Icon {
        /// Which icon.
        glyph: IconGlyph,
        /// Stroke/fill colour.
        color: Color,
    },
    /// Filled vector path in frame-local coordinates.
    Shape {
        /// Outline.
        path: BezPath,
        /// Fill colour.
        fill: Color,
    },
}

/// One element of the scene tree.
///
/// `frame` is expressed in the parent's coordinate space. `transform` is applied about the
/// frame's origin, after translation to it.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    /// Class name, kept through the export transform.
    pub class: String,
    /// Interactive region this node represents, if any.
    pub region: Option<Region>,
    /// Editing chrome marker.
    pub role: Option<Affordance>,
    /// Box in parent coordinates.
    pub frame: Rect,
    /// Positioning scheme.
    pub position: Position,
    /// Extra transform about the frame origin.
    pub transform: Option<Affine>,
    /// Box decoration.
    pub style: BoxStyle,
    /// Content.
    pub kind: NodeKind,
    /// Children, painted in order after the node's own content.
    pub children: Vec<Node>,
}

impl Node {
    /// Node of `kind` at `frame`, undecorated.
    pub fn new(class: impl Into<String>, frame: Rect, kind: NodeKind) -> Self {
        Self {
            class: class.into(),
            region: None,
            role: None,
            frame,
            position: Position::Static,
            transform: None,
            style: BoxStyle::default(),
            kind,
            children: Vec::new(),
        }
    }

    /// Empty box.
    pub fn container(class: impl Into<String>, frame: Rect) -> Self {
        Self::new(class, frame, NodeKind::Container)
    }

    /// Static text.
    pub fn text(
        class: impl Into<String>,
        frame: Rect,
        text: impl Into<String>,
        style: TextStyle,
    ) -> Self {
        Self::new(
            class,
            frame,
            NodeKind::Text(TextContent {
                text: text.into(),
                style,
            }),
        )
    }

    /// Image with cover fit.
    pub fn image(class: impl Into<String>, frame: Rect, source: ImageSource) -> Self {
        Self::new(
            class,
            frame,
            NodeKind::Image {
                source,
                fit: ImageFit::Cover,
            },
        )
    }

    /// Icon.
    pub fn icon(class: impl Into<String>, frame: Rect, glyph: IconGlyph, color: Color) -> Self {
        Self::new(class, frame, NodeKind::Icon { glyph, color })
    }

    /// Set the box style.
    pub fn with_style(mut self, style: BoxStyle) -> Self {
        self.style = style;
        self
    }

    /// Mark as an interactive region.
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Mark as editing chrome.
    pub fn with_role(mut self, role: Affordance) -> Self {
        self.role = Some(role);
        self
    }

    /// Set the positioning scheme.
    pub fn with_position(mut self, position: Position) -> Self {
        self.position = position;
        self
    }

    /// Set the extra transform.
    pub fn with_transform(mut self, transform: Affine) -> Self {
        self.transform = Some(transform);
        self
    }

    /// Append a child.
    pub fn child(mut self, child: Node) -> Self {
        self.children.push(child);
        self
    }

    /// Append children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Hide the node and its subtree.
    pub fn hide(&mut self) {
        self.style.display = Display::Hidden;
    }

    /// Local-to-parent transform: translation to the frame origin, then the extra transform.
    pub fn local_transform(&self) -> Affine {
        let origin = Affine::translate((self.frame.x0, self.frame.y0));
        match self.transform {
            Some(t) => origin * t,
            None => origin,
        }
    }

    /// Depth-first pre-order visit.
    pub fn walk<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for child in &self.children {
            child.walk(f);
        }
    }

    /// Depth-first pre-order visit with mutable access.
    pub fn walk_mut(&mut self, f: &mut impl FnMut(&mut Node)) {
        f(self);
        for child in &mut self.children {
            child.walk_mut(f);
        }
    }

    /// First node, in pre-order, matching `pred`.
    pub fn find(&self, pred: impl Fn(&Node) -> bool) -> Option<&Node> {
        fn go<'a>(node: &'a Node, pred: &dyn Fn(&Node) -> bool) -> Option<&'a Node> {
            if pred(node) {
                return Some(node);
            }
            node.children.iter().find_map(|c| go(c, pred))
        }
        go(self, &pred)
    }

    /// The composition's capture root, if the tree holds one.
    pub fn capture_root(&self) -> Option<&Node> {
        self.find(|n| matches!(n.kind, NodeKind::Canvas(_)))
    }

    /// Regions present in the tree, in paint order.
    pub fn regions(&self) -> Vec<Region> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let Some(region) = n.region {
                out.push(region);
            }
        });
        out
    }

    /// Node carrying `region`.
    pub fn region(&self, region: Region) -> Option<&Node> {
        self.find(|n| n.region == Some(region))
    }

    /// Every live text control in the tree.
    pub fn text_fields(&self) -> Vec<&TextField> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if let NodeKind::TextField(field) = &n.kind {
                out.push(field);
            }
        });
        out
    }

    /// Every node marked with editing chrome.
    pub fn affordances(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.walk(&mut |n| {
            if n.role.is_some() {
                out.push(n);
            }
        });
        out
    }

    /// Every font family requested by visible text in the tree.
    pub fn font_families(&self) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        fn go(node: &Node, out: &mut Vec<String>) {
            if node.style.is_hidden() {
                return;
            }
            let family = match &node.kind {
                NodeKind::Text(t) => Some(t.style.font_family.clone()),
                NodeKind::TextField(f) => Some(f.computed_style().font_family),
                _ => None,
            };
            if let Some(family) = family
                && !out.contains(&family)
            {
                out.push(family);
            }
            for child in &node.children {
                go(child, out);
            }
        }
        go(self, &mut out);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/node.rs"]
mod tests;
