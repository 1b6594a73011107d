use crate::foundation::{color::Color, core::Edges};

/// Script display family used for card titles and messages.
pub const SCRIPT_FAMILY: &str = "Dancing Script";
/// Serif family used for headings and decorative text.
pub const SERIF_FAMILY: &str = "Playfair Display";
/// Sans-serif family used for flyer body text.
pub const SANS_FAMILY: &str = "Montserrat";

/// Horizontal text alignment.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TextAlign {
    /// Flush left.
    Left,
    /// Centred.
    #[default]
    Center,
    /// Flush right.
    Right,
}

/// Whitespace handling, as in CSS `white-space`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WhiteSpace {
    /// Collapse whitespace runs (newlines included) and wrap.
    #[default]
    Normal,
    /// Keep whitespace and newlines, wrap long lines.
    PreWrap,
    /// Collapse whitespace, never wrap.
    NoWrap,
}

/// Single hard text shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextShadow {
    /// Horizontal offset in px.
    pub dx: f64,
    /// Vertical offset in px.
    pub dy: f64,
    /// Shadow colour.
    pub color: Color,
}

/// Fully computed text style of a text node or text control.
#[derive(Clone, Debug, PartialEq)]
pub struct TextStyle {
    /// Requested family name.
    pub font_family: String,
    /// Size in px.
    pub font_size: f32,
    /// CSS weight, 100..=900.
    pub font_weight: f32,
    /// Fill colour.
    pub color: Color,
    /// Optional shadow painted under the glyphs.
    pub text_shadow: Option<TextShadow>,
    /// Line height as a multiple of the font size.
    pub line_height: f32,
    /// Inner spacing between the box edge and the text.
    pub padding: Edges,
    /// Outer spacing between the frame and the box.
    pub margin: Edges,
    /// Horizontal alignment of each line.
    pub align: TextAlign,
    /// Whitespace handling.
    pub white_space: WhiteSpace,
}

impl TextStyle {
    /// Regular weight, centred, 1.3 line height, no box spacing.
    pub fn new(font_family: &str, font_size: f32, color: Color) -> Self {
        Self {
            font_family: font_family.to_string(),
            font_size,
            font_weight: 400.0,
            color,
            text_shadow: None,
            line_height: 1.3,
            padding: Edges::default(),
            margin: Edges::default(),
            align: TextAlign::Center,
            white_space: WhiteSpace::Normal,
        }
    }

    /// Set the weight.
    pub fn weight(mut self, weight: f32) -> Self {
        self.font_weight = weight;
        self
    }

    /// Set the line height factor.
    pub fn line_height(mut self, factor: f32) -> Self {
        self.line_height = factor;
        self
    }

    /// Set the alignment.
    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    /// Add a hard shadow.
    pub fn shadow(mut self, dx: f64, dy: f64, color: Color) -> Self {
        self.text_shadow = Some(TextShadow { dx, dy, color });
        self
    }

    /// Set the padding.
    pub fn padding(mut self, padding: Edges) -> Self {
        self.padding = padding;
        self
    }

    /// Set the margin.
    pub fn margin(mut self, margin: Edges) -> Self {
        self.margin = margin;
        self
    }

    /// Set whitespace handling.
    pub fn white_space(mut self, white_space: WhiteSpace) -> Self {
        self.white_space = white_space;
        self
    }
}

/// Whether a node paints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Display {
    /// Painted normally.
    #[default]
    Visible,
    /// Skipped with its whole subtree, like `display: none`.
    Hidden,
}

/// Outline of a node's box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoxShape {
    /// Rectangle, optionally with rounded corners.
    #[default]
    Rect,
    /// Ellipse inscribed in the frame.
    Ellipse,
}

/// Solid border drawn inside the frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Border {
    /// Stroke width in px.
    pub width: f64,
    /// Stroke colour.
    pub color: Color,
}

/// Box decoration of any node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxStyle {
    /// Fill behind the content.
    pub background: Option<Color>,
    /// Inner border.
    pub border: Option<Border>,
    /// Corner rounding in px, for [`BoxShape::Rect`].
    pub corner_radius: f64,
    /// Box outline; also clips images.
    pub shape: BoxShape,
    /// Group opacity of the node and its subtree.
    pub opacity: f32,
    /// Visibility.
    pub display: Display,
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self {
            background: None,
            border: None,
            corner_radius: 0.0,
            shape: BoxShape::Rect,
            opacity: 1.0,
            display: Display::Visible,
        }
    }
}

impl BoxStyle {
    /// Set the background.
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the border.
    pub fn border(mut self, width: f64, color: Color) -> Self {
        self.border = Some(Border { width, color });
        self
    }

    /// Set the corner radius.
    pub fn radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Use an elliptical outline.
    pub fn ellipse(mut self) -> Self {
        self.shape = BoxShape::Ellipse;
        self
    }

    /// Set the group opacity.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// True when the node is not painted.
    pub fn is_hidden(&self) -> bool {
        self.display == Display::Hidden
    }
}

/// Apply `white-space` rules to raw text before shaping.
pub fn normalize_whitespace(text: &str, mode: WhiteSpace) -> String {
    match mode {
        WhiteSpace::PreWrap => text.to_string(),
        WhiteSpace::Normal | WhiteSpace::NoWrap => {
            text.split_whitespace().collect::<Vec<_>>().join(" ")
        }
    }
}
