/// Paint attributes shared by every primitive.
///
/// Colors are CSS strings; `currentColor` resolves to the frame color at translation time.
/// A missing `fill` means no fill.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    /// Stroke paint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Stroke width in local units (default 1).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_width: Option<f64>,
    /// Fill paint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Space- or comma-separated dash lengths.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke_dasharray: Option<String>,
}

impl Style {
    /// Stroke-only style.
    pub fn stroked(color: &str, width: f64) -> Self {
        Self {
            stroke: Some(color.to_owned()),
            stroke_width: Some(width),
            fill: Some("none".to_owned()),
            stroke_dasharray: None,
        }
    }

    /// Fill-only style.
    pub fn filled(color: &str) -> Self {
        Self {
            fill: Some(color.to_owned()),
            ..Self::default()
        }
    }

    /// Add a dash pattern.
    pub fn dashed(mut self, pattern: &str) -> Self {
        self.stroke_dasharray = Some(pattern.to_owned());
        self
    }
}

/// One element of the frame vocabulary.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PrimitiveDef {
    /// Axis-aligned rectangle.
    Rect {
        /// Left edge.
        x: f64,
        /// Top edge.
        y: f64,
        /// Width.
        width: f64,
        /// Height.
        height: f64,
        /// Paint.
        #[serde(flatten)]
        style: Style,
    },
    /// Circle.
    Circle {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Radius.
        r: f64,
        /// Paint.
        #[serde(flatten)]
        style: Style,
    },
    /// Axis-aligned ellipse.
    Ellipse {
        /// Center x.
        cx: f64,
        /// Center y.
        cy: f64,
        /// Horizontal radius.
        rx: f64,
        /// Vertical radius.
        ry: f64,
        /// Paint.
        #[serde(flatten)]
        style: Style,
    },
    /// Path restricted to `M`, `L`, `Z`.
    Path {
        /// SVG path data.
        d: String,
        /// Paint.
        #[serde(flatten)]
        style: Style,
    },
    /// Any other element type. Ignored when drawing.
    #[serde(other)]
    Unknown,
}

impl PrimitiveDef {
    /// Rectangle primitive.
    pub fn rect(x: f64, y: f64, width: f64, height: f64, style: Style) -> Self {
        Self::Rect {
            x,
            y,
            width,
            height,
            style,
        }
    }

    /// Circle primitive.
    pub fn circle(cx: f64, cy: f64, r: f64, style: Style) -> Self {
        Self::Circle { cx, cy, r, style }
    }

    /// Ellipse primitive.
    pub fn ellipse(cx: f64, cy: f64, rx: f64, ry: f64, style: Style) -> Self {
        Self::Ellipse {
            cx,
            cy,
            rx,
            ry,
            style,
        }
    }

    /// Path primitive.
    pub fn path(d: impl Into<String>, style: Style) -> Self {
        Self::Path { d: d.into(), style }
    }

    /// Element name for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Rect { .. } => "rect",
            Self::Circle { .. } => "circle",
            Self::Ellipse { .. } => "ellipse",
            Self::Path { .. } => "path",
            Self::Unknown => "unknown",
        }
    }

    /// Paint attributes, `None` for unknown elements.
    pub fn style(&self) -> Option<&Style> {
        match self {
            Self::Rect { style, .. }
            | Self::Circle { style, .. }
            | Self::Ellipse { style, .. }
            | Self::Path { style, .. } => Some(style),
            Self::Unknown => None,
        }
    }
}
