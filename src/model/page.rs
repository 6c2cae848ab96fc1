use crate::foundation::error::{FolioError, FolioResult};

/// Horizontal placement of a letterboxed image inside its slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HAlign {
    /// Flush with the slot's left edge.
    Left,
    /// Centered (default).
    #[default]
    Center,
    /// Flush with the slot's right edge.
    Right,
}

/// Outline shape handed to image-frame generators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameShape {
    /// Rectangle following the slot edges.
    #[default]
    Rect,
    /// Circle inscribed in the slot.
    Circle,
    /// Ellipse touching all four slot edges.
    Oval,
}

/// Per-slot placement overrides, in percent of the page box.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CustomPlacement {
    /// Left edge of the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Top edge of the image.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Image width.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Image height.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
}

impl CustomPlacement {
    /// True when no override is set.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.width.is_none() && self.height.is_none()
    }
}

/// Percentage-coordinate region of a page destined to hold one photo.
///
/// `x + width <= 100` and `y + height <= 100` are expected but not enforced here; the fitter
/// clamps anything that pokes outside the printable area.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    /// Photo shown in this slot.
    #[serde(default)]
    pub photo_id: Option<String>,
    /// Left edge, percent of page width.
    pub x: f64,
    /// Top edge, percent of page height.
    pub y: f64,
    /// Width, percent of page width.
    pub width: f64,
    /// Height, percent of page height.
    pub height: f64,
    /// Clockwise rotation in degrees around the slot center.
    #[serde(default)]
    pub rotation: f64,
    /// Image frame overriding the page default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_id: Option<String>,
    /// Frame color overriding the page default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frame_color: Option<String>,
    /// Frame shape overriding the page default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shape: Option<FrameShape>,
    /// Horizontal alignment of the fitted image.
    #[serde(default)]
    pub alignment: HAlign,
    /// Manual position/size overrides.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomPlacement>,
}

impl Slot {
    /// Slot at the given percentage rectangle with no photo.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
            ..Self::default()
        }
    }

    /// Copy of this slot holding `photo_id`.
    pub fn with_photo(mut self, photo_id: impl Into<String>) -> Self {
        self.photo_id = Some(photo_id.into());
        self
    }
}

/// Named, ordered slot list produced by the layout engine.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    /// Template name, or `dynamic-N` for generated grids.
    pub name: String,
    /// Position of the template among the candidates for this photo count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template_index: Option<usize>,
    /// One slot per photo, in photo order.
    pub slots: Vec<Slot>,
}

impl Layout {
    /// Reject structurally corrupt layouts.
    ///
    /// Out-of-range percentages are tolerated (they are clamped while fitting); non-finite or
    /// negative extents are not.
    pub fn validate(&self) -> FolioResult<()> {
        if self.name.trim().is_empty() {
            return Err(FolioError::layout("layout name must be non-empty"));
        }
        for (i, s) in self.slots.iter().enumerate() {
            let finite = [s.x, s.y, s.width, s.height, s.rotation]
                .iter()
                .all(|v| v.is_finite());
            if !finite {
                return Err(FolioError::layout(format!(
                    "layout '{}' slot {i} has non-finite geometry",
                    self.name
                )));
            }
            if s.width < 0.0 || s.height < 0.0 {
                return Err(FolioError::layout(format!(
                    "layout '{}' slot {i} has negative size",
                    self.name
                )));
            }
        }
        Ok(())
    }
}

/// Text alignment inside a text element's box.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextAlign {
    /// Left aligned (default).
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right aligned.
    Right,
}

/// Free-floating text positioned in page percentages.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextElement {
    /// Stable identifier.
    pub id: String,
    /// Text to draw. Newlines start new lines.
    #[serde(default)]
    pub content: String,
    /// Left edge, percent of page width.
    pub x: f64,
    /// Top edge, percent of page height.
    pub y: f64,
    /// Maximum box width, percent of page width (defaults to 50).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Font size in CSS pixels.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_size: Option<f64>,
    /// Text color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Font family name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
    /// Clockwise rotation in degrees.
    #[serde(default)]
    pub rotation: f64,
    /// Text style catalog entry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style_id: Option<String>,
    /// Alignment inside the box.
    #[serde(default, alias = "textAlign", skip_serializing_if = "Option::is_none")]
    pub align: Option<TextAlign>,
}

/// One logical page of the book.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    /// Stable identifier.
    pub id: String,
    /// Background texture id or hex color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    /// Page-level decorative frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_frame_id: Option<String>,
    /// Color override for the page frame.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_frame_color: Option<String>,
    /// Default image frame for every slot.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_frame_id: Option<String>,
    /// Default image frame color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_frame_color: Option<String>,
    /// Default image frame shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_shape: Option<FrameShape>,
    /// Text elements in paint order.
    #[serde(default)]
    pub elements: Vec<TextElement>,
    /// Layout derived from `photos`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    /// Photo ids placed on this page, in slot order.
    #[serde(default)]
    pub photos: Vec<String>,
}

impl Page {
    /// Empty page.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Slots of the current layout, empty when there is none.
    pub fn slots(&self) -> &[Slot] {
        self.layout.as_ref().map_or(&[], |l| l.slots.as_slice())
    }

    /// Index of the slot showing `photo_id`.
    pub fn slot_index_of(&self, photo_id: &str) -> Option<usize> {
        self.slots()
            .iter()
            .position(|s| s.photo_id.as_deref() == Some(photo_id))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/page.rs"]
mod tests;
