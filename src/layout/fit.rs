use crate::foundation::core::{Edges, Point, Rect, Size};
use crate::foundation::math::{is_positive_finite, rect_within, EPS};
use crate::model::{HAlign, Slot};

/// Relative tolerance before a custom size is considered off-ratio.
pub const CUSTOM_RATIO_TOLERANCE: f64 = 0.01;

/// Page box and its print margins, in page units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageGeometry {
    /// Page size.
    pub size: Size,
    /// Print-safe margins.
    pub margins: Edges,
}

impl PageGeometry {
    /// Geometry with explicit margins.
    pub fn new(size: Size, margins: Edges) -> Self {
        Self { size, margins }
    }

    /// Full page rectangle at the origin.
    pub fn page_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.size)
    }

    /// Printable area: the page shrunk by the margins.
    pub fn hard_bounds(&self) -> Rect {
        self.margins.shrink(self.page_rect())
    }

    /// Absolute rectangle of a percentage box.
    pub fn percent_rect(&self, x: f64, y: f64, width: f64, height: f64) -> Rect {
        let w = self.size.width / 100.0;
        let h = self.size.height / 100.0;
        Rect::new(x * w, y * h, (x + width) * w, (y + height) * h)
    }

    /// Absolute rectangle of a slot.
    pub fn slot_rect(&self, slot: &Slot) -> Rect {
        self.percent_rect(slot.x, slot.y, slot.width, slot.height)
    }
}

/// Manual overrides in absolute page units. Non-positive sizes are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CustomRect {
    /// Left edge.
    pub x: Option<f64>,
    /// Top edge.
    pub y: Option<f64>,
    /// Width.
    pub width: Option<f64>,
    /// Height.
    pub height: Option<f64>,
}

/// Placement options for [`fit`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FitOptions {
    /// Horizontal alignment inside the slot. Vertical placement is always centered.
    pub alignment: HAlign,
    /// Manual overrides.
    pub custom: CustomRect,
}

impl FitOptions {
    /// Options for `slot`, converting its percentage overrides into page units.
    pub fn for_slot(slot: &Slot, page: &PageGeometry) -> Self {
        let (pw, ph) = (page.size.width / 100.0, page.size.height / 100.0);
        let custom = slot.custom.map_or_else(CustomRect::default, |c| CustomRect {
            x: c.x.map(|v| v * pw),
            y: c.y.map(|v| v * ph),
            width: c.width.map(|v| v * pw),
            height: c.height.map(|v| v * ph),
        });
        Self {
            alignment: slot.alignment,
            custom,
        }
    }
}

/// Why a slot produced no placement.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The image aspect ratio is zero, negative or not finite.
    #[error("invalid image aspect ratio")]
    InvalidAspectRatio,
    /// The slot does not overlap the printable area.
    #[error("slot lies outside the printable area")]
    EmptySlot,
    /// The computed placement would cross the printable area.
    #[error("placement exceeds the printable area")]
    OutOfBounds,
}

/// Result of [`fit`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Fit {
    /// Image rectangle in page units, inside the hard bounds.
    Placed(Rect),
    /// Nothing may be painted for this slot.
    Skip(SkipReason),
}

impl Fit {
    /// Placed rectangle, if any.
    pub fn rect(&self) -> Option<Rect> {
        match self {
            Self::Placed(r) => Some(*r),
            Self::Skip(_) => None,
        }
    }
}

/// Place an image of aspect ratio `aspect` (width / height) inside `slot`.
///
/// The slot is first clipped to the printable area. Without a custom size the image is
/// letterboxed inside the clipped slot, never cropped. A `Placed` result always lies inside the
/// hard bounds and has a positive size.
pub fn fit(slot: Rect, aspect: f64, page: &PageGeometry, opts: &FitOptions) -> Fit {
    if !is_positive_finite(aspect) {
        return Fit::Skip(SkipReason::InvalidAspectRatio);
    }
    let hard = page.hard_bounds();
    let bounds = slot.abs().intersect(hard);
    if !(is_positive_finite(bounds.width()) && is_positive_finite(bounds.height()))
        || bounds.width() <= EPS
        || bounds.height() <= EPS
    {
        return Fit::Skip(SkipReason::EmptySlot);
    }

    let (w, h) = fitted_size(bounds, aspect, &opts.custom);

    let x = match opts.custom.x.filter(|v| v.is_finite()) {
        Some(cx) => cx.min(hard.x1 - w).max(hard.x0),
        None => match opts.alignment {
            HAlign::Left => bounds.x0,
            HAlign::Center => bounds.x0 + (bounds.width() - w) / 2.0,
            HAlign::Right => bounds.x1 - w,
        },
    };
    let y = match opts.custom.y.filter(|v| v.is_finite()) {
        Some(cy) => cy.min(hard.y1 - h).max(hard.y0),
        None => bounds.y0 + (bounds.height() - h) / 2.0,
    };

    let placed = Rect::from_origin_size((x, y), (w, h));
    if !(is_positive_finite(w) && is_positive_finite(h)) || !rect_within(placed, hard, EPS) {
        return Fit::Skip(SkipReason::OutOfBounds);
    }
    Fit::Placed(placed)
}

fn contain(bounds: Rect, aspect: f64) -> (f64, f64) {
    let (bw, bh) = (bounds.width(), bounds.height());
    if bw / aspect <= bh {
        (bw, bw / aspect)
    } else {
        (bh * aspect, bh)
    }
}

fn fitted_size(bounds: Rect, aspect: f64, custom: &CustomRect) -> (f64, f64) {
    let (bw, bh) = (bounds.width(), bounds.height());
    let cw = custom.width.filter(|v| is_positive_finite(*v)).map(|v| v.min(bw));
    let ch = custom.height.filter(|v| is_positive_finite(*v)).map(|v| v.min(bh));

    match (cw, ch) {
        (Some(w), Some(h)) => {
            if ((w / h) - aspect).abs() / aspect <= CUSTOM_RATIO_TOLERANCE {
                return (w, h);
            }
            let from_width = (w, w / aspect);
            let from_height = (h * aspect, h);
            if from_width.1 <= bh + EPS {
                from_width
            } else if from_height.0 <= bw + EPS {
                from_height
            } else {
                contain(bounds, aspect)
            }
        }
        (Some(w), None) if w / aspect <= bh + EPS => (w, w / aspect),
        (None, Some(h)) if h * aspect <= bw + EPS => (h * aspect, h),
        _ => contain(bounds, aspect),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
