use crate::foundation::core::{Rect, Size};

/// PostScript points per inch.
pub const POINTS_PER_INCH: f64 = 72.0;
/// Standard 1/8" bleed.
pub const BLEED_PT: f64 = 0.125 * POINTS_PER_INCH;
/// Side of the square page used by the browser editor.
pub const EDITOR_PAGE_PT: f64 = 567.0;
/// Size used when a requested name is unknown.
pub const FALLBACK_SIZE: &str = "square-10x10";

/// Named trim size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrintSize {
    /// Catalog name.
    pub name: &'static str,
    /// Trim width in inches.
    pub width_in: f64,
    /// Trim height in inches.
    pub height_in: f64,
}

const SIZES: &[PrintSize] = &[
    PrintSize::new("square-8x8", 8.0, 8.0),
    PrintSize::new("square-10x10", 10.0, 10.0),
    PrintSize::new("square-12x12", 12.0, 12.0),
    PrintSize::new("landscape-11x8.5", 11.0, 8.5),
    PrintSize::new("landscape-13x10", 13.0, 10.0),
    PrintSize::new("portrait-8.5x11", 8.5, 11.0),
    PrintSize::new("portrait-10x13", 10.0, 13.0),
];

impl PrintSize {
    const fn new(name: &'static str, width_in: f64, height_in: f64) -> Self {
        Self {
            name,
            width_in,
            height_in,
        }
    }

    /// Every named size.
    pub fn all() -> &'static [PrintSize] {
        SIZES
    }

    /// Size by name.
    pub fn lookup(name: &str) -> Option<PrintSize> {
        SIZES.iter().copied().find(|s| s.name == name)
    }

    /// Size by name, falling back to `square-10x10` for unknown names.
    pub fn resolve(name: &str) -> PrintSize {
        Self::lookup(name).unwrap_or_else(|| {
            tracing::warn!(requested = name, fallback = FALLBACK_SIZE, "unknown print size");
            Self::new(FALLBACK_SIZE, 10.0, 10.0)
        })
    }

    /// Trim size in points.
    pub fn size_pt(&self) -> Size {
        Size::new(self.width_in * POINTS_PER_INCH, self.height_in * POINTS_PER_INCH)
    }

    /// Media for this size, with or without bleed.
    pub fn media(&self, bleed: bool) -> PageMedia {
        PageMedia {
            trim: self.size_pt(),
            bleed: if bleed { BLEED_PT } else { 0.0 },
        }
    }
}

/// Physical sheet: trim size plus bleed on every side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageMedia {
    /// Finished page size.
    pub trim: Size,
    /// Bleed added on each side.
    pub bleed: f64,
}

impl PageMedia {
    /// Media without bleed.
    pub fn trim_only(trim: Size) -> Self {
        Self { trim, bleed: 0.0 }
    }

    /// Full sheet size including bleed.
    pub fn media_size(&self) -> Size {
        Size::new(
            self.trim.width + self.bleed * 2.0,
            self.trim.height + self.bleed * 2.0,
        )
    }

    /// Trim box inside the media box.
    pub fn trim_rect(&self) -> Rect {
        Rect::new(
            self.bleed,
            self.bleed,
            self.bleed + self.trim.width,
            self.bleed + self.trim.height,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/print/sizes.rs"]
mod tests;
