use super::sizes::POINTS_PER_INCH;

/// Target print resolution.
pub const PRINT_DPI: f64 = 300.0;
/// Below this an image may look soft.
pub const MIN_DPI_WARNING: f64 = 200.0;
/// Below this an image will look pixelated.
pub const MIN_DPI_REJECT: f64 = 150.0;

/// Print-quality verdict for one placed image.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Resolution {
    /// At or above the warning threshold.
    Good,
    /// Below [`MIN_DPI_WARNING`].
    Low,
    /// Below [`MIN_DPI_REJECT`].
    VeryLow,
}

/// Effective DPI of a `px_w` x `px_h` image printed at `w_pt` x `h_pt`: the lower of the two axes.
pub fn effective_dpi(px_w: u32, px_h: u32, w_pt: f64, h_pt: f64) -> f64 {
    if w_pt <= 0.0 || h_pt <= 0.0 {
        return 0.0;
    }
    let dpi_w = f64::from(px_w) / (w_pt / POINTS_PER_INCH);
    let dpi_h = f64::from(px_h) / (h_pt / POINTS_PER_INCH);
    dpi_w.min(dpi_h)
}

/// Classify an effective DPI value.
pub fn classify_dpi(dpi: f64) -> Resolution {
    if dpi < MIN_DPI_REJECT {
        Resolution::VeryLow
    } else if dpi < MIN_DPI_WARNING {
        Resolution::Low
    } else {
        Resolution::Good
    }
}

/// Pixels needed to print `w_pt` x `h_pt` at `dpi`.
pub fn required_pixels(w_pt: f64, h_pt: f64, dpi: f64) -> (u32, u32) {
    let px = |pt: f64| ((pt / POINTS_PER_INCH) * dpi).ceil().max(0.0) as u32;
    (px(w_pt), px(h_pt))
}

#[cfg(test)]
#[path = "../../tests/unit/print/dpi.rs"]
mod tests;
