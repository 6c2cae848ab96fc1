use crate::foundation::core::Edges;

/// Base margin on every side (1/2").
pub const BASE_MARGIN_PT: f64 = 36.0;
/// Extra margin on the spine side (1/4").
pub const BINDING_MARGIN_PT: f64 = 18.0;
/// Extra bottom margin reserved for folios.
pub const FOOTER_EXTRA_PT: f64 = 20.0;

/// Which side of a spread a page sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageSide {
    /// Verso; spine on the right.
    Left,
    /// Recto; spine on the left.
    Right,
}

impl PageSide {
    /// Side of a 1-based page number: odd pages are right-hand pages.
    pub fn for_page_number(number: usize) -> Self {
        if number % 2 == 1 { Self::Right } else { Self::Left }
    }
}

/// Print margins for a page, with the binding allowance on the spine side.
pub fn binding_margins(side: PageSide) -> Edges {
    let inner = BASE_MARGIN_PT + BINDING_MARGIN_PT;
    let (left, right) = match side {
        PageSide::Right => (inner, BASE_MARGIN_PT),
        PageSide::Left => (BASE_MARGIN_PT, inner),
    };
    Edges {
        top: BASE_MARGIN_PT,
        right,
        bottom: BASE_MARGIN_PT + FOOTER_EXTRA_PT,
        left,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/print/margins.rs"]
mod tests;
