//! Layout selection and print-safe image placement.
//!
//! [`LayoutEngine`] assigns an ordered photo collection to slots, either from a curated template
//! or from a procedural grid. [`fit`] places one image inside one slot; every backend calls it so
//! preview and export agree on photo geometry.

/// Template selection and procedural grids.
pub mod engine;
/// Bounds fitting of one image into one slot.
pub mod fit;

pub use engine::LayoutEngine;
pub use fit::{Fit, FitOptions, PageGeometry, SkipReason, fit};
