//! Print-production geometry: named trim sizes, bleed, binding-aware margins and effective DPI.

/// Effective print resolution.
pub mod dpi;
/// Binding-aware safe margins.
pub mod margins;
/// Named print sizes and bleed.
pub mod sizes;

pub use dpi::{Resolution, classify_dpi, effective_dpi, required_pixels};
pub use margins::{PageSide, binding_margins};
pub use sizes::{PageMedia, PrintSize};
