//! Serializable book model: photos, pages with their slot layouts, the cover, and the project
//! document that bundles them.
//!
//! All JSON uses `camelCase` keys so project files written by the browser editor load unchanged.

/// Cover model.
pub mod cover;
/// Pages, slots and text elements.
pub mod page;
/// Photo references.
pub mod photo;
/// Project document.
pub mod project;

pub use cover::{Cover, CoverLayout};
pub use page::{CustomPlacement, FrameShape, HAlign, Layout, Page, Slot, TextAlign, TextElement};
pub use photo::Photo;
pub use project::Project;
