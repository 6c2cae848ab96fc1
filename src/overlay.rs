//! Vector overlay translator: decorative frames authored as a closed set of primitives.
//!
//! Primitives are authored in a local coordinate space (`0..W`, `0..H`) and mapped into a target
//! rectangle by [`translate::map_to_target`]. Both render backends consume the resulting
//! [`DrawCmd`] list, so frame geometry is computed exactly once per page.

/// SVG path data parsing.
pub mod path;
/// Frame primitives.
pub mod primitive;
/// Mapping primitives into a target rectangle.
pub mod translate;

pub use path::{PathData, PathError, PathOp};
pub use primitive::{PrimitiveDef, Style};
pub use translate::{DrawCmd, Geom, Paint, Translation, map_to_target};
