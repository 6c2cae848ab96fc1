//! Folio is a photo-book layout and print-rendering engine.
//!
//! A book is a [`Project`]: ordered pages whose slots hold photos, a cover spread and the asset
//! references they use. The pipeline is:
//!
//! - Pick or remix a [`Layout`] for a page's photos with [`LayoutEngine`]
//! - Fetch every image once into [`PreparedImages`] through a [`SourceLoader`]
//! - Compile a page into a plan and draw it as an interactive preview ([`render::dom`]), a print
//!   PDF ([`render_to_pdf`], [`export_book`]) or a PNG proof ([`render_png`])
//!
//! Problems inside a page never abort a render. They are collected in a [`RenderReport`].
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod foundation;

/// Image fetching, probing and decoding.
pub mod assets;
/// Templates, backgrounds, frames and text styles addressed by id.
pub mod catalog;
/// Page and cover composition into renderer-neutral plans.
pub mod compile;
/// Undoable editing commands over a project.
pub mod editor;
/// Layout selection and bounds fitting.
pub mod layout;
/// Serializable book model.
pub mod model;
/// Vector frame primitives.
pub mod overlay;
/// Print sizes, bleed, margins and resolution checks.
pub mod print;
/// Preview, PDF and raster backends.
pub mod render;
/// Render diagnostics.
pub mod report;

pub use crate::foundation::core::{Affine, Color, Edges, Line, Point, Rect, Size, Vec2};
pub use crate::foundation::error::{FolioError, FolioResult};

pub use crate::assets::{PreparedImages, SourceLoader};
pub use crate::catalog::{AssetCatalog, TemplateCatalog};
pub use crate::editor::{Change, EditorState};
pub use crate::layout::{Fit, LayoutEngine, fit};
pub use crate::model::{Cover, Layout, Page, Photo, Project, Slot};
pub use crate::print::{PageMedia, PrintSize};
pub use crate::render::RenderOptions;
pub use crate::render::dom::{DomNode, Selection};
pub use crate::render::pdf::{PdfDocument, export_book, render_cover_to_pdf, render_to_pdf};
pub use crate::render::raster::render_png;
pub use crate::report::{Diagnostic, DiagnosticKind, RenderReport};
