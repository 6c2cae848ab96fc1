//! Id-addressed catalogs consumed by the engine: layout templates, background textures, frames and
//! text styles.
//!
//! Nothing here is global. Callers build an [`AssetCatalog`] (usually from
//! [`AssetCatalog::builtin`] plus project extras) and pass it to every render call.

/// Background texture catalog.
pub mod backgrounds;
/// Decorative frame definitions.
pub mod frames;
/// Curated layout templates.
pub mod templates;
/// Named text styles.
pub mod text_styles;

use std::collections::HashMap;
use std::sync::Arc;

pub use backgrounds::BackgroundDef;
pub use frames::{FrameDef, FrameGenerator, FrameKind, FrameSource, StaticFrameDef};
pub use templates::{Template, TemplateCatalog, TemplateSlot};
pub use text_styles::TextStyle;

use crate::model::{Photo, Project};

/// Everything a renderer looks up by id.
#[derive(Clone, Debug, Default)]
pub struct AssetCatalog {
    photos: HashMap<String, Photo>,
    backgrounds: HashMap<String, BackgroundDef>,
    frames: HashMap<String, Arc<FrameDef>>,
    text_styles: HashMap<String, TextStyle>,
}

impl AssetCatalog {
    /// Empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in backgrounds, frames and text styles; no photos.
    pub fn builtin() -> Self {
        let mut out = Self::new();
        for b in backgrounds::builtin() {
            out.insert_background(b);
        }
        for f in frames::builtin() {
            out.insert_frame(f);
        }
        for s in text_styles::builtin() {
            out.insert_text_style(s);
        }
        out
    }

    /// Built-ins extended by a project's own assets.
    pub fn for_project(project: &Project) -> Self {
        let mut out = Self::builtin();
        for p in &project.assets.photos {
            out.insert_photo(p.clone());
        }
        for b in &project.assets.backgrounds {
            out.insert_background(b.clone());
        }
        for f in &project.assets.frames {
            out.insert_frame(f.clone().into_frame());
        }
        for s in &project.assets.text_styles {
            out.insert_text_style(s.clone());
        }
        out
    }

    /// Register or replace a photo.
    pub fn insert_photo(&mut self, photo: Photo) {
        self.photos.insert(photo.id.clone(), photo);
    }

    /// Register or replace a background.
    pub fn insert_background(&mut self, bg: BackgroundDef) {
        self.backgrounds.insert(bg.id.clone(), bg);
    }

    /// Register or replace a frame.
    pub fn insert_frame(&mut self, frame: FrameDef) {
        self.frames.insert(frame.id.clone(), Arc::new(frame));
    }

    /// Register or replace a text style.
    pub fn insert_text_style(&mut self, style: TextStyle) {
        self.text_styles.insert(style.id.clone(), style);
    }

    /// Photo by id.
    pub fn photo(&self, id: &str) -> Option<&Photo> {
        self.photos.get(id)
    }

    /// Background by id.
    pub fn background(&self, id: &str) -> Option<&BackgroundDef> {
        self.backgrounds.get(id)
    }

    /// Frame by id.
    pub fn frame(&self, id: &str) -> Option<&FrameDef> {
        self.frames.get(id).map(Arc::as_ref)
    }

    /// Text style by id.
    pub fn text_style(&self, id: &str) -> Option<&TextStyle> {
        self.text_styles.get(id)
    }

    /// Iterate photos (unordered).
    pub fn photos(&self) -> impl Iterator<Item = &Photo> {
        self.photos.values()
    }
}

#[cfg(test)]
#[path = "../tests/unit/catalog/asset_catalog.rs"]
mod tests;
