use std::path::Path;

use anyhow::Context;

use crate::catalog::{BackgroundDef, StaticFrameDef, TextStyle};
use crate::foundation::error::{FolioError, FolioResult};
use crate::model::{Cover, Page, Photo};

/// Assets referenced by a project.
///
/// Backgrounds, frames and text styles listed here extend the built-in catalogs; an entry whose
/// id matches a built-in replaces it.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssets {
    /// Photo catalog.
    #[serde(default)]
    pub photos: Vec<Photo>,
    /// Extra background textures.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub backgrounds: Vec<BackgroundDef>,
    /// Extra static frames.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub frames: Vec<StaticFrameDef>,
    /// Extra text styles.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub text_styles: Vec<TextStyle>,
}

/// Project document: everything needed to render a book.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    /// Pages in book order.
    #[serde(default)]
    pub pages: Vec<Page>,
    /// Cover.
    #[serde(default)]
    pub cover: Cover,
    /// Referenced assets.
    #[serde(default)]
    pub assets: ProjectAssets,
    /// Theme (background texture id) applied book-wide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    /// Named print size, see [`crate::PrintSize::lookup`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_size: Option<String>,
}

impl Project {
    /// Parse and validate a project document.
    pub fn from_json(s: &str) -> FolioResult<Self> {
        let project: Project = serde_json::from_str(s)?;
        project.validate()?;
        Ok(project)
    }

    /// Read a project document from disk.
    #[tracing::instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read project file '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> FolioResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Look up a photo by id.
    pub fn photo(&self, id: &str) -> Option<&Photo> {
        self.assets.photos.iter().find(|p| p.id == id)
    }

    /// Structural checks: unique page ids and well-formed layouts.
    pub fn validate(&self) -> FolioResult<()> {
        let mut seen = std::collections::HashSet::new();
        for page in &self.pages {
            if page.id.is_empty() {
                return Err(FolioError::validation("page id must be non-empty"));
            }
            if !seen.insert(page.id.as_str()) {
                return Err(FolioError::validation(format!(
                    "duplicate page id '{}'",
                    page.id
                )));
            }
            if let Some(layout) = &page.layout {
                layout.validate()?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/project.rs"]
mod tests;
