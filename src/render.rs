//! Page renderers.
//!
//! Every backend draws a [`crate::compile::PagePlan`]; none of them fits photos or interprets
//! frame primitives on its own.
//!
//! - [`dom`] builds the interactive preview as a [`dom::DomNode`] tree.
//! - [`pdf`] writes print-ready PDF pages.
//! - [`raster`] rasterizes a plan to PNG for proofs.

/// Interactive preview tree.
pub mod dom;
/// Print PDF writer.
pub mod pdf;
/// PNG proofs.
pub mod raster;

use std::path::Path;
use std::time::Duration;

use anyhow::Context;

use crate::assets::fetch::{DEFAULT_FETCH_TIMEOUT, SourceLoader};
use crate::compile::DEFAULT_SPINE_WIDTH;
use crate::foundation::core::{Edges, Size};
use crate::foundation::error::{FolioError, FolioResult};
use crate::foundation::math::is_positive_finite;
use crate::layout::fit::PageGeometry;
use crate::print::margins::{PageSide, binding_margins};
use crate::print::sizes::{BLEED_PT, EDITOR_PAGE_PT, PageMedia, PrintSize};

/// Render configuration shared by all backends.
///
/// Loadable from JSON so the CLI can take it next to a project file. Page geometry is in PDF
/// points; the DOM preview scales it to CSS pixels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RenderOptions {
    /// Trim size used when `print_size` is unset.
    pub page_size: Size,
    /// Named print size; overrides `page_size`.
    pub print_size: Option<String>,
    /// Print-safe margins, used unless `binding_margins` is set.
    pub margins: Edges,
    /// Derive margins from the page side and the spine position.
    pub binding_margins: bool,
    /// Add a 1/8" bleed around every PDF page.
    pub bleed: bool,
    /// Timeout of one remote fetch, in seconds.
    pub fetch_timeout_secs: u64,
    /// Forces the color of every page frame.
    pub page_frame_color_override: Option<String>,
    /// Worker threads for image fetching (`None` uses rayon's default).
    pub threads: Option<usize>,
    /// Spine width of the cover spread, in points.
    pub spine_width: f64,
    /// Width of the preview container in CSS pixels (`None` renders at 96 dpi).
    pub preview_width_px: Option<f64>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            page_size: Size::new(EDITOR_PAGE_PT, EDITOR_PAGE_PT),
            print_size: None,
            margins: Edges::default(),
            binding_margins: false,
            bleed: false,
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT.as_secs(),
            page_frame_color_override: None,
            threads: None,
            spine_width: DEFAULT_SPINE_WIDTH,
            preview_width_px: None,
        }
    }
}

impl RenderOptions {
    /// Parse options from JSON; absent fields take their defaults.
    pub fn from_json(s: &str) -> FolioResult<Self> {
        let opts: Self = serde_json::from_str(s)?;
        opts.validate()?;
        Ok(opts)
    }

    /// Read options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read render options '{}'", path.display()))?;
        Self::from_json(&s)
    }

    /// Reject unusable sizes, margins and thread counts.
    pub fn validate(&self) -> FolioResult<()> {
        if self.print_size.is_none()
            && !(is_positive_finite(self.page_size.width) && is_positive_finite(self.page_size.height))
        {
            return Err(FolioError::validation(format!(
                "page size must be positive, got {}x{}",
                self.page_size.width, self.page_size.height
            )));
        }
        let m = self.margins;
        if ![m.top, m.right, m.bottom, m.left]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
        {
            return Err(FolioError::validation("margins must be finite and >= 0"));
        }
        if !(self.spine_width.is_finite() && self.spine_width >= 0.0) {
            return Err(FolioError::validation("spine width must be finite and >= 0"));
        }
        if self.threads == Some(0) {
            return Err(FolioError::validation("threads must be >= 1"));
        }
        if self.fetch_timeout_secs == 0 {
            return Err(FolioError::validation("fetch timeout must be >= 1 second"));
        }
        if let Some(w) = self.preview_width_px
            && !is_positive_finite(w)
        {
            return Err(FolioError::validation("preview width must be positive"));
        }
        Ok(())
    }

    /// Timeout of one remote fetch.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_secs)
    }

    /// Trim size of a page.
    pub fn trim_size(&self) -> Size {
        match self.print_size.as_deref() {
            Some(name) => PrintSize::resolve(name).size_pt(),
            None => self.page_size,
        }
    }

    /// PDF media of a page of `trim` size.
    pub fn media_for(&self, trim: Size) -> PageMedia {
        PageMedia {
            trim,
            bleed: if self.bleed { BLEED_PT } else { 0.0 },
        }
    }

    /// Trim size and margins of the page at `page_index`.
    pub fn geometry_for_page(&self, page_index: usize) -> PageGeometry {
        let margins = if self.binding_margins {
            binding_margins(PageSide::for_page_number(page_index + 1))
        } else {
            self.margins
        };
        PageGeometry::new(self.trim_size(), margins)
    }

    /// Geometry of one cover panel.
    pub fn cover_panel_geometry(&self) -> PageGeometry {
        PageGeometry::new(self.trim_size(), self.margins)
    }

    /// Loader fetching remote sources with this timeout.
    pub fn loader(&self) -> FolioResult<SourceLoader> {
        SourceLoader::http(self.fetch_timeout())
    }
}

#[cfg(test)]
#[path = "../tests/unit/render/options.rs"]
mod tests;
