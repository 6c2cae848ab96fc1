use crate::catalog::{Template, TemplateCatalog};
use crate::model::{Layout, Slot};

/// Default gap between grid cells and around the grid, in page percent.
pub const DEFAULT_GRID_GAP: f64 = 2.0;

/// Chooses layouts for photo collections.
///
/// Pure and deterministic: the same photos and the same current layout always yield the same
/// result. The engine does not check that photo ids are unique.
#[derive(Clone, Debug)]
pub struct LayoutEngine {
    catalog: TemplateCatalog,
    gap: f64,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(TemplateCatalog::builtin())
    }
}

impl LayoutEngine {
    /// Engine over `catalog` with the default grid gap.
    pub fn new(catalog: TemplateCatalog) -> Self {
        Self {
            catalog,
            gap: DEFAULT_GRID_GAP,
        }
    }

    /// Override the procedural grid gap (percent).
    pub fn with_gap(mut self, gap: f64) -> Self {
        self.gap = if gap.is_finite() { gap.max(0.0) } else { DEFAULT_GRID_GAP };
        self
    }

    /// Template catalog in use.
    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// First layout for `photos`, or `None` when there is nothing to lay out.
    pub fn generate_layout<P: AsRef<str>>(&self, photos: &[P]) -> Option<Layout> {
        self.next_layout(photos, None)
    }

    /// Layout following `current_name` among the templates for `photos.len()`.
    ///
    /// An unknown or absent name selects the first candidate. Counts without curated templates
    /// get a procedural grid. An empty collection has no layout.
    pub fn next_layout<P: AsRef<str>>(
        &self,
        photos: &[P],
        current_name: Option<&str>,
    ) -> Option<Layout> {
        if photos.is_empty() {
            return None;
        }
        let candidates = self.catalog.candidates(photos.len());
        let current = current_name.and_then(|name| candidates.iter().position(|t| t.name == name));
        Some(self.layout_after(photos, &candidates, current))
    }

    /// Remix: cycle from `current` using its stored candidate index.
    ///
    /// The stored index is trusted only while it still points at a template of the same name;
    /// otherwise the name is resolved again. An empty collection has no layout.
    pub fn remix<P: AsRef<str>>(&self, photos: &[P], current: Option<&Layout>) -> Option<Layout> {
        if photos.is_empty() {
            return None;
        }
        let candidates = self.catalog.candidates(photos.len());
        let current = current.and_then(|layout| {
            layout
                .template_index
                .filter(|&i| candidates.get(i).is_some_and(|t| t.name == layout.name))
                .or_else(|| candidates.iter().position(|t| t.name == layout.name))
        });
        Some(self.layout_after(photos, &candidates, current))
    }

    fn layout_after<P: AsRef<str>>(
        &self,
        photos: &[P],
        candidates: &[&Template],
        current: Option<usize>,
    ) -> Layout {
        if candidates.is_empty() {
            tracing::debug!(count = photos.len(), "no curated template, using grid");
            return self.dynamic_grid(photos);
        }
        let index = current.map_or(0, |i| (i + 1) % candidates.len());
        let template = candidates[index];
        tracing::debug!(count = photos.len(), layout = %template.name, index, "selected template");
        layout_from_template(template, index, photos)
    }

    /// Procedural grid with one slot per photo.
    ///
    /// `cols = ceil(sqrt(n))`, `rows = ceil(n / cols)`, with 4 as 2x2 and 5 as 3x2. An incomplete
    /// last row is centered horizontally.
    pub fn dynamic_grid<P: AsRef<str>>(&self, photos: &[P]) -> Layout {
        let n = photos.len();
        let (cols, rows) = grid_shape(n);
        let gap = self.gap;
        let total = 100.0 - gap * 2.0;
        let cell_w = (total - gap * (cols as f64 - 1.0)) / cols as f64;
        let cell_h = (total - gap * (rows as f64 - 1.0)) / rows as f64;

        let in_last_row = match n % cols {
            0 => cols,
            r => r,
        };
        let last_row_offset = if in_last_row < cols {
            (cols - in_last_row) as f64 * (cell_w + gap) / 2.0
        } else {
            0.0
        };

        let slots = photos
            .iter()
            .enumerate()
            .map(|(i, photo)| {
                let col = i % cols;
                let row = i / cols;
                let x_offset = if row == rows - 1 { last_row_offset } else { 0.0 };
                Slot::new(
                    gap + col as f64 * (cell_w + gap) + x_offset,
                    gap + row as f64 * (cell_h + gap),
                    cell_w,
                    cell_h,
                )
                .with_photo(photo.as_ref())
            })
            .collect();

        Layout {
            name: format!("dynamic-{n}"),
            template_index: None,
            slots,
        }
    }
}

fn grid_shape(n: usize) -> (usize, usize) {
    let (cols, mut rows) = match n {
        4 => (2, 2),
        5 => (3, 2),
        _ => {
            let cols = ((n as f64).sqrt().ceil() as usize).max(1);
            (cols, n.div_ceil(cols).max(1))
        }
    };
    if cols * rows < n {
        rows += 1;
    }
    (cols, rows)
}

fn layout_from_template<P: AsRef<str>>(template: &Template, index: usize, photos: &[P]) -> Layout {
    let slots = photos
        .iter()
        .enumerate()
        .map(|(i, photo)| {
            let s = template.slots[i % template.slots.len()];
            Slot::new(s.x, s.y, s.w, s.h).with_photo(photo.as_ref())
        })
        .collect();
    Layout {
        name: template.name.clone(),
        template_index: Some(index),
        slots,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/engine.rs"]
mod tests;
