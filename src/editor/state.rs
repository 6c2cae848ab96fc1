use crate::editor::history::{History, Snapshot};
use crate::foundation::error::{FolioError, FolioResult};
use crate::layout::engine::LayoutEngine;
use crate::model::{Cover, FrameShape, Page, Project, TextAlign, TextElement};
use crate::render::dom::Selection;

/// What a command changed. Observers get one value per notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Change {
    /// Pages were added, removed or reordered.
    Pages,
    /// One page changed.
    Page(String),
    /// The cover changed.
    Cover,
    /// The book theme changed (pages and cover were updated with it).
    Theme,
    /// The active page changed.
    ActivePage,
    /// The selection changed.
    Selection,
    /// Undo or redo replaced the whole document.
    Restored,
}

/// Handle returned by [`EditorState::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&Change) + Send>;

/// Partial update of a text element; `None` fields are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextUpdate {
    /// New content.
    pub content: Option<String>,
    /// New box width in percent.
    pub width: Option<f64>,
    /// New font size in CSS pixels.
    pub font_size: Option<f64>,
    /// New color.
    pub color: Option<String>,
    /// New family.
    pub font_family: Option<String>,
    /// New rotation in degrees.
    pub rotation: Option<f64>,
    /// New style id (`Some(None)` clears it).
    pub style_id: Option<Option<String>>,
    /// New alignment.
    pub align: Option<TextAlign>,
}

/// Editable book with undo/redo.
///
/// Every mutating command snapshots the document first, then mutates it, then notifies
/// observers. A command that fails leaves the document untouched and records nothing. Layouts
/// are regenerated whenever a page's photo set changes.
pub struct EditorState {
    project: Project,
    engine: LayoutEngine,
    history: History,
    active_page: Option<String>,
    selection: Selection,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
}

impl std::fmt::Debug for EditorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EditorState")
            .field("pages", &self.project.pages.len())
            .field("active_page", &self.active_page)
            .field("selection", &self.selection)
            .field("history", &self.history.len())
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new(Project::default(), LayoutEngine::default())
    }
}

impl EditorState {
    /// Editor over `project`; the first page (if any) becomes active.
    pub fn new(project: Project, engine: LayoutEngine) -> Self {
        let active_page = project.pages.first().map(|p| p.id.clone());
        Self {
            project,
            engine,
            history: History::default(),
            active_page,
            selection: Selection::None,
            observers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replace the history (for a different capacity).
    pub fn with_history(mut self, history: History) -> Self {
        self.history = history;
        self
    }

    /// Current document.
    pub fn project(&self) -> &Project {
        &self.project
    }

    /// Consume the editor and return the document.
    pub fn into_project(self) -> Project {
        self.project
    }

    /// Page by id.
    pub fn page(&self, page_id: &str) -> Option<&Page> {
        self.project.pages.iter().find(|p| p.id == page_id)
    }

    /// Id of the active page.
    pub fn active_page_id(&self) -> Option<&str> {
        self.active_page.as_deref()
    }

    /// Current selection.
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Undo history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Register an observer called after every change.
    pub fn subscribe(&mut self, observer: impl FnMut(&Change) + Send + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    /// Remove an observer; returns false when it was not registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(i, _)| *i != id);
        self.observers.len() != before
    }

    fn notify(&mut self, change: &Change) {
        for (_, observer) in &mut self.observers {
            observer(change);
        }
    }

    /// Snapshot, mutate, notify. On error the snapshot is put back and nothing is recorded.
    fn commit<R>(
        &mut self,
        label: &'static str,
        mutate: impl FnOnce(&mut Project, &LayoutEngine) -> FolioResult<(R, Change)>,
    ) -> FolioResult<R> {
        let before = Snapshot::capture(label, &self.project);
        match mutate(&mut self.project, &self.engine) {
            Ok((out, change)) => {
                self.history.push(before);
                tracing::debug!(command = label, ?change, "editor commit");
                self.notify(&change);
                Ok(out)
            }
            Err(err) => {
                before.restore(&mut self.project);
                Err(err)
            }
        }
    }

    /// Revert the last command. Returns false when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let current = Snapshot::capture("undo", &self.project);
        let Some(prev) = self.history.undo(current) else {
            return false;
        };
        tracing::debug!(command = prev.label, "undo");
        prev.restore(&mut self.project);
        self.after_restore();
        true
    }

    /// Re-apply the last undone command. Returns false when there is nothing to redo.
    pub fn redo(&mut self) -> bool {
        let current = Snapshot::capture("redo", &self.project);
        let Some(next) = self.history.redo(current) else {
            return false;
        };
        tracing::debug!(command = next.label, "redo");
        next.restore(&mut self.project);
        self.after_restore();
        true
    }

    fn after_restore(&mut self) {
        let active_exists = self
            .active_page
            .as_deref()
            .is_some_and(|id| self.project.pages.iter().any(|p| p.id == id));
        if !active_exists {
            self.active_page = self.project.pages.first().map(|p| p.id.clone());
        }
        self.selection = Selection::None;
        self.notify(&Change::Restored);
    }

    // Pages

    /// Append an empty page using the book theme as background; it becomes active.
    pub fn add_page(&mut self) -> FolioResult<String> {
        let id = uuid::Uuid::new_v4().to_string();
        let page_id = id.clone();
        self.commit("add_page", |project, _| {
            let mut page = Page::new(page_id);
            page.background = project.theme.clone();
            project.pages.push(page);
            Ok(((), Change::Pages))
        })?;
        self.active_page = Some(id.clone());
        self.notify(&Change::ActivePage);
        Ok(id)
    }

    /// Delete a page; the active page moves to a neighbour when needed.
    pub fn remove_page(&mut self, page_id: &str) -> FolioResult<()> {
        let index = self.page_index(page_id)?;
        self.commit("remove_page", |project, _| {
            project.pages.remove(index);
            Ok(((), Change::Pages))
        })?;
        if self.active_page.as_deref() == Some(page_id) {
            let pages = &self.project.pages;
            self.active_page = pages
                .get(index)
                .or_else(|| pages.last())
                .map(|p| p.id.clone());
            self.selection = Selection::None;
            self.notify(&Change::ActivePage);
        }
        Ok(())
    }

    /// Make `page_id` the active page. View state: not recorded in history.
    pub fn set_active_page(&mut self, page_id: &str) -> FolioResult<()> {
        self.page_index(page_id)?;
        if self.active_page.as_deref() != Some(page_id) {
            self.active_page = Some(page_id.to_owned());
            self.selection = Selection::None;
            self.notify(&Change::ActivePage);
        }
        Ok(())
    }

    // Photos

    /// Put a catalog photo on a page and regenerate its layout.
    ///
    /// A photo appears at most once per page: adding one that is already there returns
    /// `Ok(false)` and records nothing.
    pub fn add_photo_to_page(&mut self, page_id: &str, photo_id: &str) -> FolioResult<bool> {
        self.require_photo(photo_id)?;
        if self.page_ref(page_id)?.photos.iter().any(|p| p == photo_id) {
            return Ok(false);
        }
        self.commit("add_photo_to_page", |project, engine| {
            let page = page_mut(project, page_id)?;
            page.photos.push(photo_id.to_owned());
            relayout(page, engine);
            Ok((true, Change::Page(page_id.to_owned())))
        })
    }

    /// Show a different photo in one slot, then regenerate the page layout.
    ///
    /// The slot's frame moves to the new photo. Returns `Ok(false)` without recording when the
    /// photo is already on the page.
    pub fn replace_photo_in_slot(
        &mut self,
        page_id: &str,
        slot_index: usize,
        photo_id: &str,
    ) -> FolioResult<bool> {
        self.require_photo(photo_id)?;
        let page = self.page_ref(page_id)?;
        slot_of(page, slot_index)?;
        if page.photos.iter().any(|p| p == photo_id) {
            return Ok(false);
        }
        self.commit("replace_photo_in_slot", |project, engine| {
            let page = page_mut(project, page_id)?;
            let old = page
                .layout
                .as_mut()
                .and_then(|l| l.slots.get_mut(slot_index))
                .ok_or_else(|| slot_error(page_id, slot_index))?
                .photo_id
                .replace(photo_id.to_owned());
            match old.and_then(|old| page.photos.iter().position(|p| *p == old)) {
                Some(i) => page.photos[i] = photo_id.to_owned(),
                None => page.photos.push(photo_id.to_owned()),
            }
            relayout(page, engine);
            Ok((true, Change::Page(page_id.to_owned())))
        })
    }

    /// Take a photo off a page and regenerate its layout. The photo stays in the catalog.
    pub fn remove_photo_from_page(&mut self, page_id: &str, photo_id: &str) -> FolioResult<bool> {
        if !self.page_ref(page_id)?.photos.iter().any(|p| p == photo_id) {
            return Ok(false);
        }
        self.commit("remove_photo_from_page", |project, engine| {
            let page = page_mut(project, page_id)?;
            page.photos.retain(|p| p != photo_id);
            relayout(page, engine);
            Ok((true, Change::Page(page_id.to_owned())))
        })
    }

    /// Exchange the photos of two slots (and their order in the page's photo list).
    pub fn swap_photos(&mut self, page_id: &str, a: usize, b: usize) -> FolioResult<()> {
        let page = self.page_ref(page_id)?;
        slot_of(page, a)?;
        slot_of(page, b)?;
        if a == b {
            return Ok(());
        }
        self.commit("swap_photos", |project, _| {
            let page = page_mut(project, page_id)?;
            let slots = page
                .layout
                .as_mut()
                .map(|l| &mut l.slots)
                .ok_or_else(|| slot_error(page_id, a))?;
            let (pa, pb) = (slots[a].photo_id.take(), slots[b].photo_id.take());
            slots[a].photo_id = pb.clone();
            slots[b].photo_id = pa.clone();
            if let (Some(pa), Some(pb)) = (pa, pb) {
                let ia = page.photos.iter().position(|p| *p == pa);
                let ib = page.photos.iter().position(|p| *p == pb);
                if let (Some(ia), Some(ib)) = (ia, ib) {
                    page.photos.swap(ia, ib);
                }
            }
            Ok(((), Change::Page(page_id.to_owned())))
        })
    }

    /// Cycle to the next template for the page's photo count. Returns the new layout name.
    pub fn remix_layout(&mut self, page_id: &str) -> FolioResult<Option<String>> {
        if self.page_ref(page_id)?.photos.is_empty() {
            return Ok(None);
        }
        self.commit("remix_layout", |project, engine| {
            let page = page_mut(project, page_id)?;
            let Some(mut layout) = engine.remix(&page.photos, page.layout.as_ref()) else {
                return Ok((None, Change::Page(page_id.to_owned())));
            };
            if let Some(old) = &page.layout {
                carry_slot_styles(&old.slots, &mut layout.slots);
            }
            let name = layout.name.clone();
            page.layout = Some(layout);
            Ok((Some(name), Change::Page(page_id.to_owned())))
        })
    }

    // Frames and backgrounds

    /// Set or clear the frame of one slot.
    pub fn apply_slot_frame(
        &mut self,
        page_id: &str,
        slot_index: usize,
        frame_id: Option<String>,
        color: Option<String>,
    ) -> FolioResult<()> {
        slot_of(self.page_ref(page_id)?, slot_index)?;
        self.commit("apply_slot_frame", |project, _| {
            let page = page_mut(project, page_id)?;
            let slot = page
                .layout
                .as_mut()
                .and_then(|l| l.slots.get_mut(slot_index))
                .ok_or_else(|| slot_error(page_id, slot_index))?;
            slot.frame_id = frame_id;
            slot.frame_color = color;
            Ok(((), Change::Page(page_id.to_owned())))
        })
    }

    /// Set the default image frame of a page.
    pub fn set_page_image_frame(
        &mut self,
        page_id: &str,
        frame_id: Option<String>,
        color: Option<String>,
        shape: Option<FrameShape>,
    ) -> FolioResult<()> {
        self.commit("set_page_image_frame", |project, _| {
            let page = page_mut(project, page_id)?;
            page.image_frame_id = frame_id;
            page.image_frame_color = color;
            page.image_shape = shape;
            Ok(((), Change::Page(page_id.to_owned())))
        })
    }

    /// Set the page-level decorative frame.
    pub fn set_page_frame(
        &mut self,
        page_id: &str,
        frame_id: Option<String>,
        color: Option<String>,
    ) -> FolioResult<()> {
        self.commit("set_page_frame", |project, _| {
            let page = page_mut(project, page_id)?;
            page.page_frame_id = frame_id;
            page.page_frame_color = color;
            Ok(((), Change::Page(page_id.to_owned())))
        })
    }

    /// Set one page's background (texture id or hex color).
    pub fn set_background(&mut self, page_id: &str, background: Option<String>) -> FolioResult<()> {
        self.commit("set_background", |project, _| {
            page_mut(project, page_id)?.background = background;
            Ok(((), Change::Page(page_id.to_owned())))
        })
    }

    /// Set the book theme; every page background and the cover follow it.
    pub fn set_theme(&mut self, theme: &str) -> FolioResult<()> {
        if theme.trim().is_empty() {
            return Err(FolioError::validation("theme id must be non-empty"));
        }
        self.commit("set_theme", |project, _| {
            project.theme = Some(theme.to_owned());
            for page in &mut project.pages {
                page.background = Some(theme.to_owned());
            }
            project.cover.theme = Some(theme.to_owned());
            Ok(((), Change::Theme))
        })
    }

    // Text

    /// Add a text element; an empty id gets a fresh one. Returns the id.
    pub fn add_text(&mut self, page_id: &str, mut element: TextElement) -> FolioResult<String> {
        if element.id.is_empty() {
            element.id = uuid::Uuid::new_v4().to_string();
        }
        if self
            .page_ref(page_id)?
            .elements
            .iter()
            .any(|e| e.id == element.id)
        {
            return Err(FolioError::validation(format!(
                "text element '{}' already exists on page '{page_id}'",
                element.id
            )));
        }
        let id = element.id.clone();
        self.commit("add_text", |project, _| {
            page_mut(project, page_id)?.elements.push(element);
            Ok(((), Change::Page(page_id.to_owned())))
        })?;
        Ok(id)
    }

    /// Move a text element to `x`, `y` percent.
    pub fn move_text(&mut self, page_id: &str, text_id: &str, x: f64, y: f64) -> FolioResult<()> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(FolioError::validation("text position must be finite"));
        }
        self.commit("move_text", |project, _| {
            let el = text_mut(project, page_id, text_id)?;
            el.x = x;
            el.y = y;
            Ok(((), Change::Page(page_id.to_owned())))
        })
    }

    /// Apply a partial update to a text element.
    pub fn update_text(&mut self, page_id: &str, text_id: &str, update: TextUpdate) -> FolioResult<()> {
        self.commit("update_text", |project, _| {
            let el = text_mut(project, page_id, text_id)?;
            if let Some(v) = update.content {
                el.content = v;
            }
            if let Some(v) = update.width {
                el.width = Some(v);
            }
            if let Some(v) = update.font_size {
                el.font_size = Some(v);
            }
            if let Some(v) = update.color {
                el.color = Some(v);
            }
            if let Some(v) = update.font_family {
                el.font_family = Some(v);
            }
            if let Some(v) = update.rotation {
                el.rotation = v;
            }
            if let Some(v) = update.style_id {
                el.style_id = v;
            }
            if let Some(v) = update.align {
                el.align = Some(v);
            }
            Ok(((), Change::Page(page_id.to_owned())))
        })
    }

    /// Delete a text element; clears the selection when it pointed at it.
    pub fn delete_text(&mut self, page_id: &str, text_id: &str) -> FolioResult<()> {
        self.commit("delete_text", |project, _| {
            let page = page_mut(project, page_id)?;
            let before = page.elements.len();
            page.elements.retain(|e| e.id != text_id);
            if page.elements.len() == before {
                return Err(text_error(page_id, text_id));
            }
            Ok(((), Change::Page(page_id.to_owned())))
        })?;
        if matches!(&self.selection, Selection::Text(id) if id == text_id) {
            self.set_selection(Selection::None);
        }
        Ok(())
    }

    // Cover

    /// Edit the cover in place.
    pub fn update_cover(&mut self, edit: impl FnOnce(&mut Cover)) -> FolioResult<()> {
        self.commit("update_cover", |project, _| {
            edit(&mut project.cover);
            Ok(((), Change::Cover))
        })
    }

    /// Exchange the front and back cover photos.
    pub fn swap_cover_photos(&mut self) -> FolioResult<()> {
        self.commit("swap_cover_photos", |project, _| {
            let cover = &mut project.cover;
            std::mem::swap(&mut cover.front_photo_id, &mut cover.back_photo_id);
            Ok(((), Change::Cover))
        })
    }

    /// Change the selection. Not recorded in history.
    pub fn set_selection(&mut self, selection: Selection) {
        if self.selection != selection {
            self.selection = selection;
            self.notify(&Change::Selection);
        }
    }

    fn page_index(&self, page_id: &str) -> FolioResult<usize> {
        self.project
            .pages
            .iter()
            .position(|p| p.id == page_id)
            .ok_or_else(|| page_error(page_id))
    }

    fn page_ref(&self, page_id: &str) -> FolioResult<&Page> {
        self.page(page_id).ok_or_else(|| page_error(page_id))
    }

    fn require_photo(&self, photo_id: &str) -> FolioResult<()> {
        if self.project.photo(photo_id).is_none() {
            return Err(FolioError::validation(format!(
                "photo '{photo_id}' is not in the project catalog"
            )));
        }
        Ok(())
    }
}

fn page_error(page_id: &str) -> FolioError {
    FolioError::validation(format!("unknown page '{page_id}'"))
}

fn slot_error(page_id: &str, slot_index: usize) -> FolioError {
    FolioError::validation(format!("page '{page_id}' has no slot {slot_index}"))
}

fn text_error(page_id: &str, text_id: &str) -> FolioError {
    FolioError::validation(format!("page '{page_id}' has no text element '{text_id}'"))
}

fn page_mut<'a>(project: &'a mut Project, page_id: &str) -> FolioResult<&'a mut Page> {
    project
        .pages
        .iter_mut()
        .find(|p| p.id == page_id)
        .ok_or_else(|| page_error(page_id))
}

fn text_mut<'a>(
    project: &'a mut Project,
    page_id: &str,
    text_id: &str,
) -> FolioResult<&'a mut TextElement> {
    page_mut(project, page_id)?
        .elements
        .iter_mut()
        .find(|e| e.id == text_id)
        .ok_or_else(|| text_error(page_id, text_id))
}

fn slot_of(page: &Page, index: usize) -> FolioResult<()> {
    if index < page.slots().len() {
        Ok(())
    } else {
        Err(slot_error(&page.id, index))
    }
}

/// New layout for the page's photo set. Per-slot frames follow their photo.
fn relayout(page: &mut Page, engine: &LayoutEngine) {
    let mut layout = engine.generate_layout(&page.photos);
    if let (Some(old), Some(new)) = (&page.layout, &mut layout) {
        carry_slot_styles(&old.slots, &mut new.slots);
    }
    page.layout = layout;
}

fn carry_slot_styles(old: &[crate::model::Slot], new: &mut [crate::model::Slot]) {
    for slot in new {
        let Some(prev) = old
            .iter()
            .find(|s| s.photo_id.is_some() && s.photo_id == slot.photo_id)
        else {
            continue;
        };
        slot.frame_id = prev.frame_id.clone();
        slot.frame_color = prev.frame_color.clone();
        slot.shape = prev.shape;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/state.rs"]
mod tests;
