use std::collections::VecDeque;

use crate::model::project::ProjectAssets;
use crate::model::{Cover, Page, Project};

/// Undo entries kept before the oldest is dropped.
pub const HISTORY_CAPACITY: usize = 50;

/// Deep copy of the undoable part of a project.
///
/// Print size and view state (active page, selection) are not part of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Snapshot {
    /// Name of the command that was about to run.
    pub label: &'static str,
    /// Pages.
    pub pages: Vec<Page>,
    /// Cover.
    pub cover: Cover,
    /// Asset references.
    pub assets: ProjectAssets,
    /// Book theme.
    pub theme: Option<String>,
}

impl Snapshot {
    /// Copy the undoable fields of `project`.
    pub fn capture(label: &'static str, project: &Project) -> Self {
        Self {
            label,
            pages: project.pages.clone(),
            cover: project.cover.clone(),
            assets: project.assets.clone(),
            theme: project.theme.clone(),
        }
    }

    /// Overwrite the undoable fields of `project`.
    pub fn restore(self, project: &mut Project) {
        project.pages = self.pages;
        project.cover = self.cover;
        project.assets = self.assets;
        project.theme = self.theme;
    }
}

/// Bounded undo stack with a redo branch.
///
/// Pushing a new entry discards the redo branch.
#[derive(Clone, Debug)]
pub struct History {
    undo: VecDeque<Snapshot>,
    redo: Vec<Snapshot>,
    capacity: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new(HISTORY_CAPACITY)
    }
}

impl History {
    /// Empty history keeping at most `capacity` undo entries (at least one).
    pub fn new(capacity: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            capacity: capacity.max(1),
        }
    }

    /// Record the state from before a mutation.
    pub fn push(&mut self, before: Snapshot) {
        self.redo.clear();
        self.undo.push_back(before);
        while self.undo.len() > self.capacity {
            self.undo.pop_front();
        }
    }

    /// Step back: `current` goes onto the redo branch, the previous state is returned.
    pub fn undo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let prev = self.undo.pop_back()?;
        self.redo.push(Snapshot {
            label: prev.label,
            ..current
        });
        Some(prev)
    }

    /// Step forward again after an undo.
    pub fn redo(&mut self, current: Snapshot) -> Option<Snapshot> {
        let next = self.redo.pop()?;
        self.undo.push_back(Snapshot {
            label: next.label,
            ..current
        });
        Some(next)
    }

    /// True when [`History::undo`] would return a state.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// True when [`History::redo`] would return a state.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Label of the command the next undo reverts.
    pub fn undo_label(&self) -> Option<&'static str> {
        self.undo.back().map(|s| s.label)
    }

    /// Number of undo entries.
    pub fn len(&self) -> usize {
        self.undo.len()
    }

    /// True when nothing can be undone.
    pub fn is_empty(&self) -> bool {
        self.undo.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/editor/history.rs"]
mod tests;
