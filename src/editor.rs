//! Editor state: the mutable book behind the interactive preview.
//!
//! [`EditorState`] owns the document, the active page and the selection. Each command snapshots
//! the undoable part of the document into a bounded [`History`] before mutating it, then
//! notifies observers with a [`Change`].

/// Bounded undo/redo history.
pub mod history;
/// Editor state and commands.
pub mod state;

pub use history::{HISTORY_CAPACITY, History, Snapshot};
pub use state::{Change, EditorState, SubscriptionId, TextUpdate};
