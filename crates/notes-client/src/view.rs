//! View state and controller for the notes UI.
//!
//! [`NotesView`] keeps the local copy of the collection plus the form draft.
//! The list is fetched once by [`NotesView::load`]; afterwards every server
//! response is merged into local state instead of re-fetching.

use std::fmt::Write as _;

use tracing::error;

use notes_core::Note;

use crate::api::NotesTransport;

pub const FETCH_FAILED_MSG: &str = "Failed to fetch notes. Please try again.";
pub const SAVE_FAILED_MSG: &str = "Failed to save note. Please try again.";
pub const DELETE_FAILED_MSG: &str = "Failed to delete note. Please try again.";
pub const DRAFT_REQUIRED_MSG: &str = "Title and content are required!";
pub const EMPTY_MSG: &str = "No notes yet. Add your first note!";

/// Local view state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesView {
    pub notes: Vec<Note>,
    pub title: String,
    pub content: String,
    /// Id of the note being edited, if any.
    pub editing: Option<i64>,
    pub loading: bool,
    /// Last failure; a new failure replaces it.
    pub error: Option<String>,
}

impl NotesView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    /// Fetch the full list, replacing local notes on success.
    pub async fn load(&mut self, transport: &dyn NotesTransport) {
        self.loading = true;
        self.error = None;

        match transport.list().await {
            Ok(notes) => self.notes = notes,
            Err(e) => {
                error!(error = %e, "Error fetching notes");
                self.error = Some(FETCH_FAILED_MSG.to_string());
            }
        }

        self.loading = false;
    }

    /// Create or update from the draft depending on whether an edit is active.
    ///
    /// Returns `true` when the server accepted the note.
    pub async fn submit(&mut self, transport: &dyn NotesTransport) -> bool {
        let title = self.title.trim().to_string();
        let content = self.content.trim().to_string();
        if title.is_empty() || content.is_empty() {
            self.error = Some(DRAFT_REQUIRED_MSG.to_string());
            return false;
        }

        self.error = None;
        let result = match self.editing {
            Some(id) => transport.update(id, &title, &content).await.map(|note| {
                for slot in self.notes.iter_mut().filter(|n| n.id == id) {
                    *slot = note.clone();
                }
            }),
            None => transport
                .create(&title, &content)
                .await
                .map(|note| self.notes.push(note)),
        };

        match result {
            Ok(()) => {
                self.reset_form();
                true
            }
            Err(e) => {
                error!(error = %e, "Error saving note");
                self.error = Some(SAVE_FAILED_MSG.to_string());
                false
            }
        }
    }

    /// Load a note into the draft for editing.
    pub fn begin_edit(&mut self, note: &Note) {
        self.editing = Some(note.id);
        self.title = note.title.clone();
        self.content = note.content.clone();
    }

    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    /// Delete a note after `confirm` approves.
    ///
    /// The row leaves local state only once the server confirms. Returns
    /// `true` when the note was deleted.
    pub async fn delete<F>(&mut self, transport: &dyn NotesTransport, id: i64, confirm: F) -> bool
    where
        F: FnOnce() -> bool,
    {
        if !confirm() {
            return false;
        }

        match transport.delete(id).await {
            Ok(()) => {
                self.notes.retain(|n| n.id != id);
                true
            }
            Err(e) => {
                error!(error = %e, note_id = id, "Error deleting note");
                self.error = Some(DELETE_FAILED_MSG.to_string());
                false
            }
        }
    }

    fn reset_form(&mut self) {
        self.editing = None;
        self.title.clear();
        self.content.clear();
    }

    /// Plain-text rendering of the current state.
    pub fn render(&self) -> String {
        let mut out = String::from("Notes App\n");

        if let Some(error) = &self.error {
            let _ = writeln!(out, "! {}", error);
        }
        if let Some(id) = self.editing {
            let _ = writeln!(out, "Editing note #{}", id);
        }
        if self.loading {
            out.push_str("Loading...\n");
        }

        if self.notes.is_empty() && !self.loading {
            out.push_str(EMPTY_MSG);
            out.push('\n');
            return out;
        }

        for note in &self.notes {
            let _ = writeln!(out, "\n#{} {}", note.id, note.title);
            for line in note.content.lines() {
                let _ = writeln!(out, "    {}", line);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: i64, title: &str, content: &str) -> Note {
        Note {
            id,
            title: title.into(),
            content: content.into(),
            created_at: None,
        }
    }

    #[test]
    fn test_begin_and_cancel_edit() {
        let mut view = NotesView::new();
        view.begin_edit(&note(4, "title", "body"));
        assert_eq!(view.editing, Some(4));
        assert_eq!(view.title, "title");
        assert_eq!(view.content, "body");

        view.cancel_edit();
        assert_eq!(view.editing, None);
        assert!(view.title.is_empty());
        assert!(view.content.is_empty());
    }

    #[test]
    fn test_render_empty_state() {
        let view = NotesView::new();
        assert!(view.render().contains(EMPTY_MSG));
    }

    #[test]
    fn test_render_loading_hides_empty_state() {
        let view = NotesView {
            loading: true,
            ..NotesView::default()
        };
        let text = view.render();
        assert!(text.contains("Loading..."));
        assert!(!text.contains(EMPTY_MSG));
    }

    #[test]
    fn test_render_notes_and_error() {
        let view = NotesView {
            notes: vec![note(1, "Groceries", "milk\neggs")],
            error: Some(SAVE_FAILED_MSG.into()),
            ..NotesView::default()
        };
        let text = view.render();
        assert!(text.contains("! Failed to save note. Please try again."));
        assert!(text.contains("#1 Groceries"));
        assert!(text.contains("    milk\n    eggs"));
    }
}
