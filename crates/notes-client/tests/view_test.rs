//! View controller behaviour against an in-memory transport.

use std::sync::Mutex;

use async_trait::async_trait;

use notes_client::view::{
    DELETE_FAILED_MSG, DRAFT_REQUIRED_MSG, FETCH_FAILED_MSG, SAVE_FAILED_MSG,
};
use notes_client::{ClientError, Note, NotesTransport, NotesView, Result};

/// Records calls and serves notes from memory. `fail` makes every call error.
#[derive(Default)]
struct FakeTransport {
    notes: Mutex<Vec<Note>>,
    calls: Mutex<Vec<String>>,
    fail: bool,
}

impl FakeTransport {
    fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            notes: Mutex::new(notes),
            ..Self::default()
        }
    }

    fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: String) -> Result<()> {
        self.calls.lock().unwrap().push(call);
        if self.fail {
            return Err(ClientError::Status {
                status: 500,
                message: "boom".into(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl NotesTransport for FakeTransport {
    async fn list(&self) -> Result<Vec<Note>> {
        self.record("list".into())?;
        Ok(self.notes.lock().unwrap().clone())
    }

    async fn create(&self, title: &str, content: &str) -> Result<Note> {
        self.record(format!("create {title}|{content}"))?;
        let mut notes = self.notes.lock().unwrap();
        let id = notes.iter().map(|n| n.id).max().unwrap_or(0) + 1;
        let note = note(id, title, content);
        notes.push(note.clone());
        Ok(note)
    }

    async fn update(&self, id: i64, title: &str, content: &str) -> Result<Note> {
        self.record(format!("update {id} {title}|{content}"))?;
        let mut notes = self.notes.lock().unwrap();
        let slot = notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(ClientError::Status {
                status: 404,
                message: "Note not found".into(),
            })?;
        slot.title = title.into();
        slot.content = content.into();
        Ok(slot.clone())
    }

    async fn delete(&self, id: i64) -> Result<()> {
        self.record(format!("delete {id}"))?;
        self.notes.lock().unwrap().retain(|n| n.id != id);
        Ok(())
    }
}

fn note(id: i64, title: &str, content: &str) -> Note {
    Note {
        id,
        title: title.into(),
        content: content.into(),
        created_at: None,
    }
}

#[tokio::test]
async fn test_load_fetches_once_and_clears_loading() {
    let transport = FakeTransport::with_notes(vec![note(1, "a", "b")]);
    let mut view = NotesView::new();

    view.load(&transport).await;

    assert_eq!(view.notes, vec![note(1, "a", "b")]);
    assert!(!view.loading);
    assert!(view.error.is_none());
    assert_eq!(transport.calls(), vec!["list"]);
}

#[tokio::test]
async fn test_load_failure_sets_error() {
    let transport = FakeTransport::failing();
    let mut view = NotesView::new();

    view.load(&transport).await;

    assert_eq!(view.error.as_deref(), Some(FETCH_FAILED_MSG));
    assert!(!view.loading);
    assert!(view.notes.is_empty());
}

#[tokio::test]
async fn test_submit_create_appends_trimmed_note_and_resets_form() {
    let transport = FakeTransport::with_notes(vec![note(1, "first", "note")]);
    let mut view = NotesView::new();
    view.load(&transport).await;

    view.set_title("  Second ");
    view.set_content(" body\n");
    assert!(view.submit(&transport).await);

    assert_eq!(view.notes.len(), 2);
    assert_eq!(view.notes[1], note(2, "Second", "body"));
    assert!(view.title.is_empty() && view.content.is_empty());
    assert_eq!(transport.calls(), vec!["list", "create Second|body"]);
}

#[tokio::test]
async fn test_submit_update_replaces_in_place() {
    let transport = FakeTransport::with_notes(vec![
        note(1, "one", "1"),
        note(2, "two", "2"),
        note(3, "three", "3"),
    ]);
    let mut view = NotesView::new();
    view.load(&transport).await;

    let target = view.notes[1].clone();
    view.begin_edit(&target);
    view.set_title("TWO");
    assert!(view.submit(&transport).await);

    let titles: Vec<&str> = view.notes.iter().map(|n| n.title.as_str()).collect();
    assert_eq!(titles, vec!["one", "TWO", "three"]);
    assert_eq!(view.editing, None);
    assert!(!transport.calls().iter().any(|c| c.starts_with("create")));
}

#[tokio::test]
async fn test_submit_blank_draft_sends_nothing() {
    let transport = FakeTransport::default();
    let mut view = NotesView::new();
    view.set_title("   ");
    view.set_content("content");

    assert!(!view.submit(&transport).await);

    assert_eq!(view.error.as_deref(), Some(DRAFT_REQUIRED_MSG));
    assert!(transport.calls().is_empty());
    assert_eq!(view.content, "content");
}

#[tokio::test]
async fn test_submit_failure_keeps_draft_and_replaces_error() {
    let transport = FakeTransport::failing();
    let mut view = NotesView::new();
    view.load(&transport).await;
    assert_eq!(view.error.as_deref(), Some(FETCH_FAILED_MSG));

    view.set_title("t");
    view.set_content("c");
    assert!(!view.submit(&transport).await);

    assert_eq!(view.error.as_deref(), Some(SAVE_FAILED_MSG));
    assert_eq!(view.title, "t");
    assert!(view.notes.is_empty());
}

#[tokio::test]
async fn test_declined_delete_sends_nothing() {
    let transport = FakeTransport::with_notes(vec![note(1, "a", "b")]);
    let mut view = NotesView::new();
    view.load(&transport).await;

    assert!(!view.delete(&transport, 1, || false).await);

    assert_eq!(view.notes.len(), 1);
    assert_eq!(transport.calls(), vec!["list"]);
}

#[tokio::test]
async fn test_confirmed_delete_removes_row() {
    let transport = FakeTransport::with_notes(vec![note(1, "a", "b"), note(2, "c", "d")]);
    let mut view = NotesView::new();
    view.load(&transport).await;

    assert!(view.delete(&transport, 1, || true).await);

    assert_eq!(view.notes, vec![note(2, "c", "d")]);
    assert_eq!(transport.calls(), vec!["list", "delete 1"]);
}

#[tokio::test]
async fn test_failed_delete_keeps_row() {
    let transport = FakeTransport::failing();
    let mut view = NotesView {
        notes: vec![note(1, "a", "b")],
        ..NotesView::default()
    };

    assert!(!view.delete(&transport, 1, || true).await);

    assert_eq!(view.notes.len(), 1);
    assert_eq!(view.error.as_deref(), Some(DELETE_FAILED_MSG));
}
