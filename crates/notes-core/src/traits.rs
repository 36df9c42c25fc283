//! Core traits for note persistence.
//!
//! Handlers only ever see a `dyn NoteStore`, so the file-backed and SQL-backed
//! implementations are interchangeable at startup.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{Note, NoteDraft};

// =============================================================================
// NOTE STORE TRAIT
// =============================================================================

/// Storage for the note collection.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// List every note in the store's natural order.
    async fn list(&self) -> Result<Vec<Note>>;

    /// Insert a new note, assigning it a fresh id.
    async fn create(&self, draft: NoteDraft) -> Result<Note>;

    /// Replace title and content of an existing note.
    ///
    /// Returns `Error::NoteNotFound` when no note has the given id.
    async fn update(&self, id: i64, draft: NoteDraft) -> Result<Note>;

    /// Remove a note.
    ///
    /// Returns `Error::NoteNotFound` when no note has the given id.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Short backend name used in logs and health output.
    fn backend(&self) -> &'static str;
}
