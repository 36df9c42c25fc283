//! File-backed note store.
//!
//! The full collection lives in memory and is the source of truth. Every
//! mutation rewrites the whole collection to a single pretty-printed JSON file,
//! staged in a sibling `.tmp` file and renamed into place.

use std::path::{Path, PathBuf};
use std::time::Instant;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::{debug, error, info, warn};

use notes_core::{Error, Note, NoteDraft, NoteStore, Result};

/// Default snapshot file name.
pub const DEFAULT_DATA_FILE: &str = "notes-data.json";

struct Collection {
    notes: Vec<Note>,
    next_id: i64,
}

impl Collection {
    fn from_notes(notes: Vec<Note>) -> Self {
        let next_id = notes.iter().map(|n| n.id).max().map_or(1, |max| max + 1);
        Self { notes, next_id }
    }
}

/// Note store snapshotted wholesale to a JSON file.
pub struct JsonFileStore {
    path: PathBuf,
    state: Mutex<Collection>,
}

impl JsonFileStore {
    /// Open the store, loading any existing snapshot at `path`.
    ///
    /// A missing or unparsable file yields an empty collection.
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let notes = load_snapshot(&path).await;

        info!(
            subsystem = "store",
            component = "file",
            op = "open",
            path = %path.display(),
            result_count = notes.len(),
            "Loaded notes snapshot"
        );

        Self {
            path,
            state: Mutex::new(Collection::from_notes(notes)),
        }
    }

    /// Path of the snapshot file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Sibling file the snapshot is staged in before being renamed over
    /// `path`, so a crash mid-write never truncates the last good snapshot.
    fn staging_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| DEFAULT_DATA_FILE.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    async fn persist(&self, notes: &[Note]) -> Result<()> {
        let start = Instant::now();
        let json = serde_json::to_string_pretty(notes)?;
        let staging = self.staging_path();

        let written = match tokio::fs::write(&staging, json).await {
            Ok(()) => tokio::fs::rename(&staging, &self.path).await,
            Err(e) => Err(e),
        };
        if let Err(e) = written {
            error!(
                subsystem = "store",
                component = "file",
                op = "persist",
                path = %self.path.display(),
                error = %e,
                "Failed to save notes snapshot"
            );
            return Err(Error::Io(e));
        }

        debug!(
            subsystem = "store",
            component = "file",
            op = "persist",
            result_count = notes.len(),
            duration_ms = start.elapsed().as_millis() as u64,
            "Saved notes snapshot"
        );
        Ok(())
    }
}

async fn load_snapshot(path: &Path) -> Vec<Note> {
    let data = match tokio::fs::read_to_string(path).await {
        Ok(data) => data,
        Err(e) => {
            warn!(
                subsystem = "store",
                component = "file",
                path = %path.display(),
                error = %e,
                "Could not read notes file, starting empty"
            );
            return Vec::new();
        }
    };

    match serde_json::from_str(&data) {
        Ok(notes) => notes,
        Err(e) => {
            warn!(
                subsystem = "store",
                component = "file",
                path = %path.display(),
                error = %e,
                "Could not parse notes file, starting empty"
            );
            Vec::new()
        }
    }
}

#[async_trait]
impl NoteStore for JsonFileStore {
    async fn list(&self) -> Result<Vec<Note>> {
        let state = self.state.lock().await;
        Ok(state.notes.clone())
    }

    async fn create(&self, draft: NoteDraft) -> Result<Note> {
        let mut state = self.state.lock().await;
        let (title, content) = draft.into_parts();
        let note = Note {
            id: state.next_id,
            title,
            content,
            created_at: None,
        };
        state.next_id += 1;
        state.notes.push(note.clone());

        self.persist(&state.notes).await?;
        Ok(note)
    }

    async fn update(&self, id: i64, draft: NoteDraft) -> Result<Note> {
        let mut state = self.state.lock().await;
        let note = state
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(Error::NoteNotFound(id))?;

        let (title, content) = draft.into_parts();
        note.title = title;
        note.content = content;
        let updated = note.clone();

        self.persist(&state.notes).await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let mut state = self.state.lock().await;
        let before = state.notes.len();
        state.notes.retain(|n| n.id != id);
        if state.notes.len() == before {
            return Err(Error::NoteNotFound(id));
        }

        self.persist(&state.notes).await
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}
