//! SQLite implementation of the note store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqlitePool, SqliteRow};
use sqlx::Row;
use tracing::{debug, info};

use notes_core::{Error, Note, NoteDraft, NoteStore, Result};

use crate::pool::{connect_pool, PoolConfig};

/// Default database URL when none is configured.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://notes.db";

const CREATE_NOTES_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS notes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)
"#;

/// Map a `notes` row to a Note.
///
/// A column that fails to decode (say a hand-edited `created_at`) is a
/// database error, not a panic.
fn map_row_to_note(row: SqliteRow) -> Result<Note> {
    Ok(Note {
        id: row.try_get("id").map_err(Error::Database)?,
        title: row.try_get("title").map_err(Error::Database)?,
        content: row.try_get("content").map_err(Error::Database)?,
        created_at: Some(
            row.try_get::<DateTime<Utc>, _>("created_at")
                .map_err(Error::Database)?,
        ),
    })
}

/// SQLite-backed note store. One row per note, one statement per operation.
pub struct SqliteNoteStore {
    pool: SqlitePool,
}

impl SqliteNoteStore {
    /// Create a new SqliteNoteStore with the given connection pool.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Connect to `url`, creating the database file and table if needed.
    pub async fn connect(url: &str) -> Result<Self> {
        let pool = connect_pool(url, &PoolConfig::for_url(url)).await?;
        let store = Self::new(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Create the `notes` table if it does not exist.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_NOTES_TABLE)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;
        info!(
            subsystem = "store",
            component = "sqlite",
            op = "ensure_schema",
            db_table = "notes",
            "Notes table ready"
        );
        Ok(())
    }

    /// Get the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close every pooled connection.
    pub async fn close(&self) {
        self.pool.close().await;
        info!(
            subsystem = "store",
            component = "sqlite",
            op = "close",
            "Database connection closed"
        );
    }
}

#[async_trait]
impl NoteStore for SqliteNoteStore {
    async fn list(&self) -> Result<Vec<Note>> {
        let rows = sqlx::query(
            "SELECT id, title, content, created_at FROM notes ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(Error::Database)?;

        rows.into_iter().map(map_row_to_note).collect()
    }

    async fn create(&self, draft: NoteDraft) -> Result<Note> {
        let row = sqlx::query(
            "INSERT INTO notes (title, content) VALUES (?, ?) \
             RETURNING id, title, content, created_at",
        )
        .bind(draft.title())
        .bind(draft.content())
        .fetch_one(&self.pool)
        .await
        .map_err(Error::Database)?;

        let note = map_row_to_note(row)?;
        debug!(
            subsystem = "store",
            component = "sqlite",
            op = "create",
            note_id = note.id,
            "Inserted note"
        );
        Ok(note)
    }

    async fn update(&self, id: i64, draft: NoteDraft) -> Result<Note> {
        let row = sqlx::query(
            "UPDATE notes SET title = ?, content = ? WHERE id = ? \
             RETURNING id, title, content, created_at",
        )
        .bind(draft.title())
        .bind(draft.content())
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(Error::Database)?;

        match row {
            Some(row) => map_row_to_note(row),
            None => Err(Error::NoteNotFound(id)),
        }
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM notes WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(Error::Database)?;

        if result.rows_affected() == 0 {
            return Err(Error::NoteNotFound(id));
        }
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "sqlite"
    }
}
