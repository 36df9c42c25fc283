//! # notes-store
//!
//! Storage backends for the notes service.
//!
//! This crate provides:
//! - [`JsonFileStore`]: in-memory collection snapshotted to a JSON file
//! - [`SqliteNoteStore`]: single-table SQLite persistence
//! - SQLite connection pool management
//!
//! ## Example
//!
//! ```rust,ignore
//! use notes_store::{JsonFileStore, NoteDraft, NoteStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = JsonFileStore::open("notes-data.json").await;
//!     let note = store.create(NoteDraft::new("Hello", "world")?).await?;
//!     println!("Created note: {}", note.id);
//!     Ok(())
//! }
//! ```
pub mod file;
pub mod pool;
pub mod sqlite;

// Re-export core types
pub use notes_core::*;

pub use file::{JsonFileStore, DEFAULT_DATA_FILE};
pub use pool::{connect_pool, PoolConfig};
pub use sqlite::{SqliteNoteStore, DEFAULT_DATABASE_URL};
