//! Integration tests for the SQLite note store.
//!
//! Uses a database file in a temporary directory so the pool may hold
//! several connections.

use notes_store::{connect_pool, NoteDraft, NoteStore, PoolConfig, SqliteNoteStore};

async fn setup_store(dir: &tempfile::TempDir) -> SqliteNoteStore {
    let url = format!("sqlite://{}", dir.path().join("notes.db").display());
    SqliteNoteStore::connect(&url)
        .await
        .expect("Failed to connect to test database")
}

#[tokio::test]
async fn test_connect_creates_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup_store(&dir).await;

    assert!(dir.path().join("notes.db").exists());
    assert!(store.list().await.unwrap().is_empty());
    store.close().await;
}

#[tokio::test]
async fn test_data_survives_reconnect() {
    let dir = tempfile::tempdir().unwrap();

    let created = {
        let store = setup_store(&dir).await;
        let note = store
            .create(NoteDraft::new("persist", "me").unwrap())
            .await
            .unwrap();
        store.close().await;
        note
    };

    let store = setup_store(&dir).await;
    let listed = store.list().await.unwrap();
    assert_eq!(listed, vec![created]);
}

#[tokio::test]
async fn test_existing_pool_can_be_wrapped() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("shared.db").display());
    let pool = connect_pool(&url, &PoolConfig::default()).await.unwrap();

    let store = SqliteNoteStore::new(pool.clone());
    store.ensure_schema().await.unwrap();
    store
        .create(NoteDraft::new("via", "pool").unwrap())
        .await
        .unwrap();

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notes")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_created_at_is_serialized() {
    let dir = tempfile::tempdir().unwrap();
    let store = setup_store(&dir).await;
    let note = store
        .create(NoteDraft::new("stamp", "me").unwrap())
        .await
        .unwrap();

    let json = serde_json::to_value(&note).unwrap();
    assert!(json.get("created_at").is_some());
    assert_eq!(json["title"], "stamp");
}
