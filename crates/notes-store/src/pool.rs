//! SQLite connection pool setup.
//!
//! File databases get a small pool in WAL mode so readers do not block the
//! single writer. `sqlite::memory:` databases exist per connection, so they
//! are pinned to one connection that is never recycled.

use std::str::FromStr;
use std::time::{Duration, Instant};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};
use tracing::info;

use notes_core::{Error, Result};

/// Connections kept for a file database.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// How long a statement waits on a locked database before failing.
pub const DEFAULT_BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Pool settings for one SQLite database.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolConfig {
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// `None` keeps idle connections open forever.
    pub idle_timeout: Option<Duration>,
    pub busy_timeout: Duration,
    /// Write-ahead logging; only meaningful for file databases.
    pub wal: bool,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(30),
            idle_timeout: Some(Duration::from_secs(600)),
            busy_timeout: DEFAULT_BUSY_TIMEOUT,
            wal: true,
        }
    }
}

impl PoolConfig {
    /// Single never-recycled connection for an in-memory database.
    pub fn in_memory() -> Self {
        Self {
            max_connections: 1,
            idle_timeout: None,
            wal: false,
            ..Self::default()
        }
    }

    /// Settings suited to `url`.
    pub fn for_url(url: &str) -> Self {
        if is_in_memory(url) {
            Self::in_memory()
        } else {
            Self::default()
        }
    }
}

fn is_in_memory(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

/// Open a pool for `database_url`, creating the database file if missing.
pub async fn connect_pool(database_url: &str, config: &PoolConfig) -> Result<SqlitePool> {
    let start = Instant::now();

    let journal_mode = if config.wal {
        SqliteJournalMode::Wal
    } else {
        SqliteJournalMode::Memory
    };
    let options = SqliteConnectOptions::from_str(database_url)
        .map_err(Error::Database)?
        .create_if_missing(true)
        .journal_mode(journal_mode)
        .busy_timeout(config.busy_timeout);

    let mut pool_options = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .idle_timeout(config.idle_timeout);
    if config.idle_timeout.is_none() {
        pool_options = pool_options.min_connections(1).max_lifetime(None);
    }

    let pool = pool_options
        .connect_with(options)
        .await
        .map_err(Error::Database)?;

    info!(
        subsystem = "database",
        component = "pool",
        op = "connect",
        max_connections = config.max_connections,
        pool_size = pool.size(),
        duration_ms = start.elapsed().as_millis() as u64,
        "SQLite pool ready"
    );
    Ok(pool)
}
