//! Server configuration read from the environment.
//!
//! `.env` files are loaded by `main` via `dotenvy` before [`Config::from_env`]
//! runs, so the variables below may come from either source.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `HOST` | `0.0.0.0` |
//! | `PORT` | `5000` |
//! | `NOTES_BACKEND` | `file` (`file` or `sqlite`) |
//! | `NOTES_DATA_FILE` | `notes-data.json` |
//! | `DATABASE_URL` | `sqlite://notes.db` |
//! | `ALLOWED_ORIGINS` / `FRONTEND_URL` | any origin |

use std::path::PathBuf;

use axum::http::HeaderValue;
use tokio::net::TcpListener;

use notes_core::Error;
use notes_store::{DEFAULT_DATABASE_URL, DEFAULT_DATA_FILE};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 5000;

/// Default bind address.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Which store implementation backs the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// In-memory collection snapshotted to a JSON file.
    File { path: PathBuf },
    /// SQLite database.
    Sqlite { url: String },
}

/// Cross-origin policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsOrigins {
    /// Any origin may call the API.
    Any,
    /// Only the listed origins may call the API.
    List(Vec<HeaderValue>),
}

/// Complete server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub backend: StoreBackend,
    pub cors: CorsOrigins,
}

impl Config {
    /// Build configuration from process environment variables.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = lookup("PORT")
            .and_then(|p| p.trim().parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let backend = match lookup("NOTES_BACKEND")
            .map(|b| b.trim().to_lowercase())
            .as_deref()
        {
            None | Some("") | Some("file") | Some("json") => StoreBackend::File {
                path: lookup("NOTES_DATA_FILE")
                    .unwrap_or_else(|| DEFAULT_DATA_FILE.to_string())
                    .into(),
            },
            Some("sqlite") | Some("sql") => StoreBackend::Sqlite {
                url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            },
            Some(other) => {
                return Err(Error::Config(format!(
                    "unknown NOTES_BACKEND '{}', expected 'file' or 'sqlite'",
                    other
                )))
            }
        };

        let origins = lookup("ALLOWED_ORIGINS").or_else(|| lookup("FRONTEND_URL"));
        let cors = parse_allowed_origins(origins.as_deref().unwrap_or(""));

        Ok(Self {
            host,
            port,
            backend,
            cors,
        })
    }

    /// Bind the listening socket.
    ///
    /// `HOST` may be an IPv4/IPv6 literal (brackets optional) or a hostname
    /// such as `localhost`, which is resolved.
    pub async fn bind(&self) -> Result<TcpListener, Error> {
        let host = self.host.trim_start_matches('[').trim_end_matches(']');
        TcpListener::bind((host, self.port)).await.map_err(|e| {
            Error::Config(format!("cannot bind {}:{}: {}", self.host, self.port, e))
        })
    }
}

/// Parse allowed origins from a comma-separated list.
///
/// An empty list or a `*` entry allows every origin. Entries that are not
/// valid header values are skipped with a warning.
pub fn parse_allowed_origins(origins: &str) -> CorsOrigins {
    let entries: Vec<&str> = origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if entries.is_empty() || entries.contains(&"*") {
        return CorsOrigins::Any;
    }

    let list: Vec<HeaderValue> = entries
        .into_iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(v) => Some(v),
            Err(e) => {
                tracing::warn!("Invalid CORS origin '{}': {}", origin, e);
                None
            }
        })
        .collect();

    if list.is_empty() {
        CorsOrigins::Any
    } else {
        CorsOrigins::List(list)
    }
}
