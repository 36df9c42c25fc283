//! HTTP transport for the notes API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::debug;

use notes_core::{Note, NoteInput};

use crate::error::{ClientError, Result};

/// Default API location, matching the server's default port.
pub const DEFAULT_API_URL: &str = "http://localhost:5000";

/// Operations the view controller needs from the server.
#[async_trait]
pub trait NotesTransport: Send + Sync {
    async fn list(&self) -> Result<Vec<Note>>;

    async fn create(&self, title: &str, content: &str) -> Result<Note>;

    async fn update(&self, id: i64, title: &str, content: &str) -> Result<Note>;

    async fn delete(&self, id: i64) -> Result<()>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// reqwest-backed client for `/notes`.
#[derive(Debug, Clone)]
pub struct NotesApi {
    client: Client,
    base_url: String,
}

impl NotesApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }

    fn note_url(&self, id: i64) -> String {
        format!("{}/notes/{}", self.base_url, id)
    }
}

/// Turn a non-2xx response into `ClientError::Status`.
async fn check(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .map(|b| b.error)
        .unwrap_or_else(|_| {
            status
                .canonical_reason()
                .unwrap_or("Unexpected response")
                .to_string()
        });

    debug!(status = status.as_u16(), message = %message, "Request failed");
    Err(ClientError::Status {
        status: status.as_u16(),
        message,
    })
}

#[async_trait]
impl NotesTransport for NotesApi {
    async fn list(&self) -> Result<Vec<Note>> {
        let response = self.client.get(self.notes_url()).send().await?;
        Ok(check(response).await?.json().await?)
    }

    async fn create(&self, title: &str, content: &str) -> Result<Note> {
        let response = self
            .client
            .post(self.notes_url())
            .json(&NoteInput::new(title, content))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn update(&self, id: i64, title: &str, content: &str) -> Result<Note> {
        let response = self
            .client
            .put(self.note_url(id))
            .json(&NoteInput::new(title, content))
            .send()
            .await?;
        Ok(check(response).await?.json().await?)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        let response = self.client.delete(self.note_url(id)).send().await?;
        check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let api = NotesApi::new("http://localhost:5000/");
        assert_eq!(api.base_url(), "http://localhost:5000");
        assert_eq!(api.notes_url(), "http://localhost:5000/notes");
        assert_eq!(api.note_url(7), "http://localhost:5000/notes/7");
    }
}
