//! Note data model and request payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result, REQUIRED_FIELDS_MSG};

// =============================================================================
// NOTE TYPES
// =============================================================================

/// A persisted note.
///
/// `created_at` is only assigned by stores that track insertion time
/// (the SQLite backend); it is omitted from JSON when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Incoming `{title, content}` body for create and update.
///
/// Both fields are optional on the wire so a missing field is reported as a
/// validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoteInput {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// A validated title/content pair, the only input a store accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteDraft {
    title: String,
    content: String,
}

impl NoteInput {
    /// Build an input from borrowed parts.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            content: Some(content.into()),
        }
    }

    /// Check that both fields are present and not blank.
    pub fn validate(self) -> Result<NoteDraft> {
        match (self.title, self.content) {
            (Some(title), Some(content))
                if !title.trim().is_empty() && !content.trim().is_empty() =>
            {
                Ok(NoteDraft { title, content })
            }
            _ => Err(Error::Validation(REQUIRED_FIELDS_MSG.to_string())),
        }
    }
}

impl NoteDraft {
    /// Validate a title/content pair directly.
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Result<Self> {
        NoteInput::new(title, content).validate()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    /// Consume the draft, yielding `(title, content)`.
    pub fn into_parts(self) -> (String, String) {
        (self.title, self.content)
    }
}
