//! HTTP error mapping.

use axum::{http::StatusCode, response::IntoResponse, Json};
use thiserror::Error;

use notes_core::Error;

/// Message returned for unknown note ids.
pub const NOTE_NOT_FOUND_MSG: &str = "Note not found";

/// Errors a handler can return; each maps to one HTTP status.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    /// Store fault. Only the public message reaches the caller.
    #[error("{public}: {cause}")]
    Internal { public: &'static str, cause: Error },
}

impl ApiError {
    /// Classify a store error, attaching the generic message shown on faults.
    ///
    /// Faults are logged here with their underlying cause.
    pub fn from_store(err: Error, public: &'static str) -> Self {
        match err {
            Error::Validation(msg) => ApiError::BadRequest(msg),
            Error::NoteNotFound(_) => ApiError::NotFound(NOTE_NOT_FOUND_MSG.to_string()),
            cause => {
                tracing::error!(
                    subsystem = "api",
                    error = %cause,
                    "{}",
                    public
                );
                ApiError::Internal { public, cause }
            }
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(msg) | ApiError::NotFound(msg) => msg,
            ApiError::Internal { public, .. } => public.to_string(),
        };

        let body = Json(serde_json::json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use notes_core::REQUIRED_FIELDS_MSG;

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = ApiError::from_store(
            Error::Validation(REQUIRED_FIELDS_MSG.into()),
            "Failed to add note",
        );
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), REQUIRED_FIELDS_MSG);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = ApiError::from_store(Error::NoteNotFound(3), "Failed to update note");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), NOTE_NOT_FOUND_MSG);
    }

    #[test]
    fn test_store_fault_hides_cause() {
        let err = ApiError::from_store(
            Error::Io(std::io::Error::other("disk full")),
            "Failed to add note",
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        // Display keeps the cause for logs; the response body does not.
        assert!(err.to_string().contains("disk full"));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
