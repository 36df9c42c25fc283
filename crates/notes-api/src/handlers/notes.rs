//! Note CRUD handlers.
//!
//! Each handler validates the request shape, calls the store, and maps the
//! outcome to a status code and JSON body. There is no other business logic.

use axum::{
    extract::{rejection::JsonRejection, rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use notes_core::{Note, NoteInput, REQUIRED_FIELDS_MSG};

use crate::error::{ApiError, NOTE_NOT_FOUND_MSG};
use crate::AppState;

/// Extract the JSON body, treating any malformed payload as missing fields.
fn body_or_bad_request(
    body: Result<Json<NoteInput>, JsonRejection>,
) -> Result<NoteInput, ApiError> {
    body.map(|Json(input)| input).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected note body");
        ApiError::BadRequest(REQUIRED_FIELDS_MSG.to_string())
    })
}

/// Extract the note id; a non-numeric id cannot name any note.
fn id_or_not_found(id: Result<Path<i64>, PathRejection>) -> Result<i64, ApiError> {
    id.map(|Path(id)| id)
        .map_err(|_| ApiError::NotFound(NOTE_NOT_FOUND_MSG.to_string()))
}

/// List every note.
///
/// # Returns
/// - 200 OK with the array of notes
/// - 500 Internal Server Error if the store fails
pub async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let notes = state
        .store
        .list()
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch notes"))?;
    Ok(Json(notes))
}

/// Create a note from `{title, content}`.
///
/// # Returns
/// - 201 Created with the stored note
/// - 400 Bad Request if title or content is missing or blank
/// - 500 Internal Server Error if the store fails
pub async fn create_note(
    State(state): State<AppState>,
    body: Result<Json<NoteInput>, JsonRejection>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let draft = body_or_bad_request(body)?
        .validate()
        .map_err(|e| ApiError::from_store(e, "Failed to add note"))?;

    let note = state
        .store
        .create(draft)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to add note"))?;

    info!(subsystem = "api", op = "create", note_id = note.id, "Note created");
    Ok((StatusCode::CREATED, Json(note)))
}

/// Replace title and content of a note.
///
/// # Returns
/// - 200 OK with the updated note
/// - 400 Bad Request if title or content is missing or blank
/// - 404 Not Found if no note has this id
/// - 500 Internal Server Error if the store fails
pub async fn update_note(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
    body: Result<Json<NoteInput>, JsonRejection>,
) -> Result<Json<Note>, ApiError> {
    let id = id_or_not_found(id)?;
    let draft = body_or_bad_request(body)?
        .validate()
        .map_err(|e| ApiError::from_store(e, "Failed to update note"))?;

    let note = state
        .store
        .update(id, draft)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to update note"))?;

    info!(subsystem = "api", op = "update", note_id = id, "Note updated");
    Ok(Json(note))
}

/// Delete a note.
///
/// # Returns
/// - 204 No Content on success
/// - 404 Not Found if no note has this id
/// - 500 Internal Server Error if the store fails
pub async fn delete_note(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let id = id_or_not_found(id)?;
    state
        .store
        .delete(id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to delete note"))?;

    info!(subsystem = "api", op = "delete", note_id = id, "Note deleted");
    Ok(StatusCode::NO_CONTENT)
}
