//! HTTP handlers for notes-api.

pub mod notes;
pub mod system;

pub use notes::{create_note, delete_note, list_notes, update_note};
pub use system::{health_check, root, LIVENESS_MSG};
