//! # notes-client
//!
//! Client side of the notes service: a reqwest transport for the HTTP API
//! and a view controller that keeps local state in step with server
//! responses.

pub mod api;
pub mod error;
pub mod view;

pub use api::{NotesApi, NotesTransport, DEFAULT_API_URL};
pub use error::{ClientError, Result};
pub use notes_core::Note;
pub use view::NotesView;
