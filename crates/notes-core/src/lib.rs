//! # notes-core
//!
//! Core types, traits, and error taxonomy for the notes service.
//!
//! This crate provides the note model, request validation, and the
//! [`NoteStore`] trait that the storage backends implement.

pub mod error;
pub mod models;
pub mod traits;

// Re-export commonly used types at crate root
pub use error::{Error, Result, REQUIRED_FIELDS_MSG};
pub use models::*;
pub use traits::*;
