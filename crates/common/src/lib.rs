//! Shared types for the field projector service.

pub mod types;

pub use types::{DocumentId, InvalidDocumentId};
