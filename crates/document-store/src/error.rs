use thiserror::Error;

use crate::{DocumentId, Section};

/// Errors that can occur when reading documents.
#[derive(Debug, Error)]
pub enum DocumentStoreError {
    /// No document exists with the given identifier.
    #[error("Document not found: {0}")]
    NotFound(DocumentId),

    /// The nested section exists but is not an object.
    #[error("Section {section} of document {id} is {found}, expected an object")]
    MalformedSection {
        id: DocumentId,
        section: Section,
        found: &'static str,
    },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] mongodb::error::Error),

    /// The stored record could not be represented as JSON.
    #[error("Conversion error: {0}")]
    Conversion(String),
}

/// Result type for document store operations.
pub type Result<T> = std::result::Result<T, DocumentStoreError>;
