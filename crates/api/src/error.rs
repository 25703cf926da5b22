//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use document_store::{DocumentStoreError, InvalidDocumentId, Section};
use serde_json::json;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The object id is not a well-formed identifier.
    InvalidIdentifier,
    /// No document has the requested id.
    NotFound { object_id: String },
    /// The requested section exists but is not an object.
    MalformedSection { object_id: String, section: Section },
    /// The storage backend could not serve the read.
    StorageUnavailable(String),
}

impl ApiError {
    /// Maps a store error for the request that carried `object_id`.
    ///
    /// The caller's original string is echoed back, not the normalized id.
    pub fn from_store(err: DocumentStoreError, object_id: &str) -> Self {
        match err {
            DocumentStoreError::NotFound(_) => ApiError::NotFound {
                object_id: object_id.to_string(),
            },
            DocumentStoreError::MalformedSection { section, .. } => ApiError::MalformedSection {
                object_id: object_id.to_string(),
                section,
            },
            DocumentStoreError::Database(e) => ApiError::StorageUnavailable(e.to_string()),
            DocumentStoreError::Conversion(msg) => ApiError::StorageUnavailable(msg),
        }
    }

    /// Short label used for the `outcome` metric dimension.
    pub fn outcome(&self) -> &'static str {
        match self {
            ApiError::InvalidIdentifier => "invalid_id",
            ApiError::NotFound { .. } => "not_found",
            ApiError::MalformedSection { .. } => "malformed",
            ApiError::StorageUnavailable(_) => "unavailable",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidIdentifier => (
                StatusCode::BAD_REQUEST,
                json!({ "detail": "Invalid ObjectId format" }),
            ),
            ApiError::NotFound { object_id } => (
                StatusCode::NOT_FOUND,
                json!({ "error": "Document not found", "object_id": object_id }),
            ),
            ApiError::MalformedSection { object_id, section } => {
                tracing::error!(%object_id, %section, "section is not an object");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "Malformed document",
                        "object_id": object_id,
                        "section": section.key(),
                    }),
                )
            }
            ApiError::StorageUnavailable(msg) => {
                tracing::error!(error = %msg, "storage unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    json!({ "error": "Storage unavailable" }),
                )
            }
        };

        (status, axum::Json(body)).into_response()
    }
}

impl From<InvalidDocumentId> for ApiError {
    fn from(_: InvalidDocumentId) -> Self {
        ApiError::InvalidIdentifier
    }
}
