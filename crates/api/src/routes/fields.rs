//! Field projection endpoints.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::routing::{MethodRouter, post};
use document_store::{DocumentId, DocumentStore, DocumentStoreExt, Section};
use serde::Deserialize;
use serde_json::Value;

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<S: DocumentStore> {
    pub store: S,
}

#[derive(Debug, Deserialize)]
pub struct FieldsRequest {
    pub object_id: String,
    pub fields: Vec<String>,
}

/// Requested field name to stored value, or null when absent.
pub type FieldsResponse = BTreeMap<String, Value>;

/// Builds the POST route that projects fields out of `section`.
pub fn route<S: DocumentStore + 'static>(section: Section) -> MethodRouter<Arc<AppState<S>>> {
    post(
        move |state: State<Arc<AppState<S>>>, req: Json<FieldsRequest>| {
            project::<S>(section, state, req)
        },
    )
}

/// POST /get_fields_assignment, POST /get_fields_release
#[tracing::instrument(skip_all, fields(section = %section))]
pub async fn project<S: DocumentStore + 'static>(
    section: Section,
    State(state): State<Arc<AppState<S>>>,
    Json(req): Json<FieldsRequest>,
) -> Result<Json<FieldsResponse>, ApiError> {
    let result = project_fields(&state.store, section, &req).await;

    let outcome = match &result {
        Ok(_) => "ok",
        Err(e) => e.outcome(),
    };
    metrics::counter!(
        "field_projection_requests_total",
        "section" => section.key(),
        "outcome" => outcome
    )
    .increment(1);

    result.map(Json)
}

async fn project_fields<S: DocumentStore>(
    store: &S,
    section: Section,
    req: &FieldsRequest,
) -> Result<FieldsResponse, ApiError> {
    let id = DocumentId::parse(&req.object_id)?;

    let result = store
        .project_fields(id, section, &req.fields)
        .await
        .map_err(|e| ApiError::from_store(e, &req.object_id));

    if let Err(ApiError::NotFound { object_id }) = &result {
        let location = store.location();
        tracing::warn!(
            %object_id,
            database = %location.database,
            collection = %location.collection,
            "no document found"
        );
    }

    result
}
