//! Health check endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET / — returns a fixed success payload.
pub async fn check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "success" })
}
