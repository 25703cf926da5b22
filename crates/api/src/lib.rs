//! HTTP API server for projecting fields out of stored documents.
//!
//! Exposes a health probe and two projection endpoints, one per document
//! section, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::get;
use document_store::{DocumentStore, Section};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use routes::fields::AppState;

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<S: DocumentStore + 'static>(
    state: Arc<AppState<S>>,
    metrics_handle: PrometheusHandle,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/", get(routes::health::check))
        .route(
            "/get_fields_assignment",
            routes::fields::route::<S>(Section::FinalAssignment),
        )
        .route(
            "/get_fields_release",
            routes::fields::route::<S>(Section::FinalRelease),
        )
        .with_state(state)
        .merge(metrics_router)
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
}

/// Fully open cross-origin policy with credentials.
///
/// Wildcards cannot be combined with credentials, so origin, method and
/// headers are mirrored from the request instead.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::mirror_request())
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Wraps a store in shared application state.
pub fn create_state<S: DocumentStore>(store: S) -> Arc<AppState<S>> {
    Arc::new(AppState { store })
}
