//! API route definitions

use super::handlers::{self, CorrelatorState};
use super::protein_handlers;
use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Create the API router
pub fn create_router(state: CorrelatorState) -> Router {
    // The frontend is served from another origin
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Health check
        .route("/health", get(handlers::health))
        // Proteins: batch correlation ingest + neighborhood query
        .route(
            "/api/proteins",
            get(protein_handlers::get_correlations).post(protein_handlers::submit_proteins),
        )
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
