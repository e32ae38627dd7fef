use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;

use handlers::{get_location, health};
use services::ghanapost::LookupService;

/// Build the relay router around a shared lookup service
pub fn app(lookup_service: Arc<LookupService>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/health", get(health))
        .route("/get-location", post(get_location))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(lookup_service)
}
