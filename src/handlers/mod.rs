pub mod get_location;

use axum::{response::IntoResponse, Json};

pub use get_location::get_location;

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "location-relay",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
