use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;
use tracing::{debug, error};

use crate::{
    models::{ErrorResponse, LocationRequest},
    services::ghanapost::LookupService,
};

/// Relay one address lookup to the Ghana Post GPS service
///
/// This endpoint:
/// 1. Rejects requests with a missing or empty `address` (400, no outbound call)
/// 2. Forwards the address as a form-encoded POST to the upstream service
/// 3. Returns the upstream JSON verbatim on success, or a 500 with the
///    failure description otherwise
pub async fn get_location(
    State(lookup_service): State<Arc<LookupService>>,
    Json(request): Json<LocationRequest>,
) -> Response {
    let address = match request.address() {
        Some(address) => address,
        None => {
            debug!("Rejecting lookup request with missing or empty address");
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::address_required()),
            )
                .into_response();
        }
    };

    match lookup_service.lookup(address).await {
        Ok(document) => (StatusCode::OK, Json(document)).into_response(),
        Err(e) => {
            error!("Address lookup failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::lookup_failed(e)),
            )
                .into_response()
        }
    }
}
