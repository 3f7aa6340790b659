//! Endpoints that do not touch individual records, plus the JSON fallbacks.

use axum::{Json, extract::State, response::IntoResponse};

use boba_types::api::HealthResponse;
use boba_types::catalog::CATALOG;

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/catalog
pub async fn get_catalog() -> impl IntoResponse {
    Json(CATALOG)
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok",
        stats: state.store.stats(),
    })
}

/// Any path no route claims.
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// A known path hit with a method it does not serve.
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
