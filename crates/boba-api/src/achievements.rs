use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::warn;

use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::parse_new_achievement;

/// GET /api/achievements/{user_id}. An unknown user simply has none.
pub async fn list_achievements(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> impl IntoResponse {
    Json(state.store.list_achievements(&user_id))
}

/// POST /api/achievements
pub async fn create_achievement(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let body = body.map_err(|e| {
        warn!("Unreadable achievement payload: {}", e);
        ApiError::InvalidAchievement
    })?;
    let new_achievement = parse_new_achievement(&body).map_err(|e| {
        warn!("Rejected achievement payload: {}", e);
        ApiError::InvalidAchievement
    })?;

    let achievement = state.store.create_achievement(new_achievement);
    Ok((StatusCode::CREATED, Json(achievement)))
}
