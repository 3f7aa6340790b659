use axum::{
    Json,
    body::Bytes,
    extract::{Path, State, rejection::BytesRejection},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::{debug, warn};

use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::parse_new_recipe;

/// Ids that do not parse name no recipe, so they share the not-found path.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| {
        debug!("Unparseable recipe id '{}'", raw);
        ApiError::RecipeNotFound
    })
}

/// GET /api/recipes
pub async fn list_recipes(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.store.list_recipes())
}

/// GET /api/recipes/{id}
pub async fn get_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let recipe = state.store.get_recipe(id).ok_or_else(|| {
        debug!("Recipe {} not found", id);
        ApiError::RecipeNotFound
    })?;
    Ok(Json(recipe))
}

/// POST /api/recipes
pub async fn create_recipe(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // An unreadable body (over the size limit, broken stream) is as invalid
    // as one that fails the schema.
    let body = body.map_err(|e| {
        warn!("Unreadable recipe payload: {}", e);
        ApiError::InvalidRecipe
    })?;
    let new_recipe = parse_new_recipe(&body).map_err(|e| {
        warn!("Rejected recipe payload: {}", e);
        ApiError::InvalidRecipe
    })?;

    let recipe = state.store.create_recipe(new_recipe);
    Ok((StatusCode::CREATED, Json(recipe)))
}

/// POST /api/recipes/{id}/like
pub async fn like_recipe(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_id(&id)?;
    let recipe = state.store.like_recipe(id).map_err(|e| {
        debug!("Like rejected: {}", e);
        ApiError::from(e)
    })?;
    Ok(Json(recipe))
}
