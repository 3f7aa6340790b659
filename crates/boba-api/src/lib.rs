pub mod achievements;
pub mod error;
pub mod meta;
pub mod recipes;
pub mod state;
pub mod validation;

use axum::{
    Router,
    routing::{get, post},
};

pub use state::{AppState, AppStateInner};

/// All API routes, without transport layers (CORS, tracing, body limits).
/// Unmatched paths and methods still answer with a JSON `message`.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/recipes", get(recipes::list_recipes).post(recipes::create_recipe))
        .route("/api/recipes/{id}", get(recipes::get_recipe))
        .route("/api/recipes/{id}/like", post(recipes::like_recipe))
        .route("/api/achievements", post(achievements::create_achievement))
        .route("/api/achievements/{user_id}", get(achievements::list_achievements))
        .route("/api/catalog", get(meta::get_catalog))
        .route("/health", get(meta::health))
        .fallback(meta::route_not_found)
        .method_not_allowed_fallback(meta::method_not_allowed)
        .with_state(state)
}
