use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use boba_store::StoreError;
use boba_types::api::MessageResponse;

/// Failures a handler reports to the client. The display text is the exact
/// `message` the client receives.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid recipe data")]
    InvalidRecipe,

    #[error("Invalid achievement data")]
    InvalidAchievement,

    #[error("Recipe not found")]
    RecipeNotFound,

    #[error("Not found")]
    RouteNotFound,

    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidRecipe | ApiError::InvalidAchievement => StatusCode::BAD_REQUEST,
            ApiError::RecipeNotFound | ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
        }
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::RecipeNotFound(_) => ApiError::RecipeNotFound,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = MessageResponse { message: self.to_string() };
        (self.status(), Json(body)).into_response()
    }
}
