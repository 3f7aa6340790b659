//! Structural checks on create payloads, kept apart from the store and the
//! router so they can be exercised on raw bytes.

use serde::de::DeserializeOwned;
use serde_json::Value;

use boba_types::api::{NewAchievement, NewRecipe};

#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("body is not valid JSON: {0}")]
    Malformed(#[source] serde_json::Error),

    #[error("body is not a JSON object")]
    NotAnObject,

    #[error("body does not match schema: {0}")]
    Schema(#[source] serde_json::Error),
}

pub fn parse_new_recipe(body: &[u8]) -> Result<NewRecipe, ValidationError> {
    parse_object(body)
}

pub fn parse_new_achievement(body: &[u8]) -> Result<NewAchievement, ValidationError> {
    parse_object(body)
}

/// Unknown keys are dropped, so a client cannot smuggle in `id` or `likes`.
fn parse_object<T: DeserializeOwned>(body: &[u8]) -> Result<T, ValidationError> {
    let value: Value = serde_json::from_slice(body).map_err(ValidationError::Malformed)?;

    // serde would also accept a positional array for a struct
    if !value.is_object() {
        return Err(ValidationError::NotAnObject);
    }

    serde_json::from_value(value).map_err(ValidationError::Schema)
}
