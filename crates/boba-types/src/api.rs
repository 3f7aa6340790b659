use serde::{Deserialize, Serialize};

use crate::models::StoreStats;

// -- Recipes --

/// Fields a client supplies when saving a recipe. Any `id` or `likes` keys in
/// the payload are dropped during deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecipe {
    pub name: String,
    pub base: String,
    pub toppings: Vec<String>,
    pub sweetness: i32,
    pub ice_level: i32,
    pub creator: String,
}

// -- Achievements --

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAchievement {
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub unlocked_at: String,
}

// -- Responses --

/// Body of every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    #[serde(flatten)]
    pub stats: StoreStats,
}
