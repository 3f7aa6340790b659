use serde::{Deserialize, Serialize};

/// A saved bubble-tea configuration.
///
/// `id` and `likes` are owned by the store: the former is assigned once at
/// creation, the latter only moves through the like operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeaRecipe {
    pub id: u64,
    pub name: String,
    pub base: String,
    pub toppings: Vec<String>,
    pub sweetness: i32,
    pub ice_level: i32,
    pub creator: String,
    pub likes: u64,
}

/// An unlocked badge for one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: u64,
    pub user_id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Opaque client timestamp, stored as sent.
    pub unlocked_at: String,
}

/// Record counts reported by a store.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StoreStats {
    pub recipes: usize,
    pub achievements: usize,
    pub likes: u64,
}
