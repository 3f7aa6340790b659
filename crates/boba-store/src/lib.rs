pub mod memory;

use boba_types::api::{NewAchievement, NewRecipe};
use boba_types::models::{Achievement, StoreStats, TeaRecipe};

pub use memory::MemoryStore;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("Recipe not found: {0}")]
    RecipeNotFound(u64),
}

/// Keeper of recipes and achievements.
///
/// Reads hand back owned snapshots; no caller ever holds a reference into
/// the store. Only `like_recipe` can fail.
pub trait RecipeStore: Send + Sync {
    /// All recipes, oldest first.
    fn list_recipes(&self) -> Vec<TeaRecipe>;

    fn get_recipe(&self, id: u64) -> Option<TeaRecipe>;

    /// Assigns the next id and stores the recipe with zero likes.
    fn create_recipe(&self, recipe: NewRecipe) -> TeaRecipe;

    /// Adds exactly one like and returns the updated record.
    fn like_recipe(&self, id: u64) -> Result<TeaRecipe, StoreError>;

    /// Achievements whose `user_id` equals `user_id`, oldest first.
    fn list_achievements(&self, user_id: &str) -> Vec<Achievement>;

    fn create_achievement(&self, achievement: NewAchievement) -> Achievement;

    fn stats(&self) -> StoreStats;
}
