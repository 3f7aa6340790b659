use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, info};

use boba_types::api::{NewAchievement, NewRecipe};
use boba_types::models::{Achievement, StoreStats, TeaRecipe};

use crate::{RecipeStore, StoreError};

/// Volatile store; everything is gone when the process exits.
///
/// Ids only grow, so the `BTreeMap` key order is insertion order.
pub struct MemoryStore {
    state: Mutex<State>,
}

struct State {
    recipes: BTreeMap<u64, TeaRecipe>,
    achievements: BTreeMap<u64, Achievement>,
    next_recipe_id: u64,
    next_achievement_id: u64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                recipes: BTreeMap::new(),
                achievements: BTreeMap::new(),
                next_recipe_id: 1,
                next_achievement_id: 1,
            }),
        }
    }

    fn with_state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&mut State) -> T,
    {
        // Every mutation completes before anything that could panic, so a
        // poisoned lock still guards consistent maps.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut state)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecipeStore for MemoryStore {
    fn list_recipes(&self) -> Vec<TeaRecipe> {
        self.with_state(|s| s.recipes.values().cloned().collect())
    }

    fn get_recipe(&self, id: u64) -> Option<TeaRecipe> {
        self.with_state(|s| s.recipes.get(&id).cloned())
    }

    fn create_recipe(&self, recipe: NewRecipe) -> TeaRecipe {
        let recipe = self.with_state(|s| {
            let id = s.next_recipe_id;
            s.next_recipe_id += 1;

            let record = TeaRecipe {
                id,
                name: recipe.name,
                base: recipe.base,
                toppings: recipe.toppings,
                sweetness: recipe.sweetness,
                ice_level: recipe.ice_level,
                creator: recipe.creator,
                likes: 0,
            };
            s.recipes.insert(id, record.clone());
            record
        });

        info!("Recipe {} created by {}", recipe.id, recipe.creator);
        recipe
    }

    fn like_recipe(&self, id: u64) -> Result<TeaRecipe, StoreError> {
        // Read and write share one critical section; concurrent likes all land.
        let recipe = self.with_state(|s| -> Result<TeaRecipe, StoreError> {
            let recipe = s.recipes.get_mut(&id).ok_or(StoreError::RecipeNotFound(id))?;
            recipe.likes += 1;
            Ok(recipe.clone())
        })?;

        debug!("Recipe {} now has {} likes", id, recipe.likes);
        Ok(recipe)
    }

    fn list_achievements(&self, user_id: &str) -> Vec<Achievement> {
        self.with_state(|s| {
            s.achievements
                .values()
                .filter(|a| a.user_id == user_id)
                .cloned()
                .collect()
        })
    }

    fn create_achievement(&self, achievement: NewAchievement) -> Achievement {
        let achievement = self.with_state(|s| {
            let id = s.next_achievement_id;
            s.next_achievement_id += 1;

            let record = Achievement {
                id,
                user_id: achievement.user_id,
                kind: achievement.kind,
                unlocked_at: achievement.unlocked_at,
            };
            s.achievements.insert(id, record.clone());
            record
        });

        info!(
            "Achievement {} ({}) unlocked for {}",
            achievement.id, achievement.kind, achievement.user_id
        );
        achievement
    }

    fn stats(&self) -> StoreStats {
        self.with_state(|s| StoreStats {
            recipes: s.recipes.len(),
            achievements: s.achievements.len(),
            likes: s.recipes.values().map(|r| r.likes).sum(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    fn milk_tea(creator: &str) -> NewRecipe {
        NewRecipe {
            name: "Milk Tea".into(),
            base: "black".into(),
            toppings: vec!["boba".into()],
            sweetness: 50,
            ice_level: 50,
            creator: creator.into(),
        }
    }

    fn badge(user_id: &str, kind: &str) -> NewAchievement {
        NewAchievement {
            user_id: user_id.into(),
            kind: kind.into(),
            unlocked_at: "2024-03-01T12:00:00Z".into(),
        }
    }

    #[test]
    fn ids_increase_from_one() {
        let store = MemoryStore::new();
        let ids: Vec<u64> = (0..5).map(|_| store.create_recipe(milk_tea("u1")).id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn new_recipe_starts_without_likes() {
        let store = MemoryStore::new();
        let recipe = store.create_recipe(milk_tea("u1"));
        assert_eq!(recipe.likes, 0);
        assert_eq!(recipe.name, "Milk Tea");
        assert_eq!(recipe.toppings, vec!["boba".to_string()]);
        assert_eq!(store.get_recipe(recipe.id), Some(recipe));
    }

    #[test]
    fn empty_and_duplicate_toppings_are_kept() {
        let store = MemoryStore::new();
        let mut plain = milk_tea("u1");
        plain.toppings.clear();
        let mut doubled = milk_tea("u1");
        doubled.toppings = vec!["boba".into(), "boba".into()];

        assert!(store.create_recipe(plain).toppings.is_empty());
        assert_eq!(store.create_recipe(doubled).toppings.len(), 2);
    }

    #[test]
    fn list_keeps_insertion_order() {
        let store = MemoryStore::new();
        for creator in ["a", "b", "c"] {
            store.create_recipe(milk_tea(creator));
        }
        let creators: Vec<String> = store.list_recipes().into_iter().map(|r| r.creator).collect();
        assert_eq!(creators, vec!["a", "b", "c"]);
    }

    #[test]
    fn get_missing_recipe_is_none() {
        let store = MemoryStore::new();
        assert_eq!(store.get_recipe(1), None);
    }

    #[test]
    fn like_increments_by_one() {
        let store = MemoryStore::new();
        let created = store.create_recipe(milk_tea("u1"));

        let liked = store.like_recipe(created.id).unwrap();
        assert_eq!(liked.likes, 1);
        assert_eq!(TeaRecipe { likes: 0, ..liked.clone() }, created);

        let liked = store.like_recipe(created.id).unwrap();
        assert_eq!(liked.likes, 2);
        assert_eq!(store.get_recipe(created.id).unwrap().likes, 2);
    }

    #[test]
    fn like_missing_recipe_changes_nothing() {
        let store = MemoryStore::new();
        let created = store.create_recipe(milk_tea("u1"));

        assert_eq!(store.like_recipe(999), Err(StoreError::RecipeNotFound(999)));
        assert_eq!(store.list_recipes(), vec![created]);
    }

    #[test]
    fn concurrent_likes_are_all_counted() {
        let store = Arc::new(MemoryStore::new());
        let id = store.create_recipe(milk_tea("u1")).id;

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    for _ in 0..250 {
                        store.like_recipe(id).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(store.get_recipe(id).unwrap().likes, 2000);
    }

    #[test]
    fn achievements_filter_by_exact_user() {
        let store = MemoryStore::new();
        store.create_achievement(badge("u1", "first_drink"));
        store.create_achievement(badge("u2", "popular"));
        store.create_achievement(badge("u1", "master"));
        store.create_achievement(badge("U1", "collector"));

        let kinds: Vec<String> = store.list_achievements("u1").into_iter().map(|a| a.kind).collect();
        assert_eq!(kinds, vec!["first_drink", "master"]);
        assert!(store.list_achievements("nobody").is_empty());
    }

    #[test]
    fn achievement_ids_are_independent_of_recipes() {
        let store = MemoryStore::new();
        store.create_recipe(milk_tea("u1"));
        store.create_recipe(milk_tea("u1"));

        let first = store.create_achievement(badge("u1", "first_drink"));
        let second = store.create_achievement(badge("u1", "master"));
        assert_eq!((first.id, second.id), (1, 2));
        assert_eq!(first.unlocked_at, "2024-03-01T12:00:00Z");
    }

    #[test]
    fn stats_count_records_and_likes() {
        let store = MemoryStore::new();
        let a = store.create_recipe(milk_tea("u1")).id;
        let b = store.create_recipe(milk_tea("u2")).id;
        store.like_recipe(a).unwrap();
        store.like_recipe(b).unwrap();
        store.like_recipe(b).unwrap();
        store.create_achievement(badge("u1", "first_drink"));

        assert_eq!(
            store.stats(),
            StoreStats { recipes: 2, achievements: 1, likes: 3 }
        );
    }
}
