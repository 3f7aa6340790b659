//! Static menu the client renders its controls from.
//!
//! Recipes and achievements only carry the ids listed here as plain strings;
//! nothing in the store checks them against this table.

use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize)]
pub struct TeaBase {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Topping {
    pub id: &'static str,
    pub name: &'static str,
    pub color: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AchievementKind {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// A named pairing of bases and toppings the client celebrates.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SpecialCombination {
    pub name: &'static str,
    pub bases: &'static [&'static str],
    pub toppings: &'static [&'static str],
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    pub tea_bases: &'static [TeaBase],
    pub toppings: &'static [Topping],
    pub achievements: &'static [AchievementKind],
    pub special_combinations: &'static [SpecialCombination],
    pub sweetness_levels: &'static [u8],
    pub ice_levels: &'static [u8],
}

pub const TEA_BASES: &[TeaBase] = &[
    TeaBase { id: "black", name: "Black Tea", color: "#6B4423" },
    TeaBase { id: "green", name: "Green Tea", color: "#90A955" },
    TeaBase { id: "oolong", name: "Oolong Tea", color: "#D4A373" },
    TeaBase { id: "thai", name: "Thai Tea", color: "#FB8B24" },
    TeaBase { id: "taro", name: "Taro", color: "#9B6B9E" },
    TeaBase { id: "matcha", name: "Matcha", color: "#4A7B3F" },
    TeaBase { id: "strawberry", name: "Strawberry", color: "#FF97A1" },
    TeaBase { id: "mango", name: "Mango", color: "#FFB344" },
];

pub const TOPPINGS: &[Topping] = &[
    Topping { id: "boba", name: "Boba Pearls", color: "#3A3238" },
    Topping { id: "jelly", name: "Grass Jelly", color: "#2F2F2F" },
    Topping { id: "pudding", name: "Pudding", color: "#FFB344" },
    Topping { id: "redbean", name: "Red Bean", color: "#9B2226" },
    Topping { id: "lychee", name: "Lychee Jelly", color: "#F5F5F5" },
    Topping { id: "rainbow", name: "Rainbow Jelly", color: "#FF97A1" },
    Topping { id: "crystal", name: "Crystal Boba", color: "#D4E7F1" },
    Topping { id: "popping", name: "Popping Boba", color: "#FFD93D" },
];

pub const ACHIEVEMENTS: &[AchievementKind] = &[
    AchievementKind { id: "first_drink", name: "First Creation", description: "Create your first bubble tea" },
    AchievementKind { id: "experimenter", name: "Experimenter", description: "Try all tea bases" },
    AchievementKind { id: "popular", name: "Popular Creation", description: "Get 5 likes on your recipe" },
    AchievementKind { id: "master", name: "Boba Master", description: "Create 10 unique combinations" },
    AchievementKind { id: "mixologist", name: "Tea Mixologist", description: "Create a special combination" },
    AchievementKind { id: "collector", name: "Topping Collector", description: "Use all available toppings" },
];

pub const SPECIAL_COMBINATIONS: &[SpecialCombination] = &[
    SpecialCombination {
        name: "Galaxy Dream",
        bases: &["black", "taro"],
        toppings: &["crystal", "popping"],
        description: "A mystical blend that sparkles like the night sky!",
    },
    SpecialCombination {
        name: "Tropical Paradise",
        bases: &["green", "mango"],
        toppings: &["rainbow", "lychee"],
        description: "A refreshing mix that takes you to a beach paradise!",
    },
];

pub const SWEETNESS_LEVELS: &[u8] = &[0, 25, 50, 75, 100];
pub const ICE_LEVELS: &[u8] = &[0, 30, 50, 70, 100];

pub const CATALOG: Catalog = Catalog {
    tea_bases: TEA_BASES,
    toppings: TOPPINGS,
    achievements: ACHIEVEMENTS,
    special_combinations: SPECIAL_COMBINATIONS,
    sweetness_levels: SWEETNESS_LEVELS,
    ice_levels: ICE_LEVELS,
};
