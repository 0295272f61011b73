//! Fruit records as returned by the nutrition API.

use serde::{Deserialize, Serialize};

/// A single fruit with taxonomy and nutrition data.
///
/// Mirrors the API wire shape one-to-one. The `id` is the only identity the
/// upstream service provides; names are free text and not unique-enforced,
/// and records are taken as-is without validation or deduplication.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u64,
    /// Display name, free text.
    pub name: String,
    /// Botanical family (e.g. "Rosaceae").
    pub family: String,
    /// Botanical order (e.g. "Rosales").
    pub order: String,
    /// Botanical genus (e.g. "Malus").
    pub genus: String,
    /// The upstream API names this field "nutritions".
    #[serde(rename = "nutritions")]
    pub nutrition: Nutrition,
}

/// Nutrient quantities per 100 g edible portion.
///
/// All values are grams, except `calories` which is kcal. The API only
/// returns non-negative values; nothing here enforces that.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub fat: f64,
    pub sugar: f64,
    pub carbohydrates: f64,
    pub protein: f64,
}
