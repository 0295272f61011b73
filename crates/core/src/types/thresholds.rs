//! Nutrition threshold filtering.

use serde::{Deserialize, Serialize};

use super::fruit::{Fruit, Nutrition};

/// Optional per-nutrient bounds for filtering fruit lists.
///
/// Every bound is independently optional; a bound that is not set imposes no
/// constraint. Max bounds are inclusive upper limits, min bounds inclusive
/// lower limits. A fruit passes when every supplied bound holds, so the
/// result is independent of the order the bounds are checked in.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutritionThresholds {
    pub max_calories: Option<f64>,
    pub min_calories: Option<f64>,
    pub max_fat: Option<f64>,
    pub min_fat: Option<f64>,
    pub max_sugar: Option<f64>,
    pub min_sugar: Option<f64>,
    pub max_carbohydrates: Option<f64>,
    pub min_carbohydrates: Option<f64>,
    pub max_protein: Option<f64>,
    pub min_protein: Option<f64>,
}

impl NutritionThresholds {
    /// Returns true when `nutrition` satisfies every supplied bound.
    #[must_use]
    pub fn matches(&self, nutrition: &Nutrition) -> bool {
        within(nutrition.calories, self.min_calories, self.max_calories)
            && within(nutrition.fat, self.min_fat, self.max_fat)
            && within(nutrition.sugar, self.min_sugar, self.max_sugar)
            && within(
                nutrition.carbohydrates,
                self.min_carbohydrates,
                self.max_carbohydrates,
            )
            && within(nutrition.protein, self.min_protein, self.max_protein)
    }

    /// Filter a fruit sequence down to the records satisfying the bounds.
    ///
    /// Pure function over the input slice; with no bounds set the input is
    /// returned unchanged in order.
    #[must_use]
    pub fn filter(&self, fruits: &[Fruit]) -> Vec<Fruit> {
        fruits
            .iter()
            .filter(|fruit| self.matches(&fruit.nutrition))
            .cloned()
            .collect()
    }

    /// True when no bound is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.max_calories.is_none()
            && self.min_calories.is_none()
            && self.max_fat.is_none()
            && self.min_fat.is_none()
            && self.max_sugar.is_none()
            && self.min_sugar.is_none()
            && self.max_carbohydrates.is_none()
            && self.min_carbohydrates.is_none()
            && self.max_protein.is_none()
            && self.min_protein.is_none()
    }
}

fn within(value: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.is_none_or(|m| value >= m) && max.is_none_or(|m| value <= m)
}
