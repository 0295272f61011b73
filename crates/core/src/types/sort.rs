//! Sort keys for fruit list views.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::fruit::Fruit;

/// The axis a fruit list is ordered by.
///
/// Protein is the one descending axis ("most protein first"); everything
/// else sorts ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Calories,
    Protein,
    Sugar,
}

impl SortKey {
    /// All keys, in the order they are offered to the user.
    pub const ALL: [Self; 4] = [Self::Name, Self::Calories, Self::Protein, Self::Sugar];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Calories => "calories",
            Self::Protein => "protein",
            Self::Sugar => "sugar",
        }
    }

    /// Parse a sort parameter. Unrecognized values yield `None`, which the
    /// view layer treats as "leave the sequence as-is".
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "name" => Some(Self::Name),
            "calories" => Some(Self::Calories),
            "protein" => Some(Self::Protein),
            "sugar" => Some(Self::Sugar),
            _ => None,
        }
    }

    /// Compare two fruits along this axis.
    #[must_use]
    pub fn compare(self, a: &Fruit, b: &Fruit) -> Ordering {
        match self {
            // Case-folded comparison stands in for locale collation; the
            // data set is plain ASCII botanical names.
            Self::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            Self::Calories => a.nutrition.calories.total_cmp(&b.nutrition.calories),
            Self::Protein => b.nutrition.protein.total_cmp(&a.nutrition.protein),
            Self::Sugar => a.nutrition.sugar.total_cmp(&b.nutrition.sugar),
        }
    }

    /// Sort a fruit sequence in place along this axis. Stable, so records
    /// that compare equal keep their relative order.
    pub fn apply(self, fruits: &mut [Fruit]) {
        fruits.sort_by(|a, b| self.compare(a, b));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::fruit::Nutrition;

    fn fruit(name: &str, calories: f64, protein: f64, sugar: f64) -> Fruit {
        Fruit {
            id: 0,
            name: name.to_string(),
            family: String::new(),
            order: String::new(),
            genus: String::new(),
            nutrition: Nutrition {
                calories,
                fat: 0.0,
                sugar,
                carbohydrates: 0.0,
                protein,
            },
        }
    }

    fn names(fruits: &[Fruit]) -> Vec<&str> {
        fruits.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn parse_round_trips_known_keys() {
        for key in SortKey::ALL {
            assert_eq!(SortKey::parse(key.as_str()), Some(key));
        }
        assert_eq!(SortKey::parse("vitamin-c"), None);
        assert_eq!(SortKey::parse(""), None);
    }

    #[test]
    fn name_sorts_ascending_case_folded() {
        let mut fruits = vec![
            fruit("banana", 96.0, 1.0, 17.2),
            fruit("Apple", 52.0, 0.3, 10.3),
            fruit("Cherry", 50.0, 1.0, 8.0),
        ];
        SortKey::Name.apply(&mut fruits);
        assert_eq!(names(&fruits), ["Apple", "banana", "Cherry"]);
    }

    #[test]
    fn calories_and_sugar_sort_ascending() {
        let mut fruits = vec![
            fruit("Banana", 96.0, 1.0, 17.2),
            fruit("Apple", 52.0, 0.3, 10.3),
        ];
        SortKey::Calories.apply(&mut fruits);
        assert_eq!(names(&fruits), ["Apple", "Banana"]);

        let mut fruits = vec![
            fruit("Banana", 96.0, 1.0, 17.2),
            fruit("Apple", 52.0, 0.3, 10.3),
        ];
        SortKey::Sugar.apply(&mut fruits);
        assert_eq!(names(&fruits), ["Apple", "Banana"]);
    }

    #[test]
    fn protein_sorts_descending() {
        let mut fruits = vec![
            fruit("Apple", 52.0, 0.3, 10.3),
            fruit("Banana", 96.0, 1.0, 17.2),
        ];
        SortKey::Protein.apply(&mut fruits);
        assert_eq!(names(&fruits), ["Banana", "Apple"]);
    }

    #[test]
    fn sorting_is_idempotent() {
        for key in SortKey::ALL {
            let mut fruits = vec![
                fruit("Cherry", 50.0, 1.0, 8.0),
                fruit("Apple", 52.0, 0.3, 10.3),
                fruit("Banana", 96.0, 1.0, 17.2),
            ];
            key.apply(&mut fruits);
            let once = fruits.clone();
            key.apply(&mut fruits);
            assert_eq!(fruits, once, "re-sorting by {key:?} changed the order");
        }
    }
}
