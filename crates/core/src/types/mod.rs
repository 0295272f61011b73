//! Core types for Fruitdex.
//!
//! This module provides the domain vocabulary shared by the client and CLI.

pub mod family;
pub mod fruit;
pub mod language;
pub mod sort;
pub mod thresholds;

pub use family::FamilyFilter;
pub use fruit::{Fruit, Nutrition};
pub use language::Language;
pub use sort::SortKey;
pub use thresholds::NutritionThresholds;
