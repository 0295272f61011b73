//! Family restriction for fruit list views.

use serde::{Deserialize, Serialize};

use super::fruit::Fruit;

/// Sentinel value used where a family filter is expressed as a plain string
/// (query parameters, option lists).
pub const ALL_FAMILIES: &str = "all";

/// Restriction of a list view to one botanical family.
///
/// Matching is case-sensitive exact. This intentionally differs from the
/// free-text name filter, which is case-insensitive; the asymmetry is
/// observed upstream behavior and is preserved, not corrected.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FamilyFilter {
    #[default]
    All,
    Family(String),
}

impl FamilyFilter {
    /// Parse the string form used in option lists and query parameters.
    #[must_use]
    pub fn from_param(param: &str) -> Self {
        if param == ALL_FAMILIES {
            Self::All
        } else {
            Self::Family(param.to_string())
        }
    }

    #[must_use]
    pub fn as_param(&self) -> &str {
        match self {
            Self::All => ALL_FAMILIES,
            Self::Family(family) => family,
        }
    }

    /// Whether a fruit passes this restriction.
    #[must_use]
    pub fn matches(&self, fruit: &Fruit) -> bool {
        match self {
            Self::All => true,
            Self::Family(family) => fruit.family == *family,
        }
    }
}
