//! Bilingual UI string lookup.
//!
//! Strings are addressed by stable dotted paths (e.g. `home.familyAll`) so
//! callers never embed display text. A missing key falls back to the key
//! itself - visibly wrong in the UI, but never a panic or an error.

use fruitdex_core::Language;

/// `(key, english, german)` rows of the string table.
const STRINGS: &[(&str, &str, &str)] = &[
    ("home.title", "Fruitdex", "Fruitdex"),
    ("home.searchPlaceholder", "Search fruits...", "Früchte suchen..."),
    ("home.familyAll", "All families", "Alle Familien"),
    ("home.sortName", "Name (A-Z)", "Name (A-Z)"),
    ("home.sortCalories", "Calories (low to high)", "Kalorien (aufsteigend)"),
    ("home.sortProtein", "Protein (high to low)", "Protein (absteigend)"),
    ("home.sortSugar", "Sugar (low to high)", "Zucker (aufsteigend)"),
    ("home.resultCount", "fruits shown", "Früchte angezeigt"),
    ("detail.family", "Family", "Familie"),
    ("detail.order", "Order", "Ordnung"),
    ("detail.genus", "Genus", "Gattung"),
    ("detail.calories", "Calories", "Kalorien"),
    ("detail.fat", "Fat", "Fett"),
    ("detail.sugar", "Sugar", "Zucker"),
    ("detail.carbohydrates", "Carbohydrates", "Kohlenhydrate"),
    ("detail.protein", "Protein", "Protein"),
    ("detail.nutrition", "Nutrition", "Nährwerte"),
    ("detail.per100g", "per 100 g", "pro 100 g"),
    ("search.notFound", "No fruit found for", "Keine Frucht gefunden für"),
    ("search.queryRequired", "Please enter a fruit name", "Bitte einen Fruchtnamen eingeben"),
    ("error.network", "Network error - please try again", "Netzwerkfehler - bitte erneut versuchen"),
    ("error.server", "The fruit service reported an error", "Der Fruchtdienst meldete einen Fehler"),
    ("common.loading", "Loading...", "Lädt..."),
    ("common.retry", "Retry", "Erneut versuchen"),
];

/// Look up a UI string by its dotted path.
///
/// Unknown keys are returned verbatim.
#[must_use]
pub fn translate<'a>(lang: Language, key: &'a str) -> &'a str {
    STRINGS
        .iter()
        .find(|(k, _, _)| *k == key)
        .map_or(key, |(_, en, de)| match lang {
            Language::En => *en,
            Language::De => *de,
        })
}
