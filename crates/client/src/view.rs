//! Derived list views over the cached collection.
//!
//! Everything here is pure derivation: the view structs hold parameters in
//! watch channels and recompute their output from the latest catalog
//! snapshot on demand. Nothing is stored independently, and none of the
//! derivations can fail - an unknown sort key passes the sequence through
//! unchanged and an unmatched filter yields an empty result.

use tokio::sync::watch;

use fruitdex_core::{FamilyFilter, Fruit, Language, SortKey};

use crate::catalog::{CatalogService, CatalogStatus, distinct_families_of};
use crate::i18n;

/// Live-updating free-text filter over the cached collection.
///
/// Matches the fruit name case-insensitively against the query substring;
/// an empty query yields the full collection unchanged in order.
pub struct FilteredView {
    status: watch::Receiver<CatalogStatus>,
    query_tx: watch::Sender<String>,
    query_rx: watch::Receiver<String>,
}

impl FilteredView {
    #[must_use]
    pub fn new(catalog: &CatalogService) -> Self {
        let (query_tx, query_rx) = watch::channel(String::new());
        Self {
            status: catalog.subscribe(),
            query_tx,
            query_rx,
        }
    }

    pub fn set_query(&self, query: impl Into<String>) {
        // send() cannot fail while we hold a receiver ourselves.
        let _ = self.query_tx.send(query.into());
    }

    #[must_use]
    pub fn query(&self) -> String {
        self.query_rx.borrow().clone()
    }

    /// Recompute the filtered subsequence from the current snapshot.
    #[must_use]
    pub fn current(&self) -> Vec<Fruit> {
        let snapshot = self.status.borrow().fruits.clone();
        filter_by_name(&snapshot, &self.query_rx.borrow())
    }

    /// Wait until either the query or the underlying collection changes.
    pub async fn changed(&mut self) {
        tokio::select! {
            res = self.status.changed() => { let _ = res; }
            res = self.query_rx.changed() => { let _ = res; }
        }
    }
}

/// Case-insensitive substring filter on the fruit name.
#[must_use]
pub fn filter_by_name(fruits: &[Fruit], query: &str) -> Vec<Fruit> {
    if query.is_empty() {
        return fruits.to_vec();
    }
    let needle = query.to_lowercase();
    fruits
        .iter()
        .filter(|fruit| fruit.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// User-chosen parameters of one list view.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    /// Free-text name filter, case-insensitive.
    pub query: String,
    /// Family restriction, case-sensitive exact (intentional asymmetry with
    /// the text filter).
    pub family: FamilyFilter,
    /// Active sort axis; `None` leaves the sequence as-is.
    pub sort: Option<SortKey>,
}

/// Presentation state for a fruit list: filter/sort parameters plus the
/// derived, ordered view and its counts.
pub struct FruitListState {
    status: watch::Receiver<CatalogStatus>,
    params_tx: watch::Sender<ListParams>,
    params_rx: watch::Receiver<ListParams>,
}

impl FruitListState {
    #[must_use]
    pub fn new(catalog: &CatalogService) -> Self {
        let (params_tx, params_rx) = watch::channel(ListParams::default());
        Self {
            status: catalog.subscribe(),
            params_tx,
            params_rx,
        }
    }

    #[must_use]
    pub fn params(&self) -> ListParams {
        self.params_rx.borrow().clone()
    }

    pub fn set_query(&self, query: impl Into<String>) {
        let query = query.into();
        self.params_tx.send_modify(|params| params.query = query);
    }

    pub fn set_family(&self, family: FamilyFilter) {
        self.params_tx.send_modify(|params| params.family = family);
    }

    pub fn set_sort(&self, sort: Option<SortKey>) {
        self.params_tx.send_modify(|params| params.sort = sort);
    }

    /// Set the sort axis from its string form; unknown keys clear it, which
    /// makes the view a stable pass-through.
    pub fn set_sort_param(&self, param: &str) {
        self.set_sort(SortKey::parse(param));
    }

    /// Derive the final ordered, filtered sequence:
    /// text filter, then family restriction, then sort.
    #[must_use]
    pub fn view(&self) -> Vec<Fruit> {
        let snapshot = self.status.borrow().fruits.clone();
        let params = self.params_rx.borrow().clone();

        let mut fruits = filter_by_name(&snapshot, &params.query);
        fruits.retain(|fruit| params.family.matches(fruit));
        if let Some(sort) = params.sort {
            sort.apply(&mut fruits);
        }
        fruits
    }

    /// Size of the unfiltered cached collection.
    #[must_use]
    pub fn total_count(&self) -> usize {
        self.status.borrow().fruits.len()
    }

    /// Size of the derived view.
    #[must_use]
    pub fn filtered_count(&self) -> usize {
        self.view().len()
    }

    /// `(label, value)` option pairs for the family selector: the fixed
    /// "all families" entry first, then every distinct family mapped 1:1.
    /// Regenerates with the collection and the language.
    #[must_use]
    pub fn family_options(&self, lang: Language) -> Vec<(String, String)> {
        let snapshot = self.status.borrow().fruits.clone();
        let mut options = vec![(
            i18n::translate(lang, "home.familyAll").to_string(),
            FamilyFilter::All.as_param().to_string(),
        )];
        options.extend(
            distinct_families_of(&snapshot)
                .into_iter()
                .map(|family| (family.clone(), family)),
        );
        options
    }

    /// `(label, value)` option pairs for the sort selector.
    #[must_use]
    pub fn sort_options(lang: Language) -> Vec<(String, String)> {
        SortKey::ALL
            .into_iter()
            .map(|key| {
                let label = match key {
                    SortKey::Name => i18n::translate(lang, "home.sortName"),
                    SortKey::Calories => i18n::translate(lang, "home.sortCalories"),
                    SortKey::Protein => i18n::translate(lang, "home.sortProtein"),
                    SortKey::Sugar => i18n::translate(lang, "home.sortSugar"),
                };
                (label.to_string(), key.as_str().to_string())
            })
            .collect()
    }

    /// Wait until either the parameters or the underlying collection change.
    pub async fn changed(&mut self) {
        tokio::select! {
            res = self.status.changed() => { let _ = res; }
            res = self.params_rx.changed() => { let _ = res; }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fruitdex_core::Nutrition;

    fn fruit(name: &str) -> Fruit {
        Fruit {
            id: 0,
            name: name.to_string(),
            family: String::new(),
            order: String::new(),
            genus: String::new(),
            nutrition: Nutrition::default(),
        }
    }

    #[test]
    fn empty_query_is_identity() {
        let fruits = vec![fruit("Banana"), fruit("Apple")];
        assert_eq!(filter_by_name(&fruits, ""), fruits);
    }

    #[test]
    fn filter_is_case_insensitive_substring() {
        let fruits = vec![fruit("Apple"), fruit("Pineapple"), fruit("Banana")];
        let matched = filter_by_name(&fruits, "APPLE");
        assert_eq!(matched, vec![fruit("Apple"), fruit("Pineapple")]);
        assert!(filter_by_name(&fruits, "kiwi").is_empty());
    }

    #[test]
    fn sort_options_cover_all_keys() {
        let options = FruitListState::sort_options(Language::En);
        let values: Vec<&str> = options.iter().map(|(_, v)| v.as_str()).collect();
        assert_eq!(values, ["name", "calories", "protein", "sugar"]);
    }
}
