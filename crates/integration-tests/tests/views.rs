//! Integration tests for the derived list views.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use fruitdex_client::view::{FilteredView, FruitListState};
use fruitdex_client::{CatalogService, FruitApi};
use fruitdex_core::{FamilyFilter, Fruit, Language, SortKey};
use fruitdex_integration_tests::{MockTransport, apple, banana, sample_fruits};

async fn loaded_catalog() -> CatalogService {
    let transport = Arc::new(MockTransport::with_fruits(sample_fruits()));
    let catalog = CatalogService::new(transport as Arc<dyn FruitApi>);
    catalog.fetch_all().await.unwrap();
    catalog
}

fn names(fruits: &[Fruit]) -> Vec<&str> {
    fruits.iter().map(|fruit| fruit.name.as_str()).collect()
}

#[tokio::test]
async fn filtered_view_is_empty_before_load_and_full_after() {
    let transport = Arc::new(MockTransport::with_fruits(sample_fruits()));
    let catalog = CatalogService::new(transport as Arc<dyn FruitApi>);

    let mut view = FilteredView::new(&catalog);
    assert!(view.current().is_empty());

    catalog.fetch_all().await.unwrap();
    // The watch channel changed since the view last looked.
    view.changed().await;
    assert_eq!(names(&view.current()), ["Apple", "Banana", "Cherry"]);
}

#[tokio::test]
async fn filtered_view_matches_substring_case_insensitively() {
    let catalog = loaded_catalog().await;
    let view = FilteredView::new(&catalog);

    view.set_query("ap");
    assert_eq!(names(&view.current()), ["Apple"]);

    view.set_query("AN");
    assert_eq!(names(&view.current()), ["Banana"]);

    view.set_query("kiwi");
    assert!(view.current().is_empty());
}

#[tokio::test]
async fn filtered_view_output_is_a_subsequence_of_the_collection() {
    let catalog = loaded_catalog().await;
    let view = FilteredView::new(&catalog);
    let full = catalog.status().fruits;

    for query in ["", "a", "an", "APPLE", "zzz"] {
        view.set_query(query);
        let filtered = view.current();
        let needle = query.to_lowercase();

        let mut cursor = full.iter();
        for fruit in &filtered {
            assert!(
                cursor.any(|f| f == fruit),
                "output for {query:?} is not a subsequence"
            );
            assert!(fruit.name.to_lowercase().contains(&needle));
        }
    }

    view.set_query("");
    assert_eq!(view.current(), *full);
}

#[tokio::test]
async fn list_state_family_restriction_is_case_sensitive() {
    let catalog = loaded_catalog().await;
    let state = FruitListState::new(&catalog);

    state.set_family(FamilyFilter::Family("Rosaceae".to_string()));
    assert_eq!(names(&state.view()), ["Apple", "Cherry"]);

    // Unlike the text filter and unlike fruits_by_family, the list-state
    // restriction matches exactly.
    state.set_family(FamilyFilter::Family("rosaceae".to_string()));
    assert!(state.view().is_empty());

    state.set_family(FamilyFilter::All);
    assert_eq!(state.view().len(), 3);
}

#[tokio::test]
async fn list_state_sorts_along_the_active_axis() {
    let catalog = loaded_catalog().await;
    let state = FruitListState::new(&catalog);

    state.set_sort(Some(SortKey::Calories));
    assert_eq!(names(&state.view()), ["Cherry", "Apple", "Banana"]);

    state.set_sort(Some(SortKey::Sugar));
    assert_eq!(names(&state.view()), ["Cherry", "Apple", "Banana"]);

    // Protein is the inverted axis; Banana and Cherry tie at 1.0 and keep
    // their collection order under the stable sort.
    state.set_sort(Some(SortKey::Protein));
    assert_eq!(names(&state.view()), ["Banana", "Cherry", "Apple"]);
}

#[tokio::test]
async fn unknown_sort_parameter_passes_the_sequence_through() {
    let catalog = loaded_catalog().await;
    let state = FruitListState::new(&catalog);

    state.set_sort_param("vitamin-c");
    assert_eq!(names(&state.view()), ["Apple", "Banana", "Cherry"]);

    state.set_sort_param("protein");
    assert_eq!(names(&state.view()), ["Banana", "Cherry", "Apple"]);
}

#[tokio::test]
async fn counts_are_independent_scalars() {
    let catalog = loaded_catalog().await;
    let state = FruitListState::new(&catalog);

    state.set_query("ap");
    assert_eq!(state.total_count(), 3);
    assert_eq!(state.filtered_count(), 1);

    state.set_query("");
    state.set_family(FamilyFilter::Family("Musaceae".to_string()));
    assert_eq!(state.total_count(), 3);
    assert_eq!(state.filtered_count(), 1);
}

#[tokio::test]
async fn filters_compose_before_sorting() {
    let catalog = loaded_catalog().await;
    let state = FruitListState::new(&catalog);

    state.set_query("a");
    state.set_family(FamilyFilter::Family("Rosaceae".to_string()));
    state.set_sort(Some(SortKey::Protein));

    // "a" matches all three names; Rosaceae keeps Apple and Cherry;
    // protein descending puts Cherry first.
    assert_eq!(names(&state.view()), ["Cherry", "Apple"]);
}

#[tokio::test]
async fn family_options_start_with_the_all_entry() {
    let catalog = loaded_catalog().await;
    let state = FruitListState::new(&catalog);

    let options = state.family_options(Language::En);
    assert_eq!(
        options,
        vec![
            ("All families".to_string(), "all".to_string()),
            ("Musaceae".to_string(), "Musaceae".to_string()),
            ("Rosaceae".to_string(), "Rosaceae".to_string()),
        ]
    );

    let first = state
        .family_options(Language::De)
        .into_iter()
        .next()
        .unwrap();
    assert_eq!(first, ("Alle Familien".to_string(), "all".to_string()));
}

#[tokio::test]
async fn sort_options_are_localized() {
    let en = FruitListState::sort_options(Language::En);
    let de = FruitListState::sort_options(Language::De);

    assert_eq!(en.len(), 4);
    let values: Vec<&str> = en.iter().map(|(_, v)| v.as_str()).collect();
    assert_eq!(values, ["name", "calories", "protein", "sugar"]);

    // Same values, different labels.
    for ((en_label, en_value), (de_label, de_value)) in en.iter().zip(de.iter()) {
        assert_eq!(en_value, de_value);
        if en_value == "calories" {
            assert_ne!(en_label, de_label);
        }
    }
}

#[tokio::test]
async fn scenario_from_the_contract_table() {
    // collection = [Apple(Rosaceae, 52), Banana(Musaceae, 96)]
    let transport = Arc::new(MockTransport::with_fruits(vec![apple(), banana()]));
    let catalog = CatalogService::new(transport as Arc<dyn FruitApi>);
    catalog.fetch_all().await.unwrap();

    let view = FilteredView::new(&catalog);
    view.set_query("ap");
    assert_eq!(view.current(), vec![apple()]);

    assert_eq!(
        catalog.fruits_by_family("Musaceae").await.unwrap(),
        vec![banana()]
    );
    assert_eq!(
        catalog.distinct_families().await.unwrap(),
        ["Musaceae", "Rosaceae"]
    );

    let state = FruitListState::new(&catalog);
    state.set_sort(Some(SortKey::Protein));
    assert_eq!(names(&state.view()), ["Banana", "Apple"]);
}
