//! Command implementations for the Fruitdex CLI.

use fruitdex_client::prefs::{self, PreferenceStore};
use fruitdex_client::view::FruitListState;
use fruitdex_client::{ApiError, CatalogService, i18n};
use fruitdex_core::{FamilyFilter, Fruit, Language, NutritionThresholds};

/// `list` - derive a filtered, sorted view and print it as a table.
pub async fn list(
    catalog: &CatalogService,
    lang: Language,
    search: Option<String>,
    family: Option<String>,
    sort: Option<String>,
    thresholds: NutritionThresholds,
) -> Result<(), ApiError> {
    catalog.fetch_all().await?;

    let state = FruitListState::new(catalog);
    if let Some(search) = search {
        state.set_query(search);
    }
    if let Some(family) = family {
        state.set_family(FamilyFilter::Family(family));
    }
    if let Some(sort) = sort {
        state.set_sort_param(&sort);
    }

    let mut fruits = state.view();
    if !thresholds.is_empty() {
        fruits = thresholds.filter(&fruits);
    }

    print_table(lang, &fruits);
    println!(
        "{}/{} {}",
        fruits.len(),
        state.total_count(),
        i18n::translate(lang, "home.resultCount")
    );
    Ok(())
}

/// `families` - distinct botanical families, sorted.
pub async fn families(catalog: &CatalogService) -> Result<(), ApiError> {
    for family in catalog.distinct_families().await? {
        println!("{family}");
    }
    Ok(())
}

/// `show` - detail card for one fruit, localized labels.
pub async fn show(catalog: &CatalogService, lang: Language, name: &str) -> Result<(), ApiError> {
    let fruit = match catalog.search_one(name).await {
        Ok(fruit) => fruit,
        Err(ApiError::NotFound(query)) => {
            println!("{} \"{query}\"", i18n::translate(lang, "search.notFound"));
            return Ok(());
        }
        Err(ApiError::EmptyQuery) => {
            println!("{}", i18n::translate(lang, "search.queryRequired"));
            return Ok(());
        }
        Err(err) => return Err(err),
    };

    let t = |key| i18n::translate(lang, key);
    println!("{} (#{})", fruit.name, fruit.id);
    println!("  {}: {}", t("detail.family"), fruit.family);
    println!("  {}: {}", t("detail.order"), fruit.order);
    println!("  {}: {}", t("detail.genus"), fruit.genus);
    println!("  {} ({}):", t("detail.nutrition"), t("detail.per100g"));
    println!("    {}: {}", t("detail.calories"), fruit.nutrition.calories);
    println!("    {}: {}", t("detail.fat"), fruit.nutrition.fat);
    println!("    {}: {}", t("detail.sugar"), fruit.nutrition.sugar);
    println!(
        "    {}: {}",
        t("detail.carbohydrates"),
        fruit.nutrition.carbohydrates
    );
    println!("    {}: {}", t("detail.protein"), fruit.nutrition.protein);
    Ok(())
}

/// `refresh` - drop the cache, refetch, print the fresh collection size.
pub async fn refresh(catalog: &CatalogService, lang: Language) -> Result<(), ApiError> {
    let fruits = catalog.refresh().await?;
    println!(
        "{} {}",
        fruits.len(),
        i18n::translate(lang, "home.resultCount")
    );
    Ok(())
}

/// `lang` - print or persist the UI language preference.
pub fn lang(
    store: &dyn PreferenceStore,
    current: Language,
    code: Option<&str>,
) -> Result<(), ApiError> {
    match code {
        None => println!("{}", current.code()),
        Some(code) => match Language::from_code(code) {
            Some(lang) => {
                prefs::store_language(store, lang);
                println!("{}", lang.code());
            }
            None => {
                let known: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
                eprintln!("unknown language '{code}', known: {}", known.join(", "));
            }
        },
    }
    Ok(())
}

fn print_table(lang: Language, fruits: &[Fruit]) {
    let t = |key| i18n::translate(lang, key);
    println!(
        "{:<20} {:<16} {:>9} {:>7} {:>8}",
        "Name",
        t("detail.family"),
        t("detail.calories"),
        t("detail.sugar"),
        t("detail.protein")
    );
    for fruit in fruits {
        println!(
            "{:<20} {:<16} {:>9} {:>7} {:>8}",
            fruit.name,
            fruit.family,
            fruit.nutrition.calories,
            fruit.nutrition.sugar,
            fruit.nutrition.protein
        );
    }
}
