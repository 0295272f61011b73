//! Fruitdex CLI - fruit nutrition explorer.
//!
//! # Usage
//!
//! ```bash
//! # List all fruits, filtered and sorted
//! fruitdex list --search ap --sort protein
//!
//! # Restrict to one family and cap calories
//! fruitdex list --family Rosaceae --max-calories 60
//!
//! # Distinct botanical families
//! fruitdex families
//!
//! # Detail card for one fruit
//! fruitdex show banana
//!
//! # Force a refetch of the collection
//! fruitdex refresh
//!
//! # Show or change the UI language
//! fruitdex lang
//! fruitdex lang de
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]
// This binary talks to the terminal.
#![allow(clippy::print_stdout)]

use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use fruitdex_client::{ApiConfig, CatalogService, HttpTransport, prefs};
use fruitdex_core::NutritionThresholds;

mod commands;

#[derive(Parser)]
#[command(name = "fruitdex")]
#[command(version, about = "Fruit nutrition explorer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List fruits from the collection
    List {
        /// Free-text name filter (case-insensitive substring)
        #[arg(short, long)]
        search: Option<String>,

        /// Restrict to one botanical family (exact match)
        #[arg(short, long)]
        family: Option<String>,

        /// Sort axis: name, calories, protein or sugar
        #[arg(long)]
        sort: Option<String>,

        /// Inclusive upper bound on calories per 100 g
        #[arg(long)]
        max_calories: Option<f64>,

        /// Inclusive upper bound on fat per 100 g
        #[arg(long)]
        max_fat: Option<f64>,

        /// Inclusive upper bound on sugar per 100 g
        #[arg(long)]
        max_sugar: Option<f64>,

        /// Inclusive upper bound on carbohydrates per 100 g
        #[arg(long)]
        max_carbohydrates: Option<f64>,

        /// Inclusive lower bound on protein per 100 g
        #[arg(long)]
        min_protein: Option<f64>,
    },

    /// List the distinct botanical families
    Families,

    /// Show the detail card for one fruit
    Show {
        /// Fruit name as known to the API
        name: String,
    },

    /// Invalidate the cache and refetch the collection
    Refresh,

    /// Show or persist the UI language (en, de)
    Lang {
        /// Language code to switch to; omit to print the current one
        code: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "fruitdex=info".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();

    let config = match ApiConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!("configuration error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let transport = match HttpTransport::new(&config) {
        Ok(transport) => transport,
        Err(err) => {
            tracing::error!("failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    let catalog = CatalogService::new(Arc::new(transport));
    let store = prefs::store_for(config.prefs_dir.as_deref());
    let lang = prefs::load_language(store.as_ref());

    let result = match cli.command {
        Commands::List {
            search,
            family,
            sort,
            max_calories,
            max_fat,
            max_sugar,
            max_carbohydrates,
            min_protein,
        } => {
            let thresholds = NutritionThresholds {
                max_calories,
                max_fat,
                max_sugar,
                max_carbohydrates,
                min_protein,
                ..Default::default()
            };
            commands::list(&catalog, lang, search, family, sort, thresholds).await
        }
        Commands::Families => commands::families(&catalog).await,
        Commands::Show { name } => commands::show(&catalog, lang, &name).await,
        Commands::Refresh => commands::refresh(&catalog, lang).await,
        Commands::Lang { code } => commands::lang(store.as_ref(), lang, code.as_deref()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("command failed: {err}");
            ExitCode::FAILURE
        }
    }
}
