//! Fruitdex client library.
//!
//! The data access layer for the fruit nutrition API plus the derived-view
//! state the frontends build their lists from.
//!
//! # Architecture
//!
//! - [`transport`] - HTTP boundary behind the [`transport::FruitApi`] trait;
//!   swapping transports (direct API, CORS proxy, test double) never touches
//!   the catalog contract
//! - [`catalog`] - single-flight cached access to the full collection and
//!   the derived queries over it
//! - [`view`] - per-list presentation state (text filter, family, sort)
//! - [`i18n`] / [`prefs`] - bilingual UI strings and the persisted language
//!   preference
//!
//! # Example
//!
//! ```rust,ignore
//! use fruitdex_client::{ApiConfig, CatalogService, HttpTransport};
//!
//! let config = ApiConfig::from_env()?;
//! let catalog = CatalogService::new(Arc::new(HttpTransport::new(&config)?));
//!
//! let fruits = catalog.fetch_all().await?;
//! let families = catalog.distinct_families().await?;
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod prefs;
pub mod transport;
pub mod view;

pub use catalog::{CatalogService, CatalogStatus};
pub use config::{ApiConfig, ConfigError};
pub use error::ApiError;
pub use transport::{FruitApi, HttpTransport, ResponseFormat};
pub use view::{FilteredView, FruitListState};
