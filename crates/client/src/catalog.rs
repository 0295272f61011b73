//! Cached access to the fruit collection and the derived queries over it.
//!
//! # Caching model
//!
//! The full collection lives in a single cache slot that never expires on
//! its own; only [`CatalogService::refresh`] invalidates it. The slot is
//! keyed by a refresh generation so that a refresh always issues a new
//! physical request: callers attached to the previous generation keep the
//! outcome of the request they joined, while the refresh and everyone after
//! it fetch fresh.
//!
//! Concurrent `fetch_all` callers on the same generation are coalesced into
//! one network request by `moka`'s `try_get_with`; failures are handed to
//! every waiter but never cached, so the next call retries the network.
//!
//! # Observability
//!
//! Loading/loaded/searching flags, the last bulk-fetch error, and the
//! current collection are published through a `tokio::sync::watch` channel;
//! observers pull a fresh snapshot whenever it changes.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use moka::future::Cache;
use tokio::sync::watch;
use tracing::{debug, instrument};

use fruitdex_core::Fruit;

use crate::error::ApiError;
use crate::transport::FruitApi;

/// Externally observable state of the catalog.
#[derive(Debug, Clone, Default)]
pub struct CatalogStatus {
    /// A bulk fetch is in flight.
    pub loading: bool,
    /// The collection has been successfully loaded at least once since the
    /// last refresh.
    pub loaded: bool,
    /// A single-fruit lookup is in flight.
    pub searching: bool,
    /// Outcome of the last failed bulk fetch; cleared on success.
    pub last_error: Option<ApiError>,
    /// The cached collection, empty until first load.
    pub fruits: Arc<Vec<Fruit>>,
}

/// Data access layer for the fruit collection.
///
/// Cheaply cloneable via `Arc`; all clones share the cache and status
/// channel.
#[derive(Clone)]
pub struct CatalogService {
    inner: Arc<CatalogInner>,
}

struct CatalogInner {
    transport: Arc<dyn FruitApi>,
    cache: Cache<u64, Arc<Vec<Fruit>>>,
    generation: AtomicU64,
    status: watch::Sender<CatalogStatus>,
}

impl CatalogService {
    /// Create a catalog backed by the given transport.
    #[must_use]
    pub fn new(transport: Arc<dyn FruitApi>) -> Self {
        // One entry per generation; at most the current one is live.
        let cache = Cache::builder().max_capacity(2).build();
        let (status, _) = watch::channel(CatalogStatus::default());

        Self {
            inner: Arc::new(CatalogInner {
                transport,
                cache,
                generation: AtomicU64::new(0),
                status,
            }),
        }
    }

    /// Subscribe to catalog status changes.
    ///
    /// The receiver always holds the latest snapshot; awaiting its
    /// `changed()` wakes on every update.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<CatalogStatus> {
        self.inner.status.subscribe()
    }

    /// Current status snapshot.
    #[must_use]
    pub fn status(&self) -> CatalogStatus {
        self.inner.status.borrow().clone()
    }

    /// Return the full fruit collection.
    ///
    /// Served from the cache when already loaded; otherwise one network
    /// request is issued and concurrent callers share its outcome.
    ///
    /// # Errors
    ///
    /// Returns the transport's error; the cache stays unloaded so a
    /// subsequent call retries.
    #[instrument(skip(self))]
    pub async fn fetch_all(&self) -> Result<Arc<Vec<Fruit>>, ApiError> {
        let generation = self.inner.generation.load(Ordering::Acquire);
        let inner = Arc::clone(&self.inner);

        self.inner
            .cache
            .try_get_with(generation, async move { inner.load(generation).await })
            .await
            .map_err(|err: Arc<ApiError>| (*err).clone())
    }

    /// Drop the cached collection and fetch it again.
    ///
    /// Always issues a new physical request, even when a fetch started
    /// before the refresh is still in flight.
    ///
    /// # Errors
    ///
    /// Same failure semantics as [`Self::fetch_all`].
    #[instrument(skip(self))]
    pub async fn refresh(&self) -> Result<Arc<Vec<Fruit>>, ApiError> {
        self.inner.generation.fetch_add(1, Ordering::AcqRel);
        self.inner.cache.invalidate_all();
        self.inner.status.send_modify(|status| {
            status.loaded = false;
            status.fruits = Arc::new(Vec::new());
        });
        debug!("catalog cache invalidated");
        self.fetch_all().await
    }

    /// Look up a single fruit by name via a dedicated network call.
    ///
    /// The bulk cache is neither consulted nor modified. Input is trimmed;
    /// empty input is rejected locally.
    ///
    /// # Errors
    ///
    /// [`ApiError::EmptyQuery`] for blank input, [`ApiError::NotFound`]
    /// when the API reports 404, otherwise the transport's error.
    #[instrument(skip(self), fields(name = %name))]
    pub async fn search_one(&self, name: &str) -> Result<Fruit, ApiError> {
        let query = name.trim();
        if query.is_empty() {
            return Err(ApiError::EmptyQuery);
        }

        self.inner
            .status
            .send_modify(|status| status.searching = true);
        let result = self.inner.transport.fetch_by_name(query).await;
        self.inner
            .status
            .send_modify(|status| status.searching = false);

        result
    }

    /// All fruits of one family, matched case-insensitively.
    ///
    /// Triggers a bulk fetch when the collection is not loaded yet. An
    /// unknown family yields an empty vec, not an error.
    ///
    /// # Errors
    ///
    /// Only the bulk fetch itself can fail.
    pub async fn fruits_by_family(&self, family: &str) -> Result<Vec<Fruit>, ApiError> {
        let fruits = self.fetch_all().await?;
        // Same folding as the free-text name filter in `view`.
        let needle = family.to_lowercase();
        Ok(fruits
            .iter()
            .filter(|fruit| fruit.family.to_lowercase() == needle)
            .cloned()
            .collect())
    }

    /// Distinct family names, sorted ascending.
    ///
    /// # Errors
    ///
    /// Only the bulk fetch itself can fail.
    pub async fn distinct_families(&self) -> Result<Vec<String>, ApiError> {
        let fruits = self.fetch_all().await?;
        Ok(distinct_families_of(&fruits))
    }
}

impl CatalogInner {
    /// Perform the physical bulk fetch and mirror its lifecycle into the
    /// status channel.
    async fn load(&self, generation: u64) -> Result<Arc<Vec<Fruit>>, ApiError> {
        self.status.send_modify(|status| status.loading = true);

        let result = self.transport.fetch_all().await;

        // A load that lost a refresh race still resolves its own waiters,
        // but must not clobber the status published by the newer fetch.
        let current = self.generation.load(Ordering::Acquire) == generation;

        match result {
            Ok(fruits) => {
                let fruits = Arc::new(fruits);
                if current {
                    let fruits = Arc::clone(&fruits);
                    self.status.send_modify(move |status| {
                        status.loading = false;
                        status.loaded = true;
                        status.last_error = None;
                        status.fruits = fruits;
                    });
                }
                debug!(count = fruits.len(), stale = !current, "fruit collection loaded");
                Ok(fruits)
            }
            Err(err) => {
                if current {
                    let last = err.clone();
                    self.status.send_modify(move |status| {
                        status.loading = false;
                        status.last_error = Some(last);
                    });
                }
                Err(err)
            }
        }
    }
}

/// Distinct family names of a fruit sequence, deduplicated and sorted
/// lexicographically ascending.
#[must_use]
pub fn distinct_families_of(fruits: &[Fruit]) -> Vec<String> {
    let mut families: Vec<String> = fruits.iter().map(|fruit| fruit.family.clone()).collect();
    families.sort();
    families.dedup();
    families
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use fruitdex_core::Nutrition;

    fn fruit(name: &str, family: &str) -> Fruit {
        Fruit {
            id: 0,
            name: name.to_string(),
            family: family.to_string(),
            order: String::new(),
            genus: String::new(),
            nutrition: Nutrition::default(),
        }
    }

    #[test]
    fn distinct_families_sorted_without_duplicates() {
        let fruits = vec![
            fruit("Banana", "Musaceae"),
            fruit("Apple", "Rosaceae"),
            fruit("Cherry", "Rosaceae"),
        ];
        assert_eq!(distinct_families_of(&fruits), ["Musaceae", "Rosaceae"]);
    }

    #[test]
    fn distinct_families_of_empty_collection() {
        assert!(distinct_families_of(&[]).is_empty());
    }
}
