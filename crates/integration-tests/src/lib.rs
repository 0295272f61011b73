//! Test support for the Fruitdex integration suite.
//!
//! Provides a scriptable in-process [`MockTransport`] implementing the
//! `FruitApi` trait, so catalog behavior (single-flight coalescing, refresh,
//! error propagation) is tested hermetically without a network.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Test support code; panicking on poisoned mutexes is fine here.
#![allow(clippy::unwrap_used)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use fruitdex_client::{ApiError, FruitApi};
use fruitdex_core::{Fruit, Nutrition};

/// Scriptable stand-in for the HTTP transport.
///
/// `fetch_all` pops scripted outcomes first and falls back to the fixture
/// collection; `fetch_by_name` resolves against the fixture collection
/// (case-insensitive) unless an outcome is scripted. Both count their
/// physical calls and honor the configured delay.
#[derive(Default)]
pub struct MockTransport {
    fixture: Vec<Fruit>,
    all_outcomes: Mutex<VecDeque<Result<Vec<Fruit>, ApiError>>>,
    name_outcomes: Mutex<VecDeque<Result<Fruit, ApiError>>>,
    all_calls: AtomicUsize,
    name_calls: AtomicUsize,
    delay: Option<Duration>,
}

impl MockTransport {
    #[must_use]
    pub fn with_fruits(fixture: Vec<Fruit>) -> Self {
        Self {
            fixture,
            ..Default::default()
        }
    }

    /// Delay every physical fetch, to hold requests open across assertions.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue an outcome for the next `fetch_all` call.
    pub fn script_all(&self, outcome: Result<Vec<Fruit>, ApiError>) {
        self.all_outcomes.lock().unwrap().push_back(outcome);
    }

    /// Queue an outcome for the next `fetch_by_name` call.
    pub fn script_name(&self, outcome: Result<Fruit, ApiError>) {
        self.name_outcomes.lock().unwrap().push_back(outcome);
    }

    /// Number of physical bulk fetches issued.
    pub fn all_calls(&self) -> usize {
        self.all_calls.load(Ordering::SeqCst)
    }

    /// Number of physical per-name fetches issued.
    pub fn name_calls(&self) -> usize {
        self.name_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FruitApi for MockTransport {
    async fn fetch_all(&self) -> Result<Vec<Fruit>, ApiError> {
        self.all_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let scripted = self.all_outcomes.lock().unwrap().pop_front();
        match scripted {
            Some(outcome) => outcome,
            None => Ok(self.fixture.clone()),
        }
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Fruit, ApiError> {
        self.name_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        let scripted = self.name_outcomes.lock().unwrap().pop_front();
        if let Some(outcome) = scripted {
            return outcome;
        }
        self.fixture
            .iter()
            .find(|fruit| fruit.name.eq_ignore_ascii_case(name))
            .cloned()
            .ok_or_else(|| ApiError::NotFound(name.to_string()))
    }
}

/// Fixture: the Apple/Banana/Cherry trio used across the suite.
#[must_use]
pub fn sample_fruits() -> Vec<Fruit> {
    vec![apple(), banana(), cherry()]
}

#[must_use]
pub fn apple() -> Fruit {
    Fruit {
        id: 6,
        name: "Apple".to_string(),
        family: "Rosaceae".to_string(),
        order: "Rosales".to_string(),
        genus: "Malus".to_string(),
        nutrition: Nutrition {
            calories: 52.0,
            fat: 0.4,
            sugar: 10.3,
            carbohydrates: 11.4,
            protein: 0.3,
        },
    }
}

#[must_use]
pub fn banana() -> Fruit {
    Fruit {
        id: 1,
        name: "Banana".to_string(),
        family: "Musaceae".to_string(),
        order: "Zingiberales".to_string(),
        genus: "Musa".to_string(),
        nutrition: Nutrition {
            calories: 96.0,
            fat: 0.2,
            sugar: 17.2,
            carbohydrates: 22.0,
            protein: 1.0,
        },
    }
}

#[must_use]
pub fn cherry() -> Fruit {
    Fruit {
        id: 9,
        name: "Cherry".to_string(),
        family: "Rosaceae".to_string(),
        order: "Rosales".to_string(),
        genus: "Prunus".to_string(),
        nutrition: Nutrition {
            calories: 50.0,
            fat: 0.3,
            sugar: 8.0,
            carbohydrates: 12.0,
            protein: 1.0,
        },
    }
}
