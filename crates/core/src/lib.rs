//! Fruitdex Core - Shared types library.
//!
//! This crate provides the domain types used across all Fruitdex components:
//! - `client` - Data access layer and derived views over the fruit API
//! - `cli` - Command-line frontend
//!
//! # Architecture
//!
//! The core crate contains only types and pure functions - no I/O, no HTTP
//! clients, no async. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Fruit records, nutrition thresholds, sort keys, language codes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
