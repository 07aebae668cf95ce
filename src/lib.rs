// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy product search and search-as-you-type suggestions for an
//! essential-oil catalog.
//!
//! Products are matched field by field with an approximate-substring matcher,
//! weighted so the product name matters most and the description least, then
//! filtered by category and collection facets. Suggestions are substring
//! completions drawn from names, tags, benefits, category keywords and a list
//! of popular terms.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────────┐
//! │ catalog.rs  │────▶│  index/      │────▶│  search/         │
//! │ (Catalog,   │     │ (FuzzyIndex, │     │ (ProductIndex:   │
//! │  Product)   │     │  weighted)   │     │  search, suggest)│
//! └─────────────┘     └──────────────┘     └──────────────────┘
//!        │                   │                    │
//!        ▼                   ▼                    ▼
//! ┌─────────────────────────────────────────────────────┐
//! │  fuzzy/ (approximate_find)   scoring/ (weights,     │
//! │  utils.rs (normalize)         relevance, ordering)  │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use essentia::{Catalog, ProductIndex, SearchConfig, SearchOptions};
//! use std::sync::Arc;
//!
//! # fn main() -> essentia::Result<()> {
//! let catalog = Arc::new(Catalog::from_path("data/products.json".as_ref())?);
//! let index = ProductIndex::new(catalog, SearchConfig::default())?;
//!
//! let response = index.search("lavendr", &SearchOptions::new().category("single-oils"))?;
//! for hit in &response.results {
//!     println!("{} ({:.2})", hit.product.name, hit.score);
//! }
//! # Ok(())
//! # }
//! ```

// Module declarations
pub mod catalog;
pub mod config;
pub mod error;
pub mod favorites;
pub mod fuzzy;
pub mod index;
pub mod scoring;
pub mod search;
pub mod settings;
mod types;
pub mod utils;

pub mod testing;

// Re-exports for public API
pub use catalog::Catalog;
pub use config::{Limits, SearchConfig, SUGGEST_HARD_CAP};
pub use error::{Error, Result};
pub use favorites::{FavoritesStore, InMemoryFavorites, UserId};
pub use index::{FuzzyIndex, IndexRecord, ScoredMatch, WeightedFieldIndex};
pub use scoring::{FieldWeights, MatchParams};
pub use search::{FacetFilter, ProductIndex};
pub use settings::{DisplaySettings, SettingsWarning};
pub use types::{
    FieldKind, Product, ProductId, ScoredProduct, SearchOptions, SearchResponse, SearchStats, SuggestOptions,
    SuggestResponse, SuggestStats,
};
pub use utils::{normalize, slugify};
