// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search and suggest: where the index meets the shop.
//!
//! [`ProductIndex`] owns everything a query needs: the catalog, the fuzzy
//! index over it, and the normalized suggestion sources. It is immutable after
//! construction. Share it behind an `Arc` and call it from as many threads as
//! you like.
//!
//! ```text
//! query ──▶ FuzzyIndex::query ──▶ facet filter ──▶ limit ──▶ SearchResponse
//!   │                                                            ▲
//!   └──────────────▶ suggest (substring sources) ────────────────┘
//! ```

mod filter;
mod suggest;

pub use filter::{FacetFilter, ALL};

use crate::catalog::Catalog;
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::index::{build_records, FuzzyIndex, WeightedFieldIndex};
use crate::types::{
    ScoredProduct, SearchOptions, SearchResponse, SearchStats, SuggestOptions, SuggestResponse, SuggestStats,
};
use crate::utils::normalize;
use std::sync::Arc;
use suggest::SuggestionSource;

/// A searchable catalog.
///
/// The type parameter is the matcher. The default, [`WeightedFieldIndex`],
/// is what [`ProductIndex::new`] builds.
#[derive(Debug)]
pub struct ProductIndex<I: FuzzyIndex = WeightedFieldIndex> {
    catalog: Arc<Catalog>,
    index: I,
    suggestions: SuggestionSource,
    config: SearchConfig,
}

impl ProductIndex<WeightedFieldIndex> {
    /// Index `catalog` with the default matcher.
    pub fn new(catalog: Arc<Catalog>, config: SearchConfig) -> Result<Self> {
        Self::build(catalog, config)
    }
}

impl<I: FuzzyIndex> ProductIndex<I> {
    /// Index `catalog` with matcher `I`.
    pub fn build(catalog: Arc<Catalog>, config: SearchConfig) -> Result<Self> {
        config.validate()?;

        let records = build_records(catalog.products());
        let index = I::build(records, config.weights, config.matching);
        let suggestions = SuggestionSource::build(&catalog, &config);

        if index.is_empty() {
            tracing::warn!("indexing an empty catalog, every search will come back empty");
        }
        tracing::info!(
            products = index.len(),
            threshold = config.matching.threshold,
            distance = config.matching.distance,
            "product index built"
        );

        Ok(Self {
            catalog,
            index,
            suggestions,
            config,
        })
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Ranked, filtered, truncated products matching `query`.
    ///
    /// Fails only for a query that is empty after trimming.
    pub fn search(&self, query: &str, options: &SearchOptions) -> Result<SearchResponse<'_>> {
        let query = query.trim();
        if query.is_empty() {
            return Err(Error::InvalidQuery);
        }

        let matches = if self.index.is_empty() {
            Vec::new()
        } else {
            self.index.query(query)
        };
        let matched = matches.len();

        let products = self.catalog.products();
        let mut results: Vec<ScoredProduct<'_>> = matches
            .into_iter()
            .map(|m| ScoredProduct {
                product: &products[m.position],
                score: m.score,
                matched_field: m.best_field,
            })
            .collect();

        let filter = FacetFilter::new(options.category.as_deref(), options.collection.as_deref());
        if !filter.is_noop() {
            results.retain(|r| filter.accepts(r.product));
        }

        let total = results.len();
        let limit = self.config.limits.search(options.limit);
        results.truncate(limit);

        let suggestions = if options.include_suggestions {
            self.suggest(query, &SuggestOptions::new().include_categories(false)).suggestions
        } else {
            Vec::new()
        };

        let stats = SearchStats {
            matched,
            filtered: total,
            returned: results.len(),
        };
        tracing::debug!(
            query,
            matched = stats.matched,
            filtered = stats.filtered,
            returned = stats.returned,
            "search"
        );

        Ok(SearchResponse {
            results,
            total,
            suggestions,
            stats,
        })
    }

    /// Completions for a partially typed query. Never fails.
    ///
    /// An empty query gets the popular terms.
    pub fn suggest(&self, query: &str, options: &SuggestOptions) -> SuggestResponse {
        let limit = self.config.limits.suggest(options.limit);
        let query = normalize(query);

        if query.is_empty() {
            let suggestions = self.suggestions.popular(limit);
            return SuggestResponse {
                stats: SuggestStats {
                    candidates: self.suggestions.popular_count(),
                    returned: suggestions.len(),
                },
                suggestions,
                related_categories: Vec::new(),
            };
        }

        let set = self.suggestions.candidates(&query, limit);
        let candidates = set.len();
        let suggestions = set.into_ranked(&query, limit);
        let related_categories = if options.include_categories {
            self.suggestions.related_categories(&query)
        } else {
            Vec::new()
        };

        tracing::debug!(query = %query, candidates, returned = suggestions.len(), "suggest");

        SuggestResponse {
            stats: SuggestStats {
                candidates,
                returned: suggestions.len(),
            },
            suggestions,
            related_categories,
        }
    }

    /// Category keys whose keywords relate to `query` by substring, either way.
    pub fn related_categories(&self, query: &str) -> Vec<String> {
        self.suggestions.related_categories(&normalize(query))
    }
}
