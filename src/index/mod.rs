// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Index structures: what gets precomputed so queries stay cheap.
//!
//! The product catalog is small (hundreds of entries), so the "index" is a
//! normalized, field-tagged copy of every product rather than an inverted
//! structure. What matters is the seam: [`FuzzyIndex`] is the only thing the
//! search layer knows about matching, so the matcher can be swapped without
//! touching filters, limits or suggestions.

mod weighted;

pub use weighted::WeightedFieldIndex;

use crate::scoring::{FieldWeights, MatchParams};
use crate::types::{FieldKind, Product};
use crate::utils::normalize;

/// A fuzzy-matchable view of the catalog.
///
/// Implementations must return matches sorted best-first with ties in build
/// order, and must be deterministic: the same text always yields the same
/// list.
pub trait FuzzyIndex: Send + Sync {
    /// Build from normalized records, in catalog order.
    fn build(records: Vec<IndexRecord>, weights: FieldWeights, params: MatchParams) -> Self
    where
        Self: Sized;

    /// Score every record against `text` and return the ones that match.
    fn query(&self, text: &str) -> Vec<ScoredMatch>;

    /// Number of indexed records.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One matched record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMatch {
    /// Position of the record in build order (= catalog order).
    pub position: usize,
    /// Relevance. Higher is better.
    pub score: f64,
    /// Field with the largest weighted contribution.
    pub best_field: FieldKind,
}

/// Normalized field values of one product.
///
/// Only non-empty fields are kept, in weight order. A product with no tags,
/// benefits or collections simply has fewer entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IndexRecord {
    pub fields: Vec<(FieldKind, Vec<String>)>,
}

impl IndexRecord {
    pub fn from_product(product: &Product) -> Self {
        let fields = FieldKind::ALL
            .iter()
            .filter_map(|field| {
                let values: Vec<String> = product
                    .field_values(*field)
                    .into_iter()
                    .map(normalize)
                    .filter(|v| !v.is_empty())
                    .collect();
                (!values.is_empty()).then_some((*field, values))
            })
            .collect();
        Self { fields }
    }
}

/// Build normalized records for a whole catalog, preserving order.
pub fn build_records(products: &[Product]) -> Vec<IndexRecord> {
    products.iter().map(IndexRecord::from_product).collect()
}
