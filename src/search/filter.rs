// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Facet filters applied after ranking.
//!
//! Filtering after ranking (not before) keeps `stats.matched` meaningful: it
//! is what the query matched, whatever the dropdowns say.

use crate::types::Product;

/// The value the shop's dropdowns send for "no filter".
pub const ALL: &str = "all";

/// Category and collection constraints for one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FacetFilter<'a> {
    category: Option<&'a str>,
    collection: Option<&'a str>,
}

impl<'a> FacetFilter<'a> {
    /// `None` and `"all"` both mean "don't filter on this facet".
    pub fn new(category: Option<&'a str>, collection: Option<&'a str>) -> Self {
        Self {
            category: category.filter(|c| *c != ALL),
            collection: collection.filter(|c| *c != ALL),
        }
    }

    #[inline]
    pub fn is_noop(&self) -> bool {
        self.category.is_none() && self.collection.is_none()
    }

    pub fn accepts(&self, product: &Product) -> bool {
        self.category.is_none_or(|c| product.category == c)
            && self.collection.is_none_or(|c| product.in_collection(c))
    }
}
