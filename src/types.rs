// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of a catalog search.
//!
//! Products come in from JSON, get indexed field by field, and come back out
//! wrapped in [`ScoredProduct`]. The request/response shapes here are what an
//! outer protocol layer (HTTP, CLI, whatever) serializes.
//!
//! # Invariants
//!
//! - **ProductId**: unique across a [`Catalog`](crate::Catalog). Checked at load.
//! - **Product**: every optional field deserializes to an empty value when it is
//!   absent *or* explicitly `null`. Nothing downstream ever sees a missing list.
//! - **SearchResponse**: `results.len() <= total <= stats.matched`.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// =============================================================================
// NEWTYPES
// =============================================================================

/// Stable product identifier, derived from the product name when the catalog
/// does not provide one.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        ProductId(id.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        ProductId(id.to_string())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        ProductId(id)
    }
}

// =============================================================================
// PRODUCT
// =============================================================================

/// One catalog entry.
///
/// Only `name` is required. The shop data is hand-maintained, so lists are
/// frequently missing or `null`; both collapse to empty here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(default, deserialize_with = "nullable")]
    pub id: ProductId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub english_name: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: String,
    #[serde(default, deserialize_with = "nullable")]
    pub category: String,
    #[serde(default, deserialize_with = "nullable")]
    pub collections: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub main_benefits: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_price: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Product {
    /// Is this product a member of `collection`? Exact label match.
    pub fn in_collection(&self, collection: &str) -> bool {
        self.collections.iter().any(|c| c == collection)
    }

    /// Raw (un-normalized) values of one field. Absent fields yield nothing.
    pub fn field_values(&self, field: FieldKind) -> Vec<&str> {
        match field {
            FieldKind::Name => vec![self.name.as_str()],
            FieldKind::EnglishName => self.english_name.as_deref().into_iter().collect(),
            FieldKind::Tags => self.tags.iter().map(String::as_str).collect(),
            FieldKind::MainBenefits => self.main_benefits.iter().map(String::as_str).collect(),
            FieldKind::Collections => self.collections.iter().map(String::as_str).collect(),
            FieldKind::Description => {
                if self.description.is_empty() {
                    Vec::new()
                } else {
                    vec![self.description.as_str()]
                }
            }
        }
    }
}

/// `null` and absent both become `T::default()`.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

// =============================================================================
// FIELDS
// =============================================================================

/// Which product field a match landed in.
///
/// Declaration order is weight order: name matters most, description least.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FieldKind {
    Name,
    EnglishName,
    Tags,
    MainBenefits,
    Collections,
    Description,
}

impl FieldKind {
    /// All indexed fields, in weight order.
    pub const ALL: [FieldKind; 6] = [
        FieldKind::Name,
        FieldKind::EnglishName,
        FieldKind::Tags,
        FieldKind::MainBenefits,
        FieldKind::Collections,
        FieldKind::Description,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::Name => "name",
            FieldKind::EnglishName => "englishName",
            FieldKind::Tags => "tags",
            FieldKind::MainBenefits => "mainBenefits",
            FieldKind::Collections => "collections",
            FieldKind::Description => "description",
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// REQUESTS
// =============================================================================

/// Options for [`ProductIndex::search`](crate::ProductIndex::search).
///
/// `"all"` in either facet means "no filter", matching what the shop's
/// dropdowns send.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SearchOptions {
    pub category: Option<String>,
    pub collection: Option<String>,
    pub limit: Option<usize>,
    pub include_suggestions: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            category: None,
            collection: None,
            limit: None,
            include_suggestions: true,
        }
    }
}

impl SearchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = Some(collection.into());
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn include_suggestions(mut self, enabled: bool) -> Self {
        self.include_suggestions = enabled;
        self
    }
}

/// Options for [`ProductIndex::suggest`](crate::ProductIndex::suggest).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SuggestOptions {
    pub limit: Option<usize>,
    pub include_categories: bool,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            limit: None,
            include_categories: true,
        }
    }
}

impl SuggestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn include_categories(mut self, enabled: bool) -> Self {
        self.include_categories = enabled;
        self
    }
}

// =============================================================================
// RESPONSES
// =============================================================================

/// A product with its relevance. Higher score = better.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredProduct<'a> {
    pub product: &'a Product,
    pub score: f64,
    /// The field that contributed most to `score`.
    pub matched_field: FieldKind,
}

/// Counts at each stage of the search pipeline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Fuzzy matches before facet filters.
    pub matched: usize,
    /// Matches surviving the category and collection filters.
    pub filtered: usize,
    /// Results actually returned after the limit.
    pub returned: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse<'a> {
    pub results: Vec<ScoredProduct<'a>>,
    /// Filtered match count before truncation.
    pub total: usize,
    pub suggestions: Vec<String>,
    pub stats: SearchStats,
}

impl SearchResponse<'_> {
    /// Ids of the returned products, in rank order.
    pub fn ids(&self) -> Vec<&ProductId> {
        self.results.iter().map(|r| &r.product.id).collect()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestStats {
    /// Distinct candidates collected before truncation.
    pub candidates: usize,
    pub returned: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
    pub related_categories: Vec<String>,
    pub stats: SuggestStats,
}
