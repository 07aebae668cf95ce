// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The product catalog: an ordered, validated list of products.
//!
//! Catalog order is meaningful. It is the tie-breaker for equal relevance,
//! so two loads of the same file always rank the same way.
//!
//! Accepted JSON shapes:
//!
//! ```json
//! [ { "name": "Lavanda", ... }, ... ]
//! { "products": [ { "name": "Lavanda", ... }, ... ] }
//! ```

use crate::error::{Error, Result};
use crate::fuzzy::levenshtein_within;
use crate::types::{Product, ProductId};
use crate::utils::{normalize, slugify};
use serde_json::Value;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// Edits allowed when guessing which facet label was meant.
const LABEL_TYPO_BUDGET: usize = 2;

#[derive(Debug, Clone, Default)]
pub struct Catalog {
    products: Vec<Product>,
    by_id: HashMap<ProductId, usize>,
}

impl Catalog {
    /// Validate `products` and assign missing ids.
    ///
    /// Fails on an empty name or on two products resolving to the same id.
    pub fn new(mut products: Vec<Product>) -> Result<Self> {
        let mut by_id = HashMap::with_capacity(products.len());

        for (index, product) in products.iter_mut().enumerate() {
            if product.name.trim().is_empty() {
                return Err(Error::EmptyProductName { index });
            }
            if product.id.is_empty() {
                product.id = ProductId(slugify(&product.name));
            }
            if product.id.is_empty() {
                // Name has no alphanumerics to derive an id from
                return Err(Error::EmptyProductName { index });
            }
            if by_id.insert(product.id.clone(), index).is_some() {
                return Err(Error::DuplicateProductId(product.id.clone()));
            }
        }

        Ok(Self { products, by_id })
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        let list = match value {
            Value::Array(items) => items,
            Value::Object(mut map) => match map.remove("products") {
                Some(Value::Array(items)) => items,
                _ => return Err(Error::CatalogShape),
            },
            _ => return Err(Error::CatalogShape),
        };

        let products = list
            .into_iter()
            .map(serde_json::from_value::<Product>)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::new(products)
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), products = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.by_id.get(id).map(|&i| &self.products[i])
    }

    pub fn contains(&self, id: &ProductId) -> bool {
        self.by_id.contains_key(id)
    }

    /// Distinct categories with product counts, sorted by label.
    /// Products with no category are not counted.
    pub fn categories(&self) -> Vec<(String, usize)> {
        count_labels(self.products.iter().map(|p| p.category.as_str()))
    }

    /// Distinct collections with member counts, sorted by label.
    pub fn collections(&self) -> Vec<(String, usize)> {
        count_labels(self.products.iter().flat_map(|p| p.collections.iter().map(String::as_str)))
    }

    /// For a category label the catalog does not have, the existing label it
    /// was most likely meant to be. `None` if `label` exists or nothing is close.
    pub fn similar_category(&self, label: &str) -> Option<String> {
        similar_label(&self.categories(), label)
    }

    /// Same as [`Catalog::similar_category`], for collections.
    pub fn similar_collection(&self, label: &str) -> Option<String> {
        similar_label(&self.collections(), label)
    }
}

fn similar_label(known: &[(String, usize)], label: &str) -> Option<String> {
    if known.iter().any(|(k, _)| k == label) {
        return None;
    }
    let wanted = normalize(label);
    known
        .iter()
        .find(|(k, _)| levenshtein_within(&normalize(k), &wanted, LABEL_TYPO_BUDGET))
        .map(|(k, _)| k.clone())
}

fn count_labels<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<(String, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for label in labels.filter(|l| !l.is_empty()) {
        *counts.entry(label).or_default() += 1;
    }
    counts.into_iter().map(|(label, n)| (label.to_string(), n)).collect()
}
