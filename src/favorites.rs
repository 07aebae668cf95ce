// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Per-user favorite products.
//!
//! The store is keyed by [`UserId`], an identity the caller has already
//! authenticated. Nothing here parses headers or trusts client input for
//! identity; that is the outer layer's job.

use crate::catalog::Catalog;
use crate::error::{Error, Result};
use crate::types::ProductId;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// An authenticated user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        UserId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Storage for favorites. Implementations must be safe to share across
/// request threads.
pub trait FavoritesStore: Send + Sync {
    /// Add `product` to `user`'s favorites. Returns `false` if it was
    /// already there.
    fn add(&self, user: &UserId, product: &ProductId) -> Result<bool>;

    /// Remove `product`. Returns `false` if it was not a favorite.
    fn remove(&self, user: &UserId, product: &ProductId) -> bool;

    /// Favorites in the order they were added.
    fn list(&self, user: &UserId) -> Vec<ProductId>;

    fn contains(&self, user: &UserId, product: &ProductId) -> bool;
}

/// Process-local favorites, validated against one catalog.
#[derive(Debug)]
pub struct InMemoryFavorites {
    catalog: Arc<Catalog>,
    entries: RwLock<HashMap<UserId, Vec<ProductId>>>,
}

impl InMemoryFavorites {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            catalog,
            entries: RwLock::new(HashMap::new()),
        }
    }
}

impl FavoritesStore for InMemoryFavorites {
    fn add(&self, user: &UserId, product: &ProductId) -> Result<bool> {
        if !self.catalog.contains(product) {
            return Err(Error::UnknownProduct(product.clone()));
        }
        let mut entries = self.entries.write();
        let list = entries.entry(user.clone()).or_default();
        if list.contains(product) {
            return Ok(false);
        }
        list.push(product.clone());
        tracing::debug!(user = %user, product = %product, "favorite added");
        Ok(true)
    }

    fn remove(&self, user: &UserId, product: &ProductId) -> bool {
        let mut entries = self.entries.write();
        let Some(list) = entries.get_mut(user) else {
            return false;
        };
        let before = list.len();
        list.retain(|p| p != product);
        let removed = list.len() != before;
        if list.is_empty() {
            entries.remove(user);
        }
        removed
    }

    fn list(&self, user: &UserId) -> Vec<ProductId> {
        self.entries.read().get(user).cloned().unwrap_or_default()
    }

    fn contains(&self, user: &UserId, product: &ProductId) -> bool {
        self.entries
            .read()
            .get(user)
            .is_some_and(|list| list.contains(product))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::sample_catalog;

    fn store() -> InMemoryFavorites {
        InMemoryFavorites::new(sample_catalog())
    }

    #[test]
    fn test_add_preserves_order_and_ignores_duplicates() {
        let favorites = store();
        let user = UserId::new("u-1");
        assert!(favorites.add(&user, &"menta".into()).unwrap());
        assert!(favorites.add(&user, &"lavanda".into()).unwrap());
        assert!(!favorites.add(&user, &"menta".into()).unwrap());
        assert_eq!(favorites.list(&user), vec![ProductId::from("menta"), ProductId::from("lavanda")]);
    }

    #[test]
    fn test_unknown_product_rejected() {
        let favorites = store();
        let err = favorites.add(&UserId::new("u-1"), &"rosa".into()).unwrap_err();
        assert!(matches!(err, Error::UnknownProduct(ref id) if id.as_str() == "rosa"));
        assert!(favorites.list(&UserId::new("u-1")).is_empty());
    }

    #[test]
    fn test_users_are_isolated() {
        let favorites = store();
        let (a, b) = (UserId::new("a"), UserId::new("b"));
        favorites.add(&a, &"menta".into()).unwrap();
        assert!(favorites.contains(&a, &"menta".into()));
        assert!(!favorites.contains(&b, &"menta".into()));
    }

    #[test]
    fn test_remove() {
        let favorites = store();
        let user = UserId::new("u-1");
        favorites.add(&user, &"menta".into()).unwrap();
        assert!(favorites.remove(&user, &"menta".into()));
        assert!(!favorites.remove(&user, &"menta".into()));
        assert!(favorites.list(&user).is_empty());
    }

    #[test]
    fn test_concurrent_adds() {
        let favorites = store();
        let user = UserId::new("shared");
        let ids = ["lavanda", "menta", "incienso", "difusor-petal"];
        std::thread::scope(|s| {
            for id in ids {
                let (favorites, user) = (&favorites, &user);
                s.spawn(move || favorites.add(user, &id.into()).unwrap());
            }
        });
        let mut listed = favorites.list(&user);
        listed.sort();
        assert_eq!(listed.len(), 4);
    }
}
