// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for catalog loading, configuration and search.
//!
//! Query time has exactly one failure mode: [`Error::InvalidQuery`]. Everything
//! else happens once, at startup, while reading the catalog or the config.

use crate::types::ProductId;
use std::path::PathBuf;

/// Result type for essentia operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Search term was empty or whitespace.
    #[error("invalid query: search term must not be empty")]
    InvalidQuery,

    /// Catalog or config file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog is not valid JSON, or not shaped like a product list.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Catalog JSON parsed, but the top level is neither an array nor `{"products": [...]}`.
    #[error("invalid catalog shape: expected an array of products or an object with a `products` array")]
    CatalogShape,

    /// Two products resolve to the same id.
    #[error("duplicate product id `{0}`")]
    DuplicateProductId(ProductId),

    /// A product has no usable name (and so no derivable id).
    #[error("product at position {index} has an empty name")]
    EmptyProductName { index: usize },

    /// Referenced a product the catalog does not contain.
    #[error("unknown product id `{0}`")]
    UnknownProduct(ProductId),

    /// Config sources could not be merged or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Config deserialized but failed validation.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::InvalidQuery.to_string(),
            "invalid query: search term must not be empty"
        );
        assert_eq!(
            Error::DuplicateProductId(ProductId::from("lavanda")).to_string(),
            "duplicate product id `lavanda`"
        );
        let io = Error::io(
            "/tmp/missing.json",
            std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        );
        assert_eq!(io.to_string(), "failed to read /tmp/missing.json: no such file");
    }
}
