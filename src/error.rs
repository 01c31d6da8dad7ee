//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using CatalogError.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur while building a catalog from seed data.
///
/// These surface authoring mistakes once, at catalog load. Runtime
/// scheduler and scorer operations are infallible and degrade gracefully
/// instead (unknown ids are ignored, short pools return short results).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate item id: {id}")]
    DuplicateId { id: String },

    #[error("seed {id}: template {template:?} contains no known placeholder")]
    UnknownPlaceholder { id: String, template: String },

    #[error("seed {id}: substitution table for {placeholder} is empty")]
    EmptyTable { id: String, placeholder: String },
}
