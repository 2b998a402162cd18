//! Domain error model.

use thiserror::Error;

use crate::id::{CategoryId, SubcategoryId};

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a recoverable, structured result: callers (the seller
/// management UI, the storefront) decide how to surface it. Store, network and
/// upload failures belong to the external collaborators, not here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required input field was absent or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A price was non-numeric, not strictly positive, or above the initial price.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// A stock quantity was non-integer or would become negative.
    #[error("invalid stock: {0}")]
    InvalidStock(String),

    /// The subcategory exists but belongs to a different category.
    #[error("subcategory {subcategory_id} does not belong to category {category_id}")]
    TaxonomyMismatch {
        category_id: CategoryId,
        subcategory_id: SubcategoryId,
    },

    /// A product must carry at least one image.
    #[error("at least one image is required")]
    NoImages,

    /// A category or subcategory identifier does not resolve.
    #[error("invalid taxonomy reference: {0}")]
    InvalidTaxonomyReference(String),

    /// A value failed validation (e.g. malformed slug).
    #[error("validation failed: {0}")]
    Validation(String),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// A requested resource was not found (domain-level).
    #[error("not found")]
    NotFound,

    /// The operation conflicts with the current snapshot (e.g. removing a
    /// category that products still reference).
    #[error("conflict: {0}")]
    Conflict(String),

    /// The acting seller does not own the resource.
    #[error("unauthorized")]
    Unauthorized,
}

impl DomainError {
    pub fn invalid_price(msg: impl Into<String>) -> Self {
        Self::InvalidPrice(msg.into())
    }

    pub fn invalid_stock(msg: impl Into<String>) -> Self {
        Self::InvalidStock(msg.into())
    }

    pub fn dangling(msg: impl Into<String>) -> Self {
        Self::InvalidTaxonomyReference(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn not_found() -> Self {
        Self::NotFound
    }

    /// Whether the error came from validating seller input (as opposed to a
    /// conflict with stored state or an authorization failure).
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingField(_)
                | Self::InvalidPrice(_)
                | Self::InvalidStock(_)
                | Self::TaxonomyMismatch { .. }
                | Self::NoImages
                | Self::InvalidTaxonomyReference(_)
                | Self::Validation(_)
        )
    }
}
