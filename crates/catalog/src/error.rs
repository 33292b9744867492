//! Catalog error model.

use thiserror::Error;

use crate::product::ProductId;

/// Failure while building the view model of a single category.
///
/// These never escape the aggregator: the affected category is dropped and the
/// remaining categories are still returned.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EnrichmentError {
    /// Stock must be non-negative to be displayed.
    #[error("product {product_id} has negative stock ({stock})")]
    NegativeStock { product_id: ProductId, stock: i64 },

    /// Metadata for the category could not be resolved.
    #[error("metadata unavailable for category {category:?}: {reason}")]
    Metadata { category: String, reason: String },
}

impl EnrichmentError {
    pub fn metadata(category: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Metadata {
            category: category.into(),
            reason: reason.into(),
        }
    }
}

/// Failure of the catalog listing as a whole.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    /// The product table is empty.
    #[error("No products found")]
    NotFound,

    /// Rows exist but no category could be built.
    #[error("Failed to process any product categories")]
    AllCategoriesFailed { categories: usize },
}
