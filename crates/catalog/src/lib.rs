//! Catalog domain module.
//!
//! This crate contains the rules for presenting the product table as a list of
//! categories, implemented purely as deterministic domain logic (no IO, no HTTP,
//! no storage).

pub mod aggregator;
pub mod error;
pub mod metadata;
pub mod product;

pub use aggregator::{
    CatalogAggregator, CatalogReport, CategoryViewModel, SkippedCategory, group_by_category,
};
pub use error::{CatalogError, EnrichmentError};
pub use metadata::{CategoryMetadata, MetadataSource, StaticMetadata, capitalize};
pub use product::{ProductId, ProductItem, ProductRow};
