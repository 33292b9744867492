//! Grouping of product rows into per-category view models.
//!
//! The aggregator is a pure, single-pass transformation:
//!
//! 1. rows are partitioned by category into an insertion-ordered map, so the
//!    output follows the first-seen order of categories in the input,
//! 2. each category is enriched independently (metadata + item projection),
//! 3. categories whose enrichment fails are dropped and reported in
//!    [`CatalogReport::skipped`], the rest are returned.
//!
//! Row order is the persistence layer's contract (ascending product id); the
//! aggregator never re-sorts.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, EnrichmentError};
use crate::metadata::{MetadataSource, StaticMetadata};
use crate::product::{ProductItem, ProductRow};

/// Client-facing view of one category and its products.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryViewModel {
    pub title: String,
    /// Image of the first product of the category (input order).
    pub image: String,
    pub description: String,
    pub items: Vec<ProductItem>,
}

/// A category that was dropped during enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedCategory {
    pub category: String,
    pub error: EnrichmentError,
}

/// Outcome of one aggregation pass: built categories plus the ones that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    pub categories: Vec<CategoryViewModel>,
    pub skipped: Vec<SkippedCategory>,
}

/// Partition rows by category, preserving first-seen category order and row
/// order within each category.
pub fn group_by_category(rows: &[ProductRow]) -> IndexMap<&str, Vec<&ProductRow>> {
    let mut groups: IndexMap<&str, Vec<&ProductRow>> = IndexMap::new();
    for row in rows {
        groups.entry(row.category.as_str()).or_default().push(row);
    }
    groups
}

#[derive(Debug, Default, Clone)]
pub struct CatalogAggregator<M = StaticMetadata> {
    metadata: M,
}

impl CatalogAggregator {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<M: MetadataSource> CatalogAggregator<M> {
    pub fn with_metadata(metadata: M) -> Self {
        Self { metadata }
    }

    /// Build every category, collecting failures instead of aborting.
    pub fn build(&self, rows: &[ProductRow]) -> CatalogReport {
        let mut report = CatalogReport::default();

        for (category, products) in group_by_category(rows) {
            match self.build_category(category, &products) {
                Ok(view) => report.categories.push(view),
                Err(error) => {
                    tracing::warn!(category, %error, "skipping category");
                    report.skipped.push(SkippedCategory {
                        category: category.to_string(),
                        error,
                    });
                }
            }
        }

        report
    }

    /// List categories with the result policy applied.
    ///
    /// - empty input is [`CatalogError::NotFound`],
    /// - non-empty input where every category failed is
    ///   [`CatalogError::AllCategoriesFailed`].
    pub fn list_categories(
        &self,
        rows: &[ProductRow],
    ) -> Result<Vec<CategoryViewModel>, CatalogError> {
        if rows.is_empty() {
            return Err(CatalogError::NotFound);
        }

        let report = self.build(rows);
        if report.categories.is_empty() {
            return Err(CatalogError::AllCategoriesFailed {
                categories: report.skipped.len(),
            });
        }

        tracing::debug!(
            rows = rows.len(),
            categories = report.categories.len(),
            skipped = report.skipped.len(),
            "catalog aggregated"
        );
        Ok(report.categories)
    }

    fn build_category(
        &self,
        category: &str,
        products: &[&ProductRow],
    ) -> Result<CategoryViewModel, EnrichmentError> {
        let meta = self.metadata.resolve(category)?;

        let items = products
            .iter()
            .map(|row| ProductItem::try_from(*row))
            .collect::<Result<Vec<_>, _>>()?;

        let image = products
            .first()
            .map(|row| row.image_url.clone())
            .unwrap_or_default();

        Ok(CategoryViewModel {
            title: meta.title.into_owned(),
            image,
            description: meta.description.into_owned(),
            items,
        })
    }
}
