use std::sync::Arc;

use thiserror::Error;

use pcshop_catalog::{CatalogAggregator, CatalogError, CategoryViewModel};
use pcshop_infra::{
    AppConfig, InMemoryProductStore, PostgresProductStore, ProductStore, StoreError, db,
};

/// Why the catalog listing could not be produced.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("data access failed: {0}")]
    Store(#[from] StoreError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Request-independent services shared by all handlers.
pub struct AppServices {
    store: Arc<dyn ProductStore>,
    aggregator: CatalogAggregator,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self {
            store,
            aggregator: CatalogAggregator::new(),
        }
    }

    /// Load the whole product table and group it into categories.
    pub async fn list_categories(&self) -> Result<Vec<CategoryViewModel>, ListingError> {
        let rows = self.store.list_products().await.map_err(|e| {
            tracing::error!(error = %e, "failed to load products");
            e
        })?;

        let categories = self.aggregator.list_categories(&rows)?;
        tracing::info!(
            products = rows.len(),
            categories = categories.len(),
            "listed catalog"
        );
        Ok(categories)
    }
}

/// Wire the product store selected by configuration.
pub async fn build_services(config: &AppConfig) -> Result<AppServices, StoreError> {
    let store: Arc<dyn ProductStore> = match &config.database {
        Some(db_config) => {
            let pool = db::connect_pool(db_config).await?;
            Arc::new(PostgresProductStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; serving an empty in-memory product table");
            Arc::new(InMemoryProductStore::new())
        }
    };

    Ok(AppServices::new(store))
}
