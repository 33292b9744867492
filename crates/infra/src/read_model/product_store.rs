use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use thiserror::Error;

use pcshop_catalog::{ProductId, ProductRow};

/// Data-access failure.
///
/// Listing either succeeds with the full table or fails with one of these;
/// there are no partial results.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("{0}")]
    Database(String),

    #[error("{0}")]
    Unavailable(String),

    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

/// Read access to the product table.
#[async_trait::async_trait]
pub trait ProductStore: Send + Sync {
    /// All products, ordered by product id ascending.
    async fn list_products(&self) -> Result<Vec<ProductRow>, StoreError>;
}

#[async_trait::async_trait]
impl<S> ProductStore for Arc<S>
where
    S: ProductStore + ?Sized,
{
    async fn list_products(&self) -> Result<Vec<ProductRow>, StoreError> {
        (**self).list_products().await
    }
}

/// In-memory product table for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: RwLock<BTreeMap<ProductId, ProductRow>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(rows: impl IntoIterator<Item = ProductRow>) -> Self {
        let store = Self::new();
        for row in rows {
            store.upsert(row);
        }
        store
    }

    /// Insert or replace a product by id.
    pub fn upsert(&self, row: ProductRow) {
        if let Ok(mut map) = self.inner.write() {
            map.insert(row.id, row);
        }
    }

    pub fn remove(&self, id: ProductId) -> Option<ProductRow> {
        self.inner.write().ok()?.remove(&id)
    }

    pub fn clear(&self) {
        if let Ok(mut map) = self.inner.write() {
            map.clear();
        }
    }

    pub fn len(&self) -> usize {
        self.inner.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait::async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list_products(&self) -> Result<Vec<ProductRow>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::Unavailable("in-memory product table lock poisoned".to_string()))?;
        Ok(map.values().cloned().collect())
    }
}
