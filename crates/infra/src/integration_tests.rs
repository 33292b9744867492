//! Integration tests for the read path.
//!
//! Tests: ProductStore → CatalogAggregator
//!
//! Verifies:
//! - Store ordering (ascending id) drives category order and item order
//! - Listing from an empty store is reported as not found

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pcshop_catalog::{CatalogAggregator, CatalogError, ProductId, ProductRow};
    use rust_decimal::Decimal;

    use crate::read_model::{InMemoryProductStore, ProductStore};

    fn row(id: i64, category: &str, image_url: &str) -> ProductRow {
        ProductRow {
            id: ProductId::new(id),
            name: format!("Part {id}"),
            category: category.to_string(),
            price: Decimal::new(10_000 + id, 2),
            stock: 2,
            image_url: image_url.to_string(),
        }
    }

    #[tokio::test]
    async fn insertion_order_does_not_leak_into_listing() {
        // Inserted out of id order; the listing must follow ids.
        let store: Arc<dyn ProductStore> = Arc::new(InMemoryProductStore::with_rows([
            row(4, "ram", "ram-4.png"),
            row(2, "gpu", "gpu-2.png"),
            row(3, "ram", "ram-3.png"),
            row(1, "ram", "ram-1.png"),
        ]));

        let rows = store.list_products().await.unwrap();
        let out = CatalogAggregator::new().list_categories(&rows).unwrap();

        let titles: Vec<&str> = out.iter().map(|vm| vm.title.as_str()).collect();
        assert_eq!(titles, ["RAM", "GPU"]);
        assert_eq!(out[0].image, "ram-1.png");

        let ram_ids: Vec<i64> = out[0].items.iter().map(|i| i.id.get()).collect();
        assert_eq!(ram_ids, [1, 3, 4]);
    }

    #[tokio::test]
    async fn empty_store_is_not_found() {
        let store = InMemoryProductStore::new();

        let rows = store.list_products().await.unwrap();
        let err = CatalogAggregator::new().list_categories(&rows).unwrap_err();

        assert_eq!(err, CatalogError::NotFound);
    }
}
