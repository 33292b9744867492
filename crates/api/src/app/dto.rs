use serde::Serialize;

use pcshop_catalog::{CategoryViewModel, ProductItem};

// -------------------------
// Response DTOs
// -------------------------

/// One category as returned by `GET /products/`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductResponse {
    pub title: String,
    pub image: String,
    pub description: String,
    pub product_list: Vec<ProductItemResponse>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductItemResponse {
    pub product_id: i64,
    pub product_name: String,
    pub product_category: String,
    pub product_price: String,
    pub product_stock: u64,
    pub img_url: String,
}

impl From<ProductItem> for ProductItemResponse {
    fn from(item: ProductItem) -> Self {
        Self {
            product_id: item.id.get(),
            product_name: item.name,
            product_category: item.category,
            product_price: item.price,
            product_stock: item.stock,
            img_url: item.image_url,
        }
    }
}

impl From<CategoryViewModel> for ProductResponse {
    fn from(vm: CategoryViewModel) -> Self {
        Self {
            title: vm.title,
            image: vm.image,
            description: vm.description,
            product_list: vm.items.into_iter().map(ProductItemResponse::from).collect(),
        }
    }
}
