use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::EnrichmentError;

/// Product identifier (primary key of the `products` table).
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(id: i64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> i64 {
        self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One row of the product table, as loaded by the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRow {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Decimal,
    /// Stock as stored; the column is a plain signed integer.
    pub stock: i64,
    /// Empty when the product has no image.
    pub image_url: String,
}

/// Display projection of a [`ProductRow`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductItem {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    /// Price rendered as decimal text with its scale preserved (`10.00` stays `"10.00"`).
    pub price: String,
    pub stock: u64,
    pub image_url: String,
}

impl TryFrom<&ProductRow> for ProductItem {
    type Error = EnrichmentError;

    fn try_from(row: &ProductRow) -> Result<Self, Self::Error> {
        let stock = u64::try_from(row.stock).map_err(|_| EnrichmentError::NegativeStock {
            product_id: row.id,
            stock: row.stock,
        })?;

        Ok(Self {
            id: row.id,
            name: row.name.clone(),
            category: row.category.clone(),
            price: row.price.to_string(),
            stock,
            image_url: row.image_url.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn row(price: &str, stock: i64) -> ProductRow {
        ProductRow {
            id: ProductId::new(7),
            name: "Noctua NH-D15".to_string(),
            category: "cooler".to_string(),
            price: Decimal::from_str(price).unwrap(),
            stock,
            image_url: "nh-d15.png".to_string(),
        }
    }

    #[test]
    fn price_text_is_exact() {
        let item = ProductItem::try_from(&row("19.99", 3)).unwrap();
        assert_eq!(item.price, "19.99");
    }

    #[test]
    fn price_text_keeps_trailing_zeros() {
        let item = ProductItem::try_from(&row("10.00", 3)).unwrap();
        assert_eq!(item.price, "10.00");

        let item = ProductItem::try_from(&row("12.5", 3)).unwrap();
        assert_eq!(item.price, "12.5");
    }

    #[test]
    fn item_passes_through_display_fields() {
        let item = ProductItem::try_from(&row("99.90", 0)).unwrap();
        assert_eq!(item.id, ProductId::new(7));
        assert_eq!(item.name, "Noctua NH-D15");
        assert_eq!(item.category, "cooler");
        assert_eq!(item.stock, 0);
        assert_eq!(item.image_url, "nh-d15.png");
    }

    #[test]
    fn negative_stock_is_rejected() {
        let err = ProductItem::try_from(&row("1.00", -2)).unwrap_err();
        assert_eq!(
            err,
            EnrichmentError::NegativeStock {
                product_id: ProductId::new(7),
                stock: -2,
            }
        );
    }
}
