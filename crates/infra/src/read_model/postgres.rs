//! Postgres-backed product store.
//!
//! Reads the `products` table:
//!
//! | column         | type     | notes                        |
//! |----------------|----------|------------------------------|
//! | `product_id`   | integer  | primary key, ordering key    |
//! | `product_name` | text     |                              |
//! | `category`     | text     | grouping key                 |
//! | `sales_price`  | numeric  | decoded as `rust_decimal`    |
//! | `stock_count`  | integer  |                              |
//! | `img_url`      | text     | nullable, `NULL` reads as "" |
//!
//! ## Error Mapping
//!
//! | SQLx Error | StoreError |
//! |------------|------------|
//! | Database (any code) | `Database` |
//! | PoolClosed / PoolTimedOut / Io / Tls | `Unavailable` |
//! | ColumnDecode / ColumnNotFound / Decode | `Decode` |
//! | Other | `Other` |

use std::sync::Arc;

use rust_decimal::Decimal;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::instrument;

use pcshop_catalog::{ProductId, ProductRow};

use super::product_store::{ProductStore, StoreError};

#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: Arc<PgPool>,
}

impl PostgresProductStore {
    /// Create a new PostgresProductStore with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait::async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self), err)]
    async fn list_products(&self) -> Result<Vec<ProductRow>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT
                CAST(product_id AS BIGINT) AS product_id,
                product_name,
                category,
                sales_price,
                CAST(stock_count AS BIGINT) AS stock_count,
                COALESCE(img_url, '') AS img_url
            FROM products
            ORDER BY product_id ASC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list_products", e))?;

        rows.iter()
            .map(|row| decode_product(row).map_err(|e| map_sqlx_error("list_products", e)))
            .collect()
    }
}

fn decode_product(row: &PgRow) -> Result<ProductRow, sqlx::Error> {
    Ok(ProductRow {
        id: ProductId::new(row.try_get::<i64, _>("product_id")?),
        name: row.try_get("product_name")?,
        category: row.try_get("category")?,
        price: row.try_get::<Decimal, _>("sales_price")?,
        stock: row.try_get::<i64, _>("stock_count")?,
        image_url: row.try_get("img_url")?,
    })
}

pub(crate) fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::Database(db_err) => {
            let msg = match db_err.code() {
                Some(code) => format!("{} (code {code}) in {operation}", db_err.message()),
                None => format!("{} in {operation}", db_err.message()),
            };
            StoreError::Database(msg)
        }
        sqlx::Error::PoolClosed => {
            StoreError::Unavailable(format!("connection pool closed in {operation}"))
        }
        sqlx::Error::PoolTimedOut => {
            StoreError::Unavailable(format!("timed out acquiring a connection in {operation}"))
        }
        err @ (sqlx::Error::Io(_) | sqlx::Error::Tls(_)) => {
            StoreError::Unavailable(format!("{err} in {operation}"))
        }
        err @ (sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::Decode(_)) => StoreError::Decode(format!("{err} in {operation}")),
        _ => StoreError::Other(format!("{err} in {operation}")),
    }
}
