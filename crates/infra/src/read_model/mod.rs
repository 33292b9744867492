//! Product read stores: the ordered query the catalog listing is built from.

pub mod postgres;
pub mod product_store;

pub use postgres::PostgresProductStore;
pub use product_store::{InMemoryProductStore, ProductStore, StoreError};
