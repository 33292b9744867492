//! Infrastructure layer: database access, read stores, configuration.

pub mod config;
pub mod db;
pub mod read_model;

mod integration_tests;

pub use config::{AppConfig, ConfigError, DatabaseConfig};
pub use read_model::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};
