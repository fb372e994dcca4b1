//! Infrastructure layer: product storage adapters.
//!
//! The API consumes the [`ProductStore`] seam; this crate provides the
//! in-memory twin used in dev/tests and the Postgres-backed store used in
//! production.

pub mod product_store;

pub use product_store::{InMemoryProductStore, PostgresProductStore, ProductStore, StoreError};
