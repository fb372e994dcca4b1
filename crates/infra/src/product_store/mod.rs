//! Product storage abstractions.

pub mod in_memory;
pub mod postgres;

use async_trait::async_trait;
use thiserror::Error;

use stockdesk_core::ProductId;
use stockdesk_products::{Product, ProductDraft};

pub use in_memory::InMemoryProductStore;
pub use postgres::PostgresProductStore;

/// Product store operation error.
///
/// Infrastructure failures only; payload validation happens before a draft
/// ever reaches the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// No product with the given id.
    #[error("product not found")]
    NotFound,

    /// Anything the backing storage reports.
    #[error("storage failure: {0}")]
    Storage(String),
}

/// CRUD seam over the product catalog.
///
/// `list` returns newest-first by `updated_at`. `create` assigns the id and
/// the timestamp; `update` bumps the timestamp. Implementations report a
/// missing id as [`StoreError::NotFound`] and leave HTTP mapping to the
/// caller.
#[async_trait]
pub trait ProductStore: Send + Sync {
    async fn list(&self) -> Result<Vec<Product>, StoreError>;
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError>;
    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StoreError>;
    async fn delete(&self, id: ProductId) -> Result<(), StoreError>;
}
