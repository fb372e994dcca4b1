//! In-memory product store for tests/dev.

use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use stockdesk_core::ProductId;
use stockdesk_products::{Product, ProductDraft};

use super::{ProductStore, StoreError};

/// In-memory store, the dev/test twin of the Postgres-backed one.
///
/// Listing clones and sorts, which is fine at catalog sizes a single
/// operator manages.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    inner: Mutex<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeded store for tests.
    pub fn with_products(products: Vec<Product>) -> Self {
        Self {
            inner: Mutex::new(products),
        }
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, Vec<Product>>, StoreError> {
        self.inner
            .lock()
            .map_err(|_| StoreError::Storage("product store mutex poisoned".to_string()))
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let guard = self.lock()?;
        let mut products = guard.clone();
        // Newest first; UUIDv7 ids break timestamp ties deterministically.
        products.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| b.id.as_uuid().cmp(a.id.as_uuid()))
        });
        Ok(products)
    }

    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = Product::from_draft(ProductId::new(), draft, Utc::now());
        let mut guard = self.lock()?;
        guard.push(product.clone());
        Ok(product)
    }

    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StoreError> {
        let mut guard = self.lock()?;
        match guard.iter_mut().find(|p| p.id == id) {
            Some(product) => {
                product.apply_draft(draft, Utc::now());
                Ok(product.clone())
            }
            None => Err(StoreError::NotFound),
        }
    }

    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let mut guard = self.lock()?;
        let before = guard.len();
        guard.retain(|p| p.id != id);
        if guard.len() == before {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}
