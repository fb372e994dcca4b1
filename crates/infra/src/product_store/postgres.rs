//! Postgres-backed product store.
//!
//! One flat `products` table. The table is created on connect if missing;
//! the schema is small enough that a migration pipeline would be ceremony.
//!
//! sqlx errors surface as [`StoreError::Storage`] with the failing operation
//! named; a zero-row UPDATE/DELETE surfaces as [`StoreError::NotFound`].

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool, Row};
use tracing::instrument;

use stockdesk_core::ProductId;
use stockdesk_products::{Product, ProductDraft};

use super::{ProductStore, StoreError};

/// Postgres-backed product store.
///
/// Cloning shares the underlying pool; all operations are safe to call from
/// concurrent handlers.
#[derive(Debug, Clone)]
pub struct PostgresProductStore {
    pool: Arc<PgPool>,
}

impl PostgresProductStore {
    /// Connect and make sure the `products` table exists.
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let pool = PgPool::connect(database_url)
            .await
            .context("failed to create Postgres pool for the product store")?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS products (
                id          UUID PRIMARY KEY,
                code        TEXT NOT NULL,
                description TEXT NOT NULL,
                brand       TEXT NOT NULL,
                price       DOUBLE PRECISION NOT NULL,
                updated_at  TIMESTAMPTZ NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .context("failed to create products table")?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// Wrap an existing pool (the table must already exist).
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool: Arc::new(pool),
        }
    }
}

#[async_trait]
impl ProductStore for PostgresProductStore {
    #[instrument(skip(self), err)]
    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, code, description, brand, price, updated_at
            FROM products
            ORDER BY updated_at DESC, id DESC
            "#,
        )
        .fetch_all(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("list", e))?;

        let mut products = Vec::with_capacity(rows.len());
        for row in rows {
            let record = ProductRow::from_row(&row)
                .map_err(|e| StoreError::Storage(format!("failed to read product row: {e}")))?;
            products.push(record.into());
        }
        Ok(products)
    }

    #[instrument(skip(self, draft), err)]
    async fn create(&self, draft: ProductDraft) -> Result<Product, StoreError> {
        let product = Product::from_draft(ProductId::new(), draft, Utc::now());

        sqlx::query(
            r#"
            INSERT INTO products (id, code, description, brand, price, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(product.id.as_uuid())
        .bind(&product.code)
        .bind(&product.description)
        .bind(&product.brand)
        .bind(product.price)
        .bind(product.updated_at)
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("create", e))?;

        Ok(product)
    }

    #[instrument(skip(self, draft), fields(product_id = %id), err)]
    async fn update(&self, id: ProductId, draft: ProductDraft) -> Result<Product, StoreError> {
        let updated_at = Utc::now();

        let result = sqlx::query(
            r#"
            UPDATE products
            SET code = $2, description = $3, brand = $4, price = $5, updated_at = $6
            WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .bind(draft.code())
        .bind(draft.description())
        .bind(draft.brand())
        .bind(draft.price())
        .bind(updated_at)
        .execute(&*self.pool)
        .await
        .map_err(|e| map_sqlx_error("update", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(Product::from_draft(id, draft, updated_at))
    }

    #[instrument(skip(self), fields(product_id = %id), err)]
    async fn delete(&self, id: ProductId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id.as_uuid())
            .execute(&*self.pool)
            .await
            .map_err(|e| map_sqlx_error("delete", e))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound);
        }
        Ok(())
    }
}

/// Map sqlx errors to [`StoreError`].
fn map_sqlx_error(operation: &str, err: sqlx::Error) -> StoreError {
    match err {
        sqlx::Error::RowNotFound => StoreError::NotFound,
        sqlx::Error::Database(db_err) => StoreError::Storage(format!(
            "database error in {}: {}",
            operation,
            db_err.message()
        )),
        sqlx::Error::PoolClosed => {
            StoreError::Storage(format!("connection pool closed in {operation}"))
        }
        _ => StoreError::Storage(format!("sqlx error in {operation}: {err}")),
    }
}

#[derive(Debug)]
struct ProductRow {
    id: uuid::Uuid,
    code: String,
    description: String,
    brand: String,
    price: f64,
    updated_at: DateTime<Utc>,
}

impl<'r> FromRow<'r, PgRow> for ProductRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        Ok(ProductRow {
            id: row.try_get("id")?,
            code: row.try_get("code")?,
            description: row.try_get("description")?,
            brand: row.try_get("brand")?,
            price: row.try_get("price")?,
            updated_at: row.try_get("updated_at")?,
        })
    }
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::from_uuid(row.id),
            code: row.code,
            description: row.description,
            brand: row.brand,
            price: row.price,
            updated_at: row.updated_at,
        }
    }
}
