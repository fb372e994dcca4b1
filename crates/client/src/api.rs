//! HTTP client for the product endpoints.

use stockdesk_core::ProductId;
use stockdesk_products::Product;

use crate::form::ProductForm;

/// Client for the product API.
///
/// One method per endpoint, no caching and no retries. Callers (the session)
/// decide what a failure means for the screen.
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// Check connectivity by hitting the health endpoint.
    pub async fn check_connectivity(&self) -> bool {
        let client = reqwest::Client::new();
        let url = format!("{}/health", self.base_url);
        client.get(&url).send().await.is_ok()
    }

    /// Fetch the full catalog, newest first.
    pub async fn fetch_products(&self) -> Result<Vec<Product>, ClientError> {
        let client = reqwest::Client::new();
        let url = format!("{}/products", self.base_url);

        let resp = client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Create a product from the form as typed; the server validates.
    pub async fn create_product(&self, form: &ProductForm) -> Result<Product, ClientError> {
        let client = reqwest::Client::new();
        let url = format!("{}/products", self.base_url);

        let resp = client
            .post(&url)
            .json(form)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Replace every field of an existing product.
    pub async fn update_product(
        &self,
        id: ProductId,
        form: &ProductForm,
    ) -> Result<Product, ClientError> {
        let client = reqwest::Client::new();
        let url = format!("{}/products/{}", self.base_url, id);

        let resp = client
            .put(&url)
            .json(form)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        resp.json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))
    }

    /// Delete a product. Success carries no body.
    pub async fn delete_product(&self, id: ProductId) -> Result<(), ClientError> {
        let client = reqwest::Client::new();
        let url = format!("{}/products/{}", self.base_url, id);

        let resp = client
            .delete(&url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        if !resp.status().is_success() {
            return Err(ClientError::Api(
                resp.status().as_u16(),
                resp.text().await.unwrap_or_default(),
            ));
        }

        Ok(())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),
    #[error("API error ({0}): {1}")]
    Api(u16, String),
    #[error("parse error: {0}")]
    Parse(String),
}
