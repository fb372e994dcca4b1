use serde::Deserialize;

use stockdesk_core::{DomainError, DomainResult};
use stockdesk_products::ProductDraft;

// -------------------------
// Request DTOs
// -------------------------

/// Create/update payload for a product.
///
/// Fields are optional at the serde layer so that a missing key surfaces as
/// a 400 through [`ProductRequest::into_draft`] rather than as a
/// deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct ProductRequest {
    pub code: Option<String>,
    pub description: Option<String>,
    pub brand: Option<String>,
    pub price: Option<PriceInput>,
}

/// Price as submitted by the client: either a JSON number or the raw form
/// string. Coerced server-side with a float parse.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum PriceInput {
    Number(f64),
    Text(String),
}

impl PriceInput {
    fn parse(&self) -> DomainResult<f64> {
        match self {
            PriceInput::Number(n) => Ok(*n),
            PriceInput::Text(s) => s
                .trim()
                .parse::<f64>()
                .map_err(|_| DomainError::validation("price must be a number")),
        }
    }
}

impl ProductRequest {
    /// Validate the payload into a [`ProductDraft`].
    pub fn into_draft(self) -> DomainResult<ProductDraft> {
        let code = self
            .code
            .ok_or_else(|| DomainError::validation("code is required"))?;
        let description = self
            .description
            .ok_or_else(|| DomainError::validation("description is required"))?;
        let brand = self
            .brand
            .ok_or_else(|| DomainError::validation("brand is required"))?;
        let price = self
            .price
            .ok_or_else(|| DomainError::validation("price is required"))?
            .parse()?;

        ProductDraft::new(code, description, brand, price)
    }
}
