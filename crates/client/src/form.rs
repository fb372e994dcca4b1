//! Edit state for the product form.

use serde::Serialize;

use stockdesk_products::Product;

/// The four product fields exactly as typed, all text.
///
/// The form is also the wire payload: the server accepts the price as a
/// string and does the numeric coercion itself, so nothing is parsed on
/// this side and a half-typed price never blocks the form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ProductForm {
    pub code: String,
    pub description: String,
    pub brand: String,
    pub price: String,
}

impl ProductForm {
    /// Blank form for creating a product.
    pub fn new() -> Self {
        Self::default()
    }

    /// Form prefilled from an existing product, for editing.
    pub fn for_product(product: &Product) -> Self {
        Self {
            code: product.code.clone(),
            description: product.description.clone(),
            brand: product.brand.clone(),
            price: product.price.to_string(),
        }
    }
}
