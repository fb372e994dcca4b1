use serde::{Deserialize, Serialize};

use stockdesk_core::ProductId;
use stockdesk_products::Product;

use crate::numeric::NumericInput;

/// Editable fields of a quote line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineField {
    Quantity,
    UnitPrice,
}

/// Quote line: a snapshot of one product plus the editable quantity and price.
///
/// The snapshot is taken at add time; later catalog edits or deletions leave
/// the line untouched. `catalog_price` is kept for reference, totals use only
/// `unit_price`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteLineItem {
    pub product_id: ProductId,
    pub code: String,
    pub description: String,
    pub brand: String,
    pub catalog_price: f64,
    pub unit_price: NumericInput,
    pub quantity: NumericInput,
}

impl QuoteLineItem {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            code: product.code.clone(),
            description: product.description.clone(),
            brand: product.brand.clone(),
            catalog_price: product.price,
            unit_price: NumericInput::from(product.price),
            quantity: NumericInput::from(1.0),
        }
    }

    /// Extended amount of this line; unparsable fields count as zero.
    pub fn line_total(&self) -> f64 {
        self.unit_price.value_or_zero() * self.quantity.value_or_zero()
    }
}

/// Derived quote amounts. Never stored; recomputed from current state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuoteTotals {
    pub subtotal: f64,
    pub total_with_shipping: f64,
    pub surcharge_amount: f64,
    pub grand_total: f64,
}

/// An in-progress price quote.
///
/// Lives only for the session that builds it; nothing here is persisted.
/// Lines keep insertion order, and a product appears at most once: adding it
/// again bumps the quantity instead of duplicating the line.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Quote {
    line_items: Vec<QuoteLineItem>,
    shipping_cost: NumericInput,
    surcharge_percentage: NumericInput,
}

impl Quote {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn line_items(&self) -> &[QuoteLineItem] {
        &self.line_items
    }

    pub fn is_empty(&self) -> bool {
        self.line_items.is_empty()
    }

    pub fn shipping_cost(&self) -> &NumericInput {
        &self.shipping_cost
    }

    pub fn surcharge_percentage(&self) -> &NumericInput {
        &self.surcharge_percentage
    }

    /// Add a product to the quote.
    ///
    /// A product already on the quote gets its quantity bumped by one and
    /// keeps its unit and catalog price; a new product is appended at the end
    /// with quantity 1 and `unit_price` preset to the catalog price. Always
    /// succeeds.
    pub fn add_product(&mut self, product: &Product) {
        match self
            .line_items
            .iter_mut()
            .find(|line| line.product_id == product.id)
        {
            Some(line) => {
                let bumped = line.quantity.value_or_zero() + 1.0;
                line.quantity = NumericInput::from(bumped);
            }
            None => self.line_items.push(QuoteLineItem::from_product(product)),
        }
    }

    /// Store a raw edit on one line field, verbatim and unvalidated.
    ///
    /// Silent no-op when the product is not on the quote (stale edits from
    /// the screen).
    pub fn update_line_field(&mut self, product_id: ProductId, field: LineField, value: &str) {
        if let Some(line) = self
            .line_items
            .iter_mut()
            .find(|line| line.product_id == product_id)
        {
            match field {
                LineField::Quantity => line.quantity.set(value),
                LineField::UnitPrice => line.unit_price.set(value),
            }
        }
    }

    /// Remove a line, preserving the relative order of the rest. No-op when
    /// the product is not on the quote.
    pub fn remove_line_item(&mut self, product_id: ProductId) {
        self.line_items.retain(|line| line.product_id != product_id);
    }

    pub fn set_shipping_cost(&mut self, raw: impl Into<String>) {
        self.shipping_cost.set(raw);
    }

    pub fn set_surcharge_percentage(&mut self, raw: impl Into<String>) {
        self.surcharge_percentage.set(raw);
    }

    /// Current totals. Pure: reads the quote, mutates nothing.
    ///
    /// Unparsable quantities, prices, shipping, or surcharge count as zero in
    /// their term. Accumulation keeps full float precision; rounding is the
    /// formatter's job.
    pub fn totals(&self) -> QuoteTotals {
        let subtotal: f64 = self.line_items.iter().map(QuoteLineItem::line_total).sum();
        let total_with_shipping = subtotal + self.shipping_cost.value_or_zero();
        let surcharge_amount =
            total_with_shipping * (self.surcharge_percentage.value_or_zero() / 100.0);
        let grand_total = total_with_shipping + surcharge_amount;

        QuoteTotals {
            subtotal,
            total_with_shipping,
            surcharge_amount,
            grand_total,
        }
    }
}
