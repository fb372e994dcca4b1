//! Quotes domain module.
//!
//! Business rules for the quote screen: line-item aggregation with
//! merge-on-add, permissive numeric fields, derived totals, and the printable
//! document. Deterministic domain logic only (no IO, no HTTP, no storage).

pub mod document;
pub mod numeric;
pub mod quote;

pub use document::{ClientInfo, CompanyInfo, QuoteDocument, DISCLAIMER, VALIDITY_DAYS};
pub use numeric::NumericInput;
pub use quote::{LineField, Quote, QuoteLineItem, QuoteTotals};
