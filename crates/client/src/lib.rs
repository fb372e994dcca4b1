//! `stockdesk-client`
//!
//! **Responsibility:** Operator-side client for the StockDesk API.
//!
//! This crate provides:
//! - A thin HTTP client for the product endpoints
//! - Inventory list state (free-text filter, reveal-count paging)
//! - Product form state for create/edit
//! - One operator session tying catalog, list, and quote together
//!
//! Nothing here renders. Front ends own the widgets; this crate owns the
//! behavior behind them, so it stays testable without a UI attached.

pub mod api;
pub mod form;
pub mod inventory;
pub mod session;

pub use api::{ApiClient, ClientError};
pub use form::ProductForm;
pub use inventory::{InventoryView, PAGE_SIZE};
pub use session::Session;
