//! One operator session: the live catalog plus the quote being built.

use chrono::Utc;

use stockdesk_core::ProductId;
use stockdesk_products::Product;
use stockdesk_quotes::{ClientInfo, CompanyInfo, Quote, QuoteDocument};

use crate::api::{ApiClient, ClientError};
use crate::form::ProductForm;
use crate::inventory::InventoryView;

/// Everything one operator works with: the fetched catalog, the list view
/// over it, the quote in progress, and the client block for the document.
///
/// Mutations go through the API and then re-fetch the whole catalog, so the
/// list always shows what the server persisted. The quote lives only here;
/// closing the session discards it.
pub struct Session {
    api: ApiClient,
    products: Vec<Product>,
    loading: bool,
    pub inventory: InventoryView,
    pub quote: Quote,
    quote_search: String,
    pub client_info: ClientInfo,
}

impl Session {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            products: Vec::new(),
            loading: true,
            inventory: InventoryView::new(),
            quote: Quote::new(),
            quote_search: String::new(),
            client_info: ClientInfo::default(),
        }
    }

    /// Catalog as of the last successful refresh, newest first.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// True until the first refresh attempt finishes, either way.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Free-text search of the quote screen's product picker.
    pub fn quote_search(&self) -> &str {
        &self.quote_search
    }

    pub fn set_quote_search(&mut self, text: impl Into<String>) {
        self.quote_search = text.into();
    }

    /// Re-fetch the catalog from the API.
    ///
    /// On failure the previous catalog stays on screen; the error is logged
    /// and returned so a front end can surface it.
    pub async fn refresh(&mut self) -> Result<(), ClientError> {
        let result = self.api.fetch_products().await;
        self.loading = false;

        match result {
            Ok(products) => {
                self.products = products;
                Ok(())
            }
            Err(err) => {
                tracing::warn!(error = %err, "catalog refresh failed");
                Err(err)
            }
        }
    }

    /// Create a product, then refresh so the new row appears at the top.
    pub async fn create_product(&mut self, form: &ProductForm) -> Result<(), ClientError> {
        self.api.create_product(form).await?;
        self.refresh().await
    }

    /// Update a product, then refresh so the edit reorders the list.
    pub async fn update_product(
        &mut self,
        id: ProductId,
        form: &ProductForm,
    ) -> Result<(), ClientError> {
        self.api.update_product(id, form).await?;
        self.refresh().await
    }

    /// Delete a product, then refresh. Quote lines for it stay untouched.
    pub async fn delete_product(&mut self, id: ProductId) -> Result<(), ClientError> {
        self.api.delete_product(id).await?;
        self.refresh().await
    }

    /// Add a catalog product to the quote and clear the picker search.
    ///
    /// No-op when the id is not in the current catalog (stale click after a
    /// refresh removed the row); the search text then stays as typed.
    pub fn add_to_quote(&mut self, id: ProductId) {
        if let Some(product) = self.products.iter().find(|p| p.id == id) {
            self.quote.add_product(product);
            self.quote_search.clear();
        }
    }

    /// Rows the inventory list should show now.
    pub fn visible_products(&self) -> Vec<&Product> {
        self.inventory.visible(&self.products)
    }

    /// Whether the inventory list has rows hidden behind the reveal count.
    pub fn has_more(&self) -> bool {
        self.inventory.has_more(&self.products)
    }

    /// Compose the printable document for the quote as it stands now.
    pub fn quote_document(&self) -> QuoteDocument {
        QuoteDocument::compose(
            CompanyInfo::default(),
            self.client_info.clone(),
            &self.quote,
            Utc::now(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_products::ProductDraft;

    fn session_with_products(products: Vec<Product>) -> Session {
        let mut session = Session::new(ApiClient::new("http://127.0.0.1:9"));
        session.products = products;
        session.loading = false;
        session
    }

    fn product(code: &str, price: f64) -> Product {
        let draft = ProductDraft::new(code, format!("{code} description"), "Sony", price).unwrap();
        Product::from_draft(ProductId::new(), draft, Utc::now())
    }

    #[test]
    fn add_to_quote_snapshots_the_product_and_clears_the_search() {
        let p = product("HDMI-01", 2500.0);
        let mut session = session_with_products(vec![p.clone()]);
        session.set_quote_search("hdmi");

        session.add_to_quote(p.id);

        assert_eq!(session.quote.line_items().len(), 1);
        assert_eq!(session.quote.line_items()[0].code, "HDMI-01");
        assert_eq!(session.quote_search(), "");
    }

    #[test]
    fn add_to_quote_merges_repeat_adds() {
        let p = product("HDMI-01", 2500.0);
        let mut session = session_with_products(vec![p.clone()]);

        session.add_to_quote(p.id);
        session.add_to_quote(p.id);

        assert_eq!(session.quote.line_items().len(), 1);
        assert_eq!(session.quote.line_items()[0].quantity.raw(), "2");
    }

    #[test]
    fn add_to_quote_with_unknown_id_keeps_the_search_text() {
        let mut session = session_with_products(vec![product("HDMI-01", 2500.0)]);
        session.set_quote_search("usb");

        session.add_to_quote(ProductId::new());

        assert!(session.quote.is_empty());
        assert_eq!(session.quote_search(), "usb");
    }

    #[test]
    fn quote_lines_survive_catalog_changes() {
        let p = product("HDMI-01", 2500.0);
        let mut session = session_with_products(vec![p.clone()]);
        session.add_to_quote(p.id);

        // The next refresh no longer carries the product.
        session.products = Vec::new();

        assert_eq!(session.quote.line_items().len(), 1);
        assert_eq!(session.quote.totals().subtotal, 2500.0);
    }

    #[test]
    fn visible_products_follow_the_inventory_view() {
        let products: Vec<Product> = (0..15)
            .map(|i| product(&format!("SKU-{i:02}"), 10.0))
            .collect();
        let mut session = session_with_products(products);

        assert_eq!(session.visible_products().len(), 10);
        assert!(session.has_more());

        session.inventory.reveal_more();
        assert_eq!(session.visible_products().len(), 15);
        assert!(!session.has_more());
    }

    #[test]
    fn quote_document_carries_the_session_client_info() {
        let p = product("HDMI-01", 2500.0);
        let mut session = session_with_products(vec![p.clone()]);
        session.add_to_quote(p.id);
        session.client_info.name = "Ferretería El Tornillo".to_string();

        let document = session.quote_document();

        assert_eq!(document.client.name, "Ferretería El Tornillo");
        assert_eq!(document.company, CompanyInfo::default());
        assert_eq!(document.lines.len(), 1);
        assert_eq!(document.totals.subtotal, "2.500,00");
    }
}
