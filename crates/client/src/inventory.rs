//! Filter and paging state for the inventory list.

use stockdesk_products::Product;

/// How many more rows each reveal step adds.
pub const PAGE_SIZE: usize = 10;

/// Screen state for the product list: one free-text filter plus a reveal
/// count that grows in steps of [`PAGE_SIZE`].
///
/// Holds no products. Callers pass the catalog in on every read, so the view
/// never goes stale against it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InventoryView {
    filter: String,
    reveal_count: usize,
}

impl InventoryView {
    pub fn new() -> Self {
        Self {
            filter: String::new(),
            reveal_count: PAGE_SIZE,
        }
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn reveal_count(&self) -> usize {
        self.reveal_count
    }

    /// Replace the filter text, stored exactly as typed.
    ///
    /// The reveal count stays put. An operator who scrolled deep, narrowed
    /// the list, and cleared the filter again lands back at the same depth.
    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    /// Whether a product passes the current filter.
    ///
    /// Case-insensitive substring match over description, code, and brand.
    /// A blank filter passes everything.
    pub fn matches(&self, product: &Product) -> bool {
        Self::matches_needle(product, &self.filter.to_lowercase())
    }

    fn matches_needle(product: &Product, needle: &str) -> bool {
        product.description.to_lowercase().contains(needle)
            || product.code.to_lowercase().contains(needle)
            || product.brand.to_lowercase().contains(needle)
    }

    /// All products passing the filter, in catalog order.
    pub fn filtered<'a>(&self, all: &'a [Product]) -> Vec<&'a Product> {
        let needle = self.filter.to_lowercase();
        all.iter()
            .filter(|p| Self::matches_needle(p, &needle))
            .collect()
    }

    /// The filtered products currently revealed: the first `reveal_count`
    /// of [`Self::filtered`].
    pub fn visible<'a>(&self, all: &'a [Product]) -> Vec<&'a Product> {
        let mut filtered = self.filtered(all);
        filtered.truncate(self.reveal_count);
        filtered
    }

    /// Reveal one more page.
    pub fn reveal_more(&mut self) {
        self.reveal_count += PAGE_SIZE;
    }

    /// Whether a further reveal would show anything new.
    ///
    /// False on an empty result: the control is only offered when rows are
    /// already on screen and more sit behind the count.
    pub fn has_more(&self, all: &[Product]) -> bool {
        let filtered_len = self.filtered(all).len();
        let visible_len = filtered_len.min(self.reveal_count);
        visible_len > 0 && visible_len < filtered_len
    }
}

impl Default for InventoryView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use stockdesk_core::ProductId;
    use stockdesk_products::ProductDraft;

    fn product(code: &str, description: &str, brand: &str) -> Product {
        let draft = ProductDraft::new(code, description, brand, 10.0).unwrap();
        Product::from_draft(ProductId::new(), draft, Utc::now())
    }

    fn catalog(count: usize) -> Vec<Product> {
        (0..count)
            .map(|i| product(&format!("SKU-{i:02}"), &format!("Item {i}"), "Acme"))
            .collect()
    }

    #[test]
    fn filter_matches_each_field_case_insensitively() {
        let p = product("ABC123", "Cable HDMI", "Sony");

        for needle in ["cable", "ABC", "sony", ""] {
            let mut view = InventoryView::new();
            view.set_filter(needle);
            assert!(view.matches(&p), "expected filter {needle:?} to match");
        }

        let mut view = InventoryView::new();
        view.set_filter("xyz");
        assert!(!view.matches(&p));
    }

    #[test]
    fn filtered_keeps_catalog_order() {
        let all = vec![
            product("A-1", "Cable HDMI", "Sony"),
            product("B-2", "Mouse", "Logi"),
            product("C-3", "Cable USB", "Sony"),
        ];
        let mut view = InventoryView::new();
        view.set_filter("cable");

        let codes: Vec<&str> = view.filtered(&all).iter().map(|p| p.code.as_str()).collect();

        assert_eq!(codes, vec!["A-1", "C-3"]);
    }

    #[test]
    fn visible_caps_at_the_reveal_count() {
        let all = catalog(15);
        let mut view = InventoryView::new();

        assert_eq!(view.visible(&all).len(), 10);

        view.reveal_more();
        assert_eq!(view.visible(&all).len(), 15);
    }

    #[test]
    fn reveal_grows_in_page_size_steps() {
        let mut view = InventoryView::new();

        assert_eq!(view.reveal_count(), 10);
        view.reveal_more();
        view.reveal_more();
        assert_eq!(view.reveal_count(), 30);
    }

    #[test]
    fn filter_change_keeps_the_reveal_depth() {
        let all = catalog(35);
        let mut view = InventoryView::new();
        view.reveal_more();
        view.reveal_more();

        view.set_filter("sku-3");
        assert_eq!(view.reveal_count(), 30);

        // Clearing the filter brings back the same depth, not the first page.
        view.set_filter("");
        assert_eq!(view.visible(&all).len(), 30);
    }

    #[test]
    fn has_more_only_when_rows_are_shown_and_more_are_hidden() {
        let mut view = InventoryView::new();

        assert!(!view.has_more(&[]));
        assert!(!view.has_more(&catalog(5)));
        assert!(!view.has_more(&catalog(10)));

        let all = catalog(15);
        assert!(view.has_more(&all));
        view.reveal_more();
        assert!(!view.has_more(&all));
    }

    #[test]
    fn has_more_is_false_when_the_filter_matches_nothing() {
        let all = catalog(25);
        let mut view = InventoryView::new();
        view.set_filter("no such product");

        assert!(view.visible(&all).is_empty());
        assert!(!view.has_more(&all));
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 1000,
                ..ProptestConfig::default()
            })]

            /// Property: the visible rows are always the first
            /// `reveal_count` filtered rows, in catalog order.
            #[test]
            fn visible_is_a_prefix_of_filtered(
                descriptions in proptest::collection::vec("[a-c]{1,4}", 0..40),
                filter in "[a-c]{0,2}",
                reveals in 0usize..4,
            ) {
                let all: Vec<Product> = descriptions
                    .iter()
                    .enumerate()
                    .map(|(i, d)| product(&format!("P{i}"), d, "Acme"))
                    .collect();

                let mut view = InventoryView::new();
                view.set_filter(filter.as_str());
                for _ in 0..reveals {
                    view.reveal_more();
                }

                let filtered = view.filtered(&all);
                let visible = view.visible(&all);

                prop_assert!(visible.len() <= view.reveal_count());
                prop_assert!(visible.len() <= filtered.len());
                for (v, f) in visible.iter().zip(filtered.iter()) {
                    prop_assert_eq!(v.id, f.id);
                }
            }

            /// Property: revealing more never hides a row that was visible.
            #[test]
            fn reveal_never_hides_rows(
                descriptions in proptest::collection::vec("[a-c]{1,4}", 0..40),
                filter in "[a-c]{0,2}",
            ) {
                let all: Vec<Product> = descriptions
                    .iter()
                    .enumerate()
                    .map(|(i, d)| product(&format!("P{i}"), d, "Acme"))
                    .collect();

                let mut view = InventoryView::new();
                view.set_filter(filter.as_str());

                let before: Vec<ProductId> =
                    view.visible(&all).iter().map(|p| p.id).collect();
                view.reveal_more();
                let after: Vec<ProductId> =
                    view.visible(&all).iter().map(|p| p.id).collect();

                prop_assert!(after.len() >= before.len());
                prop_assert_eq!(&after[..before.len()], &before[..]);
            }
        }
    }
}
