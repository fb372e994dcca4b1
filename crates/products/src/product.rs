use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::{DomainError, DomainResult, ProductId};

/// Catalog product record.
///
/// `price` carries the float exactly as entered; rounding happens only at
/// presentation (see `stockdesk_core::money`). On the wire the record uses
/// camelCase keys, so `updated_at` serializes as `updatedAt`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub code: String,
    pub description: String,
    pub brand: String,
    pub price: f64,
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Materialize a new record from a validated draft.
    pub fn from_draft(id: ProductId, draft: ProductDraft, updated_at: DateTime<Utc>) -> Self {
        Self {
            id,
            code: draft.code,
            description: draft.description,
            brand: draft.brand,
            price: draft.price,
            updated_at,
        }
    }

    /// Overwrite the editable fields from a draft and bump the timestamp.
    pub fn apply_draft(&mut self, draft: ProductDraft, updated_at: DateTime<Utc>) {
        self.code = draft.code;
        self.description = draft.description;
        self.brand = draft.brand;
        self.price = draft.price;
        self.updated_at = updated_at;
    }
}

/// Validated create/update payload.
///
/// Construction is the single validation gate: every text field must be
/// non-empty after trimming and the price must be a finite number. The stored
/// values keep the operator's original spacing; only the emptiness check trims.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductDraft {
    code: String,
    description: String,
    brand: String,
    price: f64,
}

impl ProductDraft {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        brand: impl Into<String>,
        price: f64,
    ) -> DomainResult<Self> {
        let code = code.into();
        let description = description.into();
        let brand = brand.into();

        if code.trim().is_empty() {
            return Err(DomainError::validation("code cannot be empty"));
        }
        if description.trim().is_empty() {
            return Err(DomainError::validation("description cannot be empty"));
        }
        if brand.trim().is_empty() {
            return Err(DomainError::validation("brand cannot be empty"));
        }
        if !price.is_finite() {
            return Err(DomainError::validation("price must be a finite number"));
        }

        Ok(Self {
            code,
            description,
            brand,
            price,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ProductDraft {
        ProductDraft::new("ABC123", "Cable HDMI 2m", "Sony", 2500.0).unwrap()
    }

    #[test]
    fn draft_holds_given_values() {
        let d = draft();
        assert_eq!(d.code(), "ABC123");
        assert_eq!(d.description(), "Cable HDMI 2m");
        assert_eq!(d.brand(), "Sony");
        assert_eq!(d.price(), 2500.0);
    }

    #[test]
    fn draft_rejects_blank_text_fields() {
        assert!(ProductDraft::new("", "desc", "brand", 1.0).is_err());
        assert!(ProductDraft::new("   ", "desc", "brand", 1.0).is_err());
        assert!(ProductDraft::new("code", "", "brand", 1.0).is_err());
        assert!(ProductDraft::new("code", "desc", "\t", 1.0).is_err());
    }

    #[test]
    fn draft_rejects_non_finite_price() {
        assert!(ProductDraft::new("code", "desc", "brand", f64::NAN).is_err());
        assert!(ProductDraft::new("code", "desc", "brand", f64::INFINITY).is_err());
    }

    #[test]
    fn draft_accepts_negative_and_zero_price() {
        // The catalog does not police price sign; presentation shows whatever
        // was entered.
        assert!(ProductDraft::new("code", "desc", "brand", 0.0).is_ok());
        assert!(ProductDraft::new("code", "desc", "brand", -10.5).is_ok());
    }

    #[test]
    fn from_draft_materializes_all_fields() {
        let id = ProductId::new();
        let now = Utc::now();
        let product = Product::from_draft(id, draft(), now);
        assert_eq!(product.id, id);
        assert_eq!(product.code, "ABC123");
        assert_eq!(product.description, "Cable HDMI 2m");
        assert_eq!(product.brand, "Sony");
        assert_eq!(product.price, 2500.0);
        assert_eq!(product.updated_at, now);
    }

    #[test]
    fn apply_draft_overwrites_and_bumps_timestamp() {
        let id = ProductId::new();
        let created = Utc::now();
        let mut product = Product::from_draft(id, draft(), created);

        let later = created + chrono::Duration::seconds(30);
        let edited = ProductDraft::new("XYZ999", "Cable HDMI 5m", "Philips", 4100.0).unwrap();
        product.apply_draft(edited, later);

        assert_eq!(product.id, id);
        assert_eq!(product.code, "XYZ999");
        assert_eq!(product.description, "Cable HDMI 5m");
        assert_eq!(product.brand, "Philips");
        assert_eq!(product.price, 4100.0);
        assert_eq!(product.updated_at, later);
    }

    #[test]
    fn wire_shape_uses_camel_case_updated_at() {
        let product = Product::from_draft(ProductId::new(), draft(), Utc::now());
        let value = serde_json::to_value(&product).unwrap();
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("updatedAt"));
        assert!(!obj.contains_key("updated_at"));
        assert!(obj.contains_key("code"));
        assert!(obj.contains_key("brand"));
    }

    #[test]
    fn wire_round_trip_preserves_record() {
        let product = Product::from_draft(ProductId::new(), draft(), Utc::now());
        let json = serde_json::to_string(&product).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(back, product);
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

            /// Property: any non-blank fields plus a finite price build a draft
            /// that preserves every value verbatim.
            #[test]
            fn valid_input_round_trips_through_draft(
                code in "[A-Z0-9]{1,20}",
                description in "[A-Za-z][A-Za-z0-9 ]{0,60}",
                brand in "[A-Za-z]{1,30}",
                price in -1e9f64..1e9f64
            ) {
                let d = ProductDraft::new(code.clone(), description.clone(), brand.clone(), price).unwrap();
                prop_assert_eq!(d.code(), code.as_str());
                prop_assert_eq!(d.description(), description.as_str());
                prop_assert_eq!(d.brand(), brand.as_str());
                prop_assert_eq!(d.price(), price);
            }

            /// Property: whitespace-only text in any position is rejected.
            #[test]
            fn blank_field_always_rejected(ws in "[ \t]{0,4}", which in 0usize..3) {
                let (code, description, brand) = match which {
                    0 => (ws.as_str(), "desc", "brand"),
                    1 => ("code", ws.as_str(), "brand"),
                    _ => ("code", "desc", ws.as_str()),
                };
                prop_assert!(ProductDraft::new(code, description, brand, 1.0).is_err());
            }
        }
    }
}
