//! Printable quote document.
//!
//! The quote screen prints through this structured view: seller block, client
//! block, issue and validity dates, the line-item table, the four totals, and
//! the legal footer. Amounts are formatted at compose time; nothing here is
//! ever persisted.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use stockdesk_core::money::format_amount;

use crate::quote::Quote;

/// Days a quote stays valid after it is issued.
pub const VALIDITY_DAYS: i64 = 7;

/// Legal footer: a quote is not a binding invoice.
pub const DISCLAIMER: &str =
    "Este presupuesto no es válido como factura. Precios sujetos a cambio sin previo aviso.";

/// Fixed seller block printed on every quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    pub tax_id: String,
}

impl Default for CompanyInfo {
    fn default() -> Self {
        Self {
            name: "Distribuidora Norte S.R.L.".to_string(),
            address: "Av. Corrientes 2345, Ciudad de Buenos Aires".to_string(),
            phone: "+54 11 4567-8900".to_string(),
            email: "ventas@distribuidoranorte.com.ar".to_string(),
            tax_id: "CUIT 30-71456789-3".to_string(),
        }
    }
}

/// Client block, free text as entered by the operator. Never validated.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClientInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

/// One printed row of the line-item table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentLine {
    pub code: String,
    pub description: String,
    pub brand: String,
    /// Quantity exactly as entered on the quote screen.
    pub quantity: String,
    pub unit_price: String,
    pub line_total: String,
}

/// The four totals, formatted for print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    pub subtotal: String,
    pub total_with_shipping: String,
    /// Surcharge percentage for the label next to the amount; "0" when blank.
    pub surcharge_percentage: String,
    pub surcharge_amount: String,
    pub grand_total: String,
}

/// Printable snapshot of a quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteDocument {
    pub company: CompanyInfo,
    pub client: ClientInfo,
    pub issued_at: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    pub lines: Vec<DocumentLine>,
    pub totals: DocumentTotals,
}

impl QuoteDocument {
    /// Compose the printable view of `quote` as of `issued_at`.
    pub fn compose(
        company: CompanyInfo,
        client: ClientInfo,
        quote: &Quote,
        issued_at: DateTime<Utc>,
    ) -> Self {
        let lines = quote
            .line_items()
            .iter()
            .map(|line| DocumentLine {
                code: line.code.clone(),
                description: line.description.clone(),
                brand: line.brand.clone(),
                quantity: line.quantity.raw().to_string(),
                unit_price: format_amount(line.unit_price.value_or_zero()),
                line_total: format_amount(line.line_total()),
            })
            .collect();

        let computed = quote.totals();
        let surcharge_label = {
            let raw = quote.surcharge_percentage().raw().trim();
            if raw.is_empty() { "0".to_string() } else { raw.to_string() }
        };
        let totals = DocumentTotals {
            subtotal: format_amount(computed.subtotal),
            total_with_shipping: format_amount(computed.total_with_shipping),
            surcharge_percentage: surcharge_label,
            surcharge_amount: format_amount(computed.surcharge_amount),
            grand_total: format_amount(computed.grand_total),
        };

        Self {
            company,
            client,
            issued_at,
            valid_until: issued_at + Duration::days(VALIDITY_DAYS),
            lines,
            totals,
        }
    }

    /// Plain-text rendering handed to the print collaborator.
    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        out.push_str("PRESUPUESTO\n\n");

        out.push_str(&format!(
            "{}\n{}\nTel: {}\n{}\n{}\n\n",
            self.company.name,
            self.company.address,
            self.company.phone,
            self.company.email,
            self.company.tax_id,
        ));

        out.push_str(&format!(
            "Cliente: {}\nDirección: {}\nTel: {}\n\n",
            self.client.name, self.client.address, self.client.phone,
        ));

        out.push_str(&format!(
            "Fecha: {}\nVálido hasta: {}\n\n",
            self.issued_at.format("%d/%m/%Y"),
            self.valid_until.format("%d/%m/%Y"),
        ));

        for line in &self.lines {
            out.push_str(&format!(
                "{} | {} | {} | x{} | ${} | ${}\n",
                line.code,
                line.description,
                line.brand,
                line.quantity,
                line.unit_price,
                line.line_total,
            ));
        }

        out.push_str(&format!(
            "\nSubtotal: ${}\nTotal con envío: ${}\nRecargo ({}%): ${}\nTOTAL: ${}\n\n",
            self.totals.subtotal,
            self.totals.total_with_shipping,
            self.totals.surcharge_percentage,
            self.totals.surcharge_amount,
            self.totals.grand_total,
        ));

        out.push_str(DISCLAIMER);
        out.push('\n');
        out
    }
}
