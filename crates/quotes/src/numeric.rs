//! Raw numeric form fields.

use serde::{Deserialize, Serialize};

/// A numeric form field kept exactly as the operator typed it.
///
/// Quote-screen edits arrive from free-form text inputs and are stored
/// verbatim, so a half-typed value never aborts a recalculation. Parsing
/// happens only when a computation asks for the number; anything that does
/// not parse to a finite float counts as zero. Negative numbers parse fine
/// and flow into totals unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NumericInput(String);

impl NumericInput {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The text as entered.
    pub fn raw(&self) -> &str {
        &self.0
    }

    pub fn set(&mut self, raw: impl Into<String>) {
        self.0 = raw.into();
    }

    /// Numeric value of the field; blank or unparsable input counts as zero.
    pub fn value_or_zero(&self) -> f64 {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .unwrap_or(0.0)
    }
}

impl From<f64> for NumericInput {
    fn from(value: f64) -> Self {
        Self(value.to_string())
    }
}
