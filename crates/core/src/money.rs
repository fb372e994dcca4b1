//! Amount formatting for printed and on-screen prices.
//!
//! The shop prints amounts the Argentine way: `.` groups thousands, `,`
//! separates decimals, always two fraction digits (`1234567.891` →
//! `1.234.567,89`). Arithmetic stays in full `f64` precision everywhere;
//! rounding happens here and only here.

/// Format an amount with es-AR digit grouping and exactly two decimals.
///
/// Non-finite values fall back to their plain debug form; callers feeding
/// totals through [`format_amount`] keep inputs finite by construction.
pub fn format_amount(value: f64) -> String {
    if !value.is_finite() {
        return format!("{value:.2}");
    }
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let digits = int_part.as_bytes();
    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 4);
    for (i, digit) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(*digit as char);
    }

    // Sign is suppressed when the rounded magnitude is zero ("-0,00" reads wrong).
    let sign = if value < 0.0 && rounded != "0.00" { "-" } else { "" };
    format!("{sign}{grouped},{frac_part}")
}
