//! Monetary display formatting
//!
//! A fixed two-case policy, not a locale framework: VND renders with no
//! decimals, dot thousands grouping and a `₫` suffix; every other code
//! renders with two decimals, comma grouping and a `$` prefix.

use rust_decimal::prelude::*;

use super::summary::to_decimal;

/// Render an amount under a currency code
///
/// ```
/// use report_server::report::currency::format;
///
/// assert_eq!(format(1234567.0, "VND"), "1.234.567₫");
/// assert_eq!(format(1234.5, "USD"), "$1,234.50");
/// ```
pub fn format(amount: f64, currency: &str) -> String {
    let value = to_decimal(amount);
    let negative = value.is_sign_negative() && !value.is_zero();
    let magnitude = value.abs();
    let sign = if negative { "-" } else { "" };

    if currency == "VND" {
        let units = magnitude
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i128()
            .unwrap_or(0);
        format!("{}{}₫", sign, group_thousands(units, '.'))
    } else {
        let cents = (magnitude * Decimal::from(100))
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i128()
            .unwrap_or(0);
        format!(
            "{}${}.{:02}",
            sign,
            group_thousands(cents / 100, ','),
            cents % 100
        )
    }
}

/// Insert a separator every three digits from the right
fn group_thousands(value: i128, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }
    grouped
}
