use std::str::FromStr;

use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{LineItem, ParsedItem};

/// Normalizes input for decimal parsing: trims whitespace and removes commas (thousands separator).
fn normalize_amount(raw: &str) -> String {
    raw.trim().replace(',', "")
}

/// Parses an amount as typed on the form.
///
/// Handles comma as thousands separator (e.g. `"1,234.56"`) and scientific
/// notation. Anything that does not parse, including empty input, is 0.
///
/// ```
/// use rust_decimal_macros::dec;
/// use housing_core::calculations::parse_amount;
///
/// assert_eq!(parse_amount("1,234.56"), dec!(1234.56));
/// assert_eq!(parse_amount("twelve"), dec!(0));
/// ```
pub fn parse_amount(raw: &str) -> Decimal {
    let normalized = normalize_amount(raw);
    if normalized.is_empty() {
        return Decimal::ZERO;
    }

    Decimal::from_str(&normalized)
        .or_else(|_| Decimal::from_scientific(&normalized))
        .unwrap_or_else(|e| {
            debug!(input = %raw, "amount treated as zero: {}", e);
            Decimal::ZERO
        })
}

/// Parses every line item, keeping order and category tags.
pub fn parse_items(items: &[LineItem]) -> Vec<ParsedItem> {
    items
        .iter()
        .map(|item| ParsedItem {
            name: item.name.clone(),
            category: item.category,
            value: parse_amount(&item.amount),
        })
        .collect()
}
