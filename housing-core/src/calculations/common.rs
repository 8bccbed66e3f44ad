//! Shared rounding and formatting helpers.
//!
//! Every amount or percent shown on the report goes through these so the
//! table, the narrative and the export agree to the cent.

use rust_decimal::{Decimal, RoundingStrategy};
use tracing::debug;

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use housing_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Renders a value with exactly two decimal places, e.g. `40` → `"40.00"`.
pub fn fixed2(value: Decimal) -> String {
    let mut rounded = round_half_up(value);
    if rounded.is_zero() {
        rounded = Decimal::ZERO;
    }
    rounded.rescale(2);
    rounded.to_string()
}

/// Formats a percent for the breakdown table, e.g. `40` → `"40.00%"`.
pub fn format_percent(percent: Decimal) -> String {
    format!("{}%", fixed2(percent))
}

/// Formats a dollar amount with thousands separators, e.g. `-1234.5` → `"-$1,234.50"`.
///
/// ```
/// use rust_decimal_macros::dec;
/// use housing_core::calculations::common::format_money;
///
/// assert_eq!(format_money(dec!(1234567.891)), "$1,234,567.89");
/// assert_eq!(format_money(dec!(-12.5)), "-$12.50");
/// ```
pub fn format_money(value: Decimal) -> String {
    let text = fixed2(value.abs());
    let (int_part, dec_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (int_part.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if round_half_up(value) < Decimal::ZERO {
        "-"
    } else {
        ""
    };
    format!("{sign}${grouped}.{dec_part}")
}

/// `part` as a percent of `whole`, or `None` when `whole` is zero.
///
/// A ratio too large for a `Decimal` is clamped to `Decimal::MAX` (or
/// `Decimal::MIN` when negative).
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use housing_core::calculations::common::percent_of;
///
/// assert_eq!(percent_of(dec!(300), dec!(1000)), Some(dec!(30)));
/// let huge = Decimal::from_scientific("7e27").unwrap();
/// assert_eq!(percent_of(huge, dec!(1)), Some(Decimal::MAX));
/// assert_eq!(percent_of(dec!(1), Decimal::ZERO), None);
/// ```
pub fn percent_of(
    part: Decimal,
    whole: Decimal,
) -> Option<Decimal> {
    if whole.is_zero() {
        return None;
    }
    let ratio = part.checked_div(whole).unwrap_or_else(|| {
        debug!(%part, %whole, "percent out of range, clamped");
        if part.is_sign_negative() == whole.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        }
    });
    Some(ratio.saturating_mul(Decimal::ONE_HUNDRED))
}

/// Sum that clamps at `Decimal::MAX` / `Decimal::MIN` instead of panicking.
///
/// Amounts are only bounded by what `Decimal` can parse, so a handful of
/// very large entries can exceed its range when added together.
pub fn saturating_sum<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    values
        .into_iter()
        .fold(Decimal::ZERO, |acc, value| acc.saturating_add(value))
}
