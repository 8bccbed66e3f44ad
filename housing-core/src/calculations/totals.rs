//! Aggregates over parsed line items.
//!
//! Items are selected by their reserved category tag, so user-added rows
//! never leak into the income or housing totals even when they share a
//! reserved label.

use rust_decimal::Decimal;

use crate::calculations::common::saturating_sum;
use crate::models::{ParsedItem, Period, ReservedCategory};

/// Percent of income at which housing becomes cost burdened.
pub const AFFORDABLE_SHARE: Decimal = Decimal::from_parts(30, 0, 0, false, 2);

/// Percent of income at which housing becomes severely cost burdened.
pub const SEVERE_SHARE: Decimal = Decimal::from_parts(50, 0, 0, false, 2);

fn first_value(
    items: &[ParsedItem],
    category: ReservedCategory,
) -> Option<Decimal> {
    items
        .iter()
        .find(|item| item.category == Some(category))
        .map(|item| item.value)
}

/// Value of the Earnings row, or zero if there is none.
pub fn compute_income(items: &[ParsedItem]) -> Decimal {
    first_value(items, ReservedCategory::Earnings).unwrap_or(Decimal::ZERO)
}

/// Sum of Rent/Interest Paid, Insurance Paid, Maintenance and Rates (Taxes).
pub fn compute_non_principal(items: &[ParsedItem]) -> Decimal {
    let values = items
        .iter()
        .filter(|item| item.category.is_some_and(|c| c.is_non_principal()))
        .map(|item| item.value);
    saturating_sum(values)
}

/// Value of the Principal Paid row, if the form has one.
pub fn compute_principal(items: &[ParsedItem]) -> Option<Decimal> {
    first_value(items, ReservedCategory::PrincipalPaid)
}

/// Rent/Interest Paid plus Principal Paid.
pub fn compute_mortgage_outlay(items: &[ParsedItem]) -> Decimal {
    let interest = first_value(items, ReservedCategory::RentInterestPaid).unwrap_or(Decimal::ZERO);
    let principal = compute_principal(items).unwrap_or(Decimal::ZERO);
    interest.saturating_add(principal)
}

/// Week count for a period label. Unrecognised labels count as a full year.
///
/// ```
/// use housing_core::calculations::weeks_for;
///
/// assert_eq!(weeks_for("Q2"), 13);
/// assert_eq!(weeks_for("6 Months"), 26);
/// assert_eq!(weeks_for("Biannual"), 52);
/// ```
pub fn weeks_for(period: &str) -> u32 {
    Period::parse_lenient(period).weeks()
}

/// Non-principal expense spread over the period's weeks.
pub fn weekly_rent(
    non_principal: Decimal,
    period: Period,
) -> Decimal {
    non_principal / Decimal::from(period.weeks())
}

/// 30% of income spread over the period's weeks.
pub fn affordable_weekly(
    income: Decimal,
    period: Period,
) -> Decimal {
    (income / Decimal::from(period.weeks())).saturating_mul(AFFORDABLE_SHARE)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;

    fn item(
        category: Option<ReservedCategory>,
        value: Decimal,
    ) -> ParsedItem {
        ParsedItem {
            name: category.map_or("Other", |c| c.label()).to_string(),
            category,
            value,
        }
    }

    fn sample_items() -> Vec<ParsedItem> {
        vec![
            item(Some(ReservedCategory::Earnings), dec!(1000)),
            item(Some(ReservedCategory::RentInterestPaid), dec!(300)),
            item(Some(ReservedCategory::InsurancePaid), dec!(50)),
            item(Some(ReservedCategory::Maintenance), dec!(20)),
            item(Some(ReservedCategory::RatesTaxes), dec!(30)),
            item(Some(ReservedCategory::PrincipalPaid), dec!(100)),
        ]
    }

    #[test]
    fn income_is_the_earnings_value() {
        assert_eq!(compute_income(&sample_items()), dec!(1000));
    }

    #[test]
    fn income_without_earnings_is_zero() {
        let items = vec![item(Some(ReservedCategory::Maintenance), dec!(20))];

        assert_eq!(compute_income(&items), Decimal::ZERO);
    }

    #[test]
    fn non_principal_sums_the_four_interior_categories() {
        assert_eq!(compute_non_principal(&sample_items()), dec!(400));
    }

    #[test]
    fn non_principal_ignores_user_added_rows() {
        let mut items = sample_items();
        items.push(item(None, dec!(999)));

        assert_eq!(compute_non_principal(&items), dec!(400));
    }

    #[test]
    fn mortgage_outlay_adds_interest_and_principal() {
        assert_eq!(compute_mortgage_outlay(&sample_items()), dec!(400));
    }

    #[test]
    fn principal_absent_is_none() {
        let items = vec![item(Some(ReservedCategory::Earnings), dec!(1000))];

        assert_eq!(compute_principal(&items), None);
        assert_eq!(compute_mortgage_outlay(&items), Decimal::ZERO);
    }

    #[test]
    fn weeks_for_every_label() {
        assert_eq!(weeks_for("Q1"), 13);
        assert_eq!(weeks_for("Q2"), 13);
        assert_eq!(weeks_for("Q3"), 13);
        assert_eq!(weeks_for("Q4"), 13);
        assert_eq!(weeks_for("6 Months"), 26);
        assert_eq!(weeks_for("Full Year"), 52);
        assert_eq!(weeks_for("anything else"), 52);
    }

    #[test]
    fn weekly_amounts_for_full_year() {
        assert_eq!(round_half_up(weekly_rent(dec!(400), Period::FullYear)), dec!(7.69));
        assert_eq!(
            round_half_up(affordable_weekly(dec!(1000), Period::FullYear)),
            dec!(5.77)
        );
    }

    #[test]
    fn weekly_amounts_for_a_quarter() {
        assert_eq!(weekly_rent(dec!(1300), Period::Q1), dec!(100));
        assert_eq!(affordable_weekly(dec!(1300), Period::Q1), dec!(30));
    }

    #[test]
    fn share_constants_match_literals() {
        assert_eq!(AFFORDABLE_SHARE, dec!(0.30));
        assert_eq!(SEVERE_SHARE, dec!(0.50));
    }
}
