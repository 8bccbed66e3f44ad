use std::cmp::Ordering;

use rust_decimal::Decimal;

use crate::calculations::common::{fixed2, format_percent, percent_of, round_half_up};
use crate::calculations::totals::compute_mortgage_outlay;
use crate::models::{
    AFFORDABLE_WEEKLY_RENT_LABEL, ESTIMATED_WEEKLY_RENT_LABEL, MORTGAGE_OUTLAY_LABEL,
    NON_PRINCIPAL_TOTAL_LABEL, ParsedItem, ReportRow, RowKind,
};

/// A row whose percent column is its share of income.
fn income_share_row(
    name: &str,
    kind: RowKind,
    value: Decimal,
    income: Decimal,
) -> ReportRow {
    let share = percent_of(value, income);
    ReportRow {
        name: name.to_string(),
        kind,
        value,
        percent: share.map(format_percent).unwrap_or_default(),
        share,
    }
}

/// Signed comparison of weekly rent against the affordable amount, as a
/// percent of the affordable amount.
fn weekly_rent_row(
    weekly_rent: Decimal,
    affordable_weekly: Decimal,
) -> ReportRow {
    let share = percent_of(weekly_rent.saturating_sub(affordable_weekly), affordable_weekly);
    let percent = share
        .map(|pct| {
            let text = fixed2(pct.abs());
            match round_half_up(pct).cmp(&Decimal::ZERO) {
                Ordering::Greater => format!("+{text}% over affordable"),
                Ordering::Less => format!("-{text}% under affordable"),
                Ordering::Equal => format!("{text}% at affordable"),
            }
        })
        .unwrap_or_default();

    ReportRow {
        name: ESTIMATED_WEEKLY_RENT_LABEL.to_string(),
        kind: RowKind::EstimatedWeeklyRent,
        value: weekly_rent,
        percent,
        share,
    }
}

/// Builds the breakdown table: every parsed item in input order, then the
/// four derived rows.
///
/// Earnings and Affordable Weekly Rent never carry a percent. Estimated
/// Weekly Rent carries its signed difference from the affordable amount.
/// Everything else is a share of income, empty when income is zero.
pub fn build_report_rows(
    parsed_items: &[ParsedItem],
    income: Decimal,
    non_principal: Decimal,
    weekly_rent: Decimal,
    affordable_weekly: Decimal,
) -> Vec<ReportRow> {
    let mut rows: Vec<ReportRow> = parsed_items
        .iter()
        .map(|item| {
            let kind = RowKind::Item(item.category);
            if kind.is_earnings() {
                ReportRow {
                    name: item.name.clone(),
                    kind,
                    value: item.value,
                    percent: String::new(),
                    share: None,
                }
            } else {
                income_share_row(&item.name, kind, item.value, income)
            }
        })
        .collect();

    rows.push(income_share_row(
        NON_PRINCIPAL_TOTAL_LABEL,
        RowKind::NonPrincipalTotal,
        non_principal,
        income,
    ));
    rows.push(income_share_row(
        MORTGAGE_OUTLAY_LABEL,
        RowKind::MortgageOutlay,
        compute_mortgage_outlay(parsed_items),
        income,
    ));
    rows.push(weekly_rent_row(weekly_rent, affordable_weekly));
    rows.push(ReportRow {
        name: AFFORDABLE_WEEKLY_RENT_LABEL.to_string(),
        kind: RowKind::AffordableWeeklyRent,
        value: affordable_weekly,
        percent: String::new(),
        share: None,
    });

    rows
}
