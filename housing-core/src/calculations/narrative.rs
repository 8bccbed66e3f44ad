use rust_decimal::Decimal;

use crate::calculations::common::{format_money, format_percent, percent_of, round_half_up};
use crate::models::{Classification, Period};

/// Inputs for the summary lines shown above the breakdown table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NarrativeInput {
    pub income: Decimal,
    pub non_principal: Decimal,
    pub classification: Classification,
    pub principal_paid: Option<Decimal>,
    pub weekly_rent: Decimal,
    pub affordable_weekly: Decimal,
    pub period: Period,
}

/// Total overspend (positive) or savings (negative or zero) over the whole
/// period, rounded to the cent.
pub fn period_difference(
    weekly_rent: Decimal,
    affordable_weekly: Decimal,
    period: Period,
) -> Decimal {
    round_half_up(
        weekly_rent
            .saturating_sub(affordable_weekly)
            .saturating_mul(Decimal::from(period.weeks())),
    )
}

fn with_income_share(
    text: String,
    value: Decimal,
    income: Decimal,
) -> String {
    match percent_of(value, income) {
        Some(pct) => format!("{text} ({} of income)", format_percent(pct)),
        None => text,
    }
}

/// Builds the narrative lines, in order:
///
/// 1. non-principal expense and its share of income;
/// 2. the cost burden classification;
/// 3. principal paid and its share of income, only when nonzero;
/// 4. projected overspending or savings across the period.
pub fn build_narrative(input: &NarrativeInput) -> Vec<String> {
    let mut lines = Vec::with_capacity(4);

    lines.push(with_income_share(
        format!(
            "Total non-principal housing expense: {}",
            format_money(input.non_principal)
        ),
        input.non_principal,
        input.income,
    ));

    lines.push(format!(
        "Housing cost classification: {} ({})",
        input.classification.label(),
        input.classification.description()
    ));

    if let Some(principal) = input.principal_paid.filter(|p| !p.is_zero()) {
        lines.push(with_income_share(
            format!("Principal paid: {}", format_money(principal)),
            principal,
            input.income,
        ));
    }

    let difference = period_difference(input.weekly_rent, input.affordable_weekly, input.period);
    if difference > Decimal::ZERO {
        lines.push(format!(
            "Projected overspending over {}: {}",
            input.period,
            format_money(difference)
        ));
    } else {
        lines.push(format!(
            "Projected savings over {}: {}",
            input.period,
            format_money(difference.abs())
        ));
    }

    lines
}
