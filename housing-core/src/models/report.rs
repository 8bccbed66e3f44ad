use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{Classification, Period, ReservedCategory};

pub const NON_PRINCIPAL_TOTAL_LABEL: &str = "Total Non-Principal Housing Expense";
pub const MORTGAGE_OUTLAY_LABEL: &str = "Total Mortgage Outlay";
pub const ESTIMATED_WEEKLY_RENT_LABEL: &str = "Estimated Weekly Rent";
pub const AFFORDABLE_WEEKLY_RENT_LABEL: &str = "Affordable Weekly Rent";

/// What a breakdown row represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RowKind {
    /// An entered line item; `None` for user-added rows.
    Item(Option<ReservedCategory>),
    NonPrincipalTotal,
    MortgageOutlay,
    EstimatedWeeklyRent,
    AffordableWeeklyRent,
}

impl RowKind {
    pub fn is_earnings(&self) -> bool {
        matches!(self, Self::Item(Some(ReservedCategory::Earnings)))
    }
}

/// One row of the report breakdown table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportRow {
    pub name: String,
    pub kind: RowKind,
    pub value: Decimal,
    /// Display text for the percent column; empty when not applicable.
    pub percent: String,
    /// The number behind `percent`, unrounded.
    pub share: Option<Decimal>,
}

/// A pie chart slice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartSlice {
    pub name: String,
    pub value: Decimal,
}

/// Dollar amounts at the 30% and 50% cost-burden thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Benchmarks {
    pub cost_burdened_above: Decimal,
    pub severely_burdened_above: Decimal,
}

/// Everything the report view shows, derived from one set of inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HousingReport {
    pub title: String,
    pub year: String,
    pub period: Period,
    pub income: Decimal,
    pub non_principal: Decimal,
    pub principal_paid: Option<Decimal>,
    pub mortgage_outlay: Decimal,
    /// Non-principal expense as a percent of income; zero without income.
    pub percent_of_income: Decimal,
    pub classification: Classification,
    pub weekly_rent: Decimal,
    pub affordable_weekly: Decimal,
    /// Positive when spending exceeds the affordable amount over the period.
    pub period_difference: Decimal,
    pub benchmarks: Benchmarks,
    pub narrative: Vec<String>,
    pub rows: Vec<ReportRow>,
    pub chart: Vec<ChartSlice>,
    pub export_file_name: String,
}

impl HousingReport {
    pub fn is_overspending(&self) -> bool {
        self.period_difference > Decimal::ZERO
    }
}
