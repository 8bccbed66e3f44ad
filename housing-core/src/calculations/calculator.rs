//! Housing expense report derivation.
//!
//! Turns the entered line items and the selected period into everything the
//! report view shows. The calculation has no side effects: the same inputs
//! always produce the same [`HousingReport`].
//!
//! # Derivation
//!
//! | Value                  | Formula |
//! |------------------------|---------|
//! | income                 | Earnings |
//! | non-principal expense  | Rent/Interest Paid + Insurance Paid + Maintenance + Rates (Taxes) |
//! | mortgage outlay        | Rent/Interest Paid + Principal Paid |
//! | percent of income      | non-principal ÷ income × 100 (0 without income) |
//! | weekly rent            | non-principal ÷ weeks in period |
//! | affordable weekly rent | income ÷ weeks in period × 30% |
//! | period difference      | (weekly rent − affordable weekly rent) × weeks in period |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use housing_core::{
//!     Classification, ExpenseReportCalculator, LineItem, Period, ReportConfig, ReservedCategory,
//! };
//!
//! let items = vec![
//!     LineItem::reserved(ReservedCategory::Earnings).with_amount("1000"),
//!     LineItem::reserved(ReservedCategory::RentInterestPaid).with_amount("300"),
//!     LineItem::reserved(ReservedCategory::InsurancePaid).with_amount("50"),
//!     LineItem::reserved(ReservedCategory::Maintenance).with_amount("20"),
//!     LineItem::reserved(ReservedCategory::RatesTaxes).with_amount("30"),
//!     LineItem::reserved(ReservedCategory::PrincipalPaid).with_amount("100"),
//! ];
//!
//! let calculator = ExpenseReportCalculator::new(ReportConfig::default()).unwrap();
//! let report = calculator.calculate(&items, Period::FullYear, "2025");
//!
//! assert_eq!(report.non_principal, dec!(400));
//! assert_eq!(report.percent_of_income, dec!(40));
//! assert_eq!(report.classification, Classification::CostBurdened);
//! assert_eq!(report.mortgage_outlay, dec!(400));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::calculations::amounts::parse_items;
use crate::calculations::chart::{ChartFilter, build_chart_series};
use crate::calculations::common::percent_of;
use crate::calculations::narrative::{NarrativeInput, build_narrative, period_difference};
use crate::calculations::rows::build_report_rows;
use crate::calculations::totals::{
    AFFORDABLE_SHARE, SEVERE_SHARE, affordable_weekly, compute_income, compute_mortgage_outlay,
    compute_non_principal, compute_principal, weekly_rent,
};
use crate::models::{Benchmarks, Classification, HousingReport, LineItem, Period};

/// Errors for an invalid [`ReportConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportConfigError {
    /// The chart cut-off must be non-negative.
    #[error("chart minimum percent must be non-negative, got {0}")]
    NegativeChartThreshold(Decimal),

    /// The chart cut-off is a percent of income and cannot exceed 100.
    #[error("chart minimum percent must be at most 100, got {0}")]
    ChartThresholdTooLarge(Decimal),
}

/// Tunable parts of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Rows whose percent is below this are left out of the chart.
    pub chart_min_percent: Decimal,

    /// Whether the cut-off reads the numeric share or the percent text.
    pub chart_filter: ChartFilter,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            chart_min_percent: Decimal::from(4),
            chart_filter: ChartFilter::default(),
        }
    }
}

impl ReportConfig {
    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns [`ReportConfigError`] if `chart_min_percent` is not in [0, 100].
    ///
    /// ```
    /// use rust_decimal_macros::dec;
    /// use housing_core::{ReportConfig, ReportConfigError};
    ///
    /// let config = ReportConfig {
    ///     chart_min_percent: dec!(-1),
    ///     ..ReportConfig::default()
    /// };
    ///
    /// assert_eq!(
    ///     config.validate(),
    ///     Err(ReportConfigError::NegativeChartThreshold(dec!(-1)))
    /// );
    /// ```
    pub fn validate(&self) -> Result<(), ReportConfigError> {
        if self.chart_min_percent < Decimal::ZERO {
            return Err(ReportConfigError::NegativeChartThreshold(
                self.chart_min_percent,
            ));
        }
        if self.chart_min_percent > Decimal::ONE_HUNDRED {
            return Err(ReportConfigError::ChartThresholdTooLarge(
                self.chart_min_percent,
            ));
        }
        Ok(())
    }
}

/// Report title; the period suffix is omitted for a full year.
///
/// ```
/// use housing_core::{Period, calculations::report_title};
///
/// assert_eq!(
///     report_title("2025", Period::Q3),
///     "Housing Expense Report excluding principal paid 2025 Q3"
/// );
/// assert_eq!(
///     report_title("2025", Period::FullYear),
///     "Housing Expense Report excluding principal paid 2025"
/// );
/// ```
pub fn report_title(
    year: &str,
    period: Period,
) -> String {
    match period {
        Period::FullYear => format!("Housing Expense Report excluding principal paid {year}"),
        other => format!("Housing Expense Report excluding principal paid {year} {other}"),
    }
}

/// PDF file name for an exported report.
///
/// ```
/// use housing_core::{Period, calculations::export_file_name};
///
/// assert_eq!(
///     export_file_name("2025", Period::SixMonths),
///     "2025_6_Months_Housing_Expense_Report.pdf"
/// );
/// ```
pub fn export_file_name(
    year: &str,
    period: Period,
) -> String {
    format!(
        "{year}_{}_Housing_Expense_Report.pdf",
        period.label().replace(' ', "_")
    )
}

/// Dollar thresholds at 30% and 50% of income.
pub fn benchmarks(income: Decimal) -> Benchmarks {
    Benchmarks {
        cost_burdened_above: income.saturating_mul(AFFORDABLE_SHARE),
        severely_burdened_above: income.saturating_mul(SEVERE_SHARE),
    }
}

/// Derives a [`HousingReport`] from line items.
///
/// Holds only its configuration; form state is passed in on every call.
#[derive(Debug, Clone, Default)]
pub struct ExpenseReportCalculator {
    config: ReportConfig,
}

impl ExpenseReportCalculator {
    /// Creates a calculator after validating `config`.
    pub fn new(config: ReportConfig) -> Result<Self, ReportConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Computes the full report for the given items, period and year.
    pub fn calculate(
        &self,
        items: &[LineItem],
        period: Period,
        year: &str,
    ) -> HousingReport {
        let parsed = parse_items(items);

        let income = compute_income(&parsed);
        let non_principal = compute_non_principal(&parsed);
        let principal_paid = compute_principal(&parsed);
        let mortgage_outlay = compute_mortgage_outlay(&parsed);

        let percent_of_income = percent_of(non_principal, income).unwrap_or(Decimal::ZERO);
        let classification = Classification::classify(percent_of_income);

        let weekly_rent = weekly_rent(non_principal, period);
        let affordable_weekly = affordable_weekly(income, period);

        let rows = build_report_rows(
            &parsed,
            income,
            non_principal,
            weekly_rent,
            affordable_weekly,
        );
        let chart = build_chart_series(
            &rows,
            self.config.chart_min_percent,
            self.config.chart_filter,
        );
        let narrative = build_narrative(&NarrativeInput {
            income,
            non_principal,
            classification,
            principal_paid,
            weekly_rent,
            affordable_weekly,
            period,
        });

        debug!(
            %income,
            %non_principal,
            %percent_of_income,
            ?classification,
            rows = rows.len(),
            slices = chart.len(),
            "report calculated"
        );

        HousingReport {
            title: report_title(year, period),
            year: year.to_string(),
            period,
            income,
            non_principal,
            principal_paid,
            mortgage_outlay,
            percent_of_income,
            classification,
            weekly_rent,
            affordable_weekly,
            period_difference: period_difference(weekly_rent, affordable_weekly, period),
            benchmarks: benchmarks(income),
            narrative,
            rows,
            chart,
            export_file_name: export_file_name(year, period),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::calculations::common::round_half_up;
    use crate::models::{ReservedCategory, RowKind};

    fn sample_items() -> Vec<LineItem> {
        vec![
            LineItem::reserved(ReservedCategory::Earnings).with_amount("1000"),
            LineItem::reserved(ReservedCategory::RentInterestPaid).with_amount("300"),
            LineItem::reserved(ReservedCategory::InsurancePaid).with_amount("50"),
            LineItem::reserved(ReservedCategory::Maintenance).with_amount("20"),
            LineItem::reserved(ReservedCategory::RatesTaxes).with_amount("30"),
            LineItem::reserved(ReservedCategory::PrincipalPaid).with_amount("100"),
        ]
    }

    fn calculator() -> ExpenseReportCalculator {
        ExpenseReportCalculator::new(ReportConfig::default()).unwrap()
    }

    // =========================================================================
    // calculate tests
    // =========================================================================

    #[test]
    fn full_year_sample_matches_expected_figures() {
        let report = calculator().calculate(&sample_items(), Period::FullYear, "2025");

        assert_eq!(report.income, dec!(1000));
        assert_eq!(report.non_principal, dec!(400));
        assert_eq!(report.percent_of_income, dec!(40));
        assert_eq!(report.classification, Classification::CostBurdened);
        assert_eq!(round_half_up(report.weekly_rent), dec!(7.69));
        assert_eq!(round_half_up(report.affordable_weekly), dec!(5.77));
        assert_eq!(report.mortgage_outlay, dec!(400));
        assert_eq!(report.period_difference, dec!(100));
        assert!(report.is_overspending());
    }

    #[test]
    fn full_year_sample_breakdown_and_chart() {
        let report = calculator().calculate(&sample_items(), Period::FullYear, "2025");

        let outlay = report
            .rows
            .iter()
            .find(|r| r.kind == RowKind::MortgageOutlay)
            .unwrap();
        assert_eq!(outlay.value, dec!(400));
        assert_eq!(outlay.percent, "40.00%");

        let charted: Vec<_> = report.chart.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            charted,
            vec![
                "Rent/Interest Paid",
                "Insurance Paid",
                "Principal Paid",
                "Total Non-Principal Housing Expense",
                "Total Mortgage Outlay",
                "Estimated Weekly Rent",
            ]
        );
    }

    #[test]
    fn full_year_sample_title_and_narrative() {
        let report = calculator().calculate(&sample_items(), Period::FullYear, "2025");

        assert_eq!(
            report.title,
            "Housing Expense Report excluding principal paid 2025"
        );
        assert_eq!(
            report.export_file_name,
            "2025_Full_Year_Housing_Expense_Report.pdf"
        );
        assert_eq!(report.narrative.len(), 4);
        assert_eq!(
            report.benchmarks,
            Benchmarks {
                cost_burdened_above: dec!(300),
                severely_burdened_above: dec!(500),
            }
        );
    }

    #[test]
    fn empty_form_degrades_to_zeroes() {
        let report = calculator().calculate(&LineItem::default_items(), Period::Q2, "2025");

        assert_eq!(report.income, Decimal::ZERO);
        assert_eq!(report.percent_of_income, Decimal::ZERO);
        assert_eq!(report.classification, Classification::Ideal);
        assert_eq!(report.narrative.len(), 3);
        assert!(report.rows.iter().all(|r| r.percent.is_empty()));
        assert!(report.chart.is_empty());
        assert_eq!(report.period_difference, Decimal::ZERO);
    }

    #[test]
    fn same_inputs_give_same_report() {
        let calc = calculator();

        let first = calc.calculate(&sample_items(), Period::Q1, "2024");
        let second = calc.calculate(&sample_items(), Period::Q1, "2024");

        assert_eq!(first, second);
    }

    #[test]
    fn severe_burden_over_half_of_income() {
        let mut items = sample_items();
        items[1].amount = "600".to_string();

        let report = calculator().calculate(&items, Period::FullYear, "2025");

        assert_eq!(report.percent_of_income, dec!(70));
        assert_eq!(report.classification, Classification::SeverelyCostBurdened);
    }

    #[test]
    fn huge_rent_against_tiny_income_clamps_percent() {
        let items = vec![
            LineItem::reserved(ReservedCategory::Earnings).with_amount("1"),
            LineItem::reserved(ReservedCategory::RentInterestPaid).with_amount("7e27"),
        ];

        let report = calculator().calculate(&items, Period::FullYear, "2025");

        assert_eq!(report.percent_of_income, Decimal::MAX);
        assert_eq!(report.classification, Classification::SeverelyCostBurdened);
        assert!(report.period_difference > Decimal::ZERO);
        assert_eq!(report.narrative.len(), 3);
    }

    #[test]
    fn amounts_summing_past_decimal_range_saturate() {
        let items = vec![
            LineItem::reserved(ReservedCategory::Earnings).with_amount("1000"),
            LineItem::reserved(ReservedCategory::RentInterestPaid).with_amount("5e28"),
            LineItem::reserved(ReservedCategory::Maintenance).with_amount("5e28"),
        ];

        let report = calculator().calculate(&items, Period::Q1, "2025");

        assert_eq!(report.non_principal, Decimal::MAX);
        assert_eq!(report.classification, Classification::SeverelyCostBurdened);
        assert_eq!(report.rows.len(), 7);
        assert!(!report.chart.is_empty());
    }

    #[test]
    fn legacy_chart_filter_keeps_affordable_row() {
        let calc = ExpenseReportCalculator::new(ReportConfig {
            chart_filter: ChartFilter::Legacy,
            ..ReportConfig::default()
        })
        .unwrap();

        let report = calc.calculate(&sample_items(), Period::FullYear, "2025");

        assert_eq!(
            report.chart.last().map(|s| s.name.as_str()),
            Some("Affordable Weekly Rent")
        );
    }

    // =========================================================================
    // config tests
    // =========================================================================

    #[test]
    fn new_rejects_negative_threshold() {
        let result = ExpenseReportCalculator::new(ReportConfig {
            chart_min_percent: dec!(-0.5),
            ..ReportConfig::default()
        });

        assert_eq!(
            result.unwrap_err(),
            ReportConfigError::NegativeChartThreshold(dec!(-0.5))
        );
    }

    #[test]
    fn new_rejects_threshold_over_one_hundred() {
        let result = ExpenseReportCalculator::new(ReportConfig {
            chart_min_percent: dec!(101),
            ..ReportConfig::default()
        });

        assert_eq!(
            result.unwrap_err(),
            ReportConfigError::ChartThresholdTooLarge(dec!(101))
        );
    }

    // =========================================================================
    // title / file name tests
    // =========================================================================

    #[test]
    fn title_includes_period_except_full_year() {
        assert_eq!(
            report_title("2026", Period::SixMonths),
            "Housing Expense Report excluding principal paid 2026 6 Months"
        );
        assert_eq!(
            report_title("2026", Period::FullYear),
            "Housing Expense Report excluding principal paid 2026"
        );
    }

    #[test]
    fn file_name_replaces_spaces() {
        assert_eq!(
            export_file_name("2026", Period::FullYear),
            "2026_Full_Year_Housing_Expense_Report.pdf"
        );
        assert_eq!(
            export_file_name("2026", Period::Q4),
            "2026_Q4_Housing_Expense_Report.pdf"
        );
    }
}
