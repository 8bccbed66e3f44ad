//! Report derivations for the housing expense form.
//!
//! Everything here is a pure function of the entered line items and the
//! selected period; see [`calculator`] for how the pieces fit together.

pub mod amounts;
pub mod calculator;
pub mod chart;
pub mod common;
pub mod narrative;
pub mod rows;
pub mod totals;

pub use amounts::{parse_amount, parse_items};
pub use calculator::{
    ExpenseReportCalculator, ReportConfig, ReportConfigError, benchmarks, export_file_name,
    report_title,
};
pub use chart::{ChartFilter, build_chart_series};
pub use narrative::{NarrativeInput, build_narrative};
pub use rows::build_report_rows;
pub use totals::{
    affordable_weekly, compute_income, compute_mortgage_outlay, compute_non_principal, compute_principal,
    weekly_rent, weeks_for,
};
