//! Text and JSON renderings of a [`HousingReport`].

use std::fmt;

use housing_core::calculations::common::{fixed2, format_money, percent_of, saturating_sum};
use housing_core::{ChartSlice, HousingReport};
use rust_decimal::Decimal;
use serde::Serialize;

const RULE: &str = "────────────────────────────────────────────────────────────────────";

/// Output format for the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Each slice with its share of the whole chart, in percent.
///
/// Slices only count toward the total when positive, so a negative entry
/// cannot inflate the other shares past 100%.
pub fn chart_shares(slices: &[ChartSlice]) -> Vec<(&ChartSlice, Decimal)> {
    let total = saturating_sum(slices.iter().map(|s| s.value.max(Decimal::ZERO)));
    slices
        .iter()
        .map(|slice| {
            let share = percent_of(slice.value.max(Decimal::ZERO), total).unwrap_or(Decimal::ZERO);
            (slice, share)
        })
        .collect()
}

/// Benchmark lines, shared by the text and PDF renderings.
pub fn benchmark_lines(report: &HousingReport) -> [String; 2] {
    [
        format!(
            "Cost burdened above (30% of income): {}",
            format_money(report.benchmarks.cost_burdened_above)
        ),
        format!(
            "Severely cost burdened above (50% of income): {}",
            format_money(report.benchmarks.severely_burdened_above)
        ),
    ]
}

/// Plain-text view of a report and its notes.
pub struct TextReport<'a> {
    pub report: &'a HousingReport,
    pub notes: &'a str,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let report = self.report;

        writeln!(f, "{}", report.title)?;
        writeln!(f, "{RULE}")?;

        writeln!(f, "\nBenchmarks")?;
        for line in benchmark_lines(report) {
            writeln!(f, "  {line}")?;
        }

        writeln!(f, "\nSummary")?;
        for line in &report.narrative {
            writeln!(f, "  • {line}")?;
        }

        if !self.notes.trim().is_empty() {
            writeln!(f, "\nNotes")?;
            for line in self.notes.lines() {
                writeln!(f, "  {line}")?;
            }
        }

        writeln!(f, "\nBreakdown")?;
        writeln!(f, "  {:<38} {:>14}  {}", "Category", "Amount", "Percent")?;
        writeln!(f, "  {RULE}")?;
        for row in &report.rows {
            writeln!(
                f,
                "  {:<38} {:>14}  {}",
                row.name,
                format_money(row.value),
                row.percent
            )?;
        }

        writeln!(f, "\nChart")?;
        if report.chart.is_empty() {
            writeln!(f, "  (nothing above the chart threshold)")?;
        }
        for (slice, share) in chart_shares(&report.chart) {
            writeln!(
                f,
                "  {:<38} {:>14}  {}%",
                slice.name,
                format_money(slice.value),
                fixed2(share)
            )?;
        }
        Ok(())
    }
}

/// Plain-text report for the terminal.
pub fn render_text(
    report: &HousingReport,
    notes: &str,
) -> String {
    TextReport { report, notes }.to_string()
}

#[derive(Serialize)]
struct ReportDocument<'a> {
    #[serde(flatten)]
    report: &'a HousingReport,
    notes: &'a str,
}

/// Pretty-printed JSON of the report with the notes attached.
pub fn render_json(
    report: &HousingReport,
    notes: &str,
) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&ReportDocument { report, notes })
}
