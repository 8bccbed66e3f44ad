use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{ChartSlice, ReportRow};

/// How the minimum-percent cut-off is applied to breakdown rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartFilter {
    /// Compare the row's numeric share; rows without one are dropped.
    #[default]
    Numeric,
    /// Compare the leading number of the percent text. Rows whose text has
    /// no leading number are kept.
    Legacy,
}

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([+-]?(?:\d+\.?\d*|\.\d+))").expect("leading number pattern is valid")
});

/// Reads the number at the start of a percent string, the way a lenient
/// float parser would: `"+33.33% over"` → `33.33`, `""` → `None`.
pub fn leading_number(text: &str) -> Option<Decimal> {
    LEADING_NUMBER
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| {
            let digits = m.as_str().trim_start_matches('+').trim_end_matches('.');
            let (sign, magnitude) = match digits.strip_prefix('-') {
                Some(rest) => ("-", rest),
                None => ("", digits),
            };
            let magnitude = if magnitude.starts_with('.') {
                format!("0{magnitude}")
            } else {
                magnitude.to_string()
            };
            Decimal::from_str(&format!("{sign}{magnitude}")).ok()
        })
}

/// Turns breakdown rows into pie slices, dropping Earnings and every row
/// below `min_percent`.
pub fn build_chart_series(
    rows: &[ReportRow],
    min_percent: Decimal,
    filter: ChartFilter,
) -> Vec<ChartSlice> {
    rows.iter()
        .filter(|row| !row.kind.is_earnings())
        .filter(|row| match filter {
            ChartFilter::Numeric => row.share.is_some_and(|share| share >= min_percent),
            ChartFilter::Legacy => leading_number(&row.percent).is_none_or(|pct| pct >= min_percent),
        })
        .map(|row| ChartSlice {
            name: row.name.clone(),
            value: row.value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::{ReservedCategory, RowKind};

    fn row(
        name: &str,
        kind: RowKind,
        percent: &str,
        share: Option<Decimal>,
    ) -> ReportRow {
        ReportRow {
            name: name.to_string(),
            kind,
            value: dec!(10),
            percent: percent.to_string(),
            share,
        }
    }

    fn sample_rows() -> Vec<ReportRow> {
        vec![
            row(
                "Earnings",
                RowKind::Item(Some(ReservedCategory::Earnings)),
                "",
                None,
            ),
            row(
                "Rent/Interest Paid",
                RowKind::Item(Some(ReservedCategory::RentInterestPaid)),
                "30.00%",
                Some(dec!(30)),
            ),
            row(
                "Maintenance",
                RowKind::Item(Some(ReservedCategory::Maintenance)),
                "2.00%",
                Some(dec!(2)),
            ),
            row(
                "Boundary",
                RowKind::Item(None),
                "4.00%",
                Some(dec!(4)),
            ),
            row(
                "Estimated Weekly Rent",
                RowKind::EstimatedWeeklyRent,
                "-25.00% under affordable",
                Some(dec!(-25)),
            ),
            row(
                "Affordable Weekly Rent",
                RowKind::AffordableWeeklyRent,
                "",
                None,
            ),
        ]
    }

    fn names(slices: &[ChartSlice]) -> Vec<&str> {
        slices.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn numeric_filter_drops_earnings_small_and_unshared_rows() {
        let slices = build_chart_series(&sample_rows(), dec!(4), ChartFilter::Numeric);

        assert_eq!(names(&slices), vec!["Rent/Interest Paid", "Boundary"]);
    }

    #[test]
    fn legacy_filter_keeps_rows_without_a_leading_number() {
        let slices = build_chart_series(&sample_rows(), dec!(4), ChartFilter::Legacy);

        assert_eq!(
            names(&slices),
            vec!["Rent/Interest Paid", "Boundary", "Affordable Weekly Rent"]
        );
    }

    #[test]
    fn earnings_never_charted_even_with_a_percent() {
        let mut rows = sample_rows();
        rows[0].percent = "100.00%".to_string();
        rows[0].share = Some(dec!(100));

        for filter in [ChartFilter::Numeric, ChartFilter::Legacy] {
            let slices = build_chart_series(&rows, dec!(4), filter);
            assert!(!names(&slices).contains(&"Earnings"));
        }
    }

    #[test]
    fn leading_number_parses_like_a_lenient_float() {
        assert_eq!(leading_number("33.33%"), Some(dec!(33.33)));
        assert_eq!(leading_number("+12.50% over affordable"), Some(dec!(12.50)));
        assert_eq!(leading_number("-3.1% under"), Some(dec!(-3.1)));
        assert_eq!(leading_number(".5%"), Some(dec!(0.5)));
        assert_eq!(leading_number(""), None);
        assert_eq!(leading_number("n/a"), None);
    }
}
