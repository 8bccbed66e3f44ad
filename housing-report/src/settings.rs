//! Optional TOML settings for the report shell.
//!
//! ```toml
//! default_period = "Q2"
//! log_level = "debug"
//! log_stdout = true
//! log_file = "housing.log"
//! export_dir = "reports"
//!
//! [report]
//! chart_min_percent = 4
//! chart_filter = "legacy"
//! ```
//!
//! Every key is optional. Command-line flags win over file values.

use std::path::{Path, PathBuf};

use housing_core::{Period, ReportConfig};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("cannot read settings file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid settings in '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Settings file contents.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub default_period: Period,
    pub log_level: String,
    pub log_stdout: bool,
    pub log_file: Option<PathBuf>,
    pub export_dir: Option<PathBuf>,
    pub report: ReportConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_period: Period::default(),
            log_level: "info".to_string(),
            log_stdout: true,
            log_file: None,
            export_dir: None,
            report: ReportConfig::default(),
        }
    }
}

impl Settings {
    pub fn from_toml_str(
        input: &str,
        origin: &str,
    ) -> Result<Self, SettingsError> {
        toml::from_str(input).map_err(|source| SettingsError::Parse {
            path: origin.to_string(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents, &path.display().to_string())
    }

    /// Loads `path` when given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, SettingsError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use housing_core::ChartFilter;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let settings = Settings::from_toml_str("", "test").unwrap();

        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn full_file_overrides_every_key() {
        let settings = Settings::from_toml_str(
            r#"
default_period = "6 Months"
log_level = "debug"
log_stdout = false
log_file = "housing.log"
export_dir = "reports"

[report]
chart_min_percent = 5
chart_filter = "legacy"
"#,
            "test",
        )
        .unwrap();

        assert_eq!(settings.default_period, Period::SixMonths);
        assert_eq!(settings.log_level, "debug");
        assert!(!settings.log_stdout);
        assert_eq!(settings.log_file, Some(PathBuf::from("housing.log")));
        assert_eq!(settings.export_dir, Some(PathBuf::from("reports")));
        assert_eq!(settings.report.chart_min_percent, dec!(5));
        assert_eq!(settings.report.chart_filter, ChartFilter::Legacy);
    }

    #[test]
    fn partial_report_table_keeps_other_defaults() {
        let settings = Settings::from_toml_str("[report]\nchart_filter = \"numeric\"\n", "test")
            .unwrap();

        assert_eq!(settings.report.chart_min_percent, dec!(4));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Settings::from_toml_str("colour = \"blue\"\n", "test").unwrap_err();

        assert!(matches!(err, SettingsError::Parse { .. }));
    }

    #[test]
    fn unknown_period_is_rejected() {
        let err = Settings::from_toml_str("default_period = \"Q5\"\n", "test").unwrap_err();

        assert!(matches!(err, SettingsError::Parse { .. }));
    }
}
