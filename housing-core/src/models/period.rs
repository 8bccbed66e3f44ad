use std::fmt;

use serde::{Deserialize, Serialize};

/// Reporting period selected on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Period {
    #[serde(rename = "Q1")]
    Q1,
    #[serde(rename = "Q2")]
    Q2,
    #[serde(rename = "Q3")]
    Q3,
    #[serde(rename = "Q4")]
    Q4,
    #[serde(rename = "6 Months")]
    SixMonths,
    #[default]
    #[serde(rename = "Full Year")]
    FullYear,
}

impl Period {
    pub fn all() -> &'static [Period] {
        &[
            Self::Q1,
            Self::Q2,
            Self::Q3,
            Self::Q4,
            Self::SixMonths,
            Self::FullYear,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Q1 => "Q1",
            Self::Q2 => "Q2",
            Self::Q3 => "Q3",
            Self::Q4 => "Q4",
            Self::SixMonths => "6 Months",
            Self::FullYear => "Full Year",
        }
    }

    /// Number of weeks the period's expenses are spread over.
    pub fn weeks(&self) -> u32 {
        match self {
            Self::Q1 | Self::Q2 | Self::Q3 | Self::Q4 => 13,
            Self::SixMonths => 26,
            Self::FullYear => 52,
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|p| p.label() == s)
    }

    /// Like [`Period::parse`], but anything unrecognised is a full year.
    pub fn parse_lenient(s: &str) -> Self {
        Self::parse(s.trim()).unwrap_or_default()
    }
}

impl fmt::Display for Period {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        f.write_str(self.label())
    }
}
