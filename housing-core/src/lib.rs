pub mod calculations;
pub mod models;

pub use calculations::{ChartFilter, ExpenseReportCalculator, ReportConfig, ReportConfigError};
pub use models::*;
