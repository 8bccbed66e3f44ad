mod category;
mod classification;
mod line_item;
mod period;
mod report;

pub use category::ReservedCategory;
pub use classification::{BURDENED_MAX_PERCENT, Classification, IDEAL_MAX_PERCENT};
pub use line_item::{LineItem, ParsedItem};
pub use period::Period;
pub use report::{
    AFFORDABLE_WEEKLY_RENT_LABEL, Benchmarks, ChartSlice, ESTIMATED_WEEKLY_RENT_LABEL,
    HousingReport, MORTGAGE_OUTLAY_LABEL, NON_PRINCIPAL_TOTAL_LABEL, ReportRow, RowKind,
};
