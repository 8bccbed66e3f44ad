//! CSV loader for expense line items.
//!
//! ## CSV Format
//!
//! Headers are matched by name; column order does not matter and cells are
//! trimmed.
//!
//! | Column   | Required | Notes                                          |
//! |----------|----------|------------------------------------------------|
//! | `name`   | yes      | A reserved label or any other category name    |
//! | `amount` | yes      | Kept as typed; `1,234.50` and empty are fine   |
//!
//! Reserved labels: `Earnings`, `Rent/Interest Paid`, `Insurance Paid`,
//! `Maintenance`, `Rates (Taxes)`, `Principal Paid`.
//!
//! ### Example
//!
//! ```csv
//! name,amount
//! Earnings,"85,000"
//! Rent/Interest Paid,18000
//! Insurance Paid,1200
//! Strata Fees,2400
//! ```
use housing_core::LineItem;
use serde::Deserialize;

// ---------------------------------------------------------------------------
// Serde-compatible row that mirrors the CSV layout exactly
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CsvRow {
    name: String,
    #[serde(default)]
    amount: String,
}

// ---------------------------------------------------------------------------
// Public error type
// ---------------------------------------------------------------------------

/// Errors that can occur while loading line items from CSV.
#[derive(Debug, thiserror::Error)]
pub enum CsvLoadError {
    /// The underlying CSV deserialisation failed (bad structure, missing
    /// column, etc.).
    #[error("CSV parse error: {0}")]
    Parse(#[from] csv::Error),

    /// A row had an empty `name` cell. `row` is 1-based (header = row 0).
    #[error("empty category name on row {row}")]
    EmptyName { row: usize },

    /// The file could not be read.
    #[error("cannot read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ---------------------------------------------------------------------------
// Core loader
// ---------------------------------------------------------------------------

fn convert_row(
    row: CsvRow,
    row_number: usize,
) -> Result<LineItem, CsvLoadError> {
    if row.name.is_empty() {
        return Err(CsvLoadError::EmptyName { row: row_number });
    }
    Ok(LineItem::from_name(row.name, row.amount))
}

/// Parse CSV text and return the line items in file order.
///
/// # Errors
///
/// * [CsvLoadError::Parse] – if the CSV is structurally invalid.
/// * [CsvLoadError::EmptyName] – if any row has no name.
pub fn load_from_str(input: &str) -> Result<Vec<LineItem>, CsvLoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(false)
        .from_reader(input.as_bytes());

    reader
        .deserialize::<CsvRow>()
        .enumerate()
        .map(|(idx, result)| {
            let row = result?;
            convert_row(row, idx + 1)
        })
        .collect()
}

/// Convenience wrapper: read a file from disk and delegate to [load_from_str].
pub fn load_from_file(path: &std::path::Path) -> Result<Vec<LineItem>, CsvLoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| CsvLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let items = load_from_str(&contents)?;
    tracing::debug!(path = %path.display(), count = items.len(), "line items loaded");
    Ok(items)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
