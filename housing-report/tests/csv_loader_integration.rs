//! Integration tests that exercise the loader against an on-disk fixture file.
//!
//! These complement the unit tests inside csv_loader.rs (which all use
//! inline string literals) by verifying that the full read-from-disk path
//! works end-to-end.

use std::path::{Path, PathBuf};

use housing_core::ReservedCategory;
use housing_report::csv_loader::{self, CsvLoadError};
use pretty_assertions::assert_eq;

fn fixture_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("sample_items.csv")
}

#[test]
fn test_load_fixture_file_succeeds() {
    let items = csv_loader::load_from_file(&fixture_path()).expect("fixture should load");

    assert_eq!(items.len(), 8);
}

#[test]
fn test_fixture_reserved_rows_are_tagged_in_order() {
    let items = csv_loader::load_from_file(&fixture_path()).unwrap();

    let categories: Vec<_> = items.iter().take(6).map(|i| i.category).collect();
    let expected: Vec<_> = ReservedCategory::all().iter().copied().map(Some).collect();
    assert_eq!(categories, expected);
}

#[test]
fn test_fixture_amounts_are_kept_as_typed() {
    let items = csv_loader::load_from_file(&fixture_path()).unwrap();

    assert_eq!(items[0].amount, "52,000");
    assert_eq!(items[6].name, "Strata Fees");
    assert_eq!(items[6].category, None);
}

#[test]
fn test_missing_file_is_io_error() {
    let err = csv_loader::load_from_file(Path::new("does/not/exist.csv")).unwrap_err();

    assert!(matches!(err, CsvLoadError::Io { .. }));
}
