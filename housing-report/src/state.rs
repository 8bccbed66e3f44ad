//! Form state for the housing expense report.
//!
//! Everything the user has entered lives here for the lifetime of one run.
//! The calculator never holds on to it; each report is derived from the
//! current state on demand.

use chrono::{Datelike, Local};
use housing_core::{ExpenseReportCalculator, HousingReport, LineItem, Period};
use thiserror::Error;
use tracing::{debug, info};

/// Errors from editing the form.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("no line item at index {0}")]
    NoSuchItem(usize),

    #[error("no narrative line at index {0}")]
    NoSuchNarrativeLine(usize),
}

/// Everything entered on the form, plus whether the report is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub period: Period,
    pub year: String,
    pub items: Vec<LineItem>,
    pub notes: String,
    report_visible: bool,

    initial_period: Period,
    initial_year: String,
}

impl Default for FormState {
    /// A blank form for the current calendar year.
    fn default() -> Self {
        Self::new(Local::now().year().to_string())
    }
}

impl FormState {
    /// Create a blank form for the given year and a full-year period.
    pub fn new(year: impl Into<String>) -> Self {
        Self::with_period(year, Period::default())
    }

    /// Create a blank form whose initial period is `period`.
    pub fn with_period(
        year: impl Into<String>,
        period: Period,
    ) -> Self {
        let year = year.into();
        Self {
            period,
            year: year.clone(),
            items: LineItem::default_items(),
            notes: String::new(),
            report_visible: false,
            initial_period: period,
            initial_year: year,
        }
    }

    pub fn is_report_visible(&self) -> bool {
        self.report_visible
    }

    pub fn set_period(
        &mut self,
        period: Period,
    ) {
        self.period = period;
    }

    pub fn set_year(
        &mut self,
        year: impl Into<String>,
    ) {
        self.year = year.into();
    }

    /// Append an empty user-defined row and return its index.
    pub fn add_item(&mut self) -> usize {
        self.items.push(LineItem::custom("", ""));
        self.items.len() - 1
    }

    /// Rename a row. Reserved rows keep their fixed names; returns whether
    /// the name changed.
    pub fn set_item_name(
        &mut self,
        index: usize,
        name: impl Into<String>,
    ) -> Result<bool, StateError> {
        let item = self
            .items
            .get_mut(index)
            .ok_or(StateError::NoSuchItem(index))?;
        if item.is_reserved() {
            debug!(index, name = %item.name, "reserved name left unchanged");
            return Ok(false);
        }
        item.name = name.into();
        Ok(true)
    }

    pub fn set_item_amount(
        &mut self,
        index: usize,
        amount: impl Into<String>,
    ) -> Result<(), StateError> {
        let item = self
            .items
            .get_mut(index)
            .ok_or(StateError::NoSuchItem(index))?;
        item.amount = amount.into();
        Ok(())
    }

    /// Set the amount for a row by name.
    ///
    /// Reserved labels update their reserved row; other names update the
    /// first user row with that name, or append a new one.
    pub fn upsert_item(
        &mut self,
        name: &str,
        amount: impl Into<String>,
    ) {
        let incoming = LineItem::from_name(name, amount);
        let existing = self.items.iter_mut().find(|item| match incoming.category {
            Some(category) => item.category == Some(category),
            None => !item.is_reserved() && item.name == incoming.name,
        });

        match existing {
            Some(item) => item.amount = incoming.amount,
            None => self.items.push(incoming),
        }
    }

    /// Compute the report from the current inputs and show it.
    pub fn generate_report(
        &mut self,
        calculator: &ExpenseReportCalculator,
    ) -> HousingReport {
        let report = calculator.calculate(&self.items, self.period, &self.year);
        self.report_visible = true;
        info!(
            year = %self.year,
            period = %self.period,
            items = self.items.len(),
            "report generated"
        );
        report
    }

    /// Append a narrative line to the notes, on its own line.
    pub fn seed_note(
        &mut self,
        report: &HousingReport,
        line_index: usize,
    ) -> Result<(), StateError> {
        let line = report
            .narrative
            .get(line_index)
            .ok_or(StateError::NoSuchNarrativeLine(line_index))?;
        if !self.notes.is_empty() && !self.notes.ends_with('\n') {
            self.notes.push('\n');
        }
        self.notes.push_str(line);
        Ok(())
    }

    /// Reset every field to its initial value and hide the report.
    pub fn clear(&mut self) {
        self.period = self.initial_period;
        self.year = self.initial_year.clone();
        self.items = LineItem::default_items();
        self.notes.clear();
        self.report_visible = false;
        debug!("form cleared");
    }

    /// The report for the current inputs, or `None` while the report is
    /// hidden. Edits made after [`generate_report`](Self::generate_report)
    /// are reflected here.
    pub fn current_report(
        &self,
        calculator: &ExpenseReportCalculator,
    ) -> Option<HousingReport> {
        self.report_visible
            .then(|| calculator.calculate(&self.items, self.period, &self.year))
    }

    /// Name of the PDF the export action would write, or `None` while the
    /// report is hidden.
    pub fn export_file_name(&self) -> Option<String> {
        self.report_visible
            .then(|| housing_core::calculations::export_file_name(&self.year, self.period))
    }
}
