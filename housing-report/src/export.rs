//! PDF export of a generated report.
//!
//! Writes the same blocks as the text rendering onto A4 pages using the
//! built-in Helvetica fonts, with a proportional bar for each chart slice.

use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use housing_core::{ExpenseReportCalculator, HousingReport};
use housing_core::calculations::common::{fixed2, format_money};
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point, Rgb,
};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use thiserror::Error;
use tracing::{debug, info};

use crate::render::{benchmark_lines, chart_shares};
use crate::state::FormState;

const PAGE_WIDTH: f32 = 210.0;
const PAGE_HEIGHT: f32 = 297.0;
const MARGIN_LEFT: f32 = 15.0;
const MARGIN_RIGHT: f32 = 195.0;
const TOP: f32 = 282.0;
const BOTTOM: f32 = 20.0;
const BAR_MAX_WIDTH: f32 = 80.0;

const SLICE_COLORS: [(f32, f32, f32); 6] = [
    (0.26, 0.52, 0.96),
    (0.92, 0.26, 0.21),
    (0.98, 0.74, 0.02),
    (0.20, 0.66, 0.33),
    (0.61, 0.35, 0.71),
    (0.95, 0.50, 0.17),
];

/// Errors that can occur while writing a PDF.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("cannot write '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Cursor over a growing PDF document.
struct PdfCursor {
    doc: PdfDocumentReference,
    layer: PdfLayerReference,
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    y: f32,
    pages: usize,
}

impl PdfCursor {
    fn new(title: &str) -> Result<Self, ExportError> {
        let (doc, page, layer) =
            PdfDocument::new(title, Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
        let layer = doc.get_page(page).get_layer(layer);
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| ExportError::Pdf(e.to_string()))?;

        Ok(Self {
            doc,
            layer,
            regular,
            bold,
            y: TOP,
            pages: 1,
        })
    }

    /// Starts a new page when fewer than `height` mm remain.
    fn reserve(
        &mut self,
        height: f32,
    ) {
        if self.y - height >= BOTTOM {
            return;
        }
        self.pages += 1;
        let (page, layer) = self.doc.add_page(
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            format!("Layer {}", self.pages),
        );
        self.layer = self.doc.get_page(page).get_layer(layer);
        self.y = TOP;
    }

    fn text_at(
        &self,
        text: &str,
        size: f32,
        x: f32,
        bold: bool,
    ) {
        let font = if bold { &self.bold } else { &self.regular };
        self.layer.use_text(text, size, Mm(x), Mm(self.y), font);
    }

    fn line(
        &mut self,
        text: &str,
        size: f32,
        bold: bool,
    ) {
        let height = size * 0.5;
        self.reserve(height);
        self.text_at(text, size, MARGIN_LEFT, bold);
        self.y -= height;
    }

    fn gap(
        &mut self,
        height: f32,
    ) {
        self.y -= height;
    }

    fn rule(&mut self) {
        self.reserve(4.0);
        self.layer.set_outline_color(Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None)));
        self.layer.set_outline_thickness(0.5);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(MARGIN_LEFT), Mm(self.y)), false),
                (Point::new(Mm(MARGIN_RIGHT), Mm(self.y)), false),
            ],
            is_closed: false,
        });
        self.y -= 4.0;
    }

    fn bar(
        &self,
        x: f32,
        width: f32,
        color: (f32, f32, f32),
    ) {
        let (r, g, b) = color;
        self.layer.set_outline_color(Color::Rgb(Rgb::new(r, g, b, None)));
        self.layer.set_outline_thickness(8.0);
        self.layer.add_line(Line {
            points: vec![
                (Point::new(Mm(x), Mm(self.y + 1.0)), false),
                (Point::new(Mm(x + width.max(0.5)), Mm(self.y + 1.0)), false),
            ],
            is_closed: false,
        });
    }

    fn save(
        self,
        path: &Path,
    ) -> Result<(), ExportError> {
        let io_err = |source| ExportError::Io {
            path: path.display().to_string(),
            source,
        };
        let file = File::create(path).map_err(io_err)?;
        let mut writer = BufWriter::new(file);
        self.doc
            .save(&mut writer)
            .map_err(|e| ExportError::Pdf(e.to_string()))
    }
}

fn decimal_to_f32(value: Decimal) -> f32 {
    value.to_f32().unwrap_or(0.0)
}

/// Lays out the report into a PDF document and writes it to `path`.
pub fn write_pdf(
    report: &HousingReport,
    notes: &str,
    path: &Path,
) -> Result<(), ExportError> {
    let mut pdf = PdfCursor::new(&report.title)?;

    pdf.line(&report.title, 14.0, true);
    pdf.rule();

    pdf.line("Benchmarks", 12.0, true);
    for line in benchmark_lines(report) {
        pdf.line(&line, 10.0, false);
    }
    pdf.gap(4.0);

    pdf.line("Summary", 12.0, true);
    for line in &report.narrative {
        pdf.line(line, 10.0, false);
    }
    pdf.gap(4.0);

    if !notes.trim().is_empty() {
        pdf.line("Notes", 12.0, true);
        for line in notes.lines() {
            pdf.line(line, 10.0, false);
        }
        pdf.gap(4.0);
    }

    pdf.line("Breakdown", 12.0, true);
    pdf.reserve(6.0);
    pdf.text_at("Category", 10.0, MARGIN_LEFT, true);
    pdf.text_at("Amount", 10.0, 110.0, true);
    pdf.text_at("Percent", 10.0, 145.0, true);
    pdf.gap(2.0);
    pdf.rule();
    for row in &report.rows {
        pdf.reserve(5.0);
        pdf.text_at(&row.name, 10.0, MARGIN_LEFT, false);
        pdf.text_at(&format_money(row.value), 10.0, 110.0, false);
        pdf.text_at(&row.percent, 10.0, 145.0, false);
        pdf.gap(5.0);
    }
    pdf.gap(4.0);

    pdf.line("Chart", 12.0, true);
    for (idx, (slice, share)) in chart_shares(&report.chart).into_iter().enumerate() {
        pdf.reserve(6.0);
        pdf.text_at(&slice.name, 10.0, MARGIN_LEFT, false);
        let width = BAR_MAX_WIDTH * decimal_to_f32(share) / 100.0;
        pdf.bar(95.0, width, SLICE_COLORS[idx % SLICE_COLORS.len()]);
        pdf.text_at(&format!("{}%", fixed2(share)), 10.0, 180.0, false);
        pdf.gap(6.0);
    }

    let pages = pdf.pages;
    pdf.save(path)?;
    debug!(path = %path.display(), pages, "pdf written");
    Ok(())
}

/// Export action: writes the report for the form's current inputs into
/// `dir` under its standard file name.
///
/// The report is recalculated from `state`, so edits made after the report
/// was generated are exported too. Does nothing and returns `Ok(None)`
/// while the report is not visible.
pub fn export_pdf(
    state: &FormState,
    calculator: &ExpenseReportCalculator,
    dir: &Path,
) -> Result<Option<PathBuf>, ExportError> {
    let Some(report) = state.current_report(calculator) else {
        debug!("export skipped: report not generated");
        return Ok(None);
    };

    let path = dir.join(&report.export_file_name);
    write_pdf(&report, &state.notes, &path)?;
    info!(path = %path.display(), "report exported");
    Ok(Some(path))
}
