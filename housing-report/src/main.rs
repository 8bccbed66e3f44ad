use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{debug, warn};

use housing_core::{ExpenseReportCalculator, Period};
use housing_report::render::{OutputFormat, render_json, render_text};
use housing_report::settings::Settings;
use housing_report::state::FormState;
use housing_report::{csv_loader, export, logging};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Housing expense report.
///
/// Collects housing expense line items, classifies the cost burden against
/// earnings, and prints or exports the report.
#[derive(Debug, Parser)]
#[command(name = "HousingReport", version, about)]
struct Cli {
    /// CSV file with `name,amount` columns.
    #[arg(short, long, value_name = "FILE")]
    items: Option<PathBuf>,

    /// Set a line item amount, e.g. `--set "Maintenance=1,200"`. Repeatable.
    #[arg(long = "set", value_name = "NAME=AMOUNT", value_parser = parse_assignment)]
    assignments: Vec<(String, String)>,

    /// Reporting period: Q1, Q2, Q3, Q4, "6 Months" or "Full Year".
    #[arg(short, long)]
    period: Option<String>,

    /// Report year (defaults to the current year).
    #[arg(short, long)]
    year: Option<String>,

    /// Free-text notes shown on the report.
    #[arg(long)]
    notes: Option<String>,

    /// Append narrative line N (1-based) to the notes. Repeatable.
    #[arg(long = "seed-note", value_name = "N")]
    seed_notes: Vec<usize>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Directory to write the PDF report into.
    #[arg(long, value_name = "DIR")]
    export: Option<PathBuf>,

    /// TOML settings file.
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `housing_core=trace`. Overrides
    /// `RUST_LOG` and the settings file.
    #[arg(long)]
    log_level: Option<String>,

    /// Append log output to this file.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

fn parse_assignment(s: &str) -> Result<(String, String), String> {
    let (name, amount) = s
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=AMOUNT, got '{s}'"))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(format!("missing name in '{s}'"));
    }
    Ok((name.to_string(), amount.trim().to_string()))
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load_or_default(cli.config.as_deref())?;

    logging::init_logging(&settings.log_level);
    if let Some(level) = &cli.log_level {
        logging::set_log_level(level).context("invalid --log-level")?;
    }
    if !settings.log_stdout {
        logging::set_console_enabled(false)?;
    }
    if let Some(log_file) = cli.log_file.as_ref().or(settings.log_file.as_ref()) {
        logging::enable_file_logging(log_file)?;
    }
    debug!(?settings, "settings loaded");

    let calculator = ExpenseReportCalculator::new(settings.report)
        .context("invalid [report] settings")?;

    let mut state = match &cli.year {
        Some(year) => FormState::with_period(year.as_str(), settings.default_period),
        None => {
            let mut state = FormState::default();
            state.set_period(settings.default_period);
            state
        }
    };

    if let Some(raw) = &cli.period {
        let period = Period::parse_lenient(raw);
        if Period::parse(raw.trim()).is_none() {
            warn!(period = %raw, "unrecognised period, using {}", period);
        }
        state.set_period(period);
    }

    if let Some(path) = &cli.items {
        let items = csv_loader::load_from_file(path)?;
        for item in items {
            state.upsert_item(&item.name, item.amount);
        }
    }
    for (name, amount) in &cli.assignments {
        state.upsert_item(name, amount.as_str());
    }
    if let Some(notes) = cli.notes {
        state.notes = notes;
    }

    let report = state.generate_report(&calculator);

    for n in &cli.seed_notes {
        let index = n
            .checked_sub(1)
            .ok_or_else(|| anyhow!("narrative lines are numbered from 1"))?;
        state
            .seed_note(&report, index)
            .with_context(|| format!("cannot seed note from line {n}"))?;
    }

    match cli.format {
        OutputFormat::Text => print!("{}", render_text(&report, &state.notes)),
        OutputFormat::Json => println!(
            "{}",
            render_json(&report, &state.notes).context("failed to serialize report")?
        ),
    }

    if let Some(dir) = cli.export.as_ref().or(settings.export_dir.as_ref()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("cannot create export directory {}", dir.display()))?;
        if let Some(path) = export::export_pdf(&state, &calculator, dir)? {
            eprintln!("Exported {}", path.display());
        }
    }

    Ok(())
}
