//! Report rendering.
//!
//! Turns the run's records into an aligned text table, CSV or JSON. Table
//! and CSV follow the column schema selected by [`ExtractOptions`]; JSON
//! emits full records.

use std::io::Write;

use staff_directory_models::{ExtractOptions, Record};
use staff_directory_scraper::ScrapeReport;
use strum_macros::{AsRefStr, Display, EnumString};

/// Message printed by the table format when no page yielded records.
pub const NO_DATA: &str = "No data was scraped.";

/// Errors that can occur while writing a report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Writing to the destination failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Report output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned text table
    Table,
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON array of records
    Json,
}

impl OutputFormat {
    pub const ALL: &[Self] = &[Self::Table, Self::Csv, Self::Json];
}

/// Writes `records` to `writer` in `format`.
///
/// # Errors
///
/// Returns [`ReportError`] if serialization or writing fails.
pub fn render<W: Write>(
    records: &[Record],
    options: &ExtractOptions,
    format: OutputFormat,
    mut writer: W,
) -> Result<(), ReportError> {
    match format {
        OutputFormat::Table => render_table(records, options, &mut writer)?,
        OutputFormat::Csv => {
            let mut csv = csv::Writer::from_writer(writer);
            csv.write_record(options.headers())?;
            for record in records {
                csv.write_record(record.to_row(options))?;
            }
            csv.flush()?;
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, records)?;
            writeln!(writer)?;
        }
    }
    Ok(())
}

fn render_table<W: Write>(
    records: &[Record],
    options: &ExtractOptions,
    writer: &mut W,
) -> std::io::Result<()> {
    if records.is_empty() {
        return writeln!(writer, "{NO_DATA}");
    }

    let headers = options.headers();
    let rows: Vec<Vec<String>> = records.iter().map(|r| r.to_row(options)).collect();

    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(writer, headers.iter().copied(), &widths)?;
    let rule_len = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);
    writeln!(writer, "{}", "-".repeat(rule_len))?;
    for row in &rows {
        write_row(writer, row.iter().map(String::as_str), &widths)?;
    }
    Ok(())
}

fn write_row<'a, W: Write>(
    writer: &mut W,
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
) -> std::io::Result<()> {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    writeln!(writer, "{}", line.trim_end())
}

/// Logs every page that was skipped during the run.
pub fn log_skipped(report: &ScrapeReport) {
    if report.skipped.is_empty() {
        return;
    }
    log::warn!("{} page(s) yielded no records:", report.skipped.len());
    for page in &report.skipped {
        log::warn!("  {}: {}", page.url, page.reason);
    }
}
