//! File export: semicolon-separated CSV and plain-text report dumps.
//!
//! CSV files start with a UTF-8 byte-order mark so spreadsheet software
//! picks the right encoding.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use audiotheca_catalog::{format_date, MediaItemRow};
use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Report is empty, nothing to export")]
    EmptyReport,
}

const BOM: &[u8] = "\u{feff}".as_bytes();

/// Header row of the full media item export.
pub const MEDIA_ITEMS_HEADER: [&str; 9] = [
    "ID",
    "Catalog number",
    "Album",
    "Artist",
    "Format",
    "Condition",
    "Price",
    "Purchase date",
    "Storage location",
];

fn csv_writer<W: Write>(mut writer: W) -> Result<csv::Writer<W>, ExportError> {
    writer.write_all(BOM)?;
    Ok(csv::WriterBuilder::new()
        .delimiter(b';')
        .flexible(true)
        .from_writer(writer))
}

/// Write the media item listing as CSV, one record per listing row.
pub fn write_media_items_csv<W: Write>(writer: W, rows: &[MediaItemRow]) -> Result<(), ExportError> {
    let mut wtr = csv_writer(writer)?;
    wtr.write_record(MEDIA_ITEMS_HEADER)?;
    for row in rows {
        wtr.write_record([
            row.id.to_string(),
            row.catalog_number.clone(),
            row.release_title.clone().unwrap_or_default(),
            row.artist_name.clone().unwrap_or_default(),
            row.media_type.clone().unwrap_or_default(),
            row.condition.as_str().to_string(),
            row.purchase_price.map(|p| format!("{p:.2}")).unwrap_or_default(),
            row.purchase_date.map(format_date).unwrap_or_default(),
            row.storage_location.clone().unwrap_or_default(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create `path` and write the media item listing into it.
pub fn export_media_items(path: &Path, rows: &[MediaItemRow]) -> Result<(), ExportError> {
    let file = File::create(path)?;
    write_media_items_csv(BufWriter::new(file), rows)
}

/// Best-effort conversion of report text into table cells.
///
/// Rule lines (only `=` or `-`) and blank lines are dropped; every other
/// line is split on runs of two or more spaces. Values that themselves
/// contain double spaces end up split across cells.
pub fn report_to_table(text: &str) -> Vec<Vec<String>> {
    text.lines()
        .filter(|line| !is_rule(line))
        .map(split_cells)
        .filter(|cells| !cells.is_empty())
        .collect()
}

fn is_rule(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && (trimmed.chars().all(|c| c == '=') || trimmed.chars().all(|c| c == '-'))
}

fn split_cells(line: &str) -> Vec<String> {
    line.split("  ")
        .map(str::trim)
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
        .collect()
}

/// Write report text re-tabulated as CSV.
pub fn write_report_csv<W: Write>(writer: W, text: &str) -> Result<(), ExportError> {
    if text.trim().is_empty() {
        return Err(ExportError::EmptyReport);
    }
    let mut wtr = csv_writer(writer)?;
    for record in report_to_table(text) {
        wtr.write_record(&record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Create `path` and write report text re-tabulated as CSV.
pub fn export_report_csv(path: &Path, text: &str) -> Result<(), ExportError> {
    if text.trim().is_empty() {
        return Err(ExportError::EmptyReport);
    }
    let file = File::create(path)?;
    write_report_csv(BufWriter::new(file), text)
}

/// Write report text verbatim to `path`.
pub fn save_report_text(path: &Path, text: &str) -> Result<(), ExportError> {
    if text.trim().is_empty() {
        return Err(ExportError::EmptyReport);
    }
    std::fs::write(path, text)?;
    Ok(())
}

/// Default file name for an export: `{prefix}_{YYYYMMDD_HHMMSS}.{extension}`.
pub fn default_export_name(prefix: &str, extension: &str, at: NaiveDateTime) -> String {
    format!("{}_{}.{}", prefix, at.format("%Y%m%d_%H%M%S"), extension)
}
