use std::path::Path;

use audiotheca_catalog::ArtistReport;
use audiotheca_report::{ExportError, ReportOptions};
use rusqlite::Connection;

use crate::cli_types::{ReportKind, ReportOutput};
use crate::error::failed;
use crate::CliError;

use super::artists::resolve_artist;

pub(crate) fn run_report(
    conn: &Connection,
    kind: ReportKind,
    artist: Option<&str>,
    output: &ReportOutput,
    opts: &ReportOptions,
) -> Result<(), CliError> {
    let text = match kind {
        ReportKind::Collection => {
            let stats = audiotheca_db::collection_statistics(conn).map_err(failed("build report"))?;
            audiotheca_report::collection_report(&stats, opts)
        }
        ReportKind::Artists => artists_text(conn, None, opts)?,
        ReportKind::Artist => {
            let Some(artist) = artist else {
                return Err(CliError::input("The artist report needs --artist <id or name>"));
            };
            artists_text(conn, Some(artist), opts)?
        }
        ReportKind::Formats => {
            let rows = audiotheca_db::format_report(conn).map_err(failed("build report"))?;
            audiotheca_report::formats_report(&rows, opts)
        }
        ReportKind::Value => {
            let stats = audiotheca_db::collection_statistics(conn).map_err(failed("build report"))?;
            let rows = audiotheca_db::format_values(conn).map_err(failed("build report"))?;
            audiotheca_report::value_report(stats.total_value, &rows, opts)
        }
        ReportKind::Years => {
            let stats = audiotheca_db::collection_statistics(conn).map_err(failed("build report"))?;
            audiotheca_report::purchase_years_report(&stats.by_year, opts)
        }
    };
    emit(&text, output)
}

/// `artists report [ARTIST]`: one artist's items, or the all-artists summary.
pub(crate) fn run_artists_report(
    conn: &Connection,
    artist: Option<&str>,
    output: &ReportOutput,
    opts: &ReportOptions,
) -> Result<(), CliError> {
    let text = artists_text(conn, artist, opts)?;
    emit(&text, output)
}

fn artists_text(
    conn: &Connection,
    artist: Option<&str>,
    opts: &ReportOptions,
) -> Result<String, CliError> {
    let artist = match artist {
        Some(a) => {
            let id = resolve_artist(conn, a)?;
            Some(audiotheca_db::get_artist(conn, id).map_err(failed("load artist"))?)
        }
        None => None,
    };
    let report = audiotheca_db::artist_report(conn, artist.as_ref().map(|a| a.id))
        .map_err(failed("build report"))?;
    Ok(match report {
        ArtistReport::Items(rows) => {
            let name = artist.as_ref().map_or("", |a| a.name.as_str());
            audiotheca_report::artist_report(name, &rows, opts)
        }
        ArtistReport::Summary(rows) => audiotheca_report::artists_report(&rows, opts),
    })
}

/// Print the report, then write any requested files.
fn emit(text: &str, output: &ReportOutput) -> Result<(), CliError> {
    for line in text.lines() {
        log::info!("{line}");
    }

    if let Some(path) = &output.save {
        write_output(path, "Report saved to", audiotheca_report::save_report_text(path, text))?;
    }
    if let Some(path) = &output.csv {
        write_output(path, "CSV saved to", audiotheca_report::export_report_csv(path, text))?;
    }
    Ok(())
}

fn write_output(path: &Path, done: &str, result: Result<(), ExportError>) -> Result<(), CliError> {
    match result {
        Ok(()) => {
            log::info!("{} {}", done, path.display());
            Ok(())
        }
        Err(ExportError::EmptyReport) => {
            log::warn!("The report is empty; build it first, then save.");
            Ok(())
        }
        Err(e) => Err(CliError::export(format!(
            "Failed to write {}: {}",
            path.display(),
            e
        ))),
    }
}
