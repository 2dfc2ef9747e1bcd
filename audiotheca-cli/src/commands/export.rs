use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::error::failed;
use crate::CliError;

/// Export the media item listing (optionally filtered) to CSV.
pub(crate) fn run_export(
    conn: &Connection,
    path: Option<PathBuf>,
    search: Option<&str>,
) -> Result<(), CliError> {
    let path = path.unwrap_or_else(|| {
        let now = chrono::Local::now().naive_local();
        PathBuf::from(audiotheca_report::default_export_name("audiotheca_export", "csv", now))
    });

    let rows = audiotheca_db::list_media_items(conn, search).map_err(failed("load items"))?;
    if rows.is_empty() {
        log::warn!("No items to export.");
        return Ok(());
    }

    audiotheca_report::export_media_items(&path, &rows)
        .map_err(|e| CliError::export(format!("Failed to write {}: {}", path.display(), e)))?;

    log::info!(
        "{}",
        "Export complete.".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Path: {}", path.display());
    log::info!("  Rows: {}", rows.len());
    Ok(())
}
