use audiotheca_report::{CollectionSummary, ReportOptions};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::error::failed;
use crate::CliError;

pub(crate) fn run_stats(conn: &Connection, opts: &ReportOptions) -> Result<(), CliError> {
    let stats = audiotheca_db::collection_statistics(conn).map_err(failed("load statistics"))?;
    let summary = CollectionSummary::from_statistics(&stats);

    if summary.total_items == 0 {
        log::info!(
            "{}",
            "The collection is empty.".if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!("Add items with 'audiotheca items add'.");
        return Ok(());
    }

    for line in audiotheca_report::statistics_summary(&summary, opts).lines() {
        log::info!("{line}");
    }
    Ok(())
}
