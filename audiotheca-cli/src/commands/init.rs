use std::path::Path;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::error::failed;
use crate::CliError;

/// Seed default media types and genres into an opened (and thus created) database.
pub(crate) fn run_init(conn: &mut Connection, db_path: &Path) -> Result<(), CliError> {
    let seeded = audiotheca_db::seed_defaults(conn).map_err(failed("seed defaults"))?;

    log::info!(
        "{}",
        "Collection database ready.".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Database: {}", db_path.display());
    crate::log_blank();
    log::info!("  Media types added: {:>4}", seeded.media_types);
    log::info!("  Genres added:      {:>4}", seeded.genres);
    if seeded.media_types == 0 && seeded.genres == 0 {
        log::info!("Lookup tables already had entries; nothing was seeded.");
    }
    Ok(())
}
