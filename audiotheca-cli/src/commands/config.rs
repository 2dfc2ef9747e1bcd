use std::path::PathBuf;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::settings::{settings_path, Settings};
use crate::CliError;

/// Show the settings file status and the effective values.
pub(crate) fn run_config_show(settings: &Settings, db_override: Option<PathBuf>) {
    let path = settings_path();

    log::info!(
        "{}",
        "Audiotheca Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();
    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    log::info!("  Database:      {}", settings.resolve_db_path(db_override).display());
    log::info!("  Currency:      {}", settings.report.currency);
}

pub(crate) fn run_config_path() {
    log::info!("{}", settings_path().display());
}

/// Update the saved settings file with whichever values were given.
pub(crate) fn run_config_set(
    mut settings: Settings,
    database: Option<PathBuf>,
    currency: Option<String>,
) -> Result<(), CliError> {
    if database.is_none() && currency.is_none() {
        log::warn!("Nothing to change. Pass --database and/or --currency.");
        return Ok(());
    }
    if let Some(db) = database {
        settings.database.path = Some(db);
    }
    if let Some(currency) = currency {
        settings.report.currency = currency.trim().to_string();
    }

    let path = settings_path();
    settings
        .save_to(&path)
        .map_err(|e| CliError::config(format!("Failed to write {}: {}", path.display(), e)))?;
    log::info!("Settings saved to {}", path.display());
    Ok(())
}
