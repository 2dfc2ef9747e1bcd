//! audiotheca CLI
//!
//! Command-line shell for keeping an inventory of a personal music collection.

mod cli_types;
mod commands;
mod error;
mod settings;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{
    ArtistsAction, Cli, Commands, ConfigAction, GenresAction, ItemsAction, MediaTypesAction,
    ReleasesAction,
};
use commands::{artists, config, export, init, items, lookups, releases, report, stats};
pub(crate) use error::CliError;
use settings::Settings;

fn main() {
    let cli = Cli::parse();
    init_logger(cli.quiet, cli.verbose);

    if let Err(e) = run(cli) {
        log::error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = Settings::load();

    if let Commands::Config { action } = cli.command {
        return match action {
            ConfigAction::Show => {
                config::run_config_show(&settings, cli.db);
                Ok(())
            }
            ConfigAction::Path => {
                config::run_config_path();
                Ok(())
            }
            ConfigAction::Set { database, currency } => {
                config::run_config_set(settings, database, currency)
            }
        };
    }

    let db_path = settings.resolve_db_path(cli.db);
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            CliError::database(format!("Failed to create {}: {}", parent.display(), e))
        })?;
    }
    let mut conn = audiotheca_db::open_database(&db_path).map_err(|e| {
        CliError::database(format!(
            "Failed to open collection database {}: {}",
            db_path.display(),
            e
        ))
    })?;
    log::debug!("Opened {}", db_path.display());
    let opts = settings.report_options();

    match cli.command {
        Commands::Init => init::run_init(&mut conn, &db_path),
        Commands::Items { action } => match action {
            ItemsAction::List { search } => items::run_items_list(&conn, search.as_deref(), &opts),
            ItemsAction::Show { id } => items::run_items_show(&conn, id, &opts),
            ItemsAction::Add { fields } => items::run_items_add(&conn, &fields),
            ItemsAction::Update { id, fields } => items::run_items_update(&conn, id, &fields),
            ItemsAction::Delete { id, yes } => items::run_items_delete(&conn, id, yes),
        },
        Commands::Artists { action } => match action {
            ArtistsAction::List { search } => artists::run_artists_list(&conn, search.as_deref()),
            ArtistsAction::Add { fields } => artists::run_artists_add(&conn, &fields),
            ArtistsAction::Update { id, fields } => artists::run_artists_update(&conn, id, &fields),
            ArtistsAction::Delete { id, yes } => artists::run_artists_delete(&conn, id, yes),
            ArtistsAction::Report { artist, output } => {
                report::run_artists_report(&conn, artist.as_deref(), &output, &opts)
            }
        },
        Commands::Releases { action } => match action {
            ReleasesAction::List { search } => {
                releases::run_releases_list(&conn, search.as_deref())
            }
            ReleasesAction::Show { id } => releases::run_releases_show(&conn, id),
            ReleasesAction::Add {
                fields,
                artists,
                genres,
            } => releases::run_releases_add(&mut conn, &fields, &artists, &genres),
            ReleasesAction::Update { id, fields } => {
                releases::run_releases_update(&conn, id, &fields)
            }
            ReleasesAction::Delete { id, yes } => releases::run_releases_delete(&conn, id, yes),
        },
        Commands::Genres { action } => match action {
            GenresAction::List => lookups::run_genres_list(&conn),
            GenresAction::Add { name } => lookups::run_genres_add(&conn, &name),
        },
        Commands::MediaTypes { action } => match action {
            MediaTypesAction::List => lookups::run_media_types_list(&conn),
            MediaTypesAction::Add { name, description } => {
                lookups::run_media_types_add(&conn, &name, description.as_deref())
            }
        },
        Commands::Stats => stats::run_stats(&conn, &opts),
        Commands::Report {
            kind,
            artist,
            output,
        } => report::run_report(&conn, kind, artist.as_deref(), &output, &opts),
        Commands::Export { path, search } => export::run_export(&conn, path, search.as_deref()),
        // Handled before the database is opened.
        Commands::Config { .. } => Ok(()),
    }
}

/// Info lines are printed bare; warnings and errors carry a colored level prefix.
///
/// `--quiet` limits output to warnings, `--verbose` adds debug traces from the
/// library crates. `RUST_LOG` overrides both.
fn init_logger(quiet: bool, verbose: bool) {
    let level = if quiet {
        LevelFilter::Warn
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| match record.level() {
            log::Level::Info => writeln!(buf, "{}", record.args()),
            log::Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            log::Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            level => writeln!(buf, "[{}] {}", level, record.args()),
        })
        .target(env_logger::Target::Stdout)
        .init();
}

/// Print an empty line through the logger so `--quiet` suppresses it too.
pub(crate) fn log_blank() {
    log::info!("");
}
