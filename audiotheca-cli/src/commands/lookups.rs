//! Genres and media types: listing, adding, and name-or-id resolution.

use audiotheca_catalog::{required_text, NamedId};
use audiotheca_report::format::optional_text;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::error::failed;
use crate::CliError;

use super::pick_by_name_or_id;

pub(crate) fn run_genres_list(conn: &Connection) -> Result<(), CliError> {
    let genres = audiotheca_db::list_genres(conn).map_err(failed("load genres"))?;
    if genres.is_empty() {
        log::info!("No genres yet. Run 'audiotheca init' to add the default list.");
        return Ok(());
    }
    log::info!("{}", format!("{:>5}  {}", "ID", "Genre").if_supports_color(Stdout, |t| t.bold()));
    for genre in genres {
        log::info!("{:>5}  {}", genre.id, genre.name);
    }
    Ok(())
}

pub(crate) fn run_genres_add(conn: &Connection, name: &str) -> Result<(), CliError> {
    let name = required_text(name, "Genre name")?;
    let id = audiotheca_db::add_genre(conn, &name).map_err(failed("add genre"))?;
    log::info!("Added genre {id} ({name})");
    Ok(())
}

pub(crate) fn run_media_types_list(conn: &Connection) -> Result<(), CliError> {
    let types = audiotheca_db::list_media_types(conn).map_err(failed("load media types"))?;
    if types.is_empty() {
        log::info!("No media types yet. Run 'audiotheca init' to add the standard formats.");
        return Ok(());
    }
    log::info!(
        "{}",
        format!("{:>5}  {:16}  {}", "ID", "Format", "Description").if_supports_color(Stdout, |t| t.bold()),
    );
    for media_type in types {
        log::info!(
            "{:>5}  {:16}  {}",
            media_type.id,
            media_type.name,
            optional_text(media_type.description.as_deref())
        );
    }
    Ok(())
}

pub(crate) fn run_media_types_add(
    conn: &Connection,
    name: &str,
    description: Option<&str>,
) -> Result<(), CliError> {
    let name = required_text(name, "Media type name")?;
    let description = description.and_then(audiotheca_catalog::optional_text);
    let id = audiotheca_db::add_media_type(conn, &name, description.as_deref())
        .map_err(failed("add media type"))?;
    log::info!("Added media type {id} ({name})");
    Ok(())
}

/// Media type id for an exact name or an existing id.
pub(crate) fn resolve_media_type(conn: &Connection, value: &str) -> Result<i64, CliError> {
    let rows: Vec<NamedId> = audiotheca_db::list_media_types(conn)
        .map_err(failed("load media types"))?
        .into_iter()
        .map(|m| NamedId { id: m.id, name: m.name })
        .collect();
    pick_by_name_or_id(value, &rows)
        .ok_or_else(|| CliError::input(format!("Unknown media type '{value}'")))
}

/// Genre id for an exact name or an existing id.
pub(crate) fn resolve_genre(conn: &Connection, value: &str) -> Result<i64, CliError> {
    let rows: Vec<NamedId> = audiotheca_db::list_genres(conn)
        .map_err(failed("load genres"))?
        .into_iter()
        .map(|g| NamedId { id: g.id, name: g.name })
        .collect();
    pick_by_name_or_id(value, &rows)
        .ok_or_else(|| CliError::input(format!("Unknown genre '{value}'")))
}
