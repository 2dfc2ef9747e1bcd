use audiotheca_catalog::{required_text, ArtistType, InputError, NewArtist};
use audiotheca_report::format::{optional_text, MISSING};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::cli_types::ArtistFields;
use crate::error::failed;
use crate::CliError;

use super::{confirmed, merge_parsed, merge_text, pick_by_name_or_id, truncate_str};

pub(crate) fn run_artists_list(conn: &Connection, search: Option<&str>) -> Result<(), CliError> {
    let artists = audiotheca_db::list_artists(conn, search).map_err(failed("load artists"))?;
    if artists.is_empty() {
        match search {
            Some(s) => log::info!("No artists match '{s}'."),
            None => log::info!("No artists yet. Add one with 'audiotheca artists add --name ...'."),
        }
        return Ok(());
    }

    log::info!(
        "{}",
        format!("{:>5}  {:30}  {:10}  {}", "ID", "Name", "Type", "Country")
            .if_supports_color(Stdout, |t| t.bold()),
    );
    for artist in artists {
        log::info!(
            "{:>5}  {:30}  {:10}  {}",
            artist.id,
            truncate_str(&artist.name, 30),
            artist.artist_type.map_or(MISSING, |t| t.as_str()),
            optional_text(artist.country.as_deref()),
        );
    }
    Ok(())
}

pub(crate) fn run_artists_add(conn: &Connection, fields: &ArtistFields) -> Result<(), CliError> {
    let artist = NewArtist {
        name: required_text(fields.name.as_deref().unwrap_or_default(), "Artist name")?,
        artist_type: parse_artist_type(fields.artist_type.as_deref().unwrap_or_default())?,
        country: fields.country.as_deref().and_then(audiotheca_catalog::optional_text),
    };
    let id = audiotheca_db::add_artist(conn, &artist).map_err(failed("add artist"))?;
    log::info!("Added artist {} ({})", id, artist.name);
    Ok(())
}

pub(crate) fn run_artists_update(
    conn: &Connection,
    id: i64,
    fields: &ArtistFields,
) -> Result<(), CliError> {
    let current = match audiotheca_db::get_artist(conn, id) {
        Ok(artist) => artist,
        Err(audiotheca_db::OperationError::NotFound { .. }) => {
            log::warn!("No artist with id {id}");
            return Ok(());
        }
        Err(e) => return Err(failed("load artist")(e)),
    };

    let artist = NewArtist {
        name: match fields.name.as_deref() {
            Some(s) => required_text(s, "Artist name")?,
            None => current.name,
        },
        artist_type: merge_parsed(
            current.artist_type,
            fields.artist_type.as_deref(),
            parse_artist_type,
        )?,
        country: merge_text(current.country, fields.country.as_deref()),
    };
    if audiotheca_db::update_artist(conn, id, &artist).map_err(failed("update artist"))? {
        log::info!("Updated artist {id}");
    } else {
        log::warn!("Artist {id} was not changed");
    }
    Ok(())
}

pub(crate) fn run_artists_delete(conn: &Connection, id: i64, yes: bool) -> Result<(), CliError> {
    if !confirmed(yes, &format!("artist {id}"), &format!("artists delete {id}")) {
        return Ok(());
    }
    if audiotheca_db::delete_artist(conn, id).map_err(failed("delete artist"))? {
        log::info!("Deleted artist {id}");
    } else {
        log::warn!("No artist with id {id}");
    }
    Ok(())
}

/// Artist id for an exact name or an existing id.
pub(crate) fn resolve_artist(conn: &Connection, value: &str) -> Result<i64, CliError> {
    let rows = audiotheca_db::list_artists_for_select(conn).map_err(failed("load artists"))?;
    pick_by_name_or_id(value, &rows)
        .ok_or_else(|| CliError::input(format!("Unknown artist '{value}'")))
}

fn parse_artist_type(s: &str) -> Result<Option<ArtistType>, InputError> {
    let s = s.trim();
    if s.is_empty() {
        Ok(None)
    } else {
        s.parse().map(Some)
    }
}
