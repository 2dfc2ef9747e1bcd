use audiotheca_catalog::{parse_optional_int, required_text, NewRelease, Release};
use audiotheca_report::format::{optional_text, MISSING};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::cli_types::ReleaseFields;
use crate::error::failed;
use crate::CliError;

use super::artists::resolve_artist;
use super::lookups::resolve_genre;
use super::{confirmed, merge_parsed, merge_text, truncate_str, unique_ids};

pub(crate) fn run_releases_list(conn: &Connection, search: Option<&str>) -> Result<(), CliError> {
    let rows = audiotheca_db::list_releases(conn, search).map_err(failed("load releases"))?;
    if rows.is_empty() {
        match search {
            Some(s) => log::info!("No releases match '{s}'."),
            None => log::info!("No releases yet. Add one with 'audiotheca releases add'."),
        }
        return Ok(());
    }

    log::info!(
        "{}",
        format!(
            "{:>5}  {:30}  {:24}  {:>4}  {:20}  {}",
            "ID", "Title", "Artist", "Year", "Label", "Country"
        )
        .if_supports_color(Stdout, |t| t.bold()),
    );
    for row in rows {
        log::info!(
            "{:>5}  {:30}  {:24}  {:>4}  {:20}  {}",
            row.id,
            truncate_str(&row.title, 30),
            truncate_str(optional_text(row.artist_name.as_deref()), 24),
            row.release_year.map_or_else(|| MISSING.to_string(), |y| y.to_string()),
            truncate_str(optional_text(row.label.as_deref()), 20),
            optional_text(row.country.as_deref()),
        );
    }
    Ok(())
}

pub(crate) fn run_releases_show(conn: &Connection, id: i64) -> Result<(), CliError> {
    let Some(release) = audiotheca_db::get_release(conn, id).map_err(failed("load release"))? else {
        log::warn!("No release with id {id}");
        return Ok(());
    };

    let artist_ids = audiotheca_db::release_artist_ids(conn, id).map_err(failed("load release"))?;
    let artists: Vec<String> = audiotheca_db::list_artists_for_select(conn)
        .map_err(failed("load artists"))?
        .into_iter()
        .filter(|a| artist_ids.contains(&a.id))
        .map(|a| a.name)
        .collect();
    let genre_ids = audiotheca_db::release_genre_ids(conn, id).map_err(failed("load release"))?;
    let genres: Vec<String> = audiotheca_db::list_genres(conn)
        .map_err(failed("load genres"))?
        .into_iter()
        .filter(|g| genre_ids.contains(&g.id))
        .map(|g| g.name)
        .collect();

    let number = |n: Option<i64>| n.map_or_else(|| MISSING.to_string(), |n| n.to_string());
    let joined = |names: &[String]| {
        if names.is_empty() {
            MISSING.to_string()
        } else {
            names.join(", ")
        }
    };

    log::info!(
        "{}",
        format!("Release {} ({})", release.id, release.title).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Artists:       {}", joined(&artists));
    log::info!("  Genres:        {}", joined(&genres));
    log::info!("  Year:          {}", number(release.release_year.map(i64::from)));
    log::info!("  Original year: {}", number(release.original_year.map(i64::from)));
    log::info!("  Label:         {}", optional_text(release.label.as_deref()));
    log::info!("  Country:       {}", optional_text(release.country.as_deref()));
    log::info!("  Catalog code:  {}", optional_text(release.catalog_code.as_deref()));
    log::info!("  Duration:      {}", release.total_duration.map_or_else(|| MISSING.to_string(), format_duration));
    log::info!("  Tracks:        {}", number(release.total_tracks.map(i64::from)));
    Ok(())
}

pub(crate) fn run_releases_add(
    conn: &mut Connection,
    fields: &ReleaseFields,
    artists: &[String],
    genres: &[String],
) -> Result<(), CliError> {
    let release = new_release(fields)?;
    if artists.is_empty() {
        return Err(CliError::input("At least one artist is required"));
    }
    // The same artist may be named twice (e.g. by name and by id).
    let artist_ids = unique_ids(
        artists
            .iter()
            .map(|a| resolve_artist(conn, a))
            .collect::<Result<Vec<_>, _>>()?,
    );
    let genre_ids = unique_ids(
        genres
            .iter()
            .map(|g| resolve_genre(conn, g))
            .collect::<Result<Vec<_>, _>>()?,
    );

    let id = audiotheca_db::add_release_with_artists_and_genres(conn, &release, &artist_ids, &genre_ids)
        .map_err(failed("add release"))?;
    log::info!("Added release {} ({})", id, release.title);
    Ok(())
}

pub(crate) fn run_releases_update(
    conn: &Connection,
    id: i64,
    fields: &ReleaseFields,
) -> Result<(), CliError> {
    let Some(current) = audiotheca_db::get_release(conn, id).map_err(failed("load release"))? else {
        log::warn!("No release with id {id}");
        return Ok(());
    };
    let release = merged_release(current, fields)?;
    if audiotheca_db::update_release(conn, id, &release).map_err(failed("update release"))? {
        log::info!("Updated release {id}");
    } else {
        log::warn!("Release {id} was not changed");
    }
    Ok(())
}

pub(crate) fn run_releases_delete(conn: &Connection, id: i64, yes: bool) -> Result<(), CliError> {
    if !confirmed(yes, &format!("release {id}"), &format!("releases delete {id}")) {
        return Ok(());
    }
    if audiotheca_db::delete_release(conn, id).map_err(failed("delete release"))? {
        log::info!("Deleted release {id}");
    } else {
        log::warn!("No release with id {id}");
    }
    Ok(())
}

/// Release id for an exact title or an existing id.
pub(crate) fn resolve_release(conn: &Connection, value: &str) -> Result<i64, CliError> {
    let value = value.trim();
    if let Some(id) = audiotheca_db::find_release_by_title(conn, value).map_err(failed("find release"))? {
        return Ok(id);
    }
    if let Ok(id) = value.parse::<i64>() {
        if audiotheca_db::get_release(conn, id).map_err(failed("find release"))?.is_some() {
            return Ok(id);
        }
    }
    Err(CliError::input(format!("Unknown release '{value}'")))
}

fn new_release(fields: &ReleaseFields) -> Result<NewRelease, CliError> {
    let text = |v: &Option<String>| v.as_deref().and_then(audiotheca_catalog::optional_text);
    let number = |v: &Option<String>| v.as_deref().unwrap_or_default().to_string();

    Ok(NewRelease {
        title: required_text(fields.title.as_deref().unwrap_or_default(), "Release title")?,
        release_year: parse_optional_int(&number(&fields.year))?,
        original_year: parse_optional_int(&number(&fields.original_year))?,
        label: text(&fields.label),
        country: text(&fields.country),
        catalog_code: text(&fields.catalog_code),
        total_duration: parse_optional_int(&number(&fields.duration))?,
        total_tracks: parse_optional_int(&number(&fields.tracks))?,
    })
}

fn merged_release(current: Release, fields: &ReleaseFields) -> Result<NewRelease, CliError> {
    Ok(NewRelease {
        title: match fields.title.as_deref() {
            Some(s) => required_text(s, "Release title")?,
            None => current.title,
        },
        release_year: merge_parsed(current.release_year, fields.year.as_deref(), parse_optional_int)?,
        original_year: merge_parsed(
            current.original_year,
            fields.original_year.as_deref(),
            parse_optional_int,
        )?,
        label: merge_text(current.label, fields.label.as_deref()),
        country: merge_text(current.country, fields.country.as_deref()),
        catalog_code: merge_text(current.catalog_code, fields.catalog_code.as_deref()),
        total_duration: merge_parsed(
            current.total_duration,
            fields.duration.as_deref(),
            parse_optional_int,
        )?,
        total_tracks: merge_parsed(current.total_tracks, fields.tracks.as_deref(), parse_optional_int)?,
    })
}

/// `h:mm:ss` or `m:ss`.
fn format_duration(seconds: i64) -> String {
    let (h, m, s) = (seconds / 3600, seconds % 3600 / 60, seconds % 60);
    if h > 0 {
        format!("{h}:{m:02}:{s:02}")
    } else {
        format!("{m}:{s:02}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with_artist() -> (Connection, i64) {
        let conn = audiotheca_db::open_memory().unwrap();
        let id = audiotheca_db::add_artist(
            &conn,
            &audiotheca_catalog::NewArtist {
                name: "Kino".to_string(),
                artist_type: None,
                country: None,
            },
        )
        .unwrap();
        (conn, id)
    }

    #[test]
    fn add_release_with_same_artist_twice() {
        let (mut conn, artist_id) = store_with_artist();
        audiotheca_db::add_genre(&conn, "Rock").unwrap();
        let fields = ReleaseFields {
            title: Some("Gruppa krovi".to_string()),
            ..Default::default()
        };
        let artists = ["Kino".to_string(), artist_id.to_string()];
        let genres = ["Rock".to_string(), "Rock".to_string()];

        run_releases_add(&mut conn, &fields, &artists, &genres).unwrap();

        let rows = audiotheca_db::list_releases(&conn, None).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(audiotheca_db::release_artist_ids(&conn, rows[0].id).unwrap(), vec![artist_id]);
        assert_eq!(audiotheca_db::release_genre_ids(&conn, rows[0].id).unwrap().len(), 1);
    }

    #[test]
    fn duration_formats() {
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(2520), "42:00");
        assert_eq!(format_duration(3723), "1:02:03");
    }

    #[test]
    fn new_release_requires_title() {
        let fields = ReleaseFields {
            year: Some("1977".to_string()),
            ..Default::default()
        };
        assert!(matches!(new_release(&fields), Err(CliError::Input(_))));
    }

    #[test]
    fn new_release_parses_numbers() {
        let fields = ReleaseFields {
            title: Some(" Rumours ".to_string()),
            year: Some("1977".to_string()),
            tracks: Some("11".to_string()),
            label: Some("".to_string()),
            ..Default::default()
        };
        let release = new_release(&fields).unwrap();
        assert_eq!(release.title, "Rumours");
        assert_eq!(release.release_year, Some(1977));
        assert_eq!(release.total_tracks, Some(11));
        assert_eq!(release.label, None);
    }

    #[test]
    fn merged_release_keeps_unset_fields() {
        let current = Release {
            id: 1,
            title: "Rumours".to_string(),
            release_year: Some(1977),
            original_year: None,
            label: Some("Warner".to_string()),
            country: Some("US".to_string()),
            catalog_code: None,
            total_duration: Some(2400),
            total_tracks: Some(11),
        };
        let fields = ReleaseFields {
            year: Some("2004".to_string()),
            original_year: Some("1977".to_string()),
            country: Some("".to_string()),
            ..Default::default()
        };
        let release = merged_release(current, &fields).unwrap();
        assert_eq!(release.title, "Rumours");
        assert_eq!(release.release_year, Some(2004));
        assert_eq!(release.original_year, Some(1977));
        assert_eq!(release.label.as_deref(), Some("Warner"));
        assert_eq!(release.country, None);
        assert_eq!(release.total_duration, Some(2400));
    }
}
