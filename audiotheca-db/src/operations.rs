//! Insert, update, and delete operations for all collection entity types.
//!
//! Every write is a single statement (and therefore atomic on its own)
//! except [`add_release_with_artists_and_genres`], which wraps its inserts in
//! one transaction. The store performs no domain validation beyond what the
//! schema enforces.

use audiotheca_catalog::types::*;
use rusqlite::{params, Connection, OptionalExtension};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum OperationError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Entity not found: {entity_type} with id '{id}'")]
    NotFound { entity_type: String, id: String },
}

// ── Artist Operations ───────────────────────────────────────────────────────

/// Insert an artist and return its generated id.
pub fn add_artist(conn: &Connection, artist: &NewArtist) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO artists (name, artist_type, country) VALUES (?1, ?2, ?3)",
        params![
            artist.name,
            artist.artist_type.map(|t| t.as_str()),
            artist.country,
        ],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("Inserted artist {id} '{}'", artist.name);
    Ok(id)
}

/// Overwrite an artist's fields. Returns whether a row was changed.
pub fn update_artist(
    conn: &Connection,
    artist_id: i64,
    artist: &NewArtist,
) -> Result<bool, OperationError> {
    let changed = conn.execute(
        "UPDATE artists SET name = ?1, artist_type = ?2, country = ?3 WHERE artist_id = ?4",
        params![
            artist.name,
            artist.artist_type.map(|t| t.as_str()),
            artist.country,
            artist_id,
        ],
    )?;
    Ok(changed > 0)
}

/// Delete an artist and its release links. Returns whether a row was removed.
pub fn delete_artist(conn: &Connection, artist_id: i64) -> Result<bool, OperationError> {
    let changed = conn.execute("DELETE FROM artists WHERE artist_id = ?1", [artist_id])?;
    Ok(changed > 0)
}

// ── Release Operations ──────────────────────────────────────────────────────

/// Insert a release without any artist or genre links.
pub fn add_release(conn: &Connection, release: &NewRelease) -> Result<i64, OperationError> {
    insert_release_row(conn, release)
}

/// Insert a release and link it to artists and genres, all or nothing.
///
/// If any link insert fails (e.g. an unknown artist id), the whole
/// transaction rolls back and no release row remains.
pub fn add_release_with_artists_and_genres(
    conn: &mut Connection,
    release: &NewRelease,
    artist_ids: &[i64],
    genre_ids: &[i64],
) -> Result<i64, OperationError> {
    let tx = conn.transaction()?;

    let release_id = insert_release_row(&tx, release)?;

    for artist_id in artist_ids {
        tx.execute(
            "INSERT INTO release_artists (release_id, artist_id) VALUES (?1, ?2)",
            params![release_id, artist_id],
        )?;
    }

    for genre_id in genre_ids {
        tx.execute(
            "INSERT INTO release_genres (release_id, genre_id) VALUES (?1, ?2)",
            params![release_id, genre_id],
        )?;
    }

    tx.commit()?;
    log::debug!(
        "Inserted release {release_id} '{}' with {} artist(s), {} genre(s)",
        release.title,
        artist_ids.len(),
        genre_ids.len(),
    );
    Ok(release_id)
}

/// Overwrite a release's own fields (links are left untouched).
pub fn update_release(
    conn: &Connection,
    release_id: i64,
    release: &NewRelease,
) -> Result<bool, OperationError> {
    let changed = conn.execute(
        "UPDATE releases SET
             title = ?1, release_year = ?2, original_year = ?3, label = ?4,
             country = ?5, catalog_code = ?6, total_duration = ?7, total_tracks = ?8
         WHERE release_id = ?9",
        params![
            release.title,
            release.release_year,
            release.original_year,
            release.label,
            release.country,
            release.catalog_code,
            release.total_duration,
            release.total_tracks,
            release_id,
        ],
    )?;
    Ok(changed > 0)
}

/// Delete a release and its links.
///
/// Fails with a constraint error while media items still reference it.
pub fn delete_release(conn: &Connection, release_id: i64) -> Result<bool, OperationError> {
    let changed = conn.execute("DELETE FROM releases WHERE release_id = ?1", [release_id])?;
    Ok(changed > 0)
}

fn insert_release_row(conn: &Connection, release: &NewRelease) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO releases (
             title, release_year, original_year, label,
             country, catalog_code, total_duration, total_tracks
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            release.title,
            release.release_year,
            release.original_year,
            release.label,
            release.country,
            release.catalog_code,
            release.total_duration,
            release.total_tracks,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

// ── Lookup Operations ───────────────────────────────────────────────────────

/// Insert a genre and return its generated id.
pub fn add_genre(conn: &Connection, name: &str) -> Result<i64, OperationError> {
    conn.execute("INSERT INTO genres (genre_name) VALUES (?1)", [name])?;
    Ok(conn.last_insert_rowid())
}

/// Insert a media type and return its generated id.
pub fn add_media_type(
    conn: &Connection,
    name: &str,
    description: Option<&str>,
) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO media_types (type_name, description) VALUES (?1, ?2)",
        params![name, description],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Find a media type id by exact name.
pub fn find_media_type_by_name(
    conn: &Connection,
    name: &str,
) -> Result<Option<i64>, OperationError> {
    conn.query_row(
        "SELECT media_type_id FROM media_types WHERE type_name = ?1",
        [name],
        |row| row.get(0),
    )
    .optional()
    .map_err(Into::into)
}

/// Find a release id by exact title. The first match by id wins.
pub fn find_release_by_title(
    conn: &Connection,
    title: &str,
) -> Result<Option<i64>, OperationError> {
    conn.query_row(
        "SELECT release_id FROM releases WHERE title = ?1 ORDER BY release_id LIMIT 1",
        [title],
        |row| row.get(0),
    )
    .optional()
    .map_err(Into::into)
}

// ── Media Item Operations ───────────────────────────────────────────────────

/// Insert a media item and return its generated id.
pub fn add_media_item(conn: &Connection, item: &NewMediaItem) -> Result<i64, OperationError> {
    conn.execute(
        "INSERT INTO media_items (
             catalog_number, media_type_id, release_id,
             condition, purchase_price, purchase_date,
             storage_location, notes
         ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            item.catalog_number,
            item.media_type_id,
            item.release_id,
            item.condition.as_str(),
            item.purchase_price,
            item.purchase_date,
            item.storage_location,
            item.notes,
        ],
    )?;
    let id = conn.last_insert_rowid();
    log::debug!("Inserted media item {id} '{}'", item.catalog_number);
    Ok(id)
}

/// Overwrite a media item's fields. Returns whether a row was changed.
pub fn update_media_item(
    conn: &Connection,
    item_id: i64,
    item: &NewMediaItem,
) -> Result<bool, OperationError> {
    let changed = conn.execute(
        "UPDATE media_items SET
             catalog_number = ?1,
             media_type_id = ?2,
             release_id = ?3,
             condition = ?4,
             purchase_price = ?5,
             purchase_date = ?6,
             storage_location = ?7,
             notes = ?8
         WHERE media_item_id = ?9",
        params![
            item.catalog_number,
            item.media_type_id,
            item.release_id,
            item.condition.as_str(),
            item.purchase_price,
            item.purchase_date,
            item.storage_location,
            item.notes,
            item_id,
        ],
    )?;
    Ok(changed > 0)
}

/// Delete a media item. Deleting an unknown id is a no-op returning `false`.
pub fn delete_media_item(conn: &Connection, item_id: i64) -> Result<bool, OperationError> {
    let changed = conn.execute("DELETE FROM media_items WHERE media_item_id = ?1", [item_id])?;
    Ok(changed > 0)
}

// ── Seed Loading ────────────────────────────────────────────────────────────

/// Standard physical formats inserted by [`seed_defaults`].
pub const DEFAULT_MEDIA_TYPES: &[(&str, &str)] = &[
    ("Vinyl LP", "12\" long-playing record, 33⅓ rpm"),
    ("Vinyl EP", "7\" or 12\" extended play record"),
    ("Vinyl Single", "7\" single, 45 rpm"),
    ("CD", "Compact Disc"),
    ("SACD", "Super Audio CD"),
    ("Cassette", "Compact cassette tape"),
    ("Reel-to-Reel", "Open-reel magnetic tape"),
    ("MiniDisc", "Magneto-optical disc"),
];

/// Starter genre list inserted by [`seed_defaults`].
pub const DEFAULT_GENRES: &[&str] = &[
    "Blues", "Classical", "Electronic", "Folk", "Hip-Hop", "Jazz", "Metal", "Pop", "Punk",
    "Reggae", "Rock", "Soul",
];

/// Populate empty lookup tables with standard media types and genres.
///
/// Safe to call repeatedly: a table that already has rows is left alone.
pub fn seed_defaults(conn: &mut Connection) -> Result<SeedStats, OperationError> {
    let tx = conn.transaction()?;
    let mut stats = SeedStats::default();

    let media_types: i64 = tx.query_row("SELECT COUNT(*) FROM media_types", [], |r| r.get(0))?;
    if media_types == 0 {
        for (name, description) in DEFAULT_MEDIA_TYPES {
            add_media_type(&tx, name, Some(*description))?;
            stats.media_types += 1;
        }
    }

    let genres: i64 = tx.query_row("SELECT COUNT(*) FROM genres", [], |r| r.get(0))?;
    if genres == 0 {
        for name in DEFAULT_GENRES {
            add_genre(&tx, name)?;
            stats.genres += 1;
        }
    }

    tx.commit()?;
    Ok(stats)
}

/// Statistics from seeding the database.
#[derive(Debug, Default)]
pub struct SeedStats {
    pub media_types: usize,
    pub genres: usize,
}
