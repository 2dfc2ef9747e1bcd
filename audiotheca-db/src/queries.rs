//! Read queries for the collection database.
//!
//! Provides listings with search, single-entity lookups, and the
//! aggregate queries behind the statistics and reports.

use audiotheca_catalog::*;
use rusqlite::types::{ToSql, Type};
use rusqlite::{params, Connection, OptionalExtension};

use crate::operations::OperationError;

// ── Media Item Listings ─────────────────────────────────────────────────────

/// List media items joined with release title, artist name, and format.
///
/// With a search term, keeps rows whose catalog number, release title,
/// artist name, or format contains the term (case-insensitive). Rows are
/// ordered by release title; an item appears once per linked artist.
pub fn list_media_items(
    conn: &Connection,
    search: Option<&str>,
) -> Result<Vec<MediaItemRow>, OperationError> {
    let mut sql = String::from(
        "SELECT mi.media_item_id, mi.catalog_number, r.title, a.name, mt.type_name,
                mi.condition, mi.purchase_price, mi.purchase_date, mi.storage_location
         FROM media_items mi
         LEFT JOIN releases r ON mi.release_id = r.release_id
         LEFT JOIN media_types mt ON mi.media_type_id = mt.media_type_id
         LEFT JOIN release_artists ra ON r.release_id = ra.release_id
         LEFT JOIN artists a ON ra.artist_id = a.artist_id",
    );
    let pattern = search.map(like_pattern);
    if pattern.is_some() {
        sql.push_str(
            " WHERE casefold(mi.catalog_number) LIKE ?1 ESCAPE '\\'
                 OR casefold(r.title) LIKE ?1 ESCAPE '\\'
                 OR casefold(a.name) LIKE ?1 ESCAPE '\\'
                 OR casefold(mt.type_name) LIKE ?1 ESCAPE '\\'",
        );
    }
    sql.push_str(" ORDER BY r.title IS NULL, r.title, mi.media_item_id, a.name");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(search_params(&pattern).as_slice(), |row| {
        Ok(MediaItemRow {
            id: row.get(0)?,
            catalog_number: row.get(1)?,
            release_title: row.get(2)?,
            artist_name: row.get(3)?,
            media_type: row.get(4)?,
            condition: condition_column(row, 5)?,
            purchase_price: row.get(6)?,
            purchase_date: row.get(7)?,
            storage_location: row.get(8)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Fetch a single media item by id.
pub fn get_media_item(
    conn: &Connection,
    item_id: i64,
) -> Result<Option<MediaItem>, OperationError> {
    conn.query_row(
        "SELECT media_item_id, catalog_number, media_type_id, release_id, condition,
                purchase_price, purchase_date, storage_location, notes
         FROM media_items WHERE media_item_id = ?1",
        [item_id],
        |row| {
            Ok(MediaItem {
                id: row.get(0)?,
                catalog_number: row.get(1)?,
                media_type_id: row.get(2)?,
                release_id: row.get(3)?,
                condition: condition_column(row, 4)?,
                purchase_price: row.get(5)?,
                purchase_date: row.get(6)?,
                storage_location: row.get(7)?,
                notes: row.get(8)?,
            })
        },
    )
    .optional()
    .map_err(Into::into)
}

// ── Artist Queries ──────────────────────────────────────────────────────────

/// List artists ordered by name, optionally filtered by a name substring.
pub fn list_artists(
    conn: &Connection,
    search: Option<&str>,
) -> Result<Vec<Artist>, OperationError> {
    let mut sql = String::from("SELECT artist_id, name, artist_type, country FROM artists");
    let pattern = search.map(like_pattern);
    if pattern.is_some() {
        sql.push_str(" WHERE casefold(name) LIKE ?1 ESCAPE '\\'");
    }
    sql.push_str(" ORDER BY name, artist_id");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(search_params(&pattern).as_slice(), row_to_artist)?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Artist ids and names for pick lists.
pub fn list_artists_for_select(conn: &Connection) -> Result<Vec<NamedId>, OperationError> {
    let mut stmt = conn.prepare("SELECT artist_id, name FROM artists ORDER BY name")?;
    let rows = stmt.query_map([], |row| {
        Ok(NamedId {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Fetch one artist by id.
pub fn get_artist(conn: &Connection, artist_id: i64) -> Result<Artist, OperationError> {
    conn.query_row(
        "SELECT artist_id, name, artist_type, country FROM artists WHERE artist_id = ?1",
        [artist_id],
        row_to_artist,
    )
    .optional()?
    .ok_or_else(|| OperationError::NotFound {
        entity_type: "artist".to_string(),
        id: artist_id.to_string(),
    })
}

// ── Release Queries ─────────────────────────────────────────────────────────

/// List releases joined with artist names, ordered by title.
///
/// With a search term, matches on release title or artist name. A release
/// appears once per linked artist, or once with no artist when unlinked.
pub fn list_releases(
    conn: &Connection,
    search: Option<&str>,
) -> Result<Vec<ReleaseRow>, OperationError> {
    let mut sql = String::from(
        "SELECT r.release_id, r.title, r.release_year, r.label, r.country, a.name
         FROM releases r
         LEFT JOIN release_artists ra ON r.release_id = ra.release_id
         LEFT JOIN artists a ON ra.artist_id = a.artist_id",
    );
    let pattern = search.map(like_pattern);
    if pattern.is_some() {
        sql.push_str(
            " WHERE casefold(r.title) LIKE ?1 ESCAPE '\\'
                 OR casefold(a.name) LIKE ?1 ESCAPE '\\'",
        );
    }
    sql.push_str(" ORDER BY r.title, r.release_id, a.name");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(search_params(&pattern).as_slice(), |row| {
        Ok(ReleaseRow {
            id: row.get(0)?,
            title: row.get(1)?,
            release_year: row.get(2)?,
            label: row.get(3)?,
            country: row.get(4)?,
            artist_name: row.get(5)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Fetch a single release by id.
pub fn get_release(conn: &Connection, release_id: i64) -> Result<Option<Release>, OperationError> {
    conn.query_row(
        "SELECT release_id, title, release_year, original_year, label, country,
                catalog_code, total_duration, total_tracks
         FROM releases WHERE release_id = ?1",
        [release_id],
        |row| {
            Ok(Release {
                id: row.get(0)?,
                title: row.get(1)?,
                release_year: row.get(2)?,
                original_year: row.get(3)?,
                label: row.get(4)?,
                country: row.get(5)?,
                catalog_code: row.get(6)?,
                total_duration: row.get(7)?,
                total_tracks: row.get(8)?,
            })
        },
    )
    .optional()
    .map_err(Into::into)
}

/// Artist ids linked to a release, in id order.
pub fn release_artist_ids(conn: &Connection, release_id: i64) -> Result<Vec<i64>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT artist_id FROM release_artists WHERE release_id = ?1 ORDER BY artist_id",
    )?;
    let rows = stmt.query_map([release_id], |row| row.get(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Genre ids linked to a release, in id order.
pub fn release_genre_ids(conn: &Connection, release_id: i64) -> Result<Vec<i64>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT genre_id FROM release_genres WHERE release_id = ?1 ORDER BY genre_id",
    )?;
    let rows = stmt.query_map([release_id], |row| row.get(0))?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Lookup Queries ──────────────────────────────────────────────────────────

/// List all genres ordered by name.
pub fn list_genres(conn: &Connection) -> Result<Vec<Genre>, OperationError> {
    let mut stmt = conn.prepare("SELECT genre_id, genre_name FROM genres ORDER BY genre_name")?;
    let rows = stmt.query_map([], |row| {
        Ok(Genre {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// List all media types ordered by name.
pub fn list_media_types(conn: &Connection) -> Result<Vec<MediaType>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT media_type_id, type_name, description FROM media_types ORDER BY type_name",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(MediaType {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// Aggregate snapshot of the collection.
pub fn collection_statistics(conn: &Connection) -> Result<CollectionStatistics, OperationError> {
    let by_format = count_rows(
        conn,
        "SELECT mt.type_name, COUNT(*)
         FROM media_items mi
         JOIN media_types mt ON mi.media_type_id = mt.media_type_id
         GROUP BY mt.media_type_id, mt.type_name
         ORDER BY COUNT(*) DESC, mt.type_name",
    )?;

    let by_condition = count_rows(
        conn,
        "SELECT condition, COUNT(*)
         FROM media_items
         GROUP BY condition
         ORDER BY COUNT(*) DESC, condition",
    )?;

    let total_value: f64 = conn.query_row(
        "SELECT COALESCE(SUM(purchase_price), 0.0) FROM media_items",
        [],
        |r| r.get(0),
    )?;

    let releases_count: i64 = conn.query_row(
        "SELECT COUNT(DISTINCT release_id) FROM media_items",
        [],
        |r| r.get(0),
    )?;

    let artists_count: i64 = conn.query_row(
        "SELECT COUNT(DISTINCT a.artist_id)
         FROM artists a
         JOIN release_artists ra ON a.artist_id = ra.artist_id",
        [],
        |r| r.get(0),
    )?;

    let mut stmt = conn.prepare(
        "SELECT CAST(strftime('%Y', purchase_date) AS INTEGER) AS year,
                COUNT(*),
                COALESCE(SUM(purchase_price), 0.0)
         FROM media_items
         WHERE purchase_date IS NOT NULL
         GROUP BY year
         ORDER BY year DESC",
    )?;
    let by_year = stmt
        .query_map([], |row| {
            Ok(YearRow {
                year: row.get(0)?,
                count: row.get(1)?,
                total: row.get(2)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CollectionStatistics {
        by_format,
        by_condition,
        total_value,
        releases_count,
        artists_count,
        by_year,
    })
}

fn count_rows(conn: &Connection, sql: &str) -> Result<Vec<CountRow>, OperationError> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map([], |row| {
        Ok(CountRow {
            label: row.get(0)?,
            count: row.get(1)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Reports ─────────────────────────────────────────────────────────────────

/// Item rows for one artist, or aggregate rows for every artist.
pub fn artist_report(
    conn: &Connection,
    artist_id: Option<i64>,
) -> Result<ArtistReport, OperationError> {
    match artist_id {
        Some(id) => artist_items(conn, id).map(ArtistReport::Items),
        None => artist_summaries(conn).map(ArtistReport::Summary),
    }
}

/// Owned items on releases linked to an artist, ordered by release title.
///
/// Items without a release or media type are not included.
pub fn artist_items(conn: &Connection, artist_id: i64) -> Result<Vec<ArtistItemRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT r.title, mt.type_name, mi.condition, mi.purchase_price, mi.purchase_date
         FROM media_items mi
         JOIN releases r ON mi.release_id = r.release_id
         JOIN media_types mt ON mi.media_type_id = mt.media_type_id
         JOIN release_artists ra ON r.release_id = ra.release_id
         WHERE ra.artist_id = ?1
         ORDER BY r.title, mi.media_item_id",
    )?;
    let rows = stmt.query_map(params![artist_id], |row| {
        Ok(ArtistItemRow {
            release_title: row.get(0)?,
            media_type: row.get(1)?,
            condition: condition_column(row, 2)?,
            purchase_price: row.get(3)?,
            purchase_date: row.get(4)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Release count, item count and total value for every artist, by name.
pub fn artist_summaries(conn: &Connection) -> Result<Vec<ArtistSummaryRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT a.artist_id,
                a.name,
                COUNT(DISTINCT r.release_id),
                COUNT(mi.media_item_id),
                SUM(mi.purchase_price)
         FROM artists a
         LEFT JOIN release_artists ra ON a.artist_id = ra.artist_id
         LEFT JOIN releases r ON ra.release_id = r.release_id
         LEFT JOIN media_items mi ON r.release_id = mi.release_id
         GROUP BY a.artist_id, a.name
         ORDER BY a.name, a.artist_id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(ArtistSummaryRow {
            artist_id: row.get(0)?,
            name: row.get(1)?,
            releases_count: row.get(2)?,
            items_count: row.get(3)?,
            total_value: row.get(4)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Per media type count, average and total price, first and last purchase.
pub fn format_report(conn: &Connection) -> Result<Vec<FormatReportRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT mt.type_name,
                COUNT(mi.media_item_id),
                AVG(mi.purchase_price),
                SUM(mi.purchase_price),
                MIN(mi.purchase_date),
                MAX(mi.purchase_date)
         FROM media_types mt
         LEFT JOIN media_items mi ON mt.media_type_id = mi.media_type_id
         GROUP BY mt.media_type_id, mt.type_name
         ORDER BY COUNT(mi.media_item_id) DESC, mt.type_name",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(FormatReportRow {
            media_type: row.get(0)?,
            count: row.get(1)?,
            avg_price: row.get(2)?,
            total_value: row.get(3)?,
            first_purchase: row.get(4)?,
            last_purchase: row.get(5)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

/// Per media type item count and summed price, most valuable first.
pub fn format_values(conn: &Connection) -> Result<Vec<FormatValueRow>, OperationError> {
    let mut stmt = conn.prepare(
        "SELECT mt.type_name, COUNT(mi.media_item_id), SUM(mi.purchase_price)
         FROM media_types mt
         LEFT JOIN media_items mi ON mt.media_type_id = mi.media_type_id
         GROUP BY mt.media_type_id, mt.type_name
         ORDER BY SUM(mi.purchase_price) DESC, mt.type_name",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(FormatValueRow {
            media_type: row.get(0)?,
            count: row.get(1)?,
            total_value: row.get(2)?,
        })
    })?;
    rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
}

// ── Row Mapping Helpers ─────────────────────────────────────────────────────

fn row_to_artist(row: &rusqlite::Row<'_>) -> rusqlite::Result<Artist> {
    let artist_type: Option<String> = row.get(2)?;
    Ok(Artist {
        id: row.get(0)?,
        name: row.get(1)?,
        artist_type: artist_type.as_deref().map(ArtistType::from_str_loose),
        country: row.get(3)?,
    })
}

fn condition_column(row: &rusqlite::Row<'_>, idx: usize) -> rusqlite::Result<Condition> {
    let raw: String = row.get(idx)?;
    raw.parse()
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

/// Build a `LIKE` pattern matching `term` anywhere, with wildcards escaped.
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.to_lowercase().chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

fn search_params(pattern: &Option<String>) -> Vec<&dyn ToSql> {
    match pattern {
        Some(p) => vec![p as &dyn ToSql],
        None => vec![],
    }
}
