//! SQLite schema creation and migration.

use audiotheca_catalog::ArtistType;
use rusqlite::functions::FunctionFlags;
use rusqlite::Connection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Migration error: expected version {expected}, found {found}")]
    VersionMismatch { expected: i32, found: i32 },
}

/// Current schema version. Increment when adding migrations.
pub const CURRENT_VERSION: i32 = 2;

/// Create all tables and indexes if they don't exist.
///
/// Idempotent: safe to call on an existing database.
pub fn create_schema(conn: &Connection) -> Result<(), SchemaError> {
    conn.execute_batch(SCHEMA_SQL)?;
    set_schema_version(conn, CURRENT_VERSION)?;
    Ok(())
}

/// Open or create a collection database at the given path.
pub fn open_database(path: &std::path::Path) -> Result<Connection, SchemaError> {
    let conn = Connection::open(path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    register_functions(&conn)?;

    let version = get_schema_version(&conn)?;
    if version == 0 {
        create_schema(&conn)?;
    } else if version != CURRENT_VERSION {
        migrate(&conn, version)?;
    }

    log::debug!("Opened collection database at {}", path.display());
    Ok(conn)
}

/// Open an in-memory database with the full schema. Useful for testing.
pub fn open_memory() -> Result<Connection, SchemaError> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch("PRAGMA foreign_keys=ON;")?;
    register_functions(&conn)?;
    create_schema(&conn)?;
    Ok(conn)
}

/// Register `casefold(text)`, a Unicode-aware lowercase used by search.
///
/// SQLite's built-in `LIKE` and `lower()` only fold ASCII.
fn register_functions(conn: &Connection) -> Result<(), SchemaError> {
    conn.create_scalar_function(
        "casefold",
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|s| s.to_lowercase()))
        },
    )?;
    Ok(())
}

/// Get the current schema version, or 0 if no schema exists.
fn get_schema_version(conn: &Connection) -> Result<i32, SchemaError> {
    let exists: bool = conn.query_row(
        "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name='schema_version')",
        [],
        |row| row.get(0),
    )?;

    if !exists {
        return Ok(0);
    }

    let version: i32 = conn.query_row(
        "SELECT COALESCE(MAX(version), 0) FROM schema_version",
        [],
        |row| row.get(0),
    )?;
    Ok(version)
}

/// Record a schema version.
fn set_schema_version(conn: &Connection, version: i32) -> Result<(), SchemaError> {
    conn.execute(
        "INSERT INTO schema_version (version) VALUES (?1)",
        [version],
    )?;
    Ok(())
}

/// Run migrations from `from_version` up to `CURRENT_VERSION`.
fn migrate(conn: &Connection, from_version: i32) -> Result<(), SchemaError> {
    if from_version > CURRENT_VERSION {
        return Err(SchemaError::VersionMismatch {
            expected: CURRENT_VERSION,
            found: from_version,
        });
    }

    let mut version = from_version;
    while version < CURRENT_VERSION {
        if version == 1 {
            // v1 stored free-text artist types; normalize to the fixed set.
            let mut stmt = conn.prepare(
                "SELECT artist_id, artist_type FROM artists WHERE artist_type IS NOT NULL",
            )?;
            let rows = stmt
                .query_map([], |row| Ok((row.get::<_, i64>(0)?, row.get::<_, String>(1)?)))?
                .collect::<Result<Vec<_>, _>>()?;
            for (id, raw) in rows {
                let normalized = ArtistType::from_str_loose(&raw);
                conn.execute(
                    "UPDATE artists SET artist_type = ?1 WHERE artist_id = ?2",
                    rusqlite::params![normalized.as_str(), id],
                )?;
            }
            conn.execute_batch(
                "CREATE INDEX IF NOT EXISTS idx_media_items_purchase_date ON media_items(purchase_date);",
            )?;
        }
        version += 1;
        set_schema_version(conn, version)?;
        log::info!("Migrated collection database to schema version {version}");
    }

    Ok(())
}

const SCHEMA_SQL: &str = r#"
-- Schema version tracking
CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL,
    applied_at TEXT NOT NULL DEFAULT (datetime('now'))
);

-- Performers
CREATE TABLE IF NOT EXISTS artists (
    artist_id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    artist_type TEXT,
    country TEXT
);
CREATE INDEX IF NOT EXISTS idx_artists_name ON artists(name);

-- Albums and singles, independent of owned copies
CREATE TABLE IF NOT EXISTS releases (
    release_id INTEGER PRIMARY KEY AUTOINCREMENT,
    title TEXT NOT NULL,
    release_year INTEGER,
    original_year INTEGER,
    label TEXT,
    country TEXT,
    catalog_code TEXT,
    total_duration INTEGER,
    total_tracks INTEGER
);
CREATE INDEX IF NOT EXISTS idx_releases_title ON releases(title);

CREATE TABLE IF NOT EXISTS genres (
    genre_id INTEGER PRIMARY KEY AUTOINCREMENT,
    genre_name TEXT NOT NULL UNIQUE
);

-- Physical formats
CREATE TABLE IF NOT EXISTS media_types (
    media_type_id INTEGER PRIMARY KEY AUTOINCREMENT,
    type_name TEXT NOT NULL UNIQUE,
    description TEXT
);

-- Release <-> artist links
CREATE TABLE IF NOT EXISTS release_artists (
    release_id INTEGER NOT NULL REFERENCES releases(release_id) ON DELETE CASCADE,
    artist_id INTEGER NOT NULL REFERENCES artists(artist_id) ON DELETE CASCADE,
    PRIMARY KEY (release_id, artist_id)
);
CREATE INDEX IF NOT EXISTS idx_release_artists_artist ON release_artists(artist_id);

-- Release <-> genre links
CREATE TABLE IF NOT EXISTS release_genres (
    release_id INTEGER NOT NULL REFERENCES releases(release_id) ON DELETE CASCADE,
    genre_id INTEGER NOT NULL REFERENCES genres(genre_id) ON DELETE CASCADE,
    PRIMARY KEY (release_id, genre_id)
);

-- Owned physical copies
CREATE TABLE IF NOT EXISTS media_items (
    media_item_id INTEGER PRIMARY KEY AUTOINCREMENT,
    catalog_number TEXT NOT NULL,
    media_type_id INTEGER REFERENCES media_types(media_type_id),
    release_id INTEGER REFERENCES releases(release_id),
    condition TEXT NOT NULL
        CHECK (condition IN ('New', 'Good', 'Fair', 'Poor', 'Collectible')),
    purchase_price REAL CHECK (purchase_price IS NULL OR purchase_price >= 0),
    purchase_date TEXT,
    storage_location TEXT,
    notes TEXT
);
CREATE INDEX IF NOT EXISTS idx_media_items_release ON media_items(release_id);
CREATE INDEX IF NOT EXISTS idx_media_items_type ON media_items(media_type_id);
CREATE INDEX IF NOT EXISTS idx_media_items_purchase_date ON media_items(purchase_date);
"#;
