use audiotheca_db::schema::{create_schema, CURRENT_VERSION};
use audiotheca_db::{open_database, open_memory, SchemaError};
use tempfile::TempDir;

#[test]
fn create_schema_in_memory() {
    let conn = open_memory().unwrap();
    let version: i32 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn schema_is_idempotent() {
    let conn = open_memory().unwrap();
    // Creating again should not error
    create_schema(&conn).unwrap();
}

#[test]
fn foreign_keys_enabled() {
    let conn = open_memory().unwrap();
    let fk: i32 = conn
        .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
        .unwrap();
    assert_eq!(fk, 1);
}

#[test]
fn all_tables_exist() {
    let conn = open_memory().unwrap();
    let tables = [
        "schema_version",
        "artists",
        "releases",
        "genres",
        "media_types",
        "media_items",
        "release_artists",
        "release_genres",
    ];
    for table in tables {
        let exists: bool = conn
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM sqlite_master WHERE type='table' AND name=?1)",
                [table],
                |row| row.get(0),
            )
            .unwrap();
        assert!(exists, "table '{}' should exist", table);
    }
}

#[test]
fn casefold_handles_non_ascii() {
    let conn = open_memory().unwrap();
    let folded: String = conn
        .query_row("SELECT casefold('КИНО Ärzte')", [], |row| row.get(0))
        .unwrap();
    assert_eq!(folded, "кино ärzte");
}

#[test]
fn condition_check_constraint() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO media_items (catalog_number, condition) VALUES ('X-1', 'Mint')",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn negative_price_rejected() {
    let conn = open_memory().unwrap();
    let result = conn.execute(
        "INSERT INTO media_items (catalog_number, condition, purchase_price) VALUES ('X-1', 'Good', -1.0)",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn reopen_file_database() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("collection.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute("INSERT INTO genres (genre_name) VALUES ('Jazz')", [])
            .unwrap();
    }
    let conn = open_database(&path).unwrap();
    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM genres", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn migrate_v1_normalizes_artist_types() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("collection.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute_batch(
            "DELETE FROM schema_version;
             INSERT INTO schema_version (version) VALUES (1);
             INSERT INTO artists (name, artist_type) VALUES ('Kraftwerk', 'group');",
        )
        .unwrap();
    }
    let conn = open_database(&path).unwrap();
    let artist_type: String = conn
        .query_row("SELECT artist_type FROM artists", [], |row| row.get(0))
        .unwrap();
    assert_eq!(artist_type, "Band");
    let version: i32 = conn
        .query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, CURRENT_VERSION);
}

#[test]
fn newer_schema_is_rejected() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("collection.db");
    {
        let conn = open_database(&path).unwrap();
        conn.execute("INSERT INTO schema_version (version) VALUES (99)", [])
            .unwrap();
    }
    match open_database(&path) {
        Err(SchemaError::VersionMismatch { expected, found }) => {
            assert_eq!(expected, CURRENT_VERSION);
            assert_eq!(found, 99);
        }
        other => panic!("expected version mismatch, got {:?}", other.map(|_| ())),
    }
}
