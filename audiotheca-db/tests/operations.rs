use audiotheca_catalog::*;
use audiotheca_db::*;
use chrono::NaiveDate;

fn test_artist(name: &str) -> NewArtist {
    NewArtist {
        name: name.to_string(),
        artist_type: Some(ArtistType::Band),
        country: Some("UK".to_string()),
    }
}

fn test_release(title: &str) -> NewRelease {
    NewRelease {
        title: title.to_string(),
        release_year: Some(2020),
        original_year: Some(2019),
        label: Some("Test Records".to_string()),
        country: Some("UK".to_string()),
        catalog_code: Some("TR-001".to_string()),
        total_duration: Some(2400),
        total_tracks: Some(10),
    }
}

fn test_item(catalog_number: &str, release_id: Option<i64>, media_type_id: Option<i64>) -> NewMediaItem {
    NewMediaItem {
        catalog_number: catalog_number.to_string(),
        media_type_id,
        release_id,
        condition: Condition::Good,
        purchase_price: Some(12.5),
        purchase_date: NaiveDate::from_ymd_opt(2020, 5, 1),
        storage_location: Some("Shelf A".to_string()),
        notes: None,
    }
}

fn count(conn: &rusqlite::Connection, table: &str) -> i64 {
    conn.query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| row.get(0))
        .unwrap()
}

#[test]
fn add_and_get_artist() {
    let conn = open_memory().unwrap();
    let id = add_artist(&conn, &test_artist("The Testers")).unwrap();

    let artist = get_artist(&conn, id).unwrap();
    assert_eq!(artist.name, "The Testers");
    assert_eq!(artist.artist_type, Some(ArtistType::Band));
    assert_eq!(artist.country.as_deref(), Some("UK"));
}

#[test]
fn get_missing_artist_is_not_found() {
    let conn = open_memory().unwrap();
    let err = get_artist(&conn, 42).unwrap_err();
    assert!(matches!(err, OperationError::NotFound { .. }));
}

#[test]
fn update_and_delete_artist() {
    let conn = open_memory().unwrap();
    let id = add_artist(&conn, &test_artist("Old Name")).unwrap();

    let mut changed = test_artist("New Name");
    changed.artist_type = Some(ArtistType::Solo);
    assert!(update_artist(&conn, id, &changed).unwrap());
    assert_eq!(get_artist(&conn, id).unwrap().name, "New Name");

    assert!(delete_artist(&conn, id).unwrap());
    assert!(!delete_artist(&conn, id).unwrap());
    assert_eq!(count(&conn, "artists"), 0);
}

#[test]
fn add_release_with_links() {
    let mut conn = open_memory().unwrap();
    let a1 = add_artist(&conn, &test_artist("First")).unwrap();
    let a2 = add_artist(&conn, &test_artist("Second")).unwrap();
    let rock = add_genre(&conn, "Rock").unwrap();

    let release_id =
        add_release_with_artists_and_genres(&mut conn, &test_release("Split LP"), &[a1, a2], &[rock])
            .unwrap();

    assert_eq!(release_artist_ids(&conn, release_id).unwrap(), vec![a1, a2]);
    assert_eq!(release_genre_ids(&conn, release_id).unwrap(), vec![rock]);
    let release = get_release(&conn, release_id).unwrap().unwrap();
    assert_eq!(release.title, "Split LP");
    assert_eq!(release.total_duration, Some(2400));
}

#[test]
fn add_release_rolls_back_on_bad_artist() {
    let mut conn = open_memory().unwrap();
    let artist = add_artist(&conn, &test_artist("Real")).unwrap();
    let before = count(&conn, "releases");

    let result =
        add_release_with_artists_and_genres(&mut conn, &test_release("Ghost"), &[artist, 9999], &[]);
    assert!(result.is_err());

    assert_eq!(count(&conn, "releases"), before);
    assert_eq!(count(&conn, "release_artists"), 0);
}

#[test]
fn add_release_rolls_back_on_bad_genre() {
    let mut conn = open_memory().unwrap();
    let artist = add_artist(&conn, &test_artist("Real")).unwrap();

    let result =
        add_release_with_artists_and_genres(&mut conn, &test_release("Ghost"), &[artist], &[777]);
    assert!(result.is_err());

    assert_eq!(count(&conn, "releases"), 0);
    assert_eq!(count(&conn, "release_artists"), 0);
    assert_eq!(count(&conn, "release_genres"), 0);
}

#[test]
fn release_without_links_or_items_is_valid() {
    let conn = open_memory().unwrap();
    let id = add_release(&conn, &test_release("Wishlist")).unwrap();
    let rows = list_releases(&conn, None).unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, id);
    assert_eq!(rows[0].artist_name, None);
}

#[test]
fn update_release_fields() {
    let conn = open_memory().unwrap();
    let id = add_release(&conn, &test_release("Draft")).unwrap();
    let mut changed = test_release("Final");
    changed.label = None;
    assert!(update_release(&conn, id, &changed).unwrap());

    let release = get_release(&conn, id).unwrap().unwrap();
    assert_eq!(release.title, "Final");
    assert_eq!(release.label, None);
}

#[test]
fn delete_release_cascades_links() {
    let mut conn = open_memory().unwrap();
    let artist = add_artist(&conn, &test_artist("Band")).unwrap();
    let id =
        add_release_with_artists_and_genres(&mut conn, &test_release("Gone"), &[artist], &[]).unwrap();

    assert!(delete_release(&conn, id).unwrap());
    assert_eq!(count(&conn, "release_artists"), 0);
    assert_eq!(count(&conn, "artists"), 1);
}

#[test]
fn delete_release_with_items_fails() {
    let conn = open_memory().unwrap();
    let id = add_release(&conn, &test_release("Owned")).unwrap();
    add_media_item(&conn, &test_item("O-1", Some(id), None)).unwrap();

    assert!(delete_release(&conn, id).is_err());
    assert_eq!(count(&conn, "releases"), 1);
}

#[test]
fn add_media_item_appears_in_listing() {
    let conn = open_memory().unwrap();
    let release = add_release(&conn, &test_release("Listed")).unwrap();
    let cd = add_media_type(&conn, "CD", Some("Compact Disc")).unwrap();
    let item = test_item("L-001", Some(release), Some(cd));

    let id = add_media_item(&conn, &item).unwrap();

    let rows = list_media_items(&conn, None).unwrap();
    assert_eq!(rows.len(), 1);
    let row = &rows[0];
    assert_eq!(row.id, id);
    assert_eq!(row.catalog_number, "L-001");
    assert_eq!(row.release_title.as_deref(), Some("Listed"));
    assert_eq!(row.media_type.as_deref(), Some("CD"));
    assert_eq!(row.condition, Condition::Good);
    assert_eq!(row.purchase_price, Some(12.5));
    assert_eq!(row.purchase_date, NaiveDate::from_ymd_opt(2020, 5, 1));
    assert_eq!(row.storage_location.as_deref(), Some("Shelf A"));

    let stored = get_media_item(&conn, id).unwrap().unwrap();
    assert_eq!(stored.release_id, Some(release));
    assert_eq!(stored.media_type_id, Some(cd));
    assert_eq!(stored.notes, None);
}

#[test]
fn add_media_item_with_unknown_release_fails() {
    let conn = open_memory().unwrap();
    let result = add_media_item(&conn, &test_item("X-1", Some(404), None));
    assert!(matches!(result, Err(OperationError::Sqlite(_))));
    assert_eq!(count(&conn, "media_items"), 0);
}

#[test]
fn update_media_item_overwrites_fields() {
    let conn = open_memory().unwrap();
    let id = add_media_item(&conn, &test_item("U-1", None, None)).unwrap();

    let mut changed = test_item("U-2", None, None);
    changed.condition = Condition::Collectible;
    changed.purchase_price = None;
    changed.purchase_date = None;
    assert!(update_media_item(&conn, id, &changed).unwrap());

    let stored = get_media_item(&conn, id).unwrap().unwrap();
    assert_eq!(stored.catalog_number, "U-2");
    assert_eq!(stored.condition, Condition::Collectible);
    assert_eq!(stored.purchase_price, None);
    assert_eq!(stored.purchase_date, None);
}

#[test]
fn update_missing_media_item_reports_no_change() {
    let conn = open_memory().unwrap();
    assert!(!update_media_item(&conn, 5, &test_item("N-1", None, None)).unwrap());
}

#[test]
fn delete_missing_media_item_is_silent() {
    let conn = open_memory().unwrap();
    add_media_item(&conn, &test_item("K-1", None, None)).unwrap();

    let removed = delete_media_item(&conn, 12345).unwrap();
    assert!(!removed);
    assert_eq!(list_media_items(&conn, None).unwrap().len(), 1);
}

#[test]
fn delete_media_item_removes_row() {
    let conn = open_memory().unwrap();
    let id = add_media_item(&conn, &test_item("D-1", None, None)).unwrap();
    assert!(delete_media_item(&conn, id).unwrap());
    assert!(get_media_item(&conn, id).unwrap().is_none());
}

#[test]
fn find_lookups_by_name() {
    let conn = open_memory().unwrap();
    let cd = add_media_type(&conn, "CD", None).unwrap();
    let release = add_release(&conn, &test_release("Named")).unwrap();

    assert_eq!(find_media_type_by_name(&conn, "CD").unwrap(), Some(cd));
    assert_eq!(find_media_type_by_name(&conn, "8-track").unwrap(), None);
    assert_eq!(find_release_by_title(&conn, "Named").unwrap(), Some(release));
    assert_eq!(find_release_by_title(&conn, "Unnamed").unwrap(), None);
}

#[test]
fn duplicate_genre_rejected() {
    let conn = open_memory().unwrap();
    add_genre(&conn, "Jazz").unwrap();
    assert!(add_genre(&conn, "Jazz").is_err());
}

#[test]
fn seed_defaults_is_idempotent() {
    let mut conn = open_memory().unwrap();
    let first = seed_defaults(&mut conn).unwrap();
    assert_eq!(first.media_types, DEFAULT_MEDIA_TYPES.len());
    assert_eq!(first.genres, DEFAULT_GENRES.len());

    let second = seed_defaults(&mut conn).unwrap();
    assert_eq!(second.media_types, 0);
    assert_eq!(second.genres, 0);
    assert_eq!(list_media_types(&conn).unwrap().len(), DEFAULT_MEDIA_TYPES.len());
}
