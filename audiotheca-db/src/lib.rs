//! SQLite persistence layer for the music collection.
//!
//! Provides schema creation, CRUD operations, and report queries backed by
//! SQLite (via rusqlite with bundled feature). Every function takes the
//! connection explicitly; callers own its lifetime.

pub mod operations;
pub mod queries;
pub mod schema;

pub use operations::{
    add_artist, add_genre, add_media_item, add_media_type, add_release,
    add_release_with_artists_and_genres, delete_artist, delete_media_item, delete_release,
    find_media_type_by_name, find_release_by_title, seed_defaults, update_artist,
    update_media_item, update_release, OperationError, SeedStats, DEFAULT_GENRES,
    DEFAULT_MEDIA_TYPES,
};
pub use queries::{
    artist_items, artist_report, artist_summaries, collection_statistics, format_report,
    format_values, get_artist, get_media_item, get_release, list_artists,
    list_artists_for_select, list_genres, list_media_items, list_media_types, list_releases,
    release_artist_ids, release_genre_ids,
};
pub use schema::{open_database, open_memory, SchemaError};
