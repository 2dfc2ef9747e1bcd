//! Typed result rows for listing and report queries.
//!
//! Listing rows are denormalized joins; report rows carry raw aggregates
//! (sums and counts) that `audiotheca-report` turns into text.

use chrono::NaiveDate;

use crate::types::Condition;

/// A media item joined with its release title, an artist name and format.
///
/// Items on releases with several artists appear once per artist.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItemRow {
    pub id: i64,
    pub catalog_number: String,
    pub release_title: Option<String>,
    pub artist_name: Option<String>,
    pub media_type: Option<String>,
    pub condition: Condition,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub storage_location: Option<String>,
}

/// A release joined with one associated artist name.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseRow {
    pub id: i64,
    pub title: String,
    pub release_year: Option<i32>,
    pub label: Option<String>,
    pub country: Option<String>,
    pub artist_name: Option<String>,
}

// ── Statistics ──────────────────────────────────────────────────────────────

/// A grouping label and the number of items in it.
#[derive(Debug, Clone, PartialEq)]
pub struct CountRow {
    pub label: String,
    pub count: i64,
}

/// Purchases made in one calendar year.
#[derive(Debug, Clone, PartialEq)]
pub struct YearRow {
    pub year: i32,
    pub count: i64,
    /// Sum of known prices; items without a price count as zero.
    pub total: f64,
}

/// Aggregate snapshot of the whole collection.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectionStatistics {
    /// Item counts per media type, largest first.
    pub by_format: Vec<CountRow>,
    /// Item counts per condition, largest first.
    pub by_condition: Vec<CountRow>,
    pub total_value: f64,
    /// Distinct releases with at least one owned item.
    pub releases_count: i64,
    /// Distinct artists linked to at least one release.
    pub artists_count: i64,
    /// Newest year first; undated purchases are excluded.
    pub by_year: Vec<YearRow>,
}

// ── Artist Reports ──────────────────────────────────────────────────────────

/// One owned item on a release by a given artist.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistItemRow {
    pub release_title: String,
    pub media_type: String,
    pub condition: Condition,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
}

/// Per-artist aggregate over linked releases and their items.
#[derive(Debug, Clone, PartialEq)]
pub struct ArtistSummaryRow {
    pub artist_id: i64,
    pub name: String,
    pub releases_count: i64,
    pub items_count: i64,
    pub total_value: Option<f64>,
}

/// Result of an artist report query: detail rows for one artist, or
/// aggregate rows for every artist.
#[derive(Debug, Clone, PartialEq)]
pub enum ArtistReport {
    Items(Vec<ArtistItemRow>),
    Summary(Vec<ArtistSummaryRow>),
}

// ── Format Reports ──────────────────────────────────────────────────────────

/// Per media type purchase aggregates. Types without items are included
/// with a zero count.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatReportRow {
    pub media_type: String,
    pub count: i64,
    pub avg_price: Option<f64>,
    pub total_value: Option<f64>,
    pub first_purchase: Option<NaiveDate>,
    pub last_purchase: Option<NaiveDate>,
}

/// Per media type value, ordered by value for the value report.
#[derive(Debug, Clone, PartialEq)]
pub struct FormatValueRow {
    pub media_type: String,
    pub count: i64,
    pub total_value: Option<f64>,
}
