//! Data model types for the music collection.
//!
//! These types mirror the persistent schema: artists, releases, genres,
//! media types, and the physical media items that make up the collection.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;

use crate::input::InputError;

// ── Artist ──────────────────────────────────────────────────────────────────

/// A performer credited on one or more releases.
#[derive(Debug, Clone, PartialEq)]
pub struct Artist {
    pub id: i64,
    pub name: String,
    pub artist_type: Option<ArtistType>,
    pub country: Option<String>,
}

/// Field values for inserting or updating an artist.
#[derive(Debug, Clone, PartialEq)]
pub struct NewArtist {
    pub name: String,
    pub artist_type: Option<ArtistType>,
    pub country: Option<String>,
}

/// What kind of act an artist is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtistType {
    Solo,
    Band,
    Orchestra,
    Other,
}

impl ArtistType {
    pub const ALL: [ArtistType; 4] = [Self::Solo, Self::Band, Self::Orchestra, Self::Other];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solo => "Solo",
            Self::Band => "Band",
            Self::Orchestra => "Orchestra",
            Self::Other => "Other",
        }
    }

    /// Lenient parse used when reading stored rows. Unknown values map to `Other`.
    pub fn from_str_loose(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "solo" => Self::Solo,
            "band" | "group" => Self::Band,
            "orchestra" => Self::Orchestra,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for ArtistType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtistType {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InputError::UnknownArtistType(s.to_string()))
    }
}

// ── Release ─────────────────────────────────────────────────────────────────

/// A musical work or edition, independent of any owned copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Release {
    pub id: i64,
    pub title: String,
    pub release_year: Option<i32>,
    pub original_year: Option<i32>,
    pub label: Option<String>,
    pub country: Option<String>,
    pub catalog_code: Option<String>,
    /// Total running time in seconds.
    pub total_duration: Option<i64>,
    pub total_tracks: Option<i32>,
}

/// Field values for inserting or updating a release.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewRelease {
    pub title: String,
    pub release_year: Option<i32>,
    pub original_year: Option<i32>,
    pub label: Option<String>,
    pub country: Option<String>,
    pub catalog_code: Option<String>,
    pub total_duration: Option<i64>,
    pub total_tracks: Option<i32>,
}

// ── Lookups ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Genre {
    pub id: i64,
    pub name: String,
}

/// A physical format (vinyl LP, CD, cassette, ...).
#[derive(Debug, Clone, PartialEq)]
pub struct MediaType {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

/// Id and display name, for pick lists.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedId {
    pub id: i64,
    pub name: String,
}

// ── Media Item ──────────────────────────────────────────────────────────────

/// One physical owned copy of a release.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaItem {
    pub id: i64,
    pub catalog_number: String,
    pub media_type_id: Option<i64>,
    pub release_id: Option<i64>,
    pub condition: Condition,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub storage_location: Option<String>,
    pub notes: Option<String>,
}

/// Field values for inserting or updating a media item.
#[derive(Debug, Clone, PartialEq)]
pub struct NewMediaItem {
    pub catalog_number: String,
    pub media_type_id: Option<i64>,
    pub release_id: Option<i64>,
    pub condition: Condition,
    pub purchase_price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
    pub storage_location: Option<String>,
    pub notes: Option<String>,
}

/// Physical condition grade of a media item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Condition {
    New,
    Good,
    Fair,
    Poor,
    Collectible,
}

impl Condition {
    pub const ALL: [Condition; 5] = [
        Self::New,
        Self::Good,
        Self::Fair,
        Self::Poor,
        Self::Collectible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "New",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
            Self::Collectible => "Collectible",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Condition {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| InputError::UnknownCondition(s.to_string()))
    }
}
