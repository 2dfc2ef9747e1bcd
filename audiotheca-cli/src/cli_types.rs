//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "audiotheca")]
#[command(about = "Keep an inventory of a personal music collection", long_about = None)]
pub(crate) struct Cli {
    /// Collection database file (defaults to settings.toml, then the data directory)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Create the database and seed default media types and genres
    Init,

    /// Manage owned media items
    Items {
        #[command(subcommand)]
        action: ItemsAction,
    },

    /// Manage artists
    Artists {
        #[command(subcommand)]
        action: ArtistsAction,
    },

    /// Manage releases
    Releases {
        #[command(subcommand)]
        action: ReleasesAction,
    },

    /// Manage genres
    Genres {
        #[command(subcommand)]
        action: GenresAction,
    },

    /// Manage media types (formats)
    MediaTypes {
        #[command(subcommand)]
        action: MediaTypesAction,
    },

    /// Show collection statistics
    Stats,

    /// Print a report, optionally saving it as text or CSV
    Report {
        kind: ReportKind,

        /// Artist id or exact name (for the artist report)
        #[arg(long)]
        artist: Option<String>,

        #[command(flatten)]
        output: ReportOutput,
    },

    /// Export the full media item listing as CSV
    Export {
        /// Output file (default: audiotheca_export_<timestamp>.csv)
        path: Option<PathBuf>,

        /// Only export items matching this search text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show or change settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Fields shared by `items add` and `items update`.
#[derive(Args, Clone, Default)]
pub(crate) struct ItemFields {
    /// Catalog number (required when adding)
    #[arg(long)]
    pub catalog_number: Option<String>,

    /// Media type id or exact name
    #[arg(long)]
    pub media_type: Option<String>,

    /// Release id or exact title
    #[arg(long)]
    pub release: Option<String>,

    /// New, Good, Fair, Poor or Collectible
    #[arg(long)]
    pub condition: Option<String>,

    /// Purchase price (`,` or `.` as decimal separator)
    #[arg(long)]
    pub price: Option<String>,

    /// Purchase date, DD.MM.YYYY
    #[arg(long)]
    pub date: Option<String>,

    /// Shelf, box or other storage location
    #[arg(long)]
    pub location: Option<String>,

    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ItemsAction {
    /// List items, optionally filtered by search text
    List {
        /// Matches catalog number, album title, artist or format
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one item
    Show { id: i64 },

    /// Add an item
    Add {
        #[command(flatten)]
        fields: ItemFields,
    },

    /// Change fields of an item (empty value clears an optional field)
    Update {
        id: i64,

        #[command(flatten)]
        fields: ItemFields,
    },

    /// Delete an item
    Delete {
        id: i64,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

/// Fields shared by `artists add` and `artists update`.
#[derive(Args, Clone, Default)]
pub(crate) struct ArtistFields {
    /// Artist name (required when adding)
    #[arg(long)]
    pub name: Option<String>,

    /// Solo, Band, Orchestra or Other
    #[arg(long = "type")]
    pub artist_type: Option<String>,

    #[arg(long)]
    pub country: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ArtistsAction {
    /// List artists, optionally filtered by name
    List {
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add an artist
    Add {
        #[command(flatten)]
        fields: ArtistFields,
    },

    /// Change fields of an artist
    Update {
        id: i64,

        #[command(flatten)]
        fields: ArtistFields,
    },

    /// Delete an artist
    Delete {
        id: i64,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },

    /// Report on one artist, or on all artists when none is given
    Report {
        /// Artist id or exact name
        artist: Option<String>,

        #[command(flatten)]
        output: ReportOutput,
    },
}

/// Fields shared by `releases add` and `releases update`.
#[derive(Args, Clone, Default)]
pub(crate) struct ReleaseFields {
    /// Release title (required when adding)
    #[arg(long)]
    pub title: Option<String>,

    #[arg(long)]
    pub year: Option<String>,

    /// Year of the original release, for reissues
    #[arg(long)]
    pub original_year: Option<String>,

    #[arg(long)]
    pub label: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    /// Label catalog code
    #[arg(long)]
    pub catalog_code: Option<String>,

    /// Total running time in seconds
    #[arg(long)]
    pub duration: Option<String>,

    #[arg(long)]
    pub tracks: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ReleasesAction {
    /// List releases, optionally filtered by title or artist
    List {
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Show one release with its artists and genres
    Show { id: i64 },

    /// Add a release linked to one or more artists
    Add {
        #[command(flatten)]
        fields: ReleaseFields,

        /// Artist id or exact name (repeatable)
        #[arg(long = "artist", required = true)]
        artists: Vec<String>,

        /// Genre id or exact name (repeatable)
        #[arg(long = "genre")]
        genres: Vec<String>,
    },

    /// Change fields of a release
    Update {
        id: i64,

        #[command(flatten)]
        fields: ReleaseFields,
    },

    /// Delete a release
    Delete {
        id: i64,

        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub(crate) enum GenresAction {
    /// List genres
    List,

    /// Add a genre
    Add { name: String },
}

#[derive(Subcommand)]
pub(crate) enum MediaTypesAction {
    /// List media types
    List,

    /// Add a media type
    Add {
        name: String,

        #[arg(long)]
        description: Option<String>,
    },
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show the effective settings
    Show,

    /// Print the settings file path
    Path,

    /// Change saved settings
    Set {
        /// Default collection database file
        #[arg(long)]
        database: Option<PathBuf>,

        /// Currency suffix for report amounts
        #[arg(long)]
        currency: Option<String>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum ReportKind {
    Collection,
    Artists,
    Artist,
    Formats,
    Value,
    Years,
}

/// Where to save a report besides printing it.
#[derive(Args, Clone, Default)]
pub(crate) struct ReportOutput {
    /// Save the report text to this file
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Save the report as semicolon-separated CSV
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
