//! Report formatting and export for the music collection.
//!
//! Everything here is a pure function of rows returned by `audiotheca-db`:
//! share and total computations, fixed-width text reports, and CSV or
//! plain-text export. Nothing touches the database.

pub mod export;
pub mod format;
pub mod stats;
pub mod text;

pub use export::{
    default_export_name, export_media_items, export_report_csv, report_to_table,
    save_report_text, write_media_items_csv, write_report_csv, ExportError, MEDIA_ITEMS_HEADER,
};
pub use format::{ReportOptions, MISSING};
pub use stats::{
    artist_totals, average, format_totals, percentage, share_rows, year_totals, ArtistTotals,
    CollectionSummary, FormatTotals, ShareRow, YearTotals,
};
pub use text::{
    artist_report, artists_report, collection_report, formats_report, purchase_years_report,
    statistics_summary, value_report,
};
