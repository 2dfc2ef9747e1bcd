//! Derived numbers computed from aggregate rows: shares, averages, totals.

use audiotheca_catalog::{ArtistSummaryRow, CollectionStatistics, CountRow, FormatReportRow, YearRow};

/// A grouping row with its share of the grouping total.
#[derive(Debug, Clone, PartialEq)]
pub struct ShareRow {
    pub label: String,
    pub count: i64,
    /// Percentage in `0.0..=100.0`.
    pub percent: f64,
}

/// `part / whole * 100`, or 0 when `whole` is zero.
pub fn percentage(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        part / whole * 100.0
    }
}

/// `sum / count`, or 0 when `count` is zero.
pub fn average(sum: f64, count: i64) -> f64 {
    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Attach each row's percentage of the grouping total.
pub fn share_rows(rows: &[CountRow]) -> Vec<ShareRow> {
    let total: i64 = rows.iter().map(|r| r.count).sum();
    rows.iter()
        .map(|r| ShareRow {
            label: r.label.clone(),
            count: r.count,
            percent: percentage(r.count as f64, total as f64),
        })
        .collect()
}

/// Headline numbers and distribution tables for the statistics view.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionSummary {
    pub total_items: i64,
    pub total_value: f64,
    pub releases_count: i64,
    pub artists_count: i64,
    pub by_format: Vec<ShareRow>,
    pub by_condition: Vec<ShareRow>,
}

impl CollectionSummary {
    /// Every item has a condition, so the condition grouping gives the item
    /// count (the format grouping skips items without a media type).
    pub fn from_statistics(stats: &CollectionStatistics) -> Self {
        Self {
            total_items: stats.by_condition.iter().map(|r| r.count).sum(),
            total_value: stats.total_value,
            releases_count: stats.releases_count,
            artists_count: stats.artists_count,
            by_format: share_rows(&stats.by_format),
            by_condition: share_rows(&stats.by_condition),
        }
    }
}

/// Running totals over per-artist rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ArtistTotals {
    pub releases: i64,
    pub items: i64,
    pub value: f64,
}

pub fn artist_totals(rows: &[ArtistSummaryRow]) -> ArtistTotals {
    rows.iter().fold(ArtistTotals::default(), |acc, r| ArtistTotals {
        releases: acc.releases + r.releases_count,
        items: acc.items + r.items_count,
        value: acc.value + r.total_value.unwrap_or(0.0),
    })
}

/// Running totals over per-format rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FormatTotals {
    pub items: i64,
    pub value: f64,
}

pub fn format_totals(rows: &[FormatReportRow]) -> FormatTotals {
    rows.iter().fold(FormatTotals::default(), |acc, r| FormatTotals {
        items: acc.items + r.count,
        value: acc.value + r.total_value.unwrap_or(0.0),
    })
}

/// Running totals over per-year purchase rows.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct YearTotals {
    pub items: i64,
    pub value: f64,
}

impl YearTotals {
    /// Average purchase over all years.
    pub fn average(&self) -> f64 {
        average(self.value, self.items)
    }
}

pub fn year_totals(rows: &[YearRow]) -> YearTotals {
    rows.iter().fold(YearTotals::default(), |acc, r| YearTotals {
        items: acc.items + r.count,
        value: acc.value + r.total,
    })
}
