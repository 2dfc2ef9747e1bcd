//! Fixed-width plain-text reports.
//!
//! Each function takes rows from the store and returns the full report text.
//! Lines are right-trimmed so the output has no trailing blanks.

use audiotheca_catalog::{
    ArtistItemRow, ArtistSummaryRow, CollectionStatistics, FormatReportRow, FormatValueRow,
    YearRow,
};

use crate::format::{optional_date, optional_text, ReportOptions, MISSING};
use crate::stats::{
    artist_totals, average, format_totals, percentage, year_totals, CollectionSummary,
};

const TITLE_RULE: usize = 60;
const SECTION_RULE: usize = 40;

/// Report text under construction.
struct Report {
    buf: String,
}

impl Report {
    fn titled(title: &str) -> Self {
        let mut report = Self { buf: String::new() };
        report.rule('=', TITLE_RULE);
        report.line(title);
        report.rule('=', TITLE_RULE);
        report.blank();
        report
    }

    fn line(&mut self, text: &str) {
        self.buf.push_str(text.trim_end());
        self.buf.push('\n');
    }

    fn blank(&mut self) {
        self.buf.push('\n');
    }

    fn rule(&mut self, c: char, width: usize) {
        self.line(&c.to_string().repeat(width));
    }

    fn finish(self) -> String {
        self.buf
    }
}

/// Overall collection report: totals, distributions, purchases by year.
pub fn collection_report(stats: &CollectionStatistics, opts: &ReportOptions) -> String {
    let summary = CollectionSummary::from_statistics(stats);
    let mut r = Report::titled("COLLECTION REPORT");

    r.line(&format!("Total items in collection: {}", summary.total_items));
    r.line(&format!("Total collection value: {}", opts.money(summary.total_value)));
    r.line(&format!("Releases: {}", summary.releases_count));
    r.line(&format!("Artists: {}", summary.artists_count));
    r.blank();

    r.line("By format:");
    r.rule('-', SECTION_RULE);
    for row in &stats.by_format {
        r.line(&format!("{:25} {:4} pcs.", row.label, row.count));
    }
    r.blank();

    r.line("By condition:");
    r.rule('-', SECTION_RULE);
    for row in &stats.by_condition {
        r.line(&format!("{:25} {:4} pcs.", row.label, row.count));
    }
    r.blank();

    r.line("Purchases by year:");
    r.rule('-', SECTION_RULE);
    r.line("Year   Count   Sum");
    for row in &stats.by_year {
        r.line(&format!(
            "{}   {:6}   {}",
            row.year,
            row.count,
            opts.money_width(row.total, 8)
        ));
    }

    r.finish()
}

/// Per-artist releases, items and value with a closing TOTAL row.
pub fn artists_report(rows: &[ArtistSummaryRow], opts: &ReportOptions) -> String {
    let mut r = Report::titled("ARTISTS REPORT");

    r.line(&format!(
        "{:30} {:>8} {:>10} {:>12}",
        "Artist", "Releases", "Items", "Value"
    ));
    r.rule('-', TITLE_RULE);
    for row in rows {
        let name = if row.name.is_empty() { "Unknown" } else { row.name.as_str() };
        r.line(&format!(
            "{:30} {:8} {:10} {}",
            name,
            row.releases_count,
            row.items_count,
            opts.money_width(row.total_value.unwrap_or(0.0), 12)
        ));
    }

    let totals = artist_totals(rows);
    r.rule('-', TITLE_RULE);
    r.line(&format!(
        "{:30} {:8} {:10} {}",
        "TOTAL",
        totals.releases,
        totals.items,
        opts.money_width(totals.value, 12)
    ));

    r.finish()
}

/// Owned items for one artist and the value of that part of the collection.
pub fn artist_report(artist_name: &str, rows: &[ArtistItemRow], opts: &ReportOptions) -> String {
    const RULE: usize = 82;
    let mut r = Report::titled(&format!("ARTIST REPORT: {artist_name}"));

    if rows.is_empty() {
        r.line("No data for this artist");
        return r.finish();
    }

    r.line(&format!(
        "{:30} {:15} {:15} {:10} {:12}",
        "Album", "Format", "Condition", "Price", "Date"
    ));
    r.rule('-', RULE);
    for row in rows {
        r.line(&format!(
            "{:30} {:15} {:15} {:10} {:12}",
            optional_text(Some(row.release_title.as_str())),
            optional_text(Some(row.media_type.as_str())),
            row.condition.as_str(),
            opts.optional_money(row.purchase_price),
            optional_date(row.purchase_date),
        ));
    }
    let total: f64 = rows.iter().filter_map(|row| row.purchase_price).sum();
    r.rule('-', RULE);
    r.line(&format!("Artist collection value: {}", opts.money(total)));

    r.finish()
}

/// Per-format counts, prices and purchase date range with a TOTAL row.
pub fn formats_report(rows: &[FormatReportRow], opts: &ReportOptions) -> String {
    const RULE: usize = 76;
    let mut r = Report::titled("MEDIA FORMATS REPORT");

    r.line(&format!(
        "{:20} {:>8} {:>14} {:>14} {:12} {:12}",
        "Format", "Count", "Avg price", "Total", "First", "Last"
    ));
    r.rule('-', RULE);
    for row in rows {
        let name = if row.media_type.is_empty() { "Unknown" } else { row.media_type.as_str() };
        r.line(&format!(
            "{:20} {:8} {} {} {:12} {:12}",
            name,
            row.count,
            opts.money_width(row.avg_price.unwrap_or(0.0), 12),
            opts.money_width(row.total_value.unwrap_or(0.0), 12),
            optional_date(row.first_purchase),
            optional_date(row.last_purchase),
        ));
    }

    let totals = format_totals(rows);
    r.rule('-', RULE);
    r.line(&format!(
        "{:20} {:8} {:>14} {}",
        "TOTAL",
        totals.items,
        MISSING,
        opts.money_width(totals.value, 12)
    ));

    r.finish()
}

/// Total value and each format's share of it.
///
/// The per-format section appears once any item has a format; formats
/// without a priced item get no line in it.
pub fn value_report(total_value: f64, rows: &[FormatValueRow], opts: &ReportOptions) -> String {
    let mut r = Report::titled("COLLECTION VALUE REPORT");

    r.line(&format!("Total collection value: {}", opts.money(total_value)));
    r.blank();

    let priced: Vec<(&str, f64)> = rows
        .iter()
        .filter_map(|row| match row.total_value {
            Some(v) if v > 0.0 => Some((row.media_type.as_str(), v)),
            _ => None,
        })
        .collect();

    if rows.iter().any(|row| row.count > 0) {
        r.line("Value by format:");
        r.rule('-', SECTION_RULE);
        for (name, value) in priced {
            r.line(&format!(
                "{:20} {} ({:.1}%)",
                name,
                opts.money_width(value, 10),
                percentage(value, total_value)
            ));
        }
    }

    r.finish()
}

/// Purchases per calendar year with averages and a TOTAL row.
pub fn purchase_years_report(rows: &[YearRow], opts: &ReportOptions) -> String {
    let mut r = Report::titled("PURCHASES BY YEAR REPORT");

    r.line(&format!(
        "{:4}   {:>14}   {:>15}   {:>13}",
        "Year", "Purchases", "Spent", "Average"
    ));
    r.rule('-', TITLE_RULE);
    for row in rows {
        r.line(&format!(
            "{:4}   {:14}   {}   {}",
            row.year,
            row.count,
            opts.money_width(row.total, 13),
            opts.money_width(average(row.total, row.count), 11)
        ));
    }

    let totals = year_totals(rows);
    r.rule('-', TITLE_RULE);
    r.line(&format!(
        "{:<7}{:14}   {}",
        "TOTAL",
        totals.items,
        opts.money_width(totals.value, 13)
    ));
    r.blank();
    r.line(&format!(
        "Average purchase across all years: {}",
        opts.money(totals.average())
    ));

    r.finish()
}

/// Statistics view: headline numbers plus share tables by format and condition.
pub fn statistics_summary(summary: &CollectionSummary, opts: &ReportOptions) -> String {
    let mut r = Report::titled("COLLECTION STATISTICS");

    r.line(&format!(
        "Items: {}   Value: {}   Artists: {}   Releases: {}",
        summary.total_items,
        opts.money(summary.total_value),
        summary.artists_count,
        summary.releases_count
    ));
    r.blank();

    for (title, rows) in [
        ("Format", &summary.by_format),
        ("Condition", &summary.by_condition),
    ] {
        r.line(&format!("{:25} {:>8} {:>7}", title, "Count", "%"));
        r.rule('-', SECTION_RULE + 2);
        for row in rows {
            r.line(&format!(
                "{:25} {:8} {:>7}",
                row.label,
                row.count,
                format!("{:.1}%", row.percent)
            ));
        }
        r.blank();
    }

    r.finish()
}
