use audiotheca_catalog::*;
use audiotheca_report::*;
use chrono::NaiveDate;

fn opts() -> ReportOptions {
    ReportOptions::default()
}

fn count(label: &str, count: i64) -> CountRow {
    CountRow {
        label: label.to_string(),
        count,
    }
}

fn sample_stats() -> CollectionStatistics {
    CollectionStatistics {
        by_format: vec![count("CD", 2), count("Vinyl LP", 1)],
        by_condition: vec![count("Good", 2), count("New", 1)],
        total_value: 32.5,
        releases_count: 2,
        artists_count: 2,
        by_year: vec![
            YearRow { year: 2021, count: 2, total: 20.0 },
            YearRow { year: 2020, count: 1, total: 12.5 },
        ],
    }
}

#[test]
fn collection_report_contents() {
    let text = collection_report(&sample_stats(), &opts());
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "=".repeat(60));
    assert_eq!(lines[1], "COLLECTION REPORT");
    assert!(text.contains("Total items in collection: 3"));
    assert!(text.contains("Total collection value: 32.50 ₽"));
    assert!(text.contains(&format!("{:25} {:4} pcs.", "CD", 2)));
    assert!(text.contains("2021        2      20.00 ₽"));
    assert!(lines.iter().all(|l| l.trim_end() == *l));
}

#[test]
fn artists_report_total_row() {
    let rows = vec![
        ArtistSummaryRow {
            artist_id: 1,
            name: "The Testers".to_string(),
            releases_count: 2,
            items_count: 3,
            total_value: Some(32.5),
        },
        ArtistSummaryRow {
            artist_id: 2,
            name: "Nobody".to_string(),
            releases_count: 0,
            items_count: 0,
            total_value: None,
        },
    ];
    let text = artists_report(&rows, &opts());
    let total = text.lines().find(|l| l.starts_with("TOTAL")).unwrap();
    assert_eq!(
        total,
        format!("{:30} {:8} {:10} {:>12.2} ₽", "TOTAL", 2, 3, 32.5)
    );
    assert!(text.contains(&format!("{:30} {:8} {:10} {:>12.2} ₽", "Nobody", 0, 0, 0.0)));
}

#[test]
fn artist_report_rows_and_total() {
    let rows = vec![
        ArtistItemRow {
            release_title: "Test LP".to_string(),
            media_type: "Vinyl LP".to_string(),
            condition: Condition::Good,
            purchase_price: Some(12.5),
            purchase_date: NaiveDate::from_ymd_opt(2020, 5, 1),
        },
        ArtistItemRow {
            release_title: "Test LP".to_string(),
            media_type: "CD".to_string(),
            condition: Condition::Poor,
            purchase_price: None,
            purchase_date: None,
        },
    ];
    let text = artist_report("The Testers", &rows, &opts());
    assert!(text.contains("ARTIST REPORT: The Testers"));
    assert!(text.contains("12.50 ₽"));
    assert!(text.contains("01.05.2020"));
    assert!(text.contains("Artist collection value: 12.50 ₽"));
    let poor = text.lines().find(|l| l.contains("Poor")).unwrap();
    assert!(poor.ends_with("—"));
}

#[test]
fn artist_report_without_rows() {
    let text = artist_report("Nobody", &[], &opts());
    assert!(text.contains("No data for this artist"));
    assert!(!text.contains("Artist collection value"));
}

#[test]
fn formats_report_totals_and_dates() {
    let rows = vec![
        FormatReportRow {
            media_type: "CD".to_string(),
            count: 2,
            avg_price: Some(20.0),
            total_value: Some(20.0),
            first_purchase: NaiveDate::from_ymd_opt(2021, 2, 14),
            last_purchase: NaiveDate::from_ymd_opt(2021, 7, 30),
        },
        FormatReportRow {
            media_type: "Cassette".to_string(),
            count: 0,
            avg_price: None,
            total_value: None,
            first_purchase: None,
            last_purchase: None,
        },
    ];
    let text = formats_report(&rows, &opts());
    assert!(text.contains("14.02.2021"));
    assert!(text.contains("30.07.2021"));
    let total = text.lines().find(|l| l.starts_with("TOTAL")).unwrap();
    assert!(total.contains("20.00 ₽"));
    assert!(total.contains(&format!("{:20} {:8}", "TOTAL", 2)));
    let cassette = text.lines().find(|l| l.starts_with("Cassette")).unwrap();
    assert!(cassette.ends_with("—"));
}

#[test]
fn value_report_shares() {
    let rows = vec![
        FormatValueRow { media_type: "CD".to_string(), count: 3, total_value: Some(30.0) },
        FormatValueRow { media_type: "Vinyl LP".to_string(), count: 1, total_value: Some(10.0) },
        FormatValueRow { media_type: "Cassette".to_string(), count: 0, total_value: None },
    ];
    let text = value_report(40.0, &rows, &opts());
    assert!(text.contains("Total collection value: 40.00 ₽"));
    assert!(text.contains("(75.0%)"));
    assert!(text.contains("(25.0%)"));
    assert!(!text.contains("Cassette"));
}

#[test]
fn value_report_without_prices() {
    let text = value_report(0.0, &[], &opts());
    assert!(text.contains("Total collection value: 0.00 ₽"));
    assert!(!text.contains("Value by format"));
}

#[test]
fn value_report_section_without_priced_formats() {
    let rows = vec![
        FormatValueRow { media_type: "CD".to_string(), count: 2, total_value: None },
        FormatValueRow { media_type: "Cassette".to_string(), count: 0, total_value: None },
    ];
    let text = value_report(0.0, &rows, &opts());
    assert!(text.contains("Value by format:"));
    assert!(!text.contains("CD"));
    assert!(!text.contains("Cassette"));
}

#[test]
fn value_report_section_needs_items() {
    let rows = vec![FormatValueRow { media_type: "CD".to_string(), count: 0, total_value: None }];
    assert!(!value_report(0.0, &rows, &opts()).contains("Value by format"));
}

#[test]
fn purchase_years_report_averages() {
    let rows = vec![
        YearRow { year: 2021, count: 2, total: 20.0 },
        YearRow { year: 2020, count: 1, total: 12.5 },
    ];
    let text = purchase_years_report(&rows, &opts());
    let row_2021 = text.lines().find(|l| l.starts_with("2021")).unwrap();
    assert!(row_2021.ends_with("10.00 ₽"));
    assert!(text.contains("Average purchase across all years: 10.83 ₽"));
    let total = text.lines().find(|l| l.starts_with("TOTAL")).unwrap();
    assert!(total.contains("32.50 ₽"));
}

#[test]
fn purchase_years_report_empty_average_is_zero() {
    let text = purchase_years_report(&[], &opts());
    assert!(text.contains("Average purchase across all years: 0.00 ₽"));
}

#[test]
fn statistics_summary_percentages() {
    let summary = CollectionSummary::from_statistics(&sample_stats());
    assert_eq!(summary.total_items, 3);
    let text = statistics_summary(&summary, &opts());
    assert!(text.contains("Items: 3   Value: 32.50 ₽   Artists: 2   Releases: 2"));
    assert!(text.contains("66.7%"));
    assert!(text.contains("33.3%"));
}

#[test]
fn statistics_summary_zero_grouping() {
    let stats = CollectionStatistics {
        by_format: vec![count("CD", 0)],
        ..Default::default()
    };
    let summary = CollectionSummary::from_statistics(&stats);
    assert_eq!(summary.by_format[0].percent, 0.0);
    assert!(statistics_summary(&summary, &opts()).contains("0.0%"));
}

#[test]
fn custom_currency_suffix() {
    let opts = ReportOptions {
        currency: "EUR".to_string(),
    };
    let text = collection_report(&sample_stats(), &opts);
    assert!(text.contains("32.50 EUR"));
}
