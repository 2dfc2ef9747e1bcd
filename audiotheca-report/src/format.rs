//! Value formatting shared by every report.

use audiotheca_catalog::format_date;
use chrono::NaiveDate;

/// Placeholder for missing values.
pub const MISSING: &str = "—";

/// Rendering options for reports.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportOptions {
    /// Suffix appended to every currency amount.
    pub currency: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            currency: "₽".to_string(),
        }
    }
}

impl ReportOptions {
    /// `12.50 ₽`
    pub fn money(&self, value: f64) -> String {
        format!("{:.2} {}", value, self.currency)
    }

    /// Amount right-aligned to `width`, then the currency suffix.
    pub fn money_width(&self, value: f64, width: usize) -> String {
        format!("{:>width$.2} {}", value, self.currency)
    }

    pub fn optional_money(&self, value: Option<f64>) -> String {
        value.map_or_else(|| MISSING.to_string(), |v| self.money(v))
    }
}

pub fn optional_date(date: Option<NaiveDate>) -> String {
    date.map_or_else(|| MISSING.to_string(), format_date)
}

pub fn optional_text(text: Option<&str>) -> &str {
    match text {
        Some(s) if !s.is_empty() => s,
        _ => MISSING,
    }
}
