pub(crate) mod artists;
pub(crate) mod config;
pub(crate) mod export;
pub(crate) mod init;
pub(crate) mod items;
pub(crate) mod lookups;
pub(crate) mod releases;
pub(crate) mod report;
pub(crate) mod stats;

use audiotheca_catalog::{optional_text, InputError, NamedId};

/// Find a row whose name matches `value` exactly, else treat `value` as an id.
pub(crate) fn pick_by_name_or_id(value: &str, rows: &[NamedId]) -> Option<i64> {
    let value = value.trim();
    if let Some(row) = rows.iter().find(|r| r.name == value) {
        return Some(row.id);
    }
    let id: i64 = value.parse().ok()?;
    rows.iter().any(|r| r.id == id).then_some(id)
}

/// Drop repeated ids, keeping first-seen order.
pub(crate) fn unique_ids(ids: Vec<i64>) -> Vec<i64> {
    let mut seen = Vec::with_capacity(ids.len());
    for id in ids {
        if !seen.contains(&id) {
            seen.push(id);
        }
    }
    seen
}

/// New value for an optional text field on update: absent keeps the
/// current value, empty clears it.
pub(crate) fn merge_text(current: Option<String>, given: Option<&str>) -> Option<String> {
    match given {
        Some(s) => optional_text(s),
        None => current,
    }
}

/// Like [`merge_text`] for parsed fields.
pub(crate) fn merge_parsed<T>(
    current: Option<T>,
    given: Option<&str>,
    parse: impl FnOnce(&str) -> Result<Option<T>, InputError>,
) -> Result<Option<T>, InputError> {
    match given {
        Some(s) => parse(s),
        None => Ok(current),
    }
}

/// Guard for destructive commands. Returns `false` (after explaining how to
/// proceed) when `--yes` was not given.
pub(crate) fn confirmed(yes: bool, what: &str, command: &str) -> bool {
    if !yes {
        log::warn!("This will permanently delete {what}.");
        log::info!("Re-run with --yes to proceed:");
        log::info!("  audiotheca {command} --yes");
    }
    yes
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let head: String = s.chars().take(max - 3).collect();
        format!("{head}...")
    } else {
        s.chars().take(max).collect()
    }
}
