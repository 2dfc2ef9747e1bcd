use audiotheca_catalog::{
    parse_date, parse_price, required_text, Condition, MediaItem, NewMediaItem,
};
use audiotheca_report::format::{optional_date, optional_text};
use audiotheca_report::ReportOptions;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;
use rusqlite::Connection;

use crate::cli_types::ItemFields;
use crate::error::failed;
use crate::CliError;

use super::lookups::resolve_media_type;
use super::releases::resolve_release;
use super::{confirmed, merge_parsed, merge_text, truncate_str};

pub(crate) fn run_items_list(
    conn: &Connection,
    search: Option<&str>,
    opts: &ReportOptions,
) -> Result<(), CliError> {
    let rows = audiotheca_db::list_media_items(conn, search).map_err(failed("load items"))?;

    if rows.is_empty() {
        match search {
            Some(s) => log::info!("No items match '{s}'."),
            None => log::info!("The collection is empty. Add items with 'audiotheca items add'."),
        }
        return Ok(());
    }

    let header = format!(
        "{:>5}  {:12}  {:28}  {:20}  {:10}  {:11}  {:>12}  {:10}  {}",
        "ID", "Catalog #", "Album", "Artist", "Format", "Condition", "Price", "Date", "Location"
    );
    log::info!("{}", header.if_supports_color(Stdout, |t| t.bold()));
    for row in &rows {
        log::info!(
            "{:>5}  {:12}  {:28}  {:20}  {:10}  {:11}  {:>12}  {:10}  {}",
            row.id,
            truncate_str(&row.catalog_number, 12),
            truncate_str(optional_text(row.release_title.as_deref()), 28),
            truncate_str(optional_text(row.artist_name.as_deref()), 20),
            truncate_str(optional_text(row.media_type.as_deref()), 10),
            row.condition.as_str(),
            opts.optional_money(row.purchase_price),
            optional_date(row.purchase_date),
            optional_text(row.storage_location.as_deref()),
        );
    }
    crate::log_blank();
    log::info!("{} row(s)", rows.len());
    Ok(())
}

pub(crate) fn run_items_show(
    conn: &Connection,
    id: i64,
    opts: &ReportOptions,
) -> Result<(), CliError> {
    let Some(item) = audiotheca_db::get_media_item(conn, id).map_err(failed("load item"))? else {
        log::warn!("No item with id {id}");
        return Ok(());
    };

    let release = match item.release_id {
        Some(rid) => audiotheca_db::get_release(conn, rid)
            .map_err(failed("load release"))?
            .map(|r| r.title),
        None => None,
    };
    let media_type = match item.media_type_id {
        Some(mid) => audiotheca_db::list_media_types(conn)
            .map_err(failed("load media types"))?
            .into_iter()
            .find(|m| m.id == mid)
            .map(|m| m.name),
        None => None,
    };

    log::info!(
        "{}",
        format!("Item {} ({})", item.id, item.catalog_number).if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Album:     {}", optional_text(release.as_deref()));
    log::info!("  Format:    {}", optional_text(media_type.as_deref()));
    log::info!("  Condition: {}", item.condition);
    log::info!("  Price:     {}", opts.optional_money(item.purchase_price));
    log::info!("  Purchased: {}", optional_date(item.purchase_date));
    log::info!("  Location:  {}", optional_text(item.storage_location.as_deref()));
    log::info!("  Notes:     {}", optional_text(item.notes.as_deref()));
    Ok(())
}

pub(crate) fn run_items_add(conn: &Connection, fields: &ItemFields) -> Result<(), CliError> {
    let item = new_item(conn, fields)?;
    let id = audiotheca_db::add_media_item(conn, &item).map_err(failed("add item"))?;
    log::info!("Added item {} ({})", id, item.catalog_number);
    Ok(())
}

pub(crate) fn run_items_update(
    conn: &Connection,
    id: i64,
    fields: &ItemFields,
) -> Result<(), CliError> {
    let Some(current) = audiotheca_db::get_media_item(conn, id).map_err(failed("load item"))? else {
        log::warn!("No item with id {id}");
        return Ok(());
    };
    let item = merged_item(conn, current, fields)?;
    if audiotheca_db::update_media_item(conn, id, &item).map_err(failed("update item"))? {
        log::info!("Updated item {id}");
    } else {
        log::warn!("Item {id} was not changed");
    }
    Ok(())
}

pub(crate) fn run_items_delete(conn: &Connection, id: i64, yes: bool) -> Result<(), CliError> {
    if !confirmed(yes, &format!("item {id}"), &format!("items delete {id}")) {
        return Ok(());
    }
    if audiotheca_db::delete_media_item(conn, id).map_err(failed("delete item"))? {
        log::info!("Deleted item {id}");
    } else {
        log::warn!("No item with id {id}");
    }
    Ok(())
}

fn new_item(conn: &Connection, fields: &ItemFields) -> Result<NewMediaItem, CliError> {
    let catalog_number =
        required_text(fields.catalog_number.as_deref().unwrap_or_default(), "Catalog number")?;
    let condition: Condition = fields
        .condition
        .as_deref()
        .ok_or(audiotheca_catalog::InputError::Missing("Condition"))?
        .parse()?;

    Ok(NewMediaItem {
        catalog_number,
        media_type_id: resolve_optional(fields.media_type.as_deref(), |v| resolve_media_type(conn, v))?,
        release_id: resolve_optional(fields.release.as_deref(), |v| resolve_release(conn, v))?,
        condition,
        purchase_price: parse_price(fields.price.as_deref().unwrap_or_default())?,
        purchase_date: parse_date(fields.date.as_deref().unwrap_or_default())?,
        storage_location: fields.location.as_deref().and_then(audiotheca_catalog::optional_text),
        notes: fields.notes.as_deref().and_then(audiotheca_catalog::optional_text),
    })
}

fn merged_item(
    conn: &Connection,
    current: MediaItem,
    fields: &ItemFields,
) -> Result<NewMediaItem, CliError> {
    let catalog_number = match fields.catalog_number.as_deref() {
        Some(s) => required_text(s, "Catalog number")?,
        None => current.catalog_number,
    };
    let condition = match fields.condition.as_deref() {
        Some(s) => s.parse()?,
        None => current.condition,
    };
    let media_type_id = match fields.media_type.as_deref() {
        Some(v) => resolve_optional(Some(v), |v| resolve_media_type(conn, v))?,
        None => current.media_type_id,
    };
    let release_id = match fields.release.as_deref() {
        Some(v) => resolve_optional(Some(v), |v| resolve_release(conn, v))?,
        None => current.release_id,
    };

    Ok(NewMediaItem {
        catalog_number,
        media_type_id,
        release_id,
        condition,
        purchase_price: merge_parsed(current.purchase_price, fields.price.as_deref(), parse_price)?,
        purchase_date: merge_parsed(current.purchase_date, fields.date.as_deref(), parse_date)?,
        storage_location: merge_text(current.storage_location, fields.location.as_deref()),
        notes: merge_text(current.notes, fields.notes.as_deref()),
    })
}

/// Resolve a reference argument; an absent or empty value means "none".
fn resolve_optional(
    value: Option<&str>,
    resolve: impl FnOnce(&str) -> Result<i64, CliError>,
) -> Result<Option<i64>, CliError> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => resolve(v).map(Some),
        _ => Ok(None),
    }
}
