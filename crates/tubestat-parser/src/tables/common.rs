use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use polars::prelude::*;

use crate::errors::LoaderError;
use crate::model::RawTable;

use super::schema::{CanonicalColumn, TOTAL_ROW_SENTINELS};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
];

const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%Y.%m.%d",
    "%Y. %m. %d.",
    "%Y. %m. %d",
    "%b %d, %Y",
    "%B %d, %Y",
    "%d %b %Y",
];

pub fn is_total_row(row: &[String]) -> bool {
    row.first()
        .map(|cell| TOTAL_ROW_SENTINELS.contains(&cell.trim()))
        .unwrap_or(false)
}

/// The data rows after a leading grand-total row, and whether one was skipped.
pub fn without_total_row(rows: &[Vec<String>]) -> (&[Vec<String>], bool) {
    match rows.split_first() {
        Some((first, rest)) if is_total_row(first) => (rest, true),
        _ => (rows, false),
    }
}

/// Removes a leading grand-total row. Returns whether a row was removed; running it
/// again on the same table removes nothing.
pub fn strip_total_row(table: &mut RawTable) -> bool {
    let (_, stripped) = without_total_row(&table.rows);
    if stripped {
        table.rows.remove(0);
    }
    stripped
}

pub(crate) fn resolve_column<C: CanonicalColumn>(
    table: &'static str,
    headers: &[String],
    column: C,
) -> Result<usize, LoaderError> {
    headers
        .iter()
        .position(|header| column.matches(header))
        .ok_or(LoaderError::MissingColumn {
            table,
            column: column.canonical_name(),
        })
}

pub(crate) fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

/// Plain decimal coercion. Empty, non-numeric and non-finite cells are `None`.
pub fn coerce_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|parsed| parsed.is_finite())
}

/// Parses a wall-clock timestamp into epoch microseconds. Offsets are dropped so the
/// weekday matches the export's local calendar.
pub fn parse_timestamp_micros(value: &str) -> Option<i64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local().and_utc().timestamp_micros());
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Some(dt.and_utc().timestamp_micros());
        }
    }

    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, fmt) {
            return Some(date.and_time(NaiveTime::MIN).and_utc().timestamp_micros());
        }
    }

    None
}

pub(crate) fn datetime_series(
    name: &str,
    values: Vec<Option<i64>>,
) -> Result<Series, PolarsError> {
    Series::new(name.into(), values).cast(&DataType::Datetime(TimeUnit::Microseconds, None))
}
