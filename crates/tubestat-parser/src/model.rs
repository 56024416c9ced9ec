use std::io::Read;

use polars::prelude::DataFrame;
use serde::{Deserialize, Serialize};

use crate::errors::LoaderError;

const UTF8_BOM: char = '\u{feff}';

/// One CSV export held in memory: a header row plus untyped string cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    pub fn from_csv_str(table: &'static str, content: &str) -> Result<Self, LoaderError> {
        Self::from_reader(table, content.as_bytes())
    }

    pub fn from_reader<R: Read>(table: &'static str, reader: R) -> Result<Self, LoaderError> {
        let mut reader = Self::reader_builder().from_reader(reader);
        let mut records = reader.records();

        let header = records
            .next()
            .ok_or(LoaderError::MissingHeader { table })?
            .map_err(|source| LoaderError::Csv { table, source })?;

        let headers = header
            .iter()
            .enumerate()
            .map(|(idx, value)| {
                if idx == 0 {
                    value.trim_start_matches(UTF8_BOM).to_string()
                } else {
                    value.to_string()
                }
            })
            .collect();

        let mut rows = Vec::new();
        for record in records {
            let record = record.map_err(|source| LoaderError::Csv { table, source })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    fn reader_builder() -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        builder.has_headers(false).flexible(true);
        builder
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Row accounting for one normalized table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    pub rows_read: usize,
    pub total_row_stripped: bool,
    pub rows_dropped: usize,
    pub rows_kept: usize,
}

/// Normalized per-video frame. Columns follow `tables::schema::VIDEO_COLUMNS`.
#[derive(Debug, Clone)]
pub struct VideoTable {
    pub df: DataFrame,
    pub stats: LoadStats,
}

/// Normalized per-day channel totals. Columns follow `tables::schema::DAILY_COLUMNS`.
#[derive(Debug, Clone)]
pub struct DailyTable {
    pub df: DataFrame,
    pub stats: LoadStats,
}

#[derive(Debug, Clone)]
pub struct ChannelExport {
    pub videos: VideoTable,
    /// Carried through for the presentation layer; nothing in the pipeline reads it.
    pub chart: RawTable,
    pub daily: DailyTable,
}
