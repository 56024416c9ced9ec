use polars::prelude::*;

use crate::errors::LoaderError;
use crate::model::{LoadStats, RawTable, VideoTable};
use crate::registry::TableLoader;

use super::common::{
    cell, coerce_f64, datetime_series, parse_timestamp_micros, resolve_column, without_total_row,
};
use super::schema::{CanonicalColumn, VideoColumn, VIDEO_TABLE};

/// Header positions of every video column the loader reads.
#[derive(Debug, Clone, Copy)]
struct VideoLayout {
    title: usize,
    numeric: [usize; 6],
    published_at: usize,
    duration: usize,
}

impl VideoLayout {
    fn resolve(headers: &[String]) -> Result<Self, LoaderError> {
        let mut numeric = [0usize; 6];
        for (slot, column) in numeric.iter_mut().zip(VideoColumn::REQUIRED_NUMERIC) {
            *slot = resolve_column(VIDEO_TABLE, headers, column)?;
        }

        Ok(Self {
            title: resolve_column(VIDEO_TABLE, headers, VideoColumn::Title)?,
            numeric,
            published_at: resolve_column(VIDEO_TABLE, headers, VideoColumn::PublishedAt)?,
            duration: resolve_column(VIDEO_TABLE, headers, VideoColumn::Duration)?,
        })
    }
}

#[derive(Debug, Default)]
struct VideoColumns {
    title: Vec<String>,
    numeric: [Vec<f64>; 6],
    published_at: Vec<Option<i64>>,
    duration_s: Vec<Option<f64>>,
}

impl VideoColumns {
    fn push(
        &mut self,
        title: &str,
        numeric: [f64; 6],
        published_at: Option<i64>,
        duration_s: Option<f64>,
    ) {
        self.title.push(title.to_string());
        for (column, value) in self.numeric.iter_mut().zip(numeric) {
            column.push(value);
        }
        self.published_at.push(published_at);
        self.duration_s.push(duration_s);
    }

    fn into_frame(self) -> Result<DataFrame, PolarsError> {
        let mut columns: Vec<Column> = Vec::with_capacity(9);
        columns.push(Series::new(VideoColumn::Title.canonical_name().into(), self.title).into());
        for (column, values) in VideoColumn::REQUIRED_NUMERIC.iter().zip(self.numeric) {
            columns.push(Series::new(column.canonical_name().into(), values).into());
        }
        columns.push(
            datetime_series(VideoColumn::PublishedAt.canonical_name(), self.published_at)?.into(),
        );
        columns.push(
            Series::new(VideoColumn::Duration.canonical_name().into(), self.duration_s).into(),
        );
        DataFrame::new(columns)
    }
}

/// Normalizes the per-video export: strips the total row, coerces the six required
/// numeric columns and drops every row where any of them fails.
pub struct VideoTableLoader;

impl Default for VideoTableLoader {
    fn default() -> Self {
        Self
    }
}

impl VideoTableLoader {
    const NAME: &'static str = VIDEO_TABLE;

    fn load_rows(&self, raw: &RawTable) -> Result<VideoTable, LoaderError> {
        let layout = VideoLayout::resolve(&raw.headers)?;

        let (rows, total_row_stripped) = without_total_row(&raw.rows);

        let mut columns = VideoColumns::default();
        let mut rows_dropped = 0usize;

        'rows: for row in rows {
            let mut numeric = [0.0f64; 6];
            for (slot, idx) in numeric.iter_mut().zip(layout.numeric) {
                match coerce_f64(cell(row, idx)) {
                    Some(value) => *slot = value,
                    None => {
                        rows_dropped += 1;
                        continue 'rows;
                    }
                }
            }

            columns.push(
                cell(row, layout.title),
                numeric,
                parse_timestamp_micros(cell(row, layout.published_at)),
                coerce_f64(cell(row, layout.duration)),
            );
        }

        let rows_kept = columns.title.len();
        let df = columns
            .into_frame()
            .map_err(|source| LoaderError::Frame {
                table: Self::NAME,
                source,
            })?;

        Ok(VideoTable {
            df,
            stats: LoadStats {
                rows_read: raw.height(),
                total_row_stripped,
                rows_dropped,
                rows_kept,
            },
        })
    }
}

impl TableLoader for VideoTableLoader {
    type Output = VideoTable;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn load(&self, raw: &RawTable) -> Result<VideoTable, LoaderError> {
        self.load_rows(raw)
    }
}
