use polars::prelude::*;

use crate::errors::LoaderError;
use crate::model::{DailyTable, LoadStats, RawTable};
use crate::registry::TableLoader;

use super::common::{cell, coerce_f64, datetime_series, parse_timestamp_micros, resolve_column};
use super::schema::{CanonicalColumn, DailyColumn, DAILY_TABLE};

/// Normalizes the per-day channel totals. Unparseable cells become nulls; no row is
/// dropped.
pub struct DailyTableLoader;

impl Default for DailyTableLoader {
    fn default() -> Self {
        Self
    }
}

impl DailyTableLoader {
    const NAME: &'static str = DAILY_TABLE;

    fn build_frame(
        dates: Vec<Option<i64>>,
        views: Vec<Option<f64>>,
    ) -> Result<DataFrame, PolarsError> {
        DataFrame::new(vec![
            datetime_series(DailyColumn::Date.canonical_name(), dates)?.into(),
            Series::new(DailyColumn::Views.canonical_name().into(), views).into(),
        ])
    }
}

impl TableLoader for DailyTableLoader {
    type Output = DailyTable;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn load(&self, raw: &RawTable) -> Result<DailyTable, LoaderError> {
        let date_idx = resolve_column(Self::NAME, &raw.headers, DailyColumn::Date)?;
        let views_idx = resolve_column(Self::NAME, &raw.headers, DailyColumn::Views)?;

        let mut dates = Vec::with_capacity(raw.height());
        let mut views = Vec::with_capacity(raw.height());
        for row in &raw.rows {
            dates.push(parse_timestamp_micros(cell(row, date_idx)));
            views.push(coerce_f64(cell(row, views_idx)));
        }

        let df = Self::build_frame(dates, views).map_err(|source| LoaderError::Frame {
            table: Self::NAME,
            source,
        })?;

        Ok(DailyTable {
            df,
            stats: LoadStats {
                rows_read: raw.height(),
                total_row_stripped: false,
                rows_dropped: 0,
                rows_kept: raw.height(),
            },
        })
    }
}
