use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("{table} table is missing required column '{column}'")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("{table} CSV error: {source}")]
    Csv {
        table: &'static str,
        #[source]
        source: csv::Error,
    },

    #[error("{table} table has no header row")]
    MissingHeader { table: &'static str },

    #[error("{table} table could not be assembled: {source}")]
    Frame {
        table: &'static str,
        #[source]
        source: polars::error::PolarsError,
    },
}
