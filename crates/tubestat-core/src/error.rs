use thiserror::Error;
use tubestat_parser::LoaderError;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Failed to load exports: {0}")]
    Loader(#[from] LoaderError),

    #[error("Polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
