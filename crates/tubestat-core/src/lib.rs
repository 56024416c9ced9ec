pub mod aggregate;
pub mod buckets;
pub mod derive;
pub mod error;
pub mod format;
pub mod pipeline;
pub mod report;

pub use error::{AnalysisError, Result};
pub use pipeline::{analyze, analyze_export};
pub use report::AnalysisReport;
pub use tubestat_parser::{self as parser, RawTable};
