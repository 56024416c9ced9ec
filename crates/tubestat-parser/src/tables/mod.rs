mod common;
mod daily;
pub mod schema;
mod video;

pub use common::{coerce_f64, parse_timestamp_micros, strip_total_row, without_total_row};
pub use daily::DailyTableLoader;
pub use video::VideoTableLoader;
