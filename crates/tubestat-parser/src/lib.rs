pub mod errors;
pub mod model;
mod registry;
pub mod tables;

pub use errors::LoaderError;
pub use model::{ChannelExport, DailyTable, LoadStats, RawTable, VideoTable};
pub use registry::{load_channel_export, TableLoader};
pub use tables::{strip_total_row, DailyTableLoader, VideoTableLoader};
