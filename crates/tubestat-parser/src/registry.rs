use crate::errors::LoaderError;
use crate::model::{ChannelExport, RawTable};
use crate::tables::{DailyTableLoader, VideoTableLoader};

pub trait TableLoader {
    type Output;

    fn name(&self) -> &'static str;
    fn load(&self, raw: &RawTable) -> Result<Self::Output, LoaderError>;
}

/// Normalizes the three exports of one channel. The first schema failure aborts the
/// whole load.
pub fn load_channel_export(
    videos: &RawTable,
    chart: &RawTable,
    daily: &RawTable,
) -> Result<ChannelExport, LoaderError> {
    let videos = VideoTableLoader.load(videos)?;
    let daily = DailyTableLoader.load(daily)?;

    Ok(ChannelExport {
        videos,
        chart: chart.clone(),
        daily,
    })
}
