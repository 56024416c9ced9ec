use tracing::{debug, info, warn};
use tubestat_parser::{load_channel_export, ChannelExport, RawTable};

use crate::aggregate::{
    collect_days, collect_videos, length_buckets, summarize, top_by_ctr, top_by_cpm,
    top_by_subscribers, top_by_views, top_days, watch_time_distribution,
};
use crate::derive::derive_video_metrics;
use crate::error::Result;
use crate::report::AnalysisReport;

/// Loads, derives and aggregates one channel's exports. The chart table is accepted for
/// the presentation layer and not read here.
pub fn analyze(videos: &RawTable, chart: &RawTable, daily: &RawTable) -> Result<AnalysisReport> {
    let export = load_channel_export(videos, chart, daily)?;
    analyze_export(&export)
}

pub fn analyze_export(export: &ChannelExport) -> Result<AnalysisReport> {
    let video_stats = export.videos.stats;
    info!(
        rows_read = video_stats.rows_read,
        rows_kept = video_stats.rows_kept,
        rows_dropped = video_stats.rows_dropped,
        total_row_stripped = video_stats.total_row_stripped,
        "Normalized video table"
    );
    info!(rows = export.daily.stats.rows_kept, "Normalized daily totals");

    let derived = derive_video_metrics(&export.videos.df)?;
    debug!(columns = derived.width(), "Derived video metrics");

    let videos = collect_videos(&derived)?;
    let days = collect_days(&export.daily.df)?;

    if videos.is_empty() {
        warn!("No video rows survived normalization; aggregates will be empty");
    }

    let report = AnalysisReport {
        video_stats,
        daily_stats: export.daily.stats,
        summary: summarize(&videos),
        top_by_views: top_by_views(&videos),
        top_by_subscribers: top_by_subscribers(&videos),
        top_by_cpm: top_by_cpm(&videos),
        top_by_ctr: top_by_ctr(&videos),
        length_buckets: length_buckets(&videos),
        watch_time_distribution: watch_time_distribution(&videos),
        top_days: top_days(&days),
        videos,
    };
    debug!(
        top_views = report.top_by_views.len(),
        top_days = report.top_days.len(),
        "Aggregated report"
    );

    Ok(report)
}
