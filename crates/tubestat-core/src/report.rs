use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tubestat_parser::LoadStats;

/// One normalized video with its derived metrics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DerivedVideo {
    pub title: String,
    pub views: f64,
    pub watch_time_hours: f64,
    pub estimated_revenue: f64,
    pub impressions: f64,
    pub impressions_ctr_pct: f64,
    pub subscribers_gained: f64,
    pub published_at: Option<NaiveDateTime>,
    pub duration_s: Option<f64>,
    pub watch_minutes: f64,
    pub avg_watch_minutes_per_view: Option<f64>,
    pub cpm: Option<f64>,
    pub subscriber_conversion_pct: Option<f64>,
    pub publish_weekday: Option<String>,
    pub duration_minutes: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DailyTotal {
    pub date: Option<NaiveDateTime>,
    pub views: Option<f64>,
}

/// Channel-wide means. Each is `None` when no row carries a value for it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SummaryStats {
    pub avg_watch_minutes_per_view: Option<f64>,
    pub avg_impressions_ctr_pct: Option<f64>,
    /// Mean of the rounded per-video CPM, truncated toward zero.
    pub avg_cpm: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopViewsRow {
    pub title: String,
    pub views: f64,
    pub avg_watch_minutes_per_view: Option<f64>,
    pub cpm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopSubscribersRow {
    pub title: String,
    pub views: f64,
    pub subscribers_gained: f64,
    pub subscriber_conversion_pct: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCpmRow {
    pub title: String,
    pub views: f64,
    pub estimated_revenue: f64,
    pub cpm: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopCtrRow {
    pub title: String,
    pub impressions_ctr_pct: f64,
    pub views: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LengthBucketRow {
    pub label: &'static str,
    pub videos: usize,
    /// Rounded half-to-even; `None` for an empty bucket.
    pub mean_views: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WatchBucketRow {
    pub label: &'static str,
    pub videos: usize,
    pub videos_display: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TopDayRow {
    pub date: Option<NaiveDate>,
    pub views: Option<f64>,
    pub views_display: String,
}

/// Everything one run hands to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub video_stats: LoadStats,
    pub daily_stats: LoadStats,
    pub videos: Vec<DerivedVideo>,
    pub summary: SummaryStats,
    pub top_by_views: Vec<TopViewsRow>,
    pub top_by_subscribers: Vec<TopSubscribersRow>,
    pub top_by_cpm: Vec<TopCpmRow>,
    pub top_by_ctr: Vec<TopCtrRow>,
    pub length_buckets: Vec<LengthBucketRow>,
    pub watch_time_distribution: Vec<WatchBucketRow>,
    pub top_days: Vec<TopDayRow>,
}

impl AnalysisReport {
    /// True when no video survived normalization.
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }
}
