use std::cmp::Ordering;

use chrono::{DateTime, NaiveDateTime};
use polars::prelude::*;

use crate::buckets::{bucket_index, LENGTH_BUCKETS, WATCH_BUCKETS};
use crate::format::{count_with_separators, with_separators};
use crate::report::{
    DailyTotal, DerivedVideo, LengthBucketRow, SummaryStats, TopCpmRow, TopCtrRow, TopDayRow,
    TopSubscribersRow, TopViewsRow, WatchBucketRow,
};

pub const TOP_N: usize = 10;

fn naive_from_micros(micros: i64) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_micros(micros).map(|dt| dt.naive_utc())
}

/// Materializes the derived video frame into typed rows, preserving frame order.
pub fn collect_videos(df: &DataFrame) -> Result<Vec<DerivedVideo>, PolarsError> {
    let title = df.column("title")?.str()?;
    let views = df.column("views")?.f64()?;
    let watch_hours = df.column("watch_time_hours")?.f64()?;
    let revenue = df.column("estimated_revenue")?.f64()?;
    let impressions = df.column("impressions")?.f64()?;
    let ctr = df.column("impressions_ctr_pct")?.f64()?;
    let subscribers = df.column("subscribers_gained")?.f64()?;
    let published_at = df.column("published_at")?.datetime()?;
    let duration_s = df.column("duration_s")?.f64()?;
    let watch_minutes = df.column("watch_minutes")?.f64()?;
    let avg_watch = df.column("avg_watch_minutes_per_view")?.f64()?;
    let cpm = df.column("cpm")?.f64()?;
    let conversion = df.column("subscriber_conversion_pct")?.f64()?;
    let weekday = df.column("publish_weekday")?.str()?;
    let duration_minutes = df.column("duration_minutes")?.f64()?;

    // Required numeric columns are non-null after normalization.
    let videos: Vec<DerivedVideo> = (0..df.height())
        .map(|idx| DerivedVideo {
            title: title.get(idx).unwrap_or_default().to_string(),
            views: views.get(idx).unwrap_or_default(),
            watch_time_hours: watch_hours.get(idx).unwrap_or_default(),
            estimated_revenue: revenue.get(idx).unwrap_or_default(),
            impressions: impressions.get(idx).unwrap_or_default(),
            impressions_ctr_pct: ctr.get(idx).unwrap_or_default(),
            subscribers_gained: subscribers.get(idx).unwrap_or_default(),
            published_at: published_at.get(idx).and_then(naive_from_micros),
            duration_s: duration_s.get(idx),
            watch_minutes: watch_minutes.get(idx).unwrap_or_default(),
            avg_watch_minutes_per_view: avg_watch.get(idx),
            cpm: cpm.get(idx),
            subscriber_conversion_pct: conversion.get(idx),
            publish_weekday: weekday.get(idx).map(str::to_string),
            duration_minutes: duration_minutes.get(idx),
        })
        .collect();

    Ok(videos)
}

pub fn collect_days(df: &DataFrame) -> Result<Vec<DailyTotal>, PolarsError> {
    let date = df.column("date")?.datetime()?;
    let views = df.column("views")?.f64()?;

    Ok((0..df.height())
        .map(|idx| DailyTotal {
            date: date.get(idx).and_then(naive_from_micros),
            views: views.get(idx),
        })
        .collect())
}

fn mean<I: IntoIterator<Item = f64>>(values: I) -> Option<f64> {
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    (count > 0).then(|| sum / count as f64)
}

pub fn summarize(videos: &[DerivedVideo]) -> SummaryStats {
    SummaryStats {
        avg_watch_minutes_per_view: mean(
            videos.iter().filter_map(|v| v.avg_watch_minutes_per_view),
        ),
        avg_impressions_ctr_pct: mean(videos.iter().map(|v| v.impressions_ctr_pct)),
        avg_cpm: mean(videos.iter().filter_map(|v| v.cpm)).map(|avg| avg.trunc() as i64),
    }
}

/// Descending by key with nulls last; equal keys keep input order.
fn compare_descending(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn rank_descending<T, F>(items: &[T], limit: usize, key: F) -> Vec<&T>
where
    F: Fn(&T) -> Option<f64>,
{
    let mut ranked: Vec<&T> = items.iter().collect();
    ranked.sort_by(|a, b| compare_descending(key(*a), key(*b)));
    ranked.truncate(limit);
    ranked
}

pub fn top_by_views(videos: &[DerivedVideo]) -> Vec<TopViewsRow> {
    rank_descending(videos, TOP_N, |v| Some(v.views))
        .into_iter()
        .map(|v| TopViewsRow {
            title: v.title.clone(),
            views: v.views,
            avg_watch_minutes_per_view: v.avg_watch_minutes_per_view,
            cpm: v.cpm,
        })
        .collect()
}

pub fn top_by_subscribers(videos: &[DerivedVideo]) -> Vec<TopSubscribersRow> {
    rank_descending(videos, TOP_N, |v| Some(v.subscribers_gained))
        .into_iter()
        .map(|v| TopSubscribersRow {
            title: v.title.clone(),
            views: v.views,
            subscribers_gained: v.subscribers_gained,
            subscriber_conversion_pct: v.subscriber_conversion_pct,
        })
        .collect()
}

pub fn top_by_cpm(videos: &[DerivedVideo]) -> Vec<TopCpmRow> {
    rank_descending(videos, TOP_N, |v| v.cpm)
        .into_iter()
        .map(|v| TopCpmRow {
            title: v.title.clone(),
            views: v.views,
            estimated_revenue: v.estimated_revenue,
            cpm: v.cpm,
        })
        .collect()
}

pub fn top_by_ctr(videos: &[DerivedVideo]) -> Vec<TopCtrRow> {
    rank_descending(videos, TOP_N, |v| Some(v.impressions_ctr_pct))
        .into_iter()
        .map(|v| TopCtrRow {
            title: v.title.clone(),
            impressions_ctr_pct: v.impressions_ctr_pct,
            views: v.views,
        })
        .collect()
}

/// Mean views per length bucket. Videos without a duration sit in no bucket.
pub fn length_buckets(videos: &[DerivedVideo]) -> Vec<LengthBucketRow> {
    let mut sums = [0.0f64; LENGTH_BUCKETS.len()];
    let mut counts = [0usize; LENGTH_BUCKETS.len()];

    for video in videos {
        let Some(minutes) = video.duration_minutes else {
            continue;
        };
        if let Some(idx) = bucket_index(&LENGTH_BUCKETS, minutes) {
            sums[idx] += video.views;
            counts[idx] += 1;
        }
    }

    LENGTH_BUCKETS
        .iter()
        .enumerate()
        .map(|(idx, bucket)| LengthBucketRow {
            label: bucket.label,
            videos: counts[idx],
            mean_views: (counts[idx] > 0)
                .then(|| (sums[idx] / counts[idx] as f64).round_ties_even() as i64),
        })
        .collect()
}

/// Video counts per average-watch bucket; every bucket is emitted, empty ones as zero.
pub fn watch_time_distribution(videos: &[DerivedVideo]) -> Vec<WatchBucketRow> {
    let mut counts = [0usize; WATCH_BUCKETS.len()];

    for minutes in videos.iter().filter_map(|v| v.avg_watch_minutes_per_view) {
        if let Some(idx) = bucket_index(&WATCH_BUCKETS, minutes) {
            counts[idx] += 1;
        }
    }

    WATCH_BUCKETS
        .iter()
        .zip(counts)
        .map(|(bucket, count)| WatchBucketRow {
            label: bucket.label,
            videos: count,
            videos_display: count_with_separators(count),
        })
        .collect()
}

pub fn top_days(days: &[DailyTotal]) -> Vec<TopDayRow> {
    rank_descending(days, TOP_N, |day| day.views)
        .into_iter()
        .map(|day| TopDayRow {
            date: day.date.map(|dt| dt.date()),
            views: day.views,
            views_display: day
                .views
                .map(|views| with_separators(views, 1))
                .unwrap_or_default(),
        })
        .collect()
}
