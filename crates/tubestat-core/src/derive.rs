use chrono::{DateTime, Datelike, Weekday};
use polars::prelude::*;

const MINUTES_PER_HOUR: f64 = 60.0;
const SECONDS_PER_MINUTE: f64 = 60.0;
const CPM_SCALE: f64 = 1000.0;

/// Names of the appended columns, in the order `derive_video_metrics` adds them.
pub const DERIVED_COLUMNS: [&str; 6] = [
    "watch_minutes",
    "avg_watch_minutes_per_view",
    "cpm",
    "subscriber_conversion_pct",
    "publish_weekday",
    "duration_minutes",
];

/// Appends the per-video derived columns. Ratios over views are null when views is
/// zero; CPM is rounded half-to-even here, before anything aggregates it.
pub fn derive_video_metrics(df: &DataFrame) -> Result<DataFrame, PolarsError> {
    let len = df.height();

    let views = df.column("views")?.f64()?;
    let watch_hours = df.column("watch_time_hours")?.f64()?;
    let revenue = df.column("estimated_revenue")?.f64()?;
    let subscribers = df.column("subscribers_gained")?.f64()?;
    let published_at = df.column("published_at")?.datetime()?;
    let duration_s = df.column("duration_s")?.f64()?;

    let mut watch_minutes = Vec::with_capacity(len);
    let mut avg_watch = Vec::with_capacity(len);
    let mut cpm_values = Vec::with_capacity(len);
    let mut conversion = Vec::with_capacity(len);
    let mut weekday: Vec<Option<&'static str>> = Vec::with_capacity(len);
    let mut duration_minutes = Vec::with_capacity(len);

    for idx in 0..len {
        let views_val = views.get(idx);
        let minutes = watch_hours.get(idx).map(|hours| hours * MINUTES_PER_HOUR);

        watch_minutes.push(minutes);
        avg_watch.push(per_view(minutes, views_val));
        cpm_values.push(cpm(revenue.get(idx), views_val));
        conversion.push(per_view(subscribers.get(idx), views_val).map(|ratio| ratio * 100.0));
        weekday.push(published_at.get(idx).and_then(weekday_from_micros));
        duration_minutes.push(duration_s.get(idx).map(|secs| secs / SECONDS_PER_MINUTE));
    }

    let [watch_col, avg_col, cpm_col, conversion_col, weekday_col, duration_col] =
        DERIVED_COLUMNS;

    let mut output = df.clone();
    output.hstack_mut(&mut [
        Series::new(watch_col.into(), watch_minutes).into(),
        Series::new(avg_col.into(), avg_watch).into(),
        Series::new(cpm_col.into(), cpm_values).into(),
        Series::new(conversion_col.into(), conversion).into(),
        Series::new(weekday_col.into(), weekday).into(),
        Series::new(duration_col.into(), duration_minutes).into(),
    ])?;

    Ok(output)
}

fn per_view(numerator: Option<f64>, views: Option<f64>) -> Option<f64> {
    match (numerator, views) {
        (Some(value), Some(views)) if views != 0.0 => Some(value / views),
        _ => None,
    }
}

/// Revenue per thousand views, rounded half-to-even to a whole currency unit.
pub fn cpm(revenue: Option<f64>, views: Option<f64>) -> Option<f64> {
    per_view(revenue, views).map(|per_view| (per_view * CPM_SCALE).round_ties_even())
}

fn weekday_from_micros(micros: i64) -> Option<&'static str> {
    DateTime::from_timestamp_micros(micros).map(|dt| weekday_name(dt.weekday()))
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}
