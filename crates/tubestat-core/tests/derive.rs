use polars::prelude::*;
use tubestat_core::derive::{cpm, derive_video_metrics, DERIVED_COLUMNS};
use tubestat_parser::{RawTable, TableLoader, VideoTableLoader};

const HEADERS: [&str; 9] = [
    "title",
    "views",
    "watch_time_hours",
    "estimated_revenue",
    "impressions",
    "impressions_ctr_pct",
    "subscribers_gained",
    "published_at",
    "duration_s",
];

fn video_frame(rows: &[[&str; 9]]) -> DataFrame {
    let raw = RawTable::new(
        HEADERS.iter().map(|h| h.to_string()).collect(),
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    );
    VideoTableLoader.load(&raw).expect("video rows load").df
}

#[test]
fn zero_view_rows_keep_nulls_for_per_view_metrics() -> PolarsResult<()> {
    let df = video_frame(&[
        ["hit", "1000", "2", "5000", "40000", "4.5", "10", "2024-03-04", "360"],
        ["draft", "0", "0", "0", "0", "0", "0", "2024-03-05", "120"],
    ]);

    let derived = derive_video_metrics(&df)?;
    assert_eq!(derived.height(), 2);

    let watch_minutes = derived.column("watch_minutes")?.f64()?;
    let avg_watch = derived.column("avg_watch_minutes_per_view")?.f64()?;
    let cpm_col = derived.column("cpm")?.f64()?;
    let conversion = derived.column("subscriber_conversion_pct")?.f64()?;

    assert_eq!(watch_minutes.get(0), Some(120.0));
    assert!((avg_watch.get(0).unwrap() - 0.12).abs() < 1e-12);
    assert_eq!(cpm_col.get(0), Some(5000.0));
    assert!((conversion.get(0).unwrap() - 1.0).abs() < 1e-12);

    assert_eq!(watch_minutes.get(1), Some(0.0));
    assert_eq!(avg_watch.get(1), None);
    assert_eq!(cpm_col.get(1), None);
    assert_eq!(conversion.get(1), None);

    Ok(())
}

#[test]
fn derived_columns_are_appended_in_order() -> PolarsResult<()> {
    let df = video_frame(&[["a", "10", "1", "1", "10", "1", "1", "2024-03-04", "60"]]);
    let derived = derive_video_metrics(&df)?;

    let names: Vec<String> = derived
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    assert_eq!(&names[..df.width()], &HEADERS.map(str::to_string)[..]);
    assert_eq!(&names[df.width()..], &DERIVED_COLUMNS.map(str::to_string)[..]);

    Ok(())
}

#[test]
fn weekday_and_duration_follow_their_sources() -> PolarsResult<()> {
    let df = video_frame(&[
        ["monday", "10", "1", "1", "10", "1", "1", "2024-03-04 18:30:00", "90"],
        ["undated", "10", "1", "1", "10", "1", "1", "someday", "600"],
        ["sunday", "10", "1", "1", "10", "1", "1", "Mar 10, 2024", "unknown"],
    ]);

    let derived = derive_video_metrics(&df)?;
    let weekday = derived.column("publish_weekday")?.str()?;
    let minutes = derived.column("duration_minutes")?.f64()?;
    let cpm_col = derived.column("cpm")?.f64()?;

    assert_eq!(weekday.get(0), Some("Monday"));
    assert_eq!(weekday.get(1), None);
    assert_eq!(weekday.get(2), Some("Sunday"));

    assert_eq!(minutes.get(0), Some(1.5));
    assert_eq!(minutes.get(1), Some(10.0));
    assert_eq!(minutes.get(2), None);

    // An unparseable timestamp does not block the other derivations.
    assert_eq!(cpm_col.get(1), Some(100.0));

    Ok(())
}

#[test]
fn cpm_rounds_half_to_even() {
    assert_eq!(cpm(Some(2.5), Some(1000.0)), Some(2.0));
    assert_eq!(cpm(Some(3.5), Some(1000.0)), Some(4.0));
    assert_eq!(cpm(Some(0.5), Some(1000.0)), Some(0.0));
    assert_eq!(cpm(Some(7.0), Some(3000.0)), Some(2.0));
    assert_eq!(cpm(Some(7.0), Some(0.0)), None);
    assert_eq!(cpm(None, Some(10.0)), None);
}
