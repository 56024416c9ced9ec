use comfy_table::Table;
use tubestat_core::format::with_separators;
use tubestat_core::AnalysisReport;

fn number(value: f64, decimals: usize) -> String {
    with_separators(value, decimals)
}

fn optional(value: Option<f64>, decimals: usize) -> String {
    value.map_or_else(|| "-".to_string(), |v| number(v, decimals))
}

fn section(out: &mut String, title: &str, table: Table) {
    out.push_str(title);
    out.push('\n');
    out.push_str(&table.to_string());
    out.push_str("\n\n");
}

/// Renders the dashboard text. With no usable video rows, a notice replaces the video
/// sections and the daily section is still shown.
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();

    if report.is_empty() {
        out.push_str(&format!(
            "No usable video rows ({} read, {} dropped for unparseable numbers).\n",
            report.video_stats.rows_read, report.video_stats.rows_dropped
        ));
        if !report.top_days.is_empty() {
            out.push('\n');
            render_top_days(&mut out, report);
        }
        return out;
    }

    let summary = &report.summary;
    out.push_str(&format!(
        "Average watch time: {} min, average CTR: {}%, average CPM: {}\n\n",
        optional(summary.avg_watch_minutes_per_view, 2),
        optional(summary.avg_impressions_ctr_pct, 2),
        summary
            .avg_cpm
            .map_or_else(|| "-".to_string(), |cpm| number(cpm as f64, 0)),
    ));

    let mut table = Table::new();
    table.set_header(vec!["Title", "Views", "Avg watch (min/view)", "CPM"]);
    for row in &report.top_by_views {
        table.add_row(vec![
            row.title.clone(),
            number(row.views, 0),
            optional(row.avg_watch_minutes_per_view, 2),
            optional(row.cpm, 0),
        ]);
    }
    section(&mut out, "Top 10 by views", table);

    let mut table = Table::new();
    table.set_header(vec!["Title", "Views", "Subscribers", "Conversion (%)"]);
    for row in &report.top_by_subscribers {
        table.add_row(vec![
            row.title.clone(),
            number(row.views, 0),
            number(row.subscribers_gained, 0),
            optional(row.subscriber_conversion_pct, 2),
        ]);
    }
    section(&mut out, "Top 10 by subscribers gained", table);

    let mut table = Table::new();
    table.set_header(vec!["Title", "Views", "Estimated revenue", "CPM"]);
    for row in &report.top_by_cpm {
        table.add_row(vec![
            row.title.clone(),
            number(row.views, 0),
            number(row.estimated_revenue, 2),
            optional(row.cpm, 0),
        ]);
    }
    section(&mut out, "Top 10 by CPM", table);

    let mut table = Table::new();
    table.set_header(vec!["Title", "CTR (%)", "Views"]);
    for row in &report.top_by_ctr {
        table.add_row(vec![
            row.title.clone(),
            number(row.impressions_ctr_pct, 2),
            number(row.views, 0),
        ]);
    }
    section(&mut out, "Top 10 by impressions CTR", table);

    let mut table = Table::new();
    table.set_header(vec!["Length", "Videos", "Mean views"]);
    for row in &report.length_buckets {
        table.add_row(vec![
            row.label.to_string(),
            row.videos.to_string(),
            row.mean_views
                .map_or_else(|| "-".to_string(), |mean| number(mean as f64, 0)),
        ]);
    }
    section(&mut out, "Mean views by video length", table);

    let mut table = Table::new();
    table.set_header(vec!["Avg watch per view", "Videos"]);
    for row in &report.watch_time_distribution {
        table.add_row(vec![row.label.to_string(), row.videos_display.clone()]);
    }
    section(&mut out, "Videos by average watch time", table);

    render_top_days(&mut out, report);

    out
}

fn render_top_days(out: &mut String, report: &AnalysisReport) {
    let mut table = Table::new();
    table.set_header(vec!["Date", "Views"]);
    for row in &report.top_days {
        table.add_row(vec![
            row.date
                .map_or_else(|| "-".to_string(), |date| date.to_string()),
            row.views_display.clone(),
        ]);
    }
    section(out, "Top 10 days by views", table);
}

#[cfg(test)]
mod tests {
    use tubestat_core::{analyze, RawTable};

    use super::render_report;

    const HEADER: &str =
        "동영상 제목,조회수,시청 시간(단위: 시간),예상 수익 (KRW),노출수,노출 클릭률 (%),구독자,동영상 게시 시간,길이";

    const VIDEOS: &str = "\
동영상 제목,조회수,시청 시간(단위: 시간),예상 수익 (KRW),노출수,노출 클릭률 (%),구독자,동영상 게시 시간,길이
합계,3000,50,6000,40000,5,12,,
브이로그,2000,40,4000,25000,6,10,2024-03-04,480
리뷰,1000,10,2000,15000,4,2,2024-03-05,200
";

    const DAILY: &str = "날짜,조회수\n2024-03-04,1234.5\n2024-03-05,99\n";

    fn table(name: &'static str, content: &str) -> RawTable {
        RawTable::from_csv_str(name, content).unwrap()
    }

    #[test]
    fn renders_summary_and_every_section() {
        let report = analyze(
            &table("video", VIDEOS),
            &RawTable::default(),
            &table("daily", DAILY),
        )
        .unwrap();

        let rendered = render_report(&report);
        assert!(rendered.starts_with("Average watch time: 0.90 min, average CTR: 5.00%"));
        assert!(rendered.contains("average CPM: 2,000"));
        for title in [
            "Top 10 by views",
            "Top 10 by subscribers gained",
            "Top 10 by CPM",
            "Top 10 by impressions CTR",
            "Mean views by video length",
            "Videos by average watch time",
            "Top 10 days by views",
        ] {
            assert!(rendered.contains(title), "missing section {title}");
        }
        assert!(rendered.contains("1,234.5"));
    }

    #[test]
    fn empty_report_renders_a_notice() {
        let report = analyze(
            &table("video", HEADER),
            &RawTable::default(),
            &table("daily", "날짜,조회수\n"),
        )
        .unwrap();

        let rendered = render_report(&report);
        assert!(rendered.starts_with("No usable video rows (0 read"));
        assert!(!rendered.contains("Top 10 days by views"));
    }

    #[test]
    fn daily_section_survives_an_empty_video_table() {
        let report = analyze(
            &table("video", HEADER),
            &RawTable::default(),
            &table("daily", "date,views\n2024-03-01,5000\n"),
        )
        .unwrap();

        let rendered = render_report(&report);
        assert!(rendered.starts_with("No usable video rows (0 read, 0 dropped"));
        assert!(rendered.contains("Top 10 days by views"));
        assert!(rendered.contains("2024-03-01"));
        assert!(rendered.contains("5,000.0"));
        assert!(!rendered.contains("Top 10 by views\n"));
    }
}
