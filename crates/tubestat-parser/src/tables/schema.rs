pub const VIDEO_TABLE: &str = "video";
pub const CHART_TABLE: &str = "chart";
pub const DAILY_TABLE: &str = "daily";

/// First-cell values that mark the aggregate row some exports put above the data.
pub const TOTAL_ROW_SENTINELS: [&str; 2] = ["합계", "Total"];

pub const VIDEO_COLUMNS: [&str; 9] = [
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

pub const DAILY_COLUMNS: [&str; 2] = ["date", "views"];

/// A column the loader locates in an export header by alias.
pub trait CanonicalColumn: Copy {
    fn canonical_name(&self) -> &'static str;
    fn aliases(&self) -> &'static [&'static str];

    /// Aliases that only need to match the start of the header, for headers that
    /// carry a variable suffix such as the revenue currency.
    fn prefix_aliases(&self) -> &'static [&'static str] {
        &[]
    }

    fn matches(&self, header: &str) -> bool {
        let normalized = header.trim().to_lowercase();
        normalized == self.canonical_name()
            || self
                .aliases()
                .iter()
                .any(|alias| normalized == alias.to_lowercase())
            || self
                .prefix_aliases()
                .iter()
                .any(|prefix| normalized.starts_with(&prefix.to_lowercase()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VideoColumn {
    Title,
    Views,
    WatchTimeHours,
    EstimatedRevenue,
    Impressions,
    ImpressionsCtr,
    SubscribersGained,
    PublishedAt,
    Duration,
}

impl VideoColumn {
    /// Columns whose cells must all coerce to numbers for a row to survive.
    pub const REQUIRED_NUMERIC: [VideoColumn; 6] = [
        VideoColumn::Views,
        VideoColumn::WatchTimeHours,
        VideoColumn::EstimatedRevenue,
        VideoColumn::Impressions,
        VideoColumn::ImpressionsCtr,
        VideoColumn::SubscribersGained,
    ];
}

impl CanonicalColumn for VideoColumn {
    fn canonical_name(&self) -> &'static str {
        match self {
            VideoColumn::Title => "title",
            VideoColumn::Views => "views",
            VideoColumn::WatchTimeHours => "watch_time_hours",
            VideoColumn::EstimatedRevenue => "estimated_revenue",
            VideoColumn::Impressions => "impressions",
            VideoColumn::ImpressionsCtr => "impressions_ctr_pct",
            VideoColumn::SubscribersGained => "subscribers_gained",
            VideoColumn::PublishedAt => "published_at",
            VideoColumn::Duration => "duration_s",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            VideoColumn::Title => &["동영상 제목", "Video title"],
            VideoColumn::Views => &["조회수", "Views"],
            VideoColumn::WatchTimeHours => &["시청 시간(단위: 시간)", "Watch time (hours)"],
            VideoColumn::EstimatedRevenue => &[],
            VideoColumn::Impressions => &["노출수", "Impressions"],
            VideoColumn::ImpressionsCtr => &[
                "노출 클릭률 (%)",
                "Impressions click-through rate (%)",
            ],
            VideoColumn::SubscribersGained => &["구독자", "Subscribers", "Subscribers gained"],
            VideoColumn::PublishedAt => &["동영상 게시 시간", "Video publish time"],
            VideoColumn::Duration => &["길이", "Duration"],
        }
    }

    fn prefix_aliases(&self) -> &'static [&'static str] {
        match self {
            VideoColumn::EstimatedRevenue => &["예상 수익", "Estimated revenue"],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DailyColumn {
    Date,
    Views,
}

impl CanonicalColumn for DailyColumn {
    fn canonical_name(&self) -> &'static str {
        match self {
            DailyColumn::Date => "date",
            DailyColumn::Views => "views",
        }
    }

    fn aliases(&self) -> &'static [&'static str] {
        match self {
            DailyColumn::Date => &["날짜"],
            DailyColumn::Views => &["조회수"],
        }
    }
}
