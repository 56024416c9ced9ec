/// Half-open interval `[lower, upper)`; `upper == None` means unbounded above.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub lower: f64,
    pub upper: Option<f64>,
    pub label: &'static str,
}

impl Bucket {
    const fn new(lower: f64, upper: Option<f64>, label: &'static str) -> Self {
        Self {
            lower,
            upper,
            label,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && self.upper.map_or(true, |upper| value < upper)
    }
}

/// Video length in minutes.
pub const LENGTH_BUCKETS: [Bucket; 6] = [
    Bucket::new(0.0, Some(3.0), "0-3min"),
    Bucket::new(3.0, Some(6.0), "3-6min"),
    Bucket::new(6.0, Some(10.0), "6-10min"),
    Bucket::new(10.0, Some(20.0), "10-20min"),
    Bucket::new(20.0, Some(60.0), "20-60min"),
    Bucket::new(60.0, None, "60min+"),
];

/// Average watch minutes per view.
pub const WATCH_BUCKETS: [Bucket; 8] = [
    Bucket::new(0.0, Some(1.0), "0-1min"),
    Bucket::new(1.0, Some(2.0), "1-2min"),
    Bucket::new(2.0, Some(3.0), "2-3min"),
    Bucket::new(3.0, Some(4.0), "3-4min"),
    Bucket::new(4.0, Some(5.0), "4-5min"),
    Bucket::new(5.0, Some(10.0), "5-10min"),
    Bucket::new(10.0, Some(20.0), "10-20min"),
    Bucket::new(20.0, None, "20min+"),
];

/// Index of the bucket holding `value`, or `None` when it falls below the first edge.
pub fn bucket_index(buckets: &[Bucket], value: f64) -> Option<usize> {
    buckets.iter().position(|bucket| bucket.contains(value))
}
