//! Time-axis planning: pick a nice interval that fits the pixel budget.

use serde::Serialize;
use tracing::debug;

use crate::core::{
    config::BucketConfig,
    interval::{format_interval_label, round_to_nice_interval},
};

/// Bucket scheme for the time axis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeBucketResult {
    pub interval_ms: u64,
    pub number_of_buckets: usize,
    pub cell_width: f64,
    pub interval_label: String,
}

impl TimeBucketResult {
    /// Start of bucket `index`, relative to `start_ms`.
    #[inline]
    #[must_use]
    pub fn bucket_start(&self, start_ms: i64, index: usize) -> i64 {
        let interval = i64::try_from(self.interval_ms).unwrap_or(i64::MAX);
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        start_ms.saturating_add(interval.saturating_mul(index))
    }

    /// End of the planned window (exclusive).
    #[inline]
    #[must_use]
    pub fn window_end(&self, start_ms: i64) -> i64 {
        self.bucket_start(start_ms, self.number_of_buckets)
    }
}

/// Split `[start_ms, end_ms]` into nice-interval buckets that fit
/// `available_width_px` under `config`.
///
/// A budget that fits no cell (viewport narrower than `min_cell_size`) and an
/// empty or inverted range both degrade to a single bucket.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn calculate_time_buckets(
    start_ms: i64,
    end_ms: i64,
    available_width_px: f64,
    config: &BucketConfig,
) -> TimeBucketResult {
    let time_range = end_ms.saturating_sub(start_ms) as f64;
    let effective_max_buckets = config.effective_max_buckets(available_width_px).max(1);

    let raw_interval = time_range / effective_max_buckets as f64;
    // ladder values are integral from 1 upwards
    let interval = round_to_nice_interval(raw_interval).max(1.0);
    let interval_ms = interval as u64;

    let number_of_buckets = (time_range / interval).ceil();
    let number_of_buckets = if number_of_buckets >= 1.0 {
        number_of_buckets as usize
    } else {
        1
    };

    let cell_width = available_width_px / number_of_buckets as f64;
    let interval_label = format_interval_label(interval);

    debug!(
        time_range,
        effective_max_buckets,
        interval_ms,
        number_of_buckets,
        "planned time buckets"
    );

    TimeBucketResult {
        interval_ms,
        number_of_buckets,
        cell_width,
        interval_label,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_minute_over_a_thousand_pixels() {
        let r = calculate_time_buckets(0, 60_000, 1000.0, &BucketConfig::new(20.0, 50));
        assert_eq!(r.interval_ms, 2000);
        assert_eq!(r.number_of_buckets, 30);
        assert!((r.cell_width - 1000.0 / 30.0).abs() < 1e-9);
        assert_eq!(r.interval_label, "2s");
    }

    #[test]
    fn bucket_cap_wins_over_cell_size() {
        let r = calculate_time_buckets(0, 3_600_000, 2000.0, &BucketConfig::new(20.0, 5));
        assert_eq!(r.interval_ms, 1_000_000);
        assert_eq!(r.number_of_buckets, 4);
        assert_eq!(r.interval_label, "17min");
    }

    #[test]
    fn narrow_viewport_clamps_to_one_bucket_budget() {
        let r = calculate_time_buckets(0, 10_000, 10.0, &BucketConfig::new(20.0, 50));
        assert_eq!(r.interval_ms, 10_000);
        assert_eq!(r.number_of_buckets, 1);
        assert!((r.cell_width - 10.0).abs() < 1e-12);
    }

    #[test]
    fn empty_and_tiny_ranges_keep_one_bucket() {
        let cfg = BucketConfig::new(20.0, 50);
        let r = calculate_time_buckets(5_000, 5_000, 1000.0, &cfg);
        assert_eq!((r.interval_ms, r.number_of_buckets), (1, 1));
        assert!((r.cell_width - 1000.0).abs() < 1e-12);

        let r = calculate_time_buckets(9_000, 1_000, 1000.0, &cfg);
        assert_eq!(r.number_of_buckets, 1);

        // sub-millisecond raw interval is lifted to 1 ms
        let r = calculate_time_buckets(0, 10, 1000.0, &cfg);
        assert_eq!((r.interval_ms, r.number_of_buckets), (1, 10));
    }

    #[test]
    fn windows_line_up_with_intervals() {
        let r = calculate_time_buckets(1_000, 61_000, 1000.0, &BucketConfig::new(20.0, 50));
        assert_eq!(r.bucket_start(1_000, 3), 7_000);
        assert_eq!(r.window_end(1_000), 61_000);
    }

    #[test]
    fn widest_spans_saturate_instead_of_wrapping() {
        let start = i64::MIN / 2 - 10;
        // one-bucket budget: the whole span rounds up past i64::MAX
        let r = calculate_time_buckets(start, i64::MAX / 2 + 10, 10.0, &BucketConfig::new(20.0, 50));
        assert!(r.interval_ms > 9_223_372_036_854_775_807);
        assert_eq!(r.number_of_buckets, 1);
        assert_eq!(r.bucket_start(start, 0), start);
        assert!(r.bucket_start(start, 1) > start);
        assert_eq!(r.window_end(0), i64::MAX);
    }
}
