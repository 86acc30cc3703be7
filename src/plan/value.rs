//! Value-axis planning: linear nice buckets, log-decade buckets, or a
//! caller-supplied layout.

use serde::Serialize;
use tracing::{debug, trace};

use crate::core::{
    config::BucketConfig,
    constants::{LOG_SAFE_MIN, LOG_SUBDIVISIONS_PER_DECADE},
    interval::round_to_nice_interval,
    range::ValueRange,
};

/// How the buckets of a [`ValueBucketResult`] were laid out.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub enum ValueScale {
    /// Uniform width; `bucket_size` is that width in value units.
    Linear,
    /// Uniform width in log space; `bucket_size` is the width in decades.
    Log,
    /// Caller-supplied ranges; `bucket_size` is `0`.
    Explicit,
}

/// Bucket scheme for the value axis.
///
/// Buckets are contiguous and ascending; only the last one may extend past
/// the requested maximum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValueBucketResult {
    pub scale: ValueScale,
    pub bucket_size: f64,
    pub number_of_buckets: usize,
    pub cell_height: f64,
    pub buckets: Vec<ValueRange>,
}

impl ValueBucketResult {
    /// Lowest start / highest end of the layout, `None` when it has no buckets.
    #[must_use]
    pub fn extent(&self) -> Option<ValueRange> {
        Some(ValueRange::new(
            self.buckets.first()?.start,
            self.buckets.last()?.end,
        ))
    }

    fn single(min: f64, max: f64, available_height_px: f64) -> Self {
        let start = if min.is_finite() { min } else { 0.0 };
        let end = if max.is_finite() { max } else { 0.0 };
        Self {
            scale: ValueScale::Linear,
            bucket_size: end - start,
            number_of_buckets: 1,
            cell_height: available_height_px,
            buckets: vec![ValueRange::new(start, end)],
        }
    }
}

/// Plan buckets covering `[min, max]` within `available_height_px`.
///
/// An empty or inverted range, non-finite bounds, or a budget that fits no
/// cell all produce one bucket spanning the (finite parts of the) input.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn calculate_value_buckets(
    min: f64,
    max: f64,
    available_height_px: f64,
    config: &BucketConfig,
    use_log_scale: bool,
) -> ValueBucketResult {
    let value_range = max - min;
    let effective_max_buckets = config.effective_max_buckets(available_height_px);

    if !(min.is_finite() && max.is_finite() && value_range.is_finite())
        || value_range <= 0.0
        || effective_max_buckets == 0
    {
        trace!(min, max, effective_max_buckets, "degenerate value range");
        return ValueBucketResult::single(min, max, available_height_px);
    }

    if use_log_scale {
        return calculate_log_value_buckets(min, max, available_height_px, effective_max_buckets);
    }

    let raw_interval = value_range / effective_max_buckets as f64;
    let bucket_size = round_to_nice_interval(raw_interval);
    let first = (min / bucket_size).floor() * bucket_size;
    let edge = |i: usize| first + i as f64 * bucket_size;

    // bucket_size >= range / budget, so at most budget + 2 buckets are needed
    let walk_limit = effective_max_buckets + 2;
    let mut buckets = Vec::with_capacity(walk_limit);
    while buckets.len() < walk_limit {
        let i = buckets.len();
        let start = edge(i);
        if start >= max {
            break;
        }
        buckets.push(ValueRange::new(start, edge(i + 1)));
    }

    let number_of_buckets = buckets.len();
    debug!(
        bucket_size,
        number_of_buckets, effective_max_buckets, "planned linear value buckets"
    );

    ValueBucketResult {
        scale: ValueScale::Linear,
        bucket_size,
        number_of_buckets,
        cell_height: available_height_px / number_of_buckets as f64,
        buckets,
    }
}

/// Ten buckets per decade between `max(0.01, min)` and `max` (at least one
/// decade), capped at `max_buckets`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn calculate_log_value_buckets(
    min: f64,
    max: f64,
    available_height_px: f64,
    max_buckets: usize,
) -> ValueBucketResult {
    let safe_min = LOG_SAFE_MIN.max(min);
    let safe_max = (safe_min * 10.0).max(max);
    let log_min = safe_min.log10();
    let log_range = safe_max.log10() - log_min;

    let subdivisions = (log_range * LOG_SUBDIVISIONS_PER_DECADE).ceil();
    let subdivisions = if subdivisions.is_finite() && subdivisions >= 1.0 {
        subdivisions as usize
    } else {
        1
    };
    let number_of_buckets = max_buckets.min(subdivisions).max(1);

    let step = log_range / number_of_buckets as f64;
    let edge = |i: usize| 10f64.powf(log_min + i as f64 * step);
    let buckets: Vec<ValueRange> = (0..number_of_buckets)
        .map(|i| ValueRange::new(edge(i), edge(i + 1)))
        .collect();

    debug!(
        safe_min,
        safe_max, number_of_buckets, "planned log value buckets"
    );

    ValueBucketResult {
        scale: ValueScale::Log,
        bucket_size: step,
        number_of_buckets,
        cell_height: available_height_px / number_of_buckets as f64,
        buckets,
    }
}

/// Wrap caller-chosen ranges without any planning.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn create_explicit_value_buckets(
    buckets: &[ValueRange],
    available_height_px: f64,
) -> ValueBucketResult {
    let number_of_buckets = buckets.len();
    ValueBucketResult {
        scale: ValueScale::Explicit,
        bucket_size: 0.0,
        number_of_buckets,
        cell_height: available_height_px / number_of_buckets.max(1) as f64,
        buckets: buckets.to_vec(),
    }
}
