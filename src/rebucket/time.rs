//! Fold raw per-timestamp count vectors into a planned time layout.

use serde::Serialize;
use tracing::debug;

use crate::plan::time::TimeBucketResult;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct TimeRebucketed {
    /// Start of every planned bucket, milliseconds.
    pub bucketed_timestamps: Vec<i64>,
    /// Elementwise sums; every row is as wide as the widest in-window input.
    pub bucketed_counts: Vec<Vec<f64>>,
}

/// Sum `counts[t]` into the bucket holding `timestamps[t]`.
///
/// Samples before `start_ms` or at/after the end of the planned window are
/// dropped without error. Pairs past the shorter of the two slices are
/// ignored.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn rebucket_time_data(
    timestamps: &[i64],
    counts: &[Vec<f64>],
    result: &TimeBucketResult,
    start_ms: i64,
) -> TimeRebucketed {
    let n = result.number_of_buckets;
    let interval = i64::try_from(result.interval_ms.max(1)).unwrap_or(i64::MAX);

    let bucketed_timestamps = (0..n).map(|i| result.bucket_start(start_ms, i)).collect();

    let bucket_of = |ts: i64| -> Option<usize> {
        let index = ts.saturating_sub(start_ms).div_euclid(interval);
        (index >= 0 && (index as u64) < n as u64).then_some(index as usize)
    };

    // pre-size every accumulator once so rows never grow mid-fold
    let width = timestamps
        .iter()
        .zip(counts)
        .filter(|(ts, _)| bucket_of(**ts).is_some())
        .map(|(_, row)| row.len())
        .max()
        .unwrap_or(0);
    let mut bucketed_counts = vec![vec![0.0; width]; n];

    let mut dropped = 0usize;
    for (&ts, row) in timestamps.iter().zip(counts) {
        let Some(index) = bucket_of(ts) else {
            dropped += 1;
            continue;
        };
        for (acc, c) in bucketed_counts[index].iter_mut().zip(row) {
            *acc += c;
        }
    }

    debug!(
        samples = timestamps.len().min(counts.len()),
        dropped, buckets = n, width, "rebucketed time data"
    );

    TimeRebucketed {
        bucketed_timestamps,
        bucketed_counts,
    }
}
