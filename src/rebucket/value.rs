//! Re-express aggregated histogram rows under a new value layout.
//!
//! Counts are spread by overlap geometry alone: an original bucket hands
//! each new bucket the fraction of its width the two share. This assumes
//! samples are uniformly spread inside an original bucket, so the result is
//! exact only when one layout refines or coarsens the other; skewed
//! within-bucket distributions are smoothed out.

use serde::Serialize;
use tracing::debug;

use crate::{core::range::ValueRange, plan::value::ValueBucketResult};

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct ValueRebucketed {
    /// One row per input row, one column per new bucket.
    pub bucketed_counts: Vec<Vec<f64>>,
    pub bucket_labels: Vec<String>,
}

/// `(new bucket index, share of the original count)` pairs.
type Distribution = Vec<(usize, f64)>;

/// Where one original bucket's count goes.
fn distribution(orig: &ValueRange, targets: &[ValueRange]) -> Distribution {
    let width = orig.width();

    if orig.is_degenerate() {
        let last = targets.len().saturating_sub(1);
        return targets
            .iter()
            .enumerate()
            .find(|(i, t)| {
                if *i == last {
                    t.contains_closed(orig.start)
                } else {
                    t.contains(orig.start)
                }
            })
            .map(|(i, _)| vec![(i, 1.0)])
            .unwrap_or_default();
    }
    // reversed or NaN-width ranges carry nothing
    if width.is_nan() || width <= 0.0 {
        return Vec::new();
    }

    targets
        .iter()
        .enumerate()
        .filter_map(|(i, t)| {
            let ratio = orig.overlap(t) / width;
            (ratio > 0.0).then_some((i, ratio))
        })
        .collect()
}

/// Redistribute `counts` (rows × `original.len()`) into `result.buckets`.
///
/// Cells missing from a short row count as `0`; cells beyond
/// `original.len()` are ignored.
#[must_use]
pub fn rebucket_value_data(
    original: &[ValueRange],
    counts: &[Vec<f64>],
    result: &ValueBucketResult,
) -> ValueRebucketed {
    let targets = &result.buckets;
    let plan: Vec<Distribution> = original
        .iter()
        .map(|orig| distribution(orig, targets))
        .collect();

    let bucketed_counts = counts
        .iter()
        .map(|row| {
            let mut out = vec![0.0; targets.len()];
            for (share, &count) in plan.iter().zip(row) {
                for &(i, ratio) in share {
                    out[i] += count * ratio;
                }
            }
            out
        })
        .collect();

    let bucket_labels = targets.iter().map(ValueRange::label).collect();

    debug!(
        rows = counts.len(),
        from = original.len(),
        to = targets.len(),
        "rebucketed value data"
    );

    ValueRebucketed {
        bucketed_counts,
        bucket_labels,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan::value::create_explicit_value_buckets;

    fn layout(edges: &[f64]) -> ValueBucketResult {
        let ranges = crate::core::range::ranges_from_bounds(edges);
        create_explicit_value_buckets(&ranges, 100.0)
    }

    #[test]
    fn wide_bucket_splits_evenly() {
        let out = rebucket_value_data(
            &[ValueRange::new(0.0, 20.0)],
            &[vec![20.0]],
            &layout(&[0.0, 10.0, 20.0]),
        );
        assert_eq!(out.bucketed_counts, vec![vec![10.0, 10.0]]);
        assert_eq!(out.bucket_labels, vec!["0-10", "10-20"]);
    }

    #[test]
    fn partial_overlap_is_area_weighted() {
        let out = rebucket_value_data(
            &[ValueRange::new(0.0, 4.0), ValueRange::new(4.0, 8.0)],
            &[vec![8.0, 4.0], vec![0.0, 1.0]],
            &layout(&[0.0, 1.0, 6.0, 10.0]),
        );
        let expected = [vec![2.0, 8.0, 2.0], vec![0.0, 0.5, 0.5]];
        for (row, want) in out.bucketed_counts.iter().zip(expected.iter()) {
            for (a, b) in row.iter().zip(want) {
                assert!((a - b).abs() < 1e-12, "{row:?} != {want:?}");
            }
        }
    }

    #[test]
    fn degenerate_buckets_land_whole() {
        let target = layout(&[0.0, 5.0, 10.0]);
        let out = rebucket_value_data(
            &[
                ValueRange::new(5.0, 5.0),
                ValueRange::new(10.0, 10.0),
                ValueRange::new(11.0, 11.0),
            ],
            &[vec![3.0, 2.0, 9.0]],
            &target,
        );
        // 5 opens the second bucket; 10 is kept by the closed last edge; 11 is lost
        assert_eq!(out.bucketed_counts, vec![vec![0.0, 5.0]]);
    }

    #[test]
    fn reversed_and_missing_cells_contribute_nothing() {
        let out = rebucket_value_data(
            &[ValueRange::new(4.0, 2.0), ValueRange::new(0.0, 10.0)],
            &[vec![5.0], vec![1.0, 10.0, 99.0]],
            &layout(&[0.0, 10.0]),
        );
        assert_eq!(out.bucketed_counts, vec![vec![0.0], vec![10.0]]);
    }
}
