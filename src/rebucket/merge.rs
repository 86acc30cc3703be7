//! Combine series and narrow value columns before planning.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::{debug, warn};

use crate::core::{constants::BUCKET_EPSILON, data::HeatmapSeries, range::ValueRange};

/// Sum series sharing the first series' bucket bounds, timestamp by
/// timestamp. Series with other bounds are skipped.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn merge_series(series: &[HeatmapSeries]) -> Option<HeatmapSeries> {
    let first = series.first()?;
    if series.len() == 1 {
        return Some(first.clone());
    }

    let mut by_ts: BTreeMap<i64, Vec<f64>> = BTreeMap::new();
    let mut skipped = 0usize;
    for s in series {
        if s.bounds != first.bounds {
            skipped += 1;
            continue;
        }
        for (&ts, row) in s.timestamps.iter().zip(&s.counts) {
            let acc = by_ts.entry(ts).or_default();
            if acc.len() < row.len() {
                acc.resize(row.len(), 0.0);
            }
            for (a, c) in acc.iter_mut().zip(row) {
                *a += c;
            }
        }
    }
    if skipped > 0 {
        warn!(skipped, "series with mismatched bucket bounds left out of merge");
    }

    let (timestamps, counts) = by_ts.into_iter().unzip();
    Some(HeatmapSeries {
        bounds: first.bounds.clone(),
        timestamps,
        counts,
    })
}

/// Value columns narrowed to the span that actually holds counts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Focused {
    pub ranges: Vec<ValueRange>,
    pub counts: Vec<Vec<f64>>,
    pub min_y: f64,
    pub max_y: f64,
}

/// Trim leading and trailing columns whose totals are zero.
///
/// When every column is empty all of them are kept. `min_y` / `max_y` are
/// `0` when there are no ranges at all.
#[must_use]
pub fn focus_columns(ranges: &[ValueRange], counts: &[Vec<f64>]) -> Focused {
    let column_total =
        |col: usize| -> f64 { counts.iter().filter_map(|row| row.get(col)).sum() };
    let filled = |col: &usize| column_total(*col) > 0.0;

    let lo = (0..ranges.len()).find(filled);
    let hi = (0..ranges.len()).rev().find(filled);
    let (lo, hi) = match (lo, hi) {
        (Some(lo), Some(hi)) => (lo, hi + 1),
        _ => (0, ranges.len()),
    };

    let kept = &ranges[lo..hi];
    let counts = counts
        .iter()
        .map(|row| (lo..hi).map(|c| row.get(c).copied().unwrap_or(0.0)).collect())
        .collect();

    Focused {
        ranges: kept.to_vec(),
        counts,
        min_y: kept.first().map_or(0.0, |r| r.start),
        max_y: kept.last().map_or(0.0, |r| r.end),
    }
}

/// Drop zero-width and reversed buckets together with their count columns.
#[must_use]
pub fn filter_explicit_buckets(
    ranges: &[ValueRange],
    counts: &[Vec<f64>],
) -> (Vec<ValueRange>, Vec<Vec<f64>>) {
    let valid: Vec<usize> = ranges
        .iter()
        .enumerate()
        .filter(|(_, r)| r.end > r.start + BUCKET_EPSILON)
        .map(|(i, _)| i)
        .collect();

    if valid.len() < ranges.len() {
        debug!(
            dropped = ranges.len() - valid.len(),
            "dropped empty explicit buckets"
        );
    }

    let kept = valid.iter().map(|&i| ranges[i]).collect();
    let counts = counts
        .iter()
        .map(|row| {
            valid
                .iter()
                .map(|&i| row.get(i).copied().unwrap_or(0.0))
                .collect()
        })
        .collect();
    (kept, counts)
}
