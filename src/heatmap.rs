//! One-shot layout of a histogram series for a heatmap panel.
//!
//! Time axis first (rebucket raw rows into nice intervals), then the value
//! axis: either the series' own buckets kept as-is (explicit mode) or a fresh
//! linear/log plan over the occupied value span with counts redistributed by
//! overlap.

use serde::Serialize;
use tracing::debug;

use crate::{
    core::{
        bounds::Viewport,
        config::HeatmapConfig,
        constants::MAX_Y_LABELS,
        data::HeatmapSeries,
        error::BucketError,
        interval::format_magnitude,
        range::ValueRange,
        stats::CountStats,
    },
    plan::{
        time::{TimeBucketResult, calculate_time_buckets},
        value::{ValueBucketResult, calculate_value_buckets, create_explicit_value_buckets},
    },
    rebucket::{
        merge::{filter_explicit_buckets, focus_columns},
        time::rebucket_time_data,
        value::rebucket_value_data,
    },
};

/// Everything a heatmap layout depends on.
#[derive(Debug, Clone)]
pub struct HeatmapRequest<'a> {
    pub series: &'a HeatmapSeries,
    /// Query window; defaults to the first / last timestamp of the series.
    pub start_ms: Option<i64>,
    pub end_ms: Option<i64>,
    /// Raw panel size; axis chrome is subtracted before planning.
    pub viewport: Viewport,
    pub use_log_scale: bool,
    /// Keep the series' own value buckets instead of planning new ones.
    pub explicit_buckets: bool,
    pub config: HeatmapConfig,
}

impl<'a> HeatmapRequest<'a> {
    #[must_use]
    pub fn new(series: &'a HeatmapSeries, viewport: Viewport) -> Self {
        Self {
            series,
            start_ms: None,
            end_ms: None,
            viewport,
            use_log_scale: false,
            explicit_buckets: false,
            config: HeatmapConfig::default(),
        }
    }
}

/// Cell grid ready to paint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeatmapLayout {
    pub time: TimeBucketResult,
    pub bucketed_timestamps: Vec<i64>,
    pub value: ValueBucketResult,
    /// `counts[t][v]`: time bucket `t`, value bucket `v`.
    pub counts: Vec<Vec<f64>>,
    /// One label per value bucket.
    pub labels: Vec<String>,
    /// Value buckets whose labels should be drawn.
    pub label_indices: Vec<usize>,
    /// Y-axis span. Explicit layouts are drawn by bucket index, `0..n`.
    pub y_range: ValueRange,
    /// Tick positions for explicit layouts (bucket centres).
    pub y_splits: Option<Vec<f64>>,
    pub stats: CountStats,
}

pub fn plan_heatmap(req: &HeatmapRequest<'_>) -> Result<HeatmapLayout, BucketError> {
    let series = req.series;
    let (Some(&first_ts), Some(&last_ts)) = (series.timestamps.first(), series.timestamps.last())
    else {
        return Err(BucketError::EmptyData);
    };

    let start_ms = req.start_ms.unwrap_or(first_ts);
    let end_ms = req.end_ms.unwrap_or(last_ts.max(start_ms));
    let area = req.viewport.plot_area();
    let stats = CountStats::from_rows(&series.counts);

    let time = calculate_time_buckets(start_ms, end_ms, area.width_px, &req.config.time);
    let by_time = rebucket_time_data(&series.timestamps, &series.counts, &time, start_ms);

    let focused = focus_columns(&series.ranges(), &by_time.bucketed_counts);

    let (value, counts, labels) = if req.explicit_buckets {
        let (ranges, counts) = filter_explicit_buckets(&focused.ranges, &focused.counts);
        let value = create_explicit_value_buckets(&ranges, area.height_px);
        let labels = ranges
            .iter()
            .map(|r| format!("{}-{}", format_magnitude(r.start), format_magnitude(r.end)))
            .collect();
        (value, counts, labels)
    } else {
        let value = calculate_value_buckets(
            focused.min_y,
            focused.max_y,
            area.height_px,
            &req.config.value,
            req.use_log_scale,
        );
        let out = rebucket_value_data(&focused.ranges, &focused.counts, &value);
        (value, out.bucketed_counts, out.bucket_labels)
    };

    let n = value.buckets.len();
    let (y_range, y_splits) = if req.explicit_buckets {
        #[allow(clippy::cast_precision_loss)]
        let splits = (0..n).map(|i| i as f64 + 0.5).collect();
        #[allow(clippy::cast_precision_loss)]
        let range = ValueRange::new(0.0, n as f64);
        (range, Some(splits))
    } else {
        (value.extent().unwrap_or(ValueRange::new(0.0, 0.0)), None)
    };

    debug!(
        time_buckets = time.number_of_buckets,
        value_buckets = n,
        explicit = req.explicit_buckets,
        log = req.use_log_scale,
        "planned heatmap"
    );

    Ok(HeatmapLayout {
        time,
        bucketed_timestamps: by_time.bucketed_timestamps,
        label_indices: generate_y_splits(n),
        value,
        counts,
        labels,
        y_range,
        y_splits,
        stats,
    })
}

/// Indices of the value buckets to label: all of them up to 15, otherwise
/// 15 spread evenly from first to last.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn generate_y_splits(number_of_buckets: usize) -> Vec<usize> {
    if number_of_buckets <= MAX_Y_LABELS {
        return (0..number_of_buckets).collect();
    }
    let step = (number_of_buckets - 1) as f64 / (MAX_Y_LABELS - 1) as f64;
    (0..MAX_Y_LABELS)
        .map(|i| (i as f64 * step).round() as usize)
        .collect()
}
