//! Public-facing crate root – re-exports + one-shot helper.
//!
//! Turns time and value ranges into a bounded number of nice, render-sized
//! buckets, and moves already aggregated counts between bucket layouts
//! without the raw samples.
//!
//! ```rust
//! use adaptive_buckets::{BucketConfig, calculate_time_buckets};
//!
//! let plan = calculate_time_buckets(0, 60_000, 1000.0, &BucketConfig::new(20.0, 50));
//! assert_eq!(plan.interval_ms, 2000);
//! assert_eq!(plan.interval_label, "2s");
//! ```

pub mod cli;
pub mod core;
pub mod heatmap;
pub mod plan;
pub mod rebucket;

pub use crate::core::{
    bounds::Viewport,
    config::{BucketConfig, BucketConfigBuilder, HeatmapConfig},
    data::{HeatmapSeries, ParseCsvError, read_heatmap_csv},
    error::{BucketError, ConfigError},
    interval::{format_interval_label, format_magnitude, round_to_nice_interval},
    range::{ValueRange, ranges_from_bounds},
    stats::CountStats,
};

pub use heatmap::{HeatmapLayout, HeatmapRequest, generate_y_splits, plan_heatmap};

pub use plan::{
    TimeBucketResult, ValueBucketResult, ValueScale, calculate_log_value_buckets,
    calculate_time_buckets, calculate_value_buckets, create_explicit_value_buckets,
};

pub use rebucket::{
    Focused, TimeRebucketed, ValueRebucketed, filter_explicit_buckets, focus_columns,
    merge_series, rebucket_time_data, rebucket_value_data,
};

/// Convenience function: read a heatmap CSV and lay it out for `viewport`
/// with default budgets.
pub fn plan_heatmap_csv<R: std::io::Read>(
    src: R,
    viewport: Viewport,
    use_log_scale: bool,
) -> Result<HeatmapLayout, BucketError> {
    let series = read_heatmap_csv(src)?;
    let mut req = HeatmapRequest::new(&series, viewport);
    req.use_log_scale = use_log_scale;
    plan_heatmap(&req)
}
