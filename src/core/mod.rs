//! Plain data, budgets, formatting and ingest shared by the planners.

pub mod bounds;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod interval;
pub mod range;
pub mod stats;

// re-export frequently-used items for convenience
pub use bounds::Viewport;
pub use config::{BucketConfig, BucketConfigBuilder, HeatmapConfig};
pub use data::{HeatmapSeries, ParseCsvError};
pub use error::{BucketError, ConfigError};
pub use interval::{format_interval_label, format_magnitude, round_to_nice_interval};
pub use range::{ValueRange, ranges_from_bounds};
pub use stats::CountStats;
