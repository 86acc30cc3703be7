//! Rendering budgets + fluent builder + TOML loading.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::core::{
    constants::{TIME_MAX_BUCKETS, TIME_MIN_CELL_PX, VALUE_MAX_BUCKETS, VALUE_MIN_CELL_PX},
    error::{BucketError, ConfigError},
};

/// Rendering budget for one axis: how small a cell may get and how many
/// buckets may exist at most.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketConfig {
    pub min_cell_size: f64,
    pub max_buckets: usize,
}

impl BucketConfig {
    /// Unchecked constructor, handy for literals.
    #[inline]
    #[must_use]
    pub const fn new(min_cell_size: f64, max_buckets: usize) -> Self {
        Self {
            min_cell_size,
            max_buckets,
        }
    }

    #[inline]
    #[must_use]
    pub fn builder() -> BucketConfigBuilder {
        BucketConfigBuilder::default()
    }

    /// Default budget for the time (x) axis.
    #[must_use]
    pub const fn time_axis() -> Self {
        Self::new(TIME_MIN_CELL_PX, TIME_MAX_BUCKETS)
    }

    /// Default budget for the value (y) axis.
    #[must_use]
    pub const fn value_axis() -> Self {
        Self::new(VALUE_MIN_CELL_PX, VALUE_MAX_BUCKETS)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.min_cell_size.is_finite() && self.min_cell_size > 0.0) {
            return Err(ConfigError::NonPositiveCellSize(self.min_cell_size));
        }
        if self.max_buckets == 0 {
            return Err(ConfigError::ZeroMaxBuckets);
        }
        Ok(())
    }

    /// How many buckets fit into `available_px` under this budget.
    ///
    /// May be `0` when the viewport is smaller than one cell; callers decide
    /// whether to clamp.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn effective_max_buckets(&self, available_px: f64) -> usize {
        let by_size = (available_px / self.min_cell_size).floor();
        let by_size = if by_size.is_finite() && by_size > 0.0 {
            by_size as usize
        } else {
            0
        };
        by_size.min(self.max_buckets)
    }
}

/// Fluent builder; `build` rejects budgets that cannot produce a bucket.
#[derive(Debug, Default)]
pub struct BucketConfigBuilder {
    min_cell_size: Option<f64>,
    max_buckets: Option<usize>,
}

impl BucketConfigBuilder {
    #[inline]
    #[must_use]
    pub fn min_cell_size(mut self, px: f64) -> Self {
        self.min_cell_size = Some(px);
        self
    }
    #[inline]
    #[must_use]
    pub fn max_buckets(mut self, n: usize) -> Self {
        self.max_buckets = Some(n);
        self
    }

    pub fn build(self) -> Result<BucketConfig, ConfigError> {
        let defaults = BucketConfig::time_axis();
        let cfg = BucketConfig {
            min_cell_size: self.min_cell_size.unwrap_or(defaults.min_cell_size),
            max_buckets: self.max_buckets.unwrap_or(defaults.max_buckets),
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

/// Ergonomic `?` on a builder chain.
impl From<BucketConfigBuilder> for Result<BucketConfig, ConfigError> {
    fn from(b: BucketConfigBuilder) -> Self {
        b.build()
    }
}

/// Budgets for both heatmap axes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeatmapConfig {
    #[serde(default = "BucketConfig::time_axis")]
    pub time: BucketConfig,
    #[serde(default = "BucketConfig::value_axis")]
    pub value: BucketConfig,
}

impl Default for HeatmapConfig {
    fn default() -> Self {
        Self {
            time: BucketConfig::time_axis(),
            value: BucketConfig::value_axis(),
        }
    }
}

impl HeatmapConfig {
    /// Parse `[time]` / `[value]` tables; missing tables keep the defaults.
    pub fn from_toml_str(src: &str) -> Result<Self, BucketError> {
        let cfg: Self = toml::from_str(src)?;
        cfg.time.validate()?;
        cfg.value.validate()?;
        Ok(cfg)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, BucketError> {
        let src = fs::read_to_string(path)?;
        Self::from_toml_str(&src)
    }
}
