//! Centralised error types used across the crate.

use std::{error::Error, fmt, io};

use crate::core::data::ParseCsvError;

/// Precise configuration faults.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveCellSize(f64),
    ZeroMaxBuckets,
    InvalidRange { low: f64, high: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NonPositiveCellSize(x) => {
                write!(f, "min_cell_size must be a positive number, got {x}")
            }
            ConfigError::ZeroMaxBuckets => write!(f, "max_buckets must be at least 1"),
            ConfigError::InvalidRange { low, high } => {
                write!(f, "range start {low} must be <= end {high}")
            }
        }
    }
}
impl Error for ConfigError {}

/// Top-level error type bubbled up by public APIs.
#[derive(Debug)]
pub enum BucketError {
    Io(io::Error),
    Csv(ParseCsvError),
    Config(ConfigError),
    Toml(toml::de::Error),
    Json(serde_json::Error),
    EmptyData,
}

impl fmt::Display for BucketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BucketError::Io(e) => write!(f, "{e}"),
            BucketError::Csv(e) => write!(f, "{e}"),
            BucketError::Config(e) => write!(f, "{e}"),
            BucketError::Toml(e) => write!(f, "invalid config file: {e}"),
            BucketError::Json(e) => write!(f, "{e}"),
            BucketError::EmptyData => write!(f, "data set is empty"),
        }
    }
}

impl Error for BucketError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            BucketError::Io(e) => Some(e),
            BucketError::Csv(e) => Some(e),
            BucketError::Config(e) => Some(e),
            BucketError::Toml(e) => Some(e),
            BucketError::Json(e) => Some(e),
            BucketError::EmptyData => None,
        }
    }
}

// automatic conversions
impl From<io::Error> for BucketError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}
impl From<ParseCsvError> for BucketError {
    fn from(e: ParseCsvError) -> Self {
        Self::Csv(e)
    }
}
impl From<ConfigError> for BucketError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}
impl From<toml::de::Error> for BucketError {
    fn from(e: toml::de::Error) -> Self {
        Self::Toml(e)
    }
}
impl From<serde_json::Error> for BucketError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}
