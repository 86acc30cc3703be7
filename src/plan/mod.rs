pub mod time;
pub mod value;

pub use time::{TimeBucketResult, calculate_time_buckets};
pub use value::{
    ValueBucketResult, ValueScale, calculate_log_value_buckets, calculate_value_buckets,
    create_explicit_value_buckets,
};
