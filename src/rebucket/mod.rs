pub mod merge;
pub mod time;
pub mod value;

pub use merge::{Focused, filter_explicit_buckets, focus_columns, merge_series};
pub use time::{TimeRebucketed, rebucket_time_data};
pub use value::{ValueRebucketed, rebucket_value_data};
