//! A collection of constants.

/// Multipliers a nice interval is drawn from, applied to a power of ten.
pub const NICE_LADDER: [f64; 4] = [1.0, 2.0, 5.0, 10.0];

/// One second in milliseconds
pub const MS_PER_SECOND: f64 = 1_000.0;
/// One minute in milliseconds
pub const MS_PER_MINUTE: f64 = 60_000.0;
/// One hour in milliseconds
pub const MS_PER_HOUR: f64 = 3_600_000.0;
/// One day in milliseconds
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Log-scale buckets per decade.
pub const LOG_SUBDIVISIONS_PER_DECADE: f64 = 10.0;
/// Smallest value a log-scale axis starts at.
pub const LOG_SAFE_MIN: f64 = 0.01;

/// Explicit buckets narrower than this are dropped.
pub const BUCKET_EPSILON: f64 = 0.000_001;

/// At most this many y-axis labels are drawn.
pub const MAX_Y_LABELS: usize = 15;

/// Percentile reported by the count statistics.
pub const COUNT_PERCENTILE: f64 = 0.99;

// --- Panel geometry ---

/// Horizontal space eaten by the y-axis labels and padding.
pub const PANEL_WIDTH_CHROME_PX: f64 = 80.0;
/// Vertical space eaten by the x-axis labels and padding.
pub const PANEL_HEIGHT_CHROME_PX: f64 = 60.0;
/// Panel width assumed before the container has been measured.
pub const DEFAULT_PANEL_WIDTH_PX: f64 = 800.0;
/// Panel height assumed before the container has been measured.
pub const DEFAULT_PANEL_HEIGHT_PX: f64 = 300.0;
/// A panel is never planned narrower than this.
pub const MIN_PANEL_WIDTH_PX: f64 = 400.0;
/// A panel is never planned shorter than this.
pub const MIN_PANEL_HEIGHT_PX: f64 = 200.0;

/// Default time-axis budget: minimum cell width
pub const TIME_MIN_CELL_PX: f64 = 20.0;
/// Default time-axis budget: bucket cap
pub const TIME_MAX_BUCKETS: usize = 80;
/// Default value-axis budget: minimum cell height
pub const VALUE_MIN_CELL_PX: f64 = 16.0;
/// Default value-axis budget: bucket cap
pub const VALUE_MAX_BUCKETS: usize = 100;

// --- Terminal viewport ---

/// Approximate pixel width of one terminal column.
pub const CHAR_WIDTH_PX: f64 = 8.0;
/// Approximate pixel height of one terminal row.
pub const CHAR_HEIGHT_PX: f64 = 16.0;
