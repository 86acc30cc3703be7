//! Nice-number intervals and their human labels.

use crate::core::{
    constants::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND, NICE_LADDER},
    range::round_half_up,
};

/// Round `raw` up to the nearest `{1, 2, 5, 10} × 10^n`.
///
/// Non-positive and non-finite input gives `1`.
#[must_use]
pub fn round_to_nice_interval(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let pick = NICE_LADDER
        .iter()
        .copied()
        .find(|&p| normalized <= p)
        .unwrap_or(10.0);
    pick * magnitude
}

/// Render a millisecond interval as `"2s"`, `"5min"`, `"1hr"`, `"3day"`.
#[must_use]
pub fn format_interval_label(ms: f64) -> String {
    if ms < MS_PER_MINUTE {
        format!("{}s", round_half_up(ms / MS_PER_SECOND))
    } else if ms < MS_PER_HOUR {
        format!("{}min", round_half_up(ms / MS_PER_MINUTE))
    } else if ms < MS_PER_DAY {
        format!("{}hr", round_half_up(ms / MS_PER_HOUR))
    } else {
        format!("{}day", round_half_up(ms / MS_PER_DAY))
    }
}

/// Pretty-print a bucket bound: more decimals the smaller it gets.
#[must_use]
pub fn format_magnitude(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else if v < 0.01 {
        format_exponential(v)
    } else if v < 1.0 {
        format!("{v:.3}")
    } else if v < 1000.0 {
        format!("{v:.2}")
    } else {
        format!("{v:.0}")
    }
}

/// `1.00e-3` style: two mantissa decimals, signed exponent.
fn format_exponential(v: f64) -> String {
    let s = format!("{v:.2e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}
