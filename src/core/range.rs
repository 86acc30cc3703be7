//! Closed/half-open numeric ranges on the value axis.

use serde::Serialize;

/// One bucket on the value axis.
///
/// Treated as half-open `[start, end)` except where a caller asks for the
/// closed form (the last bucket of a layout).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueRange {
    pub start: f64,
    pub end: f64,
}

impl ValueRange {
    #[inline]
    #[must_use]
    pub const fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> f64 {
        self.end - self.start
    }

    /// A single point: `start == end`.
    #[inline]
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Length of the intersection with `other`, `0` when disjoint.
    #[inline]
    #[must_use]
    pub fn overlap(&self, other: &ValueRange) -> f64 {
        (self.end.min(other.end) - self.start.max(other.start)).max(0.0)
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, v: f64) -> bool {
        self.start <= v && v < self.end
    }

    #[inline]
    #[must_use]
    pub fn contains_closed(&self, v: f64) -> bool {
        self.start <= v && v <= self.end
    }

    /// `"{start}-{end}"` with both ends rounded to integers.
    #[must_use]
    pub fn label(&self) -> String {
        format!("{}-{}", round_half_up(self.start), round_half_up(self.end))
    }
}

/// Round to the nearest integer, ties toward +∞.
///
/// Non-finite input maps to `0`; values beyond `i64` saturate.
#[inline]
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn round_half_up(v: f64) -> i64 {
    if v.is_finite() {
        (v + 0.5).floor() as i64
    } else {
        0
    }
}

/// `n + 1` ascending edges become `n` contiguous buckets.
#[must_use]
pub fn ranges_from_bounds(bounds: &[f64]) -> Vec<ValueRange> {
    bounds
        .windows(2)
        .map(|w| ValueRange::new(w[0], w[1]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overlap_is_clamped_to_zero() {
        let a = ValueRange::new(0.0, 10.0);
        assert!((a.overlap(&ValueRange::new(5.0, 20.0)) - 5.0).abs() < 1e-12);
        assert!((a.overlap(&ValueRange::new(2.0, 3.0)) - 1.0).abs() < 1e-12);
        assert!(a.overlap(&ValueRange::new(10.0, 20.0)).abs() < 1e-12);
        assert!(a.overlap(&ValueRange::new(-5.0, -1.0)).abs() < 1e-12);
    }

    #[test]
    fn containment_edges() {
        let r = ValueRange::new(1.0, 2.0);
        assert!(r.contains(1.0));
        assert!(!r.contains(2.0));
        assert!(r.contains_closed(2.0));
        assert!(ValueRange::new(3.0, 3.0).is_degenerate());
    }

    #[test]
    fn labels_round_half_up() {
        assert_eq!(ValueRange::new(0.4, 9.5).label(), "0-10");
        assert_eq!(ValueRange::new(-2.5, -0.2).label(), "-2-0");
        assert_eq!(round_half_up(f64::NAN), 0);
    }

    #[test]
    fn bounds_become_contiguous_ranges() {
        let r = ranges_from_bounds(&[0.0, 1.0, 5.0]);
        assert_eq!(r, vec![ValueRange::new(0.0, 1.0), ValueRange::new(1.0, 5.0)]);
        assert!(ranges_from_bounds(&[3.0]).is_empty());
    }
}
