//! Summary statistics over heatmap cell counts, used to scale colours.

use serde::Serialize;

use crate::core::constants::COUNT_PERCENTILE;

/// Statistics over the positive, finite cells only.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct CountStats {
    pub min: f64,
    pub max: f64,
    pub p99: f64,
    pub total: f64,
}

impl CountStats {
    /// All-zero stats when no cell is positive.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
    pub fn from_rows(rows: &[Vec<f64>]) -> Self {
        let mut cells: Vec<f64> = rows
            .iter()
            .flatten()
            .copied()
            .filter(|c| c.is_finite() && *c > 0.0)
            .collect();
        if cells.is_empty() {
            return Self::default();
        }
        cells.sort_by(f64::total_cmp);

        let p99_index = ((cells.len() as f64 * COUNT_PERCENTILE).floor() as usize).min(cells.len() - 1);
        Self {
            min: cells[0],
            max: cells[cells.len() - 1],
            p99: cells[p99_index],
            total: cells.iter().sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_empty_and_invalid_cells() {
        let rows = vec![vec![0.0, 3.0, f64::NAN], vec![-1.0, 1.0, f64::INFINITY]];
        let s = CountStats::from_rows(&rows);
        assert_eq!(
            s,
            CountStats {
                min: 1.0,
                max: 3.0,
                p99: 3.0,
                total: 4.0
            }
        );
        assert_eq!(CountStats::from_rows(&[vec![0.0]]), CountStats::default());
    }

    #[test]
    fn p99_picks_from_the_sorted_tail() {
        let rows: Vec<Vec<f64>> = (1..=200).map(|i| vec![f64::from(i)]).collect();
        let s = CountStats::from_rows(&rows);
        // floor(200 * 0.99) = 198 → 199th smallest
        assert!((s.p99 - 199.0).abs() < 1e-12);
        assert!((s.total - 20_100.0).abs() < 1e-9);
    }
}
