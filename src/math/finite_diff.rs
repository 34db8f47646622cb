//! Finite-difference derivatives of uniformly sampled data.
//!
//! Interior samples use the second-order central difference
//! `(f[k+1] - f[k-1]) / 2h`. The first and last sample of every axis use the
//! first-order one-sided difference, so edge values are only `O(h)` accurate.
//! With exactly two samples both ends get the same forward difference.

use super::Grid;

/// Axis of a [`Grid`] along which a derivative is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridAxis {
    /// Varies the column index `j` within each row.
    Column,
    /// Varies the row index `i` within each column.
    Row,
}

/// Differentiates a uniformly spaced 1D sequence.
///
/// Returns a sequence of the same length. Sequences shorter than two samples
/// have no defined derivative and yield zeros.
#[must_use]
pub fn gradient(values: &[f64], step: f64) -> Vec<f64> {
    (0..values.len())
        .map(|k| difference_at(values.len(), k, step, |m| values[m]))
        .collect()
}

/// Differentiates every row (or column) of a grid independently.
///
/// The result has the same shape as `grid`.
#[must_use]
pub fn gradient_along(grid: &Grid, step: f64, axis: GridAxis) -> Grid {
    let (rows, cols) = grid.shape();
    match axis {
        GridAxis::Column => Grid::from_fn(rows, cols, |i, j| {
            difference_at(cols, j, step, |m| grid[(i, m)])
        }),
        GridAxis::Row => Grid::from_fn(rows, cols, |i, j| {
            difference_at(rows, i, step, |m| grid[(m, j)])
        }),
    }
}

/// Derivative at index `k` of a `len`-sample sequence read through `sample`.
fn difference_at(len: usize, k: usize, step: f64, sample: impl Fn(usize) -> f64) -> f64 {
    if len < 2 {
        return 0.0;
    }
    if k == 0 {
        (sample(1) - sample(0)) / step
    } else if k == len - 1 {
        (sample(k) - sample(k - 1)) / step
    } else {
        (sample(k + 1) - sample(k - 1)) / (2.0 * step)
    }
}
