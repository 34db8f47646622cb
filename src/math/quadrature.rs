//! Composite quadrature over uniformly spaced samples.

use super::Grid;

/// Composite rule used to integrate sampled values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QuadratureRule {
    /// Composite Simpson's rule. Falls back to [`QuadratureRule::Trapezoid`]
    /// when fewer than three samples are available.
    #[default]
    Simpson,
    /// Composite trapezoidal rule.
    Trapezoid,
}

impl QuadratureRule {
    /// Integrates `values` sampled at uniform spacing `step`.
    #[must_use]
    pub fn integrate(self, values: &[f64], step: f64) -> f64 {
        match self {
            Self::Simpson => simpson(values, step),
            Self::Trapezoid => trapezoid(values, step),
        }
    }

    /// Integrates each row of `grid` along its column index.
    ///
    /// Returns one partial integral per row.
    #[must_use]
    pub fn integrate_rows(self, grid: &Grid, step: f64) -> Vec<f64> {
        grid.row_iter()
            .map(|row| {
                let samples: Vec<f64> = row.iter().copied().collect();
                self.integrate(&samples, step)
            })
            .collect()
    }

    /// Returns the rule actually applied to `sample_count` samples.
    #[must_use]
    pub fn effective(self, sample_count: usize) -> Self {
        match self {
            Self::Simpson if sample_count < 3 => Self::Trapezoid,
            rule => rule,
        }
    }
}

/// Composite trapezoidal rule. Returns zero for fewer than two samples.
#[must_use]
pub fn trapezoid(values: &[f64], step: f64) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let interior: f64 = values[1..n - 1].iter().sum();
    step * (0.5 * (values[0] + values[n - 1]) + interior)
}

/// Composite Simpson's rule.
///
/// An odd sample count is integrated directly. An even count leaves one
/// interval over; it is covered by the quadratic through the three nearest
/// samples, placed once at the end and once at the start, and the two
/// estimates are averaged so that reversing the samples leaves the result
/// unchanged.
#[must_use]
pub fn simpson(values: &[f64], step: f64) -> f64 {
    let n = values.len();
    if n < 3 {
        return trapezoid(values, step);
    }
    if n % 2 == 1 {
        return composite_simpson(values, step);
    }

    let end_first = composite_simpson(&values[..n - 1], step)
        + single_interval(values[n - 1], values[n - 2], values[n - 3], step);
    let start_first = single_interval(values[0], values[1], values[2], step)
        + composite_simpson(&values[1..], step);
    0.5 * (end_first + start_first)
}

/// Simpson's rule over an odd number of samples.
fn composite_simpson(values: &[f64], step: f64) -> f64 {
    let n = values.len();
    let mut sum = values[0] + values[n - 1];
    for (k, v) in values.iter().enumerate().take(n - 1).skip(1) {
        sum += if k % 2 == 1 { 4.0 * v } else { 2.0 * v };
    }
    sum * step / 3.0
}

/// Integral over the interval adjacent to `edge`, using the quadratic through
/// `edge`, `next` and `far`.
fn single_interval(edge: f64, next: f64, far: f64, step: f64) -> f64 {
    step * (5.0 * edge + 8.0 * next - far) / 12.0
}
