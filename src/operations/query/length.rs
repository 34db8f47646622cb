use tracing::debug;

use crate::math::finite_diff::gradient;
use crate::math::QuadratureRule;
use crate::tessellation::Polyline;

/// How arc length is estimated from a sampled curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeLengthStrategy {
    /// Integrate `sqrt(x'^2 + y'^2 + z'^2)` over the parameter, with the
    /// derivatives taken by finite differences.
    #[default]
    Derivative,
    /// Sum the straight-line distances between consecutive samples.
    Chordal,
}

/// Computes the arc length of a sampled curve.
///
/// Both strategies converge to the same length as the sampling is refined.
pub struct EdgeLength<'a> {
    line: &'a Polyline,
    strategy: EdgeLengthStrategy,
    rule: QuadratureRule,
}

impl<'a> EdgeLength<'a> {
    /// Creates a new `EdgeLength` query using the derivative strategy and
    /// Simpson's rule.
    #[must_use]
    pub fn new(line: &'a Polyline) -> Self {
        Self {
            line,
            strategy: EdgeLengthStrategy::default(),
            rule: QuadratureRule::default(),
        }
    }

    /// Sets the arc-length strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: EdgeLengthStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets the quadrature rule used by [`EdgeLengthStrategy::Derivative`].
    #[must_use]
    pub fn with_rule(mut self, rule: QuadratureRule) -> Self {
        self.rule = rule;
        self
    }

    /// Executes the query, returning the curve length.
    ///
    /// A polyline with fewer than two vertices has length zero.
    #[must_use]
    pub fn execute(&self) -> f64 {
        debug!(
            samples = self.line.points.len(),
            strategy = ?self.strategy,
            "Measuring curve length"
        );
        match self.strategy {
            EdgeLengthStrategy::Derivative => self.integrate_speed(),
            EdgeLengthStrategy::Chordal => self
                .line
                .points
                .windows(2)
                .map(|pair| (pair[1] - pair[0]).norm())
                .sum(),
        }
    }

    fn integrate_speed(&self) -> f64 {
        let step = self.line.step();
        let [x, y, z] = self.line.coordinates();
        let (dx, dy, dz) = (gradient(&x, step), gradient(&y, step), gradient(&z, step));
        let speed: Vec<f64> = dx
            .iter()
            .zip(&dy)
            .zip(&dz)
            .map(|((a, b), c)| (a * a + b * b + c * c).sqrt())
            .collect();
        self.rule.integrate(&speed, step)
    }
}
