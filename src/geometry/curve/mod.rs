mod mobius_edge;

pub use mobius_edge::{EdgeSide, MobiusEdge};

use crate::math::Point3;

/// Parameter domain for a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveDomain {
    /// Start of the parameter range.
    pub t_min: f64,
    /// End of the parameter range.
    pub t_max: f64,
}

impl CurveDomain {
    /// Creates a new curve domain.
    #[must_use]
    pub fn new(t_min: f64, t_max: f64) -> Self {
        Self { t_min, t_max }
    }
}

/// Trait for parametric curves in 3D space.
pub trait Curve {
    /// Evaluates the curve at parameter `t`, returning the 3D point.
    fn evaluate(&self, t: f64) -> Point3;

    /// Returns the parameter domain of the curve.
    fn domain(&self) -> CurveDomain;
}
