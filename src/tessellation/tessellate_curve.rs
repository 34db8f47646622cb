use crate::error::Result;
use crate::geometry::curve::Curve;

use super::{check_sample_count, linspace, Polyline};

/// Samples a curve at uniformly spaced parameters over its whole domain.
pub struct TessellateCurve<'a, C: Curve> {
    curve: &'a C,
    samples: usize,
}

impl<'a, C: Curve> TessellateCurve<'a, C> {
    /// Creates a new `TessellateCurve` operation producing `samples` vertices.
    #[must_use]
    pub fn new(curve: &'a C, samples: usize) -> Self {
        Self { curve, samples }
    }

    /// Executes the tessellation, returning a polyline whose first and last
    /// vertices lie at the ends of the curve's domain.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two samples are requested.
    pub fn execute(&self) -> Result<Polyline> {
        check_sample_count("curve samples", self.samples)?;
        let domain = self.curve.domain();
        let (params, _) = linspace(domain.t_min, domain.t_max, self.samples);
        let points = params.iter().map(|&t| self.curve.evaluate(t)).collect();
        Ok(Polyline { params, points })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::{EdgeSide, MobiusEdge, MobiusSurface};
    use crate::math::Point3;
    use std::f64::consts::TAU;

    #[test]
    fn samples_span_full_turn() {
        let edge = MobiusEdge::new(MobiusSurface::new(2.0, 0.8).unwrap(), EdgeSide::Positive);
        let line = TessellateCurve::new(&edge, 50).execute().unwrap();
        assert_eq!(line.points.len(), 50);
        assert_eq!(line.params[0], 0.0);
        assert_eq!(line.params[49], TAU);
        assert!((line.step() - TAU / 49.0).abs() < 1e-15);
        assert!((line.points[0] - Point3::new(2.4, 0.0, 0.0)).norm() < 1e-12);
    }

    #[test]
    fn rejects_single_sample() {
        let edge = MobiusEdge::new(MobiusSurface::new(2.0, 0.8).unwrap(), EdgeSide::Negative);
        assert!(TessellateCurve::new(&edge, 1).execute().is_err());
    }
}
