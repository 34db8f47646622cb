use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::Point3;

use super::{Surface, SurfaceDomain};

/// A Möbius strip swept around the Z axis.
///
/// A segment of width `w` centered on the circle of radius `R` makes a half
/// turn about the circle's tangent while sweeping once around the axis:
///
/// ```text
/// x(u, v) = (R + v*cos(u/2)) * cos(u)
/// y(u, v) = (R + v*cos(u/2)) * sin(u)
/// z(u, v) = v * sin(u/2)
/// ```
///
/// Parameters: `u` in `[0, 2*pi]`, `v` in `[-w/2, w/2]`. The formula itself
/// is defined for all real `u` and `v`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusSurface {
    radius: f64,
    width: f64,
}

impl MobiusSurface {
    /// Creates a new Möbius strip.
    ///
    /// # Arguments
    ///
    /// * `radius` - Distance from the axis to the strip's center line (must be positive)
    /// * `width` - Width of the strip across `v` (must be positive)
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] if either value is
    /// non-positive or not finite.
    pub fn new(radius: f64, width: f64) -> Result<Self> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(GeometryError::InvalidParameter {
                parameter: "radius",
                value: radius,
                requirement: "positive and finite",
            }
            .into());
        }
        if !width.is_finite() || width <= 0.0 {
            return Err(GeometryError::InvalidParameter {
                parameter: "width",
                value: width,
                requirement: "positive and finite",
            }
            .into());
        }
        Ok(Self { radius, width })
    }

    /// Returns the center-line radius `R`.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the strip width `w`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Returns the half width `w/2`, the `v` value of the boundary.
    #[must_use]
    pub fn half_width(&self) -> f64 {
        0.5 * self.width
    }
}

impl Surface for MobiusSurface {
    fn evaluate(&self, u: f64, v: f64) -> Point3 {
        let (su, cu) = u.sin_cos();
        let (sh, ch) = (0.5 * u).sin_cos();
        let r = self.radius + v * ch;
        Point3::new(r * cu, r * su, v * sh)
    }

    fn domain(&self) -> SurfaceDomain {
        let h = self.half_width();
        SurfaceDomain::new(0.0, TAU, -h, h)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MobiusError;
    use crate::math::TOLERANCE;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn strip() -> MobiusSurface {
        MobiusSurface::new(2.0, 0.8).unwrap()
    }

    #[test]
    fn center_line_is_circle_of_radius_r() {
        let s = strip();
        for &u in &[0.0, 0.7, FRAC_PI_2, PI, 4.0, TAU] {
            let p = s.evaluate(u, 0.0);
            assert!((p.x.hypot(p.y) - 2.0).abs() < 1e-12);
            assert!(p.z.abs() < TOLERANCE);
        }
    }

    #[test]
    fn evaluate_at_u_zero() {
        // u=0: x = R + v, y = 0, z = 0
        let p = strip().evaluate(0.0, 0.4);
        assert!((p - Point3::new(2.4, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn evaluate_at_u_pi() {
        // u=pi: cos(u/2)=0, sin(u/2)=1 -> (-R, 0, v)
        let p = strip().evaluate(PI, 0.4);
        assert!((p - Point3::new(-2.0, 0.0, 0.4)).norm() < 1e-12);
    }

    #[test]
    fn half_twist_swaps_sides_after_one_turn() {
        // After a full turn the point at +v lands where -v started.
        let s = strip();
        let start = s.evaluate(0.0, -0.4);
        let end = s.evaluate(TAU, 0.4);
        assert!((start - end).norm() < 1e-12);
    }

    #[test]
    fn grid_matches_scalar_evaluation() {
        let s = strip();
        let u = [0.0, 1.0, 2.5, TAU];
        let v = [-0.4, 0.1, 0.4];
        let [x, y, z] = s.evaluate_grid(&u, &v);
        assert_eq!(x.shape(), (3, 4));
        assert_eq!(y.shape(), (3, 4));
        assert_eq!(z.shape(), (3, 4));
        for (i, &vi) in v.iter().enumerate() {
            for (j, &uj) in u.iter().enumerate() {
                let p = s.evaluate(uj, vi);
                assert_eq!(x[(i, j)], p.x);
                assert_eq!(y[(i, j)], p.y);
                assert_eq!(z[(i, j)], p.z);
            }
        }
    }

    #[test]
    fn domain_spans_full_turn_and_width() {
        let d = strip().domain();
        assert!(d.u_min.abs() < TOLERANCE);
        assert!((d.u_max - TAU).abs() < TOLERANCE);
        assert!((d.v_min + 0.4).abs() < TOLERANCE);
        assert!((d.v_max - 0.4).abs() < TOLERANCE);
    }

    #[test]
    fn invalid_radius() {
        for r in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = MobiusSurface::new(r, 0.5).unwrap_err();
            assert!(matches!(
                err,
                MobiusError::Geometry(GeometryError::InvalidParameter {
                    parameter: "radius",
                    ..
                })
            ));
        }
    }

    #[test]
    fn invalid_width() {
        for w in [0.0, -0.5, f64::NAN] {
            let err = MobiusSurface::new(1.0, w).unwrap_err();
            assert!(matches!(
                err,
                MobiusError::Geometry(GeometryError::InvalidParameter {
                    parameter: "width",
                    ..
                })
            ));
        }
    }
}
