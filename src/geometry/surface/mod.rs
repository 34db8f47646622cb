mod mobius;

pub use mobius::MobiusSurface;

use crate::math::{Grid, Point3};

/// Parameter domain for a surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceDomain {
    /// Start of the U parameter range.
    pub u_min: f64,
    /// End of the U parameter range.
    pub u_max: f64,
    /// Start of the V parameter range.
    pub v_min: f64,
    /// End of the V parameter range.
    pub v_max: f64,
}

impl SurfaceDomain {
    /// Creates a new surface domain.
    #[must_use]
    pub fn new(u_min: f64, u_max: f64, v_min: f64, v_max: f64) -> Self {
        Self {
            u_min,
            u_max,
            v_min,
            v_max,
        }
    }
}

/// Trait for parametric surfaces in 3D space.
pub trait Surface {
    /// Evaluates the surface at parameters `(u, v)`, returning the 3D point.
    fn evaluate(&self, u: f64, v: f64) -> Point3;

    /// Returns the parameter domain of the surface.
    fn domain(&self) -> SurfaceDomain;

    /// Evaluates the surface at every node of the `u` x `v` grid.
    ///
    /// Returns the `[x, y, z]` coordinate arrays, each of shape
    /// `(v.len(), u.len())`: element `(i, j)` holds the point at `(u[j], v[i])`.
    fn evaluate_grid(&self, u: &[f64], v: &[f64]) -> [Grid; 3] {
        let rows = v.len();
        let cols = u.len();
        let mut x = Grid::zeros(rows, cols);
        let mut y = Grid::zeros(rows, cols);
        let mut z = Grid::zeros(rows, cols);
        for (i, &vi) in v.iter().enumerate() {
            for (j, &uj) in u.iter().enumerate() {
                let p = self.evaluate(uj, vi);
                x[(i, j)] = p.x;
                y[(i, j)] = p.y;
                z[(i, j)] = p.z;
            }
        }
        [x, y, z]
    }
}
