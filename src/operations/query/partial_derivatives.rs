use tracing::debug;

use crate::math::finite_diff::gradient_along;
use crate::math::{Grid, GridAxis, Vector3};
use crate::tessellation::SurfaceMesh;

/// First partial derivatives of a sampled surface, one array per
/// coordinate and parameter, each shaped like the mesh.
#[derive(Debug, Clone)]
pub struct DerivativeField {
    /// `dx/du`
    pub x_u: Grid,
    /// `dy/du`
    pub y_u: Grid,
    /// `dz/du`
    pub z_u: Grid,
    /// `dx/dv`
    pub x_v: Grid,
    /// `dy/dv`
    pub y_v: Grid,
    /// `dz/dv`
    pub z_v: Grid,
}

impl DerivativeField {
    /// Returns the `(rows, columns)` shape of every array.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x_u.shape()
    }

    /// Tangent along `u` at mesh node `(i, j)`.
    #[must_use]
    pub fn tangent_u(&self, i: usize, j: usize) -> Vector3 {
        Vector3::new(self.x_u[(i, j)], self.y_u[(i, j)], self.z_u[(i, j)])
    }

    /// Tangent along `v` at mesh node `(i, j)`.
    #[must_use]
    pub fn tangent_v(&self, i: usize, j: usize) -> Vector3 {
        Vector3::new(self.x_v[(i, j)], self.y_v[(i, j)], self.z_v[(i, j)])
    }
}

/// Estimates the partial derivatives of a [`SurfaceMesh`] by finite
/// differences: along each row for `u`, along each column for `v`.
///
/// Boundary rows and columns use one-sided differences (see
/// [`crate::math::finite_diff`]), so accuracy there drops to first order.
pub struct PartialDerivatives<'a> {
    mesh: &'a SurfaceMesh,
}

impl<'a> PartialDerivatives<'a> {
    /// Creates a new `PartialDerivatives` query.
    #[must_use]
    pub fn new(mesh: &'a SurfaceMesh) -> Self {
        Self { mesh }
    }

    /// Executes the query, returning all six derivative arrays.
    #[must_use]
    pub fn execute(&self) -> DerivativeField {
        let du = self.mesh.grid().du();
        let dv = self.mesh.grid().dv();
        let (rows, cols) = self.mesh.shape();
        debug!(rows, cols, du, dv, "Differencing mesh coordinates");

        let along_u = |g: &Grid| gradient_along(g, du, GridAxis::Column);
        let along_v = |g: &Grid| gradient_along(g, dv, GridAxis::Row);

        DerivativeField {
            x_u: along_u(self.mesh.x()),
            y_u: along_u(self.mesh.y()),
            z_u: along_u(self.mesh.z()),
            x_v: along_v(self.mesh.x()),
            y_v: along_v(self.mesh.y()),
            z_v: along_v(self.mesh.z()),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::MobiusSurface;
    use crate::tessellation::TessellateSurface;

    /// Exact partials of the Möbius parametrization.
    fn exact(r: f64, u: f64, v: f64) -> (Vector3, Vector3) {
        let (su, cu) = u.sin_cos();
        let (sh, ch) = (0.5 * u).sin_cos();
        let radial = r + v * ch;
        let d_radial = -0.5 * v * sh;
        let p_u = Vector3::new(
            d_radial * cu - radial * su,
            d_radial * su + radial * cu,
            0.5 * v * ch,
        );
        let p_v = Vector3::new(ch * cu, ch * su, sh);
        (p_u, p_v)
    }

    #[test]
    fn shapes_match_mesh() {
        let s = MobiusSurface::new(1.0, 0.5).unwrap();
        let mesh = TessellateSurface::new(&s, 12, 7).execute().unwrap();
        let field = PartialDerivatives::new(&mesh).execute();
        assert_eq!(field.shape(), (7, 12));
        for g in [&field.y_u, &field.z_u, &field.x_v, &field.y_v, &field.z_v] {
            assert_eq!(g.shape(), (7, 12));
        }
    }

    #[test]
    fn interior_matches_analytic_partials() {
        let s = MobiusSurface::new(2.0, 0.8).unwrap();
        let mesh = TessellateSurface::new(&s, 401, 41).execute().unwrap();
        let field = PartialDerivatives::new(&mesh).execute();
        let grid = mesh.grid();
        for &(i, j) in &[(10, 100), (20, 200), (30, 333)] {
            let (p_u, p_v) = exact(2.0, grid.u()[j], grid.v()[i]);
            assert!((field.tangent_u(i, j) - p_u).norm() < 1e-3);
            // x, y and z are linear in v, so the v difference is exact
            assert!((field.tangent_v(i, j) - p_v).norm() < 1e-10);
        }
    }

    #[test]
    fn boundary_uses_one_sided_difference() {
        let s = MobiusSurface::new(2.0, 0.8).unwrap();
        let mesh = TessellateSurface::new(&s, 5, 3).execute().unwrap();
        let field = PartialDerivatives::new(&mesh).execute();
        let du = mesh.grid().du();
        let expected = (mesh.x()[(0, 1)] - mesh.x()[(0, 0)]) / du;
        assert!((field.x_u[(0, 0)] - expected).abs() < 1e-12);
        let expected = (mesh.x()[(2, 4)] - mesh.x()[(2, 3)]) / du;
        assert!((field.x_u[(2, 4)] - expected).abs() < 1e-12);
    }
}
