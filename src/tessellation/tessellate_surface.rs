use tracing::debug;

use crate::error::Result;
use crate::geometry::surface::Surface;

use super::{ParameterGrid, SurfaceMesh};

/// Samples a parametric surface on a uniform grid over its whole domain.
pub struct TessellateSurface<'a, S: Surface> {
    surface: &'a S,
    n_u: usize,
    n_v: usize,
}

impl<'a, S: Surface> TessellateSurface<'a, S> {
    /// Creates a new `TessellateSurface` operation with `n_u` samples along
    /// `u` and `n_v` samples along `v`.
    #[must_use]
    pub fn new(surface: &'a S, n_u: usize, n_v: usize) -> Self {
        Self { surface, n_u, n_v }
    }

    /// Executes the tessellation, returning the coordinate arrays.
    ///
    /// # Errors
    ///
    /// Returns an error if either sample count is below 2.
    pub fn execute(&self) -> Result<SurfaceMesh> {
        let grid = ParameterGrid::new(self.surface.domain(), self.n_u, self.n_v)?;
        debug!(
            n_u = self.n_u,
            n_v = self.n_v,
            du = grid.du(),
            dv = grid.dv(),
            "Sampling surface grid"
        );
        let [x, y, z] = self.surface.evaluate_grid(grid.u(), grid.v());
        Ok(SurfaceMesh { grid, x, y, z })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::MobiusSurface;

    fn strip() -> MobiusSurface {
        MobiusSurface::new(2.0, 0.8).unwrap()
    }

    #[test]
    fn mesh_shape_is_rows_by_columns() {
        let s = strip();
        let mesh = TessellateSurface::new(&s, 7, 5).execute().unwrap();
        assert_eq!(mesh.shape(), (5, 7));
        assert_eq!(mesh.x().shape(), mesh.y().shape());
        assert_eq!(mesh.x().shape(), mesh.z().shape());
    }

    #[test]
    fn every_node_satisfies_the_parametrization() {
        let s = strip();
        let mesh = TessellateSurface::new(&s, 9, 9).execute().unwrap();
        let grid = mesh.grid();
        for (i, &v) in grid.v().iter().enumerate() {
            for (j, &u) in grid.u().iter().enumerate() {
                let expected_r = 2.0 + v * (0.5 * u).cos();
                assert!((mesh.x()[(i, j)] - expected_r * u.cos()).abs() < 1e-12);
                assert!((mesh.y()[(i, j)] - expected_r * u.sin()).abs() < 1e-12);
                assert!((mesh.z()[(i, j)] - v * (0.5 * u).sin()).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn deterministic() {
        let s = strip();
        let a = TessellateSurface::new(&s, 11, 11).execute().unwrap();
        let b = TessellateSurface::new(&s, 11, 11).execute().unwrap();
        assert_eq!(a.x(), b.x());
        assert_eq!(a.y(), b.y());
        assert_eq!(a.z(), b.z());
    }

    #[test]
    fn rejects_too_few_samples() {
        let s = strip();
        assert!(TessellateSurface::new(&s, 1, 5).execute().is_err());
    }

    #[test]
    fn triangle_mesh_covers_every_cell() {
        let s = strip();
        let mesh = TessellateSurface::new(&s, 4, 3).execute().unwrap();
        let tri = mesh.to_triangle_mesh();
        assert_eq!(tri.vertices.len(), 12);
        // (4-1) * (3-1) cells, two triangles each
        assert_eq!(tri.indices.len(), 12);
        assert!(tri.indices.iter().flatten().all(|&k| k < 12));
        assert_eq!(tri.vertices[5], mesh.point(1, 1));
    }
}
