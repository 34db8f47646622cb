use tracing::debug;

use crate::math::{Grid, QuadratureRule};
use crate::tessellation::SurfaceMesh;

use super::{DerivativeField, PartialDerivatives};

/// Computes the area of a sampled surface.
///
/// The local area density `|dP/du x dP/dv|` is integrated along `u` for each
/// row, and the resulting per-row integrals are integrated along `v`. The
/// estimate converges toward the true area as the mesh is refined.
pub struct Area<'a> {
    mesh: &'a SurfaceMesh,
    rule: QuadratureRule,
}

impl<'a> Area<'a> {
    /// Creates a new `Area` query using Simpson's rule.
    #[must_use]
    pub fn new(mesh: &'a SurfaceMesh) -> Self {
        Self {
            mesh,
            rule: QuadratureRule::default(),
        }
    }

    /// Sets the quadrature rule.
    #[must_use]
    pub fn with_rule(mut self, rule: QuadratureRule) -> Self {
        self.rule = rule;
        self
    }

    /// Executes the query, returning the surface area.
    #[must_use]
    pub fn execute(&self) -> f64 {
        let field = PartialDerivatives::new(self.mesh).execute();
        let density = area_density(&field);
        let grid = self.mesh.grid();
        let (rows, cols) = density.shape();
        debug!(
            rule_u = ?self.rule.effective(cols),
            rule_v = ?self.rule.effective(rows),
            "Integrating area density"
        );

        let per_row = self.rule.integrate_rows(&density, grid.du());
        self.rule.integrate(&per_row, grid.dv())
    }
}

/// Magnitude of the cross product of the `u` and `v` tangents at every node.
#[must_use]
pub fn area_density(field: &DerivativeField) -> Grid {
    let (rows, cols) = field.shape();
    Grid::from_fn(rows, cols, |i, j| {
        field.tangent_u(i, j).cross(&field.tangent_v(i, j)).norm()
    })
}
