mod tessellate_curve;
mod tessellate_surface;

pub use tessellate_curve::TessellateCurve;
pub use tessellate_surface::TessellateSurface;

use crate::error::{GeometryError, Result};
use crate::geometry::surface::SurfaceDomain;
use crate::math::{Grid, Point3};

/// Uniform sampling of a surface's parameter domain.
///
/// Both ends of each range are included, so `n` samples are spaced
/// `(max - min) / (n - 1)` apart.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterGrid {
    u: Vec<f64>,
    v: Vec<f64>,
    du: f64,
    dv: f64,
}

impl ParameterGrid {
    /// Samples `domain` with `n_u` values of `u` and `n_v` values of `v`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] if either count is below 2.
    pub fn new(domain: SurfaceDomain, n_u: usize, n_v: usize) -> Result<Self> {
        check_sample_count("u samples", n_u)?;
        check_sample_count("v samples", n_v)?;
        let (u, du) = linspace(domain.u_min, domain.u_max, n_u);
        let (v, dv) = linspace(domain.v_min, domain.v_max, n_v);
        Ok(Self { u, v, du, dv })
    }

    /// Returns the `u` samples (one per mesh column).
    #[must_use]
    pub fn u(&self) -> &[f64] {
        &self.u
    }

    /// Returns the `v` samples (one per mesh row).
    #[must_use]
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Returns the spacing between consecutive `u` samples.
    #[must_use]
    pub fn du(&self) -> f64 {
        self.du
    }

    /// Returns the spacing between consecutive `v` samples.
    #[must_use]
    pub fn dv(&self) -> f64 {
        self.dv
    }
}

/// Coordinates of a surface sampled on a [`ParameterGrid`].
///
/// Element `(i, j)` of each array is the point at `(u[j], v[i])`: rows follow
/// `v`, columns follow `u`, identically in `x`, `y` and `z`.
#[derive(Debug, Clone)]
pub struct SurfaceMesh {
    grid: ParameterGrid,
    x: Grid,
    y: Grid,
    z: Grid,
}

impl SurfaceMesh {
    /// Returns the parameter grid the mesh was sampled on.
    #[must_use]
    pub fn grid(&self) -> &ParameterGrid {
        &self.grid
    }

    /// Returns the `(rows, columns)` shape shared by all coordinate arrays.
    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        self.x.shape()
    }

    /// Returns the `x` coordinate array.
    #[must_use]
    pub fn x(&self) -> &Grid {
        &self.x
    }

    /// Returns the `y` coordinate array.
    #[must_use]
    pub fn y(&self) -> &Grid {
        &self.y
    }

    /// Returns the `z` coordinate array.
    #[must_use]
    pub fn z(&self) -> &Grid {
        &self.z
    }

    /// Returns the point at row `i`, column `j`.
    ///
    /// # Panics
    ///
    /// Panics if the index is outside the mesh.
    #[must_use]
    pub fn point(&self, i: usize, j: usize) -> Point3 {
        Point3::new(self.x[(i, j)], self.y[(i, j)], self.z[(i, j)])
    }

    /// Splits every grid cell into two triangles.
    ///
    /// Vertex `i * columns + j` is the mesh point `(i, j)`.
    #[must_use]
    pub fn to_triangle_mesh(&self) -> TriangleMesh {
        let (rows, cols) = self.shape();
        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                mesh.vertices.push(self.point(i, j));
            }
        }
        for i in 0..rows.saturating_sub(1) {
            for j in 0..cols.saturating_sub(1) {
                let a = i * cols + j;
                let b = a + 1;
                let c = a + cols;
                let d = c + 1;
                mesh.indices.push([a, b, d]);
                mesh.indices.push([a, d, c]);
            }
        }
        mesh
    }
}

/// A curve sampled at uniformly spaced parameters.
#[derive(Debug, Clone, Default)]
pub struct Polyline {
    /// The curve parameter of each vertex.
    pub params: Vec<f64>,
    /// The ordered vertices of the polyline.
    pub points: Vec<Point3>,
}

impl Polyline {
    /// Returns the spacing between consecutive parameters, or zero when the
    /// polyline has fewer than two vertices.
    #[must_use]
    pub fn step(&self) -> f64 {
        match self.params.as_slice() {
            [first, second, ..] => second - first,
            _ => 0.0,
        }
    }

    /// Returns the `[x, y, z]` coordinate sequences.
    #[must_use]
    pub fn coordinates(&self) -> [Vec<f64>; 3] {
        [
            self.points.iter().map(|p| p.x).collect(),
            self.points.iter().map(|p| p.y).collect(),
            self.points.iter().map(|p| p.z).collect(),
        ]
    }
}

/// A triangle mesh approximation of a surface.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[usize; 3]>,
}

/// `n` evenly spaced values from `start` to `end` inclusive, and their spacing.
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> (Vec<f64>, f64) {
    if n < 2 {
        return (vec![start; n], 0.0);
    }
    #[allow(clippy::cast_precision_loss)]
    let step = (end - start) / (n - 1) as f64;
    #[allow(clippy::cast_precision_loss)]
    let values = (0..n)
        .map(|k| if k == n - 1 { end } else { start + step * k as f64 })
        .collect();
    (values, step)
}

fn check_sample_count(parameter: &'static str, n: usize) -> Result<()> {
    if n < 2 {
        #[allow(clippy::cast_precision_loss)]
        let value = n as f64;
        return Err(GeometryError::InvalidParameter {
            parameter,
            value,
            requirement: "at least 2",
        }
        .into());
    }
    Ok(())
}
