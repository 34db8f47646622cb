//! Shape construction and the analysis entry points.
//!
//! A [`MobiusShape`] is built once from validated [`ShapeParameters`]; its
//! mesh and boundary polylines are sampled at construction and read-only
//! afterwards. Every measurement is recomputed from them on request.
//!
//! Accuracy degrades silently at very low resolution (`n = 2` or `3`):
//! boundary derivatives are first order and Simpson's rule falls back to the
//! trapezoidal rule below three samples. At `n = 2` the surface area is
//! effectively zero (around `1e-16`) for any width: the `u = 0` and `u = 2*pi`
//! columns are the two rims swapped, so the `u` and `v` tangents are parallel.

use tracing::{debug, info};

use crate::error::{GeometryError, Result};
use crate::geometry::curve::{EdgeSide, MobiusEdge};
use crate::geometry::surface::MobiusSurface;
use crate::math::{Grid, Point3, QuadratureRule};
use crate::operations::query::{Area, EdgeLength, EdgeLengthStrategy};
use crate::tessellation::{Polyline, SurfaceMesh, TessellateCurve, TessellateSurface};

/// Validated shape constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeParameters {
    surface: MobiusSurface,
    resolution: usize,
}

impl ShapeParameters {
    /// Creates shape parameters.
    ///
    /// # Arguments
    ///
    /// * `radius` - Center-line radius `R` (must be positive)
    /// * `width` - Strip width `w` (must be positive)
    /// * `resolution` - Samples per parameter axis `n` (must be at least 2)
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::InvalidParameter`] if any value is out of range.
    pub fn new(radius: f64, width: f64, resolution: usize) -> Result<Self> {
        let surface = MobiusSurface::new(radius, width)?;
        if resolution < 2 {
            #[allow(clippy::cast_precision_loss)]
            let value = resolution as f64;
            return Err(GeometryError::InvalidParameter {
                parameter: "resolution",
                value,
                requirement: "at least 2",
            }
            .into());
        }
        Ok(Self {
            surface,
            resolution,
        })
    }

    /// Returns the surface these parameters describe.
    #[must_use]
    pub fn surface(&self) -> &MobiusSurface {
        &self.surface
    }

    /// Returns the center-line radius `R`.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.surface.radius()
    }

    /// Returns the strip width `w`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.surface.width()
    }

    /// Returns the number of samples per axis `n`.
    #[must_use]
    pub fn resolution(&self) -> usize {
        self.resolution
    }
}

/// Numerical choices for an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalysisParams {
    /// Quadrature rule for the area and the derivative-based edge length.
    pub quadrature: QuadratureRule,
    /// Arc-length strategy for the boundary.
    pub edge_strategy: EdgeLengthStrategy,
}

impl AnalysisParams {
    /// Simpson's rule with chordal edge length.
    #[must_use]
    pub const fn chordal() -> Self {
        Self {
            quadrature: QuadratureRule::Simpson,
            edge_strategy: EdgeLengthStrategy::Chordal,
        }
    }

    /// Trapezoidal rule with derivative-based edge length.
    #[must_use]
    pub const fn trapezoid() -> Self {
        Self {
            quadrature: QuadratureRule::Trapezoid,
            edge_strategy: EdgeLengthStrategy::Derivative,
        }
    }

    /// Sets the quadrature rule.
    #[must_use]
    pub const fn with_quadrature(mut self, quadrature: QuadratureRule) -> Self {
        self.quadrature = quadrature;
        self
    }

    /// Sets the edge length strategy.
    #[must_use]
    pub const fn with_edge_strategy(mut self, edge_strategy: EdgeLengthStrategy) -> Self {
        self.edge_strategy = edge_strategy;
        self
    }
}

/// Results of a full analysis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisReport {
    /// Estimated surface area.
    pub surface_area: f64,
    /// Estimated total boundary length (both sides).
    pub edge_length: f64,
}

/// A sampled Möbius strip ready for measurement.
#[derive(Debug, Clone)]
pub struct MobiusShape {
    params: ShapeParameters,
    analysis: AnalysisParams,
    mesh: SurfaceMesh,
    positive_edge: Polyline,
    negative_edge: Polyline,
}

impl MobiusShape {
    /// Samples the mesh and both boundary curves at `params.resolution()`.
    ///
    /// # Errors
    ///
    /// Returns an error if sampling fails.
    pub fn new(params: ShapeParameters) -> Result<Self> {
        let surface = params.surface;
        let n = params.resolution;
        debug!(
            radius = surface.radius(),
            width = surface.width(),
            resolution = n,
            "Building shape"
        );
        let mesh = TessellateSurface::new(&surface, n, n).execute()?;
        let positive_edge =
            TessellateCurve::new(&MobiusEdge::new(surface, EdgeSide::Positive), n).execute()?;
        let negative_edge =
            TessellateCurve::new(&MobiusEdge::new(surface, EdgeSide::Negative), n).execute()?;
        Ok(Self {
            params,
            analysis: AnalysisParams::default(),
            mesh,
            positive_edge,
            negative_edge,
        })
    }

    /// Replaces the numerical choices used by the measurements.
    #[must_use]
    pub fn with_analysis(mut self, analysis: AnalysisParams) -> Self {
        self.analysis = analysis;
        self
    }

    /// Returns the shape parameters.
    #[must_use]
    pub fn params(&self) -> &ShapeParameters {
        &self.params
    }

    /// Returns the numerical choices in use.
    #[must_use]
    pub fn analysis(&self) -> &AnalysisParams {
        &self.analysis
    }

    /// Returns the sampled mesh.
    #[must_use]
    pub fn mesh(&self) -> &SurfaceMesh {
        &self.mesh
    }

    /// Returns the sampled boundary on `side`.
    #[must_use]
    pub fn edge(&self, side: EdgeSide) -> &Polyline {
        match side {
            EdgeSide::Positive => &self.positive_edge,
            EdgeSide::Negative => &self.negative_edge,
        }
    }

    /// Estimates the surface area.
    #[must_use]
    pub fn surface_area(&self) -> f64 {
        Area::new(&self.mesh)
            .with_rule(self.analysis.quadrature)
            .execute()
    }

    /// Estimates the length of the boundary on one side.
    #[must_use]
    pub fn edge_length_of(&self, side: EdgeSide) -> f64 {
        EdgeLength::new(self.edge(side))
            .with_strategy(self.analysis.edge_strategy)
            .with_rule(self.analysis.quadrature)
            .execute()
    }

    /// Estimates the total boundary length.
    ///
    /// The two sides are congruent, so this is twice the `+w/2` side.
    #[must_use]
    pub fn edge_length(&self) -> f64 {
        2.0 * self.edge_length_of(EdgeSide::Positive)
    }

    /// Computes both measurements.
    #[must_use]
    pub fn analyze(&self) -> AnalysisReport {
        let report = AnalysisReport {
            surface_area: self.surface_area(),
            edge_length: self.edge_length(),
        };
        info!(
            radius = self.params.radius(),
            width = self.params.width(),
            resolution = self.params.resolution(),
            surface_area = report.surface_area,
            edge_length = report.edge_length,
            "Analysis complete"
        );
        report
    }
}

/// Validates the parameters and samples the shape.
///
/// # Errors
///
/// Returns [`GeometryError::InvalidParameter`] if `radius` or `width` is not
/// positive or `resolution` is below 2. Nothing is sampled in that case.
pub fn build_shape(radius: f64, width: f64, resolution: usize) -> Result<MobiusShape> {
    MobiusShape::new(ShapeParameters::new(radius, width, resolution)?)
}

/// Estimates the surface area of `shape`.
#[must_use]
pub fn surface_area(shape: &MobiusShape) -> f64 {
    shape.surface_area()
}

/// Estimates the total boundary length of `shape`.
#[must_use]
pub fn edge_length(shape: &MobiusShape) -> f64 {
    shape.edge_length()
}

/// Returns the `(x, y, z)` mesh arrays, each of shape `(n, n)`.
#[must_use]
pub fn mesh_coordinates(shape: &MobiusShape) -> (&Grid, &Grid, &Grid) {
    let mesh = shape.mesh();
    (mesh.x(), mesh.y(), mesh.z())
}

/// Returns the sampled boundary points on `side`.
#[must_use]
pub fn edge_curve(shape: &MobiusShape, side: EdgeSide) -> &[Point3] {
    &shape.edge(side).points
}
