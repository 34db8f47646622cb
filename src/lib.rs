pub mod error;
pub mod export;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod shape;
pub mod tessellation;

pub use error::{MobiusError, Result};
pub use geometry::EdgeSide;
pub use shape::{
    build_shape, edge_curve, edge_length, mesh_coordinates, surface_area, AnalysisParams,
    AnalysisReport, MobiusShape, ShapeParameters,
};
