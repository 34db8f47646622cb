pub mod curve;
pub mod surface;

pub use curve::{Curve, CurveDomain, EdgeSide, MobiusEdge};
pub use surface::{MobiusSurface, Surface, SurfaceDomain};
