mod area;
mod length;
mod partial_derivatives;

pub use area::{area_density, Area};
pub use length::{EdgeLength, EdgeLengthStrategy};
pub use partial_derivatives::{DerivativeField, PartialDerivatives};
