pub mod finite_diff;
pub mod quadrature;

pub use finite_diff::GridAxis;
pub use quadrature::QuadratureRule;

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 3D vector type.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Dense 2D array of samples, indexed `(row, column)`.
pub type Grid = nalgebra::DMatrix<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
