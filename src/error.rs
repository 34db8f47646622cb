use thiserror::Error;

/// Top-level error type for the Möbius strip analysis library.
#[derive(Debug, Error)]
pub enum MobiusError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Errors related to shape construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid parameter {parameter} = {value}: must be {requirement}")]
    InvalidParameter {
        parameter: &'static str,
        value: f64,
        requirement: &'static str,
    },
}

/// Errors raised while writing mesh data.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write mesh: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for results using [`MobiusError`].
pub type Result<T> = std::result::Result<T, MobiusError>;
