use thiserror::Error;

/// Top-level error type for the curvemark geometry core.
#[derive(Debug, Error)]
pub enum CurvemarkError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("zero-length vector")]
    ZeroVector,
}

/// Convenience type alias for results using [`CurvemarkError`].
pub type Result<T> = std::result::Result<T, CurvemarkError>;
