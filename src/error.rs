use thiserror::Error;

/// Top-level error type for fence placement.
#[derive(Debug, Error)]
pub enum PalisadeError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Placement(#[from] PlacementError),

    #[error(transparent)]
    Helical(#[from] HelicalError),
}

/// Errors related to curve construction.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("non-finite coordinate in control point {index}")]
    NonFinitePoint { index: usize },
}

/// Errors related to the model store.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model not found: {0}")]
    NotFound(String),
}

/// Errors raised by placement configuration.
#[derive(Debug, Error)]
pub enum PlacementError {
    #[error("{parameter} must be a finite value >= 0, got {value}")]
    InvalidScalar { parameter: &'static str, value: f64 },
}

/// Errors specific to helical placement.
#[derive(Debug, Error)]
pub enum HelicalError {
    #[error("invalid spiral parameters: {0}")]
    InvalidSpiral(String),

    #[error("progress = {0} is out of range [0, 1]")]
    ProgressOutOfRange(f64),

    #[error("spiral reached {points} points at length {length} without covering {target}")]
    SpiralDidNotConverge {
        points: usize,
        length: f64,
        target: f64,
    },
}

/// Convenience type alias for results using [`PalisadeError`].
pub type Result<T> = std::result::Result<T, PalisadeError>;
