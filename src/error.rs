use thiserror::Error;

/// Top-level error type for the lamella shell toolkit.
#[derive(Debug, Error)]
pub enum LamellaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Topology(#[from] TopologyError),

    #[error(transparent)]
    Operation(#[from] OperationError),
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

/// Errors related to topological lookups.
#[derive(Debug, Error)]
pub enum TopologyError {
    #[error("entity not found: {0}")]
    EntityNotFound(String),
}

/// A capability this crate knows about but has no implemented strategy for.
///
/// Requesting one yields [`OperationError::Unsupported`] rather than a
/// silently degraded result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Deriving the border faces of a region from the shell itself.
    AutomaticBorderDetection,
    /// Turned-away classification against a local coordinate frame.
    LocalFrameClassification,
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Capability::AutomaticBorderDetection => write!(f, "automatic border detection"),
            Capability::LocalFrameClassification => {
                write!(f, "local coordinate frame classification")
            }
        }
    }
}

/// Errors related to shell operations.
#[derive(Debug, Error)]
pub enum OperationError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unsupported: {0} is not implemented")]
    Unsupported(Capability),
}

/// Convenience type alias for results using [`LamellaError`].
pub type Result<T> = std::result::Result<T, LamellaError>;
