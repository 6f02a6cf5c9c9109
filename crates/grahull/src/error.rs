use thiserror::Error;

/// Errors raised at the boundary between callers and the hull kernel.
///
/// Degenerate geometry (empty, coincident or collinear inputs) is not an
/// error; those cases produce well-defined hulls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HullError {
    /// Interleaved coordinates must come in `(x, y)` pairs.
    #[error("expected an even number of coordinates, got {len}")]
    OddCoordinateCount { len: usize },

    /// NaN or infinite coordinate at the given point index.
    #[error("point {index} has a non-finite coordinate ({x}, {y})")]
    NonFinite { index: usize, x: f64, y: f64 },

    /// The output buffer does not hold exactly the computed hull.
    #[error("output buffer holds {actual} points but the hull has {expected}")]
    CapacityMismatch { expected: usize, actual: usize },
}
