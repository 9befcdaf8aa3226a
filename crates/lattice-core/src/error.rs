/// Failure raised by geometry operations.
///
/// Colors never produce this error: out-of-range channels are clamped instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// Malformed input: wrong component count, negative dimension, zero divisor,
    /// negative scale factor.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// Component access beyond the vector dimension.
    #[error("index {index} out of range for vector of dimension {dimension}")]
    OutOfRange { index: usize, dimension: usize },

    /// Operation undefined for the current value.
    #[error("{0}")]
    Runtime(&'static str),
}

pub type Result<T> = std::result::Result<T, MathError>;
