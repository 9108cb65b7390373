//! Error types for subdivision.

use thiserror::Error;

/// Broad category of a [`SubdivisionError`].
///
/// Subdivision is total over its valid input domain, so the only thing that
/// can go wrong is the caller handing it something outside that domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The depth or a vertex coordinate is outside the accepted domain.
    InvalidArgument,
}

/// Error returned when subdivision input is rejected.
///
/// All variants are raised before any leaf is emitted.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubdivisionError {
    #[error("Invalid argument: depth must be non-negative, got {0}")]
    NegativeDepth(i64),

    #[error("Invalid argument: depth {0} exceeds the supported maximum of {max}", max = u32::MAX)]
    DepthOutOfRange(i64),

    #[error("Invalid argument: vertex {index} has non-finite coordinates ({x}, {y})")]
    NonFiniteVertex { index: usize, x: f64, y: f64 },
}

impl SubdivisionError {
    /// Returns the category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NegativeDepth(_) | Self::DepthOutOfRange(_) | Self::NonFiniteVertex { .. } => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

/// Result type for subdivision operations.
pub type Result<T> = std::result::Result<T, SubdivisionError>;
