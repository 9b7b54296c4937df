//! Error types for play-field queries and mutations.

use serpent_core::FlagError;
use std::error::Error;
use std::fmt;

/// Errors arising from play-field operations.
///
/// Every variant is a synchronous programming error. Operations validate
/// their arguments before touching any tile, so a returned error means the
/// field is unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// A coordinate or range bound lies outside the grid, or a range is
    /// reversed.
    IndexOutOfRange {
        /// Which argument was rejected (`"row"`, `"to_column"`, ...).
        axis: &'static str,
        /// The rejected value.
        index: u32,
        /// The limit it was checked against.
        bound: u32,
    },
    /// An argument has a malformed value.
    InvalidArgument {
        /// What went wrong.
        reason: String,
    },
    /// A tile state did not carry exactly one direction where one was needed.
    InvalidDirectionCount(FlagError),
    /// The operation is not available on this grid.
    UnsupportedOperation {
        /// Name of the rejected operation.
        operation: &'static str,
    },
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { axis, index, bound } => {
                write!(f, "{axis} {index} out of range (limit {bound})")
            }
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::InvalidDirectionCount(e) => write!(f, "{e}"),
            Self::UnsupportedOperation { operation } => {
                write!(f, "{operation} is not supported by this play field")
            }
        }
    }
}

impl Error for FieldError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDirectionCount(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FlagError> for FieldError {
    fn from(e: FlagError) -> Self {
        Self::InvalidDirectionCount(e)
    }
}
