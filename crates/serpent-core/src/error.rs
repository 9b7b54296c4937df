//! Error types for flag arithmetic.

use crate::flags::TileFlags;
use std::error::Error;
use std::fmt;

/// Errors from operations that require a specific shape of flag word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FlagError {
    /// Exactly one direction bit was required but `count` were set.
    InvalidDirectionCount {
        /// The offending flag word.
        flags: TileFlags,
        /// Number of direction bits set in `flags`.
        count: u32,
    },
}

impl fmt::Display for FlagError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDirectionCount { flags, count } => write!(
                f,
                "expected exactly one direction, found {count} in {:#010b}",
                flags.bits()
            ),
        }
    }
}

impl Error for FlagError {}
