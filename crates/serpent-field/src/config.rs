//! Grid configuration, validation, and error types.
//!
//! [`GridConfig`] is the builder input for [`TileGrid`](crate::TileGrid).
//! [`validate()`](GridConfig::validate) checks the resize policy;
//! the initial size is clamped into the policy's bounds rather than
//! rejected, except for fixed-size grids where no bounds exist.

use std::error::Error;
use std::fmt;

/// Smallest row or column count a bounded grid accepts by default.
pub const MIN_DIMENSION: u32 = 1;

/// Largest row or column count any grid accepts.
pub const MAX_DIMENSION: u32 = 256;

/// Row and column count of [`GridConfig::default()`].
pub const DEFAULT_DIMENSION: u32 = 20;

// ── ResizePolicy ───────────────────────────────────────────────────

/// Whether and how far a grid may be resized after construction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResizePolicy {
    /// Row and column counts are set at construction and never change.
    /// `set_row_count` / `set_column_count` fail with
    /// [`FieldError::UnsupportedOperation`](crate::FieldError::UnsupportedOperation).
    Fixed,
    /// Row and column counts may change within `[min, max]` (inclusive).
    Bounded {
        /// Smallest accepted count.
        min: u32,
        /// Largest accepted count.
        max: u32,
    },
}

impl Default for ResizePolicy {
    fn default() -> Self {
        Self::Bounded {
            min: MIN_DIMENSION,
            max: MAX_DIMENSION,
        }
    }
}

impl ResizePolicy {
    /// Clamp a requested dimension into this policy's bounds.
    ///
    /// Fixed grids have no bounds beyond `[1, MAX_DIMENSION]`.
    pub fn clamp(&self, value: u32) -> u32 {
        match *self {
            Self::Fixed => value.clamp(1, MAX_DIMENSION),
            Self::Bounded { min, max } => value.clamp(min, max),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`GridConfig::validate()`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A fixed grid was configured with zero rows or columns, or a
    /// bounded policy allows zero.
    EmptyGrid,
    /// A dimension or bound exceeds [`MAX_DIMENSION`].
    DimensionTooLarge {
        /// Which value was too large.
        name: &'static str,
        /// The configured value.
        value: u32,
        /// The maximum allowed.
        max: u32,
    },
    /// `min > max` in a bounded policy.
    InvalidBounds {
        /// Configured lower bound.
        min: u32,
        /// Configured upper bound.
        max: u32,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid => write!(f, "play field must have at least one row and column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum of {max}")
            }
            Self::InvalidBounds { min, max } => {
                write!(f, "resize bounds min {min} > max {max}")
            }
        }
    }
}

impl Error for ConfigError {}

// ── GridConfig ─────────────────────────────────────────────────────

/// Complete configuration for constructing a [`TileGrid`](crate::TileGrid).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridConfig {
    /// Requested row count. Default: 20.
    pub rows: u32,
    /// Requested column count. Default: 20.
    pub columns: u32,
    /// Resize policy. Default: bounded to `[1, 256]`.
    pub resize: ResizePolicy,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_DIMENSION,
            columns: DEFAULT_DIMENSION,
            resize: ResizePolicy::default(),
        }
    }
}

impl GridConfig {
    /// A grid that can never be resized.
    pub fn fixed(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            resize: ResizePolicy::Fixed,
        }
    }

    /// A grid resizable within the default bounds.
    pub fn bounded(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            resize: ResizePolicy::default(),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.resize {
            ResizePolicy::Fixed => {
                check_dimension("rows", self.rows)?;
                check_dimension("columns", self.columns)?;
            }
            ResizePolicy::Bounded { min, max } => {
                if min == 0 {
                    return Err(ConfigError::EmptyGrid);
                }
                if max > MAX_DIMENSION {
                    return Err(ConfigError::DimensionTooLarge {
                        name: "max",
                        value: max,
                        max: MAX_DIMENSION,
                    });
                }
                if min > max {
                    return Err(ConfigError::InvalidBounds { min, max });
                }
            }
        }
        Ok(())
    }

    /// The `(rows, columns)` a grid built from this config starts with.
    pub fn resolved_size(&self) -> (u32, u32) {
        (self.resize.clamp(self.rows), self.resize.clamp(self.columns))
    }
}

fn check_dimension(name: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::EmptyGrid);
    }
    if value > MAX_DIMENSION {
        return Err(ConfigError::DimensionTooLarge {
            name,
            value,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}
