//! The four orthogonal directions of the play field.

use crate::error::FlagError;
use crate::flags::{require_single_direction, TileFlags};
use smallvec::SmallVec;
use std::fmt;

/// One of the four orthogonal neighbours of a tile.
///
/// Row 0 is the top of the grid, so `Up` decreases the row index and
/// `Left` decreases the column index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards the last row.
    Down,
    /// Towards column 0.
    Left,
    /// Towards the last column.
    Right,
}

impl Direction {
    /// All directions, in flag-bit order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The direction bit for this direction.
    pub const fn flag(self) -> TileFlags {
        match self {
            Self::Up => TileFlags::UP,
            Self::Down => TileFlags::DOWN,
            Self::Left => TileFlags::LEFT,
            Self::Right => TileFlags::RIGHT,
        }
    }

    /// The direction pointing back.
    pub const fn opposite(self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// `(row, column)` step for one move in this direction.
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Self::Up => (-1, 0),
            Self::Down => (1, 0),
            Self::Left => (0, -1),
            Self::Right => (0, 1),
        }
    }

    /// `true` for `Up` and `Down`.
    pub const fn is_vertical(self) -> bool {
        matches!(self, Self::Up | Self::Down)
    }

    /// The directions set in `flags`, in flag-bit order.
    pub fn decompose(flags: TileFlags) -> SmallVec<[Direction; 4]> {
        Self::ALL
            .iter()
            .copied()
            .filter(|d| flags.contains(d.flag()))
            .collect()
    }
}

impl TryFrom<TileFlags> for Direction {
    type Error = FlagError;

    /// Decode the single direction bit of `flags`; other groups are ignored.
    fn try_from(flags: TileFlags) -> Result<Self, Self::Error> {
        let bit = require_single_direction(flags)?;
        Ok(if bit == TileFlags::UP {
            Self::Up
        } else if bit == TileFlags::DOWN {
            Self::Down
        } else if bit == TileFlags::LEFT {
            Self::Left
        } else {
            Self::Right
        })
    }
}

impl From<Direction> for TileFlags {
    fn from(d: Direction) -> Self {
        d.flag()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        };
        f.write_str(name)
    }
}
