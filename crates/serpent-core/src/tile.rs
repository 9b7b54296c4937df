//! The [`Tile`] value type and its identity.

use crate::flags::{directions, get_flag, kind_of, TileFlags};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique [`TileId`] allocation.
static TILE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a grid cell.
///
/// Allocated when a grid creates the tile and kept for the tile's whole
/// life, including across resizes that retain it. A tile discarded by a
/// resize never has its id reused, so a stale [`Tile`] copy can be told
/// apart from the tile that later occupies the same coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u64);

impl TileId {
    /// Allocate a fresh, unique tile ID. Thread-safe.
    pub fn next() -> Self {
        Self(TILE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mutually exclusive content classification of a tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TileKind {
    /// Nothing on the tile.
    Empty,
    /// An apple.
    Apple,
    /// A snake segment.
    Snake,
}

impl TileKind {
    /// The content-kind bit for this kind.
    pub const fn flag(self) -> TileFlags {
        match self {
            Self::Empty => TileFlags::EMPTY,
            Self::Apple => TileFlags::APPLE,
            Self::Snake => TileFlags::SNAKE,
        }
    }
}

/// One cell of the play field: fixed position plus encoded state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Tile {
    id: TileId,
    row: u32,
    column: u32,
    state: TileFlags,
}

impl Tile {
    /// Create an empty tile at `(row, column)` with a fresh [`TileId`].
    pub fn new(row: u32, column: u32) -> Self {
        Self {
            id: TileId::next(),
            row,
            column,
            state: TileFlags::empty_tile(),
        }
    }

    /// Identity of this tile.
    pub fn id(&self) -> TileId {
        self.id
    }

    /// Row index.
    pub fn row(&self) -> u32 {
        self.row
    }

    /// Column index.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Encoded state word.
    pub fn state(&self) -> TileFlags {
        self.state
    }

    /// Replace the state word.
    pub fn set_state(&mut self, state: TileFlags) {
        self.state = state;
    }

    /// Content kind, or `None` if the state does not name exactly one.
    pub fn kind(&self) -> Option<TileKind> {
        kind_of(self.state)
    }

    /// `true` when the tile holds nothing.
    pub fn is_empty(&self) -> bool {
        self.kind() == Some(TileKind::Empty)
    }

    /// `true` when the tile holds an apple.
    pub fn is_apple(&self) -> bool {
        self.kind() == Some(TileKind::Apple)
    }

    /// `true` when the tile holds a snake segment.
    pub fn is_snake(&self) -> bool {
        self.kind() == Some(TileKind::Snake)
    }

    /// `true` for snake segments drawn in the alternate colour.
    pub fn is_alternate(&self) -> bool {
        self.is_snake() && get_flag(self.state, TileFlags::ALTERNATE_TYPE)
    }

    /// Direction bits of the state. Only meaningful on snake tiles.
    pub fn directions(&self) -> TileFlags {
        directions(self.state)
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}) {:?}", self.row, self.column, self.state)
    }
}
