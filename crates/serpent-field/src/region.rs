//! Rectangular tile regions carried by change events.

use std::fmt;

/// An inclusive rectangle of tile coordinates.
///
/// The two row endpoints are not required to be ordered, and neither are
/// the two column endpoints. Consumers call [`normalized`](Self::normalized)
/// before iterating.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TileRegion {
    /// One row endpoint (inclusive).
    pub first_row: u32,
    /// The other row endpoint (inclusive).
    pub last_row: u32,
    /// One column endpoint (inclusive).
    pub first_column: u32,
    /// The other column endpoint (inclusive).
    pub last_column: u32,
}

impl TileRegion {
    /// Region spanning the given inclusive endpoints.
    pub const fn new(first_row: u32, last_row: u32, first_column: u32, last_column: u32) -> Self {
        Self {
            first_row,
            last_row,
            first_column,
            last_column,
        }
    }

    /// Region covering exactly one tile.
    pub const fn single(row: u32, column: u32) -> Self {
        Self::new(row, row, column, column)
    }

    /// Same region with `first <= last` on both axes.
    pub fn normalized(&self) -> Self {
        Self {
            first_row: self.first_row.min(self.last_row),
            last_row: self.first_row.max(self.last_row),
            first_column: self.first_column.min(self.last_column),
            last_column: self.first_column.max(self.last_column),
        }
    }

    /// Smallest region enclosing both `self` and `other` (normalized).
    pub fn union(&self, other: &Self) -> Self {
        let a = self.normalized();
        let b = other.normalized();
        Self {
            first_row: a.first_row.min(b.first_row),
            last_row: a.last_row.max(b.last_row),
            first_column: a.first_column.min(b.first_column),
            last_column: a.last_column.max(b.last_column),
        }
    }

    /// Whether `(row, column)` lies inside the region.
    pub fn contains(&self, row: u32, column: u32) -> bool {
        let n = self.normalized();
        (n.first_row..=n.last_row).contains(&row)
            && (n.first_column..=n.last_column).contains(&column)
    }

    /// Number of rows covered.
    pub fn row_count(&self) -> u32 {
        self.first_row.abs_diff(self.last_row) + 1
    }

    /// Number of columns covered.
    pub fn column_count(&self) -> u32 {
        self.first_column.abs_diff(self.last_column) + 1
    }

    /// Number of tiles covered.
    pub fn cell_count(&self) -> usize {
        self.row_count() as usize * self.column_count() as usize
    }
}

impl fmt::Display for TileRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows {}..={} x columns {}..={}",
            self.first_row, self.last_row, self.first_column, self.last_column
        )
    }
}
