//! The read-only play-field contract.

use crate::error::FieldError;
use serpent_core::{direction_count, get_flag, set_flag, Direction, Tile, TileFlags};
use smallvec::SmallVec;

/// Read-only view of a rectangular grid of [`Tile`]s.
///
/// Implementors provide the dimensions and a row-major tile slice; every
/// query is derived from those. Listeners receive the post-mutation field
/// as `&dyn PlayFieldModel`, so the trait is object safe: predicates are
/// passed as `&dyn Fn`.
///
/// Tiles are stored row-major: the tile at `(row, column)` is
/// `tiles()[row * column_count + column]` and carries that same row and
/// column.
pub trait PlayFieldModel {
    /// Number of rows.
    fn row_count(&self) -> u32;

    /// Number of columns.
    fn column_count(&self) -> u32;

    /// All tiles in row-major order.
    fn tiles(&self) -> &[Tile];

    /// Total number of tiles (`row_count * column_count`).
    fn tile_count(&self) -> usize {
        self.tiles().len()
    }

    /// The tile at `(row, column)`, or `None` when out of range.
    fn get(&self, row: u32, column: u32) -> Option<&Tile> {
        if row < self.row_count() && column < self.column_count() {
            self.tiles()
                .get(row as usize * self.column_count() as usize + column as usize)
        } else {
            None
        }
    }

    /// The tile at `(row, column)`.
    ///
    /// Fails with [`FieldError::IndexOutOfRange`] if either coordinate is
    /// outside the grid.
    fn tile(&self, row: u32, column: u32) -> Result<&Tile, FieldError> {
        if row >= self.row_count() {
            return Err(FieldError::IndexOutOfRange {
                axis: "row",
                index: row,
                bound: self.row_count(),
            });
        }
        if column >= self.column_count() {
            return Err(FieldError::IndexOutOfRange {
                axis: "column",
                index: column,
                bound: self.column_count(),
            });
        }
        self.get(row, column).ok_or(FieldError::IndexOutOfRange {
            axis: "row",
            index: row,
            bound: self.row_count(),
        })
    }

    /// Whether `(row, column)` is inside the grid.
    fn contains(&self, row: u32, column: u32) -> bool {
        row < self.row_count() && column < self.column_count()
    }

    /// Whether `tile` is the tile this field currently holds at its
    /// coordinates (same [`TileId`](serpent_core::TileId)).
    fn contains_tile(&self, tile: &Tile) -> bool {
        self.get(tile.row(), tile.column())
            .is_some_and(|t| t.id() == tile.id())
    }

    /// Row-major iterator over all tiles.
    fn iter(&self) -> std::slice::Iter<'_, Tile> {
        self.tiles().iter()
    }

    /// The neighbour of `(row, column)` one step in `direction`.
    ///
    /// Off-grid neighbours wrap to the opposite edge when `wrap_around` is
    /// set (torus topology) and are `None` otherwise. Fails with
    /// [`FieldError::IndexOutOfRange`] if the origin is off-grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use serpent_core::Direction;
    /// use serpent_field::{GridConfig, PlayFieldModel, TileGrid};
    ///
    /// let grid = TileGrid::new(GridConfig::fixed(5, 5)).unwrap();
    /// let up = grid.adjacent_tile(0, 2, Direction::Up, true).unwrap().unwrap();
    /// assert_eq!((up.row(), up.column()), (4, 2));
    /// assert!(grid.adjacent_tile(0, 2, Direction::Up, false).unwrap().is_none());
    /// ```
    fn adjacent_tile(
        &self,
        row: u32,
        column: u32,
        direction: Direction,
        wrap_around: bool,
    ) -> Result<Option<&Tile>, FieldError> {
        self.tile(row, column)?;
        let (dr, dc) = direction.delta();
        let nr = resolve_axis(row as i64 + dr, self.row_count(), wrap_around);
        let nc = resolve_axis(column as i64 + dc, self.column_count(), wrap_around);
        Ok(match (nr, nc) {
            (Some(nr), Some(nc)) => self.get(nr, nc),
            _ => None,
        })
    }

    /// [`adjacent_tile`](Self::adjacent_tile) with the direction given as a
    /// flag word.
    ///
    /// `direction` must be exactly one of `UP`, `DOWN`, `LEFT`, `RIGHT`;
    /// anything else fails with [`FieldError::InvalidArgument`].
    fn adjacent_tile_by_flags(
        &self,
        row: u32,
        column: u32,
        direction: TileFlags,
        wrap_around: bool,
    ) -> Result<Option<&Tile>, FieldError> {
        let direction = parse_direction(direction)?;
        self.adjacent_tile(row, column, direction, wrap_around)
    }

    /// [`adjacent_tile`](Self::adjacent_tile) with the wrap mode folded
    /// into the direction word: `ALTERNATE_TYPE` set means "do not wrap".
    ///
    /// Once the alternate bit is masked off, the word must be exactly one
    /// direction flag, else [`FieldError::InvalidArgument`].
    fn adjacent_tile_encoded(
        &self,
        row: u32,
        column: u32,
        encoded: TileFlags,
    ) -> Result<Option<&Tile>, FieldError> {
        let wrap_around = !get_flag(encoded, TileFlags::ALTERNATE_TYPE);
        let direction = parse_direction(set_flag(encoded, TileFlags::ALTERNATE_TYPE, false))?;
        self.adjacent_tile(row, column, direction, wrap_around)
    }

    /// The neighbour that the tile's single direction bit points at.
    ///
    /// Used to walk from a snake end along its body. Fails with
    /// [`FieldError::InvalidDirectionCount`] if the tile's state carries no
    /// direction or more than one.
    fn next_tile(
        &self,
        row: u32,
        column: u32,
        wrap_around: bool,
    ) -> Result<Option<&Tile>, FieldError> {
        let state = self.tile(row, column)?.state();
        let direction = Direction::try_from(state)?;
        self.adjacent_tile(row, column, direction, wrap_around)
    }

    /// Every neighbour the tile's direction bits point at, in
    /// `UP, DOWN, LEFT, RIGHT` order. Off-grid neighbours are skipped when
    /// not wrapping.
    fn connected_tiles(
        &self,
        row: u32,
        column: u32,
        wrap_around: bool,
    ) -> Result<SmallVec<[&Tile; 4]>, FieldError> {
        let state = self.tile(row, column)?.state();
        let mut out = SmallVec::new();
        for direction in Direction::decompose(state) {
            if let Some(t) = self.adjacent_tile(row, column, direction, wrap_around)? {
                out.push(t);
            }
        }
        Ok(out)
    }

    /// Snapshot of the tiles matching `predicate`, in row-major order.
    fn filtered_tiles(&self, predicate: &dyn Fn(&Tile) -> bool) -> Vec<Tile> {
        self.iter().filter(|&t| predicate(t)).copied().collect()
    }

    /// Number of tiles matching `predicate`, without building a list.
    fn filtered_tile_count(&self, predicate: &dyn Fn(&Tile) -> bool) -> usize {
        self.iter().filter(|&t| predicate(t)).count()
    }

    /// Snapshot of the empty tiles.
    fn empty_tiles(&self) -> Vec<Tile> {
        self.filtered_tiles(&Tile::is_empty)
    }

    /// Snapshot of the apple tiles.
    fn apple_tiles(&self) -> Vec<Tile> {
        self.filtered_tiles(&Tile::is_apple)
    }

    /// Snapshot of the snake tiles.
    fn snake_tiles(&self) -> Vec<Tile> {
        self.filtered_tiles(&Tile::is_snake)
    }

    /// Number of empty tiles.
    fn empty_tile_count(&self) -> usize {
        self.filtered_tile_count(&Tile::is_empty)
    }

    /// Number of apple tiles.
    fn apple_tile_count(&self) -> usize {
        self.filtered_tile_count(&Tile::is_apple)
    }

    /// Number of snake tiles.
    fn snake_tile_count(&self) -> usize {
        self.filtered_tile_count(&Tile::is_snake)
    }
}

/// Resolve a single axis value: in range as-is, otherwise wrapped when
/// `wrap_around` is set and `None` when not.
pub(crate) fn resolve_axis(val: i64, len: u32, wrap_around: bool) -> Option<u32> {
    let n = len as i64;
    if n == 0 {
        return None;
    }
    if val >= 0 && val < n {
        return Some(val as u32);
    }
    if wrap_around {
        Some(val.rem_euclid(n) as u32)
    } else {
        None
    }
}

/// Decode a flag word that must be exactly one direction and nothing else.
pub(crate) fn parse_direction(flags: TileFlags) -> Result<Direction, FieldError> {
    if !TileFlags::ALL_DIRECTIONS.contains(flags) || direction_count(flags) != 1 {
        return Err(FieldError::InvalidArgument {
            reason: format!(
                "{:#010b} is not exactly one of UP, DOWN, LEFT, RIGHT",
                flags.bits()
            ),
        });
    }
    Direction::try_from(flags).map_err(FieldError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_axis_in_range() {
        assert_eq!(resolve_axis(0, 5, false), Some(0));
        assert_eq!(resolve_axis(4, 5, true), Some(4));
    }

    #[test]
    fn resolve_axis_out_of_range() {
        assert_eq!(resolve_axis(-1, 5, false), None);
        assert_eq!(resolve_axis(5, 5, false), None);
        assert_eq!(resolve_axis(-1, 5, true), Some(4));
        assert_eq!(resolve_axis(5, 5, true), Some(0));
        assert_eq!(resolve_axis(-1, 1, true), Some(0));
    }

    #[test]
    fn parse_direction_accepts_only_single_bits() {
        assert_eq!(parse_direction(TileFlags::UP), Ok(Direction::Up));
        assert_eq!(parse_direction(TileFlags::RIGHT), Ok(Direction::Right));
        for bad in [
            TileFlags::empty(),
            TileFlags::UP_LEFT,
            TileFlags::UP | TileFlags::SNAKE,
            TileFlags::ALTERNATE_TYPE,
        ] {
            assert!(matches!(
                parse_direction(bad),
                Err(FieldError::InvalidArgument { .. })
            ));
        }
    }
}
