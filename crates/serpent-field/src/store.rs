//! Flat row-major tile storage shared by grid implementations.

use crate::model::PlayFieldModel;
use serpent_core::{Tile, TileFlags};

/// Row-major `Vec<Tile>` plus its dimensions.
///
/// Invariant: `tiles.len() == rows * columns` and the tile at index
/// `r * columns + c` reports row `r` and column `c`. Every mutator here
/// preserves it; argument validation is the caller's job.
#[derive(Clone, Debug)]
pub(crate) struct TileStore {
    rows: u32,
    columns: u32,
    tiles: Vec<Tile>,
}

impl TileStore {
    /// Fresh empty tiles, each with a new id.
    pub(crate) fn new(rows: u32, columns: u32) -> Self {
        Self {
            rows,
            columns,
            tiles: fresh_tiles(rows, columns),
        }
    }

    fn index(&self, row: u32, column: u32) -> usize {
        row as usize * self.columns as usize + column as usize
    }

    /// Overwrite the state at an in-range coordinate.
    pub(crate) fn set_state(&mut self, row: u32, column: u32, state: TileFlags) {
        let i = self.index(row, column);
        self.tiles[i].set_state(state);
    }

    /// Reset `[from_row, to_row) x [from_column, to_column)` to EMPTY.
    pub(crate) fn clear_range(&mut self, from_row: u32, to_row: u32, from_column: u32, to_column: u32) {
        for row in from_row..to_row {
            let start = self.index(row, from_column);
            let end = self.index(row, to_column);
            for tile in &mut self.tiles[start..end] {
                tile.set_state(TileFlags::empty_tile());
            }
        }
    }

    /// Append or drop whole rows. Retained tiles keep state and id.
    pub(crate) fn resize_rows(&mut self, rows: u32) {
        if rows > self.rows {
            self.tiles.reserve((rows - self.rows) as usize * self.columns as usize);
            for row in self.rows..rows {
                for column in 0..self.columns {
                    self.tiles.push(Tile::new(row, column));
                }
            }
        } else {
            self.tiles.truncate(rows as usize * self.columns as usize);
        }
        self.rows = rows;
    }

    /// Append or drop columns on the right edge of every row.
    pub(crate) fn resize_columns(&mut self, columns: u32) {
        let mut tiles = Vec::with_capacity(self.rows as usize * columns as usize);
        for row in 0..self.rows {
            for column in 0..columns {
                if column < self.columns {
                    tiles.push(self.tiles[self.index(row, column)]);
                } else {
                    tiles.push(Tile::new(row, column));
                }
            }
        }
        self.tiles = tiles;
        self.columns = columns;
    }

    /// Replace every tile with a fresh empty one.
    pub(crate) fn reset(&mut self) {
        self.tiles = fresh_tiles(self.rows, self.columns);
    }
}

fn fresh_tiles(rows: u32, columns: u32) -> Vec<Tile> {
    let mut tiles = Vec::with_capacity(rows as usize * columns as usize);
    for row in 0..rows {
        for column in 0..columns {
            tiles.push(Tile::new(row, column));
        }
    }
    tiles
}

impl PlayFieldModel for TileStore {
    fn row_count(&self) -> u32 {
        self.rows
    }

    fn column_count(&self) -> u32 {
        self.columns
    }

    fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}
