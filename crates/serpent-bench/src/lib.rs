//! Benchmark profiles for the Serpent play-field model.
//!
//! - [`populated_field`]: a grid with a seeded scatter of apples and one
//!   long snake, so kind queries have realistic mixes to filter
//! - [`snake_path`]: the boustrophedon path that snake follows

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serpent_core::{Direction, TileFlags};
use serpent_field::{FieldError, PlayFieldModel, TileGrid};

/// Coordinates of a snake of `length` segments winding left-to-right then
/// right-to-left down the rows of a `columns`-wide field.
pub fn snake_path(columns: u32, length: usize) -> Vec<(u32, u32)> {
    (0..length as u32)
        .map(|i| {
            let row = i / columns;
            let offset = i % columns;
            let column = if row % 2 == 0 { offset } else { columns - 1 - offset };
            (row, column)
        })
        .collect()
}

/// Build a `rows` x `columns` field holding a snake that fills a quarter
/// of the tiles and apples on roughly a tenth of the remainder.
///
/// Apple placement is deterministic in `seed`.
pub fn populated_field(rows: u32, columns: u32, seed: u64) -> Result<TileGrid, FieldError> {
    let mut grid = TileGrid::with_size(rows, columns);
    let (rows, columns) = (grid.row_count(), grid.column_count());
    let path = snake_path(columns, (rows * columns / 4).max(1) as usize);

    let mut updates = Vec::with_capacity(path.len());
    for (i, &(r, c)) in path.iter().enumerate() {
        let mut dirs = TileFlags::empty();
        for neighbour in [i.checked_sub(1), Some(i + 1)].into_iter().flatten() {
            if let Some(&(nr, nc)) = path.get(neighbour) {
                dirs |= step_towards((r, c), (nr, nc)).flag();
            }
        }
        updates.push((r, c, TileFlags::snake(dirs, i % 2 == 1)));
    }

    grid.set_tiles_are_adjusting(true);
    grid.set_tile_states(&updates)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    for r in 0..rows {
        for c in 0..columns {
            if grid.tile(r, c)?.is_empty() && rng.gen_ratio(1, 10) {
                grid.set_tile_state(r, c, TileFlags::apple())?;
            }
        }
    }
    grid.set_tiles_are_adjusting(false);
    Ok(grid)
}

/// Direction of the orthogonal step from `from` to `to`.
fn step_towards(from: (u32, u32), to: (u32, u32)) -> Direction {
    match (to.0 as i64 - from.0 as i64, to.1 as i64 - from.1 as i64) {
        (-1, _) => Direction::Up,
        (1, _) => Direction::Down,
        (_, -1) => Direction::Left,
        _ => Direction::Right,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_path_turns_at_the_edge() {
        assert_eq!(
            snake_path(3, 5),
            vec![(0, 0), (0, 1), (0, 2), (1, 2), (1, 1)]
        );
    }

    #[test]
    fn populated_field_is_deterministic() {
        let a = populated_field(20, 20, 7).unwrap();
        let b = populated_field(20, 20, 7).unwrap();
        assert_eq!(a.snake_tile_count(), 100);
        assert_eq!(a.apple_tile_count(), b.apple_tile_count());
        let states = |g: &TileGrid| g.iter().map(|t| t.state()).collect::<Vec<_>>();
        assert_eq!(states(&a), states(&b));
    }

    #[test]
    fn snake_body_is_walkable_from_the_tail() {
        let grid = populated_field(6, 6, 1).unwrap();
        let next = grid.next_tile(0, 0, false).unwrap().unwrap();
        assert_eq!((next.row(), next.column()), (0, 1));
        let interior = grid.connected_tiles(0, 5, false).unwrap();
        assert_eq!(interior.len(), 2);
    }
}
