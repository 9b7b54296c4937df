//! ASCII-art play-field fixtures.
//!
//! One character per tile, one string per row:
//!
//! - `.` empty
//! - `@` apple
//! - `S` snake segment
//! - `s` snake segment in the alternate colour
//!
//! Snake segments get direction bits towards every orthogonally adjacent
//! snake segment (no wrapping), which is how a renderer expects a
//! continuous body to be encoded.

use serpent_core::{Direction, TileFlags};
use serpent_field::{PlayFieldModel, TileGrid};

/// Build a resizable grid from ASCII rows.
///
/// Panics on ragged rows or unknown characters.
pub fn grid_from_ascii(rows: &[&str]) -> TileGrid {
    assert!(!rows.is_empty(), "fixture needs at least one row");
    let cells: Vec<Vec<char>> = rows.iter().map(|r| r.chars().collect()).collect();
    let width = cells[0].len();
    assert!(
        cells.iter().all(|r| r.len() == width),
        "fixture rows must have equal length"
    );

    let is_snake = |r: i64, c: i64| -> bool {
        r >= 0
            && c >= 0
            && (r as usize) < cells.len()
            && (c as usize) < width
            && matches!(cells[r as usize][c as usize], 'S' | 's')
    };

    let mut grid = TileGrid::with_size(cells.len() as u32, width as u32);
    assert_eq!(
        (grid.row_count() as usize, grid.column_count() as usize),
        (cells.len(), width),
        "fixture size outside default grid bounds"
    );

    let mut updates = Vec::new();
    for (r, row) in cells.iter().enumerate() {
        for (c, &ch) in row.iter().enumerate() {
            let state = match ch {
                '.' => continue,
                '@' => TileFlags::apple(),
                'S' | 's' => {
                    let mut dirs = TileFlags::empty();
                    for d in Direction::ALL {
                        let (dr, dc) = d.delta();
                        if is_snake(r as i64 + dr, c as i64 + dc) {
                            dirs |= d.flag();
                        }
                    }
                    TileFlags::snake(dirs, ch == 's')
                }
                other => panic!("unknown fixture character {other:?}"),
            };
            updates.push((r as u32, c as u32, state));
        }
    }
    grid.set_tile_states(&updates)
        .expect("fixture coordinates are in range");
    grid
}

/// Render a field back to the fixture notation.
///
/// Tiles with an invalid kind render as `?`.
pub fn ascii_of(field: &dyn PlayFieldModel) -> Vec<String> {
    (0..field.row_count())
        .map(|r| {
            (0..field.column_count())
                .map(|c| match field.get(r, c) {
                    Some(t) if t.is_empty() => '.',
                    Some(t) if t.is_apple() => '@',
                    Some(t) if t.is_alternate() => 's',
                    Some(t) if t.is_snake() => 'S',
                    _ => '?',
                })
                .collect()
        })
        .collect()
}
