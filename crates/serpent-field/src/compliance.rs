//! PlayFieldModel compliance test helpers.
//!
//! These functions verify that an implementation satisfies the invariants
//! the trait contract promises. Reused by the store and grid test modules.

use crate::model::PlayFieldModel;
use indexmap::IndexSet;
use serpent_core::{Direction, Tile};

/// Assert that `tile_count == rows * columns`.
pub fn assert_tile_count_matches_dimensions(field: &dyn PlayFieldModel) {
    assert_eq!(
        field.tile_count(),
        field.row_count() as usize * field.column_count() as usize,
        "tile_count ({}) != rows ({}) * columns ({})",
        field.tile_count(),
        field.row_count(),
        field.column_count()
    );
}

/// Assert that every tile reports the coordinates it is stored at.
pub fn assert_coordinates_match_position(field: &dyn PlayFieldModel) {
    for row in 0..field.row_count() {
        for column in 0..field.column_count() {
            let tile = field
                .tile(row, column)
                .expect("in-range coordinate should resolve");
            assert_eq!(
                (tile.row(), tile.column()),
                (row, column),
                "tile stored at ({row}, {column}) reports ({}, {})",
                tile.row(),
                tile.column()
            );
        }
    }
}

/// Assert that tile ids are unique and that every tile is contained.
pub fn assert_ids_unique_and_contained(field: &dyn PlayFieldModel) {
    let ids: IndexSet<_> = field.iter().map(Tile::id).collect();
    assert_eq!(ids.len(), field.tile_count(), "duplicate tile ids");
    for tile in field.iter() {
        assert!(field.contains_tile(tile), "{tile} not contained");
    }
}

/// Assert that stepping in a direction and back returns to the same tile
/// on a wrapping field.
pub fn assert_wrapped_steps_reversible(field: &dyn PlayFieldModel) {
    for tile in field.iter() {
        for d in Direction::ALL {
            let there = field
                .adjacent_tile(tile.row(), tile.column(), d, true)
                .expect("origin in range")
                .expect("wrapping always finds a neighbour");
            let back = field
                .adjacent_tile(there.row(), there.column(), d.opposite(), true)
                .expect("origin in range")
                .expect("wrapping always finds a neighbour");
            assert_eq!(back.id(), tile.id(), "step {d} and back from {tile}");
        }
    }
}

/// Assert that filtered counts agree with filtered list lengths.
pub fn assert_filtered_count_matches_list(field: &dyn PlayFieldModel) {
    let predicates: [&dyn Fn(&Tile) -> bool; 5] = [
        &Tile::is_empty,
        &Tile::is_apple,
        &Tile::is_snake,
        &|_| true,
        &|_| false,
    ];
    for p in predicates {
        assert_eq!(field.filtered_tile_count(p), field.filtered_tiles(p).len());
    }
    assert_eq!(
        field.empty_tile_count() + field.apple_tile_count() + field.snake_tile_count(),
        field.filtered_tile_count(&|t: &Tile| t.kind().is_some())
    );
}

/// Run all compliance checks on a field.
pub fn run_full_compliance(field: &dyn PlayFieldModel) {
    assert_tile_count_matches_dimensions(field);
    assert_coordinates_match_position(field);
    assert_ids_unique_and_contained(field);
    assert_wrapped_steps_reversible(field);
    assert_filtered_count_matches_list(field);
}
