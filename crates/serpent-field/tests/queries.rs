use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serpent_core::{Direction, Tile, TileFlags};
use serpent_field::random::{random_apple_tile, random_empty_tile};
use serpent_field::{FieldError, GridConfig, PlayFieldModel, TileGrid};
use serpent_test_utils::{ascii_of, grid_from_ascii};

#[test]
fn top_edge_wraps_to_bottom_only_when_asked() {
    let grid = TileGrid::new(GridConfig::fixed(5, 5)).unwrap();

    let up = grid.adjacent_tile(0, 2, Direction::Up, true).unwrap().unwrap();
    assert_eq!((up.row(), up.column()), (4, 2));
    assert!(grid.adjacent_tile(0, 2, Direction::Up, false).unwrap().is_none());

    let left = grid.adjacent_tile(3, 0, Direction::Left, true).unwrap().unwrap();
    assert_eq!((left.row(), left.column()), (3, 4));
}

#[test]
fn encoded_direction_uses_alternate_bit_as_no_wrap() {
    let grid = TileGrid::with_size(5, 5);

    let wrapped = grid.adjacent_tile_encoded(4, 1, TileFlags::DOWN).unwrap();
    assert_eq!(wrapped.map(|t| t.row()), Some(0));

    let clipped = grid
        .adjacent_tile_encoded(4, 1, TileFlags::DOWN | TileFlags::ALTERNATE_TYPE)
        .unwrap();
    assert!(clipped.is_none());

    assert!(matches!(
        grid.adjacent_tile_encoded(2, 2, TileFlags::UP_LEFT),
        Err(FieldError::InvalidArgument { .. })
    ));
    assert!(matches!(
        grid.adjacent_tile_by_flags(2, 2, TileFlags::APPLE, true),
        Err(FieldError::InvalidArgument { .. })
    ));
}

#[test]
fn snake_body_can_be_walked_from_its_tail() {
    let grid = grid_from_ascii(&[".....", ".SSS.", "...S.", "....."]);

    let tail = grid.tile(1, 1).unwrap();
    let next = grid.next_tile(tail.row(), tail.column(), false).unwrap().unwrap();
    assert_eq!((next.row(), next.column()), (1, 2));

    // Interior segments carry two directions.
    assert!(matches!(
        grid.next_tile(1, 2, false),
        Err(FieldError::InvalidDirectionCount(_))
    ));
    let body = grid.connected_tiles(1, 3, false).unwrap();
    let coords: Vec<_> = body.iter().map(|t| (t.row(), t.column())).collect();
    assert_eq!(coords, vec![(2, 3), (1, 2)]);
}

#[test]
fn kind_queries_partition_the_field() {
    let grid = grid_from_ascii(&["@..S", ".sS.", "..@@"]);

    assert_eq!(grid.apple_tile_count(), 3);
    assert_eq!(grid.snake_tile_count(), 3);
    assert_eq!(grid.empty_tile_count(), 6);

    let alternate = grid.filtered_tiles(&Tile::is_alternate);
    assert_eq!(alternate.len(), 1);
    assert_eq!((alternate[0].row(), alternate[0].column()), (1, 1));
}

#[test]
fn random_empty_tile_avoids_occupied_tiles() {
    let grid = grid_from_ascii(&["SS@", "S.S", "@SS"]);
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for _ in 0..32 {
        let t = random_empty_tile(&grid, &mut rng).unwrap();
        assert_eq!((t.row(), t.column()), (1, 1));
    }
    let apple = random_apple_tile(&grid, &mut rng).unwrap();
    assert!(apple.is_apple());

    let full = grid_from_ascii(&["SS", "S@"]);
    assert!(random_empty_tile(&full, &mut rng).is_none());
}

#[test]
fn resizing_keeps_content_of_retained_tiles() {
    let mut grid = grid_from_ascii(&["@.S", "..S", "..."]);
    grid.set_column_count(2).unwrap();
    grid.set_row_count(4).unwrap();

    assert_eq!(ascii_of(&grid), vec!["@.", "..", "..", ".."]);
}

fn arb_state() -> impl Strategy<Value = TileFlags> {
    prop_oneof![
        Just(TileFlags::empty_tile()),
        Just(TileFlags::apple()),
        (0u32..16, any::<bool>()).prop_map(|(dirs, alt)| {
            TileFlags::snake(TileFlags::from_bits_retain(dirs), alt)
        }),
    ]
}

proptest! {
    #[test]
    fn filtered_count_equals_filtered_list(
        rows in 1u32..12,
        columns in 1u32..12,
        states in prop::collection::vec(arb_state(), 1..64),
    ) {
        let mut grid = TileGrid::with_size(rows, columns);
        for (i, state) in states.into_iter().enumerate() {
            let i = i as u32 % (rows * columns);
            grid.set_tile_state(i / columns, i % columns, state).unwrap();
        }

        prop_assert_eq!(grid.empty_tile_count(), grid.empty_tiles().len());
        prop_assert_eq!(grid.apple_tile_count(), grid.apple_tiles().len());
        prop_assert_eq!(grid.snake_tile_count(), grid.snake_tiles().len());
        prop_assert_eq!(
            grid.empty_tile_count() + grid.apple_tile_count() + grid.snake_tile_count(),
            grid.tile_count()
        );
    }

    #[test]
    fn wrapped_neighbours_always_exist_and_step_back(
        rows in 1u32..10,
        columns in 1u32..10,
        r in 0u32..10,
        c in 0u32..10,
    ) {
        let grid = TileGrid::with_size(rows, columns);
        let (r, c) = (r % rows, c % columns);
        for d in Direction::ALL {
            let there = grid.adjacent_tile(r, c, d, true).unwrap().unwrap();
            let back = grid
                .adjacent_tile(there.row(), there.column(), d.opposite(), true)
                .unwrap()
                .unwrap();
            prop_assert_eq!((back.row(), back.column()), (r, c));
        }
    }

    #[test]
    fn clearing_a_range_empties_exactly_that_range(
        fr in 0u32..6, tr in 0u32..6, fc in 0u32..6, tc in 0u32..6,
    ) {
        let (fr, tr) = (fr.min(tr), fr.max(tr));
        let (fc, tc) = (fc.min(tc), fc.max(tc));
        let mut grid = grid_from_ascii(&["@@@@@@"; 6]);
        grid.clear_tiles_in(fr, tr, fc, tc).unwrap();

        let expected = ((tr - fr) * (tc - fc)) as usize;
        prop_assert_eq!(grid.empty_tile_count(), expected);
        for t in grid.empty_tiles() {
            prop_assert!((fr..tr).contains(&t.row()) && (fc..tc).contains(&t.column()));
        }
    }
}
