//! Serpent: the play-field model of a Snake game.
//!
//! This is the facade crate that re-exports the public API of the Serpent
//! sub-crates. A game loop mutates a [`field::TileGrid`]; a renderer
//! registers a listener and redraws the regions each
//! [`field::FieldEvent`] reports.
//!
//! # Quick start
//!
//! ```rust
//! use serpent::prelude::*;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut grid = TileGrid::new(GridConfig::fixed(8, 8)).unwrap();
//! let (listener, events) = ChannelListener::unbounded();
//! grid.add_listener(listener);
//!
//! // A two-segment snake on the top row, head at column 1.
//! grid.set_tiles_are_adjusting(true);
//! grid.set_tile_state(0, 0, TileFlags::snake(TileFlags::RIGHT, false)).unwrap();
//! grid.set_tile_state(0, 1, TileFlags::snake(TileFlags::LEFT, false)).unwrap();
//! grid.set_tiles_are_adjusting(false);
//!
//! // Drop an apple somewhere free.
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let spot = serpent::field::random::random_empty_tile(&grid, &mut rng).unwrap();
//! grid.set_tile_state(spot.row(), spot.column(), TileFlags::apple()).unwrap();
//!
//! // Moving up from the top row wraps to the bottom.
//! let ahead = grid.adjacent_tile(0, 1, Direction::Up, true).unwrap().unwrap();
//! assert_eq!(ahead.row(), 7);
//!
//! // Two tagged events, one batch summary, one apple.
//! assert_eq!(events.try_iter().count(), 4);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `serpent-core` | Tile flags, directions, tiles, flag arithmetic |
//! | [`field`] | `serpent-field` | Grid model, queries, events, listeners, random selection |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Tile state encoding and flag arithmetic (`serpent-core`).
///
/// [`types::TileFlags`] is the state word; free functions such as
/// [`types::invert_directions`] operate on it.
pub use serpent_core as types;

/// Play-field grid, queries, and change notification (`serpent-field`).
pub use serpent_field as field;

/// Common imports for typical Serpent usage.
///
/// ```rust
/// use serpent::prelude::*;
/// ```
pub mod prelude {
    // Tile state
    pub use serpent_core::{Direction, Tile, TileFlags, TileId, TileKind};

    // Field
    pub use serpent_field::{
        ChannelListener, FieldEvent, FieldListener, GridConfig, PlayFieldModel, ResizePolicy,
        TileGrid, TileRegion,
    };

    // Errors
    pub use serpent_core::FlagError;
    pub use serpent_field::{ConfigError, FieldError};
}
