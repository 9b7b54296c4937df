//! Uniform random tile selection.
//!
//! Thin helpers over [`PlayFieldModel`] queries. Callers pass their own RNG;
//! a seeded `rand_chacha::ChaCha8Rng` gives reproducible apple placement.

use crate::model::PlayFieldModel;
use rand::seq::SliceRandom;
use rand::Rng;
use serpent_core::Tile;

/// A tile at a uniformly random row and column, or `None` if the field
/// has no tiles.
pub fn random_tile<'a, M, R>(field: &'a M, rng: &mut R) -> Option<&'a Tile>
where
    M: PlayFieldModel + ?Sized,
    R: Rng + ?Sized,
{
    if field.row_count() == 0 || field.column_count() == 0 {
        return None;
    }
    let row = rng.gen_range(0..field.row_count());
    let column = rng.gen_range(0..field.column_count());
    field.get(row, column)
}

/// A uniformly chosen element of `tiles`, or `None` when it is empty.
pub fn random_tile_from<'a, R>(tiles: &'a [Tile], rng: &mut R) -> Option<&'a Tile>
where
    R: Rng + ?Sized,
{
    tiles.choose(rng)
}

/// A uniformly chosen empty tile, or `None` if every tile is occupied.
pub fn random_empty_tile<M, R>(field: &M, rng: &mut R) -> Option<Tile>
where
    M: PlayFieldModel + ?Sized,
    R: Rng + ?Sized,
{
    random_tile_from(&field.empty_tiles(), rng).copied()
}

/// A uniformly chosen apple tile, or `None` if there is no apple.
pub fn random_apple_tile<M, R>(field: &M, rng: &mut R) -> Option<Tile>
where
    M: PlayFieldModel + ?Sized,
    R: Rng + ?Sized,
{
    random_tile_from(&field.apple_tiles(), rng).copied()
}
