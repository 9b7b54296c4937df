//! Core types for the Serpent play field.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! encoded tile state ([`TileFlags`]), the pure flag arithmetic used by the
//! grid and by renderers, the four orthogonal [`Direction`]s, and the
//! [`Tile`] value type handed out by grid implementations.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod flags;
pub mod tile;

pub use direction::Direction;
pub use error::FlagError;
pub use flags::{
    binary_string, describe_directions, direction_count, directions, get_flag, invert_directions,
    kind_of, non_direction_flags, require_single_direction, set_flag, toggle_flag, with_kind,
    TileFlags,
};
pub use tile::{Tile, TileId, TileKind};
