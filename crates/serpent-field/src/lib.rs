//! Play-field model for Serpent.
//!
//! This crate defines the [`PlayFieldModel`] query trait and [`TileGrid`],
//! the mutable grid of [`Tile`](serpent_core::Tile)s that a game loop drives
//! and a renderer observes.
//!
//! # Change notification
//!
//! Every mutation of a [`TileGrid`] fires one [`FieldEvent`] describing the
//! smallest [`TileRegion`] that changed. Listeners run synchronously in
//! registration order and see the post-mutation field. A caller can bracket
//! a burst of mutations with
//! [`set_tiles_are_adjusting`](TileGrid::set_tiles_are_adjusting) so that
//! listeners know to defer expensive work until the batch ends.
//!
//! # Random selection
//!
//! The [`random`] module picks tiles uniformly with any `rand::Rng`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod listener;
pub mod model;
pub mod random;
pub mod region;
mod store;

#[cfg(test)]
pub(crate) mod compliance;

pub use config::{ConfigError, GridConfig, ResizePolicy};
pub use error::FieldError;
pub use event::FieldEvent;
pub use grid::TileGrid;
pub use listener::{ChannelListener, FieldListener, ListenerId, ListenerRegistry};
pub use model::PlayFieldModel;
pub use region::TileRegion;
