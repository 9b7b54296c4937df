//! Test utilities for Serpent development.
//!
//! Provides a [`RecordingListener`] that keeps every event it receives and
//! ASCII-art fixtures (see [`fixtures`]) for building play fields in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use std::cell::RefCell;
use std::rc::Rc;

use serpent_field::{FieldEvent, FieldListener, PlayFieldModel};

pub use fixtures::{ascii_of, grid_from_ascii};

/// Listener that appends every event to a shared log.
///
/// Clones share the log, so register a clone with the grid and keep the
/// original for assertions:
///
/// ```
/// use serpent_field::TileGrid;
/// use serpent_test_utils::RecordingListener;
///
/// let mut grid = TileGrid::with_size(3, 3);
/// let rec = RecordingListener::new();
/// grid.add_listener(rec.clone());
/// grid.clear_tiles();
/// assert_eq!(rec.len(), 1);
/// ```
#[derive(Clone, Default)]
pub struct RecordingListener {
    events: Rc<RefCell<Vec<FieldEvent>>>,
}

impl RecordingListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far.
    pub fn events(&self) -> Vec<FieldEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    pub fn last(&self) -> Option<FieldEvent> {
        self.events.borrow().last().copied()
    }

    /// Forget recorded events.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

impl FieldListener for RecordingListener {
    fn field_changed(&mut self, _field: &dyn PlayFieldModel, event: &FieldEvent) {
        self.events.borrow_mut().push(*event);
    }
}
