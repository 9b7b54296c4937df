//! [`TileGrid`]: the mutable play field that drives change notification.

use crate::config::{ConfigError, GridConfig, ResizePolicy};
use crate::error::FieldError;
use crate::event::FieldEvent;
use crate::listener::{FieldListener, ListenerId, ListenerRegistry};
use crate::model::PlayFieldModel;
use crate::region::TileRegion;
use crate::store::TileStore;
use serpent_core::{kind_of, Tile, TileFlags};
use tracing::debug;

/// What the summary event at the end of an adjusting batch must report.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Pending {
    Nothing,
    Region(TileRegion),
    Structure,
}

impl Pending {
    fn absorb(self, event: &FieldEvent) -> Self {
        match (self, event) {
            (Self::Structure, _) => Self::Structure,
            (_, e) if e.is_structural() => Self::Structure,
            (Self::Nothing, FieldEvent::Changed { region, .. }) => Self::Region(*region),
            (Self::Region(acc), FieldEvent::Changed { region, .. }) => {
                Self::Region(acc.union(region))
            }
            (p, _) => p,
        }
    }
}

/// A rectangular play field of tiles with synchronous change listeners.
///
/// All mutation goes through methods on the grid; each successful mutation
/// that touches at least one tile fires exactly one [`FieldEvent`]
/// describing the minimal enclosing rectangle. Queries come from
/// [`PlayFieldModel`].
///
/// # Examples
///
/// ```
/// use serpent_core::TileFlags;
/// use serpent_field::{GridConfig, PlayFieldModel, TileGrid};
///
/// let mut grid = TileGrid::new(GridConfig::fixed(5, 5)).unwrap();
/// grid.set_tile_state(2, 3, TileFlags::apple()).unwrap();
/// assert_eq!(grid.apple_tile_count(), 1);
///
/// grid.clear_tiles();
/// assert_eq!(grid.empty_tile_count(), 25);
/// ```
#[derive(Debug)]
pub struct TileGrid {
    store: TileStore,
    policy: ResizePolicy,
    adjusting: bool,
    pending: Pending,
    listeners: ListenerRegistry,
}

impl TileGrid {
    /// Build a grid from `config`.
    ///
    /// The requested size is clamped into the policy's bounds; only an
    /// invalid policy (or a zero/oversized fixed size) is rejected.
    pub fn new(config: GridConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (rows, columns) = config.resolved_size();
        Ok(Self::from_parts(rows, columns, config.resize))
    }

    /// A resizable grid with the default bounds, size clamped into them.
    pub fn with_size(rows: u32, columns: u32) -> Self {
        let policy = ResizePolicy::default();
        Self::from_parts(policy.clamp(rows), policy.clamp(columns), policy)
    }

    fn from_parts(rows: u32, columns: u32, policy: ResizePolicy) -> Self {
        debug!(rows, columns, ?policy, "creating play field");
        Self {
            store: TileStore::new(rows, columns),
            policy,
            adjusting: false,
            pending: Pending::Nothing,
            listeners: ListenerRegistry::new(),
        }
    }

    /// The resize policy this grid was built with.
    pub fn resize_policy(&self) -> ResizePolicy {
        self.policy
    }

    // ── Listeners ──────────────────────────────────────────────────

    /// Register a listener; it is notified after all earlier ones.
    pub fn add_listener<L>(&mut self, listener: L) -> ListenerId
    where
        L: FieldListener + 'static,
    {
        self.listeners.add(Box::new(listener))
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_listener(&mut self, id: ListenerId) -> bool {
        self.listeners.remove(id)
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    fn fire(&mut self, event: FieldEvent) {
        if self.adjusting {
            self.pending = self.pending.absorb(&event);
        }
        self.listeners.notify(&self.store, &event);
    }

    fn fire_changed(&mut self, region: TileRegion) {
        let adjusting = self.adjusting;
        self.fire(FieldEvent::Changed { region, adjusting });
    }

    // ── Adjusting ──────────────────────────────────────────────────

    /// Whether a batch of related mutations is in progress.
    pub fn tiles_are_adjusting(&self) -> bool {
        self.adjusting
    }

    /// Begin (`true`) or end (`false`) a batch of related mutations.
    ///
    /// Events keep firing immediately during a batch, tagged
    /// `adjusting: true`. Ending a batch in which anything fired sends one
    /// summary event tagged `adjusting: false`: a `Changed` covering the
    /// union of changed regions, or `StructureChanged` if the shape changed.
    /// Setting the current value again does nothing.
    pub fn set_tiles_are_adjusting(&mut self, adjusting: bool) {
        if adjusting == self.adjusting {
            return;
        }
        debug!(adjusting, "tiles adjusting");
        self.adjusting = adjusting;
        if adjusting {
            self.pending = Pending::Nothing;
            return;
        }
        match std::mem::replace(&mut self.pending, Pending::Nothing) {
            Pending::Nothing => {}
            Pending::Region(region) => self.fire_changed(region),
            Pending::Structure => self.fire(FieldEvent::StructureChanged { adjusting: false }),
        }
    }

    // ── Tile mutation ──────────────────────────────────────────────

    /// Replace the state of one tile.
    ///
    /// Fails with [`FieldError::IndexOutOfRange`] for an off-grid
    /// coordinate and [`FieldError::InvalidArgument`] when `state` does not
    /// carry exactly one content kind.
    pub fn set_tile_state(
        &mut self,
        row: u32,
        column: u32,
        state: TileFlags,
    ) -> Result<(), FieldError> {
        self.store.tile(row, column)?;
        check_kind(state)?;
        self.store.set_state(row, column, state);
        self.fire_changed(TileRegion::single(row, column));
        Ok(())
    }

    /// Read-modify-write one tile's state; returns the new state.
    ///
    /// Same validation and notification as [`set_tile_state`](Self::set_tile_state).
    pub fn update_tile_state<F>(
        &mut self,
        row: u32,
        column: u32,
        f: F,
    ) -> Result<TileFlags, FieldError>
    where
        F: FnOnce(TileFlags) -> TileFlags,
    {
        let state = f(self.store.tile(row, column)?.state());
        self.set_tile_state(row, column, state)?;
        Ok(state)
    }

    /// Replace the states of several tiles, firing one event.
    ///
    /// Every entry is validated before any tile changes. The event's region
    /// is the smallest rectangle enclosing all entries. An empty slice does
    /// nothing.
    pub fn set_tile_states(&mut self, updates: &[(u32, u32, TileFlags)]) -> Result<(), FieldError> {
        let mut region: Option<TileRegion> = None;
        for &(row, column, state) in updates {
            self.store.tile(row, column)?;
            check_kind(state)?;
            let cell = TileRegion::single(row, column);
            region = Some(region.map_or(cell, |r| r.union(&cell)));
        }
        let Some(region) = region else {
            return Ok(());
        };
        for &(row, column, state) in updates {
            self.store.set_state(row, column, state);
        }
        self.fire_changed(region);
        Ok(())
    }

    /// Reset every tile in `[from_row, to_row) x [from_column, to_column)`
    /// to EMPTY, firing one event for the whole region.
    ///
    /// Fails with [`FieldError::IndexOutOfRange`] if a bound exceeds the
    /// grid or a range is reversed. An empty range changes nothing and
    /// fires nothing.
    pub fn clear_tiles_in(
        &mut self,
        from_row: u32,
        to_row: u32,
        from_column: u32,
        to_column: u32,
    ) -> Result<(), FieldError> {
        check_range("row", from_row, to_row, self.store.row_count())?;
        check_range("column", from_column, to_column, self.store.column_count())?;
        if from_row == to_row || from_column == to_column {
            return Ok(());
        }
        self.store.clear_range(from_row, to_row, from_column, to_column);
        let region = TileRegion::new(from_row, to_row - 1, from_column, to_column - 1);
        debug!(%region, "cleared tiles");
        self.fire_changed(region);
        Ok(())
    }

    /// Reset every tile to EMPTY, firing one event.
    pub fn clear_tiles(&mut self) {
        let rows = self.store.row_count();
        let columns = self.store.column_count();
        self.store.clear_range(0, rows, 0, columns);
        let region = TileRegion::new(0, rows - 1, 0, columns - 1);
        debug!(%region, "cleared tiles");
        self.fire_changed(region);
    }

    /// Replace every tile with a fresh EMPTY tile and fire
    /// [`FieldEvent::StructureChanged`].
    ///
    /// Unlike [`clear_tiles`](Self::clear_tiles), the new tiles get new
    /// ids, so previously obtained [`Tile`] copies are no longer
    /// [`contained`](PlayFieldModel::contains_tile).
    pub fn reset(&mut self) {
        self.store.reset();
        debug!(
            rows = self.store.row_count(),
            columns = self.store.column_count(),
            "reset play field"
        );
        let adjusting = self.adjusting;
        self.fire(FieldEvent::StructureChanged { adjusting });
    }

    // ── Resizing ───────────────────────────────────────────────────

    fn check_resize(&self, operation: &'static str, value: u32) -> Result<(), FieldError> {
        match self.policy {
            ResizePolicy::Fixed => Err(FieldError::UnsupportedOperation { operation }),
            ResizePolicy::Bounded { min, max } if value < min || value > max => {
                Err(FieldError::InvalidArgument {
                    reason: format!("{operation}({value}) outside [{min}, {max}]"),
                })
            }
            ResizePolicy::Bounded { .. } => Ok(()),
        }
    }

    /// Change the number of rows, keeping the tiles of retained rows.
    ///
    /// New rows are appended at the bottom, removed rows dropped from the
    /// bottom; one `Added` or `Removed` event covers the delta.
    pub fn set_row_count(&mut self, rows: u32) -> Result<(), FieldError> {
        self.check_resize("set_row_count", rows)?;
        let old = self.store.row_count();
        if rows == old {
            return Ok(());
        }
        self.store.resize_rows(rows);
        debug!(from = old, to = rows, "resized play field rows");
        let last_column = self.store.column_count() - 1;
        let adjusting = self.adjusting;
        let event = if rows > old {
            FieldEvent::Added {
                region: TileRegion::new(old, rows - 1, 0, last_column),
                adjusting,
            }
        } else {
            FieldEvent::Removed {
                region: TileRegion::new(rows, old - 1, 0, last_column),
                adjusting,
            }
        };
        self.fire(event);
        Ok(())
    }

    /// Change the number of columns, keeping the tiles of retained columns.
    ///
    /// Columns are appended or dropped on the right; one `Added` or
    /// `Removed` event covers the delta.
    pub fn set_column_count(&mut self, columns: u32) -> Result<(), FieldError> {
        self.check_resize("set_column_count", columns)?;
        let old = self.store.column_count();
        if columns == old {
            return Ok(());
        }
        self.store.resize_columns(columns);
        debug!(from = old, to = columns, "resized play field columns");
        let last_row = self.store.row_count() - 1;
        let adjusting = self.adjusting;
        let event = if columns > old {
            FieldEvent::Added {
                region: TileRegion::new(0, last_row, old, columns - 1),
                adjusting,
            }
        } else {
            FieldEvent::Removed {
                region: TileRegion::new(0, last_row, columns, old - 1),
                adjusting,
            }
        };
        self.fire(event);
        Ok(())
    }
}

impl Default for TileGrid {
    fn default() -> Self {
        let config = GridConfig::default();
        let (rows, columns) = config.resolved_size();
        Self::from_parts(rows, columns, config.resize)
    }
}

impl PlayFieldModel for TileGrid {
    fn row_count(&self) -> u32 {
        self.store.row_count()
    }

    fn column_count(&self) -> u32 {
        self.store.column_count()
    }

    fn tiles(&self) -> &[Tile] {
        self.store.tiles()
    }
}

fn check_kind(state: TileFlags) -> Result<(), FieldError> {
    if kind_of(state).is_none() {
        return Err(FieldError::InvalidArgument {
            reason: format!(
                "state {:#010b} must carry exactly one of EMPTY, APPLE, SNAKE",
                state.bits()
            ),
        });
    }
    Ok(())
}

fn check_range(axis: &'static str, from: u32, to: u32, len: u32) -> Result<(), FieldError> {
    let (from_name, to_name) = match axis {
        "row" => ("from_row", "to_row"),
        _ => ("from_column", "to_column"),
    };
    if to > len {
        return Err(FieldError::IndexOutOfRange {
            axis: to_name,
            index: to,
            bound: len,
        });
    }
    if from > to {
        return Err(FieldError::IndexOutOfRange {
            axis: from_name,
            index: from,
            bound: to,
        });
    }
    Ok(())
}
