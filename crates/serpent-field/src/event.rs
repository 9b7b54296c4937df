//! Change events fired by a [`TileGrid`](crate::TileGrid).

use crate::region::TileRegion;

/// One change to a play field, delivered to every listener.
///
/// `adjusting` captures [`tiles_are_adjusting`](crate::TileGrid::tiles_are_adjusting)
/// at fire time. Listeners may defer expensive work while it is `true`;
/// the grid fires a summary event with `adjusting == false` when the
/// batch ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldEvent {
    /// Rows or columns were appended; `region` covers the new tiles.
    Added {
        /// Tiles that now exist.
        region: TileRegion,
        /// Adjusting flag at fire time.
        adjusting: bool,
    },
    /// Rows or columns were dropped; `region` covers the discarded
    /// coordinates, which are no longer valid.
    Removed {
        /// Tiles that no longer exist.
        region: TileRegion,
        /// Adjusting flag at fire time.
        adjusting: bool,
    },
    /// Tile states inside `region` changed.
    Changed {
        /// Minimal rectangle enclosing the changed tiles.
        region: TileRegion,
        /// Adjusting flag at fire time.
        adjusting: bool,
    },
    /// The field was replaced wholesale; every tile should be re-read.
    StructureChanged {
        /// Adjusting flag at fire time.
        adjusting: bool,
    },
}

impl FieldEvent {
    /// The affected region, or `None` for [`StructureChanged`](Self::StructureChanged).
    pub fn region(&self) -> Option<TileRegion> {
        match *self {
            Self::Added { region, .. } | Self::Removed { region, .. } | Self::Changed { region, .. } => {
                Some(region)
            }
            Self::StructureChanged { .. } => None,
        }
    }

    /// The adjusting flag captured when the event fired.
    pub fn adjusting(&self) -> bool {
        match *self {
            Self::Added { adjusting, .. }
            | Self::Removed { adjusting, .. }
            | Self::Changed { adjusting, .. }
            | Self::StructureChanged { adjusting } => adjusting,
        }
    }

    /// `true` if the event reflects a change of grid shape rather than
    /// tile content.
    pub fn is_structural(&self) -> bool {
        !matches!(self, Self::Changed { .. })
    }
}
