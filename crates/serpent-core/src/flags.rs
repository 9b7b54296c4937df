//! Tile state word layout and the pure arithmetic over it.
//!
//! A tile's state is a single `u32` split into non-overlapping groups:
//!
//! | Bits | Group | Members |
//! |------|-------|---------|
//! | 0..4 | direction | `UP`, `DOWN`, `LEFT`, `RIGHT` |
//! | 4..7 | content kind | `EMPTY`, `APPLE`, `SNAKE` |
//! | 7    | variant | `ALTERNATE_TYPE` |
//!
//! `DOWN` is `UP << 1` and `RIGHT` is `LEFT << 1`;
//! [`invert_directions`] relies on that.
//!
//! The free functions in this module operate on raw bits and never drop
//! bits that are not named in [`TileFlags`].

use crate::error::FlagError;
use crate::tile::TileKind;

bitflags::bitflags! {
    /// Encoded state of a single tile.
    ///
    /// # Examples
    ///
    /// ```
    /// use serpent_core::{invert_directions, TileFlags};
    ///
    /// let body = TileFlags::SNAKE | TileFlags::UP | TileFlags::RIGHT;
    /// let flipped = invert_directions(body);
    /// assert_eq!(flipped, TileFlags::SNAKE | TileFlags::DOWN | TileFlags::LEFT);
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
    pub struct TileFlags: u32 {
        /// Connects to the tile above.
        const UP = 0b0000_0001;
        /// Connects to the tile below.
        const DOWN = 0b0000_0010;
        /// Connects to the tile on the left.
        const LEFT = 0b0000_0100;
        /// Connects to the tile on the right.
        const RIGHT = 0b0000_1000;

        /// Union of the four direction bits.
        const ALL_DIRECTIONS = Self::UP.bits() | Self::DOWN.bits() | Self::LEFT.bits() | Self::RIGHT.bits();
        /// `UP | LEFT`.
        const UP_LEFT = Self::UP.bits() | Self::LEFT.bits();
        /// `UP | RIGHT`.
        const UP_RIGHT = Self::UP.bits() | Self::RIGHT.bits();
        /// `DOWN | LEFT`.
        const DOWN_LEFT = Self::DOWN.bits() | Self::LEFT.bits();
        /// `DOWN | RIGHT`.
        const DOWN_RIGHT = Self::DOWN.bits() | Self::RIGHT.bits();
        /// `UP | DOWN`.
        const VERTICAL = Self::UP.bits() | Self::DOWN.bits();
        /// `LEFT | RIGHT`.
        const HORIZONTAL = Self::LEFT.bits() | Self::RIGHT.bits();

        /// Nothing on the tile.
        const EMPTY = 0b0001_0000;
        /// An apple.
        const APPLE = 0b0010_0000;
        /// A snake segment.
        const SNAKE = 0b0100_0000;
        /// Union of the three content-kind bits.
        const ALL_KINDS = Self::EMPTY.bits() | Self::APPLE.bits() | Self::SNAKE.bits();

        /// Colour variant of a snake segment. Also used as the "do not wrap"
        /// marker in encoded adjacency queries.
        const ALTERNATE_TYPE = 0b1000_0000;
    }
}

/// Bits of the "up or left" half of the direction group.
const UP_LEFT_BITS: u32 = TileFlags::UP_LEFT.bits();

impl TileFlags {
    /// Width of the named part of the state word, for [`binary_string`].
    pub const BIT_WIDTH: usize = 8;

    /// State of a freshly created tile.
    pub const fn empty_tile() -> Self {
        Self::EMPTY
    }

    /// State of an apple tile.
    pub const fn apple() -> Self {
        Self::APPLE
    }

    /// State of a snake segment connecting to `directions`.
    ///
    /// Bits of `directions` outside the direction group are ignored.
    pub fn snake(directions: TileFlags, alternate: bool) -> Self {
        let mut state = Self::SNAKE | directions.intersection(Self::ALL_DIRECTIONS);
        if alternate {
            state |= Self::ALTERNATE_TYPE;
        }
        state
    }

    /// The active content kind, if exactly one kind bit is set.
    pub fn kind(self) -> Option<TileKind> {
        kind_of(self)
    }
}

/// `true` when every bit of `flag` is set in `flags`.
pub fn get_flag(flags: TileFlags, flag: TileFlags) -> bool {
    flags.bits() & flag.bits() == flag.bits()
}

/// Set (`value == true`) or clear every bit of `flag` in `flags`.
pub fn set_flag(flags: TileFlags, flag: TileFlags, value: bool) -> TileFlags {
    if value {
        TileFlags::from_bits_retain(flags.bits() | flag.bits())
    } else {
        TileFlags::from_bits_retain(flags.bits() & !flag.bits())
    }
}

/// Flip every bit of `flag` in `flags`.
pub fn toggle_flag(flags: TileFlags, flag: TileFlags) -> TileFlags {
    TileFlags::from_bits_retain(flags.bits() ^ flag.bits())
}

/// The direction group of `flags`.
pub fn directions(flags: TileFlags) -> TileFlags {
    TileFlags::from_bits_retain(flags.bits() & TileFlags::ALL_DIRECTIONS.bits())
}

/// Everything in `flags` except the direction group.
pub fn non_direction_flags(flags: TileFlags) -> TileFlags {
    TileFlags::from_bits_retain(flags.bits() & !TileFlags::ALL_DIRECTIONS.bits())
}

/// Number of direction bits set in `flags`.
pub fn direction_count(flags: TileFlags) -> u32 {
    directions(flags).bits().count_ones()
}

/// Return the single direction bit set in `flags`.
///
/// Fails with [`FlagError::InvalidDirectionCount`] when no direction or
/// more than one direction is set. Non-direction bits are ignored.
pub fn require_single_direction(flags: TileFlags) -> Result<TileFlags, FlagError> {
    let count = direction_count(flags);
    if count != 1 {
        return Err(FlagError::InvalidDirectionCount { flags, count });
    }
    Ok(directions(flags))
}

/// Swap `UP`/`DOWN` and `LEFT`/`RIGHT`, leaving every other bit untouched.
pub fn invert_directions(flags: TileFlags) -> TileFlags {
    let bits = flags.bits();
    let dirs = bits & TileFlags::ALL_DIRECTIONS.bits();
    let up_left_to_down_right = (dirs & UP_LEFT_BITS) << 1;
    let down_right_to_up_left = (dirs >> 1) & UP_LEFT_BITS;
    TileFlags::from_bits_retain(
        up_left_to_down_right | down_right_to_up_left | non_direction_flags(flags).bits(),
    )
}

/// The content kind encoded in `flags`, if exactly one kind bit is set.
pub fn kind_of(flags: TileFlags) -> Option<TileKind> {
    let kinds = flags.intersection(TileFlags::ALL_KINDS);
    if kinds == TileFlags::EMPTY {
        Some(TileKind::Empty)
    } else if kinds == TileFlags::APPLE {
        Some(TileKind::Apple)
    } else if kinds == TileFlags::SNAKE {
        Some(TileKind::Snake)
    } else {
        None
    }
}

/// Replace the content-kind bits of `flags` with `kind`.
///
/// Direction and alternate bits are kept as they are.
pub fn with_kind(flags: TileFlags, kind: TileKind) -> TileFlags {
    let cleared = flags.bits() & !TileFlags::ALL_KINDS.bits();
    TileFlags::from_bits_retain(cleared | kind.flag().bits())
}

/// Zero-padded binary representation of `value`, at least `width` digits.
pub fn binary_string(value: u32, width: usize) -> String {
    format!("{value:0width$b}")
}

/// Human-readable `up=.. down=.. left=.. right=..` summary.
pub fn describe_directions(flags: TileFlags) -> String {
    format!(
        "up={} down={} left={} right={}",
        get_flag(flags, TileFlags::UP),
        get_flag(flags, TileFlags::DOWN),
        get_flag(flags, TileFlags::LEFT),
        get_flag(flags, TileFlags::RIGHT),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SINGLE: [TileFlags; 4] = [
        TileFlags::UP,
        TileFlags::DOWN,
        TileFlags::LEFT,
        TileFlags::RIGHT,
    ];

    fn arb_flags() -> impl Strategy<Value = TileFlags> {
        any::<u32>().prop_map(TileFlags::from_bits_retain)
    }

    fn arb_direction() -> impl Strategy<Value = TileFlags> {
        prop::sample::select(SINGLE.to_vec())
    }

    #[test]
    fn layout_shift_relationship() {
        assert_eq!(TileFlags::DOWN.bits(), TileFlags::UP.bits() << 1);
        assert_eq!(TileFlags::RIGHT.bits(), TileFlags::LEFT.bits() << 1);
    }

    #[test]
    fn groups_do_not_overlap() {
        assert!(!TileFlags::ALL_DIRECTIONS.intersects(TileFlags::ALL_KINDS));
        assert!(!TileFlags::ALL_DIRECTIONS.intersects(TileFlags::ALTERNATE_TYPE));
        assert!(!TileFlags::ALL_KINDS.intersects(TileFlags::ALTERNATE_TYPE));
    }

    #[test]
    fn invert_swaps_each_axis() {
        assert_eq!(invert_directions(TileFlags::UP), TileFlags::DOWN);
        assert_eq!(invert_directions(TileFlags::DOWN), TileFlags::UP);
        assert_eq!(invert_directions(TileFlags::LEFT), TileFlags::RIGHT);
        assert_eq!(invert_directions(TileFlags::RIGHT), TileFlags::LEFT);
        assert_eq!(
            invert_directions(TileFlags::UP_LEFT),
            TileFlags::DOWN_RIGHT
        );
        assert_eq!(
            invert_directions(TileFlags::VERTICAL),
            TileFlags::VERTICAL
        );
        assert_eq!(
            invert_directions(TileFlags::SNAKE | TileFlags::ALTERNATE_TYPE | TileFlags::UP),
            TileFlags::SNAKE | TileFlags::ALTERNATE_TYPE | TileFlags::DOWN
        );
    }

    #[test]
    fn require_single_direction_rejects_zero_and_many() {
        assert_eq!(
            require_single_direction(TileFlags::SNAKE),
            Err(FlagError::InvalidDirectionCount {
                flags: TileFlags::SNAKE,
                count: 0
            })
        );
        let err = require_single_direction(TileFlags::UP_RIGHT).unwrap_err();
        assert_eq!(
            err,
            FlagError::InvalidDirectionCount {
                flags: TileFlags::UP_RIGHT,
                count: 2
            }
        );
        assert!(require_single_direction(TileFlags::ALL_DIRECTIONS).is_err());
    }

    #[test]
    fn require_single_direction_ignores_other_groups() {
        let flags = TileFlags::SNAKE | TileFlags::ALTERNATE_TYPE | TileFlags::LEFT;
        assert_eq!(require_single_direction(flags), Ok(TileFlags::LEFT));
    }

    #[test]
    fn kind_requires_exactly_one_kind_bit() {
        assert_eq!(kind_of(TileFlags::EMPTY), Some(TileKind::Empty));
        assert_eq!(
            kind_of(TileFlags::snake(TileFlags::UP, true)),
            Some(TileKind::Snake)
        );
        assert_eq!(kind_of(TileFlags::empty()), None);
        assert_eq!(kind_of(TileFlags::APPLE | TileFlags::SNAKE), None);
    }

    #[test]
    fn with_kind_keeps_directions() {
        let body = TileFlags::snake(TileFlags::HORIZONTAL, true);
        let apple = with_kind(body, TileKind::Apple);
        assert_eq!(apple.kind(), Some(TileKind::Apple));
        assert_eq!(directions(apple), TileFlags::HORIZONTAL);
        assert!(get_flag(apple, TileFlags::ALTERNATE_TYPE));
    }

    #[test]
    fn snake_constructor_masks_foreign_bits() {
        let s = TileFlags::snake(TileFlags::UP | TileFlags::APPLE, false);
        assert_eq!(s, TileFlags::SNAKE | TileFlags::UP);
    }

    #[test]
    fn binary_string_pads_to_width() {
        assert_eq!(binary_string(0b101, 8), "00000101");
        assert_eq!(binary_string(0, 4), "0000");
        assert_eq!(binary_string(0b1_0000_0000, 4), "100000000");
        assert_eq!(
            binary_string(TileFlags::SNAKE.bits(), TileFlags::BIT_WIDTH),
            "01000000"
        );
    }

    #[test]
    fn describe_directions_lists_all_four() {
        assert_eq!(
            describe_directions(TileFlags::UP_RIGHT | TileFlags::SNAKE),
            "up=true down=false left=false right=true"
        );
    }

    proptest! {
        #[test]
        fn invert_is_an_involution(flags in arb_flags()) {
            prop_assert_eq!(invert_directions(invert_directions(flags)), flags);
        }

        #[test]
        fn invert_preserves_non_direction_bits(flags in arb_flags()) {
            prop_assert_eq!(
                non_direction_flags(invert_directions(flags)),
                non_direction_flags(flags)
            );
            prop_assert_eq!(
                direction_count(invert_directions(flags)),
                direction_count(flags)
            );
        }

        #[test]
        fn set_then_get(flags in arb_flags(), dir in arb_direction()) {
            prop_assert!(get_flag(set_flag(flags, dir, true), dir));
            prop_assert!(!get_flag(set_flag(flags, dir, false), dir));
        }

        #[test]
        fn toggle_twice_is_identity(flags in arb_flags(), flag in arb_flags()) {
            prop_assert_eq!(toggle_flag(toggle_flag(flags, flag), flag), flags);
        }

        #[test]
        fn directions_and_rest_partition_the_word(flags in arb_flags()) {
            let d = directions(flags).bits();
            let rest = non_direction_flags(flags).bits();
            prop_assert_eq!(d & rest, 0);
            prop_assert_eq!(d | rest, flags.bits());
        }

        #[test]
        fn single_direction_round_trips(other in arb_flags(), dir in arb_direction()) {
            let flags = TileFlags::from_bits_retain(non_direction_flags(other).bits() | dir.bits());
            prop_assert_eq!(require_single_direction(flags), Ok(dir));
        }

        #[test]
        fn require_single_direction_matches_count(flags in arb_flags()) {
            let result = require_single_direction(flags);
            prop_assert_eq!(result.is_ok(), direction_count(flags) == 1);
        }
    }
}
