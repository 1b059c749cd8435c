//! Debug assertion macros for ring invariants.
//!
//! Active only in debug builds, so there is zero overhead on release
//! firmware. Each macro states the condition it guards; the message names
//! the violated invariant directly.

/// Occupancy never exceeds capacity.
///
/// Used after every count update.
macro_rules! debug_assert_bounded_count {
    ($count:expr, $capacity:expr) => {
        debug_assert!(
            $count <= $capacity,
            "occupancy {} exceeds capacity {}",
            $count,
            $capacity
        )
    };
}

/// Head and tail always name a valid slot.
///
/// Used after every index advance.
macro_rules! debug_assert_slot_in_range {
    ($name:literal, $idx:expr, $capacity:expr) => {
        debug_assert!(
            $idx < $capacity,
            "{} slot {} outside [0, {})",
            $name,
            $idx,
            $capacity
        )
    };
}

/// A byte run passed to the copy helpers is a whole number of items and
/// fits the ring.
///
/// Used on entry to the wrapped segment copies.
macro_rules! debug_assert_whole_run {
    ($len:expr, $item_size:expr, $total_bytes:expr) => {
        debug_assert!(
            $len % $item_size == 0 && $len <= $total_bytes,
            "byte run of {} is not a whole in-bounds number of {}-byte items",
            $len,
            $item_size
        )
    };
}

pub(crate) use debug_assert_bounded_count;
pub(crate) use debug_assert_slot_in_range;
pub(crate) use debug_assert_whole_run;
