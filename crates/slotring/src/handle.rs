//! Role handles making the single-producer/single-consumer discipline
//! compile-time visible.

use crate::{RingError, SlotRing};

/// Write-side handle to a [`SlotRing`].
///
/// `Producer` does not implement `Clone`: one write context per ring is
/// the contract, and a second producer would race the first on head and
/// the slot bytes.
pub struct Producer<'ring, 'buf> {
    ring: &'ring SlotRing<'buf>,
}

/// Read-side handle to a [`SlotRing`].
///
/// Not `Clone` for the same reason as [`Producer`]: exactly one read
/// context per ring.
pub struct Consumer<'ring, 'buf> {
    ring: &'ring SlotRing<'buf>,
}

impl<'buf> SlotRing<'buf> {
    /// Splits the ring into its two role handles.
    ///
    /// Takes `&mut self`, so at any time at most one producer and one
    /// consumer exist: a second split is only possible after both
    /// previous handles are gone. Both handles are `Send`, so each role
    /// can move to its own thread.
    ///
    /// With overwrite enabled, an overriding push moves the read
    /// position from the producer side without synchronization; callers
    /// must not pop concurrently with a push that can overflow.
    pub fn split(&mut self) -> (Producer<'_, 'buf>, Consumer<'_, 'buf>) {
        let ring = &*self;
        (Producer { ring }, Consumer { ring })
    }
}

impl Producer<'_, '_> {
    /// Appends one item. See [`SlotRing::push`].
    #[inline]
    pub fn push(&self, item: &[u8]) -> Result<(), RingError> {
        self.ring.push(item)
    }

    /// Appends a run of items, all or nothing. See [`SlotRing::push_many`].
    #[inline]
    pub fn push_many(&self, items: &[u8]) -> Result<(), RingError> {
        self.ring.push_many(items)
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn free(&self) -> usize {
        self.ring.free()
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Returns the slot capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}

impl Consumer<'_, '_> {
    /// Removes the oldest item into `out`. See [`SlotRing::pop`].
    #[inline]
    pub fn pop(&self, out: &mut [u8]) -> Result<(), RingError> {
        self.ring.pop(out)
    }

    /// Removes the oldest run of items into `out`, all or nothing.
    /// See [`SlotRing::pop_many`].
    #[inline]
    pub fn pop_many(&self, out: &mut [u8]) -> Result<(), RingError> {
        self.ring.pop_many(out)
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Returns the slot capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }
}
