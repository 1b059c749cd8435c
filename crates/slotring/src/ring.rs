use crate::config::Config;
use crate::error::RingError;
use crate::index;
use crate::invariants::{
    debug_assert_bounded_count, debug_assert_slot_in_range, debug_assert_whole_run,
};
use crossbeam_utils::CachePadded;
use std::cell::UnsafeCell;
use std::sync::atomic::{AtomicUsize, Ordering};

// =============================================================================
// MEMORY ORDERING & SYNCHRONIZATION STRATEGY
// =============================================================================
//
// This SPSC slot ring synchronizes the two roles through a single shared
// field: the occupancy counter. Head and tail stay role-private.
//
// ## Field Ownership
//
// - `head`: written only by the producer (push paths, reset).
// - `tail`: written only by the consumer (pop paths, reset), except the
//   overwrite path, where the producer advances it past discarded items.
//   That advance is NOT synchronized against a concurrent pop; see
//   "Overwrite hazard" below.
// - `count`: the single cross-role synchronization point. Lock-free so the
//   producer side can run in interrupt context.
//
// ## Memory Ordering Protocol
//
// **Producer (push path):**
// 1. Load `count` with Acquire (synchronizes with the consumer's Release
//    decrement: freed slots were fully read before we reuse them)
// 2. Write item bytes into free slots (no ordering needed - protected by
//    the protocol)
// 3. Add to `count` with Release (publishes the bytes: a consumer that
//    observes the new count sees fully-written items)
// 4. Advance `head` with Relaxed (role-private)
//
// **Consumer (pop path):**
// 1. Load `count` with Acquire (synchronizes with the producer's Release
//    increment: observed items' bytes are fully written)
// 2. Copy item bytes out of occupied slots
// 3. Subtract from `count` with Release (publishes the free slots back to
//    the producer)
// 4. Advance `tail` with Relaxed (role-private)
//
// ## Overwrite hazard
//
// With `override_on_full` enabled, a push that overflows advances `tail`
// and clamps `count` from the producer side. Nothing ties those two stores
// to a concurrent pop, so the overwrite path must not race the consumer.
// This mirrors the classic firmware contract: overwrite mode is for
// single-context use, or for callers that sequence the roles externally.
//
// =============================================================================

/// Backing storage for the slot region.
///
/// Ownership is a compile-time-visible property: the ring either owns a
/// heap allocation or borrows a caller-supplied region for its lifetime.
enum Storage<'buf> {
    /// Heap allocation owned by the ring, freed on drop.
    ///
    /// `Box<[u8]>` instead of `Vec<u8>`: the region is fixed at
    /// construction and never grows.
    Owned(Box<[u8]>),
    /// Caller-owned region; the caller keeps ownership and the allocation
    /// outlives the ring by construction.
    Borrowed(&'buf mut [u8]),
}

impl Storage<'_> {
    #[inline]
    fn as_slice(&self) -> &[u8] {
        match self {
            Self::Owned(bytes) => bytes,
            Self::Borrowed(bytes) => bytes,
        }
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [u8] {
        match self {
            Self::Owned(bytes) => bytes,
            Self::Borrowed(bytes) => bytes,
        }
    }
}

/// Fixed-capacity ring of `item_size`-byte slots with FIFO semantics,
/// optional overwrite-on-full, and chronological indexed access.
///
/// Designed for exactly one producer context and one consumer context
/// (e.g. an interrupt handler writing, a task reading). The occupancy
/// counter is the only shared mutable field and is updated lock-free, so
/// neither role ever blocks. Two producers, or two consumers, on the same
/// instance are not supported.
///
/// Construct with [`SlotRing::new`] (owned, zero-filled heap storage) or
/// [`SlotRing::with_storage`] (caller-supplied region, static-allocation
/// mode).
pub struct SlotRing<'buf> {
    // === PRODUCER HOT ===
    /// Next write slot (written by producer).
    head: CachePadded<AtomicUsize>,

    // === CONSUMER HOT ===
    /// Oldest unread slot (written by consumer; producer touches it only
    /// on the overwrite path).
    tail: CachePadded<AtomicUsize>,

    // === SHARED ===
    /// Occupied slots. The single cross-role synchronization point.
    count: CachePadded<AtomicUsize>,

    // === CONFIG === (read-only after construction)
    capacity: usize,
    item_size: usize,
    override_on_full: bool,
    name: Option<String>,

    // === DATA BUFFER ===
    /// The slot region, `capacity * item_size` bytes.
    storage: UnsafeCell<Storage<'buf>>,
}

// Safety: the storage region holds plain bytes accessed under the
// single-writer protocol documented above; `count` is the only shared
// mutable field and it is atomic.
unsafe impl Send for SlotRing<'_> {}
unsafe impl Sync for SlotRing<'_> {}

impl SlotRing<'static> {
    /// Creates a ring that owns its storage.
    ///
    /// Allocates and zero-fills `capacity * item_size` bytes. Allocation
    /// failure is reported as [`RingError::Memory`] rather than aborting,
    /// so constrained targets can degrade gracefully.
    pub fn new(config: Config) -> Result<Self, RingError> {
        let bytes = config.validate()?;

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(bytes)
            .map_err(|_| RingError::Memory { bytes })?;
        buffer.resize(bytes, 0);

        Ok(Self::from_parts(config, Storage::Owned(buffer.into_boxed_slice())))
    }
}

impl<'buf> SlotRing<'buf> {
    /// Creates a ring over a caller-owned region (static-allocation mode).
    ///
    /// The region must hold at least `capacity * item_size` bytes; any
    /// excess is ignored. The caller retains ownership and the borrow
    /// guarantees the region outlives the ring. The region is *not*
    /// zero-filled: indexed reads of never-written slots return its prior
    /// contents.
    pub fn with_storage(config: Config, storage: &'buf mut [u8]) -> Result<Self, RingError> {
        let required = config.validate()?;
        if storage.len() < required {
            return Err(RingError::StorageTooSmall {
                required,
                got: storage.len(),
            });
        }
        Ok(Self::from_parts(config, Storage::Borrowed(storage)))
    }

    fn from_parts(config: Config, storage: Storage<'buf>) -> Self {
        Self {
            head: CachePadded::new(AtomicUsize::new(0)),
            tail: CachePadded::new(AtomicUsize::new(0)),
            count: CachePadded::new(AtomicUsize::new(0)),
            capacity: config.capacity,
            item_size: config.item_size,
            override_on_full: config.override_on_full,
            name: config.name,
            storage: UnsafeCell::new(storage),
        }
    }

    // ---------------------------------------------------------------------
    // ACCESSORS & STATE QUERIES
    // ---------------------------------------------------------------------

    /// Returns the slot capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the bytes per item.
    #[inline]
    pub fn item_size(&self) -> usize {
        self.item_size
    }

    /// Returns the number of occupied slots.
    ///
    /// Acquire load: a count of `n` guarantees the first `n` items' bytes
    /// are fully written from this thread's point of view.
    #[inline]
    pub fn len(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    /// Returns the number of free slots.
    #[inline]
    pub fn free(&self) -> usize {
        self.capacity - self.len()
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if every slot is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity
    }

    /// Returns the debug label, if one was configured.
    #[inline]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns `true` if a full ring overwrites its oldest items.
    #[inline]
    pub fn overwrites_on_full(&self) -> bool {
        self.override_on_full
    }

    #[inline]
    fn total_bytes(&self) -> usize {
        // Overflow ruled out by Config::validate.
        self.capacity * self.item_size
    }

    // ---------------------------------------------------------------------
    // PRODUCER API
    // ---------------------------------------------------------------------

    /// Appends one item.
    ///
    /// `item` must be exactly `item_size` bytes. With overwrite disabled a
    /// full ring rejects the push with [`RingError::Full`] and is left
    /// unchanged; with overwrite enabled the oldest unread item is
    /// silently discarded instead (see the overwrite hazard note on
    /// [`SlotRing::split`](crate::SlotRing::split) for the concurrency
    /// caveat).
    pub fn push(&self, item: &[u8]) -> Result<(), RingError> {
        if item.len() != self.item_size {
            return Err(RingError::LengthMismatch {
                len: item.len(),
                item_size: self.item_size,
            });
        }
        self.insert(item, 1)
    }

    /// Appends a run of items, all or nothing.
    ///
    /// `items` must be a whole number of `item_size`-byte items. A run of
    /// more than `capacity` items is rejected with
    /// [`RingError::RequestTooLarge`] even with overwrite enabled:
    /// overwrite discards existing data, it does not accept an unbounded
    /// burst. If the run exceeds the free space and overwrite is disabled
    /// the whole run is rejected with [`RingError::Full`]; with overwrite
    /// enabled the oldest `run - free` unread items are discarded. An
    /// empty run is a no-op.
    pub fn push_many(&self, items: &[u8]) -> Result<(), RingError> {
        if items.len() % self.item_size != 0 {
            return Err(RingError::LengthMismatch {
                len: items.len(),
                item_size: self.item_size,
            });
        }
        let n = items.len() / self.item_size;
        if n == 0 {
            return Ok(());
        }
        if n > self.capacity {
            return Err(RingError::RequestTooLarge {
                requested: n,
                capacity: self.capacity,
            });
        }
        self.insert(items, n)
    }

    /// Copies `n` items in at head and publishes them.
    ///
    /// Preconditions: `items` holds exactly `n` whole items, `0 < n <=
    /// capacity`.
    fn insert(&self, items: &[u8], n: usize) -> Result<(), RingError> {
        // Acquire pairs with the consumer's Release decrement: slots it
        // freed were fully read before we overwrite them.
        let count = self.count.load(Ordering::Acquire);
        let free = self.capacity - count;

        if n > free && !self.override_on_full {
            return Err(RingError::Full);
        }

        let head = self.head.load(Ordering::Relaxed);
        self.copy_in(head, items);

        let new_head = index::advance(head, self.capacity, n);
        debug_assert_slot_in_range!("head", new_head, self.capacity);
        self.head.store(new_head, Ordering::Relaxed);

        if n <= free {
            debug_assert_bounded_count!(count + n, self.capacity);
            // Release publishes the copied bytes to the consumer.
            self.count.fetch_add(n, Ordering::Release);
        } else {
            // Overwrite path: the storage is ring-shaped so head always
            // had room; reclaim the overrun from the oldest unread items.
            let overwritten = n - free;
            let tail = self.tail.load(Ordering::Relaxed);
            let new_tail = index::advance(tail, self.capacity, overwritten);
            debug_assert_slot_in_range!("tail", new_tail, self.capacity);
            self.tail.store(new_tail, Ordering::Relaxed);
            self.count.store(self.capacity, Ordering::Release);
        }
        Ok(())
    }

    // ---------------------------------------------------------------------
    // CONSUMER API
    // ---------------------------------------------------------------------

    /// Removes the oldest item into `out`.
    ///
    /// `out` must be exactly `item_size` bytes. An empty ring returns
    /// [`RingError::Empty`] and leaves `out` untouched.
    pub fn pop(&self, out: &mut [u8]) -> Result<(), RingError> {
        if out.len() != self.item_size {
            return Err(RingError::LengthMismatch {
                len: out.len(),
                item_size: self.item_size,
            });
        }
        self.remove(out, 1)
    }

    /// Removes the oldest run of items into `out`, all or nothing.
    ///
    /// `out` must be a whole number of `item_size`-byte items; its length
    /// determines the run. If the ring holds fewer items than requested
    /// the whole request is rejected with [`RingError::Empty`] and `out`
    /// is untouched. An empty `out` is a no-op.
    pub fn pop_many(&self, out: &mut [u8]) -> Result<(), RingError> {
        if out.len() % self.item_size != 0 {
            return Err(RingError::LengthMismatch {
                len: out.len(),
                item_size: self.item_size,
            });
        }
        let n = out.len() / self.item_size;
        if n == 0 {
            return Ok(());
        }
        self.remove(out, n)
    }

    /// Copies `n` items out from tail and releases their slots.
    ///
    /// Preconditions: `out` holds exactly `n` whole items, `n > 0`.
    fn remove(&self, out: &mut [u8], n: usize) -> Result<(), RingError> {
        // Acquire pairs with the producer's Release increment: a count of
        // at least `n` means the first `n` items' bytes are fully written.
        let count = self.count.load(Ordering::Acquire);
        if n > count {
            return Err(RingError::Empty);
        }

        let tail = self.tail.load(Ordering::Relaxed);
        self.copy_out(tail, out);

        let new_tail = index::advance(tail, self.capacity, n);
        debug_assert_slot_in_range!("tail", new_tail, self.capacity);
        self.tail.store(new_tail, Ordering::Relaxed);

        // Release publishes the freed slots back to the producer.
        self.count.fetch_sub(n, Ordering::Release);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // NON-DESTRUCTIVE INDEXED READ
    // ---------------------------------------------------------------------

    /// Copies the item at logical `index` into `out` without consuming it.
    ///
    /// Two access modes (see the module docs of the index math):
    ///
    /// - `index >= 0`: physical slot access, `index < capacity`.
    /// - `index < 0`: chronological access counted back from the most
    ///   recent write; `-1` is the latest item, `-capacity` the oldest a
    ///   full ring can hold.
    ///
    /// Mutates neither head, tail nor count.
    ///
    /// Caller responsibility: this read is not synchronized against a
    /// concurrent producer. Reading a slot while it is being overwritten
    /// yields torn or stale bytes; reading while a consumer pops
    /// concurrently can observe a shifted chronological anchor.
    pub fn peek_at(&self, index: isize, out: &mut [u8]) -> Result<(), RingError> {
        if out.len() != self.item_size {
            return Err(RingError::LengthMismatch {
                len: out.len(),
                item_size: self.item_size,
            });
        }
        let head = self.head.load(Ordering::Relaxed);
        let slot = index::resolve(index, head, self.capacity)?;
        self.copy_out(slot, out);
        Ok(())
    }

    // ---------------------------------------------------------------------
    // WRAPPED SEGMENT COPY
    // ---------------------------------------------------------------------
    //
    // The single mechanism that makes the logical ring appear contiguous:
    // a run starting at `start_slot` that crosses `capacity` is split into
    // `[start, capacity)` and `[0, rest)`, executed as two bounds-checked
    // slice copies.

    /// Writes `src` into the ring starting at `start_slot`, wrapping.
    fn copy_in(&self, start_slot: usize, src: &[u8]) {
        debug_assert_whole_run!(src.len(), self.item_size, self.total_bytes());
        debug_assert_slot_in_range!("copy start", start_slot, self.capacity);

        // SAFETY: Forming a mutable view of the storage is sound because:
        // 1. Only the producer calls copy_in, and there is exactly one
        //    producer context (type-level with split handles, contractual
        //    otherwise).
        // 2. Without overwrite, the target slots are free: the consumer
        //    only reads occupied slots, and the Acquire load of `count`
        //    ordered its last reads of these slots before reuse.
        // 3. With overwrite, the producer may touch unread slots; that
        //    path is documented as not racing a concurrent consumer.
        // 4. The reference lives only for this call.
        let bytes = unsafe { (*self.storage.get()).as_mut_slice() };

        let total = self.total_bytes();
        let start = start_slot * self.item_size;
        let first = src.len().min(total - start);
        bytes[start..start + first].copy_from_slice(&src[..first]);
        if first < src.len() {
            bytes[..src.len() - first].copy_from_slice(&src[first..]);
        }
    }

    /// Reads a run starting at `start_slot` into `dst`, wrapping.
    fn copy_out(&self, start_slot: usize, dst: &mut [u8]) {
        debug_assert_whole_run!(dst.len(), self.item_size, self.total_bytes());
        debug_assert_slot_in_range!("copy start", start_slot, self.capacity);

        // SAFETY: Forming a shared view of the storage is sound because:
        // 1. The pop path reads only occupied slots, which the producer
        //    published with its Release increment of `count` and will not
        //    touch again until they are released.
        // 2. The peek path may read any slot and is documented as
        //    unsynchronized: a torn read of plain bytes is stale data,
        //    never undefined behavior at the byte level under this
        //    crate's access protocol.
        // 3. The reference lives only for this call.
        let bytes = unsafe { (*self.storage.get()).as_slice() };

        let total = self.total_bytes();
        let start = start_slot * self.item_size;
        let first = dst.len().min(total - start);
        dst[..first].copy_from_slice(&bytes[start..start + first]);
        if first < dst.len() {
            let rest = dst.len() - first;
            dst[first..].copy_from_slice(&bytes[..rest]);
        }
    }

    // ---------------------------------------------------------------------
    // RESET
    // ---------------------------------------------------------------------

    /// Clears the ring: head, tail and count back to zero, storage
    /// zero-filled. Does not release backing storage. Idempotent.
    ///
    /// Takes `&mut self`: exclusive access means a reset can never race
    /// either role.
    pub fn reset(&mut self) {
        let total = self.total_bytes();
        self.storage.get_mut().as_mut_slice()[..total].fill(0);
        self.head.store(0, Ordering::Relaxed);
        self.tail.store(0, Ordering::Relaxed);
        self.count.store(0, Ordering::Relaxed);
    }
}

impl std::fmt::Debug for SlotRing<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotRing")
            .field("name", &self.name)
            .field("capacity", &self.capacity)
            .field("item_size", &self.item_size)
            .field("len", &self.len())
            .field("override_on_full", &self.override_on_full)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ring(capacity: usize, item_size: usize, override_on_full: bool) -> SlotRing<'static> {
        SlotRing::new(Config::new(capacity, item_size, override_on_full)).unwrap()
    }

    fn push_u8(ring: &SlotRing<'_>, value: u8) -> Result<(), RingError> {
        ring.push(&[value])
    }

    fn pop_u8(ring: &SlotRing<'_>) -> Result<u8, RingError> {
        let mut out = [0u8; 1];
        ring.pop(&mut out)?;
        Ok(out[0])
    }

    fn peek_u8(ring: &SlotRing<'_>, index: isize) -> Result<u8, RingError> {
        let mut out = [0u8; 1];
        ring.peek_at(index, &mut out)?;
        Ok(out[0])
    }

    #[test]
    fn test_fresh_ring_state() {
        let ring = ring(4, 1, false);
        assert_eq!(ring.len(), 0);
        assert_eq!(ring.free(), 4);
        assert!(ring.is_empty());
        assert!(!ring.is_full());
        assert_eq!(ring.capacity(), 4);
        assert_eq!(ring.item_size(), 1);
    }

    #[test]
    fn test_push_pop_fifo() {
        let ring = ring(4, 1, false);
        for v in [10u8, 20, 30] {
            push_u8(&ring, v).unwrap();
        }
        assert_eq!(pop_u8(&ring), Ok(10));
        assert_eq!(pop_u8(&ring), Ok(20));
        assert_eq!(pop_u8(&ring), Ok(30));
        assert!(ring.is_empty());
        assert_eq!(pop_u8(&ring), Err(RingError::Empty));
    }

    #[test]
    fn test_full_rejection_leaves_state() {
        let ring = ring(4, 1, false);
        for v in 0u8..4 {
            push_u8(&ring, v).unwrap();
        }
        assert!(ring.is_full());
        assert_eq!(push_u8(&ring, 99), Err(RingError::Full));
        assert_eq!(ring.len(), 4);
        // FIFO content unchanged by the rejected push.
        assert_eq!(pop_u8(&ring), Ok(0));
    }

    #[test]
    fn test_wrap_around_cycles() {
        let ring = ring(3, 1, false);
        // Fill/drain repeatedly so head and tail cross the boundary.
        for round in 0u8..5 {
            for i in 0..3 {
                push_u8(&ring, round * 10 + i).unwrap();
            }
            for i in 0..3 {
                assert_eq!(pop_u8(&ring), Ok(round * 10 + i));
            }
        }
        assert!(ring.is_empty());
    }

    #[test]
    fn test_multi_byte_items_round_trip() {
        let ring = ring(4, 4, false);
        for v in [0xDEAD_BEEFu32, 7, u32::MAX] {
            ring.push(&v.to_ne_bytes()).unwrap();
        }
        let mut out = [0u8; 4];
        for expected in [0xDEAD_BEEFu32, 7, u32::MAX] {
            ring.pop(&mut out).unwrap();
            assert_eq!(u32::from_ne_bytes(out), expected);
        }
    }

    #[test]
    fn test_push_many_wraps_across_boundary() {
        let ring = ring(4, 2, false);
        // Move head to slot 3.
        ring.push_many(&[1, 1, 2, 2, 3, 3]).unwrap();
        let mut drain = [0u8; 4];
        ring.pop_many(&mut drain).unwrap();
        // Run of 3 items starting at slot 3 wraps into slots 0 and 1.
        ring.push_many(&[4, 4, 5, 5, 6, 6]).unwrap();
        assert_eq!(ring.len(), 4);
        let mut out = [0u8; 8];
        ring.pop_many(&mut out).unwrap();
        assert_eq!(out, [3, 3, 4, 4, 5, 5, 6, 6]);
    }

    #[test]
    fn test_pop_many_all_or_nothing() {
        let ring = ring(4, 1, false);
        ring.push_many(&[1, 2]).unwrap();
        let mut out = [0xAAu8; 3];
        assert_eq!(ring.pop_many(&mut out), Err(RingError::Empty));
        // Output untouched, state unchanged.
        assert_eq!(out, [0xAA; 3]);
        assert_eq!(ring.len(), 2);
        assert_eq!(pop_u8(&ring), Ok(1));
    }

    #[test]
    fn test_push_many_rejects_oversized_burst() {
        for override_on_full in [false, true] {
            let ring = ring(4, 1, override_on_full);
            assert_eq!(
                ring.push_many(&[0; 5]),
                Err(RingError::RequestTooLarge {
                    requested: 5,
                    capacity: 4
                })
            );
            assert!(ring.is_empty());
        }
    }

    #[test]
    fn test_zero_length_bulk_ops_are_noops() {
        let ring = ring(4, 1, false);
        ring.push_many(&[]).unwrap();
        let mut out = [0u8; 0];
        ring.pop_many(&mut out).unwrap();
        assert!(ring.is_empty());
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let ring = ring(4, 4, false);
        assert_eq!(
            ring.push(&[1, 2]),
            Err(RingError::LengthMismatch {
                len: 2,
                item_size: 4
            })
        );
        assert_eq!(
            ring.push_many(&[0; 6]),
            Err(RingError::LengthMismatch {
                len: 6,
                item_size: 4
            })
        );
        let mut short = [0u8; 3];
        assert_eq!(
            ring.pop(&mut short),
            Err(RingError::LengthMismatch {
                len: 3,
                item_size: 4
            })
        );
    }

    // Capacity 4, no overwrite: add 1,2,3 / pop / add 4,5 / peek -1.
    #[test]
    fn test_fifo_scenario_capacity_four() {
        let ring = ring(4, 1, false);
        for v in [1u8, 2, 3] {
            push_u8(&ring, v).unwrap();
        }
        assert_eq!(ring.len(), 3);

        assert_eq!(pop_u8(&ring), Ok(1));
        assert_eq!(ring.len(), 2);

        push_u8(&ring, 4).unwrap();
        push_u8(&ring, 5).unwrap();
        assert_eq!(push_u8(&ring, 5), Err(RingError::Full));

        assert_eq!(peek_u8(&ring, -1), Ok(5));
    }

    // Same shape with only one free slot left: the second add must fail.
    #[test]
    fn test_fifo_scenario_single_free_slot() {
        let ring = ring(4, 1, false);
        for v in [1u8, 2, 3] {
            push_u8(&ring, v).unwrap();
        }
        assert_eq!(pop_u8(&ring), Ok(1));
        // Refill past the original boundary: 2,3 remain, one slot opened.
        push_u8(&ring, 4).unwrap();
        assert_eq!(ring.len(), 3);
        push_u8(&ring, 5).unwrap();
        assert!(ring.is_full());
        assert_eq!(push_u8(&ring, 6), Err(RingError::Full));
        assert_eq!(peek_u8(&ring, -1), Ok(5));
        assert_eq!(pop_u8(&ring), Ok(2));
    }

    // Capacity 3 with overwrite: the fourth add discards the oldest item.
    #[test]
    fn test_overwrite_discards_oldest() {
        let ring = ring(3, 1, true);
        for v in [1u8, 2, 3] {
            push_u8(&ring, v).unwrap();
        }
        assert!(ring.is_full());

        push_u8(&ring, 4).unwrap();
        assert_eq!(ring.len(), 3);
        assert_eq!(pop_u8(&ring), Ok(2));
        assert_eq!(pop_u8(&ring), Ok(3));
        assert_eq!(pop_u8(&ring), Ok(4));
        assert!(ring.is_empty());
    }

    #[test]
    fn test_overwrite_bulk_keeps_last_capacity_items() {
        let ring = ring(4, 1, true);
        ring.push_many(&[1, 2, 3, 4]).unwrap();
        assert!(ring.is_full());
        // Two more in one run onto a full ring: the two oldest unread
        // items are discarded, leaving exactly the last four in order.
        ring.push_many(&[5, 6]).unwrap();
        assert_eq!(ring.len(), 4);
        let mut out = [0u8; 4];
        ring.pop_many(&mut out).unwrap();
        assert_eq!(out, [3, 4, 5, 6]);
    }

    #[test]
    fn test_overwrite_partial_fill_overflow() {
        let ring = ring(4, 1, true);
        push_u8(&ring, 1).unwrap();
        // Free space is 3; a run of 4 overwrites the single unread item.
        ring.push_many(&[2, 3, 4, 5]).unwrap();
        assert_eq!(ring.len(), 4);
        let mut out = [0u8; 4];
        ring.pop_many(&mut out).unwrap();
        assert_eq!(out, [2, 3, 4, 5]);
    }

    #[test]
    fn test_peek_physical_and_chronological() {
        let ring = ring(4, 1, false);
        for v in [7u8, 8, 9] {
            push_u8(&ring, v).unwrap();
        }
        // Physical access: raw slot numbers.
        assert_eq!(peek_u8(&ring, 0), Ok(7));
        assert_eq!(peek_u8(&ring, 2), Ok(9));
        // Chronological access: counted back from the latest write.
        assert_eq!(peek_u8(&ring, -1), Ok(9));
        assert_eq!(peek_u8(&ring, -3), Ok(7));
        // Nothing was consumed.
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn test_peek_boundary_rejections() {
        let ring = ring(4, 1, false);
        let mut out = [0u8; 1];
        assert_eq!(
            ring.peek_at(4, &mut out),
            Err(RingError::IndexOutOfRange {
                index: 4,
                capacity: 4
            })
        );
        assert_eq!(
            ring.peek_at(-5, &mut out),
            Err(RingError::IndexOutOfRange {
                index: -5,
                capacity: 4
            })
        );
    }

    #[test]
    fn test_reset_idempotent_and_zero_fills() {
        let mut ring = ring(4, 1, false);
        for v in [1u8, 2, 3] {
            push_u8(&ring, v).unwrap();
        }
        ring.reset();
        assert!(ring.is_empty());
        assert_eq!(peek_u8(&ring, 0), Ok(0));
        assert_eq!(peek_u8(&ring, 2), Ok(0));

        ring.reset();
        assert!(ring.is_empty());
        assert_eq!(ring.free(), 4);
        // Usable again from slot zero.
        push_u8(&ring, 9).unwrap();
        assert_eq!(pop_u8(&ring), Ok(9));
    }

    #[test]
    fn test_borrowed_storage() {
        let mut region = [0xFFu8; 8];
        {
            let ring = SlotRing::with_storage(Config::new(4, 2, false), &mut region).unwrap();
            ring.push(&[1, 2]).unwrap();
            ring.push(&[3, 4]).unwrap();
            let mut out = [0u8; 2];
            ring.pop(&mut out).unwrap();
            assert_eq!(out, [1, 2]);
            // Never-written slots keep the region's prior contents.
            let mut stale = [0u8; 2];
            ring.peek_at(3, &mut stale).unwrap();
            assert_eq!(stale, [0xFF, 0xFF]);
        }
        // Caller keeps ownership once the ring is gone.
        assert_eq!(region[0], 1);
    }

    #[test]
    fn test_borrowed_storage_too_small() {
        let mut region = [0u8; 7];
        let err = SlotRing::with_storage(Config::new(4, 2, false), &mut region).unwrap_err();
        assert_eq!(
            err,
            RingError::StorageTooSmall {
                required: 8,
                got: 7
            }
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert_eq!(
            SlotRing::new(Config::new(0, 1, false)).unwrap_err(),
            RingError::InvalidConfig {
                capacity: 0,
                item_size: 1
            }
        );
        assert_eq!(
            SlotRing::new(Config::new(4, 0, false)).unwrap_err(),
            RingError::InvalidConfig {
                capacity: 4,
                item_size: 0
            }
        );
    }

    #[test]
    fn test_name_label() {
        let ring = SlotRing::new(Config::new(2, 1, false).named("adc_samples")).unwrap();
        assert_eq!(ring.name(), Some("adc_samples"));
        assert!(self::ring(2, 1, false).name().is_none());
    }

    #[test]
    fn test_single_slot_ring() {
        let ring = ring(1, 1, true);
        push_u8(&ring, 1).unwrap();
        push_u8(&ring, 2).unwrap();
        assert_eq!(ring.len(), 1);
        assert_eq!(pop_u8(&ring), Ok(2));
    }
}
