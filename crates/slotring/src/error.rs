//! Status codes returned by ring operations.

use thiserror::Error;

/// Errors reported by ring construction and access.
///
/// Every operation returns its status synchronously; the ring never retries
/// internally and a rejected all-or-nothing operation leaves no partial
/// mutation behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RingError {
    /// Construction parameters out of range: zero capacity, zero item size,
    /// or a total byte size that overflows `usize`.
    #[error("invalid configuration: capacity {capacity}, item size {item_size}")]
    InvalidConfig {
        /// Requested slot count.
        capacity: usize,
        /// Requested bytes per item.
        item_size: usize,
    },

    /// Caller-supplied region cannot hold `capacity * item_size` bytes.
    #[error("backing storage of {got} bytes is smaller than required {required}")]
    StorageTooSmall {
        /// Bytes the configuration needs.
        required: usize,
        /// Bytes the caller supplied.
        got: usize,
    },

    /// Owned-storage allocation failed.
    #[error("failed to allocate {bytes} bytes of ring storage")]
    Memory {
        /// Size of the failed allocation.
        bytes: usize,
    },

    /// Slice length is not a whole number of items.
    ///
    /// Single-item operations require exactly `item_size` bytes; bulk
    /// operations require a multiple of it.
    #[error("slice of {len} bytes is not a whole number of {item_size}-byte items")]
    LengthMismatch {
        /// Length of the offending slice.
        len: usize,
        /// Configured bytes per item.
        item_size: usize,
    },

    /// Bulk insert of more items than the ring can ever hold.
    ///
    /// Rejected even with overwrite enabled: overwrite discards *existing*
    /// data, it does not accept an unbounded burst.
    #[error("bulk request of {requested} items exceeds capacity {capacity}")]
    RequestTooLarge {
        /// Items in the rejected request.
        requested: usize,
        /// Slot capacity of the ring.
        capacity: usize,
    },

    /// Indexed access outside `[-capacity, capacity)`.
    #[error("index {index} outside valid range [-{capacity}, {capacity})")]
    IndexOutOfRange {
        /// The rejected logical index.
        index: isize,
        /// Slot capacity of the ring.
        capacity: usize,
    },

    /// Insertion rejected: no free slot and overwrite is disabled.
    #[error("ring is full")]
    Full,

    /// Removal rejected: the ring holds fewer items than requested,
    /// possibly none at all.
    #[error("ring holds fewer items than requested")]
    Empty,
}

impl RingError {
    /// Returns `true` for conditions that clear up as the opposite role
    /// makes progress (`Full`, `Empty`). Everything else is a caller bug
    /// or a resource failure that retrying will not fix.
    #[inline]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Full | Self::Empty)
    }
}
