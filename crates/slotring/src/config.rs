use crate::RingError;

/// Configuration for a [`SlotRing`](crate::SlotRing).
///
/// Capacity, item size and the overwrite policy are fixed for the life of
/// the instance.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of item slots (must be nonzero).
    pub capacity: usize,
    /// Bytes per item (default: 1).
    pub item_size: usize,
    /// When full, overwrite the oldest unread items instead of rejecting
    /// the insert (default: false).
    pub override_on_full: bool,
    /// Optional opaque debug label.
    pub name: Option<String>,
}

impl Config {
    /// Creates a configuration with custom settings and no label.
    pub fn new(capacity: usize, item_size: usize, override_on_full: bool) -> Self {
        Self {
            capacity,
            item_size,
            override_on_full,
            name: None,
        }
    }

    /// Attaches a debug label.
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Total bytes of backing storage the configuration needs.
    ///
    /// `None` if `capacity * item_size` overflows.
    #[inline]
    pub(crate) fn total_bytes(&self) -> Option<usize> {
        self.capacity.checked_mul(self.item_size)
    }

    /// Rejects zero sizes and byte-size overflow.
    pub(crate) fn validate(&self) -> Result<usize, RingError> {
        match self.total_bytes() {
            Some(bytes) if self.capacity > 0 && self.item_size > 0 => Ok(bytes),
            _ => Err(RingError::InvalidConfig {
                capacity: self.capacity,
                item_size: self.item_size,
            }),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: 64,
            item_size: 1,
            override_on_full: false,
            name: None,
        }
    }
}
