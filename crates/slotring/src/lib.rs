//! SlotRing - Fixed-Capacity Ring Buffer for Firmware-Style Producers
//!
//! A circular buffer of fixed-size opaque items (bytes, scalars, packed
//! structs) stored in one contiguous region, with FIFO add/remove,
//! optional overwrite-on-full, and chronological indexed access. Built
//! for embedded and resource-constrained use: one producer context (an
//! interrupt handler, say) and one consumer context (a task) share the
//! ring through a single lock-free occupancy counter, so no operation
//! ever blocks.
//!
//! # Key Features
//!
//! - Single-subtraction index wrap (no modulo, no power-of-two capacity
//!   requirement)
//! - All-or-nothing bulk insert/remove with two-segment wrapped copy
//! - Dual-mode indexed reads: physical slots (`0..capacity`) and
//!   chronological look-back (`-1` = latest, `-capacity` = oldest)
//! - Owned (heap, fallible allocation) or caller-supplied backing
//!   storage, chosen at the constructor
//! - Acquire/Release occupancy protocol: an observed count of `n`
//!   guarantees `n` fully-written items
//!
//! # Example
//!
//! ```
//! use slotring_rs::{Config, SlotRing};
//!
//! let mut ring = SlotRing::new(Config::new(4, 1, false)).unwrap();
//!
//! ring.push(&[1]).unwrap();
//! ring.push(&[2]).unwrap();
//!
//! // Latest item, without consuming it
//! let mut latest = [0u8; 1];
//! ring.peek_at(-1, &mut latest).unwrap();
//! assert_eq!(latest, [2]);
//!
//! // FIFO removal
//! let mut out = [0u8; 1];
//! ring.pop(&mut out).unwrap();
//! assert_eq!(out, [1]);
//!
//! // Split into role handles for cross-thread use
//! let (producer, consumer) = ring.split();
//! producer.push(&[3]).unwrap();
//! assert_eq!(consumer.len(), 2);
//! ```
//!
//! For scalar payloads, [`TypedRing`] fixes the item size to a primitive
//! type's native-endian encoding:
//!
//! ```
//! use slotring_rs::TypedRing;
//!
//! let ring = TypedRing::<f32>::new(8, true).unwrap();
//! ring.push(0.25).unwrap();
//! assert_eq!(ring.pop(), Ok(0.25));
//! ```

mod config;
mod error;
mod handle;
mod index;
mod invariants;
mod ring;
mod typed;

pub use config::Config;
pub use error::RingError;
pub use handle::{Consumer, Producer};
pub use ring::SlotRing;
pub use typed::{Item, TypedRing};
