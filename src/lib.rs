//! A growable ring queue with power-of-two capacity.
//!
//! `RingQueue` keeps its elements in one flat buffer and addresses it with a
//! bitwise-AND against `capacity - 1`, so moving either end is a mask and an
//! add. Elements are constructed directly in their slot and are only moved
//! when the buffer grows or shrinks, in one `O(len)` pass that also unwraps
//! the ring.
//!
//! Pushing onto a full queue doubles its capacity first. If building the new
//! element fails afterwards (see [`RingQueue::try_emplace`] and
//! [`RingQueue::emplace`]), the queue still holds exactly what it held
//! before; the grown buffer is the only trace left.
//!
//! # Feature Flags
//! The **ringqueue** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate is `no_std` and needs `alloc`
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringqueue = "0.1"
//! ```
//!
//! To use it in a `#![no_std]` crate:
//!
//! ```toml
//! [dependencies]
//! ringqueue = { version = "0.1", default-features = false }
//! ```
//!
//! # Capacity
//!
//! The capacity requested at construction is rounded up to a power of two,
//! and stays a power of two through every grow, `reserve` and
//! `shrink_to_fit`. A full queue holds exactly `capacity()` elements.
//!
//! # Examples
//! ```
//! use ringqueue::RingQueue;
//!
//! let mut queue = RingQueue::with_capacity(0);
//! assert_eq!(queue.capacity(), 1);
//!
//! for x in [10, 20, 30, 40, 50] {
//!     queue.push(x);
//! }
//! assert_eq!(queue.capacity(), 8);
//! assert_eq!(queue.len(), 5);
//! assert_eq!(*queue.front(), 10);
//! assert_eq!(*queue.back(), 50);
//!
//! queue.pop();
//! queue.pop();
//! assert_eq!(*queue.front(), 30);
//! ```
//!
//! # Fallible construction
//! ```
//! use ringqueue::RingQueue;
//!
//! let mut queue: RingQueue<u8> = (0..4).collect();
//! let before = queue.clone();
//!
//! let result = queue.try_emplace(|| u8::try_from(300u32));
//! assert!(result.is_err());
//! assert_eq!(queue, before);
//! ```
//!
//! # Shrinking
//! ```
//! use ringqueue::RingQueue;
//!
//! let mut queue = RingQueue::with_capacity(64);
//! queue.extend(0..64);
//! while queue.len() > 10 {
//!     queue.pop();
//! }
//! queue.shrink_to_fit();
//! assert_eq!(queue.capacity(), 32);
//! assert_eq!(queue, (54..64).collect::<Vec<_>>());
//! ```

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod policy;
mod ring_queue;
mod storage;
mod utils;
pub mod error;

pub use error::{PolicyError, ReserveError};
pub use policy::ShrinkPolicy;
pub use ring_queue::{IntoIter, Iter, IterMut, RingQueue, DEFAULT_CAPACITY};
