//! Growth and shrink policy for `RingQueue`.

use core::cmp;

use crate::error::PolicyError;
use crate::utils::next_power_of_two;

/// Parameters controlling when [`RingQueue::shrink_to_fit`] gives memory back.
///
/// A non-empty queue shrinks only when
///
/// - `len < capacity / shrink_divisor`, and
/// - `capacity > min_capacity`,
///
/// and then to the smallest power of two that is at least
/// `max(len * growth_factor, min_capacity)`. Shrinking below a quarter and
/// regrowing to twice the live count keeps a queue that hovers near a
/// threshold from bouncing between two sizes.
///
/// The default is `shrink_divisor = 4`, `growth_factor = 2`,
/// `min_capacity = 16`.
///
/// # Examples
///
/// ```
/// use ringqueue::{RingQueue, ShrinkPolicy};
///
/// let policy = ShrinkPolicy::new(2, 1, 4).unwrap();
/// let mut queue = RingQueue::with_policy(32, policy);
/// queue.extend(0..10);
/// queue.shrink_to_fit();
/// assert_eq!(queue.capacity(), 16);
/// ```
///
/// [`RingQueue::shrink_to_fit`]: crate::RingQueue::shrink_to_fit
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct ShrinkPolicy {
    shrink_divisor: usize,
    growth_factor: usize,
    min_capacity: usize,
}

impl Default for ShrinkPolicy {
    #[inline]
    fn default() -> ShrinkPolicy {
        ShrinkPolicy {
            shrink_divisor: 4,
            growth_factor: 2,
            min_capacity: 16,
        }
    }
}

impl ShrinkPolicy {
    /// Creates a policy, rejecting zero for any parameter.
    pub fn new(shrink_divisor: usize,
               growth_factor: usize,
               min_capacity: usize)
               -> Result<ShrinkPolicy, PolicyError> {
        if shrink_divisor == 0 {
            return Err(PolicyError::ZeroShrinkDivisor);
        }
        if growth_factor == 0 {
            return Err(PolicyError::ZeroGrowthFactor);
        }
        if min_capacity == 0 {
            return Err(PolicyError::ZeroMinCapacity);
        }
        Ok(ShrinkPolicy {
            shrink_divisor,
            growth_factor,
            min_capacity,
        })
    }

    /// Occupancy below `capacity / shrink_divisor` makes a queue eligible
    /// for shrinking.
    #[inline]
    pub fn shrink_divisor(&self) -> usize {
        self.shrink_divisor
    }

    /// Multiple of the live count a shrunk queue keeps room for.
    #[inline]
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Capacity floor for shrinking.
    #[inline]
    pub fn min_capacity(&self) -> usize {
        self.min_capacity
    }

    /// Capacity a non-empty queue of `len` elements in `capacity` slots
    /// should shrink to, or `None` when it should stay as it is.
    pub fn shrink_target(&self, len: usize, capacity: usize) -> Option<usize> {
        debug_assert!(len > 0);
        if len >= capacity / self.shrink_divisor || capacity <= self.min_capacity {
            return None;
        }
        let wanted = cmp::max(len.saturating_mul(self.growth_factor), self.min_capacity);
        next_power_of_two(wanted).filter(|&target| target < capacity && target >= len)
    }
}

/// Capacity after a grow-on-full: double, or `1` for an unallocated buffer.
#[inline]
pub fn grow_target(capacity: usize) -> Option<usize> {
    if capacity == 0 {
        Some(1)
    } else {
        capacity.checked_mul(2)
    }
}
