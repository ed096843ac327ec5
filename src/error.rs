//! Error types.

use thiserror::Error;

/// Error value returned by [`RingQueue::try_reserve`].
///
/// The queue is left untouched whenever this is returned.
///
/// [`RingQueue::try_reserve`]: crate::RingQueue::try_reserve
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ReserveError {
    /// The requested capacity has no power of two representable in `usize`,
    /// or its size in bytes exceeds `isize::MAX`.
    #[error("capacity overflow")]
    CapacityOverflow,

    /// The allocator could not provide a block of `capacity` slots.
    #[error("memory allocation of {capacity} slots failed")]
    AllocFailed {
        /// Number of slots that were requested.
        capacity: usize,
    },
}

/// Error value returned by [`ShrinkPolicy::new`] for unusable parameters.
///
/// [`ShrinkPolicy::new`]: crate::ShrinkPolicy::new
#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum PolicyError {
    /// `shrink_divisor` was zero.
    #[error("shrink divisor must be at least 1")]
    ZeroShrinkDivisor,

    /// `growth_factor` was zero.
    #[error("growth factor must be at least 1")]
    ZeroGrowthFactor,

    /// `min_capacity` was zero.
    #[error("minimum capacity must be at least 1")]
    ZeroMinCapacity,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(ReserveError::CapacityOverflow.to_string(), "capacity overflow");
        assert_eq!(ReserveError::AllocFailed { capacity: 64 }.to_string(),
                   "memory allocation of 64 slots failed");
        assert_eq!(PolicyError::ZeroShrinkDivisor.to_string(),
                   "shrink divisor must be at least 1");
    }
}
