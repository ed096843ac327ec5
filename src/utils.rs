//! Index arithmetic over power-of-two capacities.
//!
//! Every physical index is reduced with `& mask` where `mask == capacity - 1`.

#[inline]
pub fn wrap_add(index: usize, addend: usize, mask: usize) -> usize {
    debug_assert!(addend <= mask + 1);
    index.wrapping_add(addend) & mask
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, mask: usize) -> usize {
    debug_assert!(subtrahend <= mask + 1);
    index.wrapping_sub(subtrahend) & mask
}

/// Mask for a capacity of `cap` slots. An unallocated buffer gets `0`.
#[inline]
pub fn mask_for(cap: usize) -> usize {
    debug_assert!(cap == 0 || is_power_of_two(cap));
    cap.saturating_sub(1)
}

#[inline]
pub fn is_power_of_two(n: usize) -> bool {
    n != 0 && n & (n - 1) == 0
}

/// Smallest power of two `>= n`. A request for `0` slots rounds to `1`.
///
/// Returns `None` when the result does not fit in a `usize`.
#[inline]
pub fn next_power_of_two(n: usize) -> Option<usize> {
    n.max(1).checked_next_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_add_masks() {
        assert_eq!(wrap_add(6, 1, 7), 7);
        assert_eq!(wrap_add(7, 1, 7), 0);
        assert_eq!(wrap_add(5, 8, 7), 5);
        assert_eq!(wrap_add(0, 1, 0), 0);
    }

    #[test]
    fn wrap_sub_masks() {
        assert_eq!(wrap_sub(0, 1, 7), 7);
        assert_eq!(wrap_sub(3, 2, 7), 1);
        assert_eq!(wrap_sub(0, 1, 0), 0);
    }

    #[test]
    fn rounding() {
        assert_eq!(next_power_of_two(0), Some(1));
        assert_eq!(next_power_of_two(1), Some(1));
        assert_eq!(next_power_of_two(2), Some(2));
        assert_eq!(next_power_of_two(3), Some(4));
        assert_eq!(next_power_of_two(17), Some(32));
        assert_eq!(next_power_of_two(1 << 20), Some(1 << 20));
        assert_eq!(next_power_of_two(usize::MAX), None);
        assert_eq!(next_power_of_two((usize::MAX >> 1) + 2), None);
    }

    #[test]
    fn powers() {
        assert!(!is_power_of_two(0));
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(64));
        assert!(!is_power_of_two(12));
        assert_eq!(mask_for(0), 0);
        assert_eq!(mask_for(1), 0);
        assert_eq!(mask_for(16), 15);
    }
}
