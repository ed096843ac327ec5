use core::cmp;

use super::RingQueue;
use crate::policy::grow_target;
use crate::storage::Slots;
use crate::utils::{mask_for, wrap_add, wrap_sub};

#[cold]
#[inline(never)]
pub fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> RingQueue<T> {
    #[inline]
    pub(super) fn wrap_add(&self, index: usize, addend: usize) -> usize {
        wrap_add(index, addend, self.mask)
    }

    #[inline]
    pub(super) fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        wrap_sub(index, subtrahend, self.mask)
    }

    /// Physical index of the newest element. Only valid when non-empty.
    #[inline]
    pub(super) fn back_index(&self) -> usize {
        debug_assert!(!self.is_empty());
        self.wrap_sub(self.tail, 1)
    }

    /// Takes the slot at `tail` into the live range.
    #[inline]
    pub(super) fn advance_tail(&mut self) {
        debug_assert!(self.len < self.capacity());
        self.tail = self.wrap_add(self.tail, 1);
        self.len += 1;
    }

    /// Drops the slot at `head` from the live range.
    #[inline]
    pub(super) fn advance_head(&mut self) {
        debug_assert!(self.len > 0);
        self.head = self.wrap_add(self.head, 1);
        self.len -= 1;
    }

    /// Takes the slot before `head` into the live range.
    #[inline]
    pub(super) fn retreat_head(&mut self) {
        debug_assert!(self.len < self.capacity());
        self.head = self.wrap_sub(self.head, 1);
        self.len += 1;
    }

    /// Drops the slot before `tail` from the live range.
    #[inline]
    pub(super) fn retreat_tail(&mut self) {
        debug_assert!(self.len > 0);
        self.tail = self.wrap_sub(self.tail, 1);
        self.len -= 1;
    }

    /// Makes room for one more element.
    #[inline]
    pub(super) fn ensure_capacity(&mut self) {
        if self.is_full() {
            self.grow();
        }
    }

    #[cold]
    fn grow(&mut self) {
        let cap = grow_target(self.capacity()).unwrap_or_else(|| capacity_overflow());
        self.relocate(cap);
    }

    /// Moves every element into a fresh buffer of `cap` slots.
    pub(super) fn relocate(&mut self, cap: usize) {
        self.relocate_into(Slots::new(cap));
    }

    /// Moves every element, in logical order, into `slots` starting at slot
    /// `0`, then adopts `slots` and frees the old buffer.
    pub(super) fn relocate_into(&mut self, mut slots: Slots<T>) {
        debug_assert!(slots.len() >= self.len);
        debug_assert!(slots.len().is_power_of_two());
        log::trace!("ring queue relocating {} elements: {} -> {} slots",
                    self.len,
                    self.capacity(),
                    slots.len());

        //      T       H          H       T
        // [C D . . . . A B]  ->  [A B C D . . . . . . . . . . . .]
        //
        let first = cmp::min(self.len, self.capacity() - self.head);
        unsafe {
            slots.move_from(0, &mut self.slots, self.head, first);
            slots.move_from(first, &mut self.slots, 0, self.len - first);
        }

        // The old buffer holds no live element now and is freed without
        // running any destructor.
        self.slots = slots;
        self.mask = mask_for(self.slots.len());
        self.head = 0;
        self.tail = self.len & self.mask;
    }

    /// Frees the buffer of an empty queue.
    pub(super) fn release(&mut self) {
        debug_assert!(self.is_empty());
        self.slots = Slots::empty();
        self.mask = 0;
        self.head = 0;
        self.tail = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::super::RingQueue;

    #[test]
    fn bookkeeping_wraps() {
        let mut tester: RingQueue<u8> = RingQueue::with_capacity(4);
        for i in 0..4 {
            tester.push(i);
        }
        assert_eq!((tester.head, tester.tail, tester.len), (0, 0, 4));
        assert_eq!(tester.back_index(), 3);

        tester.pop();
        tester.pop();
        tester.push(4);
        assert_eq!((tester.head, tester.tail, tester.len), (2, 1, 3));
        assert_eq!(tester.back_index(), 0);

        tester.push_front(1);
        assert_eq!((tester.head, tester.tail, tester.len), (1, 1, 4));
        assert_eq!(tester.pop_back(), Some(4));
        assert_eq!((tester.head, tester.tail, tester.len), (1, 0, 3));
    }

    #[test]
    fn tail_tracks_head_plus_len() {
        let mut tester = RingQueue::with_capacity(2);
        for i in 0..50u32 {
            tester.push(i);
            if i % 3 == 0 {
                tester.pop();
            }
            if i % 7 == 0 {
                tester.push_front(i);
            }
            assert_eq!(tester.tail, (tester.head + tester.len) & tester.mask);
            assert!(tester.capacity().is_power_of_two());
            assert!(tester.len <= tester.capacity());
        }
    }

    #[test]
    fn relocation_to_exact_fit() {
        let mut tester = RingQueue::with_capacity(8);
        tester.extend(0..8);
        for _ in 0..4 {
            tester.pop();
        }
        tester.extend(8..12);
        tester.relocate(8);
        assert_eq!((tester.head, tester.tail), (0, 0));
        assert!(tester.is_full());
        assert!(tester.iter().cloned().eq(4..12));
    }
}
