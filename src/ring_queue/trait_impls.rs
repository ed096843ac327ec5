use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::ops::{Index, IndexMut};

use super::*;

impl<T: Clone> Clone for RingQueue<T> {
    fn clone(&self) -> RingQueue<T> {
        let mut queue = RingQueue::with_policy(self.capacity(), self.policy);
        queue.extend(self.iter().cloned());
        queue
    }
}

impl<T> Drop for RingQueue<T> {
    fn drop(&mut self) {
        self.clear();

        // `Slots` frees the buffer without touching the vacated slots.
    }
}

impl<T> Default for RingQueue<T> {
    #[inline]
    fn default() -> RingQueue<T> {
        RingQueue::new()
    }
}

impl<T: PartialEq> PartialEq for RingQueue<T> {
    fn eq(&self, other: &RingQueue<T>) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.as_slices();
        if sa.len() == oa.len() {
            sa == oa && sb == ob
        } else if sa.len() < oa.len() {
            // Always divisible in three sections, for example:
            // self:  [a b c|d e f]
            // other: [0 1 2 3|4 5]
            // front = 3, mid = 1,
            // [a b c] == [0 1 2] && [d] == [3] && [e f] == [4 5]
            let front = sa.len();
            let mid = oa.len() - front;

            let (oa_front, oa_mid) = oa.split_at(front);
            let (sb_mid, sb_back) = sb.split_at(mid);
            debug_assert_eq!(sa.len(), oa_front.len());
            debug_assert_eq!(sb_mid.len(), oa_mid.len());
            debug_assert_eq!(sb_back.len(), ob.len());
            sa == oa_front && sb_mid == oa_mid && sb_back == ob
        } else {
            let front = oa.len();
            let mid = sa.len() - front;

            let (sa_front, sa_mid) = sa.split_at(front);
            let (ob_mid, ob_back) = ob.split_at(mid);
            debug_assert_eq!(sa_front.len(), oa.len());
            debug_assert_eq!(sa_mid.len(), ob_mid.len());
            debug_assert_eq!(sb.len(), ob_back.len());
            sa_front == oa && sa_mid == ob_mid && sb == ob_back
        }
    }
}

impl<T: Eq> Eq for RingQueue<T> {}

impl<T, U> PartialEq<[U]> for RingQueue<T>
    where T: PartialEq<U>
{
    fn eq(&self, other: &[U]) -> bool {
        if self.len() != other.len() {
            return false;
        }
        let (sa, sb) = self.as_slices();
        let (oa, ob) = other.split_at(sa.len());
        sa == oa && sb == ob
    }
}

impl<'a, T, U> PartialEq<&'a [U]> for RingQueue<T>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &&'a [U]) -> bool {
        *self == **other
    }
}

impl<T, U, const N: usize> PartialEq<[U; N]> for RingQueue<T>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &[U; N]) -> bool {
        *self == other[..]
    }
}

impl<T, U> PartialEq<Vec<U>> for RingQueue<T>
    where T: PartialEq<U>
{
    #[inline]
    fn eq(&self, other: &Vec<U>) -> bool {
        *self == other[..]
    }
}

impl<T: PartialOrd> PartialOrd for RingQueue<T> {
    fn partial_cmp(&self, other: &RingQueue<T>) -> Option<Ordering> {
        self.iter().partial_cmp(other.iter())
    }
}

impl<T: Ord> Ord for RingQueue<T> {
    #[inline]
    fn cmp(&self, other: &RingQueue<T>) -> Ordering {
        self.iter().cmp(other.iter())
    }
}

impl<T: Hash> Hash for RingQueue<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        // Element by element, so the seam between the two runs never
        // reaches the hasher.
        for elem in self {
            elem.hash(state);
        }
    }
}

impl<T> Index<usize> for RingQueue<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {} but the index is {}",
                           self.len(),
                           index),
        }
    }
}

impl<T> IndexMut<usize> for RingQueue<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        let len = self.len();
        match self.get_mut(index) {
            Some(elem) => elem,
            None => panic!("index out of bounds: the len is {} but the index is {}",
                           len,
                           index),
        }
    }
}

impl<T> iter::FromIterator<T> for RingQueue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> RingQueue<T> {
        let mut queue = RingQueue::new();
        queue.extend(iter);
        queue
    }
}

impl<T> IntoIterator for RingQueue<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingQueue<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

/// Extend the `RingQueue` with an iterator, growing at most once for the
/// iterator's lower size bound.
impl<T> Extend<T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        self.reserve(self.len().saturating_add(lower));
        for elt in iter {
            self.push(elt);
        }
    }
}

impl<'a, T: 'a + Copy> Extend<&'a T> for RingQueue<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<T: fmt::Debug> fmt::Debug for RingQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}
