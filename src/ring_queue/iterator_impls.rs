use core::iter::FusedIterator;

use super::*;

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Iter {
            first: self.first.clone(),
            second: self.second.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match self.first.next() {
            Some(elem) => Some(elem),
            None => self.second.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.len() + self.second.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        match self.second.next_back() {
            Some(elem) => Some(elem),
            None => self.first.next_back(),
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> FusedIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.first.next() {
            Some(elem) => Some(elem),
            None => self.second.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.first.len() + self.second.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.second.next_back() {
            Some(elem) => Some(elem),
            None => self.first.next_back(),
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<'a, T> FusedIterator for IterMut<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop_front()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        self.inner.pop_back()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

#[cfg(test)]
mod tests {
    use super::super::RingQueue;

    fn wrapped() -> RingQueue<i32> {
        let mut tester = RingQueue::with_capacity(8);
        tester.extend(0..8);
        for _ in 0..5 {
            tester.pop();
        }
        tester.extend(8..12);
        assert!(!tester.as_slices().1.is_empty());
        tester
    }

    #[test]
    fn iter_crosses_the_seam() {
        let tester = wrapped();
        assert_eq!(tester.iter().cloned().collect::<Vec<_>>(), (5..12).collect::<Vec<_>>());
        assert_eq!(tester.iter().rev().cloned().collect::<Vec<_>>(),
                   (5..12).rev().collect::<Vec<_>>());
    }

    #[test]
    fn iter_meets_in_the_middle() {
        let tester = wrapped();
        let mut it = tester.iter();
        let mut front = Vec::new();
        let mut back = Vec::new();
        loop {
            match it.next() {
                Some(x) => front.push(*x),
                None => break,
            }
            assert_eq!(it.len(), 7 - front.len() - back.len());
            match it.next_back() {
                Some(x) => back.push(*x),
                None => break,
            }
        }
        assert_eq!(front, [5, 6, 7, 8]);
        assert_eq!(back, [11, 10, 9]);
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn iter_clone_is_independent() {
        let tester = wrapped();
        let mut a = tester.iter();
        a.next();
        let b = a.clone();
        assert_eq!(a.count(), 6);
        assert_eq!(b.cloned().sum::<i32>(), 6 + 7 + 8 + 9 + 10 + 11);
    }

    #[test]
    fn iter_mut_crosses_the_seam() {
        let mut tester = wrapped();
        for (i, x) in tester.iter_mut().enumerate() {
            *x += i as i32 * 100;
        }
        assert_eq!(tester, [5, 106, 207, 308, 409, 510, 611]);
        let mut it = tester.iter_mut();
        *it.next_back().unwrap() = 0;
        assert_eq!(it.len(), 6);
        assert_eq!(tester[6], 0);
    }

    #[test]
    fn into_iter_drains_both_ends() {
        let tester = wrapped();
        let mut it = tester.into_iter();
        assert_eq!(it.next(), Some(5));
        assert_eq!(it.next_back(), Some(11));
        assert_eq!(it.size_hint(), (5, Some(5)));
        assert_eq!(it.collect::<Vec<_>>(), [6, 7, 8, 9, 10]);
    }
}
