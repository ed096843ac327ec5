use core::cmp;

use crate::error::ReserveError;
use crate::policy::ShrinkPolicy;
use crate::storage::Slots;
use crate::utils::{mask_for, next_power_of_two};

mod internal;
mod iterator_impls;
mod trait_impls;

#[cfg(test)]
mod golden;

/// Capacity used by [`RingQueue::new`] and [`Default`].
pub const DEFAULT_CAPACITY: usize = 16;

/// `RingQueue` is a growable ring buffer with power-of-two capacity.
///
/// The "default" usage of this type as a queue is to use `push` to add to
/// the back, and `pop` or `pop_front` to remove from the front. `extend`
/// pushes onto the back in this manner, and iterating over `RingQueue` goes
/// front to back.
///
/// Elements stay where they were constructed until the buffer is grown or
/// shrunk; only then are all of them moved, in order, into a new block.
///
/// # Capacity
///
/// `capacity()` is always a power of two, and the queue holds exactly
/// `capacity()` elements when full. The only exception is a queue whose
/// storage was released by [`shrink_to_fit`](RingQueue::shrink_to_fit),
/// which reports a capacity of `0` until the next push.
pub struct RingQueue<T> {
    slots: Slots<T>,
    head: usize,
    tail: usize,
    len: usize,
    mask: usize,
    policy: ShrinkPolicy,
}

/// `RingQueue` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    first: core::slice::Iter<'a, T>,
    second: core::slice::Iter<'a, T>,
}

/// `RingQueue` mutable iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    first: core::slice::IterMut<'a, T>,
    second: core::slice::IterMut<'a, T>,
}

/// A by-value `RingQueue` iterator
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: RingQueue<T>,
}

impl<T> RingQueue<T> {
    /// Creates an empty `RingQueue` with room for
    /// [`DEFAULT_CAPACITY`] elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let queue: RingQueue<u32> = RingQueue::new();
    /// assert_eq!(queue.capacity(), 16);
    /// ```
    #[inline]
    pub fn new() -> RingQueue<T> {
        RingQueue::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `RingQueue` with room for at least `capacity`
    /// elements.
    ///
    /// The capacity is rounded up to the next power of two; `0` becomes `1`.
    ///
    /// # Panics
    ///
    /// Panics if the rounded capacity overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// assert_eq!(RingQueue::<u8>::with_capacity(0).capacity(), 1);
    /// assert_eq!(RingQueue::<u8>::with_capacity(5).capacity(), 8);
    /// assert_eq!(RingQueue::<u8>::with_capacity(8).capacity(), 8);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> RingQueue<T> {
        RingQueue::with_policy(capacity, ShrinkPolicy::default())
    }

    /// Creates an empty `RingQueue` like [`with_capacity`] that shrinks
    /// according to `policy`.
    ///
    /// [`with_capacity`]: RingQueue::with_capacity
    pub fn with_policy(capacity: usize, policy: ShrinkPolicy) -> RingQueue<T> {
        let cap = next_power_of_two(capacity).unwrap_or_else(|| internal::capacity_overflow());
        RingQueue {
            slots: Slots::new(cap),
            head: 0,
            tail: 0,
            len: 0,
            mask: mask_for(cap),
            policy,
        }
    }

    /// The policy `shrink_to_fit` follows.
    #[inline]
    pub fn policy(&self) -> ShrinkPolicy {
        self.policy
    }

    /// Replaces the policy `shrink_to_fit` follows.
    #[inline]
    pub fn set_policy(&mut self, policy: ShrinkPolicy) {
        self.policy = policy;
    }

    /// Returns the number of elements in the `RingQueue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// assert_eq!(queue.len(), 0);
    /// queue.push(1);
    /// assert_eq!(queue.len(), 1);
    /// ```
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the queue contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots in the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::with_capacity(2);
    /// queue.extend(0..3);
    /// assert_eq!(queue.capacity(), 4);
    /// ```
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if every slot holds an element, so that the next push
    /// has to grow the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::with_capacity(2);
    /// queue.push(1);
    /// assert!(!queue.is_full());
    /// queue.push(2);
    /// assert!(queue.is_full());
    /// ```
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Appends an element to the back of the queue, growing the buffer
    /// first if it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::with_capacity(1);
    /// queue.push(10);
    /// queue.push(20);
    /// assert_eq!(queue.capacity(), 2);
    /// assert_eq!(*queue.back(), 20);
    /// ```
    pub fn push(&mut self, element: T) {
        self.ensure_capacity();
        let tail = self.tail;
        unsafe { self.slots.write(tail, element) };
        self.advance_tail();
    }

    /// Constructs an element at the back of the queue from `f` and returns
    /// a reference to it.
    ///
    /// The buffer is grown before `f` runs. If `f` panics the queue keeps
    /// its elements and length; only the grown capacity remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.emplace(|| vec![1, 2]).push(3);
    /// assert_eq!(queue.front(), &[1, 2, 3]);
    /// ```
    pub fn emplace<F>(&mut self, f: F) -> &mut T
        where F: FnOnce() -> T
    {
        self.ensure_capacity();
        let element = f();
        let tail = self.tail;
        unsafe { self.slots.write(tail, element) };
        self.advance_tail();
        unsafe { self.slots.get_mut(tail) }
    }

    /// Constructs an element at the back of the queue from a fallible `f`.
    ///
    /// If `f` returns an error it is passed through, and the queue keeps its
    /// elements and length; only the grown capacity remains.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(1);
    ///
    /// assert_eq!(queue.try_emplace(|| "2".parse::<i32>()), Ok(&mut 2));
    /// assert!(queue.try_emplace(|| "x".parse::<i32>()).is_err());
    /// assert_eq!(queue, [1, 2]);
    /// ```
    pub fn try_emplace<F, E>(&mut self, f: F) -> Result<&mut T, E>
        where F: FnOnce() -> Result<T, E>
    {
        self.ensure_capacity();
        let element = f()?;
        let tail = self.tail;
        unsafe { self.slots.write(tail, element) };
        self.advance_tail();
        Ok(unsafe { self.slots.get_mut(tail) })
    }

    /// Prepends an element to the front of the queue, growing the buffer
    /// first if it is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(2);
    /// queue.push_front(1);
    /// assert_eq!(queue, [1, 2]);
    /// ```
    pub fn push_front(&mut self, element: T) {
        self.ensure_capacity();
        let head = self.wrap_sub(self.head, 1);
        unsafe { self.slots.write(head, element) };
        self.retreat_head();
    }

    /// Constructs an element at the front of the queue from `f`, with the
    /// same guarantee as [`emplace`](RingQueue::emplace).
    pub fn emplace_front<F>(&mut self, f: F) -> &mut T
        where F: FnOnce() -> T
    {
        self.ensure_capacity();
        let element = f();
        let head = self.wrap_sub(self.head, 1);
        unsafe { self.slots.write(head, element) };
        self.retreat_head();
        unsafe { self.slots.get_mut(head) }
    }

    /// Constructs an element at the front of the queue from a fallible `f`,
    /// with the same guarantee as [`try_emplace`](RingQueue::try_emplace).
    pub fn try_emplace_front<F, E>(&mut self, f: F) -> Result<&mut T, E>
        where F: FnOnce() -> Result<T, E>
    {
        self.ensure_capacity();
        let element = f()?;
        let head = self.wrap_sub(self.head, 1);
        unsafe { self.slots.write(head, element) };
        self.retreat_head();
        Ok(unsafe { self.slots.get_mut(head) })
    }

    /// Destroys the front element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(1);
    /// queue.push(2);
    /// queue.pop();
    /// assert_eq!(*queue.front(), 2);
    /// ```
    pub fn pop(&mut self) {
        assert!(!self.is_empty(), "pop() on empty queue");
        // The slot leaves the live range before its destructor runs.
        let head = self.head;
        self.advance_head();
        unsafe { self.slots.destroy(head) }
    }

    /// Removes the first element and returns it, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(1);
    /// queue.push(2);
    ///
    /// assert_eq!(queue.pop_front(), Some(1));
    /// assert_eq!(queue.pop_front(), Some(2));
    /// assert_eq!(queue.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let head = self.head;
        self.advance_head();
        unsafe { Some(self.slots.read(head)) }
    }

    /// Removes the last element and returns it, or `None` if the queue is
    /// empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// assert_eq!(queue.pop_back(), None);
    /// queue.push(1);
    /// queue.push(3);
    /// assert_eq!(queue.pop_back(), Some(3));
    /// ```
    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        self.retreat_tail();
        let tail = self.tail;
        unsafe { Some(self.slots.read(tail)) }
    }

    /// Provides a reference to the front element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(1);
    /// queue.push(2);
    /// assert_eq!(*queue.front(), 1);
    /// ```
    #[inline]
    pub fn front(&self) -> &T {
        assert!(!self.is_empty(), "front() on empty queue");
        unsafe { self.slots.get(self.head) }
    }

    /// Provides a mutable reference to the front element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "front_mut() on empty queue");
        let head = self.head;
        unsafe { self.slots.get_mut(head) }
    }

    /// Provides a reference to the back element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(1);
    /// queue.push(2);
    /// assert_eq!(*queue.back(), 2);
    /// ```
    #[inline]
    pub fn back(&self) -> &T {
        assert!(!self.is_empty(), "back() on empty queue");
        unsafe { self.slots.get(self.back_index()) }
    }

    /// Provides a mutable reference to the back element.
    ///
    /// # Panics
    ///
    /// Panics if the queue is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(1);
    /// queue.push(2);
    /// *queue.back_mut() = 9;
    /// assert_eq!(queue, [1, 9]);
    /// ```
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        assert!(!self.is_empty(), "back_mut() on empty queue");
        let back = self.back_index();
        unsafe { self.slots.get_mut(back) }
    }

    /// Retrieves an element in the `RingQueue` by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(3);
    /// queue.push(4);
    /// queue.push(5);
    /// assert_eq!(queue.get(1), Some(&4));
    /// assert_eq!(queue.get(3), None);
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            let idx = self.wrap_add(self.head, index);
            unsafe { Some(self.slots.get(idx)) }
        } else {
            None
        }
    }

    /// Retrieves an element in the `RingQueue` mutably by index.
    ///
    /// Element at index 0 is the front of the queue.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(3);
    /// queue.push(4);
    /// if let Some(elem) = queue.get_mut(1) {
    ///     *elem = 7;
    /// }
    /// assert_eq!(queue[1], 7);
    /// ```
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index < self.len {
            let idx = self.wrap_add(self.head, index);
            unsafe { Some(self.slots.get_mut(idx)) }
        } else {
            None
        }
    }

    /// Returns `true` if the queue contains an element equal to `x`.
    pub fn contains(&self, x: &T) -> bool
        where T: PartialEq
    {
        let (a, b) = self.as_slices();
        a.contains(x) || b.contains(x)
    }

    /// Makes sure the buffer has at least `n` slots.
    ///
    /// If `n` exceeds the current capacity the elements are moved into a
    /// buffer of the smallest power of two `>= n`. Never shrinks.
    ///
    /// # Panics
    ///
    /// Panics if the rounded capacity overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue: RingQueue<u8> = RingQueue::with_capacity(4);
    /// queue.reserve(20);
    /// assert_eq!(queue.capacity(), 32);
    /// queue.reserve(2);
    /// assert_eq!(queue.capacity(), 32);
    /// ```
    pub fn reserve(&mut self, n: usize) {
        if n > self.capacity() {
            let cap = next_power_of_two(n).unwrap_or_else(|| internal::capacity_overflow());
            self.relocate(cap);
        }
    }

    /// Like [`reserve`](RingQueue::reserve), but reports capacity overflow
    /// and allocation failure instead of panicking or aborting.
    ///
    /// On error the queue is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::{ReserveError, RingQueue};
    ///
    /// let mut queue: RingQueue<u64> = RingQueue::new();
    /// assert_eq!(queue.try_reserve(100), Ok(()));
    /// assert_eq!(queue.capacity(), 128);
    /// assert_eq!(queue.try_reserve(usize::MAX), Err(ReserveError::CapacityOverflow));
    /// assert_eq!(queue.capacity(), 128);
    /// ```
    pub fn try_reserve(&mut self, n: usize) -> Result<(), ReserveError> {
        if n <= self.capacity() {
            return Ok(());
        }
        let cap = next_power_of_two(n).ok_or(ReserveError::CapacityOverflow)?;
        let slots = Slots::try_new(cap)?;
        self.relocate_into(slots);
        Ok(())
    }

    /// Gives memory back when the queue is sparsely populated.
    ///
    /// - An empty queue releases its buffer entirely; `capacity()` reads `0`
    ///   until the next push.
    /// - Otherwise the queue's [`ShrinkPolicy`] decides; by default a queue
    ///   holding fewer than `capacity / 4` elements in more than 16 slots
    ///   shrinks to the smallest power of two `>= max(2 * len, 16)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::with_capacity(64);
    /// queue.extend(0..10);
    /// queue.shrink_to_fit();
    /// assert_eq!(queue.capacity(), 32);
    ///
    /// queue.clear();
    /// queue.shrink_to_fit();
    /// assert_eq!(queue.capacity(), 0);
    /// ```
    pub fn shrink_to_fit(&mut self) {
        if self.is_empty() {
            if self.capacity() != 0 {
                log::debug!("ring queue releasing {} empty slots", self.capacity());
                self.release();
            }
        } else if let Some(cap) = self.policy.shrink_target(self.len, self.capacity()) {
            log::debug!("ring queue shrinking {} -> {} slots for {} elements",
                        self.capacity(),
                        cap,
                        self.len);
            self.relocate(cap);
        }
    }

    /// Destroys every element, keeping the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(1);
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// assert_eq!(queue.capacity(), 16);
    /// ```
    pub fn clear(&mut self) {
        while !self.is_empty() {
            self.pop();
        }
        self.head = 0;
        self.tail = 0;
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(5);
    /// queue.push(3);
    /// queue.push(4);
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = queue.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        let (first, second) = self.as_slices();
        Iter {
            first: first.iter(),
            second: second.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::new();
    /// queue.push(5);
    /// queue.push(3);
    /// for num in queue.iter_mut() {
    ///     *num -= 2;
    /// }
    /// assert_eq!(queue, [3, 1]);
    /// ```
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        let (first, second) = self.as_mut_slices();
        IterMut {
            first: first.iter_mut(),
            second: second.iter_mut(),
        }
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `RingQueue`.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringqueue::RingQueue;
    ///
    /// let mut queue = RingQueue::with_capacity(4);
    /// queue.extend(0..3);
    /// assert_eq!(queue.as_slices(), (&[0, 1, 2][..], &[][..]));
    ///
    /// queue.pop();
    /// queue.pop();
    /// queue.extend(3..6);
    /// assert_eq!(queue.as_slices(), (&[2, 3][..], &[4, 5][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let first = cmp::min(self.len, self.capacity() - self.head);
        unsafe {
            (self.slots.slice(self.head, first),
             self.slots.slice(0, self.len - first))
        }
    }

    /// Returns a pair of mutable slices which contain, in order, the
    /// contents of the `RingQueue`.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let first = cmp::min(self.len, self.capacity() - self.head);
        let (head, len) = (self.head, self.len);
        unsafe { self.slots.split_mut(head, first, len - first) }
    }
}
