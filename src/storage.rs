//! Raw slot storage.
//!
//! `Slots<T>` owns a block of `MaybeUninit<T>` and never drops its contents;
//! which slots are live is tracked by the owner.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::alloc::Layout;
use core::mem::MaybeUninit;
use core::ptr;
use core::slice;

use crate::error::ReserveError;

pub struct Slots<T> {
    buf: Box<[MaybeUninit<T>]>,
}

impl<T> Slots<T> {
    /// Storage with no slots. Does not allocate.
    #[inline]
    pub fn empty() -> Slots<T> {
        Slots { buf: Vec::new().into_boxed_slice() }
    }

    /// Allocates `cap` vacant slots.
    ///
    /// Panics on capacity overflow and aborts on allocation failure.
    pub fn new(cap: usize) -> Slots<T> {
        let mut buf = Vec::with_capacity(cap);
        // MaybeUninit<T> needs no initialization.
        unsafe { buf.set_len(cap) };
        Slots { buf: buf.into_boxed_slice() }
    }

    /// Allocates `cap` vacant slots, reporting failure instead of aborting.
    pub fn try_new(cap: usize) -> Result<Slots<T>, ReserveError> {
        if Layout::array::<T>(cap).is_err() {
            return Err(ReserveError::CapacityOverflow);
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(cap)
            .map_err(|_| ReserveError::AllocFailed { capacity: cap })?;
        unsafe { buf.set_len(cap) };
        Ok(Slots { buf: buf.into_boxed_slice() })
    }

    /// Number of slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    fn ptr(&self) -> *const T {
        self.buf.as_ptr() as *const T
    }

    #[inline]
    fn ptr_mut(&mut self) -> *mut T {
        self.buf.as_mut_ptr() as *mut T
    }

    /// Constructs `value` in slot `i` and returns a reference to it.
    ///
    /// Slot `i` must be vacant; it becomes live.
    #[inline]
    pub unsafe fn write(&mut self, i: usize, value: T) -> &mut T {
        debug_assert!(i < self.len(), "write i={} len={}", i, self.len());
        self.buf.get_unchecked_mut(i).write(value)
    }

    /// Moves the element out of slot `i`.
    ///
    /// Slot `i` must be live; it becomes vacant.
    #[inline]
    pub unsafe fn read(&mut self, i: usize) -> T {
        debug_assert!(i < self.len(), "read i={} len={}", i, self.len());
        ptr::read(self.ptr().add(i))
    }

    /// Runs the destructor of the element in slot `i`.
    ///
    /// Slot `i` must be live; it becomes vacant.
    #[inline]
    pub unsafe fn destroy(&mut self, i: usize) {
        debug_assert!(i < self.len(), "destroy i={} len={}", i, self.len());
        ptr::drop_in_place(self.ptr_mut().add(i));
    }

    /// Slot `i` must be live.
    #[inline]
    pub unsafe fn get(&self, i: usize) -> &T {
        debug_assert!(i < self.len(), "get i={} len={}", i, self.len());
        self.buf.get_unchecked(i).assume_init_ref()
    }

    /// Slot `i` must be live.
    #[inline]
    pub unsafe fn get_mut(&mut self, i: usize) -> &mut T {
        debug_assert!(i < self.len(), "get_mut i={} len={}", i, self.len());
        self.buf.get_unchecked_mut(i).assume_init_mut()
    }

    /// Slots `start..start + len` must all be live.
    #[inline]
    pub unsafe fn slice(&self, start: usize, len: usize) -> &[T] {
        debug_assert!(start + len <= self.len());
        slice::from_raw_parts(self.ptr().add(start), len)
    }

    /// Splits off `start..start + first` and `0..second` as two slices.
    ///
    /// Both ranges must be live and `second <= start` unless `first == 0`.
    #[inline]
    pub unsafe fn split_mut(&mut self,
                            start: usize,
                            first: usize,
                            second: usize)
                            -> (&mut [T], &mut [T]) {
        debug_assert!(start + first <= self.len());
        debug_assert!(first == 0 || second <= start);
        let ptr = self.ptr_mut();
        (slice::from_raw_parts_mut(ptr.add(start), first),
         slice::from_raw_parts_mut(ptr, second))
    }

    /// Moves `len` elements from `src[src_start..]` into `self[dst_start..]`.
    ///
    /// The source slots must be live and become vacant; the destination
    /// slots must be vacant and become live. Neither range may wrap.
    #[inline]
    pub unsafe fn move_from(&mut self,
                            dst_start: usize,
                            src: &mut Slots<T>,
                            src_start: usize,
                            len: usize) {
        debug_assert!(dst_start + len <= self.len(),
                      "mov dst={} len={} cap={}",
                      dst_start,
                      len,
                      self.len());
        debug_assert!(src_start + len <= src.len(),
                      "mov src={} len={} cap={}",
                      src_start,
                      len,
                      src.len());
        ptr::copy_nonoverlapping(src.ptr().add(src_start), self.ptr_mut().add(dst_start), len);
    }
}
