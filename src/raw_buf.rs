use {
    crate::alloc::{alloc_error, Error::CapacityOverflow, Result},
    allocator_api2::alloc::Allocator,
    std::{
        alloc::Layout,
        fmt::{self, Formatter},
        marker::PhantomData,
        mem,
        ptr::NonNull,
    },
};

/// Capacity given to a zero-capacity buffer the first time it grows,
/// avoiding repeated tiny reallocations.
pub const MIN_CAPACITY: usize = 256;

/// Pointer/capacity record behind [`DynArray`](crate::DynArray) and
/// [`ByteString`](crate::ByteString). Owns the reservation policy and the
/// buffer itself; which elements are initialized is the owner's concern.
pub(crate) struct RawBuf<T, A: Allocator> {
    ptr: NonNull<T>,
    cap: usize,
    alloc: A,
    _marker: PhantomData<T>,
}

impl<T, A: Allocator> RawBuf<T, A> {
    pub const fn dangling_in(alloc: A) -> Self {
        // zero-sized items never allocate, so the whole address space is "reserved"
        let cap = if mem::size_of::<T>() == 0 { usize::MAX } else { 0 };
        Self { ptr: NonNull::dangling(), cap, alloc, _marker: PhantomData }
    }

    pub const fn cap(&self) -> usize {
        self.cap
    }

    pub const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Ensures the buffer holds at least `expected` items, preserving the
    /// content of every already-allocated slot. A zero-capacity buffer starts
    /// from [`MIN_CAPACITY`]; any further growth doubles until sufficient.
    pub fn try_reserve(&mut self, expected: usize) -> Result<()> {
        if expected <= self.cap {
            return Ok(());
        }

        let mut cap = if self.cap == 0 { MIN_CAPACITY } else { self.cap };
        while cap < expected {
            cap = cap.checked_mul(2).ok_or(CapacityOverflow)?;
        }
        self.grow_to(cap)
    }

    fn grow_to(&mut self, cap: usize) -> Result<()> {
        let new_layout = Layout::array::<T>(cap).map_err(|_| CapacityOverflow)?;
        let ptr = match self.current_memory() {
            // SAFETY: `ptr` was allocated by `self.alloc` with `old_layout`,
            // and `new_layout` is at least as large
            Some((ptr, old_layout)) => unsafe { self.alloc.grow(ptr, old_layout, new_layout) },
            None => self.alloc.allocate(new_layout),
        }
        .map_err(|_| alloc_error(new_layout))?;

        self.ptr = ptr.cast();
        self.cap = cap;
        Ok(())
    }

    fn current_memory(&self) -> Option<(NonNull<u8>, Layout)> {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            None
        } else {
            // SAFETY: size and align were validated by `Layout::array`
            // when the block was allocated
            unsafe {
                let layout = Layout::from_size_align_unchecked(
                    mem::size_of::<T>() * self.cap,
                    mem::align_of::<T>(),
                );
                Some((self.ptr.cast(), layout))
            }
        }
    }
}

impl<T, A: Allocator> Drop for RawBuf<T, A> {
    fn drop(&mut self) {
        if let Some((ptr, layout)) = self.current_memory() {
            // SAFETY: `ptr` is currently allocated by `self.alloc` with `layout`
            unsafe { self.alloc.deallocate(ptr, layout) }
        }
    }
}

impl<T, A: Allocator> fmt::Debug for RawBuf<T, A> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}..{})", self.ptr, self.cap)
    }
}

unsafe impl<T: Send, A: Allocator + Send> Send for RawBuf<T, A> {}
unsafe impl<T: Sync, A: Allocator + Sync> Sync for RawBuf<T, A> {}
