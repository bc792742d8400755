use std::alloc::Layout;

/// Error from the fallible reservation layer
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error due to the computed capacity exceeding the maximum
    /// (usually `isize::MAX` bytes).
    ///
    /// ## Examples
    ///
    /// reserve more than `isize::MAX` bytes:
    ///
    /// ```
    /// # use dynbuf::{DynArray, Error};
    /// let mut arr = DynArray::<u64>::new();
    /// assert!(matches!(arr.try_reserve(usize::MAX), Err(Error::CapacityOverflow)));
    /// ```
    #[error("exceeding the capacity maximum")]
    CapacityOverflow,

    /// The memory allocator returned an error
    #[error("memory allocation of {layout:?} failed")]
    AllocError {
        /// The layout of allocation request that failed
        layout: Layout,

        #[doc(hidden)]
        non_exhaustive: (),
    },
}

/// Alias for `Result<T, Error>` to return from the `try_` reservation methods
pub type Result<T> = std::result::Result<T, Error>;

pub(crate) fn alloc_error(layout: Layout) -> Error {
    Error::AllocError { layout, non_exhaustive: () }
}

/// Unwraps the fallible layer for the infallible public surface. Allocation
/// failure is fatal here, as one documented policy rather than a property of
/// any particular allocator.
#[inline]
pub(crate) fn infallible<T>(result: Result<T>) -> T {
    match result {
        Ok(val) => val,
        Err(err) => handle_error(err),
    }
}

#[cold]
fn handle_error(err: Error) -> ! {
    match err {
        Error::CapacityOverflow => panic!("capacity overflow"),
        Error::AllocError { layout, .. } => std::alloc::handle_alloc_error(layout),
    }
}
