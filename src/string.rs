use {
    crate::{
        alloc::{infallible, Error::CapacityOverflow, Result},
        raw_buf::RawBuf,
    },
    allocator_api2::alloc::Global,
    std::{
        ffi::CStr,
        fmt::{self, Formatter},
        ptr, slice,
    },
};

/// Owned, length-tracked byte string.
///
/// Every producing operation ([`from_bytes`](Self::from_bytes),
/// [`duplicate`](Self::duplicate), [`concat`](Self::concat)) allocates a
/// fresh buffer and leaves its inputs untouched, so no two values ever share
/// storage. Construction reserves one byte past the logical length and keeps
/// a terminator `0` there for consumers expecting terminated data; the
/// terminator is not counted by [`len`](Self::len).
///
/// Reservation goes through the same growth policy as
/// [`DynArray`](crate::DynArray), floor included, and allocation failure is
/// fatal on every operation here.
pub struct ByteString {
    len: usize,
    buf: RawBuf<u8, Global>,
}

impl ByteString {
    /// Empty string owning no buffer.
    pub const fn new() -> Self {
        Self { len: 0, buf: RawBuf::dangling_in(Global) }
    }

    /// Copies `bytes` into a freshly allocated, terminated buffer. The
    /// source is not retained.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut string = Self::new();
        infallible(string.fill(&[bytes]));
        string
    }

    /// New string holding `self`'s bytes followed by `other`'s. Neither
    /// input is mutated or consumed.
    pub fn concat(&self, other: &ByteString) -> ByteString {
        let mut string = Self::new();
        infallible(string.fill(&[self.as_bytes(), other.as_bytes()]));
        string
    }

    /// Independent copy: same content, freshly allocated buffer. The copy's
    /// [`capacity`](Self::capacity) reports its own allocation, not the
    /// source's.
    pub fn duplicate(&self) -> ByteString {
        Self::from_bytes(self.as_bytes())
    }

    /// Newly allocated copy of exactly [`len`](Self::len) bytes plus a
    /// terminating `0`, for handing off to terminator-based consumers.
    pub fn to_nul_terminated(&self) -> Box<[u8]> {
        let mut raw = Vec::with_capacity(self.len + 1);
        raw.extend_from_slice(self.as_bytes());
        raw.push(0);
        raw.into_boxed_slice()
    }

    // all producing operations land here: reserve, copy the parts, terminate
    fn fill(&mut self, parts: &[&[u8]]) -> Result<()> {
        debug_assert_eq!(self.len, 0);

        let mut total = 0usize;
        for part in parts {
            total = total.checked_add(part.len()).ok_or(CapacityOverflow)?;
        }
        self.buf.try_reserve(total.checked_add(1).ok_or(CapacityOverflow)?)?;

        let mut dst = self.buf.as_ptr();
        // SAFETY: capacity covers `total + 1` bytes and the parts are
        // disjoint from the fresh buffer
        unsafe {
            for part in parts {
                ptr::copy_nonoverlapping(part.as_ptr(), dst, part.len());
                dst = dst.add(part.len());
            }
            dst.write(0);
        }
        self.len = total;
        Ok(())
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn capacity(&self) -> usize {
        self.buf.cap()
    }

    pub fn as_bytes(&self) -> &[u8] {
        // SAFETY: the first `len` bytes are initialized
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        // SAFETY: the first `len` bytes are initialized and exclusively owned
        unsafe { slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }
}

impl From<&[u8]> for ByteString {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl From<&str> for ByteString {
    fn from(s: &str) -> Self {
        Self::from_bytes(s.as_bytes())
    }
}

impl From<&CStr> for ByteString {
    fn from(s: &CStr) -> Self {
        Self::from_bytes(s.to_bytes())
    }
}

impl Clone for ByteString {
    fn clone(&self) -> Self {
        self.duplicate()
    }
}

impl Default for ByteString {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for ByteString {
    fn eq(&self, other: &Self) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl Eq for ByteString {}

impl PartialEq<&[u8]> for ByteString {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_bytes() == *other
    }
}

impl PartialEq<&str> for ByteString {
    fn eq(&self, other: &&str) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

/// Writes exactly [`len`](Self::len) bytes, lossily decoded — no reliance on
/// the terminator.
impl fmt::Display for ByteString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(self.as_bytes()))
    }
}

impl fmt::Debug for ByteString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteString")
            .field("len", &self.len)
            .field("capacity", &self.buf.cap())
            .field("data", &format_args!("\"{}\"", self.as_bytes().escape_ascii()))
            .finish()
    }
}
