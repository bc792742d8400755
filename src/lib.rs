//! Growable arrays and length-tracked byte strings for low-level code.
//!
//! Two primitives share one growth policy: [`DynArray`] gives any element
//! type amortized-cheap appends through geometric reallocation over a
//! [`MIN_CAPACITY`] floor, and [`ByteString`] assembles owned byte strings
//! whose producing operations always return freshly allocated, terminated
//! buffers. Allocation failure is fatal on the plain methods; the `try_`
//! twins surface it as [`Error`].

// special lint
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
// rust compiler lints
#![deny(unused_must_use)]
#![warn(missing_debug_implementations)]

mod alloc;
mod array;
mod raw_buf;
mod string;

pub use {
    alloc::{Error, Result},
    array::DynArray,
    raw_buf::MIN_CAPACITY,
    string::ByteString,
};

fn _assertion() {
    fn assert_sync_send<T: Sync + Send>() {}

    assert_sync_send::<DynArray<()>>();
    assert_sync_send::<ByteString>();
}

#[test]
fn smoke() {
    let mut arr = DynArray::new();
    for i in 0..MIN_CAPACITY * 2 + 1 {
        arr.push(i);
    }
    assert_eq!(arr.len(), MIN_CAPACITY * 2 + 1);
    assert_eq!(arr.capacity(), MIN_CAPACITY * 4);
    assert!(arr.iter().copied().eq(0..MIN_CAPACITY * 2 + 1));

    let hello = ByteString::from("hello");
    let world = ByteString::from(" world");
    assert_eq!(hello.concat(&world), "hello world");
}
