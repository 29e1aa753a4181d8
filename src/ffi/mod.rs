//! C ABI for runtimes that cannot express memory ordering themselves.
//!
//! Every function is a thin `extern "C"` forwarder to one cell operation with
//! its ordering fixed. The matching declarations are in
//! `include/atomic_cells.h`.
//!
//! # Safety
//!
//! All cell pointers must be non-null, naturally aligned for their width,
//! valid for the duration of the call, and only accessed atomically while
//! any thread may still use them. Violations are undefined behaviour; debug
//! builds assert on null and misalignment, release builds check nothing.

mod u64;
mod u8;

pub use self::u64::*;
pub use self::u8::*;

use crate::atomic::fence;

/// Sequentially consistent fence.
#[no_mangle]
pub extern "C" fn acell_thread_fence_seqcst() {
    fence::thread_fence_seqcst();
}

/// Acquire fence.
#[no_mangle]
pub extern "C" fn acell_thread_fence_acquire() {
    fence::thread_fence_acquire();
}
