//! # `atomic_cells` - Ordered Atomic Cells
//!
//! Fixed-width atomic memory cells (64-bit and 8-bit) whose every operation
//! carries an explicit memory ordering chosen by the caller. The crate is a
//! leaf primitive layer: higher-level concurrent runtimes (work-stealing
//! schedulers, lock-free queues, epoch counters) are built on top of it,
//! including runtimes in other languages that reach it through the C ABI in
//! [`ffi`].
//!
//! ## Guarantees
//!
//! - **Exact orderings**: each ordering the caller names is forwarded to the
//!   platform unchanged. Nothing is silently strengthened or weakened.
//! - **Weak vs. strong CAS**: the weak variants may fail spuriously and are
//!   meant for retry loops; the strong variant never does. They are never
//!   swapped for one another.
//! - **No allocation, no blocking**: every operation is one hardware
//!   primitive. There is no internal retry, backoff or lock.
//! - **Total operations**: nothing panics or errors. A failed
//!   compare-and-swap is a normal `false` with the observed value written
//!   back to `expected`.
//!
//! ## Layout
//!
//! Cells are `repr(transparent)` over the platform atomic of their width and
//! have no other state. They live by value inside the consumer's structures.
//!
//! ## Example
//!
//! ```rust
//! use atomic_cells::{AtomicU64Cell, AtomicU8Cell};
//!
//! static READY: AtomicU8Cell = AtomicU8Cell::new(0);
//! static TICKETS: AtomicU64Cell = AtomicU64Cell::new(0);
//!
//! assert_eq!(TICKETS.fetch_add(1), 0);
//!
//! let mut expected = 0;
//! assert!(READY.cmpxchg_strong_acquire(&mut expected, 1));
//! assert_eq!(READY.load_acquire(), 1);
//!
//! let mut seen = TICKETS.load_relaxed();
//! loop {
//!     let next = seen + 10;
//!     if TICKETS.cmpxchg_acqrel(&mut seen, next) {
//!         break;
//!     }
//! }
//! assert_eq!(TICKETS.load_seqcst(), 11);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod atomic;
pub mod error;
#[cfg(not(loom))]
pub mod ffi;
mod sync;

pub use atomic::{
    fence, thread_fence_acquire, thread_fence_seqcst, AtomicCell, AtomicU64Cell, AtomicU8Cell,
    CasOrdering, CellValue, FenceOrdering, LoadOrdering, StoreOrdering,
};
pub use error::CellPtrError;

// Compile-time assertions for the C ABI layout.
#[cfg(not(loom))]
const _: () = {
    use core::mem;
    use core::sync::atomic::{AtomicU64, AtomicU8};

    // Transparent over the platform atomic.
    assert!(mem::size_of::<AtomicU64Cell>() == mem::size_of::<AtomicU64>());
    assert!(mem::align_of::<AtomicU64Cell>() == mem::align_of::<AtomicU64>());
    assert!(mem::size_of::<AtomicU8Cell>() == mem::size_of::<AtomicU8>());
    assert!(mem::align_of::<AtomicU8Cell>() == mem::align_of::<AtomicU8>());

    // Same size as the integers the host owns, naturally aligned.
    assert!(mem::size_of::<AtomicU64Cell>() == mem::size_of::<u64>());
    assert!(mem::align_of::<AtomicU64Cell>() == 8);
    assert!(mem::size_of::<AtomicU8Cell>() == 1);
    assert!(mem::align_of::<AtomicU8Cell>() == 1);
};
