//! Fixed-ordering operations on the 64-bit cell.
//!
//! Counters, sequence numbers, epochs, tagged indices. The compare-and-swap
//! variants here are all *weak*: callers retry on `false`.

use super::cell::AtomicCell;
use super::fence;
use super::ordering::{CasOrdering, LoadOrdering, StoreOrdering};
use crate::sync::AtomicU64;

/// A 64-bit atomic cell.
pub type AtomicU64Cell = AtomicCell<u64>;

impl AtomicCell<u64> {
    /// Creates a new cell.
    #[cfg(not(loom))]
    #[inline(always)]
    pub const fn new(value: u64) -> Self {
        Self {
            inner: AtomicU64::new(value),
        }
    }

    /// Creates a new cell.
    #[cfg(loom)]
    pub fn new(value: u64) -> Self {
        Self {
            inner: AtomicU64::new(value),
        }
    }

    /// Writes `value` with no ordering constraint.
    #[inline(always)]
    pub fn store_relaxed(&self, value: u64) {
        self.store(value, StoreOrdering::Relaxed);
    }

    /// Reads the value with no ordering constraint.
    #[inline(always)]
    pub fn load_relaxed(&self) -> u64 {
        self.load(LoadOrdering::Relaxed)
    }

    /// Reads the value with acquire ordering.
    #[inline(always)]
    pub fn load_acquire(&self) -> u64 {
        self.load(LoadOrdering::Acquire)
    }

    /// Reads the value with sequentially consistent ordering.
    #[inline(always)]
    pub fn load_seqcst(&self) -> u64 {
        self.load(LoadOrdering::SeqCst)
    }

    /// Weak CAS, relaxed in both outcomes.
    #[inline(always)]
    pub fn cmpxchg_relaxed(&self, expected: &mut u64, new: u64) -> bool {
        self.cmpxchg_weak(expected, new, CasOrdering::Relaxed)
    }

    /// Weak CAS, acquire-release on success and acquire on failure.
    #[inline(always)]
    pub fn cmpxchg_acqrel(&self, expected: &mut u64, new: u64) -> bool {
        self.cmpxchg_weak(expected, new, CasOrdering::AcqRel)
    }

    /// Weak CAS, sequentially consistent on success and relaxed on failure.
    #[inline(always)]
    pub fn cmpxchg_seqcst(&self, expected: &mut u64, new: u64) -> bool {
        self.cmpxchg_weak(expected, new, CasOrdering::SeqCst)
    }

    /// See [`fence::thread_fence_seqcst`].
    #[inline(always)]
    pub fn thread_fence_seqcst() {
        fence::thread_fence_seqcst();
    }

    /// See [`fence::thread_fence_acquire`].
    #[inline(always)]
    pub fn thread_fence_acquire() {
        fence::thread_fence_acquire();
    }
}
