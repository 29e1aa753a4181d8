//! Fixed-ordering operations on the 8-bit cell, used for flags and small
//! state tags.

use super::cell::AtomicCell;
use super::ordering::{CasOrdering, LoadOrdering, StoreOrdering};
use crate::sync::AtomicU8;

/// An 8-bit atomic cell.
pub type AtomicU8Cell = AtomicCell<u8>;

impl AtomicCell<u8> {
    /// Creates a new cell.
    #[cfg(not(loom))]
    #[inline(always)]
    pub const fn new(value: u8) -> Self {
        Self {
            inner: AtomicU8::new(value),
        }
    }

    /// Creates a new cell.
    #[cfg(loom)]
    pub fn new(value: u8) -> Self {
        Self {
            inner: AtomicU8::new(value),
        }
    }

    /// Reads the value with no ordering constraint.
    #[inline(always)]
    pub fn load_relaxed(&self) -> u8 {
        self.load(LoadOrdering::Relaxed)
    }

    /// Reads the value with acquire ordering.
    #[inline(always)]
    pub fn load_acquire(&self) -> u8 {
        self.load(LoadOrdering::Acquire)
    }

    /// Writes `value` with no ordering constraint.
    #[inline(always)]
    pub fn store_relaxed(&self, value: u8) {
        self.store(value, StoreOrdering::Relaxed);
    }

    /// Writes `value` with release ordering.
    #[inline(always)]
    pub fn store_release(&self, value: u8) {
        self.store(value, StoreOrdering::Release);
    }

    /// Strong CAS, acquire on success and relaxed on failure.
    ///
    /// Returns `false` only if the cell did not hold `*expected`; the observed
    /// value is then written back to `expected`.
    #[inline(always)]
    pub fn cmpxchg_strong_acquire(&self, expected: &mut u8, new: u8) -> bool {
        self.cmpxchg_strong(expected, new, CasOrdering::Acquire)
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::*;

    #[test]
    fn strong_cas_succeeds_first_try() {
        let flag = AtomicU8Cell::new(0);
        for round in 0..=u8::MAX {
            let mut expected = round;
            assert!(flag.cmpxchg_strong_acquire(&mut expected, round.wrapping_add(1)));
        }
        assert_eq!(flag.load_relaxed(), 0);
    }

    #[test]
    fn release_then_acquire_on_one_thread() {
        let flag = AtomicU8Cell::new(0);
        flag.store_release(3);
        assert_eq!(flag.load_acquire(), 3);
        flag.store_relaxed(255);
        assert_eq!(flag.load_relaxed(), 255);
    }
}
