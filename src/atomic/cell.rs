use core::fmt;

use super::ordering::{CasOrdering, LoadOrdering, StoreOrdering};
use super::value::CellValue;
use crate::sync::Ordering;

/// A fixed-width atomic cell with caller-selected ordering.
///
/// The cell is `repr(transparent)` over the platform atomic for `T`, so it is
/// embedded by value in whatever structure owns it and never allocates. Any
/// thread holding a shared reference may operate on it.
///
/// Use the width aliases [`AtomicU64Cell`](crate::AtomicU64Cell) and
/// [`AtomicU8Cell`](crate::AtomicU8Cell); they also carry the fixed-ordering
/// named operations.
#[repr(transparent)]
pub struct AtomicCell<T: CellValue> {
    pub(crate) inner: T::Atomic,
}

impl<T: CellValue> AtomicCell<T> {
    /// Creates a cell holding `value`.
    ///
    /// Prefer the `const fn new` of the concrete width where a constant
    /// initializer is needed.
    #[inline(always)]
    pub fn with_value(value: T) -> Self {
        Self {
            inner: T::atomic_new(value),
        }
    }

    /// Reads the current value.
    #[inline(always)]
    pub fn load(&self, order: LoadOrdering) -> T {
        T::atomic_load(&self.inner, order.as_std())
    }

    /// Writes `value`.
    #[inline(always)]
    pub fn store(&self, value: T, order: StoreOrdering) {
        T::atomic_store(&self.inner, value, order.as_std());
    }

    /// Weak compare-and-swap.
    ///
    /// Replaces the value with `new` if it equals `current`. Returns
    /// `Ok(previous)` on success and `Err(actual)` on failure. May fail
    /// spuriously even when the values match, so callers loop.
    #[inline(always)]
    pub fn compare_exchange_weak(&self, current: T, new: T, order: CasOrdering) -> Result<T, T> {
        T::atomic_compare_exchange_weak(
            &self.inner,
            current,
            new,
            order.success(),
            order.failure(),
        )
    }

    /// Strong compare-and-swap.
    ///
    /// Like [`compare_exchange_weak`](Self::compare_exchange_weak) but only
    /// fails when the value actually differs from `current`.
    #[inline(always)]
    pub fn compare_exchange(&self, current: T, new: T, order: CasOrdering) -> Result<T, T> {
        T::atomic_compare_exchange(&self.inner, current, new, order.success(), order.failure())
    }

    /// Weak compare-and-swap in in/out form.
    ///
    /// Returns `true` if the exchange happened. On `false` the observed value
    /// is written to `expected`, ready for the next attempt.
    #[inline(always)]
    pub fn cmpxchg_weak(&self, expected: &mut T, new: T, order: CasOrdering) -> bool {
        match self.compare_exchange_weak(*expected, new, order) {
            Ok(_) => true,
            Err(actual) => {
                *expected = actual;
                false
            }
        }
    }

    /// Strong compare-and-swap in in/out form.
    ///
    /// Never fails spuriously: `false` means `expected` was stale, and it now
    /// holds the value that was observed.
    #[inline(always)]
    pub fn cmpxchg_strong(&self, expected: &mut T, new: T, order: CasOrdering) -> bool {
        match self.compare_exchange(*expected, new, order) {
            Ok(_) => true,
            Err(actual) => {
                *expected = actual;
                false
            }
        }
    }

    /// Adds `amount` with wraparound, returning the previous value.
    ///
    /// Always sequentially consistent.
    #[inline(always)]
    pub fn fetch_add(&self, amount: T) -> T {
        T::atomic_fetch_add(&self.inner, amount, Ordering::SeqCst)
    }

    /// Subtracts `amount` with wraparound, returning the previous value.
    ///
    /// Always sequentially consistent.
    #[inline(always)]
    pub fn fetch_sub(&self, amount: T) -> T {
        T::atomic_fetch_sub(&self.inner, amount, Ordering::SeqCst)
    }
}

impl<T: CellValue> Default for AtomicCell<T> {
    fn default() -> Self {
        Self::with_value(<T as num_traits::Zero>::zero())
    }
}

impl<T: CellValue> From<T> for AtomicCell<T> {
    fn from(value: T) -> Self {
        Self::with_value(value)
    }
}

impl<T: CellValue> fmt::Debug for AtomicCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AtomicCell")
            .field(&self.load(LoadOrdering::Relaxed))
            .finish()
    }
}

#[cfg(all(test, not(loom)))]
mod tests {
    use super::*;
    use crate::{AtomicU64Cell, AtomicU8Cell};

    #[test]
    fn in_out_cas_rewrites_expected_on_mismatch() {
        let cell = AtomicU64Cell::new(10);
        let mut expected = 3;
        assert!(!cell.cmpxchg_strong(&mut expected, 4, CasOrdering::SeqCst));
        assert_eq!(expected, 10);
        assert!(cell.cmpxchg_strong(&mut expected, 4, CasOrdering::SeqCst));
        assert_eq!(expected, 10, "success leaves expected untouched");
        assert_eq!(cell.load(LoadOrdering::Relaxed), 4);
    }

    #[test]
    fn result_form_reports_previous_and_actual() {
        let cell = AtomicU8Cell::new(1);
        assert_eq!(cell.compare_exchange(1, 2, CasOrdering::Acquire), Ok(1));
        assert_eq!(cell.compare_exchange(1, 3, CasOrdering::Acquire), Err(2));
    }

    #[test]
    fn default_is_zero_and_debug_shows_value() {
        let cell: AtomicCell<u64> = AtomicCell::default();
        assert_eq!(cell.load(LoadOrdering::SeqCst), 0);
        cell.store(77, StoreOrdering::Release);
        assert_eq!(format!("{cell:?}"), "AtomicCell(77)");
        assert_eq!(AtomicCell::from(9u8).load(LoadOrdering::Acquire), 9);
    }
}
