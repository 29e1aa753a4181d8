use core::fmt;

use num_traits::{Bounded, Unsigned, WrappingAdd, WrappingSub};

use crate::sync::{AtomicU64, AtomicU8, Ordering};

mod private {
    pub trait Sealed {}
}

/// Unsigned integer widths that can back an [`AtomicCell`](crate::AtomicCell).
///
/// Sealed: implemented for `u8` and `u64` only. Each method forwards to the
/// matching primitive on [`CellValue::Atomic`] with the ordering it is given.
pub trait CellValue:
    private::Sealed
    + Copy
    + Eq
    + fmt::Debug
    + Unsigned
    + Bounded
    + WrappingAdd
    + WrappingSub
    + Send
    + Sync
    + 'static
{
    /// Platform atomic of the same width.
    type Atomic: Send + Sync;

    /// Width in bits.
    const BITS: u32;

    #[doc(hidden)]
    fn atomic_new(value: Self) -> Self::Atomic;
    #[doc(hidden)]
    fn atomic_load(atomic: &Self::Atomic, order: Ordering) -> Self;
    #[doc(hidden)]
    fn atomic_store(atomic: &Self::Atomic, value: Self, order: Ordering);
    #[doc(hidden)]
    fn atomic_compare_exchange(
        atomic: &Self::Atomic,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;
    #[doc(hidden)]
    fn atomic_compare_exchange_weak(
        atomic: &Self::Atomic,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;
    #[doc(hidden)]
    fn atomic_fetch_add(atomic: &Self::Atomic, amount: Self, order: Ordering) -> Self;
    #[doc(hidden)]
    fn atomic_fetch_sub(atomic: &Self::Atomic, amount: Self, order: Ordering) -> Self;
}

macro_rules! impl_cell_value {
    ($value:ty, $atomic:ty) => {
        impl private::Sealed for $value {}

        impl CellValue for $value {
            type Atomic = $atomic;

            const BITS: u32 = <$value>::BITS;

            #[inline(always)]
            fn atomic_new(value: Self) -> Self::Atomic {
                <$atomic>::new(value)
            }

            #[inline(always)]
            fn atomic_load(atomic: &Self::Atomic, order: Ordering) -> Self {
                atomic.load(order)
            }

            #[inline(always)]
            fn atomic_store(atomic: &Self::Atomic, value: Self, order: Ordering) {
                atomic.store(value, order);
            }

            #[inline(always)]
            fn atomic_compare_exchange(
                atomic: &Self::Atomic,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                atomic.compare_exchange(current, new, success, failure)
            }

            #[inline(always)]
            fn atomic_compare_exchange_weak(
                atomic: &Self::Atomic,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                atomic.compare_exchange_weak(current, new, success, failure)
            }

            #[inline(always)]
            fn atomic_fetch_add(atomic: &Self::Atomic, amount: Self, order: Ordering) -> Self {
                atomic.fetch_add(amount, order)
            }

            #[inline(always)]
            fn atomic_fetch_sub(atomic: &Self::Atomic, amount: Self, order: Ordering) -> Self {
                atomic.fetch_sub(amount, order)
            }
        }
    };
}

impl_cell_value!(u8, AtomicU8);
impl_cell_value!(u64, AtomicU64);
