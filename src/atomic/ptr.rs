//! Views over memory owned by the host runtime.
//!
//! The consuming runtime allocates the integers and hands this layer raw
//! pointers. These constructors reinterpret such a pointer as a cell without
//! copying. The platform atomics share their integer's size, and their
//! alignment is checked against the cell's.

use core::mem;

use super::cell::AtomicCell;
use super::value::CellValue;
use crate::error::CellPtrError;

impl<T: CellValue> AtomicCell<T> {
    /// Views `ptr` as a cell.
    ///
    /// # Safety
    ///
    /// * `ptr` must be non-null and aligned to `align_of::<AtomicCell<T>>()`
    ///   (for 64-bit cells this can be stricter than `align_of::<u64>()`).
    /// * The pointee must stay valid and must not move for `'a`.
    /// * For `'a`, the pointee must only be accessed through atomic operations.
    #[inline(always)]
    pub unsafe fn from_ptr<'a>(ptr: *mut T) -> &'a Self {
        debug_assert!(!ptr.is_null());
        debug_assert_eq!(ptr as usize % mem::align_of::<Self>(), 0);
        // SAFETY: `Self` is `repr(transparent)` over `T::Atomic`, which has the
        // size of `T`; alignment and validity are the caller's contract.
        unsafe { &*ptr.cast::<Self>() }
    }

    /// Views `ptr` as a cell after checking it is non-null and aligned.
    ///
    /// # Errors
    ///
    /// [`CellPtrError::Null`] for a null pointer and
    /// [`CellPtrError::Misaligned`] when `ptr` is not a multiple of the cell's
    /// alignment.
    ///
    /// # Safety
    ///
    /// The validity and access requirements of [`from_ptr`](Self::from_ptr)
    /// other than null and alignment still apply.
    pub unsafe fn try_from_ptr<'a>(ptr: *mut T) -> Result<&'a Self, CellPtrError> {
        if ptr.is_null() {
            #[cfg(feature = "tracing")]
            tracing::debug!(bits = T::BITS, "rejected null cell pointer");
            return Err(CellPtrError::Null);
        }
        let addr = ptr as usize;
        let align = mem::align_of::<Self>();
        if addr % align != 0 {
            #[cfg(feature = "tracing")]
            tracing::debug!(bits = T::BITS, addr, align, "rejected misaligned cell pointer");
            return Err(CellPtrError::Misaligned { addr, align });
        }
        // SAFETY: null and alignment were checked above; the rest is the
        // caller's contract.
        Ok(unsafe { Self::from_ptr(ptr) })
    }

    /// Returns a pointer to the underlying integer.
    ///
    /// Reads and writes through it race with the cell's atomic operations
    /// unless they are themselves atomic.
    #[inline(always)]
    pub fn as_ptr(&self) -> *mut T {
        (self as *const Self).cast_mut().cast::<T>()
    }
}
