use crate::atomic::AtomicU8Cell;

#[inline(always)]
unsafe fn cell<'a>(ptr: *const AtomicU8Cell) -> &'a AtomicU8Cell {
    debug_assert!(!ptr.is_null(), "null u8 cell");
    // SAFETY: forwarded from the caller of the exported function.
    unsafe { &*ptr }
}

/// Relaxed load.
///
/// # Safety
///
/// See the [module docs](crate::ffi).
#[no_mangle]
pub unsafe extern "C" fn acell_u8_load_relaxed(obj: *const AtomicU8Cell) -> u8 {
    unsafe { cell(obj) }.load_relaxed()
}

/// Acquire load.
///
/// # Safety
///
/// See the [module docs](crate::ffi).
#[no_mangle]
pub unsafe extern "C" fn acell_u8_load_acquire(obj: *const AtomicU8Cell) -> u8 {
    unsafe { cell(obj) }.load_acquire()
}

/// Relaxed store.
///
/// # Safety
///
/// See the [module docs](crate::ffi).
#[no_mangle]
pub unsafe extern "C" fn acell_u8_store_relaxed(obj: *const AtomicU8Cell, value: u8) {
    unsafe { cell(obj) }.store_relaxed(value);
}

/// Release store.
///
/// # Safety
///
/// See the [module docs](crate::ffi).
#[no_mangle]
pub unsafe extern "C" fn acell_u8_store_release(obj: *const AtomicU8Cell, value: u8) {
    unsafe { cell(obj) }.store_release(value);
}

/// Strong CAS, acquire on success and relaxed on failure. Never fails
/// spuriously; on failure `*expected` receives the observed value.
///
/// # Safety
///
/// See the [module docs](crate::ffi); `expected` must be valid for reads and
/// writes.
#[no_mangle]
pub unsafe extern "C" fn acell_u8_cmpxchg_strong_acquire(
    obj: *const AtomicU8Cell,
    expected: *mut u8,
    new: u8,
) -> bool {
    debug_assert!(!expected.is_null());
    unsafe { cell(obj).cmpxchg_strong_acquire(&mut *expected, new) }
}
