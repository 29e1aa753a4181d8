use crate::atomic::AtomicU64Cell;

#[inline(always)]
unsafe fn cell<'a>(ptr: *const AtomicU64Cell) -> &'a AtomicU64Cell {
    debug_assert!(!ptr.is_null(), "null u64 cell");
    debug_assert!(ptr.is_aligned(), "misaligned u64 cell");
    // SAFETY: forwarded from the caller of the exported function.
    unsafe { &*ptr }
}

/// Relaxed store.
///
/// # Safety
///
/// See the [module docs](crate::ffi).
#[no_mangle]
pub unsafe extern "C" fn acell_u64_store_relaxed(obj: *const AtomicU64Cell, value: u64) {
    unsafe { cell(obj) }.store_relaxed(value);
}

/// Relaxed load.
///
/// # Safety
///
/// See the [module docs](crate::ffi).
#[no_mangle]
pub unsafe extern "C" fn acell_u64_load_relaxed(obj: *const AtomicU64Cell) -> u64 {
    unsafe { cell(obj) }.load_relaxed()
}

/// Acquire load.
///
/// # Safety
///
/// See the [module docs](crate::ffi).
#[no_mangle]
pub unsafe extern "C" fn acell_u64_load_acquire(obj: *const AtomicU64Cell) -> u64 {
    unsafe { cell(obj) }.load_acquire()
}

/// Sequentially consistent load.
///
/// # Safety
///
/// See the [module docs](crate::ffi).
#[no_mangle]
pub unsafe extern "C" fn acell_u64_load_seqcst(obj: *const AtomicU64Cell) -> u64 {
    unsafe { cell(obj) }.load_seqcst()
}

/// Weak CAS, relaxed. On failure `*expected` receives the observed value.
///
/// # Safety
///
/// See the [module docs](crate::ffi); `expected` must be valid for reads and
/// writes.
#[no_mangle]
pub unsafe extern "C" fn acell_u64_cmpxchg_relaxed(
    obj: *const AtomicU64Cell,
    expected: *mut u64,
    new: u64,
) -> bool {
    debug_assert!(!expected.is_null());
    unsafe { cell(obj).cmpxchg_relaxed(&mut *expected, new) }
}

/// Weak CAS, acquire-release on success and acquire on failure.
///
/// # Safety
///
/// See the [module docs](crate::ffi); `expected` must be valid for reads and
/// writes.
#[no_mangle]
pub unsafe extern "C" fn acell_u64_cmpxchg_acqrel(
    obj: *const AtomicU64Cell,
    expected: *mut u64,
    new: u64,
) -> bool {
    debug_assert!(!expected.is_null());
    unsafe { cell(obj).cmpxchg_acqrel(&mut *expected, new) }
}

/// Weak CAS, sequentially consistent on success and relaxed on failure.
///
/// # Safety
///
/// See the [module docs](crate::ffi); `expected` must be valid for reads and
/// writes.
#[no_mangle]
pub unsafe extern "C" fn acell_u64_cmpxchg_seqcst(
    obj: *const AtomicU64Cell,
    expected: *mut u64,
    new: u64,
) -> bool {
    debug_assert!(!expected.is_null());
    unsafe { cell(obj).cmpxchg_seqcst(&mut *expected, new) }
}

/// Wrapping add, returns the previous value. Sequentially consistent.
///
/// # Safety
///
/// See the [module docs](crate::ffi).
#[no_mangle]
pub unsafe extern "C" fn acell_u64_fetch_add(obj: *const AtomicU64Cell, amount: u64) -> u64 {
    unsafe { cell(obj) }.fetch_add(amount)
}

/// Wrapping subtract, returns the previous value. Sequentially consistent.
///
/// # Safety
///
/// See the [module docs](crate::ffi).
#[no_mangle]
pub unsafe extern "C" fn acell_u64_fetch_sub(obj: *const AtomicU64Cell, amount: u64) -> u64 {
    unsafe { cell(obj) }.fetch_sub(amount)
}
