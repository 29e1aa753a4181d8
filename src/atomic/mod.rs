//! Fixed-width atomic cells.
//!
//! [`AtomicCell`] is generic over its width and takes an explicit ordering on
//! every operation. [`AtomicU64Cell`] and [`AtomicU8Cell`] add the named,
//! fixed-ordering operations the consuming runtime calls directly.
//!
//! Weak and strong compare-and-swap are separate methods and neither is ever
//! substituted for the other.

/// Generic cell.
pub mod cell;
/// Standalone fences.
pub mod fence;
/// Ordering enums.
pub mod ordering;
/// Raw-pointer views over host memory.
#[cfg(not(loom))]
pub mod ptr;
/// 64-bit cell.
pub mod u64;
/// 8-bit cell.
pub mod u8;
/// Supported widths.
pub mod value;

pub use cell::AtomicCell;
pub use fence::{fence, thread_fence_acquire, thread_fence_seqcst};
pub use ordering::{CasOrdering, FenceOrdering, LoadOrdering, StoreOrdering};
pub use u64::AtomicU64Cell;
pub use u8::AtomicU8Cell;
pub use value::CellValue;
