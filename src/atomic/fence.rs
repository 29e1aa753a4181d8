use super::ordering::FenceOrdering;
use crate::sync;

/// Issues a standalone fence with the given ordering.
///
/// A fence touches no memory cell; it orders this thread's surrounding
/// atomic operations the way [`core::sync::atomic::fence`] describes.
#[inline(always)]
pub fn fence(order: FenceOrdering) {
    sync::fence(order.as_std());
}

/// Sequentially consistent fence.
#[inline(always)]
pub fn thread_fence_seqcst() {
    fence(FenceOrdering::SeqCst);
}

/// Acquire fence.
///
/// Upgrades earlier relaxed loads on this thread: if one of them read a value
/// written by a release operation, everything before that release is visible
/// after the fence.
#[inline(always)]
pub fn thread_fence_acquire() {
    fence(FenceOrdering::Acquire);
}
