//! Ordering vocabulary for cell operations.
//!
//! Each operation class gets its own enum listing only the orderings that are
//! legal for it, so an invalid request (a `Release` load, an `Acquire` store)
//! cannot be expressed. Every variant maps to exactly one
//! [`core::sync::atomic::Ordering`] (or one success/failure pair for CAS);
//! nothing is strengthened or weakened on the way down.

use crate::sync::Ordering;

/// Ordering for [`AtomicCell::load`](crate::AtomicCell::load).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum LoadOrdering {
    /// Atomicity only.
    Relaxed,
    /// Synchronizes with a release store (or release-class CAS) whose value
    /// this load observes.
    Acquire,
    /// Acquire, and participates in the single total order of all `SeqCst`
    /// operations.
    SeqCst,
}

impl LoadOrdering {
    /// The platform ordering this variant forwards to.
    #[inline(always)]
    pub const fn as_std(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Acquire => Ordering::Acquire,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

/// Ordering for [`AtomicCell::store`](crate::AtomicCell::store).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum StoreOrdering {
    /// Atomicity only.
    Relaxed,
    /// Publishes every prior write of this thread to any thread whose acquire
    /// load observes the stored value.
    Release,
}

impl StoreOrdering {
    /// The platform ordering this variant forwards to.
    #[inline(always)]
    pub const fn as_std(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Release => Ordering::Release,
        }
    }
}

/// Success/failure ordering pair for compare-and-swap.
///
/// | variant   | success  | failure  |
/// |-----------|----------|----------|
/// | `Relaxed` | Relaxed  | Relaxed  |
/// | `Acquire` | Acquire  | Relaxed  |
/// | `AcqRel`  | AcqRel   | Acquire  |
/// | `SeqCst`  | SeqCst   | Relaxed  |
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CasOrdering {
    /// No ordering in either outcome.
    Relaxed,
    /// Acquire on success, relaxed on failure.
    Acquire,
    /// Acquire-release on success, acquire on failure.
    AcqRel,
    /// Sequentially consistent on success, relaxed on failure.
    SeqCst,
}

impl CasOrdering {
    /// Ordering applied when the exchange happens.
    #[inline(always)]
    pub const fn success(self) -> Ordering {
        match self {
            Self::Relaxed => Ordering::Relaxed,
            Self::Acquire => Ordering::Acquire,
            Self::AcqRel => Ordering::AcqRel,
            Self::SeqCst => Ordering::SeqCst,
        }
    }

    /// Ordering applied to the load when the comparison fails.
    #[inline(always)]
    pub const fn failure(self) -> Ordering {
        match self {
            Self::Relaxed | Self::Acquire | Self::SeqCst => Ordering::Relaxed,
            Self::AcqRel => Ordering::Acquire,
        }
    }
}

/// Ordering for a standalone fence.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum FenceOrdering {
    /// Acquire fence.
    Acquire,
    /// Sequentially consistent fence.
    SeqCst,
}

impl FenceOrdering {
    /// The platform ordering this variant forwards to.
    #[inline(always)]
    pub const fn as_std(self) -> Ordering {
        match self {
            Self::Acquire => Ordering::Acquire,
            Self::SeqCst => Ordering::SeqCst,
        }
    }
}

impl From<LoadOrdering> for Ordering {
    #[inline(always)]
    fn from(order: LoadOrdering) -> Self {
        order.as_std()
    }
}

impl From<StoreOrdering> for Ordering {
    #[inline(always)]
    fn from(order: StoreOrdering) -> Self {
        order.as_std()
    }
}

impl From<FenceOrdering> for Ordering {
    #[inline(always)]
    fn from(order: FenceOrdering) -> Self {
        order.as_std()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cas_pairs_match_the_table() {
        let pairs = [
            (CasOrdering::Relaxed, Ordering::Relaxed, Ordering::Relaxed),
            (CasOrdering::Acquire, Ordering::Acquire, Ordering::Relaxed),
            (CasOrdering::AcqRel, Ordering::AcqRel, Ordering::Acquire),
            (CasOrdering::SeqCst, Ordering::SeqCst, Ordering::Relaxed),
        ];
        for (order, success, failure) in pairs {
            assert_eq!(order.success(), success, "{order:?} success");
            assert_eq!(order.failure(), failure, "{order:?} failure");
        }
    }

    #[test]
    fn failure_ordering_never_exceeds_success() {
        // The platform rejects failure orderings stronger than success.
        for order in [
            CasOrdering::Relaxed,
            CasOrdering::Acquire,
            CasOrdering::AcqRel,
            CasOrdering::SeqCst,
        ] {
            assert_ne!(order.failure(), Ordering::Release);
            assert_ne!(order.failure(), Ordering::AcqRel);
            if order.success() == Ordering::Relaxed {
                assert_eq!(order.failure(), Ordering::Relaxed);
            }
        }
    }

    #[test]
    fn single_orderings_forward_unchanged() {
        assert_eq!(Ordering::from(LoadOrdering::Relaxed), Ordering::Relaxed);
        assert_eq!(Ordering::from(LoadOrdering::Acquire), Ordering::Acquire);
        assert_eq!(Ordering::from(LoadOrdering::SeqCst), Ordering::SeqCst);
        assert_eq!(Ordering::from(StoreOrdering::Relaxed), Ordering::Relaxed);
        assert_eq!(Ordering::from(StoreOrdering::Release), Ordering::Release);
        assert_eq!(Ordering::from(FenceOrdering::Acquire), Ordering::Acquire);
        assert_eq!(Ordering::from(FenceOrdering::SeqCst), Ordering::SeqCst);
    }
}
