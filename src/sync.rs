//! Atomic backend.
//!
//! Normal builds forward to `core::sync::atomic`. Building with
//! `RUSTFLAGS="--cfg loom"` swaps in loom's model-checked atomics so the
//! same cell code can be explored exhaustively by `tests/loom_models.rs`.

#[cfg(not(loom))]
pub(crate) use core::sync::atomic::{fence, AtomicU64, AtomicU8};

#[cfg(loom)]
pub(crate) use loom::sync::atomic::{fence, AtomicU64, AtomicU8};

// loom re-exports the std enum, so one `Ordering` serves both backends.
pub(crate) use core::sync::atomic::Ordering;
