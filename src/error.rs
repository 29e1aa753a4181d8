//! Errors for the checked pointer views.
//!
//! The atomic operations themselves are total. A failed compare-and-swap is
//! an ordinary return value, not an error.

use thiserror::Error;

/// Why a raw pointer cannot be viewed as an atomic cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CellPtrError {
    /// The pointer was null.
    #[error("cell pointer is null")]
    Null,
    /// The pointer is not aligned to the cell's natural alignment.
    #[error("cell pointer {addr:#x} is not aligned to {align} bytes")]
    Misaligned {
        /// Address that was passed in.
        addr: usize,
        /// Required alignment in bytes.
        align: usize,
    },
}
