//! Error types.

use thiserror::Error;

/// Error returned when converting a slice into a [`Vector`][crate::Vector] or
/// [`Matrix`][crate::Matrix] whose element count differs from the slice length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} elements, got {actual}")]
pub struct DimensionMismatch {
    /// Number of elements the target container holds.
    pub expected: usize,
    /// Length of the slice that was passed in.
    pub actual: usize,
}
