//! Error types for fallible construction.
//!
//! The arithmetic itself never fails; these only cover building value types
//! from untrusted float buffers.

/// Errors that can occur when constructing math types from raw data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// The float slice did not hold exactly the number of components needed.
    #[error("expected {expected} floats, got {actual}")]
    SliceLength {
        /// Component count of the target type.
        expected: usize,
        /// Length of the slice that was supplied.
        actual: usize,
    },
}

/// Checks `data` holds exactly `N` floats and copies them out.
pub(crate) fn array_from_slice<const N: usize>(data: &[f32]) -> Result<[f32; N], MathError> {
    <[f32; N]>::try_from(data).map_err(|_| MathError::SliceLength {
        expected: N,
        actual: data.len(),
    })
}
