//! Error types for container operations
//!
//! Every fallible read in this crate reports a [`ContainerError`]. Writes never
//! fail: growth is infallible from the caller's point of view, and running out of
//! memory aborts the process the same way the standard collections do.

use thiserror::Error;

/// Result type alias using [`ContainerError`].
pub type Result<T> = std::result::Result<T, ContainerError>;

/// Errors returned by [`Storage`](crate::storage::Storage) and
/// [`Heap`](crate::heap::Heap) accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContainerError {
    /// The container holds no elements, so there is nothing to look at.
    #[error("container is empty")]
    Empty,

    /// An index was at or past the number of live elements.
    #[error("index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: usize,
        /// The number of live elements at the time of the request.
        len: usize,
    },
}
