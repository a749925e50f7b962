//! Growable contiguous storage and a binary heap built on it
//!
//! This crate provides two containers:
//!
//! - [`Storage`]: an owned, resizable array with explicit length and capacity.
//!   Capacity doubles on demand, so appending is O(1) amortized.
//! - [`Heap`]: a priority queue that views a `Storage` as a complete binary
//!   tree. With the default ordering the largest element is on top.
//!
//! # Features
//!
//! - Exact, observable capacity management (`reserve`, `resize`, `shrink_to_fit`)
//! - Deep copies via [`Clone`]; moves via [`std::mem::take`] leave an empty source
//! - Pluggable heap ordering through the [`Compare`] trait
//! - Fallible accessors report a [`ContainerError`] instead of panicking
//!
//! # Example
//!
//! ```rust
//! use growable_heap::{storage, ContainerError, Heap};
//!
//! let mut heap = Heap::from(storage![3, 1, 4, 1, 5, 9, 2, 6]);
//! assert_eq!(heap.top(), Ok(&9));
//!
//! let mut drained = Vec::new();
//! while let Some(top) = heap.pop() {
//!     drained.push(top);
//! }
//! assert_eq!(drained, [9, 6, 5, 4, 3, 2, 1, 1]);
//! assert_eq!(heap.top(), Err(ContainerError::Empty));
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod heap;
pub mod storage;
pub mod traits;

// Re-export the main types for convenience
pub use error::{ContainerError, Result};
pub use heap::Heap;
pub use storage::Storage;
pub use traits::{Compare, FnCompare, MaxOrder, MinOrder};
