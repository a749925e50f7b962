//! Ordering strategies for heaps
//!
//! A [`Heap`](crate::heap::Heap) only ever asks one question of its elements:
//! "does `a` rank strictly below `b`?". The [`Compare`] trait captures that
//! question so the same heap code can serve as a max-heap, a min-heap, or a
//! heap ordered by an arbitrary key.
//!
//! - [`MaxOrder`]: natural [`Ord`] order, largest element on top (the default)
//! - [`MinOrder`]: reversed [`Ord`] order, smallest element on top
//! - [`FnCompare`]: wraps a closure `Fn(&T, &T) -> bool`
//!
//! # Example
//!
//! ```rust
//! use growable_heap::heap::Heap;
//! use growable_heap::traits::{FnCompare, MinOrder};
//!
//! let mut min_heap = Heap::with_compare(MinOrder);
//! min_heap.extend([3, 1, 2]);
//! assert_eq!(min_heap.top(), Ok(&1));
//!
//! // Order strings by length
//! let mut by_len = Heap::with_compare(FnCompare(|a: &String, b: &String| a.len() < b.len()));
//! by_len.extend(["ab", "abcd", "a"].map(String::from));
//! assert_eq!(by_len.top().map(String::as_str), Ok("abcd"));
//! ```

/// A strict "ranks below" relation used to order heap elements.
///
/// Implementations must describe a strict weak order: irreflexive
/// (`less(a, a)` is false) and transitive. A heap keeps the element for which
/// no other element compares greater at its root.
pub trait Compare<T: ?Sized> {
    /// Returns true if `a` has strictly lower priority than `b`.
    fn less(&self, a: &T, b: &T) -> bool;
}

/// Natural ordering: the greatest element by [`Ord`] has the highest priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Reversed ordering: the smallest element by [`Ord`] has the highest priority.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        b < a
    }
}

/// Adapts a closure `Fn(&T, &T) -> bool` into a [`Compare`].
///
/// The closure must return true exactly when its first argument ranks below
/// its second.
#[derive(Clone, Copy)]
pub struct FnCompare<F>(pub F);

impl<F> std::fmt::Debug for FnCompare<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("FnCompare").finish_non_exhaustive()
    }
}

impl<T: ?Sized, F> Compare<T> for FnCompare<F>
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (self.0)(a, b)
    }
}

impl<T: ?Sized, C: Compare<T> + ?Sized> Compare<T> for &C {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        (**self).less(a, b)
    }
}
