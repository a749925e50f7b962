//! Binary max-heap priority queue
//!
//! [`Heap`] interprets a [`Storage`] as a complete binary tree and keeps the
//! highest-priority element at the root. Positions in the tree are 1-based
//! *tree indices*: the root is tree index 1 and the children of tree index
//! `i` are `2i` and `2i + 1`. Tree index `i` lives at storage offset `i - 1`.
//!
//! Both insertion and extraction are repaired by a single primitive,
//! `fix_subtree`, which pushes an out-of-place node down towards the leaves:
//!
//! - `push` appends the new element as the last leaf, then applies
//!   `fix_subtree` to each ancestor of that leaf, from its parent up to the
//!   root, stopping at the first ancestor that needed no change.
//! - `pop` swaps the root with the last leaf, removes the last slot, and
//!   applies `fix_subtree` once at the root.
//!
//! # Time Complexity
//!
//! | Operation             | Complexity      |
//! |-----------------------|-----------------|
//! | `push`                | O(log n)        |
//! | `pop`                 | O(log n)        |
//! | `top`                 | O(1)            |
//! | `from_iter` / `extend`| O(n log n)      |
//! | `From<Storage<T>>`    | O(n)            |
//! | `merge`               | O(m log(n + m)) |
//!
//! # Example
//!
//! ```rust
//! use growable_heap::heap::Heap;
//!
//! let mut heap = Heap::new();
//! heap.push(3);
//! heap.push(9);
//! heap.push(4);
//!
//! assert_eq!(heap.top(), Ok(&9));
//! assert_eq!(heap.pop(), Some(9));
//! assert_eq!(heap.pop(), Some(4));
//! assert_eq!(heap.pop(), Some(3));
//! assert_eq!(heap.pop(), None);
//! ```

use std::fmt;
use std::mem;
use std::slice;

use crate::error::{ContainerError, Result};
use crate::storage::Storage;
use crate::traits::{Compare, MaxOrder};

/// A priority queue backed by a binary heap in a [`Storage`].
///
/// The comparator `C` decides priority; with the default [`MaxOrder`] the
/// largest element by [`Ord`] is on top. Ties are broken arbitrarily, so
/// equal elements may come out in any order.
///
/// # Empty heaps
///
/// [`top`](Heap::top) on an empty heap returns [`ContainerError::Empty`].
/// [`pop`](Heap::pop) on an empty heap does nothing and returns `None`.
#[derive(Clone)]
pub struct Heap<T, C = MaxOrder> {
    container: Storage<T>,
    compare: C,
}

impl<T: Ord> Heap<T> {
    /// Creates an empty max-heap.
    pub fn new() -> Self {
        Self::with_compare(MaxOrder)
    }

    /// Creates an empty max-heap with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_compare(capacity, MaxOrder)
    }
}

impl<T, C: Compare<T>> Heap<T, C> {
    /// Creates an empty heap ordered by `compare`.
    pub fn with_compare(compare: C) -> Self {
        Self {
            container: Storage::new(),
            compare,
        }
    }

    /// Creates an empty heap ordered by `compare` with room for `capacity`
    /// elements.
    pub fn with_capacity_and_compare(capacity: usize, compare: C) -> Self {
        Self {
            container: Storage::with_capacity(capacity),
            compare,
        }
    }

    /// Builds a heap from an existing storage, ordered by `compare`.
    ///
    /// The storage is taken over as-is and reordered in place with a
    /// bottom-up pass, so no element is copied or reallocated.
    ///
    /// # Time Complexity
    /// O(n)
    pub fn from_storage_with(container: Storage<T>, compare: C) -> Self {
        let mut heap = Self { container, compare };
        heap.rebuild();
        heap
    }

    /// Returns the number of elements in the heap.
    #[inline]
    pub fn len(&self) -> usize {
        self.container.len()
    }

    /// Returns true if the heap holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.container.capacity()
    }

    /// Ensures the underlying storage can hold at least `capacity` elements.
    pub fn reserve(&mut self, capacity: usize) {
        self.container.reserve(capacity);
    }

    /// Returns the comparator ordering this heap.
    pub fn compare(&self) -> &C {
        &self.compare
    }

    /// Returns the highest-priority element.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the heap is empty.
    ///
    /// # Time Complexity
    /// O(1)
    pub fn top(&self) -> Result<&T> {
        self.container.front()
    }

    /// Inserts `value`, keeping the heap ordered.
    ///
    /// # Time Complexity
    /// O(log n) comparisons, plus amortized O(1) storage growth
    pub fn push(&mut self, value: T) {
        self.container.push_back(value);
        let mut index = self.container.len() / 2;
        while index != 0 && self.fix_subtree(index) {
            index /= 2;
        }
    }

    /// Removes and returns the highest-priority element.
    ///
    /// Returns `None`, leaving the heap untouched, if the heap is empty.
    ///
    /// # Time Complexity
    /// O(log n)
    pub fn pop(&mut self) -> Option<T> {
        let last = self.container.len();
        if last == 0 {
            return None;
        }
        self.swap_nodes(1, last);
        let top = self.container.pop_back();
        self.fix_subtree(1);
        top
    }

    /// Moves every element of `other` into this heap.
    ///
    /// The larger of the two heaps keeps its storage; the smaller one's
    /// elements are pushed into it.
    pub fn merge(&mut self, mut other: Self) {
        if other.len() > self.len() {
            self.swap(&mut other);
        }
        self.extend(other.container);
    }

    /// Removes every element, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.container.clear();
    }

    /// Exchanges the contents of two heaps without touching any element.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Returns an iterator over the elements in storage (heap) order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.container.iter()
    }

    /// Views the elements in storage order: index 0 is the top, and the
    /// children of offset `k` sit at offsets `2k + 1` and `2k + 2`.
    pub fn as_slice(&self) -> &[T] {
        self.container.as_slice()
    }

    /// Consumes the heap, returning its storage in heap order.
    pub fn into_storage(self) -> Storage<T> {
        self.container
    }

    /// Consumes the heap, returning its elements sorted from lowest to
    /// highest priority.
    ///
    /// Sorts in place: the current top is repeatedly swapped to the end of the
    /// shrinking heap region.
    ///
    /// # Time Complexity
    /// O(n log n)
    pub fn into_sorted_storage(mut self) -> Storage<T> {
        let mut end = self.container.len();
        while end > 1 {
            self.swap_nodes(1, end);
            end -= 1;
            self.fix_subtree_within(1, end);
        }
        self.container
    }

    /// Checks the heap property over every parent/child pair.
    ///
    /// Always true for a heap built through this type's API; exposed for
    /// tests and debugging.
    pub fn is_heap(&self) -> bool {
        (2..=self.container.len()).all(|index| !self.less(index / 2, index))
    }

    /// Restores the heap property for the subtree rooted at `tree_index`.
    ///
    /// Returns true if any element moved.
    fn fix_subtree(&mut self, tree_index: usize) -> bool {
        let len = self.container.len();
        self.fix_subtree_within(tree_index, len)
    }

    /// Like [`fix_subtree`](Self::fix_subtree), treating only tree indices
    /// `1..=end` as part of the heap.
    fn fix_subtree_within(&mut self, tree_index: usize, end: usize) -> bool {
        let left = tree_index * 2;
        let right = left + 1;
        let preferred = if right <= end && self.less(left, right) {
            right
        } else {
            left
        };

        if preferred <= end && self.less(tree_index, preferred) {
            self.swap_nodes(tree_index, preferred);
            self.fix_subtree_within(preferred, end);
            true
        } else {
            false
        }
    }

    /// Bottom-up heap construction over the whole container.
    fn rebuild(&mut self) {
        for tree_index in (1..=self.container.len() / 2).rev() {
            self.fix_subtree(tree_index);
        }
        debug_assert!(self.is_heap());
    }

    /// Compares the nodes at two tree indices.
    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        self.compare
            .less(&self.container[a - 1], &self.container[b - 1])
    }

    /// Swaps the nodes at two tree indices.
    #[inline]
    fn swap_nodes(&mut self, a: usize, b: usize) {
        self.container.as_mut_slice().swap(a - 1, b - 1);
    }
}

impl<T: Ord> Default for Heap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug, C: fmt::Debug> fmt::Debug for Heap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Heap")
            .field("container", &self.container)
            .field("compare", &self.compare)
            .finish()
    }
}

impl<T: Ord> From<Storage<T>> for Heap<T> {
    fn from(container: Storage<T>) -> Self {
        Self::from_storage_with(container, MaxOrder)
    }
}

impl<T: Ord> From<Vec<T>> for Heap<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from(Storage::from(values))
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for Heap<T> {
    fn from(values: [T; N]) -> Self {
        Self::from(Storage::from(values))
    }
}

impl<T, C: Compare<T> + Default> FromIterator<T> for Heap<T, C> {
    /// Pushes each element in turn.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::with_compare(C::default());
        heap.extend(iter);
        heap
    }
}

impl<T, C: Compare<T>> Extend<T> for Heap<T, C> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let needed = self.container.len().saturating_add(lower);
        let capacity = self.container.capacity();
        if needed > capacity {
            self.container.reserve(needed.max(capacity.saturating_mul(2)));
        }
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a Heap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.container.iter()
    }
}

impl<T, C> From<Heap<T, C>> for Storage<T> {
    fn from(heap: Heap<T, C>) -> Self {
        heap.container
    }
}
