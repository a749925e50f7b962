//! Growable contiguous storage
//!
//! [`Storage`] is an owned, resizable array with an explicit length and an
//! explicit capacity. It is the backing container for [`Heap`](crate::heap::Heap)
//! but knows nothing about heap ordering.
//!
//! # Design
//!
//! The buffer is a single `Box<[MaybeUninit<T>]>`. The box owns the memory and
//! releases it exactly once when it is dropped or replaced; `Storage` itself
//! only tracks which prefix of the buffer (`[0, len)`) holds live values and is
//! responsible for dropping those. Reallocation moves the live prefix bitwise
//! into a fresh box and lets the old box go, so no element is ever dropped or
//! duplicated during growth.
//!
//! Capacity changes are exact and predictable:
//!
//! | Operation         | New capacity                                  |
//! |-------------------|-----------------------------------------------|
//! | `push_back`       | `max(1, 2 * capacity)` when full              |
//! | `reserve(n)`      | exactly `n` when `n > capacity`, else unchanged |
//! | `resize(n)`       | exactly `n` when `n > capacity`, else unchanged |
//! | `shrink_to_fit`   | exactly `len`                                 |
//! | `clear`, `pop_back`, `truncate` | unchanged                       |
//!
//! # Example
//!
//! ```rust
//! use growable_heap::storage::Storage;
//!
//! let mut storage = Storage::new();
//! for value in 1..=5 {
//!     storage.push_back(value);
//! }
//! assert_eq!(storage.len(), 5);
//! assert_eq!(storage.capacity(), 8);
//! assert_eq!(storage.back(), Ok(&5));
//!
//! storage.shrink_to_fit();
//! assert_eq!(storage.capacity(), 5);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;
use std::mem::{self, MaybeUninit};
use std::ops::{Index, IndexMut};
use std::ptr;
use std::slice;
use std::vec;

use crate::error::{ContainerError, Result};

/// An owned, growable, contiguous sequence of elements.
///
/// Elements in `[0, len())` are live; slots in `[len(), capacity())` are
/// allocated but hold no value. Cloning copies only the live elements into a
/// buffer of capacity `len()`. Moving the contents out with
/// [`std::mem::take`] leaves the source empty with zero capacity.
pub struct Storage<T> {
    buf: Box<[MaybeUninit<T>]>,
    len: usize,
}

#[inline]
fn allocate<T>(capacity: usize) -> Box<[MaybeUninit<T>]> {
    Box::new_uninit_slice(capacity)
}

#[cold]
#[inline(never)]
fn capacity_overflow() -> ! {
    panic!("capacity overflow")
}

impl<T> Storage<T> {
    /// Creates an empty storage without allocating.
    pub fn new() -> Self {
        Self {
            buf: allocate(0),
            len: 0,
        }
    }

    /// Creates an empty storage with room for exactly `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: allocate(capacity),
            len: 0,
        }
    }

    /// Creates a storage of `len` default values, with capacity `len`.
    pub fn with_len(len: usize) -> Self
    where
        T: Default,
    {
        let mut storage = Self::with_capacity(len);
        storage.resize(len);
        storage
    }

    /// Creates a storage of `len` clones of `value`, with capacity `len`.
    pub fn from_elem(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        let mut storage = Self::with_capacity(len);
        storage.resize_with_value(len, value);
        storage
    }

    /// Returns the number of live elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.len()
    }

    /// Returns true if there are no live elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Views the live elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: slots `[0, len)` are initialized.
        unsafe { slice::from_raw_parts(self.buf.as_ptr().cast::<T>(), self.len) }
    }

    /// Views the live elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: slots `[0, len)` are initialized.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr().cast::<T>(), self.len) }
    }

    /// Returns an iterator over the live elements, front to back.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each live element.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    /// Returns [`ContainerError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&T> {
        let len = self.len;
        self.as_slice()
            .get(index)
            .ok_or(ContainerError::IndexOutOfBounds { index, len })
    }

    /// Returns a mutable reference to the element at `index`.
    ///
    /// # Errors
    /// Returns [`ContainerError::IndexOutOfBounds`] if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.len;
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(ContainerError::IndexOutOfBounds { index, len })
    }

    /// Returns the first element.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the storage is empty.
    pub fn front(&self) -> Result<&T> {
        self.as_slice().first().ok_or(ContainerError::Empty)
    }

    /// Returns a mutable reference to the first element.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the storage is empty.
    pub fn front_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().first_mut().ok_or(ContainerError::Empty)
    }

    /// Returns the last element.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the storage is empty.
    pub fn back(&self) -> Result<&T> {
        self.as_slice().last().ok_or(ContainerError::Empty)
    }

    /// Returns a mutable reference to the last element.
    ///
    /// # Errors
    /// Returns [`ContainerError::Empty`] if the storage is empty.
    pub fn back_mut(&mut self) -> Result<&mut T> {
        self.as_mut_slice().last_mut().ok_or(ContainerError::Empty)
    }

    /// Appends `value` at index `len()`.
    ///
    /// When the storage is full the capacity doubles first (an empty
    /// storage grows to capacity 1).
    ///
    /// # Time Complexity
    /// O(1) amortized
    pub fn push_back(&mut self, value: T) {
        self.grow_for(1);
        self.buf[self.len].write(value);
        self.len += 1;
    }

    /// Removes and returns the last element, or `None` if empty.
    ///
    /// The capacity is left unchanged.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // SAFETY: slot `len` was live and is now outside the live range, so
        // it is read exactly once.
        Some(unsafe { self.buf[self.len].assume_init_read() })
    }

    /// Ensures the capacity is at least `capacity`.
    ///
    /// Does nothing if the current capacity is already large enough;
    /// otherwise reallocates to exactly `capacity` slots, preserving the live
    /// elements in order. Never changes `len()`.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity <= self.capacity() {
            return;
        }
        self.relocate(capacity);
    }

    /// Sets the length to `new_len`, filling new slots with `T::default()`.
    ///
    /// Shrinking drops the elements past `new_len`. Growing beyond the
    /// capacity first reserves exactly `new_len` slots.
    pub fn resize(&mut self, new_len: usize)
    where
        T: Default,
    {
        self.fill_to(new_len, T::default);
    }

    /// Sets the length to `new_len`, filling new slots with clones of `value`.
    ///
    /// Shrinking drops the elements past `new_len`. Growing beyond the
    /// capacity first reserves exactly `new_len` slots.
    pub fn resize_with_value(&mut self, new_len: usize, value: T)
    where
        T: Clone,
    {
        self.fill_to(new_len, || value.clone());
    }

    /// Drops every element at or past `new_len`. Capacity is unchanged.
    pub fn truncate(&mut self, new_len: usize) {
        if new_len >= self.len {
            return;
        }
        let old_len = self.len;
        // Shorten first so a panicking destructor cannot cause a double drop.
        self.len = new_len;
        // SAFETY: `[new_len, old_len)` were live and are no longer reachable.
        unsafe {
            let tail = self.buf.as_mut_ptr().cast::<T>().add(new_len);
            ptr::drop_in_place(ptr::slice_from_raw_parts_mut(tail, old_len - new_len));
        }
    }

    /// Drops all elements. The buffer and capacity are retained.
    pub fn clear(&mut self) {
        self.truncate(0);
    }

    /// Reallocates so that the capacity equals the length.
    ///
    /// An empty storage releases its buffer entirely.
    pub fn shrink_to_fit(&mut self) {
        if self.len == self.capacity() {
            return;
        }
        self.relocate(self.len);
    }

    /// Exchanges the contents of two storages without touching any element.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Appends clones of every element of `values`.
    pub fn extend_from_slice(&mut self, values: &[T])
    where
        T: Clone,
    {
        self.grow_for(values.len());
        for value in values {
            self.push_back(value.clone());
        }
    }

    /// Makes room for `additional` more elements using the doubling policy.
    fn grow_for(&mut self, additional: usize) {
        let needed = self
            .len
            .checked_add(additional)
            .unwrap_or_else(|| capacity_overflow());
        if needed <= self.capacity() {
            return;
        }
        let doubled = match self.capacity() {
            0 => 1,
            capacity => capacity
                .checked_mul(2)
                .unwrap_or_else(|| capacity_overflow()),
        };
        self.reserve(needed.max(doubled));
    }

    /// Moves the live elements into a fresh buffer of exactly `capacity` slots.
    fn relocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        let mut fresh = allocate::<T>(capacity);
        // SAFETY: both buffers have at least `len` slots and do not overlap.
        // The source slots are treated as moved-from: the old box is freed
        // without dropping its contents because `MaybeUninit` never drops.
        unsafe {
            ptr::copy_nonoverlapping(self.buf.as_ptr(), fresh.as_mut_ptr(), self.len);
        }
        self.buf = fresh;
    }

    fn fill_to(&mut self, new_len: usize, mut make: impl FnMut() -> T) {
        if new_len <= self.len {
            self.truncate(new_len);
            return;
        }
        self.reserve(new_len);
        while self.len < new_len {
            self.buf[self.len].write(make());
            self.len += 1;
        }
    }
}

impl<T> Drop for Storage<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Storage<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Storage<T> {
    fn clone(&self) -> Self {
        let mut copy = Self::with_capacity(self.len);
        copy.extend_from_slice(self.as_slice());
        copy
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.reserve(source.len);
        self.extend_from_slice(source.as_slice());
    }
}

impl<T: fmt::Debug> fmt::Debug for Storage<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for Storage<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for Storage<T> {}

impl<T: PartialEq, const N: usize> PartialEq<[T; N]> for Storage<T> {
    fn eq(&self, other: &[T; N]) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: PartialEq> PartialEq<Vec<T>> for Storage<T> {
    fn eq(&self, other: &Vec<T>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Hash> Hash for Storage<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl<T> Index<usize> for Storage<T> {
    type Output = T;

    /// # Panics
    /// Panics if `index >= len()`.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> IndexMut<usize> for Storage<T> {
    /// # Panics
    /// Panics if `index >= len()`.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T> AsRef<[T]> for Storage<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> AsMut<[T]> for Storage<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<T> FromIterator<T> for Storage<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut storage = Self::with_capacity(iter.size_hint().0);
        for value in iter {
            storage.push_back(value);
        }
        storage
    }
}

impl<T> Extend<T> for Storage<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.grow_for(iter.size_hint().0);
        for value in iter {
            self.push_back(value);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for Storage<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<T> From<Vec<T>> for Storage<T> {
    fn from(values: Vec<T>) -> Self {
        values.into_iter().collect()
    }
}

impl<T, const N: usize> From<[T; N]> for Storage<T> {
    fn from(values: [T; N]) -> Self {
        values.into_iter().collect()
    }
}

impl<T: Clone> From<&[T]> for Storage<T> {
    fn from(values: &[T]) -> Self {
        let mut storage = Self::with_capacity(values.len());
        storage.extend_from_slice(values);
        storage
    }
}

impl<T> IntoIterator for Storage<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(mut self) -> IntoIter<T> {
        let buf = mem::replace(&mut self.buf, allocate(0));
        let len = mem::replace(&mut self.len, 0);
        let mut slots = Vec::from(buf);
        slots.truncate(len);
        IntoIter {
            slots: slots.into_iter(),
        }
    }
}

impl<'a, T> IntoIterator for &'a Storage<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut Storage<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

/// An owning iterator over the elements of a [`Storage`].
///
/// Elements not yet yielded are dropped together with the iterator.
pub struct IntoIter<T> {
    slots: vec::IntoIter<MaybeUninit<T>>,
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded as a slice.
    pub fn as_slice(&self) -> &[T] {
        let remaining = self.slots.as_slice();
        // SAFETY: every slot still held by the iterator is initialized.
        unsafe { slice::from_raw_parts(remaining.as_ptr().cast::<T>(), remaining.len()) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        // SAFETY: the iterator only holds live slots.
        self.slots.next().map(|slot| unsafe { slot.assume_init() })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.slots.size_hint()
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        // SAFETY: the iterator only holds live slots.
        self.slots.next_back().map(|slot| unsafe { slot.assume_init() })
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {
    fn len(&self) -> usize {
        self.slots.len()
    }
}

impl<T> FusedIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        for slot in self.slots.by_ref() {
            // SAFETY: the iterator only holds live slots.
            drop(unsafe { slot.assume_init() });
        }
    }
}

/// Creates a [`Storage`] from a literal list of elements.
///
/// - `storage![]` creates an empty storage
/// - `storage![a, b, c]` creates a storage holding the given elements
/// - `storage![value; n]` creates a storage of `n` clones of `value`
///
/// The resulting capacity always equals the number of elements.
///
/// ```rust
/// use growable_heap::storage;
///
/// let numbers = storage![1, 2, 3];
/// assert_eq!(numbers.len(), 3);
/// assert_eq!(numbers.capacity(), 3);
///
/// let zeros = storage![0u8; 4];
/// assert_eq!(zeros.as_slice(), &[0, 0, 0, 0]);
/// ```
#[macro_export]
macro_rules! storage {
    () => {
        $crate::storage::Storage::new()
    };
    ($value:expr; $len:expr) => {
        $crate::storage::Storage::from_elem($len, $value)
    };
    ($($value:expr),+ $(,)?) => {
        $crate::storage::Storage::from([$($value),+])
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_new_is_empty() {
        let storage: Storage<i32> = Storage::new();
        assert!(storage.is_empty());
        assert_eq!(storage.len(), 0);
        assert_eq!(storage.capacity(), 0);
        assert_eq!(storage.front(), Err(ContainerError::Empty));
        assert_eq!(storage.back(), Err(ContainerError::Empty));
    }

    #[test]
    fn test_growth_doubles() {
        let mut storage = Storage::new();
        let mut capacities = Vec::new();
        for i in 0..5 {
            storage.push_back(i);
            capacities.push(storage.capacity());
        }
        assert_eq!(capacities, vec![1, 2, 4, 4, 8]);
        assert_eq!(storage.as_slice(), &[0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_pre_sized_constructors() {
        let defaults: Storage<i32> = Storage::with_len(3);
        assert_eq!(defaults.as_slice(), &[0, 0, 0]);
        assert_eq!(defaults.capacity(), 3);

        let filled = Storage::from_elem(2, String::from("x"));
        assert_eq!(filled.as_slice(), &["x".to_string(), "x".to_string()]);
        assert_eq!(filled.capacity(), 2);

        let reserved: Storage<u8> = Storage::with_capacity(10);
        assert!(reserved.is_empty());
        assert_eq!(reserved.capacity(), 10);
    }

    #[test]
    fn test_literal_constructors() {
        let from_array = Storage::from([1, 2, 3]);
        let from_macro = storage![1, 2, 3];
        assert_eq!(from_array, from_macro);
        assert_eq!(from_macro.capacity(), 3);

        let repeated = storage!['a'; 3];
        assert_eq!(repeated.as_slice(), &['a', 'a', 'a']);

        let empty: Storage<i32> = storage![];
        assert!(empty.is_empty());
    }

    #[test]
    fn test_reserve_no_op_when_smaller() {
        let mut storage = storage![1, 2, 3];
        storage.push_back(4);
        assert_eq!(storage.capacity(), 6);

        storage.reserve(5);
        assert_eq!(storage.capacity(), 6);
        storage.reserve(6);
        assert_eq!(storage.capacity(), 6);
        assert_eq!(storage.as_slice(), &[1, 2, 3, 4]);
    }

    #[test]
    fn test_reserve_grows_exactly() {
        let mut storage = storage![1, 2, 3];
        storage.reserve(17);
        assert_eq!(storage.capacity(), 17);
        assert_eq!(storage.len(), 3);
        assert_eq!(storage.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_pop_back() {
        let mut storage = storage![1, 2];
        assert_eq!(storage.pop_back(), Some(2));
        assert_eq!(storage.pop_back(), Some(1));
        assert_eq!(storage.pop_back(), None);
        assert_eq!(storage.capacity(), 2);
    }

    #[test]
    fn test_resize_default_and_fill() {
        let mut storage: Storage<String> = Storage::new();
        storage.resize(2);
        assert_eq!(storage.as_slice(), &[String::new(), String::new()]);
        assert_eq!(storage.capacity(), 2);

        storage.resize_with_value(4, "fill".to_string());
        assert_eq!(storage.len(), 4);
        assert_eq!(storage.capacity(), 4);
        assert_eq!(storage[3], "fill");

        storage.resize(1);
        assert_eq!(storage.len(), 1);
        assert_eq!(storage.capacity(), 4);
    }

    #[test]
    fn test_resize_within_capacity_keeps_buffer() {
        let mut storage: Storage<i32> = Storage::with_capacity(8);
        storage.resize_with_value(5, 7);
        assert_eq!(storage.capacity(), 8);
        assert_eq!(storage.as_slice(), &[7; 5]);
    }

    #[test]
    fn test_shrink_to_fit() {
        let mut storage = Storage::new();
        for i in 0..5 {
            storage.push_back(i);
        }
        assert_eq!(storage.capacity(), 8);
        storage.shrink_to_fit();
        assert_eq!(storage.capacity(), 5);
        assert_eq!(storage.as_slice(), &[0, 1, 2, 3, 4]);

        storage.clear();
        storage.shrink_to_fit();
        assert_eq!(storage.capacity(), 0);
        assert!(storage.is_empty());
    }

    #[test]
    fn test_clear_keeps_capacity() {
        let mut storage = storage![1, 2, 3, 4];
        storage.clear();
        assert!(storage.is_empty());
        assert_eq!(storage.capacity(), 4);
        storage.push_back(9);
        assert_eq!(storage.front(), Ok(&9));
    }

    #[test]
    fn test_copy_independence() {
        let mut a = storage![1, 2, 3];
        a.push_back(4);
        let mut b = a.clone();
        assert_eq!(b.capacity(), 4);
        b[0] = 100;
        assert_eq!(a[0], 1);
        assert_eq!(b[0], 100);
    }

    #[test]
    fn test_clone_from_reuses_buffer() {
        let source = storage![1, 2];
        let mut target: Storage<i32> = Storage::with_capacity(10);
        target.push_back(42);
        target.clone_from(&source);
        assert_eq!(target.as_slice(), &[1, 2]);
        assert_eq!(target.capacity(), 10);
    }

    #[test]
    fn test_move_leaves_source_empty() {
        let mut a = storage![1, 2, 3];
        let b = mem::take(&mut a);
        assert_eq!(b.len(), 3);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(a.len(), 0);
        assert_eq!(a.capacity(), 0);
    }

    #[test]
    fn test_swap_exchanges_state() {
        let mut a = storage![1, 2, 3];
        let mut b: Storage<i32> = Storage::with_capacity(10);
        a.swap(&mut b);
        assert!(a.is_empty());
        assert_eq!(a.capacity(), 10);
        assert_eq!(b.as_slice(), &[1, 2, 3]);
        assert_eq!(b.capacity(), 3);
    }

    #[test]
    fn test_front_back_mut() {
        let mut storage = storage![1, 2, 3];
        *storage.front_mut().unwrap() = 10;
        *storage.back_mut().unwrap() = 30;
        assert_eq!(storage.as_slice(), &[10, 2, 30]);
    }

    #[test]
    fn test_checked_access() {
        let mut storage = storage![1, 2, 3];
        assert_eq!(storage.get(2), Ok(&3));
        assert_eq!(
            storage.get(3),
            Err(ContainerError::IndexOutOfBounds { index: 3, len: 3 })
        );
        assert!(storage.get_mut(5).is_err());
    }

    #[test]
    #[should_panic(expected = "index 3 out of bounds for length 3")]
    fn test_index_out_of_bounds_panics() {
        let storage = storage![1, 2, 3];
        let _ = storage[3];
    }

    #[test]
    fn test_into_iter_both_ends() {
        let storage = storage![1, 2, 3, 4];
        let mut iter = storage.into_iter();
        assert_eq!(iter.len(), 4);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(4));
        assert_eq!(iter.as_slice(), &[2, 3]);
        assert_eq!(iter.collect::<Vec<_>>(), vec![2, 3]);
    }

    #[test]
    fn test_extend_and_collect() {
        let mut storage: Storage<i32> = (0..3).collect();
        storage.extend([3, 4]);
        storage.extend(&[5, 6]);
        assert_eq!(storage, vec![0, 1, 2, 3, 4, 5, 6]);
        for value in &mut storage {
            *value *= 2;
        }
        assert_eq!(storage.iter().sum::<i32>(), 42);
    }

    #[test]
    fn test_elements_dropped_exactly_once() {
        let tracker = Rc::new(());
        {
            let mut storage = Storage::new();
            for _ in 0..10 {
                storage.push_back(Rc::clone(&tracker));
            }
            storage.reserve(64);
            storage.pop_back();
            storage.truncate(6);
            storage.shrink_to_fit();
            storage.resize_with_value(9, Rc::clone(&tracker));
            assert_eq!(Rc::strong_count(&tracker), 10);

            let partially_consumed = storage.clone().into_iter().take(2).count();
            assert_eq!(partially_consumed, 2);
            assert_eq!(Rc::strong_count(&tracker), 10);
        }
        assert_eq!(Rc::strong_count(&tracker), 1);
    }

    #[test]
    fn test_zero_sized_elements() {
        let mut storage = Storage::new();
        for _ in 0..5 {
            storage.push_back(());
        }
        assert_eq!(storage.len(), 5);
        assert_eq!(storage.capacity(), 8);
        assert_eq!(storage.pop_back(), Some(()));
    }

    #[test]
    fn test_debug_format() {
        let storage = storage![1, 2];
        assert_eq!(format!("{storage:?}"), "[1, 2]");
    }
}
