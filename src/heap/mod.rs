//! A priority queue implemented with a binary heap.
//!
//! Insertion and popping the top element have *O*(log(*n*)) time complexity.
//! Checking the top element is *O*(1). Converting a vector to a heap can be
//! done in-place, and has *O*(*n*) complexity.
//!
//! Which element is "top" is decided entirely by the heap's [`Before`]
//! ordering: the top is an element that no other element comes before.
//!
//! # Examples
//!
//! Dijkstra's shortest path algorithm over a small directed graph, keeping the
//! frontier ordered cheapest-first with a closure:
//!
//! ```
//! use predicate_heap::Heap;
//!
//! #[derive(Copy, Clone)]
//! struct State {
//!     cost: usize,
//!     position: usize,
//! }
//!
//! struct Edge {
//!     node: usize,
//!     cost: usize,
//! }
//!
//! fn shortest_path(adj_list: &[Vec<Edge>], start: usize, goal: usize) -> Option<usize> {
//!     let mut dist: Vec<_> = (0..adj_list.len()).map(|_| usize::MAX).collect();
//!     let mut heap = Heap::new(|a: &State, b: &State| a.cost < b.cost);
//!
//!     dist[start] = 0;
//!     heap.push(State { cost: 0, position: start });
//!
//!     while let Ok(State { cost, position }) = heap.pop() {
//!         if position == goal {
//!             return Some(cost);
//!         }
//!         if cost > dist[position] {
//!             continue;
//!         }
//!         for edge in &adj_list[position] {
//!             let next = State { cost: cost + edge.cost, position: edge.node };
//!             if next.cost < dist[next.position] {
//!                 heap.push(next);
//!                 dist[next.position] = next.cost;
//!             }
//!         }
//!     }
//!
//!     None
//! }
//!
//! let graph = vec![
//!     vec![Edge { node: 2, cost: 10 }, Edge { node: 1, cost: 1 }],
//!     vec![Edge { node: 3, cost: 2 }],
//!     vec![Edge { node: 1, cost: 1 }, Edge { node: 3, cost: 3 }, Edge { node: 4, cost: 1 }],
//!     vec![Edge { node: 0, cost: 7 }, Edge { node: 4, cost: 2 }],
//!     vec![],
//! ];
//!
//! assert_eq!(shortest_path(&graph, 0, 1), Some(1));
//! assert_eq!(shortest_path(&graph, 0, 3), Some(3));
//! assert_eq!(shortest_path(&graph, 3, 0), Some(7));
//! assert_eq!(shortest_path(&graph, 0, 4), Some(5));
//! assert_eq!(shortest_path(&graph, 4, 0), None);
//! ```

use core::fmt;
use core::iter::{FromIterator, FusedIterator};
use core::mem;

use alloc::slice;
use alloc::vec::{self, Vec};

use crate::polyfill::TrustedLen;
use crate::{Before, EmptyHeap};

#[cfg(test)]
mod tests;

/// A priority queue implemented with a binary heap, ordered by `O`.
///
/// The element at the top of the heap is one that no other element comes
/// [`before`](Before::before). The ordering is fixed when the heap is created.
///
/// The ordering must answer the same way for the same two items for as long as
/// both sit in the heap. An item or ordering whose answers shift underneath it
/// (through [`Cell`], [`RefCell`], global state or I/O) leaves the heap with
/// an unspecified but memory-safe layout: pops may come out of order, and a
/// panicking ordering propagates its panic with every element still stored.
///
/// # Examples
///
/// ```
/// use predicate_heap::Heap;
///
/// let mut heap = Heap::new(|a: &i32, b: &i32| a > b);
///
/// // There's nothing to peek at yet.
/// assert!(heap.peek().is_err());
///
/// heap.push(1);
/// heap.push(5);
/// heap.push(2);
///
/// // Now peek shows the most important item in the heap.
/// assert_eq!(heap.peek(), Ok(&5));
/// assert_eq!(heap.len(), 3);
///
/// // Iterating the heap by reference visits the items in storage order.
/// for x in &heap {
///     println!("{x}");
/// }
///
/// // Popping returns them in priority order.
/// assert_eq!(heap.pop(), Ok(5));
/// assert_eq!(heap.pop(), Ok(2));
/// assert_eq!(heap.pop(), Ok(1));
/// assert!(heap.pop().is_err());
/// assert!(heap.is_empty());
/// ```
///
/// # Time complexity
///
/// | [push]  | [pop]         | [peek]  |
/// |---------|---------------|---------|
/// | *O*(1)~ | *O*(log(*n*)) | *O*(1)  |
///
/// The value for `push` is an expected cost; the method documentation gives a
/// more detailed analysis.
///
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
/// [push]: Heap::push
/// [pop]: Heap::pop
/// [peek]: Heap::peek
pub struct Heap<T, O> {
    data: Vec<T>,
    order: O,
}

impl<T: Clone, O: Clone> Clone for Heap<T, O> {
    /// Copies the elements into fresh storage and clones the ordering.
    ///
    /// A closure that captures owned state is duplicated along with that
    /// state. To have both heaps consult one comparator, build them over a
    /// reference to it (`Heap::new(&cmp)`).
    fn clone(&self) -> Self {
        Heap { data: self.data.clone(), order: self.order.clone() }
    }

    /// Reuses `self`'s storage for the copy. The ordering is replaced by
    /// `source`'s too, since the copied layout only satisfies the heap
    /// property under that ordering.
    fn clone_from(&mut self, source: &Self) {
        self.order.clone_from(&source.order);
        self.data.clone_from(&source.data);
    }
}

impl<T, O: Before<T> + Default> Default for Heap<T, O> {
    /// Creates an empty `Heap` with the default ordering.
    #[inline]
    fn default() -> Heap<T, O> {
        Heap::new(O::default())
    }
}

impl<T: fmt::Debug, O> fmt::Debug for Heap<T, O> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T, O: Before<T>> Heap<T, O> {
    /// Creates an empty `Heap` ordered by `order`.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let mut heap = Heap::new(|a: &u8, b: &u8| a < b);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn new(order: O) -> Heap<T, O> {
        Heap { data: Vec::new(), order }
    }

    /// Creates an empty `Heap` ordered by `order`, with room for at least
    /// `capacity` elements.
    ///
    /// The capacity is only an allocation hint. If `capacity` is 0, the heap
    /// will not allocate.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let mut heap = Heap::with_capacity(|a: &u8, b: &u8| a < b, 10);
    /// assert!(heap.capacity() >= 10);
    /// heap.push(4);
    /// ```
    #[must_use]
    pub fn with_capacity(order: O, capacity: usize) -> Heap<T, O> {
        Heap { data: Vec::with_capacity(capacity), order }
    }

    /// Builds a `Heap` ordered by `order` out of the elements of `vec`, reusing
    /// its allocation.
    ///
    /// This has *O*(*n*) time complexity.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let heap = Heap::from_vec(|a: &i32, b: &i32| a < b, vec![9, 4, 7, 1]);
    /// assert_eq!(heap.peek(), Ok(&1));
    /// ```
    #[must_use]
    pub fn from_vec(order: O, vec: Vec<T>) -> Heap<T, O> {
        let mut heap = Heap { data: vec, order };
        heap.rebuild();
        heap
    }

    /// Pushes an item onto the heap.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let mut heap = Heap::new(|a: &i32, b: &i32| a > b);
    /// heap.push(3);
    /// heap.push(5);
    /// heap.push(1);
    ///
    /// assert_eq!(heap.len(), 3);
    /// assert_eq!(heap.peek(), Ok(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// A pushed item climbs one level per swap, so on random input it
    /// usually stops after a step or two: *O*(1) expected. An item that comes
    /// before everything already stored climbs all the way, *O*(log(*n*)).
    /// Growing the storage costs *O*(*n*) once, amortized over the pushes.
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        self.sift_up(self.data.len() - 1);
    }

    /// Removes the top item from the heap and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyHeap`] if the heap holds no elements, in which case the
    /// heap is left untouched.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let mut heap = Heap::from_vec(|a: &i32, b: &i32| a > b, vec![1, 3]);
    ///
    /// assert_eq!(heap.pop(), Ok(3));
    /// assert_eq!(heap.pop(), Ok(1));
    /// assert!(heap.pop().is_err());
    /// ```
    ///
    /// # Time complexity
    ///
    /// The worst case cost of `pop` on a heap containing *n* elements is *O*(log(*n*)).
    pub fn pop(&mut self) -> Result<T, EmptyHeap> {
        let mut item = self.data.pop().ok_or_else(EmptyHeap::of::<T>)?;
        if !self.is_empty() {
            mem::swap(&mut item, &mut self.data[0]);
            self.sift_down(0);
        }
        Ok(item)
    }

    /// Removes elements from the top of the heap one at a time, in priority
    /// order, as the returned iterator is advanced.
    ///
    /// **This consumes the heap's contents.** Every item yielded has been
    /// popped and cannot be recovered. Dropping the iterator before it is
    /// exhausted stops the draining: items not yet yielded stay in the heap,
    /// which remains valid.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let mut heap = Heap::from_vec(|a: &i32, b: &i32| a < b, vec![4, 2, 6, 1, 3]);
    ///
    /// assert_eq!(heap.drain_sorted().take(2).collect::<Vec<_>>(), [1, 2]);
    /// assert_eq!(heap.len(), 3);
    ///
    /// assert_eq!(heap.drain_sorted().collect::<Vec<_>>(), [3, 4, 6]);
    /// assert!(heap.is_empty());
    /// ```
    pub fn drain_sorted(&mut self) -> DrainSorted<'_, T, O> {
        DrainSorted { inner: self }
    }

    /// Returns an iterator which retrieves elements in priority order.
    /// This method consumes the original heap.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let heap = Heap::from_vec(|a: &i32, b: &i32| a > b, vec![1, 2, 3, 4, 5]);
    ///
    /// assert_eq!(heap.into_iter_sorted().take(2).collect::<Vec<_>>(), [5, 4]);
    /// ```
    pub fn into_iter_sorted(self) -> IntoIterSorted<T, O> {
        IntoIterSorted { inner: self }
    }

    /// Consumes the `Heap` and returns a vector of its elements in priority
    /// order, top first.
    ///
    /// ```
    /// use predicate_heap::Heap;
    ///
    /// let mut heap = Heap::from_vec(|a: &i32, b: &i32| a < b, vec![5, 1, 7, 2, 4]);
    /// heap.push(6);
    /// heap.push(3);
    ///
    /// assert_eq!(heap.into_sorted_vec(), [1, 2, 3, 4, 5, 6, 7]);
    /// ```
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_sorted_vec(self) -> Vec<T> {
        self.into_iter_sorted().collect()
    }

    /// Moves the element at `pos` towards the root while it comes before its
    /// parent.
    ///
    /// The caller must guarantee that `pos < self.len()`.
    fn sift_up(&mut self, mut pos: usize) {
        debug_assert!(pos < self.data.len());

        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.order.before(&self.data[pos], &self.data[parent]) {
                break;
            }
            self.data.swap(pos, parent);
            pos = parent;
        }
    }

    /// Moves the element at `pos` towards the leaves while one of its children
    /// comes before it.
    ///
    /// The right child is tested first and the left child second, against the
    /// winner so far, so a left child that comes before the right one takes
    /// precedence. When neither child comes before the other the result
    /// depends on this order, and it must not be changed.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.data.len();

        loop {
            let left = 2 * pos + 1;
            let right = left + 1;
            let mut candidate = pos;

            if right < len && self.order.before(&self.data[right], &self.data[candidate]) {
                candidate = right;
            }
            if left < len && self.order.before(&self.data[left], &self.data[candidate]) {
                candidate = left;
            }
            if candidate == pos {
                return;
            }

            self.data.swap(pos, candidate);
            pos = candidate;
        }
    }

    /// Restores the heap property over the whole of `data`, bottom-up.
    fn rebuild(&mut self) {
        for pos in (0..self.data.len() / 2).rev() {
            self.sift_down(pos);
        }
    }
}

impl<T, O> Heap<T, O> {
    /// Returns the ordering the heap was created with.
    #[must_use]
    pub fn order(&self) -> &O {
        &self.order
    }

    /// Returns an iterator visiting all values in the underlying vector, in
    /// arbitrary order.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let heap = Heap::from_vec(|a: &i32, b: &i32| a < b, vec![1, 2, 3, 4]);
    ///
    /// // Print 1, 2, 3, 4 in arbitrary order
    /// for x in heap.iter() {
    ///     println!("{x}");
    /// }
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter { iter: self.data.iter() }
    }

    /// Returns the top item in the heap without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`EmptyHeap`] if the heap holds no elements.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let mut heap = Heap::new(|a: &i32, b: &i32| a > b);
    /// assert!(heap.peek().is_err());
    ///
    /// heap.push(1);
    /// heap.push(5);
    /// heap.push(2);
    /// assert_eq!(heap.peek(), Ok(&5));
    /// ```
    ///
    /// # Time complexity
    ///
    /// Cost is *O*(1) in the worst case.
    pub fn peek(&self) -> Result<&T, EmptyHeap> {
        self.data.first().ok_or_else(EmptyHeap::of::<T>)
    }

    /// Returns a copy of the top item in the heap, or `default` if it is empty.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let mut heap = Heap::new(|a: &i32, b: &i32| a < b);
    /// assert_eq!(heap.peek_or(-1), -1);
    ///
    /// heap.push(3);
    /// assert_eq!(heap.peek_or(-1), 3);
    /// ```
    #[must_use]
    pub fn peek_or(&self, default: T) -> T
    where
        T: Clone,
    {
        self.data.first().cloned().unwrap_or(default)
    }

    /// Returns the number of elements the heap can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.data.capacity()
    }

    /// Reserves capacity for at least `additional` elements more than the
    /// current length.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    pub fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Discards as much additional capacity as possible.
    pub fn shrink_to_fit(&mut self) {
        self.data.shrink_to_fit();
    }

    /// Returns a slice of all values in the underlying vector, in storage order.
    ///
    /// The first element, if any, is the top of the heap.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data.as_slice()
    }

    /// Consumes the `Heap` and returns the underlying vector in storage order.
    #[must_use = "`self` will be dropped if the result is not used"]
    pub fn into_vec(self) -> Vec<T> {
        self.into()
    }

    /// Returns the number of elements in the heap.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Checks if the heap is empty.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let mut heap = Heap::new(|a: &i32, b: &i32| a < b);
    /// assert!(heap.is_empty());
    ///
    /// heap.push(3);
    /// assert!(!heap.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops all items from the heap.
    pub fn clear(&mut self) {
        self.data.clear();
    }
}

/// Borrowing iterator over a heap's storage, root first and otherwise in no
/// particular priority order. Returned by [`Heap::iter()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, T: 'a> {
    iter: slice::Iter<'a, T>,
}

impl<T: fmt::Debug> fmt::Debug for Iter<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Iter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter { iter: self.iter.clone() }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

/// Owning iterator over a heap's storage order, from `IntoIterator for Heap`.
#[derive(Clone)]
pub struct IntoIter<T> {
    iter: vec::IntoIter<T>,
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.iter.as_slice()).finish()
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.iter.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

/// An owning iterator that pops the elements of a `Heap` in priority order.
///
/// This `struct` is created by [`Heap::into_iter_sorted()`].
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone, Debug)]
pub struct IntoIterSorted<T, O> {
    inner: Heap<T, O>,
}

impl<T, O: Before<T>> Iterator for IntoIterSorted<T, O> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, O: Before<T>> ExactSizeIterator for IntoIterSorted<T, O> {}

impl<T, O: Before<T>> FusedIterator for IntoIterSorted<T, O> {}

unsafe impl<T, O: Before<T>> TrustedLen for IntoIterSorted<T, O> {}

/// A destructive iterator that pops the elements of a `Heap` in priority order.
///
/// This `struct` is created by [`Heap::drain_sorted()`]. See its
/// documentation for more.
///
/// Unlike draining iterators that empty their collection when dropped, a
/// `DrainSorted` only ever removes the items it has yielded.
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Debug)]
pub struct DrainSorted<'a, T, O> {
    inner: &'a mut Heap<T, O>,
}

impl<T, O: Before<T>> Iterator for DrainSorted<'_, T, O> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        self.inner.pop().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let exact = self.inner.len();
        (exact, Some(exact))
    }
}

impl<T, O: Before<T>> ExactSizeIterator for DrainSorted<'_, T, O> {}

impl<T, O: Before<T>> FusedIterator for DrainSorted<'_, T, O> {}

unsafe impl<T, O: Before<T>> TrustedLen for DrainSorted<'_, T, O> {}

impl<T, O: Before<T> + Default> From<Vec<T>> for Heap<T, O> {
    /// Converts a `Vec<T>` into a `Heap<T, O>` under the default ordering.
    ///
    /// This conversion happens in-place, and has *O*(*n*) time complexity.
    fn from(vec: Vec<T>) -> Heap<T, O> {
        Heap::from_vec(O::default(), vec)
    }
}

impl<T, O: Before<T> + Default, const N: usize> From<[T; N]> for Heap<T, O> {
    /// ```
    /// use predicate_heap::{Heap, MinFirst};
    ///
    /// let mut h1: Heap<_, MinFirst<_>> = Heap::from([1, 4, 2, 3]);
    /// let mut h2: Heap<_, MinFirst<_>> = [1, 4, 2, 3].into();
    /// while let Some((a, b)) = h1.pop().ok().zip(h2.pop().ok()) {
    ///     assert_eq!(a, b);
    /// }
    /// ```
    fn from(arr: [T; N]) -> Self {
        Self::from_iter(arr)
    }
}

impl<T, O> From<Heap<T, O>> for Vec<T> {
    /// Converts a `Heap<T, O>` into a `Vec<T>` in storage order.
    ///
    /// This conversion requires no data movement or allocation, and has
    /// constant time complexity.
    fn from(heap: Heap<T, O>) -> Vec<T> {
        heap.data
    }
}

impl<T, O: Before<T> + Default> FromIterator<T> for Heap<T, O> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Heap<T, O> {
        Heap::from(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<T, O> IntoIterator for Heap<T, O> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    /// Creates a consuming iterator, that is, one that moves each value out of
    /// the heap in arbitrary order. The heap cannot be used after calling this.
    ///
    /// ```
    /// use predicate_heap::Heap;
    /// let heap = Heap::from_vec(|a: &i32, b: &i32| a < b, vec![1, 2, 3, 4]);
    ///
    /// // Print 1, 2, 3, 4 in arbitrary order
    /// for x in heap.into_iter() {
    ///     // x has type i32, not &i32
    ///     println!("{x}");
    /// }
    /// ```
    fn into_iter(self) -> IntoIter<T> {
        IntoIter { iter: self.data.into_iter() }
    }
}

impl<'a, T, O> IntoIterator for &'a Heap<T, O> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<T, O: Before<T>> Extend<T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iterator = iter.into_iter();
        let (lower, _) = iterator.size_hint();

        self.reserve(lower);

        iterator.for_each(move |elem| self.push(elem));
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, item: T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}

impl<'a, T: 'a + Copy, O: Before<T>> Extend<&'a T> for Heap<T, O> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_one(&mut self, &item: &'a T) {
        self.push(item);
    }

    #[inline]
    #[cfg(feature = "extend_one")]
    fn extend_reserve(&mut self, additional: usize) {
        self.reserve(additional);
    }
}
