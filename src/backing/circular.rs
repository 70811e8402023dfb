//! Growable circular buffer deque.
//!
//! This module provides [`CircularBufferDeque`], a deque backed by a single
//! contiguous buffer whose logical start and end wrap modulo its capacity.
//!
//! # Layout
//!
//! The buffer holds `count` live elements starting at `front_index` and
//! wrapping around the physical end. `back_index` points *at* the last live
//! element, not one past it, so a deque holding one element has
//! `front_index == back_index`.
//!
//! ```text
//! capacity = 6, count = 4, front_index = 4, back_index = 1
//!
//!   index:  0    1    2    3    4    5
//!         [ c ][ d ][ _ ][ _ ][ a ][ b ]
//!                ^              ^
//!            back_index     front_index
//!
//!   logical order: a, b, c, d
//! ```
//!
//! When the deque drains to zero elements both indices are reset to `0`
//! (the canonical empty state), so repeated fill/drain cycles always start
//! from the same layout.
//!
//! # Growth
//!
//! A push into a full buffer first allocates a buffer of
//! [`GROWTH_FACTOR`] times the capacity, moves the live elements into it in
//! logical order starting at index `0`, and discards the old buffer.
//! The total cost of `n` pushes is therefore O(n).
//!
//! # Examples
//!
//! ```rust
//! use bideque::backing::CircularBufferDeque;
//!
//! let mut deque = CircularBufferDeque::new();
//! deque.push_back(1);
//! deque.push_back(2);
//! deque.push_front(0);
//!
//! assert_eq!(deque.front(), Ok(&0));
//! assert_eq!(deque.back(), Ok(&2));
//! assert_eq!(deque.pop_back(), Ok(2));
//! assert_eq!(deque.len(), 2);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use super::{DEFAULT_CAPACITY, GROWTH_FACTOR};
use crate::DequeError;

/// A double-ended queue backed by a growable circular buffer.
///
/// # Time Complexity
///
/// | Operation    | Complexity      |
/// |--------------|-----------------|
/// | `push_front` | O(1) amortized  |
/// | `push_back`  | O(1) amortized  |
/// | `pop_front`  | O(1)            |
/// | `pop_back`   | O(1)            |
/// | `front`      | O(1)            |
/// | `back`       | O(1)            |
/// | `len`        | O(1)            |
/// | `clear`      | O(n)            |
///
/// # Examples
///
/// ```rust
/// use bideque::backing::CircularBufferDeque;
///
/// let mut deque: CircularBufferDeque<i32> = (0..11).collect();
/// assert_eq!(deque.len(), 11);
/// assert_eq!(deque.capacity(), 20);
/// assert_eq!(deque.pop_front(), Ok(0));
/// ```
#[derive(Clone)]
pub struct CircularBufferDeque<T> {
    /// Physical storage; `buffer.len()` is the capacity. A slot is `Some`
    /// exactly when it holds a live element.
    buffer: Vec<Option<T>>,
    front_index: usize,
    back_index: usize,
    count: usize,
}

impl<T> CircularBufferDeque<T> {
    /// Creates an empty deque with [`DEFAULT_CAPACITY`] slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty deque with room for `capacity` elements before the
    /// first growth.
    ///
    /// A capacity of `0` allocates nothing; the first push then grows the
    /// buffer to [`DEFAULT_CAPACITY`].
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: empty_slots(capacity),
            front_index: 0,
            back_index: 0,
            count: 0,
        }
    }

    /// The moved-from state: empty, with no buffer at all.
    const fn unallocated() -> Self {
        Self {
            buffer: Vec::new(),
            front_index: 0,
            back_index: 0,
            count: 0,
        }
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the number of elements in the deque.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns the number of elements the buffer holds before it must grow.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Prepends an element, growing the buffer first if it is full.
    pub fn push_front(&mut self, element: T) {
        if self.count == self.capacity() {
            self.grow();
        }
        if self.count > 0 {
            self.front_index = self.retreat(self.front_index);
        }
        self.buffer[self.front_index] = Some(element);
        self.count += 1;
    }

    /// Appends an element, growing the buffer first if it is full.
    pub fn push_back(&mut self, element: T) {
        if self.count == self.capacity() {
            self.grow();
        }
        if self.count > 0 {
            self.back_index = self.advance(self.back_index);
        }
        self.buffer[self.back_index] = Some(element);
        self.count += 1;
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        let element = self.take_slot(self.front_index)?;
        self.count -= 1;
        if self.count == 0 {
            self.reset_indices();
        } else {
            self.front_index = self.advance(self.front_index);
        }
        Ok(element)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        let element = self.take_slot(self.back_index)?;
        self.count -= 1;
        if self.count == 0 {
            self.reset_indices();
        } else {
            self.back_index = self.retreat(self.back_index);
        }
        Ok(element)
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn front(&self) -> Result<&T, DequeError> {
        self.slot(self.front_index)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn back(&self) -> Result<&T, DequeError> {
        self.slot(self.back_index)
    }

    /// Drops every element and returns to the canonical empty state.
    ///
    /// The buffer keeps its capacity.
    pub fn clear(&mut self) {
        let capacity = self.capacity();
        for offset in 0..self.count {
            self.buffer[(self.front_index + offset) % capacity] = None;
        }
        tracing::trace!(dropped = self.count, capacity, "cleared circular buffer");
        self.count = 0;
        self.reset_indices();
    }

    /// Moves the contents out into a new deque, leaving `self` empty with
    /// no buffer. The next push on `self` allocates [`DEFAULT_CAPACITY`]
    /// slots again.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use bideque::backing::CircularBufferDeque;
    ///
    /// let mut source: CircularBufferDeque<i32> = (1..=3).collect();
    /// let moved = source.take();
    ///
    /// assert_eq!(moved.len(), 3);
    /// assert!(source.is_empty());
    /// assert_eq!(source.capacity(), 0);
    ///
    /// source.push_back(7);
    /// assert_eq!(source.front(), Ok(&7));
    /// ```
    #[must_use = "the moved-out elements are dropped if the result is unused"]
    pub fn take(&mut self) -> Self {
        tracing::trace!(count = self.count, "moved circular buffer contents out");
        std::mem::replace(self, Self::unallocated())
    }

    /// Returns the element at logical position `index` (0 is the front).
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.count {
            return None;
        }
        let physical = (self.front_index + index) % self.capacity();
        self.buffer.get(physical).and_then(Option::as_ref)
    }

    /// Creates an iterator over references to the elements, front to back.
    #[must_use]
    pub const fn iter(&self) -> CircularBufferDequeIterator<'_, T> {
        CircularBufferDequeIterator {
            deque: self,
            front_offset: 0,
            back_offset: self.count,
        }
    }

    fn slot(&self, index: usize) -> Result<&T, DequeError> {
        if self.count == 0 {
            return Err(DequeError::EmptyContainer);
        }
        self.buffer
            .get(index)
            .and_then(Option::as_ref)
            .ok_or(DequeError::EmptyContainer)
    }

    fn take_slot(&mut self, index: usize) -> Result<T, DequeError> {
        if self.count == 0 {
            return Err(DequeError::EmptyContainer);
        }
        self.buffer
            .get_mut(index)
            .and_then(Option::take)
            .ok_or(DequeError::EmptyContainer)
    }

    const fn reset_indices(&mut self) {
        self.front_index = 0;
        self.back_index = 0;
    }

    fn advance(&self, index: usize) -> usize {
        (index + 1) % self.capacity()
    }

    fn retreat(&self, index: usize) -> usize {
        let capacity = self.capacity();
        (index + capacity - 1) % capacity
    }

    /// Replaces the buffer with one of [`GROWTH_FACTOR`] times the capacity,
    /// moving the live elements to indices `0..count` in logical order.
    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = if old_capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            old_capacity * GROWTH_FACTOR
        };

        let mut grown = Vec::with_capacity(new_capacity);
        for offset in 0..self.count {
            let index = (self.front_index + offset) % old_capacity;
            grown.push(self.buffer[index].take());
        }
        grown.resize_with(new_capacity, || None);

        self.buffer = grown;
        self.front_index = 0;
        self.back_index = self.count.saturating_sub(1);

        tracing::debug!(
            old_capacity,
            new_capacity,
            count = self.count,
            "grew circular buffer"
        );
    }
}

fn empty_slots<T>(capacity: usize) -> Vec<Option<T>> {
    std::iter::repeat_with(|| None).take(capacity).collect()
}

impl<T> Default for CircularBufferDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for CircularBufferDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for CircularBufferDeque<T> {}

impl<T: fmt::Debug> fmt::Debug for CircularBufferDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Hash> Hash for CircularBufferDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> FromIterator<T> for CircularBufferDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for CircularBufferDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T> IntoIterator for CircularBufferDeque<T> {
    type Item = T;
    type IntoIter = CircularBufferDequeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        CircularBufferDequeIntoIterator { deque: self }
    }
}

impl<'a, T> IntoIterator for &'a CircularBufferDeque<T> {
    type Item = &'a T;
    type IntoIter = CircularBufferDequeIterator<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over references to the elements of a [`CircularBufferDeque`].
pub struct CircularBufferDequeIterator<'a, T> {
    deque: &'a CircularBufferDeque<T>,
    front_offset: usize,
    back_offset: usize,
}

impl<'a, T> Iterator for CircularBufferDequeIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front_offset >= self.back_offset {
            return None;
        }

        let result = self.deque.get(self.front_offset);
        self.front_offset += 1;
        result
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back_offset - self.front_offset;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for CircularBufferDequeIterator<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front_offset >= self.back_offset {
            return None;
        }

        self.back_offset -= 1;
        self.deque.get(self.back_offset)
    }
}

impl<T> ExactSizeIterator for CircularBufferDequeIterator<'_, T> {}

/// Owning iterator over the elements of a [`CircularBufferDeque`].
pub struct CircularBufferDequeIntoIterator<T> {
    deque: CircularBufferDeque<T>,
}

impl<T> Iterator for CircularBufferDequeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for CircularBufferDequeIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for CircularBufferDequeIntoIterator<T> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for CircularBufferDeque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct CircularBufferDequeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for CircularBufferDequeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = CircularBufferDeque<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq
            .size_hint()
            .unwrap_or(0)
            .clamp(DEFAULT_CAPACITY, MAX_PREALLOCATE);
        let mut deque = CircularBufferDeque::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            deque.push_back(element);
        }
        Ok(deque)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for CircularBufferDeque<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(CircularBufferDequeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    fn indices<T>(deque: &CircularBufferDeque<T>) -> (usize, usize) {
        (deque.front_index, deque.back_index)
    }

    #[rstest]
    fn test_new_uses_default_capacity() {
        let deque: CircularBufferDeque<i32> = CircularBufferDeque::new();
        assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
        assert_eq!(indices(&deque), (0, 0));
    }

    #[rstest]
    fn test_first_push_front_occupies_canonical_slot() {
        let mut deque = CircularBufferDeque::new();
        deque.push_front(1);
        assert_eq!(indices(&deque), (0, 0));
        assert_eq!(deque.buffer[0], Some(1));
    }

    #[rstest]
    fn test_first_push_back_occupies_canonical_slot() {
        let mut deque = CircularBufferDeque::new();
        deque.push_back(1);
        assert_eq!(indices(&deque), (0, 0));
    }

    #[rstest]
    fn test_push_front_wraps_to_end_of_buffer() {
        let mut deque = CircularBufferDeque::new();
        deque.push_back(1);
        deque.push_front(0);
        assert_eq!(indices(&deque), (DEFAULT_CAPACITY - 1, 0));
        assert_eq!(deque.buffer[DEFAULT_CAPACITY - 1], Some(0));
    }

    #[rstest]
    #[case::pop_front(true)]
    #[case::pop_back(false)]
    fn test_drain_resets_to_canonical_empty_state(#[case] from_front: bool) {
        let mut deque = CircularBufferDeque::new();
        deque.push_front(1);
        deque.push_front(2);
        deque.push_back(3);
        while !deque.is_empty() {
            let popped = if from_front {
                deque.pop_front()
            } else {
                deque.pop_back()
            };
            assert!(popped.is_ok());
        }
        assert_eq!(indices(&deque), (0, 0));
    }

    #[rstest]
    fn test_alternating_push_pop_does_not_drift() {
        let mut deque = CircularBufferDeque::new();
        for value in 0..(DEFAULT_CAPACITY * 3) {
            deque.push_back(value);
            assert_eq!(deque.pop_front(), Ok(value));
            assert_eq!(indices(&deque), (0, 0));

            deque.push_front(value);
            assert_eq!(deque.pop_back(), Ok(value));
            assert_eq!(indices(&deque), (0, 0));
        }
        assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
    }

    #[rstest]
    fn test_grow_from_wrapped_layout_compacts_in_logical_order() {
        let mut deque = CircularBufferDeque::with_capacity(4);
        deque.push_back(3);
        deque.push_back(4);
        deque.push_front(2);
        deque.push_front(1);
        // [3, 4, 1, 2] physically, front at index 2
        assert_eq!(indices(&deque), (2, 1));

        deque.push_back(5);

        assert_eq!(deque.capacity(), 8);
        assert_eq!(indices(&deque), (0, 4));
        let physical: Vec<Option<i32>> = deque.buffer.clone();
        assert_eq!(
            physical,
            vec![Some(1), Some(2), Some(3), Some(4), Some(5), None, None, None]
        );
    }

    #[rstest]
    fn test_grow_triggered_by_push_front() {
        let mut deque: CircularBufferDeque<i32> = CircularBufferDeque::with_capacity(2);
        deque.push_front(2);
        deque.push_front(1);
        deque.push_front(0);
        assert_eq!(deque.capacity(), 4);
        assert_eq!(deque.iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(indices(&deque), (3, 1));
    }

    #[rstest]
    fn test_zero_capacity_grows_to_default() {
        let mut deque = CircularBufferDeque::with_capacity(0);
        assert_eq!(deque.capacity(), 0);
        assert_eq!(deque.front(), Err(DequeError::EmptyContainer));
        assert_eq!(deque.pop_back(), Err(DequeError::EmptyContainer));

        deque.push_front(42);
        assert_eq!(deque.capacity(), DEFAULT_CAPACITY);
        assert_eq!(deque.front(), Ok(&42));
        assert_eq!(deque.back(), Ok(&42));
    }

    #[rstest]
    fn test_take_leaves_unallocated_source() {
        let mut deque: CircularBufferDeque<i32> = (0..5).collect();
        let moved = deque.take();
        assert_eq!(moved.len(), 5);
        assert_eq!(deque.capacity(), 0);
        assert_eq!(indices(&deque), (0, 0));
        assert!(deque.is_empty());
    }

    #[rstest]
    fn test_clear_keeps_capacity_and_resets_indices() {
        let mut deque: CircularBufferDeque<i32> = (0..15).collect();
        deque.pop_front().unwrap();
        deque.clear();
        assert_eq!(deque.capacity(), 20);
        assert_eq!(indices(&deque), (0, 0));
        assert!(deque.buffer.iter().all(Option::is_none));
    }

    #[rstest]
    fn test_clear_drops_live_elements() {
        struct DropCounter(Rc<Cell<usize>>);
        impl Drop for DropCounter {
            fn drop(&mut self) {
                self.0.set(self.0.get() + 1);
            }
        }

        let counter = Rc::new(Cell::new(0));
        let mut deque = CircularBufferDeque::new();
        for _ in 0..4 {
            deque.push_back(DropCounter(Rc::clone(&counter)));
        }
        deque.clear();
        assert_eq!(counter.get(), 4);
    }

    #[rstest]
    fn test_clone_copies_physical_layout() {
        let mut deque = CircularBufferDeque::new();
        deque.push_back(1);
        deque.push_front(0);
        let cloned = deque.clone();
        assert_eq!(indices(&cloned), indices(&deque));
        assert_eq!(cloned.capacity(), deque.capacity());
        assert_eq!(cloned, deque);
    }

    #[rstest]
    fn test_equality_ignores_physical_layout() {
        let mut wrapped = CircularBufferDeque::new();
        wrapped.push_back(2);
        wrapped.push_front(1);
        let linear: CircularBufferDeque<i32> = vec![1, 2].into_iter().collect();
        assert_ne!(indices(&wrapped), indices(&linear));
        assert_eq!(wrapped, linear);
    }

    #[rstest]
    fn test_get_out_of_bounds() {
        let deque: CircularBufferDeque<i32> = (0..3).collect();
        assert_eq!(deque.get(2), Some(&2));
        assert_eq!(deque.get(3), None);
    }

    #[rstest]
    fn test_iterator_both_ends() {
        let mut deque = CircularBufferDeque::with_capacity(3);
        deque.push_back(2);
        deque.push_back(3);
        deque.push_front(1);
        let mut iter = deque.iter();
        assert_eq!(iter.len(), 3);
        assert_eq!(iter.next(), Some(&1));
        assert_eq!(iter.next_back(), Some(&3));
        assert_eq!(iter.next(), Some(&2));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next_back(), None);
    }

    #[rstest]
    fn test_into_iterator_reversed() {
        let deque: CircularBufferDeque<i32> = (1..=4).collect();
        let collected: Vec<i32> = deque.into_iter().rev().collect();
        assert_eq!(collected, vec![4, 3, 2, 1]);
    }

    #[rstest]
    fn test_debug_lists_logical_order() {
        let mut deque = CircularBufferDeque::new();
        deque.push_back(2);
        deque.push_front(1);
        assert_eq!(format!("{deque:?}"), "[1, 2]");
    }
}
