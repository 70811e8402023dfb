//! Deques composed over a concrete backing.
//!
//! This module provides the static-composition view of the backings:
//! [`ComposedDeque`] holds its backing by value and forwards every operation
//! straight to it. The backing type is a generic parameter, so each call is
//! resolved at compile time and inlined; the price is that the backing of a
//! given `ComposedDeque` type can never change at runtime.
//!
//! [`Backing`] is the compile-time contract the wrapper is generic over. It
//! is only ever used as a bound, never as a trait object, and is independent
//! of [`crate::dispatch::Deque`]; the two wrappers share no code.
//!
//! # Examples
//!
//! ```rust
//! use bideque::composed::{CircularComposedDeque, LinkedComposedDeque};
//!
//! let mut circular: CircularComposedDeque<i32> = CircularComposedDeque::new();
//! let mut linked: LinkedComposedDeque<i32> = LinkedComposedDeque::new();
//!
//! for value in [1, 2, 3] {
//!     circular.push_back(value);
//!     linked.push_back(value);
//! }
//! circular.push_front(0);
//! linked.push_front(0);
//!
//! assert_eq!(circular.pop_back(), linked.pop_back());
//! assert_eq!(circular.front(), linked.front());
//! assert_eq!(circular.len(), linked.len());
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use crate::DequeError;
use crate::backing::{BackingKind, CircularBufferDeque, LinkedNodeDeque};

/// Compile-time contract for a backing held by [`ComposedDeque`].
pub trait Backing<T>: Default {
    /// The backing this type implements.
    const KIND: BackingKind;

    /// Prepends an element.
    fn push_front(&mut self, element: T);

    /// Appends an element.
    fn push_back(&mut self, element: T);

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    fn pop_front(&mut self) -> Result<T, DequeError>;

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    fn pop_back(&mut self) -> Result<T, DequeError>;

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    fn front(&self) -> Result<&T, DequeError>;

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    fn back(&self) -> Result<&T, DequeError>;

    /// Returns `true` if the deque contains no elements.
    fn is_empty(&self) -> bool;

    /// Returns the number of elements in the deque.
    fn len(&self) -> usize;

    /// Removes every element.
    fn clear(&mut self);

    /// Moves the contents out, leaving `self` in its moved-from empty state.
    #[must_use]
    fn take(&mut self) -> Self;
}

impl<T> Backing<T> for CircularBufferDeque<T> {
    const KIND: BackingKind = BackingKind::Circular;

    #[inline]
    fn push_front(&mut self, element: T) {
        Self::push_front(self, element);
    }

    #[inline]
    fn push_back(&mut self, element: T) {
        Self::push_back(self, element);
    }

    #[inline]
    fn pop_front(&mut self) -> Result<T, DequeError> {
        Self::pop_front(self)
    }

    #[inline]
    fn pop_back(&mut self) -> Result<T, DequeError> {
        Self::pop_back(self)
    }

    #[inline]
    fn front(&self) -> Result<&T, DequeError> {
        Self::front(self)
    }

    #[inline]
    fn back(&self) -> Result<&T, DequeError> {
        Self::back(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn take(&mut self) -> Self {
        Self::take(self)
    }
}

impl<T> Backing<T> for LinkedNodeDeque<T> {
    const KIND: BackingKind = BackingKind::Linked;

    #[inline]
    fn push_front(&mut self, element: T) {
        Self::push_front(self, element);
    }

    #[inline]
    fn push_back(&mut self, element: T) {
        Self::push_back(self, element);
    }

    #[inline]
    fn pop_front(&mut self) -> Result<T, DequeError> {
        Self::pop_front(self)
    }

    #[inline]
    fn pop_back(&mut self) -> Result<T, DequeError> {
        Self::pop_back(self)
    }

    #[inline]
    fn front(&self) -> Result<&T, DequeError> {
        Self::front(self)
    }

    #[inline]
    fn back(&self) -> Result<&T, DequeError> {
        Self::back(self)
    }

    #[inline]
    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    #[inline]
    fn len(&self) -> usize {
        Self::len(self)
    }

    #[inline]
    fn clear(&mut self) {
        Self::clear(self);
    }

    #[inline]
    fn take(&mut self) -> Self {
        Self::take(self)
    }
}

/// A deque that owns a backing `B` and forwards to it without indirection.
///
/// # Examples
///
/// ```rust
/// use bideque::backing::{BackingKind, LinkedNodeDeque};
/// use bideque::composed::ComposedDeque;
///
/// let mut deque: ComposedDeque<&str, LinkedNodeDeque<&str>> = ComposedDeque::new();
/// deque.push_back("tail");
/// deque.push_front("head");
///
/// assert_eq!(deque.kind(), BackingKind::Linked);
/// assert_eq!(deque.front(), Ok(&"head"));
/// assert_eq!(deque.into_backing().len(), 2);
/// ```
pub struct ComposedDeque<T, B: Backing<T>> {
    backing: B,
    marker: PhantomData<T>,
}

/// [`ComposedDeque`] over a [`CircularBufferDeque`].
pub type CircularComposedDeque<T> = ComposedDeque<T, CircularBufferDeque<T>>;

/// [`ComposedDeque`] over a [`LinkedNodeDeque`].
pub type LinkedComposedDeque<T> = ComposedDeque<T, LinkedNodeDeque<T>>;

impl<T, B: Backing<T>> ComposedDeque<T, B> {
    /// Creates an empty deque on a default-constructed backing.
    #[must_use]
    pub fn new() -> Self {
        Self::from_backing(B::default())
    }

    /// Wraps an existing backing, keeping its contents.
    #[must_use]
    pub const fn from_backing(backing: B) -> Self {
        Self {
            backing,
            marker: PhantomData,
        }
    }

    /// Returns a reference to the held backing.
    #[must_use]
    pub const fn backing(&self) -> &B {
        &self.backing
    }

    /// Unwraps the held backing.
    #[must_use]
    pub fn into_backing(self) -> B {
        self.backing
    }

    /// Reports which backing this type is composed over.
    #[must_use]
    pub const fn kind(&self) -> BackingKind {
        B::KIND
    }

    /// Prepends an element.
    #[inline]
    pub fn push_front(&mut self, element: T) {
        self.backing.push_front(element);
    }

    /// Appends an element.
    #[inline]
    pub fn push_back(&mut self, element: T) {
        self.backing.push_back(element);
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    #[inline]
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        self.backing.pop_front()
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    #[inline]
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        self.backing.pop_back()
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    #[inline]
    pub fn front(&self) -> Result<&T, DequeError> {
        self.backing.front()
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    #[inline]
    pub fn back(&self) -> Result<&T, DequeError> {
        self.backing.back()
    }

    /// Returns `true` if the deque contains no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Returns the number of elements in the deque.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Removes every element.
    #[inline]
    pub fn clear(&mut self) {
        self.backing.clear();
    }

    /// Moves the contents into a new deque, leaving `self` in the backing's
    /// moved-from empty state.
    #[must_use = "the moved-out elements are dropped if the result is unused"]
    pub fn take(&mut self) -> Self {
        Self::from_backing(self.backing.take())
    }
}

impl<T, B: Backing<T>> Default for ComposedDeque<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, B: Backing<T> + Clone> Clone for ComposedDeque<T, B> {
    fn clone(&self) -> Self {
        Self::from_backing(self.backing.clone())
    }
}

impl<T, B: Backing<T> + PartialEq> PartialEq for ComposedDeque<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.backing == other.backing
    }
}

impl<T, B: Backing<T> + Eq> Eq for ComposedDeque<T, B> {}

impl<T, B: Backing<T> + Hash> Hash for ComposedDeque<T, B> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.backing.hash(state);
    }
}

impl<T, B: Backing<T> + fmt::Debug> fmt::Debug for ComposedDeque<T, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ComposedDeque").field(&self.backing).finish()
    }
}

impl<T, B: Backing<T>> FromIterator<T> for ComposedDeque<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T, B: Backing<T>> Extend<T> for ComposedDeque<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T, B: Backing<T> + IntoIterator<Item = T>> IntoIterator for ComposedDeque<T, B> {
    type Item = T;
    type IntoIter = B::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.backing.into_iter()
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T, B: Backing<T> + serde::Serialize> serde::Serialize for ComposedDeque<T, B> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.backing.serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T, B: Backing<T> + serde::Deserialize<'de>> serde::Deserialize<'de>
    for ComposedDeque<T, B>
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        B::deserialize(deserializer).map(Self::from_backing)
    }
}
