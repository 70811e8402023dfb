use std::fmt;

use super::Deque;
use crate::DequeError;
use crate::backing::{BackingKind, CircularBufferDeque, LinkedNodeDeque};

/// A deque whose backing is chosen at runtime.
///
/// `DynDeque` owns a `Box<dyn Deque<T>>` and exposes the deque operations as
/// a fixed public surface; each call is forwarded through the trait object.
/// The backing can be replaced with [`DynDeque::switch_backing`] without
/// changing the handle's type or its observable contents.
///
/// # Examples
///
/// ```rust
/// use bideque::backing::BackingKind;
/// use bideque::dispatch::DynDeque;
///
/// let mut deque = DynDeque::with_kind(BackingKind::Circular);
/// deque.push_back(1);
/// deque.push_back(2);
///
/// deque.switch_backing(BackingKind::Linked);
/// assert_eq!(deque.kind(), BackingKind::Linked);
/// assert_eq!(deque.pop_front(), Ok(1));
/// assert_eq!(deque.pop_front(), Ok(2));
/// ```
#[derive(Clone)]
pub struct DynDeque<T> {
    backing: Box<dyn Deque<T>>,
}

impl<T: Clone + 'static> DynDeque<T> {
    /// Creates an empty deque backed by a [`CircularBufferDeque`].
    #[must_use]
    pub fn circular() -> Self {
        Self::from_backing(Box::new(CircularBufferDeque::new()))
    }

    /// Creates an empty deque backed by a [`LinkedNodeDeque`].
    #[must_use]
    pub fn linked() -> Self {
        Self::from_backing(Box::new(LinkedNodeDeque::new()))
    }

    /// Creates an empty deque on the given backing.
    #[must_use]
    pub fn with_kind(kind: BackingKind) -> Self {
        match kind {
            BackingKind::Circular => Self::circular(),
            BackingKind::Linked => Self::linked(),
        }
    }

    /// Replaces the backing with an empty one of `kind` and moves every
    /// element across, front to back. Does nothing if `kind` is already
    /// active.
    pub fn switch_backing(&mut self, kind: BackingKind) {
        let from = self.kind();
        if from == kind {
            return;
        }

        let mut previous = std::mem::replace(&mut self.backing, Self::with_kind(kind).backing);
        while let Ok(element) = previous.pop_front() {
            self.backing.push_back(element);
        }

        tracing::debug!(%from, to = %kind, count = self.len(), "switched deque backing");
    }
}

impl<T> DynDeque<T> {
    /// Wraps an existing backing.
    #[must_use]
    pub fn from_backing(backing: Box<dyn Deque<T>>) -> Self {
        Self { backing }
    }

    /// Returns the boxed backing.
    #[must_use]
    pub fn into_backing(self) -> Box<dyn Deque<T>> {
        self.backing
    }

    /// Reports which backing is active.
    #[must_use]
    pub fn kind(&self) -> BackingKind {
        self.backing.kind()
    }

    /// Prepends an element.
    pub fn push_front(&mut self, element: T) {
        self.backing.push_front(element);
    }

    /// Appends an element.
    pub fn push_back(&mut self, element: T) {
        self.backing.push_back(element);
    }

    /// Removes and returns the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        self.backing.pop_front()
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        self.backing.pop_back()
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn front(&self) -> Result<&T, DequeError> {
        self.backing.front()
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn back(&self) -> Result<&T, DequeError> {
        self.backing.back()
    }

    /// Returns `true` if the deque contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.backing.is_empty()
    }

    /// Returns the number of elements in the deque.
    #[must_use]
    pub fn len(&self) -> usize {
        self.backing.len()
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        self.backing.clear();
    }

    /// Moves the contents into a new handle on the same backing kind,
    /// leaving `self` empty and usable.
    #[must_use = "the moved-out elements are dropped if the result is unused"]
    pub fn take(&mut self) -> Self {
        Self {
            backing: self.backing.take_boxed(),
        }
    }
}

impl<T> fmt::Debug for DynDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynDeque")
            .field("kind", &self.kind())
            .field("len", &self.len())
            .finish()
    }
}

impl<T: Clone + 'static> Default for DynDeque<T> {
    fn default() -> Self {
        Self::circular()
    }
}

impl<T: Clone + 'static> FromIterator<T> for DynDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::default();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for DynDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}
