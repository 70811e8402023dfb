//! Deques behind a trait object.
//!
//! This module provides the dynamic-dispatch view of the backings:
//!
//! - [`Deque`]: object-safe capability trait implemented by both backings
//! - [`DynDeque`]: owning handle over a `Box<dyn Deque<T>>`
//!
//! Every call through a [`Deque`] trait object goes through the vtable. In
//! exchange the backing can be chosen, or even replaced, at runtime while
//! callers keep a single type.
//!
//! # Examples
//!
//! ```rust
//! use bideque::backing::{CircularBufferDeque, LinkedNodeDeque};
//! use bideque::dispatch::Deque;
//!
//! fn fill(deque: &mut dyn Deque<i32>) {
//!     deque.push_back(1);
//!     deque.push_back(2);
//!     deque.push_front(0);
//! }
//!
//! let mut backings: Vec<Box<dyn Deque<i32>>> = vec![
//!     Box::new(CircularBufferDeque::new()),
//!     Box::new(LinkedNodeDeque::new()),
//! ];
//! for backing in &mut backings {
//!     fill(backing.as_mut());
//!     assert_eq!(backing.front(), Ok(&0));
//!     assert_eq!(backing.len(), 3);
//! }
//! ```

mod dyn_deque;

pub use dyn_deque::DynDeque;

use dyn_clone::DynClone;

use crate::DequeError;
use crate::backing::{BackingKind, CircularBufferDeque, LinkedNodeDeque};

/// Capability set shared by every deque backing.
///
/// The trait is object safe, so `&mut dyn Deque<T>` and `Box<dyn Deque<T>>`
/// give identical observable behaviour whichever backing sits behind them.
/// Implementations must uphold:
///
/// - `len()` equals successful pushes minus successful pops
/// - `is_empty()` holds exactly when `len() == 0`
/// - `pop_front`, `pop_back`, `front` and `back` return
///   [`DequeError::EmptyContainer`] on an empty deque and leave it usable
pub trait Deque<T>: DynClone {
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

    /// Reports which backing implements this deque.
    fn kind(&self) -> BackingKind;

    /// Moves the contents into a new boxed deque of the same backing,
    /// leaving `self` in its moved-from empty state.
    fn take_boxed(&mut self) -> Box<dyn Deque<T>>;
}

dyn_clone::clone_trait_object!(<T> Deque<T>);

impl<T: Clone + 'static> Deque<T> for CircularBufferDeque<T> {
    fn push_front(&mut self, element: T) {
        Self::push_front(self, element);
    }

    fn push_back(&mut self, element: T) {
        Self::push_back(self, element);
    }

    fn pop_front(&mut self) -> Result<T, DequeError> {
        Self::pop_front(self)
    }

    fn pop_back(&mut self) -> Result<T, DequeError> {
        Self::pop_back(self)
    }

    fn front(&self) -> Result<&T, DequeError> {
        Self::front(self)
    }

    fn back(&self) -> Result<&T, DequeError> {
        Self::back(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn kind(&self) -> BackingKind {
        BackingKind::Circular
    }

    fn take_boxed(&mut self) -> Box<dyn Deque<T>> {
        Box::new(self.take())
    }
}

impl<T: Clone + 'static> Deque<T> for LinkedNodeDeque<T> {
    fn push_front(&mut self, element: T) {
        Self::push_front(self, element);
    }

    fn push_back(&mut self, element: T) {
        Self::push_back(self, element);
    }

    fn pop_front(&mut self) -> Result<T, DequeError> {
        Self::pop_front(self)
    }

    fn pop_back(&mut self) -> Result<T, DequeError> {
        Self::pop_back(self)
    }

    fn front(&self) -> Result<&T, DequeError> {
        Self::front(self)
    }

    fn back(&self) -> Result<&T, DequeError> {
        Self::back(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn kind(&self) -> BackingKind {
        BackingKind::Linked
    }

    fn take_boxed(&mut self) -> Box<dyn Deque<T>> {
        Box::new(self.take())
    }
}
