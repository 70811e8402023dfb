//! Doubly-linked node chain deque.
//!
//! This module provides [`LinkedNodeDeque`], a deque whose elements live in
//! individually allocated nodes.
//!
//! # Ownership
//!
//! The chain is an owned list: the container owns the head node, and every
//! node owns its successor through a strong `next` link. The `previous` link
//! is a [`Weak`] reference, a non-owning lookup that never keeps a node alive
//! and never decides destruction order. The `tail` field is a second handle
//! onto the last node so that `back` can borrow it in O(1); a node is
//! detached from both its predecessor and `tail` before it is released.
//!
//! Releasing the chain (on `clear` or drop) walks it from head to tail,
//! unlinking each node before advancing, so arbitrarily long chains never
//! recurse during destruction.
//!
//! # Examples
//!
//! ```rust
//! use bideque::backing::LinkedNodeDeque;
//!
//! let mut deque = LinkedNodeDeque::new();
//! deque.push_back("b");
//! deque.push_front("a");
//! deque.push_back("c");
//!
//! assert_eq!(deque.pop_front(), Ok("a"));
//! assert_eq!(deque.pop_back(), Ok("c"));
//! assert_eq!(deque.front(), deque.back());
//! ```

use std::cell::RefCell;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::{Rc, Weak};

use crate::DequeError;

struct Node<T> {
    element: T,
    next: RefCell<Option<Rc<Node<T>>>>,
    previous: RefCell<Weak<Node<T>>>,
}

impl<T> Node<T> {
    fn new(element: T) -> Self {
        Self {
            element,
            next: RefCell::new(None),
            previous: RefCell::new(Weak::new()),
        }
    }
}

/// A double-ended queue backed by a doubly-linked chain of nodes.
///
/// # Time Complexity
///
/// | Operation    | Complexity |
/// |--------------|------------|
/// | `push_front` | O(1)       |
/// | `push_back`  | O(1)       |
/// | `pop_front`  | O(1)       |
/// | `pop_back`   | O(1)       |
/// | `front`      | O(1)       |
/// | `back`       | O(1)       |
/// | `len`        | O(1)       |
/// | `clear`      | O(n)       |
/// | `clone`      | O(n)       |
///
/// # Examples
///
/// ```rust
/// use bideque::backing::LinkedNodeDeque;
///
/// let deque: LinkedNodeDeque<i32> = (1..=3).collect();
/// let mut copy = deque.clone();
/// copy.push_back(4);
///
/// assert_eq!(deque.len(), 3);
/// assert_eq!(copy.len(), 4);
/// ```
pub struct LinkedNodeDeque<T> {
    head: Option<Rc<Node<T>>>,
    tail: Option<Rc<Node<T>>>,
    count: usize,
}

impl<T> LinkedNodeDeque<T> {
    /// Creates a new empty deque. No node is allocated until the first push.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
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

    /// Prepends an element in a newly allocated node.
    pub fn push_front(&mut self, element: T) {
        let node = Rc::new(Node::new(element));
        match self.head.take() {
            Some(old_head) => {
                *old_head.previous.borrow_mut() = Rc::downgrade(&node);
                *node.next.borrow_mut() = Some(old_head);
            }
            None => self.tail = Some(Rc::clone(&node)),
        }
        self.head = Some(node);
        self.count += 1;
    }

    /// Appends an element in a newly allocated node.
    pub fn push_back(&mut self, element: T) {
        let node = Rc::new(Node::new(element));
        match self.tail.take() {
            Some(old_tail) => {
                *node.previous.borrow_mut() = Rc::downgrade(&old_tail);
                *old_tail.next.borrow_mut() = Some(Rc::clone(&node));
            }
            None => self.head = Some(Rc::clone(&node)),
        }
        self.tail = Some(node);
        self.count += 1;
    }

    /// Detaches the head node and returns its element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn pop_front(&mut self) -> Result<T, DequeError> {
        let node = self.head.take().ok_or(DequeError::EmptyContainer)?;
        let next = node.next.borrow_mut().take();
        match next {
            Some(next) => {
                *next.previous.borrow_mut() = Weak::new();
                self.head = Some(next);
            }
            None => self.tail = None,
        }
        self.count -= 1;
        Ok(release(node))
    }

    /// Detaches the tail node and returns its element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn pop_back(&mut self) -> Result<T, DequeError> {
        let node = self.tail.take().ok_or(DequeError::EmptyContainer)?;
        let previous = node.previous.borrow().upgrade();
        match previous {
            Some(previous) => {
                *previous.next.borrow_mut() = None;
                self.tail = Some(previous);
            }
            None => self.head = None,
        }
        self.count -= 1;
        Ok(release(node))
    }

    /// Returns a reference to the first element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn front(&self) -> Result<&T, DequeError> {
        self.head
            .as_deref()
            .map(|node| &node.element)
            .ok_or(DequeError::EmptyContainer)
    }

    /// Returns a reference to the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DequeError::EmptyContainer`] if the deque is empty.
    pub fn back(&self) -> Result<&T, DequeError> {
        self.tail
            .as_deref()
            .map(|node| &node.element)
            .ok_or(DequeError::EmptyContainer)
    }

    /// Releases every node, head to tail, and returns to the empty state.
    pub fn clear(&mut self) {
        tracing::trace!(released = self.count, "cleared linked node chain");
        self.release_chain();
    }

    /// Moves the chain out into a new deque, leaving `self` empty.
    #[must_use = "the moved-out elements are dropped if the result is unused"]
    pub fn take(&mut self) -> Self {
        tracing::trace!(count = self.count, "moved linked node chain out");
        std::mem::take(self)
    }

    /// Copies the elements, front to back, into a `Vec`.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.nodes().map(|node| node.element.clone()).collect()
    }

    /// Handles yielded here must not outlive the borrow of `self`; `release`
    /// relies on a detached node having no other strong reference.
    fn nodes(&self) -> NodeCursor<T> {
        NodeCursor {
            next: self.head.clone(),
        }
    }

    fn release_chain(&mut self) {
        self.tail = None;
        let mut cursor = self.head.take();
        while let Some(node) = cursor {
            cursor = node.next.borrow_mut().take();
        }
        self.count = 0;
    }
}

/// Unwraps a node that has been unlinked from the chain and from `tail`.
fn release<T>(node: Rc<Node<T>>) -> T {
    match Rc::try_unwrap(node) {
        Ok(node) => node.element,
        Err(_) => unreachable!("detached node is still referenced by the chain"),
    }
}

/// Walks the chain front to back, yielding a handle to each node.
struct NodeCursor<T> {
    next: Option<Rc<Node<T>>>,
}

impl<T> Iterator for NodeCursor<T> {
    type Item = Rc<Node<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.next.take()?;
        self.next = node.next.borrow().clone();
        Some(node)
    }
}

impl<T> Drop for LinkedNodeDeque<T> {
    fn drop(&mut self) {
        self.release_chain();
    }
}

impl<T> Default for LinkedNodeDeque<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for LinkedNodeDeque<T> {
    fn clone(&self) -> Self {
        self.nodes().map(|node| node.element.clone()).collect()
    }
}

impl<T: PartialEq> PartialEq for LinkedNodeDeque<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.len() != other.len() {
            return false;
        }
        self.nodes()
            .zip(other.nodes())
            .all(|(a, b)| a.element == b.element)
    }
}

impl<T: Eq> Eq for LinkedNodeDeque<T> {}

impl<T: fmt::Debug> fmt::Debug for LinkedNodeDeque<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for node in self.nodes() {
            list.entry(&node.element);
        }
        list.finish()
    }
}

impl<T: Hash> Hash for LinkedNodeDeque<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for node in self.nodes() {
            node.element.hash(state);
        }
    }
}

impl<T> FromIterator<T> for LinkedNodeDeque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut deque = Self::new();
        deque.extend(iter);
        deque
    }
}

impl<T> Extend<T> for LinkedNodeDeque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.push_back(element);
        }
    }
}

impl<T> IntoIterator for LinkedNodeDeque<T> {
    type Item = T;
    type IntoIter = LinkedNodeDequeIntoIterator<T>;

    fn into_iter(self) -> Self::IntoIter {
        LinkedNodeDequeIntoIterator { deque: self }
    }
}

/// Owning iterator over the elements of a [`LinkedNodeDeque`].
pub struct LinkedNodeDequeIntoIterator<T> {
    deque: LinkedNodeDeque<T>,
}

impl<T> Iterator for LinkedNodeDequeIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.deque.pop_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.deque.len(), Some(self.deque.len()))
    }
}

impl<T> DoubleEndedIterator for LinkedNodeDequeIntoIterator<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.deque.pop_back().ok()
    }
}

impl<T> ExactSizeIterator for LinkedNodeDequeIntoIterator<T> {}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for LinkedNodeDeque<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for node in self.nodes() {
            seq.serialize_element(&node.element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct LinkedNodeDequeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for LinkedNodeDequeVisitor<T>
where
    T: serde::Deserialize<'de>,
{
    type Value = LinkedNodeDeque<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut deque = LinkedNodeDeque::new();
        while let Some(element) = seq.next_element()? {
            deque.push_back(element);
        }
        Ok(deque)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LinkedNodeDeque<T>
where
    T: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LinkedNodeDequeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
