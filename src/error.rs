//! Error types for deque operations.
//!
//! Every deque in this crate shares a single failure mode: reading or
//! removing an end element while the deque holds nothing. The failure is
//! always recoverable and never leaves the deque in an inconsistent state.

/// Represents errors that can occur when operating on a deque.
///
/// # Examples
///
/// ```rust
/// use bideque::DequeError;
/// use bideque::backing::CircularBufferDeque;
///
/// let mut deque: CircularBufferDeque<i32> = CircularBufferDeque::new();
/// assert_eq!(deque.pop_front(), Err(DequeError::EmptyContainer));
/// assert_eq!(format!("{}", DequeError::EmptyContainer), "deque is empty");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DequeError {
    /// `pop_front`, `pop_back`, `front` or `back` was called on an empty deque.
    EmptyContainer,
}

impl std::fmt::Display for DequeError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyContainer => write!(formatter, "deque is empty"),
        }
    }
}

impl std::error::Error for DequeError {}
