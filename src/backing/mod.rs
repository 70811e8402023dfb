//! Concrete deque backings.
//!
//! This module provides the two storage strategies every deque in this crate
//! is built on:
//!
//! - [`CircularBufferDeque`]: contiguous growable buffer with wrap-around indices
//! - [`LinkedNodeDeque`]: doubly-linked chain of heap-allocated nodes
//!
//! Neither backing knows about the other or about the wrappers in
//! [`crate::dispatch`] and [`crate::composed`]. Both expose the same nine
//! inherent operations (`push_front`, `push_back`, `pop_front`, `pop_back`,
//! `front`, `back`, `is_empty`, `len`, `clear`) with identical observable
//! behaviour.
//!
//! # Examples
//!
//! ```rust
//! use bideque::backing::{CircularBufferDeque, LinkedNodeDeque};
//!
//! let mut circular = CircularBufferDeque::new();
//! let mut linked = LinkedNodeDeque::new();
//! for value in 1..=3 {
//!     circular.push_back(value);
//!     linked.push_back(value);
//! }
//!
//! assert_eq!(circular.pop_front(), linked.pop_front());
//! assert_eq!(circular.back(), linked.back());
//! ```

mod circular;
mod linked;

pub use circular::CircularBufferDeque;
pub use circular::CircularBufferDequeIntoIterator;
pub use circular::CircularBufferDequeIterator;
pub use linked::LinkedNodeDeque;
pub use linked::LinkedNodeDequeIntoIterator;

use std::fmt;
use std::str::FromStr;

/// Capacity a [`CircularBufferDeque`] allocates on construction, and the
/// capacity an unallocated buffer grows to on its first push.
pub const DEFAULT_CAPACITY: usize = 10;

/// Factor a full [`CircularBufferDeque`] multiplies its capacity by.
pub const GROWTH_FACTOR: usize = 2;

/// Identifies which backing a deque is built on.
///
/// Used to select a backing at runtime (see
/// [`DynDeque::with_kind`](crate::dispatch::DynDeque::with_kind)) and to
/// report the active one.
///
/// # Examples
///
/// ```rust
/// use bideque::backing::BackingKind;
///
/// let kind: BackingKind = "linked".parse().unwrap();
/// assert_eq!(kind, BackingKind::Linked);
/// assert_eq!(kind.to_string(), "linked");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BackingKind {
    /// [`CircularBufferDeque`].
    Circular,
    /// [`LinkedNodeDeque`].
    Linked,
}

impl BackingKind {
    /// All backing kinds, in declaration order.
    pub const ALL: [Self; 2] = [Self::Circular, Self::Linked];

    /// Returns the lowercase name used by `Display` and `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Circular => "circular",
            Self::Linked => "linked",
        }
    }
}

impl fmt::Display for BackingKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())
    }
}

/// Error returned when parsing an unknown [`BackingKind`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBackingError {
    /// The rejected input.
    pub input: String,
}

impl fmt::Display for UnknownBackingError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            formatter,
            "unknown backing `{}`, expected `circular` or `linked`",
            self.input
        )
    }
}

impl std::error::Error for UnknownBackingError {}

impl FromStr for BackingKind {
    type Err = UnknownBackingError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| UnknownBackingError {
                input: input.to_string(),
            })
    }
}

// =============================================================================
// Auto-trait guarantees
// =============================================================================

static_assertions::assert_impl_all!(CircularBufferDeque<i32>: Send, Sync, Clone, Default);
static_assertions::assert_impl_all!(LinkedNodeDeque<i32>: Clone, Default);
static_assertions::assert_not_impl_any!(LinkedNodeDeque<i32>: Send, Sync);
