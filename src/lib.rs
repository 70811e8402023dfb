//! # bideque
//!
//! A double-ended queue with two interchangeable backings, reachable through
//! two abstraction strategies.
//!
//! ## Overview
//!
//! - **Backings**: [`CircularBufferDeque`](backing::CircularBufferDeque), a
//!   growable ring buffer, and [`LinkedNodeDeque`](backing::LinkedNodeDeque),
//!   a doubly-linked node chain
//! - **Dynamic dispatch**: the object-safe [`Deque`](dispatch::Deque) trait and
//!   the [`DynDeque`](dispatch::DynDeque) handle, whose backing is picked (and
//!   can be swapped) at runtime
//! - **Static composition**: [`ComposedDeque`](composed::ComposedDeque), which
//!   holds a backing by value and forwards to it with no indirection
//!
//! For the same backing and the same sequence of operations, both strategies
//! return identical results. Every read or removal on an empty deque yields
//! [`DequeError::EmptyContainer`] and leaves the deque usable.
//!
//! ## Feature Flags
//!
//! - `dispatch`: `Deque` trait and `DynDeque` (default)
//! - `composed`: `Backing` trait and `ComposedDeque` (default)
//! - `serde`: `Serialize`/`Deserialize` for the backings and `ComposedDeque`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use bideque::prelude::*;
//!
//! let mut dynamic: DynDeque<i32> = DynDeque::circular();
//! let mut composed: CircularComposedDeque<i32> = CircularComposedDeque::new();
//!
//! for value in [1, 2, 3] {
//!     dynamic.push_back(value);
//!     composed.push_back(value);
//! }
//! dynamic.push_front(4);
//! composed.push_front(4);
//!
//! assert_eq!(dynamic.pop_front(), composed.pop_front());
//! assert_eq!(dynamic.back(), composed.back());
//! assert_eq!(dynamic.len(), composed.len());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use bideque::prelude::*;
/// ```
pub mod prelude {
    pub use crate::DequeError;
    pub use crate::backing::*;

    #[cfg(feature = "dispatch")]
    pub use crate::dispatch::*;

    #[cfg(feature = "composed")]
    pub use crate::composed::*;
}

mod error;

pub mod backing;

#[cfg(feature = "dispatch")]
pub mod dispatch;

#[cfg(feature = "composed")]
pub mod composed;

pub use error::DequeError;
