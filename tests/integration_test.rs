//! Integration tests across backings and abstraction strategies.
//!
//! Each scenario runs on all four combinations of wrapper and backing:
//! dynamic dispatch and static composition, each over the circular buffer
//! and the linked node chain.

use bideque::prelude::*;
use rstest::rstest;

/// The four wrapper/backing combinations behind one enum, so a scenario can
/// be written once.
enum Subject {
    Dynamic(DynDeque<i32>),
    ComposedCircular(CircularComposedDeque<i32>),
    ComposedLinked(LinkedComposedDeque<i32>),
}

macro_rules! forward {
    ($subject:expr, $deque:ident => $body:expr) => {
        match $subject {
            Subject::Dynamic($deque) => $body,
            Subject::ComposedCircular($deque) => $body,
            Subject::ComposedLinked($deque) => $body,
        }
    };
}

impl Subject {
    fn push_front(&mut self, value: i32) {
        forward!(self, deque => deque.push_front(value));
    }

    fn push_back(&mut self, value: i32) {
        forward!(self, deque => deque.push_back(value));
    }

    fn pop_front(&mut self) -> Result<i32, DequeError> {
        forward!(self, deque => deque.pop_front())
    }

    fn pop_back(&mut self) -> Result<i32, DequeError> {
        forward!(self, deque => deque.pop_back())
    }

    fn front(&self) -> Result<i32, DequeError> {
        forward!(self, deque => deque.front().copied())
    }

    fn back(&self) -> Result<i32, DequeError> {
        forward!(self, deque => deque.back().copied())
    }

    fn len(&self) -> usize {
        forward!(self, deque => deque.len())
    }

    fn is_empty(&self) -> bool {
        forward!(self, deque => deque.is_empty())
    }

    fn clear(&mut self) {
        forward!(self, deque => deque.clear());
    }
}

fn subject(name: &str) -> Subject {
    match name {
        "dynamic_circular" => Subject::Dynamic(DynDeque::circular()),
        "dynamic_linked" => Subject::Dynamic(DynDeque::linked()),
        "composed_circular" => Subject::ComposedCircular(CircularComposedDeque::new()),
        "composed_linked" => Subject::ComposedLinked(LinkedComposedDeque::new()),
        other => panic!("unknown subject {other}"),
    }
}

// =============================================================================
// Reference scenario
// =============================================================================

#[rstest]
#[case("dynamic_circular")]
#[case("dynamic_linked")]
#[case("composed_circular")]
#[case("composed_linked")]
fn test_reference_scenario(#[case] name: &str) {
    let mut deque = subject(name);
    deque.push_back(1);
    deque.push_back(2);
    deque.push_back(3);
    deque.push_front(4);
    deque.push_front(5);

    assert_eq!(deque.len(), 5);
    assert_eq!(deque.front(), Ok(5));
    assert_eq!(deque.back(), Ok(3));

    assert_eq!(deque.pop_front(), Ok(5));
    assert_eq!(deque.len(), 4);
    assert_eq!(deque.pop_back(), Ok(3));
    assert_eq!(deque.len(), 3);

    assert_eq!(deque.front(), Ok(4));
    assert_eq!(deque.back(), Ok(2));
}

#[rstest]
#[case("dynamic_circular")]
#[case("dynamic_linked")]
#[case("composed_circular")]
#[case("composed_linked")]
fn test_second_reference_scenario(#[case] name: &str) {
    let mut deque = subject(name);
    for value in [10, 20, 30] {
        deque.push_back(value);
    }
    deque.push_front(40);
    deque.push_front(50);

    assert_eq!(deque.len(), 5);
    assert_eq!(deque.front(), Ok(50));
    assert_eq!(deque.back(), Ok(30));
    assert_eq!(deque.pop_front(), Ok(50));
    assert_eq!(deque.pop_back(), Ok(30));
    assert_eq!(deque.len(), 3);
}

// =============================================================================
// Ordering
// =============================================================================

#[rstest]
#[case("dynamic_circular")]
#[case("dynamic_linked")]
#[case("composed_circular")]
#[case("composed_linked")]
fn test_fifo_and_lifo(#[case] name: &str) {
    let mut deque = subject(name);
    for value in [1, 2, 3] {
        deque.push_back(value);
    }
    assert_eq!(deque.pop_front(), Ok(1));
    assert_eq!(deque.pop_front(), Ok(2));
    assert_eq!(deque.pop_front(), Ok(3));

    for value in [1, 2, 3] {
        deque.push_front(value);
    }
    assert_eq!(deque.pop_back(), Ok(1));
    assert_eq!(deque.pop_back(), Ok(2));
    assert_eq!(deque.pop_back(), Ok(3));

    for value in [1, 2, 3] {
        deque.push_back(value);
    }
    assert_eq!(deque.pop_back(), Ok(3));
    assert_eq!(deque.pop_back(), Ok(2));
    assert_eq!(deque.pop_back(), Ok(1));
}

#[rstest]
#[case("dynamic_circular")]
#[case("dynamic_linked")]
#[case("composed_circular")]
#[case("composed_linked")]
fn test_eleven_pushes_survive_growth(#[case] name: &str) {
    let mut deque = subject(name);
    for value in 0..11 {
        deque.push_back(value);
    }
    assert_eq!(deque.len(), 11);
    assert_eq!(deque.front(), Ok(0));
    assert_eq!(deque.back(), Ok(10));
    for expected in 0..11 {
        assert_eq!(deque.pop_front(), Ok(expected));
    }
    assert!(deque.is_empty());
}

// =============================================================================
// Empty contract
// =============================================================================

#[rstest]
#[case("dynamic_circular")]
#[case("dynamic_linked")]
#[case("composed_circular")]
#[case("composed_linked")]
fn test_empty_operations_fail_without_corruption(#[case] name: &str) {
    let mut deque = subject(name);
    assert_eq!(deque.pop_front(), Err(DequeError::EmptyContainer));
    assert_eq!(deque.pop_back(), Err(DequeError::EmptyContainer));
    assert_eq!(deque.front(), Err(DequeError::EmptyContainer));
    assert_eq!(deque.back(), Err(DequeError::EmptyContainer));
    assert!(deque.is_empty());

    deque.push_back(7);
    assert_eq!(deque.front(), Ok(7));
    assert_eq!(deque.len(), 1);
}

#[rstest]
#[case("dynamic_circular")]
#[case("dynamic_linked")]
#[case("composed_circular")]
#[case("composed_linked")]
fn test_clear_then_reuse(#[case] name: &str) {
    let mut deque = subject(name);
    for value in 0..25 {
        deque.push_front(value);
    }
    deque.clear();
    assert!(deque.is_empty());
    assert_eq!(deque.back(), Err(DequeError::EmptyContainer));

    deque.push_front(1);
    deque.push_back(2);
    assert_eq!(deque.front(), Ok(1));
    assert_eq!(deque.back(), Ok(2));
}

// =============================================================================
// Copy and move
// =============================================================================

#[rstest]
fn test_composed_copy_isolation() {
    let mut original: CircularComposedDeque<i32> = (1..=3).collect();
    let mut copy = original.clone();
    copy.push_back(4);
    copy.pop_front().unwrap();

    assert_eq!(original.len(), 3);
    assert_eq!(original.front(), Ok(&1));
    assert_eq!(original.pop_back(), Ok(3));
    assert_eq!(copy.len(), 3);
}

#[rstest]
fn test_dynamic_take_then_reuse() {
    let mut source: DynDeque<i32> = DynDeque::circular();
    source.extend(0..20);
    let moved = source.take();

    assert_eq!(moved.len(), 20);
    assert_eq!(moved.back(), Ok(&19));
    assert!(source.is_empty());

    source.push_front(3);
    assert_eq!(source.back(), Ok(&3));
}

#[rstest]
fn test_owned_strings() {
    let mut deque: LinkedComposedDeque<String> = LinkedComposedDeque::new();
    deque.push_back("world".to_string());
    deque.push_front("hello".to_string());
    let joined: Vec<String> = deque.into_iter().collect();
    assert_eq!(joined.join(" "), "hello world");
}
