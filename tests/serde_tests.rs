#![cfg(feature = "serde")]

//! Integration tests for serde support in bideque.
//!
//! Deques serialize as a plain sequence in front-to-back order, independent
//! of the backing's physical layout.

use bideque::backing::{BackingKind, CircularBufferDeque, LinkedNodeDeque};
use bideque::composed::{CircularComposedDeque, LinkedComposedDeque};
use rstest::rstest;

// =============================================================================
// CircularBufferDeque
// =============================================================================

#[rstest]
fn test_circular_json_roundtrip() {
    let deque: CircularBufferDeque<i32> = (1..=25).collect();
    let json = serde_json::to_string(&deque).unwrap();
    let restored: CircularBufferDeque<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(deque, restored);
}

#[rstest]
fn test_circular_serializes_logical_order_when_wrapped() {
    let mut deque = CircularBufferDeque::new();
    deque.push_back(3);
    deque.push_front(2);
    deque.push_front(1);
    assert_eq!(serde_json::to_string(&deque).unwrap(), "[1,2,3]");
}

#[rstest]
fn test_circular_empty() {
    let deque: CircularBufferDeque<i32> = CircularBufferDeque::new();
    assert_eq!(serde_json::to_string(&deque).unwrap(), "[]");
    let restored: CircularBufferDeque<i32> = serde_json::from_str("[]").unwrap();
    assert!(restored.is_empty());
}

// =============================================================================
// LinkedNodeDeque
// =============================================================================

#[rstest]
fn test_linked_json_roundtrip() {
    let deque: LinkedNodeDeque<String> = ["a", "b", "c"].iter().map(ToString::to_string).collect();
    let json = serde_json::to_string(&deque).unwrap();
    assert_eq!(json, r#"["a","b","c"]"#);
    let restored: LinkedNodeDeque<String> = serde_json::from_str(&json).unwrap();
    assert_eq!(deque, restored);
}

#[rstest]
fn test_linked_deserialize_keeps_order() {
    let mut restored: LinkedNodeDeque<i32> = serde_json::from_str("[5, 4, 1, 2, 3]").unwrap();
    assert_eq!(restored.len(), 5);
    assert_eq!(restored.pop_front(), Ok(5));
    assert_eq!(restored.pop_back(), Ok(3));
}

#[rstest]
fn test_deserialize_rejects_non_sequence() {
    let result: Result<LinkedNodeDeque<i32>, _> = serde_json::from_str("{\"a\": 1}");
    assert!(result.is_err());
}

// =============================================================================
// Cross-backing and wrappers
// =============================================================================

#[rstest]
fn test_backings_share_wire_format() {
    let circular: CircularBufferDeque<i32> = (1..=5).collect();
    let json = serde_json::to_string(&circular).unwrap();
    let linked: LinkedNodeDeque<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(linked.to_vec(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_composed_is_transparent() {
    let deque: CircularComposedDeque<i32> = (1..=3).collect();
    let json = serde_json::to_string(&deque).unwrap();
    assert_eq!(json, "[1,2,3]");
    let restored: LinkedComposedDeque<i32> = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.front(), Ok(&1));
    assert_eq!(restored.back(), Ok(&3));
}

#[rstest]
#[case(BackingKind::Circular, "\"circular\"")]
#[case(BackingKind::Linked, "\"linked\"")]
fn test_backing_kind_snake_case(#[case] kind: BackingKind, #[case] expected: &str) {
    assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
    let restored: BackingKind = serde_json::from_str(expected).unwrap();
    assert_eq!(restored, kind);
}

// =============================================================================
// Untrusted length hints
// =============================================================================

/// A sequence whose reported length is unrelated to what it yields, as a
/// length-prefixed format would present a corrupted payload.
struct HintedSequence {
    hint: usize,
    remaining: u32,
}

impl<'de> serde::de::SeqAccess<'de> for HintedSequence {
    type Error = serde::de::value::Error;

    fn next_element_seed<S>(&mut self, seed: S) -> Result<Option<S::Value>, Self::Error>
    where
        S: serde::de::DeserializeSeed<'de>,
    {
        if self.remaining == 0 {
            return Ok(None);
        }
        self.remaining -= 1;
        let element =
            serde::de::IntoDeserializer::<Self::Error>::into_deserializer(self.remaining);
        seed.deserialize(element).map(Some)
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.hint)
    }
}

impl<'de> serde::Deserializer<'de> for HintedSequence {
    type Error = serde::de::value::Error;

    fn deserialize_any<V>(self, visitor: V) -> Result<V::Value, Self::Error>
    where
        V: serde::de::Visitor<'de>,
    {
        visitor.visit_seq(self)
    }

    serde::forward_to_deserialize_any! {
        bool i8 i16 i32 i64 i128 u8 u16 u32 u64 u128 f32 f64 char str string
        bytes byte_buf option unit unit_struct newtype_struct seq tuple
        tuple_struct map struct enum identifier ignored_any
    }
}

#[rstest]
fn test_circular_ignores_oversized_length_hint() {
    let sequence = HintedSequence {
        hint: usize::MAX / 4,
        remaining: 0,
    };
    let restored: CircularBufferDeque<u32> =
        serde::Deserialize::deserialize(sequence).unwrap();
    assert!(restored.is_empty());
    assert!(restored.capacity() <= 4096);
}

#[rstest]
fn test_circular_grows_past_capped_preallocation() {
    let sequence = HintedSequence {
        hint: usize::MAX,
        remaining: 5000,
    };
    let restored: CircularBufferDeque<u32> =
        serde::Deserialize::deserialize(sequence).unwrap();
    assert_eq!(restored.len(), 5000);
    assert_eq!(restored.front(), Ok(&4999));
    assert_eq!(restored.back(), Ok(&0));
}
