//! Serialization round-trip law for the linked list.
//!
//! A list serializes as an ordered sequence identical to `to_vec()`, and
//! decoding that sequence yields an `equals`-equal list, duplicates and
//! all.

#![cfg(feature = "serde")]

use corral::prelude::*;
use rstest::rstest;

#[rstest]
fn serializes_as_an_ordered_array() {
    let list = LinkedList::from_slice(&[1, 3, 2, 4]);
    assert_eq!(serde_json::to_string(&list).unwrap(), "[1,3,2,4]");
}

#[rstest]
fn empty_list_serializes_as_an_empty_array() {
    let list: LinkedList<i32> = LinkedList::new();
    assert_eq!(serde_json::to_string(&list).unwrap(), "[]");
}

#[rstest]
#[case(vec![])]
#[case(vec![1])]
#[case(vec![1, 2, 3])]
#[case(vec![2, 2, 2])]
#[case(vec![1, 2, 2, 3, 1])]
fn round_trip_is_equals_equal(#[case] elements: Vec<i32>) {
    let original = LinkedList::from_slice(&elements);
    let json = serde_json::to_string(&original).unwrap();
    let decoded: LinkedList<i32> = serde_json::from_str(&json).unwrap();
    assert!(decoded.equals(&original));
    assert_eq!(decoded.to_vec(), elements);
}

#[rstest]
fn decoding_replaces_prior_contents_semantics() {
    // Deserialization builds a fresh list: decoding "[4, 5]" never keeps
    // elements from any earlier value, matching clear-then-re-add.
    let decoded: LinkedList<i32> = serde_json::from_str("[4, 5]").unwrap();
    assert_eq!(decoded.to_vec(), vec![4, 5]);
}

#[rstest]
fn string_elements_round_trip() {
    let original = LinkedList::from_slice(&["a".to_string(), "b".to_string(), "a".to_string()]);
    let json = serde_json::to_string(&original).unwrap();
    let decoded: LinkedList<String> = serde_json::from_str(&json).unwrap();
    assert!(decoded.equals(&original));
}
