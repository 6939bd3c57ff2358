//! FIFO contract tests for the `Queue` capability, covering both the
//! unbounded linked list and the bounded adapter.

use corral::error::{CollectionEmptyError, CollectionFullError};
use corral::prelude::*;
use rstest::rstest;

// =============================================================================
// Fail-Soft Accessors (peek / poll)
// =============================================================================

#[rstest]
fn peek_returns_the_head_without_removing_it() {
    let queue = LinkedList::from_slice(&[1, 3, 2, 4]);
    assert_eq!(queue.peek(), 1);
    assert_eq!(queue.len(), 4);
}

#[rstest]
fn poll_returns_and_removes_the_head() {
    let mut queue = LinkedList::from_slice(&[1, 3, 2, 4]);
    assert_eq!(queue.poll(), 1);
    assert_eq!(queue.len(), 3);
    assert_eq!(queue.to_vec(), vec![3, 2, 4]);
}

#[rstest]
fn empty_queue_substitutes_the_default_value() {
    let mut queue: LinkedList<i32> = LinkedList::new();
    assert_eq!(queue.peek(), 0);
    assert_eq!(queue.poll(), 0);

    let mut words: LinkedList<String> = LinkedList::new();
    assert_eq!(words.peek(), String::new());
    assert_eq!(words.poll(), String::new());
}

// =============================================================================
// Fail-Hard Accessors (element / fetch)
// =============================================================================

#[rstest]
fn element_borrows_the_head() {
    let queue = LinkedList::from_slice(&[7, 8]);
    assert_eq!(queue.element(), Ok(&7));
    assert_eq!(queue.len(), 2);
}

#[rstest]
fn element_and_fetch_fail_on_empty() {
    let mut queue: LinkedList<i32> = LinkedList::new();
    assert_eq!(queue.element(), Err(CollectionEmptyError));
    assert_eq!(queue.fetch(), Err(CollectionEmptyError));
}

#[rstest]
fn fetch_drains_in_insertion_order() {
    let mut queue = LinkedList::from_slice(&[1, 2, 3]);
    assert_eq!(queue.fetch(), Ok(1));
    assert_eq!(queue.fetch(), Ok(2));
    assert_eq!(queue.fetch(), Ok(3));
    assert_eq!(queue.fetch(), Err(CollectionEmptyError));
}

// =============================================================================
// Push
// =============================================================================

#[rstest]
fn push_on_the_linked_list_never_refuses() {
    let mut queue: LinkedList<i32> = LinkedList::new();
    assert_eq!(queue.push(0..1000), Ok(true));
    assert_eq!(queue.len(), 1000);
}

#[rstest]
fn push_then_poll_interleaved_keeps_fifo_order() {
    let mut queue: LinkedList<i32> = LinkedList::new();
    queue.push([1, 2]).unwrap();
    assert_eq!(queue.poll(), 1);
    queue.push([3]).unwrap();
    assert_eq!(queue.poll(), 2);
    assert_eq!(queue.poll(), 3);
}

// =============================================================================
// Bounded Adapter
// =============================================================================

#[rstest]
fn bounded_push_refuses_at_capacity() {
    let mut queue = Bounded::new(LinkedList::new(), 2);
    assert_eq!(queue.push([1, 2]), Ok(true));
    assert_eq!(queue.push([3]), Err(CollectionFullError { capacity: 2 }));
}

#[rstest]
fn bounded_queue_drains_like_the_inner_kind() {
    let mut queue = Bounded::new(LinkedList::new(), 3);
    queue.push([1, 2, 3]).unwrap();
    assert_eq!(queue.poll(), 1);
    assert_eq!(queue.fetch(), Ok(2));
    assert_eq!(queue.peek(), 3);
}
