//! The `Queue` capability: a FIFO view atop `Collection`.

use super::collection::Collection;
use crate::error::{CollectionEmptyError, CollectionFullError};

/// First-in-first-out access.
///
/// The head is the element an iterator yields first. Emptiness is exposed
/// through two accessor pairs:
///
/// - **fail-soft**: [`peek`](Queue::peek) and [`poll`](Queue::poll)
///   substitute the element type's [`Default`] value on an empty queue
///   and never fail. For callers that treat emptiness as ordinary.
/// - **fail-hard**: [`element`](Queue::element) and
///   [`fetch`](Queue::fetch) report [`CollectionEmptyError`] instead.
///   For callers that treat emptiness as exceptional.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut queue = LinkedList::from_slice(&[1, 3, 2, 4]);
/// assert_eq!(queue.peek(), 1);
/// assert_eq!(queue.len(), 4);
///
/// assert_eq!(queue.poll(), 1);
/// assert_eq!(queue.to_vec(), vec![3, 2, 4]);
///
/// let mut empty: LinkedList<i32> = LinkedList::new();
/// assert_eq!(empty.poll(), 0);
/// assert_eq!(empty.fetch(), Err(corral::error::CollectionEmptyError));
/// ```
pub trait Queue<T>: Collection<T> {
    /// Removes and returns the head element.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionEmptyError`] when the queue is empty. Use
    /// [`poll`](Queue::poll) to substitute a default value instead.
    fn fetch(&mut self) -> Result<T, CollectionEmptyError>;

    /// Appends every element of `elements` to the tail.
    ///
    /// Equivalent to [`add`](Collection::add), except that the contract
    /// permits a capacity-bounded implementation to refuse. This default
    /// body delegates to `add` and never refuses.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionFullError`] from bounded implementations that
    /// are at capacity (see [`Bounded`](crate::container::Bounded)).
    fn push<I>(&mut self, elements: I) -> Result<bool, CollectionFullError>
    where
        I: IntoIterator<Item = T>,
    {
        Ok(self.add(elements))
    }

    /// Returns a reference to the head element without removing it.
    ///
    /// # Errors
    ///
    /// Returns [`CollectionEmptyError`] when the queue is empty. Use
    /// [`peek`](Queue::peek) to substitute a default value instead.
    fn element(&self) -> Result<&T, CollectionEmptyError> {
        self.iter().next().ok_or(CollectionEmptyError)
    }

    /// Returns a copy of the head element, or `T::default()` when empty.
    /// Never fails and never changes the queue.
    fn peek(&self) -> T
    where
        T: Clone + Default,
    {
        self.element().map_or_else(|_| T::default(), Clone::clone)
    }

    /// Removes and returns the head element, or `T::default()` when
    /// empty. Never fails.
    fn poll(&mut self) -> T
    where
        T: Default,
    {
        self.fetch().unwrap_or_default()
    }
}
