//! The `List` capability: index-addressed operations atop `Collection`.

use super::collection::Collection;
use crate::error::IndexOutOfBoundsError;

/// Index-addressed access, insertion, and deletion.
///
/// Indices count from zero in iteration order. Insertion accepts
/// `0..=len` (inserting at `len` appends); access and deletion accept
/// `0..len`. Any other index is reported as
/// [`IndexOutOfBoundsError`] carrying the offending index.
///
/// A `List` also has a canonical serialized form: an ordered sequence
/// identical to [`to_vec`](Collection::to_vec). Decoding that sequence
/// re-adds every element in order, preserving duplicates, so decoding the
/// encoding of a list yields a list [`equals`](Collection::equals)-equal
/// to the original.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut list = LinkedList::from_slice(&[1, 3, 2, 4]);
/// assert_eq!(list.get(2), Ok(&2));
///
/// list.add_at(0, 0).unwrap();
/// assert_eq!(list.to_vec(), vec![0, 1, 3, 2, 4]);
///
/// assert_eq!(list.remove_at(0), Ok(0));
/// assert!(list.get(9).is_err());
/// ```
pub trait List<T>: Collection<T> {
    /// Inserts `element` so that it ends up at position `index`, shifting
    /// later elements back by one.
    ///
    /// Inserting at `index == len` is equivalent to
    /// [`add`](Collection::add).
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] when `index > len`.
    fn add_at(&mut self, element: T, index: usize) -> Result<(), IndexOutOfBoundsError>;

    /// Removes and returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] when `index >= len`.
    fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBoundsError>;

    /// Returns a reference to the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`IndexOutOfBoundsError`] when `index >= len`.
    fn get(&self, index: usize) -> Result<&T, IndexOutOfBoundsError>;
}
