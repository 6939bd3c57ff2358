//! Circular doubly-linked list anchored at a sentinel.
//!
//! This module provides [`LinkedList`], a mutable insertion-ordered
//! container implementing the [`Collection`], [`List`], and [`Queue`]
//! capabilities on top of a single node structure.
//!
//! # Ring layout
//!
//! Nodes form a single circular chain anchored at a permanent sentinel
//! that never holds an element:
//!
//! ```text
//!        ┌──────────────────────────────┐
//!        ▼                              │
//!   ┌────────┐   ┌───┐   ┌───┐   ┌───┐  │
//!   │sentinel│◄─►│ a │◄─►│ b │◄─►│ c │◄─┘
//!   └────────┘   └───┘   └───┘   └───┘
//! ```
//!
//! An empty list is the sentinel linked to itself. The head is always
//! `sentinel.next`, the tail always `sentinel.previous`, and traversal
//! terminates when the sentinel is revisited, with no null checks anywhere.
//!
//! Nodes live in a backing slot arena and link to each other by stable
//! slot index rather than by pointer; unlinked slots are recycled through
//! a free stack. The arena is an implementation detail: no operation ever
//! hands out a slot index, only element values, borrows of them, or
//! errors.
//!
//! # Examples
//!
//! ```rust
//! use corral::prelude::*;
//!
//! let mut list = LinkedList::from_slice(&[1, 3, 2, 4]);
//!
//! // List capability: index addressing.
//! assert_eq!(list.get(2), Ok(&2));
//!
//! // Queue capability: FIFO access off the same ring.
//! assert_eq!(list.poll(), 1);
//! assert_eq!(list.to_vec(), vec![3, 2, 4]);
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::capability::{Collection, List, Queue};
use crate::equality::Equality;
use crate::error::{CollectionEmptyError, IndexOutOfBoundsError};

/// Index of the sentinel slot. The sentinel is created with the list and
/// never moves, so slot 0 is reserved for it for the list's lifetime.
const SENTINEL: usize = 0;

/// One arena slot: an element plus the two ring links.
///
/// The sentinel slot and recycled slots hold `None`; every slot reachable
/// through the ring links holds `Some`.
#[derive(Clone)]
struct Slot<T> {
    element: Option<T>,
    next: usize,
    previous: usize,
}

/// A circular doubly-linked list over an index arena.
///
/// `LinkedList` is mutated in place and preserves insertion order. It
/// exclusively owns its slots: nothing is shared between list instances,
/// and a cleared or unlinked element is gone the moment the operation
/// returns.
///
/// Elements are compared through the list's [`Equality`] strategy, fixed
/// at construction; the element type itself does not need [`PartialEq`]
/// (see [`LinkedList::with_equality`]).
///
/// # Time Complexity
///
/// | Operation              | Complexity |
/// |------------------------|------------|
/// | `add` (per element)    | O(1)       |
/// | `fetch` / `poll`       | O(1)       |
/// | `peek` / `element`     | O(1)       |
/// | `clear`                | O(1)       |
/// | `get` / `add_at` / `remove_at` | O(n) |
/// | `contains` / `remove`  | O(n)       |
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut list: LinkedList<i32> = LinkedList::new();
/// list.add([1, 2, 3]);
/// assert_eq!(list.len(), 3);
/// assert_eq!(format!("{list}"), "[1, 2, 3]");
/// ```
#[derive(Clone)]
pub struct LinkedList<T> {
    /// Slot arena; slot [`SENTINEL`] is the sentinel.
    slots: Vec<Slot<T>>,
    /// Indices of recycled slots awaiting reuse.
    free: Vec<usize>,
    /// Cached element count; always the number of non-sentinel slots
    /// reachable from the sentinel.
    length: usize,
    /// Comparison strategy fixed at construction.
    equality: Equality<T>,
}

impl<T: PartialEq + 'static> LinkedList<T> {
    /// Creates an empty list using native equality.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::prelude::*;
    ///
    /// let list: LinkedList<i32> = LinkedList::new();
    /// assert!(list.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_equality(Equality::native())
    }

    /// Creates a list pre-populated from a slice, in slice order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::prelude::*;
    ///
    /// let list = LinkedList::from_slice(&[1, 3, 2, 4]);
    /// assert_eq!(list.to_vec(), vec![1, 3, 2, 4]);
    /// ```
    #[must_use]
    pub fn from_slice(elements: &[T]) -> Self
    where
        T: Clone,
    {
        let mut list = Self::new();
        list.add(elements.iter().cloned());
        list
    }
}

impl<T> LinkedList<T> {
    /// Creates an empty list over an explicit equality strategy.
    ///
    /// This is the constructor for element types with no [`PartialEq`]:
    /// pass [`Equality::by`] with a comparison capability, or
    /// [`Equality::unsupported`] to forgo equality-dependent operations
    /// entirely.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::prelude::*;
    ///
    /// struct Reading {
    ///     sensor: u32,
    /// }
    ///
    /// let mut list =
    ///     LinkedList::with_equality(Equality::by(|a: &Reading, b: &Reading| {
    ///         a.sensor == b.sensor
    ///     }));
    /// list.add([Reading { sensor: 7 }]);
    /// assert!(list.contains(&Reading { sensor: 7 }));
    /// ```
    #[must_use]
    pub fn with_equality(equality: Equality<T>) -> Self {
        Self {
            slots: vec![Slot {
                element: None,
                next: SENTINEL,
                previous: SENTINEL,
            }],
            free: Vec::new(),
            length: 0,
            equality,
        }
    }

    /// Returns an iterator over the elements, front to back.
    ///
    /// The iterator borrows the list, so the list cannot be mutated until
    /// the iterator is dropped.
    #[must_use]
    pub fn iter(&self) -> LinkedListIterator<'_, T> {
        LinkedListIterator {
            list: self,
            current: self.slots[SENTINEL].next,
            remaining: self.length,
        }
    }

    /// Claims a slot for `element`, reusing a recycled slot when one is
    /// available. The slot's links are set by the caller.
    fn allocate(&mut self, element: T) -> usize {
        let slot = Slot {
            element: Some(element),
            next: SENTINEL,
            previous: SENTINEL,
        };
        if let Some(index) = self.free.pop() {
            self.slots[index] = slot;
            index
        } else {
            self.slots.push(slot);
            self.slots.len() - 1
        }
    }

    /// Splices a new node holding `element` into the ring directly before
    /// `anchor`. Splicing before the sentinel appends at the tail.
    fn splice_before(&mut self, anchor: usize, element: T) {
        let node = self.allocate(element);
        let previous = self.slots[anchor].previous;
        self.slots[node].next = anchor;
        self.slots[node].previous = previous;
        self.slots[previous].next = node;
        self.slots[anchor].previous = node;
        self.length += 1;
    }

    /// Unlinks `node` from the ring, recycles its slot, and returns its
    /// element. Returns `None` when `node` is the sentinel (the empty
    /// ring's only resident) or an already-recycled slot.
    fn unlink(&mut self, node: usize) -> Option<T> {
        let element = self.slots[node].element.take()?;
        let next = self.slots[node].next;
        let previous = self.slots[node].previous;
        self.slots[previous].next = next;
        self.slots[next].previous = previous;
        self.free.push(node);
        self.length -= 1;
        Some(element)
    }

    /// Translates a position into a slot index by walking `next` links
    /// from the head. Callers validate `index < self.length`.
    fn node_at(&self, index: usize) -> usize {
        let mut current = self.slots[SENTINEL].next;
        for _ in 0..index {
            current = self.slots[current].next;
        }
        current
    }
}

// =============================================================================
// Capability Implementations
// =============================================================================

impl<T> Collection<T> for LinkedList<T> {
    type Iter<'a>
        = LinkedListIterator<'a, T>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> LinkedListIterator<'_, T> {
        self.iter()
    }

    fn add<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let mut changed = false;
        for element in elements {
            self.splice_before(SENTINEL, element);
            changed = true;
        }
        changed
    }

    fn clear(&mut self) {
        self.slots.truncate(1);
        self.slots[SENTINEL].next = SENTINEL;
        self.slots[SENTINEL].previous = SENTINEL;
        self.free.clear();
        self.length = 0;
    }

    fn remove_if<P>(&mut self, mut predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        let mut changed = false;
        let mut current = self.slots[SENTINEL].next;
        while current != SENTINEL {
            let next = self.slots[current].next;
            let matches = self.slots[current]
                .element
                .as_ref()
                .is_some_and(|element| predicate(element));
            if matches {
                self.unlink(current);
                changed = true;
            }
            current = next;
        }
        changed
    }

    fn len(&self) -> usize {
        self.length
    }

    fn equality(&self) -> &Equality<T> {
        &self.equality
    }

    fn new_empty(&self) -> Self {
        Self::with_equality(self.equality.clone())
    }
}

impl<T> List<T> for LinkedList<T> {
    fn add_at(&mut self, element: T, index: usize) -> Result<(), IndexOutOfBoundsError> {
        if index > self.length {
            return Err(IndexOutOfBoundsError { index });
        }
        let anchor = if index == self.length {
            SENTINEL
        } else {
            self.node_at(index)
        };
        self.splice_before(anchor, element);
        Ok(())
    }

    fn remove_at(&mut self, index: usize) -> Result<T, IndexOutOfBoundsError> {
        if index >= self.length {
            return Err(IndexOutOfBoundsError { index });
        }
        let node = self.node_at(index);
        self.unlink(node).ok_or(IndexOutOfBoundsError { index })
    }

    fn get(&self, index: usize) -> Result<&T, IndexOutOfBoundsError> {
        if index >= self.length {
            return Err(IndexOutOfBoundsError { index });
        }
        let node = self.node_at(index);
        self.slots[node]
            .element
            .as_ref()
            .ok_or(IndexOutOfBoundsError { index })
    }
}

impl<T> Queue<T> for LinkedList<T> {
    fn fetch(&mut self) -> Result<T, CollectionEmptyError> {
        let head = self.slots[SENTINEL].next;
        self.unlink(head).ok_or(CollectionEmptyError)
    }
}

// =============================================================================
// Iterators
// =============================================================================

/// A borrowing cursor over the ring.
///
/// Holds the current slot index and advances along `next` links; the
/// validity check is simply "not back at the sentinel", so an exhausted
/// cursor keeps returning `None`.
pub struct LinkedListIterator<'a, T> {
    list: &'a LinkedList<T>,
    current: usize,
    remaining: usize,
}

impl<'a, T> Iterator for LinkedListIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.current == SENTINEL {
            return None;
        }
        let slot = &self.list.slots[self.current];
        self.current = slot.next;
        self.remaining -= 1;
        slot.element.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for LinkedListIterator<'_, T> {
    fn len(&self) -> usize {
        self.remaining
    }
}

/// An owning iterator that drains the list head-first.
pub struct LinkedListIntoIterator<T> {
    list: LinkedList<T>,
}

impl<T> Iterator for LinkedListIntoIterator<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let head = self.list.slots[SENTINEL].next;
        self.list.unlink(head)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.length, Some(self.list.length))
    }
}

impl<T> ExactSizeIterator for LinkedListIntoIterator<T> {
    fn len(&self) -> usize {
        self.list.length
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T: PartialEq + 'static> Default for LinkedList<T> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq + 'static> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.add(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add(iter);
    }
}

impl<T> IntoIterator for LinkedList<T> {
    type Item = T;
    type IntoIter = LinkedListIntoIterator<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        LinkedListIntoIterator { list: self }
    }
}

impl<'a, T> IntoIterator for &'a LinkedList<T> {
    type Item = &'a T;
    type IntoIter = LinkedListIterator<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Positional equality: same length, equal elements at every position.
///
/// This mirrors [`Collection::equals`] but uses `T`'s native comparison so
/// the list can participate in `assert_eq!` and friends.
impl<T: PartialEq> PartialEq for LinkedList<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.length != other.length {
            return false;
        }
        self.iter().zip(other.iter()).all(|(a, b)| a == b)
    }
}

impl<T: Eq> Eq for LinkedList<T> {}

impl<T: Hash> Hash for LinkedList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Length first, so lists that are prefixes of one another diverge.
        self.length.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.iter()).finish()
    }
}

impl<T: fmt::Display> fmt::Display for LinkedList<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// The equality strategy shares its comparator through an `Rc`, so the
// list stays on the thread that created it.
static_assertions::assert_not_impl_any!(LinkedList<i32>: Send, Sync);
static_assertions::assert_not_impl_any!(LinkedList<String>: Send, Sync);

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for LinkedList<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut sequence = serializer.serialize_seq(Some(self.length))?;
        for element in self {
            sequence.serialize_element(element)?;
        }
        sequence.end()
    }
}

#[cfg(feature = "serde")]
struct LinkedListVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for LinkedListVisitor<T>
where
    T: serde::Deserialize<'de> + PartialEq + 'static,
{
    type Value = LinkedList<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a sequence of elements")
    }

    fn visit_seq<A>(self, mut sequence: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut list = LinkedList::new();
        while let Some(element) = sequence.next_element()? {
            list.add(std::iter::once(element));
        }
        Ok(list)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for LinkedList<T>
where
    T: serde::Deserialize<'de> + PartialEq + 'static,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(LinkedListVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
