//! The base `Collection` capability and its derived-operation layer.
//!
//! `Collection` splits into two method groups:
//!
//! - **Required primitives** a concrete container must supply from its own
//!   storage: [`iter`](Collection::iter), [`add`](Collection::add),
//!   [`clear`](Collection::clear), [`remove_if`](Collection::remove_if),
//!   [`len`](Collection::len), [`equality`](Collection::equality), and
//!   [`new_empty`](Collection::new_empty).
//! - **Derived operations** with default bodies expressed only in terms of
//!   the primitives. A container never needs to reimplement them, and every
//!   container kind gets identical semantics.
//!
//! Containers must supply the primitives directly from their own storage
//! rather than through any derived operation, so the two layers can never
//! recurse into each other.
//!
//! # Consistency properties
//!
//! For any conforming container:
//!
//! ```text
//! c.is_empty()           == (c.len() == 0)
//! c.to_vec().len()       == c.len()
//! c.equals(&c)           == true
//! c.contains_all(&other) == other.iter().all(|e| c.contains(e))
//! ```

use crate::equality::Equality;

/// The contract every container satisfies.
///
/// Elements are compared exclusively through the container's
/// [`Equality`] strategy; the element type itself does not need to
/// implement [`PartialEq`].
///
/// # Iteration and mutation
///
/// Iterators borrow the container, so mutating a container while iterating
/// it does not compile. (The borrow checker enforces statically what would
/// otherwise have to be documented as undefined behavior.)
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut list = LinkedList::from_slice(&[1, 3, 2, 4]);
/// assert_eq!(list.len(), 4);
/// assert!(list.contains(&3));
///
/// let keep: LinkedList<i32> = LinkedList::from_slice(&[2, 3]);
/// list.retain_all(&keep);
/// assert_eq!(list.to_vec(), vec![3, 2]);
/// ```
pub trait Collection<T> {
    /// The borrowing iterator this container hands out.
    type Iter<'a>: Iterator<Item = &'a T>
    where
        Self: 'a,
        T: 'a;

    // =========================================================================
    // Required primitives
    // =========================================================================

    /// Returns an iterator over the elements in iteration order.
    fn iter(&self) -> Self::Iter<'_>;

    /// Appends every element of `elements`, in order.
    ///
    /// Returns `true` if the container changed, which for an unbounded
    /// container means the batch was non-empty.
    fn add<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>;

    /// Removes every element.
    fn clear(&mut self);

    /// Removes every element satisfying `predicate`, in a single pass.
    ///
    /// Returns `true` if anything was removed.
    fn remove_if<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool;

    /// Returns the number of elements.
    fn len(&self) -> usize;

    /// The equality strategy this container was constructed with.
    ///
    /// Every derived operation that compares values routes through this
    /// strategy, never through `PartialEq` directly.
    fn equality(&self) -> &Equality<T>;

    /// Constructs a new empty container of the same kind, inheriting the
    /// equality strategy (and any other construction-time configuration).
    fn new_empty(&self) -> Self
    where
        Self: Sized;

    // =========================================================================
    // Derived operations
    // =========================================================================

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether any element equals `element` under this container's
    /// equality strategy. Short-circuits on the first match.
    fn contains(&self, element: &T) -> bool {
        let equality = self.equality();
        self.iter()
            .any(|candidate| equality.equals(candidate, element))
    }

    /// Adds every element of `other` to `self`, one by one.
    ///
    /// Returns `true` if any addition changed `self`.
    fn add_all<C>(&mut self, other: &C) -> bool
    where
        T: Clone,
        C: Collection<T>,
    {
        let mut changed = false;
        for element in other.iter() {
            changed = self.add(std::iter::once(element.clone())) || changed;
        }
        changed
    }

    /// Whether every element of `other` is contained in `self`.
    fn contains_all<C>(&self, other: &C) -> bool
    where
        C: Collection<T>,
    {
        other.iter().all(|element| self.contains(element))
    }

    /// Positional, order-sensitive equality with another container.
    ///
    /// Sizes are compared first as a cheap rejection, then both iterators
    /// are walked in lock-step and every corresponding pair must be equal
    /// under `self`'s equality strategy. Two containers holding the same
    /// elements in different order are *not* equal; use
    /// [`contains_all`](Collection::contains_all) in both directions for
    /// an order-insensitive check.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::prelude::*;
    ///
    /// let ordered = LinkedList::from_slice(&[1, 2, 3]);
    /// let shuffled = LinkedList::from_slice(&[3, 2, 1]);
    /// assert!(!ordered.equals(&shuffled));
    /// assert!(ordered.contains_all(&shuffled));
    /// assert!(shuffled.contains_all(&ordered));
    /// ```
    fn equals<C>(&self, other: &C) -> bool
    where
        C: Collection<T>,
    {
        if self.len() != other.len() {
            return false;
        }
        let equality = self.equality();
        self.iter()
            .zip(other.iter())
            .all(|(left, right)| equality.equals(left, right))
    }

    /// Removes at most one occurrence of each requested value, in
    /// iteration order.
    ///
    /// Returns `true` if any removal occurred. See
    /// [`remove_all_of`](Collection::remove_all_of) for the
    /// every-occurrence variant.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::prelude::*;
    ///
    /// let mut list = LinkedList::from_slice(&[1, 2, 3, 2]);
    /// assert!(list.remove(&[2]));
    /// assert_eq!(list.to_vec(), vec![1, 3, 2]);
    /// ```
    fn remove(&mut self, targets: &[T]) -> bool {
        let equality = self.equality().clone();
        let mut changed = false;
        for target in targets {
            let mut removed = false;
            let removed_this_target = self.remove_if(|element| {
                if removed {
                    return false;
                }
                removed = equality.equals(element, target);
                removed
            });
            changed = removed_this_target || changed;
        }
        changed
    }

    /// Removes every occurrence of each requested value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::prelude::*;
    ///
    /// let mut list = LinkedList::from_slice(&[1, 2, 3, 2]);
    /// assert!(list.remove_all_of(&[2]));
    /// assert_eq!(list.to_vec(), vec![1, 3]);
    /// ```
    fn remove_all_of(&mut self, targets: &[T]) -> bool {
        let equality = self.equality().clone();
        let mut changed = false;
        for target in targets {
            let removed_this_target = self.remove_if(|element| equality.equals(element, target));
            changed = removed_this_target || changed;
        }
        changed
    }

    /// Removes one occurrence of every element produced by `other`'s
    /// iterator (single-occurrence semantics, as [`remove`](Collection::remove)).
    ///
    /// Returns `true` if anything changed.
    fn remove_all<C>(&mut self, other: &C) -> bool
    where
        T: Clone,
        C: Collection<T>,
    {
        let targets: Vec<T> = other.iter().cloned().collect();
        self.remove(&targets)
    }

    /// Keeps only elements contained in `other`, preserving their order.
    ///
    /// Equivalent to `remove_if(|e| !other.contains(e))`; containment is
    /// decided by `other`'s equality strategy.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::prelude::*;
    ///
    /// let mut list = LinkedList::from_slice(&[1, 3, 2, 4]);
    /// let keep = LinkedList::from_slice(&[2, 3]);
    /// assert!(list.retain_all(&keep));
    /// assert_eq!(list.to_vec(), vec![3, 2]);
    /// ```
    fn retain_all<C>(&mut self, other: &C) -> bool
    where
        C: Collection<T>,
    {
        self.remove_if(|element| !other.contains(element))
    }

    /// Materializes the elements into a `Vec`, in iteration order.
    fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

/// Builds a new container of the same kind as `source`, keeping only the
/// elements `predicate` accepts. The source is never mutated.
///
/// The result is spawned through
/// [`Collection::new_empty`], so it inherits the source's equality
/// strategy and any other construction-time configuration.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let source = LinkedList::from_slice(&[1, 2, 3, 4, 5]);
/// let even: LinkedList<i32> = filter(&source, |value| value % 2 == 0);
/// assert_eq!(even.to_vec(), vec![2, 4]);
/// assert_eq!(source.len(), 5);
/// ```
pub fn filter<T, C, P>(source: &C, mut predicate: P) -> C
where
    T: Clone,
    C: Collection<T>,
    P: FnMut(&T) -> bool,
{
    let mut result = source.new_empty();
    for element in source.iter() {
        if predicate(element) {
            result.add(std::iter::once(element.clone()));
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::LinkedList;
    use rstest::rstest;

    fn fixture() -> LinkedList<i32> {
        LinkedList::from_slice(&[1, 3, 2, 4])
    }

    // =========================================================================
    // Derived-layer behavior (through the linked list)
    // =========================================================================

    #[rstest]
    fn test_is_empty_tracks_len() {
        let mut list: LinkedList<i32> = LinkedList::new();
        assert!(list.is_empty());
        list.add([1]);
        assert!(!list.is_empty());
    }

    #[rstest]
    fn test_contains_short_circuits_on_match() {
        let list = fixture();
        assert!(list.contains(&3));
        assert!(!list.contains(&9));
    }

    #[rstest]
    fn test_add_all_reports_change() {
        let mut target: LinkedList<i32> = LinkedList::new();
        let source = fixture();
        assert!(target.add_all(&source));
        assert_eq!(target.to_vec(), vec![1, 3, 2, 4]);

        let empty: LinkedList<i32> = LinkedList::new();
        assert!(!target.add_all(&empty));
    }

    #[rstest]
    fn test_contains_all_both_directions() {
        let list = fixture();
        let shuffled = LinkedList::from_slice(&[4, 2, 3, 1]);
        assert!(list.contains_all(&shuffled));
        assert!(shuffled.contains_all(&list));
    }

    #[rstest]
    fn test_equals_is_order_sensitive() {
        let list = fixture();
        let same = LinkedList::from_slice(&[1, 3, 2, 4]);
        let shuffled = LinkedList::from_slice(&[4, 2, 3, 1]);
        assert!(list.equals(&same));
        assert!(!list.equals(&shuffled));
    }

    #[rstest]
    fn test_equals_rejects_on_size_first() {
        let list = fixture();
        let shorter = LinkedList::from_slice(&[1, 3, 2]);
        assert!(!list.equals(&shorter));
    }

    #[rstest]
    fn test_remove_takes_first_occurrence_only() {
        let mut list = LinkedList::from_slice(&[1, 2, 3, 2]);
        assert!(list.remove(&[2]));
        assert_eq!(list.to_vec(), vec![1, 3, 2]);
    }

    #[rstest]
    fn test_remove_all_of_takes_every_occurrence() {
        let mut list = LinkedList::from_slice(&[1, 2, 3, 2]);
        assert!(list.remove_all_of(&[2]));
        assert_eq!(list.to_vec(), vec![1, 3]);
    }

    #[rstest]
    fn test_remove_missing_value_reports_no_change() {
        let mut list = fixture();
        assert!(!list.remove(&[9]));
        assert_eq!(list.to_vec(), vec![1, 3, 2, 4]);
    }

    #[rstest]
    fn test_remove_all_uses_single_occurrence_semantics() {
        let mut list = LinkedList::from_slice(&[1, 2, 2, 3]);
        let targets = LinkedList::from_slice(&[2, 3]);
        assert!(list.remove_all(&targets));
        assert_eq!(list.to_vec(), vec![1, 2]);
    }

    #[rstest]
    fn test_retain_all_preserves_order() {
        let mut list = fixture();
        let keep = LinkedList::from_slice(&[2, 3]);
        assert!(list.retain_all(&keep));
        assert_eq!(list.to_vec(), vec![3, 2]);
    }

    #[rstest]
    fn test_retain_all_with_superset_changes_nothing() {
        let mut list = fixture();
        let keep = LinkedList::from_slice(&[1, 2, 3, 4, 5]);
        assert!(!list.retain_all(&keep));
        assert_eq!(list.len(), 4);
    }

    #[rstest]
    fn test_to_vec_matches_iteration_order() {
        let list = fixture();
        assert_eq!(list.to_vec(), vec![1, 3, 2, 4]);
    }

    // =========================================================================
    // filter
    // =========================================================================

    #[rstest]
    fn test_filter_builds_same_kind_without_mutating_source() {
        let source = fixture();
        let odd: LinkedList<i32> = filter(&source, |value| value % 2 == 1);
        assert_eq!(odd.to_vec(), vec![1, 3]);
        assert_eq!(source.to_vec(), vec![1, 3, 2, 4]);
    }

    #[rstest]
    fn test_filter_inherits_the_equality_strategy() {
        let mut source: LinkedList<String> =
            LinkedList::with_equality(Equality::by(|a: &String, b: &String| {
                a.eq_ignore_ascii_case(b)
            }));
        source.add(["Ring".to_string(), "cursor".to_string()]);

        let filtered = filter(&source, |word| word.len() > 4);
        assert!(filtered.contains(&"CURSOR".to_string()));
    }
}
