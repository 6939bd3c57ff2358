//! Capacity bounding for any container.

use crate::capability::{Collection, Queue};
use crate::equality::Equality;
use crate::error::{CollectionEmptyError, CollectionFullError};

/// Wraps a container with a fixed capacity.
///
/// The wrapped container keeps its own semantics; `Bounded` only refuses
/// growth past the capacity. Two behaviors differ from the inner kind:
///
/// - [`Collection::add`] admits only the part of a batch that fits and
///   reports through its `bool` whether anything was added.
/// - [`Queue::push`] is all-or-nothing: a batch that would exceed the
///   capacity is refused with [`CollectionFullError`] and nothing is
///   added.
///
/// # Examples
///
/// ```rust
/// use corral::prelude::*;
///
/// let mut queue = Bounded::new(LinkedList::new(), 2);
/// assert_eq!(queue.push([1, 2]), Ok(true));
/// assert_eq!(
///     queue.push([3]),
///     Err(corral::error::CollectionFullError { capacity: 2 }),
/// );
/// assert_eq!(queue.fetch(), Ok(1));
/// assert_eq!(queue.push([3]), Ok(true));
/// ```
#[derive(Debug, Clone)]
pub struct Bounded<C> {
    inner: C,
    capacity: usize,
}

impl<C> Bounded<C> {
    /// Bounds `inner` at `capacity` elements.
    ///
    /// Elements already in `inner` count against the capacity; an inner
    /// container that is already over it simply refuses all growth.
    #[must_use]
    pub const fn new(inner: C, capacity: usize) -> Self {
        Self { inner, capacity }
    }

    /// The capacity this adapter enforces.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl<T, C> Collection<T> for Bounded<C>
where
    C: Collection<T>,
{
    type Iter<'a>
        = C::Iter<'a>
    where
        Self: 'a,
        T: 'a;

    fn iter(&self) -> Self::Iter<'_> {
        self.inner.iter()
    }

    fn add<I>(&mut self, elements: I) -> bool
    where
        I: IntoIterator<Item = T>,
    {
        let remaining = self.capacity.saturating_sub(self.inner.len());
        self.inner.add(elements.into_iter().take(remaining))
    }

    fn clear(&mut self) {
        self.inner.clear();
    }

    fn remove_if<P>(&mut self, predicate: P) -> bool
    where
        P: FnMut(&T) -> bool,
    {
        self.inner.remove_if(predicate)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn equality(&self) -> &Equality<T> {
        self.inner.equality()
    }

    fn new_empty(&self) -> Self {
        Self {
            inner: self.inner.new_empty(),
            capacity: self.capacity,
        }
    }
}

impl<T, C> Queue<T> for Bounded<C>
where
    C: Queue<T>,
{
    fn fetch(&mut self) -> Result<T, CollectionEmptyError> {
        self.inner.fetch()
    }

    fn push<I>(&mut self, elements: I) -> Result<bool, CollectionFullError>
    where
        I: IntoIterator<Item = T>,
    {
        let batch: Vec<T> = elements.into_iter().collect();
        if self.inner.len() + batch.len() > self.capacity {
            return Err(CollectionFullError {
                capacity: self.capacity,
            });
        }
        Ok(self.inner.add(batch))
    }
}
