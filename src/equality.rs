//! Generic equality for container elements.
//!
//! Containers in this crate never assume their element type implements
//! [`PartialEq`]. Instead every container carries an [`Equality`] strategy,
//! resolved once at construction, and routes all value comparison through
//! it. Three strategies exist:
//!
//! - [`Equality::native`]: structural comparison via [`PartialEq`], the
//!   default for all natively comparable element types.
//! - [`Equality::by`]: an explicit compare-for-equality capability,
//!   supplied as a closure, for types that expose no `PartialEq`.
//! - [`Equality::unsupported`]: a marker for genuinely incomparable
//!   types; equality-dependent operations fail fatally at first use.
//!
//! Comparison never mutates either operand.
//!
//! # Examples
//!
//! ```rust
//! use corral::equality::Equality;
//!
//! // A type with no PartialEq implementation.
//! struct Reading {
//!     sensor: u32,
//!     raw: Vec<u8>,
//! }
//!
//! let by_sensor = Equality::by(|a: &Reading, b: &Reading| a.sensor == b.sensor);
//! let left = Reading { sensor: 7, raw: vec![1, 2] };
//! let right = Reading { sensor: 7, raw: vec![3] };
//! assert!(by_sensor.equals(&left, &right));
//! ```

use std::any;
use std::fmt;
use std::rc::Rc;

use crate::error::UnsupportedEqualityError;

/// A comparison strategy for values of type `T`.
///
/// The strategy is resolved when a container is constructed and inherited
/// by every container spawned from it (see
/// [`Collection::new_empty`](crate::capability::Collection::new_empty)).
/// Cloning is cheap: strategies share their comparator.
///
/// # Examples
///
/// ```rust
/// use corral::equality::Equality;
///
/// let native = Equality::<i32>::native();
/// assert!(native.equals(&1, &1));
/// assert!(!native.equals(&1, &2));
/// ```
pub struct Equality<T> {
    comparator: Option<Rc<dyn Fn(&T, &T) -> bool>>,
}

impl<T: PartialEq + 'static> Equality<T> {
    /// Native structural equality via [`PartialEq`].
    ///
    /// Every constructor that requires `T: PartialEq` (such as
    /// [`LinkedList::new`](crate::container::LinkedList::new)) resolves to
    /// this strategy.
    #[must_use]
    pub fn native() -> Self {
        let comparator: Rc<dyn Fn(&T, &T) -> bool> = Rc::new(T::eq);
        Self {
            comparator: Some(comparator),
        }
    }
}

impl<T> Equality<T> {
    /// An explicit compare-for-equality capability.
    ///
    /// Use this for element types that expose no [`PartialEq`], or when a
    /// container should compare by something other than structural
    /// equality.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use corral::equality::Equality;
    ///
    /// let case_insensitive =
    ///     Equality::by(|a: &String, b: &String| a.eq_ignore_ascii_case(b));
    /// assert!(case_insensitive.equals(&"Ring".to_string(), &"ring".to_string()));
    /// ```
    pub fn by<F>(comparator: F) -> Self
    where
        F: Fn(&T, &T) -> bool + 'static,
    {
        let comparator: Rc<dyn Fn(&T, &T) -> bool> = Rc::new(comparator);
        Self {
            comparator: Some(comparator),
        }
    }

    /// The strategy for types that cannot be compared at all.
    ///
    /// Containers built over this strategy still support every operation
    /// that does not compare values (append, clear, iteration, index
    /// access); the equality-dependent ones fail fatally. See
    /// [`Equality::equals`].
    #[must_use]
    pub const fn unsupported() -> Self {
        Self { comparator: None }
    }

    /// Whether this strategy can compare values.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.comparator.is_some()
    }

    /// Compares two values, reporting an unsupported strategy as an error.
    ///
    /// # Errors
    ///
    /// Returns [`UnsupportedEqualityError`] naming the element type when
    /// the strategy is [`Equality::unsupported`].
    pub fn try_equals(&self, left: &T, right: &T) -> Result<bool, UnsupportedEqualityError> {
        self.comparator.as_ref().map_or_else(
            || {
                Err(UnsupportedEqualityError {
                    type_name: any::type_name::<T>(),
                })
            },
            |comparator| Ok(comparator(left, right)),
        )
    }

    /// Compares two values.
    ///
    /// This is the form the containers call. It is total over every
    /// supported strategy and never silently reports `false` for an
    /// unsupported one.
    ///
    /// # Panics
    ///
    /// Panics with the [`UnsupportedEqualityError`] rendering when the
    /// strategy is [`Equality::unsupported`]. Invoking equality on an
    /// incomparable element type is a programming error, not a recoverable
    /// condition; callers that want the error as a value use
    /// [`Equality::try_equals`].
    #[must_use]
    pub fn equals(&self, left: &T, right: &T) -> bool {
        match self.try_equals(left, right) {
            Ok(result) => result,
            Err(error) => panic!("{error}"),
        }
    }
}

impl<T> Clone for Equality<T> {
    fn clone(&self) -> Self {
        Self {
            comparator: self.comparator.clone(),
        }
    }
}

impl<T> fmt::Debug for Equality<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Equality")
            .field("supported", &self.is_supported())
            .finish()
    }
}

impl<T: PartialEq + 'static> Default for Equality<T> {
    fn default() -> Self {
        Self::native()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    struct Opaque {
        id: u32,
    }

    #[rstest]
    fn test_native_matches_partial_eq() {
        let equality = Equality::<i32>::native();
        assert!(equality.equals(&5, &5));
        assert!(!equality.equals(&5, &6));
    }

    #[rstest]
    fn test_by_compares_without_partial_eq() {
        let equality = Equality::by(|a: &Opaque, b: &Opaque| a.id == b.id);
        assert!(equality.equals(&Opaque { id: 1 }, &Opaque { id: 1 }));
        assert!(!equality.equals(&Opaque { id: 1 }, &Opaque { id: 2 }));
    }

    #[rstest]
    fn test_unsupported_try_equals_names_the_type() {
        let equality = Equality::<Opaque>::unsupported();
        let error = equality
            .try_equals(&Opaque { id: 1 }, &Opaque { id: 1 })
            .unwrap_err();
        assert!(error.type_name.contains("Opaque"));
    }

    #[rstest]
    #[should_panic(expected = "neither an equality capability nor native comparison")]
    fn test_unsupported_equals_panics() {
        let equality = Equality::<Opaque>::unsupported();
        equality.equals(&Opaque { id: 1 }, &Opaque { id: 2 });
    }

    #[rstest]
    fn test_clone_shares_the_comparator() {
        let equality = Equality::by(|a: &Opaque, b: &Opaque| a.id == b.id);
        let cloned = equality.clone();
        assert!(cloned.equals(&Opaque { id: 3 }, &Opaque { id: 3 }));
    }

    #[rstest]
    fn test_is_supported() {
        assert!(Equality::<i32>::native().is_supported());
        assert!(!Equality::<i32>::unsupported().is_supported());
    }

    #[rstest]
    fn test_debug_reports_support() {
        let supported = format!("{:?}", Equality::<i32>::native());
        let unsupported = format!("{:?}", Equality::<i32>::unsupported());
        assert!(supported.contains("true"));
        assert!(unsupported.contains("false"));
    }
}
