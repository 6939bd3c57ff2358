//! # corral
//!
//! Capability-oriented collection traits, pluggable equality, and a
//! sentinel-ring linked list.
//!
//! ## Overview
//!
//! Containers in this crate are defined by the capability sets they
//! satisfy rather than by their concrete shape:
//!
//! - **[`Collection`](capability::Collection)**: the base contract. A
//!   concrete container supplies a handful of primitives (iterate, add,
//!   clear, predicate removal, size, an equality strategy, spawn-empty);
//!   every derived operation (`add_all`, `contains_all`, `equals`,
//!   `retain_all`, and friends) comes from shared default method bodies.
//! - **[`List`](capability::List)**: index-addressed access on top.
//! - **[`Queue`](capability::Queue)**: the FIFO view, with fail-soft
//!   (`peek`/`poll`) and fail-hard (`element`/`fetch`) accessor pairs.
//!
//! One concrete container implements all three at once:
//! [`LinkedList`](container::LinkedList), a circular doubly-linked list
//! anchored at a permanent sentinel and backed by an index arena, with no
//! raw pointers, no `unsafe`.
//!
//! Element types do not need [`PartialEq`]: every container carries an
//! [`Equality`](equality::Equality) strategy resolved at construction,
//! and all value comparison routes through it.
//!
//! ## Example
//!
//! ```rust
//! use corral::prelude::*;
//!
//! let mut list = LinkedList::from_slice(&[1, 3, 2, 4]);
//!
//! // Index-addressed access through the List capability.
//! assert_eq!(list.get(2), Ok(&2));
//!
//! // FIFO access through the Queue capability, off the same ring.
//! assert_eq!(list.poll(), 1);
//!
//! // Set algebra from the derived Collection layer.
//! let keep = LinkedList::from_slice(&[2, 3]);
//! list.retain_all(&keep);
//! assert_eq!(list.to_vec(), vec![3, 2]);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for
//!   [`LinkedList`](container::LinkedList) as an ordered sequence.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the capability traits, the concrete containers, and the
/// equality strategy.
///
/// # Usage
///
/// ```rust
/// use corral::prelude::*;
/// ```
pub mod prelude {
    pub use crate::capability::Collection;
    pub use crate::capability::List;
    pub use crate::capability::Queue;
    pub use crate::capability::filter;
    pub use crate::container::Bounded;
    pub use crate::container::LinkedList;
    pub use crate::equality::Equality;
}

pub mod capability;
pub mod container;
pub mod equality;
pub mod error;
