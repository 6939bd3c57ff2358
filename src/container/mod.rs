//! Concrete containers.
//!
//! - [`LinkedList`]: a circular doubly-linked list anchored at a
//!   sentinel, backed by an index arena. Implements
//!   [`Collection`](crate::capability::Collection),
//!   [`List`](crate::capability::List), and
//!   [`Queue`](crate::capability::Queue) on a single node structure.
//! - [`Bounded`]: a capacity adapter over any container; its queue view
//!   refuses pushes at capacity with
//!   [`CollectionFullError`](crate::error::CollectionFullError).
//!
//! # Examples
//!
//! ```rust
//! use corral::prelude::*;
//!
//! let mut list: LinkedList<i32> = LinkedList::new();
//! list.add([1, 2, 3]);
//! assert_eq!(list.poll(), 1);
//!
//! let mut bounded = Bounded::new(LinkedList::new(), 2);
//! bounded.push([1, 2]).unwrap();
//! assert!(bounded.push([3]).is_err());
//! ```

mod bounded;
mod linked_list;

pub use bounded::Bounded;
pub use linked_list::LinkedList;
pub use linked_list::LinkedListIntoIterator;
pub use linked_list::LinkedListIterator;
