//! Capability sets containers can satisfy.
//!
//! A capability set is a named group of operations, expressed as a trait:
//!
//! - [`Collection`]: the base contract, a handful of required primitives
//!   plus a derived layer of default method bodies (`add_all`,
//!   `contains_all`, `equals`, `retain_all`, ...) implemented purely in
//!   terms of those primitives.
//! - [`List`]: index-addressed access, insertion, and deletion.
//! - [`Queue`]: the FIFO view, with fail-soft (`peek`/`poll`) and
//!   fail-hard (`element`/`fetch`) accessor pairs.
//!
//! Concrete containers live in [`crate::container`]; callers are expected
//! to interact with them through these traits. The derived layer means a
//! new container kind only supplies iteration, insertion, predicate
//! removal, size, and an equality strategy; the set algebra comes for
//! free and behaves identically across kinds.

mod collection;
mod list;
mod queue;

pub use collection::Collection;
pub use collection::filter;
pub use list::List;
pub use queue::Queue;
