//! # Reusable Linked List
//!
//! A doubly linked list that never gives node storage back to the allocator
//! on its own.
//!
//! ## Core Components
//!
//! - [`list::ReusableLinkedList`]: the list and its free list of cached nodes.
//! - [`node::NodeHandle`]: a generation-checked handle to a node.
//! - [`iter`]: borrowing, mutable and owning iterators.
//!
//! ## Node lifecycle
//!
//! A node is always in exactly one place:
//!
//! - linked into the active sequence,
//! - detached (unlinked with [`ReusableLinkedList::detach`], value kept),
//! - cached in the free list (value dropped), or
//! - vacant, after [`ReusableLinkedList::clear_cached_nodes`].
//!
//! Every removal recycles the node into the free list exactly once, and every
//! insertion of a value takes a node from the free list before constructing a
//! new one.
//!
//! ## Iteration
//!
//! Iterators are stack values borrowed from the list; they never allocate and
//! each call to [`ReusableLinkedList::iter`] restarts from the head. Holding
//! an iterator freezes the list. Interleaving two iterators over the same list
//! is allowed and each of them walks the whole sequence independently.

pub mod iter;
pub mod list;
pub mod node;

pub use list::ReusableLinkedList;
pub use node::NodeHandle;

#[cfg(test)]
mod tests;
