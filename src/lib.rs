//! Allocation-avoiding collections for per-frame loops.
//!
//! - [`linked_list::reusable::ReusableLinkedList`]: a doubly linked list that
//!   keeps released nodes in a free list and hands them out again instead of
//!   going back to the allocator.
//! - [`pool::ObjectPool`]: a queue of pre-built instances produced by a
//!   caller-supplied [`pool::Factory`].
//!
//! Nothing in this crate is synchronized. Every structure is meant to be
//! owned and driven by a single thread.
#![no_std]

extern crate alloc;

pub mod error;
pub mod linked_list;
pub mod pool;

pub use error::{HidingPoolError, ListError};
pub use linked_list::reusable::{NodeHandle, ReusableLinkedList};
pub use pool::{Factory, HideOnCreate, HidingPool, Hide, ObjectPool, PoolConfig, TryFromFn};
