use thiserror::Error;

/// Precondition failures reported by [`ReusableLinkedList`].
///
/// Every operation that takes a [`NodeHandle`] or removes from an end checks
/// its precondition in all build configurations and reports it here instead
/// of panicking.
///
/// [`ReusableLinkedList`]: crate::linked_list::reusable::ReusableLinkedList
/// [`NodeHandle`]: crate::linked_list::reusable::NodeHandle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// `remove_first`/`remove_last` was called on a list without active nodes.
    #[error("list is empty")]
    Empty,

    /// The handle was issued by this list but no longer names a live node:
    /// the node was released, or its storage was dropped.
    #[error("node handle {index}#{generation} is stale")]
    InvalidNode { index: u32, generation: u32 },

    /// The handle was issued by another list, including a clone of this one.
    #[error("node handle {index} belongs to another list")]
    ForeignNode { index: u32 },

    /// The anchor or target node is owned by the list but currently detached.
    #[error("node {index} is not linked into the list")]
    NotLinked { index: u32 },

    /// A splice received a node that is still linked into the list.
    #[error("node {index} is still linked; detach it before splicing")]
    NotDetached { index: u32 },
}

/// Misuse reported by [`HidingPool`](crate::pool::HidingPool).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HidingPoolError {
    /// The released instance was not handed out by this pool, or was already
    /// released.
    #[error("instance is not checked out from this pool")]
    NotCheckedOut,
}
