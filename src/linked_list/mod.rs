//! Linked lists that recycle their node storage.
//!
//! A list owns its nodes in an arena and keeps released nodes in a free list,
//! so a list that has reached its working size stops allocating.
//!
//! # Examples
//!
//! ```
//! use recycle_collections::linked_list::reusable::ReusableLinkedList;
//!
//! let mut list = ReusableLinkedList::new();
//! list.add_last(1);
//! list.add_last(2);
//! list.add_last(3);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
//!
//! list.remove_first().unwrap();
//! assert_eq!(list.len(), 2);
//! assert_eq!(list.cached_node_count(), 1);
//!
//! // The freed node is handed out again instead of allocating a new one.
//! let constructed = list.nodes_constructed();
//! list.add_first(9);
//! assert_eq!(list.nodes_constructed(), constructed);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![9, 2, 3]);
//! ```
pub mod reusable;
