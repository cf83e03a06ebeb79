use alloc::collections::VecDeque;
use alloc::vec::Vec;
use core::fmt;
use core::sync::atomic::{AtomicU32, Ordering};

use log::{debug, trace};

use crate::error::ListError;

use super::iter::{IntoIter, Iter, IterMut};
use super::node::{Entry, NodeHandle, Slot};

static NEXT_LIST_ID: AtomicU32 = AtomicU32::new(0);

fn next_list_id() -> u32 {
    NEXT_LIST_ID.fetch_add(1, Ordering::Relaxed)
}

/// A doubly linked list that recycles its nodes.
///
/// Removed nodes are not freed. Their value is dropped and the empty container
/// goes to a FIFO free list, from which the next insertion takes it. Once the
/// list has seen its peak size, adding and removing elements performs no
/// allocation.
///
/// Nodes are addressed with [`NodeHandle`]s, which give O(1) access, removal
/// and insertion next to a known node. Every handle-taking operation checks
/// that the handle was issued by this list and still names a live node, and
/// returns a [`ListError`] otherwise, in every build configuration.
///
/// Each list draws an identity from a process-wide counter at construction
/// and stamps it into its handles. The counter wraps after `u32::MAX` lists.
///
/// # Iteration
///
/// [`iter`](Self::iter) returns a borrowing iterator that lives on the stack,
/// so starting an iteration never allocates. Each call starts over at the
/// head. The list cannot be modified while an iterator is alive.
pub struct ReusableLinkedList<T> {
    id: u32,
    entries: Vec<Entry<T>>,
    cached: VecDeque<u32>,
    vacant: Vec<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
    constructed: usize,
    /// First generation handed to storage pushed after a truncation, so old
    /// handles to truncated slots never match the new occupant.
    generation_floor: u32,
}

impl<T> ReusableLinkedList<T> {
    /// Creates an empty list with no cached nodes.
    pub fn new() -> Self {
        Self {
            id: next_list_id(),
            entries: Vec::new(),
            cached: VecDeque::new(),
            vacant: Vec::new(),
            head: None,
            tail: None,
            len: 0,
            constructed: 0,
            generation_floor: 0,
        }
    }

    /// Creates an empty list with `capacity` nodes already constructed and
    /// waiting in the free list.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` exceeds `u32::MAX`.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut list = Self {
            entries: Vec::with_capacity(capacity),
            cached: VecDeque::with_capacity(capacity),
            ..Self::new()
        };
        for _ in 0..capacity {
            let index = list.construct();
            list.entries[index as usize].slot = Slot::Cached;
            list.cached.push_back(index);
        }
        list
    }

    /// Number of nodes in the active sequence.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of nodes waiting in the free list.
    #[inline]
    pub fn cached_node_count(&self) -> usize {
        self.cached.len()
    }

    /// Number of node containers this list has constructed over its lifetime.
    ///
    /// Reusing a cached node does not count. Constructing into storage given
    /// up by [`clear_cached_nodes`](Self::clear_cached_nodes) does.
    #[inline]
    pub const fn nodes_constructed(&self) -> usize {
        self.constructed
    }

    /// Handle to the head node.
    #[inline]
    pub fn first(&self) -> Option<NodeHandle> {
        self.head.map(|index| self.handle(index))
    }

    /// Handle to the tail node.
    #[inline]
    pub fn last(&self) -> Option<NodeHandle> {
        self.tail.map(|index| self.handle(index))
    }

    pub fn front(&self) -> Option<&T> {
        self.entries[self.head? as usize].value()
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.entries[self.head? as usize].value_mut()
    }

    pub fn back(&self) -> Option<&T> {
        self.entries[self.tail? as usize].value()
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        self.entries[self.tail? as usize].value_mut()
    }

    /// Value of a linked or detached node.
    pub fn get(&self, node: NodeHandle) -> Option<&T> {
        self.entry(node).ok()?.value()
    }

    pub fn get_mut(&mut self, node: NodeHandle) -> Option<&mut T> {
        self.entry(node).ok()?;
        self.entries[node.index as usize].value_mut()
    }

    /// Handle of the node following `node`, if `node` is linked and not the tail.
    pub fn next(&self, node: NodeHandle) -> Option<NodeHandle> {
        let entry = self.entry(node).ok().filter(|entry| entry.is_linked())?;
        entry.next.map(|index| self.handle(index))
    }

    /// Handle of the node preceding `node`, if `node` is linked and not the head.
    pub fn prev(&self, node: NodeHandle) -> Option<NodeHandle> {
        let entry = self.entry(node).ok().filter(|entry| entry.is_linked())?;
        entry.prev.map(|index| self.handle(index))
    }

    /// Whether `node` is currently linked into this list.
    pub fn contains_node(&self, node: NodeHandle) -> bool {
        self.entry(node).is_ok_and(Entry::is_linked)
    }

    /// Adds `value` at the head. O(1).
    ///
    /// # Panics
    ///
    /// Panics if a fresh node is needed and the list already addresses
    /// `u32::MAX` nodes.
    pub fn add_first(&mut self, value: T) -> NodeHandle {
        let index = self.acquire(value);
        self.link(index, None, self.head);
        self.handle(index)
    }

    /// Adds `value` at the tail. O(1).
    ///
    /// # Panics
    ///
    /// Panics if a fresh node is needed and the list already addresses
    /// `u32::MAX` nodes.
    pub fn add_last(&mut self, value: T) -> NodeHandle {
        let index = self.acquire(value);
        self.link(index, self.tail, None);
        self.handle(index)
    }

    /// Adds `value` right before the linked node `node`. O(1).
    ///
    /// Nothing is acquired when `node` is rejected.
    ///
    /// # Panics
    ///
    /// Panics if a fresh node is needed and the list already addresses
    /// `u32::MAX` nodes.
    pub fn add_before(&mut self, node: NodeHandle, value: T) -> Result<NodeHandle, ListError> {
        let anchor = self.linked_index(node)?;
        let index = self.acquire(value);
        self.link(index, self.entries[anchor as usize].prev, Some(anchor));
        Ok(self.handle(index))
    }

    /// Adds `value` right after the linked node `node`. O(1).
    ///
    /// Nothing is acquired when `node` is rejected.
    ///
    /// # Panics
    ///
    /// Panics if a fresh node is needed and the list already addresses
    /// `u32::MAX` nodes.
    pub fn add_after(&mut self, node: NodeHandle, value: T) -> Result<NodeHandle, ListError> {
        let anchor = self.linked_index(node)?;
        let index = self.acquire(value);
        self.link(index, Some(anchor), self.entries[anchor as usize].next);
        Ok(self.handle(index))
    }

    /// Unlinks `node` without recycling it. The node keeps its value and its
    /// handle stays valid, so it can be spliced back in with one of the
    /// `add_*_node` operations or dropped with [`remove_node`](Self::remove_node).
    ///
    /// A detached node can only be spliced back into the list it came from;
    /// handles never move between lists. To move an element to another list,
    /// take its value out with `remove_node` and add it there.
    pub fn detach(&mut self, node: NodeHandle) -> Result<NodeHandle, ListError> {
        let index = self.linked_index(node)?;
        self.unlink(index);
        Ok(node)
    }

    /// Splices the detached `node` in at the head.
    pub fn add_first_node(&mut self, node: NodeHandle) -> Result<(), ListError> {
        let index = self.detached_index(node)?;
        self.link(index, None, self.head);
        Ok(())
    }

    /// Splices the detached `node` in at the tail.
    pub fn add_last_node(&mut self, node: NodeHandle) -> Result<(), ListError> {
        let index = self.detached_index(node)?;
        self.link(index, self.tail, None);
        Ok(())
    }

    /// Splices the detached `new_node` in right before the linked `node`.
    pub fn add_before_node(
        &mut self,
        node: NodeHandle,
        new_node: NodeHandle,
    ) -> Result<(), ListError> {
        let anchor = self.linked_index(node)?;
        let index = self.detached_index(new_node)?;
        self.link(index, self.entries[anchor as usize].prev, Some(anchor));
        Ok(())
    }

    /// Splices the detached `new_node` in right after the linked `node`.
    pub fn add_after_node(
        &mut self,
        node: NodeHandle,
        new_node: NodeHandle,
    ) -> Result<(), ListError> {
        let anchor = self.linked_index(node)?;
        let index = self.detached_index(new_node)?;
        self.link(index, Some(anchor), self.entries[anchor as usize].next);
        Ok(())
    }

    /// Removes `node` and recycles it, returning its value. O(1).
    ///
    /// Detached nodes are accepted too; this is how a detached node that will
    /// not be spliced back is returned to the free list.
    pub fn remove_node(&mut self, node: NodeHandle) -> Result<T, ListError> {
        let entry = self.entry(node)?;
        if entry.is_linked() {
            self.unlink(node.index);
        }
        self.release(node.index).ok_or(ListError::InvalidNode {
            index: node.index,
            generation: node.generation,
        })
    }

    /// Removes the head and recycles its node.
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        let index = self.head.ok_or(ListError::Empty)?;
        self.unlink(index);
        self.release(index).ok_or(ListError::Empty)
    }

    /// Removes the tail and recycles its node.
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        let index = self.tail.ok_or(ListError::Empty)?;
        self.unlink(index);
        self.release(index).ok_or(ListError::Empty)
    }

    /// Recycles every linked node, head to tail.
    ///
    /// Detached nodes are left alone.
    pub fn clear(&mut self) {
        let mut current = self.head.take();
        while let Some(index) = current {
            current = self.entries[index as usize].next;
            self.release(index);
        }
        self.tail = None;
        self.len = 0;
    }

    /// Drops every cached node so its storage can go back to the allocator.
    ///
    /// Later insertions construct fresh nodes. Storage at the end of the arena
    /// is released right away; storage between live nodes is kept vacant and
    /// filled by the next constructions.
    pub fn clear_cached_nodes(&mut self) {
        let dropped = self.cached.len();
        for index in self.cached.drain(..) {
            self.entries[index as usize].slot = Slot::Vacant;
            self.vacant.push(index);
        }

        while let Some(entry) = self.entries.last() {
            if !matches!(entry.slot, Slot::Vacant) {
                break;
            }
            self.generation_floor = self.generation_floor.max(entry.generation.wrapping_add(1));
            self.entries.pop();
        }
        let retained = self.entries.len();
        self.vacant.retain(|&index| (index as usize) < retained);

        self.entries.shrink_to_fit();
        self.cached.shrink_to_fit();
        self.vacant.shrink_to_fit();
        debug!(
            "dropped {dropped} cached nodes, {retained} node slots remain ({} vacant)",
            self.vacant.len()
        );
    }

    /// Returns an iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(&self.entries, self.head, self.tail, self.len)
    }

    /// Returns an iterator over mutable references to the values, head to tail.
    pub fn iter_mut(&mut self) -> IterMut<'_, T> {
        IterMut::new(&mut self.entries, self.head, self.tail, self.len)
    }

    fn handle(&self, index: u32) -> NodeHandle {
        NodeHandle {
            list: self.id,
            index,
            generation: self.entries[index as usize].generation,
        }
    }

    fn entry(&self, node: NodeHandle) -> Result<&Entry<T>, ListError> {
        if node.list != self.id {
            return Err(ListError::ForeignNode { index: node.index });
        }
        self.entries
            .get(node.index as usize)
            .filter(|entry| entry.generation == node.generation && entry.is_owned())
            .ok_or(ListError::InvalidNode {
                index: node.index,
                generation: node.generation,
            })
    }

    fn linked_index(&self, node: NodeHandle) -> Result<u32, ListError> {
        if self.entry(node)?.is_linked() {
            Ok(node.index)
        } else {
            Err(ListError::NotLinked { index: node.index })
        }
    }

    fn detached_index(&self, node: NodeHandle) -> Result<u32, ListError> {
        if self.entry(node)?.is_linked() {
            Err(ListError::NotDetached { index: node.index })
        } else {
            Ok(node.index)
        }
    }

    /// Takes a node from the free list, or constructs one, and stores `value`
    /// in it. The node comes back detached.
    fn acquire(&mut self, value: T) -> u32 {
        let index = match self.cached.pop_front() {
            Some(index) => index,
            None => self.construct(),
        };
        self.entries[index as usize].slot = Slot::Detached(value);
        index
    }

    /// Drops the value of a detached node and queues the node for reuse.
    fn release(&mut self, index: u32) -> Option<T> {
        let value = self.entries[index as usize].recycle();
        self.cached.push_back(index);
        value
    }

    fn construct(&mut self) -> u32 {
        self.constructed += 1;
        if let Some(index) = self.vacant.pop() {
            trace!("constructing node {index} in vacant storage");
            return index;
        }

        assert!(
            self.entries.len() < u32::MAX as usize,
            "ReusableLinkedList cannot address more than u32::MAX nodes"
        );
        let index = self.entries.len() as u32;
        trace!("constructing node {index}");
        self.entries
            .push(Entry::new(self.generation_floor, Slot::Vacant));
        index
    }

    fn link(&mut self, index: u32, prev: Option<u32>, next: Option<u32>) {
        let entry = &mut self.entries[index as usize];
        entry.prev = prev;
        entry.next = next;
        entry.set_linked(true);

        match prev {
            Some(prev) => self.entries[prev as usize].next = Some(index),
            None => self.head = Some(index),
        }
        match next {
            Some(next) => self.entries[next as usize].prev = Some(index),
            None => self.tail = Some(index),
        }
        self.len += 1;
    }

    fn unlink(&mut self, index: u32) {
        let entry = &mut self.entries[index as usize];
        let prev = entry.prev.take();
        let next = entry.next.take();
        entry.set_linked(false);

        match prev {
            Some(prev) => self.entries[prev as usize].next = next,
            None => self.head = next,
        }
        match next {
            Some(next) => self.entries[next as usize].prev = prev,
            None => self.tail = prev,
        }
        self.len -= 1;
    }
}

impl<T: PartialEq> ReusableLinkedList<T> {
    /// Whether any linked node holds a value equal to `value`. O(n).
    pub fn contains(&self, value: &T) -> bool {
        self.find(value).is_some()
    }

    /// Handle of the first linked node equal to `value`. O(n).
    pub fn find(&self, value: &T) -> Option<NodeHandle> {
        let mut current = self.head;
        while let Some(index) = current {
            let entry = &self.entries[index as usize];
            if entry.value() == Some(value) {
                return Some(self.handle(index));
            }
            current = entry.next;
        }
        None
    }

    /// Handle of the last linked node equal to `value`. O(n).
    pub fn find_last(&self, value: &T) -> Option<NodeHandle> {
        let mut current = self.tail;
        while let Some(index) = current {
            let entry = &self.entries[index as usize];
            if entry.value() == Some(value) {
                return Some(self.handle(index));
            }
            current = entry.prev;
        }
        None
    }

    /// Removes the first node equal to `value` and recycles it. O(n).
    ///
    /// Returns `false` when no node matches.
    pub fn remove(&mut self, value: &T) -> bool {
        match self.find(value) {
            Some(node) => self.remove_node(node).is_ok(),
            None => false,
        }
    }
}

impl<T: Clone> ReusableLinkedList<T> {
    /// Copies the values into a new vector, head to tail.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }
}

impl<T: Clone> Clone for ReusableLinkedList<T> {
    /// Copies the sequence and the free list. The copy is a new list with its
    /// own identity, so handles of `self` are rejected by it.
    fn clone(&self) -> Self {
        Self {
            id: next_list_id(),
            entries: self.entries.clone(),
            cached: self.cached.clone(),
            vacant: self.vacant.clone(),
            head: self.head,
            tail: self.tail,
            len: self.len,
            constructed: self.constructed,
            generation_floor: self.generation_floor,
        }
    }
}

impl<T> Default for ReusableLinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ReusableLinkedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for ReusableLinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.add_last(value);
        }
    }
}

impl<T> FromIterator<T> for ReusableLinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a ReusableLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut ReusableLinkedList<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T> IntoIterator for ReusableLinkedList<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}
