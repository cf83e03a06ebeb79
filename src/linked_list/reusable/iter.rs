use core::iter::FusedIterator;
use core::marker::PhantomData;
use core::ptr::NonNull;

use super::list::ReusableLinkedList;
use super::node::{Entry, Slot};

/// Borrowing iterator over a [`ReusableLinkedList`], head to tail.
///
/// The iterator is a plain value holding two cursors and a count. Creating
/// one allocates nothing, and a new call to
/// [`iter`](ReusableLinkedList::iter) always starts again from the head.
pub struct Iter<'a, T> {
    entries: &'a [Entry<T>],
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(
        entries: &'a [Entry<T>],
        head: Option<u32>,
        tail: Option<u32>,
        len: usize,
    ) -> Self {
        Self {
            entries,
            front: head,
            back: tail,
            remaining: len,
        }
    }
}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entries = self.entries;
        let entry = &entries[self.front? as usize];
        self.front = entry.next;
        self.remaining -= 1;
        match &entry.slot {
            Slot::Linked(value) => Some(value),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entries = self.entries;
        let entry = &entries[self.back? as usize];
        self.back = entry.prev;
        self.remaining -= 1;
        match &entry.slot {
            Slot::Linked(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

/// Mutable iterator over a [`ReusableLinkedList`], head to tail.
pub struct IterMut<'a, T> {
    entries: NonNull<Entry<T>>,
    len: usize,
    front: Option<u32>,
    back: Option<u32>,
    remaining: usize,
    _marker: PhantomData<&'a mut [Entry<T>]>,
}

impl<'a, T> IterMut<'a, T> {
    pub(crate) fn new(
        entries: &'a mut [Entry<T>],
        head: Option<u32>,
        tail: Option<u32>,
        len: usize,
    ) -> Self {
        Self {
            len: entries.len(),
            entries: NonNull::from(entries).cast(),
            front: head,
            back: tail,
            remaining: len,
            _marker: PhantomData,
        }
    }

    /// # Safety
    ///
    /// `index` must be in bounds and must not have been yielded before.
    /// Following the links from both ends and stopping after `remaining`
    /// steps visits every linked node exactly once.
    unsafe fn entry(&mut self, index: u32) -> &'a mut Entry<T> {
        debug_assert!((index as usize) < self.len);
        unsafe { &mut *self.entries.as_ptr().add(index as usize) }
    }
}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = unsafe { self.entry(self.front?) };
        self.front = entry.next;
        self.remaining -= 1;
        match &mut entry.slot {
            Slot::Linked(value) => Some(value),
            _ => None,
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> DoubleEndedIterator for IterMut<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let entry = unsafe { self.entry(self.back?) };
        self.back = entry.prev;
        self.remaining -= 1;
        match &mut entry.slot {
            Slot::Linked(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> ExactSizeIterator for IterMut<'_, T> {}
impl<T> FusedIterator for IterMut<'_, T> {}

/// Owning iterator over a [`ReusableLinkedList`], head to tail.
pub struct IntoIter<T> {
    list: ReusableLinkedList<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(list: ReusableLinkedList<T>) -> Self {
        Self { list }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.list.remove_first().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.list.len(), Some(self.list.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.list.remove_last().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
impl<T> FusedIterator for IntoIter<T> {}
