/// A handle to a node owned by a [`ReusableLinkedList`](super::ReusableLinkedList).
///
/// Handles are plain indices tagged with a generation. Releasing a node bumps
/// its generation, so a handle kept past the release of its node is rejected
/// by every operation instead of aliasing whatever value reuses the slot.
///
/// A handle stays valid while its node is linked into the list or detached
/// from it with [`detach`](super::ReusableLinkedList::detach). Handles also
/// carry the identity of the list that issued them; any other list, clones
/// included, rejects them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    pub(crate) list: u32,
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl NodeHandle {
    /// Slot of the node in the list's arena. Stable across reuse.
    #[inline]
    pub const fn index(&self) -> u32 {
        self.index
    }
}

/// What a slot of the arena currently holds.
#[derive(Debug, Clone)]
pub(crate) enum Slot<T> {
    /// Part of the active sequence.
    Linked(T),
    /// Owned by the list but unlinked, waiting to be spliced back in.
    Detached(T),
    /// In the free list. The value has been dropped.
    Cached,
    /// Storage given up by `clear_cached_nodes`. Reusing it is a fresh construction.
    Vacant,
}

/// A node container. Its index never changes, only its slot and links do.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub(crate) generation: u32,
    pub(crate) prev: Option<u32>,
    pub(crate) next: Option<u32>,
    pub(crate) slot: Slot<T>,
}

impl<T> Entry<T> {
    pub(crate) const fn new(generation: u32, slot: Slot<T>) -> Self {
        Self {
            generation,
            prev: None,
            next: None,
            slot,
        }
    }

    #[inline]
    pub(crate) const fn is_linked(&self) -> bool {
        matches!(self.slot, Slot::Linked(_))
    }

    #[inline]
    pub(crate) const fn is_owned(&self) -> bool {
        matches!(self.slot, Slot::Linked(_) | Slot::Detached(_))
    }

    #[inline]
    pub(crate) fn value(&self) -> Option<&T> {
        match &self.slot {
            Slot::Linked(value) | Slot::Detached(value) => Some(value),
            Slot::Cached | Slot::Vacant => None,
        }
    }

    #[inline]
    pub(crate) fn value_mut(&mut self) -> Option<&mut T> {
        match &mut self.slot {
            Slot::Linked(value) | Slot::Detached(value) => Some(value),
            Slot::Cached | Slot::Vacant => None,
        }
    }

    /// Moves the value between the linked and detached states.
    pub(crate) fn set_linked(&mut self, linked: bool) {
        self.slot = match (core::mem::replace(&mut self.slot, Slot::Cached), linked) {
            (Slot::Linked(value) | Slot::Detached(value), true) => Slot::Linked(value),
            (Slot::Linked(value) | Slot::Detached(value), false) => Slot::Detached(value),
            (other, _) => other,
        };
    }

    /// Drops the links and hands the value back, leaving the slot cached.
    pub(crate) fn recycle(&mut self) -> Option<T> {
        self.generation = self.generation.wrapping_add(1);
        self.prev = None;
        self.next = None;
        match core::mem::replace(&mut self.slot, Slot::Cached) {
            Slot::Linked(value) | Slot::Detached(value) => Some(value),
            Slot::Cached | Slot::Vacant => None,
        }
    }
}
