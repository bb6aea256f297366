use core::mem;

use crossbeam_utils::CachePadded;
use spin::RwLock;
use spin::rwlock::RwLockWriteGuard;

use super::error::ListError;
use super::list::LinkedList;

type WritePair<'a> = (
    RwLockWriteGuard<'a, LinkedList>,
    RwLockWriteGuard<'a, LinkedList>,
);

/// A linked list behind a spin-based read-write lock.
///
/// Operations that move nodes between two locked lists take both write
/// locks in address order, so opposite calls on the same pair never
/// deadlock.
pub struct LockedList {
    inner: CachePadded<RwLock<LinkedList>>,
}

impl LockedList {
    /// Creates a new, empty locked list.
    pub const fn new() -> Self {
        Self::from_list(LinkedList::new())
    }

    /// Wrap an existing list.
    pub const fn from_list(list: LinkedList) -> Self {
        Self {
            inner: CachePadded::new(RwLock::new(list)),
        }
    }

    /// Unwrap the list.
    pub fn into_inner(self) -> LinkedList {
        CachePadded::into_inner(self.inner).into_inner()
    }

    /// Run `f` with shared access to the list.
    pub fn read<R>(&self, f: impl FnOnce(&LinkedList) -> R) -> R {
        f(&*self.inner.read())
    }

    /// Run `f` with exclusive access to the list.
    pub fn write<R>(&self, f: impl FnOnce(&mut LinkedList) -> R) -> R {
        f(&mut *self.inner.write())
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    pub fn append(&self, value: i32) {
        self.inner.write().append(value);
    }

    pub fn prepend(&self, value: i32) {
        self.inner.write().prepend(value);
    }

    pub fn insert_at(&self, index: usize, value: i32) -> Result<(), ListError> {
        self.inner.write().insert_at(index, value)
    }

    pub fn delete_at(&self, index: usize) -> Result<i32, ListError> {
        self.inner.write().delete_at(index)
    }

    pub fn index_of(&self, value: i32) -> Option<usize> {
        self.inner.read().index_of(value)
    }

    pub fn checked_middle(&self) -> Result<i32, ListError> {
        self.inner.read().checked_middle()
    }

    pub fn reverse(&self) {
        self.inner.write().reverse();
    }

    pub fn rotate_right(&self, k: usize) {
        self.inner.write().rotate_right(k);
    }

    /// Swap the contents out for an empty list.
    pub fn take(&self) -> LinkedList {
        mem::take(&mut *self.inner.write())
    }

    /// Move every node of `other` onto the end of `self`, leaving `other`
    /// empty. Merging a list into itself does nothing.
    pub fn merge_from(&self, other: &LockedList) {
        if let Some((mut mine, mut theirs)) = self.lock_pair(other) {
            let donor = mem::take(&mut *theirs);
            mine.merge(donor);
        }
    }

    /// Interleave the nodes of `other` into `self`, leaving `other` empty.
    /// Interleaving a list with itself does nothing.
    pub fn interleave_from(&self, other: &LockedList) {
        if let Some((mut mine, mut theirs)) = self.lock_pair(other) {
            let donor = mem::take(&mut *theirs);
            mine.interleave(donor);
        }
    }

    /// Move every node after `index` into `dest`.
    ///
    /// `dest` must be empty; its nodes are never overwritten.
    pub fn split_off_into(&self, index: usize, dest: &LockedList) -> Result<(), ListError> {
        let Some((mut mine, mut target)) = self.lock_pair(dest) else {
            let list = self.inner.read();
            return Err(if index >= list.len() {
                ListError::IndexOutOfBounds {
                    index,
                    len: list.len(),
                }
            } else {
                ListError::DestinationNotEmpty
            });
        };

        if index >= mine.len() {
            return Err(ListError::IndexOutOfBounds {
                index,
                len: mine.len(),
            });
        }
        if !target.is_empty() {
            return Err(ListError::DestinationNotEmpty);
        }
        *target = mine.split_at(index)?;
        Ok(())
    }

    /// Lock `self` and `other` for writing, lower address first.
    ///
    /// Returns `None` when both refer to the same list.
    fn lock_pair<'a>(&'a self, other: &'a LockedList) -> Option<WritePair<'a>> {
        let this = self as *const Self;
        let that = other as *const Self;
        if this == that {
            return None;
        }

        if this < that {
            let mine = self.inner.write();
            let theirs = other.inner.write();
            Some((mine, theirs))
        } else {
            let theirs = other.inner.write();
            let mine = self.inner.write();
            Some((mine, theirs))
        }
    }
}

impl Default for LockedList {
    fn default() -> Self {
        Self::new()
    }
}

impl From<LinkedList> for LockedList {
    fn from(list: LinkedList) -> Self {
        Self::from_list(list)
    }
}
