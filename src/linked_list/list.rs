use core::mem;

use hashbrown::HashSet;

use super::error::ListError;
use super::iter::Iter;
use super::node::{self, Link, Node};

/// An owning singly linked list of `i32` values.
///
/// The list caches its element count; every operation keeps the count equal
/// to the number of nodes reachable from the head.
pub struct LinkedList {
    head: Link,
    count: usize,
}

impl LinkedList {
    /// Creates a new, empty linked list.
    pub const fn new() -> Self {
        LinkedList {
            head: None,
            count: 0,
        }
    }

    /// Get the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Check if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Get an iterator over the values, head to tail.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.head.as_deref(), self.count)
    }

    /// Get the first value, if any.
    pub fn front(&self) -> Option<i32> {
        self.head.as_ref().map(|node| node.value)
    }

    /// Get the value at `index`, if any.
    pub fn get(&self, index: usize) -> Option<i32> {
        self.iter().nth(index)
    }

    /// Check if any node holds `value`.
    pub fn contains(&self, value: i32) -> bool {
        self.index_of(value).is_some()
    }

    /// Insert `value` so that it becomes the element at `index`.
    ///
    /// `index == len()` appends. Any larger index is rejected and the list
    /// is left unchanged.
    pub fn insert_at(&mut self, index: usize, value: i32) -> Result<(), ListError> {
        if index > self.count {
            return Err(self.out_of_bounds(index));
        }

        let slot = node::link_at(&mut self.head, index);
        let next = slot.take();
        *slot = Some(Node::boxed(value, next));
        self.count += 1;
        Ok(())
    }

    /// Remove the element at `index` and return its value.
    pub fn delete_at(&mut self, index: usize) -> Result<i32, ListError> {
        if index >= self.count {
            return Err(self.out_of_bounds(index));
        }

        let slot = node::link_at(&mut self.head, index);
        match slot.take() {
            Some(mut removed) => {
                *slot = removed.next.take();
                self.count -= 1;
                Ok(removed.value)
            }
            None => Err(ListError::IndexOutOfBounds {
                index,
                len: self.count,
            }),
        }
    }

    /// Push a value to the back of the list. O(n).
    pub fn append(&mut self, value: i32) {
        *node::tail_link(&mut self.head) = Some(Node::boxed(value, None));
        self.count += 1;
    }

    /// Push a value to the front of the list. O(1).
    pub fn prepend(&mut self, value: i32) {
        let next = self.head.take();
        self.head = Some(Node::boxed(value, next));
        self.count += 1;
    }

    /// Pop the first value from the list.
    pub fn pop_front(&mut self) -> Option<i32> {
        self.head.take().map(|mut node| {
            self.head = node.next.take();
            self.count -= 1;
            node.value
        })
    }

    /// Release every node.
    pub fn clear(&mut self) {
        node::release(self.head.take());
        self.count = 0;
    }

    /// Reverse the successor direction of every node in place.
    pub fn reverse(&mut self) {
        let mut reversed: Link = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = mem::replace(&mut node.next, reversed);
            reversed = Some(node);
        }
        self.head = reversed;
    }

    /// Shift every element `k` positions toward the tail, wrapping around.
    ///
    /// The last `k % len()` elements become the first ones, in their original
    /// relative order.
    pub fn rotate_right(&mut self, k: usize) {
        if self.count == 0 {
            return;
        }
        let shift = k % self.count;
        if shift == 0 {
            return;
        }

        // The node at `count - shift - 1` becomes the new tail.
        let mut moved = node::link_at(&mut self.head, self.count - shift).take();
        let rest = self.head.take();
        *node::tail_link(&mut moved) = rest;
        self.head = moved;
    }

    /// Get the middle value, found with a slow/fast pointer walk.
    ///
    /// For an even length this is the second of the two middle elements.
    ///
    /// # Panics
    ///
    /// Panics if the list is empty.
    pub fn middle(&self) -> i32 {
        match self.checked_middle() {
            Ok(value) => value,
            Err(_) => panic!("list is empty"),
        }
    }

    /// Get the middle value, or [`ListError::Empty`] for an empty list.
    pub fn checked_middle(&self) -> Result<i32, ListError> {
        let mut slow = self.head.as_deref().ok_or(ListError::Empty)?;
        let mut fast = Some(slow);

        while let Some(ahead) = fast.and_then(|node| node.next.as_deref()) {
            slow = match slow.next.as_deref() {
                Some(next) => next,
                None => break,
            };
            fast = ahead.next.as_deref();
        }
        Ok(slow.value)
    }

    /// Get the position of the first node holding `value`.
    pub fn index_of(&self, value: i32) -> Option<usize> {
        self.iter().position(|v| v == value)
    }

    /// Detach every node after `index` into a new list.
    ///
    /// The node at `index` becomes the tail of `self`; `split_at(len() - 1)`
    /// returns an empty list.
    pub fn split_at(&mut self, index: usize) -> Result<LinkedList, ListError> {
        if index >= self.count {
            return Err(self.out_of_bounds(index));
        }

        let head = node::link_at(&mut self.head, index + 1).take();
        let count = self.count - index - 1;
        self.count = index + 1;
        Ok(LinkedList { head, count })
    }

    /// Move every node of `other` onto the end of `self`.
    pub fn merge(&mut self, mut other: LinkedList) {
        if other.is_empty() {
            return;
        }

        *node::tail_link(&mut self.head) = other.head.take();
        self.count += mem::take(&mut other.count);
    }

    /// Splice the nodes of `other` between the nodes of `self`, one after
    /// each, until either chain runs out.
    ///
    /// Whatever remains of the longer chain keeps its order at the end.
    pub fn interleave(&mut self, mut other: LinkedList) {
        let added = mem::take(&mut other.count);
        let mut donor = other.head.take();

        let mut cursor = &mut self.head;
        while let Some(mut incoming) = donor.take() {
            let Some(node) = cursor else {
                // `self` ran out first: the rest of `other` goes at the end.
                *cursor = Some(incoming);
                break;
            };
            donor = incoming.next.take();
            incoming.next = node.next.take();
            cursor = &mut node.next.insert(incoming).next;
        }

        self.count += added;
    }

    /// Keep the first occurrence of every value and release the rest.
    ///
    /// Returns the number of released nodes.
    pub fn remove_duplicates(&mut self) -> usize {
        let mut seen = HashSet::with_capacity(self.count);
        let mut released = 0;

        let mut rest = self.head.take();
        let mut cursor = &mut self.head;
        while let Some(mut node) = rest {
            rest = node.next.take();
            if seen.insert(node.value) {
                cursor = &mut cursor.insert(node).next;
            } else {
                released += 1;
            }
        }

        self.count -= released;
        released
    }

    fn out_of_bounds(&self, index: usize) -> ListError {
        ListError::IndexOutOfBounds {
            index,
            len: self.count,
        }
    }
}

impl Default for LinkedList {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for LinkedList {
    fn drop(&mut self) {
        node::release(self.head.take());
    }
}

impl Clone for LinkedList {
    fn clone(&self) -> Self {
        self.iter().collect()
    }
}

impl PartialEq for LinkedList {
    fn eq(&self, other: &Self) -> bool {
        self.count == other.count && self.iter().eq(other.iter())
    }
}

impl Eq for LinkedList {}

impl Extend<i32> for LinkedList {
    fn extend<I: IntoIterator<Item = i32>>(&mut self, iter: I) {
        let mut added = 0;
        let mut cursor = node::tail_link(&mut self.head);
        for value in iter {
            cursor = &mut cursor.insert(Node::boxed(value, None)).next;
            added += 1;
        }
        self.count += added;
    }
}

impl FromIterator<i32> for LinkedList {
    fn from_iter<I: IntoIterator<Item = i32>>(iter: I) -> Self {
        let mut list = LinkedList::new();
        list.extend(iter);
        list
    }
}

impl<'a> IntoIterator for &'a LinkedList {
    type Item = i32;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
