use core::iter::FusedIterator;

use super::node::Node;

/// An iterator over the values of a linked list, head to tail.
pub struct Iter<'a> {
    current: Option<&'a Node>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    /// Creates a new iterator starting at `head`.
    ///
    /// `remaining` must be the number of nodes reachable from `head`.
    pub(crate) fn new(head: Option<&'a Node>, remaining: usize) -> Self {
        Self { current: head, remaining }
    }
}

impl Iterator for Iter<'_> {
    type Item = i32;

    fn next(&mut self) -> Option<Self::Item> {
        self.current.map(|node| {
            self.current = node.next.as_deref();
            self.remaining -= 1;
            node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl FusedIterator for Iter<'_> {}

impl Clone for Iter<'_> {
    fn clone(&self) -> Self {
        Self {
            current: self.current,
            remaining: self.remaining,
        }
    }
}
