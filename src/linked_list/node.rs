use alloc::boxed::Box;

/// An owning link to the rest of a chain.
pub(crate) type Link = Option<Box<Node>>;

/// A node in a singly linked list.
pub(crate) struct Node {
    pub(crate) value: i32,
    pub(crate) next: Link,
}

impl Node {
    #[inline]
    pub(crate) fn boxed(value: i32, next: Link) -> Box<Self> {
        Box::new(Self { value, next })
    }
}

/// Walk `steps` links forward from `link` and return the link found there.
///
/// The caller guarantees the chain holds at least `steps` nodes; the walk
/// stops early at the terminal link otherwise.
pub(crate) fn link_at(mut link: &mut Link, steps: usize) -> &mut Link {
    for _ in 0..steps {
        match link {
            Some(node) => link = &mut node.next,
            None => break,
        }
    }
    link
}

/// Return the terminal (`None`) link of the chain starting at `link`.
pub(crate) fn tail_link(mut link: &mut Link) -> &mut Link {
    while let Some(node) = link {
        link = &mut node.next;
    }
    link
}

/// Release every node of a chain one at a time.
pub(crate) fn release(mut link: Link) -> usize {
    let mut released = 0;
    while let Some(mut node) = link {
        link = node.next.take();
        released += 1;
    }
    released
}
