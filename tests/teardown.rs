use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use intlist::LinkedList;

/// Counts allocations shaped like a list node while tracking is on.
struct CountingAlloc;

static TRACKING: AtomicBool = AtomicBool::new(false);
static ALLOCATED: AtomicUsize = AtomicUsize::new(0);
static FREED: AtomicUsize = AtomicUsize::new(0);

fn is_node(layout: Layout) -> bool {
    layout == Layout::new::<(i32, Option<Box<i32>>)>()
}

unsafe impl GlobalAlloc for CountingAlloc {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        if TRACKING.load(Ordering::Relaxed) && is_node(layout) {
            ALLOCATED.fetch_add(1, Ordering::Relaxed);
        }
        unsafe { System.alloc(layout) }
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        if TRACKING.load(Ordering::Relaxed) && is_node(layout) {
            FREED.fetch_add(1, Ordering::Relaxed);
        }
        unsafe { System.dealloc(ptr, layout) }
    }
}

#[global_allocator]
static GLOBAL: CountingAlloc = CountingAlloc;

fn counts() -> (usize, usize) {
    (
        ALLOCATED.load(Ordering::Relaxed),
        FREED.load(Ordering::Relaxed),
    )
}

// A single test keeps the counters free of interference from parallel tests.
#[test]
fn test_node_lifetimes() {
    const LEN: usize = 10_000;

    TRACKING.store(true, Ordering::Relaxed);

    let mut list = LinkedList::new();
    for i in 0..LEN as i32 {
        list.prepend(i);
    }
    assert_eq!(counts(), (LEN, 0));

    // Structural operations move nodes without allocating or freeing
    let tail = list.split_at(LEN / 2 - 1).unwrap();
    let mut other = LinkedList::new();
    other.merge(tail);
    list.interleave(other);
    list.reverse();
    list.rotate_right(LEN / 3);
    assert_eq!(counts(), (LEN, 0));
    assert_eq!(list.len(), LEN);

    // Deleting releases exactly one node
    list.delete_at(LEN / 2).unwrap();
    assert_eq!(counts(), (LEN, 1));

    drop(list);
    assert_eq!(counts(), (LEN, LEN));

    TRACKING.store(false, Ordering::Relaxed);
}
