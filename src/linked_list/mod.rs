//! An owning singly linked list of `i32` values.
//!
//! Every node is exclusively owned by the link that points at it, so the
//! structural operations (splitting, merging, interleaving, rotating) only
//! move boxes around and never copy or share a node between two lists.
//!
//! # Examples
//!
//! ```
//! use intlist::linked_list::list::LinkedList;
//!
//! let mut list = LinkedList::new();
//! list.insert_at(0, 10).unwrap();
//! list.insert_at(1, 20).unwrap();
//! list.insert_at(2, 30).unwrap();
//! list.insert_at(1, 15).unwrap();
//! assert_eq!(list.to_string(), "10 -> 15 -> 20 -> 30 -> end");
//!
//! assert_eq!(list.delete_at(1), Ok(15));
//! list.append(40);
//! list.prepend(5);
//! list.reverse();
//! assert_eq!(list.to_string(), "40 -> 30 -> 20 -> 10 -> 5 -> end");
//!
//! list.rotate_right(2);
//! assert_eq!(list.to_string(), "10 -> 5 -> 40 -> 30 -> 20 -> end");
//! assert_eq!(list.middle(), 40);
//! assert_eq!(list.index_of(20), Some(4));
//!
//! let second = list.split_at(2).unwrap();
//! assert_eq!(list.to_string(), "10 -> 5 -> 40 -> end");
//! assert_eq!(second.to_string(), "30 -> 20 -> end");
//!
//! list.merge([50, 60, 70].into_iter().collect());
//! list.interleave([100, 200].into_iter().collect());
//! assert_eq!(
//!     list.to_string(),
//!     "10 -> 100 -> 5 -> 200 -> 40 -> 50 -> 60 -> 70 -> end"
//! );
//! ```

pub mod error;
pub mod iter;
pub mod list;
pub mod locked;

mod display;
mod node;

#[cfg(test)]
mod tests;
